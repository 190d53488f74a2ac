use async_graphql::{ComplexObject, Result, SimpleObject};
use sqlx::{FromRow, PgPool};

use crate::error::{RosterError, RosterResult};
use crate::models::officer::Officer;

/// A course from the fixed Berkeley catalog that an officer can list
/// as experience
#[derive(SimpleObject, FromRow, Clone, Debug)]
#[graphql(complex)]
pub struct BerkeleyClass {
    /// The class's ID
    pub id: i64,
    /// The course code (one of the `COURSE_CATALOG` codes)
    pub class_name: i32,
}

#[ComplexObject]
impl BerkeleyClass {
    /// The course's display name, e.g. "CS 186"
    pub async fn name(&self) -> Result<&'static str> {
        self.display_label().map_err(Into::into)
    }
}

impl BerkeleyClass {
    /// The full course catalog. Codes sort the same way the display names
    /// should, and both are part of the website's compatibility surface.
    pub const COURSE_CATALOG: &'static [(i32, &'static str)] = &[
        (10100, "CS 10"),
        (10610, "CS 61A"),
        (10611, "CS 61AS"),
        (10612, "CS 61B/L"),
        (10613, "CS 61C"),
        (10700, "CS 70"),
        (11490, "CS 149"),
        (11500, "CS 150"),
        (11600, "CS 160"),
        (11610, "CS 161"),
        (11620, "CS 162"),
        (11640, "CS 164"),
        (11690, "CS 169"),
        (11700, "CS 170"),
        (11720, "CS 172"),
        (11740, "CS 174"),
        (11760, "CS 176"),
        (11840, "CS 184"),
        (11860, "CS 186"),
        (11880, "CS 188"),
        (11890, "CS 189"),
        (11945, "CS 194-5"),
        (11948, "CS 194-8"),
        (11950, "CS 195"),
        (20200, "EE 20"),
        (20400, "EE 40"),
        (21050, "EE 105"),
        (21170, "EE 117"),
        (21180, "EE 118"),
        (21200, "EE 120"),
        (21210, "EE 121"),
        (21220, "EE 122"),
        (21230, "EE 123"),
        (21250, "EE 125"),
        (21260, "EE 126"),
        (21270, "EE 127"),
        (21280, "EE 128"),
        (21300, "EE 130"),
        (21340, "EE 134"),
        (21370, "EE 137A"),
        (21371, "EE 137B"),
        (21400, "EE 140"),
        (21410, "EE 141"),
        (21420, "EE 142"),
        (21430, "EE 143"),
        (21440, "EE 144"),
        (21451, "EE 145B"),
        (21470, "EE 147"),
        (21490, "EE 149"),
        (21500, "EE 150"),
        (21920, "EE 192"),
        (30010, "Math 1A"),
        (30011, "Math 1B"),
        (30530, "Math 53"),
        (30540, "Math 54"),
        (31040, "Math 104"),
        (31100, "Math 110"),
        (31130, "Math 113"),
        (31280, "Math 128A"),
        (31850, "Math 185"),
    ];

    pub fn course_label(code: i32) -> RosterResult<&'static str> {
        Self::COURSE_CATALOG
            .iter()
            .find(|(course, _)| *course == code)
            .map(|(_, label)| *label)
            .ok_or(RosterError::UnknownCourse(code))
    }

    pub fn display_label(&self) -> RosterResult<&'static str> {
        Self::course_label(self.class_name)
    }

    pub async fn with_id(id: i64, pool: &PgPool) -> Result<Self> {
        Self::with_id_opt(id, pool)
            .await?
            .ok_or_else(|| {
                RosterError::NotFound {
                    entity: "class",
                    id,
                }
                .into()
            })
    }

    pub async fn with_id_opt(id: i64, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT id, class_name FROM berkeley_classes WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    pub async fn all(pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>("SELECT id, class_name FROM berkeley_classes ORDER BY class_name")
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }

    /// The classes the given officer has taken, ordered by course code
    pub async fn for_officer(officer_id: i64, pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT bc.id, bc.class_name
             FROM berkeley_classes bc
             JOIN officer_classes oc ON oc.berkeley_class_id = bc.id
             WHERE oc.officer_id = $1
             ORDER BY bc.class_name",
        )
        .bind(officer_id)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn create(class_name: i32, pool: &PgPool) -> Result<i64> {
        Self::course_label(class_name)?;

        sqlx::query_scalar::<_, i64>(
            "INSERT INTO berkeley_classes (class_name) VALUES ($1) RETURNING id",
        )
        .bind(class_name)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn delete(id: i64, pool: &PgPool) -> Result<()> {
        Self::with_id(id, pool).await?;

        sqlx::query("DELETE FROM berkeley_classes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }
}

/// The join record tying an officer to a class they've taken,
/// with no attributes of its own
#[derive(FromRow, Clone, Debug)]
pub struct OfficerClass {
    pub id: i64,
    pub officer_id: i64,
    pub berkeley_class_id: i64,
}

impl OfficerClass {
    pub async fn for_officer(officer_id: i64, pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT id, officer_id, berkeley_class_id FROM officer_classes WHERE officer_id = $1",
        )
        .bind(officer_id)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn create(officer_id: i64, berkeley_class_id: i64, pool: &PgPool) -> Result<i64> {
        Officer::with_id(officer_id, pool).await?;
        BerkeleyClass::with_id(berkeley_class_id, pool).await?;

        let already_taken = sqlx::query_scalar::<_, i64>(
            "SELECT id FROM officer_classes WHERE officer_id = $1 AND berkeley_class_id = $2",
        )
        .bind(officer_id)
        .bind(berkeley_class_id)
        .fetch_optional(pool)
        .await?;
        if already_taken.is_some() {
            return Err("Officer has already listed that class".into());
        }

        sqlx::query_scalar::<_, i64>(
            "INSERT INTO officer_classes (officer_id, berkeley_class_id)
             VALUES ($1, $2) RETURNING id",
        )
        .bind(officer_id)
        .bind(berkeley_class_id)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn remove(officer_id: i64, berkeley_class_id: i64, pool: &PgPool) -> Result<()> {
        sqlx::query("DELETE FROM officer_classes WHERE officer_id = $1 AND berkeley_class_id = $2")
            .bind(officer_id)
            .bind(berkeley_class_id)
            .execute(pool)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::BerkeleyClass;
    use crate::error::RosterError;
    use crate::tests::mock::mock_class;

    #[test]
    fn course_labels_match_the_published_codes() {
        assert_eq!(BerkeleyClass::course_label(10100).unwrap(), "CS 10");
        assert_eq!(BerkeleyClass::course_label(11860).unwrap(), "CS 186");
        assert_eq!(BerkeleyClass::course_label(31850).unwrap(), "Math 185");
    }

    #[test]
    fn course_lookup_faults_outside_the_catalog() {
        assert!(matches!(
            BerkeleyClass::course_label(99999),
            Err(RosterError::UnknownCourse(99999))
        ));
    }

    #[test]
    fn display_label_reads_the_stored_code() {
        assert_eq!(mock_class(1, 11860).display_label().unwrap(), "CS 186");
    }
}

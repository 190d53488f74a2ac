use async_graphql::{ComplexObject, Context, InputObject, Result, SimpleObject};
use sqlx::{FromRow, PgPool};

use crate::error::{RosterError, RosterResult};
use crate::models::class::BerkeleyClass;
use crate::models::office_hour::OfficeHour;
use crate::models::user::User;

/// An active officer of the chapter.
///
/// Officers hold a reference to their login identity rather than extending
/// it, so the same user can show up again as a candidate or a plain member.
#[derive(SimpleObject, FromRow, Clone, Debug)]
#[graphql(complex)]
pub struct Officer {
    /// The officer's ID
    pub id: i64,
    /// The user serving as this officer
    pub user_id: i64,
    /// The officer's year in school (one of the `YEARS_IN_SCHOOL` codes)
    pub year_in_school: String,
    /// The officer's phone number
    pub phone_number: String,
    /// The officer's position code (one of the `POSITIONS` codes,
    /// unique per position by convention only)
    pub position: i32,
    /// An optional path to an externally stored photo of the officer
    pub photo: Option<String>,
}

#[ComplexObject]
impl Officer {
    /// The officer's login identity
    pub async fn user(&self, ctx: &Context<'_>) -> Result<User> {
        let pool: &PgPool = ctx.data_unchecked();
        User::with_id(self.user_id, pool).await
    }

    /// The officer's full name
    pub async fn full_name(&self, ctx: &Context<'_>) -> Result<String> {
        let pool: &PgPool = ctx.data_unchecked();
        Ok(User::with_id(self.user_id, pool).await?.full_name())
    }

    /// The display name of the officer's position
    pub async fn position_name(&self) -> Result<&'static str> {
        Self::position_label(self.position).map_err(Into::into)
    }

    /// The display name of the officer's year in school
    pub async fn year_name(&self) -> Result<&'static str> {
        Self::year_label(&self.year_in_school).map_err(Into::into)
    }

    /// The officer's office hours
    pub async fn office_hours(&self, ctx: &Context<'_>) -> Result<Vec<OfficeHour>> {
        let pool: &PgPool = ctx.data_unchecked();
        OfficeHour::for_officer(self.id, pool).await
    }

    /// The officer's office hours as one comma-separated string,
    /// ordered by weekday and then by hour
    pub async fn schedule(&self, ctx: &Context<'_>) -> Result<String> {
        let pool: &PgPool = ctx.data_unchecked();
        let slots = OfficeHour::for_officer(self.id, pool).await?;
        Self::format_schedule(slots).map_err(Into::into)
    }

    /// The classes the officer has taken
    pub async fn classes_taken(&self, ctx: &Context<'_>) -> Result<Vec<BerkeleyClass>> {
        let pool: &PgPool = ctx.data_unchecked();
        BerkeleyClass::for_officer(self.id, pool).await
    }

    /// The classes the officer has taken as one comma-separated string,
    /// ordered by course code
    pub async fn experience(&self, ctx: &Context<'_>) -> Result<String> {
        let pool: &PgPool = ctx.data_unchecked();
        let classes = BerkeleyClass::for_officer(self.id, pool).await?;
        Self::format_experience(classes).map_err(Into::into)
    }
}

impl Officer {
    /// Position codes and their display names. Code 1 must stay "President",
    /// as the codes are part of the website's compatibility surface.
    pub const POSITIONS: &'static [(i32, &'static str)] = &[
        (1, "President"),
        (2, "Vice President"),
        (3, "Secretary"),
        (4, "Treasurer"),
        (5, "Professional Development"),
        (6, "Industrial Relations"),
        (7, "Social"),
        (8, "Publicity"),
        (9, "Technology"),
    ];

    pub const YEARS_IN_SCHOOL: &'static [(&'static str, &'static str)] = &[
        ("FR", "Freshman"),
        ("SO", "Sophomore"),
        ("JR", "Junior"),
        ("SR", "Senior"),
        ("FH", "Fifth Year"),
        ("MA", "Masters Student"),
        ("PH", "Ph.D. Student"),
    ];

    pub fn position_label(code: i32) -> RosterResult<&'static str> {
        Self::POSITIONS
            .iter()
            .find(|(position, _)| *position == code)
            .map(|(_, label)| *label)
            .ok_or(RosterError::UnknownPosition(code))
    }

    pub fn year_label(code: &str) -> RosterResult<&'static str> {
        Self::YEARS_IN_SCHOOL
            .iter()
            .find(|(year, _)| *year == code)
            .map(|(_, label)| *label)
            .ok_or_else(|| RosterError::UnknownYearInSchool(code.to_owned()))
    }

    /// Joins the given office hours into one display string, sorted
    /// ascending by `day_of_week * 100 + hour` (weekday first, then hour).
    pub fn format_schedule(mut slots: Vec<OfficeHour>) -> RosterResult<String> {
        slots.sort_by_key(|slot| slot.day_of_week * 100 + slot.hour);
        let labels = slots
            .iter()
            .map(OfficeHour::display_label)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(labels.join(", "))
    }

    /// Joins the given classes into one display string, sorted ascending by
    /// the raw course code rather than by label.
    pub fn format_experience(mut classes: Vec<BerkeleyClass>) -> RosterResult<String> {
        classes.sort_by_key(|class| class.class_name);
        let labels = classes
            .iter()
            .map(|class| class.display_label())
            .collect::<Result<Vec<_>, _>>()?;

        Ok(labels.join(", "))
    }

    pub async fn with_id(id: i64, pool: &PgPool) -> Result<Self> {
        Self::with_id_opt(id, pool)
            .await?
            .ok_or_else(|| {
                RosterError::NotFound {
                    entity: "officer",
                    id,
                }
                .into()
            })
    }

    pub async fn with_id_opt(id: i64, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT id, user_id, year_in_school, phone_number, position, photo
             FROM officers WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn all(pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT id, user_id, year_in_school, phone_number, position, photo
             FROM officers ORDER BY position, id",
        )
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    /// The officers holding the given office hour slot
    pub async fn for_office_hour(office_hour_id: i64, pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT o.id, o.user_id, o.year_in_school, o.phone_number, o.position, o.photo
             FROM officers o
             JOIN officer_office_hours ooh ON ooh.officer_id = o.id
             WHERE ooh.office_hour_id = $1
             ORDER BY o.position",
        )
        .bind(office_hour_id)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn create(new_officer: NewOfficer, pool: &PgPool) -> Result<i64> {
        User::with_id(new_officer.user_id, pool).await?;
        Self::position_label(new_officer.position)?;
        Self::year_label(&new_officer.year_in_school)?;

        sqlx::query_scalar::<_, i64>(
            "INSERT INTO officers (user_id, year_in_school, phone_number, position, photo)
             VALUES ($1, $2, $3, $4, $5) RETURNING id",
        )
        .bind(new_officer.user_id)
        .bind(new_officer.year_in_school)
        .bind(new_officer.phone_number)
        .bind(new_officer.position)
        .bind(new_officer.photo)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn update(id: i64, update: OfficerUpdate, pool: &PgPool) -> Result<()> {
        Self::with_id(id, pool).await?;
        Self::position_label(update.position)?;
        Self::year_label(&update.year_in_school)?;

        sqlx::query(
            "UPDATE officers SET year_in_school = $1, phone_number = $2, position = $3, photo = $4
             WHERE id = $5",
        )
        .bind(update.year_in_school)
        .bind(update.phone_number)
        .bind(update.position)
        .bind(update.photo)
        .bind(id)
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Removes the officer once their term ends. The officer's office hour
    /// and class links go with them.
    pub async fn delete(id: i64, pool: &PgPool) -> Result<()> {
        Self::with_id(id, pool).await?;

        sqlx::query("DELETE FROM officers WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }

    pub async fn add_office_hour(officer_id: i64, office_hour_id: i64, pool: &PgPool) -> Result<()> {
        Self::with_id(officer_id, pool).await?;
        OfficeHour::with_id(office_hour_id, pool).await?;

        let already_held = sqlx::query_scalar::<_, i64>(
            "SELECT officer_id FROM officer_office_hours
             WHERE officer_id = $1 AND office_hour_id = $2",
        )
        .bind(officer_id)
        .bind(office_hour_id)
        .fetch_optional(pool)
        .await?;
        if already_held.is_some() {
            return Err("Officer already holds that office hour".into());
        }

        sqlx::query("INSERT INTO officer_office_hours (officer_id, office_hour_id) VALUES ($1, $2)")
            .bind(officer_id)
            .bind(office_hour_id)
            .execute(pool)
            .await?;

        Ok(())
    }

    pub async fn remove_office_hour(
        officer_id: i64,
        office_hour_id: i64,
        pool: &PgPool,
    ) -> Result<()> {
        sqlx::query(
            "DELETE FROM officer_office_hours WHERE officer_id = $1 AND office_hour_id = $2",
        )
        .bind(officer_id)
        .bind(office_hour_id)
        .execute(pool)
        .await?;

        Ok(())
    }
}

/// A member newly elected as an officer
#[derive(InputObject)]
pub struct NewOfficer {
    pub user_id: i64,
    pub year_in_school: String,
    pub phone_number: String,
    pub position: i32,
    pub photo: Option<String>,
}

#[derive(InputObject)]
pub struct OfficerUpdate {
    pub year_in_school: String,
    pub phone_number: String,
    pub position: i32,
    pub photo: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::Officer;
    use crate::error::RosterError;
    use crate::tests::mock::{mock_class, mock_office_hour, mock_officer};

    #[test]
    fn schedule_is_empty_without_office_hours() {
        assert_eq!(Officer::format_schedule(vec![]).unwrap(), "");
    }

    #[test]
    fn schedule_sorts_by_weekday_then_hour() {
        // Wednesday 11 AM keys at 311, Monday 2 PM at 114
        let slots = vec![mock_office_hour(1, 3, 11), mock_office_hour(2, 1, 14)];

        assert_eq!(
            Officer::format_schedule(slots).unwrap(),
            "Monday 2 PM, Wednesday 11 AM"
        );
    }

    #[test]
    fn schedule_sorts_by_hour_within_a_day() {
        let slots = vec![
            mock_office_hour(1, 2, 17),
            mock_office_hour(2, 2, 11),
            mock_office_hour(3, 1, 12),
        ];

        assert_eq!(
            Officer::format_schedule(slots).unwrap(),
            "Monday 12 PM, Tuesday 11 AM, Tuesday 5 PM"
        );
    }

    #[test]
    fn schedule_faults_on_a_corrupted_day_code() {
        let slots = vec![mock_office_hour(1, 6, 11)];

        assert!(matches!(
            Officer::format_schedule(slots),
            Err(RosterError::UnknownDayOfWeek(6))
        ));
    }

    #[test]
    fn experience_is_empty_without_classes() {
        assert_eq!(Officer::format_experience(vec![]).unwrap(), "");
    }

    #[test]
    fn experience_sorts_by_raw_course_code() {
        let classes = vec![mock_class(1, 10612), mock_class(2, 10610)];

        assert_eq!(
            Officer::format_experience(classes).unwrap(),
            "CS 61A, CS 61B/L"
        );
    }

    #[test]
    fn position_labels_match_the_published_codes() {
        assert_eq!(Officer::position_label(mock_officer().position).unwrap(), "President");
        assert_eq!(Officer::position_label(9).unwrap(), "Technology");
    }

    #[test]
    fn position_lookup_faults_outside_the_choice_set() {
        assert!(matches!(
            Officer::position_label(10),
            Err(RosterError::UnknownPosition(10))
        ));
    }

    #[test]
    fn year_labels_match_the_published_codes() {
        assert_eq!(Officer::year_label("FR").unwrap(), "Freshman");
        assert_eq!(Officer::year_label("PH").unwrap(), "Ph.D. Student");
        assert!(Officer::year_label("XX").is_err());
    }
}

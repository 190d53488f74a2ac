use async_graphql::{ComplexObject, Context, InputObject, Result, SimpleObject};
use sqlx::{FromRow, PgPool};

use crate::error::{RosterError, RosterResult};
use crate::models::officer::Officer;

/// A weekly recurring office hour slot.
///
/// Slots are tied to the officers holding them through the
/// `officer_office_hours` join table, not by username.
#[derive(SimpleObject, FromRow, Clone, Debug)]
#[graphql(complex)]
pub struct OfficeHour {
    /// The slot's ID
    pub id: i64,
    /// The weekday code (one of the `DAYS_OF_WEEK` codes, Monday through Friday)
    pub day_of_week: i32,
    /// The hour code (one of the `TIMES_OF_DAY` codes, 11 AM through 5 PM)
    pub hour: i32,
}

#[ComplexObject]
impl OfficeHour {
    /// The slot as a display string, e.g. "Wednesday 11 AM"
    pub async fn label(&self) -> Result<String> {
        self.display_label().map_err(Into::into)
    }

    /// The officers holding this slot
    pub async fn officers(&self, ctx: &Context<'_>) -> Result<Vec<Officer>> {
        let pool: &PgPool = ctx.data_unchecked();
        Officer::for_office_hour(self.id, pool).await
    }
}

impl OfficeHour {
    pub const DAYS_OF_WEEK: &'static [(i32, &'static str)] = &[
        (1, "Monday"),
        (2, "Tuesday"),
        (3, "Wednesday"),
        (4, "Thursday"),
        (5, "Friday"),
    ];

    pub const TIMES_OF_DAY: &'static [(i32, &'static str)] = &[
        (11, "11 AM"),
        (12, "12 PM"),
        (13, "1 PM"),
        (14, "2 PM"),
        (15, "3 PM"),
        (16, "4 PM"),
        (17, "5 PM"),
    ];

    pub fn day_label(code: i32) -> RosterResult<&'static str> {
        Self::DAYS_OF_WEEK
            .iter()
            .find(|(day, _)| *day == code)
            .map(|(_, label)| *label)
            .ok_or(RosterError::UnknownDayOfWeek(code))
    }

    pub fn hour_label(code: i32) -> RosterResult<&'static str> {
        Self::TIMES_OF_DAY
            .iter()
            .find(|(hour, _)| *hour == code)
            .map(|(_, label)| *label)
            .ok_or(RosterError::UnknownTimeOfDay(code))
    }

    /// The weekday name and hour label with a single separating space
    pub fn display_label(&self) -> RosterResult<String> {
        Ok(format!(
            "{} {}",
            Self::day_label(self.day_of_week)?,
            Self::hour_label(self.hour)?
        ))
    }

    pub async fn with_id(id: i64, pool: &PgPool) -> Result<Self> {
        Self::with_id_opt(id, pool)
            .await?
            .ok_or_else(|| {
                RosterError::NotFound {
                    entity: "office hour",
                    id,
                }
                .into()
            })
    }

    pub async fn with_id_opt(id: i64, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT id, day_of_week, hour FROM office_hours WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    pub async fn all(pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT id, day_of_week, hour FROM office_hours ORDER BY day_of_week, hour",
        )
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    /// The slots held by the given officer
    pub async fn for_officer(officer_id: i64, pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT oh.id, oh.day_of_week, oh.hour
             FROM office_hours oh
             JOIN officer_office_hours ooh ON ooh.office_hour_id = oh.id
             WHERE ooh.officer_id = $1
             ORDER BY oh.day_of_week, oh.hour",
        )
        .bind(officer_id)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn create(new_office_hour: NewOfficeHour, pool: &PgPool) -> Result<i64> {
        Self::day_label(new_office_hour.day_of_week)?;
        Self::hour_label(new_office_hour.hour)?;

        sqlx::query_scalar::<_, i64>(
            "INSERT INTO office_hours (day_of_week, hour) VALUES ($1, $2) RETURNING id",
        )
        .bind(new_office_hour.day_of_week)
        .bind(new_office_hour.hour)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn delete(id: i64, pool: &PgPool) -> Result<()> {
        Self::with_id(id, pool).await?;

        sqlx::query("DELETE FROM office_hours WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }
}

/// A new weekly slot
#[derive(InputObject)]
pub struct NewOfficeHour {
    pub day_of_week: i32,
    pub hour: i32,
}

#[cfg(test)]
mod tests {
    use super::OfficeHour;
    use crate::error::RosterError;
    use crate::tests::mock::mock_office_hour;

    #[test]
    fn display_label_joins_weekday_and_hour() {
        assert_eq!(mock_office_hour(1, 3, 11).display_label().unwrap(), "Wednesday 11 AM");
        assert_eq!(mock_office_hour(2, 5, 17).display_label().unwrap(), "Friday 5 PM");
    }

    #[test]
    fn day_lookup_faults_on_weekends() {
        assert!(matches!(
            OfficeHour::day_label(6),
            Err(RosterError::UnknownDayOfWeek(6))
        ));
    }

    #[test]
    fn hour_lookup_faults_outside_office_hours() {
        assert_eq!(OfficeHour::hour_label(11).unwrap(), "11 AM");
        assert!(matches!(
            OfficeHour::hour_label(18),
            Err(RosterError::UnknownTimeOfDay(18))
        ));
    }
}

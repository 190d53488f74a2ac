use async_graphql::{ComplexObject, Context, InputObject, Result, SimpleObject};
use sqlx::{FromRow, PgPool};

use crate::error::{RosterError, RosterResult};
use crate::models::candidate::Candidate;
use crate::models::GqlDate;
use crate::util::today;

/// A membership requirement candidates must complete before initiation
#[derive(SimpleObject, FromRow, Clone, Debug)]
#[graphql(complex)]
pub struct Requirement {
    /// The requirement's ID
    pub id: i64,
    /// The requirement's name
    pub name: String,
    /// An optional longer description of the requirement
    pub description: Option<String>,
    /// The requirement's type code (one of the `REQUIREMENT_TYPES` codes)
    pub req_type: String,
}

#[ComplexObject]
impl Requirement {
    /// The display name of the requirement's type
    pub async fn type_name(&self) -> Result<&'static str> {
        Self::type_label(&self.req_type).map_err(Into::into)
    }
}

impl Requirement {
    pub const REQUIREMENT_TYPES: &'static [(&'static str, &'static str)] = &[
        ("SOC", "Social"),
        ("PRO", "Professional"),
        ("IND", "Individual"),
        ("FAM", "Family"),
        ("ACM", "ACM Payment"),
        ("INI", "Initiation Attendance"),
        ("GM", "General Meetings"),
    ];

    pub fn type_label(code: &str) -> RosterResult<&'static str> {
        Self::REQUIREMENT_TYPES
            .iter()
            .find(|(req_type, _)| *req_type == code)
            .map(|(_, label)| *label)
            .ok_or_else(|| RosterError::UnknownRequirementType(code.to_owned()))
    }

    pub async fn with_id(id: i64, pool: &PgPool) -> Result<Self> {
        Self::with_id_opt(id, pool)
            .await?
            .ok_or_else(|| {
                RosterError::NotFound {
                    entity: "requirement",
                    id,
                }
                .into()
            })
    }

    pub async fn with_id_opt(id: i64, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT id, name, description, req_type FROM requirements WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn all(pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT id, name, description, req_type FROM requirements ORDER BY name",
        )
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn create(new_requirement: NewRequirement, pool: &PgPool) -> Result<i64> {
        Self::type_label(&new_requirement.req_type)?;

        sqlx::query_scalar::<_, i64>(
            "INSERT INTO requirements (name, description, req_type)
             VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(new_requirement.name)
        .bind(new_requirement.description)
        .bind(new_requirement.req_type)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn update(id: i64, update: NewRequirement, pool: &PgPool) -> Result<()> {
        Self::with_id(id, pool).await?;
        Self::type_label(&update.req_type)?;

        sqlx::query(
            "UPDATE requirements SET name = $1, description = $2, req_type = $3 WHERE id = $4",
        )
        .bind(update.name)
        .bind(update.description)
        .bind(update.req_type)
        .bind(id)
        .execute(pool)
        .await?;

        Ok(())
    }

    pub async fn delete(id: i64, pool: &PgPool) -> Result<()> {
        Self::with_id(id, pool).await?;

        sqlx::query("DELETE FROM requirements WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }
}

#[derive(InputObject)]
pub struct NewRequirement {
    pub name: String,
    pub description: Option<String>,
    pub req_type: String,
}

/// A candidate's completion record for a single requirement.
///
/// Duplicate records for one (candidate, requirement) pair are representable,
/// matching the schema as deployed.
#[derive(SimpleObject, FromRow, Clone, Debug)]
#[graphql(complex)]
pub struct Completion {
    /// The record's ID
    pub id: i64,
    /// The candidate this record belongs to
    pub candidate_id: i64,
    /// The requirement being tracked
    pub requirement_id: i64,
    /// Whether the requirement has actually been finished
    pub completed: bool,
    /// When the requirement was completed. Defaults to the day the record
    /// was created, even for records that aren't completed yet.
    pub date_completed: GqlDate,
}

#[ComplexObject]
impl Completion {
    /// The candidate this record belongs to
    pub async fn candidate(&self, ctx: &Context<'_>) -> Result<Candidate> {
        let pool: &PgPool = ctx.data_unchecked();
        Candidate::with_id(self.candidate_id, pool).await
    }

    /// The requirement being tracked
    pub async fn requirement(&self, ctx: &Context<'_>) -> Result<Requirement> {
        let pool: &PgPool = ctx.data_unchecked();
        Requirement::with_id(self.requirement_id, pool).await
    }
}

impl Completion {
    pub async fn with_id(id: i64, pool: &PgPool) -> Result<Self> {
        Self::with_id_opt(id, pool)
            .await?
            .ok_or_else(|| {
                RosterError::NotFound {
                    entity: "completion",
                    id,
                }
                .into()
            })
    }

    pub async fn with_id_opt(id: i64, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT id, candidate_id, requirement_id, completed, date_completed
             FROM completions WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn for_candidate(candidate_id: i64, pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT id, candidate_id, requirement_id, completed, date_completed
             FROM completions WHERE candidate_id = $1 ORDER BY id",
        )
        .bind(candidate_id)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn create(new_completion: NewCompletion, pool: &PgPool) -> Result<i64> {
        Candidate::with_id(new_completion.candidate_id, pool).await?;
        Requirement::with_id(new_completion.requirement_id, pool).await?;

        let date_completed = new_completion.date_or_today();
        sqlx::query_scalar::<_, i64>(
            "INSERT INTO completions (candidate_id, requirement_id, completed, date_completed)
             VALUES ($1, $2, $3, $4) RETURNING id",
        )
        .bind(new_completion.candidate_id)
        .bind(new_completion.requirement_id)
        .bind(new_completion.completed)
        .bind(date_completed)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    /// Marks the record completed and stamps today's date on it
    pub async fn mark_completed(id: i64, pool: &PgPool) -> Result<()> {
        Self::with_id(id, pool).await?;

        sqlx::query("UPDATE completions SET completed = true, date_completed = $1 WHERE id = $2")
            .bind(today())
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }

    pub async fn delete(id: i64, pool: &PgPool) -> Result<()> {
        Self::with_id(id, pool).await?;

        sqlx::query("DELETE FROM completions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }
}

/// A new completion record for a candidate and requirement
#[derive(InputObject)]
pub struct NewCompletion {
    pub candidate_id: i64,
    pub requirement_id: i64,
    #[graphql(default = false)]
    pub completed: bool,
    pub date_completed: Option<GqlDate>,
}

impl NewCompletion {
    /// The completion date to store: the explicit one if given, otherwise the
    /// record-creation date. Applies whether or not the requirement is
    /// actually completed.
    pub fn date_or_today(&self) -> time::Date {
        self.date_completed.map(|date| date.0).unwrap_or_else(today)
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::{NewCompletion, Requirement};
    use crate::error::RosterError;
    use crate::models::GqlDate;
    use crate::tests::mock::mock_requirement;
    use crate::util::today;

    #[test]
    fn type_labels_match_the_published_codes() {
        assert_eq!(
            Requirement::type_label(&mock_requirement().req_type).unwrap(),
            "Social"
        );
        assert_eq!(Requirement::type_label("ACM").unwrap(), "ACM Payment");
        assert_eq!(Requirement::type_label("GM").unwrap(), "General Meetings");
    }

    #[test]
    fn type_lookup_faults_outside_the_choice_set() {
        assert!(matches!(
            Requirement::type_label("XYZ"),
            Err(RosterError::UnknownRequirementType(_))
        ));
    }

    #[test]
    fn completion_date_defaults_to_today_even_when_incomplete() {
        let new_completion = NewCompletion {
            candidate_id: 1,
            requirement_id: 1,
            completed: false,
            date_completed: None,
        };

        assert_eq!(new_completion.date_or_today(), today());
    }

    #[test]
    fn an_explicit_completion_date_is_kept() {
        let new_completion = NewCompletion {
            candidate_id: 1,
            requirement_id: 1,
            completed: true,
            date_completed: Some(GqlDate(date!(2016 - 04 - 01))),
        };

        assert_eq!(new_completion.date_or_today(), date!(2016 - 04 - 01));
    }
}

use async_graphql::{ComplexObject, Context, InputObject, Result, SimpleObject};
use sqlx::{FromRow, PgPool};

use crate::error::RosterError;
use crate::models::requirement::Completion;
use crate::models::user::User;

/// A prospective member working through the semester's requirements
#[derive(SimpleObject, FromRow, Clone, Debug)]
#[graphql(complex)]
pub struct Candidate {
    /// The candidate's ID
    pub id: i64,
    /// The user this candidate registered as (exactly one candidate per user)
    pub user_id: i64,
    /// The family the candidate was sorted into
    pub family: String,
    /// The committee the candidate serves on
    pub committee: String,
}

#[ComplexObject]
impl Candidate {
    /// The candidate's login identity
    pub async fn user(&self, ctx: &Context<'_>) -> Result<User> {
        let pool: &PgPool = ctx.data_unchecked();
        User::with_id(self.user_id, pool).await
    }

    /// The candidate's full name
    pub async fn full_name(&self, ctx: &Context<'_>) -> Result<String> {
        let pool: &PgPool = ctx.data_unchecked();
        Ok(User::with_id(self.user_id, pool).await?.full_name())
    }

    /// The candidate's requirement completion records
    pub async fn completions(&self, ctx: &Context<'_>) -> Result<Vec<Completion>> {
        let pool: &PgPool = ctx.data_unchecked();
        Completion::for_candidate(self.id, pool).await
    }

    /// How far along the candidate is toward initiation.
    ///
    /// The intended semantics (completed count? fraction? per-type breakdown?)
    /// haven't been settled, so this errors until an adopting team defines
    /// them.
    #[graphql(name = "progress")]
    pub async fn progress_field(&self) -> Result<String> {
        self.progress().await
    }
}

impl Candidate {
    pub async fn progress(&self) -> Result<String> {
        Err(RosterError::ProgressNotImplemented.into())
    }

    pub async fn with_id(id: i64, pool: &PgPool) -> Result<Self> {
        Self::with_id_opt(id, pool)
            .await?
            .ok_or_else(|| {
                RosterError::NotFound {
                    entity: "candidate",
                    id,
                }
                .into()
            })
    }

    pub async fn with_id_opt(id: i64, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT id, user_id, family, committee FROM candidates WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn for_user(user_id: i64, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT id, user_id, family, committee FROM candidates WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn all(pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT id, user_id, family, committee FROM candidates ORDER BY family, id",
        )
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn create(new_candidate: NewCandidate, pool: &PgPool) -> Result<i64> {
        User::with_id(new_candidate.user_id, pool).await?;

        if Self::for_user(new_candidate.user_id, pool).await?.is_some() {
            return Err(format!(
                "User {} is already registered as a candidate",
                new_candidate.user_id
            )
            .into());
        }

        sqlx::query_scalar::<_, i64>(
            "INSERT INTO candidates (user_id, family, committee) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(new_candidate.user_id)
        .bind(new_candidate.family)
        .bind(new_candidate.committee)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn update(id: i64, update: CandidateUpdate, pool: &PgPool) -> Result<()> {
        // check that the candidate exists
        Self::with_id(id, pool).await?;

        sqlx::query("UPDATE candidates SET family = $1, committee = $2 WHERE id = $3")
            .bind(update.family)
            .bind(update.committee)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }
}

/// A newly registered candidate
#[derive(InputObject)]
pub struct NewCandidate {
    pub user_id: i64,
    pub family: String,
    pub committee: String,
}

#[derive(InputObject)]
pub struct CandidateUpdate {
    pub family: String,
    pub committee: String,
}

#[cfg(test)]
mod tests {
    use crate::error::RosterError;
    use crate::tests::mock::mock_candidate;

    #[tokio::test]
    async fn progress_is_not_implemented_yet() {
        let error = mock_candidate().progress().await.unwrap_err();

        assert_eq!(error.message, RosterError::ProgressNotImplemented.to_string());
    }
}

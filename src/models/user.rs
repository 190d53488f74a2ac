use async_graphql::{Result, SimpleObject};
use sqlx::{FromRow, PgPool};

use crate::error::RosterError;

/// A login identity, owned by the authentication collaborator.
///
/// This crate only ever reads users; registering, renaming, and deleting
/// them is the collaborator's job.
#[derive(SimpleObject, FromRow, Clone, Debug)]
pub struct User {
    /// The user's ID
    pub id: i64,
    /// The user's unique login name
    pub username: String,
    /// The user's first name
    pub first_name: String,
    /// The user's last name
    pub last_name: String,
}

impl User {
    /// The user's first and last name with a single separating space.
    /// Missing names degrade to just the space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub async fn with_id(id: i64, pool: &PgPool) -> Result<Self> {
        Self::with_id_opt(id, pool)
            .await?
            .ok_or_else(|| RosterError::NotFound { entity: "user", id }.into())
    }

    pub async fn with_id_opt(id: i64, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT id, username, first_name, last_name FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn with_username(username: &str, pool: &PgPool) -> Result<Self> {
        Self::with_username_opt(username, pool)
            .await?
            .ok_or_else(|| format!("No user with username {}", username).into())
    }

    pub async fn with_username_opt(username: &str, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT id, username, first_name, last_name FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn all(pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT id, username, first_name, last_name FROM users
             ORDER BY last_name, first_name",
        )
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use crate::tests::mock::mock_user;

    #[test]
    fn full_name_joins_first_and_last() {
        assert_eq!(mock_user().full_name(), "Grace Hopper");
    }

    #[test]
    fn full_name_degrades_to_a_single_space() {
        let mut user = mock_user();
        user.first_name = String::new();
        user.last_name = String::new();

        assert_eq!(user.full_name(), " ");
    }
}

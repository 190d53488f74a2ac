use async_graphql::{EmptySubscription, Schema};
use sqlx::PgPool;

use crate::graphql::mutation::MutationRoot;
use crate::graphql::query::QueryRoot;

pub mod mutation;
pub mod query;

pub const SUCCESS_MESSAGE: &str = "success";

pub type RosterSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Builds the GraphQL schema the website executes requests against
pub fn build_schema(pool: PgPool) -> RosterSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(pool)
        .finish()
}

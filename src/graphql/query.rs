use async_graphql::{Context, Object, Result};
use sqlx::PgPool;

use crate::models::candidate::Candidate;
use crate::models::class::BerkeleyClass;
use crate::models::office_hour::OfficeHour;
use crate::models::officer::Officer;
use crate::models::requirement::{Completion, Requirement};
use crate::models::static_data::StaticData;
use crate::models::user::User;

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    pub async fn user(&self, ctx: &Context<'_>, id: i64) -> Result<User> {
        let pool: &PgPool = ctx.data_unchecked();
        User::with_id(id, pool).await
    }

    pub async fn users(&self, ctx: &Context<'_>) -> Result<Vec<User>> {
        let pool: &PgPool = ctx.data_unchecked();
        User::all(pool).await
    }

    pub async fn candidate(&self, ctx: &Context<'_>, id: i64) -> Result<Candidate> {
        let pool: &PgPool = ctx.data_unchecked();
        Candidate::with_id(id, pool).await
    }

    pub async fn candidates(&self, ctx: &Context<'_>) -> Result<Vec<Candidate>> {
        let pool: &PgPool = ctx.data_unchecked();
        Candidate::all(pool).await
    }

    pub async fn officer(&self, ctx: &Context<'_>, id: i64) -> Result<Officer> {
        let pool: &PgPool = ctx.data_unchecked();
        Officer::with_id(id, pool).await
    }

    pub async fn officers(&self, ctx: &Context<'_>) -> Result<Vec<Officer>> {
        let pool: &PgPool = ctx.data_unchecked();
        Officer::all(pool).await
    }

    pub async fn office_hours(&self, ctx: &Context<'_>) -> Result<Vec<OfficeHour>> {
        let pool: &PgPool = ctx.data_unchecked();
        OfficeHour::all(pool).await
    }

    pub async fn berkeley_class(&self, ctx: &Context<'_>, id: i64) -> Result<BerkeleyClass> {
        let pool: &PgPool = ctx.data_unchecked();
        BerkeleyClass::with_id(id, pool).await
    }

    pub async fn berkeley_classes(&self, ctx: &Context<'_>) -> Result<Vec<BerkeleyClass>> {
        let pool: &PgPool = ctx.data_unchecked();
        BerkeleyClass::all(pool).await
    }

    pub async fn requirement(&self, ctx: &Context<'_>, id: i64) -> Result<Requirement> {
        let pool: &PgPool = ctx.data_unchecked();
        Requirement::with_id(id, pool).await
    }

    pub async fn requirements(&self, ctx: &Context<'_>) -> Result<Vec<Requirement>> {
        let pool: &PgPool = ctx.data_unchecked();
        Requirement::all(pool).await
    }

    pub async fn completions(&self, ctx: &Context<'_>, candidate_id: i64) -> Result<Vec<Completion>> {
        let pool: &PgPool = ctx.data_unchecked();
        Completion::for_candidate(candidate_id, pool).await
    }

    pub async fn static_data(&self) -> StaticData {
        StaticData
    }
}

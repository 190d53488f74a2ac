use async_graphql::{Context, Object, Result};
use sqlx::PgPool;

use crate::graphql::SUCCESS_MESSAGE;
use crate::models::candidate::{Candidate, CandidateUpdate, NewCandidate};
use crate::models::class::{BerkeleyClass, OfficerClass};
use crate::models::office_hour::{NewOfficeHour, OfficeHour};
use crate::models::officer::{NewOfficer, Officer, OfficerUpdate};
use crate::models::requirement::{Completion, NewCompletion, NewRequirement, Requirement};

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Registers a prospective member as a candidate
    pub async fn register_candidate(
        &self,
        ctx: &Context<'_>,
        new_candidate: NewCandidate,
    ) -> Result<i64> {
        let pool: &PgPool = ctx.data_unchecked();
        Candidate::create(new_candidate, pool).await
    }

    pub async fn update_candidate(
        &self,
        ctx: &Context<'_>,
        id: i64,
        update: CandidateUpdate,
    ) -> Result<&'static str> {
        let pool: &PgPool = ctx.data_unchecked();
        Candidate::update(id, update, pool).await?;

        Ok(SUCCESS_MESSAGE)
    }

    /// Makes a member an officer
    pub async fn create_officer(&self, ctx: &Context<'_>, new_officer: NewOfficer) -> Result<i64> {
        let pool: &PgPool = ctx.data_unchecked();
        Officer::create(new_officer, pool).await
    }

    pub async fn update_officer(
        &self,
        ctx: &Context<'_>,
        id: i64,
        update: OfficerUpdate,
    ) -> Result<&'static str> {
        let pool: &PgPool = ctx.data_unchecked();
        Officer::update(id, update, pool).await?;

        Ok(SUCCESS_MESSAGE)
    }

    /// Removes an officer whose term has ended
    pub async fn delete_officer(&self, ctx: &Context<'_>, id: i64) -> Result<&'static str> {
        let pool: &PgPool = ctx.data_unchecked();
        Officer::delete(id, pool).await?;

        Ok(SUCCESS_MESSAGE)
    }

    pub async fn create_office_hour(
        &self,
        ctx: &Context<'_>,
        new_office_hour: NewOfficeHour,
    ) -> Result<i64> {
        let pool: &PgPool = ctx.data_unchecked();
        OfficeHour::create(new_office_hour, pool).await
    }

    pub async fn delete_office_hour(&self, ctx: &Context<'_>, id: i64) -> Result<&'static str> {
        let pool: &PgPool = ctx.data_unchecked();
        OfficeHour::delete(id, pool).await?;

        Ok(SUCCESS_MESSAGE)
    }

    /// Assigns an office hour slot to an officer
    pub async fn add_officer_office_hour(
        &self,
        ctx: &Context<'_>,
        officer_id: i64,
        office_hour_id: i64,
    ) -> Result<&'static str> {
        let pool: &PgPool = ctx.data_unchecked();
        Officer::add_office_hour(officer_id, office_hour_id, pool).await?;

        Ok(SUCCESS_MESSAGE)
    }

    pub async fn remove_officer_office_hour(
        &self,
        ctx: &Context<'_>,
        officer_id: i64,
        office_hour_id: i64,
    ) -> Result<&'static str> {
        let pool: &PgPool = ctx.data_unchecked();
        Officer::remove_office_hour(officer_id, office_hour_id, pool).await?;

        Ok(SUCCESS_MESSAGE)
    }

    /// Adds a course from the fixed catalog to the class list
    pub async fn create_berkeley_class(&self, ctx: &Context<'_>, class_name: i32) -> Result<i64> {
        let pool: &PgPool = ctx.data_unchecked();
        BerkeleyClass::create(class_name, pool).await
    }

    pub async fn delete_berkeley_class(&self, ctx: &Context<'_>, id: i64) -> Result<&'static str> {
        let pool: &PgPool = ctx.data_unchecked();
        BerkeleyClass::delete(id, pool).await?;

        Ok(SUCCESS_MESSAGE)
    }

    /// Records that an officer has taken a class
    pub async fn add_officer_class(
        &self,
        ctx: &Context<'_>,
        officer_id: i64,
        berkeley_class_id: i64,
    ) -> Result<i64> {
        let pool: &PgPool = ctx.data_unchecked();
        OfficerClass::create(officer_id, berkeley_class_id, pool).await
    }

    pub async fn remove_officer_class(
        &self,
        ctx: &Context<'_>,
        officer_id: i64,
        berkeley_class_id: i64,
    ) -> Result<&'static str> {
        let pool: &PgPool = ctx.data_unchecked();
        OfficerClass::remove(officer_id, berkeley_class_id, pool).await?;

        Ok(SUCCESS_MESSAGE)
    }

    pub async fn create_requirement(
        &self,
        ctx: &Context<'_>,
        new_requirement: NewRequirement,
    ) -> Result<i64> {
        let pool: &PgPool = ctx.data_unchecked();
        Requirement::create(new_requirement, pool).await
    }

    pub async fn update_requirement(
        &self,
        ctx: &Context<'_>,
        id: i64,
        update: NewRequirement,
    ) -> Result<&'static str> {
        let pool: &PgPool = ctx.data_unchecked();
        Requirement::update(id, update, pool).await?;

        Ok(SUCCESS_MESSAGE)
    }

    pub async fn delete_requirement(&self, ctx: &Context<'_>, id: i64) -> Result<&'static str> {
        let pool: &PgPool = ctx.data_unchecked();
        Requirement::delete(id, pool).await?;

        Ok(SUCCESS_MESSAGE)
    }

    /// Opens a completion record for a candidate and requirement
    pub async fn record_completion(
        &self,
        ctx: &Context<'_>,
        new_completion: NewCompletion,
    ) -> Result<i64> {
        let pool: &PgPool = ctx.data_unchecked();
        Completion::create(new_completion, pool).await
    }

    /// Marks a completion record as finished today
    pub async fn complete_requirement(&self, ctx: &Context<'_>, id: i64) -> Result<&'static str> {
        let pool: &PgPool = ctx.data_unchecked();
        Completion::mark_completed(id, pool).await?;

        Ok(SUCCESS_MESSAGE)
    }

    pub async fn delete_completion(&self, ctx: &Context<'_>, id: i64) -> Result<&'static str> {
        let pool: &PgPool = ctx.data_unchecked();
        Completion::delete(id, pool).await?;

        Ok(SUCCESS_MESSAGE)
    }
}

use async_graphql::{Object, SimpleObject};

use crate::models::class::BerkeleyClass;
use crate::models::office_hour::OfficeHour;
use crate::models::officer::Officer;
use crate::models::requirement::Requirement;

/// A numeric code paired with its display label
#[derive(SimpleObject)]
pub struct CodedLabel {
    /// The stored code
    pub code: i32,
    /// The label shown on the website
    pub label: String,
}

/// A short text tag paired with its display label
#[derive(SimpleObject)]
pub struct TaggedLabel {
    /// The stored tag
    pub code: String,
    /// The label shown on the website
    pub label: String,
}

fn coded(table: &[(i32, &str)]) -> Vec<CodedLabel> {
    table
        .iter()
        .map(|(code, label)| CodedLabel {
            code: *code,
            label: (*label).to_owned(),
        })
        .collect()
}

fn tagged(table: &[(&str, &str)]) -> Vec<TaggedLabel> {
    table
        .iter()
        .map(|(code, label)| TaggedLabel {
            code: (*code).to_owned(),
            label: (*label).to_owned(),
        })
        .collect()
}

/// The fixed choice sets the models validate against, for populating
/// dropdowns on the admin pages
pub struct StaticData;

#[Object]
impl StaticData {
    /// The officer positions, codes 1 through 9
    pub async fn positions(&self) -> Vec<CodedLabel> {
        coded(Officer::POSITIONS)
    }

    /// The years in school an officer can be in
    pub async fn years_in_school(&self) -> Vec<TaggedLabel> {
        tagged(Officer::YEARS_IN_SCHOOL)
    }

    /// The weekdays office hours can be held on
    pub async fn days_of_week(&self) -> Vec<CodedLabel> {
        coded(OfficeHour::DAYS_OF_WEEK)
    }

    /// The hours office hours can be held at
    pub async fn times_of_day(&self) -> Vec<CodedLabel> {
        coded(OfficeHour::TIMES_OF_DAY)
    }

    /// The course catalog officers can list experience from
    pub async fn course_catalog(&self) -> Vec<CodedLabel> {
        coded(BerkeleyClass::COURSE_CATALOG)
    }

    /// The requirement types
    pub async fn requirement_types(&self) -> Vec<TaggedLabel> {
        tagged(Requirement::REQUIREMENT_TYPES)
    }
}

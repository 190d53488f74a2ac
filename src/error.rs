use thiserror::Error;

/// Errors raised by the data layer.
///
/// The `Unknown*` variants mean a stored code fell outside its fixed choice
/// set. Codes are validated before every write, so hitting one of these on a
/// loaded record is a data-integrity fault, not a user error.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("no {entity} with id {id}")]
    NotFound { entity: &'static str, id: i64 },

    #[error("unknown officer position code {0}")]
    UnknownPosition(i32),

    #[error("unknown year in school code {0:?}")]
    UnknownYearInSchool(String),

    #[error("unknown day of week code {0}")]
    UnknownDayOfWeek(i32),

    #[error("unknown time of day code {0}")]
    UnknownTimeOfDay(i32),

    #[error("unknown course code {0}")]
    UnknownCourse(i32),

    #[error("unknown requirement type code {0:?}")]
    UnknownRequirementType(String),

    #[error("candidate progress tracking is not implemented yet")]
    ProgressNotImplemented,

    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

pub type RosterResult<T> = Result<T, RosterError>;

use time::{Date, OffsetDateTime};

/// The current date, used as the default completion date for new records.
pub fn today() -> Date {
    OffsetDateTime::now_utc().date()
}

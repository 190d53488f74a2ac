use async_graphql::{InputValueError, InputValueResult, Scalar, ScalarType, Value};
use time::format_description::FormatItem;
use time::macros::format_description;
use time::Date;

pub mod candidate;
pub mod class;
pub mod office_hour;
pub mod officer;
pub mod requirement;
pub mod static_data;
pub mod user;

pub const DATE_FORMAT: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// A calendar date, sent over GraphQL as a `YYYY-MM-DD` string
#[derive(sqlx::Type, Clone, Copy, PartialEq, Eq, Debug)]
#[sqlx(transparent)]
pub struct GqlDate(pub Date);

#[Scalar]
impl ScalarType for GqlDate {
    fn parse(value: Value) -> InputValueResult<Self> {
        if let Value::String(date_str) = &value {
            if let Ok(date) = Date::parse(date_str, DATE_FORMAT) {
                return Ok(GqlDate(date));
            }
        }

        Err(InputValueError::expected_type(value))
    }

    fn to_value(&self) -> Value {
        Value::String(
            self.0
                .format(DATE_FORMAT)
                .unwrap_or_else(|_| self.0.to_string()),
        )
    }
}

#[cfg(test)]
mod tests {
    use async_graphql::{ScalarType, Value};
    use time::macros::date;

    use super::GqlDate;

    #[test]
    fn date_scalar_round_trips() {
        let value = Value::String(String::from("2020-09-15"));
        let date = GqlDate::parse(value.clone()).unwrap();

        assert_eq!(date.0, date!(2020 - 09 - 15));
        assert_eq!(date.to_value(), value);
    }

    #[test]
    fn date_scalar_rejects_non_dates() {
        assert!(GqlDate::parse(Value::String(String::from("next tuesday"))).is_err());
        assert!(GqlDate::parse(Value::Boolean(true)).is_err());
    }
}

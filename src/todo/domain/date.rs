//! Calendar-date parsing for todo records.

use super::TodoDomainError;
use chrono::NaiveDate;

/// Wire format for calendar dates.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a `YYYY-MM-DD` calendar date.
///
/// # Errors
///
/// Returns [`TodoDomainError::InvalidDate`] when the value does not parse as
/// a valid calendar date, including out-of-range components such as
/// `2024-13-40`.
pub fn parse_date(value: &str) -> Result<NaiveDate, TodoDomainError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|_| TodoDomainError::InvalidDate(value.to_owned()))
}

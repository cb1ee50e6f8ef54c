//! Shared query parameter types and parsing for API handlers.

use std::str::FromStr;

use chrono::Utc;
use serde::Deserialize;
use sitetrack_core::error::CoreError;
use sitetrack_core::types::Date;

/// `?search=` for the plain resource lists.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub search: Option<String>,
}

/// `?today=YYYY-MM-DD` pins the reference date for derived urgency.
#[derive(Debug, Default, Deserialize)]
pub struct TodayParams {
    pub today: Option<Date>,
}

/// The reference date for due-date and deadline calculations.
pub fn today_or_now(today: Option<Date>) -> Date {
    today.unwrap_or_else(|| Utc::now().date_naive())
}

/// Parse an optional selector where a blank value or `All` means "no filter".
pub fn parse_selector<T>(raw: Option<&str>) -> Result<Option<T>, CoreError>
where
    T: FromStr<Err = CoreError>,
{
    match raw.map(str::trim) {
        None | Some("") | Some("All") | Some("all") => Ok(None),
        Some(value) => value.parse().map(Some),
    }
}

/// Parse an optional value, falling back to its default when absent or blank.
pub fn parse_or_default<T>(raw: Option<&str>) -> Result<T, CoreError>
where
    T: FromStr<Err = CoreError> + Default,
{
    match raw.map(str::trim) {
        None | Some("") => Ok(T::default()),
        Some(value) => value.parse(),
    }
}

#[cfg(test)]
mod tests {
    use sitetrack_core::status::TaskStatus;
    use sitetrack_db::views::SortOrder;

    use super::*;

    #[test]
    fn all_and_blank_mean_no_filter() {
        assert_eq!(parse_selector::<TaskStatus>(None), Ok(None));
        assert_eq!(parse_selector::<TaskStatus>(Some("All")), Ok(None));
        assert_eq!(parse_selector::<TaskStatus>(Some(" ")), Ok(None));
        assert_eq!(
            parse_selector::<TaskStatus>(Some("Completed")),
            Ok(Some(TaskStatus::Completed))
        );
        assert!(parse_selector::<TaskStatus>(Some("Done")).is_err());
    }

    #[test]
    fn defaults_fill_missing_values() {
        assert_eq!(parse_or_default::<SortOrder>(None), Ok(SortOrder::Asc));
        assert_eq!(parse_or_default::<SortOrder>(Some("desc")), Ok(SortOrder::Desc));
        assert!(parse_or_default::<SortOrder>(Some("sideways")).is_err());
    }
}

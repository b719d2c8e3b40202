//! Expiration date parsing and validation

use chrono::{Local, NaiveDate};
use lazy_static::lazy_static;
use regex::Regex;

use crate::cdl::CdlValidationError;

lazy_static! {
    /// MM/DD/YYYY or M/D/YY
    static ref SLASH_MONTH_FIRST: Regex = Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{2,4})$").unwrap();

    /// YYYY-MM-DD
    static ref ISO_YEAR_FIRST: Regex = Regex::new(r"^(\d{4})-(\d{1,2})-(\d{1,2})$").unwrap();

    /// MM-DD-YYYY or M-D-YY
    static ref DASH_MONTH_FIRST: Regex = Regex::new(r"^(\d{1,2})-(\d{1,2})-(\d{2,4})$").unwrap();
}

/// Two-digit years pivot at 50: 49 -> 2049, 50 -> 1950. ISO input always
/// carries four digits so the pivot never applies to it.
fn normalize_year(year: i32) -> i32 {
    if year < 100 {
        if year < 50 {
            2000 + year
        } else {
            1900 + year
        }
    } else {
        year
    }
}

/// Formats are tried in a fixed priority order; the first full match
/// wins. Dates that match a pattern but name no real calendar day
/// (Feb 30) come back None.
fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Some(cap) = SLASH_MONTH_FIRST.captures(raw) {
        let month: u32 = cap[1].parse().ok()?;
        let day: u32 = cap[2].parse().ok()?;
        let year = normalize_year(cap[3].parse().ok()?);
        return NaiveDate::from_ymd_opt(year, month, day);
    }

    if let Some(cap) = ISO_YEAR_FIRST.captures(raw) {
        let year: i32 = cap[1].parse().ok()?;
        let month: u32 = cap[2].parse().ok()?;
        let day: u32 = cap[3].parse().ok()?;
        return NaiveDate::from_ymd_opt(year, month, day);
    }

    if let Some(cap) = DASH_MONTH_FIRST.captures(raw) {
        let month: u32 = cap[1].parse().ok()?;
        let day: u32 = cap[2].parse().ok()?;
        let year = normalize_year(cap[3].parse().ok()?);
        return NaiveDate::from_ymd_opt(year, month, day);
    }

    None
}

/// Validate an expiration date string against the local calendar date.
pub fn validate_expiration_date(raw: &str) -> Result<NaiveDate, CdlValidationError> {
    validate_expiration_date_as_of(raw, Local::now().date_naive())
}

/// Pure form: validate against an explicit "today". Past dates fail with
/// a month count, floor(days / 30).
pub fn validate_expiration_date_as_of(
    raw: &str,
    today: NaiveDate,
) -> Result<NaiveDate, CdlValidationError> {
    if raw.trim().is_empty() {
        return Err(CdlValidationError::MissingDate);
    }

    let date = parse_date(raw).ok_or(CdlValidationError::InvalidDateFormat)?;

    if date < today {
        let months = (today - date).num_days() / 30;
        return Err(CdlValidationError::Expired(months));
    }

    Ok(date)
}

/// Long-form display: "December 31, 2030". Absent date renders empty.
pub fn format_date_for_display(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => d.format("%B %-d, %Y").to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()
    }

    #[test]
    fn test_slash_format() {
        let date = validate_expiration_date_as_of("12/31/2030", today()).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2030, 12, 31).unwrap());
    }

    #[test]
    fn test_single_digit_slash_format() {
        let date = validate_expiration_date_as_of("1/5/2030", today()).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2030, 1, 5).unwrap());
    }

    #[test]
    fn test_iso_format() {
        let date = validate_expiration_date_as_of("2030-12-31", today()).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2030, 12, 31).unwrap());
    }

    #[test]
    fn test_dash_month_first_format() {
        let date = validate_expiration_date_as_of("12-31-2030", today()).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2030, 12, 31).unwrap());
    }

    #[test]
    fn test_two_digit_year_pivot() {
        // checked against an early "today" so neither side of the pivot
        // is rejected as expired before the parse is observable
        let base = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap();
        assert_eq!(
            validate_expiration_date_as_of("01/01/20", base).unwrap(),
            NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
        );
        assert_eq!(
            validate_expiration_date_as_of("01/01/75", base).unwrap(),
            NaiveDate::from_ymd_opt(1975, 1, 1).unwrap()
        );
        assert_eq!(
            validate_expiration_date_as_of("01-01-49", base).unwrap(),
            NaiveDate::from_ymd_opt(2049, 1, 1).unwrap()
        );
        assert_eq!(
            validate_expiration_date_as_of("01-01-50", base).unwrap(),
            NaiveDate::from_ymd_opt(1950, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(
            validate_expiration_date_as_of("", today()),
            Err(CdlValidationError::MissingDate)
        );
        assert_eq!(
            validate_expiration_date_as_of("  ", today()),
            Err(CdlValidationError::MissingDate)
        );
    }

    #[test]
    fn test_rejects_unparseable() {
        assert_eq!(
            validate_expiration_date_as_of("next year", today()),
            Err(CdlValidationError::InvalidDateFormat)
        );
        assert_eq!(
            validate_expiration_date_as_of("12/31", today()),
            Err(CdlValidationError::InvalidDateFormat)
        );
    }

    #[test]
    fn test_rejects_impossible_calendar_dates() {
        assert_eq!(
            validate_expiration_date_as_of("02/30/2030", today()),
            Err(CdlValidationError::InvalidDateFormat)
        );
        assert_eq!(
            validate_expiration_date_as_of("13/01/2030", today()),
            Err(CdlValidationError::InvalidDateFormat)
        );
    }

    #[test]
    fn test_rejects_past_date_with_month_count() {
        // one year back: 365 / 30 = 12 months
        let err = validate_expiration_date_as_of("08/06/2025", today()).unwrap_err();
        assert_eq!(err, CdlValidationError::Expired(12));
        assert!(err.to_string().contains("expired"));
        assert!(err.to_string().contains("12 months"));
    }

    #[test]
    fn test_singular_month_wording() {
        // ~5 weeks back floors to 1 month
        let err = validate_expiration_date_as_of("07/01/2026", today()).unwrap_err();
        assert_eq!(err, CdlValidationError::Expired(1));
        assert_eq!(err.to_string(), "This CDL expired 1 month ago");
    }

    #[test]
    fn test_today_is_not_expired() {
        let date = validate_expiration_date_as_of("08/06/2026", today()).unwrap();
        assert_eq!(date, today());
    }

    #[test]
    fn test_format_for_display() {
        let date = NaiveDate::from_ymd_opt(2030, 12, 31).unwrap();
        assert_eq!(format_date_for_display(Some(date)), "December 31, 2030");
        assert_eq!(
            format_date_for_display(Some(NaiveDate::from_ymd_opt(2026, 1, 5).unwrap())),
            "January 5, 2026"
        );
        assert_eq!(format_date_for_display(None), "");
    }
}

//! Commercial driver's-license validation
//!
//! Onboarding collects a license number and an expiration date; both are
//! checked here before the document can be submitted. Failures are
//! returned values with driver-facing messages, never panics.

pub mod expiration;
pub mod license;
pub mod states;

pub use expiration::{
    format_date_for_display, validate_expiration_date, validate_expiration_date_as_of,
};
pub use license::{validate_cdl_number, CdlLicense, TEMPORARY_CDL_MARKERS};
pub use states::StateCode;

use chrono::NaiveDate;
use thiserror::Error;

/// Why a CDL submission was rejected. The display strings are shown to
/// drivers as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CdlValidationError {
    #[error("CDL number is required")]
    MissingNumber,

    #[error("Temporary licenses not accepted")]
    TemporaryLicense,

    #[error("CDL number too short")]
    TooShort,

    #[error("Invalid state code")]
    InvalidStateCode,

    #[error("CDL must contain 7-10 digits after state code")]
    InvalidDigits,

    #[error("Expiration date is required")]
    MissingDate,

    #[error("Invalid date format (use MM/DD/YYYY)")]
    InvalidDateFormat,

    #[error("{}", expired_message(.0))]
    Expired(i64),
}

fn expired_message(months: &i64) -> String {
    if *months == 1 {
        "This CDL expired 1 month ago".to_string()
    } else {
        format!("This CDL expired {} months ago", months)
    }
}

/// A license number and expiration date that both passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedCdl {
    pub number: String,
    pub state: StateCode,
    pub expiration: NaiveDate,
}

/// Combined onboarding check: number first, then date; the first failure
/// wins.
pub fn parse_and_validate_cdl(
    number: &str,
    expiration: &str,
) -> Result<ValidatedCdl, CdlValidationError> {
    let license = license::validate_cdl_number(number)?;
    let date = expiration::validate_expiration_date(expiration)?;
    Ok(ValidatedCdl {
        number: license.number,
        state: license.state,
        expiration: date,
    })
}

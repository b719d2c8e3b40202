//! CDL number validation: state prefix + digit run

use lazy_static::lazy_static;
use regex::Regex;

use crate::cdl::states::StateCode;
use crate::cdl::CdlValidationError;

/// Substrings that mark a temporary or learner credential. Matched as
/// plain substrings against the normalized number, not whole tokens:
/// "DL" in particular can hit legitimate numbers with adjacent D and L.
/// Preserved pending product confirmation; see DESIGN.md.
pub const TEMPORARY_CDL_MARKERS: &[&str] = &["TEMP", "TEMPORARY", "LEARNER", "PERMIT", "DL", "D/L"];

lazy_static! {
    /// 7 to 10 ASCII digits, nothing else
    static ref LICENSE_DIGITS: Regex = Regex::new(r"^\d{7,10}$").unwrap();
}

/// A license number that passed validation: normalized uppercase, state
/// prefix resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CdlLicense {
    pub number: String,
    pub state: StateCode,
}

/// Validate a raw license-number string. Short-circuits on the first
/// failure, in the order drivers see the errors.
pub fn validate_cdl_number(raw: &str) -> Result<CdlLicense, CdlValidationError> {
    if raw.trim().is_empty() {
        return Err(CdlValidationError::MissingNumber);
    }

    let clean = raw.to_uppercase().trim().to_string();

    if TEMPORARY_CDL_MARKERS
        .iter()
        .any(|marker| clean.contains(marker))
    {
        return Err(CdlValidationError::TemporaryLicense);
    }

    if clean.chars().count() < 9 {
        return Err(CdlValidationError::TooShort);
    }

    let prefix: String = clean.chars().take(2).collect();
    let digits: String = clean.chars().skip(2).collect();

    let state = StateCode::parse(&prefix).ok_or(CdlValidationError::InvalidStateCode)?;

    if !LICENSE_DIGITS.is_match(&digits) {
        return Err(CdlValidationError::InvalidDigits);
    }

    Ok(CdlLicense {
        number: clean,
        state,
    })
}

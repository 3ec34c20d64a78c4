use crate::checksum::{check_digit, is_in_issued_range};
use crate::config::{ValidatorConfig, WeightOrder};
use crate::error::NhsNumberError;
use crate::nhs_number::NhsNumber;
use crate::normalization::strip_separators;

const NHS_NUMBER_LENGTH: usize = 10;

pub trait Validator: Send + Sync {
    fn is_valid_match(&self, candidate: &str) -> bool;
}

/// Returns whether the candidate is a valid NHS number, using the default
/// [`WeightOrder`]. Never panics, whatever the input.
///
/// Spaces and hyphens are ignored, so `"400 000 0003"` and `"400-000-0003"` are
/// both accepted. Any other non-digit character makes the candidate invalid.
pub fn is_valid(candidate: &str) -> bool {
    validate(candidate).is_ok()
}

/// Same checks as [`is_valid`], but reports which one failed first.
pub fn validate(candidate: &str) -> Result<NhsNumber, NhsNumberError> {
    validate_with_order(candidate, WeightOrder::default()).map(NhsNumber::from_validated)
}

/// Runs every check and returns the numeric value of the candidate.
fn validate_with_order(candidate: &str, weight_order: WeightOrder) -> Result<u64, NhsNumberError> {
    if candidate.is_empty() {
        return Err(NhsNumberError::Empty);
    }

    let digits = strip_separators(candidate);
    let length = digits.chars().count();
    if length != NHS_NUMBER_LENGTH {
        return Err(NhsNumberError::InvalidLength { length });
    }

    let value = parse_digits(&digits)?;
    // at most 999_999_999 since value has 10 digits
    let base = (value / 10) as u32;
    if !is_in_issued_range(base) {
        return Err(NhsNumberError::OutOfRange { base });
    }
    let provided = (value % 10) as u8;

    match check_digit(base, weight_order) {
        None => Err(NhsNumberError::UncomputableCheckDigit { base }),
        Some(expected) if expected != provided => {
            Err(NhsNumberError::CheckDigitMismatch { expected, provided })
        }
        Some(_) => Ok(value),
    }
}

/// Reads the digits as a base-10 integer. Signs are not accepted, only `0-9`.
fn parse_digits(digits: &str) -> Result<u64, NhsNumberError> {
    digits.chars().try_fold(0u64, |value, character| {
        character
            .to_digit(10)
            .map(|digit| value * 10 + u64::from(digit))
            .ok_or(NhsNumberError::NonDigit { character })
    })
}

/// NHS number validator with a configurable weight order.
///
/// https://www.datadictionary.nhs.uk/attributes/nhs_number.html
/// The NHS number is a 10-digit number in the format 123 456 7890.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NhsCheckDigit {
    config: ValidatorConfig,
}

impl NhsCheckDigit {
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Reports why the candidate fails under the configured weight order. No
    /// [`NhsNumber`] is handed out, since those always parse back with the default
    /// order.
    pub fn validate(&self, candidate: &str) -> Result<(), NhsNumberError> {
        validate_with_order(candidate, self.config.weight_order).map(|_| ())
    }
}

impl Validator for NhsCheckDigit {
    fn is_valid_match(&self, candidate: &str) -> bool {
        self.validate(candidate).is_ok()
    }
}

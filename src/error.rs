use strum::IntoStaticStr;
use thiserror::Error;

/// Why a candidate is not a valid NHS number, in the order the checks run.
#[derive(Debug, Clone, PartialEq, Eq, Error, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum NhsNumberError {
    #[error("The candidate is empty")]
    Empty,

    #[error("Expected 10 digits once separators are removed, found {length} characters")]
    InvalidLength { length: usize },

    #[error("Unexpected character {character:?}, only digits, spaces and hyphens are allowed")]
    NonDigit { character: char },

    #[error("{base:09} is not in the range of issued numbers")]
    OutOfRange { base: u32 },

    #[error("No check digit exists for {base:09}")]
    UncomputableCheckDigit { base: u32 },

    #[error("Check digit {provided} does not match the computed check digit {expected}")]
    CheckDigitMismatch { expected: u8, provided: u8 },
}

impl NhsNumberError {
    /// Short, stable name of the failure, suitable as a metric label.
    pub fn reason(&self) -> &'static str {
        self.into()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn reasons_are_snake_case() {
        assert_eq!(NhsNumberError::Empty.reason(), "empty");
        assert_eq!(
            NhsNumberError::InvalidLength { length: 9 }.reason(),
            "invalid_length"
        );
        assert_eq!(
            NhsNumberError::UncomputableCheckDigit { base: 400_000_007 }.reason(),
            "uncomputable_check_digit"
        );
        assert_eq!(
            NhsNumberError::CheckDigitMismatch {
                expected: 3,
                provided: 4
            }
            .reason(),
            "check_digit_mismatch"
        );
    }

    #[test]
    fn messages_pad_the_base() {
        assert_eq!(
            NhsNumberError::OutOfRange { base: 12_345 }.to_string(),
            "000012345 is not in the range of issued numbers"
        );
    }
}

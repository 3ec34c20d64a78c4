use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NhsNumberError;
use crate::validator::validate;

/// A 10-digit number that passed validation with the default weight order.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct NhsNumber(u64);

impl NhsNumber {
    pub(crate) fn from_validated(value: u64) -> Self {
        NhsNumber(value)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }

    /// The first 9 digits.
    pub fn base(&self) -> u32 {
        (self.0 / 10) as u32
    }

    pub fn check_digit(&self) -> u8 {
        (self.0 % 10) as u8
    }
}

/// Formats as `XXX XXX XXXX`.
impl fmt::Display for NhsNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:03} {:03} {:04}",
            self.0 / 10_000_000,
            self.0 / 10_000 % 1000,
            self.0 % 10_000
        )
    }
}

impl FromStr for NhsNumber {
    type Err = NhsNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate(s)
    }
}

impl TryFrom<String> for NhsNumber {
    type Error = NhsNumberError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<NhsNumber> for String {
    fn from(value: NhsNumber) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_test::{assert_de_tokens_error, assert_tokens, Token};

    #[test]
    fn accessors() {
        let number: NhsNumber = "400-000-0080".parse().unwrap();
        assert_eq!(number.as_u64(), 4_000_000_080);
        assert_eq!(number.base(), 400_000_008);
        assert_eq!(number.check_digit(), 0);
    }

    #[test]
    fn displays_in_groups() {
        let number: NhsNumber = "7999999992".parse().unwrap();
        assert_eq!(number.to_string(), "799 999 9992");
        let number: NhsNumber = "4000000080".parse().unwrap();
        assert_eq!(number.to_string(), "400 000 0080");
    }

    #[test]
    fn display_parses_back() {
        let number: NhsNumber = "4000000003".parse().unwrap();
        assert_eq!(number.to_string().parse::<NhsNumber>(), Ok(number));
    }

    #[test]
    fn parse_reports_error() {
        assert_eq!(
            "4000000004".parse::<NhsNumber>(),
            Err(NhsNumberError::CheckDigitMismatch {
                expected: 3,
                provided: 4
            })
        );
    }

    #[test]
    fn serializes_as_formatted_string() {
        let number: NhsNumber = "4000000003".parse().unwrap();
        assert_tokens(&number, &[Token::Str("400 000 0003")]);
    }

    #[test]
    fn deserialization_validates() {
        assert_de_tokens_error::<NhsNumber>(
            &[Token::Str("5000000019")],
            "500000001 is not in the range of issued numbers",
        );
    }
}

// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod checksum;
mod config;
mod error;
mod nhs_number;
mod normalization;
mod observability;
mod sweep;
mod validator;

// This is the public API of the crate
pub use checksum::{check_digit, check_value, is_in_issued_range, weighted_digit_sum};
pub use config::{ConfigError, SeparatorStyle, SweepConfig, ValidatorConfig, WeightOrder};
pub use error::NhsNumberError;
pub use nhs_number::NhsNumber;
pub use normalization::strip_separators;
pub use sweep::{format_candidate, sweep, SweepReport};
pub use validator::{is_valid, validate, NhsCheckDigit, Validator};

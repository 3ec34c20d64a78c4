use afl::fuzz;
use nhs_number::{is_valid, strip_separators, validate, NhsCheckDigit, Validator};

#[cfg(not(feature = "manual_test"))]
fn main() {
    fuzz!(|data: &[u8]| {
        run_raw_fuzz(data);
    });
}

#[cfg(feature = "manual_test")]
fn main() {
    use std::io::{stdin, Read};

    let mut input = vec![];
    stdin().read_to_end(&mut input).unwrap();
    run_raw_fuzz(&input);
}

fn run_raw_fuzz(bytes: &[u8]) -> Option<()> {
    let candidate = std::str::from_utf8(bytes).ok()?;
    run_fuzz(candidate);
    Some(())
}

fn run_fuzz(candidate: &str) {
    let valid = is_valid(candidate);
    assert_eq!(valid, validate(candidate).is_ok());
    assert_eq!(valid, NhsCheckDigit::default().is_valid_match(candidate));

    // separators never change the outcome
    let stripped = strip_separators(candidate);
    if !stripped.is_empty() {
        assert_eq!(valid, is_valid(&stripped));
    }

    if let Ok(number) = validate(candidate) {
        assert_eq!(validate(&number.to_string()), Ok(number));
    }
}

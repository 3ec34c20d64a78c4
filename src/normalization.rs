/// Characters that may be used to group the digits of a candidate, e.g. `943 476 5919`
/// or `943-476-5919`.
const SEPARATORS: [char; 2] = [' ', '-'];

/// Removes every separator from the candidate, keeping the relative order of
/// everything else. No other character is touched, so a sign like `+` survives and
/// gets rejected later as a non-digit.
pub fn strip_separators(candidate: &str) -> String {
    candidate
        .chars()
        .filter(|c| !SEPARATORS.contains(c))
        .collect()
}

use crate::config::WeightOrder;

/// Number of digits in the base, i.e. everything but the check digit.
pub(crate) const BASE_DIGITS: u32 = 9;
const MAX_WEIGHT: u32 = 10;
const MIN_WEIGHT: u32 = 2;
const MODULO: u32 = 11;

const ISSUED_RANGE: std::ops::Range<u32> = 400_000_000..800_000_000;
const RESERVED_RANGE: std::ops::Range<u32> = 500_000_000..600_000_000;

/// Whether the base (the number without its check digit) falls in the range of
/// numbers in use. See http://systems.hscic.gov.uk/nhsnumber/staff/comms/4788factsheet.pdf
pub fn is_in_issued_range(base: u32) -> bool {
    ISSUED_RANGE.contains(&base) && !RESERVED_RANGE.contains(&base)
}

/// Sum of `weight * digit` over exactly 9 digits of `base`. Digits are extracted
/// from the least significant end, so a base with fewer significant digits is
/// zero padded on the left.
pub fn weighted_digit_sum(base: u32, weight_order: WeightOrder) -> u32 {
    let mut remaining = base;
    let mut total = 0;
    for position in 0..BASE_DIGITS {
        let digit = remaining % 10;
        remaining /= 10;
        let weight = match weight_order {
            WeightOrder::LeastSignificantFirst => MAX_WEIGHT - position,
            WeightOrder::MostSignificantFirst => MIN_WEIGHT + position,
        };
        total += weight * digit;
    }
    total
}

/// `11 - (total mod 11)`, always in `1..=11`.
pub fn check_value(base: u32, weight_order: WeightOrder) -> u32 {
    MODULO - weighted_digit_sum(base, weight_order) % MODULO
}

/// The check digit a number with this base must end with. `None` when the check
/// value is 10, which has no single digit representation: no number with this base
/// is valid.
pub fn check_digit(base: u32, weight_order: WeightOrder) -> Option<u8> {
    match check_value(base, weight_order) {
        10 => None,
        11 => Some(0),
        // at most 9 here
        value => Some(value as u8),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use WeightOrder::{LeastSignificantFirst, MostSignificantFirst};

    #[test]
    fn issued_range_bounds() {
        assert!(!is_in_issued_range(0));
        assert!(!is_in_issued_range(399_999_999));
        assert!(is_in_issued_range(400_000_000));
        assert!(is_in_issued_range(499_999_999));
        assert!(!is_in_issued_range(500_000_000));
        assert!(!is_in_issued_range(599_999_999));
        assert!(is_in_issued_range(600_000_000));
        assert!(is_in_issued_range(799_999_999));
        assert!(!is_in_issued_range(800_000_000));
        assert!(!is_in_issued_range(943_476_591));
        assert!(!is_in_issued_range(u32::MAX));
    }

    #[test]
    fn weighted_sum_least_significant_first() {
        // only the leading 4 counts, with weight 2
        assert_eq!(weighted_digit_sum(400_000_000, LeastSignificantFirst), 8);
        // 7 * 10 on the last digit
        assert_eq!(weighted_digit_sum(400_000_007, LeastSignificantFirst), 78);
        // 1*10 + 9*9 + 5*8 + 6*7 + 7*6 + 4*5 + 3*4 + 4*3 + 9*2
        assert_eq!(weighted_digit_sum(943_476_591, LeastSignificantFirst), 277);
    }

    #[test]
    fn weighted_sum_most_significant_first() {
        assert_eq!(weighted_digit_sum(400_000_000, MostSignificantFirst), 40);
        // 9*10 + 4*9 + 3*8 + 4*7 + 7*6 + 6*5 + 5*4 + 9*3 + 1*2
        assert_eq!(weighted_digit_sum(943_476_591, MostSignificantFirst), 299);
    }

    #[test]
    fn short_base_is_zero_padded() {
        assert_eq!(weighted_digit_sum(1, LeastSignificantFirst), 10);
        assert_eq!(weighted_digit_sum(1, MostSignificantFirst), 2);
        assert_eq!(weighted_digit_sum(0, LeastSignificantFirst), 0);
    }

    #[test]
    fn check_value_is_between_1_and_11() {
        assert_eq!(check_value(400_000_000, LeastSignificantFirst), 3);
        assert_eq!(check_value(400_000_007, LeastSignificantFirst), 10);
        assert_eq!(check_value(400_000_008, LeastSignificantFirst), 11);
        assert_eq!(check_value(0, LeastSignificantFirst), 11);
    }

    #[test]
    fn check_digit_remaps_edges() {
        assert_eq!(check_digit(400_000_000, LeastSignificantFirst), Some(3));
        assert_eq!(check_digit(400_000_007, LeastSignificantFirst), None);
        assert_eq!(check_digit(400_000_008, LeastSignificantFirst), Some(0));
        assert_eq!(check_digit(600_000_000, LeastSignificantFirst), None);
        assert_eq!(check_digit(434_539_121, MostSignificantFirst), Some(0));
    }

    #[test]
    fn both_orders_agree_on_943_476_591() {
        assert_eq!(check_digit(943_476_591, LeastSignificantFirst), Some(9));
        assert_eq!(check_digit(943_476_591, MostSignificantFirst), Some(9));
    }
}

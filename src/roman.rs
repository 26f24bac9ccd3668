//! Roman numeral encoding and decoding for `1..=3999`.
//!
//! # Algorithm
//!
//! Greedy subtraction against [`ROMAN_NUMERALS`], walked strictly in
//! descending value order. With the subtractive pairs (`CM`, `CD`, `XC`,
//! `XL`, `IX`, `IV`) in the table, the greedy choice always yields the
//! canonical (shortest) numeral.

use crate::error::{Result, UtilError};

/// Value/symbol table in descending value order.
pub const ROMAN_NUMERALS: [(u32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Largest value expressible without overlined symbols.
pub const MAX_ROMAN: i64 = 3999;

/// Encodes `number` as a canonical roman numeral.
///
/// # Errors
/// `InvalidArgument` if `number` is outside `1..=3999`.
///
/// # Examples
/// ```
/// use u_toolkit::roman::roman_numeral;
/// assert_eq!(roman_numeral(4).unwrap(), "IV");
/// assert_eq!(roman_numeral(1994).unwrap(), "MCMXCIV");
/// assert!(roman_numeral(0).is_err());
/// ```
pub fn roman_numeral(number: i64) -> Result<String> {
    if !(1..=MAX_ROMAN).contains(&number) {
        return Err(UtilError::invalid(
            "roman_numeral",
            format!("number must be between 1 and {MAX_ROMAN}, got {number}"),
        ));
    }
    let mut remaining = number as u32;
    let mut roman = String::new();
    for &(value, symbol) in ROMAN_NUMERALS.iter() {
        while remaining >= value {
            roman.push_str(symbol);
            remaining -= value;
        }
    }
    Ok(roman)
}

/// Decodes a canonical roman numeral back to its value.
///
/// Only the exact output of [`roman_numeral`] is accepted: lowercase,
/// additive forms such as `IIII`, and out-of-order symbols are rejected.
///
/// # Errors
/// `InvalidArgument` if `numeral` is empty, malformed, or not canonical.
///
/// # Examples
/// ```
/// use u_toolkit::roman::parse_roman;
/// assert_eq!(parse_roman("MMXXIV").unwrap(), 2024);
/// assert!(parse_roman("IIII").is_err());
/// ```
pub fn parse_roman(numeral: &str) -> Result<u32> {
    let mut rest = numeral;
    let mut value = 0_u32;
    for &(symbol_value, symbol) in ROMAN_NUMERALS.iter() {
        while let Some(tail) = rest.strip_prefix(symbol) {
            value += symbol_value;
            rest = tail;
            if i64::from(value) > MAX_ROMAN {
                return Err(UtilError::invalid(
                    "parse_roman",
                    format!("{numeral:?} exceeds {MAX_ROMAN}"),
                ));
            }
        }
    }
    if !rest.is_empty() || value == 0 {
        return Err(UtilError::invalid(
            "parse_roman",
            format!("malformed roman numeral {numeral:?}"),
        ));
    }
    match roman_numeral(i64::from(value)) {
        Ok(canonical) if canonical == numeral => Ok(value),
        _ => Err(UtilError::invalid(
            "parse_roman",
            format!("{numeral:?} is not a canonical roman numeral"),
        )),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_descending() {
        assert!(ROMAN_NUMERALS.windows(2).all(|w| w[0].0 > w[1].0));
    }

    #[test]
    fn test_roman_known_values() {
        let cases = [
            (1, "I"),
            (3, "III"),
            (4, "IV"),
            (9, "IX"),
            (14, "XIV"),
            (40, "XL"),
            (90, "XC"),
            (400, "CD"),
            (444, "CDXLIV"),
            (900, "CM"),
            (1994, "MCMXCIV"),
            (2024, "MMXXIV"),
            (3888, "MMMDCCCLXXXVIII"),
            (3999, "MMMCMXCIX"),
        ];
        for (n, expected) in cases {
            assert_eq!(roman_numeral(n).unwrap(), expected, "n = {n}");
        }
    }

    #[test]
    fn test_roman_out_of_range() {
        for n in [i64::MIN, -1, 0, 4000, i64::MAX] {
            assert!(
                matches!(
                    roman_numeral(n),
                    Err(UtilError::InvalidArgument { function: "roman_numeral", .. })
                ),
                "n = {n}"
            );
        }
    }

    #[test]
    fn test_roman_round_trip_exhaustive() {
        for n in 1..=MAX_ROMAN {
            let encoded = roman_numeral(n).unwrap();
            assert_eq!(i64::from(parse_roman(&encoded).unwrap()), n);
        }
    }

    #[test]
    fn test_parse_rejects_oversized_input() {
        let huge = "M".repeat(4_294_968);
        assert!(matches!(
            parse_roman(&huge),
            Err(UtilError::InvalidArgument { function: "parse_roman", .. })
        ));
        assert!(parse_roman("MMMMI").is_err());
    }

    #[test]
    fn test_parse_rejects_non_canonical() {
        for bad in ["", "IIII", "VV", "IL", "IC", "XM", "MMMM", "iv", "IVI", "ABC", "M M"] {
            assert!(parse_roman(bad).is_err(), "{bad:?} should be rejected");
        }
    }
}

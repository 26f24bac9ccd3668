//! Integer predicates and small number helpers.
//!
//! # Remainder convention
//!
//! Parity and divisibility use Rust's `%`, the **truncated** remainder:
//! the result takes the sign of the dividend (`-3 % 2 == -1`). This means
//! `is_odd` is false for negative odd numbers, and floats with a fractional
//! part are neither even nor odd. Callers who want Euclidean semantics
//! should normalize with `rem_euclid` first.

use std::ops::Rem;

use crate::error::{Result, UtilError};

/// Primitive numbers that parity can be tested on.
///
/// Implemented for every integer and float primitive.
pub trait Parity: Copy + Rem<Output = Self> + PartialEq {
    const ZERO: Self;
    const ONE: Self;
    const TWO: Self;
}

macro_rules! impl_parity {
    ($zero:literal, $one:literal, $two:literal => $($t:ty),*) => {
        $(impl Parity for $t {
            const ZERO: Self = $zero;
            const ONE: Self = $one;
            const TWO: Self = $two;
        })*
    };
}

impl_parity!(0, 1, 2 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_parity!(0.0, 1.0, 2.0 => f32, f64);

/// Returns true if `n % 2 == 0`.
///
/// # Examples
/// ```
/// use u_toolkit::numeric::is_even;
/// assert!(is_even(4));
/// assert!(is_even(-4));
/// assert!(!is_even(2.5_f64));
/// ```
pub fn is_even<T: Parity>(n: T) -> bool {
    n % T::TWO == T::ZERO
}

/// Returns true if `n % 2 == 1`.
///
/// Negative odd numbers have remainder `-1` and are **not** odd under this
/// definition.
///
/// # Examples
/// ```
/// use u_toolkit::numeric::is_odd;
/// assert!(is_odd(3));
/// assert!(!is_odd(-3));
/// ```
pub fn is_odd<T: Parity>(n: T) -> bool {
    n % T::TWO == T::ONE
}

/// Primality by exhaustive trial division.
///
/// Returns false for `n < 2`; otherwise tests every divisor in `2..n`.
///
/// # Complexity
/// Time: O(n). There is no square-root cutoff, so large primes are slow.
///
/// # Examples
/// ```
/// use u_toolkit::numeric::is_prime;
/// assert!(is_prime(2));
/// assert!(is_prime(17));
/// assert!(!is_prime(18));
/// assert!(!is_prime(1));
/// ```
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    (2..n).all(|i| n % i != 0)
}

/// Returns true if `divisor` divides `n` with zero remainder.
///
/// # Errors
/// `DivisionByZero` if `divisor == 0`.
///
/// # Examples
/// ```
/// use u_toolkit::numeric::is_divisible_by;
/// assert_eq!(is_divisible_by(12, 4), Ok(true));
/// assert_eq!(is_divisible_by(12, 5), Ok(false));
/// assert!(is_divisible_by(12, 0).is_err());
/// ```
pub fn is_divisible_by(n: i64, divisor: i64) -> Result<bool> {
    if divisor == 0 {
        return Err(UtilError::division_by_zero("is_divisible_by"));
    }
    // i64::MIN % -1 overflows; the mathematical remainder is 0.
    Ok(n.wrapping_rem(divisor) == 0)
}

/// Returns the `n`-th Fibonacci number with `fibonacci(1) == fibonacci(2) == 1`.
///
/// # Errors
/// - `InvalidArgument` if `n < 1`.
/// - `InvalidArgument` if the result does not fit in `u64` (`n > 93`).
///
/// # Examples
/// ```
/// use u_toolkit::numeric::fibonacci;
/// assert_eq!(fibonacci(10), Ok(55));
/// ```
pub fn fibonacci(n: u32) -> Result<u64> {
    if n < 1 {
        return Err(UtilError::invalid(
            "fibonacci",
            "number must be greater than 0",
        ));
    }
    let (mut prev, mut curr) = (0_u64, 1_u64);
    for _ in 1..n {
        let next = prev.checked_add(curr).ok_or_else(|| {
            UtilError::invalid("fibonacci", format!("fibonacci({n}) overflows u64"))
        })?;
        prev = curr;
        curr = next;
    }
    Ok(curr)
}

/// Formats an integer with `separator` between groups of three digits.
///
/// # Examples
/// ```
/// use u_toolkit::numeric::format_thousands;
/// assert_eq!(format_thousands(1234567, ","), "1,234,567");
/// assert_eq!(format_thousands(-1000, " "), "-1 000");
/// ```
pub fn format_thousands(n: i64, separator: &str) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * separator.len() + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // --- parity ---

    #[test]
    fn test_parity_positive() {
        assert!(is_even(0));
        assert!(is_even(10_i64));
        assert!(is_odd(7_u32));
        assert!(!is_odd(8_i32));
    }

    #[test]
    fn test_parity_negative_truncated_remainder() {
        assert_eq!(-3 % 2, -1);
        assert!(!is_odd(-3));
        assert!(!is_even(-3));
        assert!(is_even(-4));
        assert!(!is_odd(-4));
    }

    #[test]
    fn test_parity_floats() {
        assert!(is_even(4.0_f64));
        assert!(is_odd(5.0_f64));
        assert!(!is_even(2.5_f64));
        assert!(!is_odd(2.5_f64));
        assert!(!is_odd(-5.0_f64));
    }

    #[test]
    fn test_parity_small_and_wide_primitives() {
        assert!(is_even(-128_i8));
        assert!(is_odd(127_i8));
        assert!(!is_odd(-3_i8));
        assert!(is_odd(255_u8));
        assert!(is_even(u128::MAX - 1));
        assert!(is_odd(3_isize));
        assert!(is_even(6.0_f32));
        assert!(!is_even(0.5_f32));
    }

    #[test]
    fn test_parity_extremes() {
        assert!(is_even(i64::MIN));
        assert!(is_odd(i64::MAX));
        assert!(is_odd(u64::MAX));
    }

    // --- primality ---

    #[test]
    fn test_is_prime_small() {
        assert!(!is_prime(-7));
        assert!(!is_prime(0));
        assert!(!is_prime(1));
        assert!(is_prime(2));
        assert!(is_prime(3));
        assert!(!is_prime(4));
        assert!(is_prime(17));
        assert!(!is_prime(18));
    }

    #[test]
    fn test_is_prime_first_primes() {
        let primes: Vec<i64> = (0..50).filter(|&n| is_prime(n)).collect();
        assert_eq!(
            primes,
            vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47]
        );
    }

    #[test]
    fn test_is_prime_larger_values() {
        assert!(!is_prime(49));
        assert!(!is_prime(7919 * 2));
        assert!(is_prime(7919));
    }

    // --- divisibility ---

    #[test]
    fn test_is_divisible_by() {
        assert_eq!(is_divisible_by(10, 5), Ok(true));
        assert_eq!(is_divisible_by(10, 3), Ok(false));
        assert_eq!(is_divisible_by(-10, 5), Ok(true));
        assert_eq!(is_divisible_by(10, -5), Ok(true));
        assert_eq!(is_divisible_by(0, 7), Ok(true));
    }

    #[test]
    fn test_is_divisible_by_zero() {
        assert_eq!(
            is_divisible_by(10, 0),
            Err(UtilError::DivisionByZero {
                function: "is_divisible_by"
            })
        );
        assert!(is_divisible_by(0, 0).is_err());
    }

    #[test]
    fn test_is_divisible_by_min_minus_one() {
        assert_eq!(is_divisible_by(i64::MIN, -1), Ok(true));
    }

    // --- fibonacci ---

    #[test]
    fn test_fibonacci_base_cases() {
        assert_eq!(fibonacci(1), Ok(1));
        assert_eq!(fibonacci(2), Ok(1));
        assert_eq!(fibonacci(3), Ok(2));
        assert_eq!(fibonacci(20), Ok(6765));
    }

    #[test]
    fn test_fibonacci_zero() {
        assert!(matches!(
            fibonacci(0),
            Err(UtilError::InvalidArgument { function: "fibonacci", .. })
        ));
    }

    #[test]
    fn test_fibonacci_overflow_boundary() {
        assert_eq!(fibonacci(93), Ok(12_200_160_415_121_876_738));
        assert!(fibonacci(94).is_err());
    }

    // --- format_thousands ---

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0, ","), "0");
        assert_eq!(format_thousands(999, ","), "999");
        assert_eq!(format_thousands(1000, ","), "1,000");
        assert_eq!(format_thousands(123456, "."), "123.456");
        assert_eq!(format_thousands(-9876543, ","), "-9,876,543");
    }

    #[test]
    fn test_format_thousands_extremes() {
        assert_eq!(format_thousands(i64::MIN, ","), "-9,223,372,036,854,775,808");
        assert_eq!(format_thousands(i64::MAX, ""), i64::MAX.to_string());
    }
}

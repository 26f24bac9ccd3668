//! Left-fold arithmetic reducers and a few constants.
//!
//! The reducers fold `data[0] op data[1] op ...` from the left with plain
//! `f64` arithmetic (no compensated summation), and reject input that
//! would otherwise produce a silent NaN or infinity:
//!
//! - empty input fails with `EmptyInput`;
//! - a zero divisor in [`quotient`] or [`modulo`] fails with
//!   `DivisionByZero`.

use std::f64::consts;

use crate::error::{Result, UtilError};

/// Largest number of decimals accepted by [`pi`] and [`e`].
pub const MAX_DECIMALS: usize = 100;

fn fold(
    function: &'static str,
    data: &[f64],
    op: impl Fn(f64, f64) -> Result<f64>,
) -> Result<f64> {
    let (&first, rest) = data
        .split_first()
        .ok_or_else(|| UtilError::empty(function))?;
    rest.iter().try_fold(first, |acc, &x| op(acc, x))
}

/// `data[0] + data[1] + ...`
///
/// # Examples
/// ```
/// use u_toolkit::math::sum;
/// assert_eq!(sum(&[1.0, 2.0, 3.5]).unwrap(), 6.5);
/// assert!(sum(&[]).is_err());
/// ```
pub fn sum(data: &[f64]) -> Result<f64> {
    fold("sum", data, |a, b| Ok(a + b))
}

/// `data[0] - data[1] - ...`
pub fn difference(data: &[f64]) -> Result<f64> {
    fold("difference", data, |a, b| Ok(a - b))
}

/// `data[0] * data[1] * ...`
pub fn product(data: &[f64]) -> Result<f64> {
    fold("product", data, |a, b| Ok(a * b))
}

/// `data[0] / data[1] / ...`
///
/// # Errors
/// - `EmptyInput` if `data` is empty.
/// - `DivisionByZero` if any element after the first is zero.
pub fn quotient(data: &[f64]) -> Result<f64> {
    fold("quotient", data, |a, b| {
        if b == 0.0 {
            Err(UtilError::division_by_zero("quotient"))
        } else {
            Ok(a / b)
        }
    })
}

/// `data[0] % data[1] % ...` with the truncated remainder.
///
/// # Errors
/// - `EmptyInput` if `data` is empty.
/// - `DivisionByZero` if any element after the first is zero.
///
/// # Examples
/// ```
/// use u_toolkit::math::modulo;
/// assert_eq!(modulo(&[17.0, 5.0]).unwrap(), 2.0);
/// assert_eq!(modulo(&[-7.0, 3.0]).unwrap(), -1.0);
/// ```
pub fn modulo(data: &[f64]) -> Result<f64> {
    fold("modulo", data, |a, b| {
        if b == 0.0 {
            Err(UtilError::division_by_zero("modulo"))
        } else {
            Ok(a % b)
        }
    })
}

/// Arithmetic mean, `sum(data) / data.len()`.
///
/// # Examples
/// ```
/// use u_toolkit::math::average;
/// assert_eq!(average(&[2.0, 4.0, 9.0]).unwrap(), 5.0);
/// ```
pub fn average(data: &[f64]) -> Result<f64> {
    if data.is_empty() {
        return Err(UtilError::empty("average"));
    }
    Ok(sum(data)? / data.len() as f64)
}

/// Product of `times` descending factors starting at `n`:
/// `n · (n−1) · … · (n−times+1)`.
///
/// `n == 0` yields 1. If `times > n` a zero factor is reached and the
/// result is 0.
///
/// # Errors
/// `InvalidArgument` if the product overflows `u64`.
///
/// # Examples
/// ```
/// use u_toolkit::math::falling_factorial;
/// assert_eq!(falling_factorial(5, 2).unwrap(), 20);
/// assert_eq!(falling_factorial(5, 1).unwrap(), 5);
/// ```
pub fn falling_factorial(n: u64, times: u64) -> Result<u64> {
    if n == 0 {
        return Ok(1);
    }
    if times > n {
        return Ok(0);
    }
    (0..times).try_fold(1_u64, |acc, i| {
        acc.checked_mul(n - i).ok_or_else(|| {
            UtilError::invalid(
                "falling_factorial",
                format!("falling_factorial({n}, {times}) overflows u64"),
            )
        })
    })
}

/// `n!`, with `0! == 1`.
///
/// # Errors
/// `InvalidArgument` if the result overflows `u64` (`n > 20`).
///
/// # Examples
/// ```
/// use u_toolkit::math::factorial;
/// assert_eq!(factorial(5).unwrap(), 120);
/// ```
pub fn factorial(n: u64) -> Result<u64> {
    falling_factorial(n, n)
}

/// π rounded to `decimals` decimal places.
///
/// # Errors
/// `InvalidArgument` if `decimals > 100`.
///
/// # Examples
/// ```
/// use u_toolkit::math::pi;
/// assert_eq!(pi(2).unwrap(), 3.14);
/// ```
pub fn pi(decimals: usize) -> Result<f64> {
    round_constant("pi", consts::PI, decimals)
}

/// Euler's number rounded to `decimals` decimal places.
///
/// # Errors
/// `InvalidArgument` if `decimals > 100`.
pub fn e(decimals: usize) -> Result<f64> {
    round_constant("e", consts::E, decimals)
}

// Round through the decimal rendering so the result is the f64 closest to
// the printed value, not an artifact of scaling by 10^decimals.
fn round_constant(function: &'static str, value: f64, decimals: usize) -> Result<f64> {
    if decimals > MAX_DECIMALS {
        return Err(UtilError::invalid(
            function,
            format!("decimals must be at most {MAX_DECIMALS}, got {decimals}"),
        ));
    }
    format!("{value:.decimals$}")
        .parse()
        .map_err(|err| UtilError::invalid(function, format!("{err}")))
}

// ============================================================================
// Tests
// ============================================================================

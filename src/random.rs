//! Pseudo-random floats, integers and element selection.
//!
//! Every function takes the generator explicitly instead of reaching for
//! process-wide state, so callers decide between the thread-local default
//! (`rand::rng()`) and a seeded generator.
//!
//! # Reproducibility
//!
//! For reproducible tests, use [`create_rng`] with a fixed seed.
//! The underlying algorithm (SmallRng) is deterministic for a given seed
//! on the same platform. None of these generators are suitable for
//! secrets; see [`crate::generators::uuid`] for the one CSPRNG-backed
//! function in the crate.

use rand::Rng;

use crate::error::{Result, UtilError};

/// Creates a fast, seeded random number generator.
///
/// Uses `SmallRng` (Xoshiro256++) for high performance.
/// The sequence is deterministic for a given seed on the same platform.
///
/// # Examples
/// ```
/// use u_toolkit::random::create_rng;
/// use rand::Rng;
/// let mut rng = create_rng(42);
/// let x: f64 = rng.random();
/// assert!(x >= 0.0 && x < 1.0);
/// ```
pub fn create_rng(seed: u64) -> rand::rngs::SmallRng {
    use rand::SeedableRng;
    rand::rngs::SmallRng::seed_from_u64(seed)
}

/// Returns a uniformly distributed value in `[min, max)`.
///
/// Computed as `u·(max − min) + min` with `u` uniform in `[0, 1)`.
/// There is no failure mode: `min > max` yields a value in `(max, min]`,
/// and NaN bounds produce NaN.
///
/// # Examples
/// ```
/// use u_toolkit::random::{create_rng, random};
/// let mut rng = create_rng(7);
/// let x = random(-1.0, 1.0, &mut rng);
/// assert!((-1.0..1.0).contains(&x));
/// ```
pub fn random<R: Rng>(min: f64, max: f64, rng: &mut R) -> f64 {
    let u: f64 = rng.random();
    u * (max - min) + min
}

/// Returns a uniformly distributed integer in `[min, max]`.
///
/// Unlike [`random`], the upper bound is inclusive.
///
/// # Errors
/// `InvalidArgument` if `min > max`.
///
/// # Examples
/// ```
/// use u_toolkit::random::{create_rng, random_int};
/// let mut rng = create_rng(7);
/// let d6 = random_int(1, 6, &mut rng).unwrap();
/// assert!((1..=6).contains(&d6));
/// ```
pub fn random_int<R: Rng>(min: i64, max: i64, rng: &mut R) -> Result<i64> {
    if min > max {
        return Err(UtilError::invalid(
            "random_int",
            format!("min must not exceed max, got min={min}, max={max}"),
        ));
    }
    Ok(rng.random_range(min..=max))
}

/// Returns a reference to one uniformly chosen element of `items`.
///
/// # Errors
/// `EmptyInput` if `items` is empty.
///
/// # Examples
/// ```
/// use u_toolkit::random::{create_rng, random_element};
/// let mut rng = create_rng(1);
/// let pick = random_element(&["a", "b", "c"], &mut rng).unwrap();
/// assert!(["a", "b", "c"].contains(pick));
/// ```
pub fn random_element<'a, T, R: Rng>(items: &'a [T], rng: &mut R) -> Result<&'a T> {
    if items.is_empty() {
        return Err(UtilError::empty("random_element"));
    }
    Ok(&items[rng.random_range(0..items.len())])
}

// ============================================================================
// Tests
// ============================================================================

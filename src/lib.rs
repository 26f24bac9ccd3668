//! # u-toolkit
//!
//! Stateless numeric, encoding and identifier utilities for the U-Engine
//! ecosystem.
//!
//! Every function is an independent transformation from inputs to outputs.
//! The randomized ones take the generator as an argument; nothing in the
//! crate holds global state.
//!
//! ## Modules
//!
//! - [`numeric`] — Parity, primality, divisibility, Fibonacci, digit grouping
//! - [`roman`] — Canonical roman numerals for `1..=3999`
//! - [`json`] — Cycle-tolerant JSON serialization of shared value graphs
//! - [`color`] — Hex ↔ RGB/RGBA conversions
//! - [`generators`] — Random colors, IPv4/IPv6 addresses and UUIDs
//! - [`random`] — Seeded generators, uniform floats/integers, element choice
//! - [`math`] — Left-fold reducers, factorials, rounded constants
//! - [`validate`] — Email, URL and dotted-quad shape checks
//!
//! ## Design Philosophy
//!
//! - **Explicit entropy**: randomized functions are generic over
//!   `rand::Rng`, so tests seed them with [`random::create_rng`]
//! - **Fail fast**: out-of-domain input returns [`UtilError`] instead of a
//!   NaN or sentinel
//! - **Property-based testing**: round-trip invariants verified via proptest

pub mod color;
pub mod error;
pub mod generators;
pub mod json;
pub mod math;
pub mod numeric;
pub mod random;
pub mod roman;
pub mod validate;

pub use color::{hex_to_rgb, hex_to_rgba, rgb_to_hex, rgba_to_hex, Rgb, Rgba};
pub use error::{Result, UtilError};
pub use generators::{
    color_hex, color_hex_padded, color_rgb, color_rgba, ipv4, ipv6, ipv6_padded, uuid,
};
pub use json::{safe_stringify, safe_to_value, Node};
pub use numeric::{is_divisible_by, is_even, is_odd, is_prime, Parity};
pub use random::{create_rng, random, random_element, random_int};
pub use roman::{parse_roman, roman_numeral};

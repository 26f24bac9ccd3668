//! Conversions between hex color strings and RGB/RGBA channel values.
//!
//! # Formats
//!
//! | Form | Example | Accepted by |
//! |---|---|---|
//! | `#RGB` | `#f0a` | [`hex_to_rgb`] |
//! | `#RRGGBB` | `#ff00aa` | [`hex_to_rgb`] |
//! | `#RGBA` | `#f0a8` | [`hex_to_rgba`] |
//! | `#RRGGBBAA` | `#ff00aa88` | [`hex_to_rgba`] |
//!
//! Parsing is case-insensitive; rendering is lowercase and always
//! zero-padded. Short forms double each digit (`a` → `aa`).
//!
//! Alpha is an `f64` in `[0, 1]` stored as a byte in hex, so a round trip
//! through hex recovers it to within 1/255.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, UtilError};

/// An opaque color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Renders as `#rrggbb`.
    pub fn to_hex(&self) -> String {
        rgb_to_hex(self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = UtilError;

    fn from_str(s: &str) -> Result<Self> {
        hex_to_rgb(s)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgb> for (u8, u8, u8) {
    fn from(c: Rgb) -> Self {
        (c.r, c.g, c.b)
    }
}

/// A color with 8-bit channels and a fractional alpha in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Drops the alpha channel.
    pub fn rgb(&self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }

    /// Renders as `#rrggbbaa`.
    ///
    /// # Errors
    /// `InvalidArgument` if alpha is outside `[0, 1]` or NaN.
    pub fn to_hex(&self) -> Result<String> {
        rgba_to_hex(self.r, self.g, self.b, self.a)
    }
}

impl FromStr for Rgba {
    type Err = UtilError;

    fn from_str(s: &str) -> Result<Self> {
        hex_to_rgba(s)
    }
}

impl From<(u8, u8, u8, f64)> for Rgba {
    fn from((r, g, b, a): (u8, u8, u8, f64)) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Rgba> for (u8, u8, u8, f64) {
    fn from(c: Rgba) -> Self {
        (c.r, c.g, c.b, c.a)
    }
}

/// Parses `#RGB` or `#RRGGBB`.
///
/// # Errors
/// `InvalidArgument` if the length is not 4 or 7 characters, the `#` is
/// missing, or a digit is not hexadecimal.
///
/// # Examples
/// ```
/// use u_toolkit::color::{hex_to_rgb, Rgb};
/// assert_eq!(hex_to_rgb("#f00").unwrap(), Rgb::new(255, 0, 0));
/// assert_eq!(hex_to_rgb("#FF0000").unwrap(), Rgb::new(255, 0, 0));
/// assert!(hex_to_rgb("#ff").is_err());
/// ```
pub fn hex_to_rgb(hex: &str) -> Result<Rgb> {
    const FN: &str = "hex_to_rgb";
    let channels = match hex.len() {
        4 => parse_channels(FN, hex, 1)?,
        7 => parse_channels(FN, hex, 2)?,
        _ => return Err(invalid_hex(FN, hex)),
    };
    Ok(Rgb::new(channels[0], channels[1], channels[2]))
}

/// Parses `#RGBA` or `#RRGGBBAA`; the alpha byte is divided by 255.
///
/// # Errors
/// `InvalidArgument` if the length is not 5 or 9 characters, the `#` is
/// missing, or a digit is not hexadecimal.
///
/// # Examples
/// ```
/// use u_toolkit::color::hex_to_rgba;
/// let c = hex_to_rgba("#ff000080").unwrap();
/// assert_eq!((c.r, c.g, c.b), (255, 0, 0));
/// assert!((c.a - 128.0 / 255.0).abs() < 1e-12);
/// ```
pub fn hex_to_rgba(hex: &str) -> Result<Rgba> {
    const FN: &str = "hex_to_rgba";
    let channels = match hex.len() {
        5 => parse_channels(FN, hex, 1)?,
        9 => parse_channels(FN, hex, 2)?,
        _ => return Err(invalid_hex(FN, hex)),
    };
    Ok(Rgba::new(
        channels[0],
        channels[1],
        channels[2],
        f64::from(channels[3]) / 255.0,
    ))
}

/// Renders channels as a 6-digit `#rrggbb` string.
///
/// The channels are packed under a sentinel bit at position 24, rendered,
/// and the sentinel digit is dropped, which zero-pads every channel.
///
/// # Examples
/// ```
/// use u_toolkit::color::rgb_to_hex;
/// assert_eq!(rgb_to_hex(255, 0, 0), "#ff0000");
/// assert_eq!(rgb_to_hex(0, 10, 1), "#000a01");
/// ```
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    let packed = (1_u32 << 24) | (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b);
    format!("#{}", drop_sentinel(packed))
}

/// Renders channels as an 8-digit `#rrggbbaa` string.
///
/// The alpha byte is `round(a · 255)`, padded with the same sentinel
/// trick as the color channels (bit 8).
///
/// # Errors
/// `InvalidArgument` if `a` is outside `[0, 1]` or NaN.
///
/// # Examples
/// ```
/// use u_toolkit::color::rgba_to_hex;
/// assert_eq!(rgba_to_hex(255, 0, 0, 1.0).unwrap(), "#ff0000ff");
/// assert_eq!(rgba_to_hex(0, 0, 0, 0.0).unwrap(), "#00000000");
/// ```
pub fn rgba_to_hex(r: u8, g: u8, b: u8, a: f64) -> Result<String> {
    if !(0.0..=1.0).contains(&a) {
        return Err(UtilError::invalid(
            "rgba_to_hex",
            format!("alpha must be within [0, 1], got {a}"),
        ));
    }
    let alpha = (a * 255.0).round() as u32;
    let packed_alpha = (1_u32 << 8) | alpha;
    Ok(format!(
        "{}{}",
        rgb_to_hex(r, g, b),
        drop_sentinel(packed_alpha)
    ))
}

fn drop_sentinel(packed: u32) -> String {
    let digits = format!("{packed:x}");
    digits[1..].to_owned()
}

/// Splits the digits after `#` into channels of `width` hex digits each.
/// Single digits are doubled.
fn parse_channels(function: &'static str, hex: &str, width: usize) -> Result<Vec<u8>> {
    let digits = match hex.strip_prefix('#') {
        Some(d) if d.bytes().all(|c| c.is_ascii_hexdigit()) => d,
        _ => return Err(invalid_hex(function, hex)),
    };
    digits
        .as_bytes()
        .chunks(width)
        .map(|chunk| -> Result<u8> {
            let text = std::str::from_utf8(chunk).map_err(|_| invalid_hex(function, hex))?;
            let value = u8::from_str_radix(text, 16).map_err(|_| invalid_hex(function, hex))?;
            Ok(if width == 1 { value * 17 } else { value })
        })
        .collect()
}

fn invalid_hex(function: &'static str, hex: &str) -> UtilError {
    UtilError::invalid(function, format!("Invalid hex code {hex:?}"))
}

// ============================================================================
// Tests
// ============================================================================


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn rgb_hex_round_trip(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
            let hex = rgb_to_hex(r, g, b);
            prop_assert_eq!(hex.len(), 7);
            prop_assert_eq!(hex_to_rgb(&hex).unwrap(), Rgb::new(r, g, b));
        }

        #[test]
        fn rgba_hex_round_trip(
            r in any::<u8>(),
            g in any::<u8>(),
            b in any::<u8>(),
            a in 0.0_f64..=1.0,
        ) {
            let hex = rgba_to_hex(r, g, b, a).unwrap();
            prop_assert_eq!(hex.len(), 9);
            let back = hex_to_rgba(&hex).unwrap();
            prop_assert_eq!(back.rgb(), Rgb::new(r, g, b));
            prop_assert!((back.a - a).abs() <= 1.0 / 255.0, "alpha {} vs {}", back.a, a);
        }

        #[test]
        fn short_form_equals_doubled_long_form(hex in "#[0-9a-fA-F]{3}") {
            let long: String = std::iter::once('#')
                .chain(hex[1..].chars().flat_map(|c| [c, c]))
                .collect();
            prop_assert_eq!(hex_to_rgb(&hex).unwrap(), hex_to_rgb(&long).unwrap());
        }

        #[test]
        fn hex_parsing_is_case_insensitive(hex in "#[0-9a-f]{6}") {
            prop_assert_eq!(
                hex_to_rgb(&hex).unwrap(),
                hex_to_rgb(&hex.to_uppercase()).unwrap()
            );
        }
    }
}

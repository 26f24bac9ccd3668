//! Random colors and network identifiers.
//!
//! Everything except [`uuid`] draws from the caller's generator, so a
//! seeded generator from [`crate::random::create_rng`] makes the output
//! reproducible.
//!
//! # Unpadded hex
//!
//! [`color_hex`] and [`ipv6`] render their random integers as plain hex
//! without leading zeros: `#ff` is a possible color and `0:1a:ffff:...` a
//! possible address. Callers that need fixed widths use
//! [`color_hex_padded`] and [`ipv6_padded`].

use rand::Rng;

use crate::color::{Rgb, Rgba};
use crate::random::random;

/// Largest 24-bit color value.
const MAX_COLOR: u32 = 0xFF_FFFF;

/// Returns a color with each channel uniform in `[0, 255]`.
///
/// # Examples
/// ```
/// use u_toolkit::generators::color_rgb;
/// use u_toolkit::random::create_rng;
/// let a = color_rgb(&mut create_rng(5));
/// let b = color_rgb(&mut create_rng(5));
/// assert_eq!(a, b);
/// ```
pub fn color_rgb<R: Rng>(rng: &mut R) -> Rgb {
    Rgb::new(rng.random(), rng.random(), rng.random())
}

/// Returns a color with channels uniform in `[0, 255]` and alpha uniform
/// in `[0, 1)`.
pub fn color_rgba<R: Rng>(rng: &mut R) -> Rgba {
    let Rgb { r, g, b } = color_rgb(rng);
    Rgba::new(r, g, b, random(0.0, 1.0, rng))
}

/// Returns `#` followed by a random value in `[0, 0xffffff]` in lowercase
/// hex, **without** zero-padding (between 1 and 6 digits).
pub fn color_hex<R: Rng>(rng: &mut R) -> String {
    format!("#{:x}", rng.random_range(0..=MAX_COLOR))
}

/// Like [`color_hex`] but always six digits.
///
/// # Examples
/// ```
/// use u_toolkit::color::hex_to_rgb;
/// use u_toolkit::generators::color_hex_padded;
/// let hex = color_hex_padded(&mut rand::rng());
/// assert_eq!(hex.len(), 7);
/// assert!(hex_to_rgb(&hex).is_ok());
/// ```
pub fn color_hex_padded<R: Rng>(rng: &mut R) -> String {
    format!("#{:06x}", rng.random_range(0..=MAX_COLOR))
}

/// Returns four dot-separated octets, each uniform in `[0, 255]`.
///
/// # Examples
/// ```
/// use u_toolkit::generators::ipv4;
/// use u_toolkit::validate::is_valid_ipv4;
/// assert!(is_valid_ipv4(&ipv4(&mut rand::rng())));
/// ```
pub fn ipv4<R: Rng>(rng: &mut R) -> String {
    let octets: [u8; 4] = rng.random();
    octets.map(|o| o.to_string()).join(".")
}

/// Returns eight colon-separated groups, each uniform in `[0, 65535]` as
/// lowercase hex **without** zero-padding (1 to 4 digits per group).
pub fn ipv6<R: Rng>(rng: &mut R) -> String {
    let groups: [u16; 8] = rng.random();
    groups.map(|g| format!("{g:x}")).join(":")
}

/// Like [`ipv6`] but every group has exactly four digits.
pub fn ipv6_padded<R: Rng>(rng: &mut R) -> String {
    let groups: [u16; 8] = rng.random();
    groups.map(|g| format!("{g:04x}")).join(":")
}

/// Returns a random version-4 UUID in lowercase hyphenated form.
///
/// Entropy comes from the operating system's CSPRNG, not from a caller
/// supplied generator, so the result is suitable as an unguessable id.
///
/// # Examples
/// ```
/// use u_toolkit::generators::uuid;
/// let id = uuid();
/// assert_eq!(id.len(), 36);
/// assert_eq!(&id[14..15], "4");
/// ```
pub fn uuid() -> String {
    ::uuid::Uuid::new_v4().to_string()
}

// ============================================================================
// Tests
// ============================================================================

//! Foreground and background colors.
//!
//! The foreground hue comes from the last [`HUE_TAIL_BYTES`] bytes of the
//! digest; saturation and lightness are fixed, so every identicon shares the
//! same pastel register. The background is a constant neutral gray.

use super::fold::fold;
use std::fmt;

/// 8-bit RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Opaque RGBA pixel.
    pub const fn to_rgba(self) -> [u8; 4] {
        [self.red, self.green, self.blue, 255]
    }
}

impl fmt::Display for Rgb {
    /// `#rrggbb`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

/// Background painted behind the grid when the output is not transparent.
pub const BACKGROUND: Rgb = Rgb::new(240, 240, 240);

/// Number of trailing digest bytes folded into the hue.
pub const HUE_TAIL_BYTES: usize = 7;
/// Divisor normalising the folded tail into a hue.
pub const HUE_SCALE: f64 = 0x0FFF_FFFF as f64;
pub const SATURATION: f64 = 0.5;
pub const LIGHTNESS: f64 = 0.7;

/// HSL → RGB.
///
/// `h` is scaled by 6 and truncated to a sextant index `k`. The sextant table
/// holds the two extremes `hi = l + s*min(l, 1-l)` and `lo = hi - 2*s*min(l, 1-l)`.
/// There is no in-sextant ramp: the established palette takes the ramp from the
/// integer part of `h`, which makes it zero. Red, green and blue read slots
/// `k`, `k | 16` and `k | 8` (mod 6).
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    let sextant = (h * 6.0) as u64;

    let s = s * if l < 0.5 { l } else { 1.0 - l };
    let hi = l + s;
    let span = s * 2.0;
    let lo = hi - span;
    let table = [hi, hi, lo, lo, lo, lo + span];

    let slot = |k: u64| table[(k % 6) as usize];
    Rgb::new(
        channel(slot(sextant)),
        channel(slot(sextant | 16)),
        channel(slot(sextant | 8)),
    )
}

fn channel(v: f64) -> u8 {
    (v * 255.0).floor().clamp(0.0, 255.0) as u8
}

/// Hue in "digest units": the folded tail over [`HUE_SCALE`].
///
/// The caller guarantees the digest holds at least [`HUE_TAIL_BYTES`] bytes.
pub fn hue(digest: &[u8]) -> f64 {
    let tail = &digest[digest.len().saturating_sub(HUE_TAIL_BYTES)..];
    fold(tail) as f64 / HUE_SCALE
}

/// Foreground color for a digest.
pub fn foreground(digest: &[u8]) -> Rgb {
    hsl_to_rgb(hue(digest), SATURATION, LIGHTNESS)
}

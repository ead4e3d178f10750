//! RGB color value type and tint cycling
//!
//! All channel arithmetic is modular: a channel wraps at 256, so
//! repeated tinting walks the full 8-bit range without clamping.

use serde::{Deserialize, Serialize};

/// Immutable 3-channel RGB color, 8 bits per channel, no alpha
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from float channels in [0, 1], scaled to [0, 255]
    /// and truncated
    pub fn from_unit(r: f32, g: f32, b: f32) -> Self {
        Self {
            r: (r * 255.0) as u8,
            g: (g * 255.0) as u8,
            b: (b * 255.0) as u8,
        }
    }

    /// Add `tint` channel-wise, wrapping at 256
    #[inline]
    pub fn tinted(self, tint: Color) -> Self {
        Self {
            r: self.r.wrapping_add(tint.r),
            g: self.g.wrapping_add(tint.g),
            b: self.b.wrapping_add(tint.b),
        }
    }

    /// Apply `tint` `times` times in a row.
    ///
    /// Repeated modular addition collapses to a single addition of
    /// `times * tint` per channel, so this computes the product
    /// directly instead of iterating.
    pub fn cycled(self, tint: Color, times: u32) -> Self {
        let step = |c: u8| (c as u32).wrapping_mul(times) as u8;
        self.tinted(Color::rgb(step(tint.r), step(tint.g), step(tint.b)))
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::rgb(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tinted_adds_channelwise() {
        let c = Color::rgb(10, 20, 30).tinted(Color::rgb(1, 2, 3));
        assert_eq!(c, Color::rgb(11, 22, 33));
    }

    #[test]
    fn test_tinted_wraps_at_256() {
        // A full 8-bit wrap: 255 + 1 lands on 0, not 1 as a mod-255
        // policy would give
        let c = Color::rgb(255, 250, 200).tinted(Color::rgb(1, 10, 60));
        assert_eq!(c, Color::rgb(0, 4, 4));
    }

    #[test]
    fn test_cycled_equals_repeated_tint() {
        let base = Color::rgb(17, 200, 99);
        let tint = Color::rgb(13, 31, 77);
        let times = 11;

        let mut iterated = base;
        for _ in 0..times {
            iterated = iterated.tinted(tint);
        }
        assert_eq!(base.cycled(tint, times), iterated);
    }

    #[test]
    fn test_cycled_zero_times_is_identity() {
        let base = Color::rgb(1, 2, 3);
        assert_eq!(base.cycled(Color::rgb(90, 90, 90), 0), base);
    }

    #[test]
    fn test_cycled_256_times_is_identity() {
        // 256 * t mod 256 == 0 for every channel
        let base = Color::rgb(40, 80, 120);
        assert_eq!(base.cycled(Color::rgb(3, 5, 7), 256), base);
    }

    #[test]
    fn test_from_unit_truncates() {
        let c = Color::from_unit(0.0, 0.5, 1.0);
        assert_eq!(c, Color::rgb(0, 127, 255));
    }
}

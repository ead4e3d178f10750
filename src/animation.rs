//! Per-frame animation state
//!
//! All mutable cross-frame state lives in [`AnimationState`] and is
//! advanced by a pure step function, so every derived value (background
//! color, circle center) can be computed and tested without a live
//! display.

use crate::canvas::{VIEWPORT_HEIGHT, VIEWPORT_WIDTH};
use crate::color::Color;

/// Seconds added to the clock per tick
pub const TIME_STEP: f32 = 0.05;

/// Pixels the circle sweep advances per tick
pub const PHASE_STEP: u32 = 5;

/// Cross-frame animation state.
///
/// `elapsed` and `phase` advance monotonically from startup; the two
/// colors persist until an interaction event replaces them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationState {
    pub elapsed: f32,
    pub phase: u32,
    pub circle_color: Color,
    pub rect_color: Color,
}

impl AnimationState {
    pub fn new(circle_color: Color, rect_color: Color) -> Self {
        Self {
            elapsed: 0.0,
            phase: 0,
            circle_color,
            rect_color,
        }
    }

    /// Advance one animation tick: bump the clock and the sweep phase
    pub fn advance(&mut self) {
        self.elapsed += TIME_STEP;
        self.phase += PHASE_STEP;
    }

    /// Background color for the current clock: three cosine channels
    /// at different frequencies, mapped from [-1, 1] to [0, 255]
    pub fn background(&self) -> Color {
        let t = self.elapsed;
        Color::from_unit(
            0.5 * (t / 2.0).cos() + 0.5,
            0.5 * t.cos() + 0.5,
            0.5 * (t * 2.0).cos() + 0.5,
        )
    }

    /// Circle center for the current phase.
    ///
    /// The sweep runs diagonally and wraps independently at each
    /// viewport edge, so the position jumps in a sawtooth whenever
    /// either modulus rolls over.
    pub fn circle_center(&self) -> (i32, i32) {
        (
            (self.phase % VIEWPORT_WIDTH) as i32,
            (self.phase % VIEWPORT_HEIGHT) as i32,
        )
    }
}

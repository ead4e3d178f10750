//! The raster sandbox sketch
//!
//! Repaints the whole canvas every tick: a cosine-driven background,
//! a circle sweeping diagonally across the viewport, a fixed
//! rectangle, and a duplicated copy of the rectangle block. A pointer
//! press cycles the circle's tint.

use super::Sketch;
use crate::animation::AnimationState;
use crate::canvas::{PixelBuffer, Viewport};
use crate::color::Color;
use crate::palette::Palette;

/// Radius of the sweeping circle
const CIRCLE_RADIUS: i32 = 100;

/// Fixed rectangle: position and size
const RECT_X: u32 = 100;
const RECT_Y: u32 = 100;
const RECT_W: u32 = 200;
const RECT_H: u32 = 100;

/// Where the duplicated rectangle block lands
const COPY_DST_X: u32 = 500;
const COPY_DST_Y: u32 = 350;

/// Channel increment applied on each pointer press
const TINT_INCREMENT: Color = Color::rgb(29, 43, 61);

/// How many times the increment is applied per press
const TINT_CYCLES: u32 = 5;

/// Blur kernel radius when the blur pass is enabled
const BLUR_RADIUS: u32 = 2;

pub struct Sandbox {
    state: AnimationState,
    viewport: Viewport,
    blur: bool,
}

impl Sandbox {
    pub fn new(palette: Palette) -> Self {
        Self {
            state: AnimationState::new(palette.circle, palette.rectangle),
            viewport: Viewport::default(),
            blur: false,
        }
    }

    /// Current persisted colors, for saving
    pub fn palette(&self) -> Palette {
        Palette {
            circle: self.state.circle_color,
            rectangle: self.state.rect_color,
        }
    }

    /// Replace the persisted colors (after a palette load)
    pub fn set_palette(&mut self, palette: Palette) {
        self.state.circle_color = palette.circle;
        self.state.rect_color = palette.rectangle;
    }

    pub fn toggle_blur(&mut self) -> bool {
        self.blur = !self.blur;
        self.blur
    }

    #[cfg(test)]
    fn state(&self) -> &AnimationState {
        &self.state
    }
}

impl Default for Sandbox {
    fn default() -> Self {
        Self::new(Palette::default())
    }
}

impl Sketch for Sandbox {
    fn pointer_down(&mut self, _x: i32, _y: i32) {
        self.state.circle_color = self.state.circle_color.cycled(TINT_INCREMENT, TINT_CYCLES);
    }

    fn update(&mut self) {
        self.state.advance();
    }

    fn render(&self, buffer: &mut PixelBuffer) {
        // Background first so the shapes draw on top
        buffer.fill(self.state.background());

        let (cx, cy) = self.state.circle_center();
        buffer.fill_circle(cx, cy, CIRCLE_RADIUS, self.state.circle_color, self.viewport);
        buffer.fill_rect(RECT_X, RECT_Y, RECT_W, RECT_H, self.state.rect_color);

        // Duplicate the rectangle block elsewhere in the viewport
        buffer.copy_region(RECT_X, RECT_Y, RECT_W, RECT_H, COPY_DST_X, COPY_DST_Y);

        if self.blur {
            buffer.box_blur(BLUR_RADIUS, self.viewport);
        }
    }

    fn name(&self) -> &str {
        "Sandbox"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::TEXTURE_SIDE;

    #[test]
    fn test_first_frame_layout() {
        let mut sandbox = Sandbox::default();
        let mut buffer = PixelBuffer::with_side(TEXTURE_SIDE);

        sandbox.update();
        sandbox.render(&mut buffer);

        // One tick in, the circle sits at (5, 5)
        assert_eq!(sandbox.state().circle_center(), (5, 5));
        assert_eq!(buffer.get_pixel(5, 5), Some(Color::WHITE));

        // Rectangle interior carries the rect color; just outside it
        // the background shows through
        let rect_color = Color::rgb(0, 139, 57);
        assert_eq!(buffer.get_pixel(150, 150), Some(rect_color));
        assert_eq!(buffer.get_pixel(99, 100), Some(sandbox.state().background()));

        // The duplicated block matches its source
        assert_eq!(
            buffer.get_pixel(550, 400),
            buffer.get_pixel(150, 150),
            "copied block should mirror the rectangle"
        );
    }

    #[test]
    fn test_pointer_down_cycles_circle_tint_only() {
        let mut sandbox = Sandbox::default();
        let before = sandbox.palette();

        sandbox.pointer_down(10, 10);
        let after = sandbox.palette();

        assert_eq!(
            after.circle,
            before.circle.cycled(TINT_INCREMENT, TINT_CYCLES)
        );
        assert_eq!(after.rectangle, before.rectangle);
    }

    #[test]
    fn test_tint_persists_across_frames() {
        let mut sandbox = Sandbox::default();
        let mut buffer = PixelBuffer::with_side(TEXTURE_SIDE);

        sandbox.pointer_down(0, 0);
        let tinted = sandbox.palette().circle;

        sandbox.update();
        sandbox.render(&mut buffer);
        let (cx, cy) = sandbox.state().circle_center();
        assert_eq!(buffer.get_pixel(cx, cy), Some(tinted));
    }

    #[test]
    fn test_render_is_deterministic_for_a_given_state() {
        let mut sandbox = Sandbox::default();
        sandbox.update();

        let mut a = PixelBuffer::with_side(TEXTURE_SIDE);
        let mut b = PixelBuffer::with_side(TEXTURE_SIDE);
        sandbox.render(&mut a);
        sandbox.render(&mut b);
        assert_eq!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn test_set_palette_round_trip() {
        let mut sandbox = Sandbox::default();
        let palette = Palette {
            circle: Color::rgb(1, 2, 3),
            rectangle: Color::rgb(4, 5, 6),
        };
        sandbox.set_palette(palette);
        assert_eq!(sandbox.palette().circle, palette.circle);
        assert_eq!(sandbox.palette().rectangle, palette.rectangle);
    }
}

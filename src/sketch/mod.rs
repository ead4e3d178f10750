mod sandbox;

pub use sandbox::Sandbox;

use crate::canvas::PixelBuffer;

/// Hooks a windowing shell drives once per frame.
///
/// The shell owns the loop and the display; a sketch only ever sees
/// the pixel buffer and serialized pointer events, so it can run (and
/// be tested) without any display attached.
pub trait Sketch {
    /// A pointer-down interaction, in viewport coordinates
    fn pointer_down(&mut self, x: i32, y: i32);

    /// Advance animation state one tick (called once per frame)
    fn update(&mut self);

    /// Render the current state into the pixel buffer
    fn render(&self, buffer: &mut PixelBuffer);

    /// Sketch name for UI/debugging
    fn name(&self) -> &str;
}

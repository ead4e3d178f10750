//! Square RGB pixel buffer and raster primitives
//!
//! This is the canvas all drawing happens on: a side × side grid of
//! 3-byte RGB pixels in row-major order, no alpha. The backing buffer
//! is larger than the logical drawing area, so circle rasterization is
//! clipped to a [`Viewport`] rather than to the buffer edge.
//!
//! Out-of-range rectangles and copy regions are programming errors,
//! not runtime conditions: every operation asserts its bounds up front
//! and aborts with a diagnostic instead of writing into neighboring
//! rows.

use crate::color::Color;

/// Side length of the backing texture in pixels
pub const TEXTURE_SIDE: u32 = 1024;

/// Logical drawing width (smaller than the backing texture)
pub const VIEWPORT_WIDTH: u32 = 800;

/// Logical drawing height
pub const VIEWPORT_HEIGHT: u32 = 600;

/// Bytes per pixel (RGB, no alpha)
const BPP: usize = 3;

// ============================================================================
// Viewport
// ============================================================================

/// Logical drawing bounds, anchored at the buffer origin.
///
/// Shape scans are bounded by the viewport, not by the buffer side, so
/// a sweep can address coordinates past the visible area without ever
/// touching them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT)
    }
}

// ============================================================================
// PixelBuffer
// ============================================================================

/// Square RGB888 pixel buffer for software rendering
pub struct PixelBuffer {
    pixels: Vec<u8>,
    side: u32,
}

impl PixelBuffer {
    /// Create a zero-initialized buffer of side × side pixels
    pub fn with_side(side: u32) -> Self {
        Self {
            pixels: vec![0; (side * side) as usize * BPP],
            side,
        }
    }

    #[inline]
    pub fn side(&self) -> u32 {
        self.side
    }

    /// Check if coordinates are within the backing buffer
    #[inline]
    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.side as i32 && y >= 0 && y < self.side as i32
    }

    /// Byte offset of the R channel of pixel (x, y); G and B follow at
    /// +1 and +2
    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        (x + y * self.side) as usize * BPP
    }

    /// Overwrite every pixel with `color` (per-frame background fill)
    pub fn fill(&mut self, color: Color) {
        for px in self.pixels.chunks_exact_mut(BPP) {
            px[0] = color.r;
            px[1] = color.g;
            px[2] = color.b;
        }
    }

    /// Set a single pixel (bounds checked, out-of-range is a no-op)
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if self.in_bounds(x, y) {
            let idx = self.pixel_index(x as u32, y as u32);
            self.pixels[idx] = color.r;
            self.pixels[idx + 1] = color.g;
            self.pixels[idx + 2] = color.b;
        }
    }

    /// Read a pixel, or None if out of bounds
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        if self.in_bounds(x, y) {
            let idx = self.pixel_index(x as u32, y as u32);
            Some(Color::rgb(
                self.pixels[idx],
                self.pixels[idx + 1],
                self.pixels[idx + 2],
            ))
        } else {
            None
        }
    }

    // ========================================================================
    // Shape Rasterization
    // ========================================================================

    /// Fill the axis-aligned rectangle [x, x+w) × [y, y+h).
    ///
    /// The rectangle may exceed the viewport but must lie entirely
    /// within the backing buffer; callers own that discipline and a
    /// violation aborts with a diagnostic.
    pub fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Color) {
        assert!(
            x + w <= self.side && y + h <= self.side,
            "fill_rect: {}x{} rect at ({}, {}) exceeds buffer side {}",
            w,
            h,
            x,
            y,
            self.side
        );

        for row in y..y + h {
            let start = self.pixel_index(x, row);
            let span = &mut self.pixels[start..start + w as usize * BPP];
            for px in span.chunks_exact_mut(BPP) {
                px[0] = color.r;
                px[1] = color.g;
                px[2] = color.b;
            }
        }
    }

    /// Fill the disk (x-cx)² + (y-cy)² ≤ r², clipped to the viewport.
    ///
    /// Pixels outside the viewport are never written, no matter where
    /// the disk lies. The scan covers the disk's bounding box
    /// intersected with the viewport; results are identical to an
    /// exhaustive per-viewport-pixel membership test.
    pub fn fill_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Color, clip: Viewport) {
        assert!(
            clip.width <= self.side && clip.height <= self.side,
            "fill_circle: viewport {}x{} exceeds buffer side {}",
            clip.width,
            clip.height,
            self.side
        );
        if radius < 0 {
            return;
        }

        let y0 = (cy - radius).max(0);
        let y1 = (cy + radius).min(clip.height as i32 - 1);
        let x0 = (cx - radius).max(0);
        let x1 = (cx + radius).min(clip.width as i32 - 1);
        let r2 = radius as i64 * radius as i64;

        for y in y0..=y1 {
            let dy = (y - cy) as i64;
            let row = self.pixel_index(0, y as u32);
            for x in x0..=x1 {
                let dx = (x - cx) as i64;
                if dx * dx + dy * dy <= r2 {
                    let idx = row + x as usize * BPP;
                    self.pixels[idx] = color.r;
                    self.pixels[idx + 1] = color.g;
                    self.pixels[idx + 2] = color.b;
                }
            }
        }
    }

    // ========================================================================
    // Region Copy
    // ========================================================================

    /// Copy the rectangle [src_x, src_x+w) × [src_y, src_y+h) to
    /// (dst_x, dst_y) within the same buffer.
    ///
    /// The source rows are snapshotted before any write, so the copy
    /// is a pure translation even when source and destination overlap.
    /// Both rectangles must lie within the buffer.
    pub fn copy_region(
        &mut self,
        src_x: u32,
        src_y: u32,
        w: u32,
        h: u32,
        dst_x: u32,
        dst_y: u32,
    ) {
        assert!(
            src_x + w <= self.side && src_y + h <= self.side,
            "copy_region: {}x{} source at ({}, {}) exceeds buffer side {}",
            w,
            h,
            src_x,
            src_y,
            self.side
        );
        assert!(
            dst_x + w <= self.side && dst_y + h <= self.side,
            "copy_region: {}x{} destination at ({}, {}) exceeds buffer side {}",
            w,
            h,
            dst_x,
            dst_y,
            self.side
        );

        let row_bytes = w as usize * BPP;
        let mut snapshot = vec![0u8; row_bytes * h as usize];
        for row in 0..h {
            let src = self.pixel_index(src_x, src_y + row);
            let dst = row as usize * row_bytes;
            snapshot[dst..dst + row_bytes].copy_from_slice(&self.pixels[src..src + row_bytes]);
        }

        for row in 0..h {
            let src = row as usize * row_bytes;
            let dst = self.pixel_index(dst_x, dst_y + row);
            self.pixels[dst..dst + row_bytes].copy_from_slice(&snapshot[src..src + row_bytes]);
        }
    }

    // ========================================================================
    // Post-processing
    // ========================================================================

    /// Separable box blur over the viewport region using a sliding
    /// window. O(width*height) regardless of radius. Clamps at the
    /// region edges (repeats border pixels); pixels outside the
    /// viewport are untouched.
    pub fn box_blur(&mut self, radius: u32, clip: Viewport) {
        if radius == 0 {
            return;
        }
        assert!(
            clip.width <= self.side && clip.height <= self.side,
            "box_blur: viewport {}x{} exceeds buffer side {}",
            clip.width,
            clip.height,
            self.side
        );

        let w = clip.width as i32;
        let h = clip.height as i32;
        let r = radius as i32;
        let div = 2 * radius + 1;

        let mut temp = vec![0u8; (clip.width * clip.height) as usize * BPP];
        let tidx = |x: i32, y: i32| (x + y * w) as usize * BPP;

        // Horizontal pass: buffer rows → temp
        for y in 0..h {
            let (mut sr, mut sg, mut sb) = (0u32, 0u32, 0u32);

            // Initial window [-r..r] for x=0, clamped to the region
            for i in -r..=r {
                let sx = i.clamp(0, w - 1) as u32;
                let idx = self.pixel_index(sx, y as u32);
                sr += self.pixels[idx] as u32;
                sg += self.pixels[idx + 1] as u32;
                sb += self.pixels[idx + 2] as u32;
            }

            let out = tidx(0, y);
            temp[out] = (sr / div) as u8;
            temp[out + 1] = (sg / div) as u8;
            temp[out + 2] = (sb / div) as u8;

            for x in 1..w {
                let leave = self.pixel_index((x - 1 - r).clamp(0, w - 1) as u32, y as u32);
                let enter = self.pixel_index((x + r).clamp(0, w - 1) as u32, y as u32);

                sr = sr - self.pixels[leave] as u32 + self.pixels[enter] as u32;
                sg = sg - self.pixels[leave + 1] as u32 + self.pixels[enter + 1] as u32;
                sb = sb - self.pixels[leave + 2] as u32 + self.pixels[enter + 2] as u32;

                let out = tidx(x, y);
                temp[out] = (sr / div) as u8;
                temp[out + 1] = (sg / div) as u8;
                temp[out + 2] = (sb / div) as u8;
            }
        }

        // Vertical pass: temp columns → buffer
        for x in 0..w {
            let (mut sr, mut sg, mut sb) = (0u32, 0u32, 0u32);

            for i in -r..=r {
                let idx = tidx(x, i.clamp(0, h - 1));
                sr += temp[idx] as u32;
                sg += temp[idx + 1] as u32;
                sb += temp[idx + 2] as u32;
            }

            let out = self.pixel_index(x as u32, 0);
            self.pixels[out] = (sr / div) as u8;
            self.pixels[out + 1] = (sg / div) as u8;
            self.pixels[out + 2] = (sb / div) as u8;

            for y in 1..h {
                let leave = tidx(x, (y - 1 - r).clamp(0, h - 1));
                let enter = tidx(x, (y + r).clamp(0, h - 1));

                sr = sr - temp[leave] as u32 + temp[enter] as u32;
                sg = sg - temp[leave + 1] as u32 + temp[enter + 1] as u32;
                sb = sb - temp[leave + 2] as u32 + temp[enter + 2] as u32;

                let out = self.pixel_index(x as u32, y as u32);
                self.pixels[out] = (sr / div) as u8;
                self.pixels[out + 1] = (sg / div) as u8;
                self.pixels[out + 2] = (sb / div) as u8;
            }
        }
    }

    // ========================================================================
    // Raw Access
    // ========================================================================

    /// Raw RGB bytes for texture upload
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Mutable access to raw pixels
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }
}

impl Default for PixelBuffer {
    fn default() -> Self {
        Self::with_side(TEXTURE_SIDE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::rgb(200, 10, 10);
    const GREEN: Color = Color::rgb(0, 139, 57);

    #[test]
    fn test_buffer_length_invariant() {
        let buf = PixelBuffer::with_side(64);
        assert_eq!(buf.as_bytes().len(), 64 * 64 * 3);
    }

    #[test]
    fn test_fill_overwrites_every_pixel() {
        let mut buf = PixelBuffer::with_side(8);
        buf.fill(RED);
        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(buf.get_pixel(x, y), Some(RED));
            }
        }
    }

    #[test]
    fn test_fill_rect_sets_exactly_the_rect() {
        let mut buf = PixelBuffer::with_side(32);
        buf.fill(Color::BLACK);
        buf.fill_rect(5, 7, 10, 4, GREEN);

        let mut painted = 0;
        for y in 0..32 {
            for x in 0..32 {
                let inside = (5..15).contains(&x) && (7..11).contains(&y);
                let expected = if inside { GREEN } else { Color::BLACK };
                assert_eq!(buf.get_pixel(x, y), Some(expected), "pixel ({}, {})", x, y);
                if inside {
                    painted += 1;
                }
            }
        }
        assert_eq!(painted, 10 * 4);
    }

    #[test]
    fn test_fill_rect_may_exceed_viewport() {
        // The rect addresses the backing buffer directly, so it can
        // land past the logical viewport as long as it fits the buffer
        let mut buf = PixelBuffer::with_side(32);
        buf.fill_rect(20, 20, 12, 12, RED);
        assert_eq!(buf.get_pixel(31, 31), Some(RED));
    }

    #[test]
    #[should_panic(expected = "fill_rect")]
    fn test_fill_rect_out_of_bounds_panics() {
        let mut buf = PixelBuffer::with_side(16);
        buf.fill_rect(10, 0, 7, 1, RED);
    }

    #[test]
    fn test_fill_circle_matches_disk_predicate() {
        let mut buf = PixelBuffer::with_side(32);
        buf.fill(Color::BLACK);
        let clip = Viewport::new(24, 20);
        let (cx, cy, r) = (10, 8, 5);
        buf.fill_circle(cx, cy, r, RED, clip);

        for y in 0..32 {
            for x in 0..32 {
                let member = (x - cx).pow(2) + (y - cy).pow(2) <= r * r;
                let expected = if member && clip.contains(x, y) {
                    RED
                } else {
                    Color::BLACK
                };
                assert_eq!(buf.get_pixel(x, y), Some(expected), "pixel ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_fill_circle_never_leaves_viewport() {
        // Disk centered on the viewport corner: geometric members past
        // the clip edge must stay untouched
        let mut buf = PixelBuffer::with_side(32);
        buf.fill(Color::BLACK);
        let clip = Viewport::new(10, 10);
        buf.fill_circle(10, 10, 6, RED, clip);

        assert_eq!(buf.get_pixel(9, 9), Some(RED));
        assert_eq!(buf.get_pixel(10, 10), Some(Color::BLACK));
        assert_eq!(buf.get_pixel(12, 9), Some(Color::BLACK));
    }

    #[test]
    fn test_fill_circle_radius_zero_is_center_only() {
        let mut buf = PixelBuffer::with_side(16);
        buf.fill(Color::BLACK);
        buf.fill_circle(4, 4, 0, RED, Viewport::new(16, 16));
        assert_eq!(buf.get_pixel(4, 4), Some(RED));
        assert_eq!(buf.get_pixel(5, 4), Some(Color::BLACK));
    }

    #[test]
    fn test_fill_operations_are_idempotent() {
        let mut once = PixelBuffer::with_side(16);
        once.fill_rect(2, 2, 5, 5, GREEN);
        once.fill_circle(8, 8, 3, RED, Viewport::new(16, 16));

        let mut twice = PixelBuffer::with_side(16);
        for _ in 0..2 {
            twice.fill_rect(2, 2, 5, 5, GREEN);
            twice.fill_circle(8, 8, 3, RED, Viewport::new(16, 16));
        }
        assert_eq!(once.as_bytes(), twice.as_bytes());
    }

    #[test]
    fn test_copy_region_is_pure_translation() {
        let mut buf = PixelBuffer::with_side(32);
        // A gradient so every source pixel is distinct
        for y in 0..16i32 {
            for x in 0..16i32 {
                buf.set_pixel(x, y, Color::rgb(x as u8, y as u8, 7));
            }
        }
        let snapshot: Vec<u8> = buf.as_bytes().to_vec();
        let snap_at = |x: u32, y: u32| {
            let idx = (x + y * 32) as usize * 3;
            Color::rgb(snapshot[idx], snapshot[idx + 1], snapshot[idx + 2])
        };

        buf.copy_region(2, 3, 8, 6, 20, 18);

        for j in 0..8u32 {
            for i in 0..6u32 {
                assert_eq!(
                    buf.get_pixel((20 + j) as i32, (18 + i) as i32),
                    Some(snap_at(2 + j, 3 + i))
                );
            }
        }
        // Source left intact
        assert_eq!(buf.get_pixel(2, 3), Some(snap_at(2, 3)));
    }

    #[test]
    fn test_copy_region_overlap_safe() {
        // Shift a block one pixel right over itself; scan-order copy
        // without a snapshot would smear the first column
        let mut buf = PixelBuffer::with_side(16);
        for x in 0..6i32 {
            buf.set_pixel(x, 0, Color::rgb(x as u8 * 10, 0, 0));
        }
        buf.copy_region(0, 0, 6, 1, 1, 0);

        for x in 0..6i32 {
            assert_eq!(
                buf.get_pixel(x + 1, 0),
                Some(Color::rgb(x as u8 * 10, 0, 0))
            );
        }
    }

    #[test]
    #[should_panic(expected = "copy_region")]
    fn test_copy_region_dst_out_of_bounds_panics() {
        let mut buf = PixelBuffer::with_side(16);
        buf.copy_region(0, 0, 8, 8, 12, 0);
    }

    #[test]
    fn test_box_blur_radius_zero_is_identity() {
        let mut buf = PixelBuffer::with_side(16);
        buf.fill_rect(4, 4, 4, 4, RED);
        let before = buf.as_bytes().to_vec();
        buf.box_blur(0, Viewport::new(16, 16));
        assert_eq!(buf.as_bytes(), &before[..]);
    }

    #[test]
    fn test_box_blur_constant_region_unchanged() {
        let mut buf = PixelBuffer::with_side(16);
        buf.fill(RED);
        buf.box_blur(2, Viewport::new(16, 16));
        for y in 0..16 {
            for x in 0..16 {
                assert_eq!(buf.get_pixel(x, y), Some(RED));
            }
        }
    }

    #[test]
    fn test_box_blur_spreads_impulse_symmetrically() {
        let mut buf = PixelBuffer::with_side(16);
        buf.fill(Color::BLACK);
        buf.set_pixel(8, 8, Color::rgb(255, 255, 255));
        buf.box_blur(1, Viewport::new(16, 16));

        let center = buf.get_pixel(8, 8).unwrap();
        assert!(center.r > 0 && center.r < 255);
        assert_eq!(buf.get_pixel(7, 8), buf.get_pixel(9, 8));
        assert_eq!(buf.get_pixel(8, 7), buf.get_pixel(8, 9));
        // Outside the 3x3 kernel footprint nothing changes
        assert_eq!(buf.get_pixel(8, 10), Some(Color::BLACK));
    }

    #[test]
    fn test_box_blur_leaves_pixels_outside_viewport() {
        let mut buf = PixelBuffer::with_side(16);
        buf.fill(RED);
        buf.box_blur(3, Viewport::new(8, 8));
        assert_eq!(buf.get_pixel(12, 12), Some(RED));
    }
}

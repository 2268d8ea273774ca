//! Frame abstraction for drawing primitives
//!
//! Provides a simple, safe API for pixel buffer operations instead of
//! direct buffer indexing scattered throughout rendering code. All
//! coordinates are in pixels; out-of-bounds operations are safely clipped.

use std::collections::HashMap;

use fontdue::{Font, Metrics};

/// Glyph cache key: (character, font_size as bits)
pub type GlyphCacheKey = (char, u32);

pub type GlyphCache = HashMap<GlyphCacheKey, (Metrics, Vec<u8>)>;

/// A rectangle in canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }
}

/// Blend a foreground color onto a background color using alpha compositing.
///
/// Both colors are in ARGB format (0xAARRGGBB). Returns the blended color
/// with full opacity.
#[inline]
pub fn blend_colors(bg: u32, fg: u32, alpha: f32) -> u32 {
    let bg_r = ((bg >> 16) & 0xFF) as f32;
    let bg_g = ((bg >> 8) & 0xFF) as f32;
    let bg_b = (bg & 0xFF) as f32;

    let fg_r = ((fg >> 16) & 0xFF) as f32;
    let fg_g = ((fg >> 8) & 0xFF) as f32;
    let fg_b = (fg & 0xFF) as f32;

    let final_r = (bg_r * (1.0 - alpha) + fg_r * alpha) as u32;
    let final_g = (bg_g * (1.0 - alpha) + fg_g * alpha) as u32;
    let final_b = (bg_b * (1.0 - alpha) + fg_b * alpha) as u32;

    0xFF000000 | (final_r << 16) | (final_g << 8) | final_b
}

/// A frame buffer wrapper providing safe drawing primitives
pub struct Frame<'a> {
    buffer: &'a mut [u32],
    width: usize,
    height: usize,
}

impl<'a> Frame<'a> {
    /// Create a new frame from a mutable pixel buffer
    ///
    /// If the buffer is smaller than width*height, dimensions are adjusted
    /// to match the actual buffer size to prevent out-of-bounds access.
    pub fn new(buffer: &'a mut [u32], width: usize, height: usize) -> Self {
        let expected_size = width * height;
        let actual_size = buffer.len();

        let (width, height) = if actual_size < expected_size && width > 0 {
            (width, actual_size / width)
        } else {
            (width, height)
        };

        Self {
            buffer,
            width,
            height,
        }
    }

    /// Get the frame width in pixels
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the frame height in pixels
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Clear the entire buffer with a solid color
    #[inline]
    pub fn clear(&mut self, color: u32) {
        self.buffer.fill(color);
    }

    /// Set a single pixel (bounds-checked)
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height {
            self.buffer[y as usize * self.width + x as usize] = color;
        }
    }

    /// Get a single pixel (bounds-checked, returns 0 if out of bounds)
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> u32 {
        if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height {
            self.buffer[y as usize * self.width + x as usize]
        } else {
            0
        }
    }

    /// Blend a pixel with alpha (ARGB format, alpha in high byte)
    #[inline]
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: u32) {
        if x < 0 || y < 0 || (x as usize) >= self.width || (y as usize) >= self.height {
            return;
        }

        let idx = y as usize * self.width + x as usize;
        let alpha = ((color >> 24) & 0xFF) as f32 / 255.0;
        if alpha <= 0.0 {
            return;
        }
        if alpha >= 1.0 {
            self.buffer[idx] = color | 0xFF000000;
            return;
        }

        self.buffer[idx] = blend_colors(self.buffer[idx], color, alpha);
    }

    /// Fill a rectangle with a solid color
    pub fn fill_rect(&mut self, rect: Rect, color: u32) {
        let x0 = rect.x.max(0) as usize;
        let y0 = rect.y.max(0) as usize;
        let x1 = ((rect.x + rect.width).max(0) as usize).min(self.width);
        let y1 = ((rect.y + rect.height).max(0) as usize).min(self.height);

        for y in y0..y1 {
            let row_start = y * self.width;
            for x in x0..x1 {
                self.buffer[row_start + x] = color;
            }
        }
    }

    /// Draw a 1px rectangle outline
    pub fn draw_rect(&mut self, rect: Rect, color: u32) {
        if rect.width <= 0 || rect.height <= 0 {
            return;
        }
        self.hline(rect.x, rect.x + rect.width - 1, rect.y, color);
        self.hline(rect.x, rect.x + rect.width - 1, rect.y + rect.height - 1, color);
        self.vline(rect.x, rect.y, rect.y + rect.height - 1, color);
        self.vline(rect.x + rect.width - 1, rect.y, rect.y + rect.height - 1, color);
    }

    /// Draw a rectangle with a 1px border
    pub fn draw_bordered_rect(&mut self, rect: Rect, fill_color: u32, border_color: u32) {
        self.fill_rect(rect, fill_color);
        self.draw_rect(rect, border_color | 0xFF000000);
    }

    /// Horizontal line from x0 to x1 inclusive
    pub fn hline(&mut self, x0: i32, x1: i32, y: i32, color: u32) {
        let (x0, x1) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        for x in x0..=x1 {
            self.set_pixel(x, y, color);
        }
    }

    /// Vertical line from y0 to y1 inclusive
    pub fn vline(&mut self, x: i32, y0: i32, y1: i32, color: u32) {
        let (y0, y1) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
        for y in y0..=y1 {
            self.set_pixel(x, y, color);
        }
    }

    /// Draw an arbitrary line segment (Bresenham)
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };

        let mut x = x0;
        let mut y = y0;
        let mut err = dx + dy;

        loop {
            self.set_pixel(x, y, color);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Fill a pie wedge centered at (cx, cy).
    ///
    /// Angles are in degrees, 0° at three o'clock, increasing
    /// counterclockwise in screen space (y axis points down, so the wedge
    /// sweeps visually upward first), matching the label placement math in
    /// the pie renderer.
    pub fn fill_wedge(
        &mut self,
        cx: i32,
        cy: i32,
        radius: i32,
        start_deg: i32,
        sweep_deg: i32,
        color: u32,
    ) {
        if radius <= 0 || sweep_deg <= 0 {
            return;
        }

        let full_circle = sweep_deg >= 360;
        let r2 = radius as i64 * radius as i64;

        let y_min = (cy - radius).max(0);
        let y_max = (cy + radius).min(self.height as i32 - 1);
        let x_min = (cx - radius).max(0);
        let x_max = (cx + radius).min(self.width as i32 - 1);

        for y in y_min..=y_max {
            let row_start = y as usize * self.width;
            for x in x_min..=x_max {
                let dx = (x - cx) as i64;
                let dy = (cy - y) as i64;
                if dx * dx + dy * dy > r2 {
                    continue;
                }
                if full_circle || angle_in_sweep(angle_deg(dx as f64, dy as f64), start_deg, sweep_deg)
                {
                    self.buffer[row_start + x as usize] = color;
                }
            }
        }
    }

    /// Draw the curved edge of a wedge (the circular arc only)
    pub fn draw_arc(
        &mut self,
        cx: i32,
        cy: i32,
        radius: i32,
        start_deg: i32,
        sweep_deg: i32,
        color: u32,
    ) {
        if radius <= 0 || sweep_deg <= 0 {
            return;
        }

        // step fine enough that adjacent samples land on touching pixels
        let arc_len = (sweep_deg as f64).to_radians() * radius as f64;
        let steps = (arc_len.ceil() as i32).max(1);

        for i in 0..=steps {
            let angle =
                (start_deg as f64 + sweep_deg as f64 * i as f64 / steps as f64).to_radians();
            let x = cx + (radius as f64 * angle.cos()).round() as i32;
            let y = cy - (radius as f64 * angle.sin()).round() as i32;
            self.set_pixel(x, y, color);
        }
    }
}

/// Angle of (dx, dy) in degrees, normalized to [0, 360)
fn angle_deg(dx: f64, dy: f64) -> f64 {
    let a = dy.atan2(dx).to_degrees();
    if a < 0.0 {
        a + 360.0
    } else {
        a
    }
}

/// Whether `angle` lies within the sweep starting at `start_deg`
fn angle_in_sweep(angle: f64, start_deg: i32, sweep_deg: i32) -> bool {
    let rel = (angle - start_deg as f64).rem_euclid(360.0);
    rel < sweep_deg as f64
}

/// Text rendering context wrapping font and glyph cache.
///
/// Provides methods for drawing text with proper font metrics and glyph
/// caching. The `y` passed to draw methods is the top of the line; the
/// baseline sits one ascent below it.
pub struct TextPainter<'a> {
    font: &'a Font,
    glyph_cache: &'a mut GlyphCache,
}

impl<'a> TextPainter<'a> {
    pub fn new(font: &'a Font, glyph_cache: &'a mut GlyphCache) -> Self {
        Self { font, glyph_cache }
    }

    /// Ascent in pixels for the given font size
    pub fn ascent(&self, size: f32) -> f32 {
        self.font
            .horizontal_line_metrics(size)
            .map(|m| m.ascent)
            .unwrap_or(size * 0.8)
    }

    /// Line height in pixels for the given font size
    pub fn line_height(&self, size: f32) -> usize {
        self.font
            .horizontal_line_metrics(size)
            .map(|m| m.new_line_size.ceil() as usize)
            .unwrap_or(size.ceil() as usize)
    }

    /// Measure text width in pixels
    pub fn measure(&mut self, text: &str, size: f32) -> f32 {
        let mut width = 0.0;
        for ch in text.chars() {
            let key = (ch, size.to_bits());
            let (metrics, _) = self
                .glyph_cache
                .entry(key)
                .or_insert_with(|| self.font.rasterize(ch, size));
            width += metrics.advance_width;
        }
        width
    }

    /// Draw text at the specified position
    pub fn draw(&mut self, frame: &mut Frame, x: i32, y: i32, text: &str, size: f32, color: u32) {
        let mut current_x = x as f32;
        let baseline = y as f32 + self.ascent(size);

        for ch in text.chars() {
            let key = (ch, size.to_bits());
            let (metrics, bitmap) = self
                .glyph_cache
                .entry(key)
                .or_insert_with(|| self.font.rasterize(ch, size));

            let glyph_top = baseline - metrics.height as f32 - metrics.ymin as f32;

            for bitmap_y in 0..metrics.height {
                for bitmap_x in 0..metrics.width {
                    let bitmap_idx = bitmap_y * metrics.width + bitmap_x;
                    let Some(&alpha) = bitmap.get(bitmap_idx) else {
                        continue;
                    };
                    if alpha == 0 {
                        continue;
                    }

                    let px = current_x as i32 + bitmap_x as i32 + metrics.xmin;
                    let py = (glyph_top + bitmap_y as f32) as i32;

                    if px >= 0
                        && py >= 0
                        && (px as usize) < frame.width
                        && (py as usize) < frame.height
                    {
                        let alpha_f = alpha as f32 / 255.0;
                        let idx = py as usize * frame.width + px as usize;
                        frame.buffer[idx] = blend_colors(frame.buffer[idx], color, alpha_f);
                    }
                }
            }

            current_x += metrics.advance_width;
        }
    }

    /// Draw text with a faux-bold weight (double-struck one pixel apart)
    pub fn draw_bold(
        &mut self,
        frame: &mut Frame,
        x: i32,
        y: i32,
        text: &str,
        size: f32,
        color: u32,
    ) {
        self.draw(frame, x, y, text, size, color);
        self.draw(frame, x + 1, y, text, size, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_rect() {
        let mut buffer = vec![0u32; 100 * 100];
        let mut frame = Frame::new(&mut buffer, 100, 100);

        frame.fill_rect(Rect::new(10, 10, 20, 20), 0xFFFF0000);

        assert_eq!(frame.get_pixel(15, 15), 0xFFFF0000);
        assert_eq!(frame.get_pixel(5, 5), 0);
        // exclusive far edge
        assert_eq!(frame.get_pixel(30, 30), 0);
    }

    #[test]
    fn test_fill_rect_negative_origin_clips() {
        let mut buffer = vec![0u32; 10 * 10];
        let mut frame = Frame::new(&mut buffer, 10, 10);

        frame.fill_rect(Rect::new(-5, -5, 8, 8), 0xFF00FF00);
        assert_eq!(frame.get_pixel(0, 0), 0xFF00FF00);
        assert_eq!(frame.get_pixel(2, 2), 0xFF00FF00);
        assert_eq!(frame.get_pixel(3, 3), 0);
    }

    #[test]
    fn test_draw_rect_outline_only() {
        let mut buffer = vec![0u32; 50 * 50];
        let mut frame = Frame::new(&mut buffer, 50, 50);

        frame.draw_rect(Rect::new(10, 10, 10, 10), 0xFFABCDEF);
        assert_eq!(frame.get_pixel(10, 10), 0xFFABCDEF);
        assert_eq!(frame.get_pixel(19, 19), 0xFFABCDEF);
        assert_eq!(frame.get_pixel(15, 10), 0xFFABCDEF);
        // interior untouched
        assert_eq!(frame.get_pixel(15, 15), 0);
    }

    #[test]
    fn test_out_of_bounds_is_safe() {
        let mut buffer = vec![0u32; 10 * 10];
        let mut frame = Frame::new(&mut buffer, 10, 10);

        frame.set_pixel(100, 100, 0xFFFFFFFF);
        frame.set_pixel(-1, -1, 0xFFFFFFFF);
        frame.draw_line(-20, -20, 20, 20, 0xFFFFFFFF);
        frame.fill_wedge(5, 5, 100, 0, 360, 0xFF123456);
        assert_eq!(frame.get_pixel(100, 100), 0);
    }

    #[test]
    fn test_blend_pixel_mixes_colors() {
        let mut buffer = vec![0xFFFFFFFF_u32; 10 * 10];
        let mut frame = Frame::new(&mut buffer, 10, 10);

        // 50% black over white lands mid-gray
        frame.blend_pixel(5, 5, 0x80000000);
        let result = frame.get_pixel(5, 5);
        let r = (result >> 16) & 0xFF;
        assert!(r > 100 && r < 160, "R channel: {}", r);
    }

    #[test]
    fn test_draw_line_endpoints() {
        let mut buffer = vec![0u32; 30 * 30];
        let mut frame = Frame::new(&mut buffer, 30, 30);

        frame.draw_line(2, 3, 20, 15, 0xFFFF00FF);
        assert_eq!(frame.get_pixel(2, 3), 0xFFFF00FF);
        assert_eq!(frame.get_pixel(20, 15), 0xFFFF00FF);
    }

    #[test]
    fn test_fill_wedge_quadrants() {
        let mut buffer = vec![0u32; 101 * 101];
        let mut frame = Frame::new(&mut buffer, 101, 101);

        // 0..90 degrees covers the upper-right quadrant (y axis points down)
        frame.fill_wedge(50, 50, 40, 0, 90, 0xFF0000FF);
        assert_eq!(frame.get_pixel(70, 30), 0xFF0000FF);
        assert_eq!(frame.get_pixel(30, 30), 0);
        assert_eq!(frame.get_pixel(30, 70), 0);
        assert_eq!(frame.get_pixel(70, 70), 0);
        // outside the radius
        assert_eq!(frame.get_pixel(95, 5), 0);
    }

    #[test]
    fn test_fill_wedge_full_circle() {
        let mut buffer = vec![0u32; 101 * 101];
        let mut frame = Frame::new(&mut buffer, 101, 101);

        frame.fill_wedge(50, 50, 40, 0, 360, 0xFF112233);
        assert_eq!(frame.get_pixel(50, 50), 0xFF112233);
        assert_eq!(frame.get_pixel(70, 30), 0xFF112233);
        assert_eq!(frame.get_pixel(30, 70), 0xFF112233);
    }

    #[test]
    fn test_fill_wedge_zero_sweep_draws_nothing() {
        let mut buffer = vec![0u32; 50 * 50];
        let mut frame = Frame::new(&mut buffer, 50, 50);

        frame.fill_wedge(25, 25, 20, 45, 0, 0xFFFFFFFF);
        assert!(buffer.iter().all(|&p| p == 0));
    }

    #[test]
    fn test_wedges_tile_the_circle() {
        // adjacent wedges must not overlap: each interior pixel belongs to
        // exactly one of [0,51), [51,360)
        let mut buffer = vec![0u32; 101 * 101];
        let mut frame = Frame::new(&mut buffer, 101, 101);

        frame.fill_wedge(50, 50, 40, 0, 51, 0xFF000001);
        frame.fill_wedge(50, 50, 40, 51, 309, 0xFF000002);

        let mut first = 0;
        let mut second = 0;
        for y in 0..101 {
            for x in 0..101 {
                match frame.get_pixel(x, y) {
                    0xFF000001 => first += 1,
                    0xFF000002 => second += 1,
                    _ => {}
                }
            }
        }
        assert!(first > 0 && second > 0);
        // the second wedge sweeps ~6x the angle of the first
        assert!(second > first * 4);
    }

    #[test]
    fn test_frame_adjusts_to_short_buffer() {
        let mut buffer = vec![0u32; 10 * 5];
        let frame = Frame::new(&mut buffer, 10, 10);
        assert_eq!(frame.height(), 5);
    }
}

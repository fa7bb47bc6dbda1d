//! Half-block pixel canvas: the display collaborator.
//!
//! Each terminal cell holds two vertically stacked pixels via `▀` with
//! independent foreground/background colors, giving a near-square W×2H
//! pixel grid from a W×H cell area. Draws overwrite (painter's
//! algorithm); every primitive clips per pixel and rejects absurd
//! coordinates per call, so no draw can fail a frame.

use portal_core::{Point2, Rgb, Surface};
use portal_glyphs::GlyphCache;
use ratatui::{
    style::Style,
    text::{Line, Span},
};

const BLACK: Rgb = Rgb::new(0, 0, 0);
/// Coordinates beyond this magnitude are rejected outright.
const ABSURD: f32 = 10_000.0;

/// RGB pixel grid backed by the terminal half-block trick.
#[derive(Debug)]
pub struct PixelCanvas {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
    cache: GlyphCache,
}

impl PixelCanvas {
    /// Build a canvas for a terminal area of `cols` × `rows` cells.
    pub fn new(cols: u16, rows: u16) -> Self {
        let width = cols.max(1) as u32;
        let height = rows.max(1) as u32 * 2;
        Self {
            width,
            height,
            pixels: vec![BLACK; (width * height) as usize],
            cache: GlyphCache::new(),
        }
    }

    pub fn cell_size(&self) -> (u16, u16) {
        (self.width as u16, (self.height / 2) as u16)
    }

    /// Resize to a new cell area, discarding the current frame.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.width = cols.max(1) as u32;
        self.height = rows.max(1) as u32 * 2;
        self.pixels.clear();
        self.pixels.resize((self.width * self.height) as usize, BLACK);
    }

    fn set(&mut self, x: i32, y: i32, color: Rgb) {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return;
        }
        self.pixels[(y as u32 * self.width + x as u32) as usize] = color;
    }

    fn pixel(&self, x: u32, y: u32) -> Rgb {
        self.pixels[(y * self.width + x) as usize]
    }

    fn absurd(p: Point2) -> bool {
        !p.x.is_finite() || !p.y.is_finite() || p.x.abs() > ABSURD || p.y.abs() > ABSURD
    }

    /// Stamp a square pen of the given thickness centered on a point.
    fn stamp(&mut self, x: f32, y: f32, color: Rgb, thickness: u32) {
        let t = thickness.max(1) as i32;
        let ox = x.round() as i32 - t / 2;
        let oy = y.round() as i32 - t / 2;
        for dy in 0..t {
            for dx in 0..t {
                self.set(ox + dx, oy + dy, color);
            }
        }
    }

    /// Convert the pixel grid to ratatui lines, one `▀` span per cell.
    pub fn to_lines(&self) -> Vec<Line<'static>> {
        (0..self.height / 2)
            .map(|row| {
                let spans: Vec<Span> = (0..self.width)
                    .map(|x| {
                        let upper = self.pixel(x, row * 2);
                        let lower = self.pixel(x, row * 2 + 1);
                        if upper.is_black() && lower.is_black() {
                            Span::raw(" ")
                        } else {
                            Span::styled(
                                "▀",
                                Style::new().fg(upper.to_color()).bg(lower.to_color()),
                            )
                        }
                    })
                    .collect();
                Line::from(spans)
            })
            .collect()
    }
}

impl Surface for PixelCanvas {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn clear(&mut self) {
        self.pixels.fill(BLACK);
    }

    fn line(&mut self, p1: Point2, p2: Point2, color: Rgb, thickness: u32) {
        if Self::absurd(p1) || Self::absurd(p2) {
            return;
        }
        let dx = p2.x - p1.x;
        let dy = p2.y - p1.y;
        let steps = dx.abs().max(dy.abs()).ceil() as u32;
        if steps == 0 {
            self.stamp(p1.x, p1.y, color, thickness);
            return;
        }
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            self.stamp(p1.x + dx * t, p1.y + dy * t, color, thickness);
        }
    }

    fn text(&mut self, text: &str, center: Point2, color: Rgb, px_size: f32) -> Option<(u32, u32)> {
        if Self::absurd(center) || text.is_empty() {
            return None;
        }
        let font = self.cache.font_for(px_size);
        let (tw, th) = font.measure(text);
        let advance = font.advance;
        let ox = (center.x - tw as f32 / 2.0).round() as i32;
        let oy = (center.y - th as f32 / 2.0).round() as i32;

        // Stamp only lit glyph pixels so the text stays transparent.
        let mut lit: Vec<(i32, i32)> = Vec::new();
        for (i, ch) in text.chars().enumerate() {
            let gx = ox + (i as u32 * advance) as i32;
            for &(px, py) in font.glyph(ch) {
                lit.push((gx + px as i32, oy + py as i32));
            }
        }
        for (x, y) in lit {
            self.set(x, y, color);
        }
        Some((tw, th))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_block_blit() {
        let mut canvas = PixelCanvas::new(4, 2);
        assert_eq!(canvas.width(), 4);
        assert_eq!(canvas.height(), 4);

        let red = Rgb::new(255, 0, 0);
        let blue = Rgb::new(0, 0, 255);
        canvas.set(0, 0, red); // upper pixel of cell (0, 0)
        canvas.set(1, 1, blue); // lower pixel of cell (1, 0)

        let lines = canvas.to_lines();
        assert_eq!(lines.len(), 2);
        let row = &lines[0];
        assert_eq!(row.spans[0].content, "▀");
        assert_eq!(row.spans[0].style.fg, Some(red.to_color()));
        assert_eq!(row.spans[0].style.bg, Some(BLACK.to_color()));
        assert_eq!(row.spans[1].style.fg, Some(BLACK.to_color()));
        assert_eq!(row.spans[1].style.bg, Some(blue.to_color()));
        assert_eq!(row.spans[2].content, " ");
    }

    #[test]
    fn test_line_clips_offscreen() {
        let mut canvas = PixelCanvas::new(10, 5);
        let white = Rgb::new(255, 255, 255);
        // Crosses the canvas boundary; must not panic and must draw the
        // in-range part.
        canvas.line(Point2::new(-5.0, 2.0), Point2::new(5.0, 2.0), white, 1);
        assert_eq!(canvas.pixel(0, 2), white);
        assert_eq!(canvas.pixel(5, 2), white);
        assert_eq!(canvas.pixel(6, 2), BLACK);
    }

    #[test]
    fn test_absurd_coordinates_rejected() {
        let mut canvas = PixelCanvas::new(10, 5);
        let white = Rgb::new(255, 255, 255);
        canvas.line(
            Point2::new(f32::NAN, 0.0),
            Point2::new(5.0, 5.0),
            white,
            1,
        );
        canvas.line(
            Point2::new(-1e9, 0.0),
            Point2::new(5.0, 5.0),
            white,
            1,
        );
        assert!(canvas.pixels.iter().all(|p| p.is_black()));
        assert!(
            canvas
                .text("HI", Point2::new(1e9, 0.0), white, 14.0)
                .is_none()
        );
    }

    #[test]
    fn test_text_centered_and_measured() {
        let mut canvas = PixelCanvas::new(40, 10);
        let green = Rgb::new(0, 255, 0);
        let (w, h) = canvas
            .text("I", Point2::new(20.0, 10.0), green, 7.0)
            .unwrap();
        assert_eq!((w, h), (5, 7));
        // The 'I' column of the smallest font lands on the center line.
        assert_eq!(canvas.pixel(20, 10), green);
        // Unlit glyph pixels stay transparent.
        assert_eq!(canvas.pixel(19, 10), BLACK);
    }

    #[test]
    fn test_clear_and_resize() {
        let mut canvas = PixelCanvas::new(4, 2);
        canvas.set(0, 0, Rgb::new(9, 9, 9));
        canvas.clear();
        assert!(canvas.pixels.iter().all(|p| p.is_black()));

        canvas.resize(8, 3);
        assert_eq!(canvas.cell_size(), (8, 3));
        assert_eq!(canvas.pixels.len(), 8 * 6);
    }
}

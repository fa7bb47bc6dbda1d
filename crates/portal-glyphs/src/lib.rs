//! Block glyph patterns and the rasterized glyph cache for portal.
//!
//! Text is stamped onto the pixel canvas from fixed 5×7 patterns,
//! pre-rasterized at a few integer scales. The cache is built once at
//! init and is read-only afterwards: per-frame lookups only round the
//! requested pixel size to the nearest bucket.

mod patterns;

use std::collections::HashMap;

pub use patterns::{DIAMOND, FALLBACK, GLYPH_COLS, GLYPH_ROWS, SUPPORTED, pattern};

/// Integer pattern scales rasterized at init (pixel heights 7, 14, 21).
const SCALES: [u32; 3] = [1, 2, 3];

/// One pre-rasterized size bucket: lit pixel offsets per glyph.
#[derive(Debug)]
pub struct SizedFont {
    /// Glyph height in pixels.
    pub px_h: u32,
    /// Glyph width in pixels.
    pub px_w: u32,
    /// Horizontal advance between glyph origins.
    pub advance: u32,
    glyphs: HashMap<char, Vec<(u16, u16)>>,
    fallback: Vec<(u16, u16)>,
}

impl SizedFont {
    fn new(scale: u32) -> Self {
        let mut glyphs = HashMap::new();
        for ch in SUPPORTED.chars() {
            if let Some(rows) = pattern(ch) {
                glyphs.insert(ch, rasterize(rows, scale));
            }
        }
        Self {
            px_h: GLYPH_ROWS as u32 * scale,
            px_w: GLYPH_COLS as u32 * scale,
            advance: (GLYPH_COLS as u32 + 1) * scale,
            glyphs,
            fallback: rasterize(&FALLBACK, scale),
        }
    }

    /// Lit pixel offsets for a character, relative to the glyph origin.
    pub fn glyph(&self, ch: char) -> &[(u16, u16)] {
        self.glyphs
            .get(&ch.to_ascii_uppercase())
            .unwrap_or(&self.fallback)
    }

    /// Pixel size of a rendered string: (width, height).
    pub fn measure(&self, text: &str) -> (u32, u32) {
        let n = text.chars().count() as u32;
        if n == 0 {
            return (0, self.px_h);
        }
        (n * self.advance - (self.advance - self.px_w), self.px_h)
    }
}

fn rasterize(rows: &[&str; 7], scale: u32) -> Vec<(u16, u16)> {
    let mut lit = Vec::new();
    for (row, line) in rows.iter().enumerate() {
        for (col, ch) in line.chars().enumerate() {
            if ch == ' ' {
                continue;
            }
            for dy in 0..scale {
                for dx in 0..scale {
                    lit.push((
                        (col as u32 * scale + dx) as u16,
                        (row as u32 * scale + dy) as u16,
                    ));
                }
            }
        }
    }
    lit
}

/// Read-only lookup table of pre-rasterized fonts keyed by pixel height.
#[derive(Debug)]
pub struct GlyphCache {
    buckets: Vec<SizedFont>,
}

impl Default for GlyphCache {
    fn default() -> Self {
        Self::new()
    }
}

impl GlyphCache {
    pub fn new() -> Self {
        Self {
            buckets: SCALES.iter().map(|&s| SizedFont::new(s)).collect(),
        }
    }

    /// The font whose height is nearest the requested pixel size.
    /// Degenerate requests (non-finite or non-positive) get the smallest
    /// bucket rather than an error.
    pub fn font_for(&self, px: f32) -> &SizedFont {
        if !px.is_finite() || px <= 0.0 {
            return &self.buckets[0];
        }
        self.buckets
            .iter()
            .min_by(|a, b| {
                let da = (a.px_h as f32 - px).abs();
                let db = (b.px_h as f32 - px).abs();
                da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
            })
            .unwrap_or(&self.buckets[0])
    }
}

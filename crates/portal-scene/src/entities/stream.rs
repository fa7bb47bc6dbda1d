//! Falling glyph streams: rigid trails advancing along a fixed 3D path.

use portal_core::{
    DepthModel, MATRIX_GREEN, MATRIX_HEAD, Projector, SCALE_K_TEXT, Surface, Vec3,
};
use rand::Rng;

use crate::chars::STREAM_CHARS;

/// Progress value a freshly reset stream starts from.
pub const PROGRESS_START: f32 = -0.3;
/// Progress value past which the stream has left the tunnel and recycles.
pub const PROGRESS_END: f32 = 1.3;
/// Path-progress lag between adjacent trail slots.
const SLOT_SPACING: f32 = 0.035;
/// Base glyph height in pixels at z = 0.
const GLYPH_PX: f32 = 14.0;

/// One glyph slot in the trail.
#[derive(Debug, Clone)]
pub(crate) struct Slot {
    pub(crate) ch: char,
    pub(crate) brightness: f32,
}

/// Trail brightness by slot index: the head is fixed at maximum, the tail
/// fades linearly toward a floor.
pub(crate) fn slot_brightness(index: usize, trail_length: usize) -> f32 {
    if index == 0 {
        return 1.0;
    }
    let fade = 1.0 - index as f32 / trail_length as f32;
    (50.0 + fade * 150.0) / 255.0
}

fn pick_char(rng: &mut impl Rng) -> char {
    STREAM_CHARS[rng.gen_range(0..STREAM_CHARS.len())]
}

/// A single scrolling trail of glyphs along a wall path.
///
/// The whole trail moves as one rigid body: slot `i` samples the path at
/// `progress - i * spacing`, so positional lag is purely a function of the
/// head. Slots recycle in place; steady-state updates allocate nothing.
#[derive(Debug, Clone)]
pub struct GlyphStream {
    start: Vec3,
    end: Vec3,
    pub(crate) progress: f32,
    speed: f32,
    flicker: f32,
    slots: Vec<Slot>,
}

impl GlyphStream {
    pub fn new(start: Vec3, end: Vec3, rng: &mut impl Rng) -> Self {
        let trail_length = rng.gen_range(6..=12);
        let slots = (0..trail_length)
            .map(|i| Slot {
                ch: pick_char(rng),
                brightness: slot_brightness(i, trail_length),
            })
            .collect();
        Self {
            start,
            end,
            progress: rng.gen_range(PROGRESS_START..1.0),
            speed: rng.gen_range(0.30..0.67),
            flicker: rng.gen_range(0.02..0.05),
            slots,
        }
    }

    /// Midpoint depth of the path, used for creation-time draw ordering.
    pub fn average_depth(&self) -> f32 {
        (self.start.z + self.end.z) / 2.0
    }

    pub fn finished(&self) -> bool {
        self.progress > PROGRESS_END
    }

    pub fn update(&mut self, dt: f32, rng: &mut impl Rng) {
        self.progress += self.speed * dt;

        // Tail slots flicker faster than the head.
        let len = self.slots.len() as f32;
        for (i, slot) in self.slots.iter_mut().enumerate() {
            let chance = self.flicker * (1.0 + 2.0 * i as f32 / len);
            if rng.gen_bool(chance as f64) {
                slot.ch = pick_char(rng);
            }
        }
    }

    /// Restart from before the path entrance with fresh speed, flicker
    /// chance and trail contents. Reuses the slot storage.
    pub fn reset(&mut self, rng: &mut impl Rng) {
        self.progress = PROGRESS_START;
        self.speed = rng.gen_range(0.30..0.67);
        self.flicker = rng.gen_range(0.02..0.05);
        let trail_length = self.slots.len();
        for (i, slot) in self.slots.iter_mut().enumerate() {
            slot.ch = pick_char(rng);
            slot.brightness = slot_brightness(i, trail_length);
        }
    }

    pub fn render(&self, surface: &mut dyn Surface, projector: &Projector, depth: &DepthModel) {
        let (w, h) = (surface.width() as f32, surface.height() as f32);
        let mut buf = [0u8; 4];

        for (i, slot) in self.slots.iter().enumerate() {
            let t = self.progress - i as f32 * SLOT_SPACING;
            if !(0.0..=1.0).contains(&t) {
                continue;
            }
            let pos = self.start.lerp(self.end, t);
            let p = projector.project(pos);
            if p.x < 0.0 || p.x > w || p.y < 0.0 || p.y > h {
                continue;
            }

            let alpha = slot.brightness * depth.alpha(pos.z);
            let color = if i == 0 { MATRIX_HEAD } else { MATRIX_GREEN };
            let px_size = GLYPH_PX * depth.scale(pos.z, SCALE_K_TEXT);
            surface.text(slot.ch.encode_utf8(&mut buf), p, color.scaled(alpha), px_size);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn test_stream(seed: u64) -> (GlyphStream, StdRng) {
        let mut rng = StdRng::seed_from_u64(seed);
        let stream = GlyphStream::new(
            Vec3::new(3.0, 7.0, 40.0),
            Vec3::new(3.0, 7.0, 0.0),
            &mut rng,
        );
        (stream, rng)
    }

    #[test]
    fn test_brightness_profile() {
        assert_eq!(slot_brightness(0, 8), 1.0);
        let mut prev = 1.0;
        for i in 1..8 {
            let b = slot_brightness(i, 8);
            assert!(b < prev, "tail brightness must fade");
            assert!(b >= 50.0 / 255.0);
            prev = b;
        }
    }

    #[test]
    fn test_reset_is_idempotent() {
        let (mut stream, mut rng) = test_stream(42);
        let trail_length = stream.slots.len();
        for _ in 0..600 {
            stream.update(1.0 / 60.0, &mut rng);
        }
        stream.reset(&mut rng);

        assert_eq!(stream.progress, PROGRESS_START);
        for (i, slot) in stream.slots.iter().enumerate() {
            assert_eq!(slot.brightness, slot_brightness(i, trail_length));
        }
        assert_eq!(stream.slots.len(), trail_length);
    }

    #[test]
    fn test_rigid_body_motion() {
        let (mut stream, mut rng) = test_stream(9);
        stream.progress = 0.5;
        let before = stream.progress;
        stream.update(1.0 / 60.0, &mut rng);
        let delta = stream.progress - before;
        assert!(delta > 0.0);
        // One tick advances by speed * dt, within the configured range
        // (with a little float slack).
        assert!(delta > 0.29 / 60.0 && delta < 0.68 / 60.0);
    }

    #[test]
    fn test_finished_past_exit() {
        let (mut stream, mut rng) = test_stream(1);
        stream.progress = PROGRESS_END - 0.01;
        assert!(!stream.finished());
        for _ in 0..10 {
            stream.update(1.0, &mut rng);
        }
        assert!(stream.finished());
    }
}

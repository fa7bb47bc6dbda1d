//! The floating two-line glyph at the heart of the tunnel.

use std::f32::consts::TAU;

use portal_core::{
    CYAN, DepthModel, MATRIX_GREEN, Projector, SCALE_K_CENTERPIECE, Surface, Vec3,
};
use rand::Rng;

/// Fixed world anchor of the centerpiece.
const ANCHOR: Vec3 = Vec3::new(0.0, 0.0, 6.0);
/// Sinusoidal drift amplitudes, in world units.
const DRIFT_X: f32 = 0.6;
const DRIFT_Y: f32 = 0.4;
/// Seconds between glitch jump samples.
const GLITCH_CADENCE: f32 = 0.1;
/// Base pixel heights at z = 0 for the two text lines.
const LINE1_PX: f32 = 21.0;
const LINE2_PX: f32 = 12.0;
/// Lateral world offset of the marker glyphs.
const MARKER_OFFSET: f32 = 2.5;

const LINE1: &str = "WAKE UP";
const LINE2: &str = "THE MATRIX HAS YOU";

/// A slowly drifting glyph pair with periodic glitch jumps.
#[derive(Debug, Clone)]
pub struct Centerpiece {
    clock: f32,
    drift_phase_x: f32,
    drift_phase_y: f32,
    drift_rate_x: f32,
    drift_rate_y: f32,
    pulse_phase: f32,
    glitch_timer: f32,
    glitch_offset: f32,
}

impl Centerpiece {
    pub fn new(rng: &mut impl Rng) -> Self {
        Self {
            clock: 0.0,
            drift_phase_x: rng.gen_range(0.0..TAU),
            drift_phase_y: rng.gen_range(0.0..TAU),
            drift_rate_x: rng.gen_range(0.5..0.9),
            drift_rate_y: rng.gen_range(0.3..0.7),
            pulse_phase: rng.gen_range(0.0..TAU),
            glitch_timer: 0.0,
            glitch_offset: 0.0,
        }
    }

    pub fn update(&mut self, dt: f32, rng: &mut impl Rng) {
        self.clock += dt;
        self.glitch_timer += dt;
        if self.glitch_timer > GLITCH_CADENCE {
            self.glitch_timer = 0.0;
            self.glitch_offset = if rng.gen_bool(0.08) {
                rng.gen_range(-0.8..0.8)
            } else {
                0.0
            };
        }
    }

    fn position(&self) -> Vec3 {
        Vec3::new(
            ANCHOR.x
                + DRIFT_X * (self.clock * self.drift_rate_x + self.drift_phase_x).sin()
                + self.glitch_offset,
            ANCHOR.y + DRIFT_Y * (self.clock * self.drift_rate_y + self.drift_phase_y).cos(),
            ANCHOR.z,
        )
    }

    pub fn render(&self, surface: &mut dyn Surface, projector: &Projector, depth: &DepthModel) {
        let pulse = 1.0 + 0.15 * (self.clock * 2.0 + self.pulse_phase).sin();
        // Pulsation multiplies the depth base but is capped at the
        // unpulsed near-plane value.
        let alpha = (depth.alpha(ANCHOR.z) * pulse).min(1.0);
        let scale = (depth.scale(ANCHOR.z, SCALE_K_CENTERPIECE) * pulse).min(1.0);

        let pos = self.position();
        let below = Vec3::new(pos.x, pos.y + 1.2, pos.z);
        // Markers are world-space points projected independently so they
        // keep correct parallax rather than being screen offsets.
        let left = Vec3::new(pos.x - MARKER_OFFSET, pos.y, pos.z);
        let right = Vec3::new(pos.x + MARKER_OFFSET, pos.y, pos.z);

        let text_color = MATRIX_GREEN.scaled(alpha);
        surface.text(LINE1, projector.project(pos), text_color, LINE1_PX * scale);
        surface.text(LINE2, projector.project(below), text_color, LINE2_PX * scale);

        let marker_color = CYAN.scaled(alpha * 0.8);
        surface.text("◆", projector.project(left), marker_color, LINE2_PX * scale);
        surface.text("◆", projector.project(right), marker_color, LINE2_PX * scale);
    }
}

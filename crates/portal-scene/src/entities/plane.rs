//! Depth-layered wireframe plane with scattered alert labels.

use std::f32::consts::TAU;

use portal_core::{
    CYAN, DepthModel, MAGENTA, Point2, Projector, Rgb, SCALE_K_TEXT, Surface, Vec3,
};
use rand::Rng;

use crate::chars::{ALERT_MESSAGES, LABEL_COLORS};

/// Plane is skipped entirely below this composed alpha.
const MIN_ALPHA: f32 = 0.05;
/// Labels are culled beyond this margin around the viewport, in pixels.
const CULL_MARGIN: f32 = 100.0;
/// Base label font height in pixels at z = 0.
const LABEL_PX: f32 = 14.0;
/// Seconds between glitch offset re-samples.
const GLITCH_CADENCE: f32 = 0.1;
/// Glow pass strokes and alpha multipliers under the sharp wireframe.
const GLOW_PASSES: [(u32, f32); 2] = [(6, 0.2), (4, 0.4)];

/// One alert label on the plane surface.
#[derive(Debug, Clone)]
pub(crate) struct Label {
    pub(crate) pos: Vec3,
    pub(crate) text: &'static str,
    color: Rgb,
    brightness: f32,
    /// Seconds until the text is re-picked.
    pub(crate) change_timer: f32,
    glitch_timer: f32,
    glitch_offset: f32,
}

fn pick_message(rng: &mut impl Rng) -> &'static str {
    ALERT_MESSAGES[rng.gen_range(0..ALERT_MESSAGES.len())]
}

fn pick_timer(rng: &mut impl Rng) -> f32 {
    rng.gen_range(1.0..3.0)
}

/// Uniform label coordinate inside a half-extent with a 0.5 world margin.
/// Planes too narrow for the margin pin their labels to the center.
fn label_coord(half: f32, rng: &mut impl Rng) -> f32 {
    let margin = half - 0.5;
    if margin > 0.0 {
        rng.gen_range(-margin..margin)
    } else {
        0.0
    }
}

/// A wireframe rectangle at a fixed depth with animated labels.
#[derive(Debug, Clone)]
pub struct GridPlane {
    z: f32,
    half_w: f32,
    half_h: f32,
    pub(crate) labels: Vec<Label>,
    pulse_clock: f32,
    pulse_rate: f32,
    pulse_phase: f32,
    frame_clock: f32,
}

impl GridPlane {
    pub fn new(z: f32, width: f32, height: f32, rng: &mut impl Rng) -> Self {
        let half_w = width / 2.0;
        let half_h = height / 2.0;
        let count = rng.gen_range(5..=10);
        let labels = (0..count)
            .map(|_| Label {
                pos: Vec3::new(label_coord(half_w, rng), label_coord(half_h, rng), z),
                text: pick_message(rng),
                color: LABEL_COLORS[rng.gen_range(0..LABEL_COLORS.len())],
                brightness: rng.gen_range(0.5..1.0),
                change_timer: pick_timer(rng),
                glitch_timer: 0.0,
                glitch_offset: 0.0,
            })
            .collect();
        Self {
            z,
            half_w,
            half_h,
            labels,
            pulse_clock: 0.0,
            pulse_rate: rng.gen_range(1.8..3.6),
            pulse_phase: rng.gen_range(0.0..TAU),
            frame_clock: rng.gen_range(0.0..TAU),
        }
    }

    pub fn z(&self) -> f32 {
        self.z
    }

    pub fn update(&mut self, dt: f32, rng: &mut impl Rng) {
        self.pulse_clock += self.pulse_rate * dt;
        self.frame_clock += 3.0 * dt;

        for label in &mut self.labels {
            label.change_timer -= dt;
            if label.change_timer <= 0.0 {
                label.text = pick_message(rng);
                label.change_timer = pick_timer(rng);
            }

            label.glitch_timer += dt;
            if label.glitch_timer > GLITCH_CADENCE {
                label.glitch_timer = 0.0;
                label.glitch_offset = if rng.gen_bool(0.2) {
                    rng.gen_range(-3.0..3.0)
                } else {
                    0.0
                };
            }
        }
    }

    /// Sine-interpolated cyan/magenta wireframe color.
    fn frame_color(&self) -> Rgb {
        let factor = (self.frame_clock.sin() + 1.0) / 2.0;
        CYAN.lerp(MAGENTA, factor)
    }

    pub fn render(&self, surface: &mut dyn Surface, projector: &Projector, depth: &DepthModel) {
        let pulse = 1.0 + 0.3 * (self.pulse_clock + self.pulse_phase).sin();
        let base_alpha = depth.alpha(self.z);
        // Pulsation oscillates on top of the depth base but may never
        // exceed the unpulsed near-plane value.
        let alpha = (base_alpha * pulse).min(1.0);
        if alpha < MIN_ALPHA {
            return;
        }

        let corners = [
            Vec3::new(-self.half_w, -self.half_h, self.z),
            Vec3::new(self.half_w, -self.half_h, self.z),
            Vec3::new(self.half_w, self.half_h, self.z),
            Vec3::new(-self.half_w, self.half_h, self.z),
        ];
        let projected: Vec<Point2> = corners.iter().map(|&c| projector.project(c)).collect();

        let base = self.frame_color();
        for (stroke, glow) in GLOW_PASSES {
            surface.polygon(&projected, base.scaled(alpha * glow), stroke);
        }
        surface.polygon(&projected, base.scaled(alpha), 2);

        self.render_labels(surface, projector, depth, base_alpha);
    }

    fn render_labels(
        &self,
        surface: &mut dyn Surface,
        projector: &Projector,
        depth: &DepthModel,
        base_alpha: f32,
    ) {
        let px_size = LABEL_PX * depth.scale(self.z, SCALE_K_TEXT);
        let (w, h) = (surface.width() as f32, surface.height() as f32);

        for label in &self.labels {
            let mut p = projector.project(label.pos);
            p.x += label.glitch_offset;
            if p.x < -CULL_MARGIN || p.x > w + CULL_MARGIN || p.y < -CULL_MARGIN
                || p.y > h + CULL_MARGIN
            {
                continue;
            }

            let final_alpha = base_alpha * label.brightness;
            let glow = label.color.scaled(final_alpha * 0.3);
            for (ox, oy) in [(-2.0, -2.0), (2.0, -2.0), (-2.0, 2.0), (2.0, 2.0)] {
                surface.text(label.text, Point2::new(p.x + ox, p.y + oy), glow, px_size);
            }
            surface.text(label.text, p, label.color.scaled(final_alpha), px_size);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_label_counts_and_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let plane = GridPlane::new(10.0, 19.0, 15.2, &mut rng);
            assert!((5..=10).contains(&plane.labels.len()));
            for label in &plane.labels {
                assert!((0.5..1.0).contains(&label.brightness));
                assert!((1.0..3.0).contains(&label.change_timer));
                assert!(label.pos.x.abs() <= 19.0 / 2.0 - 0.5);
                assert!(label.pos.y.abs() <= 15.2 / 2.0 - 0.5);
            }
        }
    }

    #[test]
    fn test_expired_label_repicked_same_tick() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut plane = GridPlane::new(10.0, 19.0, 15.2, &mut rng);
        for label in &mut plane.labels {
            label.change_timer = 0.001;
        }
        plane.update(1.0 / 60.0, &mut rng);
        for label in &plane.labels {
            // The timer must be re-drawn from the configured range on the
            // tick it expires, never left at or below zero.
            assert!((1.0..3.0).contains(&label.change_timer));
        }
    }

    #[test]
    fn test_unexpired_label_keeps_text() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut plane = GridPlane::new(10.0, 19.0, 15.2, &mut rng);
        let before: Vec<&str> = plane.labels.iter().map(|l| l.text).collect();
        plane.update(1.0 / 60.0, &mut rng);
        let after: Vec<&str> = plane.labels.iter().map(|l| l.text).collect();
        assert_eq!(before, after);
    }
}

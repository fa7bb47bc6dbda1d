//! Off-axis perspective projection.
//!
//! The single mathematical fulcrum of the illusion: the foreshortening
//! interpolation pivots on the tracked viewer offset instead of the
//! origin, so near geometry shifts more than far geometry as the viewer
//! moves. Every entity projects through the same `Projector` value each
//! frame so the constants stay consistent across the whole scene.

use crate::math::{Point2, Vec3};

/// Distance from the eye to the near (z = 0) plane, in world units.
pub const EYE_DISTANCE: f32 = 8.0;
/// World-space pivot displacement at full horizontal deflection.
pub const PARALLAX_X: f32 = 3.0;
/// World-space pivot displacement at full vertical deflection.
pub const PARALLAX_Y: f32 = 2.0;

/// Guard against projecting a point at or behind the eye plane.
const DEPTH_EPSILON: f32 = 1e-3;

/// Tracked viewpoint displacement, normalized to roughly [-1, 1] per axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewerOffset {
    pub hx: f32,
    pub hy: f32,
}

impl ViewerOffset {
    pub const fn new(hx: f32, hy: f32) -> Self {
        Self { hx, hy }
    }

    /// The centered offset substituted whenever tracking is unavailable.
    pub const fn neutral() -> Self {
        Self { hx: 0.0, hy: 0.0 }
    }

    /// Exponential smoothing: `weight` on the previous value suppresses
    /// frame-to-frame tracking jitter.
    pub fn smoothed(self, raw: ViewerOffset, weight: f32) -> ViewerOffset {
        ViewerOffset {
            hx: self.hx * weight + raw.hx * (1.0 - weight),
            hy: self.hy * weight + raw.hy * (1.0 - weight),
        }
    }
}

/// Pure perspective transform for one frame. `Copy`, holds no state
/// between calls.
#[derive(Debug, Clone, Copy)]
pub struct Projector {
    pivot_x: f32,
    pivot_y: f32,
    half_w: f32,
    half_h: f32,
    scale: f32,
}

impl Projector {
    /// Build the frame's projector from the smoothed offset and the pixel
    /// viewport. `world_height` is the fixed vertical world extent; the
    /// pixel scale is derived so that extent exactly fills the viewport
    /// height. `strength` in [0, 1] attenuates the parallax pivot.
    pub fn new(
        offset: ViewerOffset,
        strength: f32,
        viewport_w: u32,
        viewport_h: u32,
        world_height: f32,
    ) -> Self {
        Self {
            pivot_x: offset.hx * strength * PARALLAX_X,
            pivot_y: offset.hy * strength * PARALLAX_Y,
            half_w: viewport_w as f32 / 2.0,
            half_h: viewport_h as f32 / 2.0,
            scale: viewport_h as f32 / world_height,
        }
    }

    /// Project a world point to pixel coordinates.
    ///
    /// Never panics and never returns a non-finite coordinate: a depth at
    /// or behind the eye plane is clamped to a small positive distance.
    /// Culling of offscreen results is the caller's concern.
    pub fn project(&self, p: Vec3) -> Point2 {
        let mut d = EYE_DISTANCE + p.z;
        if d <= 0.0 {
            d = DEPTH_EPSILON;
        }
        let f = EYE_DISTANCE / d;
        let sx = self.pivot_x + (p.x - self.pivot_x) * f;
        let sy = self.pivot_y + (p.y - self.pivot_y) * f;
        Point2 {
            x: self.half_w + sx * self.scale,
            y: self.half_h + sy * self.scale,
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    fn neutral_projector() -> Projector {
        Projector::new(ViewerOffset::neutral(), 1.0, 200, 100, 16.0)
    }

    #[test]
    fn test_reduces_to_scaled_translation_at_near_plane() {
        // With a centered viewer and z = 0, f = 1 and the projection is
        // exactly (w/2 + x*S, h/2 + y*S).
        let proj = neutral_projector();
        let s = 100.0 / 16.0;
        let p = proj.project(Vec3::new(2.0, -3.0, 0.0));
        assert_eq!(p, Point2::new(100.0 + 2.0 * s, 50.0 + -3.0 * s));
    }

    #[test]
    fn test_finite_behind_eye() {
        let proj = neutral_projector();
        for z in [-EYE_DISTANCE, -EYE_DISTANCE - 5.0, -1000.0] {
            let p = proj.project(Vec3::new(1.0, 1.0, z));
            assert!(p.x.is_finite() && p.y.is_finite(), "non-finite at z={z}");
        }
    }

    #[test]
    fn test_far_points_shrink_toward_pivot() {
        let proj = neutral_projector();
        let near = proj.project(Vec3::new(4.0, 0.0, 0.0));
        let far = proj.project(Vec3::new(4.0, 0.0, 30.0));
        assert!((far.x - 100.0).abs() < (near.x - 100.0).abs());
    }

    #[test]
    fn test_parallax_displaces_near_more_than_far() {
        let centered = neutral_projector();
        let offset = Projector::new(ViewerOffset::new(1.0, 0.0), 1.0, 200, 100, 16.0);
        let p = Vec3::new(0.0, 0.0, 2.0);
        let q = Vec3::new(0.0, 0.0, 30.0);
        let near_shift = (offset.project(p).x - centered.project(p).x).abs();
        let far_shift = (offset.project(q).x - centered.project(q).x).abs();
        assert!(near_shift < far_shift);
        // At z = 0 the pivot term cancels: no shift at all.
        let zero = Vec3::new(0.0, 0.0, 0.0);
        assert!((offset.project(zero).x - centered.project(zero).x).abs() < 1e-4);
    }

    #[test]
    fn test_offset_smoothing() {
        let prev = ViewerOffset::new(0.4, 0.0);
        let next = prev.smoothed(ViewerOffset::neutral(), 0.7);
        assert!((next.hx - 0.28).abs() < 1e-6);
        assert_eq!(next.hy, 0.0);
    }
}

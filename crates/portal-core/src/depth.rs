//! Depth-to-visual-property mapping shared by every renderable entity.

/// Exponential fade constant: alpha at the far plane is `exp(-FADE_K)` ≈ 0.08.
pub const FADE_K: f32 = 2.5;
/// Foreshortening constant for text sizes.
pub const SCALE_K_TEXT: f32 = 2.0;
/// Foreshortening constant for the centerpiece glyphs.
pub const SCALE_K_CENTERPIECE: f32 = 1.5;

/// Maps a depth value into alpha and scale multipliers.
///
/// Both functions clamp the normalized depth to [0, 1] first; callers may
/// pass a `z` slightly outside bounds during animation transients.
#[derive(Debug, Clone, Copy)]
pub struct DepthModel {
    min_z: f32,
    max_z: f32,
}

impl DepthModel {
    pub fn new(min_z: f32, max_z: f32) -> Self {
        Self { min_z, max_z }
    }

    fn normalized(&self, z: f32) -> f32 {
        ((z - self.min_z) / (self.max_z - self.min_z)).clamp(0.0, 1.0)
    }

    /// Brightness multiplier in (0, 1]: ~1.0 at the near plane, ~0.08 far.
    pub fn alpha(&self, z: f32) -> f32 {
        (-self.normalized(z) * FADE_K).exp()
    }

    /// Size multiplier in (0, 1], `k` chosen per entity type.
    pub fn scale(&self, z: f32, k: f32) -> f32 {
        1.0 / (1.0 + self.normalized(z) * k)
    }
}

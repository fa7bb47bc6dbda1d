//! The view frustum bounds: the rectangular volume containing all geometry.

use std::fmt;

/// Error raised when bounds are constructed with an empty or inverted axis.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundsError {
    axis: &'static str,
    min: f32,
    max: f32,
}

impl fmt::Display for BoundsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "frustum bounds must satisfy min < max on {}: got [{}, {}]",
            self.axis, self.min, self.max
        )
    }
}

impl std::error::Error for BoundsError {}

/// The rectangular world volume all effect geometry lives in.
///
/// Invariant: `min < max` on every axis, enforced at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrustumBounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
    pub min_z: f32,
    pub max_z: f32,
}

impl FrustumBounds {
    pub fn new(
        min_x: f32,
        max_x: f32,
        min_y: f32,
        max_y: f32,
        min_z: f32,
        max_z: f32,
    ) -> Result<Self, BoundsError> {
        for (axis, min, max) in [("x", min_x, max_x), ("y", min_y, max_y), ("z", min_z, max_z)] {
            if !(min < max) {
                return Err(BoundsError { axis, min, max });
            }
        }
        Ok(Self {
            min_x,
            max_x,
            min_y,
            max_y,
            min_z,
            max_z,
        })
    }

    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    pub fn depth(&self) -> f32 {
        self.max_z - self.min_z
    }

    /// Largest relative extent change on the x or y axis versus `other`.
    ///
    /// Used by the resize policy: a full re-layout only happens when this
    /// exceeds the 20% threshold, so minor terminal resizes never pop.
    pub fn relative_change(&self, other: &FrustumBounds) -> f32 {
        let dx = (other.width() - self.width()).abs() / self.width();
        let dy = (other.height() - self.height()).abs() / self.height();
        dx.max(dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_and_inverted_axes() {
        assert!(FrustumBounds::new(0.0, 0.0, -1.0, 1.0, 0.0, 40.0).is_err());
        assert!(FrustumBounds::new(-1.0, 1.0, 1.0, -1.0, 0.0, 40.0).is_err());
        assert!(FrustumBounds::new(-1.0, 1.0, -1.0, 1.0, 40.0, 40.0).is_err());
        assert!(FrustumBounds::new(-10.0, 10.0, -8.0, 8.0, 0.0, 40.0).is_ok());
    }

    #[test]
    fn test_relative_change() {
        let old = FrustumBounds::new(-10.0, 10.0, -8.0, 8.0, 0.0, 40.0).unwrap();
        let narrow = FrustumBounds::new(-11.5, 11.5, -8.0, 8.0, 0.0, 40.0).unwrap();
        let wide = FrustumBounds::new(-12.5, 12.5, -8.0, 8.0, 0.0, 40.0).unwrap();
        assert!((old.relative_change(&narrow) - 0.15).abs() < 1e-6);
        assert!((old.relative_change(&wide) - 0.25).abs() < 1e-6);
    }
}

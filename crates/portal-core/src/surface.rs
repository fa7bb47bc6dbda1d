//! The draw trait the scene renders through.

use crate::color::Rgb;
use crate::math::Point2;

/// Primitive draw operations supplied by the display collaborator.
///
/// Coordinates are pixels with origin at top-left. Implementations must
/// treat out-of-range coordinates as skippable, never as errors: no draw
/// call may fail a frame.
pub trait Surface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Fill the whole surface with black.
    fn clear(&mut self);

    /// Draw a line segment with a square pen of the given thickness.
    fn line(&mut self, p1: Point2, p2: Point2, color: Rgb, thickness: u32);

    /// Draw a closed polygon outline.
    fn polygon(&mut self, points: &[Point2], color: Rgb, thickness: u32) {
        for i in 0..points.len() {
            self.line(points[i], points[(i + 1) % points.len()], color, thickness);
        }
    }

    /// Draw text centered at `center` at the requested pixel height,
    /// returning the drawn bounding size, or `None` if nothing could be
    /// drawn (degenerate size or far offscreen).
    fn text(&mut self, text: &str, center: Point2, color: Rgb, px_size: f32) -> Option<(u32, u32)>;
}

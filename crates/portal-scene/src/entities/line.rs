//! Static tunnel lines spanning the full depth range.

use portal_core::{CYAN, DepthModel, MAGENTA, Point2, Projector, Surface, Vec3};

/// Segments per line; each fades from its own midpoint depth.
const SEGMENTS: u32 = 40;
/// Segments dimmer than this are skipped outright.
const MIN_SEGMENT_ALPHA: f32 = 0.02;

/// Tunnel line flavor: corners are brighter and thicker than wall grid
/// lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Corner,
    Grid,
}

impl LineKind {
    fn alpha_multiplier(self) -> f32 {
        match self {
            LineKind::Corner => 1.0,
            LineKind::Grid => 0.85,
        }
    }

    fn strokes(self) -> (u32, u32) {
        // (glow, main)
        match self {
            LineKind::Corner => (4, 2),
            LineKind::Grid => (2, 1),
        }
    }
}

/// A fixed 3D segment running the length of the tunnel.
#[derive(Debug, Clone)]
pub struct FrameLine {
    start: Vec3,
    end: Vec3,
    kind: LineKind,
}

impl FrameLine {
    pub fn new(start: Vec3, end: Vec3, kind: LineKind) -> Self {
        Self { start, end, kind }
    }

    /// Render as depth-ordered segments. The endpoints project once; the
    /// segments interpolate in screen space, but each one's alpha comes
    /// from its own 3D midpoint so the line fades into the distance
    /// instead of dimming uniformly.
    pub fn render(
        &self,
        surface: &mut dyn Surface,
        projector: &Projector,
        depth: &DepthModel,
        clock: f32,
    ) {
        let p_start = projector.project(self.start);
        let p_end = projector.project(self.end);

        let factor = ((clock * 0.5).sin() + 1.0) / 2.0;
        let base = CYAN.lerp(MAGENTA, factor);
        let (glow_stroke, main_stroke) = self.kind.strokes();

        for i in 0..SEGMENTS {
            let t1 = i as f32 / SEGMENTS as f32;
            let t2 = (i + 1) as f32 / SEGMENTS as f32;

            let mid_z = self.start.z + (t1 + t2) / 2.0 * (self.end.z - self.start.z);
            let alpha = depth.alpha(mid_z) * self.kind.alpha_multiplier();
            if alpha < MIN_SEGMENT_ALPHA {
                continue;
            }

            let p1 = Point2::new(
                p_start.x + t1 * (p_end.x - p_start.x),
                p_start.y + t1 * (p_end.y - p_start.y),
            );
            let p2 = Point2::new(
                p_start.x + t2 * (p_end.x - p_start.x),
                p_start.y + t2 * (p_end.y - p_start.y),
            );

            surface.line(p1, p2, base.scaled(alpha * 0.4), glow_stroke);
            surface.line(p1, p2, base.scaled(alpha), main_stroke);
        }
    }
}

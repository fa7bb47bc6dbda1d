//! The scene composer: owns the entity collections, lays them out from
//! the frustum bounds and draws them back-to-front each frame.

use portal_core::{DepthModel, FrustumBounds, Projector, Surface, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::entities::{Centerpiece, FrameLine, GlyphStream, GridPlane, LineKind};

/// Relative extent change on x or y that forces a full re-layout.
const RESIZE_THRESHOLD: f32 = 0.2;
/// Cross-section fraction of the bounds that geometry occupies.
const WALL_INSET: f32 = 0.95;
/// Side-wall horizontal grid divisions (per wall).
const WALL_H_DIVISIONS: u32 = 8;
/// Floor/ceiling vertical grid divisions (per wall).
const WALL_V_DIVISIONS: u32 = 6;

/// Entity counts the composer lays out.
#[derive(Debug, Clone, Copy)]
pub struct SceneParams {
    pub planes: usize,
    pub streams: usize,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            planes: 12,
            streams: 48,
        }
    }
}

/// Stream counts per tunnel wall at the fixed 40/40/10/10 ratio.
/// Remainders favor floor and ceiling.
pub(crate) fn wall_counts(total: usize) -> (usize, usize, usize, usize) {
    let side = total / 10;
    let floor = (total - 2 * side).div_ceil(2);
    let ceiling = total - 2 * side - floor;
    (floor, ceiling, side, side)
}

/// Owns all entities plus the bounds, clock and RNG that drive them.
#[derive(Debug)]
pub struct Scene {
    bounds: FrustumBounds,
    /// Bounds at the time of the last full layout, for the resize policy.
    layout_bounds: FrustumBounds,
    depth: DepthModel,
    params: SceneParams,
    planes: Vec<GridPlane>,
    lines: Vec<FrameLine>,
    streams: Vec<GlyphStream>,
    centerpiece: Centerpiece,
    clock: f32,
    rng: StdRng,
}

impl Scene {
    pub fn new(bounds: FrustumBounds, params: SceneParams, seed: u64) -> Self {
        let mut scene = Self {
            bounds,
            layout_bounds: bounds,
            depth: DepthModel::new(bounds.min_z, bounds.max_z),
            params,
            planes: Vec::new(),
            lines: Vec::new(),
            streams: Vec::new(),
            centerpiece: Centerpiece::new(&mut StdRng::seed_from_u64(seed)),
            clock: 0.0,
            rng: StdRng::seed_from_u64(seed),
        };
        scene.layout();
        scene
    }

    pub fn bounds(&self) -> FrustumBounds {
        self.bounds
    }

    /// Discard and regenerate every entity from the current bounds.
    fn layout(&mut self) {
        self.planes = self.layout_planes();
        self.lines = self.layout_lines();
        self.streams = self.layout_streams();
        self.centerpiece = Centerpiece::new(&mut self.rng);
        log::debug!(
            "scene layout: {} planes, {} lines, {} streams in {:?}",
            self.planes.len(),
            self.lines.len(),
            self.streams.len(),
            self.bounds
        );
    }

    /// Planes at evenly spaced depths, sorted far-to-near for the
    /// painter's algorithm.
    fn layout_planes(&mut self) -> Vec<GridPlane> {
        let width = self.bounds.width() * WALL_INSET;
        let height = self.bounds.height() * WALL_INSET;
        let step = self.bounds.depth() / (self.params.planes + 1) as f32;

        let mut planes: Vec<GridPlane> = (0..self.params.planes)
            .map(|i| {
                let z = self.bounds.min_z + step * (i + 1) as f32;
                GridPlane::new(z, width, height, &mut self.rng)
            })
            .collect();
        planes.sort_by(|a, b| b.z().total_cmp(&a.z()));
        planes
    }

    /// Four corner lines plus wall grid lines, all spanning the depth
    /// range.
    fn layout_lines(&self) -> Vec<FrameLine> {
        let half_w = self.bounds.width() * WALL_INSET / 2.0;
        let half_h = self.bounds.height() * WALL_INSET / 2.0;
        let (min_z, max_z) = (self.bounds.min_z, self.bounds.max_z);
        let span = |x: f32, y: f32, kind: LineKind| {
            FrameLine::new(Vec3::new(x, y, min_z), Vec3::new(x, y, max_z), kind)
        };

        let mut lines = Vec::new();
        for (x, y) in [
            (-half_w, -half_h),
            (half_w, -half_h),
            (half_w, half_h),
            (-half_w, half_h),
        ] {
            lines.push(span(x, y, LineKind::Corner));
        }

        for i in 1..WALL_H_DIVISIONS {
            let y = -half_h + (i as f32 / WALL_H_DIVISIONS as f32) * 2.0 * half_h;
            lines.push(span(-half_w, y, LineKind::Grid));
            lines.push(span(half_w, y, LineKind::Grid));
        }
        for i in 1..WALL_V_DIVISIONS {
            let x = -half_w + (i as f32 / WALL_V_DIVISIONS as f32) * 2.0 * half_w;
            lines.push(span(x, -half_h, LineKind::Grid));
            lines.push(span(x, half_h, LineKind::Grid));
        }
        lines
    }

    /// Streams distributed across the four walls, paths running far to
    /// near, sorted by average path depth at creation.
    fn layout_streams(&mut self) -> Vec<GlyphStream> {
        let cx = (self.bounds.min_x + self.bounds.max_x) / 2.0;
        let cy = (self.bounds.min_y + self.bounds.max_y) / 2.0;
        let half_w = self.bounds.width() * WALL_INSET / 2.0;
        let half_h = self.bounds.height() * WALL_INSET / 2.0;
        let (min_z, max_z) = (self.bounds.min_z, self.bounds.max_z);

        let (floor, ceiling, left, right) = wall_counts(self.params.streams);
        let mut streams = Vec::with_capacity(self.params.streams);
        let mut spawn = |x: f32, y: f32, rng: &mut StdRng| {
            GlyphStream::new(Vec3::new(x, y, max_z), Vec3::new(x, y, min_z), rng)
        };

        for _ in 0..floor {
            let x = self.rng.gen_range(cx - half_w..cx + half_w);
            streams.push(spawn(x, cy + half_h, &mut self.rng));
        }
        for _ in 0..ceiling {
            let x = self.rng.gen_range(cx - half_w..cx + half_w);
            streams.push(spawn(x, cy - half_h, &mut self.rng));
        }
        for _ in 0..left {
            let y = self.rng.gen_range(cy - half_h..cy + half_h);
            streams.push(spawn(cx - half_w, y, &mut self.rng));
        }
        for _ in 0..right {
            let y = self.rng.gen_range(cy - half_h..cy + half_h);
            streams.push(spawn(cx + half_w, y, &mut self.rng));
        }

        streams.sort_by(|a, b| b.average_depth().total_cmp(&a.average_depth()));
        streams
    }

    /// Apply new bounds under the 20% re-layout threshold. Returns
    /// whether a full re-layout happened.
    pub fn update_bounds(&mut self, new_bounds: FrustumBounds) -> bool {
        let relayout = self.layout_bounds.relative_change(&new_bounds) > RESIZE_THRESHOLD;
        self.bounds = new_bounds;
        self.depth = DepthModel::new(new_bounds.min_z, new_bounds.max_z);
        if relayout {
            self.layout_bounds = new_bounds;
            self.layout();
        }
        relayout
    }

    /// Advance every entity by one tick and recycle exhausted streams.
    pub fn update(&mut self, dt: f32) {
        self.clock += dt;
        for plane in &mut self.planes {
            plane.update(dt, &mut self.rng);
        }
        for stream in &mut self.streams {
            stream.update(dt, &mut self.rng);
            if stream.finished() {
                stream.reset(&mut self.rng);
            }
        }
        self.centerpiece.update(dt, &mut self.rng);
    }

    /// Painter's algorithm: lines, then planes far-to-near, then streams,
    /// then the centerpiece on top.
    pub fn render(&self, surface: &mut dyn Surface, projector: &Projector) {
        for line in &self.lines {
            line.render(surface, projector, &self.depth, self.clock);
        }
        for plane in &self.planes {
            plane.render(surface, projector, &self.depth);
        }
        for stream in &self.streams {
            stream.render(surface, projector, &self.depth);
        }
        self.centerpiece.render(surface, projector, &self.depth);
    }

    #[cfg(test)]
    pub(crate) fn planes(&self) -> &[GridPlane] {
        &self.planes
    }

    #[cfg(test)]
    pub(crate) fn streams(&self) -> &[GlyphStream] {
        &self.streams
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_core::{Point2, Rgb, ViewerOffset};

    fn test_bounds(width: f32) -> FrustumBounds {
        FrustumBounds::new(-width / 2.0, width / 2.0, -8.0, 8.0, 0.0, 40.0).unwrap()
    }

    fn test_scene() -> Scene {
        Scene::new(test_bounds(20.0), SceneParams::default(), 1234)
    }

    #[test]
    fn test_wall_counts_ratio() {
        let (floor, ceiling, left, right) = wall_counts(40);
        assert_eq!((floor, ceiling, left, right), (16, 16, 4, 4));
        for total in [12, 47, 48, 100] {
            let (f, c, l, r) = wall_counts(total);
            assert_eq!(f + c + l + r, total);
            assert_eq!(l, r);
            assert!(f >= l && c >= l);
        }
    }

    #[test]
    fn test_planes_sorted_far_to_near() {
        let scene = test_scene();
        assert_eq!(scene.planes().len(), 12);
        for pair in scene.planes().windows(2) {
            assert!(pair[0].z() >= pair[1].z());
        }
    }

    #[test]
    fn test_resize_threshold() {
        // 15% wider: entities must survive.
        let mut scene = test_scene();
        assert!(!scene.update_bounds(test_bounds(23.0)));
        assert_eq!(scene.bounds().width(), 23.0);

        // 25% wider: full re-layout.
        let mut scene = test_scene();
        assert!(scene.update_bounds(test_bounds(25.0)));
        assert_eq!(scene.bounds().width(), 25.0);
    }

    #[test]
    fn test_small_resizes_accumulate_toward_relayout() {
        let mut scene = test_scene();
        assert!(!scene.update_bounds(test_bounds(22.0)));
        assert!(!scene.update_bounds(test_bounds(23.5)));
        // Against the bounds of the last layout (20), this crosses 20%.
        assert!(scene.update_bounds(test_bounds(24.5)));
    }

    #[test]
    fn test_streams_recycle_in_place() {
        let mut scene = test_scene();
        let count = scene.streams().len();
        // 30 simulated seconds: every stream has finished at least once.
        for _ in 0..1800 {
            scene.update(1.0 / 60.0);
        }
        assert_eq!(scene.streams().len(), count);
        for stream in scene.streams() {
            assert!(!stream.finished());
        }
    }

    /// Records polygon draw calls so plane order can be checked.
    struct PolygonLog {
        widths: Vec<f32>,
    }

    impl Surface for PolygonLog {
        fn width(&self) -> u32 {
            200
        }
        fn height(&self) -> u32 {
            100
        }
        fn clear(&mut self) {}
        fn line(&mut self, _: Point2, _: Point2, _: Rgb, _: u32) {}
        fn polygon(&mut self, points: &[Point2], _: Rgb, _: u32) {
            let min = points.iter().map(|p| p.x).fold(f32::INFINITY, f32::min);
            let max = points.iter().map(|p| p.x).fold(f32::NEG_INFINITY, f32::max);
            self.widths.push(max - min);
        }
        fn text(&mut self, _: &str, _: Point2, _: Rgb, _: f32) -> Option<(u32, u32)> {
            None
        }
    }

    #[test]
    fn test_planes_drawn_farthest_first() {
        let bounds = test_bounds(20.0);
        let mut rng = StdRng::seed_from_u64(99);
        let depth = DepthModel::new(0.0, 40.0);
        let projector = Projector::new(ViewerOffset::neutral(), 1.0, 200, 100, 16.0);

        let mut planes: Vec<GridPlane> = [5.0, 20.0, 35.0]
            .iter()
            .map(|&z| GridPlane::new(z, bounds.width(), bounds.height(), &mut rng))
            .collect();
        planes.sort_by(|a, b| b.z().total_cmp(&a.z()));
        assert_eq!(
            planes.iter().map(GridPlane::z).collect::<Vec<_>>(),
            vec![35.0, 20.0, 5.0]
        );

        // Rendering in composer order, projected wireframe widths must
        // grow: the farthest (smallest) plane goes down first.
        let mut log = PolygonLog { widths: Vec::new() };
        for plane in &planes {
            plane.render(&mut log, &projector, &depth);
        }
        assert_eq!(log.widths.len(), 9); // two glow passes + sharp, per plane
        assert!(log.widths[0] < log.widths[3]);
        assert!(log.widths[3] < log.widths[6]);
    }
}

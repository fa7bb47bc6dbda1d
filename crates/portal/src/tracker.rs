//! Pointer-based viewer tracking: the tracking collaborator.
//!
//! The mouse pointer stands in for a head tracker. Positions normalize
//! to roughly [-1, 1] per axis; a sample goes stale after two seconds
//! without movement, and the driver substitutes the neutral offset
//! whenever no usable sample exists.

use std::time::{Duration, Instant};

use portal_core::ViewerOffset;

/// Samples older than this no longer count as tracking.
const STALE_AFTER: Duration = Duration::from_secs(2);

/// Normalize a cell position into a [-1, 1] viewer offset.
pub fn normalize(column: u16, row: u16, cols: u16, rows: u16) -> ViewerOffset {
    let norm = |v: u16, extent: u16| {
        if extent <= 1 {
            0.0
        } else {
            (v.min(extent - 1) as f32 / (extent - 1) as f32) * 2.0 - 1.0
        }
    };
    ViewerOffset::new(norm(column, cols), norm(row, rows))
}

/// Last-known-position tracker fed by crossterm mouse events.
#[derive(Debug, Default)]
pub struct PointerTracker {
    last: Option<(ViewerOffset, Instant)>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pointer position in cell coordinates.
    pub fn observe(&mut self, column: u16, row: u16, cols: u16, rows: u16) {
        self.last = Some((normalize(column, row, cols, rows), Instant::now()));
    }

    /// The current offset, or `None` before the first event or once the
    /// last one has gone stale.
    pub fn sample(&self) -> Option<ViewerOffset> {
        match self.last {
            Some((offset, at)) if at.elapsed() < STALE_AFTER => Some(offset),
            _ => None,
        }
    }
}

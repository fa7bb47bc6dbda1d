//! Animated entity set and scene composer for the portal tunnel effect.
//!
//! The scene owns four entity families: depth-layered wireframe planes
//! with alert labels, static tunnel lines, falling glyph streams and the
//! floating centerpiece. Entities are plain structs updated in place each
//! tick; all drawing funnels through the shared `Projector` and
//! `DepthModel` from `portal-core` so the illusion stays coherent.

mod chars;
mod entities;
mod scene;

pub use chars::{ALERT_MESSAGES, STREAM_CHARS};
pub use entities::{Centerpiece, FrameLine, GlyphStream, GridPlane, LineKind};
pub use scene::{Scene, SceneParams};

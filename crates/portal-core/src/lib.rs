//! Core types for the portal tunnel effect.
//!
//! This crate holds the pure, side-effect-free pieces every other crate
//! builds on: 3D points, frustum bounds, the off-axis projector, the
//! depth fade/scale model, RGB color math and the `Surface` draw trait
//! that decouples the scene from the terminal canvas.

mod bounds;
mod color;
mod depth;
mod math;
mod projector;
mod surface;

pub use bounds::{BoundsError, FrustumBounds};
pub use color::{CYAN, MAGENTA, MATRIX_GREEN, MATRIX_HEAD, Rgb, YELLOW};
pub use depth::{DepthModel, FADE_K, SCALE_K_CENTERPIECE, SCALE_K_TEXT};
pub use math::{Point2, Vec3};
pub use projector::{EYE_DISTANCE, PARALLAX_X, PARALLAX_Y, Projector, ViewerOffset};
pub use surface::Surface;

//! The four animated entity families of the tunnel effect.

pub mod centerpiece;
pub mod line;
pub mod plane;
pub mod stream;

pub use centerpiece::Centerpiece;
pub use line::{FrameLine, LineKind};
pub use plane::GridPlane;
pub use stream::GlyphStream;

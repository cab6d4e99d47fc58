//! View cameras for the maze walker: per-view orientation/distance/zoom
//! state, projection derivation, viewport layout, and pointer-driven
//! manipulation.

mod camera;
mod pointer;
mod router;

pub use camera::{Projection, ProjectionMode, ViewCamera, ViewKind};
pub use pointer::{DragMode, PointerController};
pub use router::ViewportRouter;

//! Small value types shared by the maze, camera, and session crates:
//! two-angle orientations and viewport rectangles.

mod orientation;
mod viewport;

pub use orientation::Orientation;
pub use viewport::{Viewport, ViewportContext};

//! Maze map, cell/world conversion, wall-distance queries, collision
//! classification, and background loading of the resources they come from.

mod collision;
mod description;
mod error;
mod grid;
pub mod loader;

pub use collision::{CollisionDetector, CollisionProbe};
pub use description::{MazeDescription, MazeSize};
pub use error::MazeError;
pub use grid::{Cell, CellConvention, MazeGrid, Side, WallOrientation, WallSegment};
pub use loader::{LoadError, LoadEvent, LoadStatus, ResourceLoad};

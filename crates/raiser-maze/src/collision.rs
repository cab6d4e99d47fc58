//! Blocked/free classification of a prospective player position.

use glam::Vec3;
use tracing::debug;

use crate::grid::MazeGrid;

/// Anything that can decide whether a body of `radius` fits at `position`.
pub trait CollisionProbe {
    fn is_blocked(&self, position: Vec3, radius: f32) -> bool;
}

/// Checks a destination point against the walls of the cell containing it.
///
/// Only the destination cell is inspected; callers pass the point the body
/// would move to, not intermediate points along the move.
#[derive(Debug, Clone, Copy)]
pub struct CollisionDetector<'a> {
    grid: &'a MazeGrid,
}

impl<'a> CollisionDetector<'a> {
    #[must_use]
    pub fn new(grid: &'a MazeGrid) -> Self {
        Self { grid }
    }
}

impl CollisionProbe for CollisionDetector<'_> {
    /// Blocked iff the nearest of the four walls is strictly closer than
    /// `radius`. A position outside the maze is always blocked.
    fn is_blocked(&self, position: Vec3, radius: f32) -> bool {
        match self.grid.nearest_wall_distance(position) {
            Ok(distance) => distance < radius,
            Err(err) => {
                debug!("Collision probe at {position} treated as blocked: {err}");
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::description::{MazeDescription, MazeSize};
    use crate::grid::Cell;

    fn boxed_2x2() -> MazeGrid {
        let description = MazeDescription {
            map: vec![vec![3, 2, 1], vec![1, 0, 1], vec![2, 2, 0]],
            size: MazeSize {
                width: 2,
                height: 2,
            },
            initial_position: [0, 0],
            initial_direction: 0.0,
            exit_location: [1, 2],
            ground_texture_url: String::new(),
            wall_texture_url: String::new(),
        };
        MazeGrid::new(&description, Vec3::ONE).unwrap()
    }

    #[test]
    fn test_centre_is_free() {
        let grid = boxed_2x2();
        let detector = CollisionDetector::new(&grid);
        let centre = grid.cell_to_world(Cell::new(0, 0));
        assert!(!detector.is_blocked(centre, 0.1));
    }

    #[test]
    fn test_near_wall_is_blocked() {
        let grid = boxed_2x2();
        let detector = CollisionDetector::new(&grid);
        // 0.05 from the north wall of (0, 0).
        let p = grid.cell_to_world(Cell::new(0, 0)) + Vec3::new(0.0, 0.0, -0.45);
        assert!(detector.is_blocked(p, 0.1));
    }

    #[test]
    fn test_south_wall_is_checked() {
        let grid = boxed_2x2();
        let detector = CollisionDetector::new(&grid);
        let p = grid.cell_to_world(Cell::new(1, 1)) + Vec3::new(0.0, 0.0, 0.45);
        assert!(detector.is_blocked(p, 0.1));
    }

    #[test]
    fn test_exact_radius_is_not_blocked() {
        let grid = boxed_2x2();
        let detector = CollisionDetector::new(&grid);
        // Distance to the west wall of (0, 0) is exactly 0.25.
        let p = Vec3::new(-0.75, 0.0, -0.5);
        assert_eq!(grid.nearest_wall_distance(p).unwrap(), 0.25);
        assert!(!detector.is_blocked(p, 0.25));
        assert!(detector.is_blocked(p, 0.2500001));
    }

    #[test]
    fn test_open_side_never_blocks() {
        let grid = boxed_2x2();
        let detector = CollisionDetector::new(&grid);
        // Close to the open boundary between (0, 0) and (0, 1).
        let p = Vec3::new(-0.02, 0.0, -0.5);
        assert!(!detector.is_blocked(p, 0.1));
    }

    #[test]
    fn test_outside_maze_is_blocked() {
        let grid = boxed_2x2();
        let detector = CollisionDetector::new(&grid);
        assert!(detector.is_blocked(Vec3::new(-5.0, 0.0, -5.0), 0.1));
    }
}

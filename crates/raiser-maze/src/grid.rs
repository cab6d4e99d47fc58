//! The maze grid: wall codes, cell/world conversion and wall-distance queries.
//!
//! Cells are addressed `(row, col)`. Columns run along world `x` and span the
//! maze width; rows run along world `z` and span the height. The grid is
//! centred on the world origin, so cell `(0, 0)` is the north-west corner.
//!
//! Walls are stored only on the north and west edge of each cell. A cell's
//! east wall is the west wall of its eastern neighbour and its south wall is
//! the north wall of its southern neighbour, which is why the code table has
//! one extra row and column.

use glam::Vec3;

use crate::description::MazeDescription;
use crate::error::MazeError;

const WEST_BIT: u8 = 0b01;
const NORTH_BIT: u8 = 0b10;

/// A grid cell address. Either index may be negative or past the table when
/// it names a location outside the maze, such as an exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub row: i64,
    pub col: i64,
}

impl Cell {
    #[must_use]
    pub const fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }
}

impl From<[i32; 2]> for Cell {
    fn from([row, col]: [i32; 2]) -> Self {
        Self::new(i64::from(row), i64::from(col))
    }
}

/// The side of a cell a wall query looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    West,
    East,
    North,
    South,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::West, Side::East, Side::North, Side::South];
}

/// How cell indices relate to world axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellConvention {
    /// Column ↔ x ↔ width and row ↔ z ↔ height in both directions.
    #[default]
    Consistent,
    /// `world_to_cell` offsets rows by half the width and columns by half the
    /// height while `cell_to_world` does the opposite. Only square mazes
    /// round-trip under this convention.
    Legacy,
}

/// Orientation of a wall placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallOrientation {
    /// Along the north edge of a cell (parallel to `x`).
    North,
    /// Along the west edge of a cell, rotated a quarter turn about `y`.
    West,
}

/// One wall for an external mesh builder, in unscaled maze-local units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallSegment {
    pub cell: Cell,
    pub orientation: WallOrientation,
    /// Centre of the wall. Multiply by the cell scale for world space.
    pub position: Vec3,
}

/// Static maze data plus the scale that maps cells to world units.
#[derive(Debug, Clone)]
pub struct MazeGrid {
    width: u32,
    height: u32,
    codes: Vec<Vec<u8>>,
    scale: Vec3,
    convention: CellConvention,
    initial_position: Vec3,
    initial_direction: f32,
    exit_location: Vec3,
}

impl MazeGrid {
    /// Build a grid from a validated description.
    pub fn new(description: &MazeDescription, scale: Vec3) -> Result<Self, MazeError> {
        Self::with_convention(description, scale, CellConvention::default())
    }

    pub fn with_convention(
        description: &MazeDescription,
        scale: Vec3,
        convention: CellConvention,
    ) -> Result<Self, MazeError> {
        description.validate()?;
        if !(scale.x > 0.0 && scale.z > 0.0) || !scale.is_finite() {
            return Err(MazeError::InvalidDescription(format!(
                "cell scale {scale} must be positive"
            )));
        }
        let mut grid = Self {
            width: description.size.width,
            height: description.size.height,
            codes: description.map.clone(),
            scale,
            convention,
            initial_position: Vec3::ZERO,
            initial_direction: description.initial_direction,
            exit_location: Vec3::ZERO,
        };
        grid.initial_position = grid.cell_to_world(Cell::from(description.initial_position));
        grid.exit_location = grid.cell_to_world(Cell::from(description.exit_location));
        Ok(grid)
    }

    // ── Queries ─────────────────────────────────────────────────────

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    #[must_use]
    pub fn convention(&self) -> CellConvention {
        self.convention
    }

    /// World position of the player's starting cell centre.
    #[must_use]
    pub fn initial_position(&self) -> Vec3 {
        self.initial_position
    }

    /// Player's starting heading in degrees.
    #[must_use]
    pub fn initial_direction(&self) -> f32 {
        self.initial_direction
    }

    /// World position of the exit cell centre.
    #[must_use]
    pub fn exit_location(&self) -> Vec3 {
        self.exit_location
    }

    /// Wall code stored for `cell`, or `None` outside the table.
    #[must_use]
    pub fn code(&self, cell: Cell) -> Option<u8> {
        let row = usize::try_from(cell.row).ok()?;
        let col = usize::try_from(cell.col).ok()?;
        self.codes.get(row)?.get(col).copied()
    }

    /// Whether `cell` lies inside the `(height + 1) x (width + 1)` code table.
    #[must_use]
    pub fn contains_cell(&self, cell: Cell) -> bool {
        (0..=i64::from(self.height)).contains(&cell.row)
            && (0..=i64::from(self.width)).contains(&cell.col)
    }

    /// Whether `side` of `cell` has a wall. Locations outside the table have none.
    #[must_use]
    pub fn has_wall(&self, cell: Cell, side: Side) -> bool {
        let (owner, bit) = match side {
            Side::West => (cell, WEST_BIT),
            Side::North => (cell, NORTH_BIT),
            Side::East => (Cell::new(cell.row, cell.col + 1), WEST_BIT),
            Side::South => (Cell::new(cell.row + 1, cell.col), NORTH_BIT),
        };
        self.code(owner).is_some_and(|code| code & bit != 0)
    }

    // ── Coordinate conversion ───────────────────────────────────────

    /// Centre of `cell` in world space (`y = 0`).
    #[must_use]
    pub fn cell_to_world(&self, cell: Cell) -> Vec3 {
        let half_w = self.width as f32 / 2.0;
        let half_h = self.height as f32 / 2.0;
        Vec3::new(
            (cell.col as f32 - half_w + 0.5) * self.scale.x,
            0.0,
            (cell.row as f32 - half_h + 0.5) * self.scale.z,
        )
    }

    /// The cell owning `position`.
    ///
    /// Fails with [`MazeError::OutOfBounds`] when that cell is outside the code
    /// table (or the position is not finite).
    pub fn world_to_cell(&self, position: Vec3) -> Result<Cell, MazeError> {
        let (row_offset, col_offset) = match self.convention {
            CellConvention::Consistent => (self.height as f32 / 2.0, self.width as f32 / 2.0),
            CellConvention::Legacy => (self.width as f32 / 2.0, self.height as f32 / 2.0),
        };
        let row = (position.z / self.scale.z + row_offset).floor();
        let col = (position.x / self.scale.x + col_offset).floor();
        if !row.is_finite() || !col.is_finite() {
            return Err(MazeError::OutOfBounds {
                row: i64::MIN,
                col: i64::MIN,
            });
        }
        let cell = Cell::new(row as i64, col as i64);
        if self.contains_cell(cell) {
            Ok(cell)
        } else {
            Err(MazeError::OutOfBounds {
                row: cell.row,
                col: cell.col,
            })
        }
    }

    /// Distance from `position` to the wall on `side` of its cell, or
    /// `f32::INFINITY` when that side has no wall.
    ///
    /// The distance is measured along the axis normal to the wall plane and is
    /// non-negative for any point inside its owning cell.
    pub fn distance_to_wall(&self, position: Vec3, side: Side) -> Result<f32, MazeError> {
        let cell = self.world_to_cell(position)?;
        if !self.has_wall(cell, side) {
            return Ok(f32::INFINITY);
        }
        let centre = self.cell_to_world(cell);
        let half_x = self.scale.x / 2.0;
        let half_z = self.scale.z / 2.0;
        Ok(match side {
            Side::West => position.x - (centre.x - half_x),
            Side::East => (centre.x + half_x) - position.x,
            Side::North => position.z - (centre.z - half_z),
            Side::South => (centre.z + half_z) - position.z,
        })
    }

    /// Smallest of the four wall distances.
    pub fn nearest_wall_distance(&self, position: Vec3) -> Result<f32, MazeError> {
        let mut nearest = f32::INFINITY;
        for side in Side::ALL {
            nearest = nearest.min(self.distance_to_wall(position, side)?);
        }
        Ok(nearest)
    }

    /// Whether `position` is within half a cell of the exit on both horizontal axes.
    #[must_use]
    pub fn found_exit(&self, position: Vec3) -> bool {
        (self.exit_location.x - position.x).abs() < 0.5 * self.scale.x
            && (self.exit_location.z - position.z).abs() < 0.5 * self.scale.z
    }

    /// Every north and west wall, for building the maze geometry.
    #[must_use]
    pub fn wall_segments(&self) -> Vec<WallSegment> {
        let half_w = self.width as f32 / 2.0;
        let half_h = self.height as f32 / 2.0;
        let mut segments = Vec::new();
        for (row, codes) in self.codes.iter().enumerate() {
            for (col, &code) in codes.iter().enumerate() {
                let cell = Cell::new(row as i64, col as i64);
                let (r, c) = (row as f32, col as f32);
                if code & NORTH_BIT != 0 {
                    segments.push(WallSegment {
                        cell,
                        orientation: WallOrientation::North,
                        position: Vec3::new(c - half_w + 0.5, 0.5, r - half_h),
                    });
                }
                if code & WEST_BIT != 0 {
                    segments.push(WallSegment {
                        cell,
                        orientation: WallOrientation::West,
                        position: Vec3::new(c - half_w, 0.5, r - half_h + 0.5),
                    });
                }
            }
        }
        segments
    }
}

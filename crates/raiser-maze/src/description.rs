//! Maze description resource (JSON).

use serde::{Deserialize, Serialize};

use crate::error::MazeError;

/// Maze dimensions in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeSize {
    pub width: u32,
    pub height: u32,
}

/// The maze description as stored on disk.
///
/// `map` has `height + 1` rows of `width + 1` codes: bit 0 marks a west wall
/// and bit 1 a north wall. The extra row and column hold the southmost and
/// eastmost walls. Positions are `[row, column]` and may lie outside the map
/// (an exit is usually just past the border).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MazeDescription {
    pub map: Vec<Vec<u8>>,
    pub size: MazeSize,
    pub initial_position: [i32; 2],
    pub initial_direction: f32,
    pub exit_location: [i32; 2],
    #[serde(default)]
    pub ground_texture_url: String,
    #[serde(default)]
    pub wall_texture_url: String,
}

impl MazeDescription {
    /// Parse and validate a description from JSON bytes.
    pub fn from_json(bytes: &[u8]) -> Result<Self, MazeError> {
        let description: Self = serde_json::from_slice(bytes).map_err(MazeError::Parse)?;
        description.validate()?;
        Ok(description)
    }

    /// Check the code table against the declared size.
    pub fn validate(&self) -> Result<(), MazeError> {
        let rows = self.size.height as usize + 1;
        let cols = self.size.width as usize + 1;
        if self.size.width == 0 || self.size.height == 0 {
            return Err(MazeError::InvalidDescription(format!(
                "maze size {}x{} has no cells",
                self.size.width, self.size.height
            )));
        }
        if self.map.len() != rows {
            return Err(MazeError::InvalidDescription(format!(
                "map has {} rows, expected {rows}",
                self.map.len()
            )));
        }
        for (row, codes) in self.map.iter().enumerate() {
            if codes.len() != cols {
                return Err(MazeError::InvalidDescription(format!(
                    "map row {row} has {} columns, expected {cols}",
                    codes.len()
                )));
            }
            if let Some(col) = codes.iter().position(|&code| code > 3) {
                return Err(MazeError::InvalidDescription(format!(
                    "map code {} at ({row}, {col}) is not in 0..=3",
                    codes[col]
                )));
            }
        }
        if !self.initial_direction.is_finite() {
            return Err(MazeError::InvalidDescription(
                "initial direction is not finite".to_string(),
            ));
        }
        Ok(())
    }
}

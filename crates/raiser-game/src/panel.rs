//! Control-panel model.
//!
//! Numeric fields arrive as text, the way a form delivers them. A value that
//! does not parse, is not finite, or lies outside the active camera's bounds
//! is rejected and the camera keeps its previous value.

use raiser_camera::{ProjectionMode, ViewCamera, ViewKind};
use serde::{Deserialize, Serialize};

use crate::error::ControlError;

/// A change made through the control panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ControlInput {
    /// Active view by name (`"fixed"`, `"first-person"`, `"third-person"`, `"top"`).
    View(String),
    /// `"perspective"` or `"orthographic"`.
    Projection(String),
    Horizontal(String),
    Vertical(String),
    Distance(String),
    Zoom(String),
    MultipleViews(bool),
    UserInterface(bool),
    Help(bool),
    Statistics(bool),
    /// Reset the active camera.
    Reset,
    /// Reset all four primary cameras.
    ResetAll,
}

/// Visibility of the overlay panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Overlays {
    pub user_interface: bool,
    pub help: bool,
    pub statistics: bool,
}

impl Default for Overlays {
    fn default() -> Self {
        Self {
            user_interface: true,
            help: false,
            statistics: false,
        }
    }
}

/// Inclusive `[min, max]` shown next to an input, already formatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRange {
    pub min: String,
    pub max: String,
}

/// What the panel shows for the active camera.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelState {
    pub view: ViewKind,
    pub projection: ProjectionMode,
    pub horizontal: String,
    pub vertical: String,
    pub distance: String,
    pub zoom: String,
    pub horizontal_range: FieldRange,
    pub vertical_range: FieldRange,
    pub distance_range: FieldRange,
    pub zoom_range: FieldRange,
    pub multiple_views: bool,
    pub overlays: Overlays,
}

impl PanelState {
    #[must_use]
    pub fn new(camera: &ViewCamera, multiple_views: bool, overlays: Overlays) -> Self {
        let config = camera.config();
        let orientation = camera.orientation();
        Self {
            view: camera.kind(),
            projection: camera.projection_mode(),
            horizontal: format!("{:.0}", orientation.h),
            vertical: format!("{:.0}", orientation.v),
            distance: format!("{:.1}", camera.distance()),
            zoom: format!("{:.1}", camera.zoom()),
            horizontal_range: range(config.orientation_min.h, config.orientation_max.h, 0),
            vertical_range: range(config.orientation_min.v, config.orientation_max.v, 0),
            distance_range: range(config.distance_min, config.distance_max, 1),
            zoom_range: range(config.zoom_min, config.zoom_max, 1),
            multiple_views,
            overlays,
        }
    }
}

fn range(min: f32, max: f32, decimals: usize) -> FieldRange {
    FieldRange {
        min: format!("{min:.decimals$}"),
        max: format!("{max:.decimals$}"),
    }
}

/// Parse a numeric field and check it against `[min, max]`.
pub(crate) fn parse_field(
    control: &'static str,
    value: &str,
    min: f32,
    max: f32,
) -> Result<f32, ControlError> {
    match value.trim().parse::<f32>() {
        Ok(number) if number.is_finite() && (min..=max).contains(&number) => Ok(number),
        _ => Err(ControlError::invalid(control, value)),
    }
}

/// Parse a view name, accepting only the four primary views.
pub(crate) fn parse_view(value: &str) -> Result<ViewKind, ControlError> {
    ViewKind::from_name(value.trim())
        .filter(|kind| kind.is_primary())
        .ok_or_else(|| ControlError::invalid("view", value))
}

pub(crate) fn parse_projection(value: &str) -> Result<ProjectionMode, ControlError> {
    ProjectionMode::from_name(value.trim()).ok_or_else(|| ControlError::invalid("projection", value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use raiser_config::CameraConfig;
    use raiser_math::ViewportContext;

    #[test]
    fn test_panel_formats_active_camera() {
        let camera = ViewCamera::new(ViewKind::Fixed, CameraConfig::default(), ViewportContext::default());
        let panel = PanelState::new(&camera, false, Overlays::default());
        assert_eq!(panel.view, ViewKind::Fixed);
        assert_eq!(panel.projection, ProjectionMode::Perspective);
        assert_eq!(panel.horizontal, "135");
        assert_eq!(panel.vertical, "-45");
        assert_eq!(panel.distance, "8.0");
        assert_eq!(panel.zoom, "1.0");
        assert_eq!(panel.horizontal_range.min, "-180");
        assert_eq!(panel.distance_range.max, "16.0");
        assert_eq!(panel.zoom_range.min, "0.5");
    }

    #[test]
    fn test_parse_field_accepts_in_range() {
        assert_eq!(parse_field("zoom", " 1.5 ", 0.5, 2.0).unwrap(), 1.5);
        assert_eq!(parse_field("zoom", "2", 0.5, 2.0).unwrap(), 2.0);
    }

    #[test]
    fn test_parse_field_rejects_bad_input() {
        for value in ["", "abc", "NaN", "inf", "2.5", "0.1"] {
            assert!(
                parse_field("zoom", value, 0.5, 2.0).is_err(),
                "{value:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_view_rejects_mini_map() {
        assert_eq!(parse_view("top").unwrap(), ViewKind::Top);
        assert!(parse_view("mini-map").is_err());
        assert!(parse_view("side").is_err());
    }

    #[test]
    fn test_parse_projection() {
        assert_eq!(parse_projection("orthographic").unwrap(), ProjectionMode::Orthographic);
        assert!(parse_projection("fisheye").is_err());
    }
}

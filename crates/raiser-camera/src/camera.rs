//! One configurable view camera.
//!
//! A [`ViewCamera`] orbits its target at `distance` along a ray given by its
//! orientation (degrees, `h` around the vertical axis offset by the player's
//! heading, `v` elevation). The first-person camera is the exception: its eye
//! sits on the target and it looks along the ray instead.
//!
//! Orientation, distance and zoom are clamped to their bounds by every
//! mutator; out-of-range input is never an error.

use glam::{Mat4, Vec3};
use raiser_config::CameraConfig;
use raiser_math::{Orientation, Viewport, ViewportContext};
use serde::{Deserialize, Serialize};

/// The five fixed view kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewKind {
    Fixed,
    FirstPerson,
    ThirdPerson,
    Top,
    MiniMap,
}

impl ViewKind {
    /// Views that can be active and share the main layout, in panel order.
    pub const PRIMARY: [ViewKind; 4] = [
        ViewKind::Fixed,
        ViewKind::FirstPerson,
        ViewKind::ThirdPerson,
        ViewKind::Top,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ViewKind::Fixed => "fixed",
            ViewKind::FirstPerson => "first-person",
            ViewKind::ThirdPerson => "third-person",
            ViewKind::Top => "top",
            ViewKind::MiniMap => "mini-map",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        [
            ViewKind::Fixed,
            ViewKind::FirstPerson,
            ViewKind::ThirdPerson,
            ViewKind::Top,
            ViewKind::MiniMap,
        ]
        .into_iter()
        .find(|kind| kind.as_str() == name)
    }

    #[must_use]
    pub fn is_primary(self) -> bool {
        self != ViewKind::MiniMap
    }

    /// Whether this view's horizontal orientation is relative to the player heading.
    #[must_use]
    pub fn follows_player(self) -> bool {
        matches!(
            self,
            ViewKind::FirstPerson | ViewKind::ThirdPerson | ViewKind::Top
        )
    }
}

/// Which projection a camera renders with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ProjectionMode {
    #[default]
    Perspective,
    Orthographic,
}

impl ProjectionMode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectionMode::Perspective => "perspective",
            ProjectionMode::Orthographic => "orthographic",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "perspective" => Some(ProjectionMode::Perspective),
            "orthographic" => Some(ProjectionMode::Orthographic),
            _ => None,
        }
    }
}

/// Effective projection parameters, zoom already applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    Perspective {
        /// Vertical field of view in radians.
        fov_y: f32,
        /// Width / height.
        aspect_ratio: f32,
    },
    Orthographic {
        /// Half-width of the view volume in world units.
        half_width: f32,
        /// Half-height of the view volume in world units.
        half_height: f32,
    },
}

/// Zoom-independent projection parameters derived from the viewport aspect.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Frustum {
    fov_degrees: f32,
    half_width: f32,
    half_height: f32,
}

#[derive(Debug, Clone)]
pub struct ViewCamera {
    kind: ViewKind,
    config: CameraConfig,
    ctx: ViewportContext,
    viewport: Viewport,
    aspect_ratio: f32,
    initial_half_size: f32,
    frustum: Frustum,
    projection_mode: ProjectionMode,
    target: Vec3,
    player_direction: f32,
    orientation: Orientation,
    distance: f32,
    zoom: f32,
    position: Vec3,
    up: Vec3,
    look_at: Vec3,
}

impl ViewCamera {
    /// Build a camera from its resolved configuration and reset it to the
    /// configured initial state.
    #[must_use]
    pub fn new(kind: ViewKind, config: CameraConfig, ctx: ViewportContext) -> Self {
        let initial_half_size = (config.initial_fov.to_radians() / 2.0).tan() * config.initial_distance;
        let mut camera = Self {
            kind,
            viewport: config.multiple_views_viewport,
            target: config.target,
            ctx,
            aspect_ratio: 1.0,
            initial_half_size,
            frustum: Frustum {
                fov_degrees: config.initial_fov,
                half_width: initial_half_size,
                half_height: initial_half_size,
            },
            projection_mode: ProjectionMode::Perspective,
            player_direction: 0.0,
            orientation: config.initial_orientation,
            distance: config.initial_distance,
            zoom: config.initial_zoom,
            position: Vec3::ZERO,
            up: Vec3::Y,
            look_at: Vec3::ZERO,
            config,
        };
        camera.aspect_ratio = camera.viewport_rect(&ctx).aspect_ratio();
        camera.initialize();
        camera
    }

    /// Reset orientation, distance, zoom and projection mode to the configured
    /// initial values.
    pub fn initialize(&mut self) {
        self.orientation = self
            .config
            .initial_orientation
            .clamp(self.config.orientation_min, self.config.orientation_max);
        self.distance = clamp(
            self.config.initial_distance,
            self.config.distance_min,
            self.config.distance_max,
        );
        self.zoom = clamp(self.config.initial_zoom, self.config.zoom_min, self.config.zoom_max);
        self.update_viewing_parameters();
        self.update_projection_parameters();
        self.projection_mode = match self.kind {
            ViewKind::MiniMap => ProjectionMode::Orthographic,
            _ => ProjectionMode::Perspective,
        };
    }

    // ── Queries ─────────────────────────────────────────────────────

    #[must_use]
    pub fn kind(&self) -> ViewKind {
        self.kind
    }

    #[must_use]
    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[must_use]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    #[must_use]
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    #[must_use]
    pub fn target(&self) -> Vec3 {
        self.target
    }

    #[must_use]
    pub fn player_direction(&self) -> f32 {
        self.player_direction
    }

    #[must_use]
    pub fn projection_mode(&self) -> ProjectionMode {
        self.projection_mode
    }

    /// Current fractional viewport.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    /// Eye position in world space.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// The point the camera looks at.
    #[must_use]
    pub fn look_at(&self) -> Vec3 {
        self.look_at
    }

    // ── Mutators ────────────────────────────────────────────────────

    pub fn set_orientation(&mut self, orientation: Orientation) {
        if !orientation.h.is_finite() || !orientation.v.is_finite() {
            return;
        }
        self.orientation = orientation.clamp(self.config.orientation_min, self.config.orientation_max);
        self.update_viewing_parameters();
    }

    pub fn update_orientation(&mut self, increment: Orientation) {
        self.set_orientation(self.orientation + increment);
    }

    pub fn set_distance(&mut self, distance: f32) {
        if !distance.is_finite() {
            return;
        }
        self.distance = clamp(distance, self.config.distance_min, self.config.distance_max);
        self.update_viewing_parameters();
    }

    pub fn update_distance(&mut self, increment: f32) {
        self.set_distance(self.distance + increment);
    }

    pub fn set_zoom(&mut self, zoom: f32) {
        if !zoom.is_finite() {
            return;
        }
        self.zoom = clamp(zoom, self.config.zoom_min, self.config.zoom_max);
    }

    pub fn update_zoom(&mut self, increment: f32) {
        self.set_zoom(self.zoom + increment);
    }

    pub fn set_target(&mut self, target: Vec3) {
        self.target = target;
        self.update_viewing_parameters();
    }

    pub fn update_target(&mut self, increment: Vec3) {
        self.set_target(self.target + increment);
    }

    /// Heading (degrees) added to the horizontal orientation of player-relative views.
    pub fn set_player_direction(&mut self, direction: f32) {
        self.player_direction = direction;
        self.update_viewing_parameters();
    }

    pub fn set_active_projection(&mut self, mode: ProjectionMode) {
        self.projection_mode = mode;
    }

    /// Switch between the configured multiple-views viewport and the full window.
    pub fn set_viewport(&mut self, multiple_views: bool) {
        self.viewport = if multiple_views {
            self.config.multiple_views_viewport
        } else {
            Viewport::FULL
        };
        self.aspect_ratio = self.viewport_rect(&self.ctx).aspect_ratio();
        self.update_projection_parameters();
    }

    /// Move the viewport anchor, keeping its size. Used to drag the mini-map.
    pub fn set_viewport_origin(&mut self, x: f32, y: f32) {
        self.viewport.x = x;
        self.viewport.y = y;
    }

    /// Deliver a window resize.
    pub fn update_window_size(&mut self, ctx: ViewportContext) {
        self.ctx = ctx;
        self.aspect_ratio = self.viewport_rect(&ctx).aspect_ratio();
        self.update_projection_parameters();
    }

    // ── Derived output ──────────────────────────────────────────────

    /// The viewport in window pixels (origin bottom-left).
    ///
    /// Ordinary views position their rectangle inside the space left over by
    /// their own size, so `x = 1` puts the right edge at the window's right
    /// edge. The mini-map is sized by the window's shorter side so it stays
    /// square, then positioned the same way.
    #[must_use]
    pub fn viewport_rect(&self, ctx: &ViewportContext) -> Viewport {
        let vp = self.viewport;
        let (window_w, window_h) = (ctx.window_width, ctx.window_height);
        if self.kind.is_primary() {
            Viewport::new(
                vp.x * (1.0 - vp.width) * window_w,
                vp.y * (1.0 - vp.height) * window_h,
                vp.width * window_w,
                vp.height * window_h,
            )
        } else {
            let min_size = ctx.min_size();
            let width = vp.width * min_size;
            let height = vp.height * min_size;
            Viewport::new(
                vp.x * (window_w - width),
                vp.y * (window_h - height),
                width,
                height,
            )
        }
    }

    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.look_at, self.up)
    }

    /// Projection for the active mode, with zoom applied.
    ///
    /// Perspective zoom narrows the field of view; orthographic zoom shrinks
    /// the view volume.
    #[must_use]
    pub fn projection(&self) -> Projection {
        match self.projection_mode {
            ProjectionMode::Perspective => {
                let half_tan = (self.frustum.fov_degrees.to_radians() / 2.0).tan() / self.zoom;
                Projection::Perspective {
                    fov_y: 2.0 * half_tan.atan(),
                    aspect_ratio: self.aspect_ratio,
                }
            }
            ProjectionMode::Orthographic => Projection::Orthographic {
                half_width: self.frustum.half_width / self.zoom,
                half_height: self.frustum.half_height / self.zoom,
            },
        }
    }

    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        match self.projection() {
            Projection::Perspective {
                fov_y,
                aspect_ratio,
            } => Mat4::perspective_rh(fov_y, aspect_ratio, self.config.near, self.config.far),
            Projection::Orthographic {
                half_width,
                half_height,
            } => Mat4::orthographic_rh(
                -half_width,
                half_width,
                -half_height,
                half_height,
                self.config.near,
                self.config.far,
            ),
        }
    }

    #[must_use]
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    fn update_viewing_parameters(&mut self) {
        let h = (self.orientation.h + self.player_direction).to_radians();
        let v = self.orientation.v.to_radians();
        let (sin_h, cos_h) = h.sin_cos();
        let (sin_v, cos_v) = v.sin_cos();
        let ray = Vec3::new(sin_h * cos_v, sin_v, cos_h * cos_v);

        self.up = Vec3::new(-sin_h * sin_v, cos_v, -cos_h * sin_v);
        if self.kind == ViewKind::FirstPerson {
            self.position = self.target;
            self.look_at = self.target + ray;
        } else {
            self.position = self.target - self.distance * ray;
            self.look_at = self.target;
        }
    }

    /// Keep the visible half-size at the initial distance constant: narrow
    /// viewports keep the horizontal extent and widen the vertical one, wide
    /// viewports do the opposite.
    fn update_projection_parameters(&mut self) {
        let aspect = self.aspect_ratio;
        let half = self.initial_half_size;
        self.frustum = if aspect < 1.0 {
            let half_tan = (self.config.initial_fov.to_radians() / 2.0).tan() / aspect;
            Frustum {
                fov_degrees: 2.0 * half_tan.atan().to_degrees(),
                half_width: half,
                half_height: half / aspect,
            }
        } else {
            Frustum {
                fov_degrees: self.config.initial_fov,
                half_width: half * aspect,
                half_height: half,
            }
        };
    }
}

/// Clamp that tolerates inverted bounds (the lower bound wins).
fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.min(max).max(min)
}

//! What an external renderer needs to draw one frame.

use glam::{Mat4, Vec3};
use raiser_camera::{ViewCamera, ViewKind};
use raiser_math::{Viewport, ViewportContext};
use raiser_player::AnimationState;

use crate::fog::FogState;

/// One camera pass: render the shared scene with these matrices into `viewport`.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderView {
    pub kind: ViewKind,
    pub view: Mat4,
    pub projection: Mat4,
    /// Pixel rectangle, origin bottom-left.
    pub viewport: Viewport,
    /// Whether scene fog applies to this pass.
    pub fog: bool,
    /// The walker model is hidden from its own eyes.
    pub player_visible: bool,
}

impl RenderView {
    pub(crate) fn from_camera(camera: &ViewCamera, ctx: &ViewportContext, fog: &FogState) -> Self {
        let kind = camera.kind();
        Self {
            kind,
            view: camera.view_matrix(),
            projection: camera.projection_matrix(),
            viewport: camera.viewport_rect(ctx),
            fog: fog.enabled && kind != ViewKind::MiniMap,
            player_visible: kind != ViewKind::FirstPerson,
        }
    }
}

/// Walker placement and animation for this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerPose {
    pub position: Vec3,
    /// Model yaw in radians.
    pub rotation: f32,
    pub animation: AnimationState,
    /// Weight of `animation` in its cross-fade, `0..=1`.
    pub weight: f32,
}

/// Passes in draw order: primary views first, the mini-map last.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub views: Vec<RenderView>,
    pub fog: FogState,
    pub player: PlayerPose,
    pub show_help: bool,
    pub show_statistics: bool,
}

impl Frame {
    #[must_use]
    pub fn view(&self, kind: ViewKind) -> Option<&RenderView> {
        self.views.iter().find(|view| view.kind == kind)
    }
}

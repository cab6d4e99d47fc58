//! Pointer-driven camera manipulation.
//!
//! A press over a view selects what a drag does: the primary button over the
//! mini-map moves the mini-map, the primary button over any other view
//! dollies that view's camera, and the secondary button orbits it. Dragging
//! only continues while exactly the button that started it is held.

use glam::Vec2;
use raiser_input::ButtonMask;
use raiser_math::Orientation;

use crate::camera::ViewKind;
use crate::router::ViewportRouter;

/// Distance change per pixel of `dx + dy`.
pub const DISTANCE_PER_PIXEL: f32 = -0.05;
/// Orientation change (degrees) per pixel, horizontal then vertical.
pub const ORIENTATION_PER_PIXEL: Vec2 = Vec2::new(-0.5, 0.5);
/// Zoom change per wheel unit.
pub const ZOOM_PER_WHEEL_UNIT: f32 = -0.001;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragMode {
    #[default]
    None,
    Distance,
    Orientation,
    MiniMap,
}

#[derive(Debug, Clone, Default)]
pub struct PointerController {
    drag: DragMode,
    last_position: Vec2,
}

impl PointerController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn drag(&self) -> DragMode {
        self.drag
    }

    /// Handle a button press at `position` (window space). Returns the view
    /// under the pointer when the press was accepted.
    pub fn pointer_down(
        &mut self,
        router: &mut ViewportRouter,
        position: Vec2,
        buttons: ButtonMask,
    ) -> Option<ViewKind> {
        if buttons != ButtonMask::PRIMARY && buttons != ButtonMask::SECONDARY {
            return None;
        }
        self.last_position = position;
        let kind = router.resolve_pointer(position)?;
        let primary = buttons == ButtonMask::PRIMARY;
        self.drag = match kind {
            ViewKind::MiniMap if primary => DragMode::MiniMap,
            ViewKind::MiniMap => DragMode::None,
            _ => {
                router.set_active(kind);
                if primary {
                    DragMode::Distance
                } else {
                    DragMode::Orientation
                }
            }
        };
        Some(kind)
    }

    /// Handle pointer motion. Applies the current drag to the active camera
    /// (or the mini-map) when the matching button is still the only one held.
    pub fn pointer_move(&mut self, router: &mut ViewportRouter, position: Vec2, buttons: ButtonMask) {
        if self.drag == DragMode::None {
            return;
        }
        let delta = position - self.last_position;
        self.last_position = position;
        match (self.drag, buttons) {
            (DragMode::Distance, ButtonMask::PRIMARY) => {
                router
                    .active_camera_mut()
                    .update_distance(DISTANCE_PER_PIXEL * (delta.x + delta.y));
            }
            (DragMode::MiniMap, ButtonMask::PRIMARY) => router.drag_mini_map(delta),
            (DragMode::Orientation, ButtonMask::SECONDARY) => {
                let step = ORIENTATION_PER_PIXEL * delta;
                router
                    .active_camera_mut()
                    .update_orientation(Orientation::new(step.x, step.y));
            }
            _ => {}
        }
    }

    pub fn pointer_up(&mut self) {
        self.drag = DragMode::None;
    }

    /// Handle a wheel step over `position`. Zooms the primary view under the
    /// pointer and makes it active; the mini-map ignores the wheel.
    pub fn wheel(&mut self, router: &mut ViewportRouter, position: Vec2, delta_y: f32) -> Option<ViewKind> {
        let kind = router.resolve_pointer(position)?;
        if !kind.is_primary() {
            return None;
        }
        router.camera_mut(kind).update_zoom(ZOOM_PER_WHEEL_UNIT * delta_y);
        router.set_active(kind);
        Some(kind)
    }
}

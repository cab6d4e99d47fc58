//! Owns the five view cameras and their screen layout.
//!
//! Single-view mode gives the active primary camera the whole window and
//! renders only that camera. Multiple-views mode gives each primary camera its
//! configured fractional rectangle. The mini-map overlays either layout
//! independently and is drawn (and hit-tested) on top.

use glam::{Vec2, Vec3};
use raiser_config::CamerasConfig;
use raiser_math::ViewportContext;
use tracing::debug;

use crate::camera::{ViewCamera, ViewKind};

fn slot(kind: ViewKind) -> usize {
    match kind {
        ViewKind::Fixed => 0,
        ViewKind::FirstPerson => 1,
        ViewKind::ThirdPerson => 2,
        ViewKind::Top => 3,
        ViewKind::MiniMap => 4,
    }
}

#[derive(Debug, Clone)]
pub struct ViewportRouter {
    cameras: [ViewCamera; 5],
    active: ViewKind,
    multiple_views: bool,
    mini_map_visible: bool,
    ctx: ViewportContext,
}

impl ViewportRouter {
    /// Build every camera from its configuration. Starts in single-view mode
    /// on the fixed camera with the mini-map shown.
    #[must_use]
    pub fn new(config: &CamerasConfig, ctx: ViewportContext) -> Self {
        let cameras = [
            ViewCamera::new(ViewKind::Fixed, config.fixed.clone(), ctx),
            ViewCamera::new(ViewKind::FirstPerson, config.first_person.clone(), ctx),
            ViewCamera::new(ViewKind::ThirdPerson, config.third_person.clone(), ctx),
            ViewCamera::new(ViewKind::Top, config.top.clone(), ctx),
            ViewCamera::new(ViewKind::MiniMap, config.mini_map.clone(), ctx),
        ];
        let mut router = Self {
            cameras,
            active: ViewKind::Fixed,
            multiple_views: false,
            mini_map_visible: true,
            ctx,
        };
        router.arrange(false);
        router
    }

    // ── Queries ─────────────────────────────────────────────────────

    #[must_use]
    pub fn camera(&self, kind: ViewKind) -> &ViewCamera {
        &self.cameras[slot(kind)]
    }

    pub fn camera_mut(&mut self, kind: ViewKind) -> &mut ViewCamera {
        &mut self.cameras[slot(kind)]
    }

    #[must_use]
    pub fn active_kind(&self) -> ViewKind {
        self.active
    }

    #[must_use]
    pub fn active_camera(&self) -> &ViewCamera {
        self.camera(self.active)
    }

    pub fn active_camera_mut(&mut self) -> &mut ViewCamera {
        let active = self.active;
        self.camera_mut(active)
    }

    #[must_use]
    pub fn multiple_views(&self) -> bool {
        self.multiple_views
    }

    #[must_use]
    pub fn mini_map_visible(&self) -> bool {
        self.mini_map_visible
    }

    #[must_use]
    pub fn context(&self) -> ViewportContext {
        self.ctx
    }

    // ── Layout ──────────────────────────────────────────────────────

    /// Make a primary camera active. The mini-map can never be active.
    pub fn set_active(&mut self, kind: ViewKind) -> bool {
        if !kind.is_primary() {
            return false;
        }
        if self.active != kind {
            debug!("Active view: {}", kind.as_str());
        }
        self.active = kind;
        true
    }

    /// Assign each primary camera its multiple-views rectangle or the full window.
    pub fn arrange(&mut self, multiple_views: bool) {
        for kind in ViewKind::PRIMARY {
            self.camera_mut(kind).set_viewport(multiple_views);
        }
    }

    pub fn set_view_mode(&mut self, multiple_views: bool) {
        self.multiple_views = multiple_views;
        self.arrange(multiple_views);
    }

    pub fn toggle_view_mode(&mut self) {
        self.set_view_mode(!self.multiple_views);
    }

    pub fn set_mini_map_visible(&mut self, visible: bool) {
        self.mini_map_visible = visible;
    }

    pub fn toggle_mini_map(&mut self) {
        self.mini_map_visible = !self.mini_map_visible;
    }

    /// Deliver a window resize to every camera.
    pub fn resize(&mut self, ctx: ViewportContext) {
        self.ctx = ctx;
        for camera in &mut self.cameras {
            camera.update_window_size(ctx);
        }
    }

    /// Primary cameras currently drawn, in draw order.
    #[must_use]
    pub fn visible_primary(&self) -> Vec<ViewKind> {
        if self.multiple_views {
            ViewKind::PRIMARY.to_vec()
        } else {
            vec![self.active]
        }
    }

    /// Every camera drawn this frame: primary views first, mini-map last.
    #[must_use]
    pub fn render_order(&self) -> Vec<ViewKind> {
        let mut order = self.visible_primary();
        if self.mini_map_visible {
            order.push(ViewKind::MiniMap);
        }
        order
    }

    /// The camera whose viewport contains `point` (window space, origin
    /// bottom-left). The mini-map is tested first since it draws on top.
    #[must_use]
    pub fn resolve_pointer(&self, point: Vec2) -> Option<ViewKind> {
        if self.mini_map_visible
            && self
                .camera(ViewKind::MiniMap)
                .viewport_rect(&self.ctx)
                .contains(point)
        {
            return Some(ViewKind::MiniMap);
        }
        self.visible_primary()
            .into_iter()
            .find(|&kind| self.camera(kind).viewport_rect(&self.ctx).contains(point))
    }

    // ── Per-frame and interactive updates ───────────────────────────

    /// Point the player-relative cameras at `target` and offset their
    /// horizontal orientation by `direction` (degrees).
    pub fn follow_player(&mut self, target: Vec3, direction: f32) {
        for camera in &mut self.cameras {
            if camera.kind().follows_player() {
                camera.set_player_direction(direction);
                camera.set_target(target);
            }
        }
    }

    /// Move the mini-map by a window-space pixel delta, keeping it on screen.
    pub fn drag_mini_map(&mut self, delta: Vec2) {
        let ctx = self.ctx;
        let mini_map = self.camera_mut(ViewKind::MiniMap);
        let rect = mini_map.viewport_rect(&ctx);
        let mut viewport = mini_map.viewport();
        let free_w = ctx.window_width - rect.width;
        let free_h = ctx.window_height - rect.height;
        if free_w > 0.0 {
            viewport.x = (viewport.x + delta.x / free_w).clamp(0.0, 1.0);
        }
        if free_h > 0.0 {
            viewport.y = (viewport.y + delta.y / free_h).clamp(0.0, 1.0);
        }
        mini_map.set_viewport_origin(viewport.x, viewport.y);
    }

    /// Reset the active camera to its initial state.
    pub fn reset_active(&mut self) {
        self.active_camera_mut().initialize();
    }

    /// Reset all four primary cameras.
    pub fn reset_all(&mut self) {
        for kind in ViewKind::PRIMARY {
            self.camera_mut(kind).initialize();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use raiser_math::Orientation;

    const EPSILON: f32 = 1e-4;

    fn router() -> ViewportRouter {
        ViewportRouter::new(&CamerasConfig::default(), ViewportContext::new(1000.0, 500.0))
    }

    #[test]
    fn test_initial_layout() {
        let router = router();
        assert_eq!(router.active_kind(), ViewKind::Fixed);
        assert!(!router.multiple_views());
        assert!(router.mini_map_visible());
        let rect = router.camera(ViewKind::Fixed).viewport_rect(&router.context());
        assert!((rect.width - 1000.0).abs() < EPSILON);
        assert!((rect.height - 500.0).abs() < EPSILON);
    }

    #[test]
    fn test_render_order_single_view() {
        let mut router = router();
        router.set_active(ViewKind::Top);
        assert_eq!(router.render_order(), vec![ViewKind::Top, ViewKind::MiniMap]);
        router.toggle_mini_map();
        assert_eq!(router.render_order(), vec![ViewKind::Top]);
    }

    #[test]
    fn test_render_order_multiple_views() {
        let mut router = router();
        router.set_view_mode(true);
        assert_eq!(
            router.render_order(),
            vec![
                ViewKind::Fixed,
                ViewKind::FirstPerson,
                ViewKind::ThirdPerson,
                ViewKind::Top,
                ViewKind::MiniMap
            ]
        );
    }

    #[test]
    fn test_mini_map_cannot_be_active() {
        let mut router = router();
        assert!(!router.set_active(ViewKind::MiniMap));
        assert_eq!(router.active_kind(), ViewKind::Fixed);
    }

    #[test]
    fn test_resolve_prefers_mini_map() {
        let router = router();
        let rect = router
            .camera(ViewKind::MiniMap)
            .viewport_rect(&router.context());
        let inside = Vec2::new(rect.x + 1.0, rect.y + 1.0);
        assert_eq!(router.resolve_pointer(inside), Some(ViewKind::MiniMap));
        // Away from the mini-map the full-window active camera is hit.
        assert_eq!(router.resolve_pointer(Vec2::new(10.0, 400.0)), Some(ViewKind::Fixed));
    }

    #[test]
    fn test_resolve_hidden_mini_map_falls_through() {
        let mut router = router();
        router.set_mini_map_visible(false);
        let rect = router
            .camera(ViewKind::MiniMap)
            .viewport_rect(&router.context());
        let inside = Vec2::new(rect.x + 1.0, rect.y + 1.0);
        assert_eq!(router.resolve_pointer(inside), Some(ViewKind::Fixed));
    }

    #[test]
    fn test_resolve_multiple_views_quadrants() {
        let mut router = router();
        router.set_mini_map_visible(false);
        router.set_view_mode(true);
        // Fixed is top-left, first-person top-right, third-person bottom-left, top bottom-right.
        assert_eq!(router.resolve_pointer(Vec2::new(10.0, 490.0)), Some(ViewKind::Fixed));
        assert_eq!(router.resolve_pointer(Vec2::new(990.0, 490.0)), Some(ViewKind::FirstPerson));
        assert_eq!(router.resolve_pointer(Vec2::new(10.0, 10.0)), Some(ViewKind::ThirdPerson));
        assert_eq!(router.resolve_pointer(Vec2::new(990.0, 10.0)), Some(ViewKind::Top));
    }

    #[test]
    fn test_resolve_outside_window() {
        let router = router();
        assert_eq!(router.resolve_pointer(Vec2::new(-5.0, 10.0)), None);
        assert_eq!(router.resolve_pointer(Vec2::new(1000.0, 10.0)), None);
    }

    #[test]
    fn test_follow_player_skips_fixed_and_mini_map() {
        let mut router = router();
        let target = Vec3::new(1.0, 0.08, 2.0);
        router.follow_player(target, 45.0);
        assert_eq!(router.camera(ViewKind::FirstPerson).target(), target);
        assert_eq!(router.camera(ViewKind::Top).player_direction(), 45.0);
        assert_eq!(router.camera(ViewKind::Fixed).target(), Vec3::ZERO);
        assert_eq!(router.camera(ViewKind::MiniMap).player_direction(), 0.0);
    }

    #[test]
    fn test_drag_mini_map_clamps() {
        let mut router = router();
        router.drag_mini_map(Vec2::new(5000.0, -5000.0));
        let viewport = router.camera(ViewKind::MiniMap).viewport();
        assert_eq!(viewport.x, 1.0);
        assert_eq!(viewport.y, 0.0);
    }

    #[test]
    fn test_drag_mini_map_moves_by_fraction_of_free_space() {
        let mut router = router();
        let before = router.camera(ViewKind::MiniMap).viewport();
        // Mini-map is 150 px square; free width is 850 px.
        router.drag_mini_map(Vec2::new(-85.0, 0.0));
        let after = router.camera(ViewKind::MiniMap).viewport();
        assert!((after.x - (before.x - 0.1)).abs() < EPSILON);
    }

    #[test]
    fn test_reset_all_restores_primaries() {
        let mut router = router();
        for kind in ViewKind::PRIMARY {
            router.camera_mut(kind).set_zoom(1.7);
        }
        router.camera_mut(ViewKind::MiniMap).set_zoom(2.0);
        router.reset_all();
        for kind in ViewKind::PRIMARY {
            assert_eq!(router.camera(kind).zoom(), 1.0);
        }
        assert_eq!(router.camera(ViewKind::MiniMap).zoom(), 2.0);
    }

    #[test]
    fn test_reset_active_only() {
        let mut router = router();
        router.set_active(ViewKind::Top);
        router.camera_mut(ViewKind::Top).set_orientation(Orientation::new(50.0, -90.0));
        router.camera_mut(ViewKind::Fixed).set_distance(10.0);
        router.reset_active();
        assert_eq!(router.camera(ViewKind::Top).orientation(), Orientation::new(0.0, -90.0));
        assert_eq!(router.camera(ViewKind::Fixed).distance(), 10.0);
    }

    #[test]
    fn test_resize_reaches_every_camera() {
        let mut router = router();
        router.resize(ViewportContext::new(400.0, 800.0));
        let rect = router
            .camera(ViewKind::MiniMap)
            .viewport_rect(&router.context());
        assert!((rect.width - 120.0).abs() < EPSILON);
        assert!((router.camera(ViewKind::Fixed).aspect_ratio() - 0.5).abs() < EPSILON);
    }
}

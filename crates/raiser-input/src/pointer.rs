//! Pointer state in window space.
//!
//! Platform cursor events arrive in client coordinates (origin top-left).
//! [`PointerState`] converts them once, on entry, to window coordinates with
//! the origin at the bottom-left corner, which is what viewport rectangles use.

use glam::Vec2;
use raiser_math::ViewportContext;
use winit::event::{ElementState, MouseButton};

/// Held pointer buttons as a bit mask (`1` primary, `2` secondary).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonMask(pub u8);

impl ButtonMask {
    pub const NONE: Self = Self(0);
    pub const PRIMARY: Self = Self(1);
    pub const SECONDARY: Self = Self(2);

    /// Mask bit for a platform button; buttons other than left/right map to none.
    #[must_use]
    pub fn from_button(button: MouseButton) -> Self {
        match button {
            MouseButton::Left => Self::PRIMARY,
            MouseButton::Right => Self::SECONDARY,
            _ => Self::NONE,
        }
    }

    #[must_use]
    pub fn contains(self, other: Self) -> bool {
        other.0 != 0 && self.0 & other.0 == other.0
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// Pointer position and held buttons.
#[derive(Debug, Clone, Default)]
pub struct PointerState {
    position: Vec2,
    buttons: ButtonMask,
}

/// Convert a client-space point (origin top-left) to window space (origin bottom-left).
#[must_use]
pub fn client_to_window(client: Vec2, ctx: &ViewportContext) -> Vec2 {
    Vec2::new(client.x, ctx.window_height - client.y - 1.0)
}

impl PointerState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ── Event handlers ──────────────────────────────────────────────

    /// Record the pointer at a client-space position.
    pub fn on_cursor_moved(&mut self, client: Vec2, ctx: &ViewportContext) {
        self.position = client_to_window(client, ctx);
    }

    /// Record a button transition at a client-space position.
    pub fn on_button(
        &mut self,
        button: MouseButton,
        state: ElementState,
        client: Vec2,
        ctx: &ViewportContext,
    ) {
        self.position = client_to_window(client, ctx);
        let bit = ButtonMask::from_button(button);
        match state {
            ElementState::Pressed => self.buttons.0 |= bit.0,
            ElementState::Released => self.buttons.0 &= !bit.0,
        }
    }

    // ── Queries ─────────────────────────────────────────────────────

    /// Window-space position (origin bottom-left).
    #[must_use]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[must_use]
    pub fn buttons(&self) -> ButtonMask {
        self.buttons
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> ViewportContext {
        ViewportContext::new(800.0, 600.0)
    }

    #[test]
    fn test_client_to_window_flips_y() {
        let p = client_to_window(Vec2::new(10.0, 0.0), &ctx());
        assert_eq!(p, Vec2::new(10.0, 599.0));
        let p = client_to_window(Vec2::new(10.0, 599.0), &ctx());
        assert_eq!(p, Vec2::new(10.0, 0.0));
    }

    #[test]
    fn test_cursor_position_is_in_window_space() {
        let mut pointer = PointerState::new();
        pointer.on_cursor_moved(Vec2::new(110.0, 90.0), &ctx());
        assert_eq!(pointer.position(), Vec2::new(110.0, 509.0));
    }

    #[test]
    fn test_button_mask_tracking() {
        let mut pointer = PointerState::new();
        let at = Vec2::new(5.0, 5.0);
        pointer.on_button(MouseButton::Left, ElementState::Pressed, at, &ctx());
        pointer.on_button(MouseButton::Right, ElementState::Pressed, at, &ctx());
        assert_eq!(pointer.buttons(), ButtonMask(3));
        pointer.on_button(MouseButton::Left, ElementState::Released, at, &ctx());
        assert!(pointer.buttons().contains(ButtonMask::SECONDARY));
        assert!(!pointer.buttons().contains(ButtonMask::PRIMARY));
    }

    #[test]
    fn test_middle_button_ignored() {
        let mut pointer = PointerState::new();
        pointer.on_button(
            MouseButton::Middle,
            ElementState::Pressed,
            Vec2::ZERO,
            &ctx(),
        );
        assert!(pointer.buttons().is_empty());
    }
}

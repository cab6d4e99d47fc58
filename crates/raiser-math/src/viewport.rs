//! Viewport rectangles, either as window fractions or in pixels.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Window dimensions in pixels, passed explicitly to anything that needs
/// to turn fractional viewports into pixel rectangles.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewportContext {
    /// Window width in pixels.
    pub window_width: f32,
    /// Window height in pixels.
    pub window_height: f32,
}

impl ViewportContext {
    /// Create a context for a window of the given size.
    #[must_use]
    pub const fn new(window_width: f32, window_height: f32) -> Self {
        Self {
            window_width,
            window_height,
        }
    }

    /// The shorter of the two window dimensions.
    #[must_use]
    pub fn min_size(&self) -> f32 {
        self.window_width.min(self.window_height)
    }
}

impl Default for ViewportContext {
    fn default() -> Self {
        Self::new(1280.0, 720.0)
    }
}

/// An axis-aligned rectangle `(x, y, width, height)` with a bottom-left
/// origin. Used both for fractional viewports (all fields in `[0, 1]`)
/// and for pixel rectangles.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Left edge.
    pub x: f32,
    /// Bottom edge.
    pub y: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl Viewport {
    /// The whole window, as a fraction.
    pub const FULL: Self = Self::new(0.0, 0.0, 1.0, 1.0);

    /// Create a rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Half-open containment test: the left and bottom edges are inside,
    /// the right and top edges are not, so adjacent rectangles never both
    /// claim a point.
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }

    /// `width / height`, or 1.0 for a degenerate rectangle.
    #[must_use]
    pub fn aspect_ratio(&self) -> f32 {
        if self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::FULL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_half_open() {
        let r = Viewport::new(10.0, 20.0, 100.0, 50.0);
        assert!(r.contains(Vec2::new(10.0, 20.0)));
        assert!(r.contains(Vec2::new(109.9, 69.9)));
        assert!(!r.contains(Vec2::new(110.0, 30.0)));
        assert!(!r.contains(Vec2::new(50.0, 70.0)));
        assert!(!r.contains(Vec2::new(9.9, 30.0)));
    }

    #[test]
    fn test_adjacent_rects_do_not_overlap() {
        let left = Viewport::new(0.0, 0.0, 50.0, 100.0);
        let right = Viewport::new(50.0, 0.0, 50.0, 100.0);
        let p = Vec2::new(50.0, 10.0);
        assert!(!left.contains(p));
        assert!(right.contains(p));
    }

    #[test]
    fn test_aspect_ratio() {
        assert!((Viewport::new(0.0, 0.0, 1920.0, 1080.0).aspect_ratio() - 16.0 / 9.0).abs() < 1e-6);
        assert!((Viewport::new(0.0, 0.0, 10.0, 0.0).aspect_ratio() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_context_min_size() {
        assert!((ViewportContext::new(800.0, 600.0).min_size() - 600.0).abs() < 1e-6);
        assert!((ViewportContext::new(400.0, 900.0).min_size() - 400.0).abs() < 1e-6);
    }
}

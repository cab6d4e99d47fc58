//! Horizontal/vertical camera orientation in degrees.

use std::ops::{Add, AddAssign, Sub};

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A pair of angles in degrees: `h` around the vertical axis, `v` above
/// (positive) or below (negative) the horizon.
///
/// No wraparound is applied to `h`; callers clamp against explicit bounds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Orientation {
    /// Horizontal angle in degrees.
    pub h: f32,
    /// Vertical angle in degrees.
    pub v: f32,
}

impl Orientation {
    /// Create an orientation from horizontal and vertical angles in degrees.
    #[must_use]
    pub const fn new(h: f32, v: f32) -> Self {
        Self { h, v }
    }

    /// Clamp each component independently into `[min, max]`.
    ///
    /// Bounds with `min > max` on an axis collapse to `min` on that axis
    /// instead of panicking the way `f32::clamp` would.
    #[must_use]
    pub fn clamp(self, min: Orientation, max: Orientation) -> Self {
        Self {
            h: self.h.max(min.h).min(max.h.max(min.h)),
            v: self.v.max(min.v).min(max.v.max(min.v)),
        }
    }

    /// Whether both components lie inside `[min, max]`.
    #[must_use]
    pub fn within(self, min: Orientation, max: Orientation) -> bool {
        (min.h..=max.h).contains(&self.h) && (min.v..=max.v).contains(&self.v)
    }
}

impl Add for Orientation {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.h + rhs.h, self.v + rhs.v)
    }
}

impl AddAssign for Orientation {
    fn add_assign(&mut self, rhs: Self) {
        self.h += rhs.h;
        self.v += rhs.v;
    }
}

impl Sub for Orientation {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.h - rhs.h, self.v - rhs.v)
    }
}

/// Pointer deltas are applied as `(h, v)` increments.
impl From<Vec2> for Orientation {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

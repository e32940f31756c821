use serde::{Deserialize, Serialize};

use super::Vec2;

/// Minimum per-axis change (logical pixels) that counts as a real resize.
///
/// Anything at or below this is treated as sub-pixel layout jitter.
pub const SIGNIFICANT_CHANGE: f32 = 1.0;

/// Measured size of an element's box.
///
/// Invariant: both axes are finite and non-negative. Use [`Dimensions::new`]
/// to sanitize untrusted values.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f32,
    pub height: f32,
}

impl Dimensions {
    /// Creates dimensions, clamping negative values to zero.
    ///
    /// Non-finite values collapse to zero as well.
    #[inline]
    pub fn new(width: f32, height: f32) -> Self {
        Self { width: sanitize(width), height: sanitize(height) }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { width: 0.0, height: 0.0 }
    }

    /// `true` when either axis is zero, i.e. nothing can be drawn yet.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    #[inline]
    pub fn min_side(self) -> f32 {
        self.width.min(self.height)
    }

    /// Grows both axes by `amount` on every side (`2 × amount` per axis).
    #[inline]
    #[must_use]
    pub fn expand(self, amount: f32) -> Self {
        Self::new(self.width + 2.0 * amount, self.height + 2.0 * amount)
    }

    /// Returns `true` if `other` differs by more than [`SIGNIFICANT_CHANGE`] on either axis.
    #[inline]
    pub fn differs_significantly(self, other: Dimensions) -> bool {
        (self.width - other.width).abs() > SIGNIFICANT_CHANGE
            || (self.height - other.height).abs() > SIGNIFICANT_CHANGE
    }

    #[inline]
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

impl From<Vec2> for Dimensions {
    #[inline]
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

#[inline]
fn sanitize(v: f32) -> f32 {
    if v.is_finite() { v.max(0.0) } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_and_nan_are_clamped() {
        let d = Dimensions::new(-5.0, f32::NAN);
        assert_eq!(d, Dimensions::zero());
        assert!(d.is_empty());
    }

    #[test]
    fn sub_pixel_jitter_is_not_significant() {
        let a = Dimensions::new(100.0, 50.0);
        assert!(!a.differs_significantly(Dimensions::new(100.4, 50.2)));
        assert!(!a.differs_significantly(Dimensions::new(101.0, 50.0)));
        assert!(a.differs_significantly(Dimensions::new(102.0, 50.0)));
        assert!(a.differs_significantly(Dimensions::new(100.0, 48.5)));
    }

    #[test]
    fn expand_adds_on_both_sides() {
        let d = Dimensions::new(10.0, 4.0).expand(3.0);
        assert_eq!(d, Dimensions::new(16.0, 10.0));
    }
}

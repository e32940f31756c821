use super::{Dimensions, Vec2};

/// Axis-aligned box in logical pixels (top-left origin, +Y down).
///
/// Layout only produces non-negative sizes; [`Rect::new`] does not reorder
/// corners.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { origin: Vec2::new(x, y), size: Vec2::new(w, h) }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// Box of `dims` placed at `origin`.
    #[inline]
    pub fn at(origin: Vec2, dims: Dimensions) -> Self {
        Self { origin, size: dims.to_vec2() }
    }

    #[inline]
    pub fn dimensions(self) -> Dimensions {
        Dimensions::new(self.size.x, self.size.y)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        !(self.size.x > 0.0 && self.size.y > 0.0)
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        self.origin + self.size
    }

    /// Pointer hit test. Half-open: the right and bottom edges are outside.
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        let max = self.max();
        p.x >= self.origin.x && p.y >= self.origin.y && p.x < max.x && p.y < max.y
    }

    /// Same box pulled in by `amount` on each side. Size clamps at zero.
    #[inline]
    #[must_use]
    pub fn inset(self, amount: f32) -> Rect {
        Rect::new(
            self.origin.x + amount,
            self.origin.y + amount,
            (self.size.x - 2.0 * amount).max(0.0),
            (self.size.y - 2.0 * amount).max(0.0),
        )
    }

    #[inline]
    #[must_use]
    pub fn translate(self, by: Vec2) -> Rect {
        Rect { origin: self.origin + by, size: self.size }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_test_excludes_far_edges() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(rect.contains(Vec2::zero()));
        assert!(rect.contains(Vec2::new(9.5, 9.5)));
        assert!(!rect.contains(Vec2::new(10.0, 5.0)));
        assert!(!rect.contains(Vec2::new(-0.1, 5.0)));
    }

    #[test]
    fn inset_pulls_in_and_clamps() {
        assert_eq!(Rect::new(0.0, 0.0, 100.0, 80.0).inset(3.0), Rect::new(3.0, 3.0, 94.0, 74.0));
        let collapsed = Rect::new(5.0, 5.0, 4.0, 4.0).inset(10.0);
        assert!(collapsed.is_empty());
        assert_eq!(collapsed.size, Vec2::zero());
    }

    #[test]
    fn at_uses_dimensions() {
        let r = Rect::at(Vec2::new(2.0, 3.0), Dimensions::new(10.0, 20.0));
        assert_eq!(r.max(), Vec2::new(12.0, 23.0));
        assert_eq!(r.translate(Vec2::new(-2.0, -3.0)).origin, Vec2::zero());
    }

    #[test]
    fn nan_size_is_empty() {
        assert!(Rect::new(0.0, 0.0, f32::NAN, 4.0).is_empty());
    }
}

use serde::Deserialize;
use skwircle_engine::coords::{Rect, Vec2};

// ── Edges ─────────────────────────────────────────────────────────────────

/// Insets on all four sides (padding).
///
/// Deserializes from a single number (all sides), `[vertical, horizontal]`,
/// or `{ "top": .., "right": .., "bottom": .., "left": .. }`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(from = "EdgesRepr")]
pub struct Edges {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Edges {
    #[inline]
    pub fn all(v: f32) -> Self {
        Self { top: v, right: v, bottom: v, left: v }
    }

    #[inline]
    pub fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self { top: vertical, bottom: vertical, left: horizontal, right: horizontal }
    }

    /// Total inset on the horizontal axis.
    #[inline]
    pub fn h(self) -> f32 {
        self.left + self.right
    }

    /// Total inset on the vertical axis.
    #[inline]
    pub fn v(self) -> f32 {
        self.top + self.bottom
    }

    /// Negative and non-finite sides become zero.
    #[inline]
    #[must_use]
    pub fn sanitized(self) -> Self {
        let f = |v: f32| if v.is_finite() { v.max(0.0) } else { 0.0 };
        Self { top: f(self.top), right: f(self.right), bottom: f(self.bottom), left: f(self.left) }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum EdgesRepr {
    All(f32),
    Symmetric([f32; 2]),
    Sides {
        #[serde(default)]
        top: f32,
        #[serde(default)]
        right: f32,
        #[serde(default)]
        bottom: f32,
        #[serde(default)]
        left: f32,
    },
}

impl From<EdgesRepr> for Edges {
    fn from(repr: EdgesRepr) -> Self {
        let edges = match repr {
            EdgesRepr::All(v) => Edges::all(v),
            EdgesRepr::Symmetric([v, h]) => Edges::symmetric(v, h),
            EdgesRepr::Sides { top, right, bottom, left } => Edges { top, right, bottom, left },
        };
        edges.sanitized()
    }
}

/// Shrinks `rect` inward by `edges`, never below zero size.
#[inline]
pub fn inset_rect(rect: Rect, edges: Edges) -> Rect {
    Rect::new(
        rect.origin.x + edges.left,
        rect.origin.y + edges.top,
        (rect.size.x - edges.h()).max(0.0),
        (rect.size.y - edges.v()).max(0.0),
    )
}

// ── Constraints ───────────────────────────────────────────────────────────

/// Layout constraints passed down from parent to child during measure.
///
/// A child may return any size in `[min, max]`. Parents enforce their own
/// policy by calling [`Constraints::constrain`] on the returned size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraints {
    pub min: Vec2,
    pub max: Vec2,
}

impl Constraints {
    /// Tight: child must be exactly `size`.
    #[inline]
    pub fn tight(size: Vec2) -> Self {
        Self { min: size, max: size }
    }

    /// Loose: child can be anywhere from zero up to `max`.
    #[inline]
    pub fn loose(max: Vec2) -> Self {
        Self { min: Vec2::zero(), max }
    }

    /// No constraint: child can take any positive size.
    #[inline]
    pub fn unbounded() -> Self {
        Self { min: Vec2::zero(), max: Vec2::splat(f32::INFINITY) }
    }

    /// Clamp a size into `[min, max]`.
    #[inline]
    #[must_use]
    pub fn constrain(self, size: Vec2) -> Vec2 {
        Vec2::new(
            size.x.max(self.min.x).min(self.max.x),
            size.y.max(self.min.y).min(self.max.y),
        )
    }

    /// Shrink max inward by `edges`. Min becomes zero.
    #[inline]
    #[must_use]
    pub fn shrink(self, edges: Edges) -> Self {
        Self {
            min: Vec2::zero(),
            max: Vec2::new((self.max.x - edges.h()).max(0.0), (self.max.y - edges.v()).max(0.0)),
        }
    }
}

// ── LayoutCtx ─────────────────────────────────────────────────────────────

/// Resources made available to [`Widget::measure`](crate::widget::Widget::measure)
/// and [`Widget::on_event`](crate::widget::Widget::on_event).
#[derive(Debug, Clone, Copy)]
pub struct LayoutCtx {
    /// Size of the scene viewport in logical pixels.
    pub viewport: Vec2,
}

impl LayoutCtx {
    #[inline]
    pub fn new(viewport: Vec2) -> Self {
        Self { viewport }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inset_never_goes_negative() {
        let r = inset_rect(Rect::new(10.0, 10.0, 8.0, 30.0), Edges::symmetric(4.0, 6.0));
        assert_eq!(r, Rect::new(16.0, 14.0, 0.0, 22.0));
    }

    #[test]
    fn edges_deserialize_from_all_forms() {
        let all: Edges = serde_json::from_str("8").unwrap();
        assert_eq!(all, Edges::all(8.0));
        let sym: Edges = serde_json::from_str("[4, 12]").unwrap();
        assert_eq!(sym, Edges::symmetric(4.0, 12.0));
        let sides: Edges = serde_json::from_str(r#"{ "top": 1, "left": -3 }"#).unwrap();
        assert_eq!(sides, Edges { top: 1.0, right: 0.0, bottom: 0.0, left: 0.0 });
    }

    #[test]
    fn tight_admits_one_size() {
        let c = Constraints::tight(Vec2::new(30.0, 10.0));
        assert_eq!(c.constrain(Vec2::zero()), Vec2::new(30.0, 10.0));
        assert_eq!(c.constrain(Vec2::splat(500.0)), Vec2::new(30.0, 10.0));
        assert_eq!(c.shrink(Edges::all(5.0)).max, Vec2::new(20.0, 0.0));
    }

    #[test]
    fn constrain_clamps_both_axes() {
        let c = Constraints { min: Vec2::new(10.0, 0.0), max: Vec2::new(50.0, 20.0) };
        assert_eq!(c.constrain(Vec2::new(5.0, 40.0)), Vec2::new(10.0, 20.0));
    }
}

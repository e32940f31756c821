use crate::coords::{Dimensions, Vec2};
use crate::style::RoundnessConfig;

use super::path::{generate, PathOutline};
use super::quality::PerformanceTier;

/// Nested outlines of one shape, all in a shared local space whose origin is
/// the top-left of the outermost layer.
///
/// Layout, outermost first:
/// - outer ring: `(w, h)` grown by `border + ring` per side, at offset `0`
/// - border: `(w, h)` grown by `border` per side, at offset `ring`
/// - background: `(w, h)`, at offset `ring + border`
#[derive(Debug, Clone, PartialEq)]
pub struct ShapePaths {
    pub background: PathOutline,
    pub border: PathOutline,
    pub outer_ring: Option<PathOutline>,
    pub border_width: f32,
    pub ring_width: f32,
    config: RoundnessConfig,
    tier: PerformanceTier,
}

impl ShapePaths {
    /// Computes all outlines for a `dimensions` background box.
    ///
    /// Returns `None` while the box is empty (not measured yet).
    pub fn compute(
        dimensions: Dimensions,
        border_width: f32,
        ring_width: f32,
        config: &RoundnessConfig,
        tier: PerformanceTier,
    ) -> Option<Self> {
        if dimensions.is_empty() {
            return None;
        }
        let config = config.sanitized();
        let b = non_negative(border_width);
        let ring = non_negative(ring_width);

        let border = generate(dimensions.expand(b), &config, tier, ring)?;
        let background = generate(
            dimensions,
            &config.with_radius(inner_radius(config.corner_radius, b)),
            tier,
            ring + b,
        )?;
        let outer_ring = if ring > 0.0 {
            generate(
                dimensions.expand(b + ring),
                &config.with_radius(config.corner_radius + ring),
                tier,
                0.0,
            )
        } else {
            None
        };

        log::trace!(
            "shape paths {}x{} border={b} ring={ring} radius={}",
            dimensions.width,
            dimensions.height,
            background.radius
        );

        Some(Self {
            background,
            border,
            outer_ring,
            border_width: b,
            ring_width: ring,
            config,
            tier,
        })
    }

    /// Border plus ring thickness: how far content sits from the outer edge.
    #[inline]
    pub fn total_inset(&self) -> f32 {
        self.border_width + self.ring_width
    }

    /// Size of the full visual, outer ring included.
    #[inline]
    pub fn visual_size(&self) -> Dimensions {
        self.background.size.expand(self.total_inset())
    }

    /// Outermost drawn outline: the ring when present, else the border.
    #[inline]
    pub fn outer(&self) -> &PathOutline {
        self.outer_ring.as_ref().unwrap_or(&self.border)
    }

    /// Hit test against the outermost outline. `p` is in local space.
    ///
    /// Corners use the same superellipse `|x/r|^n + |y/r|^n <= 1` the outline
    /// samples, so the cut-away corner areas are outside.
    pub fn contains(&self, p: Vec2) -> bool {
        let outer = self.outer();
        let (w, h) = (outer.size.width, outer.size.height);
        let local = p - outer.origin;
        if !(local.x >= 0.0 && local.y >= 0.0 && local.x <= w && local.y <= h) {
            return false;
        }
        let r = outer.radius;
        if r <= 0.0 {
            return true;
        }
        // Distance past the straight edges, in radius units.
        let dx = (local.x - local.x.clamp(r, w - r)).abs() / r;
        let dy = (local.y - local.y.clamp(r, h - r)).abs() / r;
        let n = self.config.smoothing;
        dx.powf(n) + dy.powf(n) <= 1.0
    }

    /// Duplicate of the background outline grown by `spread` per side and
    /// centered on the background. A negative spread shrinks it.
    pub fn spread_background(&self, spread: f32) -> Option<PathOutline> {
        let spread = if spread.is_finite() { spread } else { 0.0 };
        let size = self.background.size.expand(spread);
        let radius = (self.background.radius + spread).max(0.0);
        generate(
            size,
            &self.config.with_radius(radius),
            self.tier,
            self.background.origin.x - spread,
        )
    }
}

/// Background radius nested inside a border: `max(1, r - border)`.
///
/// A square (`r == 0`) shape stays square.
#[inline]
pub fn inner_radius(corner_radius: f32, border_width: f32) -> f32 {
    if corner_radius <= 0.0 {
        0.0
    } else {
        (corner_radius - border_width).max(1.0)
    }
}

#[inline]
fn non_negative(v: f32) -> f32 {
    if v.is_finite() { v.max(0.0) } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::RoundnessLevel;

    fn paths(w: f32, h: f32, border: f32, ring: f32, level: RoundnessLevel) -> ShapePaths {
        ShapePaths::compute(Dimensions::new(w, h), border, ring, &level.config(), PerformanceTier::Balanced).unwrap()
    }

    // ── hit testing ──

    #[test]
    fn hit_test_excludes_cut_away_corners() {
        let p = paths(200.0, 120.0, 1.0, 2.0, RoundnessLevel::Rounded);
        let outer = p.outer();
        assert_eq!(outer.size, Dimensions::new(206.0, 126.0));

        assert!(p.contains(Vec2::new(103.0, 63.0)));
        assert!(p.contains(Vec2::new(0.5, 63.0)));
        assert!(p.contains(Vec2::new(103.0, 0.5)));
        assert!(!p.contains(Vec2::new(1.0, 1.0)));
        assert!(!p.contains(Vec2::new(205.0, 125.0)));
        assert!(!p.contains(Vec2::new(-1.0, 63.0)));
        assert!(!p.contains(Vec2::new(103.0, 127.0)));
    }

    #[test]
    fn flat_shapes_hit_their_whole_box() {
        let p = paths(50.0, 30.0, 0.0, 0.0, RoundnessLevel::Flat);
        assert!(p.contains(Vec2::zero()));
        assert!(p.contains(Vec2::new(50.0, 30.0)));
    }

    #[test]
    fn moderate_background_radius_is_nested() {
        let p = paths(200.0, 120.0, 1.0, 0.0, RoundnessLevel::Moderate);
        assert_eq!(p.background.radius, 21.0);
        assert_eq!(p.border.radius, 22.0);
        assert_eq!(p.border.size, Dimensions::new(202.0, 122.0));
        assert!(p.outer_ring.is_none());
    }

    #[test]
    fn pill_square_is_a_full_pill() {
        let p = paths(40.0, 40.0, 0.0, 0.0, RoundnessLevel::Pill);
        assert_eq!(p.background.radius, 20.0);
        assert_eq!(p.border.radius, 20.0);
    }

    #[test]
    fn background_is_inset_by_the_border_width() {
        let p = paths(100.0, 60.0, 3.0, 2.0, RoundnessLevel::Rounded);
        assert_eq!(p.border.origin, Vec2::splat(2.0));
        assert_eq!(p.background.origin, Vec2::splat(5.0));
        assert_eq!(p.background.origin - p.border.origin, Vec2::splat(3.0));
        assert_eq!(p.border.size.width - p.background.size.width, 6.0);
    }

    #[test]
    fn outer_ring_contains_the_border() {
        let p = paths(100.0, 60.0, 2.0, 4.0, RoundnessLevel::Moderate);
        let ring = p.outer_ring.as_ref().unwrap();
        assert_eq!(ring.origin, Vec2::zero());
        assert!(ring.origin.x < p.border.origin.x);
        assert!(ring.size.width > p.border.size.width && ring.size.height > p.border.size.height);
        assert_eq!(ring.size, p.visual_size());
        assert_eq!(ring.radius, 26.0);
    }

    #[test]
    fn thicker_border_never_grows_the_background_radius() {
        for &level in RoundnessLevel::ALL {
            let mut previous = f32::INFINITY;
            for step in 0..40 {
                let border = step as f32 * 0.75;
                let r = paths(160.0, 90.0, border, 0.0, level).background.radius;
                assert!(r <= previous, "{level} border={border}");
                if level != RoundnessLevel::Flat {
                    assert!(r >= 1.0);
                }
                previous = r;
            }
        }
    }

    #[test]
    fn thicker_border_strictly_shrinks_until_the_floor() {
        let radii: Vec<f32> = (0..5).map(|b| paths(200.0, 200.0, b as f32 * 4.0, 0.0, RoundnessLevel::Moderate).background.radius).collect();
        assert_eq!(radii, vec![22.0, 18.0, 14.0, 10.0, 6.0]);
        assert_eq!(inner_radius(22.0, 40.0), 1.0);
        assert_eq!(inner_radius(0.0, 2.0), 0.0);
    }

    #[test]
    fn empty_dimensions_produce_nothing() {
        let c = RoundnessLevel::Moderate.config();
        assert!(ShapePaths::compute(Dimensions::zero(), 1.0, 1.0, &c, PerformanceTier::Balanced).is_none());
    }

    #[test]
    fn spread_background_is_centered() {
        let p = paths(100.0, 50.0, 1.0, 0.0, RoundnessLevel::Moderate);
        let s = p.spread_background(4.0).unwrap();
        assert_eq!(s.size, Dimensions::new(108.0, 58.0));
        assert_eq!(s.origin, Vec2::splat(-3.0));
        assert_eq!(s.radius, 25.0);
    }
}

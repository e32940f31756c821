use crate::coords::Vec2;

use super::Color;

/// Gradient geometry.
///
/// Angles follow the CSS convention: degrees, `0` points up, clockwise.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum GradientKind {
    Linear { angle: f32 },
    Radial,
    Conic { angle: f32 },
}

/// A single color stop. `position` is a percentage in `[0, 100]`, `opacity` in `[0, 1]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GradientStop {
    pub color: Color,
    pub position: f32,
    pub opacity: f32,
}

impl GradientStop {
    #[inline]
    pub fn new(color: Color, position: f32, opacity: f32) -> Self {
        Self {
            color,
            position: clamp_or(position, 0.0, 100.0, 0.0),
            opacity: clamp_or(opacity, 0.0, 1.0, 1.0),
        }
    }

    /// Color with the stop opacity folded into alpha.
    #[inline]
    pub fn effective_color(self) -> Color {
        self.color.multiply_alpha(self.opacity)
    }
}

/// Fully resolved gradient.
///
/// Stops are kept in the order they were declared; positions are not required
/// to be monotonic (backends clamp as SVG does).
#[derive(Debug, Clone, PartialEq)]
pub struct GradientDescriptor {
    pub kind: GradientKind,
    pub stops: Vec<GradientStop>,
}

impl GradientDescriptor {
    pub fn new(kind: GradientKind, stops: Vec<GradientStop>) -> Self {
        Self { kind, stops }
    }

    /// Linear gradient with evenly spaced, fully opaque stops.
    pub fn linear(angle: f32, colors: &[Color]) -> Self {
        Self::new(GradientKind::Linear { angle }, even_stops(colors))
    }

    pub fn radial(colors: &[Color]) -> Self {
        Self::new(GradientKind::Radial, even_stops(colors))
    }

    /// Replaces every stop color with `color`, keeping positions and opacities.
    #[must_use]
    pub fn with_overlay(mut self, color: Color) -> Self {
        for stop in &mut self.stops {
            stop.color = color;
        }
        self
    }

    /// `true` if at least one stop can contribute pixels.
    pub fn is_visible(&self) -> bool {
        self.stops.iter().any(|s| s.opacity > 0.0 && s.color.a > 0.0)
    }

    /// Start/end points of a linear gradient in object-bounding-box units.
    ///
    /// The gradient line passes through the box center (0.5, 0.5).
    pub fn linear_endpoints(angle: f32) -> (Vec2, Vec2) {
        let rad = angle.to_radians();
        let dir = Vec2::new(rad.sin(), -rad.cos()) * 0.5;
        let center = Vec2::splat(0.5);
        (center - dir, center + dir)
    }
}

/// Evenly spaced stops: `0, 100/(n-1), …, 100`. A single color sits at 0.
pub fn even_position(index: usize, count: usize) -> f32 {
    if count <= 1 {
        0.0
    } else {
        index as f32 * 100.0 / (count - 1) as f32
    }
}

fn even_stops(colors: &[Color]) -> Vec<GradientStop> {
    colors
        .iter()
        .enumerate()
        .map(|(i, &c)| GradientStop::new(c, even_position(i, colors.len()), 1.0))
        .collect()
}

#[inline]
fn clamp_or(v: f32, lo: f32, hi: f32, fallback: f32) -> f32 {
    if v.is_finite() { v.clamp(lo, hi) } else { fallback }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-5 && (a.y - b.y).abs() < 1e-5
    }

    #[test]
    fn even_positions_cover_full_range() {
        assert_eq!(even_position(0, 3), 0.0);
        assert_eq!(even_position(1, 3), 50.0);
        assert_eq!(even_position(2, 3), 100.0);
        assert_eq!(even_position(0, 1), 0.0);
    }

    #[test]
    fn stop_values_are_clamped() {
        let s = GradientStop::new(Color::black(), 140.0, f32::NAN);
        assert_eq!(s.position, 100.0);
        assert_eq!(s.opacity, 1.0);
    }

    #[test]
    fn linear_endpoints_follow_css_angles() {
        // 180deg = "to bottom"
        let (a, b) = GradientDescriptor::linear_endpoints(180.0);
        assert!(approx(a, Vec2::new(0.5, 0.0)));
        assert!(approx(b, Vec2::new(0.5, 1.0)));
        // 90deg = "to right"
        let (a, b) = GradientDescriptor::linear_endpoints(90.0);
        assert!(approx(a, Vec2::new(0.0, 0.5)));
        assert!(approx(b, Vec2::new(1.0, 0.5)));
    }

    #[test]
    fn overlay_keeps_opacity() {
        let g = GradientDescriptor::new(
            GradientKind::Radial,
            vec![
                GradientStop::new(Color::black(), 0.0, 0.2),
                GradientStop::new(Color::white(), 100.0, 0.0),
            ],
        )
        .with_overlay(Color::from_rgb_hex(0xff0000));
        assert!(g.stops.iter().all(|s| s.color == Color::from_rgb_hex(0xff0000)));
        assert_eq!(g.stops[0].opacity, 0.2);
        assert!(g.is_visible());
    }
}

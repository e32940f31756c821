use core::fmt::Write;

use crate::coords::{Dimensions, Vec2};
use crate::style::RoundnessConfig;

use super::quality::{resolve_points, PerformanceTier};

/// Emitted coordinates are rounded to this many milli-units per unit (3 decimals).
const PRECISION: f64 = 1000.0;

/// One closed superellipse outline.
///
/// `d` is SVG path data in the shape's local space; `origin` is where the
/// outline's box starts inside that space (the `inset` it was generated with).
#[derive(Debug, Clone, PartialEq)]
pub struct PathOutline {
    pub d: String,
    pub origin: Vec2,
    pub size: Dimensions,
    /// Corner radius after clamping to half the smaller side.
    pub radius: f32,
    pub points_per_corner: u32,
}

/// The four corners in clockwise drawing order, starting top-right.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Corner {
    TopRight,
    BottomRight,
    BottomLeft,
    TopLeft,
}

impl Corner {
    pub const CLOCKWISE: [Corner; 4] = [Corner::TopRight, Corner::BottomRight, Corner::BottomLeft, Corner::TopLeft];

    /// Angle (degrees, +y down) where this corner's quarter-turn begins.
    pub const fn start_degrees(self) -> f64 {
        match self {
            Corner::TopRight => -90.0,
            Corner::BottomRight => 0.0,
            Corner::BottomLeft => 90.0,
            Corner::TopLeft => 180.0,
        }
    }

    /// Exact unit vector at the start of the quarter-turn.
    const fn start_axis(self) -> (f64, f64) {
        match self {
            Corner::TopRight => (0.0, -1.0),
            Corner::BottomRight => (1.0, 0.0),
            Corner::BottomLeft => (0.0, 1.0),
            Corner::TopLeft => (-1.0, 0.0),
        }
    }

    /// Exact unit vector at the end of the quarter-turn.
    const fn end_axis(self) -> (f64, f64) {
        match self {
            Corner::TopRight => (1.0, 0.0),
            Corner::BottomRight => (0.0, 1.0),
            Corner::BottomLeft => (-1.0, 0.0),
            Corner::TopLeft => (0.0, -1.0),
        }
    }

    /// Center of the corner curve for a `w × h` box at `(o, o)` with radius `r`.
    pub fn center(self, o: f64, w: f64, h: f64, r: f64) -> (f64, f64) {
        match self {
            Corner::TopRight => (o + w - r, o + r),
            Corner::BottomRight => (o + w - r, o + h - r),
            Corner::BottomLeft => (o + r, o + h - r),
            Corner::TopLeft => (o + r, o + r),
        }
    }

    /// The right-angle box corner the curve approaches as smoothing grows.
    pub fn vertex(self, (cx, cy): (f64, f64), r: f64) -> (f64, f64) {
        let (ax, ay) = self.start_axis();
        let (bx, by) = self.end_axis();
        (cx + r * (ax + bx), cy + r * (ay + by))
    }

    /// `count` points along this corner's superellipse arc, both ends included.
    ///
    /// The end points use exact axis vectors so they meet the straight edges
    /// without rounding drift.
    pub fn samples(self, center: (f64, f64), r: f64, n: f64, count: u32) -> impl Iterator<Item = (f64, f64)> {
        let count = count.max(2);
        let last = count - 1;
        let start = self.start_degrees();
        (0..count).map(move |i| {
            let (cx, cy) = center;
            if i == 0 {
                let (ux, uy) = self.start_axis();
                (cx + r * ux, cy + r * uy)
            } else if i == last {
                let (ux, uy) = self.end_axis();
                (cx + r * ux, cy + r * uy)
            } else {
                let theta = (start + 90.0 * f64::from(i) / f64::from(last)).to_radians();
                superellipse_point(cx, cy, r, n, theta)
            }
        })
    }
}

/// Point at angle `theta` (radians) on the superellipse `|x|^n + |y|^n = r^n`
/// centered at `(cx, cy)`.
///
/// Larger `n` pushes the point toward the bounding square; `n = 2` is a circle.
#[inline]
pub fn superellipse_point(cx: f64, cy: f64, r: f64, n: f64, theta: f64) -> (f64, f64) {
    let (sin, cos) = theta.sin_cos();
    let k = (cos.abs().powf(n) + sin.abs().powf(n)).powf(1.0 / n);
    (cx + r * cos / k, cy + r * sin / k)
}

/// Corner radius actually used for a box: `min(requested, min(w, h) / 2)`.
#[inline]
pub fn effective_radius(size: Dimensions, requested: f32) -> f32 {
    requested.max(0.0).min(size.min_side() / 2.0)
}

/// Generates the closed outline of a `size` box whose top-left sits at `(inset, inset)`.
///
/// Returns `None` for an empty box. Output is bit-exact for identical inputs.
pub fn generate(
    size: Dimensions,
    config: &RoundnessConfig,
    tier: PerformanceTier,
    inset: f32,
) -> Option<PathOutline> {
    if size.is_empty() || !inset.is_finite() {
        return None;
    }
    let config = config.sanitized();
    let radius = effective_radius(size, config.corner_radius);
    let points = resolve_points(&config, size, tier);

    let o = f64::from(inset);
    let (w, h) = (f64::from(size.width), f64::from(size.height));
    let r = f64::from(radius);
    let n = f64::from(config.smoothing);

    let mut writer = PathWriter::default();
    writer.push(o + r, o);
    for corner in Corner::CLOCKWISE {
        let center = corner.center(o, w, h, r);
        for (x, y) in corner.samples(center, r, n, points) {
            writer.push(x, y);
        }
    }

    Some(PathOutline {
        d: writer.finish(),
        origin: Vec2::splat(inset),
        size,
        radius,
        points_per_corner: points,
    })
}

/// Collects rounded points, dropping consecutive duplicates, and closes the loop.
#[derive(Default)]
struct PathWriter {
    points: Vec<(i64, i64)>,
}

impl PathWriter {
    fn push(&mut self, x: f64, y: f64) {
        let p = (to_milli(x), to_milli(y));
        if self.points.last() != Some(&p) {
            self.points.push(p);
        }
    }

    fn finish(mut self) -> String {
        if let Some(&first) = self.points.first() {
            if self.points.last() != Some(&first) || self.points.len() == 1 {
                self.points.push(first);
            }
        }
        let mut d = String::with_capacity(self.points.len() * 16);
        for (i, &(x, y)) in self.points.iter().enumerate() {
            d.push_str(if i == 0 { "M" } else { " L" });
            write_milli(&mut d, x);
            d.push(' ');
            write_milli(&mut d, y);
        }
        d.push_str(" Z");
        d
    }
}

#[inline]
fn to_milli(v: f64) -> i64 {
    (v * PRECISION).round() as i64
}

/// Writes `v` rounded to 3 decimals in the same compact form as path data.
pub(crate) fn write_number(out: &mut String, v: f32) {
    write_milli(out, to_milli(f64::from(v)));
}

/// Writes a milli-unit integer as a compact decimal: no exponent, no `-0`,
/// no trailing zeros.
fn write_milli(out: &mut String, v: i64) {
    if v < 0 {
        out.push('-');
    }
    let a = v.unsigned_abs();
    let (int, frac) = (a / 1000, a % 1000);
    let _ = write!(out, "{int}");
    if frac != 0 {
        let digits = format!("{frac:03}");
        out.push('.');
        out.push_str(digits.trim_end_matches('0'));
    }
}

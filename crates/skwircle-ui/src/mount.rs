//! Flicker-free first paint.
//!
//! A shape whose size is known before layout (explicit pixel sizes or an
//! initial-dimensions hint) can paint immediately. A fluid shape cannot: its
//! outline depends on a measurement that only arrives a frame later, so it
//! stays invisible until then and fades in.

use std::time::Duration;

use serde::Deserialize;
use skwircle_engine::coords::Dimensions;

/// Length of the fade-in after the first measurement.
pub const FADE_DURATION: Duration = Duration::from_millis(200);

// ── SizeHint ──────────────────────────────────────────────────────────────

/// How a shape's width or height is determined.
///
/// Configuration accepts a number (pixels) or a string: `"120px"`, `"50%"`,
/// `"auto"`, `"fill"`, `"grow"`, `"natural"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(from = "SizeHintRepr")]
pub enum SizeHint {
    /// Content-driven (default).
    #[default]
    Natural,
    /// Fixed pixel size.
    Px(f32),
    /// Fraction of the parent's dimension (0.0 = 0 %, 1.0 = 100 %).
    Pct(f32),
    /// Left to the layout engine.
    Auto,
    /// Equal to the parent's dimension.
    Fill,
    /// Takes the space left over by siblings.
    Grow,
}

impl SizeHint {
    /// Parses the string forms; unknown strings fall back to `Natural`.
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        let number = |t: &str| t.trim().parse::<f32>().ok().filter(|v| v.is_finite() && *v >= 0.0);

        if let Some(pct) = s.strip_suffix('%') {
            if let Some(v) = number(pct) {
                return SizeHint::Pct(v / 100.0);
            }
        } else if let Some(v) = number(s.strip_suffix("px").unwrap_or(s)) {
            return SizeHint::Px(v);
        }

        match s.to_ascii_lowercase().as_str() {
            "auto" => SizeHint::Auto,
            "fill" => SizeHint::Fill,
            "grow" => SizeHint::Grow,
            "natural" | "content" => SizeHint::Natural,
            _ => {
                if cfg!(debug_assertions) {
                    log::debug!("unknown size hint {s:?}, using natural");
                }
                SizeHint::Natural
            }
        }
    }

    /// Size on one axis given the parent's extent and the natural content size.
    ///
    /// Fluid hints fall back to `natural` when the parent is unbounded.
    #[inline]
    pub fn resolve(self, parent_dim: f32, natural: f32) -> f32 {
        let bounded = parent_dim.is_finite();
        match self {
            SizeHint::Natural | SizeHint::Auto => natural,
            SizeHint::Px(v) => v,
            SizeHint::Pct(p) if bounded => parent_dim * p,
            SizeHint::Fill | SizeHint::Grow if bounded => parent_dim,
            SizeHint::Pct(_) | SizeHint::Fill | SizeHint::Grow => natural,
        }
    }

    /// `true` if the final size is only known after layout.
    #[inline]
    pub fn is_fluid(self) -> bool {
        matches!(self, SizeHint::Pct(_) | SizeHint::Auto | SizeHint::Fill | SizeHint::Grow)
    }

    #[inline]
    pub fn px(self) -> Option<f32> {
        match self {
            SizeHint::Px(v) => Some(v),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SizeHintRepr {
    Px(f32),
    Named(String),
}

impl From<SizeHintRepr> for SizeHint {
    fn from(repr: SizeHintRepr) -> Self {
        match repr {
            SizeHintRepr::Px(v) if v.is_finite() => SizeHint::Px(v.max(0.0)),
            SizeHintRepr::Px(_) => SizeHint::Natural,
            SizeHintRepr::Named(s) => SizeHint::parse(&s),
        }
    }
}

// ── classification ────────────────────────────────────────────────────────

/// Sizing information available before the first layout.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SizingHints {
    pub width: SizeHint,
    pub height: SizeHint,
    pub initial_dimensions: Option<Dimensions>,
    /// Fill mode: the shape stretches to its parent on both axes.
    pub fill: bool,
}

impl SizingHints {
    /// Size known without measuring: the initial hint, else both pixel sizes.
    pub fn known_dimensions(&self) -> Option<Dimensions> {
        if let Some(d) = self.initial_dimensions.filter(|d| !d.is_empty()) {
            return Some(d);
        }
        match (self.width.px(), self.height.px()) {
            (Some(w), Some(h)) if !self.fill => Some(Dimensions::new(w, h)).filter(|d| !d.is_empty()),
            _ => None,
        }
    }
}

/// Mount behavior decided once per shape.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MountPolicy {
    /// Geometry is known up front; paint on the first frame.
    Immediate,
    /// Hide until measured, then fade in over [`FADE_DURATION`].
    FadeIn,
}

/// Decides the mount policy from the sizing hints alone.
pub fn classify(hints: &SizingHints) -> MountPolicy {
    if hints.known_dimensions().is_some() {
        return MountPolicy::Immediate;
    }
    // Fluid and content-driven sizes both need a measurement first.
    MountPolicy::FadeIn
}

// ── MountGate ─────────────────────────────────────────────────────────────

/// Visibility phase of a [`MountGate`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum GatePhase {
    Hidden,
    FadingIn { elapsed: f32 },
    Visible,
}

/// Hidden → FadingIn → Visible state machine driving shape opacity.
#[derive(Debug, Clone, PartialEq)]
pub struct MountGate {
    policy: MountPolicy,
    phase: GatePhase,
}

impl MountGate {
    pub fn new(policy: MountPolicy) -> Self {
        let phase = match policy {
            MountPolicy::Immediate => GatePhase::Visible,
            MountPolicy::FadeIn => GatePhase::Hidden,
        };
        Self { policy, phase }
    }

    #[inline]
    pub fn policy(&self) -> MountPolicy {
        self.policy
    }

    #[inline]
    pub fn phase(&self) -> GatePhase {
        self.phase
    }

    /// The first measurement arrived. Starts the fade if still hidden.
    pub fn on_measured(&mut self) {
        if self.phase == GatePhase::Hidden {
            self.phase = GatePhase::FadingIn { elapsed: 0.0 };
        }
    }

    /// Advances a running fade by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        if let GatePhase::FadingIn { elapsed } = self.phase {
            let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
            let elapsed = elapsed + dt;
            self.phase = if elapsed >= FADE_DURATION.as_secs_f32() {
                GatePhase::Visible
            } else {
                GatePhase::FadingIn { elapsed }
            };
        }
    }

    /// Current opacity in `[0, 1]`, linear over the fade.
    pub fn opacity(&self) -> f32 {
        match self.phase {
            GatePhase::Hidden => 0.0,
            GatePhase::FadingIn { elapsed } => (elapsed / FADE_DURATION.as_secs_f32()).clamp(0.0, 1.0),
            GatePhase::Visible => 1.0,
        }
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.phase == GatePhase::Visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── SizeHint ──

    #[test]
    fn size_hint_strings() {
        assert_eq!(SizeHint::parse("100%"), SizeHint::Pct(1.0));
        assert_eq!(SizeHint::parse("120px"), SizeHint::Px(120.0));
        assert_eq!(SizeHint::parse("64"), SizeHint::Px(64.0));
        assert_eq!(SizeHint::parse("Fill"), SizeHint::Fill);
        assert_eq!(SizeHint::parse("auto"), SizeHint::Auto);
        assert_eq!(SizeHint::parse("wat"), SizeHint::Natural);
        assert!(SizeHint::parse("50%").is_fluid());
        assert!(!SizeHint::parse("50").is_fluid());
    }

    #[test]
    fn size_hint_serde() {
        let hints: Vec<SizeHint> = serde_json::from_str(r#"[48, "50%", "grow"]"#).unwrap();
        assert_eq!(hints, vec![SizeHint::Px(48.0), SizeHint::Pct(0.5), SizeHint::Grow]);
    }

    #[test]
    fn fluid_hints_fall_back_when_unbounded() {
        assert_eq!(SizeHint::Pct(0.5).resolve(200.0, 10.0), 100.0);
        assert_eq!(SizeHint::Pct(0.5).resolve(f32::INFINITY, 10.0), 10.0);
        assert_eq!(SizeHint::Fill.resolve(80.0, 10.0), 80.0);
    }

    // ── classify ──

    #[test]
    fn pixel_sizes_mount_immediately() {
        let hints = SizingHints { width: SizeHint::Px(48.0), height: SizeHint::Px(48.0), ..Default::default() };
        assert_eq!(classify(&hints), MountPolicy::Immediate);
    }

    #[test]
    fn initial_hint_mounts_immediately() {
        let hints = SizingHints {
            width: SizeHint::Pct(1.0),
            initial_dimensions: Some(Dimensions::new(300.0, 80.0)),
            ..Default::default()
        };
        assert_eq!(classify(&hints), MountPolicy::Immediate);
    }

    #[test]
    fn fluid_and_content_sizes_fade_in() {
        let fluid = SizingHints { width: SizeHint::Pct(1.0), height: SizeHint::Px(40.0), ..Default::default() };
        assert_eq!(classify(&fluid), MountPolicy::FadeIn);
        assert_eq!(classify(&SizingHints::default()), MountPolicy::FadeIn);

        let fill = SizingHints { width: SizeHint::Px(10.0), height: SizeHint::Px(10.0), fill: true, ..Default::default() };
        assert_eq!(classify(&fill), MountPolicy::FadeIn);
    }

    // ── MountGate ──

    #[test]
    fn fade_in_waits_for_measurement() {
        let mut gate = MountGate::new(MountPolicy::FadeIn);
        gate.advance(1.0);
        assert_eq!(gate.opacity(), 0.0);

        gate.on_measured();
        assert_eq!(gate.opacity(), 0.0);
        gate.advance(0.1);
        assert!((gate.opacity() - 0.5).abs() < 1e-5);
        gate.advance(0.1);
        assert!(gate.is_visible());
        assert_eq!(gate.opacity(), 1.0);
    }

    #[test]
    fn immediate_gate_is_visible_and_ignores_measurement() {
        let mut gate = MountGate::new(MountPolicy::Immediate);
        gate.on_measured();
        gate.advance(0.05);
        assert_eq!(gate.phase(), GatePhase::Visible);
    }
}

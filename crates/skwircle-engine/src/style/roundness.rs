use serde::Deserialize;

use super::note_fallback;

/// Resolved corner parameters for one render pass.
///
/// `corner_radius` is the *requested* radius; the path generator clamps it to
/// half the smaller box side at use time.
#[derive(Debug, Copy, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RoundnessConfig {
    pub smoothing: f32,
    pub corner_radius: f32,
    pub points_per_corner: u32,
    #[serde(default)]
    pub adaptive_quality: bool,
}

impl RoundnessConfig {
    pub const MIN_POINTS_PER_CORNER: u32 = 2;

    /// Creates a config, repairing out-of-range values instead of rejecting them.
    ///
    /// - non-positive or non-finite smoothing falls back to the moderate exponent
    /// - negative or non-finite radius becomes `0`
    /// - fewer than two points per corner becomes `2`
    pub fn new(smoothing: f32, corner_radius: f32, points_per_corner: u32) -> Self {
        Self {
            smoothing,
            corner_radius,
            points_per_corner,
            adaptive_quality: false,
        }
        .sanitized()
    }

    #[must_use]
    pub fn sanitized(self) -> Self {
        let smoothing = if self.smoothing.is_finite() && self.smoothing > 0.0 {
            self.smoothing
        } else {
            RoundnessLevel::Moderate.config().smoothing
        };
        let corner_radius = if self.corner_radius.is_finite() { self.corner_radius.max(0.0) } else { 0.0 };
        Self {
            smoothing,
            corner_radius,
            points_per_corner: self.points_per_corner.max(Self::MIN_POINTS_PER_CORNER),
            adaptive_quality: self.adaptive_quality,
        }
    }

    #[inline]
    #[must_use]
    pub fn with_radius(self, corner_radius: f32) -> Self {
        Self { corner_radius: corner_radius.max(0.0), ..self }
    }

    #[inline]
    #[must_use]
    pub fn with_adaptive_quality(self, adaptive_quality: bool) -> Self {
        Self { adaptive_quality, ..self }
    }
}

impl Default for RoundnessConfig {
    fn default() -> Self {
        RoundnessLevel::default().config()
    }
}

/// Discrete roundness scale, from square corners to a full stadium.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum RoundnessLevel {
    Flat,
    Sharp,
    Subtle,
    #[default]
    Moderate,
    Rounded,
    ExtraRounded,
    Pill,
}

named_variants!(RoundnessLevel {
    Flat => "flat",
    Sharp => "sharp",
    Subtle => "subtle",
    Moderate => "moderate",
    Rounded => "rounded",
    ExtraRounded => "extra-rounded",
    Pill => "pill",
});

impl RoundnessLevel {
    /// Radius used by [`RoundnessLevel::Pill`]. Larger than any practical
    /// half-dimension, so clamping always yields a stadium.
    pub const PILL_RADIUS: f32 = 9999.0;

    /// Fixed `(smoothing, radius, points)` triple for this level.
    pub const fn triple(self) -> (f32, f32, u32) {
        match self {
            RoundnessLevel::Flat => (2.0, 0.0, 2),
            RoundnessLevel::Sharp => (3.0, 6.0, 6),
            RoundnessLevel::Subtle => (4.0, 12.0, 8),
            RoundnessLevel::Moderate => (5.5, 22.0, 10),
            RoundnessLevel::Rounded => (7.0, 32.0, 12),
            RoundnessLevel::ExtraRounded => (8.5, 48.0, 14),
            RoundnessLevel::Pill => (10.0, Self::PILL_RADIUS, 16),
        }
    }

    pub const fn config(self) -> RoundnessConfig {
        let (smoothing, corner_radius, points_per_corner) = self.triple();
        RoundnessConfig {
            smoothing,
            corner_radius,
            points_per_corner,
            adaptive_quality: false,
        }
    }

    /// Like [`from_name`](Self::from_name), but unknown names resolve to `Moderate`.
    pub fn from_name_or_default(name: &str) -> Self {
        Self::from_name(name).unwrap_or_else(|| {
            note_fallback("roundness level", name, Self::default().name());
            Self::default()
        })
    }
}

/// Requested roundness: a named level or an explicit override triple.
#[derive(Debug, Copy, Clone, PartialEq, Deserialize)]
#[serde(from = "RoundnessRepr")]
pub enum Roundness {
    Level(RoundnessLevel),
    Custom(RoundnessConfig),
}

impl Roundness {
    pub fn custom(smoothing: f32, corner_radius: f32, points_per_corner: u32) -> Self {
        Roundness::Custom(RoundnessConfig::new(smoothing, corner_radius, points_per_corner))
    }

    pub fn resolve(&self) -> RoundnessConfig {
        match *self {
            Roundness::Level(level) => level.config(),
            Roundness::Custom(config) => config.sanitized(),
        }
    }
}

impl Default for Roundness {
    fn default() -> Self {
        Roundness::Level(RoundnessLevel::default())
    }
}

impl From<RoundnessLevel> for Roundness {
    fn from(level: RoundnessLevel) -> Self {
        Roundness::Level(level)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RoundnessRepr {
    Named(String),
    Custom(RoundnessConfig),
}

impl From<RoundnessRepr> for Roundness {
    fn from(repr: RoundnessRepr) -> Self {
        match repr {
            RoundnessRepr::Named(name) => Roundness::Level(RoundnessLevel::from_name_or_default(&name)),
            RoundnessRepr::Custom(config) => Roundness::Custom(config.sanitized()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_level_has_a_valid_triple() {
        for &level in RoundnessLevel::ALL {
            let c = level.config();
            assert!(c.smoothing > 0.0, "{level}");
            assert!(c.corner_radius >= 0.0, "{level}");
            assert!(c.points_per_corner >= 2, "{level}");
        }
    }

    #[test]
    fn moderate_matches_documented_values() {
        let c = RoundnessLevel::Moderate.config();
        assert_eq!((c.smoothing, c.corner_radius), (5.5, 22.0));
    }

    #[test]
    fn unknown_level_falls_back_to_moderate() {
        assert_eq!(RoundnessLevel::from_name_or_default("squarish"), RoundnessLevel::Moderate);
        assert_eq!(RoundnessLevel::from_name_or_default("Extra-Rounded"), RoundnessLevel::ExtraRounded);
        assert!("squarish".parse::<RoundnessLevel>().is_err());
    }

    #[test]
    fn custom_triples_are_repaired() {
        let c = Roundness::custom(-1.0, -4.0, 0).resolve();
        assert_eq!(c.smoothing, 5.5);
        assert_eq!(c.corner_radius, 0.0);
        assert_eq!(c.points_per_corner, 2);
    }

    #[test]
    fn deserializes_names_and_overrides() {
        let named: Roundness = serde_json::from_str("\"pill\"").unwrap();
        assert_eq!(named, Roundness::Level(RoundnessLevel::Pill));

        let unknown: Roundness = serde_json::from_str("\"blobby\"").unwrap();
        assert_eq!(unknown, Roundness::Level(RoundnessLevel::Moderate));

        let custom: Roundness =
            serde_json::from_str(r#"{ "smoothing": 4, "corner-radius": 10, "points-per-corner": 6 }"#).unwrap();
        assert_eq!(custom.resolve().corner_radius, 10.0);
    }
}

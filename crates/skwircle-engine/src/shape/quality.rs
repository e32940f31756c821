use serde::Deserialize;

use crate::coords::Dimensions;
use crate::style::{named_variants, note_fallback, RoundnessConfig};

/// Upper bound on samples per corner, whatever the size and tier.
pub const MAX_POINTS_PER_CORNER: u32 = 64;

/// Trade-off between curve fidelity and recomputation cost.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum PerformanceTier {
    #[default]
    Balanced,
    HighPerformance,
    UltraSmooth,
}

named_variants!(PerformanceTier {
    Balanced => "balanced",
    HighPerformance => "high-performance",
    UltraSmooth => "ultra-smooth",
});

impl PerformanceTier {
    /// Scale applied on top of the size multiplier.
    pub const fn multiplier(self) -> f32 {
        match self {
            PerformanceTier::Balanced => 1.0,
            PerformanceTier::HighPerformance => 0.6,
            PerformanceTier::UltraSmooth => 1.5,
        }
    }

    /// Samples per corner never drop below this when adaptive quality is on.
    pub const fn floor(self) -> u32 {
        match self {
            PerformanceTier::Balanced => 4,
            PerformanceTier::HighPerformance => 3,
            PerformanceTier::UltraSmooth => 8,
        }
    }
}

impl<'de> Deserialize<'de> for PerformanceTier {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let name = String::deserialize(d)?;
        Ok(PerformanceTier::from_name(&name).unwrap_or_else(|| {
            note_fallback("performance tier", &name, "balanced");
            PerformanceTier::Balanced
        }))
    }
}

/// `clamp(min(w, h) / 100, 0.5, 2)`.
#[inline]
pub fn size_multiplier(size: Dimensions) -> f32 {
    (size.min_side() / 100.0).clamp(0.5, 2.0)
}

/// Number of samples per corner for `config` at `size`.
///
/// Without adaptive quality this is the configured count. With it, the count
/// is scaled by the size multiplier and the tier, then held inside
/// `[tier.floor(), MAX_POINTS_PER_CORNER]`.
pub fn resolve_points(config: &RoundnessConfig, size: Dimensions, tier: PerformanceTier) -> u32 {
    let base = config.points_per_corner.max(RoundnessConfig::MIN_POINTS_PER_CORNER);
    if !config.adaptive_quality {
        return base;
    }
    let scaled = (base as f32 * size_multiplier(size) * tier.multiplier()).round() as u32;
    scaled.clamp(tier.floor(), MAX_POINTS_PER_CORNER)
}

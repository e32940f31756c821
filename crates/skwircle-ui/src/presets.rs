use skwircle_engine::style::{ColorToken, RoundnessLevel, ShadowPreset};

use crate::config::{Overflow, ShapeConfig};
use crate::constraints::Edges;
use crate::mount::SizeHint;

/// Ready-made shape configurations for common components.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShapePreset {
    Card,
    Button,
    Badge,
    Avatar,
    Input,
    Chip,
}

impl ShapePreset {
    pub const ALL: &'static [ShapePreset] = &[
        ShapePreset::Card,
        ShapePreset::Button,
        ShapePreset::Badge,
        ShapePreset::Avatar,
        ShapePreset::Input,
        ShapePreset::Chip,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            ShapePreset::Card => "card",
            ShapePreset::Button => "button",
            ShapePreset::Badge => "badge",
            ShapePreset::Avatar => "avatar",
            ShapePreset::Input => "input",
            ShapePreset::Chip => "chip",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL.iter().copied().find(|p| p.name().eq_ignore_ascii_case(name))
    }

    pub fn config(self) -> ShapeConfig {
        let base = ShapeConfig::new();
        match self {
            ShapePreset::Card => base
                .roundness(RoundnessLevel::Rounded)
                .border(1.0, ColorToken::Border)
                .background(ColorToken::SurfaceRaised)
                .shadow(ShadowPreset::Medium)
                .padding(Edges::all(16.0)),
            ShapePreset::Button => base
                .roundness(RoundnessLevel::Moderate)
                .background(ColorToken::Primary)
                .background_hover(ColorToken::Secondary)
                .shadow(ShadowPreset::Small)
                .padding(Edges::symmetric(10.0, 16.0)),
            ShapePreset::Badge => base
                .roundness(RoundnessLevel::Pill)
                .background(ColorToken::Accent)
                .padding(Edges::symmetric(2.0, 8.0)),
            ShapePreset::Avatar => base
                .roundness(RoundnessLevel::Pill)
                .ring(2.0, ColorToken::Primary)
                .background(ColorToken::Muted)
                .overflow(Overflow::Hidden)
                .size(SizeHint::Px(48.0), SizeHint::Px(48.0)),
            ShapePreset::Input => base
                .roundness(RoundnessLevel::Subtle)
                .border(1.0, ColorToken::Border)
                .border_hover(ColorToken::Primary)
                .background(ColorToken::Surface)
                .padding(Edges::symmetric(8.0, 12.0)),
            ShapePreset::Chip => base
                .roundness(RoundnessLevel::Pill)
                .border(1.0, ColorToken::Border)
                .background(ColorToken::Muted)
                .padding(Edges::symmetric(4.0, 12.0)),
        }
    }
}

impl core::fmt::Display for ShapePreset {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl From<ShapePreset> for ShapeConfig {
    fn from(preset: ShapePreset) -> Self {
        preset.config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mount::{classify, MountPolicy};

    #[test]
    fn names_round_trip() {
        for &preset in ShapePreset::ALL {
            assert_eq!(ShapePreset::from_name(preset.name()), Some(preset));
        }
        assert_eq!(ShapePreset::from_name(" CARD "), Some(ShapePreset::Card));
        assert_eq!(ShapePreset::from_name("tooltip"), None);
    }

    #[test]
    fn only_avatar_mounts_immediately() {
        for &preset in ShapePreset::ALL {
            let expected = if preset == ShapePreset::Avatar { MountPolicy::Immediate } else { MountPolicy::FadeIn };
            assert_eq!(classify(&preset.config().sizing_hints()), expected, "{preset}");
        }
    }

    #[test]
    fn pill_presets_use_pill_radius() {
        for preset in [ShapePreset::Badge, ShapePreset::Avatar, ShapePreset::Chip] {
            assert_eq!(preset.config().roundness_config().corner_radius, RoundnessLevel::PILL_RADIUS);
        }
    }
}

//! Public configuration surface of a squircle shape.
//!
//! Every field has a default, so `{}` is a valid configuration (a moderate,
//! borderless surface-colored shape sized by its content). Unknown preset and
//! token names degrade to their documented defaults instead of failing.

use serde::Deserialize;
use skwircle_engine::coords::Dimensions;
use skwircle_engine::shape::PerformanceTier;
use skwircle_engine::style::{
    ColorSource, ColorToken, GradientSpec, Roundness, RoundnessConfig, ShadowSpec,
};

use crate::constraints::Edges;
use crate::mount::{SizeHint, SizingHints};

/// What happens to child content that extends past the background outline.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Deserialize)]
#[serde(from = "String")]
pub enum Overflow {
    #[default]
    Visible,
    Hidden,
    Clip,
}

impl Overflow {
    /// `true` if content is clipped to the background outline.
    #[inline]
    pub fn clips(self) -> bool {
        matches!(self, Overflow::Hidden | Overflow::Clip)
    }
}

impl From<String> for Overflow {
    fn from(s: String) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "visible" => Overflow::Visible,
            "hidden" => Overflow::Hidden,
            "clip" => Overflow::Clip,
            other => {
                if cfg!(debug_assertions) {
                    log::debug!("unknown overflow {other:?}, using visible");
                }
                Overflow::Visible
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct BorderConfig {
    pub width: f32,
    pub color: ColorSource,
    pub hover_color: Option<ColorSource>,
    /// Replaces the solid color when set.
    pub gradient: GradientSpec,
}

impl Default for BorderConfig {
    fn default() -> Self {
        Self {
            width: 0.0,
            color: ColorToken::Border.into(),
            hover_color: None,
            gradient: GradientSpec::None,
        }
    }
}

/// Outer ring drawn outside the border, e.g. a focus or avatar ring.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RingConfig {
    pub width: f32,
    pub color: ColorSource,
    pub opacity: f32,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self { width: 0.0, color: ColorToken::Primary.into(), opacity: 1.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct BackgroundConfig {
    pub color: ColorSource,
    pub hover_color: Option<ColorSource>,
    /// Drawn over the solid fill.
    pub gradient: GradientSpec,
    /// Replaces every gradient stop color, keeping stop opacities.
    pub gradient_overlay: Option<ColorSource>,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            color: ColorToken::Surface.into(),
            hover_color: None,
            gradient: GradientSpec::None,
            gradient_overlay: None,
        }
    }
}

/// Full configuration of one squircle shape.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ShapeConfig {
    pub roundness: Roundness,
    /// Overrides the adaptive-quality flag of the resolved roundness.
    pub adaptive_quality: Option<bool>,
    pub performance: PerformanceTier,
    pub border: BorderConfig,
    pub ring: RingConfig,
    pub background: BackgroundConfig,
    pub shadow: ShadowSpec,
    pub overflow: Overflow,
    pub fill: bool,
    pub width: SizeHint,
    pub height: SizeHint,
    pub padding: Edges,
    pub initial_dimensions: Option<Dimensions>,
}

impl ShapeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Roundness for path generation, with the adaptive-quality override applied.
    pub fn roundness_config(&self) -> RoundnessConfig {
        let base = self.roundness.resolve();
        match self.adaptive_quality {
            Some(adaptive) => base.with_adaptive_quality(adaptive),
            None => base,
        }
    }

    pub fn sizing_hints(&self) -> SizingHints {
        SizingHints {
            width: self.width,
            height: self.height,
            initial_dimensions: self.initial_dimensions.map(|d| Dimensions::new(d.width, d.height)),
            fill: self.fill,
        }
    }

    #[inline]
    pub fn border_width(&self) -> f32 {
        non_negative(self.border.width)
    }

    #[inline]
    pub fn ring_width(&self) -> f32 {
        non_negative(self.ring.width)
    }

    /// Distance from the outer edge of the visual to the background box.
    #[inline]
    pub fn total_inset(&self) -> f32 {
        self.border_width() + self.ring_width()
    }

    // ── builders ──────────────────────────────────────────────────────────

    pub fn roundness(mut self, roundness: impl Into<Roundness>) -> Self {
        self.roundness = roundness.into();
        self
    }

    pub fn adaptive(mut self, tier: PerformanceTier) -> Self {
        self.adaptive_quality = Some(true);
        self.performance = tier;
        self
    }

    pub fn border(mut self, width: f32, color: impl Into<ColorSource>) -> Self {
        self.border.width = width;
        self.border.color = color.into();
        self
    }

    pub fn border_hover(mut self, color: impl Into<ColorSource>) -> Self {
        self.border.hover_color = Some(color.into());
        self
    }

    pub fn border_gradient(mut self, gradient: impl Into<GradientSpec>) -> Self {
        self.border.gradient = gradient.into();
        self
    }

    pub fn ring(mut self, width: f32, color: impl Into<ColorSource>) -> Self {
        self.ring.width = width;
        self.ring.color = color.into();
        self
    }

    pub fn background(mut self, color: impl Into<ColorSource>) -> Self {
        self.background.color = color.into();
        self
    }

    pub fn background_hover(mut self, color: impl Into<ColorSource>) -> Self {
        self.background.hover_color = Some(color.into());
        self
    }

    pub fn background_gradient(mut self, gradient: impl Into<GradientSpec>) -> Self {
        self.background.gradient = gradient.into();
        self
    }

    pub fn shadow(mut self, shadow: impl Into<ShadowSpec>) -> Self {
        self.shadow = shadow.into();
        self
    }

    pub fn overflow(mut self, overflow: Overflow) -> Self {
        self.overflow = overflow;
        self
    }

    pub fn size(mut self, width: SizeHint, height: SizeHint) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn padding(mut self, edges: Edges) -> Self {
        self.padding = edges;
        self
    }

    pub fn initial_dimensions(mut self, width: f32, height: f32) -> Self {
        self.initial_dimensions = Some(Dimensions::new(width, height));
        self
    }
}

#[inline]
fn non_negative(v: f32) -> f32 {
    if v.is_finite() { v.max(0.0) } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skwircle_engine::paint::Color;
    use skwircle_engine::style::{GradientPreset, RoundnessLevel, ShadowPreset};

    #[test]
    fn empty_object_is_default() {
        let config: ShapeConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ShapeConfig::default());
        assert_eq!(config.roundness_config(), RoundnessLevel::Moderate.config());
    }

    #[test]
    fn full_config_parses() {
        let json = r##"{
            "roundness": "extra-rounded",
            "adaptive-quality": true,
            "performance": "ultra-smooth",
            "border": { "width": 2, "color": "#ff0000", "hover-color": "primary" },
            "ring": { "width": 3, "opacity": 0.5 },
            "background": { "color": "surface-raised", "gradient": "ocean", "gradient-overlay": "white" },
            "shadow": "large",
            "overflow": "hidden",
            "width": "100%",
            "height": 120,
            "padding": [8, 16],
            "initial-dimensions": { "width": 320, "height": 120 }
        }"##;
        let config: ShapeConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.roundness, Roundness::Level(RoundnessLevel::ExtraRounded));
        assert!(config.roundness_config().adaptive_quality);
        assert_eq!(config.performance, PerformanceTier::UltraSmooth);
        assert_eq!(config.border.color, ColorSource::Raw(Color::from_rgb_hex(0xff0000)));
        assert_eq!(config.border.hover_color, Some(ColorSource::Token(ColorToken::Primary)));
        assert_eq!(config.ring.color, ColorSource::Token(ColorToken::Primary));
        assert_eq!(config.background.gradient, GradientSpec::Preset(GradientPreset::Ocean));
        // "white" is neither a token nor color syntax.
        assert_eq!(config.background.gradient_overlay, Some(ColorSource::Token(ColorToken::Transparent)));
        assert_eq!(config.shadow, ShadowSpec::Preset(ShadowPreset::Large));
        assert_eq!(config.overflow, Overflow::Hidden);
        assert_eq!(config.width, SizeHint::Pct(1.0));
        assert_eq!(config.height, SizeHint::Px(120.0));
        assert_eq!(config.padding, Edges::symmetric(8.0, 16.0));
        assert_eq!(config.total_inset(), 5.0);
    }

    #[test]
    fn unknown_names_degrade() {
        let json = r#"{ "roundness": "blobby", "shadow": "huge", "overflow": "scroll", "performance": "turbo" }"#;
        let config: ShapeConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.roundness, Roundness::Level(RoundnessLevel::Moderate));
        assert_eq!(config.shadow, ShadowSpec::None);
        assert_eq!(config.overflow, Overflow::Visible);
        assert_eq!(config.performance, PerformanceTier::Balanced);
    }

    #[test]
    fn builders_set_nested_fields() {
        let config = ShapeConfig::new()
            .border(2.0, ColorToken::Accent)
            .border_gradient(GradientPreset::Sunset)
            .ring(1.5, ColorToken::Primary)
            .overflow(Overflow::Clip);
        assert_eq!(config.border.gradient, GradientSpec::Preset(GradientPreset::Sunset));
        assert_eq!(config.border.color, ColorSource::Token(ColorToken::Accent));
        assert_eq!(config.total_inset(), 3.5);
        assert!(config.overflow.clips());
    }

    #[test]
    fn negative_widths_count_as_zero() {
        let config = ShapeConfig::new().border(-3.0, ColorToken::Border).ring(f32::NAN, ColorToken::Primary);
        assert_eq!(config.total_inset(), 0.0);
    }
}

use serde::Deserialize;

use crate::paint::{Color, ShadowDescriptor};

use super::{note_fallback, ColorSource, ColorToken, TokenPalette};

/// Built-in drop shadows, smallest to largest plus a colored glow.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShadowPreset {
    Subtle,
    Small,
    Medium,
    Large,
    XLarge,
    Glow,
}

named_variants!(ShadowPreset {
    Subtle => "subtle",
    Small => "small",
    Medium => "medium",
    Large => "large",
    XLarge => "x-large",
    Glow => "glow",
});

impl ShadowPreset {
    pub fn descriptor(self, palette: &dyn TokenPalette) -> ShadowDescriptor {
        let ink = Color::black();
        match self {
            ShadowPreset::Subtle => ShadowDescriptor::new(0.0, 1.0, 3.0, 0.0, ink, 0.12),
            ShadowPreset::Small => ShadowDescriptor::new(0.0, 2.0, 6.0, 0.0, ink, 0.15),
            ShadowPreset::Medium => ShadowDescriptor::new(0.0, 4.0, 12.0, 0.0, ink, 0.18),
            ShadowPreset::Large => ShadowDescriptor::new(0.0, 8.0, 24.0, -2.0, ink, 0.2),
            ShadowPreset::XLarge => ShadowDescriptor::new(0.0, 16.0, 40.0, -4.0, ink, 0.24),
            ShadowPreset::Glow => {
                ShadowDescriptor::new(0.0, 0.0, 16.0, 2.0, palette.color(ColorToken::Primary), 0.35)
            }
        }
    }
}

/// Caller-supplied shadow. Omitted fields default to an invisible shadow
/// at the origin, so `{ "opacity": 0.3 }` is already meaningful.
#[derive(Debug, Copy, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct CustomShadow {
    pub offset_x: f32,
    pub offset_y: f32,
    pub blur_radius: f32,
    pub spread: f32,
    pub color: ColorSource,
    pub opacity: f32,
}

impl Default for CustomShadow {
    fn default() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            blur_radius: 0.0,
            spread: 0.0,
            color: ColorSource::Raw(Color::black()),
            opacity: 0.0,
        }
    }
}

/// Requested shadow.
#[derive(Debug, Copy, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "ShadowRepr")]
pub enum ShadowSpec {
    #[default]
    None,
    Preset(ShadowPreset),
    Custom(CustomShadow),
}

impl From<ShadowPreset> for ShadowSpec {
    fn from(p: ShadowPreset) -> Self {
        ShadowSpec::Preset(p)
    }
}

impl ShadowSpec {
    /// `"none"` and unknown names resolve to [`ShadowSpec::None`].
    pub fn from_name(name: &str) -> Self {
        if name.trim().eq_ignore_ascii_case("none") {
            return ShadowSpec::None;
        }
        match ShadowPreset::from_name(name) {
            Some(p) => ShadowSpec::Preset(p),
            None => {
                note_fallback("shadow preset", name, "none");
                ShadowSpec::None
            }
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ShadowRepr {
    Named(String),
    Custom { custom: CustomShadow },
}

impl From<ShadowRepr> for ShadowSpec {
    fn from(repr: ShadowRepr) -> Self {
        match repr {
            ShadowRepr::Named(name) => ShadowSpec::from_name(&name),
            ShadowRepr::Custom { custom } => ShadowSpec::Custom(custom),
        }
    }
}

/// Resolves a shadow request. Returns `None` when nothing would be visible.
pub fn resolve_shadow(spec: &ShadowSpec, palette: &dyn TokenPalette) -> Option<ShadowDescriptor> {
    let shadow = match spec {
        ShadowSpec::None => return None,
        ShadowSpec::Preset(p) => p.descriptor(palette),
        ShadowSpec::Custom(c) => ShadowDescriptor::new(
            c.offset_x,
            c.offset_y,
            c.blur_radius,
            c.spread,
            c.color.resolve(palette),
            c.opacity,
        ),
    };
    shadow.is_visible().then_some(shadow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::DefaultPalette;

    #[test]
    fn presets_are_visible_and_grow() {
        let p = DefaultPalette::Light;
        let blurs: Vec<f32> = [ShadowPreset::Subtle, ShadowPreset::Small, ShadowPreset::Medium, ShadowPreset::Large]
            .iter()
            .map(|s| resolve_shadow(&ShadowSpec::Preset(*s), &p).unwrap().blur_radius)
            .collect();
        assert!(blurs.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn zero_opacity_custom_is_absent() {
        let spec = ShadowSpec::Custom(CustomShadow { blur_radius: 10.0, ..CustomShadow::default() });
        assert!(resolve_shadow(&spec, &DefaultPalette::Light).is_none());
    }

    #[test]
    fn custom_is_passed_through() {
        let spec = ShadowSpec::Custom(CustomShadow {
            offset_x: 2.0,
            offset_y: 3.0,
            blur_radius: 4.0,
            spread: 1.0,
            color: ColorToken::Danger.into(),
            opacity: 0.5,
        });
        let s = resolve_shadow(&spec, &DefaultPalette::Light).unwrap();
        assert_eq!((s.offset_x, s.offset_y, s.blur_radius, s.spread), (2.0, 3.0, 4.0, 1.0));
        assert_eq!(s.color, DefaultPalette::Light.color(ColorToken::Danger));
        assert_eq!(s.opacity, 0.5);
    }

    #[test]
    fn unknown_names_are_absent() {
        assert_eq!(ShadowSpec::from_name("huge"), ShadowSpec::None);
        assert_eq!(ShadowSpec::from_name("X-Large"), ShadowSpec::Preset(ShadowPreset::XLarge));
    }

    #[test]
    fn deserializes_custom_with_defaults() {
        let spec: ShadowSpec = serde_json::from_str(r#"{ "custom": { "offset-y": 6, "opacity": 0.3 } }"#).unwrap();
        let s = resolve_shadow(&spec, &DefaultPalette::Light).unwrap();
        assert_eq!(s.offset_y, 6.0);
        assert_eq!(s.color, Color::black());
    }
}

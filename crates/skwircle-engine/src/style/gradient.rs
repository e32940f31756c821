use serde::Deserialize;

use crate::paint::gradient::even_position;
use crate::paint::{Color, GradientDescriptor, GradientKind, GradientStop};

use super::{note_fallback, ColorSource, TokenPalette};

/// Built-in gradients.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum GradientPreset {
    Sunset,
    Ocean,
    Aurora,
    Midnight,
    Glass,
    Metallic,
    Ember,
    Iridescent,
}

named_variants!(GradientPreset {
    Sunset => "sunset",
    Ocean => "ocean",
    Aurora => "aurora",
    Midnight => "midnight",
    Glass => "glass",
    Metallic => "metallic",
    Ember => "ember",
    Iridescent => "iridescent",
});

impl GradientPreset {
    pub fn descriptor(self) -> GradientDescriptor {
        let hex = Color::from_rgb_hex;
        match self {
            GradientPreset::Sunset => {
                GradientDescriptor::linear(135.0, &[hex(0xff7e5f), hex(0xfeb47b)])
            }
            GradientPreset::Ocean => {
                GradientDescriptor::linear(180.0, &[hex(0x2e3192), hex(0x1bffff)])
            }
            GradientPreset::Aurora => {
                GradientDescriptor::linear(120.0, &[hex(0x00c9a7), hex(0x845ec2), hex(0xff6f91)])
            }
            GradientPreset::Midnight => {
                GradientDescriptor::linear(180.0, &[hex(0x232526), hex(0x414345)])
            }
            GradientPreset::Glass => GradientDescriptor::new(
                GradientKind::Linear { angle: 180.0 },
                vec![
                    GradientStop::new(Color::white(), 0.0, 0.35),
                    GradientStop::new(Color::white(), 60.0, 0.08),
                    GradientStop::new(Color::white(), 100.0, 0.0),
                ],
            ),
            GradientPreset::Metallic => GradientDescriptor::new(
                GradientKind::Linear { angle: 160.0 },
                vec![
                    GradientStop::new(hex(0xd7d2cc), 0.0, 1.0),
                    GradientStop::new(hex(0xf5f5f5), 45.0, 1.0),
                    GradientStop::new(hex(0x8e9eab), 100.0, 1.0),
                ],
            ),
            GradientPreset::Ember => GradientDescriptor::radial(&[hex(0xffd200), hex(0xf7971e), hex(0xc0392b)]),
            GradientPreset::Iridescent => GradientDescriptor::new(
                GradientKind::Conic { angle: 0.0 },
                vec![
                    GradientStop::new(hex(0xff9a9e), 0.0, 1.0),
                    GradientStop::new(hex(0xfad0c4), 25.0, 1.0),
                    GradientStop::new(hex(0xa1c4fd), 50.0, 1.0),
                    GradientStop::new(hex(0xc2e9fb), 75.0, 1.0),
                    GradientStop::new(hex(0xff9a9e), 100.0, 1.0),
                ],
            ),
        }
    }
}

/// Gradient geometry names accepted by custom gradients.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum GradientKindName {
    #[default]
    Linear,
    Radial,
    Conic,
}

named_variants!(GradientKindName {
    Linear => "linear",
    Radial => "radial",
    Conic => "conic",
});

impl<'de> Deserialize<'de> for GradientKindName {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let name = String::deserialize(d)?;
        Ok(GradientKindName::from_name(&name).unwrap_or_else(|| {
            note_fallback("gradient kind", &name, "linear");
            GradientKindName::Linear
        }))
    }
}

/// Caller-supplied gradient in parallel-array form.
///
/// The arrays may disagree in length: a missing position is spread evenly,
/// a missing opacity is fully opaque, and extra entries are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CustomGradient {
    #[serde(default)]
    pub kind: GradientKindName,
    #[serde(default = "default_angle")]
    pub angle: f32,
    pub colors: Vec<ColorSource>,
    #[serde(default)]
    pub positions: Vec<f32>,
    #[serde(default)]
    pub opacities: Vec<f32>,
}

fn default_angle() -> f32 {
    180.0
}

impl CustomGradient {
    pub fn new(kind: GradientKindName, angle: f32, colors: Vec<ColorSource>) -> Self {
        Self { kind, angle, colors, positions: Vec::new(), opacities: Vec::new() }
    }

    /// Normalizes into a descriptor. `None` when there are no colors.
    pub fn normalize(&self, palette: &dyn TokenPalette) -> Option<GradientDescriptor> {
        if self.colors.is_empty() {
            return None;
        }
        let n = self.colors.len();
        let stops = self
            .colors
            .iter()
            .enumerate()
            .map(|(i, source)| {
                let position = self.positions.get(i).copied().unwrap_or_else(|| even_position(i, n));
                let opacity = self.opacities.get(i).copied().unwrap_or(1.0);
                GradientStop::new(source.resolve(palette), position, opacity)
            })
            .collect();
        let kind = match self.kind {
            GradientKindName::Linear => GradientKind::Linear { angle: self.angle },
            GradientKindName::Radial => GradientKind::Radial,
            GradientKindName::Conic => GradientKind::Conic { angle: self.angle },
        };
        Some(GradientDescriptor::new(kind, stops))
    }
}

/// Requested gradient.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "GradientRepr")]
pub enum GradientSpec {
    #[default]
    None,
    Preset(GradientPreset),
    Custom(CustomGradient),
}

impl From<GradientPreset> for GradientSpec {
    fn from(p: GradientPreset) -> Self {
        GradientSpec::Preset(p)
    }
}

impl GradientSpec {
    /// `"none"` and unknown names resolve to [`GradientSpec::None`].
    pub fn from_name(name: &str) -> Self {
        if name.trim().eq_ignore_ascii_case("none") {
            return GradientSpec::None;
        }
        match GradientPreset::from_name(name) {
            Some(p) => GradientSpec::Preset(p),
            None => {
                note_fallback("gradient preset", name, "none");
                GradientSpec::None
            }
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum GradientRepr {
    Named(String),
    Custom { custom: CustomGradient },
}

impl From<GradientRepr> for GradientSpec {
    fn from(repr: GradientRepr) -> Self {
        match repr {
            GradientRepr::Named(name) => GradientSpec::from_name(&name),
            GradientRepr::Custom { custom } => GradientSpec::Custom(custom),
        }
    }
}

/// Resolves a gradient request. `None` means "no gradient layer".
pub fn resolve_gradient(spec: &GradientSpec, palette: &dyn TokenPalette) -> Option<GradientDescriptor> {
    match spec {
        GradientSpec::None => None,
        GradientSpec::Preset(p) => Some(p.descriptor()),
        GradientSpec::Custom(custom) => custom.normalize(palette),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{ColorToken, DefaultPalette};

    #[test]
    fn every_preset_has_at_least_two_visible_stops() {
        for &p in GradientPreset::ALL {
            let d = p.descriptor();
            assert!(d.stops.len() >= 2, "{p}");
            assert!(d.is_visible(), "{p}");
        }
    }

    #[test]
    fn none_and_unknown_names_are_absent() {
        assert_eq!(GradientSpec::from_name("none"), GradientSpec::None);
        assert_eq!(GradientSpec::from_name("plasma"), GradientSpec::None);
        assert_eq!(GradientSpec::from_name("Ocean"), GradientSpec::Preset(GradientPreset::Ocean));
        assert!(resolve_gradient(&GradientSpec::None, &DefaultPalette::Light).is_none());
    }

    #[test]
    fn custom_is_passed_through() {
        let custom = CustomGradient {
            kind: GradientKindName::Radial,
            angle: 0.0,
            colors: vec![ColorToken::Primary.into(), Color::white().into()],
            positions: vec![10.0, 90.0],
            opacities: vec![0.5, 1.0],
        };
        let d = resolve_gradient(&GradientSpec::Custom(custom), &DefaultPalette::Light).unwrap();
        assert_eq!(d.kind, GradientKind::Radial);
        assert_eq!(d.stops[0].position, 10.0);
        assert_eq!(d.stops[0].opacity, 0.5);
        assert_eq!(d.stops[0].color, DefaultPalette::Light.color(ColorToken::Primary));
    }

    #[test]
    fn mismatched_arrays_fill_missing_entries() {
        let custom = CustomGradient {
            kind: GradientKindName::Linear,
            angle: 90.0,
            colors: vec![Color::black().into(), Color::white().into(), Color::black().into()],
            positions: vec![0.0],
            opacities: vec![0.25, 0.5, 0.75, 1.0],
        };
        let d = custom.normalize(&DefaultPalette::Light).unwrap();
        assert_eq!(d.stops.len(), 3);
        assert_eq!(d.stops[1].position, 50.0);
        assert_eq!(d.stops[2].position, 100.0);
        assert_eq!(d.stops[2].opacity, 0.75);

        let sparse = CustomGradient {
            opacities: vec![],
            ..custom
        };
        assert!(sparse.normalize(&DefaultPalette::Light).unwrap().stops.iter().all(|s| s.opacity == 1.0));
    }

    #[test]
    fn empty_custom_is_absent() {
        let custom = CustomGradient::new(GradientKindName::Linear, 0.0, vec![]);
        assert!(custom.normalize(&DefaultPalette::Dark).is_none());
    }

    #[test]
    fn deserializes_named_and_custom() {
        let named: GradientSpec = serde_json::from_str("\"sunset\"").unwrap();
        assert_eq!(named, GradientSpec::Preset(GradientPreset::Sunset));

        let custom: GradientSpec = serde_json::from_str(
            r##"{ "custom": { "kind": "conic", "colors": ["accent", "#fff"], "opacities": [0.4] } }"##,
        )
        .unwrap();
        let d = resolve_gradient(&custom, &DefaultPalette::Light).unwrap();
        assert_eq!(d.kind, GradientKind::Conic { angle: 180.0 });
        assert_eq!(d.stops[0].opacity, 0.4);
        assert_eq!(d.stops[1].opacity, 1.0);
    }
}

use serde::Deserialize;

use crate::paint::Color;

use super::note_fallback;

/// Semantic color tokens understood by the shape engine.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ColorToken {
    Primary,
    Secondary,
    Accent,
    Surface,
    SurfaceRaised,
    Muted,
    Border,
    Foreground,
    Success,
    Warning,
    Danger,
    Transparent,
}

named_variants!(ColorToken {
    Primary => "primary",
    Secondary => "secondary",
    Accent => "accent",
    Surface => "surface",
    SurfaceRaised => "surface-raised",
    Muted => "muted",
    Border => "border",
    Foreground => "foreground",
    Success => "success",
    Warning => "warning",
    Danger => "danger",
    Transparent => "transparent",
});

/// Token → color lookup supplied by the host theme.
pub trait TokenPalette {
    fn color(&self, token: ColorToken) -> Color;
}

/// Built-in palette so the engine works without a host theme.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum DefaultPalette {
    #[default]
    Light,
    Dark,
}

impl TokenPalette for DefaultPalette {
    fn color(&self, token: ColorToken) -> Color {
        let hex = match (self, token) {
            (_, ColorToken::Transparent) => return Color::transparent(),
            (_, ColorToken::Primary) => 0x3b82f6,
            (_, ColorToken::Secondary) => 0x8b5cf6,
            (_, ColorToken::Accent) => 0xf59e0b,
            (_, ColorToken::Success) => 0x22c55e,
            (_, ColorToken::Warning) => 0xeab308,
            (_, ColorToken::Danger) => 0xef4444,
            (DefaultPalette::Light, ColorToken::Surface) => 0xffffff,
            (DefaultPalette::Light, ColorToken::SurfaceRaised) => 0xf8fafc,
            (DefaultPalette::Light, ColorToken::Muted) => 0xe2e8f0,
            (DefaultPalette::Light, ColorToken::Border) => 0xcbd5e1,
            (DefaultPalette::Light, ColorToken::Foreground) => 0x0f172a,
            (DefaultPalette::Dark, ColorToken::Surface) => 0x0f172a,
            (DefaultPalette::Dark, ColorToken::SurfaceRaised) => 0x1e293b,
            (DefaultPalette::Dark, ColorToken::Muted) => 0x334155,
            (DefaultPalette::Dark, ColorToken::Border) => 0x475569,
            (DefaultPalette::Dark, ColorToken::Foreground) => 0xf8fafc,
        };
        Color::from_rgb_hex(hex)
    }
}

/// A color given either as a semantic token or as a concrete value.
#[derive(Debug, Copy, Clone, PartialEq, Deserialize)]
#[serde(from = "String")]
pub enum ColorSource {
    Token(ColorToken),
    Raw(Color),
}

impl ColorSource {
    /// Token name first, then raw color syntax. Anything else becomes transparent.
    pub fn parse_or_default(s: &str) -> Self {
        if let Some(token) = ColorToken::from_name(s) {
            return ColorSource::Token(token);
        }
        match Color::parse(s) {
            Ok(color) => ColorSource::Raw(color),
            Err(err) => {
                note_fallback("color", s, "transparent");
                log::trace!("color parse failed: {err}");
                ColorSource::Token(ColorToken::Transparent)
            }
        }
    }

    pub fn resolve(&self, palette: &dyn TokenPalette) -> Color {
        match *self {
            ColorSource::Token(token) => palette.color(token),
            ColorSource::Raw(color) => color,
        }
    }
}

impl From<String> for ColorSource {
    fn from(s: String) -> Self {
        Self::parse_or_default(&s)
    }
}

impl From<ColorToken> for ColorSource {
    fn from(token: ColorToken) -> Self {
        ColorSource::Token(token)
    }
}

impl From<Color> for ColorSource {
    fn from(color: Color) -> Self {
        ColorSource::Raw(color)
    }
}

/// Pointer interaction state of one shape instance.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum HoverState {
    #[default]
    Rest,
    Hovered,
}

impl HoverState {
    /// Next state given whether the pointer is inside the shape.
    #[inline]
    #[must_use]
    pub fn next(self, pointer_inside: bool) -> Self {
        if pointer_inside { HoverState::Hovered } else { HoverState::Rest }
    }

    #[inline]
    pub fn is_hovered(self) -> bool {
        self == HoverState::Hovered
    }
}

/// Rest color with an optional hover replacement.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HoverColor {
    pub rest: ColorSource,
    pub hover: Option<ColorSource>,
}

impl HoverColor {
    pub fn new(rest: impl Into<ColorSource>) -> Self {
        Self { rest: rest.into(), hover: None }
    }

    #[must_use]
    pub fn on_hover(mut self, hover: impl Into<ColorSource>) -> Self {
        self.hover = Some(hover.into());
        self
    }
}

/// Picks the hover color only when hovered *and* one was supplied.
pub fn resolve_color(state: HoverState, colors: &HoverColor, palette: &dyn TokenPalette) -> Color {
    let source = match (state, colors.hover) {
        (HoverState::Hovered, Some(hover)) => hover,
        _ => colors.rest,
    };
    source.resolve(palette)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_parse_before_raw_colors() {
        assert_eq!(ColorSource::parse_or_default("primary"), ColorSource::Token(ColorToken::Primary));
        assert_eq!(
            ColorSource::parse_or_default("#000"),
            ColorSource::Raw(Color::black())
        );
        assert_eq!(
            ColorSource::parse_or_default("not-a-color"),
            ColorSource::Token(ColorToken::Transparent)
        );
    }

    #[test]
    fn every_token_resolves_in_both_palettes() {
        for &token in ColorToken::ALL {
            let light = DefaultPalette::Light.color(token);
            let dark = DefaultPalette::Dark.color(token);
            assert_eq!(light.is_transparent(), token == ColorToken::Transparent);
            assert_eq!(dark.is_transparent(), token == ColorToken::Transparent);
        }
    }

    // ── hover ─────────────────────────────────────────────────────────────

    #[test]
    fn hover_state_machine() {
        let s = HoverState::Rest.next(true);
        assert!(s.is_hovered());
        assert_eq!(s.next(true), HoverState::Hovered);
        assert_eq!(s.next(false), HoverState::Rest);
    }

    #[test]
    fn hovered_uses_hover_color_when_present() {
        let colors = HoverColor::new(ColorToken::Primary).on_hover(Color::white());
        let p = DefaultPalette::Light;
        assert_eq!(resolve_color(HoverState::Hovered, &colors, &p), Color::white());
        assert_eq!(resolve_color(HoverState::Rest, &colors, &p), p.color(ColorToken::Primary));
    }

    #[test]
    fn hovered_without_hover_color_falls_back_to_rest() {
        let colors = HoverColor::new(Color::black());
        assert_eq!(
            resolve_color(HoverState::Hovered, &colors, &DefaultPalette::Dark),
            Color::black()
        );
    }
}

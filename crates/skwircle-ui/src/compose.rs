//! Layer composition: resolved style + outlines → ordered fill layers.
//!
//! Pure; no state, no logging. Layers are listed back to front:
//! shadow, outer ring, border, background, background gradient.

use skwircle_engine::coords::{Rect, Vec2};
use skwircle_engine::paint::{Color, GradientDescriptor, Paint, ShadowDescriptor};
use skwircle_engine::shape::{PathOutline, ShapePaths};
use skwircle_engine::style::{
    resolve_color, resolve_gradient, resolve_shadow, HoverColor, HoverState, TokenPalette,
};

use crate::config::{Overflow, ShapeConfig};
use crate::constraints::{inset_rect, Edges};

/// Concrete paints for one shape in one hover state.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStyle {
    pub border: Paint,
    /// Ring color with the ring opacity folded into alpha.
    pub ring: Color,
    pub background: Color,
    pub background_gradient: Option<GradientDescriptor>,
    pub shadow: Option<ShadowDescriptor>,
    pub overflow: Overflow,
    pub padding: Edges,
}

impl ResolvedStyle {
    pub fn resolve(config: &ShapeConfig, hover: HoverState, palette: &dyn TokenPalette) -> Self {
        let border = match resolve_gradient(&config.border.gradient, palette) {
            Some(gradient) => Paint::Gradient(gradient),
            None => {
                let colors = HoverColor { rest: config.border.color, hover: config.border.hover_color };
                Paint::Solid(resolve_color(hover, &colors, palette))
            }
        };

        let ring_opacity = if config.ring.opacity.is_finite() { config.ring.opacity.clamp(0.0, 1.0) } else { 1.0 };
        let ring = config.ring.color.resolve(palette).multiply_alpha(ring_opacity);

        let background_colors = HoverColor { rest: config.background.color, hover: config.background.hover_color };
        let background = resolve_color(hover, &background_colors, palette);

        let background_gradient = resolve_gradient(&config.background.gradient, palette).map(|g| {
            match config.background.gradient_overlay {
                Some(overlay) => g.with_overlay(overlay.resolve(palette)),
                None => g,
            }
        });

        Self {
            border,
            ring,
            background,
            background_gradient,
            shadow: resolve_shadow(&config.shadow, palette),
            overflow: config.overflow,
            padding: config.padding.sanitized(),
        }
    }
}

/// Which pass a [`Layer`] belongs to.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum LayerRole {
    Shadow,
    OuterRing,
    Border,
    Background,
    BackgroundGradient,
}

/// One filled outline. `origin` is in the shape's local space.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub role: LayerRole,
    pub d: String,
    pub origin: Vec2,
    pub paint: Paint,
    pub opacity: f32,
    pub blur: f32,
}

impl Layer {
    fn fill(role: LayerRole, outline: &PathOutline, paint: Paint) -> Self {
        Self { role, d: outline.d.clone(), origin: outline.origin, paint, opacity: 1.0, blur: 0.0 }
    }
}

/// Clip region for child content, in the shape's local space.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentClip {
    pub d: String,
    pub origin: Vec2,
}

/// Output of [`compose`].
#[derive(Debug, Clone, PartialEq)]
pub struct ComposedShape {
    /// Back to front.
    pub layers: Vec<Layer>,
    /// Where child content goes: background box minus padding.
    pub content_rect: Rect,
    pub clip: Option<ContentClip>,
}

impl ComposedShape {
    pub fn roles(&self) -> impl Iterator<Item = LayerRole> + '_ {
        self.layers.iter().map(|l| l.role)
    }

    pub fn layer(&self, role: LayerRole) -> Option<&Layer> {
        self.layers.iter().find(|l| l.role == role)
    }
}

/// Builds the layer stack for `paths` painted with `style`.
pub fn compose(style: &ResolvedStyle, paths: &ShapePaths) -> ComposedShape {
    let mut layers = Vec::with_capacity(5);

    if let Some(shadow) = style.shadow.as_ref().filter(|s| s.is_visible()) {
        if let Some(outline) = paths.spread_background(shadow.spread) {
            layers.push(Layer {
                role: LayerRole::Shadow,
                d: outline.d,
                origin: outline.origin + shadow.offset(),
                paint: Paint::Solid(shadow.color),
                opacity: shadow.opacity,
                blur: shadow.blur_radius,
            });
        }
    }

    if let Some(ring) = &paths.outer_ring {
        if !style.ring.is_transparent() {
            layers.push(Layer::fill(LayerRole::OuterRing, ring, Paint::Solid(style.ring)));
        }
    }

    if paths.border_width > 0.0 && style.border.is_visible() {
        layers.push(Layer::fill(LayerRole::Border, &paths.border, style.border.clone()));
    }

    if !style.background.is_transparent() {
        layers.push(Layer::fill(LayerRole::Background, &paths.background, Paint::Solid(style.background)));
    }

    if let Some(gradient) = style.background_gradient.as_ref().filter(|g| g.is_visible()) {
        layers.push(Layer::fill(
            LayerRole::BackgroundGradient,
            &paths.background,
            Paint::Gradient(gradient.clone()),
        ));
    }

    let bg = &paths.background;
    let content_rect = inset_rect(Rect::from_origin_size(bg.origin, bg.size.to_vec2()), style.padding);
    let clip = style
        .overflow
        .clips()
        .then(|| ContentClip { d: bg.d.clone(), origin: bg.origin });

    ComposedShape { layers, content_rect, clip }
}

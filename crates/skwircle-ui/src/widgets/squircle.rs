use skwircle_engine::coords::{Dimensions, Rect, Vec2};
use skwircle_engine::scene::PathCmd;
use skwircle_engine::shape::ShapePaths;
use skwircle_engine::style::{HoverState, RoundnessConfig};

use crate::compose::{compose, ComposedShape, ResolvedStyle};
use crate::config::ShapeConfig;
use crate::constraints::{inset_rect, Constraints, LayoutCtx};
use crate::event::{EventResult, UiEvent};
use crate::mount::{classify, MountGate, SizeHint};
use crate::observer::{ElementId, ObserverHandle};
use crate::painter::Painter;
use crate::presets::ShapePreset;
use crate::scene::UpdateCtx;
use crate::widget::{Element, Widget};

/// A squircle-shaped surface with optional child content.
///
/// The widget is laid out at its full visual size (outer ring included); the
/// background box it observes is that rect minus border and ring on every side.
///
/// Lifecycle:
/// - first `update` registers with the scene's observer
/// - every published size change recomputes the outlines
/// - hover changes only restyle; outlines are kept
/// - dropping the widget releases the observer registration
///
/// ```rust,ignore
/// Squircle::new(ShapePreset::Button.config())
///     .child(Swatch::new(Vec2::new(80.0, 20.0), white))
///     .on_click(|| log::info!("clicked"))
/// ```
pub struct Squircle {
    config: ShapeConfig,
    roundness: RoundnessConfig,
    child: Option<Element>,
    on_click: Option<Box<dyn FnMut()>>,

    handle: Option<ObserverHandle>,
    dimensions: Dimensions,
    paths: Option<ShapePaths>,
    composed: Option<ComposedShape>,
    hover: HoverState,
    gate: MountGate,

    paths_dirty: bool,
    style_dirty: bool,
    recompute_count: u32,
}

impl Squircle {
    pub fn new(config: ShapeConfig) -> Self {
        let hints = config.sizing_hints();
        let gate = MountGate::new(classify(&hints));
        let dimensions = hints.known_dimensions().unwrap_or_default();
        Self {
            roundness: config.roundness_config(),
            config,
            child: None,
            on_click: None,
            handle: None,
            dimensions,
            paths: None,
            composed: None,
            hover: HoverState::Rest,
            gate,
            paths_dirty: true,
            style_dirty: true,
            recompute_count: 0,
        }
    }

    pub fn preset(preset: ShapePreset) -> Self {
        Self::new(preset.config())
    }

    pub fn child(mut self, child: impl Into<Element>) -> Self {
        self.child = Some(child.into());
        self
    }

    /// Callback invoked when the shape is clicked.
    pub fn on_click(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_click = Some(Box::new(f));
        self
    }

    /// Replaces the configuration. Outlines and style are rebuilt next update;
    /// the observer registration, measured size and fade state are kept.
    pub fn set_config(&mut self, config: ShapeConfig) {
        self.roundness = config.roundness_config();
        self.config = config;
        self.paths_dirty = true;
        self.style_dirty = true;
    }

    // ── queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn config(&self) -> &ShapeConfig {
        &self.config
    }

    /// Background box size last published by the observer (or the initial hint).
    #[inline]
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    #[inline]
    pub fn paths(&self) -> Option<&ShapePaths> {
        self.paths.as_ref()
    }

    #[inline]
    pub fn composed(&self) -> Option<&ComposedShape> {
        self.composed.as_ref()
    }

    #[inline]
    pub fn hover_state(&self) -> HoverState {
        self.hover
    }

    #[inline]
    pub fn gate(&self) -> &MountGate {
        &self.gate
    }

    #[inline]
    pub fn opacity(&self) -> f32 {
        self.gate.opacity()
    }

    /// How many times the outlines have been regenerated.
    #[inline]
    pub fn recompute_count(&self) -> u32 {
        self.recompute_count
    }

    #[inline]
    pub fn element_id(&self) -> Option<ElementId> {
        self.handle.as_ref().map(ObserverHandle::id)
    }

    // ── internal ──────────────────────────────────────────────────────────

    fn natural_size(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        let padding = self.config.padding.sanitized();
        self.child
            .as_ref()
            .map(|c| c.measure(constraints.shrink(padding), ctx))
            .map(|s| Vec2::new(s.x + padding.h(), s.y + padding.v()))
            .unwrap_or(Vec2::new(padding.h(), padding.v()))
    }

    /// Background box inside a visual rect.
    fn background_rect(&self, rect: Rect) -> Rect {
        rect.inset(self.config.total_inset())
    }

    /// Pointer test against the drawn outline; the layout rect until measured.
    fn hit(&self, rect: Rect, pos: Vec2) -> bool {
        rect.contains(pos) && self.paths.as_ref().is_none_or(|paths| paths.contains(pos - rect.origin))
    }

    fn recompute_paths(&mut self) {
        self.paths = ShapePaths::compute(
            self.dimensions,
            self.config.border_width(),
            self.config.ring_width(),
            &self.roundness,
            self.config.performance,
        );
        self.recompute_count += 1;
        self.paths_dirty = false;
        self.style_dirty = true;
        log::debug!(
            "squircle #{:?}: outlines for {}x{} ({} pts/corner)",
            self.element_id().map(ElementId::raw),
            self.dimensions.width,
            self.dimensions.height,
            self.paths.as_ref().map_or(0, |p| p.background.points_per_corner)
        );
    }
}

impl Widget for Squircle {
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        let inset = 2.0 * self.config.total_inset();
        let natural = self.natural_size(constraints, ctx);
        let (width, height) = if self.config.fill {
            (
                SizeHint::Fill.resolve(constraints.max.x - inset, natural.x),
                SizeHint::Fill.resolve(constraints.max.y - inset, natural.y),
            )
        } else {
            (
                self.config.width.resolve(constraints.max.x - inset, natural.x),
                self.config.height.resolve(constraints.max.y - inset, natural.y),
            )
        };
        constraints.constrain(Vec2::new(width.max(0.0) + inset, height.max(0.0) + inset))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let background = self.background_rect(rect);
        if let Some(handle) = &self.handle {
            painter.report_size(handle.id(), background.dimensions());
        }

        let opacity = self.gate.opacity();
        if opacity <= 0.0 {
            return;
        }
        let grouped = opacity < 1.0;
        if grouped {
            painter.push_opacity(opacity);
        }

        // Local space origin: outer ring top-left.
        let origin = rect.origin;
        match &self.composed {
            Some(shape) => {
                for layer in &shape.layers {
                    painter.fill_path(
                        PathCmd::new(layer.d.clone(), origin + layer.origin, layer.paint.clone())
                            .with_opacity(layer.opacity)
                            .with_blur(layer.blur),
                    );
                }
                if let Some(child) = &self.child {
                    let content = shape.content_rect.translate(origin);
                    match &shape.clip {
                        Some(clip) => {
                            painter.push_clip_path(clip.d.clone(), origin + clip.origin);
                            child.paint(painter, content);
                            painter.pop_clip();
                        }
                        None => child.paint(painter, content),
                    }
                }
            }
            // Not measured yet: content still lays out inside the background box.
            None => {
                if let Some(child) = &self.child {
                    child.paint(painter, inset_rect(background, self.config.padding.sanitized()));
                }
            }
        }

        if grouped {
            painter.pop_opacity();
        }
    }

    fn update(&mut self, ctx: &mut UpdateCtx<'_>) {
        if self.handle.is_none() {
            let handle = match self.config.sizing_hints().known_dimensions() {
                Some(known) => ctx.observer.observe_with(known),
                None => ctx.observer.observe(),
            };
            self.handle = Some(handle);
        }

        if let Some(update) = self.handle.as_mut().and_then(ObserverHandle::poll) {
            self.dimensions = update.dimensions;
            self.paths_dirty = true;
            if update.first_measurement {
                self.gate.on_measured();
            }
        }

        if self.paths_dirty {
            self.recompute_paths();
        }
        if self.style_dirty {
            let style = ResolvedStyle::resolve(&self.config, self.hover, ctx.palette);
            self.composed = self.paths.as_ref().map(|paths| compose(&style, paths));
            self.style_dirty = false;
        }

        self.gate.advance(ctx.dt);

        if let Some(child) = &mut self.child {
            child.update(ctx);
        }
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect, ctx: &LayoutCtx) -> EventResult {
        let content = match &self.composed {
            Some(shape) => shape.content_rect.translate(rect.origin),
            None => inset_rect(self.background_rect(rect), self.config.padding.sanitized()),
        };
        if let Some(child) = &mut self.child {
            if child.on_event(event, content, ctx).is_consumed() {
                return EventResult::Consumed;
            }
        }

        match event {
            UiEvent::Hover { pos } => {
                let next = self.hover.next(self.hit(rect, *pos));
                if next != self.hover {
                    self.hover = next;
                    self.style_dirty = true;
                }
                EventResult::Ignored
            }
            UiEvent::Click { pos } if self.hit(rect, *pos) => match &mut self.on_click {
                Some(f) => {
                    f();
                    EventResult::Consumed
                }
                None => EventResult::Ignored,
            },
            UiEvent::Click { .. } => EventResult::Ignored,
        }
    }
}

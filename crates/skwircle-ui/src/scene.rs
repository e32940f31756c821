use std::time::Duration;

use skwircle_engine::coords::{Dimensions, Rect, Vec2};
use skwircle_engine::scene::DrawList;
use skwircle_engine::style::{DefaultPalette, TokenPalette};
use skwircle_engine::time::{FrameClock, FrameTime};

use crate::constraints::{Constraints, LayoutCtx};
use crate::event::UiEvent;
use crate::observer::{ElementId, ObserverService};
use crate::painter::Painter;
use crate::widget::Element;

// ── UiInput ───────────────────────────────────────────────────────────────

/// Snapshot of input state for one UI frame.
#[derive(Debug, Clone, Default)]
pub struct UiInput {
    /// Current pointer position in logical pixels.
    pub mouse_pos: Vec2,
    /// `true` for exactly one frame when the primary button is released.
    pub mouse_clicked: bool,
}

impl UiInput {
    /// Pointer somewhere no widget will ever be.
    pub fn away() -> Self {
        Self { mouse_pos: Vec2::splat(f32::NEG_INFINITY), mouse_clicked: false }
    }

    pub fn at(x: f32, y: f32) -> Self {
        Self { mouse_pos: Vec2::new(x, y), mouse_clicked: false }
    }
}

// ── UpdateCtx ─────────────────────────────────────────────────────────────

/// Per-frame resources handed to [`Widget::update`](crate::widget::Widget::update).
pub struct UpdateCtx<'a> {
    /// Clamped frame delta in seconds.
    pub dt: f32,
    pub frame: FrameTime,
    pub observer: &'a ObserverService,
    pub palette: &'a dyn TokenPalette,
}

// ── UiScene ───────────────────────────────────────────────────────────────

/// Top-level coordinator that owns shared resources across frames.
///
/// Owns the observer service, the frame clock, the token palette and the
/// `DrawList` populated by [`frame`](Self::frame). The widget tree is retained
/// by the caller and passed in by reference every frame.
///
/// Frame order:
/// 1. publish coalesced size reports (`ObserverService::flush_frame`)
/// 2. `update` (poll sizes, recompute outlines, advance fades)
/// 3. measure + paint
/// 4. hover / click events
/// 5. forward this frame's size reports to the observer
///
/// ```rust,ignore
/// let mut ui = UiScene::new();
/// let mut root = Element::new(Squircle::new(ShapePreset::Card.config()));
/// for _ in 0..frames {
///     ui.frame(&mut root, viewport, &UiInput::away(), Duration::from_millis(16));
/// }
/// let svg = SvgDocument::new().render(&mut ui.draw_list, viewport.into());
/// ```
pub struct UiScene {
    pub observer: ObserverService,
    /// Draw list populated by the most recent [`frame`](Self::frame) call.
    pub draw_list: DrawList,
    palette: Box<dyn TokenPalette>,
    clock: FrameClock,
    reports: Vec<(ElementId, Dimensions)>,
}

impl UiScene {
    pub fn new() -> Self {
        Self::with_palette(DefaultPalette::Light)
    }

    pub fn with_palette(palette: impl TokenPalette + 'static) -> Self {
        Self {
            observer: ObserverService::new(),
            draw_list: DrawList::new(),
            palette: Box::new(palette),
            clock: FrameClock::new(),
            reports: Vec::new(),
        }
    }

    /// Replaces the token palette. Shapes pick it up when they next restyle.
    pub fn set_palette(&mut self, palette: impl TokenPalette + 'static) {
        self.palette = Box::new(palette);
    }

    #[inline]
    pub fn palette(&self) -> &dyn TokenPalette {
        &*self.palette
    }

    #[inline]
    pub fn frame_index(&self) -> u64 {
        self.clock.frame_index()
    }

    /// Runs one frame of `root` and returns the populated draw list.
    ///
    /// The returned `&mut DrawList` is valid until the next call.
    pub fn frame(&mut self, root: &mut Element, viewport: Vec2, input: &UiInput, dt: Duration) -> &mut DrawList {
        let published = self.observer.flush_frame();
        let frame = self.clock.step(dt);
        if published > 0 {
            log::trace!("frame {}: {published} size change(s) published", frame.frame_index);
        }

        // ── update ────────────────────────────────────────────────────────
        {
            let mut ctx = UpdateCtx {
                dt: frame.dt,
                frame,
                observer: &self.observer,
                palette: &*self.palette,
            };
            root.update(&mut ctx);
        }

        // ── measure + paint ───────────────────────────────────────────────
        self.draw_list.clear();
        let layout = LayoutCtx::new(viewport);
        let _ = root.measure(Constraints::loose(viewport), &layout);
        let rect = Rect::new(0.0, 0.0, viewport.x, viewport.y);
        {
            let mut painter = Painter::new(&mut self.draw_list, &mut self.reports, layout, input.mouse_pos);
            root.paint(&mut painter, rect);
        }

        // ── events ────────────────────────────────────────────────────────
        root.on_event(&UiEvent::Hover { pos: input.mouse_pos }, rect, &layout);
        if input.mouse_clicked {
            root.on_event(&UiEvent::Click { pos: input.mouse_pos }, rect, &layout);
        }

        // ── observation ───────────────────────────────────────────────────
        for (id, dims) in self.reports.drain(..) {
            self.observer.notify(id, dims.width, dims.height);
        }

        &mut self.draw_list
    }
}

impl Default for UiScene {
    fn default() -> Self {
        Self::new()
    }
}

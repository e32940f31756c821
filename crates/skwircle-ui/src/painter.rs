use skwircle_engine::coords::{Dimensions, Rect, Vec2};
use skwircle_engine::paint::Color;
use skwircle_engine::scene::{DrawList, PathCmd, ZIndex};

use crate::constraints::LayoutCtx;
use crate::observer::ElementId;

/// Drawing surface passed to [`Widget::paint`](crate::widget::Widget::paint).
///
/// Wraps the engine's `DrawList` and collects the box sizes widgets report
/// for observation; the scene forwards those to the observer after paint.
pub struct Painter<'a> {
    draw_list: &'a mut DrawList,
    reports: &'a mut Vec<(ElementId, Dimensions)>,
    layout: LayoutCtx,
    z: i32,
    /// Current pointer position in logical pixels.
    pub mouse_pos: Vec2,
}

impl<'a> Painter<'a> {
    pub(crate) fn new(
        draw_list: &'a mut DrawList,
        reports: &'a mut Vec<(ElementId, Dimensions)>,
        layout: LayoutCtx,
        mouse_pos: Vec2,
    ) -> Self {
        Self { draw_list, reports, layout, z: 0, mouse_pos }
    }

    /// Layout context for re-measuring children during paint.
    #[inline]
    pub fn layout_ctx(&self) -> LayoutCtx {
        self.layout
    }

    // ── observation ───────────────────────────────────────────────────────

    /// Reports the laid-out size of an observed element for this frame.
    #[inline]
    pub fn report_size(&mut self, id: ElementId, dimensions: Dimensions) {
        self.reports.push((id, dimensions));
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Solid axis-aligned rectangle.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let z = self.next_z();
        self.draw_list.push_solid_rect(z, rect, color);
    }

    /// Filled path in scene space (`cmd.origin` already applied by the caller).
    pub fn fill_path(&mut self, cmd: PathCmd) {
        let z = self.next_z();
        self.draw_list.push_path(z, cmd);
    }

    // ── scopes ────────────────────────────────────────────────────────────

    /// Begin a path clip region. Must be paired with [`pop_clip`](Self::pop_clip).
    pub fn push_clip_path(&mut self, d: impl Into<String>, origin: Vec2) {
        self.draw_list.push_clip_path(d, origin);
    }

    /// End the most recent clip region.
    pub fn pop_clip(&mut self) {
        self.draw_list.pop_clip();
    }

    /// Begin an opacity group. Must be paired with [`pop_opacity`](Self::pop_opacity).
    pub fn push_opacity(&mut self, opacity: f32) {
        self.draw_list.push_opacity(opacity);
    }

    pub fn pop_opacity(&mut self) {
        self.draw_list.pop_opacity();
    }

    // ── internal ──────────────────────────────────────────────────────────

    #[inline]
    fn next_z(&mut self) -> ZIndex {
        let z = ZIndex::new(self.z);
        self.z += 1;
        z
    }
}

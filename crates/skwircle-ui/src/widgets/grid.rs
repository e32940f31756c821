use skwircle_engine::coords::{Rect, Vec2};

use crate::constraints::{inset_rect, Constraints, Edges, LayoutCtx};
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::scene::UpdateCtx;
use crate::widget::{Element, Widget};

/// Fixed-column grid. Children are placed left to right, top to bottom, each
/// at its measured size in the top-left corner of an equal-width cell.
///
/// ```rust,ignore
/// Grid::new(3)
///     .gap(24.0)
///     .padding_all(32.0)
///     .children(ShapePreset::ALL.iter().map(|&p| Squircle::preset(p)))
/// ```
pub struct Grid {
    columns: usize,
    children: Vec<Element>,
    gap: f32,
    padding: Edges,
}

impl Grid {
    pub fn new(columns: usize) -> Self {
        Self { columns: columns.max(1), children: Vec::new(), gap: 0.0, padding: Edges::default() }
    }

    pub fn gap(mut self, v: f32) -> Self {
        self.gap = v.max(0.0);
        self
    }

    pub fn padding(mut self, edges: Edges) -> Self {
        self.padding = edges.sanitized();
        self
    }

    pub fn padding_all(mut self, v: f32) -> Self {
        self.padding = Edges::all(v).sanitized();
        self
    }

    pub fn child(mut self, child: impl Into<Element>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children(mut self, iter: impl IntoIterator<Item = impl Into<Element>>) -> Self {
        self.children.extend(iter.into_iter().map(Into::into));
        self
    }

    // ── layout helpers ────────────────────────────────────────────────────

    /// Cell width for an inner width; `INFINITY` when unbounded.
    fn cell_width(&self, inner_w: f32) -> f32 {
        if !inner_w.is_finite() {
            return f32::INFINITY;
        }
        let gaps = self.gap * (self.columns - 1) as f32;
        ((inner_w - gaps) / self.columns as f32).max(0.0)
    }

    /// Child rects relative to `inner.origin`, plus the content extent.
    fn layout(&self, inner_w: f32, ctx: &LayoutCtx) -> (Vec<Rect>, Vec2) {
        let cell_w = self.cell_width(inner_w);
        let child_c = Constraints::loose(Vec2::new(cell_w, f32::INFINITY));
        let sizes: Vec<Vec2> = self.children.iter().map(|c| c.measure(child_c, ctx)).collect();

        // Unbounded grids use the widest child as the cell width.
        let cell_w = if cell_w.is_finite() {
            cell_w
        } else {
            sizes.iter().fold(0.0f32, |m, s| m.max(s.x))
        };

        let mut rects = Vec::with_capacity(sizes.len());
        let mut y = 0.0;
        for row in sizes.chunks(self.columns) {
            let row_h = row.iter().fold(0.0f32, |m, s| m.max(s.y));
            for (col, size) in row.iter().enumerate() {
                let x = col as f32 * (cell_w + self.gap);
                rects.push(Rect::new(x, y, size.x, size.y));
            }
            y += row_h + self.gap;
        }
        let height = if rects.is_empty() { 0.0 } else { y - self.gap };
        let used_cols = self.columns.min(sizes.len()) as f32;
        let width = if used_cols > 0.0 { used_cols * cell_w + (used_cols - 1.0) * self.gap } else { 0.0 };
        (rects, Vec2::new(width, height))
    }
}

impl Widget for Grid {
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        let inner_w = (constraints.max.x - self.padding.h()).max(0.0);
        let (_, extent) = self.layout(inner_w, ctx);
        let w = if constraints.max.x.is_finite() { constraints.max.x } else { extent.x + self.padding.h() };
        constraints.constrain(Vec2::new(w, extent.y + self.padding.v()))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let ctx = painter.layout_ctx();
        let inner = inset_rect(rect, self.padding);
        let (rects, _) = self.layout(inner.size.x, &ctx);
        for (child, r) in self.children.iter().zip(rects) {
            child.paint(painter, r.translate(inner.origin));
        }
    }

    fn update(&mut self, ctx: &mut UpdateCtx<'_>) {
        for child in &mut self.children {
            child.update(ctx);
        }
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect, ctx: &LayoutCtx) -> EventResult {
        let inner = inset_rect(rect, self.padding);
        let (rects, _) = self.layout(inner.size.x, ctx);
        for (child, r) in self.children.iter_mut().zip(rects) {
            if child.on_event(event, r.translate(inner.origin), ctx).is_consumed() {
                return EventResult::Consumed;
            }
        }
        EventResult::Ignored
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::swatch::Swatch;
    use skwircle_engine::paint::Color;

    fn swatch(w: f32, h: f32) -> Swatch {
        Swatch::new(Vec2::new(w, h), Color::black())
    }

    #[test]
    fn cells_wrap_by_column_count() {
        let grid = Grid::new(2).gap(10.0).children([swatch(20.0, 30.0), swatch(20.0, 10.0), swatch(5.0, 5.0)]);
        let (rects, extent) = grid.layout(110.0, &LayoutCtx::new(Vec2::new(110.0, 100.0)));
        assert_eq!(rects[0], Rect::new(0.0, 0.0, 20.0, 30.0));
        assert_eq!(rects[1], Rect::new(60.0, 0.0, 20.0, 10.0));
        assert_eq!(rects[2], Rect::new(0.0, 40.0, 5.0, 5.0));
        assert_eq!(extent.y, 45.0);
    }

    #[test]
    fn measure_adds_padding() {
        let grid = Grid::new(1).padding_all(8.0).child(swatch(20.0, 30.0));
        let size = grid.measure(Constraints::unbounded(), &LayoutCtx::new(Vec2::zero()));
        assert_eq!(size, Vec2::new(36.0, 46.0));
    }
}

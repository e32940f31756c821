use skwircle_engine::coords::{Rect, Vec2};
use skwircle_engine::paint::Color;

use crate::constraints::{Constraints, LayoutCtx};
use crate::painter::Painter;
use crate::widget::Widget;

/// Solid block of a fixed natural size. Placeholder content for shapes.
pub struct Swatch {
    size: Vec2,
    color: Color,
}

impl Swatch {
    pub fn new(size: Vec2, color: Color) -> Self {
        Self { size, color }
    }
}

impl Widget for Swatch {
    fn measure(&self, constraints: Constraints, _ctx: &LayoutCtx) -> Vec2 {
        constraints.constrain(self.size)
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        painter.fill_rect(Rect::from_origin_size(rect.origin, self.size), self.color);
    }
}

use crate::coords::Vec2;

use super::Color;

/// Resolved drop shadow.
///
/// A shadow is visible iff `opacity > 0`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ShadowDescriptor {
    pub offset_x: f32,
    pub offset_y: f32,
    pub blur_radius: f32,
    pub spread: f32,
    pub color: Color,
    pub opacity: f32,
}

impl ShadowDescriptor {
    pub fn new(offset_x: f32, offset_y: f32, blur_radius: f32, spread: f32, color: Color, opacity: f32) -> Self {
        Self {
            offset_x,
            offset_y,
            blur_radius: blur_radius.max(0.0),
            spread,
            color,
            opacity: if opacity.is_finite() { opacity.clamp(0.0, 1.0) } else { 0.0 },
        }
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }

    #[inline]
    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.offset_x, self.offset_y)
    }
}

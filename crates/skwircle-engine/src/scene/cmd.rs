use crate::coords::{Rect, Vec2};
use crate::paint::{Color, Paint};

use super::{DrawList, ZIndex};

/// One recorded draw operation. Backends match on this exhaustively.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    /// Squircle outlines, shadows and clip-free vector fills.
    Path(PathCmd),
    /// Plain content boxes.
    Rect(RectCmd),
}

/// Filled vector path.
///
/// `d` is SVG path data in local space; `origin` translates it into scene
/// space. `blur` is a Gaussian blur radius in logical pixels (`0` = sharp).
#[derive(Debug, Clone, PartialEq)]
pub struct PathCmd {
    pub d: String,
    pub origin: Vec2,
    pub paint: Paint,
    pub opacity: f32,
    pub blur: f32,
}

impl PathCmd {
    #[inline]
    pub fn new(d: impl Into<String>, origin: Vec2, paint: Paint) -> Self {
        Self { d: d.into(), origin, paint, opacity: 1.0, blur: 0.0 }
    }

    #[inline]
    #[must_use]
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    #[inline]
    #[must_use]
    pub fn with_blur(mut self, blur: f32) -> Self {
        self.blur = blur.max(0.0);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RectCmd {
    pub rect: Rect,
    pub paint: Paint,
}

impl DrawList {
    #[inline]
    pub fn push_path(&mut self, z: ZIndex, cmd: PathCmd) {
        self.push(z, DrawCmd::Path(cmd));
    }

    #[inline]
    pub fn push_solid_rect(&mut self, z: ZIndex, rect: Rect, color: Color) {
        self.push(z, DrawCmd::Rect(RectCmd { rect, paint: Paint::Solid(color) }));
    }
}

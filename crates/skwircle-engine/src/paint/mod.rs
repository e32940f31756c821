//! Paint model shared between the shape composer and output backends.
//!
//! Scope:
//! - color representation (straight-alpha sRGB)
//! - gradient and shadow descriptors (already resolved, no presets here)
//! - paint sources (solid, gradient)
//!
//! Preset tables and token lookup live in `style`.

pub mod color;
pub mod gradient;
pub mod shadow;

pub use color::{Color, ColorParseError};
pub use gradient::{GradientDescriptor, GradientKind, GradientStop};
pub use shadow::ShadowDescriptor;

/// Paint source for filling a path.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    Gradient(GradientDescriptor),
}

impl Paint {
    #[inline]
    pub fn solid(color: Color) -> Self {
        Paint::Solid(color)
    }

    /// Returns `false` when the paint cannot contribute any pixels.
    #[inline]
    pub fn is_visible(&self) -> bool {
        match self {
            Paint::Solid(c) => c.a > 0.0,
            Paint::Gradient(g) => g.is_visible(),
        }
    }
}

impl From<Color> for Paint {
    #[inline]
    fn from(c: Color) -> Self {
        Paint::Solid(c)
    }
}

impl From<GradientDescriptor> for Paint {
    #[inline]
    fn from(g: GradientDescriptor) -> Self {
        Paint::Gradient(g)
    }
}

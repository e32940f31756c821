//! Coordinate and geometry types shared by the shape engine and the UI host.
//!
//! Canonical space:
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down

mod dimensions;
mod rect;
mod vec2;

pub use dimensions::{Dimensions, SIGNIFICANT_CHANGE};
pub use rect::Rect;
pub use vec2::Vec2;

//! Output backends.
//!
//! Backends consume `scene` draw streams and turn them into a concrete format.
//! Each backend owns its own resources (definitions, ids, caches).
//!
//! Convention:
//! - geometry is in logical pixels (top-left origin, +Y down)
//! - items are emitted in paint order (`ZIndex`, then insertion)

mod svg;

pub use svg::SvgDocument;

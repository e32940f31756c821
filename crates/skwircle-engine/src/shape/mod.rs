//! Superellipse outline generation.
//!
//! - `path`: one closed outline for a box, radius and smoothing exponent
//! - `quality`: size- and tier-dependent sampling density
//! - `outline`: the nested background / border / outer-ring set for one shape

pub mod outline;
pub mod path;
pub mod quality;

pub use outline::ShapePaths;
pub use path::{effective_radius, generate, superellipse_point, Corner, PathOutline};
pub use quality::{resolve_points, PerformanceTier};

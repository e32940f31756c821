//! Backend-agnostic draw stream.
//!
//! A [`DrawList`] records [`DrawCmd`]s tagged with a z-index, the active clip
//! path and the accumulated group opacity. Backends replay it in paint order
//! (z ascending, then insertion).

mod cmd;
mod list;
mod order;

pub use cmd::{DrawCmd, PathCmd, RectCmd};
pub use list::{ClipId, ClipPath, DrawItem, DrawList};
pub use order::{SortKey, ZIndex};

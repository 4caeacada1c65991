//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands
//! - provide deterministic ordering (z-index + insertion order)
//! - keep shape-specific push helpers isolated per shape file under
//!   `scene::shapes`
//!
//! A rendering collaborator consumes the stream in paint order and rasterizes
//! each command however it likes; the engine never touches a GPU.

mod cmd;
mod key;
mod list;

pub mod shapes;

pub use cmd::DrawCmd;
pub use key::{SortKey, ZIndex};
pub use list::{DrawItem, DrawList};

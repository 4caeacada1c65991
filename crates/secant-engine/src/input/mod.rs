//! Pointer input.
//!
//! Public API is platform-agnostic and does not expose window-system types.
//! The embedding runtime translates its native mouse/touch events into
//! `PointerEvent`s with coordinates already local to the drawing surface.

mod types;

pub use types::PointerEvent;

//! Paint model shared between the sketch and renderers.
//!
//! Scope:
//! - color representation (straight-alpha RGBA)
//!
//! Geometry types remain in `coords` / `geom`.

mod color;

pub use color::Color;

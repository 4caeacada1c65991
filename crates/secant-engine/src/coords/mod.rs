//! Coordinate types shared across the engine.
//!
//! Two spaces exist:
//! - Surface pixels: origin top-left, +X right, +Y down, bounded by the
//!   surface width/height. Raw pointer input arrives here.
//! - Normalized device coordinates (NDC): origin center, +Y up, both axes
//!   spanning [-1, 1]. All committed geometry and solver math live here.
//!
//! [`Surface::to_ndc`] is the only crossing point between the two.

mod surface;
mod vec2;

pub use surface::Surface;
pub use vec2::Vec2;

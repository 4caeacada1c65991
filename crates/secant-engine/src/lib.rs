//! Secant engine crate.
//!
//! Interactive circle / line-segment intersection sketching: two drag
//! gestures commit a circle and a segment, the solver reports where they
//! cross. Rendering and windowing stay outside; collaborators consume the
//! recorded draw stream and overlay text.

pub mod coords;
pub mod geom;
pub mod input;
pub mod overlay;
pub mod paint;
pub mod scene;
pub mod sketch;

pub mod logging;

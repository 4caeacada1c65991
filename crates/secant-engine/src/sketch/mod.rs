//! Interactive sketch session.
//!
//! Two drag gestures commit a circle, then a line segment; the intersection
//! set is computed exactly once, at segment commit. Responsibilities:
//! - own all session state explicitly (no ambient globals)
//! - normalize pointer pixels to NDC before anything is stored
//! - keep committed geometry write-once until an explicit reset
//! - refresh overlay text and raise a redraw request on every transition

mod phase;
mod session;

pub mod palette;

pub use phase::Phase;
pub use session::{Sketch, SurfaceError};

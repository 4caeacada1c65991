//! Geometry primitives and the circle / segment intersection solver.
//!
//! Everything here operates in NDC and is pure: no state, no side effects,
//! degenerate inputs are defined cases rather than errors.

mod circle;
mod intersect;
mod segment;

pub use circle::Circle;
pub use intersect::{IntersectionSet, intersections};
pub use segment::Segment;

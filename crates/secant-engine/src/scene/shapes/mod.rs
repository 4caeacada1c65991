pub(crate) mod marker;
pub(crate) mod polyline;
pub(crate) mod segment;

pub use marker::MarkersCmd;
pub use polyline::{CIRCLE_OUTLINE_STEPS, PolylineCmd};
pub use segment::SegmentCmd;

use crate::scene::shapes::{MarkersCmd, PolylineCmd, SegmentCmd};

/// Renderer-agnostic draw command stream.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that shape module
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    /// Points connected in order (circle outlines close the loop themselves).
    Polyline(PolylineCmd),
    /// A single two-point line.
    Segment(SegmentCmd),
    /// Point markers of a given size.
    Markers(MarkersCmd),
}

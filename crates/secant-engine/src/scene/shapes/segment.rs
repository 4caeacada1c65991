use crate::geom::Segment;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Two-point line draw payload.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SegmentCmd {
    pub segment: Segment,
    pub color: Color,
}

impl SegmentCmd {
    #[inline]
    pub fn new(segment: Segment, color: Color) -> Self {
        Self { segment, color }
    }
}

impl DrawList {
    /// Records a line segment draw command.
    #[inline]
    pub fn push_segment(&mut self, z: ZIndex, segment: Segment, color: Color) {
        self.push(z, DrawCmd::Segment(SegmentCmd::new(segment, color)));
    }
}

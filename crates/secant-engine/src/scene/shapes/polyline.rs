use crate::coords::Vec2;
use crate::geom::Circle;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Angular steps used when sampling a circle outline; the outline carries
/// `CIRCLE_OUTLINE_STEPS + 1` points to close the loop.
pub const CIRCLE_OUTLINE_STEPS: u32 = 60;

/// Polyline draw payload: points connected in order.
#[derive(Debug, Clone, PartialEq)]
pub struct PolylineCmd {
    pub points: Vec<Vec2>,
    pub color: Color,
}

impl PolylineCmd {
    #[inline]
    pub fn new(points: Vec<Vec2>, color: Color) -> Self {
        Self { points, color }
    }
}

impl DrawList {
    /// Records a polyline draw command.
    #[inline]
    pub fn push_polyline(&mut self, z: ZIndex, points: Vec<Vec2>, color: Color) {
        self.push(z, DrawCmd::Polyline(PolylineCmd::new(points, color)));
    }

    /// Records a circle outline as a closed polyline sampled at
    /// [`CIRCLE_OUTLINE_STEPS`] uniform angular steps.
    #[inline]
    pub fn push_circle_outline(&mut self, z: ZIndex, circle: Circle, color: Color) {
        self.push_polyline(z, circle.outline(CIRCLE_OUTLINE_STEPS), color);
    }
}

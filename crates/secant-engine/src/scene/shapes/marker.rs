use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Point-marker draw payload.
///
/// `size` is the marker diameter in pixels, matching point-sprite style
/// rasterization.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkersCmd {
    pub points: Vec<Vec2>,
    pub size: f32,
    pub color: Color,
}

impl MarkersCmd {
    #[inline]
    pub fn new(points: Vec<Vec2>, size: f32, color: Color) -> Self {
        Self { points, size, color }
    }
}

impl DrawList {
    /// Records point markers.
    #[inline]
    pub fn push_markers(&mut self, z: ZIndex, points: Vec<Vec2>, size: f32, color: Color) {
        self.push(z, DrawCmd::Markers(MarkersCmd::new(points, size, color)));
    }
}

use crate::coords::Vec2;

/// Line segment in NDC, as the ordered pair `(p1, p2)`.
///
/// May be degenerate (`p1 == p2`). Write-once by convention — the sketch
/// never mutates a committed segment.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Segment {
    pub p1: Vec2,
    pub p2: Vec2,
}

impl Segment {
    #[inline]
    pub const fn new(p1: Vec2, p2: Vec2) -> Self {
        Self { p1, p2 }
    }

    #[inline]
    pub fn direction(self) -> Vec2 {
        self.p2 - self.p1
    }

    #[inline]
    pub fn is_degenerate(self) -> bool {
        self.p1 == self.p2
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.direction().length()
    }

    /// Point at parameter `t` along the segment: `p1 + t * (p2 - p1)`.
    ///
    /// `t = 0` is `p1`, `t = 1` is `p2`; values outside [0, 1] extrapolate.
    #[inline]
    pub fn point_at(self, t: f32) -> Vec2 {
        self.p1 + self.direction() * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_at_endpoints() {
        let s = Segment::new(Vec2::new(-1.0, 0.0), Vec2::new(1.0, 0.5));
        assert_eq!(s.point_at(0.0), s.p1);
        assert_eq!(s.point_at(1.0), s.p2);
    }

    #[test]
    fn point_at_midpoint() {
        let s = Segment::new(Vec2::new(-1.0, -1.0), Vec2::new(1.0, 1.0));
        assert_eq!(s.point_at(0.5), Vec2::zero());
    }

    #[test]
    fn degenerate_detection() {
        let p = Vec2::new(0.3, 0.3);
        assert!(Segment::new(p, p).is_degenerate());
        assert!(!Segment::new(p, Vec2::zero()).is_degenerate());
    }
}

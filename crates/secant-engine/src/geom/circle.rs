use crate::coords::Vec2;

/// Circle in NDC.
///
/// Radius may be zero: a drag that never moved commits a degenerate circle.
/// Write-once by convention — the sketch never mutates a committed circle.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    #[inline]
    pub const fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.center.is_finite() && self.radius.is_finite() && self.radius >= 0.0
    }

    /// Samples the circumference at `steps` uniform angular steps and closes
    /// the loop, yielding `steps + 1` points starting and ending at angle 0.
    pub fn outline(self, steps: u32) -> Vec<Vec2> {
        let mut points = Vec::with_capacity(steps as usize + 1);

        for i in 0..=steps {
            let theta = core::f32::consts::TAU * i as f32 / steps as f32;
            points.push(Vec2::new(
                self.center.x + self.radius * theta.cos(),
                self.center.y + self.radius * theta.sin(),
            ));
        }

        points
    }
}

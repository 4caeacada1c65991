use crate::coords::Vec2;

use super::{Circle, Segment};

/// Intersection points restricted to the segment, ordered by increasing
/// segment parameter `t` — the point nearer `p1` comes first.
///
/// Holds 0, 1, or 2 points.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntersectionSet {
    points: Vec<Vec2>,
}

impl IntersectionSet {
    #[inline]
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Computes where the infinite line through `segment` crosses `circle`,
/// keeping only crossings that lie on the segment itself (`t` in [0, 1]).
///
/// Quadratic parameterization: with `d = p2 - p1` and `f = p1 - center`,
/// solve `(d·d) t² + 2 (f·d) t + (f·f - r²) = 0`.
///
/// Defined cases rather than errors:
/// - invalid circle (negative or non-finite radius, non-finite center): empty
/// - degenerate segment (`d·d == 0`): empty, avoiding the division by zero
/// - negative discriminant: empty (the line misses the circle)
/// - zero discriminant: the tangent point, if it lies on the segment
///
/// Deterministic for identical inputs.
pub fn intersections(circle: Circle, segment: Segment) -> IntersectionSet {
    let mut set = IntersectionSet::default();

    if !circle.is_valid() {
        return set;
    }

    let d = segment.direction();
    let f = segment.p1 - circle.center;

    let a = d.dot(d);
    if a == 0.0 {
        return set;
    }

    let b = 2.0 * f.dot(d);
    let c = f.dot(f) - circle.radius * circle.radius;

    let disc = b * b - 4.0 * a * c;
    if disc < 0.0 {
        return set;
    }

    let sqrt_disc = disc.sqrt();
    let t1 = (-b - sqrt_disc) / (2.0 * a);
    let t2 = (-b + sqrt_disc) / (2.0 * a);

    if (0.0..=1.0).contains(&t1) {
        set.points.push(segment.point_at(t1));
    }
    // A tangent contributes exactly one point; t2 only counts for a strict
    // crossing (disc > 0), where t1 < t2.
    if disc > 0.0 && (0.0..=1.0).contains(&t2) {
        set.points.push(segment.point_at(t2));
    }

    set
}

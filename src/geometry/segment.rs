use super::Point;
use serde::Serialize;

/// Tolerance on the segment parameters when testing whether a crossing lies
/// within both segments.
const PARAM_EPS: f32 = 1e-5;
/// Below this `|r × s|` the segments are treated as parallel.
const DENOM_EPS: f32 = 1e-9;

/// Finite segment between two points.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Segment {
    pub a: Point,
    pub b: Point,
}

impl Segment {
    pub fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    /// Point at parameter `t` (0 at `a`, 1 at `b`).
    #[inline]
    pub fn at(&self, t: f32) -> Point {
        self.a + (self.b - self.a) * t
    }

    /// Parameter of the orthogonal projection of `p` onto the carrier line.
    pub fn project(&self, p: &Point) -> f32 {
        let d = self.b - self.a;
        let len_sq = d.norm_squared();
        if len_sq <= f32::EPSILON {
            return 0.0;
        }
        (*p - self.a).dot(&d) / len_sq
    }
}

/// Single crossing point of two segments.
///
/// Parallel and collinear segments yield `None`, as do crossings of the
/// carrier lines that fall outside either segment. Touching at an endpoint
/// counts as a crossing.
pub fn segment_intersect(s1: &Segment, s2: &Segment) -> Option<Point> {
    let r = s1.b - s1.a;
    let s = s2.b - s2.a;
    let rxs = r.x * s.y - r.y * s.x;
    let scale = (r.norm() * s.norm()).max(1.0);
    if rxs.abs() <= DENOM_EPS * scale {
        return None;
    }
    let qp = s2.a - s1.a;
    let t = (qp.x * s.y - qp.y * s.x) / rxs;
    let u = (qp.x * r.y - qp.y * r.x) / rxs;
    let range = -PARAM_EPS..=1.0 + PARAM_EPS;
    if range.contains(&t) && range.contains(&u) {
        Some(s1.at(t.clamp(0.0, 1.0)))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(ax: f32, ay: f32, bx: f32, by: f32) -> Segment {
        Segment::new(Point::new(ax, ay), Point::new(bx, by))
    }

    #[test]
    fn proper_cross() {
        let p = segment_intersect(&seg(0.0, 0.0, 10.0, 10.0), &seg(0.0, 10.0, 10.0, 0.0))
            .expect("segments cross");
        assert!((p.x - 5.0).abs() < 1e-5 && (p.y - 5.0).abs() < 1e-5);
    }

    #[test]
    fn endpoint_touch_counts() {
        let p = segment_intersect(&seg(0.0, 0.0, 10.0, 0.0), &seg(10.0, 0.0, 10.0, 5.0))
            .expect("segments touch");
        assert!((p.x - 10.0).abs() < 1e-5 && p.y.abs() < 1e-5);
    }

    #[test]
    fn parallel_and_disjoint_segments_do_not_cross() {
        assert!(segment_intersect(&seg(0.0, 0.0, 10.0, 0.0), &seg(0.0, 1.0, 10.0, 1.0)).is_none());
        assert!(segment_intersect(&seg(0.0, 0.0, 1.0, 1.0), &seg(5.0, 0.0, 6.0, -3.0)).is_none());
    }

    #[test]
    fn collinear_overlap_is_not_a_point() {
        assert!(segment_intersect(&seg(0.0, 0.0, 10.0, 0.0), &seg(5.0, 0.0, 15.0, 0.0)).is_none());
    }
}

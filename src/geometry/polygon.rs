use super::{segment_intersect, HalfPlane, Point, Segment};
use serde::Serialize;

/// Two crossings closer than this (pixels) are the same point, e.g. a line
/// passing exactly through a corner hits both adjacent edges there.
const DEDUP_EPS: f32 = 1e-3;

/// Closed polygon given by its vertices in winding order.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Polygon {
    pub vertices: Vec<Point>,
}

impl Polygon {
    pub fn new(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Edges `v[i] → v[i + 1]`, closing back to `v[0]`.
    pub fn edges(&self) -> impl Iterator<Item = Segment> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| Segment::new(self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Shoelace sum divided by two. The sign depends on the winding.
    pub fn signed_area(&self) -> f32 {
        if self.vertices.len() < 3 {
            return 0.0;
        }
        let twice: f32 = self
            .edges()
            .map(|e| e.a.x * e.b.y - e.b.x * e.a.y)
            .sum();
        0.5 * twice
    }

    /// Unsigned shoelace area.
    pub fn area(&self) -> f32 {
        self.signed_area().abs()
    }

    /// Part of the polygon strictly on the positive side of `plane`
    /// (Sutherland–Hodgman against one clip edge).
    ///
    /// For a convex polygon crossed by the boundary, the output starts or
    /// ends at the two boundary crossings and keeps the positive vertices in
    /// the input winding order, so it is always simple.
    pub fn clip(&self, plane: &HalfPlane) -> Polygon {
        let n = self.vertices.len();
        let mut out = Vec::with_capacity(n + 2);
        for i in 0..n {
            let cur = self.vertices[i];
            let next = self.vertices[(i + 1) % n];
            let s_cur = plane.side(&cur);
            let s_next = plane.side(&next);
            let cur_in = s_cur > 0.0;
            let next_in = s_next > 0.0;
            if cur_in {
                out.push(cur);
            }
            if cur_in != next_in {
                let t = s_cur / (s_cur - s_next);
                out.push(Segment::new(cur, next).at(t));
            }
        }
        dedup_ring(&mut out);
        Polygon::new(out)
    }

    /// Distinct points where `segment` meets the polygon boundary.
    pub fn boundary_crossings(&self, segment: &Segment) -> Vec<Point> {
        let mut points: Vec<Point> = Vec::with_capacity(2);
        for edge in self.edges() {
            if let Some(p) = segment_intersect(&edge, segment) {
                if !points.iter().any(|q| (*q - p).norm() <= DEDUP_EPS) {
                    points.push(p);
                }
            }
        }
        points
    }
}

fn dedup_ring(points: &mut Vec<Point>) {
    points.dedup_by(|a, b| (*a - *b).norm() <= DEDUP_EPS);
    while points.len() > 1 {
        let first = points[0];
        let last = points[points.len() - 1];
        if (first - last).norm() <= DEDUP_EPS {
            points.pop();
        } else {
            break;
        }
    }
}

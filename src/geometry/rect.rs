use super::{convex_hull, Point, Polygon};
use nalgebra::Vector2;
use serde::Serialize;

/// Rotated rectangle: the object's minimum-area bounding box.
///
/// `angle` is the direction (radians, image axes) of the side whose length
/// is `width`; the `height` side is perpendicular to it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct RotatedRect {
    pub center: Point,
    pub width: f32,
    pub height: f32,
    pub angle: f32,
}

impl RotatedRect {
    pub fn new(center: Point, width: f32, height: f32, angle: f32) -> Self {
        Self {
            center,
            width,
            height,
            angle,
        }
    }

    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// Corners in counter-clockwise order as seen on screen (`y` down),
    /// starting from the `(-width/2, -height/2)` corner of the rectangle frame.
    pub fn corners(&self) -> [Point; 4] {
        let (sin, cos) = self.angle.sin_cos();
        let u = Vector2::new(cos, sin) * (0.5 * self.width);
        let v = Vector2::new(-sin, cos) * (0.5 * self.height);
        let c = self.center;
        [c - u - v, c - u + v, c + u + v, c + u - v]
    }

    pub fn polygon(&self) -> Polygon {
        Polygon::new(self.corners().to_vec())
    }
}

/// Minimum-area rectangle enclosing `points` (rotating calipers over the
/// convex hull). Returns `None` for an empty input.
pub fn min_area_rect(points: &[Point]) -> Option<RotatedRect> {
    let hull = convex_hull(points);
    match hull.len() {
        0 => return None,
        1 => return Some(RotatedRect::new(hull[0], 0.0, 0.0, 0.0)),
        2 => {
            let d = hull[1] - hull[0];
            return Some(RotatedRect::new(
                nalgebra::center(&hull[0], &hull[1]),
                d.norm(),
                0.0,
                d.y.atan2(d.x),
            ));
        }
        _ => {}
    }

    let n = hull.len();
    let mut best: Option<(f32, RotatedRect)> = None;
    for i in 0..n {
        let origin = hull[i];
        let edge = hull[(i + 1) % n] - origin;
        let len = edge.norm();
        if len < f32::EPSILON {
            continue;
        }
        let dir = edge / len;
        let normal = Vector2::new(-dir.y, dir.x);

        let mut min_d = f32::MAX;
        let mut max_d = f32::MIN;
        let mut min_n = f32::MAX;
        let mut max_n = f32::MIN;
        for p in &hull {
            let rel = *p - origin;
            let along = rel.dot(&dir);
            let across = rel.dot(&normal);
            min_d = min_d.min(along);
            max_d = max_d.max(along);
            min_n = min_n.min(across);
            max_n = max_n.max(across);
        }

        let width = max_d - min_d;
        let height = max_n - min_n;
        let area = width * height;
        if best.as_ref().is_some_and(|(a, _)| *a <= area) {
            continue;
        }
        let center = origin + dir * (0.5 * (min_d + max_d)) + normal * (0.5 * (min_n + max_n));
        best = Some((
            area,
            RotatedRect::new(center, width, height, dir.y.atan2(dir.x)),
        ));
    }
    best.map(|(_, rect)| rect)
}

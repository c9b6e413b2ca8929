//! Outer-contour tracing over a [`BinaryMask`].

use crate::geometry::{Point, Polygon};
use crate::image::BinaryMask;
use imageproc::contours::{find_contours, BorderType};
use serde::Serialize;

/// Contour points with the smallest and largest `y` (image `y` grows down).
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ExtremePoints {
    pub topmost: Point,
    pub bottommost: Point,
}

/// Traces the outer borders of the mask and returns the one enclosing the
/// largest area, in tracing order.
pub fn largest_outer_contour(mask: &BinaryMask) -> Option<Vec<Point>> {
    let gray = mask.to_gray();
    let mut best: Option<(f32, Vec<Point>)> = None;
    for contour in find_contours::<i32>(&gray) {
        if !matches!(contour.border_type, BorderType::Outer) {
            continue;
        }
        let points: Vec<Point> = contour
            .points
            .iter()
            .map(|p| Point::new(p.x as f32, p.y as f32))
            .collect();
        let area = Polygon::new(points.clone()).area();
        // Strict comparison: earlier contours win ties.
        if best.as_ref().map_or(true, |(a, _)| area > *a) {
            best = Some((area, points));
        }
    }
    best.map(|(_, points)| points)
}

/// Topmost and bottommost points; the first occurrence wins ties.
pub fn extreme_points(points: &[Point]) -> Option<ExtremePoints> {
    let first = *points.first()?;
    let mut topmost = first;
    let mut bottommost = first;
    for p in &points[1..] {
        if p.y < topmost.y {
            topmost = *p;
        }
        if p.y > bottommost.y {
            bottommost = *p;
        }
    }
    Some(ExtremePoints {
        topmost,
        bottommost,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn largest_of_two_blobs_is_traced() {
        let mask = BinaryMask::from_fn(40, 30, |x, y| {
            let small = (2..5).contains(&x) && (2..5).contains(&y);
            let large = (10..30).contains(&x) && (8..20).contains(&y);
            small || large
        });
        let contour = largest_outer_contour(&mask).expect("contour");
        let xs = contour.iter().map(|p| p.x);
        let ys = contour.iter().map(|p| p.y);
        assert_eq!(xs.clone().fold(f32::MAX, f32::min), 10.0);
        assert_eq!(xs.fold(f32::MIN, f32::max), 29.0);
        assert_eq!(ys.clone().fold(f32::MAX, f32::min), 8.0);
        assert_eq!(ys.fold(f32::MIN, f32::max), 19.0);
    }

    #[test]
    fn empty_mask_has_no_contour() {
        assert!(largest_outer_contour(&BinaryMask::new(10, 10)).is_none());
    }

    #[test]
    fn extremes_keep_first_occurrence() {
        let pts = [
            Point::new(3.0, 5.0),
            Point::new(1.0, 2.0),
            Point::new(7.0, 2.0),
            Point::new(4.0, 9.0),
            Point::new(0.0, 9.0),
        ];
        let e = extreme_points(&pts).expect("non-empty");
        assert_eq!(e.topmost, Point::new(1.0, 2.0));
        assert_eq!(e.bottommost, Point::new(4.0, 9.0));
        assert!(extreme_points(&[]).is_none());
    }
}

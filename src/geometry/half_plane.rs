use super::Point;

/// Signed 2-D cross product `(point - p1) × (p2 - p1)`.
///
/// For a line directed from the left image border to the right one, the
/// value is positive above the line (smaller `y`), negative below it and zero
/// on it.
#[inline]
pub fn side_of(p1: &Point, p2: &Point, point: &Point) -> f32 {
    (point.x - p1.x) * (p2.y - p1.y) - (point.y - p1.y) * (p2.x - p1.x)
}

/// Half-plane bounded by the directed line through `from` and `to`.
///
/// The "positive" side is the one where [`side_of`] is strictly positive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HalfPlane {
    pub from: Point,
    pub to: Point,
}

impl HalfPlane {
    pub fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }

    #[inline]
    pub fn side(&self, point: &Point) -> f32 {
        side_of(&self.from, &self.to, point)
    }
}

use super::{side_of, Point, Segment};
use serde::Serialize;

/// Below this `|sin θ|` a line is treated as exactly vertical.
const MIN_SIN_THETA: f32 = 1e-6;

/// Straight line from the line-detection stage.
///
/// The polar form is `x·cos θ + y·sin θ = ρ` with `θ = orientation` and
/// `ρ = distance`. `left` and `right` are the crossings with the image
/// borders `x = 0` and `x = width`; they fix the direction of the line so
/// that [`Line::side`] means the same thing for every line of one image.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Line {
    /// Normal angle in radians. Near zero means near vertical.
    pub orientation: f32,
    /// Signed perpendicular distance from the image origin.
    pub distance: f32,
    pub left: Point,
    pub right: Point,
}

impl Line {
    pub fn new(orientation: f32, distance: f32, left: Point, right: Point) -> Self {
        Self {
            orientation,
            distance,
            left,
            right,
        }
    }

    /// Builds a line from its polar parameters for an image `width` pixels
    /// wide. Returns `None` for vertical lines, which never cross the left
    /// and right borders.
    pub fn from_polar(orientation: f32, distance: f32, width: f32) -> Option<Self> {
        let (sin, cos) = orientation.sin_cos();
        if sin.abs() < MIN_SIN_THETA {
            return None;
        }
        let y0 = distance / sin;
        let y1 = (distance - width * cos) / sin;
        Some(Self::new(
            orientation,
            distance,
            Point::new(0.0, y0),
            Point::new(width, y1),
        ))
    }

    #[inline]
    pub fn abs_orientation(&self) -> f32 {
        self.orientation.abs()
    }

    #[inline]
    pub fn abs_distance(&self) -> f32 {
        self.distance.abs()
    }

    /// Border-to-border segment of the line.
    pub fn segment(&self) -> Segment {
        Segment::new(self.left, self.right)
    }

    /// Half-plane value of `point`: positive above the line.
    #[inline]
    pub fn side(&self, point: &Point) -> f32 {
        side_of(&self.left, &self.right, point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn horizontal_line_from_polar() {
        // y = 120 in the signed half-turn convention: θ = -π/2, ρ = -120.
        let line = Line::from_polar(-FRAC_PI_2, -120.0, 640.0).expect("not vertical");
        assert!((line.left.y - 120.0).abs() < 1e-3);
        assert!((line.right.y - 120.0).abs() < 1e-3);
        assert_eq!(line.left.x, 0.0);
        assert_eq!(line.right.x, 640.0);
        assert!(line.side(&Point::new(10.0, 10.0)) > 0.0);
    }

    #[test]
    fn vertical_line_has_no_border_endpoints() {
        assert!(Line::from_polar(0.0, 50.0, 640.0).is_none());
    }

    #[test]
    fn tilted_line_endpoints_satisfy_polar_form() {
        let theta = 1.3f32;
        let rho = 250.0f32;
        let line = Line::from_polar(theta, rho, 500.0).expect("not vertical");
        for p in [line.left, line.right] {
            let residual = p.x * theta.cos() + p.y * theta.sin() - rho;
            assert!(residual.abs() < 1e-2, "residual {residual}");
        }
    }
}

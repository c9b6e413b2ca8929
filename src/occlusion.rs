//! Placement decision for the object against the table edge.
//!
//! The edge's left-to-right direction makes [`side_of`] positive above the
//! table. An object whose lowest point is on or above the edge cannot go
//! under the table; one whose highest point is on or below it already is.
//! Anything in between is resolved by how much of its bounding box sticks out
//! above the edge.

use crate::bounding::ExtremePoints;
use crate::detector::params::DecisionParams;
use crate::error::FitError;
use crate::geometry::{side_of, HalfPlane, Line, Point, RotatedRect, Segment};
use crate::types::{Placement, Verdict};
use log::debug;
use serde::Serialize;

/// Verdict plus the numbers it was derived from.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Decision {
    pub verdict: Verdict,
    pub placement: Placement,
    /// Only set for [`Placement::Straddling`].
    pub clipped_area: Option<f32>,
    pub box_area: f32,
}

#[derive(Clone, Debug, Default)]
pub struct OcclusionDecider {
    params: DecisionParams,
}

impl OcclusionDecider {
    pub fn new(params: DecisionParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &DecisionParams {
        &self.params
    }

    pub fn decide(
        &self,
        edge: &Line,
        bbox: &RotatedRect,
        extremes: &ExtremePoints,
    ) -> Result<Verdict, FitError> {
        self.decide_with_trace(edge, bbox, extremes)
            .map(|decision| decision.verdict)
    }

    pub fn decide_with_trace(
        &self,
        edge: &Line,
        bbox: &RotatedRect,
        extremes: &ExtremePoints,
    ) -> Result<Decision, FitError> {
        let box_area = bbox.area();
        if side_of(&edge.left, &edge.right, &extremes.bottommost) >= 0.0 {
            return Ok(Decision {
                verdict: Verdict::DoesNotFit,
                placement: Placement::Above,
                clipped_area: None,
                box_area,
            });
        }
        if side_of(&edge.left, &edge.right, &extremes.topmost) <= 0.0 {
            return Ok(Decision {
                verdict: Verdict::Fits,
                placement: Placement::Below,
                clipped_area: None,
                box_area,
            });
        }

        let clipped = trapezoid_area(bbox, edge)?;
        let limit = self.params.max_above_area_fraction * box_area;
        let verdict = Verdict::from(clipped < limit);
        debug!(
            "straddling: clipped={:.1} box={:.1} limit={:.1} -> {:?}",
            clipped, box_area, limit, verdict
        );
        Ok(Decision {
            verdict,
            placement: Placement::Straddling,
            clipped_area: Some(clipped),
            box_area,
        })
    }
}

/// Area of the part of `bbox` strictly above `edge`.
///
/// The crossings are taken along the edge's full carrier line, so a box
/// reaching past the left or right image border is still cut in two. A line
/// that does not meet the box boundary at exactly two points is a
/// [`FitError::DegenerateIntersection`].
pub fn trapezoid_area(bbox: &RotatedRect, edge: &Line) -> Result<f32, FitError> {
    let polygon = bbox.polygon();
    let segment = carrier_span(edge, &polygon.vertices);
    let crossings = polygon.boundary_crossings(&segment);
    let [a, b] = crossings[..] else {
        return Err(FitError::DegenerateIntersection {
            crossings: crossings.len(),
        });
    };
    let (l1, l2) = if segment.project(&a) <= segment.project(&b) {
        (a, b)
    } else {
        (b, a)
    };
    Ok(polygon.clip(&HalfPlane::new(l1, l2)).area())
}

/// Piece of the edge's carrier line, in the edge direction, long enough to
/// pass every one of `points` when projected onto it.
fn carrier_span(edge: &Line, points: &[Point]) -> Segment {
    let segment = edge.segment();
    let (lo, hi) = points
        .iter()
        .map(|p| segment.project(p))
        .fold((0.0f32, 1.0f32), |(lo, hi), t| (lo.min(t), hi.max(t)));
    Segment::new(segment.at(lo - 1.0), segment.at(hi + 1.0))
}

use crate::bounding::BoundingGeometry;
use crate::disambiguate::EdgeSelectionDiagnostics;
use crate::geometry::Line;
use serde::Serialize;

/// Final answer for one image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Fits,
    DoesNotFit,
}

impl Verdict {
    pub fn fits(self) -> bool {
        matches!(self, Verdict::Fits)
    }
}

impl From<bool> for Verdict {
    fn from(fits: bool) -> Self {
        if fits {
            Verdict::Fits
        } else {
            Verdict::DoesNotFit
        }
    }
}

impl From<Verdict> for bool {
    fn from(verdict: Verdict) -> Self {
        verdict.fits()
    }
}

/// Where the object lies relative to the table edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    /// Lowest point on or above the edge.
    Above,
    /// Highest point on or below the edge.
    Below,
    /// The edge runs through the object.
    Straddling,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FitReport {
    pub verdict: Verdict,
    pub placement: Placement,
    pub table_edge: Line,
    pub bounding: BoundingGeometry,
    pub edge_selection: EdgeSelectionDiagnostics,
    /// Box area above the edge; only computed when straddling.
    pub clipped_area: Option<f32>,
    pub box_area: f32,
    pub latency_ms: f64,
}

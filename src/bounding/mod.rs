//! Bounding geometry of the segmented object.
//!
//! The outer contour of the largest mask region yields a minimum-area rotated
//! rectangle and the region's topmost and bottommost points.

pub mod contour;

pub use contour::{extreme_points, largest_outer_contour, ExtremePoints};

use crate::error::FitError;
use crate::geometry::{min_area_rect, RotatedRect};
use crate::image::BinaryMask;
use log::debug;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BoundingGeometry {
    pub bbox: RotatedRect,
    pub extremes: ExtremePoints,
}

/// Stateless extractor; exists so the pipeline can hold it next to the
/// other stages.
#[derive(Clone, Copy, Debug, Default)]
pub struct BoundingGeometryExtractor;

impl BoundingGeometryExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Fails with [`FitError::EmptyMask`] when the mask has no foreground.
    pub fn extract(&self, mask: &BinaryMask) -> Result<BoundingGeometry, FitError> {
        let contour = largest_outer_contour(mask).ok_or(FitError::EmptyMask)?;
        let bbox = min_area_rect(&contour).ok_or(FitError::EmptyMask)?;
        let extremes = extreme_points(&contour).ok_or(FitError::EmptyMask)?;
        debug!(
            "bounding box: center=({:.1}, {:.1}) size={:.1}x{:.1} angle={:.3} top_y={:.1} bottom_y={:.1}",
            bbox.center.x,
            bbox.center.y,
            bbox.width,
            bbox.height,
            bbox.angle,
            extremes.topmost.y,
            extremes.bottommost.y
        );
        Ok(BoundingGeometry { bbox, extremes })
    }
}

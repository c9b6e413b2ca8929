#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod bounding;
pub mod detector;
pub mod disambiguate;
pub mod error;
pub mod occlusion;
pub mod types;

// Collaborators and tooling around the decision core.
pub mod angle;
pub mod config;
pub mod dataset;
pub mod detection;
pub mod geometry;
pub mod image;

// --- High-level re-exports -------------------------------------------------

// Main entry points: detector + results.
pub use crate::detector::{FitParams, TableFitDetector};
pub use crate::error::FitError;
pub use crate::types::{FitReport, Placement, Verdict};

// Core stages, usable on their own with externally produced lines and masks.
pub use crate::bounding::{BoundingGeometry, BoundingGeometryExtractor, ExtremePoints};
pub use crate::disambiguate::{LineCandidateSet, LineDisambiguator};
pub use crate::occlusion::{trapezoid_area, OcclusionDecider};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use table_fit::prelude::*;
///
/// # fn main() {
/// let image = image::RgbImage::new(640, 480);
/// let detector = TableFitDetector::new(FitParams::default());
/// match detector.process(&image) {
///     Ok(report) => println!("fits={} latency_ms={:.3}", report.verdict.fits(), report.latency_ms),
///     Err(err) => println!("no decision: {err}"),
/// }
/// # }
/// ```
pub mod prelude {
    pub use crate::geometry::{Line, Point};
    pub use crate::image::BinaryMask;
    pub use crate::{FitError, FitParams, FitReport, TableFitDetector, Verdict};
}

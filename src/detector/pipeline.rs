//! Detector pipeline driving one decision end-to-end.
//!
//! Typical usage:
//! ```no_run
//! use table_fit::{FitParams, TableFitDetector};
//!
//! # fn example(image: image::RgbImage) {
//! let detector = TableFitDetector::new(FitParams::default());
//! match detector.process(&image) {
//!     Ok(report) => println!("fits: {}", report.verdict.fits()),
//!     Err(err) => eprintln!("no decision: {err}"),
//! }
//! # }
//! ```
use super::params::FitParams;
use crate::bounding::BoundingGeometryExtractor;
use crate::detection::{HoughLineDetector, HsvSegmenter, LineDetector, RegionSegmenter};
use crate::disambiguate::{LineCandidateSet, LineDisambiguator};
use crate::error::FitError;
use crate::geometry::Line;
use crate::image::BinaryMask;
use crate::occlusion::OcclusionDecider;
use crate::types::FitReport;
use image::RgbImage;
use log::{debug, info, log_enabled, Level};
use std::time::Instant;

/// Table-fit detector over pluggable line and region collaborators.
pub struct TableFitDetector<L = HoughLineDetector, S = HsvSegmenter> {
    params: FitParams,
    line_detector: L,
    segmenter: S,
    disambiguator: LineDisambiguator,
    extractor: BoundingGeometryExtractor,
    decider: OcclusionDecider,
}

impl TableFitDetector {
    /// Create a detector with the bundled Hough and HSV collaborators.
    pub fn new(params: FitParams) -> Self {
        let line_detector = HoughLineDetector::new(params.hough.clone());
        let segmenter = HsvSegmenter::new(params.segmentation.clone());
        Self::with_collaborators(params, line_detector, segmenter)
    }
}

impl Default for TableFitDetector {
    fn default() -> Self {
        Self::new(FitParams::default())
    }
}

impl<L: LineDetector, S: RegionSegmenter> TableFitDetector<L, S> {
    /// Create a detector with custom collaborators. Only the edge-selection
    /// and decision parameters are read from `params`.
    pub fn with_collaborators(params: FitParams, line_detector: L, segmenter: S) -> Self {
        let disambiguator = LineDisambiguator::new(params.edge_selection.clone());
        let decider = OcclusionDecider::new(params.decision.clone());
        Self {
            params,
            line_detector,
            segmenter,
            disambiguator,
            extractor: BoundingGeometryExtractor::new(),
            decider,
        }
    }

    pub fn params(&self) -> &FitParams {
        &self.params
    }

    /// Run both collaborators on `image` and decide.
    pub fn process(&self, image: &RgbImage) -> Result<FitReport, FitError> {
        let total_start = Instant::now();
        let (width, height) = image.dimensions();
        debug!("TableFitDetector::process start w={} h={}", width, height);

        let (lines, mask) = rayon::join(
            || self.line_detector.detect(image),
            || self.segmenter.segment(image),
        );
        if log_enabled!(Level::Debug) {
            debug!(
                "TableFitDetector::process collaborators done lines={} mask_px={} ({:.3} ms)",
                lines.len(),
                mask.count(),
                total_start.elapsed().as_secs_f64() * 1000.0
            );
        }

        let mut report = self.process_parts(lines, width, height, &mask)?;
        report.latency_ms = total_start.elapsed().as_secs_f64() * 1000.0;
        Ok(report)
    }

    /// Decide from already extracted candidates and object mask.
    pub fn process_parts(
        &self,
        lines: Vec<Line>,
        width: u32,
        height: u32,
        mask: &BinaryMask,
    ) -> Result<FitReport, FitError> {
        let start = Instant::now();
        let candidates = LineCandidateSet::new(lines)?;
        let selection = self
            .disambiguator
            .select_with_diagnostics(&candidates, width, height)?;
        let bounding = self.extractor.extract(mask)?;
        let decision =
            self.decider
                .decide_with_trace(&selection.edge, &bounding.bbox, &bounding.extremes)?;
        let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
        info!(
            "verdict={:?} placement={:?} clipped={:?} box={:.1} latency_ms={:.3}",
            decision.verdict, decision.placement, decision.clipped_area, decision.box_area, latency_ms
        );
        Ok(FitReport {
            verdict: decision.verdict,
            placement: decision.placement,
            table_edge: selection.edge,
            bounding,
            edge_selection: selection.diagnostics,
            clipped_area: decision.clipped_area,
            box_area: decision.box_area,
            latency_ms,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Placement, Verdict};
    use std::f32::consts::FRAC_PI_2;

    const W: u32 = 640;
    const H: u32 = 480;

    struct CannedLines(Vec<Line>);

    impl LineDetector for CannedLines {
        fn detect(&self, _image: &RgbImage) -> Vec<Line> {
            self.0.clone()
        }
    }

    struct CannedMask(BinaryMask);

    impl RegionSegmenter for CannedMask {
        fn segment(&self, _image: &RgbImage) -> BinaryMask {
            self.0.clone()
        }
    }

    fn horizontal(y: f32) -> Line {
        Line::from_polar(-FRAC_PI_2, -y, W as f32).expect("not vertical")
    }

    fn bowl(y0: usize, y1: usize) -> BinaryMask {
        BinaryMask::from_fn(W as usize, H as usize, |x, y| {
            (250..350).contains(&x) && (y0..y1).contains(&y)
        })
    }

    fn detector(lines: Vec<Line>, mask: BinaryMask) -> TableFitDetector<CannedLines, CannedMask> {
        TableFitDetector::with_collaborators(
            FitParams::default(),
            CannedLines(lines),
            CannedMask(mask),
        )
    }

    #[test]
    fn bowl_below_the_table_fits() {
        let lines = vec![horizontal(200.0), Line::from_polar(0.1, 300.0, W as f32).expect("line")];
        let det = detector(lines, bowl(300, 400));
        let report = det.process(&RgbImage::new(W, H)).expect("decided");
        assert_eq!(report.verdict, Verdict::Fits);
        assert_eq!(report.placement, Placement::Below);
        assert_eq!(report.edge_selection.total, 2);
        assert_eq!(report.edge_selection.after_orientation, 1);
    }

    #[test]
    fn bowl_mostly_above_the_edge_does_not_fit() {
        let det = detector(vec![horizontal(380.0)], bowl(300, 400));
        let report = det.process(&RgbImage::new(W, H)).expect("decided");
        assert_eq!(report.placement, Placement::Straddling);
        assert_eq!(report.verdict, Verdict::DoesNotFit);
        assert!(report.clipped_area.is_some());
    }

    #[test]
    fn missing_lines_and_empty_mask_are_errors() {
        let det = detector(Vec::new(), bowl(300, 400));
        assert_eq!(
            det.process(&RgbImage::new(W, H)).unwrap_err(),
            FitError::NoCandidateRemaining { initial: 0 }
        );

        let det = detector(vec![horizontal(200.0)], BinaryMask::new(W as usize, H as usize));
        assert_eq!(
            det.process(&RgbImage::new(W, H)).unwrap_err(),
            FitError::EmptyMask
        );
    }
}

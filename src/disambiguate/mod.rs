//! Table-edge selection among noisy line candidates.
//!
//! The line detector returns every strong straight line in the photo: the
//! table's front edge, but also table legs, the floor/skirting-board line,
//! tile seams and so on. Three removal-only filters run in sequence over the
//! candidates sorted bottommost-first:
//!
//! 1. near-vertical lines are dropped;
//! 2. the bottommost line is dropped when it sits far away from all others
//!    (floor noise);
//! 3. sharply angled lines crossing inside the frame are resolved in favour
//!    of the more horizontal one.
//!
//! The first survivor is the table edge.

pub mod candidates;
pub mod filters;

pub use candidates::LineCandidateSet;
pub use filters::{filter_crossings, filter_isolated_bottom, filter_orientation};

use crate::detector::params::EdgeSelectionParams;
use crate::error::FitError;
use crate::geometry::Line;
use log::debug;
use serde::Serialize;

/// Number of candidates left after each filter.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct EdgeSelectionDiagnostics {
    pub total: usize,
    pub after_orientation: usize,
    pub after_isolation: usize,
    pub after_crossings: usize,
}

/// Selected edge together with the per-stage counts.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EdgeSelection {
    pub edge: Line,
    pub diagnostics: EdgeSelectionDiagnostics,
}

/// Picks the table's front edge out of a candidate set.
#[derive(Clone, Debug, Default)]
pub struct LineDisambiguator {
    params: EdgeSelectionParams,
}

impl LineDisambiguator {
    pub fn new(params: EdgeSelectionParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &EdgeSelectionParams {
        &self.params
    }

    pub fn select_table_edge(
        &self,
        candidates: &LineCandidateSet,
        image_width: u32,
        image_height: u32,
    ) -> Result<Line, FitError> {
        self.select_with_diagnostics(candidates, image_width, image_height)
            .map(|selection| selection.edge)
    }

    pub fn select_with_diagnostics(
        &self,
        candidates: &LineCandidateSet,
        image_width: u32,
        image_height: u32,
    ) -> Result<EdgeSelection, FitError> {
        let (survivors, diagnostics) =
            self.surviving_candidates(candidates, image_width, image_height);
        let edge = survivors
            .first()
            .copied()
            .ok_or(FitError::NoCandidateRemaining {
                initial: diagnostics.total,
            })?;
        debug!(
            "table edge: theta={:.3} rho={:.1} left=({:.1}, {:.1}) right=({:.1}, {:.1})",
            edge.orientation, edge.distance, edge.left.x, edge.left.y, edge.right.x, edge.right.y
        );
        Ok(EdgeSelection { edge, diagnostics })
    }

    /// Runs the three filters and returns the survivors in their original
    /// order.
    pub fn surviving_candidates(
        &self,
        candidates: &LineCandidateSet,
        image_width: u32,
        image_height: u32,
    ) -> (Vec<Line>, EdgeSelectionDiagnostics) {
        let p = &self.params;
        let mut diag = EdgeSelectionDiagnostics {
            total: candidates.lines().len(),
            ..Default::default()
        };

        let oriented = filter_orientation(candidates.lines(), p.min_orientation_angle);
        diag.after_orientation = oriented.len();

        let clustered = filter_isolated_bottom(&oriented, p.max_distance_cluster_gap);
        diag.after_isolation = clustered.len();

        let survivors = filter_crossings(
            &clustered,
            p.max_orientation_turn,
            p.frame_test,
            image_width as f32,
            image_height as f32,
        );
        diag.after_crossings = survivors.len();

        debug!(
            "edge selection: total={} orientation={} isolation={} crossings={}",
            diag.total, diag.after_orientation, diag.after_isolation, diag.after_crossings
        );
        (survivors, diag)
    }
}

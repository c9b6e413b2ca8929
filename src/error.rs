//! Failure modes of a single table-fit decision.
//!
//! None of them is retried or mapped onto a verdict: a failed decision is
//! reported as such and the caller decides whether to skip the image.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FitError {
    /// Every table-edge candidate was filtered out (or none was detected).
    #[error("no table-edge candidate left after filtering ({initial} candidates detected)")]
    NoCandidateRemaining { initial: usize },
    /// The object mask has no foreground region.
    #[error("object mask contains no region")]
    EmptyMask,
    /// The clipped area was requested for a box the edge does not cross
    /// cleanly.
    #[error("table edge meets the bounding box at {crossings} points, expected 2")]
    DegenerateIntersection { crossings: usize },
}

//! Table-fit detector wiring the collaborators to the decision core.
//!
//! Overview
//! - The line detector and the segmenter run side by side on the RGB image.
//! - The line candidates are sorted bottommost-first and disambiguated down
//!   to the table's front edge.
//! - The object mask yields a minimum-area rotated box and the object's
//!   topmost/bottommost points.
//! - The occlusion decider combines both into a [`Verdict`](crate::Verdict).
//!
//! Modules
//! - [`params`] – configuration types used by the detector and CLI.
//! - `pipeline` – the [`TableFitDetector`] implementation.

pub mod params;
mod pipeline;

pub use params::{
    DecisionParams, EdgeSelectionParams, FitParams, FrameTest, HoughParams, SegmentationParams,
};
pub use pipeline::TableFitDetector;

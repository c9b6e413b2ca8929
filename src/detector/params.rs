//! Parameter types configuring the detector stages.
//!
//! Every knob has a default tuned on the original table/bowl photographs
//! and can be overridden from the JSON runtime config; missing fields fall
//! back to their defaults.

use serde::{Deserialize, Serialize};

/// Detector-wide parameters.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FitParams {
    /// Edge map and Hough transform producing the line candidates.
    pub hough: HoughParams,
    /// Colour segmentation producing the object mask.
    pub segmentation: SegmentationParams,
    /// Heuristics selecting the table edge among the candidates.
    pub edge_selection: EdgeSelectionParams,
    /// Thresholds of the final placement decision.
    pub decision: DecisionParams,
}

/// Edge map and line transform settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoughParams {
    /// Gaussian blur applied to the grayscale image before Canny.
    pub blur_sigma: f32,
    /// Canny hysteresis thresholds (gradient magnitude of an 8-bit image).
    pub canny_low: f32,
    pub canny_high: f32,
    /// Minimum accumulator votes for a line.
    pub vote_threshold: u32,
    /// Non-maximum suppression radius in the (ρ, θ) accumulator.
    pub suppression_radius: u32,
}

impl Default for HoughParams {
    fn default() -> Self {
        Self {
            blur_sigma: 1.0,
            canny_low: 20.0,
            canny_high: 50.0,
            vote_threshold: 200,
            suppression_radius: 8,
        }
    }
}

/// HSV range and morphological cleanup of the object mask.
///
/// HSV follows the 8-bit OpenCV convention: hue in `[0, 180)`, saturation
/// and value in `[0, 255]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentationParams {
    pub hsv_min: [u8; 3],
    pub hsv_max: [u8; 3],
    /// Radius (in cross-shaped steps) of the closing applied first.
    pub closing_iterations: u8,
    /// Radius (in cross-shaped steps) of the opening applied after hole filling.
    pub opening_iterations: u8,
}

impl Default for SegmentationParams {
    fn default() -> Self {
        Self {
            hsv_min: [60, 50, 41],
            hsv_max: [179, 255, 255],
            closing_iterations: 3,
            opening_iterations: 30,
        }
    }
}

/// Where a crossing of two candidate lines must fall to count as inside the
/// frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameTest {
    /// `0 < x < width` or `0 < y < height`. Accepts crossings far outside the
    /// image as long as one coordinate is in range; kept as the default
    /// because the thresholds were tuned with it.
    #[default]
    EitherAxis,
    /// `0 < x < width` and `0 < y < height`.
    BothAxes,
}

impl FrameTest {
    pub fn contains(&self, x: f32, y: f32, width: f32, height: f32) -> bool {
        let in_x = 0.0 < x && x < width;
        let in_y = 0.0 < y && y < height;
        match self {
            FrameTest::EitherAxis => in_x || in_y,
            FrameTest::BothAxes => in_x && in_y,
        }
    }
}

/// Table-edge disambiguation thresholds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeSelectionParams {
    /// Lines with `|θ|` at or below this (radians) are near vertical and dropped.
    pub min_orientation_angle: f32,
    /// `|ρ|` gap (pixels) beyond which two lines belong to different clusters.
    pub max_distance_cluster_gap: f32,
    /// `|θ|` difference (radians) above which two lines may not cross in frame.
    pub max_orientation_turn: f32,
    pub frame_test: FrameTest,
}

impl Default for EdgeSelectionParams {
    fn default() -> Self {
        Self {
            min_orientation_angle: 1.0,
            max_distance_cluster_gap: 400.0,
            max_orientation_turn: 0.2,
            frame_test: FrameTest::EitherAxis,
        }
    }
}

/// Placement decision thresholds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecisionParams {
    /// Share of the bounding box allowed above the edge before a straddling
    /// object is rejected.
    pub max_above_area_fraction: f32,
}

impl Default for DecisionParams {
    fn default() -> Self {
        Self {
            max_above_area_fraction: 0.75,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let params: FitParams =
            serde_json::from_str(r#"{ "edge_selection": { "max_orientation_turn": 0.3 } }"#)
                .expect("valid params");
        assert_eq!(params.edge_selection.max_orientation_turn, 0.3);
        assert_eq!(params.edge_selection.min_orientation_angle, 1.0);
        assert_eq!(params.decision.max_above_area_fraction, 0.75);
        assert_eq!(params.segmentation.hsv_min, [60, 50, 41]);
    }

    #[test]
    fn frame_test_modes() {
        // x far outside, y inside.
        assert!(FrameTest::EitherAxis.contains(-500.0, 10.0, 100.0, 100.0));
        assert!(!FrameTest::BothAxes.contains(-500.0, 10.0, 100.0, 100.0));
        assert!(FrameTest::BothAxes.contains(50.0, 50.0, 100.0, 100.0));
        assert!(!FrameTest::EitherAxis.contains(0.0, 100.0, 100.0, 100.0));
    }

    #[test]
    fn frame_test_parses_snake_case() {
        let t: FrameTest = serde_json::from_str("\"both_axes\"").expect("valid");
        assert_eq!(t, FrameTest::BothAxes);
    }
}

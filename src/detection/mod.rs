//! Image-processing collaborators feeding the decision core.
//!
//! Both stages sit behind a trait so the pipeline can be driven by other
//! detectors (or by canned data in tests). The bundled implementations are
//! thin wrappers over `imageproc`.

pub mod hough;
pub mod hsv;
pub mod segmentation;

pub use hough::HoughLineDetector;
pub use segmentation::HsvSegmenter;

use crate::geometry::Line;
use crate::image::BinaryMask;
use image::RgbImage;

/// Produces the raw table-edge candidates of one image.
pub trait LineDetector: Send + Sync {
    fn detect(&self, image: &RgbImage) -> Vec<Line>;
}

/// Produces the binary mask of the object in one image.
pub trait RegionSegmenter: Send + Sync {
    fn segment(&self, image: &RgbImage) -> BinaryMask;
}

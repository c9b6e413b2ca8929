use super::LineDetector;
use crate::angle::to_signed_half_turn;
use crate::detector::params::HoughParams;
use crate::geometry::Line;
use image::{imageops, RgbImage};
use imageproc::edges::canny;
use imageproc::filter::gaussian_blur_f32;
use imageproc::hough::{detect_lines, LineDetectionOptions};
use log::debug;

/// Blur, Canny edges and a Hough line transform.
#[derive(Clone, Debug, Default)]
pub struct HoughLineDetector {
    params: HoughParams,
}

impl HoughLineDetector {
    pub fn new(params: HoughParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &HoughParams {
        &self.params
    }
}

impl LineDetector for HoughLineDetector {
    fn detect(&self, image: &RgbImage) -> Vec<Line> {
        let p = &self.params;
        let gray = imageops::grayscale(image);
        let smoothed = if p.blur_sigma > 0.0 {
            gaussian_blur_f32(&gray, p.blur_sigma)
        } else {
            gray
        };
        let edges = canny(&smoothed, p.canny_low, p.canny_high);
        let options = LineDetectionOptions {
            vote_threshold: p.vote_threshold,
            suppression_radius: p.suppression_radius,
        };
        let polar = detect_lines(&edges, options);
        let width = image.width() as f32;
        let lines: Vec<Line> = polar
            .iter()
            .filter_map(|pl| {
                let theta = (pl.angle_in_degrees as f32).to_radians();
                let (orientation, distance) = to_signed_half_turn(theta, pl.r);
                Line::from_polar(orientation, distance, width)
            })
            .collect();
        debug!(
            "hough: {} peaks, {} non-vertical lines",
            polar.len(),
            lines.len()
        );
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn step_edge_gives_a_horizontal_line() {
        let img = RgbImage::from_fn(200, 160, |_, y| {
            if y < 120 {
                Rgb([40, 30, 20])
            } else {
                Rgb([200, 200, 200])
            }
        });
        let detector = HoughLineDetector::new(HoughParams {
            vote_threshold: 100,
            ..Default::default()
        });
        let lines = detector.detect(&img);
        assert!(!lines.is_empty());
        let found = lines.iter().any(|l| {
            (l.abs_orientation() - FRAC_PI_2).abs() < 0.05
                && (l.left.y - 120.0).abs() < 3.0
                && (l.right.y - 120.0).abs() < 3.0
        });
        assert!(found, "lines: {lines:?}");
    }

    #[test]
    fn flat_image_has_no_lines() {
        let img = RgbImage::from_pixel(120, 90, Rgb([128, 128, 128]));
        assert!(HoughLineDetector::default().detect(&img).is_empty());
    }
}

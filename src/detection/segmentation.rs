use super::hsv::in_range;
use super::RegionSegmenter;
use crate::detector::params::SegmentationParams;
use crate::image::BinaryMask;
use image::{Luma, RgbImage};
use imageproc::distance_transform::Norm;
use imageproc::morphology::{close, open};
use imageproc::region_labelling::{connected_components, Connectivity};
use log::debug;
use std::collections::VecDeque;

/// Colour-range segmentation followed by morphological cleanup.
///
/// Steps: HSV in-range test, closing, hole filling, opening, then only the
/// largest 8-connected region is kept.
#[derive(Clone, Debug, Default)]
pub struct HsvSegmenter {
    params: SegmentationParams,
}

impl HsvSegmenter {
    pub fn new(params: SegmentationParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &SegmentationParams {
        &self.params
    }
}

impl RegionSegmenter for HsvSegmenter {
    fn segment(&self, image: &RgbImage) -> BinaryMask {
        let p = &self.params;
        let raw = in_range(image, p.hsv_min, p.hsv_max);
        let closed = close(&raw.to_gray(), Norm::L1, p.closing_iterations);
        let filled = fill_holes(&BinaryMask::from_gray(&closed));
        let opened = BinaryMask::from_gray(&open(&filled.to_gray(), Norm::L1, p.opening_iterations));
        let mask = largest_component(&opened);
        debug!(
            "segmentation: in_range={} filled={} opened={} kept={}",
            raw.count(),
            filled.count(),
            opened.count(),
            mask.count()
        );
        mask
    }
}

/// Background pixels not 4-connected to the image border become foreground.
pub fn fill_holes(mask: &BinaryMask) -> BinaryMask {
    let (w, h) = (mask.w, mask.h);
    let mut outside = vec![false; w * h];
    let mut queue = VecDeque::new();
    let mut seed = |x: usize, y: usize, queue: &mut VecDeque<(usize, usize)>| {
        let i = y * w + x;
        if !mask.get(x, y) && !outside[i] {
            outside[i] = true;
            queue.push_back((x, y));
        }
    };
    for x in 0..w {
        seed(x, 0, &mut queue);
        if h > 1 {
            seed(x, h - 1, &mut queue);
        }
    }
    for y in 0..h {
        seed(0, y, &mut queue);
        if w > 1 {
            seed(w - 1, y, &mut queue);
        }
    }
    while let Some((x, y)) = queue.pop_front() {
        if x > 0 {
            seed(x - 1, y, &mut queue);
        }
        if x + 1 < w {
            seed(x + 1, y, &mut queue);
        }
        if y > 0 {
            seed(x, y - 1, &mut queue);
        }
        if y + 1 < h {
            seed(x, y + 1, &mut queue);
        }
    }
    BinaryMask::from_fn(w, h, |x, y| !outside[y * w + x])
}

/// Keeps the 8-connected region with the most pixels; the lowest label
/// wins ties.
pub fn largest_component(mask: &BinaryMask) -> BinaryMask {
    let labels = connected_components(&mask.to_gray(), Connectivity::Eight, Luma([0u8]));
    let mut sizes: Vec<usize> = Vec::new();
    for px in labels.pixels() {
        let label = px[0] as usize;
        if label == 0 {
            continue;
        }
        if sizes.len() <= label {
            sizes.resize(label + 1, 0);
        }
        sizes[label] += 1;
    }
    let mut best: Option<(usize, usize)> = None;
    for (label, &size) in sizes.iter().enumerate().skip(1) {
        if size > best.map_or(0, |(_, s)| s) {
            best = Some((label, size));
        }
    }
    let Some((keep, _)) = best else {
        return BinaryMask::new(mask.w, mask.h);
    };
    BinaryMask::from_fn(mask.w, mask.h, |x, y| {
        labels.get_pixel(x as u32, y as u32)[0] as usize == keep
    })
}

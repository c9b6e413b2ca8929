//! 8-bit HSV in the OpenCV convention.
//!
//! Hue is halved to fit a byte (`[0, 180)`), saturation and value span
//! `[0, 255]`.

use crate::image::BinaryMask;
use image::{Rgb, RgbImage};

pub fn rgb_to_hsv(px: Rgb<u8>) -> [u8; 3] {
    let [r, g, b] = px.0.map(f32::from);
    let v = r.max(g).max(b);
    let min = r.min(g).min(b);
    let diff = v - min;
    let s = if v > 0.0 { 255.0 * diff / v } else { 0.0 };
    let h = if diff == 0.0 {
        0.0
    } else if v == r {
        60.0 * (g - b) / diff
    } else if v == g {
        120.0 + 60.0 * (b - r) / diff
    } else {
        240.0 + 60.0 * (r - g) / diff
    };
    let h = if h < 0.0 { h + 360.0 } else { h };
    // 360 degrees wraps back to hue 0.
    let h = (h / 2.0).round() as u32 % 180;
    [h as u8, s.round() as u8, v as u8]
}

/// Foreground where every HSV channel lies within `[lo, hi]` (inclusive).
pub fn in_range(image: &RgbImage, lo: [u8; 3], hi: [u8; 3]) -> BinaryMask {
    BinaryMask::from_fn(image.width() as usize, image.height() as usize, |x, y| {
        let hsv = rgb_to_hsv(*image.get_pixel(x as u32, y as u32));
        (0..3).all(|c| lo[c] <= hsv[c] && hsv[c] <= hi[c])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primaries_and_gray() {
        assert_eq!(rgb_to_hsv(Rgb([255, 0, 0])), [0, 255, 255]);
        assert_eq!(rgb_to_hsv(Rgb([0, 255, 0])), [60, 255, 255]);
        assert_eq!(rgb_to_hsv(Rgb([0, 0, 255])), [120, 255, 255]);
        assert_eq!(rgb_to_hsv(Rgb([128, 128, 128])), [0, 0, 128]);
        assert_eq!(rgb_to_hsv(Rgb([0, 0, 0])), [0, 0, 0]);
    }

    #[test]
    fn lilac_is_in_the_bowl_range() {
        assert_eq!(rgb_to_hsv(Rgb([150, 90, 200])), [136, 140, 200]);
        let img = RgbImage::from_fn(4, 1, |x, _| {
            if x < 2 {
                Rgb([150, 90, 200])
            } else {
                Rgb([90, 60, 30])
            }
        });
        let mask = in_range(&img, [60, 50, 41], [179, 255, 255]);
        assert!(mask.get(0, 0) && mask.get(1, 0));
        assert!(!mask.get(2, 0) && !mask.get(3, 0));
    }
}

//! Owned binary mask in row-major layout (stride == width).
//!
//! Each byte is `0` (background) or `1` (foreground). Conversions to and
//! from 8-bit gray images map foreground to `255` and any non-zero gray
//! value to foreground.
use super::traits::{ImageView, ImageViewMut};
use image::{GrayImage, Luma};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinaryMask {
    /// Mask width in pixels
    pub w: usize,
    /// Mask height in pixels
    pub h: usize,
    /// Number of elements between consecutive rows (equals `w`)
    pub stride: usize,
    /// Backing storage in row-major order
    pub data: Vec<u8>,
}

impl BinaryMask {
    /// All-background mask of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![0; w * h],
        }
    }

    /// Mask whose foreground is where `f(x, y)` holds.
    pub fn from_fn(w: usize, h: usize, mut f: impl FnMut(usize, usize) -> bool) -> Self {
        let mut mask = Self::new(w, h);
        for y in 0..h {
            for (x, v) in mask.row_mut(y).iter_mut().enumerate() {
                *v = u8::from(f(x, y));
            }
        }
        mask
    }

    /// Non-zero pixels of `gray` become foreground.
    pub fn from_gray(gray: &GrayImage) -> Self {
        Self::from_fn(gray.width() as usize, gray.height() as usize, |x, y| {
            gray.get_pixel(x as u32, y as u32)[0] != 0
        })
    }

    /// Foreground as `255`, background as `0`.
    pub fn to_gray(&self) -> GrayImage {
        GrayImage::from_fn(self.w as u32, self.h as u32, |x, y| {
            Luma([if self.get(x as usize, y as usize) { 255 } else { 0 }])
        })
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.stride + x
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.data[self.idx(x, y)] != 0
    }

    /// Number of foreground pixels.
    pub fn count(&self) -> usize {
        self.rows()
            .map(|row| row.iter().filter(|&&v| v != 0).count())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

impl ImageView for BinaryMask {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}

impl ImageViewMut for BinaryMask {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let start = y * self.stride;
        let end = start + self.w;
        &mut self.data[start..end]
    }
}

use image::{Rgb, RgbImage};

pub const WIDTH: u32 = 640;
pub const HEIGHT: u32 = 480;

pub const TABLE: Rgb<u8> = Rgb([90, 60, 30]);
pub const FLOOR: Rgb<u8> = Rgb([128, 128, 128]);
pub const LILAC: Rgb<u8> = Rgb([150, 90, 200]);

/// Table top above `edge_y`, floor below, and a lilac rectangular bowl
/// covering `[x0, x1) × [y0, y1)`.
pub fn scene(edge_y: u32, bowl: (u32, u32, u32, u32)) -> RgbImage {
    assert!(edge_y < HEIGHT, "table edge must be inside the image");
    let (x0, y0, x1, y1) = bowl;
    RgbImage::from_fn(WIDTH, HEIGHT, |x, y| {
        if (x0..x1).contains(&x) && (y0..y1).contains(&y) {
            LILAC
        } else if y < edge_y {
            TABLE
        } else {
            FLOOR
        }
    })
}

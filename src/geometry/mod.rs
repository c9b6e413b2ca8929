//! Planar geometry primitives shared by the decision engine.
//!
//! All coordinates are image coordinates in pixels: `x` grows to the right
//! and `y` grows downward.
//!
//! - [`Line`]: a detected straight line in polar form with its crossings of
//!   the left and right image borders.
//! - [`side_of`] / [`HalfPlane`]: signed cross-product half-plane test.
//! - [`Segment`] / [`segment_intersect`]: finite segments and their crossing.
//! - [`Polygon`]: shoelace area, half-plane clipping, boundary crossings.
//! - [`RotatedRect`] / [`min_area_rect`]: minimum-area enclosing rectangle
//!   via convex hull and rotating calipers.

pub mod half_plane;
pub mod hull;
pub mod line;
pub mod polygon;
pub mod rect;
pub mod segment;

/// A point in image coordinates.
pub type Point = nalgebra::Point2<f32>;

pub use half_plane::{side_of, HalfPlane};
pub use hull::convex_hull;
pub use line::Line;
pub use polygon::Polygon;
pub use rect::{min_area_rect, RotatedRect};
pub use segment::{segment_intersect, Segment};

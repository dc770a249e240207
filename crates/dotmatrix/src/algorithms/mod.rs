//! # Rasterization algorithms
//!
//! Every shape in this module is a lazy, finite iterator over the pixels it
//! covers. None of them know about a [`Matrix`](crate::Matrix); they produce
//! plain [`Point`]s that may lie anywhere, including negative coordinates.
//!
//! All iterators are `Clone`, so a shape can be kept around and replayed.

use smallvec::SmallVec;

use crate::Point;

mod bezier;
mod circle;
mod ellipse;
mod line;

pub use bezier::{bezier_evaluate, bezier_sample, default_steps, BezierSamples};
pub use circle::Circle;
pub use ellipse::Ellipse;
pub use line::Line;

/// Points that were computed but not yet yielded, stored in reverse
pub(crate) type Pending = SmallVec<[Point; 8]>;

/// Bresenham's line from `p0` to `p1`, both inclusive
///
/// ```
/// # use dotmatrix::algorithms::line;
/// let points: Vec<_> = line((0, 0), (3, 1)).collect();
/// assert_eq!(points, [(0, 0), (1, 0), (2, 1), (3, 1)]);
/// ```
pub fn line(p0: Point, p1: Point) -> Line {
    Line::new(p0, p1)
}

/// Midpoint circle around `center` with radius `r`
pub fn circle(center: Point, r: u32) -> Circle {
    Circle::new(center, r)
}

/// Midpoint ellipse around `center` with radii `r1` (horizontal) and `r2`
/// (vertical)
pub fn ellipse(center: Point, r1: u32, r2: u32) -> Ellipse {
    Ellipse::new(center, r1, r2)
}

/// Round to the nearest pixel, ties go to the even neighbour
///
/// ```
/// # use dotmatrix::algorithms::round;
/// assert_eq!(round(2.5), 2);
/// assert_eq!(round(3.5), 4);
/// assert_eq!(round(-0.6), -1);
/// ```
pub fn round(value: f64) -> i32 {
    value.round_ties_even() as i32
}

/// Saturate an intermediate coordinate into the [`Point`] range
pub(crate) fn narrow(value: i64) -> i32 {
    value.clamp(i32::MIN.into(), i32::MAX.into()) as i32
}

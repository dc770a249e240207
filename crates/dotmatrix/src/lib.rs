//! # Pixel matrices rendered as text
//!
//! This crate draws points, lines, circles, ellipses, polygons, Bezier curves
//! and sampled functions onto a grid of logical pixels, and renders that grid
//! as text by packing several pixels into one character.
//!
//! ```
//! use dotmatrix::{Brush, Matrix};
//!
//! let mut m: Matrix = Matrix::new(4, 4);
//! m.rectangle((0, 0), (3, 3), Brush::UseDefault);
//! assert_eq!(m.render(), "\u{28CF}\u{28F9}");
//! ```
//!
//! The way pixels are stored and turned into glyphs is up to the
//! [`Display`]: [`Braille`] packs 2×4 pixels into one Braille pattern,
//! [`Block`] packs 2×2 pixels into half block characters and [`Unit`] draws
//! every pixel with a configurable pair of strings.
#![warn(missing_docs)]

pub mod algorithms;
pub mod brush;
pub mod display;
mod error;
pub mod matrix;
mod shapes;

pub use brush::Brush;
pub use display::{Block, Braille, Display, DisplayKind, Unit};
pub use error::{MatrixError, MatrixResult};
pub use matrix::Matrix;
pub use shapes::{Dotted, PlotOptions};

/// A pixel position `(x, y)`, with `x` growing to the right and `y` downwards
pub type Point = (i32, i32);

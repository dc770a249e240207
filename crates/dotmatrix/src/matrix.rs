//! # The pixel matrix
//!
//! A [`Matrix`] is a thin owner of a [`Display`] that adds brush handling,
//! bounds-tolerant accessors and the drawing operations.
//!
//! There are two ways to access a pixel:
//!
//! - [`Matrix::get`] and [`Matrix::set`] fail with
//!   [`MatrixError::OutOfBounds`] outside of the matrix.
//! - [`Matrix::get_clamped`] and [`Matrix::set_clamped`] never fail. The first
//!   returns a fallback, the second does nothing. All drawing operations use
//!   these, so shapes that leave the matrix are clipped.

use std::fmt;

use log::trace;

use crate::{Braille, Brush, Display, MatrixError, MatrixResult, Point};

/// A grid of pixels, stored and rendered by a [`Display`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix<D = Braille> {
    display: D,
}

impl<D: Display> Matrix<D> {
    /// Create a matrix with every pixel off and the display's own default brush
    pub fn new(width: u32, height: u32) -> Self {
        Matrix {
            display: D::new(width, height, Brush::UseDefault),
        }
    }

    /// Create a matrix with every pixel off and the given default brush
    pub fn with_brush(
        width: u32,
        height: u32,
        default_brush: impl Into<Brush<D::Value>>,
    ) -> Self {
        Matrix {
            display: D::new(width, height, default_brush.into()),
        }
    }

    /// Create a matrix on top of an existing display
    ///
    /// The display is only adopted if it is exactly `width` by `height`
    /// pixels. An explicit `default_brush` replaces the one of the display.
    pub fn with_display(
        width: u32,
        height: u32,
        mut display: D,
        default_brush: impl Into<Brush<D::Value>>,
    ) -> MatrixResult<Self> {
        let found = (display.width(), display.height());
        if found != (width, height) {
            return Err(MatrixError::DimensionMismatch {
                expected: (width, height),
                found,
            });
        }
        let brush = default_brush.into().resolve(display.default_brush());
        display.set_default_brush(brush);
        Ok(Matrix { display })
    }

    /// Create a matrix that matches the size of `display`
    pub fn from_display(display: D) -> Self {
        Matrix { display }
    }

    /// The width in pixels
    pub fn width(&self) -> u32 {
        self.display.width()
    }

    /// The height in pixels
    pub fn height(&self) -> u32 {
        self.display.height()
    }

    /// The value used for [`Brush::UseDefault`]
    pub fn default_brush(&self) -> D::Value {
        self.display.default_brush()
    }

    /// Get a reference to the display
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Return the display
    pub fn into_display(self) -> D {
        self.display
    }

    /// Get the value of a pixel
    pub fn get(&self, pos: Point) -> MatrixResult<D::Value> {
        self.display.get(pos)
    }

    /// Set the value of a pixel
    pub fn set(&mut self, pos: Point, value: D::Value) -> MatrixResult<()> {
        self.display.set(pos, value)
    }

    /// Get the value of a pixel, or `fallback` if it is out of bounds
    pub fn get_clamped(&self, pos: Point, fallback: D::Value) -> D::Value {
        self.display.get(pos).unwrap_or(fallback)
    }

    /// Set the value of a pixel, doing nothing if it is out of bounds
    pub fn set_clamped(&mut self, pos: Point, value: D::Value) {
        if let Err(e) = self.display.set(pos, value) {
            trace!("Clipped: {}", e);
        }
    }

    /// Write `value` to every pixel
    pub fn fill(&mut self, value: D::Value) {
        for y in 0..self.height() {
            for x in 0..self.width() {
                self.set_clamped((x as i32, y as i32), value);
            }
        }
    }

    /// The pixel values, one vector per row
    pub fn rows(&self) -> Vec<Vec<D::Value>> {
        (0..self.height())
            .map(|y| {
                (0..self.width())
                    .filter_map(|x| self.get((x as i32, y as i32)).ok())
                    .collect()
            })
            .collect()
    }

    /// Render the current state
    pub fn render(&self) -> D::Output {
        self.display.render()
    }
}

impl<D> fmt::Display for Matrix<D>
where
    D: Display,
    D::Output: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::Matrix;
    use crate::{Block, Braille, Brush, Display, MatrixError, Unit};

    #[test]
    fn test_from_display() {
        let mut display = Block::new(3, 2, Brush::UseDefault);
        display.set((2, 1), true).unwrap();
        let mut m = Matrix::from_display(display);
        assert_eq!((m.width(), m.height()), (3, 2));
        assert_eq!(m.get((2, 1)), Ok(true));

        m.set((0, 0), true).unwrap();
        assert_eq!(m.display().get((0, 0)), Ok(true));
        assert_eq!(m.display().render(), "▀ ▄ ");
        let display = m.into_display();
        assert_eq!((display.width(), display.height()), (3, 2));
        assert_eq!(display.get((2, 1)), Ok(true));
    }

    #[test]
    fn test_with_display_mismatch() {
        let display = Braille::new(4, 8, Brush::UseDefault);
        let err = Matrix::with_display(4, 4, display, Brush::UseDefault).unwrap_err();
        assert_eq!(
            err,
            MatrixError::DimensionMismatch {
                expected: (4, 4),
                found: (4, 8)
            }
        );
    }

    #[test]
    fn test_with_display_brush() {
        let display = Unit::new(2, 2, Brush::Explicit(false));
        let kept = Matrix::with_display(2, 2, display.clone(), Brush::UseDefault).unwrap();
        assert!(!kept.default_brush());
        let replaced = Matrix::with_display(2, 2, display, true).unwrap();
        assert!(replaced.default_brush());
    }

    #[test]
    fn test_clamped() {
        let mut m: Matrix = Matrix::new(2, 4);
        m.set_clamped((5, 5), true);
        m.set_clamped((-1, 0), true);
        assert_eq!(m.render(), "\u{2800}");
        assert!(m.get_clamped((2, 0), true));
        assert!(!m.get_clamped((2, 0), false));
        m.set_clamped((1, 3), true);
        assert!(m.get_clamped((1, 3), false));
    }

    #[test]
    fn test_fill_and_rows() {
        let mut m: Matrix<Unit> = Matrix::new(3, 2);
        m.fill(true);
        assert_eq!(m.rows(), vec![vec![true; 3]; 2]);
        m.set((1, 1), false).unwrap();
        assert_eq!(m.rows(), [[true, true, true], [true, false, true]]);
        assert_eq!(m.to_string(), "██████\n██  ██");
    }
}

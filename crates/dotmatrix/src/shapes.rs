//! Drawing operations
//!
//! Every shape is turned into a sequence of points which is then scattered
//! onto the matrix with [`Matrix::set_clamped`]. Nothing here fails because
//! of geometry that leaves the matrix.

use std::iter;

use crate::{
    algorithms::{self, Circle, Ellipse, Line},
    Brush, Display, Matrix, MatrixResult, Point,
};

/// Something that can be drawn as a set of pixels
pub trait Dotted {
    /// The pixel positions of this object, relative to its origin
    fn dots(&self) -> impl Iterator<Item = Point> + '_;
}

impl Dotted for [Point] {
    fn dots(&self) -> impl Iterator<Item = Point> + '_ {
        self.iter().copied()
    }
}

impl Dotted for Vec<Point> {
    fn dots(&self) -> impl Iterator<Item = Point> + '_ {
        self.iter().copied()
    }
}

impl Dotted for Line {
    fn dots(&self) -> impl Iterator<Item = Point> + '_ {
        self.clone()
    }
}

impl Dotted for Circle {
    fn dots(&self) -> impl Iterator<Item = Point> + '_ {
        self.clone()
    }
}

impl Dotted for Ellipse {
    fn dots(&self) -> impl Iterator<Item = Point> + '_ {
        self.clone()
    }
}

/// Placement of a function plot
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct PlotOptions {
    /// Added to every plotted point
    pub origin: Point,
    /// Swap the axes, so that the function runs top to bottom
    pub transpose: bool,
}

impl<D: Display> Matrix<D> {
    fn scatter_value<I>(&mut self, points: I, value: D::Value)
    where
        I: IntoIterator<Item = Point>,
    {
        for pos in points {
            self.set_clamped(pos, value);
        }
    }

    fn resolve(&self, brush: impl Into<Brush<D::Value>>) -> D::Value {
        brush.into().resolve(self.default_brush())
    }

    fn chain_value<I>(&mut self, points: I, value: D::Value)
    where
        I: IntoIterator<Item = Point>,
    {
        let mut points = points.into_iter();
        if let Some(mut prev) = points.next() {
            for next in points {
                self.scatter_value(algorithms::line(prev, next), value);
                prev = next;
            }
        }
    }

    /// Set all `points` to `brush`, skipping those outside of the matrix
    pub fn scatter<I>(&mut self, points: I, brush: impl Into<Brush<D::Value>>)
    where
        I: IntoIterator<Item = Point>,
    {
        let value = self.resolve(brush);
        self.scatter_value(points, value);
    }

    /// Draw a [`Dotted`] object with its origin at `at`
    pub fn show<T>(&mut self, obj: &T, at: Point, brush: impl Into<Brush<D::Value>>)
    where
        T: Dotted + ?Sized,
    {
        let (x0, y0) = at;
        let value = self.resolve(brush);
        let dots = obj
            .dots()
            .map(|(x, y)| (x0.saturating_add(x), y0.saturating_add(y)));
        self.scatter_value(dots, value);
    }

    /// Draw a line from `p0` to `p1`
    pub fn line(&mut self, p0: Point, p1: Point, brush: impl Into<Brush<D::Value>>) {
        self.scatter(algorithms::line(p0, p1), brush);
    }

    /// Draw a circle around `center`
    pub fn circle(&mut self, center: Point, r: u32, brush: impl Into<Brush<D::Value>>) {
        self.scatter(algorithms::circle(center, r), brush);
    }

    /// Draw an ellipse around `center` with horizontal radius `r1` and
    /// vertical radius `r2`
    pub fn ellipse(&mut self, center: Point, r1: u32, r2: u32, brush: impl Into<Brush<D::Value>>) {
        self.scatter(algorithms::ellipse(center, r1, r2), brush);
    }

    /// Draw a line between each pair of consecutive points
    pub fn chain<I>(&mut self, points: I, brush: impl Into<Brush<D::Value>>)
    where
        I: IntoIterator<Item = Point>,
    {
        let value = self.resolve(brush);
        self.chain_value(points, value);
    }

    /// Draw a closed polygon through `points`
    pub fn polygon(&mut self, points: &[Point], brush: impl Into<Brush<D::Value>>) {
        let value = self.resolve(brush);
        self.chain_value(points.iter().copied(), value);
        if let (Some(&first), Some(&last)) = (points.first(), points.last()) {
            self.scatter_value(algorithms::line(last, first), value);
        }
    }

    /// Draw an axis-aligned rectangle between two opposite corners
    pub fn rectangle(&mut self, c0: Point, c1: Point, brush: impl Into<Brush<D::Value>>) {
        let ((x0, y0), (x1, y1)) = (c0, c1);
        self.polygon(&[c0, (x1, y0), c1, (x0, y1)], brush);
    }

    /// Draw a triangle
    pub fn triangle(&mut self, a: Point, b: Point, c: Point, brush: impl Into<Brush<D::Value>>) {
        self.polygon(&[a, b, c], brush);
    }

    /// Draw a chain through the points `(xs[i], ys[i])`
    pub fn plot<X, Y>(&mut self, xs: X, ys: Y, brush: impl Into<Brush<D::Value>>)
    where
        X: IntoIterator<Item = i32>,
        Y: IntoIterator<Item = i32>,
    {
        self.chain(xs.into_iter().zip(ys), brush);
    }

    /// Plot `f` at the pixel columns `to_x(x)` for every `x` in `xs`
    ///
    /// The function values are mapped to rows with `to_y`. Every point is
    /// offset by `options.origin` before the axes are (optionally) swapped.
    pub fn plotf_with<T, S, F, X, Y, I>(
        &mut self,
        f: F,
        xs: I,
        to_x: X,
        to_y: Y,
        options: PlotOptions,
        brush: impl Into<Brush<D::Value>>,
    ) where
        T: Copy,
        F: Fn(T) -> S,
        X: Fn(T) -> i32,
        Y: Fn(S) -> i32,
        I: IntoIterator<Item = T>,
    {
        let (x0, y0) = options.origin;
        let points = xs.into_iter().map(|x| {
            let px = x0.saturating_add(to_x(x));
            let py = y0.saturating_add(to_y(f(x)));
            if options.transpose {
                (py, px)
            } else {
                (px, py)
            }
        });
        self.chain(points, brush);
    }

    /// Plot a real function, rounding to the nearest pixel
    ///
    /// ```
    /// # use dotmatrix::{Brush, Matrix, PlotOptions, Unit};
    /// let mut m: Matrix<Unit> = Matrix::new(5, 3);
    /// let xs = (0..5).map(f64::from);
    /// m.plotf(|x| x / 2.0, xs, PlotOptions::default(), Brush::UseDefault);
    /// assert_eq!(m.rows()[0], [true, true, false, false, false]);
    /// assert_eq!(m.rows()[2], [false, false, false, true, true]);
    /// ```
    pub fn plotf<F, I>(
        &mut self,
        f: F,
        xs: I,
        options: PlotOptions,
        brush: impl Into<Brush<D::Value>>,
    ) where
        F: Fn(f64) -> f64,
        I: IntoIterator<Item = f64>,
    {
        self.plotf_with(f, xs, algorithms::round, algorithms::round, options, brush);
    }

    /// Draw a Bezier curve with the given control points
    ///
    /// The curve is sampled `steps` times (or a number of times depending on
    /// its size, see [`algorithms::default_steps`]) and the samples are
    /// connected with straight lines.
    pub fn curve(
        &mut self,
        points: &[Point],
        steps: Option<u32>,
        brush: impl Into<Brush<D::Value>>,
    ) -> MatrixResult<()> {
        let samples = algorithms::bezier_sample(points, steps)?;
        let first = points[0];
        let last = points[points.len() - 1];
        let path = iter::once(first).chain(samples).chain(iter::once(last));
        self.chain(path, brush);
        Ok(())
    }
}

//! Scene files
//!
//! A scene is a [RON](https://github.com/ron-rs/ron) file that describes the
//! size of the matrix and a list of shapes to draw on it:
//!
//! ```ron
//! (
//!     width: 40,
//!     height: 20,
//!     display: Some(Braille),
//!     shapes: [
//!         Rectangle((0, 0), (39, 19)),
//!         Circle(center: (20, 10), r: 8),
//!         Erase(Line((0, 0), (39, 19))),
//!     ],
//! )
//! ```
use std::{fs, io::Read};

use color_eyre::eyre::{self, WrapErr};
use dotmatrix::{
    algorithms::round, Block, Braille, Brush, Display, DisplayKind, Matrix, MatrixResult,
    PlotOptions, Point, Unit,
};
use log::{debug, info};
use serde::Deserialize;

use super::opt::Options;

fn one() -> f64 {
    1.0
}

/// The strings used by the unit display
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UnitChars {
    /// Text for a pixel that is off
    pub off: String,
    /// Text for a pixel that is on
    pub on: String,
}

/// A set of shapes on a matrix of fixed size
#[derive(Debug, Clone, Deserialize)]
pub struct Scene {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// The display to use, unless overridden on the command line
    #[serde(default)]
    pub display: Option<DisplayKind>,
    /// The value shapes are drawn with (default: `true`)
    #[serde(default)]
    pub default_brush: Option<bool>,
    /// Strings for the unit display
    #[serde(default)]
    pub unit: Option<UnitChars>,
    /// The shapes, drawn in order
    #[serde(default)]
    pub shapes: Vec<Shape>,
}

/// The functions available to [`Shape::Function`]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
pub enum Function {
    /// `sin(x)`
    Sin,
    /// `cos(x)`
    Cos,
    /// `x²`
    Square,
    /// `x`
    Identity,
}

impl Function {
    /// Evaluate the function at `x`
    pub fn apply(self, x: f64) -> f64 {
        match self {
            Self::Sin => x.sin(),
            Self::Cos => x.cos(),
            Self::Square => x * x,
            Self::Identity => x,
        }
    }
}

/// A single drawing command
#[derive(Debug, Clone, Deserialize)]
pub enum Shape {
    /// Individual pixels
    Points(Vec<Point>),
    /// A line between two points
    Line(Point, Point),
    /// A circle
    Circle {
        /// The center
        center: Point,
        /// The radius
        r: u32,
    },
    /// An axis-aligned ellipse
    Ellipse {
        /// The center
        center: Point,
        /// Horizontal radius
        r1: u32,
        /// Vertical radius
        r2: u32,
    },
    /// A rectangle between two opposite corners
    Rectangle(Point, Point),
    /// A triangle
    Triangle(Point, Point, Point),
    /// An open path
    Chain(Vec<Point>),
    /// A closed path
    Polygon(Vec<Point>),
    /// A path through `(xs[i], ys[i])`
    Plot {
        /// The x coordinates
        xs: Vec<i32>,
        /// The y coordinates
        ys: Vec<i32>,
    },
    /// A sampled function, with y pointing up
    ///
    /// For every pixel column `px` in `columns`, the function is evaluated at
    /// `px / x_scale` and the result multiplied with `y_scale`.
    Function {
        /// The function to plot
        function: Function,
        /// First and last pixel column (inclusive)
        columns: (i32, i32),
        /// Pixels per unit on the x axis
        #[serde(default = "one")]
        x_scale: f64,
        /// Pixels per unit on the y axis
        #[serde(default = "one")]
        y_scale: f64,
        /// Pixel position of `(0, 0)`
        #[serde(default)]
        origin: Point,
        /// Swap the axes
        #[serde(default)]
        transpose: bool,
    },
    /// A Bezier curve
    Curve {
        /// The control points (at least 2)
        points: Vec<Point>,
        /// Number of samples, derived from the control points if missing
        #[serde(default)]
        steps: Option<u32>,
    },
    /// Draw a shape with the opposite brush
    Erase(Box<Shape>),
}

impl Shape {
    /// Draw this shape onto `matrix`
    pub fn draw<D>(&self, matrix: &mut Matrix<D>, brush: Brush<bool>) -> MatrixResult<()>
    where
        D: Display<Value = bool>,
    {
        match self {
            Self::Points(points) => matrix.scatter(points.iter().copied(), brush),
            Self::Line(p0, p1) => matrix.line(*p0, *p1, brush),
            Self::Circle { center, r } => matrix.circle(*center, *r, brush),
            Self::Ellipse { center, r1, r2 } => matrix.ellipse(*center, *r1, *r2, brush),
            Self::Rectangle(c0, c1) => matrix.rectangle(*c0, *c1, brush),
            Self::Triangle(a, b, c) => matrix.triangle(*a, *b, *c, brush),
            Self::Chain(points) => matrix.chain(points.iter().copied(), brush),
            Self::Polygon(points) => matrix.polygon(points, brush),
            Self::Plot { xs, ys } => {
                matrix.plot(xs.iter().copied(), ys.iter().copied(), brush)
            }
            Self::Function {
                function,
                columns: (start, end),
                x_scale,
                y_scale,
                origin,
                transpose,
            } => {
                let options = PlotOptions {
                    origin: *origin,
                    transpose: *transpose,
                };
                matrix.plotf_with(
                    |px: i32| y_scale * function.apply(f64::from(px) / x_scale),
                    *start..=*end,
                    |px| px,
                    |y| round(-y),
                    options,
                    brush,
                );
            }
            Self::Curve { points, steps } => matrix.curve(points, *steps, brush)?,
            Self::Erase(shape) => {
                let current = brush.resolve(matrix.default_brush());
                shape.draw(matrix, Brush::Explicit(!current))?;
            }
        }
        Ok(())
    }
}

impl Scene {
    /// Parse a scene from RON
    pub fn parse(text: &str) -> eyre::Result<Self> {
        let scene = ron::from_str(text).wrap_err("Failed to parse scene")?;
        Ok(scene)
    }

    /// Read the scene named in the options
    pub fn load(opt: &Options) -> eyre::Result<Self> {
        let text = if opt.is_stdin() {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .wrap_err("Failed to read scene from STDIN")?;
            text
        } else {
            fs::read_to_string(&opt.file).wrap_err_with(|| {
                format!("Failed to read scene file `{}`", opt.file.display())
            })?
        };
        Self::parse(&text)
    }

    /// Draw all shapes onto `matrix` with its default brush
    pub fn draw<D>(&self, matrix: &mut Matrix<D>) -> MatrixResult<()>
    where
        D: Display<Value = bool>,
    {
        for shape in &self.shapes {
            debug!("{:?}", shape);
            shape.draw(matrix, Brush::UseDefault)?;
        }
        Ok(())
    }

    /// Draw the scene with the display and brush selected by `opt`
    pub fn render(&self, opt: &Options) -> eyre::Result<String> {
        let kind = opt.display.or(self.display).unwrap_or_default();
        let brush = self.default_brush.unwrap_or(true) ^ opt.invert;
        let (columns, rows) = self.cells(kind);
        info!(
            "Drawing {} shapes on a {}x{} {} display ({} columns, {} rows)",
            self.shapes.len(),
            self.width,
            self.height,
            kind,
            columns,
            rows
        );
        let (width, height) = (self.width, self.height);
        let text = match kind {
            DisplayKind::Braille => {
                let matrix: Matrix<Braille> = Matrix::with_brush(width, height, brush);
                self.render_on(matrix, opt.invert)
            }
            DisplayKind::Block => {
                let matrix: Matrix<Block> = Matrix::with_brush(width, height, brush);
                self.render_on(matrix, opt.invert)
            }
            DisplayKind::Unit => {
                let (off, on) = self.unit_chars(opt);
                let unit = Unit::with_chars(width, height, Brush::Explicit(brush), off, on);
                self.render_on(Matrix::from_display(unit), opt.invert)
            }
        };
        text.wrap_err("Failed to draw scene")
    }

    /// The number of `(columns, rows)` of glyphs `kind` needs for this scene
    pub fn cells(&self, kind: DisplayKind) -> (u32, u32) {
        let (cell_width, cell_height) = kind.cell_size();
        (
            self.width.div_ceil(cell_width),
            self.height.div_ceil(cell_height),
        )
    }

    fn unit_chars(&self, opt: &Options) -> (String, String) {
        let (off, on) = match &self.unit {
            Some(chars) => (chars.off.as_str(), chars.on.as_str()),
            None => (Unit::DEFAULT_OFF, Unit::DEFAULT_ON),
        };
        let off = opt.off.as_deref().unwrap_or(off);
        let on = opt.on.as_deref().unwrap_or(on);
        (off.to_owned(), on.to_owned())
    }

    fn render_on<D>(&self, mut matrix: Matrix<D>, invert: bool) -> MatrixResult<String>
    where
        D: Display<Value = bool, Output = String>,
    {
        if invert {
            matrix.fill(!matrix.default_brush());
        }
        self.draw(&mut matrix)?;
        Ok(matrix.render())
    }
}

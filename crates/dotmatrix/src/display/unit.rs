use crate::{Brush, MatrixResult, Point};

use super::{CellBuffer, Display};

/// A display that draws every pixel with one of two strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
    buffer: CellBuffer,
    default_brush: bool,
    off: String,
    on: String,
}

impl Unit {
    /// The string for a pixel that is off, unless configured otherwise
    pub const DEFAULT_OFF: &'static str = "  ";
    /// The string for a pixel that is on, unless configured otherwise
    pub const DEFAULT_ON: &'static str = "██";

    /// Create a display that draws pixels with `off` and `on`
    ///
    /// ```
    /// # use dotmatrix::{Brush, Display, Unit};
    /// let mut unit = Unit::with_chars(3, 1, Brush::UseDefault, ".", "#");
    /// unit.set((1, 0), true).unwrap();
    /// assert_eq!(unit.render(), ".#.");
    /// ```
    pub fn with_chars(
        width: u32,
        height: u32,
        default_brush: Brush<bool>,
        off: impl Into<String>,
        on: impl Into<String>,
    ) -> Self {
        Unit {
            buffer: CellBuffer::new(width, height, 1, 1),
            default_brush: default_brush.resolve(true),
            off: off.into(),
            on: on.into(),
        }
    }

    /// The strings for `(off, on)` pixels
    pub fn chars(&self) -> (&str, &str) {
        (&self.off, &self.on)
    }
}

impl Display for Unit {
    type Value = bool;
    type Output = String;

    fn new(width: u32, height: u32, default_brush: Brush<bool>) -> Self {
        Self::with_chars(width, height, default_brush, Self::DEFAULT_OFF, Self::DEFAULT_ON)
    }

    fn width(&self) -> u32 {
        self.buffer.width()
    }

    fn height(&self) -> u32 {
        self.buffer.height()
    }

    fn default_brush(&self) -> bool {
        self.default_brush
    }

    fn set_default_brush(&mut self, brush: bool) {
        self.default_brush = brush;
    }

    fn get(&self, pos: Point) -> MatrixResult<bool> {
        let (index, _, _) = self.buffer.locate(pos)?;
        Ok(self.buffer.get(index, 0x1))
    }

    fn set(&mut self, pos: Point, value: bool) -> MatrixResult<()> {
        let (index, _, _) = self.buffer.locate(pos)?;
        self.buffer.set(index, 0x1, value, 0x1);
        Ok(())
    }

    fn render(&self) -> String {
        self.buffer.render(|out, cell| {
            out.push_str(if cell & 0x1 != 0 { &self.on } else { &self.off });
        })
    }
}

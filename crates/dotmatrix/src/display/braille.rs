use bitflags::bitflags;

use crate::{Brush, MatrixResult, Point};

use super::{CellBuffer, Display};

bitflags! {
    /// The dots of a Braille pattern, numbered like the Unicode block
    ///
    /// ```text
    /// +-------+
    /// | 1   4 |
    /// | 2   5 |
    /// | 3   6 |
    /// | 7   8 |
    /// +-------+
    /// ```
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct BrailleDots: u8 {
        /// Column 0, row 0
        const DOT_1 = 0x01;
        /// Column 0, row 1
        const DOT_2 = 0x02;
        /// Column 0, row 2
        const DOT_3 = 0x04;
        /// Column 1, row 0
        const DOT_4 = 0x08;
        /// Column 1, row 1
        const DOT_5 = 0x10;
        /// Column 1, row 2
        const DOT_6 = 0x20;
        /// Column 0, row 3
        const DOT_7 = 0x40;
        /// Column 1, row 3
        const DOT_8 = 0x80;
    }
}

/// The Braille pattern without any dots
pub const BRAILLE_BLANK: char = '\u{2800}';

/// Dot for each pixel of a cell, indexed by `[dy][dx]`
const DOT_LAYOUT: [[BrailleDots; 2]; 4] = [
    [BrailleDots::DOT_1, BrailleDots::DOT_4],
    [BrailleDots::DOT_2, BrailleDots::DOT_5],
    [BrailleDots::DOT_3, BrailleDots::DOT_6],
    [BrailleDots::DOT_7, BrailleDots::DOT_8],
];

/// A display made up of Braille patterns, 2 pixels wide and 4 pixels tall
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Braille {
    buffer: CellBuffer,
    default_brush: bool,
}

impl Braille {
    /// Width of a cell in pixels
    pub const CELL_WIDTH: u32 = 2;
    /// Height of a cell in pixels
    pub const CELL_HEIGHT: u32 = 4;

    /// The dot that shows the pixel at `(dx, dy)` within a cell
    ///
    /// ```
    /// # use dotmatrix::display::{Braille, BrailleDots};
    /// assert_eq!(Braille::dot(1, 0), Some(BrailleDots::DOT_4));
    /// assert_eq!(Braille::dot(0, 3), Some(BrailleDots::DOT_7));
    /// assert_eq!(Braille::dot(2, 0), None);
    /// ```
    pub fn dot(dx: u32, dy: u32) -> Option<BrailleDots> {
        let row = DOT_LAYOUT.get(usize::try_from(dy).ok()?)?;
        row.get(usize::try_from(dx).ok()?).copied()
    }

    /// The character for a set of dots
    pub fn glyph(dots: BrailleDots) -> char {
        char::from_u32(u32::from(BRAILLE_BLANK) + u32::from(dots.bits()))
            .unwrap_or(BRAILLE_BLANK)
    }

    fn locate(&self, pos: Point) -> MatrixResult<(usize, u8)> {
        let (index, dx, dy) = self.buffer.locate(pos)?;
        let dot = Self::dot(dx, dy).unwrap_or(BrailleDots::empty());
        Ok((index, dot.bits()))
    }
}

impl Display for Braille {
    type Value = bool;
    type Output = String;

    fn new(width: u32, height: u32, default_brush: Brush<bool>) -> Self {
        Braille {
            buffer: CellBuffer::new(width, height, Self::CELL_WIDTH, Self::CELL_HEIGHT),
            default_brush: default_brush.resolve(true),
        }
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
        let (index, bit) = self.locate(pos)?;
        Ok(self.buffer.get(index, bit))
    }

    fn set(&mut self, pos: Point, value: bool) -> MatrixResult<()> {
        let (index, bit) = self.locate(pos)?;
        self.buffer.set(index, bit, value, BrailleDots::all().bits());
        Ok(())
    }

    fn render(&self) -> String {
        self.buffer.render(|out, cell| {
            out.push(Self::glyph(BrailleDots::from_bits_truncate(cell)));
        })
    }
}

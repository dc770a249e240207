use bitflags::bitflags;

use crate::{Brush, MatrixResult, Point};

use super::{CellBuffer, Display};

bitflags! {
    /// The four pixels of a block cell, in raster order
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct Quadrants: u8 {
        /// Column 0, row 0
        const UPPER_LEFT = 0x1;
        /// Column 1, row 0
        const UPPER_RIGHT = 0x2;
        /// Column 0, row 1
        const LOWER_LEFT = 0x4;
        /// Column 1, row 1
        const LOWER_RIGHT = 0x8;
    }
}

/// Glyphs for every combination of [`Quadrants`]
///
/// Each cell is drawn as two half block characters, so that a cell is about
/// as wide as it is tall in a typical terminal font.
#[rustfmt::skip]
pub const BLOCKS: [&str; 16] = [
    "  ", "▀ ", " ▀", "▀▀", "▄ ", "█ ", "▄▀", "█▀", " ▄", "▀▄", " █", "▀█", "▄▄", "█▄", "▄█", "██",
];

/// A display made up of half block characters, 2 pixels wide and 2 pixels tall
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    buffer: CellBuffer,
    default_brush: bool,
}

impl Block {
    /// Width of a cell in pixels
    pub const CELL_WIDTH: u32 = 2;
    /// Height of a cell in pixels
    pub const CELL_HEIGHT: u32 = 2;

    /// The glyphs for a set of quadrants
    ///
    /// ```
    /// # use dotmatrix::display::{Block, Quadrants};
    /// assert_eq!(Block::glyph(Quadrants::UPPER_LEFT | Quadrants::LOWER_RIGHT), "▀▄");
    /// ```
    pub fn glyph(quadrants: Quadrants) -> &'static str {
        BLOCKS[usize::from(quadrants.bits() & 0xF)]
    }

    fn locate(&self, pos: Point) -> MatrixResult<(usize, u8)> {
        let (index, dx, dy) = self.buffer.locate(pos)?;
        Ok((index, 1 << (dx + dy * Self::CELL_WIDTH)))
    }
}

impl Display for Block {
    type Value = bool;
    type Output = String;

    fn new(width: u32, height: u32, default_brush: Brush<bool>) -> Self {
        Block {
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
        self.buffer.set(index, bit, value, Quadrants::all().bits());
        Ok(())
    }

    fn render(&self) -> String {
        self.buffer.render(|out, cell| {
            out.push_str(Self::glyph(Quadrants::from_bits_truncate(cell)));
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{Block, Quadrants};
    use crate::{Brush, Display};

    #[test]
    fn test_quadrants() {
        let cases = [
            ((0, 0), Quadrants::UPPER_LEFT, "▀ "),
            ((1, 0), Quadrants::UPPER_RIGHT, " ▀"),
            ((0, 1), Quadrants::LOWER_LEFT, "▄ "),
            ((1, 1), Quadrants::LOWER_RIGHT, " ▄"),
        ];
        for (pos, quadrant, glyph) in cases {
            let mut b = Block::new(2, 2, Brush::UseDefault);
            b.set(pos, true).unwrap();
            assert_eq!(b.buffer.cells(), &[quadrant.bits()]);
            assert_eq!(b.render(), glyph);
        }
    }

    #[test]
    fn test_render_grid() {
        let mut b = Block::new(4, 3, Brush::UseDefault);
        assert_eq!(b.render(), "    \n    ");
        b.set((0, 0), true).unwrap();
        b.set((0, 1), true).unwrap();
        b.set((3, 2), true).unwrap();
        assert_eq!(b.render(), "█   \n   ▀");
        let again = b.render();
        assert_eq!(again, b.render());
    }

    #[test]
    fn test_clear_keeps_neighbours() {
        let mut b = Block::new(2, 2, Brush::UseDefault);
        for (x, y) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
            b.set((x, y), true).unwrap();
        }
        b.set((1, 0), false).unwrap();
        assert_eq!(b.render(), "█▄");
        assert!(b.get((0, 0)).unwrap());
        assert!(!b.get((1, 0)).unwrap());
    }
}

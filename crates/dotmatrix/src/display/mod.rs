//! # Pixel storage and text encodings
//!
//! A [`Display`] owns the pixels of a matrix and decides how they are packed
//! and rendered. The text displays in this module all group a fixed rectangle
//! of pixels (a *cell*) into one byte and turn every byte into a glyph.

use std::{fmt, str::FromStr};

use serde::Deserialize;
use thiserror::Error;

use crate::{Brush, MatrixError, MatrixResult, Point};

mod block;
mod braille;
mod unit;

pub use block::{Block, Quadrants, BLOCKS};
pub use braille::{Braille, BrailleDots, BRAILLE_BLANK};
pub use unit::Unit;

/// Storage and rendering policy of a matrix
pub trait Display {
    /// The type of a single pixel
    type Value: Copy;
    /// The result of rendering the whole display
    type Output;

    /// Create a display of the given size with every pixel off
    fn new(width: u32, height: u32, default_brush: Brush<Self::Value>) -> Self
    where
        Self: Sized;

    /// The width in pixels
    fn width(&self) -> u32;

    /// The height in pixels
    fn height(&self) -> u32;

    /// The value that [`Brush::UseDefault`] stands for
    fn default_brush(&self) -> Self::Value;

    /// Change the value that [`Brush::UseDefault`] stands for
    fn set_default_brush(&mut self, brush: Self::Value);

    /// Get the pixel at `pos`, failing if it is out of bounds
    fn get(&self, pos: Point) -> MatrixResult<Self::Value>;

    /// Set the pixel at `pos`, failing if it is out of bounds
    fn set(&mut self, pos: Point, value: Self::Value) -> MatrixResult<()>;

    /// Render the current state
    fn render(&self) -> Self::Output;
}

/// Packed storage of one byte per cell
///
/// The cell at column `cx` and row `cy` is stored at `cy * columns + cx`.
/// Mapping the position within the cell to a bit is left to the display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CellBuffer {
    width: u32,
    height: u32,
    cell_width: u32,
    cell_height: u32,
    columns: usize,
    cells: Vec<u8>,
}

impl CellBuffer {
    pub fn new(width: u32, height: u32, cell_width: u32, cell_height: u32) -> Self {
        let columns = width.div_ceil(cell_width) as usize;
        let rows = height.div_ceil(cell_height) as usize;
        CellBuffer {
            width,
            height,
            cell_width,
            cell_height,
            columns,
            cells: vec![0; columns * rows],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Split a pixel position into the cell index and the offset in the cell
    pub fn locate(&self, (x, y): Point) -> MatrixResult<(usize, u32, u32)> {
        match (u32::try_from(x), u32::try_from(y)) {
            (Ok(ux), Ok(uy)) if ux < self.width && uy < self.height => {
                let column = (ux / self.cell_width) as usize;
                let row = (uy / self.cell_height) as usize;
                let index = row * self.columns + column;
                Ok((index, ux % self.cell_width, uy % self.cell_height))
            }
            _ => Err(MatrixError::OutOfBounds { x, y }),
        }
    }

    /// Check whether `bit` is set in the cell at `index`
    pub fn get(&self, index: usize, bit: u8) -> bool {
        self.cells[index] & bit != 0
    }

    /// Clear and then (maybe) set `bit` in the cell at `index`, dropping any
    /// bit outside of `valid`
    pub fn set(&mut self, index: usize, bit: u8, value: bool, valid: u8) {
        let cell = &mut self.cells[index];
        *cell &= !bit;
        if value {
            *cell |= bit;
        }
        *cell &= valid;
    }

    /// Render every cell with `glyph`, one line per row of cells
    pub fn render<F>(&self, mut glyph: F) -> String
    where
        F: FnMut(&mut String, u8),
    {
        let mut out = String::new();
        if self.columns == 0 {
            return out;
        }
        for (index, row) in self.cells.chunks(self.columns).enumerate() {
            if index > 0 {
                out.push('\n');
            }
            for &cell in row {
                glyph(&mut out, cell);
            }
        }
        out
    }

    #[cfg(test)]
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }
}

/// The available text displays
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Deserialize)]
pub enum DisplayKind {
    /// 2×4 pixels per Braille pattern
    #[default]
    Braille,
    /// 2×2 pixels per pair of half blocks
    Block,
    /// One pixel per (pair of) character(s)
    Unit,
}

#[derive(Debug, Error)]
#[error("Use one of `braille`, `block` or `unit`")]
/// Failed to parse a display name
pub struct DisplayKindError {}

impl FromStr for DisplayKind {
    type Err = DisplayKindError;

    fn from_str(val: &str) -> Result<Self, Self::Err> {
        match val {
            "braille" => Ok(Self::Braille),
            "block" | "blocks" => Ok(Self::Block),
            "unit" => Ok(Self::Unit),
            _ => Err(DisplayKindError {}),
        }
    }
}

impl DisplayKind {
    fn to_static_str(self) -> &'static str {
        match self {
            Self::Braille => "braille",
            Self::Block => "block",
            Self::Unit => "unit",
        }
    }

    /// The `(width, height)` of a cell in pixels
    pub fn cell_size(self) -> (u32, u32) {
        match self {
            Self::Braille => (Braille::CELL_WIDTH, Braille::CELL_HEIGHT),
            Self::Block => (Block::CELL_WIDTH, Block::CELL_HEIGHT),
            Self::Unit => (1, 1),
        }
    }
}

impl fmt::Display for DisplayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_static_str())
    }
}

#[cfg(test)]
mod tests {
    use super::{Block, Braille, CellBuffer, Display, DisplayKind};
    use crate::{Brush, MatrixError};

    #[test]
    fn test_cell_grid_size() {
        assert_eq!(CellBuffer::new(5, 9, 2, 4).cells().len(), 3 * 3);
        assert_eq!(CellBuffer::new(4, 8, 2, 4).cells().len(), 2 * 2);
        assert_eq!(CellBuffer::new(3, 3, 2, 2).cells().len(), 2 * 2);
        assert_eq!(CellBuffer::new(7, 2, 1, 1).cells().len(), 14);
        assert!(CellBuffer::new(0, 3, 2, 4).cells().is_empty());
    }

    #[test]
    fn test_locate() {
        let buf = CellBuffer::new(5, 9, 2, 4);
        assert_eq!(buf.locate((0, 0)), Ok((0, 0, 0)));
        assert_eq!(buf.locate((3, 1)), Ok((1, 1, 1)));
        assert_eq!(buf.locate((4, 8)), Ok((8, 0, 0)));
        assert_eq!(
            buf.locate((5, 0)),
            Err(MatrixError::OutOfBounds { x: 5, y: 0 })
        );
        assert_eq!(
            buf.locate((0, -1)),
            Err(MatrixError::OutOfBounds { x: 0, y: -1 })
        );
    }

    #[test]
    fn test_set_masks() {
        let mut buf = CellBuffer::new(2, 2, 2, 2);
        buf.set(0, 0b0100, true, 0x0F);
        buf.set(0, 0b0001, true, 0x0F);
        assert_eq!(buf.cells(), &[0b0101]);
        buf.set(0, 0b0100, false, 0x0F);
        assert_eq!(buf.cells(), &[0b0001]);
        assert!(buf.get(0, 0b0001));
        assert!(!buf.get(0, 0b0100));
    }

    #[test]
    fn test_empty_render() {
        let buf = CellBuffer::new(0, 0, 2, 4);
        assert_eq!(buf.render(|_, _| unreachable!()), "");
    }

    #[test]
    fn test_display_kind_names() {
        for kind in [DisplayKind::Braille, DisplayKind::Block, DisplayKind::Unit] {
            assert_eq!(kind.to_string().parse::<DisplayKind>().unwrap(), kind);
        }
        assert!("sixel".parse::<DisplayKind>().is_err());
    }

    #[test]
    fn test_cell_size() {
        assert_eq!(DisplayKind::Braille.cell_size(), (2, 4));
        assert_eq!(DisplayKind::Block.cell_size(), (2, 2));
        assert_eq!(DisplayKind::Unit.cell_size(), (1, 1));

        // one cell renders as a single line
        let (w, h) = DisplayKind::Braille.cell_size();
        assert_eq!(Braille::new(w, h, Brush::UseDefault).render(), "\u{2800}");
        let (w, h) = DisplayKind::Block.cell_size();
        assert_eq!(Block::new(w, h, Brush::UseDefault).render(), "  ");
    }
}

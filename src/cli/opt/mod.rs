//! Command line options
use std::path::{Path, PathBuf};

use clap::Parser;
use dotmatrix::DisplayKind;

#[derive(Parser, Debug)]
/// Draw the shapes of a scene file and print them as text
pub struct Options {
    /// The scene to draw (*.ron, - is STDIN)
    pub file: PathBuf,

    /// The display to render with, overrides the one from the scene.
    ///
    /// Valid choices are "braille", "block" and "unit"
    #[clap(long, short = 'D')]
    pub display: Option<DisplayKind>,

    /// Text for a pixel that is on (unit display only)
    #[clap(long)]
    pub on: Option<String>,

    /// Text for a pixel that is off (unit display only)
    #[clap(long)]
    pub off: Option<String>,

    /// Start with every pixel on and draw by turning pixels off
    #[clap(long)]
    pub invert: bool,
}

impl Options {
    /// Whether the scene is read from STDIN
    pub fn is_stdin(&self) -> bool {
        self.file == Path::new("-")
    }
}

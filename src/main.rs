//! CLI entry point for grayscale hole filling

use clap::Parser;
use mrf_inpaint::io::cli::{Cli, FileProcessor};

fn main() -> mrf_inpaint::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process().map(|_| ())
}

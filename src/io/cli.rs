//! Command-line interface for filling a rectangular hole in one image

use crate::algorithm::domain::MessageDomain;
use crate::algorithm::driver::{InferenceConfig, inpaint_hole};
use crate::io::configuration::{DEFAULT_POTENTIAL_CAPACITY, DEFAULT_SWEEP_COUNT, OUTPUT_SUFFIX};
use crate::io::error::Result;
use crate::io::image::{load_grayscale, save_grayscale};
use crate::io::progress::ProgressManager;
use crate::spatial::HoleRect;
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Message arithmetic selectable from the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum DomainArg {
    /// Reference arithmetic (log potentials mixed with linear placeholders)
    Mixed,
    /// Consistent max-sum arithmetic in the log domain
    Log,
}

impl From<DomainArg> for MessageDomain {
    fn from(arg: DomainArg) -> Self {
        match arg {
            DomainArg::Mixed => Self::Mixed,
            DomainArg::Log => Self::Log,
        }
    }
}

#[derive(Parser)]
#[command(name = "mrf-inpaint")]
#[command(
    author,
    version,
    about = "Fill a rectangular hole in a grayscale image using loopy belief propagation"
)]
/// Command-line arguments for the hole filling tool
pub struct Cli {
    /// Input image file
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// First row of the hole (inclusive)
    #[arg(long)]
    pub top: usize,

    /// First column of the hole (inclusive)
    #[arg(long)]
    pub left: usize,

    /// Last row of the hole (inclusive)
    #[arg(long)]
    pub bottom: usize,

    /// Last column of the hole (inclusive)
    #[arg(long)]
    pub right: usize,

    /// Output image path (defaults to <input>_inpainted.<ext>)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Number of propagation sweeps
    #[arg(short, long, default_value_t = DEFAULT_SWEEP_COUNT)]
    pub sweeps: usize,

    /// Clipping bound of the pairwise potential
    #[arg(short, long, default_value_t = DEFAULT_POTENTIAL_CAPACITY)]
    pub capacity: f64,

    /// Message arithmetic
    #[arg(short, long, value_enum, default_value_t = DomainArg::Mixed)]
    pub domain: DomainArg,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Hole rectangle described by the arguments
    pub const fn hole(&self) -> HoleRect {
        HoleRect::new(self.top, self.left, self.bottom, self.right)
    }

    /// Inference parameters described by the arguments
    pub fn config(&self) -> InferenceConfig {
        InferenceConfig {
            sweep_count: self.sweeps,
            potential_capacity: self.capacity,
            domain: self.domain.into(),
        }
    }

    /// Where the result is written
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| FileProcessor::get_output_path(&self.input))
    }
}

/// Loads the input, runs inference on the hole and writes the result
pub struct FileProcessor {
    cli: Cli,
    progress_manager: ProgressManager,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = if cli.should_show_progress() {
            ProgressManager::new()
        } else {
            ProgressManager::hidden()
        };

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process the input according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the image cannot be loaded, the hole or parameters
    /// are invalid, or the result cannot be written
    pub fn process(&mut self) -> Result<PathBuf> {
        let start_time = Instant::now();
        let output_path = self.cli.output_path();

        let image = load_grayscale(&self.cli.input)?;
        let hole = self.cli.hole();
        let config = self.cli.config();

        self.progress_manager.start_file(&self.cli.input);
        let filled = inpaint_hole(image.view(), &hole, &config, &mut self.progress_manager)?;
        self.progress_manager.finish();

        save_grayscale(filled.view(), &output_path)?;

        // Allow print for user feedback on completion
        #[allow(clippy::print_stderr)]
        if !self.cli.quiet {
            eprintln!(
                "Filled {hole} of {} in {:.2?} -> {}",
                self.cli.input.display(),
                start_time.elapsed(),
                output_path.display()
            );
        }

        Ok(output_path)
    }

    /// Default output path: input stem plus suffix, same extension and directory
    pub fn get_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let extension = input_path.extension().unwrap_or_default();
        let output_name = if extension.is_empty() {
            format!("{}{OUTPUT_SUFFIX}.png", stem.to_string_lossy())
        } else {
            format!(
                "{}{}.{}",
                stem.to_string_lossy(),
                OUTPUT_SUFFIX,
                extension.to_string_lossy()
            )
        };

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}

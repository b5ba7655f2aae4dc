//! Terminal progress display for propagation sweeps

use crate::algorithm::driver::SweepObserver;
use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

/// Shows one progress bar per inference run, advanced once per sweep
pub struct ProgressManager {
    bar: ProgressBar,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager drawing to stderr
    pub fn new() -> Self {
        Self::with_bar(ProgressBar::new(0))
    }

    /// Create a progress manager that never draws (for tests and quiet runs)
    pub fn hidden() -> Self {
        Self::with_bar(ProgressBar::hidden())
    }

    fn with_bar(bar: ProgressBar) -> Self {
        bar.set_style(Self::sweep_style());
        Self { bar }
    }

    /// Label the bar with the file being processed
    pub fn start_file(&self, path: &Path) {
        let display_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        self.bar.set_prefix(display_name);
    }

    /// Sweeps reported as completed so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Total sweeps expected
    pub fn length(&self) -> Option<u64> {
        self.bar.length()
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }

    fn sweep_style() -> ProgressStyle {
        let template =
            format!("{{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}");
        ProgressStyle::default_bar()
            .template(&template)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▉▊▋▌▍▎▏ ")
    }
}

impl SweepObserver for ProgressManager {
    fn initialized(&mut self, unobserved: usize) {
        self.bar.set_position(0);
        self.bar.set_message(format!("{unobserved} unknown pixels"));
    }

    fn sweep_completed(&mut self, completed: usize, total: usize) {
        self.bar.set_length(total as u64);
        self.bar.set_position(completed as u64);
    }

    fn decoded(&mut self, unobserved: usize) {
        self.bar.set_message(format!("decoded {unobserved} pixels"));
    }
}

//! Spinner reporting the running solution count

use crate::io::configuration::PROGRESS_TICK_MS;
use crate::spatial::board::BoardSize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner} [{elapsed_precise}] {prefix} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Coordinates the stderr spinner with diagram output on stdout
///
/// The spinner is hidden automatically when stderr is not a terminal.
pub struct ProgressManager {
    spinner: ProgressBar,
    solutions: u64,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with an idle spinner
    pub fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(SPINNER_STYLE.clone());
        Self {
            spinner,
            solutions: 0,
        }
    }

    /// Start ticking for a search on a board of `size`
    pub fn start(&self, size: BoardSize) {
        self.spinner.set_prefix(format!("{size}"));
        self.spinner.set_message("0 solutions");
        self.spinner
            .enable_steady_tick(Duration::from_millis(PROGRESS_TICK_MS));
    }

    /// Record that the `index`-th solution was found
    pub fn record_solution(&mut self, index: u64) {
        self.solutions = index;
        self.spinner.set_message(format!("{index} solutions"));
    }

    /// Solutions recorded so far
    pub const fn solutions(&self) -> u64 {
        self.solutions
    }

    /// Run `write` with the spinner cleared from the terminal
    pub fn suspend<R>(&self, write: impl FnOnce() -> R) -> R {
        self.spinner.suspend(write)
    }

    /// Remove the spinner
    pub fn finish(&self) {
        self.spinner.finish_and_clear();
    }
}

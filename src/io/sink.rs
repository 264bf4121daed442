//! Solution sinks for the console and for counting

use std::io::Write;
use std::time::Duration;

use crate::algorithm::solution::{Solution, SolutionSink};
use crate::io::configuration::{CELLS_PER_PIECE, DEFAULT_EVERY};
use crate::io::error::{Result, WithOperation};
use crate::io::progress::ProgressManager;
use crate::io::render::{render, render_labeled};
use crate::pieces::Piece;

/// How the console sink presents solutions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Show every n-th solution plus the first; 0 shows none
    pub every: u64,
    /// Move the cursor back over the previous diagram before drawing
    pub windup: bool,
    /// Print each piece's letter inside the piece
    pub label_pieces: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            every: DEFAULT_EVERY,
            windup: true,
            label_pieces: false,
        }
    }
}

impl DisplayOptions {
    /// Test if the `index`-th solution (1-based) is drawn
    pub const fn shows(&self, index: u64) -> bool {
        self.every != 0 && (index == 1 || index % self.every == 0)
    }
}

/// Writes diagrams, diagnostics and the final summary to a console stream
pub struct TerminalSink<W: Write> {
    out: W,
    options: DisplayOptions,
    progress: Option<ProgressManager>,
    /// Lines written by the previous diagram, for cursor windup
    printed_lines: usize,
}

impl<W: Write> TerminalSink<W> {
    /// Create a sink writing to `out`
    pub const fn new(out: W, options: DisplayOptions) -> Self {
        Self {
            out,
            options,
            progress: None,
            printed_lines: 0,
        }
    }

    /// Attach a spinner that is updated on every solution
    #[must_use]
    pub fn with_progress(mut self, progress: ProgressManager) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Display options in effect
    pub const fn options(&self) -> DisplayOptions {
        self.options
    }

    fn write_through_progress(&mut self, text: &str, operation: &'static str) -> Result<()> {
        let Self { out, progress, .. } = self;
        let mut write = || -> std::io::Result<()> {
            out.write_all(text.as_bytes())?;
            out.flush()
        };
        let written = match progress {
            Some(progress) => progress.suspend(write),
            None => write(),
        };
        written.with_operation(operation)
    }
}

impl<W: Write> SolutionSink for TerminalSink<W> {
    fn catalog(&mut self, pieces: &[Piece]) -> Result<()> {
        let listing: String = pieces.iter().map(Piece::describe).collect();
        self.write_through_progress(&listing, "write piece catalog")
    }

    fn solution(&mut self, solution: &Solution<'_>) -> Result<()> {
        if let Some(progress) = &mut self.progress {
            progress.record_solution(solution.index());
        }

        if !self.options.shows(solution.index()) {
            return Ok(());
        }

        let diagram = if self.options.label_pieces {
            render_labeled(solution.board())
        } else {
            render(solution.board())
        };

        let mut text = String::new();
        if self.options.windup && self.printed_lines > 0 {
            text.push_str(&format!("\x1b[{}A", self.printed_lines));
        }
        text.push_str(&diagram);
        text.push('\n');
        text.push_str(&solution.index().to_string());
        text.push('\n');

        self.printed_lines = diagram.lines().count() + 1;
        self.write_through_progress(&text, "write solution")
    }

    fn finished(&mut self, total: u64, elapsed: Duration) -> Result<()> {
        if let Some(progress) = &self.progress {
            progress.finish();
        }
        let summary = format!(
            "total solution(s): {total}   {:.2} sec\n",
            elapsed.as_secs_f64()
        );
        self.write_through_progress(&summary, "write summary")
    }
}

/// Counts solutions and checks each one is a valid tiling
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountingSink {
    /// Solutions received
    pub count: u64,
    /// Solutions that failed the tiling check
    pub invalid: u64,
}

impl CountingSink {
    /// Create an empty counter
    pub const fn new() -> Self {
        Self {
            count: 0,
            invalid: 0,
        }
    }
}

impl SolutionSink for CountingSink {
    fn solution(&mut self, solution: &Solution<'_>) -> Result<()> {
        self.count += 1;
        if !solution.is_complete_tiling(CELLS_PER_PIECE) {
            self.invalid += 1;
        }
        Ok(())
    }
}

//! Command-line interface for enumerating pentomino tilings

use crate::algorithm::search::{Solver, SolverConfig};
use crate::io::configuration::DEFAULT_EVERY;
use crate::io::error::Result;
use crate::io::progress::ProgressManager;
use crate::io::sink::{DisplayOptions, TerminalSink};
use crate::spatial::board::BoardSize;
use clap::Parser;
use clap::error::ErrorKind;
use std::ffi::OsString;
use std::io::Write;

#[derive(Parser, Debug)]
#[command(name = "pentomino")]
#[command(
    author,
    version,
    about = "Enumerate every tiling of a board with the twelve pentominoes",
    args_override_self = true
)]
/// Command-line arguments for the solver
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Board size as <WIDTH>x<HEIGHT> (60 or 64 cells, sides >= 3); falls back to 6x10
    #[arg(value_name = "SIZE")]
    pub sizes: Vec<String>,

    /// Print every piece's generated orientations before searching
    #[arg(short, long)]
    pub debug: bool,

    /// Display every N-th solution and the first (0 displays none)
    #[arg(short, long, value_name = "N", default_value_t = DEFAULT_EVERY)]
    pub every: u64,

    /// Let diagrams scroll instead of redrawing in place
    #[arg(short, long)]
    pub no_windup: bool,

    /// Print each piece's letter inside the piece
    #[arg(short = 'p', long = "print")]
    pub label_pieces: bool,

    /// Suppress the progress spinner
    #[arg(short, long)]
    pub quiet: bool,
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            sizes: Vec::new(),
            debug: false,
            every: DEFAULT_EVERY,
            no_windup: false,
            label_pieces: false,
            quiet: false,
        }
    }
}

impl Cli {
    /// Parse arguments one at a time, dropping any that do not parse
    ///
    /// An option that takes a value is tried with the argument after it.
    /// Malformed arguments never abort the run: unknown flags, missing or
    /// bad option values are skipped and later arguments are still read.
    /// Help and version requests print and exit as usual.
    pub fn parse_lenient<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut pending = args.into_iter().map(Into::<OsString>::into).peekable();
        let mut accepted: Vec<OsString> = pending.next().into_iter().collect();
        let mut cli = Self::default();

        while let Some(arg) = pending.next() {
            accepted.push(arg);
            if let Some(parsed) = Self::accept(&accepted) {
                cli = parsed;
                continue;
            }

            if let Some(value) = pending.peek().cloned() {
                accepted.push(value);
                if let Some(parsed) = Self::accept(&accepted) {
                    cli = parsed;
                    pending.next();
                    continue;
                }
                accepted.pop();
            }
            accepted.pop();
        }

        cli
    }

    fn accept(args: &[OsString]) -> Option<Self> {
        match Self::try_parse_from(args) {
            Ok(cli) => Some(cli),
            Err(error)
                if matches!(
                    error.kind(),
                    ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
                ) =>
            {
                error.exit()
            }
            Err(_) => None,
        }
    }

    /// Board size from the positional arguments
    ///
    /// The last argument that parses to a valid size wins. Invalid or
    /// unparseable sizes are ignored, and the default board is used when
    /// none is valid.
    pub fn board_size(&self) -> BoardSize {
        self.sizes
            .iter()
            .filter_map(|text| text.parse::<BoardSize>().ok())
            .next_back()
            .unwrap_or_default()
    }

    /// Check if the cursor should be moved back over the previous diagram
    pub const fn windup(&self) -> bool {
        !self.no_windup
    }

    /// Check if the spinner should be displayed
    ///
    /// The spinner only runs while some solutions are not drawn.
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet && self.every != 1
    }

    /// Search parameters derived from the arguments
    pub fn solver_config(&self) -> SolverConfig {
        SolverConfig {
            size: self.board_size(),
            debug: self.debug,
        }
    }

    /// Display parameters derived from the arguments
    pub const fn display_options(&self) -> DisplayOptions {
        DisplayOptions {
            every: self.every,
            windup: self.windup(),
            label_pieces: self.label_pieces,
        }
    }
}

/// Runs one full enumeration according to the CLI arguments
pub struct SolveRunner {
    cli: Cli,
}

impl SolveRunner {
    /// Create a runner for the given arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Arguments this runner was created with
    pub const fn cli(&self) -> &Cli {
        &self.cli
    }

    /// Run the search, writing output to stdout
    ///
    /// # Errors
    ///
    /// Returns an error if writing to stdout fails
    pub fn run(&self) -> Result<u64> {
        let stdout = std::io::stdout();
        self.run_with(stdout.lock())
    }

    /// Run the search, writing output to `out`
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails
    pub fn run_with<W: Write>(&self, out: W) -> Result<u64> {
        let config = self.cli.solver_config();
        let mut sink = TerminalSink::new(out, self.cli.display_options());

        if self.cli.should_show_progress() {
            let progress = ProgressManager::new();
            progress.start(config.size);
            sink = sink.with_progress(progress);
        }

        let mut solver = Solver::new(config);
        solver.run(&mut sink)
    }
}

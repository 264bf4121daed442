//! CLI entry point for the pentomino tiling enumerator

use pentomino::io::cli::{Cli, SolveRunner};

fn main() -> pentomino::Result<()> {
    let cli = Cli::parse_lenient(std::env::args_os());
    let runner = SolveRunner::new(cli);
    runner.run()?;
    Ok(())
}

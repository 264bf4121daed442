//! Backtracking enumeration of complete tilings
//!
//! The search always fills the first free cell in row-major order. At each
//! level it walks the pool of unused pieces; every piece is withdrawn, each
//! of its orientations anchored at the free cell is tried, and the piece is
//! restored before the walk moves on. Board placements and pool withdrawals
//! are undone by the frame that made them, before any error is returned, so
//! the shared state is identical on entry and exit of every call.

use std::time::Instant;

use crate::algorithm::solution::{Solution, SolutionSink};
use crate::io::error::Result;
use crate::pieces::{Link, Piece, PiecePool, standard_pieces};
use crate::spatial::board::{Board, BoardSize, Cell};
use crate::spatial::coord::Coord;
use crate::spatial::shape::Shape;

/// Search parameters fixed at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SolverConfig {
    /// Board dimensions
    pub size: BoardSize,
    /// Report the generated orientation lists before searching
    pub debug: bool,
}

/// Mutable search state shared by every recursion level
#[derive(Debug, Clone)]
struct Frontier {
    board: Board,
    pool: PiecePool,
    solutions: u64,
}

impl Frontier {
    fn solve(
        &mut self,
        pieces: &[Piece],
        cursor: Coord,
        sink: &mut dyn SolutionSink,
    ) -> Result<()> {
        if self.pool.is_empty() {
            self.solutions += 1;
            return sink.solution(&Solution::new(self.solutions, &self.board));
        }

        let Some(anchor) = self.board.find_space(cursor) else {
            unreachable!("{} pieces remain but the board is full", self.pool.len());
        };

        let mut predecessor = Link::Head;
        while let Some(index) = self.pool.withdraw(predecessor) {
            let outcome = pieces
                .get(index)
                .map_or(Ok(()), |piece| self.try_piece(pieces, piece, anchor, sink));
            predecessor = self.pool.restore(predecessor, index);
            outcome?;
        }

        Ok(())
    }

    fn try_piece(
        &mut self,
        pieces: &[Piece],
        piece: &Piece,
        anchor: Coord,
        sink: &mut dyn SolutionSink,
    ) -> Result<()> {
        for shape in piece.shapes() {
            if self.board.check(anchor, shape) {
                self.descend(pieces, anchor, shape, Cell::Piece(piece.kind()), sink)?;
            }
        }
        Ok(())
    }

    fn descend(
        &mut self,
        pieces: &[Piece],
        anchor: Coord,
        shape: &Shape,
        label: Cell,
        sink: &mut dyn SolutionSink,
    ) -> Result<()> {
        self.board.place(anchor, shape, label);
        let outcome = self.solve(pieces, anchor, sink);
        self.board.place(anchor, shape, Cell::Free);
        outcome
    }
}

/// Enumerates every tiling of one board with the twelve pentominoes
#[derive(Debug, Clone)]
pub struct Solver {
    config: SolverConfig,
    pieces: Vec<Piece>,
    frontier: Frontier,
}

impl Solver {
    /// Build the piece catalog, the empty board and the full pool
    pub fn new(config: SolverConfig) -> Self {
        let pieces = standard_pieces(config.size);
        let frontier = Frontier {
            board: Board::new(config.size),
            pool: PiecePool::new(pieces.len()),
            solutions: 0,
        };

        Self {
            config,
            pieces,
            frontier,
        }
    }

    /// Configuration this solver was built with
    pub const fn config(&self) -> SolverConfig {
        self.config
    }

    /// Pieces in search order with their orientation lists
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Current board
    pub const fn board(&self) -> &Board {
        &self.frontier.board
    }

    /// Current pool of unused pieces
    pub const fn pool(&self) -> &PiecePool {
        &self.frontier.pool
    }

    /// Solutions found so far
    pub const fn solutions(&self) -> u64 {
        self.frontier.solutions
    }

    /// Enumerate every tiling, reporting each to `sink`
    ///
    /// Returns the total number of solutions. The board and pool are back
    /// in their initial state afterwards, so a second run repeats the same
    /// enumeration from a fresh counter.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by the sink; the search stops there
    ///
    /// # Panics
    ///
    /// Panics if the board runs out of free cells while pieces remain,
    /// which would mean the board and pool bookkeeping disagree
    pub fn run(&mut self, sink: &mut dyn SolutionSink) -> Result<u64> {
        let started = Instant::now();
        self.frontier.solutions = 0;

        if self.config.debug {
            sink.catalog(&self.pieces)?;
        }

        self.frontier.solve(&self.pieces, Coord::ORIGIN, sink)?;

        let total = self.frontier.solutions;
        sink.finished(total, started.elapsed())?;
        Ok(total)
    }
}

//! Complete tilings and the seam through which they leave the search

use bitvec::prelude::*;

use crate::io::error::Result;
use crate::pieces::{Piece, PieceKind};
use crate::spatial::board::{Board, Cell};
use std::time::Duration;

/// A complete tiling as seen at the moment it was found
///
/// Borrows the live board; sinks that need to keep a tiling must copy it.
#[derive(Debug, Clone, Copy)]
pub struct Solution<'a> {
    index: u64,
    board: &'a Board,
}

impl<'a> Solution<'a> {
    /// Wrap the board for the `index`-th solution (1-based)
    pub const fn new(index: u64, board: &'a Board) -> Self {
        Self { index, board }
    }

    /// 1-based position in enumeration order
    pub const fn index(&self) -> u64 {
        self.index
    }

    /// The filled board
    pub const fn board(&self) -> &'a Board {
        self.board
    }

    /// Test that the board is a valid tiling
    ///
    /// Every cell is blocked or covered, and each piece kind present covers
    /// exactly `cells_per_piece` cells.
    pub fn is_complete_tiling(&self, cells_per_piece: usize) -> bool {
        let mut counts = [0usize; PieceKind::ALL.len()];
        let mut seen = bitarr![0; 12];

        for &cell in self.board.cells() {
            match cell {
                Cell::Piece(kind) => {
                    seen.set(kind.index(), true);
                    if let Some(count) = counts.get_mut(kind.index()) {
                        *count += 1;
                    }
                }
                Cell::Blocked => {}
                Cell::Free | Cell::OutOfBounds => return false,
            }
        }

        seen.iter_ones()
            .all(|index| counts.get(index).copied() == Some(cells_per_piece))
    }

    /// Piece kinds present on the board, in [`PieceKind::ALL`] order
    pub fn kinds_present(&self) -> Vec<PieceKind> {
        let mut seen = bitarr![0; 12];
        for &cell in self.board.cells() {
            if let Cell::Piece(kind) = cell {
                seen.set(kind.index(), true);
            }
        }
        seen.iter_ones()
            .filter_map(|index| PieceKind::ALL.get(index).copied())
            .collect()
    }
}

/// Receives search output
///
/// The search calls [`catalog`](Self::catalog) once when diagnostics are
/// enabled, [`solution`](Self::solution) for every tiling in enumeration
/// order, and [`finished`](Self::finished) after the space is exhausted.
pub trait SolutionSink {
    /// Report the generated orientation lists
    ///
    /// # Errors
    ///
    /// Returns an error if the listing cannot be written
    fn catalog(&mut self, _pieces: &[Piece]) -> Result<()> {
        Ok(())
    }

    /// Report one complete tiling
    ///
    /// # Errors
    ///
    /// Returns an error if the solution cannot be written; the search stops
    fn solution(&mut self, solution: &Solution<'_>) -> Result<()>;

    /// Report the final count
    ///
    /// # Errors
    ///
    /// Returns an error if the summary cannot be written
    fn finished(&mut self, _total: u64, _elapsed: Duration) -> Result<()> {
        Ok(())
    }
}

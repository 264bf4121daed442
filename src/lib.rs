//! Exhaustive enumeration of pentomino tilings
//!
//! The solver fills a 60-cell rectangle (or a 64-cell rectangle with a
//! blocked 2x2 centre) with the twelve free pentominoes, always covering the
//! first free cell in row-major order, and reports every distinct tiling as
//! it is found. Rotated and mirrored copies of a tiling are suppressed by
//! restricting the orientations of one piece.

#![forbid(unsafe_code)]

/// Backtracking search and the solutions it produces
pub mod algorithm;
/// Command line, rendering, output sinks and error handling
pub mod io;
/// The twelve pentominoes and the pool of unused pieces
pub mod pieces;
/// Coordinates, shapes and the board
pub mod spatial;

pub use io::error::{Result, SolverError};

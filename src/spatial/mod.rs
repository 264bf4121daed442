//! Spatial data structures for the placement search
//!
//! This module contains spatial-related functionality including:
//! - Cell coordinates and their symmetry transforms
//! - Normalized piece shapes and orientation generation
//! - Board state with occupancy queries and placement

/// Board grid, cell labels and validated dimensions
pub mod board;
/// Cell coordinates with row-major ordering
pub mod coord;
/// Normalized shapes and the symmetry group acting on them
pub mod shape;

pub use board::{Board, BoardSize, Cell};
pub use coord::Coord;
pub use shape::{Orientation, Shape};

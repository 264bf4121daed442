//! The pentomino set and the pool the search draws from

/// Pieces with precomputed orientations and symmetry breaking
pub mod catalog;
/// Piece identities and their reference shapes
pub mod kind;
/// Linked pool of unused pieces with O(1) withdraw and restore
pub mod pool;

pub use catalog::{Piece, standard_pieces};
pub use kind::PieceKind;
pub use pool::{Link, PiecePool};

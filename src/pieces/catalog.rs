//! Pieces with their precomputed orientation lists

use crate::io::configuration::{
    RECTANGULAR_BOARD_ORIENTATIONS, SQUARE_BOARD_ORIENTATIONS, SYMMETRY_BREAKING_PIECE,
};
use crate::pieces::kind::PieceKind;
use crate::spatial::board::BoardSize;
use crate::spatial::shape::{Shape, orientations};

/// A piece and every orientation the search may place it in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    kind: PieceKind,
    shapes: Vec<Shape>,
}

impl Piece {
    /// Build a piece with all distinct orientations of its base shape
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            shapes: orientations(&kind.base_shape()),
        }
    }

    /// Keep only the first `count` orientations
    #[must_use]
    pub fn restricted(mut self, count: usize) -> Self {
        self.shapes.truncate(count);
        self
    }

    /// Which pentomino this is
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Orientations in generation order
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Diagnostic listing: a `K: (n)` header and one line per shape
    pub fn describe(&self) -> String {
        let header = format!("{}: ({})\n", self.kind, self.shapes.len());
        self.shapes
            .iter()
            .map(|shape| format!("    {shape}\n"))
            .fold(header, |text, line| text + &line)
    }
}

/// Orientations the symmetry-breaking piece keeps on a board of `size`
pub const fn symmetry_breaking_orientations(size: BoardSize) -> usize {
    if size.is_square() {
        SQUARE_BOARD_ORIENTATIONS
    } else {
        RECTANGULAR_BOARD_ORIENTATIONS
    }
}

/// All twelve pieces in search order, with whole-board symmetry removed
///
/// The designated piece keeps only its first orientations so that rotated
/// and mirrored copies of a tiling are reported once.
pub fn standard_pieces(size: BoardSize) -> Vec<Piece> {
    PieceKind::ALL
        .into_iter()
        .map(|kind| {
            let piece = Piece::new(kind);
            if kind == SYMMETRY_BREAKING_PIECE {
                piece.restricted(symmetry_breaking_orientations(size))
            } else {
                piece
            }
        })
        .collect()
}

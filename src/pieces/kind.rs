//! The twelve free pentominoes

use crate::io::configuration::PIECE_DIAGRAM;
use crate::spatial::coord::Coord;
use crate::spatial::shape::Shape;
use std::fmt;

/// One pentomino, named by its conventional letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    /// F pentomino
    F,
    /// I pentomino (straight line)
    I,
    /// L pentomino
    L,
    /// N pentomino
    N,
    /// P pentomino
    P,
    /// T pentomino
    T,
    /// U pentomino
    U,
    /// V pentomino
    V,
    /// W pentomino
    W,
    /// X pentomino (plus sign)
    X,
    /// Y pentomino
    Y,
    /// Z pentomino
    Z,
}

impl PieceKind {
    /// All pieces in search order
    pub const ALL: [Self; 12] = [
        Self::F,
        Self::I,
        Self::L,
        Self::N,
        Self::P,
        Self::T,
        Self::U,
        Self::V,
        Self::W,
        Self::X,
        Self::Y,
        Self::Z,
    ];

    /// Position in [`PieceKind::ALL`]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Conventional letter
    pub const fn letter(self) -> char {
        match self {
            Self::F => 'F',
            Self::I => 'I',
            Self::L => 'L',
            Self::N => 'N',
            Self::P => 'P',
            Self::T => 'T',
            Self::U => 'U',
            Self::V => 'V',
            Self::W => 'W',
            Self::X => 'X',
            Self::Y => 'Y',
            Self::Z => 'Z',
        }
    }

    /// Reference orientation read from the piece diagram
    pub fn base_shape(self) -> Shape {
        let letter = self.letter();
        let cells = PIECE_DIAGRAM.lines().enumerate().flat_map(|(row, line)| {
            line.chars()
                .enumerate()
                .filter(move |&(_, c)| c == letter)
                .map(move |(column, _)| Coord::new((column / 2) as i32, row as i32))
        });
        Shape::normalized(cells)
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

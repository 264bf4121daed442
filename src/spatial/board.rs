//! Board state for the placement search
//!
//! The board is a fixed grid of cell labels. Boards of 64 cells carry a
//! permanently blocked 2x2 block in the centre so the twelve pieces (60
//! cells) can still cover the rest.

use ndarray::Array2;
use std::fmt;
use std::str::FromStr;

use crate::io::configuration::{
    ACCEPTED_CELL_COUNTS, CENTER_BLOCK_CELL_COUNT, DEFAULT_HEIGHT, DEFAULT_WIDTH, MIN_BOARD_SIDE,
};
use crate::io::error::{Result, SolverError, invalid_board_size, unparseable_board_size};
use crate::pieces::PieceKind;
use crate::spatial::coord::Coord;
use crate::spatial::shape::Shape;

/// Label held by one board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Not yet covered
    Free,
    /// Permanently unavailable (centre block of 64-cell boards)
    Blocked,
    /// Returned for coordinates outside the grid
    OutOfBounds,
    /// Covered by a placed piece
    Piece(PieceKind),
}

/// Validated board dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardSize {
    width: usize,
    height: usize,
}

impl BoardSize {
    /// Validate dimensions
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::InvalidBoardSize`] if either side is below the
    /// minimum or the cell count is not one the pieces can cover
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width < MIN_BOARD_SIDE || height < MIN_BOARD_SIDE {
            return Err(invalid_board_size(width, height, "sides must be at least 3"));
        }
        if !ACCEPTED_CELL_COUNTS.contains(&(width * height)) {
            return Err(invalid_board_size(
                width,
                height,
                "cell count must be 60 or 64",
            ));
        }
        Ok(Self { width, height })
    }

    /// Width in cells
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Height in cells
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells including any blocked ones
    pub const fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Test if width equals height
    pub const fn is_square(&self) -> bool {
        self.width == self.height
    }

    /// Test if the board carries a blocked centre block
    pub const fn has_center_block(&self) -> bool {
        self.cell_count() == CENTER_BLOCK_CELL_COUNT
    }

    /// The four centre cells, top-left first in row-major order
    pub const fn center_block(&self) -> [Coord; 4] {
        let cx = (self.width / 2) as i32;
        let cy = (self.height / 2) as i32;
        [
            Coord::new(cx - 1, cy - 1),
            Coord::new(cx, cy - 1),
            Coord::new(cx - 1, cy),
            Coord::new(cx, cy),
        ]
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl fmt::Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

// Accepts `<width><one non-digit separator><height>`, e.g. "6x10" or "5*12"
impl FromStr for BoardSize {
    type Err = SolverError;

    fn from_str(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        let split = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .ok_or_else(|| unparseable_board_size(text, &"missing separator"))?;
        let (width_text, rest) = trimmed.split_at(split);
        let mut rest_chars = rest.chars();
        rest_chars.next();
        let height_text = rest_chars.as_str();

        let width = width_text
            .parse::<usize>()
            .map_err(|error| unparseable_board_size(text, &error))?;
        let height = height_text
            .parse::<usize>()
            .map_err(|error| unparseable_board_size(text, &error))?;

        Self::new(width, height)
    }
}

/// Grid of cell labels indexed `(y, x)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Array2<Cell>,
    size: BoardSize,
}

impl Board {
    /// Create an empty board, blocking the centre of 64-cell boards
    pub fn new(size: BoardSize) -> Self {
        let mut cells = Array2::from_elem((size.height(), size.width()), Cell::Free);

        if size.has_center_block() {
            for cell in size.center_block() {
                if let Some(slot) = cells.get_mut((cell.y as usize, cell.x as usize)) {
                    *slot = Cell::Blocked;
                }
            }
        }

        Self { cells, size }
    }

    /// Board dimensions
    pub const fn size(&self) -> BoardSize {
        self.size
    }

    /// Width in cells
    pub const fn width(&self) -> usize {
        self.size.width()
    }

    /// Height in cells
    pub const fn height(&self) -> usize {
        self.size.height()
    }

    /// Raw cell grid indexed `(y, x)`
    pub const fn cells(&self) -> &Array2<Cell> {
        &self.cells
    }

    /// Label at `(x, y)`, or [`Cell::OutOfBounds`] outside the grid
    pub fn at(&self, x: i32, y: i32) -> Cell {
        if x < 0 || y < 0 {
            return Cell::OutOfBounds;
        }
        self.cells
            .get((y as usize, x as usize))
            .copied()
            .unwrap_or(Cell::OutOfBounds)
    }

    /// Label at a coordinate
    pub fn cell(&self, at: Coord) -> Cell {
        self.at(at.x, at.y)
    }

    /// Test if every cell of `shape` anchored at `anchor` is free
    pub fn check(&self, anchor: Coord, shape: &Shape) -> bool {
        shape
            .cells()
            .iter()
            .all(|&cell| self.cell(anchor.offset(cell)) == Cell::Free)
    }

    /// Write `label` into every cell of `shape` anchored at `anchor`
    ///
    /// Placing [`Cell::Free`] over a previous placement undoes it. Callers
    /// must only place shapes that passed [`Board::check`].
    pub fn place(&mut self, anchor: Coord, shape: &Shape, label: Cell) {
        for &cell in shape.cells() {
            let target = anchor.offset(cell);
            debug_assert!(
                target.x >= 0 && target.y >= 0,
                "placement outside the board at {target}"
            );
            if let Some(slot) = self
                .cells
                .get_mut((target.y as usize, target.x as usize))
            {
                *slot = label;
            }
        }
    }

    /// First free cell at or after `from` in row-major order
    ///
    /// Returns `None` only when every remaining cell is covered.
    pub fn find_space(&self, from: Coord) -> Option<Coord> {
        let start = (from.y.max(0) as usize) * self.width() + from.x.max(0) as usize;
        self.cells
            .indexed_iter()
            .skip(start)
            .find(|(_, cell)| **cell == Cell::Free)
            .map(|((y, x), _)| Coord::new(x as i32, y as i32))
    }

    /// Number of cells still free
    pub fn free_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell == Cell::Free).count()
    }
}

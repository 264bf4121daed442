//! Piece shapes and their symmetric variants
//!
//! A shape is a set of cells normalized so that its row-major smallest cell
//! sits at the origin. Orientations are generated by applying the eight
//! transforms of the square's symmetry group to a base shape and keeping
//! each distinct result once, in transform order.

use crate::spatial::coord::Coord;
use std::collections::HashSet;
use std::fmt;

/// One orientation of one piece, normalized to the origin
///
/// Cells are sorted in row-major order and the first cell is always (0, 0)
/// for non-empty shapes. Shapes are immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Shape {
    cells: Vec<Coord>,
}

impl Shape {
    /// Build a normalized shape from arbitrary cells
    ///
    /// Cells are sorted row-major, then translated so the smallest one
    /// becomes (0, 0).
    pub fn normalized(cells: impl IntoIterator<Item = Coord>) -> Self {
        let mut cells: Vec<Coord> = cells.into_iter().collect();
        cells.sort();

        let origin = cells.first().copied().unwrap_or(Coord::ORIGIN);
        for cell in &mut cells {
            *cell = cell.relative_to(origin);
        }

        Self { cells }
    }

    /// Cells in row-major order
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    /// Number of cells
    pub const fn len(&self) -> usize {
        self.cells.len()
    }

    /// Test if the shape has no cells
    pub const fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Apply a symmetry transform and renormalize
    #[must_use]
    pub fn transformed(&self, orientation: Orientation) -> Self {
        Self::normalized(self.cells.iter().map(|&cell| orientation.apply(cell)))
    }

    /// Test if normalizing would leave the shape unchanged
    pub fn is_normalized(&self) -> bool {
        Self::normalized(self.cells.iter().copied()) == *self
    }

    /// Test if no cell appears twice
    pub fn has_distinct_cells(&self) -> bool {
        let unique: HashSet<&Coord> = self.cells.iter().collect();
        unique.len() == self.cells.len()
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{cell}")?;
        }
        write!(f, "]")
    }
}

/// One element of the symmetry group of the square
///
/// The cell is turned a quarter `quarter_turns` times, then mirrored when
/// `mirrored` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Orientation {
    /// Number of quarter turns (0..4)
    pub quarter_turns: u8,
    /// Mirror after rotating
    pub mirrored: bool,
}

impl Orientation {
    /// The eight transforms in generation order
    pub const ALL: [Self; 8] = [
        Self::new(0, false),
        Self::new(1, false),
        Self::new(2, false),
        Self::new(3, false),
        Self::new(0, true),
        Self::new(1, true),
        Self::new(2, true),
        Self::new(3, true),
    ];

    /// Create a transform; turns are taken modulo 4
    pub const fn new(quarter_turns: u8, mirrored: bool) -> Self {
        Self {
            quarter_turns: quarter_turns % 4,
            mirrored,
        }
    }

    /// Transform a single coordinate
    pub const fn apply(self, cell: Coord) -> Coord {
        let mut out = cell;
        let mut turns = 0;
        while turns < self.quarter_turns {
            out = out.rotate_quarter();
            turns += 1;
        }
        if self.mirrored { out.mirror() } else { out }
    }
}

/// Generate the distinct orientations of a base shape
///
/// Produces between 1 and 8 shapes depending on the shape's own symmetry.
/// The order follows [`Orientation::ALL`] and is identical on every call.
pub fn orientations(base: &Shape) -> Vec<Shape> {
    let mut seen = HashSet::new();
    let mut unique_shapes = Vec::new();

    for orientation in Orientation::ALL {
        let shape = base.transformed(orientation);
        if seen.insert(shape.clone()) {
            unique_shapes.push(shape);
        }
    }

    unique_shapes
}

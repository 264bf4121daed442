//! Integer cell coordinates with row-major ordering

use std::cmp::Ordering;
use std::fmt;

/// A cell position; `y` grows downwards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coord {
    /// Column
    pub x: i32,
    /// Row
    pub y: i32,
}

impl Coord {
    /// The top-left cell
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a coordinate
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate by another coordinate
    #[must_use]
    pub const fn offset(self, by: Self) -> Self {
        Self::new(self.x + by.x, self.y + by.y)
    }

    /// Translate so that `origin` maps to (0, 0)
    #[must_use]
    pub const fn relative_to(self, origin: Self) -> Self {
        Self::new(self.x - origin.x, self.y - origin.y)
    }

    /// Quarter turn: (x, y) -> (-y, x)
    #[must_use]
    pub const fn rotate_quarter(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Mirror across the vertical axis: (x, y) -> (-x, y)
    #[must_use]
    pub const fn mirror(self) -> Self {
        Self::new(-self.x, self.y)
    }
}

// Row-major: rows first, then columns
impl Ord for Coord {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

//! Solver constants and runtime configuration defaults

use crate::pieces::PieceKind;

// Board defaults used whenever no valid size argument is supplied
/// Default board width in cells
pub const DEFAULT_WIDTH: usize = 6;
/// Default board height in cells
pub const DEFAULT_HEIGHT: usize = 10;

/// Smallest accepted board side
pub const MIN_BOARD_SIDE: usize = 3;

/// Cell counts the twelve pentominoes can cover (64 leaves a blocked 2x2 centre)
pub const ACCEPTED_CELL_COUNTS: [usize; 2] = [60, 64];

/// Cell count that receives the blocked centre block
pub const CENTER_BLOCK_CELL_COUNT: usize = 64;

/// Cells covered by every pentomino
pub const CELLS_PER_PIECE: usize = 5;

/// Piece whose orientations are restricted to remove whole-board symmetry
pub const SYMMETRY_BREAKING_PIECE: PieceKind = PieceKind::F;

/// Orientations kept for the symmetry-breaking piece on a square board
pub const SQUARE_BOARD_ORIENTATIONS: usize = 1;
/// Orientations kept for the symmetry-breaking piece on any other board
pub const RECTANGULAR_BOARD_ORIENTATIONS: usize = 2;

// Reference orientation of every piece. A letter at text column c, line r
// is the cell (c / 2, r).
/// Diagram the base shapes are read from
pub const PIECE_DIAGRAM: &str = "\
+-------+-------+-------+-------+-------+-------+
|       |   I   |  L    |  N    |       |       |
|   F F |   I   |  L    |  N    |  P P  | T T T |
| F F   |   I   |  L    |  N N  |  P P  |   T   |
|   F   |   I   |  L L  |    N  |  P    |   T   |
|       |   I   |       |       |       |       |
+-------+-------+-------+-------+-------+-------+
|       | V     | W     |   X   |    Y  | Z Z   |
| U   U | V     | W W   | X X X |  Y Y  |   Z   |
| U U U | V V V |   W W |   X   |    Y  |   Z Z |
|       |       |       |       |    Y  |       |
+-------+-------+-------+-------+-------+-------+
";

// Display settings
/// Show every n-th solution by default (1 shows all of them)
pub const DEFAULT_EVERY: u64 = 1;
/// Spinner refresh interval in milliseconds
pub const PROGRESS_TICK_MS: u64 = 120;

//! Box-drawing diagrams of board state
//!
//! Every grid corner gets a 4-bit code from the four cells meeting there:
//!
//! ```text
//!            2
//!    (-1,-1) | (0,-1)
//!      --4---+---1--
//!    (-1, 0) | (0, 0)
//!            8
//! ```
//!
//! A bit is set when the two cells on either side of that arm differ. The
//! code selects a 4-character piece for the boundary line and one for the
//! interior line below it.

use bitvec::prelude::*;

use crate::spatial::board::{Board, Cell};

/// Diagram pieces indexed by `[line][code]`; line 0 is the boundary line
///
/// Codes with a single bit set cannot occur and map to empty strings.
pub const JUNCTIONS: [[&str; 16]; 2] = [
    [
        "    ", "", "", "+---", "", "----", "+   ", "+---", "", "+---", "|   ", "+---", "+   ",
        "+---", "+   ", "+---",
    ],
    [
        "    ", "", "", "    ", "", "    ", "    ", "    ", "", "|   ", "|   ", "|   ", "|   ",
        "|   ", "|   ", "|   ",
    ],
];

/// Code for the corner at the top-left of cell `(x, y)`
pub fn junction_code(board: &Board, x: i32, y: i32) -> usize {
    let here = board.at(x, y);
    let above = board.at(x, y - 1);
    let above_left = board.at(x - 1, y - 1);
    let left = board.at(x - 1, y);

    usize::from(here != above)
        | (usize::from(above != above_left) << 1)
        | (usize::from(above_left != left) << 2)
        | (usize::from(left != here) << 3)
}

fn junction(line: usize, code: usize) -> &'static str {
    JUNCTIONS
        .get(line)
        .and_then(|pieces| pieces.get(code))
        .copied()
        .unwrap_or("")
}

/// Render the board as `2 * height + 1` lines joined by newlines
pub fn render(board: &Board) -> String {
    render_with(board, false)
}

/// Render the board with each piece's letter in its first row-major cell
pub fn render_labeled(board: &Board) -> String {
    render_with(board, true)
}

fn render_with(board: &Board, labeled: bool) -> String {
    let width = board.width() as i32;
    let height = board.height() as i32;
    let mut labeled_kinds = bitarr![0; 12];
    let mut lines = Vec::with_capacity(board.height() * 2 + 1);

    for y in 0..=height {
        let codes: Vec<usize> = (0..=width).map(|x| junction_code(board, x, y)).collect();

        lines.push(codes.iter().map(|&code| junction(0, code)).collect::<String>());

        // The bottom edge has no interior line below it
        if y == height {
            break;
        }

        let mut interior = String::new();
        for (x, &code) in (0..).zip(codes.iter()) {
            let piece = junction(1, code);
            let label = match board.at(x, y) {
                Cell::Piece(kind)
                    if labeled && labeled_kinds.get(kind.index()).as_deref() == Some(&false) =>
                {
                    labeled_kinds.set(kind.index(), true);
                    Some(kind.letter())
                }
                _ => None,
            };
            match (label, piece.strip_suffix("   ")) {
                (Some(letter), Some(edge)) => {
                    interior.push_str(edge);
                    interior.push(' ');
                    interior.push(letter);
                    interior.push(' ');
                }
                _ => interior.push_str(piece),
            }
        }
        lines.push(interior);
    }

    lines.join("\n")
}

//! Tests for solver constants

#[cfg(test)]
mod tests {
    use pentomino::io::configuration::{
        ACCEPTED_CELL_COUNTS, CELLS_PER_PIECE, CENTER_BLOCK_CELL_COUNT, DEFAULT_EVERY,
        DEFAULT_HEIGHT, DEFAULT_WIDTH, MIN_BOARD_SIDE, PIECE_DIAGRAM,
        RECTANGULAR_BOARD_ORIENTATIONS, SQUARE_BOARD_ORIENTATIONS,
    };
    use pentomino::pieces::PieceKind;
    use pentomino::spatial::board::BoardSize;

    // Tests the default board is itself accepted
    // Verified by setting a 7-wide default
    #[test]
    fn test_default_board_is_valid() {
        let size = BoardSize::new(DEFAULT_WIDTH, DEFAULT_HEIGHT).unwrap();
        assert_eq!(size, BoardSize::default());
        assert!(ACCEPTED_CELL_COUNTS.contains(&(DEFAULT_WIDTH * DEFAULT_HEIGHT)));
        assert_eq!(DEFAULT_WIDTH.max(MIN_BOARD_SIDE), DEFAULT_WIDTH);
    }

    // Tests cell counts agree with the piece set
    // Verified by changing the piece size
    #[test]
    fn test_cell_counts() {
        assert_eq!(CELLS_PER_PIECE * PieceKind::ALL.len(), 60);
        assert_eq!(CENTER_BLOCK_CELL_COUNT, 60 + 4);
        assert!(ACCEPTED_CELL_COUNTS.contains(&CENTER_BLOCK_CELL_COUNT));
    }

    // Tests the diagram holds five cells for every letter
    // Verified by removing one letter from the diagram
    #[test]
    fn test_piece_diagram_letters() {
        for kind in PieceKind::ALL {
            let count = PIECE_DIAGRAM.chars().filter(|&c| c == kind.letter()).count();
            assert_eq!(count, CELLS_PER_PIECE, "{kind}");
        }
        assert_eq!(PIECE_DIAGRAM.lines().count(), 12);
    }

    // Tests symmetry breaking and display defaults
    // Verified by swapping the orientation budgets
    #[test]
    fn test_display_and_symmetry_defaults() {
        assert_eq!(SQUARE_BOARD_ORIENTATIONS, 1);
        assert_eq!(RECTANGULAR_BOARD_ORIENTATIONS, 2);
        assert_eq!(DEFAULT_EVERY, 1);
    }
}

//! Tests for coordinate ordering and symmetry transforms

#[cfg(test)]
mod tests {
    use pentomino::spatial::coord::Coord;

    // Tests that rows dominate columns in the ordering
    // Verified by deriving Ord on (x, y) field order
    #[test]
    fn test_row_major_ordering() {
        assert!(Coord::new(5, 0) < Coord::new(0, 1));
        assert!(Coord::new(0, 1) < Coord::new(1, 1));

        let mut cells = vec![Coord::new(1, 1), Coord::new(2, 0), Coord::new(0, 1)];
        cells.sort();
        assert_eq!(
            cells,
            vec![Coord::new(2, 0), Coord::new(0, 1), Coord::new(1, 1)]
        );
    }

    // Tests the quarter-turn rule and that four turns are the identity
    // Verified by swapping the sign in rotate_quarter
    #[test]
    fn test_rotate_quarter() {
        let cell = Coord::new(1, 2);
        assert_eq!(cell.rotate_quarter(), Coord::new(-2, 1));

        let full_turn = cell
            .rotate_quarter()
            .rotate_quarter()
            .rotate_quarter()
            .rotate_quarter();
        assert_eq!(full_turn, cell);
    }

    // Tests mirroring negates only the column
    // Verified by negating y instead of x
    #[test]
    fn test_mirror() {
        assert_eq!(Coord::new(3, -2).mirror(), Coord::new(-3, -2));
        assert_eq!(Coord::new(3, -2).mirror().mirror(), Coord::new(3, -2));
    }

    // Tests translation helpers are inverses
    // Verified by subtracting in offset
    #[test]
    fn test_offset_and_relative() {
        let anchor = Coord::new(4, 7);
        let cell = Coord::new(-1, 2);

        assert_eq!(cell.offset(anchor), Coord::new(3, 9));
        assert_eq!(cell.offset(anchor).relative_to(anchor), cell);
        assert_eq!(anchor.relative_to(anchor), Coord::ORIGIN);
    }

    // Tests display and tuple conversion
    // Verified by swapping fields in the formatter
    #[test]
    fn test_display_and_from() {
        assert_eq!(Coord::new(1, -2).to_string(), "(1,-2)");
        assert_eq!(Coord::from((3, 4)), Coord::new(3, 4));
    }
}

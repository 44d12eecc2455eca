#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::shapes::ShapeKind;
    use crate::tests::test_utils::fill_row;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(20, 10);
        assert_eq!(board.rows(), 20);
        assert_eq!(board.cols(), 10);
        for row in 0..20 {
            for col in 0..10 {
                assert!(!board.occupied(row, col));
            }
        }
    }

    #[test]
    fn test_set_and_read_cells() {
        let mut board = Board::new(20, 10);
        board.set_cell(0, 0, Some(ShapeKind::I));
        board.set_cell(19, 9, Some(ShapeKind::T));

        assert!(board.occupied(0, 0));
        assert!(board.occupied(19, 9));
        assert_eq!(board.cell(0, 0), Some(ShapeKind::I));
        assert_eq!(board.cell(19, 9), Some(ShapeKind::T));

        board.set_cell(0, 0, None);
        assert!(!board.occupied(0, 0));
    }

    #[test]
    fn test_out_of_range_reads_as_empty() {
        let board = Board::new(20, 10);
        assert!(!board.occupied(-1, 0));
        assert!(!board.occupied(0, -1));
        assert!(!board.occupied(20, 0));
        assert!(!board.occupied(0, 10));
        assert_eq!(board.cell(-5, 3), None);
    }

    #[test]
    fn test_is_row_full() {
        let mut board = Board::new(20, 10);
        assert!(!board.is_row_full(19));

        fill_row(&mut board, 19, ShapeKind::O);
        assert!(board.is_row_full(19));

        board.set_cell(19, 4, None);
        assert!(!board.is_row_full(19));

        // Out-of-range rows are never full
        assert!(!board.is_row_full(20));
    }

    #[test]
    fn test_collapse_row_shifts_everything_down() {
        let mut board = Board::new(20, 10);
        // A distinctive stack: row 17 has one cell, row 18 is full, row 19 has two
        board.set_cell(17, 2, Some(ShapeKind::S));
        fill_row(&mut board, 18, ShapeKind::I);
        board.set_cell(19, 0, Some(ShapeKind::Z));
        board.set_cell(19, 9, Some(ShapeKind::Z));

        board.collapse_row(18);

        // Row count unchanged, new empty row on top
        assert_eq!(board.rows(), 20);
        assert!((0..10).all(|col| !board.occupied(0, col)));

        // Row 17's cell dropped into row 18, row 19 untouched
        assert!(board.occupied(18, 2));
        assert!(!board.occupied(17, 2));
        assert!(board.occupied(19, 0));
        assert!(board.occupied(19, 9));
        assert!(!board.occupied(19, 5));
    }

    #[test]
    fn test_collapse_top_row() {
        let mut board = Board::new(20, 10);
        fill_row(&mut board, 0, ShapeKind::L);
        board.set_cell(5, 5, Some(ShapeKind::J));

        board.collapse_row(0);

        assert!((0..10).all(|col| !board.occupied(0, col)));
        // Rows below the removed row do not move
        assert!(board.occupied(5, 5));
    }

    #[test]
    fn test_clear_empties_the_grid() {
        let mut board = Board::new(20, 10);
        fill_row(&mut board, 10, ShapeKind::T);
        board.clear();
        assert!(board.grid().iter().all(|row| row.iter().all(Option::is_none)));
    }
}

#[cfg(test)]
mod tests {
    use crate::piece::PieceCells;
    use crate::shapes::{layout, Orientation, ShapeKind};

    #[test]
    fn test_from_layout_applies_offsets() {
        // T pointing down: top bar on row 0, stem on row 1
        let cells = PieceCells::from_layout(layout(ShapeKind::T, Orientation::North), 5, 3);

        let coords: Vec<_> = cells.iter().collect();
        assert_eq!(coords, vec![(5, 3), (5, 4), (5, 5), (6, 4)]);
    }

    #[test]
    fn test_translated_leaves_original_untouched() {
        let cells = PieceCells::from_layout(layout(ShapeKind::O, Orientation::North), 0, 0);
        let moved = cells.translated(3, 2);

        assert_eq!(
            moved.iter().collect::<Vec<_>>(),
            vec![(3, 2), (3, 3), (4, 2), (4, 3)]
        );
        // The source cells are a separate value
        assert_eq!(
            cells.iter().collect::<Vec<_>>(),
            vec![(0, 0), (0, 1), (1, 0), (1, 1)]
        );
    }

    #[test]
    fn test_pivot_is_bounding_box_top_left() {
        // S piece: (0,1) (0,2) (1,0) (1,1) shifted to rows 7.., cols 4..
        let cells = PieceCells::from_layout(layout(ShapeKind::S, Orientation::North), 7, 4);
        // Minimum row is 7; minimum column is 4 even though row 7 starts at 5
        assert_eq!(cells.pivot(), (7, 4));
    }

    #[test]
    fn test_max_row() {
        let tall = PieceCells::from_layout(layout(ShapeKind::I, Orientation::East), 10, 0);
        assert_eq!(tall.max_row(), 13);

        let flat = PieceCells::from_layout(layout(ShapeKind::I, Orientation::North), 10, 0);
        assert_eq!(flat.max_row(), 10);
    }

    #[test]
    fn test_contains() {
        let cells = PieceCells::from_layout(layout(ShapeKind::L, Orientation::North), 0, 0);
        assert!(cells.contains(0, 0));
        assert!(cells.contains(2, 1));
        assert!(!cells.contains(0, 1));
        assert!(!cells.contains(3, 0));
    }
}

#[cfg(test)]
mod tests {
    use crate::shapes::{
        layout, layout_cols, validate_catalog, Orientation, ShapeKind, Spin,
    };

    #[test]
    fn test_catalog_is_valid() {
        validate_catalog().expect("shipped catalog must validate");
    }

    #[test]
    fn test_every_layout_has_four_cells() {
        for kind in ShapeKind::ALL {
            for orientation in Orientation::ALL {
                let cells: usize = layout(kind, orientation)
                    .iter()
                    .map(|(_, cols)| cols.len())
                    .sum();
                assert_eq!(cells, 4, "{kind:?}/{orientation:?}");
            }
        }
    }

    #[test]
    fn test_layouts_are_normalized_to_origin() {
        for kind in ShapeKind::ALL {
            for orientation in Orientation::ALL {
                let layout = layout(kind, orientation);
                assert_eq!(layout[0].0, 0, "{kind:?}/{orientation:?} min row");
                let min_col = layout
                    .iter()
                    .filter_map(|(_, cols)| cols.first().copied())
                    .min();
                assert_eq!(min_col, Some(0), "{kind:?}/{orientation:?} min col");
            }
        }
    }

    #[test]
    fn test_layout_widths() {
        assert_eq!(layout_cols(layout(ShapeKind::I, Orientation::North)), 4);
        assert_eq!(layout_cols(layout(ShapeKind::I, Orientation::East)), 1);
        assert_eq!(layout_cols(layout(ShapeKind::O, Orientation::North)), 2);
        assert_eq!(layout_cols(layout(ShapeKind::T, Orientation::North)), 3);
        assert_eq!(layout_cols(layout(ShapeKind::T, Orientation::East)), 2);
    }

    #[test]
    fn test_orientation_cycle_round_trips() {
        for start in Orientation::ALL {
            let mut orientation = start;
            for _ in 0..4 {
                orientation = orientation.spun(Spin::Clockwise);
            }
            assert_eq!(orientation, start);

            // One turn each way cancels out
            assert_eq!(
                start.spun(Spin::Clockwise).spun(Spin::CounterClockwise),
                start
            );
        }
    }

    #[test]
    fn test_orientation_cycle_order() {
        assert_eq!(Orientation::North.spun(Spin::Clockwise), Orientation::East);
        assert_eq!(Orientation::East.spun(Spin::Clockwise), Orientation::South);
        assert_eq!(Orientation::South.spun(Spin::Clockwise), Orientation::West);
        assert_eq!(Orientation::West.spun(Spin::Clockwise), Orientation::North);
        assert_eq!(
            Orientation::North.spun(Spin::CounterClockwise),
            Orientation::West
        );
    }

    #[test]
    fn test_square_shape_is_rotation_invariant() {
        let base = layout(ShapeKind::O, Orientation::North);
        for orientation in Orientation::ALL {
            assert_eq!(layout(ShapeKind::O, orientation), base);
        }
    }

    #[test]
    fn test_random_selection_stays_in_catalog() {
        for _ in 0..50 {
            let kind = ShapeKind::random();
            let orientation = Orientation::random();
            assert!(!layout(kind, orientation).is_empty());
        }
    }
}

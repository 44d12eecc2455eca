#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use crate::scores::{normalize_name, ScoreTable, ScoresError};

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("abc"), "ABC");
        assert_eq!(normalize_name("a"), "A**");
        assert_eq!(normalize_name(""), "***");
        assert_eq!(normalize_name("  xy  "), "XY*");
        assert_eq!(normalize_name("longname"), "LON");
    }

    #[test]
    fn test_record_keeps_table_sorted() {
        let mut table = ScoreTable::default();
        table.record("AAA", 100);
        table.record("BBB", 300);
        table.record("CCC", 200);

        let points: Vec<u32> = table.entries.iter().map(|e| e.points).collect();
        assert_eq!(points, vec![300, 200, 100]);
    }

    #[test]
    fn test_top_truncates() {
        let mut table = ScoreTable::default();
        for i in 0..5 {
            table.record("XXX", i * 10);
        }
        assert_eq!(table.top(3).len(), 3);
        assert_eq!(table.top(3)[0].points, 40);
        assert_eq!(table.top(10).len(), 5);
    }

    #[test]
    fn test_load_missing_file_is_empty_table() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("scores.toml");

        let table = ScoreTable::load(&path).expect("load");
        assert!(table.entries.is_empty());
        // Loading must not create the file
        assert!(!path.exists());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempdir().expect("temp dir");
        // Parent directories are created on save
        let path = dir.path().join("nested").join("scores.toml");

        let mut table = ScoreTable::default();
        table.record("ABC", 1200);
        table.record("DEF", 40);
        table.save(&path).expect("save");

        let loaded = ScoreTable::load(&path).expect("load");
        assert_eq!(loaded.entries, table.entries);
    }

    #[test]
    fn test_load_malformed_file_is_a_parse_error() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("scores.toml");
        fs::write(&path, "not really toml ! @ #").expect("write");

        match ScoreTable::load(&path) {
            Err(ScoresError::Parse(_)) => {}
            Ok(_) => panic!("expected a parse error"),
            Err(other) => panic!("unexpected error type: {other:?}"),
        }
    }

    #[test]
    fn test_loaded_table_is_sorted_even_if_file_is_not() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("scores.toml");
        fs::write(
            &path,
            "[[entries]]\nname = \"LOW\"\npoints = 10\n\n[[entries]]\nname = \"TOP\"\npoints = 900\n",
        )
        .expect("write");

        let table = ScoreTable::load(&path).expect("load");
        assert_eq!(table.entries[0].name, "TOP");
        assert_eq!(table.entries[1].name, "LOW");
    }
}

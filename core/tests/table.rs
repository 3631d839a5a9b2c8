//! LogTable behavior: numeric-aware sorting, column-union concatenation,
//! and CSV persistence.

use std::path::Path;
use telemetry_core::table::LogTable;
use tempfile::TempDir;

fn table(columns: &[&str], rows: &[&[&str]]) -> LogTable {
    let mut t = LogTable::new(columns.iter().map(|c| c.to_string()).collect());
    for row in rows {
        t.rows.push(row.iter().map(|c| c.to_string()).collect());
    }
    t
}

/// Numeric cells sort by value, not lexicographically: "5" comes before
/// "10" and "30".
#[test]
fn sort_is_numeric_for_numeric_cells() {
    let mut t = table(&["endTime"], &[&["10"], &["30"], &["5"]]);
    assert!(t.sort_by_column("endTime"));
    let order: Vec<&str> = (0..3).map(|i| t.cell(i, "endTime").unwrap()).collect();
    assert_eq!(order, ["5", "10", "30"]);
}

/// Sorting on a missing column leaves the table untouched and reports it.
#[test]
fn sort_on_missing_column_is_rejected() {
    let mut t = table(&["a"], &[&["2"], &["1"]]);
    assert!(!t.sort_by_column("endTime"));
    assert_eq!(t.cell(0, "a"), Some("2"));
}

/// The sort is stable: rows with equal keys keep their concatenation order.
#[test]
fn sort_is_stable_on_ties() {
    let mut t = table(
        &["endTime", "tag"],
        &[&["7", "first"], &["7", "second"], &["1", "third"]],
    );
    t.sort_by_column("endTime");
    assert_eq!(t.cell(0, "tag"), Some("third"));
    assert_eq!(t.cell(1, "tag"), Some("first"));
    assert_eq!(t.cell(2, "tag"), Some("second"));
}

/// append unions columns in first-seen order and fills missing cells with
/// empty strings on both sides.
#[test]
fn append_unions_columns() {
    let mut a = table(&["x", "y"], &[&["1", "2"]]);
    let b = table(&["y", "z"], &[&["3", "4"]]);
    a.append(b);

    assert_eq!(a.columns, ["x", "y", "z"]);
    assert_eq!(a.row_count(), 2);
    assert_eq!(a.cell(0, "z"), Some(""));
    assert_eq!(a.cell(1, "x"), Some(""));
    assert_eq!(a.cell(1, "y"), Some("3"));
    assert_eq!(a.cell(1, "z"), Some("4"));
}

#[test]
fn insert_and_remove_columns() {
    let mut t = table(&["a", "b"], &[&["1", "2"], &["3", "4"]]);
    assert!(t.remove_column("a"));
    assert!(!t.remove_column("a"));
    t.insert_column_front("episode", vec!["1".to_string(), "2".to_string()]);
    assert_eq!(t.columns, ["episode", "b"]);
    assert_eq!(t.cell(0, "episode"), Some("1"));
    assert_eq!(t.cell(1, "episode"), Some("2"));
    assert_eq!(t.cell(1, "b"), Some("4"));
}

/// Ragged CSV rows are padded to the header width on read; writing then
/// reading preserves the table.
#[test]
fn csv_read_pads_and_write_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("eco-log.csv");
    std::fs::write(&path, "episode,endTime,score\n1,10,0.5\n2,30\n").unwrap();

    let t = LogTable::from_csv(&path).unwrap();
    assert_eq!(t.cell(1, "score"), Some(""));

    let out = dir.path().join("copy.csv");
    t.write_csv(Path::new(&out)).unwrap();
    let reread = LogTable::from_csv(&out).unwrap();
    assert_eq!(reread, t);
}

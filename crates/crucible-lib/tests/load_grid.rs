use std::fs;

use crucible_lib::{load_grid, Error};
use tempfile::tempdir;

#[test]
fn loads_grid_from_file() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("grid.txt");
    fs::write(&path, "123\n456\n").expect("write grid");

    let grid = load_grid(&path).expect("grid loads");
    assert_eq!((grid.rows(), grid.cols()), (2, 3));
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempdir().expect("create temp dir");
    let err = load_grid(&dir.path().join("absent.txt")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
    assert!(!err.is_parse_error());
}

#[test]
fn malformed_file_is_parse_error() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("grid.txt");
    fs::write(&path, "12\n3-\n").expect("write grid");

    let err = load_grid(&path).unwrap_err();
    assert!(err.is_parse_error());
    assert_eq!(
        err.to_string(),
        "invalid cell '-' at line 2, column 2; expected a digit 0-9"
    );
}

//! Interpolation integration tests.

use std::io::Write;

use astrosubs::{ErrorKind, interp::Table};
use tempfile::NamedTempFile;

#[test]
fn test_resample_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "# x y").unwrap();
    for i in 0..=10 {
        writeln!(file, "{} {}", f64::from(i), 2.0 * f64::from(i) + 1.0).unwrap();
    }
    file.flush().unwrap();

    let reader = std::io::BufReader::new(std::fs::File::open(file.path()).unwrap());
    let table = Table::read(reader).unwrap();
    assert_eq!(table.len(), 11);

    let grid = table.resample(0.5, 9.5, 10).unwrap();
    assert_eq!(grid.len(), 10);
    for (x, y) in grid {
        assert!((y - (2.0 * x + 1.0)).abs() < 1e-12, "x = {x}, y = {y}");
    }
}

#[test]
fn test_out_of_range_grid() {
    let table = Table::new(vec![1.0, 2.0, 3.0], vec![1.0, 4.0, 9.0]).unwrap();
    let err = table.resample(0.0, 3.0, 4).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Interpolation);
    assert!(err.to_string().contains("out of range"));
}

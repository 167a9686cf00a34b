//! Header file integration tests: files on disk and byte order detection.

use astrosubs::{ErrorKind, Header, Item, file};
use tempfile::tempdir;

use crate::helpers::*;

#[test]
fn test_write_then_read_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("run.hdr");
    let head = every_kind_header();

    file::write_file(&path, &head).unwrap();
    let back = file::read_file(&path).unwrap();
    assert_eq!(back, head);
}

#[test]
fn test_rewrite_after_edit() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("edit.hdr");
    file::write_file(&path, &position_header()).unwrap();

    let mut head = file::read_file(&path).unwrap();
    head.set_auto("Position.Epoch", Item::new(2000.0)).unwrap();
    head.rename("Record", "Frame").unwrap();
    file::write_file(&path, &head).unwrap();

    let back = file::read_file(&path).unwrap();
    assert_eq!(back.get_as::<f64>("Position.Epoch").unwrap(), 2000.0);
    assert_eq!(back.get_as::<i32>("Frame").unwrap(), 23);
    assert!(!back.contains("Record"));
}

#[test]
fn test_missing_file_is_io_failure() {
    let dir = tempdir().unwrap();
    let err = file::read_file(dir.path().join("absent.hdr")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IoFailure);
}

#[test]
fn test_not_a_header_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("junk.hdr");
    std::fs::write(&path, b"this is not a header").unwrap();
    let err = file::read_file(&path).unwrap_err();
    assert!(err.is_corrupt_data());
}

#[test]
fn test_foreign_byte_order() {
    // An empty header written on a machine of the other byte order.
    let mut bytes = Vec::new();
    bytes.extend(file::MAGIC.swap_bytes().to_ne_bytes());
    bytes.extend(0u64.to_ne_bytes());
    assert!(file::read_from(bytes.as_slice()).unwrap().is_empty());

    let mut head_bytes = Vec::new();
    head_bytes.extend(file::MAGIC.swap_bytes().to_ne_bytes());
    head_bytes.extend(1u64.swap_bytes().to_ne_bytes());
    head_bytes.extend(2u64.swap_bytes().to_ne_bytes());
    head_bytes.extend(b"Gm");
    head_bytes.push(astrosubs::Kind::F64.tag());
    head_bytes.extend(1.5f64.to_bits().swap_bytes().to_ne_bytes());
    head_bytes.extend(0u64.to_ne_bytes());
    let head: Header = file::read_from(head_bytes.as_slice()).unwrap();
    assert_eq!(head.get_as::<f64>("Gm").unwrap(), 1.5);
}

#[test]
fn test_skip_file() {
    let mut bytes = Vec::new();
    file::write_to(&mut bytes, &position_header()).unwrap();
    file::write_to(&mut bytes, &every_kind_header()).unwrap();

    let mut reader = bytes.as_slice();
    file::skip(&mut reader).unwrap();
    assert_eq!(file::read_from(&mut reader).unwrap(), every_kind_header());
}

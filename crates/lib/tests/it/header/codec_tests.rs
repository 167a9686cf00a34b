use astrosubs::{ErrorKind, Header, Item, codec::Encoder};

use crate::helpers::*;

#[test]
fn test_round_trip_every_kind() {
    let head = every_kind_header();
    let bytes = head.to_bytes().unwrap();
    let back = Header::from_bytes(&bytes, false).unwrap();

    assert_eq!(back, head);
    assert_eq!(names(&back), names(&head));
    for (name, item) in head.iter() {
        let copy = back.get(name).unwrap();
        assert_eq!(copy.kind(), item.kind(), "{name}");
        assert_eq!(copy.comment(), item.comment(), "{name}");
    }
}

#[test]
fn test_encode_to_writer_matches_to_bytes() {
    let head = position_header();
    let mut out = Vec::new();
    head.encode(&mut out).unwrap();
    assert_eq!(out, head.to_bytes().unwrap());
}

#[test]
fn test_truncated_stream_rejected() {
    let bytes = every_kind_header().to_bytes().unwrap();
    // Cut inside the last item.
    let cut = &bytes[..bytes.len() - 30];
    let err = Header::from_bytes(cut, false).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::IoFailure | ErrorKind::CorruptData));
    assert!(err.is_io_error());
}

#[test]
fn test_skip_then_read_next() {
    let first = position_header();
    let second = every_kind_header();
    let mut bytes = first.to_bytes().unwrap();
    bytes.extend(second.to_bytes().unwrap());

    let mut reader = bytes.as_slice();
    Header::skip(&mut reader, false).unwrap();
    assert_eq!(Header::decode(&mut reader, false).unwrap(), second);
    assert!(reader.is_empty());
}

#[test]
fn test_swapped_stream() {
    // Hand-build a header in the opposite byte order: one top-level u32 item.
    let mut bytes = Vec::new();
    bytes.extend(1u64.swap_bytes().to_ne_bytes());
    bytes.extend(5u64.swap_bytes().to_ne_bytes());
    bytes.extend(b"Count");
    bytes.push(astrosubs::Kind::U32.tag());
    bytes.extend(0xDEAD_BEEFu32.swap_bytes().to_ne_bytes());
    bytes.extend(0u64.to_ne_bytes());

    let head = Header::from_bytes(&bytes, true).unwrap();
    assert_eq!(head.get_as::<u32>("Count").unwrap(), 0xDEAD_BEEF);
    Header::skip(bytes.as_slice(), true).unwrap();
}

#[test]
fn test_member_before_directory_is_corrupt() {
    let mut enc = Encoder::new(Vec::new());
    enc.write_len(2).unwrap();
    enc.write_string("Position.RA").unwrap();
    Item::new(21.0).encode(&mut enc).unwrap();
    enc.write_string("Position").unwrap();
    Item::directory("").encode(&mut enc).unwrap();

    let err = Header::from_bytes(&enc.into_inner(), false).unwrap_err();
    assert!(err.is_corrupt_data());
}

#[test]
fn test_unknown_tag_is_corrupt() {
    let mut bytes = Vec::new();
    bytes.extend(1u64.to_ne_bytes());
    bytes.extend(1u64.to_ne_bytes());
    bytes.push(b'X');
    bytes.push(99);
    let err = Header::from_bytes(&bytes, false).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::CorruptData);
    assert_eq!(err.module(), "codec");
}

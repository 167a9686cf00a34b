//! Item integration tests: kinds, typed access and text parsing.

use astrosubs::{
    ErrorKind, Item, Kind, Value,
    time::{Date, Time},
};

#[test]
fn test_kind_follows_value() {
    let cases = [
        (Item::directory("dir"), Kind::Directory),
        (Item::new(1i8), Kind::I8),
        (Item::new(1u8), Kind::U8),
        (Item::new(1i16), Kind::I16),
        (Item::new(1u16), Kind::U16),
        (Item::new(1i32), Kind::I32),
        (Item::new(1u32), Kind::U32),
        (Item::new(1i64), Kind::I64),
        (Item::new(1u64), Kind::U64),
        (Item::new(1.0f32), Kind::F32),
        (Item::new(1.0f64), Kind::F64),
        (Item::new("text"), Kind::Str),
        (Item::new(String::from("text")), Kind::Str),
        (Item::new(true), Kind::Bool),
        (Item::new(Date::new(2002, 9, 29).unwrap()), Kind::Date),
        (Item::new(Time::from_mjd(52_546.5).unwrap()), Kind::Time),
        (Item::new(vec![1.0f32]), Kind::F32Array),
        (Item::new(vec![1.0f64]), Kind::F64Array),
    ];
    for (item, kind) in cases {
        assert_eq!(item.kind(), kind);
        assert_eq!(item.is_dir(), kind == Kind::Directory);
    }
}

#[test]
fn test_typed_reads_are_strict() {
    let item = Item::new(7u16);
    assert_eq!(item.get::<u16>().unwrap(), 7);
    let err = item.get::<u32>().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    assert_eq!(err.module(), "item");
}

#[test]
fn test_widening_accessors() {
    assert_eq!(Value::from(-5i8).as_i64(), Some(-5));
    assert_eq!(Value::from(40_000u16).as_i64(), Some(40_000));
    assert_eq!(Value::from(2.5f32).as_f64(), Some(2.5));
    assert_eq!(Value::from("x").as_f64(), None);
    assert_eq!(Value::from("x").as_str(), Some("x"));
    assert_eq!(Value::from(true).as_bool(), Some(true));
}

#[test]
fn test_parse_by_kind() {
    assert_eq!(Value::parse(Kind::I32, "-12").unwrap(), Value::I32(-12));
    assert_eq!(Value::parse(Kind::F64, "21.5").unwrap(), Value::F64(21.5));
    assert_eq!(Value::parse(Kind::Bool, "true").unwrap(), Value::Bool(true));
    assert_eq!(
        Value::parse(Kind::Str, "La Palma").unwrap(),
        Value::Str("La Palma".to_string())
    );
    assert_eq!(
        Value::parse(Kind::F64Array, "1, 2 3").unwrap(),
        Value::F64Array(vec![1.0, 2.0, 3.0])
    );
    assert_eq!(
        Value::parse(Kind::Date, "17 Nov 1961").unwrap(),
        Value::Date(Date::new(1961, 11, 17).unwrap())
    );

    assert!(Value::parse(Kind::U8, "300").is_err());
    assert!(Value::parse(Kind::I32, "twelve").is_err());
}

#[test]
fn test_parse_keeps_string_whitespace() {
    assert_eq!(
        Value::parse(Kind::Str, "  padded  ").unwrap(),
        Value::Str("  padded  ".to_string())
    );
    assert_eq!(Value::parse(Kind::U16, " 42 ").unwrap(), Value::U16(42));
    assert_eq!(
        Value::parse(Kind::Date, " 17 Nov 1961 ").unwrap(),
        Value::Date(Date::new(1961, 11, 17).unwrap())
    );
}

#[test]
fn test_unreadable_text_is_not_a_type_mismatch() {
    let err = Value::parse(Kind::I32, "twelve").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidValue);
    assert!(!err.is_type_error());

    let err = Item::new(1i32).get::<f64>().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TypeMismatch);
}

#[test]
fn test_serialize_item() {
    let item = Item::with_comment(500.0f32, "Exposure time (seconds)");
    let json = serde_json::to_value(&item).unwrap();
    assert_eq!(json["kind"], "f32");
    assert_eq!(json["value"], 500.0);
    assert_eq!(json["comment"], "Exposure time (seconds)");

    let json = serde_json::to_value(Item::new(3u8)).unwrap();
    assert!(json.get("comment").is_none());
}

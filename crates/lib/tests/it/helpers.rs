use astrosubs::{
    Header, Item,
    time::{Date, Time},
};

/// The header used throughout the examples: a record number and a star position.
pub fn position_header() -> Header {
    let mut head = Header::new();
    head.set("Record", Item::with_comment(23i32, "Record number"))
        .expect("Failed to set Record");
    head.set_auto("Position.RA", Item::with_comment(21.0, "Right ascension"))
        .expect("Failed to set Position.RA");
    head.set_auto("Position.Dec", Item::with_comment(-28.0, "Declination"))
        .expect("Failed to set Position.Dec");
    head
}

/// A header holding one item of every kind, spread over nested directories.
pub fn every_kind_header() -> Header {
    let mut head = position_header();
    let entries: Vec<(&str, Item)> = vec![
        ("Ints.I8", Item::new(-8i8)),
        ("Ints.U8", Item::new(8u8)),
        ("Ints.I16", Item::new(-1600i16)),
        ("Ints.U16", Item::new(1600u16)),
        ("Ints.I32", Item::new(-320_000i32)),
        ("Ints.U32", Item::new(3_200_000u32)),
        ("Ints.I64", Item::new(-64_000_000_000i64)),
        ("Ints.U64", Item::new(64_000_000_000u64)),
        ("Run.Exposure", Item::with_comment(500.0f32, "Exposure time (seconds)")),
        ("Run.Telescope", Item::with_comment("WHT", "Telescope name")),
        ("Run.Dark", Item::new(false)),
        (
            "Run.Night",
            Item::new("29 Sep 2002".parse::<Date>().expect("Failed to parse date")),
        ),
        (
            "Run.Start",
            Item::new(
                "29 Sep 2002, 21:05:00.5"
                    .parse::<Time>()
                    .expect("Failed to parse time"),
            ),
        ),
        ("Run.Spectrum.Flux", Item::new(vec![1.0f32, 2.5, 4.0])),
        ("Run.Spectrum.Wave", Item::new(vec![4000.0, 4000.5, 4001.0])),
    ];
    for (name, item) in entries {
        head.set_auto(name, item)
            .unwrap_or_else(|err| panic!("Failed to set {name}: {err}"));
    }
    head
}

/// Names in stored order.
pub fn names(head: &Header) -> Vec<&str> {
    head.names().collect()
}

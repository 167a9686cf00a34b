use astrosubs::{Header, Item};

use crate::helpers::*;

fn printed(head: &Header, name: &str, max_depth: Option<usize>) -> String {
    let mut out = Vec::new();
    head.print(&mut out, name, max_depth)
        .expect("Failed to print header");
    String::from_utf8(out).expect("Printed header is not UTF-8")
}

#[test]
fn test_position_grouped_under_heading() {
    let head = position_header();
    let text = printed(&head, "", None);
    assert_eq!(text, "Position\n   Dec = -28\n   RA = 21\nRecord = 23\n");
    assert_eq!(head.to_string(), text);
}

#[test]
fn test_print_sub_tree_and_depth() {
    let mut head = Header::new();
    head.set_auto("Obs.Site.Name", Item::new("La Palma")).unwrap();
    head.set_auto("Obs.Site.Height", Item::new(2332.0)).unwrap();
    head.set_auto("Obs.Night", Item::new(3u8)).unwrap();

    assert_eq!(
        printed(&head, "Obs", None),
        "\nObs\n   Night = 3\n   Site\n      Height = 2332\n      Name = La Palma\n"
    );
    assert_eq!(printed(&head, "Obs", Some(1)), "\nObs\n   Night = 3\n   Site\n");
    assert_eq!(printed(&head, "Obs", Some(0)), "\nObs\n");
    assert_eq!(printed(&head, "Obs.Site.Name", None), "Obs.Site.Name = La Palma\n");
}

#[test]
fn test_print_arrays_and_times() {
    let head = every_kind_header();
    let text = printed(&head, "Run", None);
    assert!(text.contains("\n      Flux = 1 2.5 4\n"), "{text}");
    assert!(text.contains("\n   Night = 29 Sep 2002\n"), "{text}");
    assert!(text.contains("\n   Start = 29 Sep 2002, 21:05:"), "{text}");
    assert!(text.contains("\n   Dark = false\n"), "{text}");
}

#[test]
fn test_print_missing_item() {
    let head = position_header();
    let err = head.print(&mut Vec::new(), "Position.Epoch", None).unwrap_err();
    assert!(err.is_not_found());
}

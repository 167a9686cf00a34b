use astrosubs::{ErrorKind, Header, Item};

use crate::helpers::*;

fn letters() -> Header {
    let mut head = Header::new();
    head.set("A", Item::directory("A")).unwrap();
    head.set("A.X", Item::new(1i32)).unwrap();
    head.set("A.Y", Item::directory("Y")).unwrap();
    head.set("A.Y.Z", Item::new(2i32)).unwrap();
    head.set("A-side", Item::new(3i32)).unwrap();
    head.set("AB", Item::new(4i32)).unwrap();
    head
}

#[test]
fn test_sub_trees_are_contiguous() {
    let head = letters();
    assert_eq!(names(&head), vec!["A", "A.X", "A.Y", "A.Y.Z", "A-side", "AB"]);

    let members: Vec<&str> = head.range_in_directory("A").map(|(n, _)| n).collect();
    assert_eq!(members, vec!["A", "A.X", "A.Y", "A.Y.Z"]);

    let members: Vec<&str> = head.range_in_directory("A.Y").map(|(n, _)| n).collect();
    assert_eq!(members, vec!["A.Y", "A.Y.Z"]);

    assert_eq!(head.range_in_directory("Q").next(), None);
}

#[test]
fn test_erase_matches_range() {
    let mut head = letters();
    let expected: Vec<String> = head
        .range_in_directory("A")
        .map(|(n, _)| n.to_string())
        .collect();

    assert_eq!(head.erase("A"), expected.len());
    for name in &expected {
        assert!(!head.contains(name), "{name} survived erase");
    }
    assert_eq!(names(&head), vec!["A-side", "AB"]);
}

#[test]
fn test_erase_single_item() {
    let mut head = letters();
    assert_eq!(head.erase("A.X"), 1);
    assert_eq!(head.erase("A.X"), 0);
    assert_eq!(head.len(), 5);
}

#[test]
fn test_remove_entry_is_precise() {
    let mut head = letters();
    assert_eq!(
        head.remove_entry("A.Y").unwrap_err().kind(),
        ErrorKind::DirectoryNotEmpty
    );
    assert_eq!(head.remove_entry("A.Y.Z").unwrap().get::<i32>().unwrap(), 2);
    assert!(head.remove_entry("A.Y").unwrap().is_dir());
    assert_eq!(names(&head), vec!["A", "A.X", "A-side", "AB"]);
}

#[test]
fn test_rename_moves_sub_tree() {
    let mut head = Header::new();
    head.set("A", Item::directory("")).unwrap();
    head.set("A.X", Item::new(1i32)).unwrap();
    head.set("A.Y", Item::new(2i32)).unwrap();

    head.rename("A", "B").unwrap();
    assert_eq!(names(&head), vec!["B", "B.X", "B.Y"]);
    assert!(head.find_starting_with("A").is_none());
    assert_eq!(head.get_as::<i32>("B.Y").unwrap(), 2);
}

#[test]
fn test_rename_conflicts() {
    let mut head = letters();
    let before = head.clone();

    assert_eq!(
        head.rename("A", "AB").unwrap_err().kind(),
        ErrorKind::AlreadyExists
    );
    assert!(head.rename("A", "AB").unwrap_err().is_conflict());
    assert_eq!(
        head.rename("A", "A.Z").unwrap_err().kind(),
        ErrorKind::SelfContainment
    );
    assert_eq!(
        head.rename("A.X", "Nowhere.X").unwrap_err().kind(),
        ErrorKind::MissingDirectory
    );
    assert_eq!(
        head.rename("Nothing", "Something").unwrap_err().kind(),
        ErrorKind::NotFound
    );
    assert_eq!(head, before);
}

#[test]
fn test_rename_check_order() {
    let mut head = letters();
    let before = head.clone();

    // A.X holds a value, so A.X.Inner has no directory before it is self-contained
    assert_eq!(
        head.rename("A.X", "A.X.Inner").unwrap_err().kind(),
        ErrorKind::MissingDirectory
    );
    // a taken target wins over self-containment
    assert_eq!(
        head.rename("A", "A.X").unwrap_err().kind(),
        ErrorKind::AlreadyExists
    );
    assert_eq!(
        head.rename("Nothing", "AB").unwrap_err().kind(),
        ErrorKind::AlreadyExists
    );
    assert_eq!(
        head.rename("Nothing", "A.Y.Q").unwrap_err().kind(),
        ErrorKind::NotFound
    );
    assert_eq!(head, before);
}

#[test]
fn test_rename_item_between_directories() {
    let mut head = letters();
    head.rename("A.Y.Z", "A.Z").unwrap();
    assert_eq!(head.get_as::<i32>("A.Z").unwrap(), 2);
    assert_eq!(
        head.range_in_directory("A.Y").map(|(n, _)| n).collect::<Vec<_>>(),
        vec!["A.Y"]
    );
}

#[test]
fn test_check_for_dir() {
    let head = letters();
    assert!(head.check_for_dir("Top"));
    assert!(head.check_for_dir("A.New"));
    assert!(head.check_for_dir("A.Y.New"));
    assert!(!head.check_for_dir("A.X.New"));
    assert!(!head.check_for_dir("Missing.New"));
}

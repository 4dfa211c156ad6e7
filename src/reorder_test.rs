use super::*;
use crate::model::{BilingualString, Category};

fn categories(ids: &[&str]) -> Vec<Category> {
    ids.iter()
        .enumerate()
        .map(|(index, id)| Category {
            id: (*id).to_string(),
            name: BilingualString::new(id, id),
            display_order: u32::try_from(index).expect("small index"),
            is_special: false,
        })
        .collect()
}

fn ids(sequence: &[Category]) -> Vec<&str> {
    sequence.iter().map(|c| c.id.as_str()).collect()
}

#[test]
fn moving_first_element_to_last_position() {
    let list = categories(&["A", "B", "C"]);
    let moved = moved_sequence(&list, "A", "C").expect("valid move");
    assert_eq!(ids(&moved), ["B", "C", "A"]);
}

#[test]
fn moving_last_element_to_first_position() {
    let list = categories(&["A", "B", "C"]);
    let moved = moved_sequence(&list, "C", "A").expect("valid move");
    assert_eq!(ids(&moved), ["C", "A", "B"]);
}

#[test]
fn moving_between_middle_positions() {
    let list = categories(&["A", "B", "C", "D"]);
    let moved = moved_sequence(&list, "B", "D").expect("valid move");
    assert_eq!(ids(&moved), ["A", "C", "D", "B"]);

    let moved = moved_sequence(&list, "D", "B").expect("valid move");
    assert_eq!(ids(&moved), ["A", "D", "B", "C"]);
}

#[test]
fn dropping_onto_itself_is_a_no_op() {
    let list = categories(&["A", "B", "C"]);
    assert!(moved_sequence(&list, "B", "B").is_none());
}

#[test]
fn unknown_ids_are_a_no_op() {
    let list = categories(&["A", "B", "C"]);
    assert!(moved_sequence(&list, "missing", "A").is_none());
    assert!(moved_sequence(&list, "A", "missing").is_none());
}

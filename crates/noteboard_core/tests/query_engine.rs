use chrono::NaiveDate;
use noteboard_core::{visible_notes, ContentElement, Note, SortKey};
use uuid::Uuid;

fn note(id: u128, name: &str, date: &str) -> Note {
    Note::new(
        Uuid::from_u128(id),
        name.to_string(),
        vec![ContentElement::text("")],
        "work".to_string(),
        NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
    )
}

fn names(notes: &[Note]) -> Vec<&str> {
    notes.iter().map(|n| n.name.as_str()).collect()
}

#[test]
fn search_is_case_insensitive_substring_on_name() {
    let notes = vec![
        note(1, "Workout", "2024-01-01"),
        note(2, "Work Log", "2024-01-01"),
        note(3, "Ideas", "2024-01-01"),
    ];
    let visible = visible_notes(&notes, "wor", SortKey::Unsorted);
    assert_eq!(names(&visible), vec!["Workout", "Work Log"]);
}

#[test]
fn empty_search_keeps_all_and_name_sort_is_idempotent() {
    let notes = vec![
        note(1, "beta", "2024-01-01"),
        note(2, "Alpha", "2024-01-01"),
        note(3, "gamma", "2024-01-01"),
    ];
    let once = visible_notes(&notes, "", SortKey::Name);
    assert_eq!(names(&once), vec!["Alpha", "beta", "gamma"]);

    let twice = visible_notes(&once, "", SortKey::Name);
    assert_eq!(twice, once);
}

#[test]
fn date_sort_is_most_recent_first() {
    let notes = vec![
        note(1, "a", "2024-01-01"),
        note(2, "b", "2024-03-01"),
        note(3, "c", "2024-02-01"),
    ];
    let dates: Vec<String> = visible_notes(&notes, "", SortKey::Date)
        .iter()
        .map(|n| n.created_date.to_string())
        .collect();
    assert_eq!(dates, vec!["2024-03-01", "2024-02-01", "2024-01-01"]);
}

#[test]
fn date_sort_keeps_filtered_order_for_ties() {
    let notes = vec![
        note(1, "first", "2024-01-01"),
        note(2, "second", "2024-01-01"),
        note(3, "newer", "2024-02-01"),
    ];
    let visible = visible_notes(&notes, "", SortKey::Date);
    assert_eq!(names(&visible), vec!["newer", "first", "second"]);
}

#[test]
fn visible_notes_does_not_touch_its_input() {
    let notes = vec![
        note(1, "zulu", "2024-01-01"),
        note(2, "alpha", "2024-03-01"),
    ];
    let before = notes.clone();
    let _ = visible_notes(&notes, "a", SortKey::Name);
    let _ = visible_notes(&notes, "", SortKey::Date);
    assert_eq!(notes, before);
}

#[test]
fn unknown_sort_key_string_passes_through() {
    let notes = vec![note(1, "b", "2024-01-01"), note(2, "a", "2024-01-02")];
    let visible = visible_notes(&notes, "", SortKey::from("colour"));
    assert_eq!(names(&visible), vec!["b", "a"]);
}

#[test]
fn name_sort_places_accented_names_among_their_base_letters() {
    let notes = vec![
        note(1, "Zebra", "2024-01-01"),
        note(2, "Éclair", "2024-01-01"),
        note(3, "apple", "2024-01-01"),
        note(4, "écrire", "2024-01-01"),
    ];
    let visible = visible_notes(&notes, "", SortKey::Name);
    assert_eq!(names(&visible), vec!["apple", "Éclair", "écrire", "Zebra"]);
}

use chrono::NaiveDate;
use noteboard_core::{
    encode_data_uri, BoardConfig, BoardError, ContentElement, ElementError, ElementKind, FileMeta,
    FixedClock, InMemoryNoteRepository, NoteBoard, SequentialIdGenerator, SortKey,
};

fn board() -> NoteBoard {
    NoteBoard::with_parts(
        InMemoryNoteRepository::new(),
        Box::new(FixedClock(NaiveDate::from_ymd_opt(2024, 7, 4).unwrap())),
        Box::new(SequentialIdGenerator::new()),
        BoardConfig::default(),
    )
    .unwrap()
}

#[test]
fn ingest_pdf_uses_extension_and_mib_size() {
    let mut board = board();
    let note = board
        .ingest_file(&FileMeta::new("report.PDF", 2 * 1024 * 1024))
        .unwrap();

    assert_eq!(note.file_type, "pdf");
    assert_eq!(note.size_label, "2.00MB");
    assert_eq!(note.tag, "work");
    assert_eq!(note.name, "report.PDF");
    assert_eq!(note.elements, vec![ContentElement::text("Uploaded file: report.PDF")]);
    assert_eq!(note.created_date, NaiveDate::from_ymd_opt(2024, 7, 4).unwrap());
}

#[test]
fn name_without_dot_becomes_file_type() {
    let mut board = board();
    let note = board.ingest_file(&FileMeta::new("README", 512)).unwrap();
    assert_eq!(note.file_type, "readme");
    assert_eq!(note.size_label, "0.00MB");
}

#[test]
fn batch_ingest_puts_last_file_first() {
    let mut board = board();
    let notes = board
        .ingest_files(vec![
            FileMeta::new("a.zip", 1024 * 1024),
            FileMeta::new("b.txt", 10),
        ])
        .unwrap();
    assert_eq!(notes.len(), 2);

    let names: Vec<String> = board.get_all().into_iter().map(|n| n.name).collect();
    assert_eq!(names, vec!["b.txt", "a.zip"]);
}

#[test]
fn uploaded_description_is_searchable() {
    let mut board = board();
    board.ingest_file(&FileMeta::new("scan.png", 2048)).unwrap();
    board.create_note("Shopping", Vec::new(), "personal").unwrap();

    let hits = board.visible_notes("uploaded", SortKey::Name);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "scan.png");
}

#[test]
fn size_sort_orders_ingested_files_by_magnitude() {
    let mut board = board();
    board.ingest_file(&FileMeta::new("big.zip", 5 * 1024 * 1024)).unwrap();
    board.ingest_file(&FileMeta::new("small.zip", 1024 * 1024)).unwrap();
    board.create_note("authored", Vec::new(), "work").unwrap();

    let names: Vec<String> = board
        .visible_notes("", SortKey::Size)
        .into_iter()
        .map(|n| n.name)
        .collect();
    assert_eq!(names, vec!["authored", "small.zip", "big.zip"]);
}

#[test]
fn image_read_completes_by_note_id() {
    let mut board = board();
    let mut draft = board.new_draft();
    draft.set_name("Photo");
    let slot = draft.add_element(ElementKind::Image);
    let note = board.save_draft(draft).unwrap();

    // Unrelated note created while the read is in flight.
    board.create_note("Other", Vec::new(), "ideas").unwrap();

    let blob = encode_data_uri("image/png", &[0x89, 0x50, 0x4e, 0x47]);
    let updated = board.attach_image(note.id, slot, blob.clone()).unwrap();
    assert_eq!(updated.elements[slot], ContentElement::Image(blob));
    assert_eq!(board.get_all().len(), 2);
}

#[test]
fn image_read_for_deleted_note_or_wrong_block_fails() {
    let mut board = board();
    let note = board.create_note("Text only", Vec::new(), "work").unwrap();

    let err = board.attach_image(note.id, 0, "data:,").unwrap_err();
    assert!(matches!(
        err,
        BoardError::Element(ElementError::TypeMismatch {
            expected: ElementKind::Image,
            found: ElementKind::Text,
        })
    ));

    board.delete_note(note.id).unwrap();
    let err = board.attach_image(note.id, 0, "data:,").unwrap_err();
    assert_eq!(err, BoardError::NotFound(note.id));
}

//! End-to-end editing scenarios against a ContentStore

use pagesmith_editor::{
    load_page, save_page, ContentStore, MemoryStorage, NewSection, SectionPatch, StoreError,
};
use pagesmith_sections::{Content, SectionType};
use serde_json::json;

fn content(value: serde_json::Value) -> Content {
    value.as_object().cloned().expect("content must be an object")
}

fn order_of(store: &ContentStore) -> Vec<(String, usize)> {
    store
        .sections()
        .iter()
        .map(|s| (s.id.clone(), s.order))
        .collect()
}

#[test]
fn test_reorder_then_undo() {
    let mut store = ContentStore::new("Landing");

    let a = store.add_section(NewSection::new(SectionType::Hero, "hero-centered")).unwrap();
    let b = store.add_section(NewSection::new(SectionType::Footer, "footer-simple")).unwrap();
    assert_eq!(order_of(&store), vec![(a.clone(), 0), (b.clone(), 1)]);

    store.reorder_sections(&[&b, &a]).unwrap();
    assert_eq!(order_of(&store), vec![(b.clone(), 0), (a.clone(), 1)]);

    assert!(store.undo());
    assert_eq!(order_of(&store), vec![(a, 0), (b, 1)]);
}

#[test]
fn test_undo_redo_from_empty() {
    let mut store = ContentStore::new("Landing");
    assert!(!store.can_undo());

    let id = store.add_section(NewSection::new(SectionType::Hero, "hero-centered")).unwrap();
    assert!(store.can_undo());
    assert!(!store.can_redo());

    assert!(store.undo());
    assert!(store.sections().is_empty());
    assert!(store.can_redo());

    assert!(store.redo());
    assert_eq!(store.sections().len(), 1);
    assert_eq!(store.sections()[0].id, id);
}

#[test]
fn test_delete_selected_then_update_is_not_found() {
    let mut store = ContentStore::new("Landing");
    let x = store.add_section(NewSection::new(SectionType::Cta, "cta-simple")).unwrap();
    store.select_section(Some(&x)).unwrap();

    store.delete_section(&x).unwrap();
    assert!(store.selected_section_id().is_none());

    let levels = store.history().len();
    let err = store
        .update_section(&x, SectionPatch::content(content(json!({ "title": "Too late" }))))
        .unwrap_err();

    assert_eq!(err, StoreError::SectionNotFound(x));
    assert!(store.sections().is_empty());
    // A rejected edit is not an undo step
    assert_eq!(store.history().len(), levels);
}

#[test]
fn test_undo_restores_selection() {
    let mut store = ContentStore::new("Landing");
    let x = store.add_section(NewSection::new(SectionType::Hero, "hero-centered")).unwrap();
    store.select_section(Some(&x)).unwrap();

    let before = store.state().clone();

    store.delete_section(&x).unwrap();
    assert!(store.selected_section_id().is_none());

    // Undo lands on the state right before the delete, selection included
    assert!(store.undo());
    assert_eq!(store.state(), &before);
    assert_eq!(store.selected_section_id(), Some(x.as_str()));

    assert!(store.redo());
    assert!(store.sections().is_empty());
    assert!(store.selected_section_id().is_none());
}

#[test]
fn test_undo_update_keeps_current_selection() {
    let mut store = ContentStore::new("Landing");
    let a = store.add_section(NewSection::new(SectionType::Hero, "hero-centered")).unwrap();
    let b = store.add_section(NewSection::new(SectionType::Footer, "footer-simple")).unwrap();
    store.select_section(Some(&a)).unwrap();
    store.select_section(Some(&b)).unwrap();
    let before = store.state().clone();

    store
        .update_section(&a, SectionPatch::content(content(json!({ "title": "Edited" }))))
        .unwrap();

    assert!(store.undo());
    assert_eq!(store.state(), &before);
    assert_eq!(store.selected_section_id(), Some(b.as_str()));
}

#[test]
fn test_selection_inside_open_batch_is_undone_with_it() {
    let mut store = ContentStore::new("Landing");
    let a = store.add_section(NewSection::new(SectionType::Hero, "hero-centered")).unwrap();
    let before = store.state().clone();

    store.begin_batch(Some("Add and focus"));
    let b = store.add_section(NewSection::new(SectionType::Cta, "cta-simple")).unwrap();
    store.select_section(Some(&b)).unwrap();
    store.end_batch();

    assert_eq!(store.selected_section_id(), Some(b.as_str()));
    assert!(store.undo());
    assert_eq!(store.state(), &before);
    assert!(store.section(&a).is_some());
}

#[test]
fn test_duplicate_does_not_alias_content() {
    let mut store = ContentStore::new("Landing");
    let original = store
        .add_section(
            NewSection::new(SectionType::Features, "features-grid")
                .with_content(content(json!({ "features": [{ "title": "Fast" }] }))),
        )
        .unwrap();

    let copy = store.duplicate_section(&original).unwrap();
    assert_ne!(copy, original);
    assert_eq!(store.section(&copy).unwrap().order, 1);

    store
        .update_section(
            &copy,
            SectionPatch::content(content(json!({ "features": [{ "title": "Slow" }] }))),
        )
        .unwrap();

    assert_eq!(
        store.section(&original).unwrap().content["features"][0]["title"],
        "Fast"
    );
    assert_eq!(store.section(&copy).unwrap().content["features"][0]["title"], "Slow");
}

#[test]
fn test_move_section_clamps_index() {
    let mut store = ContentStore::new("Landing");
    let a = store.add_section(NewSection::new(SectionType::Header, "header-simple")).unwrap();
    let b = store.add_section(NewSection::new(SectionType::Hero, "hero-centered")).unwrap();
    let c = store.add_section(NewSection::new(SectionType::Footer, "footer-simple")).unwrap();

    store.move_section(&a, 99).unwrap();
    assert_eq!(order_of(&store), vec![(b.clone(), 0), (c.clone(), 1), (a.clone(), 2)]);

    store.move_section(&c, 0).unwrap();
    assert_eq!(order_of(&store), vec![(c, 0), (b, 1), (a, 2)]);

    assert!(matches!(
        store.move_section("missing", 0),
        Err(StoreError::SectionNotFound(_))
    ));
}

#[test]
fn test_invalid_reorder_changes_nothing() {
    let mut store = ContentStore::new("Landing");
    let a = store.add_section(NewSection::new(SectionType::Hero, "hero-centered")).unwrap();
    let b = store.add_section(NewSection::new(SectionType::Footer, "footer-simple")).unwrap();
    let before = order_of(&store);
    let levels = store.history().len();

    assert!(matches!(
        store.reorder_sections(&[&a, &a]),
        Err(StoreError::InvalidPermutation(_))
    ));
    assert!(matches!(
        store.reorder_sections(&[&b]),
        Err(StoreError::InvalidPermutation(_))
    ));

    assert_eq!(order_of(&store), before);
    assert_eq!(store.history().len(), levels);
}

#[test]
fn test_clear_is_one_undo_step() {
    let mut store = ContentStore::new("Landing");
    store.add_section(NewSection::new(SectionType::Hero, "hero-centered")).unwrap();
    store.add_section(NewSection::new(SectionType::Footer, "footer-simple")).unwrap();

    store.clear_sections().unwrap();
    assert!(store.sections().is_empty());
    assert_eq!(store.history().undo_description(), Some("Clear page"));

    assert!(store.undo());
    assert_eq!(store.sections().len(), 2);
}

#[test]
fn test_batch_records_single_step() {
    let mut store = ContentStore::new("Landing");

    store.begin_batch(Some("Apply template"));
    store.add_section(NewSection::new(SectionType::Header, "header-simple")).unwrap();
    store.add_section(NewSection::new(SectionType::Hero, "hero-split")).unwrap();
    store.add_section(NewSection::new(SectionType::Footer, "footer-simple")).unwrap();
    store.end_batch();

    assert_eq!(store.history().len(), 2);
    assert_eq!(store.history().undo_description(), Some("Apply template"));

    assert!(store.undo());
    assert!(store.sections().is_empty());
    assert!(store.redo());
    assert_eq!(store.sections().len(), 3);
}

#[test]
fn test_empty_batch_records_nothing() {
    let mut store = ContentStore::new("Landing");
    store.begin_batch(None);
    assert!(store.in_batch());
    store.end_batch();

    assert!(!store.in_batch());
    assert_eq!(store.history().len(), 1);
}

#[test]
fn test_save_and_restore_round_trip() {
    let mut store = ContentStore::new("Landing");
    store
        .add_section(
            NewSection::new(SectionType::Hero, "hero-centered")
                .with_content(content(json!({ "title": "Hi" }))),
        )
        .unwrap();
    store.add_section(NewSection::new(SectionType::Footer, "footer-simple")).unwrap();

    let mut storage = MemoryStorage::new();
    save_page(&mut storage, store.sections(), store.updated_at()).unwrap();

    let saved = load_page(&mut storage).expect("saved page should load");
    let mut restored = ContentStore::new("Landing");
    restored.restore_sections(saved.sections).unwrap();

    assert_eq!(restored.sections(), store.sections());
    assert!(!restored.can_undo());
}

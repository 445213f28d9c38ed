use pocket_core::repo::note_repo::search;
use pocket_core::{
    keys, seed_notes, MemoryStore, Note, NoteRepository, NoteValidationError, PersistentStore,
    RepoError,
};
use std::collections::HashSet;

const NOW: i64 = 1_760_000_000_000;

fn persisted(store: &MemoryStore) -> Vec<Note> {
    let raw = store.get(keys::NOTES).unwrap().expect("notes key written");
    serde_json::from_str(&raw).unwrap()
}

#[test]
fn first_load_returns_and_persists_exactly_the_seed() {
    let mut store = MemoryStore::new();
    let loaded = NoteRepository::new(&mut store).load(NOW);

    assert_eq!(loaded, seed_notes(NOW));
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[1].title, "Идеи для выходных");
    assert_eq!(persisted(&store), loaded);
}

#[test]
fn malformed_collection_is_treated_as_first_run() {
    let mut store = MemoryStore::new();
    store.set(keys::NOTES, "[{\"id\":").unwrap();

    let loaded = NoteRepository::new(&mut store).load(NOW);
    assert_eq!(loaded, seed_notes(NOW));
    assert_eq!(persisted(&store), loaded);
}

#[test]
fn persisted_collection_is_loaded_verbatim() {
    let mut store = MemoryStore::new();
    store.set(keys::NOTES, "[]").unwrap();

    let loaded = NoteRepository::new(&mut store).load(NOW);
    assert!(loaded.is_empty());
}

#[test]
fn create_assigns_fresh_ids_and_prepends() {
    let mut store = MemoryStore::new();
    let mut repo = NoteRepository::new(&mut store);
    let mut notes = repo.load(NOW);

    let mut ids: HashSet<String> = notes.iter().map(|note| note.id.clone()).collect();
    for idx in 0..20 {
        let (next, created) = repo
            .create(&notes, &format!("title {idx}"), "body", "", NOW + idx)
            .unwrap();
        assert!(ids.insert(created.id.clone()), "duplicate id {}", created.id);
        assert_eq!(next[0], created);
        assert_eq!(next.len(), notes.len() + 1);
        assert_eq!(&next[1..], notes.as_slice());
        notes = next;
    }

    assert_eq!(persisted(&store), notes);
}

#[test]
fn create_keeps_duplicate_tags_and_equal_timestamps() {
    let mut store = MemoryStore::new();
    let (_, created) = NoteRepository::new(&mut store)
        .create(&[], "t", "c", "work, Work , work,,", NOW)
        .unwrap();

    assert_eq!(created.tags, vec!["work", "Work", "work"]);
    assert_eq!(created.created_at, NOW);
    assert_eq!(created.updated_at, created.created_at);
}

#[test]
fn create_stores_title_and_content_as_typed() {
    let mut store = MemoryStore::new();
    let (_, created) = NoteRepository::new(&mut store)
        .create(&[], "  Список покупок ", "молоко\nхлеб\n", "", NOW)
        .unwrap();

    assert_eq!(created.title, "  Список покупок ");
    assert_eq!(created.content, "молоко\nхлеб\n");
    assert_eq!(persisted(&store), vec![created]);
}

#[test]
fn create_with_empty_title_or_content_leaves_collection_unchanged() {
    let mut store = MemoryStore::new();
    let mut repo = NoteRepository::new(&mut store);
    let notes = repo.load(NOW);

    let err = repo.create(&notes, "   ", "body", "", NOW).unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(NoteValidationError::EmptyTitle)
    ));
    let err = repo.create(&notes, "title", "", "", NOW).unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(NoteValidationError::EmptyContent)
    ));

    assert_eq!(persisted(&store), notes);
}

#[test]
fn delete_removes_exactly_one_and_keeps_relative_order() {
    let mut store = MemoryStore::new();
    let mut repo = NoteRepository::new(&mut store);
    let mut notes = repo.load(NOW);
    for idx in 0..3 {
        notes = repo
            .create(&notes, &format!("n{idx}"), "body", "", NOW)
            .unwrap()
            .0;
    }
    let target = notes[2].id.clone();

    let after = repo.delete(&notes, &target).unwrap();
    let expected: Vec<Note> = notes
        .iter()
        .filter(|note| note.id != target)
        .cloned()
        .collect();
    assert_eq!(after, expected);
    assert_eq!(after.len(), notes.len() - 1);
    assert_eq!(persisted(&store), after);
}

#[test]
fn delete_unknown_id_is_noop() {
    let mut store = MemoryStore::new();
    let mut repo = NoteRepository::new(&mut store);
    let notes = repo.load(NOW);

    let after = repo.delete(&notes, "does-not-exist").unwrap();
    assert_eq!(after, notes);
    assert_eq!(persisted(&store), notes);
}

#[test]
fn search_matches_title_content_or_tag() {
    let notes = seed_notes(NOW);

    let by_tag = search("планы", &notes);
    assert_eq!(by_tag.len(), 1);
    assert_eq!(by_tag[0].title, "Идеи для выходных");

    let by_content = search("ПАРКЕ", &notes);
    assert_eq!(by_content.len(), 1);
    assert_eq!(by_content[0].id, "1");

    assert!(search("zzz", &notes).is_empty());
    assert_eq!(search("", &notes), notes);
}

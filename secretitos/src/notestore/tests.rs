use crate::errors::NoteStoreError;
use crate::note::{NoteDraft, NoteId};
use crate::NoteStore;

pub(super) fn draft(title: &str, content: &str, secret: i64) -> NoteDraft {
    NoteDraft {
        title: Some(title.to_owned()),
        content: Some(content.to_owned()),
        secret,
    }
}

pub(super) async fn ids_unique_and_increasing(store: impl NoteStore) {
    let first = store.create(draft("Foo", "a", 1)).await;
    let second = store.create(draft("Bar", "b", 2)).await;
    let third = store.create(draft("Baz", "c", 3)).await;
    assert!(first.get_id() < second.get_id());
    assert!(second.get_id() < third.get_id());
}

pub(super) async fn create_on_empty_store(store: impl NoteStore) {
    let note = store.create(draft("A", "B", 9)).await;
    assert_eq!(note.get_id(), NoteId::new(1));
    assert_eq!(note.get_title(), Some("A"));
    assert_eq!(note.get_content(), Some("B"));
    assert_eq!(note.get_secret(), 9);
    let second = store.create(draft("C", "D", 7)).await;
    assert_eq!(second.get_id(), NoteId::new(2));
}

pub(super) async fn create_then_find(store: impl NoteStore) {
    let created = store.create(draft("Foo", "a", 1)).await;
    assert_eq!(store.find_by_id(created.get_id()).await, Some(created));
}

pub(super) async fn update_replaces_fields_in_place(store: impl NoteStore) {
    store.create(draft("Foo", "a", 1)).await;
    let target = store.create(draft("Bar", "b", 2)).await;
    store.create(draft("Baz", "c", 3)).await;
    let updated = store
        .update(target.get_id(), draft("Qux", "d", 4))
        .await
        .unwrap();
    assert_eq!(updated.get_id(), target.get_id());
    assert_eq!(updated.get_title(), Some("Qux"));
    assert_eq!(updated.get_content(), Some("d"));
    assert_eq!(updated.get_secret(), 4);
    let notes = store.list().await;
    assert_eq!(notes.len(), 3);
    assert_eq!(notes[1], updated);
}

pub(super) async fn update_missing_note(store: impl NoteStore) {
    let result = store.update(NoteId::new(42), draft("Foo", "a", 1)).await;
    assert!(matches!(
        result,
        Err(NoteStoreError::NoteNotExist(id)) if id == NoteId::new(42)
    ));
}

pub(super) async fn delete_removes_exactly_one(store: impl NoteStore) {
    store.create(draft("Foo", "a", 1)).await;
    let target = store.create(draft("Bar", "b", 2)).await;
    store.create(draft("Baz", "c", 3)).await;
    store.delete(target.get_id()).await.unwrap();
    let notes = store.list().await;
    assert_eq!(notes.len(), 2);
    assert_eq!(store.find_by_id(target.get_id()).await, None);
    assert_eq!(notes[0].get_title(), Some("Foo"));
    assert_eq!(notes[1].get_title(), Some("Baz"));
}

pub(super) async fn delete_missing_note(store: impl NoteStore) {
    let result = store.delete(NoteId::new(42)).await;
    assert!(matches!(
        result,
        Err(NoteStoreError::NoteNotExist(id)) if id == NoteId::new(42)
    ));
}

pub(super) async fn update_then_delete(store: impl NoteStore) {
    store.create(draft("Foo", "a", 1)).await;
    let target = store.create(draft("Bar", "b", 2)).await;
    assert_eq!(target.get_id(), NoteId::new(2));
    store
        .update(target.get_id(), draft("C", "D", 1))
        .await
        .unwrap();
    store.delete(target.get_id()).await.unwrap();
    let notes = store.list().await;
    assert!(notes.iter().all(|note| note.get_id() != target.get_id()));
    assert_eq!(store.find_by_id(target.get_id()).await, None);
}

pub(super) async fn ids_stay_unique_after_delete(store: impl NoteStore) {
    store.create(draft("Foo", "a", 1)).await;
    let middle = store.create(draft("Bar", "b", 2)).await;
    store.create(draft("Baz", "c", 3)).await;
    store.delete(middle.get_id()).await.unwrap();
    let fresh = store.create(draft("Qux", "d", 4)).await;
    assert_eq!(fresh.get_id(), NoteId::new(4));
    let notes = store.list().await;
    let mut ids: Vec<NoteId> = notes.iter().map(|note| note.get_id()).collect();
    ids.dedup();
    assert_eq!(ids.len(), notes.len());
}

pub(super) async fn list_is_stable_between_mutations(store: impl NoteStore) {
    store.create(draft("Foo", "a", 1)).await;
    store.create(draft("Bar", "b", 2)).await;
    let first = store.list().await;
    let second = store.list().await;
    assert_eq!(first, second);
}

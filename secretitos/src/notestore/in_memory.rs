//! In-memory storage of notes
use crate::errors::NoteStoreError;
use crate::note::{Note, NoteDraft, NoteId};
use crate::notestore::{NoteStore, Snapshot};
use futures::future::BoxFuture;
use tokio::sync::{watch, RwLock};
use tracing::debug;

#[derive(Debug, Default)]
struct InMemoryStoreInner {
    notes: Vec<Note>,
}

impl InMemoryStoreInner {
    /// Next id to assign: the largest existing id plus one.
    ///
    /// Not "the last element's id plus one" — after a deletion the tail of
    /// the sequence is not necessarily the largest id, and reusing a live id
    /// would break lookups.
    fn next_id(&self) -> NoteId {
        self.notes
            .iter()
            .map(|note| note.get_id())
            .max()
            .map_or(NoteId::new(1), NoteId::next)
    }

    fn snapshot(&self) -> Snapshot {
        self.notes.clone()
    }

    fn create(&mut self, draft: NoteDraft) -> Note {
        let note = Note::from_draft(self.next_id(), draft);
        self.notes.push(note.clone());
        note
    }

    fn update(&mut self, id: NoteId, draft: NoteDraft) -> Result<Note, NoteStoreError> {
        let slot = self
            .notes
            .iter_mut()
            .find(|note| note.get_id() == id)
            .ok_or(NoteStoreError::NoteNotExist(id))?;
        let note = Note::from_draft(id, draft);
        *slot = note.clone();
        Ok(note)
    }

    fn delete(&mut self, id: NoteId) -> Result<(), NoteStoreError> {
        let position = self
            .notes
            .iter()
            .position(|note| note.get_id() == id)
            .ok_or(NoteStoreError::NoteNotExist(id))?;
        self.notes.remove(position);
        Ok(())
    }

    fn find_by_id(&self, id: NoteId) -> Option<Note> {
        self.notes.iter().find(|note| note.get_id() == id).cloned()
    }
}

/// In-memory storage.
///
/// The one concrete backend: notes live for the lifetime of the store and
/// are gone with it. All mutations go through a single write lock, so a
/// snapshot can never observe a partially-applied create/update/delete.
pub struct InMemoryStore {
    inner: RwLock<InMemoryStoreInner>,
    snapshots: watch::Sender<Snapshot>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        let (snapshots, _) = watch::channel(Snapshot::new());
        InMemoryStore {
            inner: RwLock::new(InMemoryStoreInner::default()),
            snapshots,
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteStore for InMemoryStore {
    fn list(&self) -> BoxFuture<Snapshot> {
        Box::pin(async move {
            let inner = self.inner.read().await;
            inner.snapshot()
        })
    }

    fn create(&self, draft: NoteDraft) -> BoxFuture<Note> {
        Box::pin(async move {
            let mut inner = self.inner.write().await;
            let note = inner.create(draft);
            self.snapshots.send_replace(inner.snapshot());
            debug!(id = %note.get_id(), "created note");
            note
        })
    }

    fn update(
        &self,
        id: NoteId,
        draft: NoteDraft,
    ) -> BoxFuture<Result<Note, NoteStoreError>> {
        Box::pin(async move {
            let mut inner = self.inner.write().await;
            let note = inner.update(id, draft)?;
            self.snapshots.send_replace(inner.snapshot());
            debug!(%id, "updated note");
            Ok(note)
        })
    }

    fn delete(&self, id: NoteId) -> BoxFuture<Result<(), NoteStoreError>> {
        Box::pin(async move {
            let mut inner = self.inner.write().await;
            inner.delete(id)?;
            self.snapshots.send_replace(inner.snapshot());
            debug!(%id, "deleted note");
            Ok(())
        })
    }

    fn find_by_id(&self, id: NoteId) -> BoxFuture<Option<Note>> {
        Box::pin(async move {
            let inner = self.inner.read().await;
            inner.find_by_id(id)
        })
    }

    fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.snapshots.subscribe()
    }
}

//! Storage backends of notes.
use crate::errors::NoteStoreError;
use crate::note::{Note, NoteDraft, NoteId};
use futures::future::BoxFuture;
use tokio::sync::watch;

mod in_memory;
#[cfg(test)]
mod tests;
pub mod util;

pub use in_memory::InMemoryStore;

/// An owned point-in-time copy of the note collection.
///
/// Also the value type of the [`watch`] channel handed out by
/// [`NoteStore::subscribe`].
pub type Snapshot = Vec<Note>;

/// The store handle a frontend holds.
pub type BoxedNoteStore = Box<dyn NoteStore + Sync + Send>;

/// An abstraction for storage backends.
///
/// Consumers only ever receive owned snapshots, never a live handle into the
/// collection, so nothing a consumer does can corrupt store state or observe
/// a half-applied mutation.
pub trait NoteStore {
    /// Returns a snapshot of the current collection, in insertion order.
    fn list(&self) -> BoxFuture<Snapshot>;

    /// Creates a new note from `draft`.
    ///
    /// The storage backend assigns a [`NoteId`]: one more than the largest id
    /// currently in the collection, or 1 when the collection is empty. The
    /// note is appended at the end of the sequence.
    ///
    /// No field validation happens here. Rejecting blank titles or malformed
    /// passcodes is the caller's job, before the draft is built
    /// (see [`crate::access::new_passcode`]).
    fn create(&self, draft: NoteDraft) -> BoxFuture<Note>;

    /// Replaces the note with the given id.
    ///
    /// The replacement keeps the id and the position in the sequence; every
    /// other field comes from `draft`. Returns the replacement note.
    fn update(&self, id: NoteId, draft: NoteDraft)
        -> BoxFuture<Result<Note, NoteStoreError>>;

    /// Removes the note with the given id from the sequence.
    fn delete(&self, id: NoteId) -> BoxFuture<Result<(), NoteStoreError>>;

    /// Looks up a note by id.
    ///
    /// A pure query: no selection state, no side effect of any kind.
    fn find_by_id(&self, id: NoteId) -> BoxFuture<Option<Note>>;

    /// Subscribes to snapshot updates.
    ///
    /// The receiver always holds the snapshot produced by the most recent
    /// mutation. Intermediate snapshots may be conflated, but the value seen
    /// is always one produced after a whole mutation was applied and before
    /// the next one.
    fn subscribe(&self) -> watch::Receiver<Snapshot>;
}

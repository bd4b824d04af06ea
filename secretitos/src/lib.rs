//! Secretitos: an in-memory store of passcode-protected notes.
pub mod access;
pub mod errors;
pub mod note;
pub mod notestore;

pub use access::{new_passcode, verify, AccessDecision, AccessFlow, AccessIntent, AccessState};
pub use note::{Note, NoteDraft, NoteId};
pub use notestore::{BoxedNoteStore, InMemoryStore, NoteStore, Snapshot};

//! Core types of Secretitos.
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// ID of notes.
///
/// In a given note store ([`crate::notestore`]),
/// a [`NoteId`] uniquely identifies one note.
/// Ids are assigned by the store, never by a caller;
/// [`Note::from_draft`] is crate-private for exactly that reason.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Clone, Copy, Hash)]
#[serde(into = "i64", from = "i64")]
pub struct NoteId {
    id: i64,
}

impl From<NoteId> for i64 {
    fn from(id: NoteId) -> i64 {
        id.id
    }
}

impl From<i64> for NoteId {
    fn from(id: i64) -> NoteId {
        NoteId::new(id)
    }
}

impl NoteId {
    pub fn new(id: i64) -> Self {
        NoteId { id }
    }

    /// The id following this one.
    pub(crate) fn next(self) -> Self {
        NoteId { id: self.id + 1 }
    }
}

impl Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// One secret: a passcode-protected note.
///
/// Notes are immutable value snapshots. An update produces a new `Note` with
/// the same id replacing the old one in the store's collection; a `Note`
/// already handed out never changes underneath its holder.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Note {
    id: NoteId,
    title: Option<String>,
    content: Option<String>,
    secret: i64,
}

impl Note {
    pub(crate) fn from_draft(id: NoteId, draft: NoteDraft) -> Self {
        Note {
            id,
            title: draft.title,
            content: draft.content,
            secret: draft.secret,
        }
    }

    pub fn get_id(&self) -> NoteId {
        self.id
    }

    pub fn get_title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// The protected payload.
    ///
    /// Nothing here enforces the passcode. When this is shown to a user is
    /// governed by [`crate::access`] and the calling frontend.
    pub fn get_content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// The numeric credential required to reveal content or delete the note.
    pub fn get_secret(&self) -> i64 {
        self.secret
    }
}

/// Caller-supplied fields for a create or update, before an id is assigned.
#[derive(Debug, Default, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct NoteDraft {
    pub title: Option<String>,
    pub content: Option<String>,
    pub secret: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_round_trips_through_integer() {
        let id = NoteId::new(42);
        assert_eq!(i64::from(id), 42);
        assert_eq!(NoteId::from(42), id);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn id_serializes_as_bare_integer() {
        let id = NoteId::new(7);
        assert_eq!(serde_json::to_string(&id).unwrap(), "7");
        assert_eq!(serde_json::from_str::<NoteId>("7").unwrap(), id);
    }

    #[test]
    fn from_draft_keeps_all_fields() {
        let note = Note::from_draft(
            NoteId::new(3),
            NoteDraft {
                title: Some("A".to_owned()),
                content: Some("B".to_owned()),
                secret: 9,
            },
        );
        assert_eq!(note.get_id(), NoteId::new(3));
        assert_eq!(note.get_title(), Some("A"));
        assert_eq!(note.get_content(), Some("B"));
        assert_eq!(note.get_secret(), 9);
    }

    #[test]
    fn from_draft_allows_empty_fields() {
        let note = Note::from_draft(NoteId::new(1), NoteDraft::default());
        assert_eq!(note.get_title(), None);
        assert_eq!(note.get_content(), None);
    }
}

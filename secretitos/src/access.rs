//! Passcode checks gating access to protected notes.
//!
//! Two jobs live here: verifying an entered credential against a note's
//! stored secret, and walking a caller through the prompt flow for the two
//! protected operations (revealing content, deleting a note). The store knows
//! nothing about credentials; a frontend holds one [`AccessFlow`] per open
//! prompt and keeps the store as the sole writer of the collection.
use crate::note::{Note, NoteId};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum PasscodeError {
    #[error("passcode cannot be blank")]
    Blank,
    #[error("passcode and confirmation don't match")]
    ConfirmationMismatch,
    #[error("passcode must be numeric")]
    NotNumeric,
}

/// Checks an entered credential against a note's stored secret.
///
/// Returns `true` iff `entered` parses as a base-10 integer equal to
/// `expected`. Empty input, stray non-digit characters and overflow all come
/// back as a plain `false`: a caller cannot tell malformed input apart from a
/// wrong passcode.
pub fn verify(entered: &str, expected: i64) -> bool {
    match entered.parse::<i64>() {
        Ok(value) => value == expected,
        Err(_) => false,
    }
}

/// Validates a newly chosen passcode and its confirmation.
///
/// Runs before a [`crate::NoteDraft`] is built, next to wherever the frontend
/// rejects blank titles. [`verify`] stays independent of this: entered
/// credentials are always re-parsed, since a UI-side digit filter is not a
/// security boundary.
pub fn new_passcode(entered: &str, confirmation: &str) -> Result<i64, PasscodeError> {
    if entered.trim().is_empty() {
        return Err(PasscodeError::Blank);
    }
    if entered != confirmation {
        return Err(PasscodeError::ConfirmationMismatch);
    }
    entered.parse().map_err(|_| PasscodeError::NotNumeric)
}

/// What a prompt is asking permission for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessIntent {
    Reveal,
    Delete,
}

/// Where one protected-access attempt currently stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessState {
    /// No note selected for protected access.
    Idle,
    /// A target note and an intent are fixed; the prompt is open.
    ///
    /// `denied` is set after a failed submission. The prompt stays open, so
    /// the user can try again without re-selecting the note.
    AwaitingCredential {
        note: Note,
        intent: AccessIntent,
        denied: bool,
    },
    /// Credential accepted for [`AccessIntent::Reveal`]; content is readable.
    Revealed { note: Note },
    /// Credential accepted for [`AccessIntent::Delete`].
    ///
    /// The flow never mutates the store itself. The caller is expected to
    /// pass `id` to [`crate::NoteStore::delete`], then dismiss the flow.
    Deleted { id: NoteId },
}

/// Result of one credential submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Granted,
    Denied,
}

/// State machine for one protected-access attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessFlow {
    state: AccessState,
}

impl AccessFlow {
    pub fn new() -> Self {
        AccessFlow {
            state: AccessState::Idle,
        }
    }

    pub fn state(&self) -> &AccessState {
        &self.state
    }

    /// Opens a prompt for `note` with the given intent.
    ///
    /// Replaces whatever attempt was in progress.
    pub fn request(&mut self, note: Note, intent: AccessIntent) {
        self.state = AccessState::AwaitingCredential {
            note,
            intent,
            denied: false,
        };
    }

    /// Submits an entered credential for the open prompt.
    ///
    /// On a match the flow moves to [`AccessState::Revealed`] or
    /// [`AccessState::Deleted`] depending on the intent. On a mismatch the
    /// prompt stays open with the denied flag set. Without an open prompt
    /// there is nothing to grant, so the answer is `Denied` and the state is
    /// left alone.
    pub fn submit(&mut self, entered: &str) -> AccessDecision {
        match std::mem::replace(&mut self.state, AccessState::Idle) {
            AccessState::AwaitingCredential { note, intent, .. } => {
                if verify(entered, note.get_secret()) {
                    debug!(id = %note.get_id(), ?intent, "access granted");
                    self.state = match intent {
                        AccessIntent::Reveal => AccessState::Revealed { note },
                        AccessIntent::Delete => AccessState::Deleted {
                            id: note.get_id(),
                        },
                    };
                    AccessDecision::Granted
                } else {
                    debug!(id = %note.get_id(), ?intent, "access denied");
                    self.state = AccessState::AwaitingCredential {
                        note,
                        intent,
                        denied: true,
                    };
                    AccessDecision::Denied
                }
            }
            other => {
                self.state = other;
                AccessDecision::Denied
            }
        }
    }

    /// Dismisses the prompt, discarding the entered credential and any error
    /// state.
    pub fn dismiss(&mut self) {
        self.state = AccessState::Idle;
    }
}

impl Default for AccessFlow {
    fn default() -> Self {
        Self::new()
    }
}

use crate::note::NoteDraft;
use crate::notestore::BoxedNoteStore;

const SAMPLE_NOTES: [(&str, &str, i64); 6] = [
    ("Secretito 1", "Mi secretito ha sido revelado", 1324),
    ("No mires mi secretito", "Mi secretito ha sido revelado", 1234),
    ("Secretito 3", "Mi secretito ha sido revelado", 1234),
    ("Secretito 4", "Mi secretito ha sido revelado", 1234),
    ("Secretito 5", "Mi secretito ha sido revelado", 1234),
    ("Secretito 6", "Mi secretito ha sido revelado", 1234),
];

/// Seeds the demonstration note set a fresh frontend shows on first
/// activation. Demo data, not a persistence contract.
pub async fn populate_sample_notes(store: &BoxedNoteStore) {
    for (title, content, secret) in SAMPLE_NOTES {
        store
            .create(NoteDraft {
                title: Some(title.to_owned()),
                content: Some(content.to_owned()),
                secret,
            })
            .await;
    }
}

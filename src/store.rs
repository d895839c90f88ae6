use std::sync::{Arc, RwLock};

use crate::error::{ApiError, ApiResult};
use crate::models::{Paste, PasteDraft};

/// The authoritative in-memory collection of pastes.
///
/// Cloning is cheap; all clones share the same collection. Mutation happens
/// only through [`PasteStore::insert_paste`], behind the write lock, so
/// generated ids stay unique under concurrent requests.
#[derive(Clone)]
pub struct PasteStore {
    inner: Arc<RwLock<Inner>>,
}

struct Inner {
    pastes: Vec<Paste>,
    // Highest id seen at construction time. Incremented per insert, never
    // recomputed from the live collection.
    last_id: u64,
}

impl PasteStore {
    /// Create a store seeded with an initial list of pastes.
    pub fn with_pastes(pastes: Vec<Paste>) -> Self {
        let last_id = pastes.iter().map(|paste| paste.id).max().unwrap_or(0);
        PasteStore {
            inner: Arc::new(RwLock::new(Inner { pastes, last_id })),
        }
    }

    /// Get all pastes, in insertion order.
    pub fn get_all_pastes(&self) -> Vec<Paste> {
        self.inner.read().unwrap().pastes.clone()
    }

    /// Get a paste by id.
    pub fn get_paste(&self, id: u64) -> Option<Paste> {
        let inner = self.inner.read().unwrap();
        inner.pastes.iter().find(|paste| paste.id == id).cloned()
    }

    /// Insert a paste, assigning it the next id.
    ///
    /// Rejects drafts whose `text` is missing or empty without touching the
    /// collection.
    pub fn insert_paste(&self, draft: PasteDraft) -> ApiResult<Paste> {
        let text = draft
            .text
            .filter(|text| !text.is_empty())
            .ok_or(ApiError::MissingText)?;

        let mut inner = self.inner.write().unwrap();
        inner.last_id += 1;

        let paste = Paste {
            id: inner.last_id,
            name: draft.name,
            syntax: draft.syntax,
            exposure: draft.exposure,
            expiration: draft.expiration,
            text,
            user_id: draft.user_id,
        };
        inner.pastes.push(paste.clone());

        Ok(paste)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paste(id: u64, text: &str) -> Paste {
        Paste {
            id,
            name: None,
            syntax: None,
            exposure: None,
            expiration: None,
            text: text.to_owned(),
            user_id: None,
        }
    }

    fn draft(text: &str) -> PasteDraft {
        PasteDraft {
            text: Some(text.to_owned()),
            ..PasteDraft::default()
        }
    }

    #[test]
    fn ids_continue_after_the_highest_seeded_id() {
        let store = PasteStore::with_pastes(vec![paste(1, "a"), paste(3, "b")]);

        let c = store.insert_paste(draft("c")).unwrap();
        assert_eq!(c.id, 4);

        let d = store.insert_paste(draft("d")).unwrap();
        assert_eq!(d.id, 5);
    }

    #[test]
    fn an_empty_store_starts_ids_at_one() {
        let store = PasteStore::with_pastes(vec![]);
        assert_eq!(store.insert_paste(draft("a")).unwrap().id, 1);
    }

    #[test]
    fn new_ids_exceed_every_existing_id() {
        let store = PasteStore::with_pastes(vec![paste(7, "a"), paste(2, "b")]);

        let before: Vec<u64> = store.get_all_pastes().iter().map(|p| p.id).collect();
        let created = store.insert_paste(draft("c")).unwrap();

        assert!(before.iter().all(|&id| created.id > id));
    }

    #[test]
    fn inserting_without_text_is_rejected() {
        let store = PasteStore::with_pastes(vec![paste(1, "a")]);

        let err = store.insert_paste(PasteDraft::default()).unwrap_err();
        assert_eq!(err.to_string(), "A 'text' property is required.");
        assert_eq!(store.get_all_pastes().len(), 1);
    }

    #[test]
    fn inserting_empty_text_is_rejected() {
        let store = PasteStore::with_pastes(vec![]);

        assert!(matches!(
            store.insert_paste(draft("")),
            Err(ApiError::MissingText)
        ));
        assert!(store.get_all_pastes().is_empty());
    }

    #[test]
    fn a_rejected_insert_does_not_consume_an_id() {
        let store = PasteStore::with_pastes(vec![paste(1, "a")]);

        let _ = store.insert_paste(PasteDraft::default());
        assert_eq!(store.insert_paste(draft("b")).unwrap().id, 2);
    }

    #[test]
    fn get_paste_finds_seeded_records() {
        let store = PasteStore::with_pastes(vec![paste(1, "a"), paste(3, "b")]);

        assert_eq!(store.get_paste(3), Some(paste(3, "b")));
        assert_eq!(store.get_paste(99), None);
    }

    #[test]
    fn inserted_records_keep_the_supplied_fields() {
        let store = PasteStore::with_pastes(vec![]);

        let created = store
            .insert_paste(PasteDraft {
                name: Some("Fibonacci".to_owned()),
                syntax: Some("python".to_owned()),
                exposure: Some("public".to_owned()),
                expiration: Some(serde_json::json!(30)),
                text: Some("def fib(n): pass".to_owned()),
                user_id: Some(2),
            })
            .unwrap();

        assert_eq!(
            created,
            Paste {
                id: 1,
                name: Some("Fibonacci".to_owned()),
                syntax: Some("python".to_owned()),
                exposure: Some("public".to_owned()),
                expiration: Some(serde_json::json!(30)),
                text: "def fib(n): pass".to_owned(),
                user_id: Some(2),
            }
        );
        assert_eq!(store.get_paste(1), Some(created));
    }

    #[test]
    fn listing_preserves_insertion_order() {
        let store = PasteStore::with_pastes(vec![paste(1, "a"), paste(3, "b")]);
        store.insert_paste(draft("c")).unwrap();
        store.insert_paste(draft("d")).unwrap();

        let ids: Vec<u64> = store.get_all_pastes().iter().map(|p| p.id).collect();
        assert_eq!(ids, [1, 3, 4, 5]);
    }

    #[test]
    fn listing_is_idempotent() {
        let store = PasteStore::with_pastes(vec![paste(1, "a"), paste(3, "b")]);
        assert_eq!(store.get_all_pastes(), store.get_all_pastes());
    }
}

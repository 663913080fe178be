//! # Bookmark Store
//!
//! The persisted bookmark set.
//!
//! ## Write-through
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Bookmark Operations                                  │
//! │                                                                         │
//! │  add(recipe) ─────► push snapshot ──┐                                   │
//! │  remove(id) ──────► drop by id ─────┼──► persist() ──► storage.set(key) │
//! │                                     │      │                            │
//! │                                     │      └─ error: in-memory change   │
//! │                                     │         is rolled back            │
//! │  clear() ─────────► storage.remove(key), empty set                      │
//! │                                                                         │
//! │  restore(storage, key)                                                  │
//! │     absent      → empty                                                 │
//! │     malformed   → empty + warn                                          │
//! │     valid JSON  → the stored sequence                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Entries are unique by recipe id, in insertion order.
//! - After every successful mutation the persisted blob deserializes to
//!   exactly the in-memory sequence.

use std::fmt;
use std::sync::Arc;

use forkify_core::Bookmark;
use tracing::{debug, info, warn};

use crate::error::StoreResult;
use crate::storage::KeyValueStorage;

/// Ordered, persisted set of bookmarked recipes.
pub struct BookmarkStore {
    storage: Arc<dyn KeyValueStorage>,
    key: String,
    bookmarks: Vec<Bookmark>,
}

impl fmt::Debug for BookmarkStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BookmarkStore")
            .field("key", &self.key)
            .field("len", &self.bookmarks.len())
            .finish()
    }
}

impl BookmarkStore {
    /// Loads the bookmark set stored under `key`.
    ///
    /// A missing, unreadable or malformed blob yields an empty set.
    pub fn restore(storage: Arc<dyn KeyValueStorage>, key: impl Into<String>) -> StoreResult<Self> {
        let key = key.into();

        let bookmarks = match storage.get(&key) {
            Ok(None) => Vec::new(),
            Ok(Some(blob)) => match serde_json::from_str::<Vec<Bookmark>>(&blob) {
                Ok(stored) => dedup_by_id(stored),
                Err(err) => {
                    warn!(key = %key, error = %err, "Stored bookmarks are malformed, starting empty");
                    Vec::new()
                }
            },
            Err(err) => {
                warn!(key = %key, error = %err, "Stored bookmarks are unreadable, starting empty");
                Vec::new()
            }
        };

        debug!(key = %key, count = bookmarks.len(), "Restored bookmarks");

        Ok(BookmarkStore {
            storage,
            key,
            bookmarks,
        })
    }

    /// Adds a snapshot of `recipe`, marked as bookmarked.
    ///
    /// Returns `false` (and writes nothing) if the id is already present.
    pub fn add(&mut self, recipe: &Bookmark) -> StoreResult<bool> {
        if self.contains(&recipe.id) {
            debug!(id = %recipe.id, "Already bookmarked");
            return Ok(false);
        }

        let mut snapshot = recipe.clone();
        snapshot.bookmarked = true;
        self.bookmarks.push(snapshot);

        if let Err(err) = self.persist() {
            self.bookmarks.pop();
            return Err(err);
        }

        info!(id = %recipe.id, count = self.bookmarks.len(), "Bookmark added");
        Ok(true)
    }

    /// Removes the bookmark with `id`. Returns whether one existed.
    pub fn remove(&mut self, id: &str) -> StoreResult<bool> {
        let Some(index) = self.bookmarks.iter().position(|b| b.id == id) else {
            return Ok(false);
        };

        let removed = self.bookmarks.remove(index);
        if let Err(err) = self.persist() {
            self.bookmarks.insert(index, removed);
            return Err(err);
        }

        info!(id, count = self.bookmarks.len(), "Bookmark removed");
        Ok(true)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.bookmarks.iter().any(|b| b.id == id)
    }

    /// Bookmarks in insertion order.
    pub fn all(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    pub fn len(&self) -> usize {
        self.bookmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookmarks.is_empty()
    }

    /// Storage key of the blob.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Deletes the persisted blob and empties the set.
    pub fn clear(&mut self) -> StoreResult<()> {
        self.storage.remove(&self.key)?;
        self.bookmarks.clear();
        info!(key = %self.key, "Bookmarks cleared");
        Ok(())
    }

    /// Writes the whole sequence under the store's key.
    pub fn persist(&self) -> StoreResult<()> {
        let blob = serde_json::to_string(&self.bookmarks)?;
        self.storage.set(&self.key, &blob)
    }
}

fn dedup_by_id(stored: Vec<Bookmark>) -> Vec<Bookmark> {
    let mut unique: Vec<Bookmark> = Vec::with_capacity(stored.len());
    for bookmark in stored {
        if !unique.iter().any(|b| b.id == bookmark.id) {
            unique.push(bookmark);
        }
    }
    unique
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::storage::{FileStorage, MemoryStorage};
    use forkify_core::{Ingredient, Recipe, BOOKMARKS_KEY};

    fn recipe(id: &str) -> Recipe {
        Recipe {
            id: id.to_string(),
            title: format!("Recipe {}", id),
            publisher: "Publisher".to_string(),
            source_url: "http://example.com".to_string(),
            image: "http://example.com/img.jpg".to_string(),
            servings: 4,
            cooking_time: 20,
            ingredients: vec![Ingredient::new(Some(1.0), "cup", "rice")],
            bookmarked: false,
            key: None,
        }
    }

    fn memory() -> Arc<dyn KeyValueStorage> {
        Arc::new(MemoryStorage::new())
    }

    fn persisted(storage: &Arc<dyn KeyValueStorage>) -> Vec<Bookmark> {
        let blob = storage.get(BOOKMARKS_KEY).unwrap().unwrap();
        serde_json::from_str(&blob).unwrap()
    }

    /// Storage whose writes always fail.
    struct ReadOnly;

    impl KeyValueStorage for ReadOnly {
        fn get(&self, _: &str) -> StoreResult<Option<String>> {
            Ok(None)
        }
        fn set(&self, _: &str, _: &str) -> StoreResult<()> {
            Err(StoreError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only",
            )))
        }
        fn remove(&self, _: &str) -> StoreResult<()> {
            Ok(())
        }
    }

    #[test]
    fn test_restore_absent_is_empty() {
        let store = BookmarkStore::restore(memory(), BOOKMARKS_KEY).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_restore_malformed_is_empty() {
        let storage = memory();
        storage.set(BOOKMARKS_KEY, "{not json").unwrap();

        let store = BookmarkStore::restore(storage, BOOKMARKS_KEY).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_restore_unreadable_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("bookmarks.json"), [0xff, 0xfe, 0x00, 0x9f]).unwrap();

        let storage: Arc<dyn KeyValueStorage> = Arc::new(FileStorage::open(dir.path()).unwrap());
        let mut store = BookmarkStore::restore(storage, "bookmarks").unwrap();
        assert_eq!(store.len(), 0);

        // The next write replaces the unreadable blob.
        store.add(&recipe("a")).unwrap();
        let storage: Arc<dyn KeyValueStorage> = Arc::new(FileStorage::open(dir.path()).unwrap());
        assert_eq!(BookmarkStore::restore(storage, "bookmarks").unwrap().len(), 1);
    }

    #[test]
    fn test_restore_directory_in_place_of_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("bookmarks.json")).unwrap();

        let storage: Arc<dyn KeyValueStorage> = Arc::new(FileStorage::open(dir.path()).unwrap());
        let store = BookmarkStore::restore(storage, "bookmarks").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_persisted_blob_matches_memory_after_each_mutation() {
        let storage = memory();
        let mut store = BookmarkStore::restore(storage.clone(), BOOKMARKS_KEY).unwrap();

        store.add(&recipe("a")).unwrap();
        assert_eq!(persisted(&storage), store.all());

        store.add(&recipe("b")).unwrap();
        assert_eq!(persisted(&storage), store.all());

        assert!(store.remove("a").unwrap());
        assert_eq!(persisted(&storage), store.all());
        assert_eq!(store.all()[0].id, "b");
    }

    #[test]
    fn test_add_marks_snapshot_and_ignores_duplicates() {
        let mut store = BookmarkStore::restore(memory(), BOOKMARKS_KEY).unwrap();

        assert!(store.add(&recipe("a")).unwrap());
        assert!(!store.add(&recipe("a")).unwrap());

        assert_eq!(store.len(), 1);
        assert!(store.all()[0].bookmarked);
        assert!(store.contains("a"));
    }

    #[test]
    fn test_remove_missing_returns_false() {
        let mut store = BookmarkStore::restore(memory(), BOOKMARKS_KEY).unwrap();
        assert!(!store.remove("nope").unwrap());
    }

    #[test]
    fn test_failed_write_rolls_back() {
        let mut store = BookmarkStore::restore(Arc::new(ReadOnly), BOOKMARKS_KEY).unwrap();

        assert!(store.add(&recipe("a")).is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn test_clear_removes_key() {
        let storage = memory();
        let mut store = BookmarkStore::restore(storage.clone(), BOOKMARKS_KEY).unwrap();
        store.add(&recipe("a")).unwrap();

        store.clear().unwrap();

        assert!(store.is_empty());
        assert_eq!(storage.get(BOOKMARKS_KEY).unwrap(), None);
    }

    #[test]
    fn test_round_trip_through_file_storage() {
        let dir = tempfile::tempdir().unwrap();
        let mut user_recipe = recipe("mine");
        user_recipe.key = Some("api-key".to_string());

        {
            let storage: Arc<dyn KeyValueStorage> = Arc::new(FileStorage::open(dir.path()).unwrap());
            let mut store = BookmarkStore::restore(storage, BOOKMARKS_KEY).unwrap();
            store.add(&recipe("a")).unwrap();
            store.add(&user_recipe).unwrap();
        }

        let storage: Arc<dyn KeyValueStorage> = Arc::new(FileStorage::open(dir.path()).unwrap());
        let store = BookmarkStore::restore(storage, BOOKMARKS_KEY).unwrap();

        let ids: Vec<&str> = store.all().iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "mine"]);
        assert_eq!(store.all()[1].key.as_deref(), Some("api-key"));
        assert!(store.all().iter().all(|b| b.bookmarked));
    }

    #[test]
    fn test_restore_drops_duplicate_ids() {
        let storage = memory();
        let blob = serde_json::to_string(&vec![recipe("a"), recipe("a")]).unwrap();
        storage.set(BOOKMARKS_KEY, &blob).unwrap();

        let store = BookmarkStore::restore(storage, BOOKMARKS_KEY).unwrap();
        assert_eq!(store.len(), 1);
    }
}

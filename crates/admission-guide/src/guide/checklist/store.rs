use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::progress::{ChecklistProgress, ProgressTracker};
use crate::guide::domain::{DegreeLevel, GuideError};
use crate::guide::tables::checklist_items;

/// Synchronous string key-value storage, shaped after browser local storage.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage io failure: {0}")]
    Io(#[from] io::Error),
    #[error("storage document is not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// A stored checklist payload that could not be decoded. Recovered by resetting to empty.
#[derive(Debug, thiserror::Error)]
#[error("corrupt checklist state under '{key}': {source}")]
pub struct CorruptPersistedState {
    pub key: String,
    #[source]
    pub source: serde_json::Error,
}

/// Completion flags keyed by item index. Absent indices count as not completed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChecklistState(BTreeMap<usize, bool>);

impl ChecklistState {
    pub fn is_completed(&self, index: usize) -> bool {
        self.0.get(&index).copied().unwrap_or(false)
    }

    pub fn get(&self, index: usize) -> Option<bool> {
        self.0.get(&index).copied()
    }

    pub fn set(&mut self, index: usize, completed: bool) {
        self.0.insert(index, completed);
    }

    /// Completed flags strictly below `limit`; stale indices past the definition are ignored.
    pub fn completed_below(&self, limit: usize) -> usize {
        self.0
            .range(..limit)
            .filter(|(_, completed)| **completed)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(usize, bool)> for ChecklistState {
    fn from_iter<T: IntoIterator<Item = (usize, bool)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Storage key for a degree level's checklist, e.g. `checklist_graduate`.
pub fn storage_key(degree: DegreeLevel) -> String {
    format!("checklist_{}", degree.key())
}

/// Decodes a stored payload. `null` is treated like an absent key.
pub fn decode_state(key: &str, raw: &str) -> Result<ChecklistState, CorruptPersistedState> {
    serde_json::from_str::<Option<ChecklistState>>(raw)
        .map(Option::unwrap_or_default)
        .map_err(|source| CorruptPersistedState {
            key: key.to_string(),
            source,
        })
}

/// One checklist line joined with its stored completion flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChecklistItemView {
    pub index: usize,
    pub label: &'static str,
    pub completed: bool,
}

/// Joins a degree's checklist definition with one loaded state.
pub fn item_views(degree: DegreeLevel, state: &ChecklistState) -> Vec<ChecklistItemView> {
    checklist_items(degree)
        .iter()
        .copied()
        .enumerate()
        .map(|(index, label)| ChecklistItemView {
            index,
            label,
            completed: state.is_completed(index),
        })
        .collect()
}

/// Per-degree checklist persistence over an injected [`KeyValueStore`].
pub struct ChecklistStore<S> {
    backend: Arc<S>,
    write_lock: Mutex<()>,
}

impl<S> ChecklistStore<S>
where
    S: KeyValueStore,
{
    pub fn new(backend: Arc<S>) -> Self {
        Self {
            backend,
            write_lock: Mutex::new(()),
        }
    }

    pub fn backend(&self) -> &Arc<S> {
        &self.backend
    }

    /// Never fails: missing, unreadable, or corrupt state all load as empty.
    pub fn load(&self, degree: DegreeLevel) -> ChecklistState {
        let key = storage_key(degree);
        let raw = match self.backend.get(&key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return ChecklistState::default(),
            Err(err) => {
                warn!(%key, error = %err, "checklist state unreadable, starting empty");
                return ChecklistState::default();
            }
        };

        match decode_state(&key, &raw) {
            Ok(state) => state,
            Err(corrupt) => {
                warn!(error = %corrupt, "discarding corrupt checklist state");
                ChecklistState::default()
            }
        }
    }

    /// Read-modify-write of one flag; the whole degree state is written back in one `set`.
    pub fn set_item(
        &self,
        degree: DegreeLevel,
        index: usize,
        completed: bool,
    ) -> Result<ChecklistState, GuideError> {
        let len = checklist_items(degree).len();
        if index >= len {
            return Err(GuideError::IndexOutOfRange { degree, index, len });
        }

        let _guard = self.lock_writes();
        let mut state = self.load(degree);
        state.set(index, completed);

        let key = storage_key(degree);
        let payload = serde_json::to_string(&state).map_err(StoreError::from)?;
        self.backend.set(&key, &payload)?;
        debug!(%key, index, completed, "checklist item persisted");

        Ok(state)
    }

    /// Definition items in order, each with its stored flag.
    pub fn items(&self, degree: DegreeLevel) -> Vec<ChecklistItemView> {
        item_views(degree, &self.load(degree))
    }

    pub fn progress(&self, degree: DegreeLevel) -> ChecklistProgress {
        ProgressTracker::new(self).compute_progress(degree)
    }

    fn lock_writes(&self) -> MutexGuard<'_, ()> {
        self.write_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Process-local store; contents vanish with the process.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryStore {
    fn entries(&self) -> Result<MutexGuard<'_, HashMap<String, String>>, StoreError> {
        self.entries
            .lock()
            .map_err(|_| StoreError::Unavailable("in-memory store mutex poisoned".to_string()))
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.entries()?.remove(key);
        Ok(())
    }
}

/// Durable store backed by one JSON document mapping keys to payloads.
///
/// Every write rewrites the document through a sibling temp file and a rename, so a
/// crash mid-write leaves the previous document intact.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    fn guard(&self) -> MutexGuard<'_, ()> {
        self.lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn read_document(&self) -> Result<BTreeMap<String, String>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) if raw.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(err) => Err(err.into()),
        }
    }

    /// Like `read_document`, but an undecodable document is replaced rather than fatal.
    fn read_document_for_write(&self) -> Result<BTreeMap<String, String>, StoreError> {
        match self.read_document() {
            Err(StoreError::Serialization(err)) => {
                warn!(
                    path = %self.path.display(),
                    error = %err,
                    "replacing unreadable storage document"
                );
                Ok(BTreeMap::new())
            }
            other => other,
        }
    }

    fn write_document(&self, document: &BTreeMap<String, String>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, serde_json::to_string_pretty(document)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let _guard = self.guard();
        Ok(self.read_document()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let _guard = self.guard();
        let mut document = self.read_document_for_write()?;
        document.insert(key.to_string(), value.to_string());
        self.write_document(&document)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let _guard = self.guard();
        let mut document = self.read_document_for_write()?;
        if document.remove(key).is_some() {
            self.write_document(&document)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Unavailable("disk offline".to_string()))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("disk offline".to_string()))
        }

        fn remove(&self, _key: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("disk offline".to_string()))
        }
    }

    fn memory_store() -> ChecklistStore<InMemoryStore> {
        ChecklistStore::new(Arc::new(InMemoryStore::default()))
    }

    #[test]
    fn keys_are_partitioned_by_degree() {
        assert_eq!(storage_key(DegreeLevel::Graduate), "checklist_graduate");
        assert_eq!(storage_key(DegreeLevel::Postdoc), "checklist_postdoc");
    }

    #[test]
    fn payload_uses_string_indices() {
        let store = memory_store();
        store
            .set_item(DegreeLevel::Doctoral, 3, false)
            .expect("stored");
        store
            .set_item(DegreeLevel::Doctoral, 0, true)
            .expect("stored");

        let raw = store
            .backend()
            .get("checklist_doctoral")
            .expect("readable")
            .expect("present");
        assert_eq!(raw, r#"{"0":true,"3":false}"#);
    }

    #[test]
    fn decodes_browser_style_payloads() {
        let state = decode_state("checklist_undergraduate", r#"{"0": true, "3": false}"#)
            .expect("valid payload");
        assert!(state.is_completed(0));
        assert_eq!(state.get(3), Some(false));
        assert_eq!(state.get(1), None);

        let empty = decode_state("checklist_undergraduate", "null").expect("null is empty");
        assert!(empty.is_empty());
    }

    #[test]
    fn rejects_non_object_payloads() {
        for raw in [
            "not json",
            "[true, false]",
            r#"{"zero": true}"#,
            r#"{"0": "yes"}"#,
        ] {
            let err = decode_state("checklist_graduate", raw).expect_err("corrupt payload");
            assert_eq!(err.key, "checklist_graduate");
        }
    }

    #[test]
    fn unreadable_backend_loads_empty_but_writes_fail() {
        let store = ChecklistStore::new(Arc::new(BrokenStore));
        assert!(store.load(DegreeLevel::Graduate).is_empty());

        let err = store
            .set_item(DegreeLevel::Graduate, 0, true)
            .expect_err("write fails");
        assert!(matches!(
            err,
            GuideError::Storage(StoreError::Unavailable(_))
        ));
    }

    #[test]
    fn completed_below_ignores_stale_indices() {
        let state: ChecklistState = [(0, true), (5, true), (12, true), (20, true)]
            .into_iter()
            .collect();
        assert_eq!(state.completed_below(12), 2);
        assert_eq!(state.completed_below(13), 3);
    }

    #[test]
    fn items_join_definition_and_state() {
        let store = memory_store();
        store
            .set_item(DegreeLevel::Postdoc, 1, true)
            .expect("stored");

        let items = store.items(DegreeLevel::Postdoc);
        assert_eq!(items.len(), 12);
        assert_eq!(
            items[0].label,
            "Update CV with all publications and presentations"
        );
        assert!(!items[0].completed);
        assert!(items[1].completed);
    }

    #[test]
    fn file_store_survives_reopen() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("checklists.json");

        let store = ChecklistStore::new(Arc::new(FileStore::new(&path)));
        store
            .set_item(DegreeLevel::Graduate, 4, true)
            .expect("stored");

        let reopened = ChecklistStore::new(Arc::new(FileStore::new(&path)));
        assert!(reopened.load(DegreeLevel::Graduate).is_completed(4));
        assert!(reopened.load(DegreeLevel::Doctoral).is_empty());
    }

    #[test]
    fn file_store_remove_and_corrupt_document() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("checklists.json");
        let backend = FileStore::new(&path);

        backend.set("checklist_postdoc", "{}").expect("set");
        backend.remove("checklist_postdoc").expect("remove");
        assert_eq!(backend.get("checklist_postdoc").expect("get"), None);

        fs::write(&path, "{{ definitely not json").expect("write corrupt document");
        assert!(matches!(
            backend.get("checklist_postdoc"),
            Err(StoreError::Serialization(_))
        ));

        let store = ChecklistStore::new(Arc::new(backend));
        assert!(store.load(DegreeLevel::Postdoc).is_empty());
        store
            .set_item(DegreeLevel::Postdoc, 2, true)
            .expect("document replaced");
        assert!(store.load(DegreeLevel::Postdoc).is_completed(2));
    }
}

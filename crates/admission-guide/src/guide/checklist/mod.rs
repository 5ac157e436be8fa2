mod export;
mod progress;
mod store;

pub use export::{export_csv, ExportError};
pub use progress::{ChecklistProgress, ProgressTracker};
pub use store::{
    decode_state, item_views, storage_key, ChecklistItemView, ChecklistState, ChecklistStore,
    CorruptPersistedState, FileStore, InMemoryStore, KeyValueStore, StoreError,
};

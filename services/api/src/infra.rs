use admission_guide::config::StorageConfig;
use admission_guide::guide::{ChecklistStore, FileStore, InMemoryStore};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn file_checklist_store(config: &StorageConfig) -> ChecklistStore<FileStore> {
    info!(path = %config.checklist_path.display(), "checklist state persisted to file");
    ChecklistStore::new(Arc::new(FileStore::new(config.checklist_path.clone())))
}

pub(crate) fn memory_checklist_store() -> ChecklistStore<InMemoryStore> {
    info!("checklist state kept in memory; it will not survive a restart");
    ChecklistStore::new(Arc::new(InMemoryStore::default()))
}

//! Cost estimates, application timelines, and persistent document checklists.

pub mod checklist;
mod costs;
pub mod domain;
pub mod router;
pub mod tables;
mod timeline;

pub use checklist::{
    ChecklistItemView, ChecklistProgress, ChecklistState, ChecklistStore, FileStore, InMemoryStore,
    KeyValueStore, ProgressTracker, StoreError,
};
pub use costs::{format_usd, CostBreakdown, CostEstimate, CostEstimator, CostLineItem};
pub use domain::{DegreeLevel, GuideError, LocationTier, ProgramType, SelectionField};
pub use router::guide_router;
pub use timeline::{Milestone, Timeline, TimelineGenerator, TimelineResolution};

use serde::Serialize;

use super::store::{ChecklistState, ChecklistStore, KeyValueStore};
use crate::guide::domain::DegreeLevel;
use crate::guide::tables::checklist_items;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChecklistProgress {
    pub completed: usize,
    pub total: usize,
    pub percentage: u8,
}

impl ChecklistProgress {
    pub fn from_state(state: &ChecklistState, total: usize) -> Self {
        let completed = state.completed_below(total);
        Self {
            completed,
            total,
            percentage: rounded_percentage(completed, total),
        }
    }

    /// Progress of one loaded state against the degree's current definition.
    pub fn for_degree(degree: DegreeLevel, state: &ChecklistState) -> Self {
        Self::from_state(state, checklist_items(degree).len())
    }

    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }

    /// Display string such as `50% Complete (7/14 items)`.
    pub fn summary(&self) -> String {
        format!(
            "{}% Complete ({}/{} items)",
            self.percentage, self.completed, self.total
        )
    }
}

/// `round(100 * completed / total)` with halves rounded up; zero when `total` is zero.
fn rounded_percentage(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let completed = completed.min(total);
    let pct = (200 * completed + total) / (2 * total);
    pct as u8
}

/// Derives completion progress from whatever the checklist store currently holds.
pub struct ProgressTracker<'a, S> {
    store: &'a ChecklistStore<S>,
}

impl<'a, S> ProgressTracker<'a, S>
where
    S: KeyValueStore,
{
    pub fn new(store: &'a ChecklistStore<S>) -> Self {
        Self { store }
    }

    pub fn compute_progress(&self, degree: DegreeLevel) -> ChecklistProgress {
        ChecklistProgress::for_degree(degree, &self.store.load(degree))
    }
}

use serde::{Deserialize, Serialize};

/// Aggregate outcome of one reconciliation pass, returned to the invocation
/// harness. Fields serialize camelCase to preserve the wire shape existing
/// consumers of this job parse.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReconciliationResult {
    pub groups_processed: usize,
    pub groups_ignored: usize,
    pub groups_deleted: usize,
    pub groups_failed: usize,
}

impl ReconciliationResult {
    /// Every processed group lands in exactly one outcome bucket.
    pub fn is_consistent(&self) -> bool {
        self.groups_processed == self.groups_ignored + self.groups_deleted + self.groups_failed
    }
}

//! Sync status reported to the caller.

use serde::{Deserialize, Serialize};

/// Snapshot of the target tool's installation and sync state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpencodeStatus {
    pub installed: bool,
    pub version: Option<String>,
    /// Managed provider points at the given proxy with an API key set
    pub is_synced: bool,
    /// A config backup exists under either suffix
    pub has_backup: bool,
    pub current_base_url: Option<String>,
    /// Files the viewer may show
    pub files: Vec<String>,
}

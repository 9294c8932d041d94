use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ==================== Pane Key ====================

/// Unique identifier for one workbench pane
///
/// Random v4 UUIDs rather than creation timestamps: two panes opened
/// within the same instant stay distinguishable, and a key is never
/// reused after its pane closes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct PaneKey(Uuid);

impl PaneKey {
    /// Generate a fresh key
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// The underlying UUID
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for PaneKey {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PaneKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pane-{}", self.0)
    }
}

// ==================== Tab Info ====================

/// One row of the tab strip, in insertion order
///
/// The visual tab widget is external; this is everything it needs
/// per tab besides the active key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TabInfo {
    pub key: PaneKey,
    pub label: String,
}

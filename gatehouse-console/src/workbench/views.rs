//! Hosted-view descriptors
//!
//! The session widgets themselves (remote-machine viewer, database
//! workbench) are external; these descriptors carry everything a widget
//! is constructed with: the composite asset id, the pane key, and the
//! callbacks into the workbench.

use std::fmt;
use std::path::PathBuf;

use gatehouse_protocol::PaneKey;
use gatehouse_utils::{paths, Result};

use super::events::WorkbenchHandle;
use crate::client::TransportClient;

// ==================== Machine View ====================

/// Descriptor for a remote-machine session view
///
/// The viewer establishes its transport asynchronously and hands the
/// resulting client in through [`MachineView::attach_client`]; the
/// workbench never awaits it.
pub struct MachineView {
    asset_id: String,
    key: PaneKey,
    workbench: WorkbenchHandle,
}

impl MachineView {
    pub(crate) fn new(asset_id: String, key: PaneKey, workbench: WorkbenchHandle) -> Self {
        Self {
            asset_id,
            key,
            workbench,
        }
    }

    /// Composite `owner/name` id of the machine asset
    pub fn asset_id(&self) -> &str {
        &self.asset_id
    }

    /// Key of the owning pane
    pub fn key(&self) -> PaneKey {
        self.key
    }

    /// Close the owning pane
    pub fn close(&self) {
        self.workbench.close_pane(self.key);
    }

    /// Toggle the shell's fullscreen mode
    pub fn toggle_fullscreen(&self) {
        self.workbench.toggle_fullscreen();
    }

    /// Register the established transport client for this pane
    ///
    /// Must be called at most once per connection; re-registering
    /// replaces the previous handle without disconnecting it.
    pub fn attach_client(&self, client: Box<dyn TransportClient>) {
        self.workbench.register_client(self.key, client);
    }
}

impl fmt::Debug for MachineView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MachineView")
            .field("asset_id", &self.asset_id)
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

// ==================== Database View ====================

/// Descriptor for an embedded database workbench session
///
/// Database sessions do not register a disconnectable transport handle;
/// closing the pane is pure state removal.
pub struct DatabaseView {
    asset_id: String,
    key: PaneKey,
    workbench: WorkbenchHandle,
}

impl DatabaseView {
    pub(crate) fn new(asset_id: String, key: PaneKey, workbench: WorkbenchHandle) -> Self {
        Self {
            asset_id,
            key,
            workbench,
        }
    }

    /// Composite `owner/name` id of the database asset
    pub fn asset_id(&self) -> &str {
        &self.asset_id
    }

    /// Key of the owning pane
    pub fn key(&self) -> PaneKey {
        self.key
    }

    /// Close the owning pane
    pub fn close(&self) {
        self.workbench.close_pane(self.key);
    }

    /// Working directory for the embedded database workbench, created
    /// on first use
    pub fn workspace_dir(&self) -> Result<PathBuf> {
        Ok(paths::db_workspace_dir()?)
    }
}

impl fmt::Debug for DatabaseView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseView")
            .field("asset_id", &self.asset_id)
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

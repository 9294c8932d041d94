//! Pane records held by the workbench

use gatehouse_protocol::{PaneKey, TabInfo};

use super::views::{DatabaseView, MachineView};

/// One open remote session, represented as a tab
#[derive(Debug)]
pub struct Pane {
    /// Unique key, never reused
    pub key: PaneKey,
    /// Display label (= the target's name); dedup key within the set
    pub label: String,
    /// Descriptor of the hosted view
    pub content: PaneContent,
}

impl Pane {
    /// The tab-strip row for this pane
    pub fn tab_info(&self) -> TabInfo {
        TabInfo {
            key: self.key,
            label: self.label.clone(),
        }
    }
}

/// What a pane hosts, by target category
///
/// Closed set: a new category means a new variant here and a new arm in
/// the factory, checked at compile time.
#[derive(Debug)]
pub enum PaneContent {
    /// Remote-machine session (RDP/VNC/SSH viewer)
    Machine(MachineView),
    /// Embedded database workbench session
    Database(DatabaseView),
}

impl PaneContent {
    /// Composite `owner/name` id of the hosted asset
    pub fn asset_id(&self) -> &str {
        match self {
            PaneContent::Machine(view) => view.asset_id(),
            PaneContent::Database(view) => view.asset_id(),
        }
    }

    /// Key of the owning pane
    pub fn key(&self) -> PaneKey {
        match self {
            PaneContent::Machine(view) => view.key(),
            PaneContent::Database(view) => view.key(),
        }
    }

    /// Check if this pane hosts a remote-machine session
    pub fn is_machine(&self) -> bool {
        matches!(self, PaneContent::Machine(_))
    }

    /// The machine view, if this pane hosts one
    pub fn as_machine(&self) -> Option<&MachineView> {
        match self {
            PaneContent::Machine(view) => Some(view),
            _ => None,
        }
    }

    /// The database view, if this pane hosts one
    pub fn as_database(&self) -> Option<&DatabaseView> {
        match self {
            PaneContent::Database(view) => Some(view),
            _ => None,
        }
    }
}

//! Target pane factory
//!
//! Selects which hosted view a new pane gets, by target category.

use gatehouse_protocol::{AssetCategory, PaneKey, Target};

use super::events::WorkbenchHandle;
use super::pane::PaneContent;
use super::views::{DatabaseView, MachineView};

/// Build the content descriptor for a new pane
///
/// Machine targets get a remote-machine view wired with close,
/// fullscreen-toggle, and client-registration capabilities; database
/// targets get a database view with close only.
pub(crate) fn build_content(
    target: &Target,
    key: PaneKey,
    workbench: WorkbenchHandle,
) -> PaneContent {
    match target.category {
        AssetCategory::Machine => {
            PaneContent::Machine(MachineView::new(target.id(), key, workbench))
        }
        AssetCategory::Database => {
            PaneContent::Database(DatabaseView::new(target.id(), key, workbench))
        }
    }
}

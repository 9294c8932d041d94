//! Workbench: the multi-session remote-desktop panel
//!
//! Hosts concurrent remote sessions as switchable tabs and owns their
//! lifecycle: open with dedup by display label, activation, close with
//! explicit transport teardown.

mod events;
mod factory;
mod manager;
mod pane;
mod registry;
mod views;

pub use events::{WorkbenchEvent, WorkbenchHandle};
pub use manager::Workbench;
pub use pane::{Pane, PaneContent};
pub use registry::ClientRegistry;
pub use views::{DatabaseView, MachineView};

//! gatehouse-console: Remote-access console core
//!
//! A catalog of navigation shortcuts plus a multi-session "workbench"
//! hosting concurrent remote sessions (machine or database targets) as
//! switchable tabs. The workbench owns the pane lifecycle: it creates,
//! deduplicates, activates, and tears down session panes, disconnecting
//! each pane's transport client exactly once on close.
//!
//! Rendering (tab strip, grid cards) and the remote-display protocol
//! are external; this crate is the in-process state machine between
//! them.

pub mod client;
pub mod shortcuts;
pub mod stats;
pub mod workbench;

// Re-export main types at crate root
pub use client::{RemoteExec, TransportClient};
pub use shortcuts::{catalog_cards, Shortcut, ShortcutCard};
pub use stats::StatsCollector;
pub use workbench::{
    ClientRegistry, DatabaseView, MachineView, Pane, PaneContent, Workbench, WorkbenchEvent,
    WorkbenchHandle,
};

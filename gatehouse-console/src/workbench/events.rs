//! Workbench event channel
//!
//! All workbench mutation funnels through one consumer. Hosted views
//! and the embedding shell hold a cloneable [`WorkbenchHandle`] and
//! fire events at it; the workbench drains them in order. Sends are
//! fire-and-forget: the views never await the workbench.

use std::fmt;

use gatehouse_protocol::{PaneKey, Target};
use tokio::sync::mpsc;
use tracing::debug;

use crate::client::TransportClient;

/// A state transition request for the workbench
pub enum WorkbenchEvent {
    /// Open a pane for a target (dedup by display label)
    Open(Target),
    /// Make an existing pane the active tab
    Activate(PaneKey),
    /// Close a pane and disconnect its registered client
    Close(PaneKey),
    /// A hosted view's transport connected; record its handle
    RegisterClient(PaneKey, Box<dyn TransportClient>),
    /// Flip the shell's fullscreen flag
    ToggleFullscreen,
    /// Close every pane and stop the event loop
    Shutdown,
}

impl fmt::Debug for WorkbenchEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open(target) => f.debug_tuple("Open").field(&target.id()).finish(),
            Self::Activate(key) => f.debug_tuple("Activate").field(key).finish(),
            Self::Close(key) => f.debug_tuple("Close").field(key).finish(),
            Self::RegisterClient(key, _) => f.debug_tuple("RegisterClient").field(key).finish(),
            Self::ToggleFullscreen => write!(f, "ToggleFullscreen"),
            Self::Shutdown => write!(f, "Shutdown"),
        }
    }
}

/// Cloneable sender half of the workbench event channel
///
/// This is what hosted views receive as their close / fullscreen /
/// client-registration capabilities.
#[derive(Clone)]
pub struct WorkbenchHandle {
    tx: mpsc::UnboundedSender<WorkbenchEvent>,
}

impl WorkbenchHandle {
    pub(crate) fn new(tx: mpsc::UnboundedSender<WorkbenchEvent>) -> Self {
        Self { tx }
    }

    /// Request a pane for `target`
    pub fn open(&self, target: Target) {
        self.send(WorkbenchEvent::Open(target));
    }

    /// Request activation of the pane with `key`
    pub fn activate(&self, key: PaneKey) {
        self.send(WorkbenchEvent::Activate(key));
    }

    /// Request closing of the pane with `key`
    pub fn close_pane(&self, key: PaneKey) {
        self.send(WorkbenchEvent::Close(key));
    }

    /// Record a connected transport client for the pane with `key`
    pub fn register_client(&self, key: PaneKey, client: Box<dyn TransportClient>) {
        self.send(WorkbenchEvent::RegisterClient(key, client));
    }

    /// Request a fullscreen toggle
    pub fn toggle_fullscreen(&self) {
        self.send(WorkbenchEvent::ToggleFullscreen);
    }

    /// Request console shutdown: close all panes, stop the loop
    pub fn shutdown(&self) {
        self.send(WorkbenchEvent::Shutdown);
    }

    fn send(&self, event: WorkbenchEvent) {
        if self.tx.send(event).is_err() {
            debug!("workbench event dropped: consumer stopped");
        }
    }
}

impl fmt::Debug for WorkbenchHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WorkbenchHandle").finish_non_exhaustive()
    }
}

//! Transport client seams
//!
//! The actual remote-protocol client (screen rendering, input
//! forwarding, network transport) lives outside this crate; the
//! workbench only needs the capabilities defined here.

use gatehouse_utils::Result;

/// A live remote-session connection owned by a machine pane
///
/// Registered by the hosted view once its connection is established and
/// disconnected exactly once when the owning pane closes. `Send` so a
/// handle can cross the workbench event channel.
pub trait TransportClient: Send {
    /// Tear down the underlying connection
    fn disconnect(&mut self);
}

/// Command execution over an established machine transport
///
/// The statistics collector rides on this to sample `/proc` files and
/// similar one-shot commands on the remote side.
pub trait RemoteExec {
    /// Run a command remotely and return its combined output
    fn run_command(&mut self, command: &str) -> Result<String>;
}

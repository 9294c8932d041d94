//! Pane lifecycle manager

use gatehouse_protocol::{PaneKey, TabInfo, Target};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use super::events::{WorkbenchEvent, WorkbenchHandle};
use super::factory;
use super::pane::Pane;
use super::registry::ClientRegistry;
use crate::client::TransportClient;

/// The multi-session remote-desktop panel
///
/// Owns the ordered pane set (insertion order = tab order), the active
/// key, and the registry of live transport clients. All mutation goes
/// through the operations below, either called directly or fed in as
/// [`WorkbenchEvent`]s by the single-consumer [`run`](Workbench::run)
/// loop.
///
/// Invariants: no two panes share a label; `active` is either `None`
/// or the key of a pane currently in the set.
#[derive(Debug)]
pub struct Workbench {
    panes: Vec<Pane>,
    active: Option<PaneKey>,
    clients: ClientRegistry,
    fullscreen: bool,
    handle: WorkbenchHandle,
}

impl Workbench {
    /// Create a workbench and the receiving half of its event channel
    pub fn new() -> (Self, mpsc::UnboundedReceiver<WorkbenchEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let workbench = Self {
            panes: Vec::new(),
            active: None,
            clients: ClientRegistry::new(),
            fullscreen: false,
            handle: WorkbenchHandle::new(tx),
        };
        (workbench, rx)
    }

    /// A cloneable handle for sending events into this workbench
    pub fn handle(&self) -> WorkbenchHandle {
        self.handle.clone()
    }

    // ==================== Operations ====================

    /// Open a pane for `target`, or switch to the existing one
    ///
    /// Dedup is by display label: if a pane with `target.name` already
    /// exists it is activated and no pane is created. Returns the key
    /// of the (new or existing) active pane.
    pub fn open(&mut self, target: &Target) -> PaneKey {
        if let Some(pane) = self.panes.iter().find(|p| p.label == target.name) {
            debug!(label = %target.name, key = %pane.key, "re-opening existing pane");
            let key = pane.key;
            self.active = Some(key);
            return key;
        }

        let key = PaneKey::new();
        let content = factory::build_content(target, key, self.handle());
        info!(label = %target.name, %key, "opening pane");
        self.panes.push(Pane {
            key,
            label: target.name.clone(),
            content,
        });
        self.active = Some(key);
        key
    }

    /// Make the pane with `key` the active tab
    ///
    /// Unknown keys are ignored so the active reference can never
    /// dangle.
    pub fn activate(&mut self, key: PaneKey) {
        if self.panes.iter().any(|p| p.key == key) {
            self.active = Some(key);
        } else {
            warn!(%key, "activate ignored: no such pane");
        }
    }

    /// Close the pane with `key`
    ///
    /// Removes the pane, disconnects its registered transport client
    /// (if any) exactly once, and recomputes the active pane: the
    /// predecessor of a closed active pane, the new first pane if the
    /// closed one was first, or nothing if the set emptied. Closing an
    /// unknown key is a no-op.
    pub fn close(&mut self, key: PaneKey) {
        let Some(index) = self.panes.iter().position(|p| p.key == key) else {
            debug!(%key, "close ignored: no such pane");
            return;
        };

        // The replacement active key must come from the pre-removal
        // order, otherwise the predecessor rule would see shifted
        // indices.
        let next_active = if self.active == Some(key) {
            if index > 0 {
                Some(self.panes[index - 1].key)
            } else if self.panes.len() > 1 {
                Some(self.panes[1].key)
            } else {
                None
            }
        } else {
            self.active
        };

        let pane = self.panes.remove(index);
        info!(label = %pane.label, %key, "closed pane");

        if let Some(mut client) = self.clients.remove(key) {
            client.disconnect();
        }

        self.active = next_active;
    }

    /// Record a connected transport client for the pane with `key`
    ///
    /// Last write wins; a replaced handle is not disconnected here (the
    /// view contract forbids double-registering). A registration for a
    /// key whose pane is already gone is accepted but stays orphaned:
    /// keys are never reused, so it can never be disconnected against
    /// an unrelated pane.
    pub fn register_client(&mut self, key: PaneKey, client: Box<dyn TransportClient>) {
        if !self.panes.iter().any(|p| p.key == key) {
            warn!(%key, "client registered for a closed pane; handle stays orphaned");
        }
        if self.clients.insert(key, client).is_some() {
            warn!(%key, "client registration replaced an existing handle");
        }
    }

    /// Flip the shell's fullscreen flag
    pub fn toggle_fullscreen(&mut self) {
        self.fullscreen = !self.fullscreen;
    }

    /// Close every pane and disconnect every registered client
    pub fn close_all(&mut self) {
        let count = self.panes.len();
        self.panes.clear();
        self.active = None;
        self.clients.disconnect_all();
        if count > 0 {
            info!(panes = count, "closed all panes");
        }
    }

    // ==================== Event loop ====================

    /// Apply one event
    pub fn apply(&mut self, event: WorkbenchEvent) {
        match event {
            WorkbenchEvent::Open(target) => {
                self.open(&target);
            }
            WorkbenchEvent::Activate(key) => self.activate(key),
            WorkbenchEvent::Close(key) => self.close(key),
            WorkbenchEvent::RegisterClient(key, client) => self.register_client(key, client),
            WorkbenchEvent::ToggleFullscreen => self.toggle_fullscreen(),
            WorkbenchEvent::Shutdown => self.close_all(),
        }
    }

    /// Drain the event channel until shutdown
    ///
    /// The single consumer of all workbench mutation: events are
    /// applied strictly in arrival order. Returns the final state for
    /// inspection.
    pub async fn run(mut self, mut events: mpsc::UnboundedReceiver<WorkbenchEvent>) -> Self {
        while let Some(event) = events.recv().await {
            let stop = matches!(event, WorkbenchEvent::Shutdown);
            self.apply(event);
            if stop {
                break;
            }
        }
        self
    }

    // ==================== Accessors ====================

    /// Tab rows in insertion order, for the external tab strip
    pub fn tabs(&self) -> Vec<TabInfo> {
        self.panes.iter().map(Pane::tab_info).collect()
    }

    /// Key of the active pane, if any
    pub fn active(&self) -> Option<PaneKey> {
        self.active
    }

    /// The active pane, if any
    pub fn active_pane(&self) -> Option<&Pane> {
        self.active.and_then(|key| self.pane(key))
    }

    /// Look up a pane by key
    pub fn pane(&self, key: PaneKey) -> Option<&Pane> {
        self.panes.iter().find(|p| p.key == key)
    }

    /// All panes in insertion order
    pub fn panes(&self) -> &[Pane] {
        &self.panes
    }

    /// Number of open panes
    pub fn pane_count(&self) -> usize {
        self.panes.len()
    }

    /// Check if no panes are open
    pub fn is_empty(&self) -> bool {
        self.panes.is_empty()
    }

    /// Whether the shell should render fullscreen
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// Check if a transport client is registered for a pane
    pub fn has_client(&self, key: PaneKey) -> bool {
        self.clients.contains(key)
    }

    /// Number of registered transport clients
    pub fn client_count(&self) -> usize {
        self.clients.count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gatehouse_protocol::AssetCategory;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct CountingClient {
        disconnects: Arc<AtomicUsize>,
    }

    impl TransportClient for CountingClient {
        fn disconnect(&mut self) {
            self.disconnects.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn counting_client() -> (Box<dyn TransportClient>, Arc<AtomicUsize>) {
        let disconnects = Arc::new(AtomicUsize::new(0));
        (
            Box::new(CountingClient {
                disconnects: disconnects.clone(),
            }),
            disconnects,
        )
    }

    fn machine(name: &str) -> Target {
        Target::new("built-in", name, AssetCategory::Machine)
    }

    fn database(name: &str) -> Target {
        Target::new("built-in", name, AssetCategory::Database)
    }

    /// Opens panes A, B, C in order
    fn open_three(workbench: &mut Workbench) -> (PaneKey, PaneKey, PaneKey) {
        let a = workbench.open(&machine("a"));
        let b = workbench.open(&machine("b"));
        let c = workbench.open(&machine("c"));
        (a, b, c)
    }

    // ==================== Open / Dedup Tests ====================

    #[test]
    fn test_open_creates_and_activates() {
        let (mut workbench, _events) = Workbench::new();
        let target = machine("web-01");

        let key = workbench.open(&target);

        assert_eq!(workbench.pane_count(), 1);
        assert_eq!(workbench.active(), Some(key));
        let pane = workbench.pane(key).unwrap();
        assert_eq!(pane.label, "web-01");
        assert_eq!(pane.content.asset_id(), "built-in/web-01");
    }

    #[test]
    fn test_open_duplicate_label_dedups() {
        let (mut workbench, _events) = Workbench::new();

        let first = workbench.open(&machine("web-01"));
        workbench.open(&machine("other"));
        let second = workbench.open(&machine("web-01"));

        assert_eq!(workbench.pane_count(), 2);
        assert_eq!(second, first);
        assert_eq!(workbench.active(), Some(first));
    }

    #[test]
    fn test_open_same_name_different_owner_still_dedups() {
        // Dedup is by display label alone, matching the tab strip
        let (mut workbench, _events) = Workbench::new();

        let first = workbench.open(&machine("web-01"));
        let second = workbench.open(&Target::new("other-org", "web-01", AssetCategory::Machine));

        assert_eq!(workbench.pane_count(), 1);
        assert_eq!(second, first);
    }

    #[test]
    fn test_open_keys_are_unique() {
        let (mut workbench, _events) = Workbench::new();
        let (a, b, c) = open_three(&mut workbench);

        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
    }

    #[test]
    fn test_tabs_in_insertion_order() {
        let (mut workbench, _events) = Workbench::new();
        open_three(&mut workbench);

        let labels: Vec<String> = workbench.tabs().into_iter().map(|t| t.label).collect();
        assert_eq!(labels, vec!["a", "b", "c"]);
    }

    // ==================== Activate Tests ====================

    #[test]
    fn test_activate_existing_pane() {
        let (mut workbench, _events) = Workbench::new();
        let (a, _b, c) = open_three(&mut workbench);
        assert_eq!(workbench.active(), Some(c));

        workbench.activate(a);
        assert_eq!(workbench.active(), Some(a));
        assert_eq!(workbench.active_pane().unwrap().label, "a");
    }

    #[test]
    fn test_activate_unknown_key_is_ignored() {
        let (mut workbench, _events) = Workbench::new();
        let (_a, _b, c) = open_three(&mut workbench);

        workbench.activate(PaneKey::new());
        assert_eq!(workbench.active(), Some(c));
    }

    // ==================== Close Tests ====================

    #[test]
    fn test_close_active_middle_activates_predecessor() {
        let (mut workbench, _events) = Workbench::new();
        let (a, b, c) = open_three(&mut workbench);
        workbench.activate(b);

        workbench.close(b);

        let keys: Vec<PaneKey> = workbench.tabs().into_iter().map(|t| t.key).collect();
        assert_eq!(keys, vec![a, c]);
        assert_eq!(workbench.active(), Some(a));
    }

    #[test]
    fn test_close_active_first_activates_new_first() {
        let (mut workbench, _events) = Workbench::new();
        let (a, b, c) = open_three(&mut workbench);
        workbench.activate(a);

        workbench.close(a);

        let keys: Vec<PaneKey> = workbench.tabs().into_iter().map(|t| t.key).collect();
        assert_eq!(keys, vec![b, c]);
        assert_eq!(workbench.active(), Some(b));
    }

    #[test]
    fn test_close_non_active_keeps_active() {
        let (mut workbench, _events) = Workbench::new();
        let (a, b, c) = open_three(&mut workbench);
        workbench.activate(a);

        workbench.close(c);

        let keys: Vec<PaneKey> = workbench.tabs().into_iter().map(|t| t.key).collect();
        assert_eq!(keys, vec![a, b]);
        assert_eq!(workbench.active(), Some(a));
    }

    #[test]
    fn test_close_last_pane_empties_active() {
        let (mut workbench, _events) = Workbench::new();
        let a = workbench.open(&machine("a"));

        workbench.close(a);

        assert!(workbench.is_empty());
        assert_eq!(workbench.active(), None);
        assert!(workbench.active_pane().is_none());
    }

    #[test]
    fn test_close_unknown_key_is_noop() {
        let (mut workbench, _events) = Workbench::new();
        let (_a, b, _c) = open_three(&mut workbench);
        workbench.activate(b);

        workbench.close(PaneKey::new());

        assert_eq!(workbench.pane_count(), 3);
        assert_eq!(workbench.active(), Some(b));
    }

    // ==================== Client Teardown Tests ====================

    #[test]
    fn test_close_disconnects_registered_client_once() {
        let (mut workbench, _events) = Workbench::new();
        let key = workbench.open(&machine("web-01"));
        let (client, disconnects) = counting_client();
        workbench.register_client(key, client);

        workbench.close(key);
        assert_eq!(disconnects.load(Ordering::SeqCst), 1);
        assert_eq!(workbench.client_count(), 0);

        // closing again never disconnects again
        workbench.close(key);
        assert_eq!(disconnects.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_close_without_client_is_safe() {
        let (mut workbench, _events) = Workbench::new();
        let machine_key = workbench.open(&machine("web-01"));
        let db_key = workbench.open(&database("orders-db"));

        // neither pane ever registered a client
        workbench.close(machine_key);
        workbench.close(db_key);

        assert!(workbench.is_empty());
        assert_eq!(workbench.client_count(), 0);
    }

    #[test]
    fn test_close_only_disconnects_own_client() {
        let (mut workbench, _events) = Workbench::new();
        let first = workbench.open(&machine("a"));
        let second = workbench.open(&machine("b"));
        let (client_a, disconnects_a) = counting_client();
        let (client_b, disconnects_b) = counting_client();
        workbench.register_client(first, client_a);
        workbench.register_client(second, client_b);

        workbench.close(first);

        assert_eq!(disconnects_a.load(Ordering::SeqCst), 1);
        assert_eq!(disconnects_b.load(Ordering::SeqCst), 0);
        assert!(workbench.has_client(second));
    }

    #[test]
    fn test_register_replaces_without_disconnect() {
        let (mut workbench, _events) = Workbench::new();
        let key = workbench.open(&machine("web-01"));
        let (first, first_disconnects) = counting_client();
        let (second, second_disconnects) = counting_client();

        workbench.register_client(key, first);
        workbench.register_client(key, second);

        assert_eq!(workbench.client_count(), 1);
        assert_eq!(first_disconnects.load(Ordering::SeqCst), 0);

        // the surviving registration is the second one
        workbench.close(key);
        assert_eq!(second_disconnects.load(Ordering::SeqCst), 1);
        assert_eq!(first_disconnects.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_register_after_close_stays_orphaned() {
        // The connect callback raced the close: the write is accepted,
        // but nothing ever disconnects the handle because the key is
        // never reused.
        let (mut workbench, _events) = Workbench::new();
        let key = workbench.open(&machine("web-01"));
        workbench.close(key);

        let (client, disconnects) = counting_client();
        workbench.register_client(key, client);
        assert_eq!(workbench.client_count(), 1);

        // unrelated opens and closes never touch the orphan
        let other = workbench.open(&machine("other"));
        workbench.close(other);
        workbench.close(key);

        assert_eq!(disconnects.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_close_all_disconnects_everything() {
        let (mut workbench, _events) = Workbench::new();
        let (a, b, _c) = open_three(&mut workbench);
        let (client_a, disconnects_a) = counting_client();
        let (client_b, disconnects_b) = counting_client();
        workbench.register_client(a, client_a);
        workbench.register_client(b, client_b);

        workbench.close_all();

        assert!(workbench.is_empty());
        assert_eq!(workbench.active(), None);
        assert_eq!(workbench.client_count(), 0);
        assert_eq!(disconnects_a.load(Ordering::SeqCst), 1);
        assert_eq!(disconnects_b.load(Ordering::SeqCst), 1);
    }

    // ==================== Factory Routing Tests ====================

    #[test]
    fn test_machine_pane_can_register_client() {
        let (mut workbench, mut events) = Workbench::new();
        let key = workbench.open(&machine("web-01"));

        let (client, _) = counting_client();
        workbench
            .pane(key)
            .unwrap()
            .content
            .as_machine()
            .expect("machine target must host a machine view")
            .attach_client(client);

        // the registration arrives as an event and lands in the registry
        let event = events.try_recv().expect("attach_client must emit an event");
        workbench.apply(event);
        assert!(workbench.has_client(key));
    }

    #[test]
    fn test_database_pane_has_no_client_registration() {
        let (mut workbench, _events) = Workbench::new();
        let key = workbench.open(&database("orders-db"));

        let content = &workbench.pane(key).unwrap().content;
        assert!(content.as_machine().is_none());
        assert!(content.as_database().is_some());
    }

    // ==================== Fullscreen Tests ====================

    #[test]
    fn test_toggle_fullscreen() {
        let (mut workbench, _events) = Workbench::new();
        assert!(!workbench.is_fullscreen());

        workbench.toggle_fullscreen();
        assert!(workbench.is_fullscreen());

        workbench.toggle_fullscreen();
        assert!(!workbench.is_fullscreen());
    }

    // ==================== Event Loop Tests ====================

    #[test]
    fn test_events_apply_in_arrival_order() {
        let (mut workbench, mut events) = Workbench::new();
        let handle = workbench.handle();

        handle.open(machine("a"));
        handle.open(machine("b"));
        handle.open(machine("a")); // dedup: switches back to a
        handle.toggle_fullscreen();

        while let Ok(event) = events.try_recv() {
            workbench.apply(event);
        }

        assert_eq!(workbench.pane_count(), 2);
        assert_eq!(workbench.active_pane().unwrap().label, "a");
        assert!(workbench.is_fullscreen());
    }

    #[tokio::test]
    async fn test_run_drains_and_stops_on_shutdown() {
        let (workbench, events) = Workbench::new();
        let handle = workbench.handle();
        let console = tokio::spawn(workbench.run(events));

        handle.open(machine("a"));
        handle.open(machine("b"));
        handle.shutdown();

        let finished = console.await.unwrap();
        assert!(finished.is_empty());
        assert_eq!(finished.active(), None);
        assert_eq!(finished.client_count(), 0);
    }

    #[test]
    fn test_view_callbacks_round_trip() {
        let (mut workbench, mut events) = Workbench::new();
        let key = workbench.open(&machine("web-01"));
        workbench.open(&machine("other"));

        let (client, disconnects) = counting_client();
        {
            let view = workbench.pane(key).unwrap().content.as_machine().unwrap();
            view.attach_client(client);
            view.close();
        }

        // registration then close, in arrival order
        while let Ok(event) = events.try_recv() {
            workbench.apply(event);
        }

        assert_eq!(workbench.pane_count(), 1);
        assert_eq!(disconnects.load(Ordering::SeqCst), 1);
        assert_eq!(workbench.client_count(), 0);
    }

    #[tokio::test]
    async fn test_event_loop_close_before_register_orphans_handle() {
        let (workbench, events) = Workbench::new();
        let handle = workbench.handle();
        let console = tokio::spawn(workbench.run(events));

        handle.open(machine("a"));
        handle.shutdown();
        let mut finished = console.await.unwrap();

        // the connect callback fires after the pane is long gone
        let (client, disconnects) = counting_client();
        finished.register_client(PaneKey::new(), client);
        assert_eq!(finished.client_count(), 1);
        assert_eq!(disconnects.load(Ordering::SeqCst), 0);
    }
}

//! Shared type definitions

mod asset;
mod pane;
mod stats;

pub use asset::{parse_id, Asset, AssetCategory, ProtocolError, RemoteApp, Service, Target};
pub use pane::{PaneKey, TabInfo};
pub use stats::{CpuInfo, FsInfo, NetworkInfo, Stats};

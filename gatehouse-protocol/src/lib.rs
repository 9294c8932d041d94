//! gatehouse-protocol: Shared data-model definitions for the gatehouse console
//!
//! This crate defines the asset, pane, and statistics types shared between
//! the console core and the shells that embed it.

pub mod types;

// Re-export main types at crate root
pub use types::{
    parse_id, Asset, AssetCategory, CpuInfo, FsInfo, NetworkInfo, PaneKey, ProtocolError,
    RemoteApp, Service, Stats, TabInfo, Target,
};

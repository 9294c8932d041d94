use serde::{Deserialize, Serialize};

// ==================== Errors ====================

/// Errors for protocol-level parsing
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    #[error("Invalid asset id: {0}")]
    InvalidAssetId(String),
}

// ==================== Asset Category ====================

/// Category of a remote endpoint
///
/// Closed set: adding a category is a compile-time exhaustiveness
/// concern for the pane factory.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum AssetCategory {
    /// A remote machine reachable over RDP, VNC or SSH
    #[default]
    Machine,
    /// A database endpoint hosted in an embedded workbench session
    Database,
}

impl AssetCategory {
    /// Check if this category opens a remote-machine session
    pub fn is_machine(&self) -> bool {
        matches!(self, AssetCategory::Machine)
    }
}

// ==================== Target ====================

/// The endpoint selection a caller opens a pane for
///
/// Immutable once selected; `name` is the display label used for
/// pane dedup within one workbench.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Target {
    pub owner: String,
    pub name: String,
    pub category: AssetCategory,
}

impl Target {
    /// Create a new target selection
    pub fn new(owner: impl Into<String>, name: impl Into<String>, category: AssetCategory) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
            category,
        }
    }

    /// Composite id in `owner/name` form
    pub fn id(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

// ==================== Asset ====================

/// A remote application published by a machine asset
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RemoteApp {
    pub no: i32,
    pub remote_app_name: String,
    pub remote_app_dir: String,
    pub remote_app_args: String,
}

/// A service exposed by an asset
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub no: i32,
    pub name: String,
    pub path: String,
    pub port: u16,
    pub process_id: i32,
    pub expected_status: String,
    pub status: String,
    pub sub_status: String,
    pub message: String,
}

/// A connectable remote endpoint record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub owner: String,
    pub name: String,
    pub created_time: String,

    pub display_name: String,
    pub endpoint: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub language: String,
    pub category: AssetCategory,
    pub tag: String,
    pub os: String,

    #[serde(rename = "type")]
    pub asset_type: String,
    pub auto_query: bool,
    pub is_permanent: bool,
    pub enable_remote_app: bool,
    pub remote_apps: Vec<RemoteApp>,
    pub services: Vec<Service>,
}

impl Asset {
    /// Composite id in `owner/name` form
    pub fn id(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }

    /// The target selection for opening a workbench pane on this asset
    pub fn target(&self) -> Target {
        Target::new(&self.owner, &self.name, self.category)
    }

    /// Clone with the password masked
    ///
    /// Empty passwords stay empty so a masked record round-trips
    /// through an update without inventing a credential.
    pub fn masked(&self) -> Self {
        let mut masked = self.clone();
        if !masked.password.is_empty() {
            masked.password = "***".to_string();
        }
        masked
    }
}

/// Split a composite `owner/name` id into its parts
pub fn parse_id(id: &str) -> Result<(String, String), ProtocolError> {
    match id.split_once('/') {
        Some((owner, name)) if !owner.is_empty() && !name.is_empty() => {
            Ok((owner.to_string(), name.to_string()))
        }
        _ => Err(ProtocolError::InvalidAssetId(id.to_string())),
    }
}

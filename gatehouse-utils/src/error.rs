//! Error types for gatehouse
//!
//! Provides a unified error type used across all gatehouse crates.

use std::path::PathBuf;

/// Main error type for gatehouse operations
#[derive(Debug, thiserror::Error)]
pub enum GatehouseError {
    // === IO Errors ===

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    // === Transport Errors ===

    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Remote command failed: {0}")]
    RemoteCommand(String),

    // === Configuration Errors ===

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration at {path}: {message}")]
    ConfigInvalid { path: PathBuf, message: String },

    // === Workbench Errors ===

    #[error("Pane not found: {0}")]
    PaneNotFound(String),

    #[error("Asset not found: {0}")]
    AssetNotFound(String),

    #[error("Invalid asset id: {0}")]
    InvalidAssetId(String),

    // === Statistics Errors ===

    #[error("Stats collection failed: {0}")]
    Stats(String),

    // === Internal Errors ===

    #[error("Internal error: {0}")]
    Internal(String),
}

impl GatehouseError {
    /// Create a connection error
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    /// Create a remote-command error
    pub fn remote_command(msg: impl Into<String>) -> Self {
        Self::RemoteCommand(msg.into())
    }

    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a stats error
    pub fn stats(msg: impl Into<String>) -> Self {
        Self::Stats(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

/// Result type alias using GatehouseError
pub type Result<T> = std::result::Result<T, GatehouseError>;

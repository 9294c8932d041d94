//! gatehouse-utils: Common utilities for the gatehouse console
//!
//! Error types, logging setup, directory paths, and host helpers shared
//! across the gatehouse crates.

pub mod error;
pub mod host;
pub mod logging;
pub mod paths;

pub use error::{GatehouseError, Result};
pub use logging::{init_logging, init_logging_with_config, LogConfig, LogOutput};

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

// ==================== Machine Statistics ====================

/// Disk usage of one mounted filesystem
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct FsInfo {
    pub mount_point: String,
    pub used: u64,
    pub free: u64,
}

/// Addresses and byte counters of one network interface
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct NetworkInfo {
    pub ipv4: String,
    pub ipv6: String,
    pub rx: u64,
    pub tx: u64,
}

/// Aggregate CPU usage, in percent of the sampling interval
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CpuInfo {
    pub user: f32,
    pub nice: f32,
    pub system: f32,
    pub idle: f32,
    pub io_wait: f32,
    pub irq: f32,
    pub soft_irq: f32,
    pub steal: f32,
    pub guest: f32,
    pub core_num: usize,
}

/// One sample of machine telemetry, collected over the session transport
///
/// Load averages and process counts stay as the strings `/proc/loadavg`
/// reports; memory values are bytes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub uptime: u64,
    pub hostname: String,
    pub load1: String,
    pub load5: String,
    pub load10: String,
    pub running_process: String,
    pub total_process: String,
    pub mem_total: u64,
    pub mem_free: u64,
    pub mem_buffers: u64,
    pub mem_available: u64,
    pub mem_cached: u64,
    pub swap_total: u64,
    pub swap_free: u64,
    pub fs_infos: Vec<FsInfo>,
    pub network: HashMap<String, NetworkInfo>,
    pub cpu: CpuInfo,
}

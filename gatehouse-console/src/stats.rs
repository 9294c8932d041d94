//! Machine statistics collection
//!
//! Samples `/proc` files and a few one-shot commands over an
//! established machine transport and folds the output into a
//! [`Stats`] record. Parsers skip malformed lines rather than fail;
//! only transport errors propagate.

use gatehouse_protocol::{FsInfo, NetworkInfo, Stats};
use gatehouse_utils::Result;
use tracing::debug;

use crate::client::RemoteExec;

// ==================== CPU Raw Counters ====================

/// Cumulative CPU time counters from the aggregate `cpu` line of
/// `/proc/stat`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct CpuRaw {
    user: u64,
    nice: u64,
    system: u64,
    idle: u64,
    io_wait: u64,
    irq: u64,
    soft_irq: u64,
    steal: u64,
    guest: u64,
    total: u64,
}

// ==================== Collector ====================

/// Samples machine telemetry over a [`RemoteExec`] transport
///
/// CPU percentages are deltas between consecutive samples, so the
/// collector keeps the previous raw counters; the first sample reports
/// only the core count. One collector per machine session.
#[derive(Debug, Default)]
pub struct StatsCollector {
    prev_cpu: Option<CpuRaw>,
}

impl StatsCollector {
    /// Create a collector with no previous sample
    pub fn new() -> Self {
        Self::default()
    }

    /// Take one telemetry sample
    pub fn collect<E: RemoteExec + ?Sized>(&mut self, exec: &mut E) -> Result<Stats> {
        let mut stats = Stats::default();

        apply_uptime(&mut stats, &exec.run_command("/bin/cat /proc/uptime")?);
        apply_loadavg(&mut stats, &exec.run_command("/bin/cat /proc/loadavg")?);
        stats.hostname = exec.run_command("/bin/hostname")?.trim().to_string();
        apply_meminfo(&mut stats, &exec.run_command("/bin/cat /proc/meminfo")?);
        apply_fs_info(&mut stats, &exec.run_command("/bin/df -B1")?);
        apply_net_dev(&mut stats, &exec.run_command("/bin/cat /proc/net/dev")?);

        let now = apply_cpu_stat(&mut stats, &exec.run_command("/bin/cat /proc/stat")?);
        self.apply_cpu_delta(&mut stats, now);

        Ok(stats)
    }

    fn apply_cpu_delta(&mut self, stats: &mut Stats, now: CpuRaw) {
        let Some(prev) = self.prev_cpu.replace(now) else {
            debug!("first CPU sample; percentages available from the next one");
            return;
        };

        let total = now.total.saturating_sub(prev.total) as f32;
        if total <= 0.0 {
            return;
        }

        let pct = |now_val: u64, prev_val: u64| now_val.saturating_sub(prev_val) as f32 / total * 100.0;
        stats.cpu.user = pct(now.user, prev.user);
        stats.cpu.nice = pct(now.nice, prev.nice);
        stats.cpu.system = pct(now.system, prev.system);
        stats.cpu.idle = pct(now.idle, prev.idle);
        stats.cpu.io_wait = pct(now.io_wait, prev.io_wait);
        stats.cpu.irq = pct(now.irq, prev.irq);
        stats.cpu.soft_irq = pct(now.soft_irq, prev.soft_irq);
        stats.cpu.steal = pct(now.steal, prev.steal);
        stats.cpu.guest = pct(now.guest, prev.guest);
    }
}

// ==================== Parsers ====================

/// `/proc/uptime`: seconds up, seconds idle
fn apply_uptime(stats: &mut Stats, text: &str) {
    if let Some(first) = text.split_whitespace().next() {
        if let Ok(secs) = first.parse::<f64>() {
            stats.uptime = secs as u64;
        }
    }
}

/// `/proc/loadavg`: three load averages plus `running/total` processes
fn apply_loadavg(stats: &mut Stats, text: &str) {
    let parts: Vec<&str> = text.split_whitespace().collect();
    if parts.len() < 4 {
        return;
    }

    stats.load1 = parts[0].to_string();
    stats.load5 = parts[1].to_string();
    stats.load10 = parts[2].to_string();

    if let Some((running, total)) = parts[3].split_once('/') {
        stats.running_process = running.to_string();
        stats.total_process = total.to_string();
    }
}

/// `/proc/meminfo`: values are reported in kB
fn apply_meminfo(stats: &mut Stats, text: &str) {
    for line in text.lines() {
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() != 3 {
            continue;
        }

        let Ok(val) = parts[1].parse::<u64>() else {
            continue;
        };
        let val = val * 1024;

        match parts[0] {
            "MemTotal:" => stats.mem_total = val,
            "MemFree:" => stats.mem_free = val,
            "MemAvailable:" => stats.mem_available = val,
            "Buffers:" => stats.mem_buffers = val,
            "Cached:" => stats.mem_cached = val,
            "SwapTotal:" => stats.swap_total = val,
            "SwapFree:" => stats.swap_free = val,
            _ => {}
        }
    }
}

/// `df -B1`: one `FsInfo` per `/dev/*` filesystem
///
/// A long device name wraps onto its own line, with the five data
/// columns on the next one; the `wrapped` flag shifts the column
/// indices accordingly.
fn apply_fs_info(stats: &mut Stats, text: &str) {
    let mut wrapped = false;
    for line in text.lines() {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let n = parts.len();
        let dev = n > 0 && parts[0].starts_with("/dev/");

        if n == 1 && dev {
            wrapped = true;
        } else if (n == 5 && wrapped) || (n == 6 && dev) {
            let i = usize::from(wrapped);
            wrapped = false;

            let Ok(used) = parts[2 - i].parse::<u64>() else {
                continue;
            };
            let Ok(free) = parts[3 - i].parse::<u64>() else {
                continue;
            };

            stats.fs_infos.push(FsInfo {
                mount_point: parts[5 - i].to_string(),
                used,
                free,
            });
        }
    }
}

/// `/proc/net/dev`: cumulative rx/tx byte counters per interface
fn apply_net_dev(stats: &mut Stats, text: &str) {
    for line in text.lines() {
        let Some((iface, counters)) = line.split_once(':') else {
            continue;
        };

        let iface = iface.trim();
        if iface.is_empty() || iface == "lo" {
            continue;
        }

        let fields: Vec<&str> = counters.split_whitespace().collect();
        if fields.len() < 9 {
            continue;
        }
        let (Ok(rx), Ok(tx)) = (fields[0].parse::<u64>(), fields[8].parse::<u64>()) else {
            continue;
        };

        stats.network.insert(
            iface.to_string(),
            NetworkInfo {
                rx,
                tx,
                ..NetworkInfo::default()
            },
        );
    }
}

/// `/proc/stat`: aggregate CPU counters plus the per-core line count
fn apply_cpu_stat(stats: &mut Stats, text: &str) -> CpuRaw {
    let mut raw = CpuRaw::default();
    let mut cores = 0;

    for line in text.lines() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        match fields.first() {
            Some(&"cpu") => parse_cpu_fields(&fields, &mut raw),
            Some(f) if f.starts_with("cpu") => cores += 1,
            _ => {}
        }
    }

    stats.cpu.core_num = cores;
    raw
}

fn parse_cpu_fields(fields: &[&str], raw: &mut CpuRaw) {
    for (i, field) in fields.iter().enumerate().skip(1) {
        let Ok(val) = field.parse::<u64>() else {
            continue;
        };

        raw.total += val;
        match i {
            1 => raw.user = val,
            2 => raw.nice = val,
            3 => raw.system = val,
            4 => raw.idle = val,
            5 => raw.io_wait = val,
            6 => raw.irq = val,
            7 => raw.soft_irq = val,
            8 => raw.steal = val,
            9 => raw.guest = val,
            _ => {}
        }
    }
}

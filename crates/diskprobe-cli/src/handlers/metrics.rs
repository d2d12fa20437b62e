use anyhow::{Context, Result};
use diskprobe_system::{
    FsUsage, Mount, MountFilter, capacity_lines, inspect_usage, metric_timestamp,
    mounted_filesystems, usage_lines,
};
use diskprobe_types::Severity;

pub fn handle_usage(scheme: &str, filter: &MountFilter) -> Result<Severity> {
    emit(filter, |mount, usage, timestamp| {
        usage_lines(scheme, &mount.mount_point, usage, timestamp)
    })
}

pub fn handle_capacity(scheme: &str, filter: &MountFilter) -> Result<Severity> {
    emit(filter, |mount, usage, timestamp| {
        capacity_lines(scheme, &mount.mount_point, usage, timestamp)
    })
}

/// Shared emitter loop. The timestamp is captured once so every line of one
/// run agrees; filesystems that cannot be inspected are skipped silently,
/// but a missing mount table fails the whole emission.
fn emit<F>(filter: &MountFilter, render: F) -> Result<Severity>
where
    F: Fn(&Mount, &FsUsage, i64) -> Vec<String>,
{
    let mounts = mounted_filesystems().context("failed to enumerate filesystems")?;
    let timestamp = metric_timestamp();

    for mount in mounts.iter().filter(|m| m.is_physical()) {
        if !filter.admits(mount) {
            continue;
        }
        let Ok(usage) = inspect_usage(&mount.mount_point) else {
            continue;
        };
        if usage.total_bytes == 0 {
            continue;
        }
        for line in render(mount, &usage, timestamp) {
            println!("{}", line);
        }
    }

    Ok(Severity::Ok)
}

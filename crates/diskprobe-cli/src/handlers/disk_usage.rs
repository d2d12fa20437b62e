use crate::output;
use anyhow::Result;
use diskprobe_system::{MountFilter, inspect_usage, mounted_filesystems};
use diskprobe_types::{
    CheckLabels, DeviceVerdict, RunVerdict, Severity, Thresholds, aggregate_verdicts,
};

const LABELS: CheckLabels = CheckLabels {
    critical: "Disk usage exceeded critical threshold on",
    warning: "Disk usage exceeded warning threshold on",
    all_ok: "All disk usage within thresholds",
};

pub fn handle(
    warning: f64,
    critical: f64,
    filter: &MountFilter,
    verbose: bool,
) -> Result<Severity> {
    let thresholds = match Thresholds::new(warning, critical) {
        Ok(thresholds) => thresholds,
        Err(err) => {
            // Sensu plugin convention: argument errors are WARNING, exit 1
            let verdict = RunVerdict::warning(err.to_string());
            output::print_verdict(&verdict);
            return Ok(verdict.severity);
        }
    };

    let mounts = mounted_filesystems()?;

    let mut verdicts = Vec::new();
    for mount in mounts.iter().filter(|m| m.is_physical()) {
        if !filter.admits(mount) {
            continue;
        }
        // Unreadable or zero-capacity filesystems are skipped, not findings
        let Ok(usage) = inspect_usage(&mount.mount_point) else {
            continue;
        };
        if usage.total_bytes == 0 {
            continue;
        }

        let used = usage.used_percent();
        let mut verdict = DeviceVerdict::ok(&mount.mount_point);
        match thresholds.classify(used) {
            Severity::Ok => {}
            severity => {
                verdict.record(severity, format!("{} at {:.2}% usage", mount.mount_point, used));
            }
        }
        verdicts.push(verdict);
    }

    if verbose {
        output::print_device_detail(&verdicts);
    }

    let run = aggregate_verdicts(&verdicts, &LABELS);
    output::print_verdict(&run);
    Ok(run.severity)
}

use crate::output;
use anyhow::Result;
use diskprobe_system::{mounted_filesystems, parse_fstab, unmounted_entries};
use diskprobe_types::{RunVerdict, Severity, bracketed};
use std::collections::HashSet;
use std::path::Path;

pub fn handle(fstab_path: &Path) -> Result<Severity> {
    let verdict = match check_fstab(fstab_path) {
        Ok(missing) if missing.is_empty() => {
            RunVerdict::ok("All fstab filesystems are mounted")
        }
        Ok(missing) => RunVerdict::critical(format!(
            "Filesystems not mounted: {}",
            bracketed(&missing)
        )),
        // Unreadable fstab or mount table means the check itself cannot run
        Err(err) => RunVerdict::critical(err.to_string()),
    };

    output::print_verdict(&verdict);
    Ok(verdict.severity)
}

fn check_fstab(fstab_path: &Path) -> diskprobe_system::Result<Vec<String>> {
    let entries = parse_fstab(fstab_path)?;
    let mounted: HashSet<String> = mounted_filesystems()?
        .into_iter()
        .map(|mount| mount.mount_point)
        .collect();
    Ok(unmounted_entries(&entries, &mounted))
}

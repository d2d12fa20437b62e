use crate::{Error, Result};
use std::collections::HashSet;
use std::path::Path;

/// Default fstab location.
pub const FSTAB_PATH: &str = "/etc/fstab";

/// One fstab line worth checking: device, mount point, fs type, options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FstabEntry {
    pub device: String,
    pub mount_point: String,
    pub fs_type: String,
    pub options: String,
}

impl FstabEntry {
    /// Whether this entry is expected to appear in the mount table.
    /// Swap has no mount point, bind mounts alias an existing one, and
    /// `none`/commented mount points are placeholders.
    pub fn expects_mount(&self) -> bool {
        if self.fs_type == "swap" {
            return false;
        }
        if self.options.contains("bind") {
            return false;
        }
        if self.mount_point.is_empty()
            || self.mount_point == "none"
            || self.mount_point.starts_with('#')
        {
            return false;
        }
        true
    }
}

/// Parse an fstab file. Blank lines, comments, and lines with fewer than
/// four fields are skipped rather than rejected.
pub fn parse_fstab(path: &Path) -> Result<Vec<FstabEntry>> {
    let data =
        std::fs::read_to_string(path).map_err(|e| Error::Fstab(path.to_path_buf(), e))?;
    Ok(parse_fstab_text(&data))
}

fn parse_fstab_text(data: &str) -> Vec<FstabEntry> {
    data.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(parse_fstab_line)
        .collect()
}

fn parse_fstab_line(line: &str) -> Option<FstabEntry> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 4 {
        return None;
    }
    Some(FstabEntry {
        device: fields[0].to_string(),
        mount_point: fields[1].to_string(),
        fs_type: fields[2].to_string(),
        options: fields[3].to_string(),
    })
}

/// Fstab entries that should be mounted but are not, as
/// `<mount point> (<device>)` findings in fstab order.
pub fn unmounted_entries(entries: &[FstabEntry], mounted: &HashSet<String>) -> Vec<String> {
    entries
        .iter()
        .filter(|entry| entry.expects_mount())
        .filter(|entry| !mounted.contains(&entry.mount_point))
        .map(|entry| format!("{} ({})", entry.mount_point, entry.device))
        .collect()
}

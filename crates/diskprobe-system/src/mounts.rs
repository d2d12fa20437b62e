use crate::{Error, Result};
use std::path::Path;

/// Default mount table on Linux; the kernel keeps it current per process.
pub const MOUNT_TABLE: &str = "/proc/self/mounts";

/// One mounted filesystem, as listed in the mount table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mount {
    pub device: String,
    pub mount_point: String,
    pub fs_type: String,
    pub options: String,
}

impl Mount {
    /// Whether the mount is backed by a device node. Virtual filesystems
    /// (proc, sysfs, tmpfs, cgroup trees) are excluded by this test.
    pub fn is_physical(&self) -> bool {
        self.device.starts_with("/dev/")
    }
}

/// Read the system mount table.
pub fn mounted_filesystems() -> Result<Vec<Mount>> {
    read_mount_table(Path::new(MOUNT_TABLE))
}

/// Read a mount table in `/proc/self/mounts` format from an explicit path.
pub fn read_mount_table(path: &Path) -> Result<Vec<Mount>> {
    let data = std::fs::read_to_string(path).map_err(Error::Mounts)?;
    Ok(parse_mount_table(&data))
}

fn parse_mount_table(data: &str) -> Vec<Mount> {
    data.lines().filter_map(parse_mount_line).collect()
}

fn parse_mount_line(line: &str) -> Option<Mount> {
    let mut fields = line.split_whitespace();
    let device = fields.next()?;
    let mount_point = fields.next()?;
    let fs_type = fields.next()?;
    let options = fields.next()?;
    Some(Mount {
        device: device.to_string(),
        mount_point: unescape_mount_field(mount_point),
        fs_type: fs_type.to_string(),
        options: options.to_string(),
    })
}

/// The kernel escapes whitespace in mount fields as octal (`\040` for a
/// space); undo that so mount points compare against fstab and statvfs.
fn unescape_mount_field(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut chars = field.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let digits: String = chars.clone().take(3).collect();
        if digits.len() == 3
            && let Ok(code) = u8::from_str_radix(&digits, 8)
        {
            out.push(code as char);
            chars.nth(2);
        } else {
            out.push(c);
        }
    }
    out
}

// Mounted-filesystem inspection for the non-SMART probes: the mount table,
// statvfs usage, fstab comparison, and Graphite metric line rendering.

pub mod error;
pub mod filter;
pub mod fstab;
pub mod metrics;
pub mod mounts;
pub mod usage;

pub use error::{Error, Result};
pub use filter::MountFilter;
pub use fstab::{FSTAB_PATH, FstabEntry, parse_fstab, unmounted_entries};
pub use metrics::{capacity_lines, metric_timestamp, sanitize_mount, usage_lines};
pub use mounts::{MOUNT_TABLE, Mount, mounted_filesystems, read_mount_table};
pub use usage::FsUsage;

#[cfg(unix)]
pub use usage::inspect_usage;

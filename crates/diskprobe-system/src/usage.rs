use crate::{Error, Result};

/// Space and inode usage of one mounted filesystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FsUsage {
    pub total_bytes: u64,
    pub used_bytes: u64,
    pub free_bytes: u64,
    pub inodes_total: u64,
    pub inodes_used: u64,
    pub inodes_free: u64,
}

impl FsUsage {
    pub fn used_percent(&self) -> f64 {
        percent(self.used_bytes, self.total_bytes)
    }

    pub fn inodes_used_percent(&self) -> f64 {
        percent(self.inodes_used, self.inodes_total)
    }

    /// Whether the filesystem reports inode counts at all. Some filesystems
    /// (vfat, btrfs in places) expose zero totals.
    pub fn has_inodes(&self) -> bool {
        self.inodes_total > 0
    }
}

fn percent(used: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    used as f64 / total as f64 * 100.0
}

/// Inspect a mount point with statvfs.
///
/// Byte figures are denominated in the fragment size when the filesystem
/// reports one; `f_bsize` is only a fallback.
#[cfg(unix)]
pub fn inspect_usage(mount_point: &str) -> Result<FsUsage> {
    use nix::sys::statvfs::statvfs;

    let stats = statvfs(mount_point)
        .map_err(|e| Error::Statvfs(mount_point.to_string(), e.to_string()))?;

    let fragment_size = stats.fragment_size() as u64;
    let block_size = if fragment_size > 0 {
        fragment_size
    } else {
        stats.block_size() as u64
    };

    let total_blocks = stats.blocks() as u64;
    let free_blocks = stats.blocks_free() as u64;
    let used_blocks = total_blocks.saturating_sub(free_blocks);

    let inodes_total = stats.files() as u64;
    let inodes_free = stats.files_free() as u64;

    Ok(FsUsage {
        total_bytes: total_blocks * block_size,
        used_bytes: used_blocks * block_size,
        free_bytes: free_blocks * block_size,
        inodes_total,
        inodes_used: inodes_total.saturating_sub(inodes_free),
        inodes_free,
    })
}

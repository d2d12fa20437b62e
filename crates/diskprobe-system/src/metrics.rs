use crate::FsUsage;
use chrono::Utc;

/// Graphite metric paths cannot carry slashes: `/` becomes `root`, the
/// leading slash is dropped, and inner slashes turn into underscores
/// (`/var/log` -> `var_log`).
pub fn sanitize_mount(mount_point: &str) -> String {
    if mount_point == "/" {
        return "root".to_string();
    }
    mount_point
        .strip_prefix('/')
        .unwrap_or(mount_point)
        .replace('/', "_")
}

/// Current Unix time, captured once per run so every line in one emission
/// shares a timestamp.
pub fn metric_timestamp() -> i64 {
    Utc::now().timestamp()
}

/// Graphite plaintext lines for the usage emitter: byte figures, used
/// percentage, and inode figures. Inode counts are emitted even when the
/// filesystem reports none; only the percentage needs a nonzero total.
pub fn usage_lines(scheme: &str, mount_point: &str, usage: &FsUsage, timestamp: i64) -> Vec<String> {
    let mount = sanitize_mount(mount_point);
    let mut lines = vec![
        format!("{}.{}.used_bytes {} {}", scheme, mount, usage.used_bytes, timestamp),
        format!("{}.{}.total_bytes {} {}", scheme, mount, usage.total_bytes, timestamp),
        format!("{}.{}.free_bytes {} {}", scheme, mount, usage.free_bytes, timestamp),
        format!(
            "{}.{}.used_percent {:.2} {}",
            scheme,
            mount,
            usage.used_percent(),
            timestamp
        ),
        format!("{}.{}.inodes_used {} {}", scheme, mount, usage.inodes_used, timestamp),
        format!("{}.{}.inodes_total {} {}", scheme, mount, usage.inodes_total, timestamp),
        format!("{}.{}.inodes_free {} {}", scheme, mount, usage.inodes_free, timestamp),
    ];
    if usage.has_inodes() {
        lines.push(format!(
            "{}.{}.inodes_used_percent {:.2} {}",
            scheme,
            mount,
            usage.inodes_used_percent(),
            timestamp
        ));
    }
    lines
}

/// Graphite plaintext lines for the capacity emitter: megabyte figures and
/// the used percentage.
pub fn capacity_lines(
    scheme: &str,
    mount_point: &str,
    usage: &FsUsage,
    timestamp: i64,
) -> Vec<String> {
    let mount = sanitize_mount(mount_point);
    vec![
        format!("{}.{}.used_mb {} {}", scheme, mount, to_mb(usage.used_bytes), timestamp),
        format!("{}.{}.total_mb {} {}", scheme, mount, to_mb(usage.total_bytes), timestamp),
        format!("{}.{}.free_mb {} {}", scheme, mount, to_mb(usage.free_bytes), timestamp),
        format!(
            "{}.{}.used_percent {:.2} {}",
            scheme,
            mount,
            usage.used_percent(),
            timestamp
        ),
    ]
}

fn to_mb(bytes: u64) -> u64 {
    bytes / 1024 / 1024
}

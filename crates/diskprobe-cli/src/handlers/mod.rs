pub mod disk_usage;
pub mod fstab_mounts;
pub mod metrics;
pub mod smart;

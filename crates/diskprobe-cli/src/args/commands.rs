use super::common::{FilterArgs, SmartArgs};
use clap::Subcommand;
use diskprobe_smart::{DEFAULT_LONG_TEST_INTERVAL, DEFAULT_SHORT_TEST_INTERVAL};
use diskprobe_system::FSTAB_PATH;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Run a health check probe (one verdict line, plugin exit code)")]
    Check {
        #[command(subcommand)]
        command: CheckCommand,
    },

    #[command(about = "Emit Graphite plaintext metrics")]
    Metrics {
        #[command(subcommand)]
        command: MetricsCommand,
    },
}

#[derive(Subcommand)]
pub enum CheckCommand {
    #[command(about = "SMART overall-health self-assessment (smartctl -H)")]
    SmartHealth {
        #[command(flatten)]
        smart: SmartArgs,
    },

    #[command(about = "SMART offline data collection / self-test execution status")]
    SmartStatus {
        #[command(flatten)]
        smart: SmartArgs,
    },

    #[command(about = "SMART self-test log: failed tests and test staleness")]
    SmartTests {
        #[command(flatten)]
        smart: SmartArgs,

        /// Maximum hours since the last short self-test (0 disables)
        #[arg(short = 'l', long, default_value_t = DEFAULT_SHORT_TEST_INTERVAL)]
        short_test_interval: u64,

        /// Maximum hours since the last extended self-test (0 disables)
        #[arg(short = 't', long, default_value_t = DEFAULT_LONG_TEST_INTERVAL)]
        long_test_interval: u64,
    },

    #[command(about = "Filesystem usage against warning/critical thresholds")]
    DiskUsage {
        /// Warning threshold percentage for disk usage
        #[arg(short = 'w', long)]
        warning: f64,

        /// Critical threshold percentage for disk usage
        #[arg(short = 'c', long)]
        critical: f64,

        #[command(flatten)]
        filter: FilterArgs,
    },

    #[command(about = "Every fstab filesystem is actually mounted")]
    FstabMounts {
        /// Path to the fstab file
        #[arg(short = 'f', long, default_value = FSTAB_PATH)]
        fstab_path: PathBuf,
    },
}

#[derive(Subcommand)]
pub enum MetricsCommand {
    #[command(about = "Byte and inode usage per filesystem, Graphite plaintext")]
    DiskUsage {
        /// Metric naming scheme prefix
        #[arg(short = 's', long, default_value = "disk_usage")]
        scheme: String,

        #[command(flatten)]
        filter: FilterArgs,
    },

    #[command(about = "Megabyte-denominated capacity per filesystem, Graphite plaintext")]
    DiskCapacity {
        /// Metric naming scheme prefix
        #[arg(short = 's', long, default_value = "disk_capacity")]
        scheme: String,

        #[command(flatten)]
        filter: FilterArgs,
    },
}

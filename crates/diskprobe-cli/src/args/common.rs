use clap::Args;
use diskprobe_smart::{DEFAULT_CONFIG_FILE, DEFAULT_SMARTCTL_PATH, SmartConfig};
use diskprobe_system::MountFilter;
use std::path::PathBuf;
use std::time::Duration;

/// Flags shared by the three SMART checks.
#[derive(Args, Debug)]
pub struct SmartArgs {
    /// Devices to check, comma-separated or repeated (overrides every fallback)
    #[arg(short = 'd', long, value_delimiter = ',')]
    pub devices: Vec<String>,

    /// Path to the smartctl executable
    #[arg(short = 's', long, default_value = DEFAULT_SMARTCTL_PATH)]
    pub smartctl_path: String,

    /// JSON device-list file consulted when no devices are given
    #[arg(short = 'c', long, default_value = DEFAULT_CONFIG_FILE)]
    pub config_file: PathBuf,

    /// Seconds to wait for each smartctl invocation before killing it
    #[arg(long, default_value_t = 60)]
    pub timeout: u64,
}

impl SmartArgs {
    /// Assemble the immutable engine config. Interval flags only exist on
    /// the smart-tests subcommand; the other checks pass the defaults.
    pub fn to_config(&self, short_test_interval: u64, long_test_interval: u64) -> SmartConfig {
        SmartConfig {
            devices: self.devices.clone(),
            smartctl_path: self.smartctl_path.clone(),
            config_file: self.config_file.clone(),
            short_test_interval,
            long_test_interval,
            command_timeout: Duration::from_secs(self.timeout),
        }
    }
}

/// Mount selection flags shared by the usage check and both metrics emitters.
#[derive(Args, Debug)]
pub struct FilterArgs {
    /// Mount paths to ignore, comma-separated
    #[arg(short = 'i', long, value_delimiter = ',')]
    pub ignore_paths: Vec<String>,

    /// Mount paths to include; when set, only these are checked
    #[arg(short = 'I', long, value_delimiter = ',')]
    pub include_paths: Vec<String>,

    /// Filesystem types to ignore, comma-separated
    #[arg(short = 'x', long, value_delimiter = ',')]
    pub ignore_fs_types: Vec<String>,

    /// Filesystem types to include; when set, only these are checked
    #[arg(short = 't', long, value_delimiter = ',')]
    pub include_fs_types: Vec<String>,
}

impl FilterArgs {
    pub fn to_filter(&self) -> MountFilter {
        MountFilter {
            ignore_paths: self.ignore_paths.clone(),
            include_paths: self.include_paths.clone(),
            ignore_fs_types: self.ignore_fs_types.clone(),
            include_fs_types: self.include_fs_types.clone(),
        }
    }
}

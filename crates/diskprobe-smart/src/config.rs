use std::path::PathBuf;
use std::time::Duration;

/// Default path of the JSON device-list file shared by the SMART checks.
pub const DEFAULT_CONFIG_FILE: &str = "/etc/sensu/conf.d/smart.json";

/// Default smartctl executable; resolved through PATH when not overridden.
pub const DEFAULT_SMARTCTL_PATH: &str = "smartctl";

/// Default maximum hours since the last short self-test (0 disables).
pub const DEFAULT_SHORT_TEST_INTERVAL: u64 = 24;

/// Default maximum hours since the last extended self-test (14 days, 0 disables).
pub const DEFAULT_LONG_TEST_INTERVAL: u64 = 336;

/// Default bound on a single smartctl invocation.
pub const DEFAULT_COMMAND_TIMEOUT: Duration = Duration::from_secs(60);

/// Settings for one SMART check run.
///
/// Assembled once by the caller and passed by shared reference into the
/// engine; nothing in here mutates after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmartConfig {
    /// Explicit device list; when non-empty it wins over every fallback.
    pub devices: Vec<String>,
    /// Path to the smartctl binary (invoked under sudo).
    pub smartctl_path: String,
    /// JSON device-list file consulted when no devices were given.
    pub config_file: PathBuf,
    /// Maximum hours since the last short self-test, 0 to disable.
    pub short_test_interval: u64,
    /// Maximum hours since the last extended self-test, 0 to disable.
    pub long_test_interval: u64,
    /// Bound on each smartctl invocation before the child is killed.
    pub command_timeout: Duration,
}

impl Default for SmartConfig {
    fn default() -> Self {
        Self {
            devices: Vec::new(),
            smartctl_path: DEFAULT_SMARTCTL_PATH.to_string(),
            config_file: PathBuf::from(DEFAULT_CONFIG_FILE),
            short_test_interval: DEFAULT_SHORT_TEST_INTERVAL,
            long_test_interval: DEFAULT_LONG_TEST_INTERVAL,
            command_timeout: DEFAULT_COMMAND_TIMEOUT,
        }
    }
}

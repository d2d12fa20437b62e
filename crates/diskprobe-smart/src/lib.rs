// SMART engine - device resolution, smartctl execution, report parsing
// This layer turns raw smartctl text into per-device verdicts; presentation
// and exit-code plumbing live in the CLI layer above.

pub mod config;
pub mod devices;
pub mod error;
pub mod evaluate;
pub mod exec;
pub mod fleet;
pub mod parse;

pub use config::{
    DEFAULT_COMMAND_TIMEOUT, DEFAULT_CONFIG_FILE, DEFAULT_LONG_TEST_INTERVAL,
    DEFAULT_SHORT_TEST_INTERVAL, DEFAULT_SMARTCTL_PATH, SmartConfig,
};
pub use devices::{DEV_ROOT_ENV, detect_devices, resolve_devices};
pub use error::{Error, Result};
pub use evaluate::{evaluate_health, evaluate_offline_status, evaluate_self_tests};
pub use exec::{DiagnosticOutcome, DiagnosticTool, Smartctl, UNSUPPORTED_MARKERS};
pub use fleet::{
    DeviceQueue, HEALTH_LABELS, OFFLINE_STATUS_LABELS, SELF_TEST_LABELS, check_each,
};

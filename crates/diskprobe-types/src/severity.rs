use serde::{Deserialize, Serialize};
use std::fmt;

/// Check outcome severity, in the monitoring-plugin tradition.
///
/// The ordering is total and intentional: `Ok < Warning < Critical`, so
/// aggregating a fleet of per-device results is a plain `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Ok,
    Warning,
    Critical,
}

impl Severity {
    /// Process exit status understood by monitoring schedulers
    /// (OK=0, WARNING=1, CRITICAL=2).
    pub fn exit_code(self) -> i32 {
        match self {
            Severity::Ok => 0,
            Severity::Warning => 1,
            Severity::Critical => 2,
        }
    }
}

impl Default for Severity {
    fn default() -> Self {
        Severity::Ok
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = match self {
            Severity::Ok => "OK",
            Severity::Warning => "WARNING",
            Severity::Critical => "CRITICAL",
        };
        write!(f, "{}", keyword)
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Severity;

/// Everything one check learned about a single device.
///
/// Reasons accumulate; the severity only escalates. A device that produced
/// three findings keeps all three strings even though the fleet line may
/// surface only the dominant ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceVerdict {
    pub device: String,
    pub severity: Severity,
    pub reasons: Vec<String>,
}

impl DeviceVerdict {
    pub fn ok(device: impl Into<String>) -> Self {
        Self {
            device: device.into(),
            severity: Severity::Ok,
            reasons: Vec::new(),
        }
    }

    /// Record a finding, escalating the device severity if needed.
    pub fn record(&mut self, severity: Severity, reason: impl Into<String>) {
        self.severity = self.severity.max(severity);
        self.reasons.push(reason.into());
    }
}

/// The one-line result of a whole check run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunVerdict {
    pub severity: Severity,
    pub message: String,
}

impl RunVerdict {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }

    pub fn ok(message: impl Into<String>) -> Self {
        Self::new(Severity::Ok, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    pub fn critical(message: impl Into<String>) -> Self {
        Self::new(Severity::Critical, message)
    }
}

impl fmt::Display for RunVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.severity, self.message)
    }
}

/// Render findings as `[a, b, c]` for the fleet line.
pub fn bracketed(items: &[String]) -> String {
    format!("[{}]", items.join(", "))
}

use crate::parse::health::{HealthReading, parse_health_summary};
use crate::parse::selftest::parse_self_test_log;
use crate::parse::status::{StatusClass, classify_status_phrase, extract_status_phrase};
use crate::{DiagnosticOutcome, DiagnosticTool, SmartConfig};
use diskprobe_types::{DeviceVerdict, Severity};

/// Where a device landed before its report could be parsed.
///
/// Every check walks the same gate: unsupported devices are a warning and
/// nothing stronger, command failures are critical, and only a usable
/// outcome reaches the check-specific parsing.
enum Gate {
    /// A marker substring was seen: the device cannot do SMART, whatever
    /// else the output says.
    Unsupported,
    /// The tool itself failed (spawn error, timeout, non-zero exit) without
    /// unsupported markers.
    CommandError(String),
    /// Output is usable; parsing may proceed.
    Evaluate(String),
}

fn gate(outcome: DiagnosticOutcome) -> Gate {
    if outcome.unsupported() {
        return Gate::Unsupported;
    }
    if outcome.command_failed {
        return Gate::CommandError(outcome.failure_detail().to_string());
    }
    Gate::Evaluate(outcome.output)
}

/// Overall-health check for one device (`smartctl -H`).
pub fn evaluate_health(tool: &dyn DiagnosticTool, device: &str) -> DeviceVerdict {
    let mut verdict = DeviceVerdict::ok(device);
    match gate(tool.health_summary(device)) {
        Gate::Unsupported => {
            verdict.record(Severity::Warning, format!("{}: SMART not supported", device));
        }
        Gate::CommandError(detail) => {
            verdict.record(Severity::Critical, format!("{}: {}", device, detail));
        }
        Gate::Evaluate(output) => match parse_health_summary(&output) {
            HealthReading::Passed => {}
            HealthReading::Failed => {
                verdict.record(
                    Severity::Critical,
                    format!("{}: SMART health check FAILED", device),
                );
            }
            HealthReading::Unknown => {
                verdict.record(Severity::Warning, format!("{}: Unknown SMART status", device));
            }
        },
    }
    verdict
}

/// Offline-test status check for one device (`smartctl -a`).
pub fn evaluate_offline_status(tool: &dyn DiagnosticTool, device: &str) -> DeviceVerdict {
    let mut verdict = DeviceVerdict::ok(device);
    match gate(tool.full_report(device)) {
        Gate::Unsupported => {
            verdict.record(Severity::Warning, format!("{}: SMART not supported", device));
        }
        Gate::CommandError(detail) => {
            verdict.record(Severity::Critical, format!("{}: {}", device, detail));
        }
        Gate::Evaluate(output) => match extract_status_phrase(&output) {
            None => {
                verdict.record(
                    Severity::Warning,
                    format!("{}: No offline test status found", device),
                );
            }
            Some(phrase) => match classify_status_phrase(&phrase) {
                StatusClass::Clean => {}
                StatusClass::Failed => {
                    verdict.record(Severity::Critical, format!("{}: {}", device, phrase));
                }
                StatusClass::Indeterminate => {
                    verdict.record(Severity::Warning, format!("{}: {}", device, phrase));
                }
            },
        },
    }
    verdict
}

/// Self-test log check for one device (`smartctl -a`): failed tests are
/// critical and preempt the staleness warnings; an interval of 0 disables
/// that kind's staleness check.
pub fn evaluate_self_tests(
    tool: &dyn DiagnosticTool,
    config: &SmartConfig,
    device: &str,
) -> DeviceVerdict {
    let mut verdict = DeviceVerdict::ok(device);
    match gate(tool.full_report(device)) {
        Gate::Unsupported => {
            verdict.record(Severity::Warning, format!("{}: SMART not supported", device));
        }
        Gate::CommandError(detail) => {
            verdict.record(Severity::Critical, format!("{}: {}", device, detail));
        }
        Gate::Evaluate(output) => {
            let summary = parse_self_test_log(&output);

            if !summary.failures.is_empty() {
                verdict.record(
                    Severity::Critical,
                    format!("{}: Tests failed: {}", device, summary.failures.join(", ")),
                );
                return verdict;
            }

            if config.short_test_interval > 0 && summary.short_test_age > config.short_test_interval
            {
                verdict.record(
                    Severity::Warning,
                    format!(
                        "{}: Short test not run in {} hours (threshold: {})",
                        device, summary.short_test_age, config.short_test_interval
                    ),
                );
            }

            if config.long_test_interval > 0 && summary.long_test_age > config.long_test_interval {
                verdict.record(
                    Severity::Warning,
                    format!(
                        "{}: Extended test not run in {} hours (threshold: {})",
                        device, summary.long_test_age, config.long_test_interval
                    ),
                );
            }
        }
    }
    verdict
}

use crate::{DeviceVerdict, RunVerdict, Severity, bracketed};

/// Message frames for one check: the text before the finding list at each
/// non-OK level, and the fixed all-clear sentence.
#[derive(Debug, Clone, Copy)]
pub struct CheckLabels {
    pub critical: &'static str,
    pub warning: &'static str,
    pub all_ok: &'static str,
}

/// Fold per-device verdicts into the one-line fleet result.
///
/// Fleet severity is the max over device severities. The message lists the
/// reasons of the devices sitting at that dominant severity, in the order the
/// devices were resolved; findings from calmer devices are dropped from the
/// line (they were still recorded on their verdicts).
pub fn aggregate_verdicts(verdicts: &[DeviceVerdict], labels: &CheckLabels) -> RunVerdict {
    let severity = verdicts
        .iter()
        .map(|v| v.severity)
        .max()
        .unwrap_or(Severity::Ok);

    match severity {
        Severity::Ok => RunVerdict::ok(labels.all_ok),
        Severity::Warning => {
            let findings = reasons_at(verdicts, Severity::Warning);
            RunVerdict::warning(format!("{}: {}", labels.warning, bracketed(&findings)))
        }
        Severity::Critical => {
            let findings = reasons_at(verdicts, Severity::Critical);
            RunVerdict::critical(format!("{}: {}", labels.critical, bracketed(&findings)))
        }
    }
}

fn reasons_at(verdicts: &[DeviceVerdict], severity: Severity) -> Vec<String> {
    verdicts
        .iter()
        .filter(|v| v.severity == severity)
        .flat_map(|v| v.reasons.iter().cloned())
        .collect()
}

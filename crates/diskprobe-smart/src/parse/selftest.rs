use crate::parse::indicates_failure;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// Sentinel age for a test kind never seen in the log. It deliberately
/// participates in staleness comparison, so a device with no recorded short
/// test still trips the short-interval warning.
pub const UNKNOWN_AGE_HOURS: u64 = 999_999;

/// Rows are only recognized after a line carrying this marker.
const LOG_SECTION_MARKER: &str = "Self-test Log";

static LOG_ROW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"#\s+\d+\s+(Short|Extended|Long)\s+\w+\s+(.*?)\s+\d+%\s+(\d+)").unwrap()
});

/// One recognized row of the self-test log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogRow {
    /// Kind token as printed: `Short`, `Extended`, or `Long`.
    pub kind: String,
    /// Free-form status text between the kind and the remaining-percent column.
    pub status: String,
    /// Device power-on hours at which the test ran.
    pub power_on_hours: u64,
}

/// Digest of a device's self-test log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelfTestSummary {
    /// `<kind> test at <hours> hours` for every failed row, in log order.
    pub failures: Vec<String>,
    /// Power-on hours of the newest clean short test, or the sentinel.
    pub short_test_age: u64,
    /// Power-on hours of the newest clean extended/long test, or the sentinel.
    pub long_test_age: u64,
}

impl Default for SelfTestSummary {
    fn default() -> Self {
        Self {
            failures: Vec::new(),
            short_test_age: UNKNOWN_AGE_HOURS,
            long_test_age: UNKNOWN_AGE_HOURS,
        }
    }
}

/// Failure heuristic for one log row.
///
/// The log's all-clear spelling ("Completed without error") itself contains
/// the word "error", so it is exempted before the keyword scan runs.
pub fn row_indicates_failure(status: &str) -> bool {
    if status.eq_ignore_ascii_case("completed without error") {
        return false;
    }
    indicates_failure(status)
}

/// Parse the self-test log section of a full report.
///
/// The log prints newest entries first; ages are the minimum power-on hours
/// per kind over clean rows, which is the most recent run either way. `Long`
/// rows share the extended age. Failed rows go to `failures` and never
/// advance an age.
///
/// The ages are power-on hours straight from the log, not wall-clock hours;
/// staleness thresholds are compared against them as-is.
pub fn parse_self_test_log(output: &str) -> SelfTestSummary {
    let mut summary = SelfTestSummary::default();
    let mut in_log = false;

    for line in output.lines() {
        if line.contains(LOG_SECTION_MARKER) {
            in_log = true;
            continue;
        }
        if !in_log {
            continue;
        }

        let Some(row) = parse_log_row(line) else {
            continue;
        };

        if row_indicates_failure(&row.status) {
            summary
                .failures
                .push(format!("{} test at {} hours", row.kind, row.power_on_hours));
            continue;
        }

        match row.kind.as_str() {
            "Short" => {
                summary.short_test_age = summary.short_test_age.min(row.power_on_hours);
            }
            "Extended" | "Long" => {
                summary.long_test_age = summary.long_test_age.min(row.power_on_hours);
            }
            _ => {}
        }
    }

    summary
}

/// Recognize one log row, e.g.
/// `# 1  Short offline       Completed without error       00%     12345         -`
pub fn parse_log_row(line: &str) -> Option<LogRow> {
    let captures = LOG_ROW.captures(line)?;
    Some(LogRow {
        kind: captures.get(1)?.as_str().to_string(),
        status: captures.get(2)?.as_str().trim().to_string(),
        power_on_hours: captures.get(3)?.as_str().parse().unwrap_or(0),
    })
}

use crate::parse::indicates_failure;
use regex::Regex;
use std::sync::LazyLock;

static OFFLINE_COLLECTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)offline data collection status:\s*\(([^)]+)\)").unwrap());

static SELF_TEST_EXECUTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Self-test execution status:\s*\(([^)]+)\)").unwrap());

/// Pull the offline-test status phrase out of a full report.
///
/// The offline data collection line is preferred; the self-test execution
/// line is only consulted when the first label is absent. The captured text
/// is whitespace-trimmed. `None` means neither label appeared.
pub fn extract_status_phrase(output: &str) -> Option<String> {
    for pattern in [&OFFLINE_COLLECTION, &SELF_TEST_EXECUTION] {
        if let Some(phrase) = pattern
            .captures(output)
            .and_then(|captures| captures.get(1))
            .map(|m| m.as_str().trim().to_string())
        {
            return Some(phrase);
        }
    }
    None
}

/// How an extracted status phrase should be judged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    Clean,
    Failed,
    Indeterminate,
}

/// Judge a status phrase.
///
/// The two all-clear spellings are matched exactly; any other phrase with
/// fail/error wording is a failure, and the rest are indeterminate
/// (warning-worthy, not critical).
pub fn classify_status_phrase(phrase: &str) -> StatusClass {
    match phrase {
        "completed without error" | "was completed without error" => StatusClass::Clean,
        other if indicates_failure(other) => StatusClass::Failed,
        _ => StatusClass::Indeterminate,
    }
}

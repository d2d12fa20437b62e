/// What the overall-health self-assessment said about a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthReading {
    Passed,
    Failed,
    Unknown,
}

/// Classify a `-H` summary.
///
/// `PASSED` anywhere in the output wins outright; otherwise `FAILING_NOW` or
/// `FAILED` mean the drive is failing; with neither marker the status is
/// unknown. Markers are case-sensitive substrings of the whole blob.
pub fn parse_health_summary(output: &str) -> HealthReading {
    if output.contains("PASSED") {
        HealthReading::Passed
    } else if output.contains("FAILING_NOW") || output.contains("FAILED") {
        HealthReading::Failed
    } else {
        HealthReading::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passed_summary_reads_healthy() {
        let output = "=== START OF READ SMART DATA SECTION ===\n\
                      SMART overall-health self-assessment test result: PASSED\n";
        assert_eq!(parse_health_summary(output), HealthReading::Passed);
    }

    #[test]
    fn failed_summary_reads_failing() {
        let output = "SMART overall-health self-assessment test result: FAILED!\n\
                      Drive failure expected in less than 24 hours.\n";
        assert_eq!(parse_health_summary(output), HealthReading::Failed);
    }

    #[test]
    fn failing_now_attribute_reads_failing() {
        let output = "ID# ATTRIBUTE_NAME     FLAG   WHEN_FAILED\n\
                        5 Reallocated_Sector_Ct 0x0033 FAILING_NOW\n";
        assert_eq!(parse_health_summary(output), HealthReading::Failed);
    }

    #[test]
    fn passed_has_precedence_over_failure_markers() {
        let output = "test result: PASSED\nolder event: self-test FAILED at hour 12\n";
        assert_eq!(parse_health_summary(output), HealthReading::Passed);
    }

    #[test]
    fn output_without_markers_is_unknown() {
        let output = "smartctl 7.4 2023-08-01 r5530\nCopyright (C) 2002-23\n";
        assert_eq!(parse_health_summary(output), HealthReading::Unknown);
    }

    #[test]
    fn markers_are_case_sensitive() {
        assert_eq!(parse_health_summary("result: passed\n"), HealthReading::Unknown);
    }
}

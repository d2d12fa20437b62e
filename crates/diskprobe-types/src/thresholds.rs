use std::fmt;

/// Validated warning/critical percentage pair for usage-style checks.
///
/// Both bounds are percentages in (0, 100]; warning must sit strictly below
/// critical. Construction is the only way in, so a held value is always
/// coherent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    warning: f64,
    critical: f64,
}

/// Why a warning/critical pair was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThresholdError {
    WarningNotPositive,
    CriticalNotPositive,
    WarningNotBelowCritical,
}

impl fmt::Display for ThresholdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThresholdError::WarningNotPositive => {
                write!(f, "--warning is required and must be greater than 0")
            }
            ThresholdError::CriticalNotPositive => {
                write!(f, "--critical is required and must be greater than 0")
            }
            ThresholdError::WarningNotBelowCritical => {
                write!(f, "--warning must be less than --critical")
            }
        }
    }
}

impl std::error::Error for ThresholdError {}

impl Thresholds {
    pub fn new(warning: f64, critical: f64) -> Result<Self, ThresholdError> {
        if critical <= 0.0 {
            return Err(ThresholdError::CriticalNotPositive);
        }
        if warning <= 0.0 {
            return Err(ThresholdError::WarningNotPositive);
        }
        if warning >= critical {
            return Err(ThresholdError::WarningNotBelowCritical);
        }
        Ok(Self { warning, critical })
    }

    pub fn warning(&self) -> f64 {
        self.warning
    }

    pub fn critical(&self) -> f64 {
        self.critical
    }

    /// Judge a usage percentage against the pair.
    pub fn classify(&self, used_percent: f64) -> crate::Severity {
        if used_percent >= self.critical {
            crate::Severity::Critical
        } else if used_percent >= self.warning {
            crate::Severity::Warning
        } else {
            crate::Severity::Ok
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Severity;

    #[test]
    fn valid_pair_classifies_by_band() {
        let thresholds = Thresholds::new(85.0, 95.0).unwrap();
        assert_eq!(thresholds.classify(50.0), Severity::Ok);
        assert_eq!(thresholds.classify(85.0), Severity::Warning);
        assert_eq!(thresholds.classify(94.99), Severity::Warning);
        assert_eq!(thresholds.classify(95.0), Severity::Critical);
    }

    #[test]
    fn critical_is_validated_before_warning() {
        assert_eq!(
            Thresholds::new(0.0, 0.0).unwrap_err(),
            ThresholdError::CriticalNotPositive
        );
        assert_eq!(
            Thresholds::new(0.0, 95.0).unwrap_err(),
            ThresholdError::WarningNotPositive
        );
    }

    #[test]
    fn warning_must_sit_below_critical() {
        assert_eq!(
            Thresholds::new(95.0, 95.0).unwrap_err(),
            ThresholdError::WarningNotBelowCritical
        );
        assert_eq!(
            Thresholds::new(96.0, 95.0).unwrap_err(),
            ThresholdError::WarningNotBelowCritical
        );
    }

    #[test]
    fn error_messages_name_the_flag() {
        assert_eq!(
            ThresholdError::WarningNotBelowCritical.to_string(),
            "--warning must be less than --critical"
        );
    }
}

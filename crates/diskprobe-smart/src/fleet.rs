use diskprobe_types::{CheckLabels, DeviceVerdict};
use std::collections::VecDeque;

/// Frames for the overall-health check.
pub const HEALTH_LABELS: CheckLabels = CheckLabels {
    critical: "SMART health failures",
    warning: "SMART warnings",
    all_ok: "All SMART health checks passed",
};

/// Frames for the offline-test status check.
pub const OFFLINE_STATUS_LABELS: CheckLabels = CheckLabels {
    critical: "SMART offline test failures",
    warning: "SMART offline test warnings",
    all_ok: "All SMART offline tests completed successfully",
};

/// Frames for the self-test log check.
pub const SELF_TEST_LABELS: CheckLabels = CheckLabels {
    critical: "SMART test failures",
    warning: "SMART test interval warnings",
    all_ok: "All SMART tests passed and within time intervals",
};

/// Devices waiting to be checked.
///
/// Checking is strictly sequential: the queue hands out one device at a
/// time, in resolution order, and holds no other iteration state.
#[derive(Debug)]
pub struct DeviceQueue {
    pending: VecDeque<String>,
}

impl DeviceQueue {
    pub fn new(devices: Vec<String>) -> Self {
        Self {
            pending: devices.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl Iterator for DeviceQueue {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.pending.pop_front()
    }
}

/// Run one check across the fleet, draining the queue one device at a time.
pub fn check_each<F>(devices: Vec<String>, mut check: F) -> Vec<DeviceVerdict>
where
    F: FnMut(&str) -> DeviceVerdict,
{
    let mut verdicts = Vec::new();
    for device in DeviceQueue::new(devices) {
        verdicts.push(check(&device));
    }
    verdicts
}

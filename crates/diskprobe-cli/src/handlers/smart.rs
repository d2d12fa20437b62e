use crate::output;
use anyhow::Result;
use diskprobe_smart::{
    Error as SmartError, HEALTH_LABELS, OFFLINE_STATUS_LABELS, SELF_TEST_LABELS, SmartConfig,
    Smartctl, check_each, evaluate_health, evaluate_offline_status, evaluate_self_tests,
    resolve_devices,
};
use diskprobe_types::{CheckLabels, DeviceVerdict, RunVerdict, Severity, aggregate_verdicts};

pub fn handle_health(config: &SmartConfig, verbose: bool) -> Result<Severity> {
    run_check(config, verbose, &HEALTH_LABELS, |tool, device| {
        evaluate_health(tool, device)
    })
}

pub fn handle_status(config: &SmartConfig, verbose: bool) -> Result<Severity> {
    run_check(config, verbose, &OFFLINE_STATUS_LABELS, |tool, device| {
        evaluate_offline_status(tool, device)
    })
}

pub fn handle_tests(config: &SmartConfig, verbose: bool) -> Result<Severity> {
    run_check(config, verbose, &SELF_TEST_LABELS, |tool, device| {
        evaluate_self_tests(tool, config, device)
    })
}

/// Shared SMART check skeleton: resolve the fleet, drain it one device at a
/// time, aggregate, print. Failing to resolve any devices is a
/// configuration problem (WARNING), not a detected fault.
fn run_check<F>(
    config: &SmartConfig,
    verbose: bool,
    labels: &CheckLabels,
    evaluate: F,
) -> Result<Severity>
where
    F: Fn(&Smartctl, &str) -> DeviceVerdict,
{
    let devices = match resolve_devices(config) {
        Ok(devices) => devices,
        Err(err @ SmartError::NoDevices) => {
            let verdict = RunVerdict::warning(err.to_string());
            output::print_verdict(&verdict);
            return Ok(verdict.severity);
        }
    };

    let tool = Smartctl::from_config(config);
    let verdicts = check_each(devices, |device| evaluate(&tool, device));

    if verbose {
        output::print_device_detail(&verdicts);
    }

    let run = aggregate_verdicts(&verdicts, labels);
    output::print_verdict(&run);
    Ok(run.severity)
}

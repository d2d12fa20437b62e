use diskprobe_types::{DeviceVerdict, RunVerdict, Severity};
use owo_colors::OwoColorize;

/// Print the plugin line. This is the only thing a check writes to stdout.
pub fn print_verdict(verdict: &RunVerdict) {
    println!("{}", verdict);
}

/// Per-device listing for `--verbose`, written to stderr so the plugin line
/// stays alone on stdout.
pub fn print_device_detail(verdicts: &[DeviceVerdict]) {
    for verdict in verdicts {
        let marker = match verdict.severity {
            Severity::Ok => format!("{}", "✓".green().bold()),
            Severity::Warning => format!("{}", "!".yellow().bold()),
            Severity::Critical => format!("{}", "✗".red().bold()),
        };
        eprintln!("{} {} [{}]", marker, verdict.device, verdict.severity);
        for reason in &verdict.reasons {
            eprintln!("    {}", reason);
        }
    }
}

//! End-to-end runs of the SMART checks against fake smartctl scripts.

mod common;

use common::ProbeFixture;
use predicates::prelude::*;
use std::fs;

const PASSED: &str = "SMART overall-health self-assessment test result: PASSED";

#[test]
fn healthy_fleet_reports_ok() {
    let fixture = ProbeFixture::new();
    let smartctl = fixture.install_smartctl(PASSED);

    fixture
        .command()
        .args(["check", "smart-health", "-d", "/dev/sda,/dev/sdb"])
        .args(["-s", smartctl.to_str().unwrap()])
        .assert()
        .success()
        .stdout("OK - All SMART health checks passed\n");
}

#[test]
fn failing_device_is_critical_and_named_alone() {
    let fixture = ProbeFixture::new();
    let smartctl = fixture.install_script(
        "smartctl",
        "#!/bin/sh\n\
         case \"$2\" in\n\
           *sdb*) echo 'SMART overall-health self-assessment test result: FAILED!' ;;\n\
           *) echo 'SMART overall-health self-assessment test result: PASSED' ;;\n\
         esac\n",
    );

    fixture
        .command()
        .args(["check", "smart-health", "-d", "/dev/sda,/dev/sdb"])
        .args(["-s", smartctl.to_str().unwrap()])
        .assert()
        .code(2)
        .stdout(
            "CRITICAL - SMART health failures: [/dev/sdb: SMART health check FAILED]\n",
        );
}

#[test]
fn unsupported_device_warns_even_when_smartctl_exits_nonzero() {
    let fixture = ProbeFixture::new();
    let smartctl = fixture.install_script(
        "smartctl",
        "#!/bin/sh\n\
         echo '/dev/sda: Unknown USB bridge [0x2109:0x0715 (0x336)]'\n\
         echo 'Please specify device type with the -d option.'\n\
         exit 1\n",
    );

    fixture
        .command()
        .args(["check", "smart-health", "-d", "/dev/sda"])
        .args(["-s", smartctl.to_str().unwrap()])
        .assert()
        .code(1)
        .stdout("WARNING - SMART warnings: [/dev/sda: SMART not supported]\n");
}

#[test]
fn command_failure_without_markers_is_critical() {
    let fixture = ProbeFixture::new();
    let smartctl = fixture.install_script("smartctl", "#!/bin/sh\nexit 4\n");

    fixture
        .command()
        .args(["check", "smart-health", "-d", "/dev/sda"])
        .args(["-s", smartctl.to_str().unwrap()])
        .assert()
        .code(2)
        .stdout(predicate::str::starts_with(
            "CRITICAL - SMART health failures: [/dev/sda: exit status 4]",
        ));
}

#[test]
fn output_larger_than_a_pipe_buffer_neither_blocks_nor_times_out() {
    let fixture = ProbeFixture::new();
    // ~280 KiB of report text, several pipe buffers worth, before the
    // verdict line; the run must still finish well inside the timeout
    let smartctl = fixture.install_script(
        "smartctl",
        "#!/bin/sh\n\
         i=0\n\
         while [ $i -lt 4000 ]; do\n\
           echo 'Vendor Specific SMART Attributes with Thresholds: padding padding padding'\n\
           i=$((i+1))\n\
         done\n\
         echo 'SMART overall-health self-assessment test result: PASSED'\n",
    );

    fixture
        .command()
        .args(["check", "smart-health", "-d", "/dev/sda"])
        .args(["-s", smartctl.to_str().unwrap()])
        .args(["--timeout", "3"])
        .assert()
        .success()
        .stdout("OK - All SMART health checks passed\n");
}

#[test]
fn zero_resolved_devices_is_a_warning() {
    let fixture = ProbeFixture::new();
    let smartctl = fixture.install_smartctl(PASSED);

    // no explicit list, absent config file, empty device namespace
    fixture
        .command()
        .args(["check", "smart-health"])
        .args(["-s", smartctl.to_str().unwrap()])
        .args(["-c", fixture.absent_config().to_str().unwrap()])
        .assert()
        .code(1)
        .stdout("WARNING - no devices specified or detected\n");
}

#[test]
fn device_file_feeds_resolution_when_no_explicit_list() {
    let fixture = ProbeFixture::new();
    let smartctl = fixture.install_smartctl(PASSED);
    let config = fixture.path().join("smart.json");
    fs::write(&config, r#"{"devices": ["/dev/sdq"]}"#).unwrap();

    fixture
        .command()
        .args(["check", "smart-health"])
        .args(["-s", smartctl.to_str().unwrap()])
        .args(["-c", config.to_str().unwrap()])
        .assert()
        .success()
        .stdout("OK - All SMART health checks passed\n");
}

#[test]
fn auto_detection_picks_up_scratch_device_nodes() {
    let fixture = ProbeFixture::new();
    let smartctl = fixture.install_smartctl(PASSED);
    fixture.add_device("sda");

    fixture
        .command()
        .args(["check", "smart-health"])
        .args(["-s", smartctl.to_str().unwrap()])
        .args(["-c", fixture.absent_config().to_str().unwrap()])
        .assert()
        .success()
        .stdout("OK - All SMART health checks passed\n");
}

#[test]
fn clean_offline_status_reports_ok() {
    let fixture = ProbeFixture::new();
    let smartctl = fixture.install_smartctl(
        "Offline data collection status:  (completed without error)",
    );

    fixture
        .command()
        .args(["check", "smart-status", "-d", "/dev/sda"])
        .args(["-s", smartctl.to_str().unwrap()])
        .assert()
        .success()
        .stdout("OK - All SMART offline tests completed successfully\n");
}

#[test]
fn in_progress_status_warns_with_the_phrase() {
    let fixture = ProbeFixture::new();
    let smartctl =
        fixture.install_smartctl("Self-test execution status:      (   25% of test remaining)");

    fixture
        .command()
        .args(["check", "smart-status", "-d", "/dev/sda"])
        .args(["-s", smartctl.to_str().unwrap()])
        .assert()
        .code(1)
        .stdout(
            "WARNING - SMART offline test warnings: [/dev/sda: 25% of test remaining]\n",
        );
}

#[test]
fn failed_self_test_rows_are_critical() {
    let fixture = ProbeFixture::new();
    let smartctl = fixture.install_smartctl(
        "SMART Self-test Log:\n\
         # 1  Short offline       Completed: read failure       90%     120           0xbeef",
    );

    fixture
        .command()
        .args(["check", "smart-tests", "-d", "/dev/sda"])
        .args(["-s", smartctl.to_str().unwrap()])
        .assert()
        .code(2)
        .stdout(
            "CRITICAL - SMART test failures: [/dev/sda: Tests failed: Short test at 120 hours]\n",
        );
}

#[test]
fn stale_tests_warn_and_zero_intervals_disable_the_check() {
    let fixture = ProbeFixture::new();
    let smartctl = fixture.install_smartctl(
        "SMART Self-test Log:\n\
         # 1  Short offline       Completed without error       00%     5000          -\n\
         # 2  Extended offline    Completed without error       00%     4800          -",
    );

    // ages are power-on hours from the log, far above the default intervals
    fixture
        .command()
        .args(["check", "smart-tests", "-d", "/dev/sda"])
        .args(["-s", smartctl.to_str().unwrap()])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "/dev/sda: Short test not run in 5000 hours (threshold: 24)",
        ));

    fixture
        .command()
        .args(["check", "smart-tests", "-d", "/dev/sda"])
        .args(["-s", smartctl.to_str().unwrap()])
        .args(["-l", "0", "-t", "0"])
        .assert()
        .success()
        .stdout("OK - All SMART tests passed and within time intervals\n");
}

#[test]
fn verbose_detail_goes_to_stderr_not_stdout() {
    let fixture = ProbeFixture::new();
    let smartctl = fixture.install_smartctl(PASSED);

    fixture
        .command()
        .args(["check", "smart-health", "-d", "/dev/sda", "--verbose"])
        .args(["-s", smartctl.to_str().unwrap()])
        .assert()
        .success()
        .stdout("OK - All SMART health checks passed\n")
        .stderr(predicate::str::contains("/dev/sda"));
}

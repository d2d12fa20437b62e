//! Common test utilities shared across integration tests.
//!
//! Note: Clippy cannot track usage across integration test files,
//! hence the `allow(dead_code)` annotation. This is a standard pattern
//! for Rust integration test fixtures.
#![cfg(test)]
#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// One isolated probe environment: a fake `sudo` on PATH, a scratch device
/// namespace for auto-detection, and room for fake smartctl scripts.
pub struct ProbeFixture {
    temp_dir: TempDir,
    bin_dir: PathBuf,
    dev_root: PathBuf,
}

impl Default for ProbeFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl ProbeFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let bin_dir = temp_dir.path().join("bin");
        let dev_root = temp_dir.path().join("dev");
        fs::create_dir_all(&bin_dir).expect("Failed to create bin dir");
        fs::create_dir_all(&dev_root).expect("Failed to create dev root");

        let fixture = Self {
            temp_dir,
            bin_dir,
            dev_root,
        };
        // The executor always runs `sudo <smartctl> ...`; this stand-in
        // just execs its arguments
        fixture.install_script("sudo", "#!/bin/sh\nexec \"$@\"\n");
        fixture
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn dev_root(&self) -> &Path {
        &self.dev_root
    }

    /// A config-file path that does not exist, for isolating resolution.
    pub fn absent_config(&self) -> PathBuf {
        self.temp_dir.path().join("absent.json")
    }

    /// Create a device node in the scratch namespace for auto-detection.
    pub fn add_device(&self, name: &str) {
        fs::write(self.dev_root.join(name), "").expect("Failed to create device node");
    }

    /// Install an executable script and return its path.
    pub fn install_script(&self, name: &str, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;
        let path = self.bin_dir.join(name);
        fs::write(&path, body).expect("Failed to write script");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("Failed to mark script executable");
        path
    }

    /// A fake smartctl printing the same output for every device.
    pub fn install_smartctl(&self, output: &str) -> PathBuf {
        let body = format!("#!/bin/sh\ncat <<'EOF'\n{}\nEOF\n", output);
        self.install_script("smartctl", &body)
    }

    /// A `diskprobe` command wired to this fixture's PATH and device root.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("diskprobe").expect("Failed to find diskprobe binary");
        let path = std::env::var("PATH").unwrap_or_default();
        cmd.env("PATH", format!("{}:{}", self.bin_dir.display(), path));
        cmd.env("DISKPROBE_DEV_ROOT", &self.dev_root);
        cmd
    }
}

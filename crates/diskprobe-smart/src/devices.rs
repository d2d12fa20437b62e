use crate::{Error, Result, SmartConfig};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment override for the device namespace root probed during
/// auto-detection. Tests point this at a scratch directory.
pub const DEV_ROOT_ENV: &str = "DISKPROBE_DEV_ROOT";

/// Conventional device names probed when nothing else names a device.
const PROBE_CANDIDATES: [&str; 6] = ["sda", "sdb", "sdc", "sdd", "nvme0n1", "nvme1n1"];

/// Shape of the JSON device-list file: `{"devices": ["/dev/sda", ...]}`
#[derive(Debug, Deserialize)]
struct DeviceFile {
    devices: Vec<String>,
}

/// Resolve the devices a check will probe, by priority:
/// 1. Explicit list from the command line
/// 2. JSON device-list file (any problem here falls through silently)
/// 3. Auto-detection of conventional device paths
///
/// Resolution order is preserved; it is the order devices are checked and
/// reported in. A config-file problem is never itself a finding, but coming
/// up empty overall is a configuration error.
pub fn resolve_devices(config: &SmartConfig) -> Result<Vec<String>> {
    resolve_under(config, &device_root())
}

fn resolve_under(config: &SmartConfig, dev_root: &Path) -> Result<Vec<String>> {
    // Priority 1: explicit devices
    if !config.devices.is_empty() {
        return Ok(config.devices.clone());
    }

    // Priority 2: device-list file; unreadable or malformed files are skipped
    if let Some(devices) = devices_from_file(&config.config_file)
        && !devices.is_empty()
    {
        return Ok(devices);
    }

    // Priority 3: probe conventional device paths
    let detected = detect_devices_under(dev_root);
    if detected.is_empty() {
        return Err(Error::NoDevices);
    }
    Ok(detected)
}

fn devices_from_file(path: &Path) -> Option<Vec<String>> {
    let data = std::fs::read_to_string(path).ok()?;
    let parsed: DeviceFile = serde_json::from_str(&data).ok()?;
    Some(parsed.devices)
}

/// Probe the conventional device names and keep the paths that exist.
pub fn detect_devices() -> Vec<String> {
    detect_devices_under(&device_root())
}

fn detect_devices_under(root: &Path) -> Vec<String> {
    PROBE_CANDIDATES
        .iter()
        .map(|name| root.join(name))
        .filter(|path| path.exists())
        .map(|path| path.to_string_lossy().into_owned())
        .collect()
}

/// Device namespace root: `/dev` unless `DISKPROBE_DEV_ROOT` points elsewhere.
fn device_root() -> PathBuf {
    if let Ok(root) = std::env::var(DEV_ROOT_ENV) {
        return PathBuf::from(root);
    }
    PathBuf::from("/dev")
}

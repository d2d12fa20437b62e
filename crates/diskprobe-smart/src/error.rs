use std::fmt;

/// Result type for diskprobe-smart operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the SMART engine
#[derive(Debug)]
pub enum Error {
    /// Device resolution came up empty after every fallback
    NoDevices,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NoDevices => write!(f, "no devices specified or detected"),
        }
    }
}

impl std::error::Error for Error {}

use std::fmt;
use std::path::PathBuf;

/// Result type for diskprobe-system operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while inspecting mounted filesystems
#[derive(Debug)]
pub enum Error {
    /// The mount table could not be read
    Mounts(std::io::Error),
    /// The fstab file could not be read
    Fstab(PathBuf, std::io::Error),
    /// statvfs failed for a mount point
    Statvfs(String, String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Mounts(err) => write!(f, "failed to read mount table: {}", err),
            Error::Fstab(path, err) => {
                write!(f, "failed to read fstab at {}: {}", path.display(), err)
            }
            Error::Statvfs(mount, err) => {
                write!(f, "statvfs failed for {}: {}", mount, err)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Mounts(err) | Error::Fstab(_, err) => Some(err),
            Error::Statvfs(_, _) => None,
        }
    }
}

//! Error types for loading assets and configuration
//!
//! Neither error ever reaches the player: callers log them and fall back to
//! placeholders or defaults so the game stays playable.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Failure to load a sprite image
#[derive(Debug)]
pub enum AssetError {
    /// The asset file does not exist
    NotFound { path: PathBuf },
    /// The file exists but could not be read
    Io { path: PathBuf, source: io::Error },
    /// The file was read but is not a supported image
    Decode { path: PathBuf, reason: String },
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::NotFound { path } => {
                write!(f, "asset not found: {}", path.display())
            }
            AssetError::Io { path, source } => {
                write!(f, "failed to read asset {}: {}", path.display(), source)
            }
            AssetError::Decode { path, reason } => {
                write!(f, "failed to decode asset {}: {}", path.display(), reason)
            }
        }
    }
}

impl std::error::Error for AssetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AssetError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl AssetError {
    /// Map an I/O error, keeping NotFound distinct
    pub fn from_io(path: PathBuf, err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            AssetError::NotFound { path }
        } else {
            AssetError::Io { path, source: err }
        }
    }

    pub fn decode(path: PathBuf, reason: impl Into<String>) -> Self {
        AssetError::Decode {
            path,
            reason: reason.into(),
        }
    }
}

/// Failure to load or save a JSON configuration file
#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: io::Error },
    Parse { path: PathBuf, source: serde_json::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "config I/O error at {}: {}", path.display(), source)
            }
            ConfigError::Parse { path, source } => {
                write!(f, "invalid config {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
        }
    }
}

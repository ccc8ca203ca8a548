//! Error types for the menu screen and its layout file

use std::fmt;
use std::path::PathBuf;

/// Failure to load an image asset
///
/// Raised when the background image is missing or cannot be decoded.
/// The menu screen cannot exist without it, so callers should treat
/// this as fatal for the screen.
#[derive(Debug, Clone, PartialEq)]
pub enum AssetError {
    Load { path: PathBuf, reason: String },
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::Load { path, reason } => {
                write!(f, "Failed to load {}: {}", path.display(), reason)
            }
        }
    }
}

impl std::error::Error for AssetError {}

impl From<AssetError> for String {
    fn from(error: AssetError) -> Self {
        error.to_string()
    }
}

/// Errors that can occur while reading a layout file
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ParseError(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Layout parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::IoError(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::ParseError(err)
    }
}

impl From<ConfigError> for String {
    fn from(error: ConfigError) -> Self {
        error.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_error_message_names_path() {
        let error = AssetError::Load {
            path: PathBuf::from("assets/logo.png"),
            reason: "file not found".to_string(),
        };
        let message: String = error.into();
        assert!(message.contains("assets/logo.png"));
        assert!(message.contains("file not found"));
    }

    #[test]
    fn test_config_error_from_serde() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = ConfigError::from(parse_err);
        assert!(matches!(error, ConfigError::ParseError(_)));
        assert!(error.to_string().starts_with("Layout parse error"));
    }
}

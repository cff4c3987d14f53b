//! Error types for newsfile

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using NewsfileError
pub type Result<T> = std::result::Result<T, NewsfileError>;

/// Main error type for newsfile operations
#[derive(Debug, Error)]
pub enum NewsfileError {
    /// Configuration-related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Git-related errors
    #[error(transparent)]
    Git(#[from] GitError),

    /// Version-related errors
    #[error(transparent)]
    Version(#[from] VersionError),

    /// Fragment-related errors
    #[error(transparent)]
    Fragment(#[from] FragmentError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {message}")]
    InvalidValue { field: String, message: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// IO error
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

/// Git-related errors
#[derive(Debug, Error)]
pub enum GitError {
    /// Not a git repository
    #[error("Not a git repository: {0}")]
    NotARepository(PathBuf),

    /// Failed to open repository
    #[error("Failed to open repository: {0}")]
    OpenFailed(String),

    /// Repository has no working directory
    #[error("Repository has no working directory")]
    BareRepository,

    /// Revision could not be resolved
    #[error("Unknown revision: {0}")]
    UnknownRevision(String),

    /// A git subprocess exited unsuccessfully
    #[error("Command failed: {command} - {reason}")]
    CommandFailed { command: String, reason: String },

    /// Git2 library error
    #[error("Git error: {0}")]
    Git2(#[from] git2::Error),
}

/// Version-related errors
#[derive(Debug, Error)]
pub enum VersionError {
    /// The manifest still carries the last published version
    #[error(
        "VERSION file contains the same version as the current NEWS.md file.\n\
         Please bump the VERSION file. Exiting..."
    )]
    Unchanged(String),

    /// The manifest is empty
    #[error("Version file {0} is empty")]
    Empty(PathBuf),

    /// The committed news file does not start with a version line
    #[error("{0} at HEAD has no version on its first line")]
    MissingPrevious(PathBuf),
}

/// Fragment-related errors
#[derive(Debug, Error)]
pub enum FragmentError {
    /// Fragment name carries no numeric identifier
    #[error("Invalid filename: {0}")]
    InvalidFilename(String),

    /// Fragment directory missing
    #[error("News directory not found at {0}")]
    DirectoryNotFound(PathBuf),

    /// Glob pattern could not be compiled
    #[error("Invalid pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unchanged_message() {
        let err = NewsfileError::from(VersionError::Unchanged("4.0.0".to_string()));
        let msg = err.to_string();
        assert!(msg.starts_with("VERSION file contains the same version"));
        assert!(msg.ends_with("Please bump the VERSION file. Exiting..."));
    }

    #[test]
    fn test_invalid_filename_message() {
        let err = FragmentError::InvalidFilename("feature-abc.md".to_string());
        assert_eq!(err.to_string(), "Invalid filename: feature-abc.md");
    }
}

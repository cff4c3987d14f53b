//! Exit codes for the CLI

use newsfile_core::error::NewsfileError;

/// Success
pub const SUCCESS: u8 = 0;

/// General error
pub const ERROR: u8 = 1;

/// VERSION still holds the last published version
pub const VERSION_UNCHANGED: u8 = 1;

/// Configuration error
pub const CONFIG_ERROR: u8 = 2;

/// Git error
pub const GIT_ERROR: u8 = 3;

/// A fragment file name carries no identifier
pub const INVALID_FRAGMENT: u8 = 5;

/// Map an error to the process exit code
pub fn for_error(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<NewsfileError>() {
        Some(NewsfileError::Version(_)) => VERSION_UNCHANGED,
        Some(NewsfileError::Fragment(_)) => INVALID_FRAGMENT,
        Some(NewsfileError::Config(_)) => CONFIG_ERROR,
        Some(NewsfileError::Git(_)) => GIT_ERROR,
        Some(NewsfileError::Io(_)) | None => ERROR,
    }
}

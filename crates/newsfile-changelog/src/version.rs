//! Next version resolution

use std::path::Path;

use tracing::{debug, info, instrument};

use newsfile_core::error::{Result, VersionError};

/// Read the version manifest, trailing whitespace stripped
pub fn read_manifest(path: &Path) -> Result<String> {
    let version = std::fs::read_to_string(path)?.trim_end().to_string();
    if version.is_empty() {
        return Err(VersionError::Empty(path.to_path_buf()).into());
    }
    debug!(path = %path.display(), version, "read version manifest");
    Ok(version)
}

/// The version a previously generated document was written for: its first line.
///
/// A document whose first line is blank was not produced by this tool and
/// is rejected rather than read as a first release.
pub fn version_from_document<'a>(path: &Path, document: &'a str) -> Result<&'a str> {
    document
        .lines()
        .next()
        .filter(|line| !line.trim().is_empty())
        .ok_or_else(|| VersionError::MissingPrevious(path.to_path_buf()).into())
}

/// Accept `next` only if it differs from the last published version
#[instrument]
pub fn resolve_next_version(next: &str, last: Option<&str>) -> Result<String> {
    if last == Some(next) {
        return Err(VersionError::Unchanged(next.to_string()).into());
    }

    info!(next, last = ?last, "resolved next version");
    Ok(next.to_string())
}

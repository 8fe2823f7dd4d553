//! Path joining and classification helpers.
//!
//! All joining here is lexical: nothing touches the filesystem except
//! [`default_root_path`] and [`absolutize`], which need the working directory.

use crate::error::ResolverError;
use path_clean::PathClean;
use std::path::{Path, PathBuf};

/// Join `segments` onto `base` the way a shell `cd` chain would.
///
/// Empty segments are skipped, an absolute segment replaces everything before
/// it, and `.` / `..` components are folded lexically.
pub fn resolve_path<I, S>(base: &Path, segments: I) -> PathBuf
where
    I: IntoIterator<Item = S>,
    S: AsRef<Path>,
{
    let mut joined = base.to_path_buf();
    for segment in segments {
        let segment = segment.as_ref();
        if segment.as_os_str().is_empty() {
            continue;
        }
        // Path::join already replaces on absolute segments
        joined = joined.join(segment);
    }
    joined.clean()
}

/// A value names a file when its final path segment contains a `.`.
pub fn is_file_uri(uri: &str) -> bool {
    uri.rsplit(|c: char| c == '/' || c == '\\')
        .next()
        .map(|last| last.contains('.'))
        .unwrap_or(false)
}

/// Canonicalized current working directory.
pub fn default_root_path() -> Result<PathBuf, ResolverError> {
    let cwd = std::env::current_dir()?;
    Ok(dunce::canonicalize(&cwd).unwrap_or(cwd))
}

/// Make `path` absolute against the working directory and normalize it.
pub fn absolutize(path: &Path) -> Result<PathBuf, ResolverError> {
    if path.is_absolute() {
        return Ok(path.clean());
    }
    Ok(default_root_path()?.join(path).clean())
}

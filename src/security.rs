use anyhow::{Result, anyhow};
use std::path::{Path, PathBuf};

/// Characters that may not appear in a sheet title used as a cache file name.
const UNSAFE_TITLE_CHARS: &[char] = &['.', '/', '\\'];

/// Why `title` cannot be joined onto the project directory as a single file
/// stem, or `None` when it can.
pub fn unsafe_title_reason(title: &str) -> Option<&'static str> {
    if title.is_empty() {
        Some("cannot be empty")
    } else if title.contains(UNSAFE_TITLE_CHARS) {
        Some("cannot contain '.', '/' or '\\'")
    } else if title.chars().any(char::is_control) {
        Some("cannot contain control characters")
    } else {
        None
    }
}

/// Canonicalize `candidate` and ensure it remains within `dir`.
///
/// If `candidate` does not exist, its parent is canonicalized and the final
/// segment re-joined, which is enough for a boundary check before a write or
/// removal.
pub fn canonicalize_within(dir: &Path, candidate: &Path) -> Result<PathBuf> {
    let dir = dir
        .canonicalize()
        .map_err(|e| anyhow!("failed to canonicalize '{}': {e}", dir.display()))?;

    let canonical_candidate = if candidate.exists() {
        candidate
            .canonicalize()
            .map_err(|e| anyhow!("'{}' could not be canonicalized: {e}", candidate.display()))?
    } else {
        let parent = candidate
            .parent()
            .ok_or_else(|| anyhow!("'{}' must have a parent directory", candidate.display()))?;
        let file_name = candidate
            .file_name()
            .ok_or_else(|| anyhow!("'{}' must include a file name", candidate.display()))?;
        parent
            .canonicalize()
            .map_err(|e| {
                anyhow!(
                    "parent of '{}' could not be canonicalized: {e}",
                    candidate.display()
                )
            })?
            .join(file_name)
    };

    if !canonical_candidate.starts_with(&dir) {
        return Err(anyhow!(
            "'{}' escapes the project directory '{}'",
            canonical_candidate.display(),
            dir.display(),
        ));
    }

    Ok(canonical_candidate)
}

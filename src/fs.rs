//! Manifest tables are replaced whole: the new contents go to a temp file beside
//! the destination, which is synced and then renamed over it.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AtomicWriteError<E> {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("write error: {0}")]
    Writer(#[source] E),
}

/// Fill a temp file through `fill` and rename it onto `dest`. When `fill` fails
/// the temp file is dropped and `dest` keeps its previous contents.
pub fn atomic_write<E>(
    dest: &Path,
    fill: impl FnOnce(&mut File) -> Result<(), E>,
) -> Result<(), AtomicWriteError<E>> {
    let dir = match dest.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut staged = NamedTempFile::new_in(dir)?;
    fill(staged.as_file_mut()).map_err(AtomicWriteError::Writer)?;
    staged.as_file_mut().flush()?;
    staged.as_file().sync_all()?;
    staged.persist(dest).map_err(|e| AtomicWriteError::Io(e.error))?;
    Ok(())
}

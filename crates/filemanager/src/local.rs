//! Local filesystem operations
//!
//! Thin pass-throughs to `std::fs`. Errors are returned untranslated so
//! callers can match on `io::ErrorKind`.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Permission bits for newly created files (`rw-r--r--`)
pub const FILE_MODE: u32 = 0o644;

/// Write `content` to `path`, creating the file or truncating an existing one
pub fn create_file(path: impl AsRef<Path>, content: &[u8]) -> io::Result<()> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), bytes = content.len(), "create_file");

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(FILE_MODE);
    }

    let mut file = options.open(path)?;
    file.write_all(content)?;
    file.flush()
}

/// Read the entire contents of `path`
pub fn read_file(path: impl AsRef<Path>) -> io::Result<Vec<u8>> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "read_file");
    fs::read(path)
}

/// Remove the file at `path`
pub fn delete_file(path: impl AsRef<Path>) -> io::Result<()> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "delete_file");
    fs::remove_file(path)
}

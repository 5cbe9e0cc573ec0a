//! MD5 digests rendered as lowercase hex.

use crate::error::Result;
use md5::{Digest, Md5};
use std::fs::File;
use std::io;
use std::path::Path;
use tracing::debug;

/// Returns the MD5 digest of `s` as 32 lowercase hex characters.
///
/// # Examples
///
/// ```rust
/// use strproc::md5_hash;
///
/// assert_eq!(md5_hash("0123456789"), "781e5e245d69b566979b86e28d23f2c7");
/// ```
#[must_use]
pub fn md5_hash(s: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(s.as_bytes());
    hex::encode(hasher.finalize())
}

/// Returns the MD5 digest of a file's contents. The file is streamed.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::Error::Io) when the file cannot be opened or
/// read.
pub fn file_md5_hash<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    debug!(path = %path.display(), "hashing file");
    let mut file = File::open(path)?;
    let mut hasher = Md5::new();
    io::copy(&mut file, &mut hasher)?;
    Ok(hex::encode(hasher.finalize()))
}

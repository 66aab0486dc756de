//! Content digest engine
//!
//! MD5 fingerprints of files and strings. Used for identity and deduplication
//! only; MD5 offers no protection against deliberately crafted collisions.

use log::{debug, error};
use md5::{Digest as _, Md5};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use super::value::Digest;
use crate::error::DigestError;

pub const MD5: &str = "md5";
pub const DEFAULT_BUFFER_SIZE: usize = 8192;
pub const MIN_BUFFER_SIZE: usize = 4096;

#[derive(Debug, Clone)]
pub struct DigestEngine {
    buffer_size: usize,
}

impl Default for DigestEngine {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

impl DigestEngine {
    /// Build an engine for the named algorithm.
    ///
    /// Fails with [`DigestError::Unavailable`] for anything but `md5`, so an
    /// unusable algorithm surfaces once at startup instead of on every call.
    pub fn new(algorithm: &str, buffer_size: usize) -> Result<Self, DigestError> {
        if !algorithm.eq_ignore_ascii_case(MD5) {
            error!("Unsupported digest algorithm: {}", algorithm);
            return Err(DigestError::Unavailable(algorithm.to_string()));
        }
        Ok(Self {
            buffer_size: buffer_size.max(1),
        })
    }

    pub fn buffer_size(&self) -> usize {
        self.buffer_size
    }

    /// Digest of a file's bytes, read in fixed-size chunks
    pub fn digest_of_file(&self, path: &Path) -> Result<Digest, DigestError> {
        let mut file =
            File::open(path).map_err(|e| DigestError::IoError(path.to_path_buf(), e))?;

        let mut hasher = Md5::new();
        let mut buffer = vec![0u8; self.buffer_size];
        let mut total = 0u64;

        loop {
            let n = match file.read(&mut buffer) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(DigestError::IoError(path.to_path_buf(), e)),
            };
            hasher.update(&buffer[..n]);
            total += n as u64;
        }

        let digest = Digest::from_bytes(&hasher.finalize());
        debug!("Digested {} ({} bytes): {}", path.display(), total, digest);
        Ok(digest)
    }

    /// Digest of a string's UTF-8 bytes
    pub fn digest_of_string(&self, value: &str) -> Digest {
        Digest::from_bytes(&Md5::digest(value.as_bytes()))
    }

    /// Check that a file's digest matches the expected one
    pub fn verify_file(&self, path: &Path, expected: &Digest) -> Result<(), DigestError> {
        let actual = self.digest_of_file(path)?;
        if &actual != expected {
            return Err(DigestError::Mismatch {
                expected: expected.to_string(),
                actual: actual.to_string(),
            });
        }
        Ok(())
    }
}

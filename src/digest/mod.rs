//! Content digests
//!
//! Computes fingerprints of file contents and strings for deduplication and
//! integrity checks.

pub mod engine;
pub mod value;

pub use engine::{DEFAULT_BUFFER_SIZE, DigestEngine, MD5, MIN_BUFFER_SIZE};
pub use value::{DIGEST_HEX_LEN, Digest};

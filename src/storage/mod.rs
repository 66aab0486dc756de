//! File system storage management
//!
//! Handles reading, writing, deleting, moving and copying files.

pub mod operations;
pub mod results;

pub use operations::FileStore;
pub use results::{FileOutcome, ReadResult};

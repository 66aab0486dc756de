pub mod classify;
pub mod commands;
pub mod config;
pub mod digest;
pub mod error;
pub mod path;
pub mod storage;
pub mod toolkit;
pub mod utils;

pub use classify::{Category, ClassificationTable, extension_of};
pub use config::FileStoreConfig;
pub use digest::{Digest, DigestEngine};
pub use error::FileStoreError;
pub use path::PathNormalizer;
pub use storage::{FileOutcome, FileStore, ReadResult};
pub use toolkit::FileToolkit;

//! Path handling
//!
//! Converts portable logical paths into host-native physical paths.

pub mod normalizer;

pub use normalizer::{LOGICAL_SEPARATOR, PathNormalizer};

//! File classification
//!
//! Maps filenames to semantic categories by their extension.

pub mod category;
mod defaults;
pub mod table;

pub use category::Category;
pub use table::{CategoryEntry, ClassificationTable, default_entries, extension_of};

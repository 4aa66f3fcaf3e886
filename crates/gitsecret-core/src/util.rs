//! Common utility functions.

pub mod data;
pub mod fs;

// Re-export commonly used items
pub use data::deep_merge;
pub use fs::{expand_path, read_bytes, write_file};

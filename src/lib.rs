//! Heuristic scanner for React component declarations.
//!
//! Walks a directory tree, filters candidate JS/TS files, and extracts
//! component-like declaration names with structural pattern rules. No
//! parsing, no semantic analysis; precision is traded for speed.

// Export modules for library usage
pub mod cli;
pub mod core;
pub mod errors;
pub mod extraction;
pub mod filters;
pub mod io;
pub mod pipeline;

// Re-export commonly used types
pub use crate::core::{FileFinding, Report};
pub use crate::errors::ScanError;
pub use crate::extraction::{extract_component_names, PATTERN_RULES};
pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
pub use crate::io::walker::FileWalker;
pub use crate::pipeline::{scan, scan_with_batch_size, DEFAULT_BATCH_SIZE};

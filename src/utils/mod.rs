//! Utility modules for common functionality
//!
//! Provides file helpers and the text encoding used by the credential file.

pub mod encoding;
pub mod fs;

pub use fs::FileSystemUtils;

//! File system utility functions
//!
//! Thin wrappers over `std::fs` that trace what they touch and attach the
//! path to any failure.

use crate::error::{Result, WorkshopError};
use std::fs;
use std::path::Path;
use tracing::{debug, instrument};

/// Utility struct for file system operations
#[derive(Debug, Clone, Copy)]
pub struct FileSystemUtils;

impl FileSystemUtils {
    /// Create a new file system utilities instance
    pub fn new() -> Self {
        Self
    }

    /// Write content to a file, truncating it or creating it.
    ///
    /// Parent directories are not created; a missing parent is an error.
    #[instrument(skip(self, contents))]
    pub fn write_file<P: AsRef<Path> + std::fmt::Debug, C: AsRef<[u8]>>(
        &self,
        path: P,
        contents: C,
    ) -> Result<()> {
        let path = path.as_ref();
        let contents = contents.as_ref();

        debug!("Writing {} bytes to {}", contents.len(), path.display());
        fs::write(path, contents).map_err(|e| WorkshopError::file_system("write", path, e))?;
        debug!("File written successfully");
        Ok(())
    }

    /// Read file contents as string
    #[instrument(skip(self))]
    pub fn read_file_to_string<P: AsRef<Path> + std::fmt::Debug>(&self, path: P) -> Result<String> {
        let path = path.as_ref();
        debug!("Reading file: {}", path.display());
        fs::read_to_string(path).map_err(|e| WorkshopError::file_system("read", path, e))
    }
}

impl Default for FileSystemUtils {
    fn default() -> Self {
        Self::new()
    }
}

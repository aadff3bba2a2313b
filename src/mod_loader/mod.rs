//! MOD File Loader Domain
//!
//! Reads module files from disk into memory. Parsing itself never touches
//! the filesystem; see [`crate::ModFile`].

pub mod loader;

pub use loader::ModFileLoader;

use crate::Result;
use std::path::Path;

/// Convenience function to read a MOD file from disk
pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    ModFileLoader::load(path)
}

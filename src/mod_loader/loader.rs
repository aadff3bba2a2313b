//! MOD File Loader
//!
//! Loads a module file completely into memory and checks that it is at
//! least large enough to hold the fixed header.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::mod_parser::{ID_OFFSET, MOD_MAGIC, PATTERN_DATA_OFFSET};
use crate::Result;

/// Loads MOD files from disk
pub struct ModFileLoader;

impl ModFileLoader {
    /// Read a MOD file into memory
    ///
    /// Only I/O errors are reported here. A file too small or with another
    /// magic is still returned so the caller gets the proper parse error.
    pub fn load(path: impl AsRef<Path>) -> Result<Vec<u8>> {
        let path = path.as_ref();
        let data = fs::read(path)?;

        debug!(path = %path.display(), size = data.len(), "read MOD file");
        if !Self::looks_like_mod(&data) {
            warn!(path = %path.display(), "file has no M.K. magic at offset 1080");
        }

        Ok(data)
    }

    /// Quick check for the `M.K.` magic without parsing the header
    pub fn looks_like_mod(data: &[u8]) -> bool {
        data.len() >= PATTERN_DATA_OFFSET && &data[ID_OFFSET..PATTERN_DATA_OFFSET] == MOD_MAGIC
    }
}

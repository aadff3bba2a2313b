//! ProTracker MOD decoder
//!
//! Decodes the fixed binary layout of classic 4-channel ProTracker modules
//! (the `M.K.` variant) from an in-memory buffer. Multi-byte fields are
//! big-endian, as on the Amiga.
//!
//! # Components
//! - [`ByteReader`]: bounds-checked cursor over an immutable byte slice
//! - [`parse_header`]: title, 31 sample descriptors, order table and magic
//! - [`compute_layout`] / [`validate_layout`]: pattern and sample offsets,
//!   expected minimum file size, advisory size issues
//! - [`decode_cell`]: the 4-byte packed pattern cell
//!
//! # Crate feature flags
//! - `loader` (default): read MOD files from disk (`mod_loader`)
//! - `report` (default): text rendering helpers (`report`)
//! - `cli` (opt-in): the `modinspect` command line tool
//!
//! # Quick start
//! ```no_run
//! use protracker_mod::ModFile;
//! let data = std::fs::read("song.mod").unwrap();
//! let module = ModFile::parse(&data).unwrap();
//! println!("{} ({} patterns)", module.header.title, module.layout.pattern_count);
//! for issue in &module.issues {
//!     println!("warning: {issue}");
//! }
//! let pattern = module.pattern(module.header.order_table[0] as usize).unwrap();
//! for (row, cells) in pattern.rows().enumerate().take(4) {
//!     println!("{row:02}: {:?}", cells);
//! }
//! ```
//!
//! ## Step by step
//! ```
//! use protracker_mod::{compute_layout, parse_header, validate_layout, ByteReader, ModError};
//! let data = vec![0u8; 1084];
//! let mut reader = ByteReader::new(&data);
//! // No "M.K." magic at offset 1080
//! match parse_header(&mut reader) {
//!     Err(ModError::UnsupportedFormat { id }) => assert_eq!(id, ""),
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```

#![warn(missing_docs)]

pub mod io; // Byte Cursor
pub mod mod_parser; // MOD Format Parsing

#[cfg(feature = "loader")]
pub mod mod_loader; // MOD File I/O
#[cfg(feature = "report")]
pub mod report; // Text Rendering

/// Error types for MOD decoding
#[derive(thiserror::Error, Debug)]
pub enum ModError {
    /// A read or seek would move past the end of the buffer
    #[error("{op}: out of range (offset {offset}, length {len}, buffer size {size})")]
    OutOfRange {
        /// Operation that failed (e.g. `"read_u16_be"`)
        op: &'static str,
        /// Cursor position or seek target of the failed request
        offset: usize,
        /// Number of bytes the request needed
        len: usize,
        /// Total buffer size
        size: usize,
    },

    /// A byte count or index that cannot describe a valid request
    #[error("{op}: invalid argument: {reason}")]
    InvalidArgument {
        /// Operation that failed
        op: &'static str,
        /// Human-readable explanation
        reason: String,
    },

    /// Magic id other than `M.K.`
    #[error("Unsupported MOD magic: \"{id}\" (expected \"M.K.\")")]
    UnsupportedFormat {
        /// The four id bytes as read (null-truncated)
        id: String,
    },

    /// IO error from the filesystem (loader only)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for MOD decoding operations
pub type Result<T> = std::result::Result<T, ModError>;

// Public API exports
pub use io::ByteReader;
pub use mod_parser::{
    compute_layout, compute_pattern_count, decode_cell, parse_header, read_pattern,
    sample_regions, validate_layout, Effect, LayoutIssue, ModCell, ModFile, ModHeader, ModLayout,
    Pattern, SampleHeader, SampleRegion,
};

#[cfg(feature = "loader")]
pub use mod_loader::load_file;

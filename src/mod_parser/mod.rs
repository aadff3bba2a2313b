//! MOD Format Parsing Domain
//!
//! Fixed-layout decoding of ProTracker `M.K.` modules:
//!
//! | Offset | Size | Field |
//! |---|---|---|
//! | 0 | 20 | title |
//! | 20 | 31 × 30 | sample headers |
//! | 950 | 1 | song length |
//! | 951 | 1 | restart position |
//! | 952 | 128 | order table |
//! | 1080 | 4 | magic id (`M.K.`) |
//! | 1084 | patterns × 1024 | pattern data |
//! | ... | Σ sample lengths × 2 | sample data |

pub mod cell;
pub mod effects;
pub mod header;
pub mod layout;
pub mod module;
pub mod pattern;

pub use cell::{decode_cell, ModCell};
pub use effects::Effect;
pub use header::{compute_pattern_count, parse_header, ModHeader, SampleHeader};
pub use layout::{
    compute_layout, sample_regions, validate_layout, LayoutIssue, ModLayout, SampleRegion,
};
pub use module::ModFile;
pub use pattern::{read_pattern, Pattern};

/// Magic id of the only supported variant
pub const MOD_MAGIC: &[u8; 4] = b"M.K.";

/// Song title field width
pub const TITLE_LEN: usize = 20;

/// Sample name field width
pub const SAMPLE_NAME_LEN: usize = 22;

/// Number of sample descriptors in the header
pub const SAMPLE_COUNT: usize = 31;

/// Bytes per sample descriptor (name, length, finetune, volume, loop start, loop length)
pub const SAMPLE_HEADER_LEN: usize = SAMPLE_NAME_LEN + 8;

/// Order table width
pub const ORDER_TABLE_LEN: usize = 128;

/// Offset of the magic id
pub const ID_OFFSET: usize = 1080;

/// First byte after the magic id
pub const PATTERN_DATA_OFFSET: usize = ID_OFFSET + MOD_MAGIC.len();

/// Channels in an `M.K.` module
pub const CHANNELS: usize = 4;

/// Packed bytes per pattern cell
pub const BYTES_PER_CELL: usize = 4;

/// Rows per pattern
pub const ROWS_PER_PATTERN: usize = 64;

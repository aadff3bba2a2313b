//! Text Rendering Domain
//!
//! Plain-text views of a parsed module for terminal inspection: hex dumps,
//! header and layout summaries, and decoded pattern cell tables.

pub mod hex;
pub mod text;

use serde::{Deserialize, Serialize};

pub use hex::{hex_dump, to_hex};
pub use text::{format_cell, render_cells, render_header, render_issues, render_layout};

/// Options controlling the inspection report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Pattern rows printed in the cell table
    pub rows_to_show: usize,
    /// Bytes covered by the hex dump (header plus the first pattern row)
    pub hex_dump_len: usize,
    /// Bytes per hex dump line
    pub hex_bytes_per_row: usize,
    /// Pattern to decode; `None` uses the first order table entry
    pub pattern: Option<usize>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            rows_to_show: 16,
            hex_dump_len: 1088,
            hex_bytes_per_row: 16,
            pattern: None,
        }
    }
}

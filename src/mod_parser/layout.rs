//! Structural layout of a MOD file
//!
//! Everything after the header is located by arithmetic on the header alone:
//! pattern data starts at 1084, is `pattern_count * 1024` bytes long, and the
//! sample bodies follow back to back in header order.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use super::header::{compute_pattern_count, ModHeader};
use super::{BYTES_PER_CELL, CHANNELS, ID_OFFSET, PATTERN_DATA_OFFSET, ROWS_PER_PATTERN};

/// Byte offsets and sizes derived from one header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModLayout {
    /// Channel count (always 4 for `M.K.`)
    pub channels: usize,
    /// Start of the header
    pub header_offset: usize,
    /// Offset of the magic id
    pub id_offset: usize,
    /// First byte of pattern data
    pub pattern_data_offset: usize,
    /// `channels * 4`
    pub bytes_per_row: usize,
    /// Rows per pattern (64)
    pub rows_per_pattern: usize,
    /// `rows_per_pattern * bytes_per_row`
    pub bytes_per_pattern: usize,
    /// Highest referenced pattern index plus one
    pub pattern_count: usize,
    /// `pattern_count * bytes_per_pattern`
    pub pattern_data_size: usize,
    /// First byte of sample data
    pub sample_data_offset: usize,
    /// Sum of all sample lengths in bytes
    pub sample_data_size: usize,
    /// `sample_data_offset + sample_data_size`
    pub expected_min_file_size: usize,
}

impl ModLayout {
    /// Offset of pattern `index` (not checked against `pattern_count`)
    pub fn pattern_offset(&self, index: usize) -> usize {
        self.pattern_data_offset + index * self.bytes_per_pattern
    }
}

/// Compute the layout for a header
///
/// Never fails: a degenerate header simply yields a degenerate layout.
/// Judging it against a real file is [`validate_layout`]'s job.
pub fn compute_layout(header: &ModHeader) -> ModLayout {
    let channels = CHANNELS;
    let bytes_per_row = channels * BYTES_PER_CELL;
    let rows_per_pattern = ROWS_PER_PATTERN;
    let bytes_per_pattern = rows_per_pattern * bytes_per_row;

    let pattern_count = compute_pattern_count(header);
    let pattern_data_size = pattern_count * bytes_per_pattern;
    let sample_data_offset = PATTERN_DATA_OFFSET + pattern_data_size;

    let sample_data_size: usize = header.samples.iter().map(|s| s.length_bytes()).sum();
    let expected_min_file_size = sample_data_offset + sample_data_size;

    debug!(
        pattern_count,
        sample_data_offset, sample_data_size, expected_min_file_size, "computed MOD layout"
    );

    ModLayout {
        channels,
        header_offset: 0,
        id_offset: ID_OFFSET,
        pattern_data_offset: PATTERN_DATA_OFFSET,
        bytes_per_row,
        rows_per_pattern,
        bytes_per_pattern,
        pattern_count,
        pattern_data_size,
        sample_data_offset,
        sample_data_size,
        expected_min_file_size,
    }
}

/// Advisory structural problem found by [`validate_layout`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LayoutIssue {
    /// File is smaller than the fixed header
    PatternDataOffsetBeyondFile {
        /// Expected start of pattern data
        pattern_data_offset: usize,
        /// Actual file size
        file_size: usize,
    },
    /// File ends inside the pattern data
    PatternDataTruncated {
        /// Expected end of pattern data
        sample_data_offset: usize,
        /// Actual file size
        file_size: usize,
    },
    /// File ends before the last expected sample byte
    SampleDataTruncated {
        /// Expected minimum file size
        expected_min_file_size: usize,
        /// Actual file size
        file_size: usize,
    },
}

impl fmt::Display for LayoutIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutIssue::PatternDataOffsetBeyondFile {
                pattern_data_offset,
                file_size,
            } => write!(
                f,
                "pattern data offset exceeds file size (offset {}, file size {})",
                pattern_data_offset, file_size
            ),
            LayoutIssue::PatternDataTruncated {
                sample_data_offset,
                file_size,
            } => write!(
                f,
                "file ends before pattern data ends (pattern data ends at {}, file size {})",
                sample_data_offset, file_size
            ),
            LayoutIssue::SampleDataTruncated {
                expected_min_file_size,
                file_size,
            } => write!(
                f,
                "file ends before expected sample data ends (expected min file size {}, file size {})",
                expected_min_file_size, file_size
            ),
        }
    }
}

/// Compare a file size against a layout
///
/// A file smaller than the header short-circuits with a single issue.
/// Otherwise truncated pattern data and truncated sample data are reported
/// independently; when the layout has no sample data the two coincide and
/// only the expected-size issue is reported. Trailing bytes are never an issue.
pub fn validate_layout(file_size: usize, layout: &ModLayout) -> Vec<LayoutIssue> {
    let mut issues = Vec::new();

    if file_size < layout.pattern_data_offset {
        issues.push(LayoutIssue::PatternDataOffsetBeyondFile {
            pattern_data_offset: layout.pattern_data_offset,
            file_size,
        });
        return issues;
    }

    // Without sample data both checks share one boundary; report it once.
    let pattern_end_distinct = layout.sample_data_offset < layout.expected_min_file_size;
    if file_size < layout.sample_data_offset && pattern_end_distinct {
        issues.push(LayoutIssue::PatternDataTruncated {
            sample_data_offset: layout.sample_data_offset,
            file_size,
        });
    }

    if file_size < layout.expected_min_file_size {
        issues.push(LayoutIssue::SampleDataTruncated {
            expected_min_file_size: layout.expected_min_file_size,
            file_size,
        });
    }

    issues
}

/// Location of one sample body inside the sample data block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SampleRegion {
    /// Sample slot (0-based, 0..31)
    pub index: usize,
    /// Absolute file offset of the first sample byte
    pub offset: usize,
    /// Length in bytes
    pub length: usize,
}

impl SampleRegion {
    /// One past the last byte
    pub fn end(&self) -> usize {
        self.offset + self.length
    }
}

/// Offsets of all sample bodies, in header order
pub fn sample_regions(header: &ModHeader, layout: &ModLayout) -> Vec<SampleRegion> {
    let mut offset = layout.sample_data_offset;
    header
        .samples
        .iter()
        .enumerate()
        .map(|(index, sample)| {
            let region = SampleRegion {
                index,
                offset,
                length: sample.length_bytes(),
            };
            offset += region.length;
            region
        })
        .collect()
}

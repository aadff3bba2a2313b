//! Whole-module view over a borrowed buffer
//!
//! Runs the fixed pipeline (reader, header, layout, size validation) once and
//! keeps the buffer for zero-copy access to patterns and sample bodies.

use tracing::{debug, warn};

use super::header::{parse_header, ModHeader};
use super::layout::{compute_layout, sample_regions, validate_layout, LayoutIssue, ModLayout};
use super::pattern::{read_pattern, Pattern};
use crate::io::ByteReader;
use crate::Result;

/// A parsed module borrowing its source bytes
#[derive(Debug, Clone)]
pub struct ModFile<'a> {
    data: &'a [u8],
    /// Parsed header
    pub header: ModHeader,
    /// Layout computed from the header
    pub layout: ModLayout,
    /// Advisory size issues (empty for a well-formed file)
    pub issues: Vec<LayoutIssue>,
}

impl<'a> ModFile<'a> {
    /// Parse a complete module buffer
    ///
    /// Header errors are fatal. Size mismatches after the header are collected
    /// in [`ModFile::issues`] instead.
    pub fn parse(data: &'a [u8]) -> Result<Self> {
        let mut reader = ByteReader::new(data);
        let header = parse_header(&mut reader)?;
        let layout = compute_layout(&header);
        let issues = validate_layout(data.len(), &layout);

        for issue in &issues {
            warn!(%issue, "MOD layout issue");
        }
        debug!(
            title = %header.title,
            patterns = layout.pattern_count,
            size = data.len(),
            "loaded MOD"
        );

        Ok(ModFile {
            data,
            header,
            layout,
            issues,
        })
    }

    /// The complete source buffer
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// File size in bytes
    pub fn file_size(&self) -> usize {
        self.data.len()
    }

    /// Pattern `index` as stored in the file
    pub fn pattern(&self, index: usize) -> Result<Pattern<'a>> {
        let mut reader = ByteReader::new(self.data);
        read_pattern(&mut reader, &self.layout, index)
    }

    /// Patterns in song order (the first `song_length` order entries)
    pub fn song_patterns(&self) -> impl Iterator<Item = Result<Pattern<'a>>> + '_ {
        self.header
            .song_positions()
            .iter()
            .map(move |&index| self.pattern(index as usize))
    }

    /// Body of sample `index` (0-based)
    ///
    /// Clamped to the end of the buffer for truncated files. `None` if the
    /// index is out of range or the sample lies entirely past the end.
    pub fn sample_data(&self, index: usize) -> Option<&'a [u8]> {
        let regions = sample_regions(&self.header, &self.layout);
        let region = regions.get(index)?;
        if region.length == 0 {
            return Some(&[]);
        }
        if region.offset >= self.data.len() {
            return None;
        }
        let end = region.end().min(self.data.len());
        Some(&self.data[region.offset..end])
    }
}

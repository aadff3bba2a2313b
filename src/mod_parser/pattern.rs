//! Pattern slicing
//!
//! A pattern is 64 rows × 4 channels × 4 bytes, stored back to back after the
//! header. Patterns are borrowed straight out of the module buffer.

use tracing::trace;

use super::cell::{decode_cell, ModCell};
use super::layout::ModLayout;
use super::{BYTES_PER_CELL, CHANNELS, ROWS_PER_PATTERN};
use crate::io::ByteReader;
use crate::{ModError, Result};

/// Bytes in one pattern row
const ROW_LEN: usize = CHANNELS * BYTES_PER_CELL;

/// Raw bytes of one pattern, borrowed from the module buffer
#[derive(Debug, Clone, Copy)]
pub struct Pattern<'a> {
    index: usize,
    data: &'a [u8],
}

impl<'a> Pattern<'a> {
    /// Pattern index within the file
    pub fn index(&self) -> usize {
        self.index
    }

    /// Raw packed pattern bytes
    pub fn bytes(&self) -> &'a [u8] {
        self.data
    }

    /// Decode all channels of `row`, `None` past the last row
    pub fn row(&self, row: usize) -> Option<[ModCell; CHANNELS]> {
        let start = row.checked_mul(ROW_LEN)?;
        let bytes = self.data.get(start..start.checked_add(ROW_LEN)?)?;
        Some(decode_row(bytes))
    }

    /// Decode a single cell
    pub fn cell(&self, row: usize, channel: usize) -> Option<ModCell> {
        if channel >= CHANNELS {
            return None;
        }
        self.row(row).map(|cells| cells[channel])
    }

    /// Iterate over all rows in order
    pub fn rows(&self) -> impl Iterator<Item = [ModCell; CHANNELS]> + 'a {
        self.data.chunks_exact(ROW_LEN).map(decode_row)
    }
}

fn decode_row(bytes: &[u8]) -> [ModCell; CHANNELS] {
    let mut cells = [ModCell::default(); CHANNELS];
    for (cell, chunk) in cells.iter_mut().zip(bytes.chunks_exact(BYTES_PER_CELL)) {
        *cell = decode_cell(chunk[0], chunk[1], chunk[2], chunk[3]);
    }
    cells
}

/// Slice pattern `index` out of the reader's buffer
///
/// Seeks to the pattern offset and reads exactly `bytes_per_pattern` bytes.
/// The cursor is left after the pattern.
///
/// # Errors
/// - [`ModError::InvalidArgument`] if `index >= layout.pattern_count`
/// - [`ModError::OutOfRange`] if the buffer ends inside the pattern
pub fn read_pattern<'a>(
    reader: &mut ByteReader<'a>,
    layout: &ModLayout,
    index: usize,
) -> Result<Pattern<'a>> {
    if index >= layout.pattern_count {
        return Err(ModError::InvalidArgument {
            op: "read_pattern",
            reason: format!(
                "pattern index {} outside 0..{}",
                index, layout.pattern_count
            ),
        });
    }

    // Work on a copy so a failed slice leaves the caller's cursor untouched
    let offset = layout.pattern_offset(index);
    let mut cursor = reader.clone();
    cursor.seek(offset)?;
    let data = cursor.read_bytes(layout.bytes_per_pattern)?;
    *reader = cursor;

    trace!(index, offset, "sliced pattern");
    debug_assert_eq!(data.len(), ROWS_PER_PATTERN * ROW_LEN);

    Ok(Pattern { index, data })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mod_parser::{compute_layout, ModHeader, SampleHeader, ORDER_TABLE_LEN};

    fn layout_with_patterns(count: u8) -> ModLayout {
        let mut order_table = [0u8; ORDER_TABLE_LEN];
        order_table[0] = count - 1;
        compute_layout(&ModHeader {
            title: String::new(),
            song_length: 1,
            restart_position: 0,
            order_table,
            id: "M.K.".to_string(),
            samples: vec![SampleHeader::default(); 31],
        })
    }

    #[test]
    fn test_read_pattern_cells() {
        let layout = layout_with_patterns(2);
        let mut data = vec![0u8; layout.expected_min_file_size];
        // pattern 1, row 3, channel 2
        let at = layout.pattern_offset(1) + 3 * 16 + 2 * 4;
        data[at..at + 4].copy_from_slice(&[0x05, 0x14, 0x3E, 0x7F]);

        let mut reader = ByteReader::new(&data);
        let pattern = read_pattern(&mut reader, &layout, 1).unwrap();
        assert_eq!(pattern.index(), 1);
        assert_eq!(pattern.bytes().len(), 1024);
        assert_eq!(reader.tell(), layout.pattern_offset(2));

        let cell = pattern.cell(3, 2).unwrap();
        assert_eq!(cell.sample, 3);
        assert_eq!(cell.period, 0x514);
        assert!(pattern.cell(3, 1).unwrap().is_empty());
        assert!(pattern.cell(3, 4).is_none());
        assert!(pattern.row(64).is_none());

        let rows: Vec<_> = pattern.rows().collect();
        assert_eq!(rows.len(), 64);
        assert_eq!(rows[3][2], cell);
    }

    #[test]
    fn test_read_pattern_index_out_of_bounds() {
        let layout = layout_with_patterns(1);
        let data = vec![0u8; layout.expected_min_file_size];
        let mut reader = ByteReader::new(&data);
        let err = read_pattern(&mut reader, &layout, 1).unwrap_err();
        assert!(matches!(err, ModError::InvalidArgument { .. }));
        assert_eq!(reader.tell(), 0);
    }

    #[test]
    fn test_read_pattern_truncated_keeps_cursor() {
        let layout = layout_with_patterns(2);
        let data = vec![0u8; layout.pattern_offset(1) + 100];
        let mut reader = ByteReader::new(&data);
        reader.seek(20).unwrap();

        assert!(read_pattern(&mut reader, &layout, 0).is_ok());
        reader.seek(20).unwrap();
        let err = read_pattern(&mut reader, &layout, 1).unwrap_err();
        assert!(matches!(err, ModError::OutOfRange { .. }));
        assert_eq!(reader.tell(), 20);
    }
}

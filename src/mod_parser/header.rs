//! MOD header parser
//!
//! The header is a fixed 1084-byte block: title, 31 sample descriptors,
//! song length, restart position, 128-entry order table and the 4-byte magic.
//! All sample sizes are stored in 16-bit words.

use serde::{Serialize, Serializer};
use tracing::debug;

use super::{MOD_MAGIC, ORDER_TABLE_LEN, SAMPLE_COUNT, SAMPLE_NAME_LEN, TITLE_LEN};
use crate::io::reader::decode_fixed_string;
use crate::io::ByteReader;
use crate::{ModError, Result};

/// One of the 31 sample descriptors
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SampleHeader {
    /// Sample name (22 bytes, null-padded)
    pub name: String,
    /// Sample length in 16-bit words
    pub length_words: u16,
    /// Finetune, low nibble is a signed 4-bit value
    pub finetune: u8,
    /// Default volume (0-64)
    pub volume: u8,
    /// Loop start in 16-bit words
    pub loop_start_words: u16,
    /// Loop length in 16-bit words
    pub loop_length_words: u16,
}

impl SampleHeader {
    /// Sample length in bytes
    pub fn length_bytes(&self) -> usize {
        self.length_words as usize * 2
    }

    /// Loop start in bytes
    pub fn loop_start_bytes(&self) -> usize {
        self.loop_start_words as usize * 2
    }

    /// Loop length in bytes
    pub fn loop_length_bytes(&self) -> usize {
        self.loop_length_words as usize * 2
    }

    /// Finetune as a signed value in -8..=7
    pub fn finetune_signed(&self) -> i8 {
        (((self.finetune & 0x0F) << 4) as i8) >> 4
    }

    /// Whether the sample loops (a loop length of 1 word means "no loop")
    pub fn has_loop(&self) -> bool {
        self.loop_length_words > 1
    }
}

/// Parsed MOD header
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModHeader {
    /// Song title (20 bytes, null-padded)
    pub title: String,
    /// Number of meaningful entries in `order_table`
    pub song_length: u8,
    /// Restart position (historically 127 in many trackers)
    pub restart_position: u8,
    /// Pattern indices in playback order
    #[serde(serialize_with = "serialize_order_table")]
    pub order_table: [u8; ORDER_TABLE_LEN],
    /// Magic id, always `M.K.` for a parsed header
    pub id: String,
    /// Exactly 31 sample descriptors in file order
    pub samples: Vec<SampleHeader>,
}

impl ModHeader {
    /// Order table entries that are part of the song
    pub fn song_positions(&self) -> &[u8] {
        let len = (self.song_length as usize).min(ORDER_TABLE_LEN);
        &self.order_table[..len]
    }
}

fn serialize_order_table<S: Serializer>(
    table: &[u8; ORDER_TABLE_LEN],
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_seq(table.iter())
}

/// Parse the MOD header
///
/// The reader must be positioned at the start of the file. On success it is
/// left at offset 1084, directly after the magic id.
///
/// # Errors
/// - [`ModError::OutOfRange`] if the buffer ends inside the header
/// - [`ModError::UnsupportedFormat`] if the magic is not exactly `M.K.`
pub fn parse_header(reader: &mut ByteReader<'_>) -> Result<ModHeader> {
    let title = reader.read_fixed_string(TITLE_LEN)?;

    let mut samples = Vec::with_capacity(SAMPLE_COUNT);
    for _ in 0..SAMPLE_COUNT {
        samples.push(SampleHeader {
            name: reader.read_fixed_string(SAMPLE_NAME_LEN)?,
            length_words: reader.read_u16_be()?,
            finetune: reader.read_u8()?,
            volume: reader.read_u8()?,
            loop_start_words: reader.read_u16_be()?,
            loop_length_words: reader.read_u16_be()?,
        });
    }

    let song_length = reader.read_u8()?;
    let restart_position = reader.read_u8()?;

    let mut order_table = [0u8; ORDER_TABLE_LEN];
    order_table.copy_from_slice(reader.read_bytes(ORDER_TABLE_LEN)?);

    let magic = reader.read_bytes(MOD_MAGIC.len())?;
    let id = decode_fixed_string(magic);
    if magic != MOD_MAGIC {
        return Err(ModError::UnsupportedFormat { id });
    }

    debug!(
        title = %title,
        song_length,
        restart_position,
        "parsed MOD header"
    );

    Ok(ModHeader {
        title,
        song_length,
        restart_position,
        order_table,
        id,
        samples,
    })
}

/// Number of patterns stored in the file
///
/// The highest pattern index among the first `song_length` order entries,
/// plus one. A song length of 0 still yields 1.
pub fn compute_pattern_count(header: &ModHeader) -> usize {
    let max = header.song_positions().iter().copied().max().unwrap_or(0);
    max as usize + 1
}

//! Hex dump formatting

/// Upper-case hex, zero-padded to at least `width` digits
pub fn to_hex(value: usize, width: usize) -> String {
    format!("{:0width$X}", value, width = width)
}

/// Classic hex dump: offset, hex bytes, ASCII column
///
/// ```text
/// 00000000  48 65 6C 6C 6F 00 00 00  00 00 00 00 00 00 00 00  Hello...........
/// ```
///
/// `base_offset` is added to the printed offsets so slices of a larger file
/// show their real position. An extra space separates the 8th and 9th byte;
/// the last line is padded so the ASCII column stays aligned.
pub fn hex_dump(bytes: &[u8], base_offset: usize, bytes_per_row: usize) -> String {
    let bytes_per_row = bytes_per_row.max(1);
    let mut lines = Vec::with_capacity(bytes.len().div_ceil(bytes_per_row));

    for (row, chunk) in bytes.chunks(bytes_per_row).enumerate() {
        let mut hex_part = String::with_capacity(bytes_per_row * 3 + 1);
        let mut ascii_part = String::with_capacity(bytes_per_row);

        for i in 0..bytes_per_row {
            match chunk.get(i) {
                Some(&b) => {
                    hex_part.push_str(&to_hex(b as usize, 2));
                    hex_part.push(' ');
                    ascii_part.push(if (32..=126).contains(&b) { b as char } else { '.' });
                }
                None => {
                    hex_part.push_str("   ");
                    ascii_part.push(' ');
                }
            }
            if i == 7 {
                hex_part.push(' ');
            }
        }

        let offset = base_offset + row * bytes_per_row;
        lines.push(format!("{}  {} {}", to_hex(offset, 8), hex_part, ascii_part));
    }

    lines.join("\n")
}

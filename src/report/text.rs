//! Header, layout and pattern tables

use std::fmt::Write;

use super::hex::to_hex;
use crate::mod_parser::{LayoutIssue, ModCell, ModHeader, ModLayout, Pattern, CHANNELS};

/// Compact cell text: `s05 p0214 eE a01`
///
/// Sample and period in decimal, effect and parameter in hex.
pub fn format_cell(cell: &ModCell) -> String {
    format!(
        "s{:02} p{:04} e{} a{}",
        cell.sample,
        cell.period,
        to_hex(cell.effect as usize, 1),
        to_hex(cell.param as usize, 2)
    )
}

/// Title, song length, id and the non-empty sample slots
pub fn render_header(header: &ModHeader) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "header:");
    let _ = writeln!(out, "  title: \"{}\"", header.title);
    let _ = writeln!(out, "  song length: {}", header.song_length);
    let _ = writeln!(out, "  restart position: {}", header.restart_position);
    let _ = writeln!(out, "  id: \"{}\"", header.id);
    let _ = writeln!(out, "  order: {:?}", header.song_positions());
    let _ = writeln!(out, "  samples:");
    for (i, sample) in header.samples.iter().enumerate() {
        if sample.length_words == 0 && sample.name.is_empty() {
            continue;
        }
        let _ = writeln!(
            out,
            "    {:2}: {:<22} len {:6} ft {:+} vol {:2} loop {}+{}",
            i + 1,
            sample.name,
            sample.length_bytes(),
            sample.finetune_signed(),
            sample.volume,
            sample.loop_start_bytes(),
            sample.loop_length_bytes()
        );
    }
    out
}

/// Layout table with a status line for `file_size`
pub fn render_layout(layout: &ModLayout, file_size: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "layout:");
    let _ = writeln!(out, "  channels: {}", layout.channels);
    let _ = writeln!(out, "  rows per pattern: {}", layout.rows_per_pattern);
    let _ = writeln!(out, "  bytes per row: {}", layout.bytes_per_row);
    let _ = writeln!(out, "  bytes per pattern: {}", layout.bytes_per_pattern);
    let _ = writeln!(out);
    let _ = writeln!(out, "  pattern count: {}", layout.pattern_count);
    let _ = writeln!(
        out,
        "  pattern data offset: {} (0x{})",
        layout.pattern_data_offset,
        to_hex(layout.pattern_data_offset, 4)
    );
    let _ = writeln!(out, "  pattern data size:   {}", layout.pattern_data_size);
    let _ = writeln!(
        out,
        "  sample data offset:  {} (0x{})",
        layout.sample_data_offset,
        to_hex(layout.sample_data_offset, 4)
    );
    let _ = writeln!(out, "  sample data size:    {}", layout.sample_data_size);
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "  expected min file size: {}",
        layout.expected_min_file_size
    );
    let status = if file_size >= layout.expected_min_file_size {
        "OK (file has enough data)"
    } else {
        "INVALID (file is smaller than expected)"
    };
    let _ = writeln!(out, "  status: {}", status);
    out
}

/// Issue list, or `issues: none`
pub fn render_issues(issues: &[LayoutIssue]) -> String {
    if issues.is_empty() {
        return "issues: none\n".to_string();
    }
    let mut out = String::from("issues:\n");
    for issue in issues {
        let _ = writeln!(out, "  - {}", issue);
    }
    out
}

/// Table of the first `rows` rows of a pattern, one column per channel
pub fn render_cells(pattern: &Pattern<'_>, rows: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "pattern {} (first {} rows):",
        pattern.index(),
        rows.min(64)
    );

    let mut heading = String::from("row ");
    let mut rule = String::from("----");
    for ch in 0..CHANNELS {
        let _ = write!(heading, " | ch{:<15}", ch);
        rule.push_str("-+-----------------");
    }
    let _ = writeln!(out, "{}", heading.trim_end());
    let _ = writeln!(out, "{}", rule);

    for (row, cells) in pattern.rows().enumerate().take(rows) {
        let columns: Vec<String> = cells.iter().map(format_cell).collect();
        let _ = writeln!(out, "{:3}  | {}", row, columns.join(" | "));
    }
    out
}

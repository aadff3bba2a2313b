mod common;

use common::{ModBuilder, HEADER_LEN};
use protracker_mod::{
    compute_layout, compute_pattern_count, decode_cell, parse_header, validate_layout,
    ByteReader, LayoutIssue, ModCell, ModError, ModFile,
};

#[test]
fn parse_leaves_cursor_after_magic() {
    let data = ModBuilder::new().title(b"space debris").build();
    let mut reader = ByteReader::new(&data);
    let header = parse_header(&mut reader).unwrap();
    assert_eq!(reader.tell(), HEADER_LEN);
    assert_eq!(header.title, "space debris");
    assert_eq!(header.id, "M.K.");
    assert_eq!(header.samples.len(), 31);
}

#[test]
fn parse_fails_on_every_short_buffer() {
    let data = ModBuilder::new().build();
    for len in (0..HEADER_LEN).step_by(7).chain([HEADER_LEN - 1]) {
        let mut reader = ByteReader::new(&data[..len]);
        match parse_header(&mut reader) {
            Err(ModError::OutOfRange { .. }) => {}
            other => panic!("length {len}: expected OutOfRange, got {other:?}"),
        }
    }
}

#[test]
fn parse_rejects_other_variants() {
    for magic in [b"4CHN", b"6CHN", b"8CHN", b"FLT4", b"M!K!"] {
        let data = ModBuilder::new().magic(magic).build();
        let err = parse_header(&mut ByteReader::new(&data)).unwrap_err();
        assert!(matches!(err, ModError::UnsupportedFormat { .. }));
        assert!(err.to_string().contains("expected \"M.K.\""));
    }
}

#[test]
fn pattern_count_examples() {
    let data = ModBuilder::new().order(&[5, 2, 9, 0, 0]).song_length(3).build();
    let header = parse_header(&mut ByteReader::new(&data)).unwrap();
    assert_eq!(compute_pattern_count(&header), 10);

    let data = ModBuilder::new().order(&[7]).song_length(0).build();
    let header = parse_header(&mut ByteReader::new(&data)).unwrap();
    assert_eq!(compute_pattern_count(&header), 1);
}

#[test]
fn minimal_layout_and_validation() {
    let data = ModBuilder::new().build();
    let header = parse_header(&mut ByteReader::new(&data)).unwrap();
    let layout = compute_layout(&header);

    assert_eq!(layout.pattern_count, 1);
    assert_eq!(layout.pattern_data_size, 1024);
    assert_eq!(layout.sample_data_offset, 2108);
    assert_eq!(layout.sample_data_size, 0);
    assert_eq!(layout.expected_min_file_size, 2108);
    assert_eq!(data.len(), 2108);

    assert!(validate_layout(2108, &layout).is_empty());

    let issues = validate_layout(2000, &layout);
    assert_eq!(issues.len(), 1);
    let text = issues[0].to_string();
    assert!(text.contains("2108") && text.contains("2000"));

    let issues = validate_layout(100, &layout);
    assert_eq!(issues.len(), 1);
    assert!(matches!(
        issues[0],
        LayoutIssue::PatternDataOffsetBeyondFile { .. }
    ));
}

#[test]
fn decode_cells_from_file() {
    let data = ModBuilder::new()
        .order(&[1, 0])
        .cell(1, 0, 0, [0x05, 0x14, 0x3E, 0x7F])
        .cell(1, 63, 3, [0xFF, 0xFF, 0xFF, 0xFF])
        .build();
    let module = ModFile::parse(&data).unwrap();
    assert!(module.issues.is_empty());

    let pattern = module.pattern(1).unwrap();
    assert_eq!(
        pattern.cell(0, 0).unwrap(),
        ModCell {
            sample: 0x03,
            period: 0x514,
            effect: 0x0E,
            param: 0x7F
        }
    );
    assert_eq!(pattern.cell(63, 3).unwrap(), decode_cell(0xFF, 0xFF, 0xFF, 0xFF));
    assert!(module.pattern(0).unwrap().rows().all(|row| row.iter().all(ModCell::is_empty)));
}

#[test]
fn sample_data_follows_patterns() {
    let data = ModBuilder::new()
        .sample(0, b"bd", 16, 64)
        .sample(1, b"sn", 8, 40)
        .trailing(3)
        .build();
    let module = ModFile::parse(&data).unwrap();
    assert_eq!(module.header.samples[0].name, "bd");
    assert_eq!(module.header.samples[1].volume, 40);
    assert_eq!(module.layout.sample_data_size, 48);
    assert_eq!(module.layout.expected_min_file_size, data.len() - 3);
    assert!(module.issues.is_empty());
    assert_eq!(module.sample_data(0).unwrap().len(), 32);
    assert_eq!(module.sample_data(1).unwrap().len(), 16);
}

#[test]
fn truncated_file_keeps_header_but_reports() {
    let mut data = ModBuilder::new().order(&[0, 1, 2]).sample(0, b"pad", 512, 64).build();
    data.truncate(HEADER_LEN + 1024 + 1);
    let module = ModFile::parse(&data).unwrap();
    assert_eq!(module.layout.pattern_count, 3);
    assert_eq!(module.issues.len(), 2);
    assert!(matches!(module.issues[0], LayoutIssue::PatternDataTruncated { .. }));
    assert!(matches!(module.issues[1], LayoutIssue::SampleDataTruncated { .. }));
    assert!(module.pattern(2).is_err());
    assert!(module.sample_data(0).is_none());
}

//! Synthetic module builder shared by the integration tests.

#![allow(dead_code)]

pub const HEADER_LEN: usize = 1084;
pub const PATTERN_LEN: usize = 1024;

/// Builds an M.K. module byte by byte
pub struct ModBuilder {
    title: Vec<u8>,
    samples: Vec<([u8; 22], u16, u8, u8, u16, u16)>,
    order: Vec<u8>,
    song_length: Option<u8>,
    restart: u8,
    magic: [u8; 4],
    cells: Vec<(usize, usize, usize, [u8; 4])>,
    trailing: usize,
}

impl ModBuilder {
    pub fn new() -> Self {
        ModBuilder {
            title: Vec::new(),
            samples: vec![([0u8; 22], 0, 0, 0, 0, 1); 31],
            order: vec![0],
            song_length: None,
            restart: 127,
            magic: *b"M.K.",
            cells: Vec::new(),
            trailing: 0,
        }
    }

    pub fn title(mut self, title: &[u8]) -> Self {
        self.title = title.to_vec();
        self
    }

    pub fn sample(mut self, slot: usize, name: &[u8], length_words: u16, volume: u8) -> Self {
        let mut raw = [0u8; 22];
        raw[..name.len()].copy_from_slice(name);
        self.samples[slot] = (raw, length_words, 0, volume, 0, 1);
        self
    }

    pub fn order(mut self, order: &[u8]) -> Self {
        self.order = order.to_vec();
        self
    }

    pub fn song_length(mut self, len: u8) -> Self {
        self.song_length = Some(len);
        self
    }

    pub fn magic(mut self, magic: &[u8; 4]) -> Self {
        self.magic = *magic;
        self
    }

    pub fn cell(mut self, pattern: usize, row: usize, channel: usize, bytes: [u8; 4]) -> Self {
        self.cells.push((pattern, row, channel, bytes));
        self
    }

    pub fn trailing(mut self, bytes: usize) -> Self {
        self.trailing = bytes;
        self
    }

    pub fn pattern_count(&self) -> usize {
        let len = self.song_length.unwrap_or(self.order.len() as u8) as usize;
        self.order.iter().take(len).copied().max().unwrap_or(0) as usize + 1
    }

    pub fn build(self) -> Vec<u8> {
        let mut data = Vec::new();
        let mut title = self.title.clone();
        title.resize(20, 0);
        data.extend_from_slice(&title);

        for (name, length, finetune, volume, loop_start, loop_length) in &self.samples {
            data.extend_from_slice(name);
            data.extend_from_slice(&length.to_be_bytes());
            data.push(*finetune);
            data.push(*volume);
            data.extend_from_slice(&loop_start.to_be_bytes());
            data.extend_from_slice(&loop_length.to_be_bytes());
        }

        data.push(self.song_length.unwrap_or(self.order.len() as u8));
        data.push(self.restart);
        let mut order = self.order.clone();
        order.resize(128, 0);
        data.extend_from_slice(&order);
        data.extend_from_slice(&self.magic);
        assert_eq!(data.len(), HEADER_LEN);

        let patterns = self.pattern_count();
        data.resize(HEADER_LEN + patterns * PATTERN_LEN, 0);
        for (pattern, row, channel, bytes) in &self.cells {
            let at = HEADER_LEN + pattern * PATTERN_LEN + row * 16 + channel * 4;
            data[at..at + 4].copy_from_slice(bytes);
        }

        let sample_bytes: usize = self.samples.iter().map(|s| s.1 as usize * 2).sum();
        let len = data.len() + sample_bytes + self.trailing;
        data.resize(len, 0);
        data
    }
}

//! Byte Cursor Domain
//!
//! Bounds-checked, zero-copy reading over an in-memory module buffer.

pub mod reader;

pub use reader::ByteReader;

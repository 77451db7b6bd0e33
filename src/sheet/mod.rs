//! Spreadsheet I/O: the whole table is read into memory, transformed, and
//! written once. No streaming.

pub mod reader;
pub mod writer;

pub use reader::read_sheet;
pub use writer::write_sheet;

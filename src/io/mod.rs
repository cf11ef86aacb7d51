//! Edge-list I/O.
//!
//! The on-disk format is plain text, one edge per line: two non-negative
//! integer vertex ids separated by whitespace. There is no header and no
//! comment syntax.
//!
//! Readers take any [`std::io::BufRead`] and writers any [`std::io::Write`];
//! the `*_path` helpers open the file, do their work and close it before
//! returning.

pub mod edge_list;

pub use edge_list::{EdgeListReader, GraphWriter, Labels, WriterConfig};

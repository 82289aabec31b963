//! Chunking layer tests
//!
//! Coverage properties of word windows, whole-sentence grouping and
//! handling of multi-byte text.

mod test_utf8;
mod test_windows;

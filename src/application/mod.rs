//! Application layer.
//!
//! `BillSplitter` wires the pure split arithmetic to the user-facing copy
//! and share actions, including the fallback from share to copy.

pub mod splitter;

//! Adapters for the domain ports.

pub mod file;
pub mod in_memory;
pub mod rates;

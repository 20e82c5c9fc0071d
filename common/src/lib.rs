//! Shared building blocks for `macsniff`.
//!
//! Holds the run configuration ([`options::ScanOptions`], [`config::CaptureSettings`]),
//! the error taxonomy and the interface resolver used before a capture starts.

pub mod config;
pub mod error;
pub mod network;
pub mod options;
pub mod utils;

//! Chapter playlist tools
//!
//! Builds VLC-compatible XSPF playlists out of a video's chapter metadata,
//! and patches existing playlists so every track pauses at its end.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config_initialization;
pub mod domain;
pub mod ports;
pub mod utils;
pub mod xspf;

// Re-export commonly used types
pub use domain::errors::{DomainError, DomainResult};
pub use domain::model::{BuildReport, BuildRequest, ChapterRecord, PatchReport, ProbeTime};

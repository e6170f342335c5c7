//! Error types for file probing and thumbnail decoding.
//!
//! Errors are `Clone` because they travel inside `iced` messages.

use std::path::PathBuf;
use thiserror::Error;

/// Failure while turning a picked or dropped path into a selectable file
#[derive(Debug, Clone, Error)]
pub enum ProbeError {
    #[error("failed to read metadata for {path}: {reason}")]
    Metadata { path: PathBuf, reason: String },

    #[error("not a regular file: {0}")]
    NotAFile(PathBuf),
}

/// Failure while decoding an image preview
#[derive(Debug, Clone, Error)]
pub enum PreviewError {
    #[error("failed to read {path}: {reason}")]
    Read { path: PathBuf, reason: String },

    #[error("failed to decode {path}: {reason}")]
    Decode { path: PathBuf, reason: String },

    #[error("decode task join error: {0}")]
    Join(String),
}

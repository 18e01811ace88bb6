//! Error types for the studio core.

use crate::library::ImageId;
use crate::mode::ModeEvent;
use thiserror::Error;

/// Errors surfaced by studio operations.
#[derive(Debug, Error)]
pub enum StudioError {
    #[error("Image not found: {0}")]
    UnknownImage(ImageId),
    #[error("Image is still loading: {0}")]
    NotReady(ImageId),
    #[error("Image failed to decode: {0}")]
    Failed(ImageId),
    #[error("Decode error: {0}")]
    Decode(String),
    #[error("Unsupported image file: {0}")]
    UnsupportedFormat(String),
    #[error("Invalid buffer: expected {expected} bytes for {width}x{height}, got {actual}")]
    InvalidBuffer {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
    #[error("Invalid hex color: {0}")]
    InvalidHex(String),
    #[error("Cannot apply {event:?} while {state}")]
    InvalidTransition { state: &'static str, event: ModeEvent },
    #[error("Clipboard error: {0}")]
    Clipboard(String),
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// Result type for studio operations.
pub type StudioResult<T> = Result<T, StudioError>;

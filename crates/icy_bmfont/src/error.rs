//! Unified error types for icy_bmfont
//!
//! The glyph pipeline itself never fails: missing pages, unknown pixel formats
//! and out of range values degrade to empty glyphs, GRAY8 and clamped values.
//! Errors only come from I/O, page decoding and packaging.

use thiserror::Error;

/// Main error type for icy_bmfont operations
#[derive(Debug, Error)]
pub enum ExportError {
    // === I/O Errors ===
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Page Errors ===
    #[error("Invalid page {page}: {message}")]
    InvalidPage { page: usize, message: String },

    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    #[error("PNG decoding error: {0}")]
    PngDecoding(#[from] png::DecodingError),

    // === Format Errors ===
    #[error("Unknown export format: {name}")]
    UnknownFormat { name: String },

    // === External Errors ===
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Descriptor error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Options error: {0}")]
    OptionsParse(#[from] toml::de::Error),

    #[error("{0}")]
    Generic(String),
}

/// Result type alias for icy_bmfont operations
pub type Result<T> = std::result::Result<T, ExportError>;

impl ExportError {
    /// Create a generic error from any displayable type
    pub fn generic(msg: impl std::fmt::Display) -> Self {
        Self::Generic(msg.to_string())
    }

    pub fn invalid_page(page: usize, msg: impl Into<String>) -> Self {
        Self::InvalidPage { page, message: msg.into() }
    }
}

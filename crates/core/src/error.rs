//! Codec error types
//!
//! Only two situations produce a `CodecError`:
//!
//! - the binary decode policy meets an element whose tag cannot become the
//!   target scalar (`TagMismatch`)
//! - an engine (serde_json, rmp-serde) rejects its input or output outright
//!   (`Text`, `Binary`)
//!
//! The text decode policy never produces one of its own.

use crate::element::Tag;
use thiserror::Error;

/// Errors raised by the optional codecs
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CodecError {
    /// Binary element present but of the wrong kind for the target
    #[error("unable to decode {tag} element into {target}")]
    TagMismatch {
        /// Tag of the element found in the document
        tag: Tag,
        /// Name of the optional kind being decoded
        target: &'static str,
    },

    /// The text engine failed (malformed JSON, I/O)
    #[error("text codec error: {0}")]
    Text(String),

    /// The binary engine failed (truncated input, bad marker)
    #[error("binary codec error: {0}")]
    Binary(String),
}

impl CodecError {
    /// Check if this is a tag mismatch raised by the binary decode policy.
    pub fn is_tag_mismatch(&self) -> bool {
        matches!(self, CodecError::TagMismatch { .. })
    }
}

impl From<serde_json::Error> for CodecError {
    fn from(e: serde_json::Error) -> Self {
        CodecError::Text(e.to_string())
    }
}

/// Result type for codec entry points.
pub type Result<T> = std::result::Result<T, CodecError>;

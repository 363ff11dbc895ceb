//! Wire format selection and encoding.
//!
//! # Design Decisions
//! - The format set is closed and small, so selection is a runtime match over
//!   an enum rather than a plugin registry
//! - Encoding is generic over the element type; the service only serializes,
//!   the decode side exists for symmetry and round-trip testing
//! - `"gob"` keeps its historical key on the wire but maps to a
//!   length-framed bincode encoding

use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

pub mod binary;
pub mod json;

/// Errors that can occur while selecting a format or moving bytes through it.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The requested format key is not one of the supported ones.
    #[error("unsupported serialization format: {0}")]
    UnsupportedFormat(String),

    #[error("JSON codec error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("binary codec error: {0}")]
    Binary(#[from] bincode::Error),

    /// The binary frame itself (not its payload) is malformed.
    #[error("binary frame corrupt: {0}")]
    Frame(&'static str),
}

/// A wire format for a sequence of records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Human-readable, self-describing, stable across languages.
    Json,
    /// Length-framed bincode. Compact, implementation-specific.
    Binary,
}

impl FromStr for Format {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, CodecError> {
        match s {
            "json" => Ok(Format::Json),
            "gob" => Ok(Format::Binary),
            other => Err(CodecError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Json => write!(f, "json"),
            Format::Binary => write!(f, "gob"),
        }
    }
}

impl Format {
    /// HTTP content type of the encoded bytes.
    pub fn content_type(&self) -> &'static str {
        match self {
            Format::Json => "application/json",
            Format::Binary => "application/octet-stream",
        }
    }

    /// Encode a sequence of records.
    pub fn serialize<T: Serialize>(&self, items: &[T]) -> Result<Vec<u8>, CodecError> {
        match self {
            Format::Json => json::encode(items),
            Format::Binary => binary::encode(items),
        }
    }

    /// Decode a sequence of records previously produced by [`serialize`].
    ///
    /// [`serialize`]: Format::serialize
    pub fn deserialize<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<Vec<T>, CodecError> {
        match self {
            Format::Json => json::decode(bytes),
            Format::Binary => binary::decode(bytes),
        }
    }
}

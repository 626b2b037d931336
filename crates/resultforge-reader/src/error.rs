//! Error types for result file reading.

use std::io;

use resultforge_config::ConfigError;
use resultforge_core::VariableKind;
use thiserror::Error;

/// Boxed error returned by payload deserializers.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A variable token that does not match its declared kind.
///
/// Decode errors never escape the reader: they end the entry being read and
/// mark the stream as faulted.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// A real token is not a floating-point literal.
    #[error("invalid number {token:?}")]
    NumberFormat { token: String },

    /// A binary token has the wrong length or a character other than `0`/`1`.
    #[error("invalid bit string {token:?} for {bits} bits")]
    InvalidBitString { token: String, bits: usize },

    /// A permutation token is not a permutation of `0..size`.
    #[error("invalid permutation {token:?} of size {size}")]
    InvalidPermutation { token: String, size: usize },

    /// An opaque payload could not be decoded.
    #[error("deserialization failed: {0}")]
    DeserializationFailed(#[source] BoxError),
}

/// Why a data line could not be turned into a solution.
#[derive(Debug, Error)]
pub enum LineError {
    #[error("expected at least {expected} tokens, found {found}")]
    TooFewTokens { expected: usize, found: usize },

    #[error("{kind} variable {index}: {source}")]
    Variable {
        index: usize,
        kind: VariableKind,
        #[source]
        source: DecodeError,
    },

    #[error("objective {index}: invalid number {token:?}")]
    Objective { index: usize, token: String },
}

/// Errors surfaced to callers of the reader.
///
/// Malformed content is not an error: it only ends iteration. These variants
/// report an unusable resource or misuse of the reader.
#[derive(Debug, Error)]
pub enum ReaderError {
    /// The underlying stream could not be opened or read.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The reader configuration or schema is invalid.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// An entry was requested but none remains.
    #[error("no more entries")]
    NoSuchEntry,

    /// The reader was used after `close`.
    #[error("reader is closed")]
    Closed,
}

/// Result type alias for reader operations
pub type Result<T> = std::result::Result<T, ReaderError>;

//! Error types for the FileCloud client.
//!
//! A single [`Error`] enum with explicit variants for transport failures,
//! response decoding failures, and caller input validation. Decode errors are
//! always returned to the caller; an empty response is never reported as one.

use std::num::{ParseFloatError, ParseIntError};

use thiserror::Error;

/// The unified error type for FileCloud operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The request could not be completed, or the server answered with a
    /// non-success status.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The response body could not be turned into typed records.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Caller-supplied input was rejected before any request was made.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

impl Error {
    /// Returns true if this error came from the response decoder.
    pub fn is_decode(&self) -> bool {
        matches!(self, Error::Decode(_))
    }

    /// Returns the HTTP status for a non-success response, if that is what
    /// this error is.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Transport(TransportError::Status { status, .. }) => Some(*status),
            _ => None,
        }
    }
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// Generic HTTP client error.
    #[error("HTTP error: {message}")]
    Http { message: String },

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}")]
    Status { status: u16, body: String },
}

/// Errors raised while decoding a response body.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The buffer is not well-formed XML.
    #[error("malformed XML: {message}")]
    MalformedXml { message: String },

    /// One or more required scalar fields are absent.
    #[error("missing fields: {}", .fields.join(", "))]
    MissingFields { fields: Vec<String> },

    /// An indexed entry is present but incomplete.
    #[error("could not find expected {block} fields: {}", .fields.join(", "))]
    MissingBlockFields {
        block: &'static str,
        fields: Vec<String>,
    },

    /// An indexed key whose index segment is not a non-negative integer.
    #[error("malformed attribute key: {key}")]
    MalformedKey { key: String },

    /// A value could not be converted to the type its field requires.
    #[error("invalid value for '{key}': {source}")]
    InvalidValue {
        key: String,
        #[source]
        source: CastError,
    },
}

impl DecodeError {
    /// Returns the field names reported as missing, if this is a missing
    /// field error of either kind.
    pub fn missing_fields(&self) -> Option<&[String]> {
        match self {
            DecodeError::MissingFields { fields } => Some(fields),
            DecodeError::MissingBlockFields { fields, .. } => Some(fields),
            _ => None,
        }
    }
}

/// Native conversion failures while coercing a string value.
#[derive(Debug, Error)]
pub enum CastError {
    #[error("not an integer: {0}")]
    Integer(#[from] ParseIntError),

    #[error("not a decimal: {0}")]
    Decimal(#[from] ParseFloatError),

    #[error("not a finite decimal: {0}")]
    NonFiniteDecimal(String),

    #[error("not a JSON scalar: {0}")]
    Boolean(#[from] serde_json::Error),
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid server URL.
    #[error("invalid server URL '{value}': {reason}")]
    ServerUrl { value: String, reason: String },
}

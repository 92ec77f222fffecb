//! Error types for the protocol layer.

/// Errors that can occur in the protocol layer.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// Serialization failed.
    #[error("encode failed: {0}")]
    Encode(serde_json::Error),

    /// The bytes are not valid JSON, or not the expected shape.
    #[error("decode failed: {0}")]
    Decode(serde_json::Error),

    /// Valid JSON that breaks the protocol, e.g. an array instead of an
    /// object, or an object without a `message` field.
    #[error("invalid message: {0}")]
    InvalidMessage(String),

    /// A string that holds no file letter `A`-`H` or no rank digit `1`-`8`.
    #[error("invalid cell: {0:?}")]
    InvalidCell(String),
}

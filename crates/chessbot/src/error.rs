//! Unified error type for the chessbot client.

use chessbot_protocol::ProtocolError;
use chessbot_transport::TransportError;

/// Top-level error that wraps the crate-specific errors.
///
/// Only the run loop produces these. Bad input from the server is logged
/// and discarded by the dispatcher, so in practice a `ChessbotError` means
/// the connection is gone.
#[derive(Debug, thiserror::Error)]
pub enum ChessbotError {
    /// A transport-level error (connect, send, recv).
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A protocol-level error (encode).
    #[error(transparent)]
    Protocol(#[from] ProtocolError),
}

//! Transport layer for chessbot.
//!
//! Provides the [`Connection`] trait: one persistent, message-oriented link
//! to the game server. The bot only ever holds a single outbound
//! connection, so there is no listener side here.
//!
//! # Feature Flags
//!
//! - `websocket` (default) — WebSocket client via `tokio-tungstenite`

#![allow(async_fn_in_trait)]

mod error;
#[cfg(feature = "websocket")]
mod websocket;

pub use error::TransportError;
#[cfg(feature = "websocket")]
pub use websocket::WebSocketConnection;

/// A single connection that can send and receive whole messages.
///
/// Methods take `&mut self`: the connection has exactly one owner, the
/// client run loop, and is never shared between tasks.
pub trait Connection: Send + 'static {
    /// The error type for connection operations.
    type Error: std::error::Error + Send + Sync;

    /// Sends one message to the server.
    async fn send(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Receives the next message from the server.
    ///
    /// Returns `Ok(None)` when the connection is cleanly closed.
    async fn recv(&mut self) -> Result<Option<Vec<u8>>, Self::Error>;

    /// Closes the connection.
    async fn close(&mut self) -> Result<(), Self::Error>;

    /// Human-readable description of the remote end, for logging.
    fn peer(&self) -> &str;
}

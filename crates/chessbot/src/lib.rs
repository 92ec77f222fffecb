//! # chessbot
//!
//! Client for a chess game server. The library owns the connection and the
//! wire protocol; game play lives behind the [`Bot`] trait, so a real
//! strategy can replace [`BaseBot`] without touching anything else.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chessbot::prelude::*;
//!
//! # async fn start() -> Result<(), ChessbotError> {
//! let client = BotClient::builder()
//!     .address("localhost")
//!     .port(6969)
//!     .name("base-bot")
//!     .connect(BaseBot::new())
//!     .await?;
//! client.run().await
//! # }
//! ```

mod bot;
mod client;
mod dispatcher;
mod error;
mod outbox;

pub use bot::{BaseBot, Bot, MoveSink};
pub use client::{BotClient, BotClientBuilder, ClientConfig};
pub use dispatcher::{Dispatcher, GamePhase};
pub use error::ChessbotError;
pub use outbox::Outbox;

/// Re-exports everything needed to write and run a bot.
pub mod prelude {
    pub use crate::{
        BaseBot, Bot, BotClient, BotClientBuilder, ChessbotError,
        ClientConfig, Dispatcher, GamePhase, MoveSink, Outbox,
    };
    pub use chessbot_protocol::{
        Cell, Codec, InboundMessage, JsonCodec, OutboundMessage,
        ProtocolError,
    };
    pub use chessbot_transport::{
        Connection, TransportError, WebSocketConnection,
    };
}

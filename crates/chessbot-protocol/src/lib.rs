//! Wire protocol for chessbot.
//!
//! This crate defines what the bot and the game server say to each other:
//!
//! - **Types** ([`Cell`], [`InboundMessage`], [`OutboundMessage`]) —
//!   flat JSON objects tagged by their `message` field.
//! - **Codec** ([`Codec`] trait, [`JsonCodec`]) — how those messages
//!   are converted to/from bytes.
//! - **Errors** ([`ProtocolError`]) — what can go wrong while decoding.
//!
//! ```text
//! Transport (bytes) → Protocol (messages) → Dispatcher → Bot
//! ```

mod cell;
mod codec;
mod error;
mod types;

pub use cell::Cell;
pub use codec::{Codec, JsonCodec};
pub use error::ProtocolError;
pub use types::{DEFAULT_SECONDS_PER_TURN, InboundMessage, OutboundMessage};

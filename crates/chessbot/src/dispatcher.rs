//! Routes decoded server messages to the bot.
//!
//! The dispatcher is synchronous and does no I/O. It reads one inbound
//! frame at a time and leaves whatever should be sent in an [`Outbox`].
//! The flow for a connection is:
//!   1. `on_connected` → queue the registration
//!   2. `on_message` per frame → decode, validate, call the bot

use chessbot_protocol::{
    Cell, Codec, InboundMessage, JsonCodec, OutboundMessage,
};
use serde_json::Value;

use crate::{Bot, Outbox};

/// Where the current game stands, as seen from the messages received.
///
/// Tracked for logging only: the base behaviour answers a `move` whatever
/// the phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// Connected, no `start_game` yet.
    #[default]
    AwaitingStart,
    /// Between `start_game` and `end_game`.
    InProgress,
    /// `end_game` received.
    Ended,
}

/// Translates between wire messages and [`Bot`] calls.
pub struct Dispatcher<B: Bot, C: Codec = JsonCodec> {
    name: String,
    bot: B,
    codec: C,
    phase: GamePhase,
    registered: bool,
}

impl<B: Bot> Dispatcher<B> {
    /// Creates a dispatcher that registers as `name` and speaks JSON.
    pub fn new(name: impl Into<String>, bot: B) -> Self {
        Self::with_codec(name, bot, JsonCodec)
    }
}

impl<B: Bot, C: Codec> Dispatcher<B, C> {
    pub fn with_codec(name: impl Into<String>, bot: B, codec: C) -> Self {
        Self {
            name: name.into(),
            bot,
            codec,
            phase: GamePhase::default(),
            registered: false,
        }
    }

    /// The name sent in the registration message.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn bot(&self) -> &B {
        &self.bot
    }

    pub fn codec(&self) -> &C {
        &self.codec
    }

    /// Queues the registration. Only the first call per dispatcher does
    /// anything; the server expects a single registration per connection.
    pub fn on_connected(&mut self, out: &mut Outbox) {
        if self.registered {
            tracing::debug!(name = %self.name, "already registered");
            return;
        }
        self.registered = true;
        tracing::info!(name = %self.name, "registering");
        out.push(OutboundMessage::Registration {
            name: self.name.clone(),
        });
    }

    /// Handles one inbound frame.
    ///
    /// Never fails: anything that cannot be acted on is logged at warn
    /// level and dropped, and the connection carries on.
    pub fn on_message(&mut self, data: &[u8], out: &mut Outbox) {
        let msg = match self
            .codec
            .decode::<Value>(data)
            .and_then(InboundMessage::try_from)
        {
            Ok(msg) => msg,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    raw = %String::from_utf8_lossy(data),
                    "invalid message"
                );
                return;
            }
        };

        match msg {
            InboundMessage::StartGame {
                color,
                seconds_per_turn,
            } => {
                let play_with_white = InboundMessage::play_with_white(&color);
                self.phase = GamePhase::InProgress;
                self.bot.on_game_start(play_with_white, seconds_per_turn, out);
            }

            InboundMessage::EndGame { winner, reason } => {
                tracing::info!(%winner, %reason, "game ended");
                self.phase = GamePhase::Ended;
                self.bot.on_game_end(&winner, &reason);
            }

            InboundMessage::Move {
                from,
                to,
                transform,
            } => {
                let (Some(from_cell), Some(to_cell)) =
                    (Cell::parse(&from), Cell::parse(&to))
                else {
                    tracing::warn!(%from, %to, "invalid move");
                    return;
                };
                tracing::debug!(
                    from = %from_cell,
                    to = %to_cell,
                    %transform,
                    phase = ?self.phase,
                    "enemy move"
                );
                self.bot.on_opponent_move(from_cell, to_cell, &transform, out);
            }

            InboundMessage::Unknown { kind } => {
                tracing::warn!(
                    %kind,
                    raw = %String::from_utf8_lossy(data),
                    "unknown message"
                );
            }
        }
    }
}

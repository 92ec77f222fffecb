//! The `Bot` trait — the decision-making half of the client.
//!
//! The dispatcher calls these methods when the server starts a game or
//! reports the opponent's move. A bot answers by handing zero or one move
//! to the [`MoveSink`] it is given; it never sees the connection itself.

use chessbot_protocol::Cell;

/// Where a bot sends its moves.
///
/// Cells are plain strings here on purpose: the sink validates them again
/// before anything reaches the wire, so a buggy bot cannot emit an invalid
/// move message.
pub trait MoveSink {
    /// Queues a move. Invalid cells make the move disappear silently.
    fn send_move(&mut self, from: &str, to: &str, transform: &str);
}

/// The trait a bot implements.
///
/// The sink is borrowed only for the duration of each call, so a bot cannot
/// hold on to it past the connection that backs it.
pub trait Bot: Send + 'static {
    /// A game has started.
    ///
    /// `seconds_per_turn` is the server's time budget per move; bots that
    /// search can use it to bound their thinking time.
    fn on_game_start(
        &mut self,
        play_with_white: bool,
        seconds_per_turn: f64,
        moves: &mut dyn MoveSink,
    );

    /// The opponent moved `from` → `to`. `transform` is the promotion piece
    /// code, empty for ordinary moves.
    fn on_opponent_move(
        &mut self,
        from: Cell,
        to: Cell,
        transform: &str,
        moves: &mut dyn MoveSink,
    );

    /// The game is over. Default: no-op.
    ///
    /// Stateful bots can reset their board here so the same instance is
    /// ready if the server starts another game on this connection.
    fn on_game_end(&mut self, _winner: &str, _reason: &str) {}
}

/// A scripted bot that plays the same opening every game.
///
/// As white it opens `G2`→`G4`; as black it waits, and answers every
/// opponent move with `G7`→`G5`. It never looks at the board, which makes
/// it useful for checking a server end to end.
#[derive(Debug, Clone, Copy, Default)]
pub struct BaseBot;

impl BaseBot {
    /// The opening played as white.
    pub const WHITE_OPENING: (&'static str, &'static str) = ("G2", "G4");
    /// The reply played to any opponent move.
    pub const REPLY: (&'static str, &'static str) = ("G7", "G5");

    pub fn new() -> Self {
        Self
    }
}

impl Bot for BaseBot {
    fn on_game_start(
        &mut self,
        play_with_white: bool,
        seconds_per_turn: f64,
        moves: &mut dyn MoveSink,
    ) {
        tracing::info!(play_with_white, seconds_per_turn, "game started");
        if play_with_white {
            let (from, to) = Self::WHITE_OPENING;
            moves.send_move(from, to, "");
        }
    }

    fn on_opponent_move(
        &mut self,
        from: Cell,
        to: Cell,
        transform: &str,
        moves: &mut dyn MoveSink,
    ) {
        tracing::info!(%from, %to, transform, "opponent moved");
        let (from, to) = Self::REPLY;
        moves.send_move(from, to, "");
    }
}

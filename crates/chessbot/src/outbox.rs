//! Outbound message queue filled synchronously during dispatch.

use chessbot_protocol::{Cell, OutboundMessage};

use crate::MoveSink;

/// Messages produced while handling one connection event.
///
/// The dispatcher and the bot push into it synchronously; the run loop
/// drains it afterwards and puts each message on the wire in order.
#[derive(Debug, Default)]
pub struct Outbox {
    queue: Vec<OutboundMessage>,
}

impl Outbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a message as-is.
    pub fn push(&mut self, msg: OutboundMessage) {
        self.queue.push(msg);
    }

    /// Takes every queued message, oldest first.
    pub fn drain(&mut self) -> impl Iterator<Item = OutboundMessage> + '_ {
        self.queue.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }
}

impl MoveSink for Outbox {
    fn send_move(&mut self, from: &str, to: &str, transform: &str) {
        let (Some(from_cell), Some(to_cell)) = (Cell::parse(from), Cell::parse(to))
        else {
            tracing::debug!(from, to, "dropping move with invalid cell");
            return;
        };
        tracing::info!(from = %from_cell, to = %to_cell, transform, "sending move");
        self.push(OutboundMessage::Move {
            from: from_cell,
            to: to_cell,
            transform: transform.to_string(),
        });
    }
}

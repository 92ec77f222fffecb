//! Messages exchanged with the game server.
//!
//! Every message on the wire is a flat JSON object whose `message` field
//! names its type. Outbound messages are strict serde types. Inbound ones
//! are read leniently from a [`serde_json::Value`]: a field of the wrong
//! type falls back to its default instead of failing the whole message.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{Cell, ProtocolError};

/// Turn budget assumed when `start_game` carries no usable
/// `seconds_per_turn`.
pub const DEFAULT_SECONDS_PER_TURN: f64 = 2.0;

const TYPE_KEY: &str = "message";

// ---------------------------------------------------------------------------
// InboundMessage — server → bot
// ---------------------------------------------------------------------------

/// A message received from the server.
///
/// Built with `InboundMessage::try_from(value)`. Cells in [`Move`] are
/// still raw text here; the dispatcher normalizes them.
///
/// [`Move`]: InboundMessage::Move
#[derive(Debug, Clone, PartialEq)]
pub enum InboundMessage {
    /// `{"message":"start_game","color":"white","seconds_per_turn":5}`
    StartGame {
        color: String,
        seconds_per_turn: f64,
    },

    /// `{"message":"end_game","winner":"...","reason":"..."}`
    EndGame { winner: String, reason: String },

    /// `{"message":"move","from":"g7","to":"g5","transform":""}`
    Move {
        from: String,
        to: String,
        transform: String,
    },

    /// Any other `message` value.
    Unknown { kind: String },
}

impl InboundMessage {
    /// The wire name of this message type.
    pub fn kind(&self) -> &str {
        match self {
            Self::StartGame { .. } => "start_game",
            Self::EndGame { .. } => "end_game",
            Self::Move { .. } => "move",
            Self::Unknown { kind } => kind,
        }
    }

    /// For `start_game`: whether the bot plays white. The server's color
    /// string is compared case-insensitively.
    pub fn play_with_white(color: &str) -> bool {
        color.eq_ignore_ascii_case("white")
    }
}

impl TryFrom<Value> for InboundMessage {
    type Error = ProtocolError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let Value::Object(fields) = value else {
            return Err(ProtocolError::InvalidMessage(
                "expected a JSON object".into(),
            ));
        };
        let Some(kind) = fields.get(TYPE_KEY) else {
            return Err(ProtocolError::InvalidMessage(format!(
                "missing `{TYPE_KEY}` field"
            )));
        };
        // A non-string type reads as "", which lands in `Unknown`.
        let kind = kind.as_str().unwrap_or_default();

        let msg = match kind {
            "start_game" => Self::StartGame {
                color: string_field(&fields, "color"),
                seconds_per_turn: fields
                    .get("seconds_per_turn")
                    .and_then(Value::as_f64)
                    .unwrap_or(DEFAULT_SECONDS_PER_TURN),
            },
            "end_game" => Self::EndGame {
                winner: string_field(&fields, "winner"),
                reason: string_field(&fields, "reason"),
            },
            "move" => Self::Move {
                from: string_field(&fields, "from"),
                to: string_field(&fields, "to"),
                transform: string_field(&fields, "transform"),
            },
            other => Self::Unknown {
                kind: other.to_string(),
            },
        };
        Ok(msg)
    }
}

/// Reads `key` as a string; absent or non-string values read as `""`.
fn string_field(fields: &Map<String, Value>, key: &str) -> String {
    fields
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

// ---------------------------------------------------------------------------
// OutboundMessage — bot → server
// ---------------------------------------------------------------------------

/// A message sent to the server.
///
/// `#[serde(tag = "message")]` puts the type name next to the fields:
/// `{"message":"registration","name":"base-bot"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "message", rename_all = "snake_case")]
pub enum OutboundMessage {
    /// Sent once, right after the connection opens.
    Registration { name: String },

    /// The bot's move. Cells are always normalized.
    Move {
        from: Cell,
        to: Cell,
        #[serde(default)]
        transform: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn inbound(value: Value) -> InboundMessage {
        InboundMessage::try_from(value).expect("should decode")
    }

    // =====================================================================
    // Inbound
    // =====================================================================

    #[test]
    fn test_start_game_fields() {
        let msg = inbound(json!({
            "message": "start_game",
            "color": "White",
            "seconds_per_turn": 5
        }));
        assert_eq!(
            msg,
            InboundMessage::StartGame {
                color: "White".into(),
                seconds_per_turn: 5.0,
            }
        );
        assert_eq!(msg.kind(), "start_game");
    }

    #[test]
    fn test_start_game_seconds_default() {
        let missing = inbound(json!({"message": "start_game", "color": "black"}));
        let not_numeric = inbound(json!({
            "message": "start_game",
            "color": "black",
            "seconds_per_turn": "fast"
        }));
        for msg in [missing, not_numeric] {
            let InboundMessage::StartGame { seconds_per_turn, .. } = msg else {
                panic!("expected StartGame");
            };
            assert_eq!(seconds_per_turn, DEFAULT_SECONDS_PER_TURN);
        }
    }

    #[test]
    fn test_play_with_white_is_case_insensitive() {
        assert!(InboundMessage::play_with_white("white"));
        assert!(InboundMessage::play_with_white("WHITE"));
        assert!(InboundMessage::play_with_white("White"));
        assert!(!InboundMessage::play_with_white("black"));
        assert!(!InboundMessage::play_with_white(""));
        assert!(!InboundMessage::play_with_white(" white"));
    }

    #[test]
    fn test_end_game_fields() {
        let msg = inbound(json!({
            "message": "end_game",
            "winner": "base-bot",
            "reason": "checkmate"
        }));
        assert_eq!(
            msg,
            InboundMessage::EndGame {
                winner: "base-bot".into(),
                reason: "checkmate".into(),
            }
        );
    }

    #[test]
    fn test_move_keeps_raw_cells_and_defaults_transform() {
        let msg = inbound(json!({"message": "move", "from": "g2", "to": "g4"}));
        assert_eq!(
            msg,
            InboundMessage::Move {
                from: "g2".into(),
                to: "g4".into(),
                transform: String::new(),
            }
        );
    }

    #[test]
    fn test_non_string_fields_read_as_empty() {
        let msg = inbound(json!({"message": "move", "from": 12, "to": null}));
        assert_eq!(
            msg,
            InboundMessage::Move {
                from: String::new(),
                to: String::new(),
                transform: String::new(),
            }
        );
    }

    #[test]
    fn test_unknown_type() {
        let msg = inbound(json!({"message": "chat", "text": "hi"}));
        assert_eq!(msg, InboundMessage::Unknown { kind: "chat".into() });
        assert_eq!(msg.kind(), "chat");

        let numeric = inbound(json!({"message": 7}));
        assert_eq!(numeric, InboundMessage::Unknown { kind: String::new() });
    }

    #[test]
    fn test_missing_type_is_invalid() {
        let err = InboundMessage::try_from(json!({"from": "g2", "to": "g4"}))
            .unwrap_err();
        assert!(matches!(err, ProtocolError::InvalidMessage(_)));
    }

    #[test]
    fn test_non_object_is_invalid() {
        for value in [json!([1, 2]), json!("move"), json!(null)] {
            let err = InboundMessage::try_from(value).unwrap_err();
            assert!(matches!(err, ProtocolError::InvalidMessage(_)));
        }
    }

    // =====================================================================
    // Outbound
    // =====================================================================

    #[test]
    fn test_registration_json_shape() {
        let msg = OutboundMessage::Registration {
            name: "base-bot".into(),
        };
        assert_eq!(
            serde_json::to_value(&msg).unwrap(),
            json!({"message": "registration", "name": "base-bot"})
        );
    }

    #[test]
    fn test_move_json_shape() {
        let msg = OutboundMessage::Move {
            from: Cell::parse("g2").unwrap(),
            to: Cell::parse("g4").unwrap(),
            transform: String::new(),
        };
        assert_eq!(
            serde_json::to_value(&msg).unwrap(),
            json!({"message": "move", "from": "G2", "to": "G4", "transform": ""})
        );
    }

    #[test]
    fn test_outbound_move_decodes_without_transform() {
        let msg: OutboundMessage =
            serde_json::from_value(json!({"message": "move", "from": "a7", "to": "a8"}))
                .unwrap();
        assert_eq!(
            msg,
            OutboundMessage::Move {
                from: Cell::parse("A7").unwrap(),
                to: Cell::parse("A8").unwrap(),
                transform: String::new(),
            }
        );
    }
}

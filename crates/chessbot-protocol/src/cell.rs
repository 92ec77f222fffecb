//! Board coordinates.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::ProtocolError;

/// A normalized board cell: file letter `A`-`H` followed by rank digit
/// `1`-`8`, e.g. `G4`.
///
/// A `Cell` can only be built through [`Cell::parse`], so holding one
/// means the coordinate is valid. It serializes as its two-character
/// string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    file: char,
    rank: char,
}

impl Cell {
    /// Normalizes a loosely written cell.
    ///
    /// The text is uppercased and scanned once; the first letter in `A`-`H`
    /// and the first digit in `1`-`8` are kept, in that order, whatever
    /// surrounds them. Returns `None` when either is missing.
    ///
    /// ```rust
    /// use chessbot_protocol::Cell;
    ///
    /// assert_eq!(Cell::parse("4g").unwrap().to_string(), "G4");
    /// assert!(Cell::parse("Z9").is_none());
    /// ```
    pub fn parse(text: &str) -> Option<Self> {
        let mut file = None;
        let mut rank = None;

        for c in text.chars().flat_map(char::to_uppercase) {
            match c {
                'A'..='H' if file.is_none() => file = Some(c),
                '1'..='8' if rank.is_none() => rank = Some(c),
                _ => {}
            }
            if file.is_some() && rank.is_some() {
                break;
            }
        }

        Some(Self {
            file: file?,
            rank: rank?,
        })
    }

    /// The file letter, `'A'..='H'`.
    pub fn file(&self) -> char {
        self.file
    }

    /// The rank digit, `'1'..='8'`.
    pub fn rank(&self) -> char {
        self.rank
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file, self.rank)
    }
}

impl FromStr for Cell {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ProtocolError::InvalidCell(s.to_string()))
    }
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Cell {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(text: &str) -> Option<String> {
        Cell::parse(text).map(|c| c.to_string())
    }

    #[test]
    fn test_parse_is_idempotent() {
        let once = norm("g4").unwrap();
        assert_eq!(once, "G4");
        assert_eq!(norm(&once).unwrap(), once);
    }

    #[test]
    fn test_parse_ignores_order_and_case() {
        assert_eq!(norm("4g").as_deref(), Some("G4"));
        assert_eq!(norm("G4").as_deref(), Some("G4"));
        assert_eq!(norm("g4").as_deref(), Some("G4"));
    }

    #[test]
    fn test_parse_skips_noise() {
        assert_eq!(norm("  e-2 ").as_deref(), Some("E2"));
        assert_eq!(norm("[x:c,y:7]").as_deref(), Some("C7"));
    }

    #[test]
    fn test_parse_takes_first_letter_and_first_digit() {
        assert_eq!(norm("h8a1").as_deref(), Some("H8"));
        // '9' and 'z' are out of range and skipped.
        assert_eq!(norm("z9b2").as_deref(), Some("B2"));
    }

    #[test]
    fn test_parse_rejects_missing_parts() {
        assert!(Cell::parse("Z9").is_none());
        assert!(Cell::parse("99").is_none());
        assert!(Cell::parse("").is_none());
        assert!(Cell::parse("G").is_none());
        assert!(Cell::parse("4").is_none());
    }

    #[test]
    fn test_accessors() {
        let cell = Cell::parse("d5").unwrap();
        assert_eq!(cell.file(), 'D');
        assert_eq!(cell.rank(), '5');
    }

    #[test]
    fn test_from_str_error_carries_input() {
        let err = "i9".parse::<Cell>().unwrap_err();
        assert!(matches!(err, ProtocolError::InvalidCell(ref s) if s == "i9"));
    }

    #[test]
    fn test_serde_uses_plain_string() {
        let cell = Cell::parse("a1").unwrap();
        assert_eq!(serde_json::to_string(&cell).unwrap(), "\"A1\"");

        let back: Cell = serde_json::from_str("\"1a\"").unwrap();
        assert_eq!(back, cell);

        assert!(serde_json::from_str::<Cell>("\"x0\"").is_err());
    }
}

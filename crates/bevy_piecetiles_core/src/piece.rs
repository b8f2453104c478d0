//! Semantic piece identities.
//!
//! Parsing is case-insensitive and ignores surrounding whitespace, so tilesets
//! written as `"Black"` and `"black"` resolve to the same [`PieceColor`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A property value that names no known color or piece type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown piece {attribute} '{value}'")]
pub struct UnknownPieceValue {
    /// `"color"` or `"type"`
    pub attribute: &'static str,
    /// The rejected value, as written
    pub value: String,
}

/// Side a piece belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceColor {
    White,
    Black,
}

impl PieceColor {
    pub const ALL: [Self; 2] = [Self::White, Self::Black];

    /// Canonical lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Black => "black",
        }
    }

    /// Letter used in conventional sprite file names (`w`, `b`).
    pub const fn initial(self) -> char {
        match self {
            Self::White => 'w',
            Self::Black => 'b',
        }
    }
}

impl fmt::Display for PieceColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PieceColor {
    type Err = UnknownPieceValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|color| trimmed.eq_ignore_ascii_case(color.name()))
            .ok_or_else(|| UnknownPieceValue {
                attribute: "color",
                value: s.to_string(),
            })
    }
}

/// Kind of chess piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [Self; 6] = [
        Self::Pawn,
        Self::Knight,
        Self::Bishop,
        Self::Rook,
        Self::Queen,
        Self::King,
    ];

    /// Canonical lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pawn => "pawn",
            Self::Knight => "knight",
            Self::Bishop => "bishop",
            Self::Rook => "rook",
            Self::Queen => "queen",
            Self::King => "king",
        }
    }

    /// Algebraic-notation letter, lowercase. Knight is `n` so it doesn't clash with king.
    pub const fn letter(self) -> char {
        match self {
            Self::Pawn => 'p',
            Self::Knight => 'n',
            Self::Bishop => 'b',
            Self::Rook => 'r',
            Self::Queen => 'q',
            Self::King => 'k',
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PieceKind {
    type Err = UnknownPieceValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| trimmed.eq_ignore_ascii_case(kind.name()))
            .ok_or_else(|| UnknownPieceValue {
                attribute: "type",
                value: s.to_string(),
            })
    }
}

/// A `(color, kind)` pair: the semantic key a tile is looked up by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PieceIdentity {
    pub color: PieceColor,
    pub kind: PieceKind,
}

impl PieceIdentity {
    pub const fn new(color: PieceColor, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// All twelve standard chess identities, white first.
    pub fn standard() -> impl Iterator<Item = Self> {
        PieceColor::ALL.into_iter().flat_map(|color| {
            PieceKind::ALL
                .into_iter()
                .map(move |kind| Self::new(color, kind))
        })
    }

    /// Conventional sprite file stem, e.g. `wq` for the white queen.
    pub fn sprite_stem(self) -> String {
        let mut stem = String::with_capacity(2);
        stem.push(self.color.initial());
        stem.push(self.kind.letter());
        stem
    }
}

impl fmt::Display for PieceIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_parsing_ignores_case() {
        assert_eq!("white".parse::<PieceColor>().unwrap(), PieceColor::White);
        assert_eq!("Black".parse::<PieceColor>().unwrap(), PieceColor::Black);
        assert_eq!(" BLACK ".parse::<PieceColor>().unwrap(), PieceColor::Black);
    }

    #[test]
    fn test_unknown_values_keep_original_text() {
        let err = "Red".parse::<PieceColor>().unwrap_err();
        assert_eq!(err.attribute, "color");
        assert_eq!(err.value, "Red");

        let err = "archbishop".parse::<PieceKind>().unwrap_err();
        assert_eq!(err.attribute, "type");
        assert_eq!(err.value, "archbishop");
    }

    #[test]
    fn test_kind_parsing_round_trips_names() {
        for kind in PieceKind::ALL {
            assert_eq!(kind.name().parse::<PieceKind>().unwrap(), kind);
            assert_eq!(kind.name().to_uppercase().parse::<PieceKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_standard_identities() {
        let all: Vec<PieceIdentity> = PieceIdentity::standard().collect();

        assert_eq!(all.len(), 12);
        assert_eq!(all[0], PieceIdentity::new(PieceColor::White, PieceKind::Pawn));
        assert_eq!(all[11], PieceIdentity::new(PieceColor::Black, PieceKind::King));
    }

    #[test]
    fn test_sprite_stem() {
        let stem = |color, kind| PieceIdentity::new(color, kind).sprite_stem();

        assert_eq!(stem(PieceColor::White, PieceKind::Queen), "wq");
        assert_eq!(stem(PieceColor::Black, PieceKind::Knight), "bn");
        assert_eq!(stem(PieceColor::Black, PieceKind::King), "bk");
    }

    #[test]
    fn test_display() {
        let identity = PieceIdentity::new(PieceColor::White, PieceKind::Rook);
        assert_eq!(identity.to_string(), "white rook");
    }

    #[test]
    fn test_serde_names() {
        let identity: PieceIdentity =
            serde_json::from_str(r#"{ "color": "black", "kind": "bishop" }"#).unwrap();
        assert_eq!(identity, PieceIdentity::new(PieceColor::Black, PieceKind::Bishop));
    }
}

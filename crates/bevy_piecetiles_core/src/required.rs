//! The set of piece identities a tileset has to cover.

use std::collections::BTreeSet;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::piece::PieceIdentity;

/// Piece identities a tileset must provide for registry building to succeed.
///
/// This is game configuration: standard chess requires all twelve identities, a
/// variant that only draws pawns and kings can ask for just those four. Tiles for
/// identities outside the set are still accepted and indexed.
///
/// Iteration order is canonical (white before black, then pawn, knight, bishop,
/// rook, queen, king), which also decides which identity a
/// [`MissingCombination`](crate::ValidationError::MissingCombination) reports.
///
/// ```
/// use bevy_piecetiles_core::{PieceColor, PieceIdentity, PieceKind, RequiredPieces};
///
/// let kings_only = RequiredPieces::new([
///     PieceIdentity::new(PieceColor::White, PieceKind::King),
///     PieceIdentity::new(PieceColor::Black, PieceKind::King),
/// ]);
/// assert_eq!(kings_only.len(), 2);
/// assert_eq!(RequiredPieces::standard_chess().len(), 12);
/// ```
#[derive(Resource, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequiredPieces(BTreeSet<PieceIdentity>);

impl RequiredPieces {
    pub fn new(identities: impl IntoIterator<Item = PieceIdentity>) -> Self {
        Self(identities.into_iter().collect())
    }

    /// All twelve standard chess identities.
    pub fn standard_chess() -> Self {
        Self::new(PieceIdentity::standard())
    }

    /// Require nothing: any well-formed tileset is accepted.
    pub fn none() -> Self {
        Self(BTreeSet::new())
    }

    /// Add an identity (builder pattern).
    #[must_use]
    pub fn with(mut self, identity: PieceIdentity) -> Self {
        self.0.insert(identity);
        self
    }

    pub fn contains(&self, identity: PieceIdentity) -> bool {
        self.0.contains(&identity)
    }

    pub fn iter(&self) -> impl Iterator<Item = PieceIdentity> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for RequiredPieces {
    fn default() -> Self {
        Self::standard_chess()
    }
}

impl FromIterator<PieceIdentity> for RequiredPieces {
    fn from_iter<I: IntoIterator<Item = PieceIdentity>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::{PieceColor, PieceKind};

    #[test]
    fn test_default_is_standard_chess() {
        assert_eq!(RequiredPieces::default(), RequiredPieces::standard_chess());
    }

    #[test]
    fn test_iteration_is_canonical() {
        let required = RequiredPieces::none()
            .with(PieceIdentity::new(PieceColor::Black, PieceKind::King))
            .with(PieceIdentity::new(PieceColor::White, PieceKind::Queen))
            .with(PieceIdentity::new(PieceColor::White, PieceKind::Pawn));

        let order: Vec<PieceIdentity> = required.iter().collect();
        assert_eq!(
            order,
            vec![
                PieceIdentity::new(PieceColor::White, PieceKind::Pawn),
                PieceIdentity::new(PieceColor::White, PieceKind::Queen),
                PieceIdentity::new(PieceColor::Black, PieceKind::King),
            ]
        );
    }

    #[test]
    fn test_duplicates_collapse() {
        let king = PieceIdentity::new(PieceColor::White, PieceKind::King);
        let required = RequiredPieces::new([king, king]);

        assert_eq!(required.len(), 1);
        assert!(required.contains(king));
    }

    #[test]
    fn test_deserialize_from_list() {
        let required: RequiredPieces = serde_json::from_str(
            r#"[{ "color": "white", "kind": "king" }, { "color": "black", "kind": "king" }]"#,
        )
        .unwrap();

        assert_eq!(required.len(), 2);
        assert!(required.contains(PieceIdentity::new(PieceColor::Black, PieceKind::King)));
        assert!(RequiredPieces::none().is_empty());
    }
}

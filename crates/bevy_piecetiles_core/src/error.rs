//! Error types for registry building and lookup.

use bevy_piecetiles_assets::ParseError;
use thiserror::Error;

use crate::piece::PieceIdentity;

/// A well-formed tileset that is semantically unusable.
///
/// Checks run in a fixed order and the first violation is reported, so the same
/// tileset always produces the same error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Tileset declares {declared} tiles but contains {found}")]
    CountMismatch { declared: u32, found: usize },

    #[error(
        "Tile {tile_id} is {width}x{height}, expected {expected_width}x{expected_height}"
    )]
    DimensionMismatch {
        tile_id: u32,
        expected_width: u32,
        expected_height: u32,
        width: u32,
        height: u32,
    },

    #[error("Tile id {tile_id} is used more than once")]
    DuplicateId { tile_id: u32 },

    #[error("Tile {tile_id} has unknown {attribute} '{value}'")]
    UnknownAttribute {
        tile_id: u32,
        attribute: &'static str,
        value: String,
    },

    #[error("Tileset has no tile for {identity}")]
    MissingCombination { identity: PieceIdentity },

    #[error("{identity} is declared by both tile {first_id} and tile {second_id}")]
    DuplicateCombination {
        identity: PieceIdentity,
        first_id: u32,
        second_id: u32,
    },
}

/// A lookup against a built registry that matched nothing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotFoundError {
    #[error("No tile registered for {0}")]
    Identity(PieceIdentity),

    #[error("No tile with id {0}")]
    TileId(u32),

    #[error("Cell gid {gid} does not map to a tile of the tileset starting at gid {first_gid}")]
    Cell { gid: u32, first_gid: u32 },

    #[error("Tile {tile_id} does not fit in a gid when the tileset starts at gid {first_gid}")]
    GidOverflow { tile_id: u32, first_gid: u32 },
}

/// Either stage of going from document text to a registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

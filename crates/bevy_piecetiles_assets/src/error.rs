use thiserror::Error;

/// Failure to turn a tileset document into a [`Tileset`](crate::Tileset).
///
/// Every variant is terminal: a document that fails to parse yields no tileset at all.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Failed to parse tileset markup: {0}")]
    Tiled(#[from] tiled::Error),

    #[error("Malformed tileset markup: {0}")]
    Markup(#[from] xml::reader::Error),

    #[error("Failed to parse tileset JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unrecognized tileset format: expected TSX markup or a JSON object")]
    UnknownFormat,

    #[error("Tile id '{0}' is not a non-negative integer")]
    InvalidTileId(String),

    #[error("Tileset tile size must be positive, got {width}x{height}")]
    InvalidTileSize { width: u32, height: u32 },

    #[error("Tile {tile_id} is missing required property '{name}'")]
    MissingProperty { tile_id: u32, name: &'static str },

    #[error("Tile {tile_id} property '{name}' must be a string")]
    PropertyNotString { tile_id: u32, name: &'static str },

    #[error("Tile {tile_id} has no image")]
    MissingImage { tile_id: u32 },

    #[error("Tile {tile_id} image dimensions must be positive integers, got {width}x{height}")]
    InvalidDimension { tile_id: u32, width: i64, height: i64 },
}

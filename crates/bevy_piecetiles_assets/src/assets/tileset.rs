use bevy::prelude::*;

use crate::loaders::TilesetFormat;
use crate::tileset::Tileset;

/// Bevy asset wrapper for piece tilesets (`.tsx` and `.tileset.json` files)
///
/// Holds the parsed, unvalidated [`Tileset`]. Image sources are kept as declared
/// strings; this asset never loads the piece images themselves.
#[derive(TypePath, Asset, Debug, Clone)]
pub struct PieceTilesetAsset {
    /// Parsed tileset document
    pub tileset: Tileset,

    /// Format the document was written in
    pub format: TilesetFormat,
}

impl PieceTilesetAsset {
    /// Wrap an already parsed tileset.
    pub fn new(tileset: Tileset, format: TilesetFormat) -> Self {
        Self { tileset, format }
    }
}

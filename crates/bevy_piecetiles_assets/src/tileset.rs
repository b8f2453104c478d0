//! In-memory form of a loaded piece tileset.

/// Name of the tile property holding the piece type (`pawn`, `queen`, ...).
pub const KIND_PROPERTY: &str = "type";

/// Name of the tile property holding the piece color (`white`, `black`).
pub const COLOR_PROPERTY: &str = "color";

/// One tile entry exactly as declared in the source document.
///
/// `color` and `kind` are the raw property strings. They are not normalized here,
/// so `"Black"` and `"black"` survive loading unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileDefinition {
    /// Local tile id (0-based, unique within the tileset)
    pub id: u32,
    /// Value of the `color` property
    pub color: String,
    /// Value of the `type` property
    pub kind: String,
    /// Image source as declared, with `/` separators
    pub image_path: String,
    /// Declared image width in pixels
    pub width: u32,
    /// Declared image height in pixels
    pub height: u32,
}

/// A parsed tileset document.
///
/// Built once by [`TilesetLoader`](crate::TilesetLoader) and never mutated by this
/// crate afterwards. Nothing here is validated beyond well-formedness: tile count,
/// dimensions and piece coverage are checked when a registry is built from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tileset {
    /// Tileset name from the document root
    pub name: String,
    /// Tile width declared on the root element
    pub tile_width: u32,
    /// Tile height declared on the root element
    pub tile_height: u32,
    /// Tile count declared on the root element
    pub tile_count: u32,
    /// Tiles in document order, repeated ids included
    pub tiles: Vec<TileDefinition>,
}

impl Tileset {
    /// Tile size in pixels as `(width, height)`.
    #[inline]
    pub fn tile_size(&self) -> (u32, u32) {
        (self.tile_width, self.tile_height)
    }

    /// Look up a tile by id with a linear scan.
    ///
    /// Intended for tooling and tests. Runtime lookups go through a registry.
    pub fn tile(&self, id: u32) -> Option<&TileDefinition> {
        self.tiles.iter().find(|tile| tile.id == id)
    }
}

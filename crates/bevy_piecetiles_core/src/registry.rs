//! Validated, indexed view of a piece tileset.
//!
//! `TileRegistry::build` checks a [`Tileset`] once and indexes it both ways:
//! by piece identity and by tile id. The result never changes afterwards, so it
//! can be shared between any number of readers without locking.

use std::collections::HashMap;
use std::path::Path;

use bevy::log::{debug, warn};
use bevy_piecetiles_assets::tileset::{COLOR_PROPERTY, KIND_PROPERTY};
use bevy_piecetiles_assets::{TileDefinition, Tileset, TilesetLoader};

use crate::error::{NotFoundError, RegistryError, ValidationError};
use crate::piece::{PieceColor, PieceIdentity, PieceKind};
use crate::required::RequiredPieces;

/// Tiled stores flip and rotation flags in the top four bits of a map cell gid.
const GID_FLAG_BITS: u32 = 0xF000_0000;

/// A tile whose `color` and `type` have been normalized to a [`PieceIdentity`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceTile {
    /// Local tile id
    pub id: u32,
    /// Piece this tile depicts
    pub identity: PieceIdentity,
    /// Image source as declared in the tileset
    pub image_path: String,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
}

impl PieceTile {
    fn from_definition(definition: &TileDefinition) -> Result<Self, ValidationError> {
        let unknown = |attribute: &'static str, value: &str| ValidationError::UnknownAttribute {
            tile_id: definition.id,
            attribute,
            value: value.to_string(),
        };

        let color: PieceColor = definition
            .color
            .parse()
            .map_err(|_| unknown(COLOR_PROPERTY, &definition.color))?;
        let kind: PieceKind = definition
            .kind
            .parse()
            .map_err(|_| unknown(KIND_PROPERTY, &definition.kind))?;

        Ok(Self {
            id: definition.id,
            identity: PieceIdentity::new(color, kind),
            image_path: definition.image_path.clone(),
            width: definition.width,
            height: definition.height,
        })
    }

    /// Color of the depicted piece.
    #[inline]
    pub fn color(&self) -> PieceColor {
        self.identity.color
    }

    /// Type of the depicted piece.
    #[inline]
    pub fn kind(&self) -> PieceKind {
        self.identity.kind
    }

    /// Whether the image file stem matches the piece's conventional sprite name
    /// (`wq.png` for the white queen), ignoring case and directories.
    pub fn has_conventional_name(&self) -> bool {
        Path::new(&self.image_path)
            .file_stem()
            .and_then(|stem| stem.to_str())
            .is_some_and(|stem| stem.eq_ignore_ascii_case(&self.identity.sprite_stem()))
    }
}

/// Immutable two-way index between piece identities and tiles.
///
/// ## Example
///
/// ```
/// use bevy_piecetiles_assets::TilesetLoader;
/// use bevy_piecetiles_core::{PieceColor, PieceKind, RequiredPieces, TileRegistry};
///
/// let source = r#"{
///     "name": "kings", "tileWidth": 64, "tileHeight": 64, "tileCount": 2,
///     "tiles": [
///         { "id": 0, "properties": { "type": "king", "color": "white" },
///           "image": { "source": "wk.png", "width": 64, "height": 64 } },
///         { "id": 1, "properties": { "type": "King", "color": "Black" },
///           "image": { "source": "bk.png", "width": 64, "height": 64 } }
///     ]
/// }"#;
///
/// let tileset = TilesetLoader::load(source).unwrap();
/// let registry = TileRegistry::build(&tileset, &RequiredPieces::none()).unwrap();
///
/// let tile = registry.resolve(PieceColor::Black, PieceKind::King).unwrap();
/// assert_eq!(tile.image_path, "bk.png");
/// assert_eq!(registry.resolve_by_id(tile.id).unwrap().identity, tile.identity);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileRegistry {
    name: String,
    tile_size: (u32, u32),
    tiles: Vec<PieceTile>,
    by_identity: HashMap<PieceIdentity, usize>,
    by_id: HashMap<u32, usize>,
}

impl TileRegistry {
    /// Validate a tileset and index it.
    ///
    /// Checks, in order:
    /// 1. tile count matches the declared count
    /// 2. every tile has the tileset's tile size
    /// 3. tile ids are unique
    /// 4. every `color`/`type` names a known piece (case-insensitive)
    /// 5. no identity appears twice, and every `required` identity appears
    pub fn build(tileset: &Tileset, required: &RequiredPieces) -> Result<Self, ValidationError> {
        if tileset.tiles.len() != tileset.tile_count as usize {
            return Err(ValidationError::CountMismatch {
                declared: tileset.tile_count,
                found: tileset.tiles.len(),
            });
        }

        let (expected_width, expected_height) = tileset.tile_size();
        if let Some(tile) = tileset
            .tiles
            .iter()
            .find(|tile| tile.width != expected_width || tile.height != expected_height)
        {
            return Err(ValidationError::DimensionMismatch {
                tile_id: tile.id,
                expected_width,
                expected_height,
                width: tile.width,
                height: tile.height,
            });
        }

        let mut by_id = HashMap::with_capacity(tileset.tiles.len());
        for (index, tile) in tileset.tiles.iter().enumerate() {
            if by_id.insert(tile.id, index).is_some() {
                return Err(ValidationError::DuplicateId { tile_id: tile.id });
            }
        }

        let tiles = tileset
            .tiles
            .iter()
            .map(PieceTile::from_definition)
            .collect::<Result<Vec<_>, _>>()?;

        let mut by_identity: HashMap<PieceIdentity, usize> = HashMap::with_capacity(tiles.len());
        for (index, tile) in tiles.iter().enumerate() {
            if let Some(&first) = by_identity.get(&tile.identity) {
                return Err(ValidationError::DuplicateCombination {
                    identity: tile.identity,
                    first_id: tiles[first].id,
                    second_id: tile.id,
                });
            }
            by_identity.insert(tile.identity, index);
        }

        if let Some(identity) = required
            .iter()
            .find(|identity| !by_identity.contains_key(identity))
        {
            return Err(ValidationError::MissingCombination { identity });
        }

        let registry = Self {
            name: tileset.name.clone(),
            tile_size: (expected_width, expected_height),
            tiles,
            by_identity,
            by_id,
        };

        for tile in registry.unconventional_images() {
            warn!(
                "Tileset '{}': tile {} ({}) uses image '{}', expected '{}.*'",
                registry.name,
                tile.id,
                tile.identity,
                tile.image_path,
                tile.identity.sprite_stem()
            );
        }
        debug!(
            "Built piece registry '{}' with {} tiles",
            registry.name,
            registry.len()
        );

        Ok(registry)
    }

    /// Parse a document and build a registry from it in one step.
    pub fn from_source(source: &str, required: &RequiredPieces) -> Result<Self, RegistryError> {
        let tileset = TilesetLoader::load(source)?;
        Ok(Self::build(&tileset, required)?)
    }

    /// Tile for a piece identity.
    pub fn resolve(&self, color: PieceColor, kind: PieceKind) -> Result<&PieceTile, NotFoundError> {
        self.resolve_identity(PieceIdentity::new(color, kind))
    }

    /// Tile for a piece identity.
    pub fn resolve_identity(&self, identity: PieceIdentity) -> Result<&PieceTile, NotFoundError> {
        self.by_identity
            .get(&identity)
            .map(|&index| &self.tiles[index])
            .ok_or(NotFoundError::Identity(identity))
    }

    /// Tile for a local tile id.
    pub fn resolve_by_id(&self, id: u32) -> Result<&PieceTile, NotFoundError> {
        self.by_id
            .get(&id)
            .map(|&index| &self.tiles[index])
            .ok_or(NotFoundError::TileId(id))
    }

    /// Piece occupying a map cell.
    ///
    /// `gid` is the raw global tile id stored in a map layer and `first_gid` the
    /// first gid the map assigned to this tileset. Flip/rotation flag bits are
    /// ignored for the lookup but kept in the error. A gid of 0 is an empty cell
    /// and yields `Ok(None)`.
    pub fn resolve_cell(
        &self,
        gid: u32,
        first_gid: u32,
    ) -> Result<Option<&PieceTile>, NotFoundError> {
        let local_gid = gid & !GID_FLAG_BITS;
        if local_gid == 0 {
            return Ok(None);
        }

        local_gid
            .checked_sub(first_gid)
            .and_then(|local| self.by_id.get(&local))
            .map(|&index| Some(&self.tiles[index]))
            .ok_or(NotFoundError::Cell { gid, first_gid })
    }

    /// Global id to store in a map cell for `identity`, given the tileset's `first_gid`.
    ///
    /// Fails with `GidOverflow` when the sum overflows or spills into the flag bits.
    pub fn gid_for(&self, identity: PieceIdentity, first_gid: u32) -> Result<u32, NotFoundError> {
        let tile = self.resolve_identity(identity)?;
        tile.id
            .checked_add(first_gid)
            .filter(|gid| gid & GID_FLAG_BITS == 0)
            .ok_or(NotFoundError::GidOverflow {
                tile_id: tile.id,
                first_gid,
            })
    }

    /// Whether a tile exists for the identity.
    pub fn contains(&self, identity: PieceIdentity) -> bool {
        self.by_identity.contains_key(&identity)
    }

    /// Tiles in the order the tileset listed them.
    pub fn iter(&self) -> impl Iterator<Item = &PieceTile> {
        self.tiles.iter()
    }

    /// Tiles whose image name doesn't follow the `wq.png` convention.
    pub fn unconventional_images(&self) -> impl Iterator<Item = &PieceTile> {
        self.tiles.iter().filter(|tile| !tile.has_conventional_name())
    }

    /// Tileset name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Uniform tile size `(width, height)` in pixels.
    pub fn tile_size(&self) -> (u32, u32) {
        self.tile_size
    }

    /// Number of indexed tiles.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the registry holds no tiles.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

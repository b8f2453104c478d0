//! # `bevy_piecetiles_assets`
//!
//! Layer 1 of `bevy_piecetiles`: turns piece tileset documents into plain
//! [`Tileset`] values.
//!
//! Two document formats are understood:
//!
//! - **TSX**: the Tiled tileset markup (`<tileset>` root, one `<tile>` per piece,
//!   `type`/`color` custom properties and an `<image>` per tile)
//! - **JSON**: the same tree with normalized field names (`tileWidth`, `tileCount`, ...)
//!
//! Parsing never touches the file system. [`TilesetLoader::load`] takes the
//! document text, so callers decide where bytes come from. Inside Bevy, the
//! [`PieceTilesAssetsPlugin`] registers an asset loader that reads the bytes
//! through the asset server and stores the result as a [`PieceTilesetAsset`].
//!
//! This crate does **not** interpret the `type`/`color` strings. Normalizing and
//! validating them is the job of `bevy_piecetiles_core`.
//!
//! ```
//! use bevy_piecetiles_assets::TilesetLoader;
//!
//! let source = r#"{
//!     "name": "pieces", "tileWidth": 64, "tileHeight": 64, "tileCount": 1,
//!     "tiles": [{
//!         "id": 0,
//!         "properties": { "type": "queen", "color": "white" },
//!         "image": { "source": "wq.png", "width": 64, "height": 64 }
//!     }]
//! }"#;
//!
//! let tileset = TilesetLoader::load(source).unwrap();
//! assert_eq!(tileset.tiles[0].image_path, "wq.png");
//! ```

pub mod assets;
pub mod error;
pub mod loaders;
pub mod plugin;
pub mod tileset;

pub use error::ParseError;
pub use loaders::{TilesetFormat, TilesetLoader};
pub use plugin::PieceTilesAssetsPlugin;
pub use tileset::{TileDefinition, Tileset};

/// Prelude module for convenient imports
///
/// # Example
/// ```no_run
/// use bevy::prelude::*;
/// use bevy_piecetiles_assets::prelude::*;
///
/// fn my_system(tilesets: Res<Assets<PieceTilesetAsset>>) {
///     for (_, asset) in tilesets.iter() {
///         info!("{} declares {} tiles", asset.tileset.name, asset.tileset.tile_count);
///     }
/// }
/// ```
pub mod prelude {
    pub use crate::assets::tileset::PieceTilesetAsset;
    pub use crate::error::ParseError;
    pub use crate::loaders::{TilesetFormat, TilesetLoader};
    pub use crate::plugin::PieceTilesAssetsPlugin;
    pub use crate::tileset::{TileDefinition, Tileset};
}

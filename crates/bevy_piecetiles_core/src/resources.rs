//! Resources the plugin exposes to game systems.

use std::ops::Deref;
use std::sync::Arc;

use bevy::prelude::*;
use bevy_piecetiles_assets::prelude::PieceTilesetAsset;

use crate::registry::TileRegistry;

/// The current piece registry.
///
/// Replaced as a whole whenever the tracked tileset asset changes and validates.
/// Systems that need a registry to outlive a reload can clone the inner `Arc`:
/// the old registry stays valid for as long as someone holds it.
///
/// # Example
///
/// ```rust,no_run
/// use bevy::prelude::*;
/// use bevy_piecetiles_core::prelude::*;
///
/// fn draw_white_queen(pieces: Option<Res<PieceTiles>>) {
///     let Some(pieces) = pieces else {
///         return;
///     };
///     if let Ok(tile) = pieces.resolve(PieceColor::White, PieceKind::Queen) {
///         info!("white queen is drawn with {}", tile.image_path);
///     }
/// }
/// ```
#[derive(Resource, Debug, Clone)]
pub struct PieceTiles(Arc<TileRegistry>);

impl PieceTiles {
    /// Wrap a freshly built registry.
    pub fn new(registry: TileRegistry) -> Self {
        Self(Arc::new(registry))
    }

    /// Shared handle to the registry, independent of this resource's lifetime.
    pub fn shared(&self) -> Arc<TileRegistry> {
        Arc::clone(&self.0)
    }
}

impl Deref for PieceTiles {
    type Target = TileRegistry;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// The tileset asset the plugin builds [`PieceTiles`] from.
///
/// Inserted automatically when [`PieceTilesConfig::tileset_path`](crate::PieceTilesConfig)
/// is set. Insert it yourself to track a different handle; the registry is rebuilt
/// the next time that asset is added or modified.
#[derive(Resource, Debug, Clone)]
pub struct PieceTilesetHandle(pub Handle<PieceTilesetAsset>);

//! Rebuilds [`PieceTiles`] when the tracked tileset asset changes.

use bevy::prelude::*;
use bevy_piecetiles_assets::prelude::PieceTilesetAsset;

use crate::events::{PieceTilesReady, PieceTilesRejected};
use crate::registry::TileRegistry;
use crate::required::RequiredPieces;
use crate::resources::{PieceTiles, PieceTilesetHandle};

/// Reactive system that validates the tracked tileset and swaps in a new registry.
///
/// Runs in `PreUpdate` before user systems.
///
/// # Triggers
///
/// - `AssetEvent::Added` - initial load of the tracked asset
/// - `AssetEvent::Modified` - hot reload or in-place edits
/// - [`PieceTilesetHandle`] or [`RequiredPieces`] inserted or replaced
///
/// On success [`PieceTiles`] is replaced and [`PieceTilesReady`] fires. On failure
/// the current resource is kept and [`PieceTilesRejected`] fires.
pub fn rebuild_piece_tiles(
    mut commands: Commands,
    mut asset_events: MessageReader<AssetEvent<PieceTilesetAsset>>,
    tilesets: Res<Assets<PieceTilesetAsset>>,
    tracked: Option<Res<PieceTilesetHandle>>,
    required: Res<RequiredPieces>,
) {
    let Some(tracked) = tracked else {
        asset_events.clear();
        return;
    };

    let tracked_id = tracked.0.id();
    // Drain every event so a burst of edits triggers a single rebuild.
    let mut changed = tracked.is_changed() || required.is_changed();
    for event in asset_events.read() {
        if let AssetEvent::Added { id } | AssetEvent::Modified { id } = event {
            changed |= *id == tracked_id;
        }
    }
    if !changed {
        return;
    }

    let Some(asset) = tilesets.get(&tracked.0) else {
        debug!("Waiting for piece tileset {:?} to finish loading", tracked_id);
        return;
    };
    let name = asset.tileset.name.clone();

    match TileRegistry::build(&asset.tileset, &required) {
        Ok(registry) => {
            let tile_count = registry.len();
            info!("Piece tileset '{}' ready with {} tiles", name, tile_count);
            commands.insert_resource(PieceTiles::new(registry));
            commands.trigger(PieceTilesReady { name, tile_count });
        }
        Err(error) => {
            error!("Piece tileset '{}' rejected: {}", name, error);
            commands.trigger(PieceTilesRejected { name, error });
        }
    }
}

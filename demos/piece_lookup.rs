//! Loads the bundled piece tileset and logs what every identity resolves to.
//!
//! Edit `assets/pieces/ChessPieceObjects.tsx` while this runs with the
//! `file_watcher` feature to see the registry rebuild (or get rejected).

use bevy::prelude::*;
use bevy_piecetiles::prelude::*;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins)
        .add_plugins(BevyPieceTilesPlugin::with_tileset("pieces/ChessPieceObjects.tsx"))
        .add_observer(log_registry)
        .add_observer(log_rejection)
        .run();
}

fn log_registry(ready: On<PieceTilesReady>, pieces: Res<PieceTiles>) {
    info!(
        "Tileset '{}' ready: {} tiles of {:?}px",
        ready.event().name,
        ready.event().tile_count,
        pieces.tile_size()
    );

    for identity in RequiredPieces::standard_chess().iter() {
        match pieces.resolve_identity(identity) {
            Ok(tile) => info!("{} -> tile {} ({})", identity, tile.id, tile.image_path),
            Err(error) => warn!("{}", error),
        }
    }

    // Tile layers store global ids; 0 is an empty square
    for gid in [0, 1, 11] {
        match pieces.resolve_cell(gid, 1) {
            Ok(Some(tile)) => info!("gid {} draws the {}", gid, tile.identity),
            Ok(None) => info!("gid {} is an empty square", gid),
            Err(error) => warn!("{}", error),
        }
    }
}

fn log_rejection(rejected: On<PieceTilesRejected>) {
    error!(
        "Tileset '{}' rejected, keeping the previous pieces: {}",
        rejected.event().name,
        rejected.event().error
    );
}

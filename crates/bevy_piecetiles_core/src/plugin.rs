//! Plugin for `bevy_piecetiles_core`.

use bevy::prelude::*;
use bevy_piecetiles_assets::prelude::PieceTilesetAsset;

use crate::required::RequiredPieces;
use crate::resources::PieceTilesetHandle;
use crate::systems::rebuild_piece_tiles;

/// Configuration for `PieceTilesPlugin`.
///
/// # Example
///
/// ```rust,no_run
/// use bevy::prelude::*;
/// use bevy_piecetiles_core::{PieceTilesConfig, PieceTilesPlugin, RequiredPieces};
///
/// App::new()
///     .add_plugins(PieceTilesPlugin::new(PieceTilesConfig {
///         tileset_path: Some("pieces/ChessPieceObjects.tsx".into()),
///         required: RequiredPieces::standard_chess(),
///     }));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PieceTilesConfig {
    /// Asset path of the tileset to load at startup.
    ///
    /// When `None`, nothing is loaded until a [`PieceTilesetHandle`] resource is
    /// inserted by the game.
    pub tileset_path: Option<String>,

    /// Identities every tileset must provide (standard chess by default).
    ///
    /// Inserted as the [`RequiredPieces`] resource, so it can be changed at runtime.
    pub required: RequiredPieces,
}

/// Plugin that keeps a validated [`PieceTiles`](crate::PieceTiles) resource in sync
/// with a piece tileset asset.
///
/// Add this plugin after `PieceTilesAssetsPlugin`.
///
/// # Example
///
/// ```rust,no_run
/// use bevy::prelude::*;
/// use bevy_piecetiles_assets::PieceTilesAssetsPlugin;
/// use bevy_piecetiles_core::{PieceTilesConfig, PieceTilesPlugin};
///
/// fn app() {
///     App::new()
///         .add_plugins(DefaultPlugins)
///         .add_plugins(PieceTilesAssetsPlugin)
///         .add_plugins(PieceTilesPlugin::new(PieceTilesConfig {
///             tileset_path: Some("pieces/ChessPieceObjects.tsx".into()),
///             ..default()
///         }))
///         .run();
/// }
/// ```
#[derive(Default)]
pub struct PieceTilesPlugin {
    config: PieceTilesConfig,
}

/// Resource to store the startup tileset path for deferred loading
#[derive(Resource)]
struct DeferredTilesetLoad {
    path: String,
}

impl PieceTilesPlugin {
    /// Create a new plugin with custom configuration.
    pub fn new(config: PieceTilesConfig) -> Self {
        Self { config }
    }
}

impl Plugin for PieceTilesPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.config.required.clone());

        // The asset server only exists once the app is built, so loading waits for Startup
        if let Some(path) = &self.config.tileset_path {
            app.insert_resource(DeferredTilesetLoad { path: path.clone() });
            app.add_systems(Startup, load_tileset_at_startup);
        }

        app.add_systems(PreUpdate, rebuild_piece_tiles);
    }
}

/// System that starts loading the configured tileset and tracks its handle
fn load_tileset_at_startup(world: &mut World) {
    let Some(DeferredTilesetLoad { path }) = world.remove_resource::<DeferredTilesetLoad>() else {
        return;
    };

    let handle: Handle<PieceTilesetAsset> = world.resource::<AssetServer>().load(path.clone());
    info!("Loading piece tileset from {}", path);
    world.insert_resource(PieceTilesetHandle(handle));
}

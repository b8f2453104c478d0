use bevy::prelude::*;

use crate::assets::tileset::PieceTilesetAsset;
use crate::loaders::tileset::PieceTilesetAssetLoader;

/// Plugin that registers the piece tileset asset type and its loader
///
/// This plugin enables loading `.tsx` and `.tileset.json` files as
/// [`PieceTilesetAsset`]s.
///
/// # Example
/// ```no_run
/// use bevy::prelude::*;
/// use bevy_piecetiles_assets::PieceTilesAssetsPlugin;
///
/// App::new()
///     .add_plugins(DefaultPlugins)
///     .add_plugins(PieceTilesAssetsPlugin)
///     .run();
/// ```
///
/// # What this plugin does NOT do
///
/// - Validation and piece lookup (that's Layer 2 - `bevy_piecetiles_core`)
/// - Loading the piece images (the renderer owns that)
///
/// This is a **Layer 1** plugin: pure asset loading with no ECS concerns.
pub struct PieceTilesAssetsPlugin;

impl Plugin for PieceTilesAssetsPlugin {
    fn build(&self, app: &mut App) {
        app.init_asset::<PieceTilesetAsset>()
            .register_asset_loader(PieceTilesetAssetLoader);
    }
}

//! Unified plugin for bevy_piecetiles.

use bevy::prelude::*;

use bevy_piecetiles_assets::PieceTilesAssetsPlugin;
use bevy_piecetiles_core::{PieceTilesConfig, PieceTilesPlugin, RequiredPieces};

/// Unified plugin that adds tileset loading and the piece registry.
///
/// This plugin includes:
/// - Asset loading ([`PieceTilesAssetsPlugin`])
/// - Registry validation and hot reload ([`PieceTilesPlugin`])
///
/// # Example
///
/// ```rust,no_run
/// use bevy::prelude::*;
/// use bevy_piecetiles::prelude::*;
///
/// App::new()
///     .add_plugins(DefaultPlugins)
///     .add_plugins(BevyPieceTilesPlugin::with_tileset("pieces/ChessPieceObjects.tsx"))
///     .run();
/// ```
///
/// # With Custom Configuration
///
/// ```rust,no_run
/// use bevy::prelude::*;
/// use bevy_piecetiles::prelude::*;
///
/// let kings_only = RequiredPieces::none()
///     .with(PieceIdentity::new(PieceColor::White, PieceKind::King))
///     .with(PieceIdentity::new(PieceColor::Black, PieceKind::King));
///
/// App::new()
///     .add_plugins(DefaultPlugins)
///     .add_plugins(
///         BevyPieceTilesPlugin::with_tileset("pieces/kings.tileset.json")
///             .with_required(kings_only),
///     )
///     .run();
/// ```
#[derive(Default)]
pub struct BevyPieceTilesPlugin {
    /// Registry configuration
    pub core: PieceTilesConfig,
}

impl BevyPieceTilesPlugin {
    /// Load the tileset at `path` during startup.
    pub fn with_tileset(path: impl Into<String>) -> Self {
        Self {
            core: PieceTilesConfig {
                tileset_path: Some(path.into()),
                ..default()
            },
        }
    }

    /// Replace the whole registry configuration
    pub fn with_core(mut self, config: PieceTilesConfig) -> Self {
        self.core = config;
        self
    }

    /// Replace the set of identities every tileset must provide
    pub fn with_required(mut self, required: RequiredPieces) -> Self {
        self.core.required = required;
        self
    }
}

impl Plugin for BevyPieceTilesPlugin {
    fn build(&self, app: &mut App) {
        // Layer 1: Assets
        app.add_plugins(PieceTilesAssetsPlugin);

        // Layer 2: Registry
        app.add_plugins(PieceTilesPlugin::new(self.core.clone()));

        debug!("BevyPieceTilesPlugin initialized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;

    #[test]
    fn test_with_tileset_sets_path_and_keeps_standard_set() {
        let plugin = BevyPieceTilesPlugin::with_tileset("pieces/ChessPieceObjects.tsx");
        assert_eq!(
            plugin.core.tileset_path.as_deref(),
            Some("pieces/ChessPieceObjects.tsx")
        );
        assert_eq!(plugin.core.required, RequiredPieces::standard_chess());
    }

    #[test]
    fn test_with_required_replaces_only_the_required_set() {
        let plugin = BevyPieceTilesPlugin::with_tileset("kings.tileset.json").with_required(
            RequiredPieces::none().with(PieceIdentity::new(PieceColor::Black, PieceKind::King)),
        );
        assert_eq!(plugin.core.tileset_path.as_deref(), Some("kings.tileset.json"));
        assert_eq!(plugin.core.required.len(), 1);
    }

    #[test]
    fn test_plugin_registers_both_layers() {
        let mut app = App::new();
        app.add_plugins((
            MinimalPlugins,
            AssetPlugin::default(),
            BevyPieceTilesPlugin::default(),
        ));
        app.update();

        assert!(app.world().get_resource::<Assets<PieceTilesetAsset>>().is_some());
        assert_eq!(
            *app.world().resource::<RequiredPieces>(),
            RequiredPieces::standard_chess()
        );
        assert!(app.world().get_resource::<PieceTiles>().is_none());
    }
}

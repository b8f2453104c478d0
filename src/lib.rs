//! # bevy_piecetiles
//!
//! Chess piece tileset registry for Bevy.
//!
//! This is a meta-crate that combines the `bevy_piecetiles_*` sub-crates behind one
//! plugin and one prelude.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bevy::prelude::*;
//! use bevy_piecetiles::prelude::*;
//!
//! fn main() {
//!     App::new()
//!         .add_plugins(DefaultPlugins)
//!         .add_plugins(BevyPieceTilesPlugin::with_tileset("pieces/ChessPieceObjects.tsx"))
//!         .add_observer(on_ready)
//!         .run();
//! }
//!
//! fn on_ready(_ready: On<PieceTilesReady>, pieces: Res<PieceTiles>) {
//!     if let Ok(queen) = pieces.resolve(PieceColor::White, PieceKind::Queen) {
//!         info!("white queen is tile {} ({})", queen.id, queen.image_path);
//!     }
//! }
//! ```
//!
//! ## Architecture
//!
//! - **Layer 1** ([`assets`]): Parsing `.tsx` and `.tileset.json` documents
//! - **Layer 2** ([`core`]): Validation, piece lookup and the `PieceTiles` resource
//!
//! ## Without an App
//!
//! Both layers work on plain values:
//!
//! ```rust
//! use bevy_piecetiles::prelude::*;
//!
//! let source = r#"{
//!     "name": "Kings",
//!     "tileWidth": 64,
//!     "tileHeight": 64,
//!     "tileCount": 2,
//!     "tiles": [
//!         { "id": 0, "properties": { "type": "king", "color": "white" },
//!           "image": { "source": "wk.png", "width": 64, "height": 64 } },
//!         { "id": 1, "properties": { "type": "king", "color": "black" },
//!           "image": { "source": "bk.png", "width": 64, "height": 64 } }
//!     ]
//! }"#;
//!
//! let required = RequiredPieces::none()
//!     .with(PieceIdentity::new(PieceColor::White, PieceKind::King))
//!     .with(PieceIdentity::new(PieceColor::Black, PieceKind::King));
//! let registry = TileRegistry::from_source(source, &required).unwrap();
//!
//! assert_eq!(registry.resolve(PieceColor::Black, PieceKind::King).unwrap().id, 1);
//! ```

pub mod plugin;

// Re-export sub-crates for advanced usage
pub use bevy_piecetiles_assets as assets;
pub use bevy_piecetiles_core as core;

/// Unified prelude for bevy_piecetiles
///
/// Re-exports the commonly used types from both layers.
pub mod prelude {
    pub use crate::assets::prelude::*;
    pub use crate::core::prelude::*;

    pub use crate::plugin::BevyPieceTilesPlugin;
}

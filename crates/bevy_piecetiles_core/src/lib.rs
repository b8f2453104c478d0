//! # `bevy_piecetiles_core`
//!
//! Validated lookup between chess pieces and the tiles that draw them.
//!
//! **This crate does NOT load images or render anything** - it answers "which tile is
//! the white queen?" and "which piece is tile 7?", nothing more.
//!
//! ## Architecture
//!
//! Layer 2 (this crate) sits on top of:
//! - **Layer 1** (`bevy_piecetiles_assets`): parsing tileset documents into `Tileset`s
//!
//! ## What Layer 2 Provides
//!
//! 1. **Piece identities**: [`PieceColor`], [`PieceKind`], [`PieceIdentity`] with
//!    case-insensitive parsing
//! 2. **Validation**: [`TileRegistry::build`] rejects inconsistent tilesets with a
//!    deterministic [`ValidationError`]
//! 3. **Lookup**: O(1) [`TileRegistry::resolve`] / [`TileRegistry::resolve_by_id`]
//! 4. **Bevy integration**: [`PieceTilesPlugin`] keeps a [`PieceTiles`] resource in
//!    sync with a tileset asset and swaps it on hot reload
//!
//! `TileRegistry` works without Bevy's ECS: build it from text with
//! [`TileRegistry::from_source`] and pass it around like any other value.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use bevy::prelude::*;
//! use bevy_piecetiles_assets::PieceTilesAssetsPlugin;
//! use bevy_piecetiles_core::prelude::*;
//!
//! fn main() {
//!     App::new()
//!         .add_plugins(DefaultPlugins)
//!         .add_plugins(PieceTilesAssetsPlugin)
//!         .add_plugins(PieceTilesPlugin::new(PieceTilesConfig {
//!             tileset_path: Some("pieces/ChessPieceObjects.tsx".into()),
//!             ..default()
//!         }))
//!         .add_systems(Update, log_king)
//!         .run();
//! }
//!
//! fn log_king(pieces: Option<Res<PieceTiles>>) {
//!     if let Some(Ok(tile)) = pieces.map(|p| p.resolve(PieceColor::Black, PieceKind::King).cloned()) {
//!         info!("black king: {}", tile.image_path);
//!     }
//! }
//! ```

pub mod error;
pub mod events;
pub mod piece;
pub mod plugin;
pub mod registry;
pub mod required;
pub mod resources;
pub mod systems;

pub mod prelude {
    //! Common imports for `bevy_piecetiles_core` users.

    pub use crate::error::{NotFoundError, RegistryError, ValidationError};
    pub use crate::events::{PieceTilesReady, PieceTilesRejected};
    pub use crate::piece::{PieceColor, PieceIdentity, PieceKind};
    pub use crate::plugin::{PieceTilesConfig, PieceTilesPlugin};
    pub use crate::registry::{PieceTile, TileRegistry};
    pub use crate::required::RequiredPieces;
    pub use crate::resources::{PieceTiles, PieceTilesetHandle};
}

// Re-export the main types at crate root for convenience
pub use error::{NotFoundError, RegistryError, ValidationError};
pub use piece::{PieceColor, PieceIdentity, PieceKind, UnknownPieceValue};
pub use plugin::{PieceTilesConfig, PieceTilesPlugin};
pub use registry::{PieceTile, TileRegistry};
pub use required::RequiredPieces;
pub use resources::{PieceTiles, PieceTilesetHandle};

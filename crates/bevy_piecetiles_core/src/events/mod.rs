//! Notifications about registry (re)builds.
//!
//! Both events are global observer events, triggered from the system that
//! watches the tracked tileset asset.

use bevy::prelude::*;

use crate::error::ValidationError;

/// Fired after a tileset validated and [`PieceTiles`](crate::PieceTiles) was replaced.
///
/// # Example
///
/// ```ignore
/// app.add_observer(|ready: On<PieceTilesReady>, mut state: ResMut<LoadingState>| {
///     info!("Pieces ready: {}", ready.event().name);
///     state.pieces_ready = true;
/// });
/// ```
#[derive(Event, Debug, Clone)]
pub struct PieceTilesReady {
    /// Tileset name
    pub name: String,
    /// Number of indexed tiles
    pub tile_count: usize,
}

/// Fired when the tracked tileset changed but failed validation.
///
/// The previous [`PieceTiles`](crate::PieceTiles) resource, if any, is left in place.
#[derive(Event, Debug, Clone)]
pub struct PieceTilesRejected {
    /// Tileset name
    pub name: String,
    /// First violated invariant
    pub error: ValidationError,
}

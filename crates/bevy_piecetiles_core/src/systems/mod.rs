//! Systems that keep the registry resource in sync with its asset.

pub mod rebuild;

pub use rebuild::rebuild_piece_tiles;

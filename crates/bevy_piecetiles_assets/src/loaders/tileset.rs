use bevy::{
    asset::{AssetLoader, LoadContext, io::Reader},
    prelude::*,
    tasks::ConditionalSendFuture,
};
use thiserror::Error;

use crate::assets::tileset::PieceTilesetAsset;
use crate::error::ParseError;
use crate::loaders::{TilesetFormat, TilesetLoader};

/// Asset loader for piece tilesets (`.tsx` and `.tileset.json` files)
///
/// Reads the document bytes through the asset server and hands the text to
/// [`TilesetLoader`]. The format is detected from the content, not the extension.
#[derive(Default)]
pub struct PieceTilesetAssetLoader;

#[derive(Debug, Error)]
pub enum TilesetLoaderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Tileset is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Failed to load tileset: {0}")]
    Parse(#[from] ParseError),
}

impl AssetLoader for PieceTilesetAssetLoader {
    type Asset = PieceTilesetAsset;
    type Settings = ();
    type Error = TilesetLoaderError;

    fn load(
        &self,
        reader: &mut dyn Reader,
        _settings: &Self::Settings,
        load_context: &mut LoadContext,
    ) -> impl ConditionalSendFuture<Output = Result<Self::Asset, Self::Error>> {
        async move {
            let mut bytes = Vec::new();
            reader.read_to_end(&mut bytes).await?;
            let source = String::from_utf8(bytes)?;

            let format = TilesetFormat::detect(&source).ok_or(ParseError::UnknownFormat)?;
            let tileset = TilesetLoader::load_as(&source, format)?;

            debug!(
                "Loaded piece tileset '{}' from {}",
                tileset.name,
                load_context.asset_path()
            );

            Ok(PieceTilesetAsset::new(tileset, format))
        }
    }

    fn extensions(&self) -> &[&str] {
        &["tsx", "tileset.json"]
    }
}

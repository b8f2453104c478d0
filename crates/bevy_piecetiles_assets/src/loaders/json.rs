//! Normalized JSON tileset documents.
//!
//! Same tree as the TSX markup with camel-cased root fields:
//!
//! ```json
//! {
//!   "name": "ChessPieceObjects",
//!   "tileWidth": 64, "tileHeight": 64, "tileCount": 12,
//!   "tiles": [
//!     { "id": 0,
//!       "properties": { "type": "bishop", "color": "black" },
//!       "image": { "source": "bb.png", "width": 64, "height": 64 } }
//!   ]
//! }
//! ```
//!
//! Tiles keep document order and repeated ids are preserved.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

use crate::error::ParseError;
use crate::loaders::{image_size, tile_size};
use crate::tileset::{COLOR_PROPERTY, KIND_PROPERTY, TileDefinition, Tileset};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TilesetDocument {
    name: String,
    tile_width: u32,
    tile_height: u32,
    tile_count: u32,
    #[serde(default)]
    tiles: Vec<TileDocument>,
}

#[derive(Deserialize)]
struct TileDocument {
    id: u32,
    #[serde(default)]
    properties: HashMap<String, Value>,
    image: Option<ImageDocument>,
}

#[derive(Deserialize)]
struct ImageDocument {
    source: String,
    width: i64,
    height: i64,
}

pub(crate) fn parse(source: &str) -> Result<Tileset, ParseError> {
    let document: TilesetDocument = serde_json::from_str(source)?;
    let (tile_width, tile_height) = tile_size(document.tile_width, document.tile_height)?;

    let tiles = document
        .tiles
        .into_iter()
        .map(TileDocument::into_definition)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Tileset {
        name: document.name,
        tile_width,
        tile_height,
        tile_count: document.tile_count,
        tiles,
    })
}

impl TileDocument {
    fn into_definition(mut self) -> Result<TileDefinition, ParseError> {
        let color = self.take_string(COLOR_PROPERTY)?;
        let kind = self.take_string(KIND_PROPERTY)?;
        let image = self
            .image
            .ok_or(ParseError::MissingImage { tile_id: self.id })?;
        let (width, height) = image_size(self.id, image.width, image.height)?;

        Ok(TileDefinition {
            id: self.id,
            color,
            kind,
            image_path: image.source.replace('\\', "/"),
            width,
            height,
        })
    }

    fn take_string(&mut self, name: &'static str) -> Result<String, ParseError> {
        let tile_id = self.id;
        match self.properties.remove(name) {
            Some(Value::String(value)) => Ok(value),
            Some(_) => Err(ParseError::PropertyNotString { tile_id, name }),
            None => Err(ParseError::MissingProperty { tile_id, name }),
        }
    }
}

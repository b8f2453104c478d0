use bevy::log::debug;

use crate::error::ParseError;
use crate::tileset::Tileset;

pub mod json;
pub mod tileset;
pub mod tsx;

/// Serialized form of a tileset document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TilesetFormat {
    /// Tiled tileset markup (`.tsx`)
    Tsx,
    /// Normalized JSON tree (`.tileset.json`)
    Json,
}

impl TilesetFormat {
    /// Guess the format from the first significant character of the document.
    ///
    /// Returns `None` for empty documents and anything that is neither markup nor
    /// a JSON object.
    pub fn detect(source: &str) -> Option<Self> {
        match source.trim_start_matches('\u{feff}').trim_start().chars().next()? {
            '<' => Some(Self::Tsx),
            '{' => Some(Self::Json),
            _ => None,
        }
    }
}

/// Parses tileset documents into [`Tileset`] values.
///
/// Stateless: nothing is cached between calls, and no file system access happens.
/// Image sources are recorded as declared; they are never opened.
pub struct TilesetLoader;

impl TilesetLoader {
    /// Parse a document, detecting its format with [`TilesetFormat::detect`].
    pub fn load(source: &str) -> Result<Tileset, ParseError> {
        let format = TilesetFormat::detect(source).ok_or(ParseError::UnknownFormat)?;
        Self::load_as(source, format)
    }

    /// Parse a document in a known format.
    pub fn load_as(source: &str, format: TilesetFormat) -> Result<Tileset, ParseError> {
        let tileset = match format {
            TilesetFormat::Tsx => tsx::parse(source)?,
            TilesetFormat::Json => json::parse(source)?,
        };

        debug!(
            "Parsed {:?} tileset '{}' ({} of {} declared tiles)",
            format,
            tileset.name,
            tileset.tiles.len(),
            tileset.tile_count
        );

        Ok(tileset)
    }

    /// Parse Tiled tileset markup.
    pub fn load_tsx(source: &str) -> Result<Tileset, ParseError> {
        Self::load_as(source, TilesetFormat::Tsx)
    }

    /// Parse the normalized JSON form.
    pub fn load_json(source: &str) -> Result<Tileset, ParseError> {
        Self::load_as(source, TilesetFormat::Json)
    }
}

fn tile_size(width: u32, height: u32) -> Result<(u32, u32), ParseError> {
    if width == 0 || height == 0 {
        return Err(ParseError::InvalidTileSize { width, height });
    }
    Ok((width, height))
}

fn image_size(tile_id: u32, width: i64, height: i64) -> Result<(u32, u32), ParseError> {
    let positive = |value: i64| u32::try_from(value).ok().filter(|v| *v > 0);
    match (positive(width), positive(height)) {
        (Some(width), Some(height)) => Ok((width, height)),
        _ => Err(ParseError::InvalidDimension {
            tile_id,
            width,
            height,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STANDARD_TSX: &str = include_str!("../../../../assets/pieces/ChessPieceObjects.tsx");
    const MIXED_CASE_TSX: &str =
        include_str!("../../../../assets/pieces/ChessPieceObjectsMixedCase.tsx");
    const STANDARD_JSON: &str =
        include_str!("../../../../assets/pieces/chess_pieces.tileset.json");

    #[test]
    fn test_detect_format() {
        assert_eq!(TilesetFormat::detect("<tileset/>"), Some(TilesetFormat::Tsx));
        assert_eq!(TilesetFormat::detect("\n  {}"), Some(TilesetFormat::Json));
        assert_eq!(TilesetFormat::detect("\u{feff}<?xml"), Some(TilesetFormat::Tsx));
        assert_eq!(TilesetFormat::detect("   "), None);
        assert_eq!(TilesetFormat::detect("[1, 2]"), None);
    }

    #[test]
    fn test_load_rejects_unknown_format() {
        assert!(matches!(
            TilesetLoader::load(""),
            Err(ParseError::UnknownFormat)
        ));
        assert!(matches!(
            TilesetLoader::load("name = 'pieces'"),
            Err(ParseError::UnknownFormat)
        ));
    }

    #[test]
    fn test_load_dispatches_on_content() {
        let from_tsx = TilesetLoader::load(STANDARD_TSX).unwrap();
        let from_json = TilesetLoader::load(STANDARD_JSON).unwrap();

        assert_eq!(from_tsx, from_json);
    }

    #[test]
    fn test_mixed_case_document_keeps_raw_strings() {
        let tileset = TilesetLoader::load(MIXED_CASE_TSX).unwrap();

        assert_eq!(tileset.tiles[0].color, "Black");
        assert_eq!(tileset.tiles[6].color, "White");
        assert_eq!(tileset.tiles[0].kind, "bishop");
    }

    #[test]
    fn test_image_size_rejects_non_positive() {
        assert_eq!(image_size(3, 64, 32).unwrap(), (64, 32));
        assert!(matches!(
            image_size(3, 0, 64),
            Err(ParseError::InvalidDimension {
                tile_id: 3,
                width: 0,
                height: 64
            })
        ));
        assert!(image_size(3, 64, -64).is_err());
        assert!(image_size(3, i64::from(u32::MAX) + 1, 64).is_err());
    }

    #[test]
    fn test_tile_size_rejects_zero() {
        assert!(tile_size(64, 64).is_ok());
        assert!(matches!(
            tile_size(0, 64),
            Err(ParseError::InvalidTileSize { width: 0, height: 64 })
        ));
    }
}

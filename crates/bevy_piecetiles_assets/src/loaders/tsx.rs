//! Tiled tileset markup (`.tsx`) through the `tiled` crate.

use std::io::{self, Cursor};
use std::path::Path;

use tiled::{Loader, Properties, PropertyValue, ResourceReader};
use xml::reader::{EventReader, XmlEvent};

use crate::error::ParseError;
use crate::loaders::{image_size, tile_size};
use crate::tileset::{COLOR_PROPERTY, KIND_PROPERTY, TileDefinition, Tileset};

/// Path the in-memory document is served under.
///
/// A bare file name keeps image sources relative to nothing, so `bb.png` stays `bb.png`.
const DOCUMENT_PATH: &str = "tileset.tsx";

/// Serves the document text to `tiled::Loader` instead of the file system.
///
/// Any other path (external templates, nested tilesets) is reported as missing.
struct SourceReader<'a> {
    source: &'a [u8],
}

impl<'a> ResourceReader for SourceReader<'a> {
    type Resource = Cursor<&'a [u8]>;
    type Error = io::Error;

    fn read_from(&mut self, path: &Path) -> Result<Self::Resource, Self::Error> {
        if path == Path::new(DOCUMENT_PATH) {
            Ok(Cursor::new(self.source))
        } else {
            Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} is not available to an in-memory tileset", path.display()),
            ))
        }
    }
}

/// Parse TSX markup.
///
/// `tiled` reads properties and images but keys tiles by id, which loses both the
/// order of the `<tile>` elements and any repeats. The element ids are therefore
/// read from the markup separately and drive the resulting tile list.
pub(crate) fn parse(source: &str) -> Result<Tileset, ParseError> {
    let mut loader = Loader::with_reader(SourceReader {
        source: source.as_bytes(),
    });
    let parsed = loader.load_tsx_tileset(DOCUMENT_PATH)?;
    let (tile_width, tile_height) = tile_size(parsed.tile_width, parsed.tile_height)?;

    let mut tiles = Vec::new();
    for id in declared_tile_ids(source)? {
        let tile = parsed
            .get_tile(id)
            .ok_or_else(|| ParseError::InvalidTileId(id.to_string()))?;
        let color = string_property(&tile.properties, id, COLOR_PROPERTY)?;
        let kind = string_property(&tile.properties, id, KIND_PROPERTY)?;

        let image = tile
            .image
            .as_ref()
            .ok_or(ParseError::MissingImage { tile_id: id })?;
        let (width, height) = image_size(id, i64::from(image.width), i64::from(image.height))?;

        tiles.push(TileDefinition {
            id,
            color,
            kind,
            image_path: image.source.to_string_lossy().replace('\\', "/"),
            width,
            height,
        });
    }

    Ok(Tileset {
        name: parsed.name.clone(),
        tile_width,
        tile_height,
        tile_count: parsed.tilecount,
        tiles,
    })
}

/// Ids of the `<tile>` children of the root `<tileset>`, in document order,
/// repeats included.
fn declared_tile_ids(source: &str) -> Result<Vec<u32>, ParseError> {
    let mut ids = Vec::new();
    let mut depth = 0usize;

    for event in EventReader::new(source.as_bytes()) {
        match event? {
            XmlEvent::StartElement {
                name, attributes, ..
            } => {
                if depth == 1 && name.local_name == "tile" {
                    let value = attributes
                        .iter()
                        .find(|attribute| attribute.name.local_name == "id")
                        .map(|attribute| attribute.value.as_str())
                        .unwrap_or_default();
                    let id = value
                        .trim()
                        .parse()
                        .map_err(|_| ParseError::InvalidTileId(value.to_string()))?;
                    ids.push(id);
                }
                depth += 1;
            }
            XmlEvent::EndElement { .. } => depth = depth.saturating_sub(1),
            _ => {}
        }
    }

    Ok(ids)
}

fn string_property(
    properties: &Properties,
    tile_id: u32,
    name: &'static str,
) -> Result<String, ParseError> {
    match properties.get(name) {
        Some(PropertyValue::StringValue(value)) => Ok(value.clone()),
        Some(_) => Err(ParseError::PropertyNotString { tile_id, name }),
        None => Err(ParseError::MissingProperty { tile_id, name }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STANDARD_TSX: &str = include_str!("../../../../assets/pieces/ChessPieceObjects.tsx");

    fn single_tile(tile_body: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<tileset version="1.10" name="pieces" tilewidth="64" tileheight="64" tilecount="1" columns="0">
 <tile id="0">
{tile_body}
 </tile>
</tileset>"#
        )
    }

    #[test]
    fn test_parse_standard_sheet() {
        let tileset = parse(STANDARD_TSX).unwrap();

        assert_eq!(tileset.name, "ChessPieceObjects");
        assert_eq!(tileset.tile_size(), (64, 64));
        assert_eq!(tileset.tile_count, 12);
        assert_eq!(tileset.tiles.len(), 12);

        let ids: Vec<u32> = tileset.tiles.iter().map(|t| t.id).collect();
        assert_eq!(ids, (0..12).collect::<Vec<_>>());

        let first = &tileset.tiles[0];
        assert_eq!(first.color, "black");
        assert_eq!(first.kind, "bishop");
        assert_eq!(first.image_path, "bb.png");
        assert_eq!((first.width, first.height), (64, 64));

        let queen = tileset.tile(10).unwrap();
        assert_eq!(queen.color, "white");
        assert_eq!(queen.kind, "queen");
        assert_eq!(queen.image_path, "wq.png");
    }

    #[test]
    fn test_property_order_is_irrelevant() {
        let a = single_tile(
            r#"<properties><property name="type" value="rook"/><property name="color" value="white"/></properties>
<image source="wr.png" width="64" height="64"/>"#,
        );
        let b = single_tile(
            r#"<properties><property name="color" value="white"/><property name="type" value="rook"/></properties>
<image source="wr.png" width="64" height="64"/>"#,
        );

        assert_eq!(parse(&a).unwrap(), parse(&b).unwrap());
    }

    #[test]
    fn test_missing_root_element() {
        let result = parse(r#"<?xml version="1.0" encoding="UTF-8"?><map/>"#);
        assert!(matches!(result, Err(ParseError::Tiled(_))));

        let result = parse("<tileset");
        assert!(matches!(result, Err(ParseError::Tiled(_))));
    }

    #[test]
    fn test_missing_property() {
        let source = single_tile(
            r#"<properties><property name="type" value="rook"/></properties>
<image source="wr.png" width="64" height="64"/>"#,
        );

        assert!(matches!(
            parse(&source),
            Err(ParseError::MissingProperty {
                tile_id: 0,
                name: "color"
            })
        ));
    }

    #[test]
    fn test_tile_without_properties_block() {
        let source = single_tile(r#"<image source="wr.png" width="64" height="64"/>"#);

        assert!(matches!(
            parse(&source),
            Err(ParseError::MissingProperty { tile_id: 0, .. })
        ));
    }

    #[test]
    fn test_non_string_property() {
        let source = single_tile(
            r#"<properties><property name="type" value="rook"/><property name="color" type="int" value="1"/></properties>
<image source="wr.png" width="64" height="64"/>"#,
        );

        assert!(matches!(
            parse(&source),
            Err(ParseError::PropertyNotString {
                tile_id: 0,
                name: "color"
            })
        ));
    }

    #[test]
    fn test_missing_image() {
        let source = single_tile(
            r#"<properties><property name="type" value="rook"/><property name="color" value="white"/></properties>"#,
        );

        assert!(matches!(
            parse(&source),
            Err(ParseError::MissingImage { tile_id: 0 })
        ));
    }

    #[test]
    fn test_bad_image_dimensions() {
        let zero = single_tile(
            r#"<properties><property name="type" value="rook"/><property name="color" value="white"/></properties>
<image source="wr.png" width="0" height="64"/>"#,
        );
        assert!(matches!(
            parse(&zero),
            Err(ParseError::InvalidDimension { tile_id: 0, .. })
        ));

        let text = single_tile(
            r#"<properties><property name="type" value="rook"/><property name="color" value="white"/></properties>
<image source="wr.png" width="wide" height="64"/>"#,
        );
        assert!(parse(&text).is_err());
    }

    #[test]
    fn test_unparseable_tile_id() {
        let source = STANDARD_TSX.replacen(r#"<tile id="3">"#, r#"<tile id="three">"#, 1);
        assert!(matches!(parse(&source), Err(ParseError::Tiled(_))));

        let source = STANDARD_TSX.replacen(r#"<tile id="3">"#, r#"<tile id="-3">"#, 1);
        assert!(matches!(parse(&source), Err(ParseError::Tiled(_))));
    }

    const WHITE_QUEEN_AGAIN: &str = r#" <tile id="10">
  <properties>
   <property name="type" value="queen"/>
   <property name="color" value="white"/>
  </properties>
  <image source="wq.png" width="64" height="64"/>
 </tile>
</tileset>"#;

    #[test]
    fn test_repeated_tile_ids_are_all_kept() {
        let source = STANDARD_TSX.replacen("</tileset>", WHITE_QUEEN_AGAIN, 1);
        let tileset = parse(&source).unwrap();

        assert_eq!(tileset.tile_count, 12);
        assert_eq!(tileset.tiles.len(), 13);
        assert_eq!(tileset.tiles[10].id, 10);
        assert_eq!(tileset.tiles[12].id, 10);
        assert_eq!(tileset.tiles[12].image_path, "wq.png");
    }

    #[test]
    fn test_tiles_keep_document_order() {
        let source = STANDARD_TSX.replacen(r#"<tile id="0">"#, r#"<tile id="99">"#, 1);
        let tileset = parse(&source).unwrap();

        let ids: Vec<u32> = tileset.tiles.iter().map(|t| t.id).collect();
        let mut expected = vec![99];
        expected.extend(1..12);
        assert_eq!(ids, expected);
        assert_eq!(tileset.tiles[0].image_path, "bb.png");
    }

    #[test]
    fn test_declared_tile_ids() {
        let ids = declared_tile_ids(
            r#"<tileset><tile id="4"><image source="a.png"/></tile><tile id=" 2 "/><tile id="4"/></tileset>"#,
        )
        .unwrap();
        assert_eq!(ids, vec![4, 2, 4]);

        // Only direct children of the root count
        let ids = declared_tile_ids(
            r#"<tileset><wangsets><tile id="7"/></wangsets><tile id="1"/></tileset>"#,
        )
        .unwrap();
        assert_eq!(ids, vec![1]);

        assert!(matches!(
            declared_tile_ids(r#"<tileset><tile/></tileset>"#),
            Err(ParseError::InvalidTileId(value)) if value.is_empty()
        ));
        assert!(matches!(
            declared_tile_ids("<tileset><tile id=\"1\">"),
            Err(ParseError::Markup(_))
        ));
    }

    #[test]
    fn test_external_references_are_not_read() {
        let mut reader = SourceReader { source: b"<tileset/>" };

        assert!(reader.read_from(Path::new(DOCUMENT_PATH)).is_ok());
        assert!(reader.read_from(Path::new("other.tsx")).is_err());
    }
}

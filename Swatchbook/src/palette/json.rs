//! JSON palettes
//!
//! ```json
//! { "name": "Primaries", "colors": ["#FFFF0000", "#FF00FF00"] }
//! ```

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use super::PaletteSerializer;
use crate::color::Color;
use crate::collection::ColorCollection;
use crate::error::Result;

const FORMAT: &str = "JSON Palette";

#[derive(Serialize)]
struct PaletteDocument<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    colors: &'a [Color],
}

#[derive(Deserialize)]
struct PaletteColors {
    colors: Vec<Color>,
}

/// JSON palette files; alpha is kept
#[derive(Debug, Clone)]
pub struct JsonSerializer {
    /// Indent the output
    pub pretty: bool,
    /// Optional `name` member written alongside the colors
    pub name: Option<String>,
}

impl Default for JsonSerializer {
    fn default() -> Self {
        Self {
            pretty: true,
            name: None,
        }
    }
}

impl PaletteSerializer for JsonSerializer {
    fn name(&self) -> &'static str {
        FORMAT
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["json"]
    }

    fn can_read(&self, header: &[u8]) -> bool {
        header
            .iter()
            .find(|b| !b.is_ascii_whitespace())
            .is_some_and(|&b| b == b'{')
    }

    fn deserialize(&self, reader: &mut dyn Read) -> Result<ColorCollection> {
        let document: PaletteColors = serde_json::from_reader(reader)?;
        Ok(ColorCollection::from(document.colors))
    }

    fn serialize(&self, writer: &mut dyn Write, palette: &ColorCollection) -> Result<()> {
        let document = PaletteDocument {
            name: self.name.as_deref(),
            colors: palette.as_slice(),
        };

        if self.pretty {
            serde_json::to_writer_pretty(&mut *writer, &document)?;
        } else {
            serde_json::to_writer(&mut *writer, &document)?;
        }
        writeln!(writer)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_compact_output() {
        let serializer = JsonSerializer {
            pretty: false,
            name: Some("Pair".to_string()),
        };
        let mut out = Vec::new();
        serializer
            .serialize(&mut out, &ColorCollection::from_argb_values([0xFFFF0000, 0x00000000]))
            .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\"name\":\"Pair\",\"colors\":[\"#FFFF0000\",\"#00000000\"]}\n"
        );
    }

    #[test]
    fn test_parse_ignores_extra_members() {
        let data = r##"{ "name": "x", "version": 3, "colors": ["#80102030", "ff0000"] }"##;
        let palette = JsonSerializer::default()
            .deserialize(&mut data.as_bytes())
            .unwrap();
        assert_eq!(palette, ColorCollection::from_argb_values([0x80102030, 0xFFFF0000]));
    }

    #[test]
    fn test_parse_errors() {
        for data in ["{ \"colors\": [\"#GG0000\"] }", "{ \"name\": \"no colors\" }", "[]"] {
            let result = JsonSerializer::default().deserialize(&mut data.as_bytes());
            assert!(matches!(result, Err(Error::JsonError(_))), "{data}");
        }
    }

    #[test]
    fn test_can_read() {
        let serializer = JsonSerializer::default();
        assert!(serializer.can_read(b"  \n{\"colors\": []}"));
        assert!(!serializer.can_read(b"GIMP Palette"));
        assert!(!serializer.can_read(b""));
    }
}

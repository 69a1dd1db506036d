//! GIMP palettes (`.gpl`)

use std::io::{Read, Write};

use super::{PaletteSerializer, parse_channel, read_text};
use crate::color::Color;
use crate::collection::ColorCollection;
use crate::error::{Error, Result};

const FORMAT: &str = "GIMP Palette";
const SIGNATURE: &str = "GIMP Palette";

/// GIMP palette files; alpha is not stored
#[derive(Debug, Clone)]
pub struct GimpSerializer {
    /// Written to the `Name:` header
    pub name: String,
    /// Written to the `Columns:` header; GIMP uses it as a display hint
    pub columns: u16,
}

impl Default for GimpSerializer {
    fn default() -> Self {
        Self {
            name: "Swatchbook".to_string(),
            columns: 8,
        }
    }
}

impl PaletteSerializer for GimpSerializer {
    fn name(&self) -> &'static str {
        FORMAT
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["gpl"]
    }

    fn can_read(&self, header: &[u8]) -> bool {
        header.starts_with(SIGNATURE.as_bytes())
    }

    fn deserialize(&self, reader: &mut dyn Read) -> Result<ColorCollection> {
        let text = read_text(reader, FORMAT)?;
        let mut lines = text.lines().map(str::trim);

        if lines.next() != Some(SIGNATURE) {
            return Err(Error::invalid_palette(FORMAT, "missing GIMP Palette signature"));
        }

        let mut palette = ColorCollection::new();
        for line in lines {
            if line.is_empty()
                || line.starts_with('#')
                || line.starts_with("Name:")
                || line.starts_with("Columns:")
            {
                continue;
            }

            // "R G B<tab>optional name"
            let mut parts = line.split_whitespace();
            let r = parse_channel(parts.next(), FORMAT, line)?;
            let g = parse_channel(parts.next(), FORMAT, line)?;
            let b = parse_channel(parts.next(), FORMAT, line)?;
            palette.push(Color::from_rgb(r, g, b));
        }

        Ok(palette)
    }

    fn serialize(&self, writer: &mut dyn Write, palette: &ColorCollection) -> Result<()> {
        writeln!(writer, "{SIGNATURE}")?;
        writeln!(writer, "Name: {}", self.name)?;
        writeln!(writer, "Columns: {}", self.columns)?;
        writeln!(writer, "#")?;
        for color in palette {
            writeln!(
                writer,
                "{:>3} {:>3} {:>3}\t#{:06X}",
                color.r,
                color.g,
                color.b,
                color.to_rgb()
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_skips_headers_and_comments() {
        let data = "GIMP Palette\nName: Test\nColumns: 4\n#\n# comment\n255   0   0\tRed\n  0 128 255\n\n";
        let palette = GimpSerializer::default()
            .deserialize(&mut data.as_bytes())
            .unwrap();
        assert_eq!(
            palette,
            ColorCollection::from_argb_values([0xFFFF0000, 0xFF0080FF])
        );
    }

    #[test]
    fn test_write_uses_settings() {
        let serializer = GimpSerializer {
            name: "Shades".to_string(),
            columns: 2,
        };
        let mut out = Vec::new();
        serializer
            .serialize(&mut out, &ColorCollection::from_argb_values([0xFF0A0B0C]))
            .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "GIMP Palette\nName: Shades\nColumns: 2\n#\n 10  11  12\t#0A0B0C\n"
        );
    }

    #[test]
    fn test_rejects_bad_line() {
        let data = "GIMP Palette\n12 34\n";
        assert!(matches!(
            GimpSerializer::default().deserialize(&mut data.as_bytes()),
            Err(Error::InvalidPalette { .. })
        ));
    }
}

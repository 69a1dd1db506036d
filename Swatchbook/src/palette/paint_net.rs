//! Paint.NET palettes (`.txt`)
//!
//! One `AARRGGBB` hex value per line, `;` starts a comment. Paint.NET reads
//! at most 96 entries, so nothing past that is written.

use std::io::{Read, Write};

use super::{PaletteSerializer, read_text};
use crate::color::Color;
use crate::collection::ColorCollection;
use crate::error::{Error, Result};

const FORMAT: &str = "Paint.NET Palette";

/// Most colors Paint.NET will load from a palette
pub const PAINT_NET_MAX_COLORS: usize = 96;

/// Paint.NET palette files; alpha is kept
#[derive(Debug, Clone, Copy, Default)]
pub struct PaintNetSerializer;

impl PaletteSerializer for PaintNetSerializer {
    fn name(&self) -> &'static str {
        FORMAT
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["txt"]
    }

    fn can_read(&self, header: &[u8]) -> bool {
        let Some(first) = std::str::from_utf8(header)
            .ok()
            .and_then(|text| text.lines().map(str::trim).find(|line| !line.is_empty()))
        else {
            return false;
        };

        first.starts_with(';')
            || (first.len() == 8 && first.chars().all(|c| c.is_ascii_hexdigit()))
    }

    fn deserialize(&self, reader: &mut dyn Read) -> Result<ColorCollection> {
        let text = read_text(reader, FORMAT)?;

        let mut palette = ColorCollection::new();
        for line in text.lines().map(str::trim) {
            if line.is_empty() || line.starts_with(';') {
                continue;
            }
            if line.len() != 8 {
                return Err(Error::invalid_palette(
                    FORMAT,
                    format!("expected AARRGGBB, found '{line}'"),
                ));
            }
            let color: Color = line
                .parse()
                .map_err(|_| Error::invalid_palette(FORMAT, format!("bad color '{line}'")))?;
            palette.push(color);
        }

        Ok(palette)
    }

    fn serialize(&self, writer: &mut dyn Write, palette: &ColorCollection) -> Result<()> {
        if palette.len() > PAINT_NET_MAX_COLORS {
            tracing::warn!(
                "Paint.NET palettes hold {} colors, dropping the last {}",
                PAINT_NET_MAX_COLORS,
                palette.len() - PAINT_NET_MAX_COLORS
            );
        }

        writeln!(writer, "; paint.net Palette File")?;
        writeln!(writer, "; Lines that start with a semicolon are comments")?;
        writeln!(writer, "; Colors are written as 8-digit hexadecimal numbers: aarrggbb")?;
        for color in palette.iter().take(PAINT_NET_MAX_COLORS) {
            writeln!(writer, "{:08X}", color.to_argb())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_keeps_alpha() {
        let data = "; paint.net Palette File\n;\nFFFF0000\n8000ff00\n\n";
        let palette = PaintNetSerializer.deserialize(&mut data.as_bytes()).unwrap();
        assert_eq!(palette, ColorCollection::from_argb_values([0xFFFF0000, 0x8000FF00]));
    }

    #[test]
    fn test_can_read() {
        assert!(PaintNetSerializer.can_read(b"; paint.net Palette File\n"));
        assert!(PaintNetSerializer.can_read(b"\nFF00FF00\n"));
        assert!(!PaintNetSerializer.can_read(b"hello world"));
        assert!(!PaintNetSerializer.can_read(b""));
    }

    #[test]
    fn test_rejects_short_value() {
        let err = PaintNetSerializer
            .deserialize(&mut "FF0000\n".as_bytes())
            .unwrap_err();
        assert!(matches!(err, Error::InvalidPalette { .. }));
    }

    #[test]
    fn test_write() {
        let mut out = Vec::new();
        PaintNetSerializer
            .serialize(&mut out, &ColorCollection::from_argb_values([0x7F010203]))
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("; paint.net Palette File\n"));
        assert!(text.ends_with("\n7F010203\n"));
    }

    #[test]
    fn test_write_stops_at_limit() {
        let palette: ColorCollection = (0..200u32).map(|i| 0xFF00_0000 | i).collect();
        let mut out = Vec::new();
        PaintNetSerializer.serialize(&mut out, &palette).unwrap();

        let loaded = PaintNetSerializer.deserialize(&mut out.as_slice()).unwrap();
        assert_eq!(loaded.len(), PAINT_NET_MAX_COLORS);
        assert_eq!(loaded.as_slice(), &palette.as_slice()[..PAINT_NET_MAX_COLORS]);
    }
}

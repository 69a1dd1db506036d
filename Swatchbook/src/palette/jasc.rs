//! JASC-PAL palettes (Paint Shop Pro)
//!
//! ```text
//! JASC-PAL
//! 0100
//! 2
//! 255 0 0
//! 0 255 0
//! ```

use std::io::{Read, Write};

use super::{PaletteSerializer, parse_channel, read_text};
use crate::color::Color;
use crate::collection::ColorCollection;
use crate::error::{Error, Result};

const FORMAT: &str = "JASC Palette";
const SIGNATURE: &str = "JASC-PAL";
const VERSION: &str = "0100";

/// Upper bound on the capacity reserved from the header count
const MAX_PREALLOCATED: usize = 4096;

/// Paint Shop Pro palette files; alpha is not stored
#[derive(Debug, Clone, Copy, Default)]
pub struct JascSerializer;

impl PaletteSerializer for JascSerializer {
    fn name(&self) -> &'static str {
        FORMAT
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["pal", "psppalette"]
    }

    fn can_read(&self, header: &[u8]) -> bool {
        header.starts_with(SIGNATURE.as_bytes())
    }

    fn deserialize(&self, reader: &mut dyn Read) -> Result<ColorCollection> {
        let text = read_text(reader, FORMAT)?;
        let mut lines = text.lines().map(str::trim);

        if lines.next() != Some(SIGNATURE) {
            return Err(Error::invalid_palette(FORMAT, "missing JASC-PAL signature"));
        }

        let version = lines.next().unwrap_or_default();
        if version != VERSION {
            tracing::warn!("Unexpected JASC palette version '{}'", version);
        }

        let count: usize = lines
            .next()
            .and_then(|line| line.parse().ok())
            .ok_or_else(|| Error::invalid_palette(FORMAT, "missing color count"))?;

        let mut palette = ColorCollection::with_capacity(count.min(MAX_PREALLOCATED));
        for line in lines.filter(|line| !line.is_empty()).take(count) {
            let mut parts = line.split_whitespace();
            let r = parse_channel(parts.next(), FORMAT, line)?;
            let g = parse_channel(parts.next(), FORMAT, line)?;
            let b = parse_channel(parts.next(), FORMAT, line)?;
            palette.push(Color::from_rgb(r, g, b));
        }

        if palette.len() != count {
            return Err(Error::invalid_palette(
                FORMAT,
                format!("expected {count} colors, found {}", palette.len()),
            ));
        }

        Ok(palette)
    }

    fn serialize(&self, writer: &mut dyn Write, palette: &ColorCollection) -> Result<()> {
        write!(writer, "{SIGNATURE}\r\n{VERSION}\r\n{}\r\n", palette.len())?;
        for color in palette {
            write!(writer, "{} {} {}\r\n", color.r, color.g, color.b)?;
        }
        Ok(())
    }
}

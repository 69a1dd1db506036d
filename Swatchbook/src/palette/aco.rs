//! Adobe Color Swatch (`.aco`)
//!
//! Big-endian binary. A version 1 section (`u16` version, `u16` count, then
//! five `u16` per color: space id and four channel words) is optionally
//! followed by a version 2 section carrying the same colors plus UTF-16
//! names. Either section alone is accepted.

use std::io::{self, Read, Write};

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};

use super::PaletteSerializer;
use crate::color::Color;
use crate::collection::ColorCollection;
use crate::error::{Error, Result};

const FORMAT: &str = "Adobe Color Swatch";

const SPACE_RGB: u16 = 0;
const SPACE_GRAYSCALE: u16 = 8;

/// Photoshop color swatch files; alpha is not stored
#[derive(Debug, Clone, Copy, Default)]
pub struct AdobeSwatchSerializer;

impl PaletteSerializer for AdobeSwatchSerializer {
    fn name(&self) -> &'static str {
        FORMAT
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["aco"]
    }

    fn can_read(&self, header: &[u8]) -> bool {
        matches!(header, [0, 1 | 2, ..])
    }

    fn deserialize(&self, reader: &mut dyn Read) -> Result<ColorCollection> {
        let version = reader.read_u16::<BigEndian>().map_err(truncated)?;
        let mut colors = match version {
            1 | 2 => read_section(reader, version)?,
            other => {
                return Err(Error::invalid_palette(
                    FORMAT,
                    format!("unsupported version {other}"),
                ));
            }
        };

        // Photoshop writes both sections; the second one wins when present
        if version == 1 {
            match reader.read_u16::<BigEndian>() {
                Ok(2) => colors = read_section(reader, 2)?,
                Ok(_) => {}
                Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => {}
                Err(err) => return Err(err.into()),
            }
        }

        Ok(ColorCollection::from(colors))
    }

    fn serialize(&self, writer: &mut dyn Write, palette: &ColorCollection) -> Result<()> {
        let count = u16::try_from(palette.len()).map_err(|_| {
            Error::invalid_palette(
                FORMAT,
                format!("{} colors exceed the format limit of {}", palette.len(), u16::MAX),
            )
        })?;

        writer.write_u16::<BigEndian>(1)?;
        writer.write_u16::<BigEndian>(count)?;
        for color in palette {
            writer.write_u16::<BigEndian>(SPACE_RGB)?;
            writer.write_u16::<BigEndian>(u16::from(color.r) * 257)?;
            writer.write_u16::<BigEndian>(u16::from(color.g) * 257)?;
            writer.write_u16::<BigEndian>(u16::from(color.b) * 257)?;
            writer.write_u16::<BigEndian>(0)?;
        }
        Ok(())
    }
}

fn read_section(reader: &mut dyn Read, version: u16) -> Result<Vec<Color>> {
    let count = reader.read_u16::<BigEndian>().map_err(truncated)?;

    let mut colors = Vec::with_capacity(usize::from(count));
    for index in 0..count {
        let space = reader.read_u16::<BigEndian>().map_err(truncated)?;
        let mut words = [0u16; 4];
        reader
            .read_u16_into::<BigEndian>(&mut words)
            .map_err(truncated)?;

        if version == 2 {
            // Length in UTF-16 units, terminator included
            let name_len = reader.read_u32::<BigEndian>().map_err(truncated)?;
            for _ in 0..name_len {
                reader.read_u16::<BigEndian>().map_err(truncated)?;
            }
        }

        match space {
            SPACE_RGB => colors.push(Color::from_rgb(
                (words[0] / 257) as u8,
                (words[1] / 257) as u8,
                (words[2] / 257) as u8,
            )),
            SPACE_GRAYSCALE => {
                let level = (u32::from(words[0].min(10_000)) * 255 / 10_000) as u8;
                colors.push(Color::from_rgb(level, level, level));
            }
            other => {
                tracing::warn!("Skipping swatch {} with unsupported color space {}", index, other);
            }
        }
    }

    Ok(colors)
}

fn truncated(err: io::Error) -> Error {
    if err.kind() == io::ErrorKind::UnexpectedEof {
        Error::invalid_palette(FORMAT, "unexpected end of file")
    } else {
        Error::Io(err)
    }
}

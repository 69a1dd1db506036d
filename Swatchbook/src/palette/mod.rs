//! Palette file formats
//!
//! A [`PaletteSerializer`] turns bytes into a [`ColorCollection`] and back.
//! [`PaletteSerializers`] is the registry that picks one for a file name:
//! serializers claiming the file's extension are tried in registration
//! order, and when the file already exists the first one whose
//! [`can_read`](PaletteSerializer::can_read) accepts its leading bytes wins.
//!
//! ## Built-in formats
//!
//! | Format | Extension | Alpha |
//! |---|---|---|
//! | JASC-PAL (Paint Shop Pro) | `.pal` | dropped |
//! | GIMP palette | `.gpl` | dropped |
//! | Paint.NET palette | `.txt` | kept |
//! | Adobe Color Swatch | `.aco` | dropped |
//! | JSON | `.json` | kept |

mod aco;
mod gimp;
mod jasc;
mod json;
mod paint_net;

use std::fmt;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use std::sync::OnceLock;

use crate::collection::ColorCollection;
use crate::error::{Error, Result};

pub use aco::AdobeSwatchSerializer;
pub use gimp::GimpSerializer;
pub use jasc::JascSerializer;
pub use json::JsonSerializer;
pub use paint_net::PaintNetSerializer;

/// Number of leading bytes handed to [`PaletteSerializer::can_read`]
pub const HEADER_PROBE_LEN: u64 = 64;

/// Encoder/decoder for one palette file format
pub trait PaletteSerializer: Send + Sync {
    /// Human readable format name
    fn name(&self) -> &'static str;

    /// Lowercase file extensions without the dot
    fn extensions(&self) -> &'static [&'static str];

    /// Whether `header` (the first bytes of a file) looks like this format
    fn can_read(&self, header: &[u8]) -> bool;

    /// Whether this format supports writing
    fn can_write(&self) -> bool {
        true
    }

    fn deserialize(&self, reader: &mut dyn Read) -> Result<ColorCollection>;

    fn serialize(&self, writer: &mut dyn Write, palette: &ColorCollection) -> Result<()>;
}

/// Ordered registry of palette serializers
pub struct PaletteSerializers {
    serializers: Vec<Box<dyn PaletteSerializer>>,
}

impl PaletteSerializers {
    /// A registry with no formats
    #[must_use]
    pub fn empty() -> Self {
        Self {
            serializers: Vec::new(),
        }
    }

    /// Shared registry holding the built-in formats
    pub fn global() -> &'static PaletteSerializers {
        static GLOBAL: OnceLock<PaletteSerializers> = OnceLock::new();
        GLOBAL.get_or_init(PaletteSerializers::default)
    }

    /// Add a serializer after the existing ones
    pub fn register<S: PaletteSerializer + 'static>(&mut self, serializer: S) -> &mut Self {
        self.serializers.push(Box::new(serializer));
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn PaletteSerializer> {
        self.serializers.iter().map(Box::as_ref)
    }

    /// Serializers claiming `extension` (case-insensitive, without the dot)
    pub fn by_extension<'a>(
        &'a self,
        extension: &str,
    ) -> impl Iterator<Item = &'a dyn PaletteSerializer> + use<'a> {
        let extension = extension.trim_start_matches('.').to_ascii_lowercase();
        self.iter()
            .filter(move |s| s.extensions().contains(&extension.as_str()))
    }

    /// Pick the serializer able to read the file at `path`
    ///
    /// Files without an extension are probed against every serializer.
    #[must_use]
    pub fn resolve(&self, path: &Path) -> Option<&dyn PaletteSerializer> {
        let header = match read_header(path) {
            Ok(header) => Some(header),
            Err(err) => {
                tracing::debug!("Cannot probe {}: {}", path.display(), err);
                None
            }
        };

        let resolved = match (extension_of(path), header) {
            (Some(ext), Some(header)) => self.by_extension(&ext).find(|s| s.can_read(&header)),
            (Some(ext), None) => self.by_extension(&ext).next(),
            (None, Some(header)) => self.iter().find(|s| s.can_read(&header)),
            (None, None) => None,
        };

        match resolved {
            Some(serializer) => {
                tracing::debug!("Resolved {} as {}", path.display(), serializer.name());
            }
            None => tracing::debug!("No palette serializer for {}", path.display()),
        }
        resolved
    }

    /// Pick a writable serializer by the extension of `path` alone
    #[must_use]
    pub fn resolve_for_write(&self, path: &Path) -> Option<&dyn PaletteSerializer> {
        let ext = extension_of(path)?;
        self.by_extension(&ext).find(|s| s.can_write())
    }
}

impl Default for PaletteSerializers {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry
            .register(JascSerializer)
            .register(GimpSerializer::default())
            .register(PaintNetSerializer)
            .register(AdobeSwatchSerializer)
            .register(JsonSerializer::default());
        registry
    }
}

impl fmt::Debug for PaletteSerializers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.iter().map(PaletteSerializer::name))
            .finish()
    }
}

/// Read a palette file, resolving the format through `serializers`
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `path` is empty.
/// Returns [`Error::FileNotFound`] if the file does not exist.
/// Returns [`Error::UnsupportedFormat`] if no serializer accepts the file.
/// Returns [`Error::Io`] or [`Error::InvalidPalette`] if decoding fails.
pub fn read_palette<P: AsRef<Path>>(
    path: P,
    serializers: &PaletteSerializers,
) -> Result<ColorCollection> {
    let path = path.as_ref();
    check_path(path)?;

    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let serializer = serializers
        .resolve(path)
        .ok_or_else(|| Error::UnsupportedFormat {
            path: path.to_path_buf(),
        })?;

    let mut reader = BufReader::new(File::open(path)?);
    let palette = serializer.deserialize(&mut reader)?;

    tracing::info!(
        "Loaded {} colors from {} ({})",
        palette.len(),
        path.display(),
        serializer.name()
    );
    Ok(palette)
}

/// Write `palette` to `path` with `serializer`, replacing any existing file
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `path` is empty.
/// Returns [`Error::Io`] if the file cannot be created or written.
pub fn write_palette<P: AsRef<Path>>(
    path: P,
    palette: &ColorCollection,
    serializer: &dyn PaletteSerializer,
) -> Result<()> {
    let path = path.as_ref();
    check_path(path)?;

    let mut writer = BufWriter::new(File::create(path)?);
    serializer.serialize(&mut writer, palette)?;
    writer.flush()?;

    tracing::info!(
        "Saved {} colors to {} ({})",
        palette.len(),
        path.display(),
        serializer.name()
    );
    Ok(())
}

pub(crate) fn check_path(path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(Error::InvalidArgument {
            name: "path",
            message: "file name not specified".to_string(),
        });
    }
    Ok(())
}

fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
}

fn read_header(path: &Path) -> std::io::Result<Vec<u8>> {
    let mut header = Vec::with_capacity(HEADER_PROBE_LEN as usize);
    File::open(path)?
        .take(HEADER_PROBE_LEN)
        .read_to_end(&mut header)?;
    Ok(header)
}

/// Read the whole stream as UTF-8 text
pub(crate) fn read_text(reader: &mut dyn Read, format: &'static str) -> Result<String> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    String::from_utf8(bytes).map_err(|err| Error::invalid_palette(format, err.to_string()))
}

/// Parse one decimal channel value
pub(crate) fn parse_channel(token: Option<&str>, format: &'static str, line: &str) -> Result<u8> {
    token
        .and_then(|t| t.parse::<u8>().ok())
        .ok_or_else(|| Error::invalid_palette(format, format!("bad color line '{line}'")))
}

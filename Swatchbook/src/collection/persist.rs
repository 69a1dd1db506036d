//! Loading and saving a collection through palette serializers

use std::path::Path;

use super::ColorCollection;
use crate::error::{Error, Result};
use crate::palette::{PaletteSerializer, PaletteSerializers, check_path, read_palette, write_palette};

impl ColorCollection {
    /// Load a palette file using the built-in formats
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `path` is empty,
    /// [`Error::FileNotFound`] if it does not exist and
    /// [`Error::UnsupportedFormat`] if no serializer recognizes it.
    pub fn load_palette<P: AsRef<Path>>(path: P) -> Result<Self> {
        read_palette(path, PaletteSerializers::global())
    }

    /// Load a palette file, resolving its format through `serializers`
    pub fn load_palette_with<P: AsRef<Path>>(
        path: P,
        serializers: &PaletteSerializers,
    ) -> Result<Self> {
        read_palette(path, serializers)
    }

    /// Replace the contents of this collection with a palette file
    ///
    /// Listeners see one cleared event and then one insert per loaded color.
    /// On error the collection is left untouched.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        self.load_with(path, PaletteSerializers::global())
    }

    /// Like [`load`](Self::load), resolving the format through `serializers`
    pub fn load_with<P: AsRef<Path>>(
        &mut self,
        path: P,
        serializers: &PaletteSerializers,
    ) -> Result<()> {
        let palette = read_palette(path, serializers)?;
        self.clear();
        self.add_range(palette);
        Ok(())
    }

    /// Write this collection to `path` with the given serializer
    pub fn save<P: AsRef<Path>>(&self, path: P, serializer: &dyn PaletteSerializer) -> Result<()> {
        write_palette(path, self, serializer)
    }

    /// Write this collection to `path`, picking the format from its extension
    pub fn save_as<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        check_path(path)?;
        let serializer = PaletteSerializers::global()
            .resolve_for_write(path)
            .ok_or_else(|| Error::UnsupportedFormat {
                path: path.to_path_buf(),
            })?;
        write_palette(path, self, serializer)
    }
}

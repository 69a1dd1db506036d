//! # Swatchbook
//!
//! Ordered color palettes with fast reverse lookup, change notifications and
//! pluggable palette file formats.
//!
//! ## Supported Formats
//!
//! - **JASC-PAL** - Paint Shop Pro palettes (`.pal`)
//! - **GIMP** - GIMP palettes (`.gpl`)
//! - **Paint.NET** - Paint.NET palettes with alpha (`.txt`)
//! - **ACO** - Adobe Photoshop color swatches (`.aco`)
//! - **JSON** - `{"colors": ["#AARRGGBB", ...]}` documents (`.json`)
//!
//! ## Quick Start
//!
//! ### Building and querying a palette
//!
//! ```
//! use swatchbook::{Color, ColorCollection, SortOrder};
//!
//! let mut palette = ColorCollection::from_argb_values([0xFF0000FF, 0xFFFF0000, 0xFF00FF00]);
//! assert_eq!(palette.find_argb(0xFFFF0000), Some(1));
//!
//! palette.sort(SortOrder::Hue);
//! assert_eq!(palette[0], Color::from_argb(0xFFFF0000));
//! ```
//!
//! ### Listening for changes
//!
//! ```
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//!
//! use swatchbook::prelude::*;
//!
//! let inserted = Arc::new(AtomicUsize::new(0));
//! let counter = Arc::clone(&inserted);
//!
//! let mut palette = ColorCollection::new();
//! palette.subscribe(EventKind::ItemInserted, move |_| {
//!     counter.fetch_add(1, Ordering::SeqCst);
//! });
//! palette.push(Color::WHITE);
//! palette.push(Color::BLACK);
//! assert_eq!(inserted.load(Ordering::SeqCst), 2);
//! ```
//!
//! ### Reading and writing palette files
//!
//! ```no_run
//! use swatchbook::{ColorCollection, GimpSerializer};
//!
//! let palette = ColorCollection::load_palette("colors.pal")?;
//! palette.save("colors.gpl", &GimpSerializer::default())?;
//! palette.save_as("colors.json")?;
//! # Ok::<(), swatchbook::Error>(())
//! ```

pub mod collection;
pub mod color;
pub mod error;
pub mod palette;

// Re-exports for convenience
pub use collection::{ChangeKind, CollectionChange, ColorCollection, EventKind, ListenerId, SortOrder};
pub use color::{Color, Hsl};
pub use error::{Error, Result};
pub use palette::{
    AdobeSwatchSerializer, GimpSerializer, JascSerializer, JsonSerializer, PaintNetSerializer,
    PaletteSerializer, PaletteSerializers,
};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::collection::{
        ChangeKind, CollectionChange, ColorCollection, EventKind, ListenerId, SortOrder,
    };
    pub use crate::color::{Color, Hsl};
    pub use crate::error::{Error, Result};
    pub use crate::palette::{PaletteSerializer, PaletteSerializers, read_palette, write_palette};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Ordered color collection
//!
//! [`ColorCollection`] keeps colors in insertion order, allows duplicates and
//! answers "where is this color" in amortized O(1) through a lazily built
//! reverse index. Every mutation is announced to subscribed listeners.
//!
//! ```
//! use swatchbook::{Color, ColorCollection};
//!
//! let red = Color::from_argb(0xFFFF0000);
//! let green = Color::from_argb(0xFF00FF00);
//!
//! let mut colors = ColorCollection::from(vec![red, green, red]);
//! assert_eq!(colors.find(red), Some(0));
//!
//! colors.remove_at(0)?;
//! assert_eq!(colors.find(red), Some(1));
//! assert_eq!(colors.find(Color::from_argb(0xFF0000FF)), None);
//! # Ok::<(), swatchbook::Error>(())
//! ```

pub mod events;
mod lookup;
mod persist;
mod sort;

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Index;

use crate::color::{Color, Hsl};
use crate::error::{Error, Result};

pub use events::{ChangeKind, CollectionChange, EventKind, ListenerId};
pub use sort::SortOrder;

use events::Listeners;
use lookup::LookupIndex;

/// An ordered, duplicate-tolerant list of colors
///
/// Equality and hashing are by value: two collections are equal when they
/// hold the same packed colors in the same order. Cloning copies the colors
/// only; listeners and the lookup index stay with the original.
#[derive(Default)]
pub struct ColorCollection {
    items: Vec<Color>,
    lookup: LookupIndex,
    listeners: Listeners,
}

impl ColorCollection {
    /// Create an empty collection
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from(Vec::with_capacity(capacity))
    }

    /// Build from packed `0xAARRGGBB` values
    pub fn from_argb_values<I: IntoIterator<Item = u32>>(values: I) -> Self {
        values.into_iter().map(Color::from_argb).collect()
    }

    /// The shade strip of `color` from black towards white
    ///
    /// Produces `steps` colors with HSL lightness `i / steps`, keeping the
    /// hue, saturation and alpha of `color`.
    #[must_use]
    pub fn lightness_scale(color: Color, steps: usize) -> Self {
        let hsl = Hsl::from(color);
        (0..steps)
            .map(|i| hsl.with_lightness(i as f64 / steps as f64).to_color(color.a))
            .collect()
    }

    // ==================== Access ====================

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<Color> {
        self.items.get(index).copied()
    }

    #[must_use]
    pub fn first(&self) -> Option<Color> {
        self.items.first().copied()
    }

    #[must_use]
    pub fn last(&self) -> Option<Color> {
        self.items.last().copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Color> {
        self.items.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Color] {
        &self.items
    }

    // ==================== Lookup ====================

    /// Index of the first occurrence of `color`
    #[must_use]
    pub fn find(&self, color: Color) -> Option<usize> {
        self.find_argb(color.to_argb())
    }

    /// Index of the first occurrence of a packed `0xAARRGGBB` value
    #[must_use]
    pub fn find_argb(&self, argb: u32) -> Option<usize> {
        self.lookup.find(&self.items, argb)
    }

    /// Like [`find`](Self::find), optionally comparing red, green and blue only
    ///
    /// Ignoring alpha cannot use the reverse index and scans the whole list.
    #[must_use]
    pub fn find_with(&self, color: Color, ignore_alpha: bool) -> Option<usize> {
        if ignore_alpha {
            self.items.iter().position(|c| c.eq_rgb(color))
        } else {
            self.find(color)
        }
    }

    #[must_use]
    pub fn contains(&self, color: Color) -> bool {
        self.find(color).is_some()
    }

    // ==================== Mutation ====================

    /// Append a color
    pub fn push(&mut self, color: Color) {
        let index = self.items.len();
        self.insert_unchecked(index, color);
    }

    /// Append every color in order, one notification pair each
    pub fn add_range<I: IntoIterator<Item = Color>>(&mut self, colors: I) {
        for color in colors {
            self.push(color);
        }
    }

    /// Insert `color` at `index`, shifting later colors up
    ///
    /// `index` may equal `len()` to append.
    pub fn insert(&mut self, index: usize, color: Color) -> Result<()> {
        if index > self.items.len() {
            return Err(self.out_of_range(index));
        }
        self.insert_unchecked(index, color);
        Ok(())
    }

    /// Remove and return the color at `index`
    pub fn remove_at(&mut self, index: usize) -> Result<Color> {
        if index >= self.items.len() {
            return Err(self.out_of_range(index));
        }

        let removed = self.items.remove(index);
        self.lookup.removed(&self.items, index, removed);

        self.listeners
            .notify(&CollectionChange::at(ChangeKind::Removed, index, removed));
        Ok(removed)
    }

    /// Remove the first occurrence of `color`; returns whether one was found
    pub fn remove(&mut self, color: Color) -> bool {
        match self.find(color) {
            Some(index) => self.remove_at(index).is_ok(),
            None => false,
        }
    }

    /// Replace the color at `index`
    ///
    /// Setting the value already stored there changes nothing and fires no
    /// events.
    pub fn set(&mut self, index: usize, color: Color) -> Result<()> {
        let Some(&old) = self.items.get(index) else {
            return Err(self.out_of_range(index));
        };

        if old == color {
            return Ok(());
        }

        self.items[index] = color;
        self.lookup.replaced(&self.items, index, old);

        self.listeners
            .notify(&CollectionChange::at(ChangeKind::Replaced, index, color));
        Ok(())
    }

    /// Remove every color
    pub fn clear(&mut self) {
        self.items.clear();
        self.lookup.invalidate();
        self.listeners.notify(&CollectionChange::cleared());
    }

    // ==================== Events ====================

    /// Register `listener` for one kind of change
    pub fn subscribe<F>(&mut self, kind: EventKind, listener: F) -> ListenerId
    where
        F: Fn(&CollectionChange) + Send + Sync + 'static,
    {
        self.listeners.subscribe(kind, Box::new(listener))
    }

    /// Drop a listener; returns whether it was registered
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn insert_unchecked(&mut self, index: usize, color: Color) {
        self.items.insert(index, color);
        self.lookup.inserted(&self.items, index);

        self.listeners
            .notify(&CollectionChange::at(ChangeKind::Inserted, index, color));
    }

    fn out_of_range(&self, index: usize) -> Error {
        Error::OutOfRange {
            index,
            len: self.items.len(),
        }
    }
}

impl Clone for ColorCollection {
    fn clone(&self) -> Self {
        Self::from(self.items.clone())
    }
}

impl PartialEq for ColorCollection {
    fn eq(&self, other: &Self) -> bool {
        self.items.len() == other.items.len()
            && self
                .items
                .iter()
                .zip(&other.items)
                .all(|(a, b)| a.to_argb() == b.to_argb())
    }
}

impl Eq for ColorCollection {}

/// XOR of the packed values: order-insensitive, so permutations collide,
/// but always consistent with `==`.
impl Hash for ColorCollection {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.items
            .iter()
            .fold(0u32, |acc, color| acc ^ color.to_argb())
            .hash(state);
    }
}

impl fmt::Debug for ColorCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColorCollection")
            .field("items", &self.items)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl Index<usize> for ColorCollection {
    type Output = Color;

    fn index(&self, index: usize) -> &Color {
        &self.items[index]
    }
}

impl From<Vec<Color>> for ColorCollection {
    fn from(items: Vec<Color>) -> Self {
        Self {
            items,
            lookup: LookupIndex::default(),
            listeners: Listeners::default(),
        }
    }
}

impl From<&[Color]> for ColorCollection {
    fn from(items: &[Color]) -> Self {
        Self::from(items.to_vec())
    }
}

impl FromIterator<Color> for ColorCollection {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl FromIterator<u32> for ColorCollection {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self::from_argb_values(iter)
    }
}

impl Extend<Color> for ColorCollection {
    fn extend<I: IntoIterator<Item = Color>>(&mut self, iter: I) {
        self.add_range(iter);
    }
}

impl IntoIterator for ColorCollection {
    type Item = Color;
    type IntoIter = std::vec::IntoIter<Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a ColorCollection {
    type Item = &'a Color;
    type IntoIter = std::slice::Iter<'a, Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

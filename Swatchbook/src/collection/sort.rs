//! Perceptual sorting

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::ColorCollection;
use crate::color::{Color, compare};
use crate::error::{Error, Result};

/// Criterion for [`ColorCollection::sort`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOrder {
    /// HSL lightness, darkest first
    Brightness,
    /// HSL hue angle, starting at red
    Hue,
    /// Packed RGB value
    Value,
}

impl SortOrder {
    pub const ALL: [SortOrder; 3] = [SortOrder::Brightness, SortOrder::Hue, SortOrder::Value];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            SortOrder::Brightness => "brightness",
            SortOrder::Hue => "hue",
            SortOrder::Value => "value",
        }
    }

    fn comparator(self) -> fn(&Color, &Color) -> Ordering {
        match self {
            SortOrder::Brightness => compare::brightness,
            SortOrder::Hue => compare::hue,
            SortOrder::Value => compare::value,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        SortOrder::ALL
            .into_iter()
            .find(|order| order.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::InvalidArgument {
                name: "sort_order",
                message: format!("invalid sort order '{s}'"),
            })
    }
}

impl ColorCollection {
    /// Stable-sort the colors by `order`
    ///
    /// The collection is cleared and refilled in sorted order, so listeners
    /// see one cleared event followed by an insert for every color. Sorting an
    /// empty collection does nothing.
    pub fn sort(&mut self, order: SortOrder) {
        if self.is_empty() {
            return;
        }

        let mut ordered = self.items.clone();
        ordered.sort_by(order.comparator());

        self.clear();
        self.add_range(ordered);
    }

    /// Sort by a criterion given by name (`"brightness"`, `"hue"`, `"value"`)
    pub fn sort_by_name(&mut self, name: &str) -> Result<()> {
        let order = name.parse()?;
        self.sort(order);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::EventKind;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};

    fn sample() -> ColorCollection {
        ColorCollection::from_argb_values([
            0xFFFFFFFF, 0xFF0000FF, 0xFF000000, 0xFF00FF00, 0xFFFF0000, 0x80FF0000, 0xFF808080,
        ])
    }

    fn sorted_multiset(colors: &ColorCollection) -> Vec<u32> {
        let mut packed: Vec<u32> = colors.iter().map(|c| c.to_argb()).collect();
        packed.sort_unstable();
        packed
    }

    #[test]
    fn test_sort_is_non_decreasing_and_keeps_elements() {
        for order in SortOrder::ALL {
            let mut colors = sample();
            let before = sorted_multiset(&colors);

            colors.sort(order);

            assert_eq!(sorted_multiset(&colors), before);
            let cmp = order.comparator();
            assert!(
                colors
                    .as_slice()
                    .windows(2)
                    .all(|pair| cmp(&pair[0], &pair[1]) != Ordering::Greater),
                "{order} not sorted"
            );
        }
    }

    #[test]
    fn test_sort_is_stable() {
        // Same value ignoring alpha: original order must be kept
        let mut colors = ColorCollection::from_argb_values([0xFF00FF00, 0x10FF0000, 0xFFFF0000, 0x20FF0000]);
        colors.sort(SortOrder::Value);
        let packed: Vec<u32> = colors.iter().map(|c| c.to_argb()).collect();
        assert_eq!(packed, vec![0xFF00FF00, 0x10FF0000, 0xFFFF0000, 0x20FF0000]);
    }

    #[test]
    fn test_sort_rebuilds_lookup() {
        let mut colors = sample();
        assert_eq!(colors.find_argb(0xFF000000), Some(2));

        colors.sort(SortOrder::Brightness);
        assert_eq!(colors.find_argb(0xFF000000), Some(0));
        assert_eq!(colors.find_argb(0xFFFFFFFF), Some(colors.len() - 1));
    }

    #[test]
    fn test_sort_notifications() {
        let count = Arc::new(AtomicUsize::new(0));
        let mut colors = sample();
        let counter = Arc::clone(&count);
        colors.subscribe(EventKind::CollectionChanged, move |_| {
            counter.fetch_add(1, AtomicOrdering::SeqCst);
        });

        colors.sort(SortOrder::Hue);
        // One clear plus one insert per color
        assert_eq!(count.load(AtomicOrdering::SeqCst), 1 + colors.len());

        let mut empty = ColorCollection::new();
        let counter = Arc::clone(&count);
        empty.subscribe(EventKind::CollectionChanged, move |_| {
            counter.fetch_add(100, AtomicOrdering::SeqCst);
        });
        empty.sort(SortOrder::Hue);
        assert_eq!(count.load(AtomicOrdering::SeqCst), 1 + colors.len());
    }

    #[test]
    fn test_sort_by_name() {
        let mut colors = sample();
        colors.sort_by_name("Brightness").unwrap();
        assert_eq!(colors.first(), Some(Color::BLACK));

        let before = colors.clone();
        let err = colors.sort_by_name("saturation").unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { name: "sort_order", .. }));
        assert_eq!(colors, before);
    }
}

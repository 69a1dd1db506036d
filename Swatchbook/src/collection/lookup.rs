//! Reverse lookup from packed color to first occurrence
//!
//! The map is built lazily by the first `find` and then patched by cheap
//! mutations (appends, tail removals, replacements). Anything that would
//! shift recorded positions drops it instead; the next lookup rebuilds.
//!
//! Invariant while built: for every key `k`, `items[map[k]]` packs to `k`
//! and no earlier position does.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use crate::color::Color;

type IndexMap = HashMap<u32, usize>;

/// Lazily built first-occurrence index guarded by a per-collection lock
///
/// `None` means "not built", which is different from a built, empty map.
#[derive(Debug, Default)]
pub(crate) struct LookupIndex {
    map: Mutex<Option<IndexMap>>,
}

impl LookupIndex {
    /// Position of the first occurrence of `key`, building the map if needed
    pub fn find(&self, items: &[Color], key: u32) -> Option<usize> {
        let mut guard = self.map.lock().unwrap_or_else(PoisonError::into_inner);
        let map = guard.get_or_insert_with(|| build(items));
        map.get(&key).copied()
    }

    #[cfg(test)]
    pub fn is_built(&self) -> bool {
        self.map
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    pub fn invalidate(&mut self) {
        *self.slot() = None;
    }

    /// Called after `items[index]` was inserted
    pub fn inserted(&mut self, items: &[Color], index: usize) {
        let key = items[index].to_argb();
        let appended = index + 1 == items.len();

        let patched = match self.slot() {
            Some(map) if appended && !map.contains_key(&key) => {
                map.insert(key, index);
                true
            }
            _ => false,
        };

        if !patched {
            self.invalidate();
        }
    }

    /// Called after `removed` was taken out of position `index`
    pub fn removed(&mut self, items: &[Color], index: usize, removed: Color) {
        let tail = index == items.len();
        let Some(map) = self.slot() else {
            return;
        };

        if tail {
            // Nothing shifted, only the key itself may be gone
            let key = removed.to_argb();
            if map.get(&key) == Some(&index) {
                map.remove(&key);
            }
        } else {
            self.invalidate();
        }
    }

    /// Called after `old` at `index` was overwritten with `items[index]`
    pub fn replaced(&mut self, items: &[Color], index: usize, old: Color) {
        let Some(map) = self.slot() else {
            return;
        };

        let old_key = old.to_argb();
        if map.get(&old_key) == Some(&index) {
            // The first occurrence moved on to the next duplicate, if any
            match items[index + 1..].iter().position(|c| c.to_argb() == old_key) {
                Some(offset) => {
                    map.insert(old_key, index + 1 + offset);
                }
                None => {
                    map.remove(&old_key);
                }
            }
        }

        let new_key = items[index].to_argb();
        if map.get(&new_key).is_none_or(|&first| first > index) {
            map.insert(new_key, index);
        }
    }

    fn slot(&mut self) -> &mut Option<IndexMap> {
        self.map.get_mut().unwrap_or_else(PoisonError::into_inner)
    }
}

fn build(items: &[Color]) -> IndexMap {
    let mut map = IndexMap::with_capacity(items.len());
    for (i, color) in items.iter().enumerate() {
        map.entry(color.to_argb()).or_insert(i);
    }

    tracing::debug!(
        "Built color lookup: {} colors, {} distinct",
        items.len(),
        map.len()
    );
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::from_argb(0xFFFF0000);
    const GREEN: Color = Color::from_argb(0xFF00FF00);
    const BLUE: Color = Color::from_argb(0xFF0000FF);

    #[test]
    fn test_lazy_build_records_first_occurrence() {
        let items = [RED, GREEN, RED];
        let index = LookupIndex::default();
        assert!(!index.is_built());

        assert_eq!(index.find(&items, RED.to_argb()), Some(0));
        assert_eq!(index.find(&items, GREEN.to_argb()), Some(1));
        assert_eq!(index.find(&items, BLUE.to_argb()), None);
        assert!(index.is_built());
    }

    #[test]
    fn test_built_empty_is_not_unbuilt() {
        let index = LookupIndex::default();
        assert_eq!(index.find(&[], RED.to_argb()), None);
        assert!(index.is_built());
    }

    #[test]
    fn test_append_patches_in_place() {
        let mut items = vec![RED];
        let mut index = LookupIndex::default();
        index.find(&items, RED.to_argb());

        items.push(GREEN);
        index.inserted(&items, 1);
        assert!(index.is_built());
        assert_eq!(index.find(&items, GREEN.to_argb()), Some(1));
    }

    #[test]
    fn test_middle_insert_invalidates() {
        let mut items = vec![RED, GREEN];
        let mut index = LookupIndex::default();
        index.find(&items, RED.to_argb());

        items.insert(0, BLUE);
        index.inserted(&items, 0);
        assert!(!index.is_built());
        assert_eq!(index.find(&items, GREEN.to_argb()), Some(2));
    }

    #[test]
    fn test_tail_removal_keeps_earlier_duplicate() {
        let mut items = vec![RED, GREEN, RED];
        let mut index = LookupIndex::default();
        index.find(&items, RED.to_argb());

        let removed = items.pop().unwrap();
        index.removed(&items, 2, removed);
        assert!(index.is_built());
        assert_eq!(index.find(&items, RED.to_argb()), Some(0));

        let removed = items.pop().unwrap();
        index.removed(&items, 1, removed);
        assert_eq!(index.find(&items, GREEN.to_argb()), None);
    }

    #[test]
    fn test_replace_moves_first_occurrence_forward() {
        let mut items = vec![RED, GREEN, RED, BLUE];
        let mut index = LookupIndex::default();
        index.find(&items, RED.to_argb());

        items[0] = BLUE;
        index.replaced(&items, 0, RED);
        assert_eq!(index.find(&items, RED.to_argb()), Some(2));
        assert_eq!(index.find(&items, BLUE.to_argb()), Some(0));
        assert_eq!(index.find(&items, GREEN.to_argb()), Some(1));
    }
}

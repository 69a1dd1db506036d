//! Change notifications for [`ColorCollection`](super::ColorCollection)
//!
//! Listeners subscribe to one [`EventKind`]. Every mutation fires its
//! specific event first and then [`EventKind::CollectionChanged`] with the
//! same payload, synchronously, before the mutating call returns.

use std::fmt;

use crate::color::Color;

/// Notification channel a listener subscribes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    ItemInserted,
    ItemRemoved,
    ItemReplaced,
    ItemsCleared,
    /// Fired after every specific event
    CollectionChanged,
}

/// What happened to the collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    Inserted,
    Removed,
    Replaced,
    Cleared,
}

impl ChangeKind {
    /// The specific channel this change is announced on
    #[must_use]
    pub fn event_kind(self) -> EventKind {
        match self {
            ChangeKind::Inserted => EventKind::ItemInserted,
            ChangeKind::Removed => EventKind::ItemRemoved,
            ChangeKind::Replaced => EventKind::ItemReplaced,
            ChangeKind::Cleared => EventKind::ItemsCleared,
        }
    }
}

/// Payload delivered to listeners
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CollectionChange {
    pub kind: ChangeKind,
    /// Affected position; `None` when the whole collection was cleared
    pub index: Option<usize>,
    /// Inserted, removed or new color; [`Color::EMPTY`] on clear
    pub color: Color,
}

impl CollectionChange {
    pub(crate) fn at(kind: ChangeKind, index: usize, color: Color) -> Self {
        Self {
            kind,
            index: Some(index),
            color,
        }
    }

    pub(crate) fn cleared() -> Self {
        Self {
            kind: ChangeKind::Cleared,
            index: None,
            color: Color::EMPTY,
        }
    }
}

/// Handle returned by `subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

type Listener = Box<dyn Fn(&CollectionChange) + Send + Sync>;

/// Registered listeners in subscription order
#[derive(Default)]
pub(crate) struct Listeners {
    next_id: u64,
    entries: Vec<(ListenerId, EventKind, Listener)>,
}

impl Listeners {
    pub fn subscribe(&mut self, kind: EventKind, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, kind, listener));
        id
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Fire the specific event, then the aggregate one
    pub fn notify(&self, change: &CollectionChange) {
        if self.entries.is_empty() {
            return;
        }

        self.dispatch(change.kind.event_kind(), change);
        self.dispatch(EventKind::CollectionChanged, change);
    }

    fn dispatch(&self, kind: EventKind, change: &CollectionChange) {
        for (_, _, listener) in self.entries.iter().filter(|(_, k, _)| *k == kind) {
            listener(change);
        }
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn recorder(log: &Arc<Mutex<Vec<String>>>, tag: &'static str) -> Listener {
        let log = Arc::clone(log);
        Box::new(move |change: &CollectionChange| {
            log.lock().unwrap().push(format!("{tag}:{:?}", change.index));
        })
    }

    #[test]
    fn test_specific_then_aggregate() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut listeners = Listeners::default();
        // Aggregate subscribed first, still fires second
        listeners.subscribe(EventKind::CollectionChanged, recorder(&log, "changed"));
        listeners.subscribe(EventKind::ItemInserted, recorder(&log, "inserted"));
        listeners.subscribe(EventKind::ItemRemoved, recorder(&log, "removed"));

        listeners.notify(&CollectionChange::at(ChangeKind::Inserted, 3, Color::WHITE));

        assert_eq!(*log.lock().unwrap(), vec!["inserted:Some(3)", "changed:Some(3)"]);
    }

    #[test]
    fn test_unsubscribe() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut listeners = Listeners::default();
        let id = listeners.subscribe(EventKind::ItemsCleared, recorder(&log, "cleared"));

        assert!(listeners.unsubscribe(id));
        assert!(!listeners.unsubscribe(id));
        assert_eq!(listeners.len(), 0);

        listeners.notify(&CollectionChange::cleared());
        assert!(log.lock().unwrap().is_empty());
    }
}

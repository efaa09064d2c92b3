//! Change notifications for the book and teacher collections.
//!
//! Events carry no payload. A subscriber reacts by reading the collection it
//! cares about again, so it always sees the state after the mutation.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    TeacherAdded,
    TeacherUpdated,
    TeacherDeleted,
    BookAdded,
    BookUpdated,
    BookDeleted,
}

impl EventKind {
    pub const ALL: [EventKind; 6] = [
        EventKind::TeacherAdded,
        EventKind::TeacherUpdated,
        EventKind::TeacherDeleted,
        EventKind::BookAdded,
        EventKind::BookUpdated,
        EventKind::BookDeleted,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::TeacherAdded => "teacher-added",
            EventKind::TeacherUpdated => "teacher-updated",
            EventKind::TeacherDeleted => "teacher-deleted",
            EventKind::BookAdded => "book-added",
            EventKind::BookUpdated => "book-updated",
            EventKind::BookDeleted => "book-deleted",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

type Callback = Arc<dyn Fn() + Send + Sync>;

/// Handle returned by [`EventBus::subscribe`]; pass it back to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription {
    kind: EventKind,
    id: u64,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    handlers: HashMap<EventKind, Vec<(u64, Callback)>>,
}

/// Ordered observer registry keyed by [`EventKind`].
#[derive(Clone, Default)]
pub struct EventBus {
    registry: Arc<RwLock<Registry>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&self, kind: EventKind, callback: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        let mut reg = self.registry.write().unwrap_or_else(PoisonError::into_inner);
        reg.next_id += 1;
        let id = reg.next_id;
        reg.handlers.entry(kind).or_default().push((id, Arc::new(callback)));
        Subscription { kind, id }
    }

    /// Returns false when the handle was already removed.
    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        let mut reg = self.registry.write().unwrap_or_else(PoisonError::into_inner);
        let Some(list) = reg.handlers.get_mut(&subscription.kind) else {
            return false;
        };
        let before = list.len();
        list.retain(|(id, _)| *id != subscription.id);
        list.len() < before
    }

    /// Call every subscriber of `kind` in registration order and return how
    /// many were called. The registry lock is not held while callbacks run, so
    /// a callback may subscribe, unsubscribe, or read the stores.
    pub fn emit(&self, kind: EventKind) -> usize {
        let callbacks: Vec<Callback> = {
            let reg = self.registry.read().unwrap_or_else(PoisonError::into_inner);
            reg.handlers
                .get(&kind)
                .map(|list| list.iter().map(|(_, cb)| Arc::clone(cb)).collect())
                .unwrap_or_default()
        };
        trace!(event = %kind, subscribers = callbacks.len(), "emitting");
        for cb in &callbacks {
            cb();
        }
        callbacks.len()
    }

    pub fn subscriber_count(&self, kind: EventKind) -> usize {
        let reg = self.registry.read().unwrap_or_else(PoisonError::into_inner);
        reg.handlers.get(&kind).map_or(0, Vec::len)
    }
}

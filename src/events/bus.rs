//! Callback-based event bus.
//!
//! Observers subscribe a callback either to one [`EventKind`] or to every
//! event, and may unsubscribe with the returned [`SubscriptionId`].
//! Callbacks for a kind run in subscription order, before catch-all ones.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::event::{EventKind, EventSink, GameEvent};

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriptionId(pub u32);

type Callback = Box<dyn FnMut(&GameEvent)>;

struct Subscription {
    id: SubscriptionId,
    callback: Callback,
}

/// Publish-subscribe dispatcher implementing [`EventSink`].
#[derive(Default)]
pub struct EventBus {
    by_kind: FxHashMap<EventKind, Vec<Subscription>>,
    all: Vec<Subscription>,
    next_id: u32,
}

impl EventBus {
    /// Create an empty bus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Call `callback` for every event of `kind`.
    pub fn subscribe(
        &mut self,
        kind: EventKind,
        callback: impl FnMut(&GameEvent) + 'static,
    ) -> SubscriptionId {
        let id = self.alloc_id();
        self.by_kind.entry(kind).or_default().push(Subscription {
            id,
            callback: Box::new(callback),
        });
        id
    }

    /// Call `callback` for every event.
    pub fn subscribe_all(&mut self, callback: impl FnMut(&GameEvent) + 'static) -> SubscriptionId {
        let id = self.alloc_id();
        self.all.push(Subscription {
            id,
            callback: Box::new(callback),
        });
        id
    }

    /// Remove a subscription.
    ///
    /// Returns true if it was found.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscriber_count();
        for subs in self.by_kind.values_mut() {
            subs.retain(|s| s.id != id);
        }
        self.all.retain(|s| s.id != id);
        self.subscriber_count() != before
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.by_kind.values().map(Vec::len).sum::<usize>() + self.all.len()
    }

    fn alloc_id(&mut self) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        id
    }
}

impl EventSink for EventBus {
    fn emit(&mut self, event: GameEvent) {
        if let Some(subs) = self.by_kind.get_mut(&event.kind()) {
            for sub in subs.iter_mut() {
                (sub.callback)(&event);
            }
        }
        for sub in self.all.iter_mut() {
            (sub.callback)(&event);
        }
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

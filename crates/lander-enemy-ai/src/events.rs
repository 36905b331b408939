//! Per-enemy event bus.
//!
//! Listeners register for one [`EnemyEventKind`] or for everything and are
//! called synchronously, in registration order, before `update` returns.
//! Listeners must not call back into the emitting enemy.

use lander_core::events::{EnemyEvent, EnemyEventKind};

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&EnemyEvent) + Send + Sync>;

struct Subscription {
    id: SubscriptionId,
    /// `None` receives every event.
    kind: Option<EnemyEventKind>,
    listener: Listener,
}

#[derive(Default)]
pub struct EventBus {
    subscriptions: Vec<Subscription>,
    next_id: u64,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Listen for one kind of event.
    pub fn subscribe(
        &mut self,
        kind: EnemyEventKind,
        listener: impl FnMut(&EnemyEvent) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.add(Some(kind), Box::new(listener))
    }

    /// Listen for every event.
    pub fn subscribe_all(&mut self, listener: impl FnMut(&EnemyEvent) + Send + Sync + 'static) -> SubscriptionId {
        self.add(None, Box::new(listener))
    }

    /// Remove a listener. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscriptions.len();
        self.subscriptions.retain(|s| s.id != id);
        self.subscriptions.len() != before
    }

    /// Deliver `event` to every matching listener.
    pub fn emit(&mut self, event: &EnemyEvent) {
        let kind = event.kind();
        for sub in &mut self.subscriptions {
            if sub.kind.map_or(true, |k| k == kind) {
                (sub.listener)(event);
            }
        }
    }

    /// Drop every listener.
    pub fn clear(&mut self) {
        self.subscriptions.clear();
    }

    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }

    fn add(&mut self, kind: Option<EnemyEventKind>, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscriptions.push(Subscription { id, kind, listener });
        id
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscriptions", &self.subscriptions.len())
            .finish()
    }
}

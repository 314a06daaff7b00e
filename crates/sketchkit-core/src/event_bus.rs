//! Synchronous document event bus.
//!
//! Documents publish typed change notifications; the window-management
//! layer subscribes to refresh titles and save actions. Handlers run
//! synchronously on the publishing (UI) thread, matching the
//! application's single-threaded callback model.

use parking_lot::RwLock;
use std::collections::HashMap;
use uuid::Uuid;

use crate::handles::WindowId;

/// Subscription handle for unsubscribing from events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

impl SubscriptionId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sub({})", &self.0.to_string()[..8])
    }
}

/// Typed change notifications published by a document.
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentEvent {
    /// The displayed title changed (blob assigned or renamed).
    TitleChanged { title: String },
    /// The result of `is_saveable()` may have changed.
    SaveabilityChanged { saveable: bool },
    /// The document was written to its blob.
    Saved { blob_name: String, bytes: usize },
    /// A window was attached to the document.
    WindowAttached { window: WindowId },
    /// A window was detached from the document.
    WindowDetached { window: WindowId },
    /// The active window changed (or was cleared).
    ActiveWindowChanged { window: Option<WindowId> },
}

impl DocumentEvent {
    /// Get the category of this event.
    pub fn category(&self) -> EventCategory {
        match self {
            DocumentEvent::TitleChanged { .. } => EventCategory::Title,
            DocumentEvent::SaveabilityChanged { .. } => EventCategory::Saveability,
            DocumentEvent::Saved { .. } => EventCategory::Persistence,
            DocumentEvent::WindowAttached { .. }
            | DocumentEvent::WindowDetached { .. }
            | DocumentEvent::ActiveWindowChanged { .. } => EventCategory::Window,
        }
    }
}

/// Event category for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventCategory {
    Title,
    Saveability,
    Persistence,
    Window,
}

/// Filter to receive only specific event types.
#[derive(Debug, Clone, Default)]
pub enum EventFilter {
    /// Receive all events.
    #[default]
    All,
    /// Receive events matching any of these categories.
    Categories(Vec<EventCategory>),
}

impl EventFilter {
    /// Check if an event matches this filter.
    pub fn matches(&self, event: &DocumentEvent) -> bool {
        match self {
            EventFilter::All => true,
            EventFilter::Categories(categories) => categories.contains(&event.category()),
        }
    }
}

type EventHandler = Box<dyn Fn(&DocumentEvent) + Send + Sync>;

/// Per-document event bus with synchronous handlers.
#[derive(Default)]
pub struct EventBus {
    handlers: RwLock<HashMap<SubscriptionId, (EventFilter, EventHandler)>>,
}

impl EventBus {
    /// Create an empty bus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe a handler for events matching `filter`.
    pub fn subscribe<F>(&self, filter: EventFilter, handler: F) -> SubscriptionId
    where
        F: Fn(&DocumentEvent) + Send + Sync + 'static,
    {
        let id = SubscriptionId::new();
        self.handlers
            .write()
            .insert(id, (filter, Box::new(handler)));
        id
    }

    /// Remove a subscription. Returns whether it existed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.handlers.write().remove(&id).is_some()
    }

    /// Publish an event to all matching subscribers, returning the
    /// number of handlers invoked.
    pub fn publish(&self, event: &DocumentEvent) -> usize {
        tracing::trace!(?event, "publish");
        let handlers = self.handlers.read();
        let mut notified = 0;
        for (filter, handler) in handlers.values() {
            if filter.matches(event) {
                handler(event);
                notified += 1;
            }
        }
        notified
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_subscribe_and_publish() {
        let bus = EventBus::new();
        let seen = Arc::new(AtomicUsize::new(0));
        let seen2 = seen.clone();
        bus.subscribe(EventFilter::All, move |_| {
            seen2.fetch_add(1, Ordering::Relaxed);
        });

        let notified = bus.publish(&DocumentEvent::SaveabilityChanged { saveable: true });
        assert_eq!(notified, 1);
        assert_eq!(seen.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_filter_by_category() {
        let bus = EventBus::new();
        let seen = Arc::new(AtomicUsize::new(0));
        let seen2 = seen.clone();
        bus.subscribe(
            EventFilter::Categories(vec![EventCategory::Title]),
            move |_| {
                seen2.fetch_add(1, Ordering::Relaxed);
            },
        );

        bus.publish(&DocumentEvent::SaveabilityChanged { saveable: false });
        assert_eq!(seen.load(Ordering::Relaxed), 0);

        bus.publish(&DocumentEvent::TitleChanged {
            title: "a.skk".to_string(),
        });
        assert_eq!(seen.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let bus = EventBus::new();
        let id = bus.subscribe(EventFilter::All, |_| {});
        assert!(bus.unsubscribe(id));
        assert!(!bus.unsubscribe(id));
        let notified = bus.publish(&DocumentEvent::SaveabilityChanged { saveable: true });
        assert_eq!(notified, 0);
    }
}

//! Process-wide pointer interaction stream.
//!
//! Widgets that need to react to clicks anywhere (outside-click dismissal)
//! subscribe a capture-phase handler here. The host dispatches every pointer
//! event to the stream before routing it to its target. Handlers run in an
//! unspecified order and must decide relevance on their own.

use std::sync::{Arc, OnceLock, RwLock, Weak};

use crate::event::Event;

type Handler = Arc<dyn Fn(&Event) + Send + Sync>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    handlers: Vec<(u64, Handler)>,
}

/// A stream of pointer events with capture-phase subscribers.
///
/// Cloning shares the same subscriber set.
#[derive(Clone, Default)]
pub struct PointerStream {
    registry: Arc<RwLock<Registry>>,
}

impl std::fmt::Debug for PointerStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PointerStream")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

impl PointerStream {
    /// Create an independent stream.
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide stream.
    pub fn global() -> &'static PointerStream {
        static GLOBAL: OnceLock<PointerStream> = OnceLock::new();
        GLOBAL.get_or_init(PointerStream::new)
    }

    /// Register a capture-phase handler.
    ///
    /// The handler stays registered until the returned [`Subscription`] is
    /// dropped or explicitly unsubscribed.
    pub fn subscribe<F>(&self, handler: F) -> Subscription
    where
        F: Fn(&Event) + Send + Sync + 'static,
    {
        let id = match self.registry.write() {
            Ok(mut guard) => {
                let id = guard.next_id;
                guard.next_id += 1;
                guard.handlers.push((id, Arc::new(handler)));
                id
            }
            Err(_) => {
                log::warn!("[pointer_stream] registry poisoned, subscription is inert");
                u64::MAX
            }
        };
        log::trace!("[pointer_stream] subscribed #{id}");

        Subscription {
            id,
            registry: Arc::downgrade(&self.registry),
        }
    }

    /// Deliver a pointer event to every subscriber.
    ///
    /// Non-pointer events are ignored. The subscriber list is snapshotted
    /// first, so handlers may subscribe or unsubscribe while running.
    /// Returns the number of handlers invoked.
    pub fn dispatch(&self, event: &Event) -> usize {
        if !event.is_pointer() {
            return 0;
        }

        let handlers: Vec<Handler> = match self.registry.read() {
            Ok(guard) => guard.handlers.iter().map(|(_, h)| Arc::clone(h)).collect(),
            Err(_) => return 0,
        };

        log::trace!(
            "[pointer_stream] dispatch target={:?} to {} handlers",
            event.target(),
            handlers.len()
        );

        for handler in &handlers {
            handler(event);
        }
        handlers.len()
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.registry
            .read()
            .map(|guard| guard.handlers.len())
            .unwrap_or(0)
    }
}

/// Guard for a registered handler. Dropping it unsubscribes.
#[must_use = "dropping a subscription unsubscribes immediately"]
pub struct Subscription {
    id: u64,
    registry: Weak<RwLock<Registry>>,
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}

impl Subscription {
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Whether the handler is still registered.
    pub fn is_active(&self) -> bool {
        self.registry
            .upgrade()
            .and_then(|registry| {
                registry
                    .read()
                    .ok()
                    .map(|guard| guard.handlers.iter().any(|(id, _)| *id == self.id))
            })
            .unwrap_or(false)
    }

    /// Remove the handler now.
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            if let Ok(mut guard) = registry.write() {
                guard.handlers.retain(|(id, _)| *id != self.id);
                log::trace!("[pointer_stream] unsubscribed #{}", self.id);
            }
        }
    }
}

use std::panic::{self, AssertUnwindSafe};

use crate::model::ResonanceEvent;

/// What a listener reports back. Errors are logged, never propagated.
pub type ListenerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

type Listener = Box<dyn FnMut(&ResonanceEvent) -> ListenerResult + Send>;

/// Handle returned by [`EventNotifier::add_listener`], used to unregister.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Synchronous fan-out to registered listeners, in registration order.
#[derive(Default)]
pub struct EventNotifier {
    listeners: Vec<(ListenerId, Listener)>,
    next_id: u64,
}

impl std::fmt::Debug for EventNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventNotifier")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl EventNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_listener<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&ResonanceEvent) -> ListenerResult + Send + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if the listener was not registered.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Deliver `event` to every listener. A listener that errors or panics is
    /// logged and skipped; the rest still receive the event.
    pub fn notify(&mut self, event: &ResonanceEvent) {
        for (id, listener) in &mut self.listeners {
            match panic::catch_unwind(AssertUnwindSafe(|| listener(event))) {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    tracing::warn!("Listener {:?} failed on {}: {e}", id, event.name());
                }
                Err(_) => {
                    tracing::warn!("Listener {:?} panicked on {}", id, event.name());
                }
            }
        }
    }
}

//! Change notification: an ordered publish/subscribe registry.
//!
//! Observers receive a zero-argument callback after every state
//! mutation and read whatever they need from the query surface. They
//! are invoked synchronously, in registration order. The notifier
//! passes no payload and makes no reentrancy promises: all access runs
//! through `&mut`, so observers cannot mutate the registry from inside
//! a notification.

use std::fmt;

/// Handle identifying one subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// Ordered list of observer callbacks.
#[derive(Default)]
pub struct ChangeNotifier {
    observers: Vec<(ObserverId, Box<dyn FnMut()>)>,
    next_id: u64,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an observer and returns its handle. Observers are
    /// notified in registration order.
    pub fn subscribe<F: FnMut() + 'static>(&mut self, observer: F) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Removes an observer. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        self.observers.len() != before
    }

    /// Invokes every observer once, in registration order.
    pub fn notify(&mut self) {
        for (_, observer) in &mut self.observers {
            observer();
        }
    }

    /// Number of registered observers.
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("observers", &self.observers.len())
            .finish()
    }
}

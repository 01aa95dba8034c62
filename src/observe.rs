// SPDX-License-Identifier: MPL-2.0
//! Subscriber registry for the two selection-state holders.
//!
//! Both resolvers own one of these and invoke [`Listeners::emit`]
//! synchronously after committing new state, so every subscriber observes
//! the already-committed value. Everything runs on the UI event loop; there
//! is no concurrent writer and therefore no locking.

/// Handle returned by [`Listeners::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(usize);

/// An owned list of change listeners.
pub struct Listeners<T> {
    entries: Vec<(usize, Box<dyn Fn(&T)>)>,
    next_id: usize,
}

impl<T> Listeners<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    /// Registers a listener and returns the id to cancel it with.
    pub fn subscribe(&mut self, listener: impl Fn(&T) + 'static) -> SubscriptionId {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push((id, Box::new(listener)));
        SubscriptionId(id)
    }

    /// Removes a listener. Unknown ids are ignored.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.entries.retain(|(entry_id, _)| *entry_id != id.0);
    }

    /// Invokes every listener with the committed value, in subscription order.
    pub fn emit(&self, value: &T) {
        for (_, listener) in &self.entries {
            listener(value);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for Listeners<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn emit_invokes_listeners_in_subscription_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut listeners = Listeners::new();

        let first = Rc::clone(&seen);
        listeners.subscribe(move |value: &String| first.borrow_mut().push(format!("a:{value}")));
        let second = Rc::clone(&seen);
        listeners.subscribe(move |value: &String| second.borrow_mut().push(format!("b:{value}")));

        listeners.emit(&"te".to_string());
        assert_eq!(*seen.borrow(), vec!["a:te".to_string(), "b:te".to_string()]);
    }

    #[test]
    fn unsubscribed_listener_is_not_invoked() {
        let seen = Rc::new(RefCell::new(0));
        let mut listeners = Listeners::new();

        let counter = Rc::clone(&seen);
        let id = listeners.subscribe(move |_: &u32| *counter.borrow_mut() += 1);

        listeners.emit(&1);
        listeners.unsubscribe(id);
        listeners.emit(&2);

        assert_eq!(*seen.borrow(), 1);
        assert!(listeners.is_empty());
    }

    #[test]
    fn unsubscribe_with_unknown_id_is_ignored() {
        let mut listeners: Listeners<u32> = Listeners::new();
        let id = listeners.subscribe(|_| {});
        listeners.unsubscribe(id);
        // A second cancellation of the same id is a no-op.
        listeners.unsubscribe(id);
        assert_eq!(listeners.len(), 0);
    }

    #[test]
    fn ids_are_not_reused_after_unsubscribe() {
        let mut listeners: Listeners<u32> = Listeners::new();
        let first = listeners.subscribe(|_| {});
        listeners.unsubscribe(first);
        let second = listeners.subscribe(|_| {});
        assert_ne!(first, second);
    }
}

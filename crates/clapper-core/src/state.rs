//! Reactive state cell
//!
//! A [`Signal`] is a shared value with synchronous change notification.
//! Clones share the same value and subscriber list.

use parking_lot::RwLock;
use smallvec::SmallVec;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Callback function triggered on state changes
pub type StateCallback<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Handle returned by [`Signal::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Shared reactive value
pub struct Signal<T: Clone + Send + Sync + 'static> {
    value: Arc<RwLock<T>>,
    subscribers: Arc<RwLock<SmallVec<[(SubscriptionId, StateCallback<T>); 4]>>>,
}

impl<T: Clone + Send + Sync + 'static> Signal<T> {
    /// Create a new signal with initial value
    pub fn new(initial: T) -> Self {
        Self {
            value: Arc::new(RwLock::new(initial)),
            subscribers: Arc::new(RwLock::new(SmallVec::new())),
        }
    }

    /// Get current value
    pub fn get(&self) -> T {
        self.value.read().clone()
    }

    /// Read the current value without cloning it
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&*self.value.read())
    }

    /// Set new value and notify subscribers
    pub fn set(&self, value: T) {
        *self.value.write() = value.clone();
        self.notify(&value);
    }

    /// Update value with a function
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        let mut guard = self.value.write();
        f(&mut *guard);
        let value = guard.clone();
        drop(guard);
        self.notify(&value);
    }

    /// Subscribe to value changes
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let id = SubscriptionId::next();
        let callback: StateCallback<T> = Arc::new(callback);
        self.subscribers.write().push((id, callback));
        id
    }

    /// Remove a subscriber; returns false if it was not registered
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers.write();
        let before = subscribers.len();
        subscribers.retain(|(sub_id, _)| *sub_id != id);
        subscribers.len() != before
    }

    /// Number of active subscribers
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.read().len()
    }

    /// Create a signal that derives from this one
    pub fn computed<U, F>(&self, f: F) -> Signal<U>
    where
        U: Clone + Send + Sync + 'static,
        F: Fn(&T) -> U + Send + Sync + 'static,
    {
        let computed = Signal::new(self.with(&f));
        let computed_clone = computed.clone();

        self.subscribe(move |value| computed_clone.set(f(value)));

        computed
    }

    fn notify(&self, value: &T) {
        // Snapshot so callbacks may subscribe or read without deadlocking.
        let callbacks: SmallVec<[StateCallback<T>; 4]> = self
            .subscribers
            .read()
            .iter()
            .map(|(_, cb)| Arc::clone(cb))
            .collect();
        for callback in callbacks {
            callback(value);
        }
    }
}

impl<T: Clone + Send + Sync + 'static> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self {
            value: Arc::clone(&self.value),
            subscribers: Arc::clone(&self.subscribers),
        }
    }
}

impl<T: Clone + Send + Sync + fmt::Debug + 'static> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("value", &*self.value.read())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

impl<T: Clone + Send + Sync + Default + 'static> Default for Signal<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[test]
    fn test_signal_set_and_update() {
        let signal = Signal::new(0);
        signal.set(5);
        assert_eq!(signal.get(), 5);

        signal.update(|v| *v *= 2);
        assert_eq!(signal.get(), 10);
    }

    #[test]
    fn test_clones_share_value() {
        let signal = Signal::new(String::from("a"));
        let other = signal.clone();
        other.set("b".to_string());
        assert_eq!(signal.get(), "b");
    }

    #[test]
    fn test_subscribe_and_unsubscribe() {
        let signal = Signal::new(0);
        let received = Arc::new(Mutex::new(Vec::new()));
        let received_clone = received.clone();

        let id = signal.subscribe(move |v| received_clone.lock().push(*v));
        signal.set(1);
        signal.update(|v| *v += 1);

        assert!(signal.unsubscribe(id));
        assert!(!signal.unsubscribe(id));
        signal.set(99);

        assert_eq!(*received.lock(), vec![1, 2]);
        assert_eq!(signal.subscriber_count(), 0);
    }

    #[test]
    fn test_computed_follows_source() {
        let signal = Signal::new(3);
        let doubled = signal.computed(|v| v * 2);
        assert_eq!(doubled.get(), 6);

        signal.set(7);
        assert_eq!(doubled.get(), 14);
    }

    #[test]
    fn test_callback_can_read_signal() {
        let signal = Signal::new(1);
        let seen = Arc::new(Mutex::new(0));
        let (seen_clone, signal_clone) = (seen.clone(), signal.clone());

        signal.subscribe(move |_| *seen_clone.lock() = signal_clone.get());
        signal.set(4);

        assert_eq!(*seen.lock(), 4);
    }
}

//! Fan-out relays that carry states and effects from a view model to its
//! subscribers.
//!
//! [`StateRelay`] always holds a current value, hands it to every new
//! subscriber and drops a publication equal to the current value.
//! [`EffectRelay`] only forwards: whatever is emitted while nobody is
//! subscribed is lost.

use parking_lot::Mutex;
use tokio::sync::mpsc;

use super::effect::UiEffect;
use super::state::UiState;

/// Replay-one, deduplicating state relay.
pub struct StateRelay<S: UiState> {
    inner: Mutex<StateRelayInner<S>>,
}

struct StateRelayInner<S> {
    current: S,
    subscribers: Vec<mpsc::UnboundedSender<S>>,
    closed: bool,
}

impl<S: UiState> StateRelay<S> {
    pub fn new(initial: S) -> Self {
        Self {
            inner: Mutex::new(StateRelayInner {
                current: initial,
                subscribers: Vec::new(),
                closed: false,
            }),
        }
    }

    /// Snapshot of the most recently published state.
    pub fn current(&self) -> S {
        self.inner.lock().current.clone()
    }

    /// Publish a new state.
    ///
    /// Returns `false` when the state equals the current one or the relay
    /// is closed; nothing is delivered in that case.
    pub fn publish(&self, state: S) -> bool {
        let mut inner = self.inner.lock();
        if inner.closed || inner.current == state {
            return false;
        }
        inner
            .subscribers
            .retain(|subscriber| subscriber.send(state.clone()).is_ok());
        inner.current = state;
        true
    }

    /// Subscribe to state changes. The current state is delivered first.
    ///
    /// Subscribing after [`close`](Self::close) yields the last state and
    /// then ends.
    pub fn subscribe(&self) -> StateSubscription<S> {
        let (sender, receiver) = mpsc::unbounded_channel();
        let mut inner = self.inner.lock();
        // Receiver is alive, send cannot fail.
        let _ = sender.send(inner.current.clone());
        if !inner.closed {
            inner.subscribers.push(sender);
        }
        StateSubscription { receiver }
    }

    /// Stop accepting publications and end every subscription.
    pub fn close(&self) {
        let mut inner = self.inner.lock();
        inner.closed = true;
        inner.subscribers.clear();
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.lock().subscribers.len()
    }
}

/// Stream of states handed out by [`StateRelay::subscribe`].
pub struct StateSubscription<S> {
    receiver: mpsc::UnboundedReceiver<S>,
}

impl<S> StateSubscription<S> {
    /// Wait for the next state. `None` once the relay is closed and drained.
    pub async fn next(&mut self) -> Option<S> {
        self.receiver.recv().await
    }

    /// Next already-delivered state, without waiting.
    pub fn try_next(&mut self) -> Option<S> {
        self.receiver.try_recv().ok()
    }
}

/// Forward-only effect relay.
pub struct EffectRelay<E: UiEffect> {
    inner: Mutex<EffectRelayInner<E>>,
}

struct EffectRelayInner<E> {
    subscribers: Vec<mpsc::UnboundedSender<E>>,
    closed: bool,
}

impl<E: UiEffect> EffectRelay<E> {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(EffectRelayInner {
                subscribers: Vec::new(),
                closed: false,
            }),
        }
    }

    /// Deliver an effect to current subscribers.
    ///
    /// Returns the number of subscribers that received it.
    pub fn emit(&self, effect: E) -> usize {
        let mut inner = self.inner.lock();
        inner
            .subscribers
            .retain(|subscriber| subscriber.send(effect.clone()).is_ok());
        inner.subscribers.len()
    }

    pub fn subscribe(&self) -> EffectSubscription<E> {
        let (sender, receiver) = mpsc::unbounded_channel();
        let mut inner = self.inner.lock();
        if !inner.closed {
            inner.subscribers.push(sender);
        }
        EffectSubscription { receiver }
    }

    pub fn close(&self) {
        let mut inner = self.inner.lock();
        inner.closed = true;
        inner.subscribers.clear();
    }
}

impl<E: UiEffect> Default for EffectRelay<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Stream of effects handed out by [`EffectRelay::subscribe`].
pub struct EffectSubscription<E> {
    receiver: mpsc::UnboundedReceiver<E>,
}

impl<E> EffectSubscription<E> {
    pub async fn next(&mut self) -> Option<E> {
        self.receiver.recv().await
    }

    pub fn try_next(&mut self) -> Option<E> {
        self.receiver.try_recv().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Counter(u32);
    impl UiState for Counter {}

    #[derive(Debug, Clone, PartialEq)]
    struct Ping;
    impl UiEffect for Ping {}

    #[test]
    fn subscriber_gets_current_state_first() {
        let relay = StateRelay::new(Counter(7));
        let mut sub = relay.subscribe();
        assert_eq!(sub.try_next(), Some(Counter(7)));
        assert_eq!(sub.try_next(), None);
    }

    #[test]
    fn equal_state_is_not_republished() {
        let relay = StateRelay::new(Counter(0));
        let mut sub = relay.subscribe();
        assert!(relay.publish(Counter(1)));
        assert!(!relay.publish(Counter(1)));
        assert!(relay.publish(Counter(2)));

        assert_eq!(sub.try_next(), Some(Counter(0)));
        assert_eq!(sub.try_next(), Some(Counter(1)));
        assert_eq!(sub.try_next(), Some(Counter(2)));
        assert_eq!(sub.try_next(), None);
    }

    #[test]
    fn late_subscriber_only_sees_latest() {
        let relay = StateRelay::new(Counter(0));
        relay.publish(Counter(1));
        relay.publish(Counter(2));
        let mut sub = relay.subscribe();
        assert_eq!(sub.try_next(), Some(Counter(2)));
        assert_eq!(sub.try_next(), None);
    }

    #[test]
    fn dropped_subscribers_are_pruned() {
        let relay = StateRelay::new(Counter(0));
        let sub = relay.subscribe();
        assert_eq!(relay.subscriber_count(), 1);
        drop(sub);
        relay.publish(Counter(1));
        assert_eq!(relay.subscriber_count(), 0);
    }

    #[tokio::test]
    async fn close_ends_state_subscriptions() {
        let relay = StateRelay::new(Counter(3));
        let mut sub = relay.subscribe();
        relay.close();
        assert_eq!(sub.next().await, Some(Counter(3)));
        assert_eq!(sub.next().await, None);
        assert!(!relay.publish(Counter(4)));
        assert_eq!(relay.current(), Counter(3));
    }

    #[test]
    fn effects_are_not_replayed() {
        let relay = EffectRelay::new();
        assert_eq!(relay.emit(Ping), 0);
        let mut sub = relay.subscribe();
        assert_eq!(sub.try_next(), None);
        assert_eq!(relay.emit(Ping), 1);
        assert_eq!(sub.try_next(), Some(Ping));
    }

    #[tokio::test]
    async fn close_ends_effect_subscriptions() {
        let relay: EffectRelay<Ping> = EffectRelay::new();
        let mut sub = relay.subscribe();
        relay.close();
        assert_eq!(sub.next().await, None);
        let mut late = relay.subscribe();
        assert_eq!(late.next().await, None);
    }
}

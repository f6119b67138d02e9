use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use core::fmt;

/// Handle returned by [`Observers::subscribe`], used to unsubscribe later.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut()>;

/// Registry of "state changed" callbacks.
///
/// The signal carries no payload; subscribers re-read whatever they display. Callbacks run
/// synchronously in subscription order.
#[derive(Default)]
pub struct Observers {
    next_id: u64,
    callbacks: BTreeMap<SubscriptionId, Callback>,
}

impl Observers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, callback: impl FnMut() + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.callbacks.insert(id, Box::new(callback));
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.callbacks.remove(&id).is_some()
    }

    pub fn notify(&mut self) {
        log::trace!("Notifying {} observers", self.callbacks.len());
        for callback in self.callbacks.values_mut() {
            callback();
        }
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("next_id", &self.next_id)
            .field("subscribers", &self.callbacks.len())
            .finish()
    }
}

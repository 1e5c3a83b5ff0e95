//! Reactive handle over a [`ResourceState`].
//!
//! One handle per resource kind, created once at the app root and shared via
//! context. The handle is `Copy` (two arena-backed signals), so components
//! and spawned futures capture it by value. Writes happen only on the UI
//! thread, through the lifecycle operations below.

use contracts::shared::resource::{RequestSequence, ResourceState};
use leptos::prelude::*;

pub struct ResourceStore<T: Send + Sync + 'static> {
    state: RwSignal<ResourceState<T>>,
    sequence: RwSignal<RequestSequence>,
}

impl<T: Send + Sync + 'static> Clone for ResourceStore<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ResourceStore<T> {}

impl<T: Send + Sync + 'static> ResourceStore<T> {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(ResourceState::default()),
            sequence: RwSignal::new(RequestSequence::default()),
        }
    }

    /// Reactive read of the current snapshot.
    pub fn with<U>(&self, f: impl FnOnce(&ResourceState<T>) -> U) -> U {
        self.state.with(f)
    }

    /// Non-tracking read, for event handlers.
    pub fn with_untracked<U>(&self, f: impl FnOnce(&ResourceState<T>) -> U) -> U {
        self.state.with_untracked(f)
    }

    pub fn begin(&self) {
        self.state.update(|s| s.begin());
    }

    pub fn succeed(&self, items: Vec<T>, total: Option<usize>) {
        self.state.update(|s| s.succeed(items, total));
    }

    pub fn fail(&self, message: String) {
        self.state.update(|s| s.fail(message));
    }

    /// Tag an outgoing request. The sequence is bookkeeping, not view state,
    /// so it never notifies subscribers.
    pub fn issue(&self) -> u64 {
        let mut token = 0;
        self.sequence.update_untracked(|seq| token = seq.issue());
        token
    }

    /// Is this request still the latest issued for the resource.
    pub fn is_current(&self, token: u64) -> bool {
        self.sequence.with_untracked(|seq| seq.is_current(token))
    }
}

impl<T: Send + Sync + 'static> Default for ResourceStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Queue state and the admission/eviction reducers.
//!
//! [`QueueState`] is a plain value. Each reducer takes the state by value and
//! returns the next one, pushing any side effect it implies onto an effect
//! list that the provider applies once the new state is committed.

use super::key::SnackbarKey;
use super::snack::Snack;
use crate::config::{ProviderConfig, DEFAULT_MAX_SNACK};
use std::collections::VecDeque;

/// Non-fatal message printed when every visible slot holds a persistent snackbar.
pub const PERSIST_ALL_WARNING: &str = "Reached max_snack while all enqueued snackbars have the \
     'persist' flag. The oldest snackbar will be dismissed anyway to allow other ones in the \
     queue to be presented.";

/// Capacity of the visible working set, derived from the provider config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxSnack(usize);

impl MaxSnack {
    /// Creates a capacity; `0` means the default of three.
    #[must_use]
    pub fn new(value: usize) -> Self {
        if value == 0 {
            Self(DEFAULT_MAX_SNACK)
        } else {
            Self(value)
        }
    }

    #[must_use]
    pub fn from_config(config: &ProviderConfig) -> Self {
        Self::new(config.max_snack)
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for MaxSnack {
    fn default() -> Self {
        Self(DEFAULT_MAX_SNACK)
    }
}

/// Side effect of a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// A queued snackbar moved into the visible set.
    Admitted(SnackbarKey),
    /// A snackbar was picked for eviction.
    ///
    /// When `deferred` is false it was hidden right away and its close
    /// handlers must run with [`CloseReason::MaxSnack`](super::CloseReason::MaxSnack).
    Evicted { key: SnackbarKey, deferred: bool },
    /// Every slot was persistent; the oldest was evicted anyway.
    PersistConflict,
    /// A snackbar was physically removed after its exit transition.
    Removed(SnackbarKey),
}

/// Admitted snackbars plus the FIFO of those waiting for a slot.
#[derive(Debug, Clone, Default)]
pub struct QueueState {
    pub(super) snacks: Vec<Snack>,
    pub(super) queue: VecDeque<Snack>,
}

impl QueueState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Admitted snackbars in arrival order.
    #[must_use]
    pub fn snacks(&self) -> &[Snack] {
        &self.snacks
    }

    /// Waiting snackbars in arrival order.
    pub fn queue(&self) -> impl Iterator<Item = &Snack> {
        self.queue.iter()
    }

    #[must_use]
    pub fn queued_len(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snacks.is_empty() && self.queue.is_empty()
    }

    /// Looks up an admitted snackbar.
    #[must_use]
    pub fn find(&self, key: &SnackbarKey) -> Option<&Snack> {
        self.snacks.iter().find(|snack| snack.key() == key)
    }

    /// True if the key is admitted or queued.
    #[must_use]
    pub fn contains(&self, key: &SnackbarKey) -> bool {
        self.find(key).is_some() || self.queue.iter().any(|snack| snack.key() == key)
    }

    /// Duplicate check used by `prevent_duplicate`.
    ///
    /// Compares keys when the caller supplied one, messages otherwise.
    #[must_use]
    pub fn has_duplicate(&self, key: Option<&SnackbarKey>, message: &str) -> bool {
        let matches = |snack: &Snack| match key {
            Some(key) => snack.key() == key,
            None => snack.message() == message,
        };
        self.queue.iter().any(matches) || self.snacks.iter().any(matches)
    }

    /// Appends to the queue and runs admission.
    pub(crate) fn enqueue(mut self, snack: Snack, max: MaxSnack, effects: &mut Vec<Effect>) -> Self {
        self.queue.push_back(snack);
        self.display_snack(max, effects)
    }

    /// Admits the queue head if a slot is free, otherwise starts an eviction.
    pub(crate) fn display_snack(self, max: MaxSnack, effects: &mut Vec<Effect>) -> Self {
        if self.snacks.len() >= max.value() {
            return self.dismiss_oldest(max, effects);
        }
        self.process_queue(effects)
    }

    /// Moves the queue head into the visible set.
    pub(crate) fn process_queue(mut self, effects: &mut Vec<Effect>) -> Self {
        if let Some(snack) = self.queue.pop_front() {
            effects.push(Effect::Admitted(snack.key().clone()));
            self.snacks.push(snack);
        }
        self
    }

    /// Begins dismissing the oldest non-persistent snackbar.
    ///
    /// At most one eviction is in flight: nothing happens while any snackbar
    /// is already hidden or waiting to be hidden.
    pub(crate) fn dismiss_oldest(mut self, max: MaxSnack, effects: &mut Vec<Effect>) -> Self {
        if self.snacks.iter().any(Snack::is_closing) {
            return self;
        }

        let persistent = self
            .snacks
            .iter()
            .filter(|snack| snack.is_open() && snack.persist())
            .count();
        let ignore_persist = persistent == max.value();
        if ignore_persist {
            effects.push(Effect::PersistConflict);
        }

        if let Some(victim) = self
            .snacks
            .iter_mut()
            .find(|snack| !snack.persist() || ignore_persist)
        {
            let deferred = !victim.is_entered();
            if deferred {
                victim.request_close = true;
            } else {
                victim.open = false;
            }
            effects.push(Effect::Evicted {
                key: victim.key().clone(),
                deferred,
            });
        }

        self
    }

    /// Closes one snackbar, or every admitted one when `key` is `None`.
    ///
    /// Entered snackbars are hidden, others get a pending close request. A
    /// targeted key is also dropped from the queue, so a pending snackbar can
    /// be cancelled before it is ever shown.
    pub(crate) fn close(mut self, key: Option<&SnackbarKey>) -> Self {
        for snack in &mut self.snacks {
            if key.is_none_or(|key| snack.key() == key) {
                snack.close();
            }
        }
        if let Some(key) = key {
            self.queue.retain(|snack| snack.key() != key);
        }
        self
    }

    /// Drops a snackbar from the visible set.
    pub(crate) fn remove(mut self, key: &SnackbarKey, effects: &mut Vec<Effect>) -> Self {
        let before = self.snacks.len();
        self.snacks.retain(|snack| snack.key() != key);
        if self.snacks.len() < before {
            effects.push(Effect::Removed(key.clone()));
        }
        self
    }
}

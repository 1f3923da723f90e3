// SPDX-License-Identifier: MPL-2.0
//! Folding view lifecycle events back into the queue.
//!
//! A snackbar moves through
//! `Queued → Entering → Shown → Closing → removed`, with an early edge
//! `Entering → Closing` when a close is requested before the enter transition
//! completes. The view reports the end of each transition; these reducers turn
//! those reports into state changes.

use super::key::SnackbarKey;
use super::queue::{Effect, MaxSnack, QueueState};
use super::snack::Snack;
use crate::error::{Error, LifecycleEvent, Result};

/// Where a snackbar currently sits in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for a free slot.
    Queued,
    /// Admitted, enter transition still running.
    Entering,
    /// Fully on screen.
    Shown,
    /// Hidden or waiting to be hidden; removed once the exit transition ends.
    Closing,
}

impl Phase {
    /// Derives the phase of an admitted snackbar from its flags.
    #[must_use]
    pub fn of(snack: &Snack) -> Self {
        if snack.is_closing() {
            Phase::Closing
        } else if snack.is_entered() {
            Phase::Shown
        } else {
            Phase::Entering
        }
    }

    /// Returns the phase of `key`, or `None` if it is unknown.
    #[must_use]
    pub fn lookup(state: &QueueState, key: &SnackbarKey) -> Option<Self> {
        if let Some(snack) = state.find(key) {
            return Some(Self::of(snack));
        }
        state
            .queue()
            .any(|snack| snack.key() == key)
            .then_some(Phase::Queued)
    }
}

/// Rejects lifecycle events that do not name their snackbar.
pub fn require_key(key: Option<SnackbarKey>, event: LifecycleEvent) -> Result<SnackbarKey> {
    key.ok_or(Error::MissingKey(event))
}

/// Marks every admitted snackbar with `key` as entered.
///
/// Returns whether a close was requested on any of them during the enter
/// transition; the caller must then run the close path right away.
pub(crate) fn entered(mut state: QueueState, key: &SnackbarKey) -> (QueueState, bool) {
    let mut pending_close = false;
    for snack in state.snacks.iter_mut().filter(|snack| snack.key() == key) {
        snack.entered = true;
        pending_close |= snack.request_close;
    }
    (state, pending_close)
}

/// Removes `key` after its exit transition and refills the freed slot.
///
/// An exit for a key that is no longer admitted frees nothing and changes
/// nothing. Otherwise, if the queue still holds snackbars after the refill,
/// the next eviction starts immediately so a burst keeps draining even at a
/// capacity of one.
pub(crate) fn exited(
    state: QueueState,
    key: &SnackbarKey,
    max: MaxSnack,
    effects: &mut Vec<Effect>,
) -> QueueState {
    if state.find(key).is_none() {
        return state;
    }
    let state = state.remove(key, effects).process_queue(effects);
    if state.queued_len() == 0 {
        return state;
    }
    state.dismiss_oldest(max, effects)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProviderConfig;
    use crate::snackbar::SnackbarOptions;

    fn push(state: QueueState, key: &str, max: MaxSnack, effects: &mut Vec<Effect>) -> QueueState {
        let snack = Snack::new(
            SnackbarKey::from(key),
            key.to_string(),
            SnackbarOptions::new(),
            &ProviderConfig::default(),
        );
        state.enqueue(snack, max, effects)
    }

    #[test]
    fn require_key_rejects_missing_key() {
        assert_eq!(
            require_key(None, LifecycleEvent::Exited),
            Err(Error::MissingKey(LifecycleEvent::Exited))
        );
        assert_eq!(
            require_key(Some(SnackbarKey::from(0)), LifecycleEvent::Entered),
            Ok(SnackbarKey::from(0))
        );
    }

    #[test]
    fn phases_follow_the_flags() {
        let max = MaxSnack::new(1);
        let mut fx = Vec::new();
        let state = push(QueueState::new(), "a", max, &mut fx);
        let state = push(state, "b", max, &mut fx);
        let a = SnackbarKey::from("a");
        let b = SnackbarKey::from("b");

        // b's arrival requested a close on a before it entered.
        assert_eq!(Phase::lookup(&state, &a), Some(Phase::Closing));
        assert_eq!(Phase::lookup(&state, &b), Some(Phase::Queued));
        assert_eq!(Phase::lookup(&state, &SnackbarKey::from("z")), None);
    }

    #[test]
    fn entered_reports_pending_close() {
        let max = MaxSnack::new(1);
        let mut fx = Vec::new();
        let state = push(QueueState::new(), "a", max, &mut fx);
        let (state, pending) = entered(state, &SnackbarKey::from("a"));
        assert!(!pending);
        assert_eq!(Phase::lookup(&state, &SnackbarKey::from("a")), Some(Phase::Shown));

        let state = push(state, "b", max, &mut fx);
        let state = push(state, "c", max, &mut fx);
        let (state, pending) = entered(state, &SnackbarKey::from("b"));
        assert!(!pending, "queued snackbars cannot enter");
        assert!(!state.snacks()[0].is_open());
    }

    #[test]
    fn entered_with_request_close_is_flagged() {
        let max = MaxSnack::new(1);
        let mut fx = Vec::new();
        let state = push(QueueState::new(), "a", max, &mut fx);
        let state = push(state, "b", max, &mut fx);

        let (state, pending) = entered(state, &SnackbarKey::from("a"));

        assert!(pending);
        assert!(state.snacks()[0].is_entered());
    }

    #[test]
    fn exited_admits_next_and_continues_draining() {
        let max = MaxSnack::new(1);
        let mut fx = Vec::new();
        let mut state = QueueState::new();
        for key in ["a", "b", "c"] {
            state = push(state, key, max, &mut fx);
        }
        let (state, _) = entered(state, &SnackbarKey::from("a"));
        let state = state.close(Some(&SnackbarKey::from("a")));
        let mut effects = Vec::new();

        let state = exited(state, &SnackbarKey::from("a"), max, &mut effects);

        assert_eq!(state.snacks().len(), 1);
        assert_eq!(state.snacks()[0].key(), &SnackbarKey::from("b"));
        assert!(state.snacks()[0].is_close_requested());
        assert_eq!(state.queued_len(), 1);
        assert_eq!(
            effects,
            vec![
                Effect::Removed(SnackbarKey::from("a")),
                Effect::Admitted(SnackbarKey::from("b")),
                Effect::Evicted {
                    key: SnackbarKey::from("b"),
                    deferred: true,
                },
            ]
        );
    }

    #[test]
    fn exited_with_empty_queue_only_removes() {
        let max = MaxSnack::new(2);
        let mut fx = Vec::new();
        let state = push(QueueState::new(), "a", max, &mut fx);
        let mut effects = Vec::new();

        let state = exited(state, &SnackbarKey::from("a"), max, &mut effects);

        assert!(state.is_empty());
        assert_eq!(effects, vec![Effect::Removed(SnackbarKey::from("a"))]);
    }

    #[test]
    fn exited_for_unknown_key_does_not_refill() {
        let max = MaxSnack::new(1);
        let mut fx = Vec::new();
        let mut state = QueueState::new();
        for key in ["a", "b", "c"] {
            state = push(state, key, max, &mut fx);
        }
        let (state, _) = entered(state, &SnackbarKey::from("a"));
        let mut effects = Vec::new();
        let state = exited(state, &SnackbarKey::from("a"), max, &mut effects);
        assert_eq!(state.snacks().len(), 1);

        // A repeated report for "a", and one for a key still waiting in the queue.
        let mut effects = Vec::new();
        let state = exited(state, &SnackbarKey::from("a"), max, &mut effects);
        let state = exited(state, &SnackbarKey::from("c"), max, &mut effects);

        assert_eq!(state.snacks().len(), 1);
        assert_eq!(state.snacks()[0].key(), &SnackbarKey::from("b"));
        assert_eq!(state.queued_len(), 1);
        assert!(effects.is_empty());
    }

    #[test]
    fn entered_marks_every_snack_sharing_the_key() {
        let max = MaxSnack::new(3);
        let mut fx = Vec::new();
        let state = push(QueueState::new(), "x", max, &mut fx);
        let state = push(state, "x", max, &mut fx);

        let (state, pending) = entered(state, &SnackbarKey::from("x"));

        assert!(!pending);
        let flags: Vec<_> = state.snacks().iter().map(Snack::is_entered).collect();
        assert_eq!(flags, vec![true, true]);
    }
}

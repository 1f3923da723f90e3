// SPDX-License-Identifier: MPL-2.0
//! Enter/exit animation clocks for rendered snackbars.
//!
//! The queue only learns that an animation finished when the view reports it.
//! [`TransitionTracker`] plays that role for the iced view: on every tick it
//! compares each admitted snackbar with its animation clock and returns the
//! `Entered`/`Exited` messages that are due. Each message is produced at most
//! once per key.
//!
//! Enter and exit durations come from each snackbar's resolved
//! [`TransitionDuration`](crate::snackbar::TransitionDuration); the collapse
//! that follows the exit belongs to the container and is the same for all.

use crate::config::DEFAULT_COLLAPSE_TRANSITION_MS;
use crate::snackbar::{Message, Snack, SnackbarKey};
use std::collections::HashMap;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Clock {
    Entering { started: Instant, duration: Duration },
    Shown,
    Exiting { started: Instant, duration: Duration },
    /// Exit reported; waiting for the provider to drop the snackbar.
    Done,
}

/// Per-snackbar animation state.
#[derive(Debug)]
pub struct TransitionTracker {
    /// Height collapse after the exit slide, before the slot is released.
    collapse: Duration,
    clocks: HashMap<SnackbarKey, Clock>,
}

impl Default for TransitionTracker {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_COLLAPSE_TRANSITION_MS))
    }
}

impl TransitionTracker {
    #[must_use]
    pub fn new(collapse: Duration) -> Self {
        Self {
            collapse,
            clocks: HashMap::new(),
        }
    }

    /// Advances every clock to `now` and returns the lifecycle messages due.
    pub fn sync(&mut self, snacks: &[Snack], now: Instant) -> Vec<Message> {
        self.clocks
            .retain(|key, _| snacks.iter().any(|snack| snack.key() == key));

        let mut messages = Vec::new();
        for snack in snacks {
            let timing = snack.transition_duration();
            let clock = self
                .clocks
                .entry(snack.key().clone())
                .or_insert(Clock::Entering {
                    started: now,
                    duration: timing.enter(),
                });

            if !snack.is_open() && matches!(clock, Clock::Entering { .. } | Clock::Shown) {
                *clock = Clock::Exiting {
                    started: now,
                    duration: timing.exit(),
                };
            }

            match *clock {
                Clock::Entering { started, duration } if elapsed(started, now) >= duration => {
                    *clock = Clock::Shown;
                    messages.push(Message::Entered {
                        key: Some(snack.key().clone()),
                        is_appearing: true,
                    });
                }
                Clock::Exiting { started, duration }
                    if elapsed(started, now) >= duration + self.collapse =>
                {
                    *clock = Clock::Done;
                    messages.push(Message::Exited {
                        key: Some(snack.key().clone()),
                    });
                }
                _ => {}
            }
        }
        messages
    }

    /// Visual progress of `key` in `0.0..=1.0`, used as opacity.
    #[must_use]
    pub fn progress(&self, key: &SnackbarKey, now: Instant) -> f32 {
        match self.clocks.get(key) {
            None => 0.0,
            Some(Clock::Shown) => 1.0,
            Some(Clock::Done) => 0.0,
            Some(Clock::Entering { started, duration }) => ratio(elapsed(*started, now), *duration),
            Some(Clock::Exiting { started, duration }) => {
                1.0 - ratio(elapsed(*started, now), *duration)
            }
        }
    }

    /// True while any clock is still running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.clocks
            .values()
            .any(|clock| matches!(clock, Clock::Entering { .. } | Clock::Exiting { .. }))
    }
}

fn elapsed(started: Instant, now: Instant) -> Duration {
    now.saturating_duration_since(started)
}

fn ratio(elapsed: Duration, total: Duration) -> f32 {
    if total.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f32() / total.as_secs_f32()).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProviderConfig;
    use crate::snackbar::{SnackbarOptions, SnackbarProvider, TransitionDuration};

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn entered_is_reported_once_after_enter_duration() {
        let mut provider = SnackbarProvider::new(ProviderConfig::default());
        let key = provider.enqueue("a", SnackbarOptions::new());
        let mut tracker = TransitionTracker::default();
        let start = Instant::now();

        assert!(tracker.sync(provider.snacks(), start).is_empty());
        assert!(tracker.sync(provider.snacks(), start + ms(100)).is_empty());

        let due = tracker.sync(provider.snacks(), start + ms(225));
        assert_eq!(
            due,
            vec![Message::Entered {
                key: Some(key),
                is_appearing: true,
            }]
        );
        assert!(tracker.sync(provider.snacks(), start + ms(500)).is_empty());
    }

    #[test]
    fn exited_waits_for_exit_and_collapse() {
        let mut provider = SnackbarProvider::new(ProviderConfig::default());
        let key = provider.enqueue("a", SnackbarOptions::new());
        let mut tracker = TransitionTracker::default();
        let start = Instant::now();
        tracker.sync(provider.snacks(), start);
        provider.handle_entered(Some(key.clone()), true).unwrap();
        tracker.sync(provider.snacks(), start + ms(225));

        provider.close(Some(&key));
        let closed_at = start + ms(300);
        assert!(tracker.sync(provider.snacks(), closed_at).is_empty());
        assert!(tracker.sync(provider.snacks(), closed_at + ms(195)).is_empty());

        let due = tracker.sync(provider.snacks(), closed_at + ms(195 + 175));
        assert_eq!(due, vec![Message::Exited { key: Some(key.clone()) }]);
        assert!(tracker.sync(provider.snacks(), closed_at + ms(1000)).is_empty());
    }

    #[test]
    fn progress_follows_the_clock() {
        let mut provider = SnackbarProvider::new(ProviderConfig::default());
        let key = provider.enqueue(
            "a",
            SnackbarOptions::new().transition_duration(TransitionDuration::millis(100, 100)),
        );
        let mut tracker = TransitionTracker::new(ms(0));
        let start = Instant::now();

        assert_eq!(tracker.progress(&key, start), 0.0);
        tracker.sync(provider.snacks(), start);
        assert!((tracker.progress(&key, start + ms(50)) - 0.5).abs() < 0.01);
        assert!(tracker.is_animating());

        tracker.sync(provider.snacks(), start + ms(100));
        assert_eq!(tracker.progress(&key, start + ms(100)), 1.0);
        assert!(!tracker.is_animating());
    }

    #[test]
    fn provider_transition_duration_drives_the_clock() {
        let mut provider = SnackbarProvider::new(ProviderConfig {
            transition_duration: Some(TransitionDuration::millis(40, 30)),
            ..ProviderConfig::default()
        });
        let key = provider.enqueue("a", SnackbarOptions::new());
        let instant = provider.enqueue(
            "b",
            SnackbarOptions::new().transition_duration(TransitionDuration::millis(0, 0)),
        );
        let mut tracker = TransitionTracker::new(ms(10));
        let start = Instant::now();

        let due = tracker.sync(provider.snacks(), start);
        assert_eq!(
            due,
            vec![Message::Entered {
                key: Some(instant),
                is_appearing: true,
            }]
        );

        let due = tracker.sync(provider.snacks(), start + ms(40));
        assert_eq!(
            due,
            vec![Message::Entered {
                key: Some(key.clone()),
                is_appearing: true,
            }]
        );
        provider.handle_entered(Some(key.clone()), true).unwrap();

        provider.close(Some(&key));
        let closed_at = start + ms(50);
        assert!(tracker.sync(provider.snacks(), closed_at).is_empty());
        assert!(tracker.sync(provider.snacks(), closed_at + ms(39)).is_empty());
        assert_eq!(
            tracker.sync(provider.snacks(), closed_at + ms(40)),
            vec![Message::Exited { key: Some(key) }]
        );
    }

    #[test]
    fn removed_snacks_drop_their_clock() {
        let mut provider = SnackbarProvider::new(ProviderConfig::default());
        let key = provider.enqueue("a", SnackbarOptions::new());
        let mut tracker = TransitionTracker::default();
        tracker.sync(provider.snacks(), Instant::now());

        provider.handle_exited(Some(key.clone())).unwrap();
        tracker.sync(provider.snacks(), Instant::now());

        assert_eq!(tracker.progress(&key, Instant::now()), 0.0);
        assert!(!tracker.is_animating());
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Auto-hide timers.
//!
//! Timers are deadlines checked on each tick rather than background tasks, so
//! cancelling one is just dropping its entry. A timer is armed when an
//! admitted snackbar is open with a finite duration and disarmed as soon as
//! the snackbar starts closing or leaves the visible set.

use super::key::SnackbarKey;
use super::snack::Snack;
use std::collections::HashMap;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerState {
    Running { deadline: Instant },
    Paused,
}

#[derive(Debug, Clone, Copy)]
struct AutoHideTimer {
    resume_after: Duration,
    state: TimerState,
}

/// Auto-hide timers of all admitted snackbars.
#[derive(Debug, Default)]
pub struct AutoHideTimers {
    timers: HashMap<SnackbarKey, AutoHideTimer>,
}

impl AutoHideTimers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms timers for newly eligible snackbars and cancels the rest.
    pub fn sync(&mut self, snacks: &[Snack], now: Instant) {
        self.timers.retain(|key, _| {
            snacks
                .iter()
                .any(|snack| snack.key() == key && Self::is_eligible(snack))
        });

        for snack in snacks.iter().filter(|snack| Self::is_eligible(snack)) {
            let (Some(duration), Some(resume_after)) = (
                snack.auto_hide_duration().duration(),
                snack.resume_hide_duration(),
            ) else {
                continue;
            };
            self.timers
                .entry(snack.key().clone())
                .or_insert(AutoHideTimer {
                    resume_after,
                    state: TimerState::Running {
                        deadline: now + duration,
                    },
                });
        }
    }

    fn is_eligible(snack: &Snack) -> bool {
        !snack.is_closing() && snack.auto_hide_duration().duration().is_some()
    }

    /// Stops the countdown of one snackbar, e.g. while the pointer hovers it.
    pub fn pause(&mut self, key: &SnackbarKey) {
        if let Some(timer) = self.timers.get_mut(key) {
            timer.state = TimerState::Paused;
        }
    }

    /// Restarts the countdown of one snackbar with its resume duration.
    pub fn resume(&mut self, key: &SnackbarKey, now: Instant) {
        if let Some(timer) = self.timers.get_mut(key) {
            timer.state = TimerState::Running {
                deadline: now + timer.resume_after,
            };
        }
    }

    pub fn pause_all(&mut self) {
        for timer in self.timers.values_mut() {
            timer.state = TimerState::Paused;
        }
    }

    pub fn resume_all(&mut self, now: Instant) {
        for timer in self.timers.values_mut() {
            timer.state = TimerState::Running {
                deadline: now + timer.resume_after,
            };
        }
    }

    /// Removes and returns the timers whose deadline has passed.
    ///
    /// Keys come back in deadline order.
    pub fn take_expired(&mut self, now: Instant) -> Vec<SnackbarKey> {
        let mut expired: Vec<(Instant, SnackbarKey)> = self
            .timers
            .iter()
            .filter_map(|(key, timer)| match timer.state {
                TimerState::Running { deadline } if deadline <= now => {
                    Some((deadline, key.clone()))
                }
                _ => None,
            })
            .collect();
        expired.sort_by_key(|(deadline, _)| *deadline);

        for (_, key) in &expired {
            self.timers.remove(key);
        }
        expired.into_iter().map(|(_, key)| key).collect()
    }

    /// True if a timer is armed (running or paused) for `key`.
    #[must_use]
    pub fn is_armed(&self, key: &SnackbarKey) -> bool {
        self.timers.contains_key(key)
    }

    #[must_use]
    pub fn is_paused(&self, key: &SnackbarKey) -> bool {
        self.timers
            .get(key)
            .is_some_and(|timer| timer.state == TimerState::Paused)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.timers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }
}

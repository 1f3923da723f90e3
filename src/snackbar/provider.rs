// SPDX-License-Identifier: MPL-2.0
//! The snackbar provider: public API and single owner of the queue state.
//!
//! Every transition goes through `&mut SnackbarProvider`, either from the
//! public API (`enqueue`, `close`) or from view events (`update`). Each one
//! runs a reducer over the current [`QueueState`], commits the result, then
//! applies the effects the reducer reported (handlers, timers, diagnostics).

use super::handlers::{CloseEvent, EnteredEvent, ExitedEvent, HandlerChain};
use super::key::{KeyGenerator, SnackbarKey};
use super::lifecycle::{self, require_key, Phase};
use super::merge::Merger;
use super::options::{AnchorOrigin, CloseReason, SnackbarOptions};
use super::queue::{Effect, MaxSnack, QueueState, PERSIST_ALL_WARNING};
use super::snack::Snack;
use super::timer::AutoHideTimers;
use crate::config::ProviderConfig;
use crate::diagnostics::{DiagnosticEventKind, DiagnosticsHandle, WarningEvent, WarningType};
use crate::error::{LifecycleEvent, Result};
use std::time::Instant;

/// Events reported by the view layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// The enter transition of a snackbar finished.
    Entered {
        key: Option<SnackbarKey>,
        is_appearing: bool,
    },
    /// The exit transition of a snackbar finished.
    Exited { key: Option<SnackbarKey> },
    /// The view asks to close a snackbar (timeout, clickaway, ...).
    Close {
        key: SnackbarKey,
        reason: CloseReason,
    },
    /// The user pressed the dismiss button of a snackbar.
    Dismiss(SnackbarKey),
    /// The pointer moved over a snackbar.
    PointerEntered(SnackbarKey),
    /// The pointer left a snackbar.
    PointerLeft(SnackbarKey),
    WindowBlurred,
    WindowFocused,
    /// Periodic tick driving the auto-hide timers.
    Tick(Instant),
}

/// Admitted snackbars sharing one anchor origin, in arrival order.
#[derive(Debug)]
pub struct AnchorGroup<'a> {
    pub origin: AnchorOrigin,
    pub snacks: Vec<&'a Snack>,
}

impl AnchorGroup<'_> {
    /// Container key of the group, e.g. `TopRight`.
    #[must_use]
    pub fn category(&self) -> String {
        self.origin.to_string()
    }
}

/// Owns the snackbar queue and exposes the enqueue/close API.
#[derive(Debug, Default)]
pub struct SnackbarProvider {
    config: ProviderConfig,
    state: QueueState,
    keys: KeyGenerator,
    timers: AutoHideTimers,
    on_close: HandlerChain<CloseEvent>,
    on_entered: HandlerChain<EnteredEvent>,
    on_exited: HandlerChain<ExitedEvent>,
    diagnostics: Option<DiagnosticsHandle>,
}

impl SnackbarProvider {
    #[must_use]
    pub fn new(config: ProviderConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Sets the diagnostics handle used to record queue activity.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    #[must_use]
    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    #[must_use]
    pub fn max_snack(&self) -> MaxSnack {
        MaxSnack::from_config(&self.config)
    }

    /// Registers a close handler invoked for every snackbar, after its own.
    pub fn add_close_handler(&mut self, handler: impl Fn(&CloseEvent) + Send + Sync + 'static) {
        self.on_close.push(handler);
    }

    pub fn add_entered_handler(
        &mut self,
        handler: impl Fn(&EnteredEvent) + Send + Sync + 'static,
    ) {
        self.on_entered.push(handler);
    }

    pub fn add_exited_handler(&mut self, handler: impl Fn(&ExitedEvent) + Send + Sync + 'static) {
        self.on_exited.push(handler);
    }

    // =========================================================================
    // Queue Controller
    // =========================================================================

    /// Adds a snackbar and returns its key.
    ///
    /// The snackbar is shown right away if a slot is free. Otherwise it waits
    /// in the queue and the oldest visible snackbar starts closing. When
    /// duplicate prevention is on and an equal snackbar is already queued or
    /// visible, nothing is added and the key that would have been used is
    /// returned.
    pub fn enqueue(&mut self, message: impl Into<String>, mut options: SnackbarOptions) -> SnackbarKey {
        let message = message.into();
        let explicit_key = options.key.take().filter(SnackbarKey::is_defined);
        let key = match &explicit_key {
            Some(key) => key.clone(),
            None => self.keys.next_key(),
        };

        let prevent_duplicate = Merger::new(&options, &self.config).prevent_duplicate();
        if prevent_duplicate && self.state.has_duplicate(explicit_key.as_ref(), &message) {
            self.log(DiagnosticEventKind::DuplicateSuppressed {
                key: key.to_string(),
            });
            return key;
        }

        let snack = Snack::new(key.clone(), message, options, &self.config);
        self.log(DiagnosticEventKind::Enqueued {
            key: key.to_string(),
            variant: snack.variant(),
        });

        let max = self.max_snack();
        self.transition(|state, effects| state.enqueue(snack, max, effects));
        key
    }

    /// Closes one snackbar, or every admitted one when `key` is `None`.
    ///
    /// A snackbar still waiting in the queue is cancelled.
    pub fn close(&mut self, key: Option<&SnackbarKey>) {
        match key {
            Some(key) => self.request_close(key, CloseReason::Instructed),
            None => self.handle_close(CloseReason::Instructed, None),
        }
    }

    pub fn close_all(&mut self) {
        self.close(None);
    }

    /// View-facing close: the snackbar's own handlers, then the shared path.
    pub fn request_close(&mut self, key: &SnackbarKey, reason: CloseReason) {
        if let Some(snack) = self.state.find(key) {
            snack.on_close.dispatch(&CloseEvent {
                reason,
                key: Some(key.clone()),
            });
        }
        self.handle_close(reason, Some(key));
    }

    /// Shared close path. Clickaway only notifies the provider handlers.
    fn handle_close(&mut self, reason: CloseReason, key: Option<&SnackbarKey>) {
        self.on_close.dispatch(&CloseEvent {
            reason,
            key: key.cloned(),
        });

        if reason == CloseReason::Clickaway {
            return;
        }

        self.log(DiagnosticEventKind::CloseRequested {
            key: key.map(ToString::to_string),
            reason,
        });
        self.transition(|state, _| state.close(key));
    }

    // =========================================================================
    // Lifecycle Coordinator
    // =========================================================================

    /// Records the end of a snackbar's enter transition.
    ///
    /// A close requested while the snackbar was entering takes effect now.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingKey`](crate::error::Error::MissingKey) if `key`
    /// is `None`.
    pub fn handle_entered(&mut self, key: Option<SnackbarKey>, is_appearing: bool) -> Result<()> {
        let key = require_key(key, LifecycleEvent::Entered)?;

        let mut pending_close = false;
        self.transition(|state, _| {
            let (state, pending) = lifecycle::entered(state, &key);
            pending_close = pending;
            state
        });

        let event = EnteredEvent {
            is_appearing,
            key: key.clone(),
        };
        match self.state.find(&key) {
            Some(snack) => HandlerChain::dispatch_all(&[&snack.on_entered, &self.on_entered], &event),
            None => self.on_entered.dispatch(&event),
        }

        if pending_close {
            self.request_close(&key, CloseReason::Instructed);
        }
        Ok(())
    }

    /// Records the end of a snackbar's exit transition and removes it.
    ///
    /// The freed slot is refilled from the queue, and if snackbars are still
    /// waiting the next eviction starts.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingKey`](crate::error::Error::MissingKey) if `key`
    /// is `None`.
    pub fn handle_exited(&mut self, key: Option<SnackbarKey>) -> Result<()> {
        let key = require_key(key, LifecycleEvent::Exited)?;
        let event = ExitedEvent { key: key.clone() };

        if let Some(snack) = self.state.find(&key) {
            snack.on_exited.dispatch(&event);
        }

        let max = self.max_snack();
        self.transition(|state, effects| lifecycle::exited(state, &key, max, effects));

        self.on_exited.dispatch(&event);
        Ok(())
    }

    // =========================================================================
    // Timers
    // =========================================================================

    /// Closes every snackbar whose auto-hide timer expired by `now`.
    pub fn tick(&mut self, now: Instant) {
        for key in self.timers.take_expired(now) {
            self.request_close(&key, CloseReason::Timeout);
        }
    }

    pub fn pointer_entered(&mut self, key: &SnackbarKey) {
        self.timers.pause(key);
    }

    pub fn pointer_left(&mut self, key: &SnackbarKey, now: Instant) {
        self.timers.resume(key, now);
    }

    pub fn window_blurred(&mut self) {
        if !self.config.disable_window_blur_listener {
            self.timers.pause_all();
        }
    }

    pub fn window_focused(&mut self, now: Instant) {
        if !self.config.disable_window_blur_listener {
            self.timers.resume_all(now);
        }
    }

    /// Applies a view event.
    ///
    /// # Errors
    ///
    /// Fails when a lifecycle event carries no key.
    pub fn update(&mut self, message: Message) -> Result<()> {
        match message {
            Message::Entered { key, is_appearing } => self.handle_entered(key, is_appearing)?,
            Message::Exited { key } => self.handle_exited(key)?,
            Message::Close { key, reason } => self.request_close(&key, reason),
            Message::Dismiss(key) => self.close(Some(&key)),
            Message::PointerEntered(key) => self.pointer_entered(&key),
            Message::PointerLeft(key) => self.pointer_left(&key, Instant::now()),
            Message::WindowBlurred => self.window_blurred(),
            Message::WindowFocused => self.window_focused(Instant::now()),
            Message::Tick(now) => self.tick(now),
        }
        Ok(())
    }

    // =========================================================================
    // Queries
    // =========================================================================

    #[must_use]
    pub fn state(&self) -> &QueueState {
        &self.state
    }

    /// Admitted snackbars in arrival order.
    #[must_use]
    pub fn snacks(&self) -> &[Snack] {
        self.state.snacks()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.state.queued_len()
    }

    #[must_use]
    pub fn find(&self, key: &SnackbarKey) -> Option<&Snack> {
        self.state.find(key)
    }

    #[must_use]
    pub fn phase(&self, key: &SnackbarKey) -> Option<Phase> {
        Phase::lookup(&self.state, key)
    }

    /// True if the snackbar has a running or paused auto-hide timer.
    #[must_use]
    pub fn has_timer(&self, key: &SnackbarKey) -> bool {
        self.timers.is_armed(key)
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.state.is_empty()
    }

    /// Groups admitted snackbars by anchor origin, in first-appearance order.
    #[must_use]
    pub fn by_anchor(&self) -> Vec<AnchorGroup<'_>> {
        let mut groups: Vec<AnchorGroup<'_>> = Vec::new();
        for snack in self.state.snacks() {
            let origin = snack.anchor_origin();
            match groups.iter_mut().find(|group| group.origin == origin) {
                Some(group) => group.snacks.push(snack),
                None => groups.push(AnchorGroup {
                    origin,
                    snacks: vec![snack],
                }),
            }
        }
        groups
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Runs a reducer over the state, commits it, then applies its effects.
    fn transition(&mut self, reducer: impl FnOnce(QueueState, &mut Vec<Effect>) -> QueueState) {
        let mut effects = Vec::new();
        let state = std::mem::take(&mut self.state);
        self.state = reducer(state, &mut effects);
        self.timers.sync(self.state.snacks(), Instant::now());

        for effect in effects {
            self.apply(effect);
        }
    }

    fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::Admitted(key) => {
                self.log(DiagnosticEventKind::Admitted {
                    key: key.to_string(),
                });
            }
            Effect::Evicted { key, deferred } => {
                self.log(DiagnosticEventKind::Evicted {
                    key: key.to_string(),
                    deferred,
                });
                if !deferred {
                    let event = CloseEvent {
                        reason: CloseReason::MaxSnack,
                        key: Some(key.clone()),
                    };
                    match self.state.find(&key) {
                        Some(snack) => {
                            HandlerChain::dispatch_all(&[&snack.on_close, &self.on_close], &event);
                        }
                        None => self.on_close.dispatch(&event),
                    }
                }
            }
            Effect::PersistConflict => {
                eprintln!("[WARN] {PERSIST_ALL_WARNING}");
                if let Some(handle) = &self.diagnostics {
                    handle.log_warning(WarningEvent::new(
                        WarningType::PersistCapacityConflict,
                        PERSIST_ALL_WARNING,
                    ));
                }
            }
            Effect::Removed(key) => {
                self.log(DiagnosticEventKind::Removed {
                    key: key.to_string(),
                });
            }
        }
    }

    fn log(&self, kind: DiagnosticEventKind) {
        if let Some(handle) = &self.diagnostics {
            handle.log_event(kind);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::snackbar::{AutoHideDuration, Horizontal, Vertical};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    type Log = Arc<Mutex<Vec<String>>>;

    fn provider(max_snack: usize) -> SnackbarProvider {
        SnackbarProvider::new(ProviderConfig {
            max_snack,
            ..ProviderConfig::default()
        })
    }

    fn recording_provider(max_snack: usize) -> (SnackbarProvider, Log) {
        let log: Log = Arc::new(Mutex::new(Vec::new()));
        let mut provider = provider(max_snack);
        let sink = Arc::clone(&log);
        provider.add_close_handler(move |e| {
            let key = e.key.as_ref().map_or("*".to_string(), ToString::to_string);
            sink.lock().unwrap().push(format!("provider:{:?}:{key}", e.reason));
        });
        (provider, log)
    }

    fn snack_logger(log: &Log, name: &'static str) -> impl Fn(&CloseEvent) + Send + Sync + 'static {
        let sink = Arc::clone(log);
        move |e| sink.lock().unwrap().push(format!("{name}:{:?}", e.reason))
    }

    fn later(secs: u64) -> Instant {
        Instant::now() + Duration::from_secs(secs)
    }

    #[test]
    fn new_provider_is_empty() {
        let provider = SnackbarProvider::default();
        assert!(provider.snacks().is_empty());
        assert_eq!(provider.queued_count(), 0);
        assert!(!provider.has_notifications());
        assert_eq!(provider.max_snack().value(), 3);
    }

    #[test]
    fn enqueue_returns_caller_key_or_generates_one() {
        let mut provider = provider(3);
        let explicit = provider.enqueue("a", SnackbarOptions::new().key(0));
        let generated = provider.enqueue("b", SnackbarOptions::new());

        assert_eq!(explicit, SnackbarKey::Number(0));
        assert!(generated.is_generated());
        assert_eq!(provider.snacks().len(), 2);
    }

    #[test]
    fn empty_text_key_falls_back_to_generated() {
        let mut provider = provider(3);
        let key = provider.enqueue("a", SnackbarOptions::new().key(""));

        assert!(key.is_generated());
        assert_eq!(provider.snacks()[0].key(), &key);
    }

    #[test]
    fn enqueue_resolves_options_against_provider_defaults() {
        let mut provider = SnackbarProvider::new(ProviderConfig {
            anchor_origin: Some(AnchorOrigin::new(Vertical::Top, Horizontal::Center)),
            auto_hide_duration: Some(AutoHideDuration::Never),
            ..ProviderConfig::default()
        });
        let key = provider.enqueue("hello", SnackbarOptions::new());

        let snack = provider.find(&key).expect("snack should be admitted");
        assert_eq!(
            snack.anchor_origin(),
            AnchorOrigin::new(Vertical::Top, Horizontal::Center)
        );
        assert_eq!(snack.auto_hide_duration(), AutoHideDuration::Never);
        assert!(!provider.has_timer(&key));
    }

    #[test]
    fn duplicate_message_is_suppressed_when_enabled_provider_wide() {
        let mut provider = SnackbarProvider::new(ProviderConfig {
            prevent_duplicate: true,
            ..ProviderConfig::default()
        });
        provider.enqueue("saved", SnackbarOptions::new());
        provider.enqueue("saved", SnackbarOptions::new());

        assert_eq!(provider.snacks().len(), 1);
    }

    #[test]
    fn call_level_flag_overrides_provider_duplicate_setting() {
        let mut provider = SnackbarProvider::new(ProviderConfig {
            prevent_duplicate: true,
            ..ProviderConfig::default()
        });
        provider.enqueue("saved", SnackbarOptions::new());
        provider.enqueue("saved", SnackbarOptions::new().prevent_duplicate(false));

        assert_eq!(provider.snacks().len(), 2);
    }

    #[test]
    fn duplicate_key_returns_existing_key() {
        let mut provider = provider(1);
        provider.enqueue("first", SnackbarOptions::new().key("job"));
        let again = provider.enqueue(
            "second",
            SnackbarOptions::new().key("job").prevent_duplicate(true),
        );

        assert_eq!(again, SnackbarKey::from("job"));
        assert_eq!(provider.snacks().len(), 1);
        assert_eq!(provider.queued_count(), 0);
        assert_eq!(provider.snacks()[0].message(), "first");
    }

    #[test]
    fn close_fires_snack_then_provider_handlers() {
        let (mut provider, log) = recording_provider(3);
        let key = provider.enqueue(
            "a",
            SnackbarOptions::new().key("a").on_close(snack_logger(&log, "snack")),
        );
        provider.handle_entered(Some(key.clone()), true).unwrap();

        provider.close(Some(&key));

        assert_eq!(
            *log.lock().unwrap(),
            vec!["snack:Instructed", "provider:Instructed:a"]
        );
        assert!(!provider.find(&key).unwrap().is_open());
    }

    #[test]
    fn close_before_entry_defers_until_entered() {
        let (mut provider, log) = recording_provider(3);
        let key = provider.enqueue("a", SnackbarOptions::new().key("a"));

        provider.close(Some(&key));
        let snack = provider.find(&key).unwrap();
        assert!(snack.is_close_requested());
        assert!(snack.is_open());

        provider.handle_entered(Some(key.clone()), true).unwrap();
        assert!(!provider.find(&key).unwrap().is_open());
        assert_eq!(
            *log.lock().unwrap(),
            vec!["provider:Instructed:a", "provider:Instructed:a"]
        );
    }

    #[test]
    fn close_all_notifies_provider_once_without_key() {
        let (mut provider, log) = recording_provider(3);
        provider.enqueue("a", SnackbarOptions::new().on_close(snack_logger(&log, "snack")));
        provider.enqueue("b", SnackbarOptions::new());

        provider.close_all();

        assert_eq!(*log.lock().unwrap(), vec!["provider:Instructed:*"]);
        assert!(provider.snacks().iter().all(Snack::is_close_requested));
    }

    #[test]
    fn clickaway_notifies_but_keeps_snack_open() {
        let (mut provider, log) = recording_provider(3);
        let key = provider.enqueue("a", SnackbarOptions::new().key("a"));
        provider.handle_entered(Some(key.clone()), true).unwrap();

        provider
            .update(Message::Close {
                key: key.clone(),
                reason: CloseReason::Clickaway,
            })
            .unwrap();

        let snack = provider.find(&key).unwrap();
        assert!(snack.is_open());
        assert!(!snack.is_close_requested());
        assert_eq!(*log.lock().unwrap(), vec!["provider:Clickaway:a"]);
    }

    #[test]
    fn closing_a_queued_snack_cancels_it() {
        let mut provider = provider(1);
        provider.enqueue("a", SnackbarOptions::new());
        let queued = provider.enqueue("b", SnackbarOptions::new());

        provider.close(Some(&queued));

        assert_eq!(provider.queued_count(), 0);
        assert_eq!(provider.phase(&queued), None);
    }

    #[test]
    fn eviction_of_entered_snack_reports_max_snack() {
        let (mut provider, log) = recording_provider(1);
        let a = provider.enqueue(
            "a",
            SnackbarOptions::new().key("a").on_close(snack_logger(&log, "snack")),
        );
        provider.handle_entered(Some(a.clone()), true).unwrap();

        provider.enqueue("b", SnackbarOptions::new());

        assert_eq!(
            *log.lock().unwrap(),
            vec!["snack:MaxSnack", "provider:MaxSnack:a"]
        );
        assert_eq!(provider.phase(&a), Some(Phase::Closing));
    }

    #[test]
    fn lifecycle_events_without_key_fail() {
        let mut provider = provider(3);
        provider.enqueue("a", SnackbarOptions::new());

        assert_eq!(
            provider.handle_entered(None, true),
            Err(Error::MissingKey(LifecycleEvent::Entered))
        );
        assert_eq!(
            provider.update(Message::Exited { key: None }),
            Err(Error::MissingKey(LifecycleEvent::Exited))
        );
        assert_eq!(provider.snacks().len(), 1);
    }

    #[test]
    fn entered_and_exited_handlers_run_for_snack_and_provider() {
        let log: Log = Arc::new(Mutex::new(Vec::new()));
        let mut provider = provider(3);
        let sink = Arc::clone(&log);
        provider.add_entered_handler(move |e| {
            sink.lock().unwrap().push(format!("provider-entered:{}", e.is_appearing))
        });
        let sink = Arc::clone(&log);
        provider.add_exited_handler(move |e| sink.lock().unwrap().push(format!("provider-exited:{}", e.key)));
        let entered_sink = Arc::clone(&log);
        let exited_sink = Arc::clone(&log);
        let key = provider.enqueue(
            "a",
            SnackbarOptions::new()
                .key("a")
                .on_entered(move |_| entered_sink.lock().unwrap().push("snack-entered".into()))
                .on_exited(move |_| exited_sink.lock().unwrap().push("snack-exited".into())),
        );

        provider.handle_entered(Some(key.clone()), true).unwrap();
        provider.close(Some(&key));
        provider.handle_exited(Some(key)).unwrap();

        assert_eq!(
            *log.lock().unwrap(),
            vec![
                "snack-entered",
                "provider-entered:true",
                "snack-exited",
                "provider-exited:a",
            ]
        );
        assert!(!provider.has_notifications());
    }

    #[test]
    fn timer_expiry_closes_with_timeout_reason() {
        let (mut provider, log) = recording_provider(3);
        let key = provider.enqueue(
            "a",
            SnackbarOptions::new()
                .key("a")
                .auto_hide_duration(AutoHideDuration::millis(100)),
        );
        provider.handle_entered(Some(key.clone()), true).unwrap();
        assert!(provider.has_timer(&key));

        provider.update(Message::Tick(later(1))).unwrap();

        assert!(!provider.find(&key).unwrap().is_open());
        assert!(!provider.has_timer(&key));
        assert_eq!(*log.lock().unwrap(), vec!["provider:Timeout:a"]);

        provider.tick(later(2));
        assert_eq!(log.lock().unwrap().len(), 1, "timer must not fire twice");
    }

    #[test]
    fn manual_close_cancels_timer() {
        let (mut provider, log) = recording_provider(3);
        let key = provider.enqueue("a", SnackbarOptions::new().key("a"));
        provider.handle_entered(Some(key.clone()), true).unwrap();

        provider.close(Some(&key));
        provider.tick(later(60));

        assert!(!provider.has_timer(&key));
        assert_eq!(*log.lock().unwrap(), vec!["provider:Instructed:a"]);
    }

    #[test]
    fn persistent_snack_never_gets_a_timer() {
        let mut provider = provider(3);
        let key = provider.enqueue("a", SnackbarOptions::new().persist(true));
        provider.handle_entered(Some(key.clone()), true).unwrap();

        provider.tick(later(3600));

        assert!(!provider.has_timer(&key));
        assert!(provider.find(&key).unwrap().is_open());
    }

    #[test]
    fn hover_pauses_the_timer() {
        let mut provider = provider(3);
        let key = provider.enqueue(
            "a",
            SnackbarOptions::new().auto_hide_duration(AutoHideDuration::millis(100)),
        );
        provider.update(Message::PointerEntered(key.clone())).unwrap();

        provider.tick(later(10));
        assert!(provider.find(&key).unwrap().is_open());
        assert!(!provider.find(&key).unwrap().is_close_requested());

        let left_at = later(10);
        provider.pointer_left(&key, left_at);
        provider.tick(left_at + Duration::from_millis(50));
        assert!(provider.find(&key).unwrap().is_close_requested());
    }

    #[test]
    fn window_blur_is_ignored_when_listener_disabled() {
        let mut provider = SnackbarProvider::new(ProviderConfig {
            disable_window_blur_listener: true,
            ..ProviderConfig::default()
        });
        let key = provider.enqueue(
            "a",
            SnackbarOptions::new().auto_hide_duration(AutoHideDuration::millis(100)),
        );

        provider.update(Message::WindowBlurred).unwrap();
        provider.tick(later(1));

        assert!(provider.find(&key).unwrap().is_close_requested());
    }

    #[test]
    fn window_blur_pauses_when_listener_enabled() {
        let mut provider = provider(3);
        let key = provider.enqueue(
            "a",
            SnackbarOptions::new().auto_hide_duration(AutoHideDuration::millis(100)),
        );

        provider.update(Message::WindowBlurred).unwrap();
        provider.tick(later(1));

        assert!(!provider.find(&key).unwrap().is_close_requested());
    }

    #[test]
    fn by_anchor_groups_in_first_appearance_order() {
        let top_right = AnchorOrigin::new(Vertical::Top, Horizontal::Right);
        let mut provider = provider(4);
        provider.enqueue("a", SnackbarOptions::new().anchor_origin(top_right));
        provider.enqueue("b", SnackbarOptions::new());
        provider.enqueue("c", SnackbarOptions::new().anchor_origin(top_right));

        let groups = provider.by_anchor();

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].category(), "TopRight");
        let messages: Vec<&str> = groups[0].snacks.iter().map(|s| s.message()).collect();
        assert_eq!(messages, vec!["a", "c"]);
        assert_eq!(groups[1].category(), "BottomLeft");
    }
}

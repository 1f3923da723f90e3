// SPDX-License-Identifier: MPL-2.0
//! Demo application showing the snackbar queue in an iced window.
//!
//! The `App` struct owns the provider, the transition tracker that reports
//! enter/exit completions back to it, and the diagnostics collector.

mod message;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::diagnostics::{BufferCapacity, DiagnosticsCollector};
use crate::error::{Error, Result};
use crate::snackbar::{AutoHideDuration, CloseReason, SnackbarOptions, SnackbarProvider, Variant};
use crate::ui::transition::TransitionTracker;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

/// File name of the exported diagnostics report.
const DIAGNOSTICS_FILE: &str = "iced_snack_diagnostics.json";

/// Root iced application state.
pub struct App {
    provider: SnackbarProvider,
    tracker: TransitionTracker,
    diagnostics: DiagnosticsCollector,
    /// Time of the last tick, used to render transition progress.
    now: Instant,
    /// Running count used to label demo snackbars.
    counter: u64,
    /// Contract violation that ended the run.
    failure: Option<Error>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("visible", &self.provider.snacks().len())
            .field("queued", &self.provider.queued_count())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;
pub const WINDOW_DEFAULT_WIDTH: u32 = 900;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot function; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self::with_config(config::Config::default())
    }
}

impl App {
    fn with_config(config: config::Config) -> Self {
        let diagnostics =
            DiagnosticsCollector::new(BufferCapacity::from_config(&config.diagnostics));
        let mut provider = SnackbarProvider::new(config.provider);
        provider.set_diagnostics(diagnostics.handle());

        Self {
            provider,
            tracker: TransitionTracker::default(),
            diagnostics,
            now: Instant::now(),
            counter: 0,
            failure: None,
        }
    }

    /// Loads the configuration, applies CLI overrides and reports config
    /// problems as a warning snackbar.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config_dir = flags.config_dir.map(PathBuf::from);
        let (mut config, config_warning) = config::load_with_override(config_dir);

        if let Some(max_snack) = flags.max_snack {
            config.provider.max_snack = max_snack;
        }

        let mut app = Self::with_config(config);

        if let Some(warning) = config_warning {
            eprintln!("[WARN] {warning}");
            app.provider.enqueue(
                warning,
                SnackbarOptions::new()
                    .variant(Variant::Warning)
                    .auto_hide_duration(AutoHideDuration::Never),
            );
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        String::from("Snackbar queue")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        let window_sub = subscription::create_window_subscription();
        let tick_sub = subscription::create_tick_subscription(
            self.provider.has_notifications() || self.tracker.is_animating(),
        );

        Subscription::batch([window_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Snackbar(message) => {
                if let Err(err) = self.provider.update(message) {
                    return self.abort(err);
                }
            }
            Message::Enqueue(variant) => {
                self.counter += 1;
                let text = format!("{variant:?} snackbar #{}", self.counter);
                self.provider
                    .enqueue(text, SnackbarOptions::new().variant(variant));
            }
            Message::EnqueuePersistent => {
                self.counter += 1;
                self.provider.enqueue(
                    format!("Persistent snackbar #{}", self.counter),
                    SnackbarOptions::new()
                        .persist(true)
                        .variant(Variant::Info)
                        .action("Dismiss"),
                );
            }
            Message::EnqueueDuplicate => {
                for _ in 0..2 {
                    self.provider.enqueue(
                        "This message is only shown once",
                        SnackbarOptions::new().prevent_duplicate(true),
                    );
                }
            }
            Message::CloseAll => self.provider.close_all(),
            Message::ClickedAway => {
                let keys: Vec<_> = self
                    .provider
                    .snacks()
                    .iter()
                    .map(|snack| snack.key().clone())
                    .collect();
                for key in keys {
                    self.provider.request_close(&key, CloseReason::Clickaway);
                }
            }
            Message::ExportDiagnostics => self.export_diagnostics(),
            Message::Tick(now) => {
                if let Err(err) = self.tick(now) {
                    return self.abort(err);
                }
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            provider: &self.provider,
            tracker: &self.tracker,
            now: self.now,
        })
    }

    /// A lifecycle event the provider rejects means the view is miswired;
    /// the run ends instead of continuing with an inconsistent queue.
    fn abort(&mut self, err: Error) -> Task<Message> {
        eprintln!("[ERROR] {err}");
        self.failure = Some(err);
        iced::exit()
    }

    /// Advances timers, then reports finished transitions to the provider.
    fn tick(&mut self, now: Instant) -> Result<()> {
        self.now = now;
        self.provider.tick(now);
        let result = self
            .tracker
            .sync(self.provider.snacks(), now)
            .into_iter()
            .try_for_each(|message| self.provider.update(message));
        self.diagnostics.process_pending();
        result
    }

    fn export_diagnostics(&mut self) {
        self.diagnostics.process_pending();
        let path = std::env::temp_dir().join(DIAGNOSTICS_FILE);
        let (text, variant) = match self.diagnostics.export_to_file(&path) {
            Ok(()) => (
                format!("Diagnostics written to {}", path.display()),
                Variant::Success,
            ),
            Err(err) => (format!("Diagnostics export failed: {err}"), Variant::Error),
        };
        self.provider
            .enqueue(text, SnackbarOptions::new().variant(variant));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::snackbar::Phase;
    use std::time::Duration;

    fn app_with_max(max_snack: usize) -> App {
        let mut config = Config::default();
        config.provider.max_snack = max_snack;
        App::with_config(config)
    }

    #[test]
    fn enqueue_buttons_add_snackbars() {
        let mut app = App::default();
        let _ = app.update(Message::Enqueue(Variant::Success));
        let _ = app.update(Message::EnqueuePersistent);

        assert_eq!(app.provider.snacks().len(), 2);
        assert_eq!(app.provider.snacks()[0].variant(), Variant::Success);
        assert!(app.provider.snacks()[1].persist());
    }

    #[test]
    fn duplicate_button_adds_one_snackbar() {
        let mut app = App::default();
        let _ = app.update(Message::EnqueueDuplicate);

        assert_eq!(app.provider.snacks().len(), 1);
    }

    #[test]
    fn ticks_drive_enter_and_exit_transitions() {
        let mut app = app_with_max(1);
        let start = Instant::now();
        let _ = app.update(Message::Enqueue(Variant::Info));
        let _ = app.update(Message::Enqueue(Variant::Info));
        let first = app.provider.snacks()[0].key().clone();

        let _ = app.update(Message::Tick(start));
        let _ = app.update(Message::Tick(start + Duration::from_millis(300)));
        // The deferred eviction fired as soon as the first snack entered.
        assert_eq!(app.provider.phase(&first), Some(Phase::Closing));

        let _ = app.update(Message::Tick(start + Duration::from_millis(400)));
        let _ = app.update(Message::Tick(start + Duration::from_millis(800)));
        assert_eq!(app.provider.phase(&first), None);
        assert_eq!(app.provider.snacks().len(), 1);
        assert_eq!(app.provider.queued_count(), 0);
    }

    #[test]
    fn clicking_away_keeps_snackbars_open() {
        let mut app = App::default();
        let _ = app.update(Message::Enqueue(Variant::Default));
        let _ = app.update(Message::ClickedAway);

        assert!(!app.provider.snacks()[0].is_close_requested());
    }

    #[test]
    fn missing_key_ends_the_run() {
        let mut app = App::default();
        let _ = app.update(Message::Enqueue(Variant::Default));
        let _ = app.update(Message::Snackbar(crate::snackbar::Message::Exited { key: None }));

        assert_eq!(
            app.failure,
            Some(Error::MissingKey(crate::error::LifecycleEvent::Exited))
        );
        assert_eq!(app.provider.snacks().len(), 1);
    }

    #[test]
    fn well_formed_events_do_not_end_the_run() {
        let mut app = App::default();
        let _ = app.update(Message::Enqueue(Variant::Default));
        let key = app.provider.snacks()[0].key().clone();
        let _ = app.update(Message::Snackbar(crate::snackbar::Message::Entered {
            key: Some(key),
            is_appearing: true,
        }));

        assert!(app.failure.is_none());
        assert!(app.provider.snacks()[0].is_entered());
    }

    #[test]
    fn tick_collects_diagnostics() {
        let mut app = App::default();
        let _ = app.update(Message::Enqueue(Variant::Default));
        let _ = app.update(Message::Tick(Instant::now()));

        assert!(!app.diagnostics.is_empty());
    }
}

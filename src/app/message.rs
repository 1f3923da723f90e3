// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::snackbar::{self, Variant};
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Events from the toasts and the window, forwarded to the provider.
    Snackbar(snackbar::Message),
    /// Enqueue a demo snackbar of the given variant.
    Enqueue(Variant),
    /// Enqueue a snackbar that never hides on its own.
    EnqueuePersistent,
    /// Enqueue the same message twice with duplicate prevention on.
    EnqueueDuplicate,
    CloseAll,
    /// A click landed outside every toast.
    ClickedAway,
    /// Write the diagnostics report to disk.
    ExportDiagnostics,
    /// Periodic tick driving timers and transitions.
    Tick(Instant),
}

impl From<snackbar::Message> for Message {
    fn from(message: snackbar::Message) -> Self {
        Message::Snackbar(message)
    }
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Overrides `provider.max_snack` from the config file.
    pub max_snack: Option<usize>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_SNACK_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}

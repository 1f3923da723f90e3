// SPDX-License-Identifier: MPL-2.0
//! Snackbar queue management.
//!
//! A [`SnackbarProvider`] admits at most `max_snack` snackbars at a time and
//! holds the rest in a FIFO. When the queue is non-empty the oldest visible,
//! non-persistent snackbar is asked to close; once its exit transition ends the
//! next queued one takes the freed slot.
//!
//! # Components
//!
//! - [`key`] - Caller-supplied and generated snackbar keys
//! - [`options`] - Per-call options, variants and anchor origins
//! - [`merge`] - Call > provider > default option resolution
//! - [`queue`] - The immutable queue state and its reducers
//! - [`lifecycle`] - Entered/exited reducers and lifecycle phases
//! - [`timer`] - Deadline-based auto-hide timers
//! - [`provider`] - The public API owning the state
//!
//! # Usage
//!
//! ```
//! use iced_snack::config::ProviderConfig;
//! use iced_snack::snackbar::{SnackbarOptions, SnackbarProvider, Variant};
//!
//! let mut provider = SnackbarProvider::new(ProviderConfig::default());
//! let key = provider.enqueue("Saved", SnackbarOptions::new().variant(Variant::Success));
//!
//! provider.handle_entered(Some(key.clone()), true).unwrap();
//! provider.close(Some(&key));
//! provider.handle_exited(Some(key)).unwrap();
//! assert!(!provider.has_notifications());
//! ```

pub mod handlers;
pub mod key;
pub mod lifecycle;
pub mod merge;
pub mod options;
pub mod provider;
pub mod queue;
mod snack;
pub mod timer;

pub use handlers::{CloseEvent, EnteredEvent, ExitedEvent, HandlerChain};
pub use key::{KeyGenerator, SnackbarKey};
pub use lifecycle::Phase;
pub use options::{
    AnchorOrigin, AutoHideDuration, CloseReason, Content, Horizontal, IconVariant,
    SnackbarOptions, TransitionDuration, Variant, Vertical,
};
pub use provider::{AnchorGroup, Message, SnackbarProvider};
pub use queue::{Effect, MaxSnack, QueueState};
pub use snack::Snack;
pub use timer::AutoHideTimers;

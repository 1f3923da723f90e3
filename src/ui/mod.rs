// SPDX-License-Identifier: MPL-2.0
//! iced views for the snackbar queue.
//!
//! Follows the Elm-style "state down, messages up" pattern: views read the
//! provider and emit [`snackbar::Message`](crate::snackbar::Message) values that
//! the application feeds back into [`SnackbarProvider::update`](crate::snackbar::SnackbarProvider::update).
//!
//! - [`transition`] - Enter/exit animation clocks reporting lifecycle events
//! - [`toast`] - A single snackbar card
//! - [`container`] - Per-anchor overlay of toast columns
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod container;
pub mod design_tokens;
pub mod toast;
pub mod transition;

// SPDX-License-Identifier: MPL-2.0
//! `iced_snack` is a snackbar notification queue for the iced GUI framework.
//!
//! The [`snackbar`] module holds the queue itself: a bounded set of visible
//! notifications, a FIFO of waiting ones, eviction of the oldest visible
//! notification when the queue grows, and auto-hide timers. The [`ui`] module
//! renders it with iced and reports transition completions back to the queue.

#![doc(html_root_url = "https://docs.rs/iced_snack/0.1.0")]

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod snackbar;
pub mod ui;

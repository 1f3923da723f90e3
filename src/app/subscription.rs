// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::config::TICK_INTERVAL;
use crate::snackbar;
use iced::{event, time, window, Subscription};

/// Routes window focus changes to the provider so timers pause while the
/// window is in the background.
pub fn create_window_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Window(window::Event::Focused) => {
            Some(Message::Snackbar(snackbar::Message::WindowFocused))
        }
        event::Event::Window(window::Event::Unfocused) => {
            Some(Message::Snackbar(snackbar::Message::WindowBlurred))
        }
        _ => None,
    })
}

/// Creates the periodic tick driving auto-hide timers and transitions.
///
/// Only runs while snackbars are queued or on screen.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

// SPDX-License-Identifier: MPL-2.0
//! The snackbar entity held by the queue.

use super::handlers::{CloseEvent, EnteredEvent, ExitedEvent, HandlerChain};
use super::key::SnackbarKey;
use super::merge::Merger;
use super::options::{
    AnchorOrigin, AutoHideDuration, Content, SnackbarOptions, TransitionDuration, Variant,
};
use crate::config::{ProviderConfig, RESUME_HIDE_RATIO};
use std::time::Duration;

/// A notification in the queue or on screen.
///
/// Placement, variant and timing are resolved once at enqueue time. The
/// `open`/`entered`/`request_close` flags are then driven by the queue and the
/// view lifecycle.
#[derive(Debug, Clone)]
pub struct Snack {
    key: SnackbarKey,
    message: String,
    variant: Variant,
    anchor_origin: AnchorOrigin,
    auto_hide_duration: AutoHideDuration,
    resume_hide_duration: Option<Duration>,
    persist: bool,
    hide_icon_variant: bool,
    icon: Option<String>,
    action: Option<String>,
    content: Option<Content>,
    transition_duration: TransitionDuration,
    /// Whether the view should render the snackbar as shown.
    pub(crate) open: bool,
    /// Whether the enter transition completed.
    pub(crate) entered: bool,
    /// Close requested before the enter transition completed.
    pub(crate) request_close: bool,
    pub(crate) on_close: HandlerChain<CloseEvent>,
    pub(crate) on_entered: HandlerChain<EnteredEvent>,
    pub(crate) on_exited: HandlerChain<ExitedEvent>,
}

impl Snack {
    /// Builds a fresh, open snackbar from call options and provider defaults.
    pub(crate) fn new(
        key: SnackbarKey,
        message: String,
        options: SnackbarOptions,
        provider: &ProviderConfig,
    ) -> Self {
        let merger = Merger::new(&options, provider);
        let variant = merger.variant();
        let anchor_origin = merger.anchor_origin();
        let auto_hide_duration = merger.auto_hide_duration();
        let resume_hide_duration = merger.resume_hide_duration();
        let hide_icon_variant = merger.hide_icon_variant();
        let icon = merger.icon(variant);
        let transition_duration = merger.transition_duration();

        Self {
            key,
            message,
            variant,
            anchor_origin,
            auto_hide_duration,
            resume_hide_duration,
            persist: options.persist,
            hide_icon_variant,
            icon,
            action: options.action,
            content: options.content,
            transition_duration,
            open: true,
            entered: false,
            request_close: false,
            on_close: options.on_close,
            on_entered: options.on_entered,
            on_exited: options.on_exited,
        }
    }

    #[must_use]
    pub fn key(&self) -> &SnackbarKey {
        &self.key
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    #[must_use]
    pub fn anchor_origin(&self) -> AnchorOrigin {
        self.anchor_origin
    }

    #[must_use]
    pub fn auto_hide_duration(&self) -> AutoHideDuration {
        self.auto_hide_duration
    }

    /// Duration of the timer restarted after a pause.
    ///
    /// Falls back to half the auto-hide duration. `None` when the snackbar
    /// never hides on its own.
    #[must_use]
    pub fn resume_hide_duration(&self) -> Option<Duration> {
        let full = self.auto_hide_duration.duration()?;
        Some(
            self.resume_hide_duration
                .unwrap_or_else(|| full.mul_f64(RESUME_HIDE_RATIO)),
        )
    }

    #[must_use]
    pub fn persist(&self) -> bool {
        self.persist
    }

    #[must_use]
    pub fn hide_icon_variant(&self) -> bool {
        self.hide_icon_variant
    }

    /// Icon overriding the variant glyph, from the call or the provider.
    #[must_use]
    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    #[must_use]
    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    #[must_use]
    pub fn content(&self) -> Option<&Content> {
        self.content.as_ref()
    }

    #[must_use]
    pub fn transition_duration(&self) -> TransitionDuration {
        self.transition_duration
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn is_entered(&self) -> bool {
        self.entered
    }

    #[must_use]
    pub fn is_close_requested(&self) -> bool {
        self.request_close
    }

    /// True once a dismissal is in flight (hidden or waiting to be hidden).
    #[must_use]
    pub fn is_closing(&self) -> bool {
        !self.open || self.request_close
    }

    /// Marks the snackbar closed, or defers the close until it has entered.
    pub(crate) fn close(&mut self) {
        if self.entered {
            self.open = false;
        } else {
            self.request_close = true;
        }
    }
}

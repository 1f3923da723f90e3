// SPDX-License-Identifier: MPL-2.0
//! Per-call options and the tags they resolve into.

use super::handlers::{CloseEvent, EnteredEvent, ExitedEvent, HandlerChain};
use super::key::SnackbarKey;
use super::provider::Message;
use crate::config::{DEFAULT_ENTER_TRANSITION_MS, DEFAULT_EXIT_TRANSITION_MS};
use iced::Element;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Visual classification of a snackbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    #[default]
    Default,
    Success,
    Error,
    Warning,
    Info,
}

/// Vertical screen edge a snackbar is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Vertical {
    Top,
    #[default]
    Bottom,
}

/// Horizontal placement of a snackbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Horizontal {
    #[default]
    Left,
    Center,
    Right,
}

/// Screen corner or edge where a snackbar is placed.
///
/// Snackbars sharing an origin are rendered in the same container.
/// Defaults to bottom-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct AnchorOrigin {
    pub vertical: Vertical,
    pub horizontal: Horizontal,
}

impl AnchorOrigin {
    #[must_use]
    pub const fn new(vertical: Vertical, horizontal: Horizontal) -> Self {
        Self {
            vertical,
            horizontal,
        }
    }
}

impl fmt::Display for AnchorOrigin {
    /// Formats the container key, e.g. `BottomLeft`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let vertical = match self.vertical {
            Vertical::Top => "Top",
            Vertical::Bottom => "Bottom",
        };
        let horizontal = match self.horizontal {
            Horizontal::Left => "Left",
            Horizontal::Center => "Center",
            Horizontal::Right => "Right",
        };
        write!(f, "{vertical}{horizontal}")
    }
}

/// How long a snackbar stays open before closing itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AutoHideRepr", into = "AutoHideRepr")]
pub enum AutoHideDuration {
    /// Never closes on its own.
    Never,
    /// Closes after the given duration. A zero duration is honored.
    After(Duration),
}

impl AutoHideDuration {
    /// Shorthand for `After(Duration::from_millis(ms))`.
    #[must_use]
    pub const fn millis(ms: u64) -> Self {
        AutoHideDuration::After(Duration::from_millis(ms))
    }

    /// Returns the duration, or `None` for [`AutoHideDuration::Never`].
    #[must_use]
    pub fn duration(self) -> Option<Duration> {
        match self {
            AutoHideDuration::Never => None,
            AutoHideDuration::After(duration) => Some(duration),
        }
    }
}

/// On-disk form: milliseconds as an integer, or the keyword `"never"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum AutoHideRepr {
    Millis(u64),
    Keyword(String),
}

impl TryFrom<AutoHideRepr> for AutoHideDuration {
    type Error = String;

    fn try_from(repr: AutoHideRepr) -> Result<Self, Self::Error> {
        match repr {
            AutoHideRepr::Millis(ms) => Ok(AutoHideDuration::millis(ms)),
            AutoHideRepr::Keyword(word) if word == "never" => Ok(AutoHideDuration::Never),
            AutoHideRepr::Keyword(word) => Err(format!(
                "invalid auto-hide duration `{word}`, expected milliseconds or \"never\""
            )),
        }
    }
}

impl From<AutoHideDuration> for AutoHideRepr {
    #[allow(clippy::cast_possible_truncation)] // Durations in ms fit comfortably in u64
    fn from(value: AutoHideDuration) -> Self {
        match value {
            AutoHideDuration::Never => AutoHideRepr::Keyword("never".to_string()),
            AutoHideDuration::After(duration) => AutoHideRepr::Millis(duration.as_millis() as u64),
        }
    }
}

/// Why a snackbar is being closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CloseReason {
    /// The auto-hide timer expired.
    Timeout,
    /// The user clicked outside the snackbar. Inert at the queue level.
    Clickaway,
    /// Evicted to make room for a queued snackbar.
    MaxSnack,
    /// Closed through the API, or a close requested before entry completed.
    Instructed,
}

/// Enter and exit animation durations of a snackbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionDuration {
    pub enter_ms: u64,
    pub exit_ms: u64,
}

impl TransitionDuration {
    #[must_use]
    pub const fn millis(enter_ms: u64, exit_ms: u64) -> Self {
        Self { enter_ms, exit_ms }
    }

    #[must_use]
    pub const fn enter(self) -> Duration {
        Duration::from_millis(self.enter_ms)
    }

    #[must_use]
    pub const fn exit(self) -> Duration {
        Duration::from_millis(self.exit_ms)
    }
}

impl Default for TransitionDuration {
    fn default() -> Self {
        Self::millis(DEFAULT_ENTER_TRANSITION_MS, DEFAULT_EXIT_TRANSITION_MS)
    }
}

/// Icons replacing the built-in variant glyphs. Unset variants keep theirs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconVariant {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
}

impl IconVariant {
    #[must_use]
    pub fn get(&self, variant: Variant) -> Option<&str> {
        match variant {
            Variant::Default => self.default.as_deref(),
            Variant::Success => self.success.as_deref(),
            Variant::Error => self.error.as_deref(),
            Variant::Warning => self.warning.as_deref(),
            Variant::Info => self.info.as_deref(),
        }
    }
}

type RenderFn = dyn Fn(&SnackbarKey, &str) -> Element<'static, Message> + Send + Sync;

/// Renderer replacing the built-in toast card of one snackbar.
///
/// Receives the key and message. The view still wraps the result for hover
/// pause, and the queue treats it like any other snackbar.
#[derive(Clone)]
pub struct Content(Arc<RenderFn>);

impl Content {
    pub fn new(
        render: impl Fn(&SnackbarKey, &str) -> Element<'static, Message> + Send + Sync + 'static,
    ) -> Self {
        Self(Arc::new(render))
    }

    #[must_use]
    pub fn render(&self, key: &SnackbarKey, message: &str) -> Element<'static, Message> {
        (self.0)(key, message)
    }
}

impl fmt::Debug for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Content(..)")
    }
}

/// Options accepted by [`SnackbarProvider::enqueue`](super::SnackbarProvider::enqueue).
///
/// Unset fields fall back to the provider configuration, then to global
/// defaults.
///
/// # Example
///
/// ```
/// use iced_snack::snackbar::{AutoHideDuration, SnackbarOptions, Variant};
///
/// let options = SnackbarOptions::new()
///     .key("upload")
///     .variant(Variant::Success)
///     .auto_hide_duration(AutoHideDuration::millis(2000));
/// assert_eq!(options.variant_option(), Some(Variant::Success));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SnackbarOptions {
    pub(crate) key: Option<SnackbarKey>,
    pub(crate) persist: bool,
    pub(crate) variant: Option<Variant>,
    pub(crate) anchor_origin: Option<AnchorOrigin>,
    pub(crate) auto_hide_duration: Option<AutoHideDuration>,
    pub(crate) resume_hide_duration: Option<Duration>,
    pub(crate) prevent_duplicate: Option<bool>,
    pub(crate) hide_icon_variant: Option<bool>,
    pub(crate) icon: Option<String>,
    pub(crate) action: Option<String>,
    pub(crate) content: Option<Content>,
    pub(crate) transition_duration: Option<TransitionDuration>,
    pub(crate) on_close: HandlerChain<CloseEvent>,
    pub(crate) on_entered: HandlerChain<EnteredEvent>,
    pub(crate) on_exited: HandlerChain<ExitedEvent>,
}

impl SnackbarOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses the given key instead of a generated one.
    #[must_use]
    pub fn key(mut self, key: impl Into<SnackbarKey>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Opts out of auto-hide and, unless every slot is pinned, of eviction.
    #[must_use]
    pub fn persist(mut self, persist: bool) -> Self {
        self.persist = persist;
        self
    }

    #[must_use]
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = Some(variant);
        self
    }

    #[must_use]
    pub fn anchor_origin(mut self, anchor_origin: AnchorOrigin) -> Self {
        self.anchor_origin = Some(anchor_origin);
        self
    }

    #[must_use]
    pub fn auto_hide_duration(mut self, duration: AutoHideDuration) -> Self {
        self.auto_hide_duration = Some(duration);
        self
    }

    #[must_use]
    pub fn resume_hide_duration(mut self, duration: Duration) -> Self {
        self.resume_hide_duration = Some(duration);
        self
    }

    /// Overrides the provider-wide duplicate suppression for this call.
    #[must_use]
    pub fn prevent_duplicate(mut self, prevent: bool) -> Self {
        self.prevent_duplicate = Some(prevent);
        self
    }

    /// View hint: hide the variant glyph for this snackbar.
    #[must_use]
    pub fn hide_icon_variant(mut self, hide: bool) -> Self {
        self.hide_icon_variant = Some(hide);
        self
    }

    /// View hint: glyph shown instead of the variant's icon.
    #[must_use]
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// View hint: label of an action button rendered next to the message.
    #[must_use]
    pub fn action(mut self, label: impl Into<String>) -> Self {
        self.action = Some(label.into());
        self
    }

    /// View hint: render this snackbar with `render` instead of the toast card.
    #[must_use]
    pub fn content(
        mut self,
        render: impl Fn(&SnackbarKey, &str) -> Element<'static, Message> + Send + Sync + 'static,
    ) -> Self {
        self.content = Some(Content::new(render));
        self
    }

    /// Overrides the enter/exit animation durations for this snackbar.
    #[must_use]
    pub fn transition_duration(mut self, duration: TransitionDuration) -> Self {
        self.transition_duration = Some(duration);
        self
    }

    /// Registers a close handler for this snackbar only.
    #[must_use]
    pub fn on_close(mut self, handler: impl Fn(&CloseEvent) + Send + Sync + 'static) -> Self {
        self.on_close.push(handler);
        self
    }

    #[must_use]
    pub fn on_entered(mut self, handler: impl Fn(&EnteredEvent) + Send + Sync + 'static) -> Self {
        self.on_entered.push(handler);
        self
    }

    #[must_use]
    pub fn on_exited(mut self, handler: impl Fn(&ExitedEvent) + Send + Sync + 'static) -> Self {
        self.on_exited.push(handler);
        self
    }

    #[must_use]
    pub fn variant_option(&self) -> Option<Variant> {
        self.variant
    }

    #[must_use]
    pub fn key_option(&self) -> Option<&SnackbarKey> {
        self.key.as_ref()
    }
}

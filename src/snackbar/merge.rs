// SPDX-License-Identifier: MPL-2.0
//! Three-tier option resolution.
//!
//! Every field is looked up in order: the enqueue call, the provider
//! configuration, then the global default. The first tier that sets the field
//! wins.
//!
//! The auto-hide duration is the one special case. A zero duration and an
//! explicit [`AutoHideDuration::Never`] are real values that stop the lookup,
//! and its last tier is always [`DEFAULT_AUTO_HIDE_MS`] rather than anything
//! the provider supplies. `persist` then overrides whatever was resolved.

use super::options::{AnchorOrigin, AutoHideDuration, SnackbarOptions, TransitionDuration, Variant};
use crate::config::{ProviderConfig, DEFAULT_AUTO_HIDE_MS};
use std::time::Duration;

/// Returns the first present value, or `fallback`.
pub fn resolve<T>(call: Option<T>, provider: Option<T>, fallback: T) -> T {
    call.or(provider).unwrap_or(fallback)
}

/// Resolves the auto-hide duration of a snackbar.
pub fn resolve_auto_hide(
    call: Option<AutoHideDuration>,
    provider: Option<AutoHideDuration>,
    persist: bool,
) -> AutoHideDuration {
    if persist {
        return AutoHideDuration::Never;
    }
    resolve(call, provider, AutoHideDuration::millis(DEFAULT_AUTO_HIDE_MS))
}

/// Field-by-field view over the call and provider tiers.
pub struct Merger<'a> {
    options: &'a SnackbarOptions,
    provider: &'a ProviderConfig,
}

impl<'a> Merger<'a> {
    #[must_use]
    pub fn new(options: &'a SnackbarOptions, provider: &'a ProviderConfig) -> Self {
        Self { options, provider }
    }

    #[must_use]
    pub fn variant(&self) -> Variant {
        resolve(self.options.variant, self.provider.variant, Variant::default())
    }

    #[must_use]
    pub fn anchor_origin(&self) -> AnchorOrigin {
        resolve(
            self.options.anchor_origin,
            self.provider.anchor_origin,
            AnchorOrigin::default(),
        )
    }

    #[must_use]
    pub fn auto_hide_duration(&self) -> AutoHideDuration {
        resolve_auto_hide(
            self.options.auto_hide_duration,
            self.provider.auto_hide_duration,
            self.options.persist,
        )
    }

    /// `None` means "half of the auto-hide duration" when resuming.
    #[must_use]
    pub fn resume_hide_duration(&self) -> Option<Duration> {
        self.options
            .resume_hide_duration
            .or_else(|| self.provider.resume_hide_duration())
    }

    #[must_use]
    pub fn prevent_duplicate(&self) -> bool {
        resolve(
            self.options.prevent_duplicate,
            Some(self.provider.prevent_duplicate),
            false,
        )
    }

    #[must_use]
    pub fn hide_icon_variant(&self) -> bool {
        resolve(
            self.options.hide_icon_variant,
            Some(self.provider.hide_icon_variant),
            false,
        )
    }

    /// Call-level icon, else the provider's icon for `variant`. `None` keeps
    /// the view's built-in glyph.
    #[must_use]
    pub fn icon(&self, variant: Variant) -> Option<String> {
        self.options
            .icon
            .clone()
            .or_else(|| self.provider.icon_variant.get(variant).map(str::to_owned))
    }

    #[must_use]
    pub fn transition_duration(&self) -> TransitionDuration {
        resolve(
            self.options.transition_duration,
            self.provider.transition_duration,
            TransitionDuration::default(),
        )
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Queue**: Capacity of the visible working set
//! - **Auto-hide**: Timer durations for dismissing snackbars
//! - **Transitions**: Enter/exit animation timings used by the view
//! - **Diagnostics**: Event buffer sizing

use std::time::Duration;

// ==========================================================================
// Queue Defaults
// ==========================================================================

/// Number of snackbars visible at once when the provider does not say otherwise.
pub const DEFAULT_MAX_SNACK: usize = 3;

/// Smallest usable capacity. A configured `0` falls back to the default.
pub const MIN_MAX_SNACK: usize = 1;

// ==========================================================================
// Auto-hide Defaults
// ==========================================================================

/// Auto-hide duration applied when neither the call nor the provider sets one.
pub const DEFAULT_AUTO_HIDE_MS: u64 = 5000;

/// Share of the auto-hide duration used when resuming a paused timer
/// and no explicit resume duration is configured.
pub const RESUME_HIDE_RATIO: f64 = 0.5;

// ==========================================================================
// Transition Defaults
// ==========================================================================

/// Duration of the enter (slide-in) animation.
pub const DEFAULT_ENTER_TRANSITION_MS: u64 = 225;

/// Duration of the exit (slide-out) animation.
pub const DEFAULT_EXIT_TRANSITION_MS: u64 = 195;

/// Duration of the collapse animation that runs after the exit animation.
pub const DEFAULT_COLLAPSE_TRANSITION_MS: u64 = 175;

/// Interval between view ticks driving timers and transitions.
pub const TICK_INTERVAL: Duration = Duration::from_millis(16);

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of diagnostic events kept in memory.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 500;

/// Minimum diagnostic buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10;

/// Maximum diagnostic buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10_000;

/// Returns the default auto-hide duration.
#[must_use]
pub fn default_auto_hide() -> Duration {
    Duration::from_millis(DEFAULT_AUTO_HIDE_MS)
}

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_MAX_SNACK >= MIN_MAX_SNACK);
    assert!(MIN_DIAGNOSTICS_BUFFER_CAPACITY <= DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_EXIT_TRANSITION_MS < DEFAULT_ENTER_TRANSITION_MS);
};

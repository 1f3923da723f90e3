// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for queue activity tracking.
//!
//! Keys are stored as their display string so that every event can be
//! serialized, generated keys included.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::snackbar::{CloseReason, Variant};

/// A diagnostic event with timestamp.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event occurred (monotonic clock for duration calculations)
    pub timestamp: Instant,
    /// The type and data of the event
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates a new diagnostic event with the current timestamp.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }

    /// Creates a new diagnostic event with a specific timestamp.
    #[must_use]
    pub fn with_timestamp(kind: DiagnosticEventKind, timestamp: Instant) -> Self {
        Self { timestamp, kind }
    }
}

/// Categories of warnings raised by the snackbar queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningType {
    /// Every visible slot holds a persistent snackbar.
    PersistCapacityConflict,
    /// Other warning type not covered by specific categories.
    Other,
}

/// A categorized, non-fatal warning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarningEvent {
    pub warning_type: WarningType,
    pub message: String,
}

impl WarningEvent {
    #[must_use]
    pub fn new(warning_type: WarningType, message: impl Into<String>) -> Self {
        Self {
            warning_type,
            message: message.into(),
        }
    }
}

/// The type and associated data for a diagnostic event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    /// A snackbar entered the queue.
    Enqueued { key: String, variant: Variant },

    /// An enqueue was dropped by duplicate prevention.
    DuplicateSuppressed { key: String },

    /// A queued snackbar took a visible slot.
    Admitted { key: String },

    /// A visible snackbar was picked to make room.
    ///
    /// `deferred` is set when the close waits for the enter transition.
    Evicted { key: String, deferred: bool },

    /// A close was requested; `key` is absent for close-all.
    CloseRequested {
        #[serde(skip_serializing_if = "Option::is_none")]
        key: Option<String>,
        reason: CloseReason,
    },

    /// A snackbar finished its exit transition and was removed.
    Removed { key: String },

    /// Non-critical warning.
    Warning { event: WarningEvent },
}

impl DiagnosticEventKind {
    /// Snake-case tag of the variant, as it appears in exported JSON.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Enqueued { .. } => "enqueued",
            Self::DuplicateSuppressed { .. } => "duplicate_suppressed",
            Self::Admitted { .. } => "admitted",
            Self::Evicted { .. } => "evicted",
            Self::CloseRequested { .. } => "close_requested",
            Self::Removed { .. } => "removed",
            Self::Warning { .. } => "warning",
        }
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for recording snackbar queue activity.
//!
//! Events are captured during queue transitions, stored in a memory-bounded
//! circular buffer, and exported as JSON reports.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: Timestamped queue event
//! - [`DiagnosticsHandle`]: Cloneable sender given to the provider
//! - [`DiagnosticsCollector`]: Drains handles into the buffer and exports reports

mod buffer;
mod collector;
mod events;
mod report;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{DiagnosticEvent, DiagnosticEventKind, WarningEvent, WarningType};
pub use report::{DiagnosticReport, ReportMetadata, ReportSummary, SerializableEvent};

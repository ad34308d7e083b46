// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for collecting activity and lifecycle events.
//!
//! Diagnostic events are the application's log: visitor actions, toast
//! lifecycle transitions, warnings and errors. They are kept in a
//! memory-bounded circular buffer and can be exported as JSON.
//!
//! # Architecture
//!
//! - [`DiagnosticsHandle`]: cheap, cloneable, non-blocking sender
//! - [`DiagnosticsCollector`]: drains the channel into a [`CircularBuffer`]
//! - [`DiagnosticEvent`]: timestamped [`DiagnosticEventKind`]

mod buffer;
mod collector;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{
    default_export_directory, default_export_filename, DiagnosticsCollector, DiagnosticsHandle,
};
pub use events::{
    DiagnosticEvent, DiagnosticEventKind, ErrorEvent, NotificationEvent, UserAction, WarningEvent,
};

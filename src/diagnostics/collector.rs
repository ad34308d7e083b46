// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating and storing diagnostic events.
//!
//! Components log through a cloneable [`DiagnosticsHandle`]; the application
//! drains pending events into the [`DiagnosticsCollector`] buffer on each
//! update cycle.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::{Local, Utc};
use crossbeam_channel::{bounded, Receiver, Sender};
use serde::Serialize;

use crate::error::Result;

use super::{
    BufferCapacity, CircularBuffer, DiagnosticEvent, DiagnosticEventKind, ErrorEvent,
    NotificationEvent, UserAction, WarningEvent,
};

/// Pending events allowed in the channel before new ones are dropped.
const CHANNEL_CAPACITY: usize = 512;

/// Handle for sending diagnostic events to the collector.
///
/// This handle is cheap to clone and can be moved into dismissal callbacks.
/// Sends never block the UI thread: events are dropped when the channel is full.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    pub fn log_action(&self, action: UserAction) {
        self.send(DiagnosticEventKind::UserAction { action });
    }

    pub fn log_notification(&self, event: NotificationEvent) {
        self.send(DiagnosticEventKind::Notification { event });
    }

    pub fn log_warning(&self, event: WarningEvent) {
        self.send(DiagnosticEventKind::Warning { event });
    }

    pub fn log_error(&self, event: ErrorEvent) {
        self.send(DiagnosticEventKind::Error { event });
    }

    fn send(&self, kind: DiagnosticEventKind) {
        let _ = self.event_tx.try_send(DiagnosticEvent::new(kind));
    }
}

/// Event as written to a JSON export, timed relative to collector start.
#[derive(Debug, Serialize)]
struct SerializableEvent<'a> {
    offset_ms: u64,
    #[serde(flatten)]
    kind: &'a DiagnosticEventKind,
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    generated_at: String,
    app_version: &'static str,
    event_count: usize,
    events: Vec<SerializableEvent<'a>>,
}

/// Central collector for diagnostic events.
#[derive(Debug)]
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    event_tx: Sender<DiagnosticEvent>,
    started_at: Instant,
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = bounded(CHANNEL_CAPACITY);
        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
            started_at: Instant::now(),
        }
    }

    /// Returns a new handle wired to this collector.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Moves every pending event from the channel into the buffer.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Buffered events, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Serializes the buffered events as a pretty-printed JSON report.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn export_json(&self) -> serde_json::Result<String> {
        let events: Vec<SerializableEvent<'_>> = self
            .buffer
            .iter()
            .map(|event| SerializableEvent {
                offset_ms: u64::try_from(
                    event
                        .timestamp
                        .saturating_duration_since(self.started_at)
                        .as_millis(),
                )
                .unwrap_or(u64::MAX),
                kind: &event.kind,
            })
            .collect();

        let report = Report {
            generated_at: Utc::now().to_rfc3339(),
            app_version: env!("CARGO_PKG_VERSION"),
            event_count: events.len(),
            events,
        };
        serde_json::to_string_pretty(&report)
    }

    /// Writes the JSON report into `dir` under a timestamped name.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn export_to_dir(&self, dir: &Path) -> Result<PathBuf> {
        let json = self.export_json().map_err(io::Error::from)?;
        let path = dir.join(default_export_filename());
        write_atomic(&path, &json)?;
        Ok(path)
    }
}

/// Report file name, e.g. `jobsite_diagnostics_20261019_142501.json`.
#[must_use]
pub fn default_export_filename() -> String {
    format!(
        "jobsite_diagnostics_{}.json",
        Local::now().format("%Y%m%d_%H%M%S")
    )
}

/// Documents folder if there is one, else the working directory.
#[must_use]
pub fn default_export_directory() -> PathBuf {
    dirs::document_dir().unwrap_or_else(|| std::env::current_dir().unwrap_or_default())
}

/// Writes through a `.tmp` sibling and renames it into place.
fn write_atomic(path: &Path, content: &str) -> io::Result<()> {
    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, content)?;
    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }
    Ok(())
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::{DismissReason, NotificationId};

    #[test]
    fn handle_sends_to_collector() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();

        handle.log_action(UserAction::SubscribeAlerts);
        assert!(collector.is_empty(), "events stay in channel until drained");

        collector.process_pending();
        assert_eq!(collector.len(), 1);
        let event = collector.iter().next().expect("one event");
        assert_eq!(
            event.kind,
            DiagnosticEventKind::UserAction {
                action: UserAction::SubscribeAlerts
            }
        );
    }

    #[test]
    fn buffer_capacity_bounds_retention() {
        let mut collector = DiagnosticsCollector::new(BufferCapacity::new(0));
        let handle = collector.handle();
        let capacity = BufferCapacity::new(0).value();

        for _ in 0..capacity + 5 {
            handle.log_warning(WarningEvent::new("w"));
        }
        collector.process_pending();
        assert_eq!(collector.len(), capacity);
    }

    #[test]
    fn export_json_contains_events() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();
        handle.log_notification(NotificationEvent::dismissed(
            NotificationId::new(),
            DismissReason::UserClosed,
        ));
        handle.log_error(ErrorEvent::new("boom"));
        collector.process_pending();

        let json = collector.export_json().expect("export");
        let parsed: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(parsed["event_count"], 2);
        assert_eq!(parsed["events"][0]["reason"], "user_closed");
        assert_eq!(parsed["events"][1]["message"], "boom");
    }

    #[test]
    fn export_to_dir_writes_report_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut collector = DiagnosticsCollector::default();
        collector.handle().log_action(UserAction::SubscribeAlerts);
        collector.process_pending();

        let path = collector.export_to_dir(dir.path()).expect("export");
        assert!(path.starts_with(dir.path()));
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("json"));

        let written = fs::read_to_string(&path).expect("read report");
        let parsed: serde_json::Value = serde_json::from_str(&written).expect("valid json");
        assert_eq!(parsed["event_count"], 1);
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn export_to_missing_dir_fails() {
        let dir = tempfile::tempdir().expect("temp dir");
        let collector = DiagnosticsCollector::default();
        let result = collector.export_to_dir(&dir.path().join("missing"));
        assert!(matches!(result, Err(crate::error::Error::Io(_))));
    }

    #[test]
    fn clear_empties_buffer() {
        let mut collector = DiagnosticsCollector::default();
        collector.handle().log_action(UserAction::CloseToast);
        collector.process_pending();
        collector.clear();
        assert!(collector.is_empty());
    }
}

//! Warning recording for tests
//!
//! A [`WarningRecorder`] is a `tracing` layer that keeps every WARN
//! and ERROR event in emission order so a test can assert that a code
//! path warned — and about what. `pop` consumes from the front,
//! mirroring how recorded warnings are usually checked one by one.
//!
//! # Example
//!
//! ```
//! use browser_harness::warnings::WarningRecorder;
//! use tracing_subscriber::prelude::*;
//!
//! let recorder = WarningRecorder::new();
//! let subscriber = tracing_subscriber::registry().with(recorder.clone());
//!
//! tracing::subscriber::with_default(subscriber, || {
//!     tracing::warn!("Please stop using this");
//! });
//!
//! assert_eq!(recorder.len(), 1);
//! let warning = recorder.pop().unwrap();
//! assert_eq!(warning.message, "Please stop using this");
//! ```

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

/// One recorded warning or error event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedWarning {
    /// The event's `message` field
    pub message: String,
    /// The module path / target that emitted the event
    pub target: String,
    /// `Level::WARN` or `Level::ERROR`
    pub level: Level,
}

/// Layer that records WARN-and-above events in emission order
#[derive(Clone, Debug, Default)]
pub struct WarningRecorder {
    recorded: Arc<Mutex<VecDeque<RecordedWarning>>>,
}

impl WarningRecorder {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded events not yet popped
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether nothing has been recorded (or everything was popped)
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Snapshot of the recorded events, oldest first
    pub fn list(&self) -> Vec<RecordedWarning> {
        self.lock().iter().cloned().collect()
    }

    /// Remove and return the oldest recorded event
    pub fn pop(&self) -> Option<RecordedWarning> {
        self.lock().pop_front()
    }

    /// Remove and return the oldest event whose target contains
    /// `needle`, leaving the others in place
    pub fn pop_where(&self, needle: &str) -> Option<RecordedWarning> {
        let mut recorded = self.lock();
        let index = recorded.iter().position(|w| w.target.contains(needle))?;
        recorded.remove(index)
    }

    /// Drop everything recorded so far
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, VecDeque<RecordedWarning>> {
        self.recorded.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl<S: Subscriber> Layer<S> for WarningRecorder {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let level = *event.metadata().level();
        if level > Level::WARN {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        self.lock().push_back(RecordedWarning {
            message: visitor.message,
            target: event.metadata().target().to_string(),
            level,
        });
    }
}

/// Extracts the `message` field from an event
#[derive(Default)]
struct MessageVisitor {
    message: String,
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        }
    }
}

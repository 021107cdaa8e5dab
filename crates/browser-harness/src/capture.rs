//! Output capture for tests
//!
//! A [`CaptureBuffer`] stands in for stdout/stderr in a
//! `tracing-subscriber` pipeline so a test can assert on what was
//! logged. Reading the buffer drains it, so consecutive reads see only
//! what was written in between — the same contract as reading captured
//! output between test steps.
//!
//! # Example
//!
//! ```
//! use browser_harness::capture::CaptureBuffer;
//! use tracing::info;
//!
//! let buffer = CaptureBuffer::new();
//! let subscriber = tracing_subscriber::fmt()
//!     .with_writer(buffer.clone())
//!     .with_ansi(false)
//!     .finish();
//!
//! tracing::subscriber::with_default(subscriber, || {
//!     info!("opening page");
//! });
//!
//! let output = buffer.take();
//! assert!(output.contains("opening page"));
//! assert!(buffer.take().is_empty());
//! ```

use std::io;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

/// Shared in-memory sink for captured log output
#[derive(Clone, Debug, Default)]
pub struct CaptureBuffer {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl CaptureBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain the buffer, returning everything written since the last
    /// read
    pub fn take(&self) -> String {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        let bytes = std::mem::take(&mut *inner);
        String::from_utf8_lossy(&bytes).into_owned()
    }

    /// Peek at the buffered output without draining it
    pub fn contents(&self) -> String {
        let inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        String::from_utf8_lossy(&inner).into_owned()
    }

    /// Whether nothing has been written since the last read
    pub fn is_empty(&self) -> bool {
        let inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        inner.is_empty()
    }
}

impl io::Write for CaptureBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        inner.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CaptureBuffer {
    type Writer = CaptureBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

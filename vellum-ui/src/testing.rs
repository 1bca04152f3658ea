//! Helpers for asserting on callbacks and log output in component tests.
//!
//! Enabled for this crate's own tests and, for downstream crates, through the
//! `testing` feature.

use std::{io, sync::Arc};

use parking_lot::Mutex;
use tracing_subscriber::{EnvFilter, fmt::MakeWriter};

use crate::prop::{Callback, CallbackWith};

/// Records every value a callback was invoked with.
///
/// Clones share the same record, so a test can keep one clone and hand
/// [`CallRecorder::callback`] to the component under test.
pub struct CallRecorder<T> {
    calls: Arc<Mutex<Vec<T>>>,
}

impl<T> CallRecorder<T>
where
    T: Clone + Send + 'static,
{
    /// A recorder with no calls.
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A callback that records its argument here.
    pub fn callback(&self) -> CallbackWith<T> {
        let calls = Arc::clone(&self.calls);
        CallbackWith::new(move |value: T| calls.lock().push(value))
    }

    /// All recorded arguments, oldest first.
    pub fn calls(&self) -> Vec<T> {
        self.calls.lock().clone()
    }

    /// The most recent argument.
    pub fn last(&self) -> Option<T> {
        self.calls.lock().last().cloned()
    }

    /// Number of recorded calls.
    pub fn count(&self) -> usize {
        self.calls.lock().len()
    }

    /// Returns `true` if the callback never ran.
    pub fn is_empty(&self) -> bool {
        self.calls.lock().is_empty()
    }

    /// Forgets recorded calls.
    pub fn reset(&self) {
        self.calls.lock().clear();
    }
}

impl CallRecorder<()> {
    /// A no-argument callback that records each invocation.
    pub fn unit_callback(&self) -> Callback {
        let calls = Arc::clone(&self.calls);
        Callback::new(move || calls.lock().push(()))
    }
}

impl<T> Clone for CallRecorder<T> {
    fn clone(&self) -> Self {
        Self {
            calls: Arc::clone(&self.calls),
        }
    }
}

impl<T> Default for CallRecorder<T>
where
    T: Clone + Send + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Runs `f` with a thread-local subscriber and returns its result together
/// with every event at `warn` or above that `f` emitted, formatted without
/// colors.
pub fn capture_warnings<R>(f: impl FnOnce() -> R) -> (R, String) {
    let buffer = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("warn"))
        .with_writer(buffer.clone())
        .with_ansi(false)
        .finish();

    let result = tracing::subscriber::with_default(subscriber, f);
    let logs = String::from_utf8_lossy(&buffer.bytes.lock()).into_owned();
    (result, logs)
}

#[derive(Clone, Default)]
struct LogBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

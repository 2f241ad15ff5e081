//! # Clipboard
//!
//! Fire-and-forget system clipboard writes.

use std::sync::Mutex;

/// A sink for copied text.
///
/// Implementations must not block and must not fail visibly; the flows only
/// flip a transient "copied" flag after calling this.
pub trait Clipboard: Send + Sync {
    /// Writes text to the clipboard.
    fn write_text(&self, text: &str);
}

/// Clipboard that discards everything (headless platforms).
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopClipboard;

impl Clipboard for NoopClipboard {
    fn write_text(&self, _text: &str) {}
}

/// Clipboard that records writes in memory, for tests.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    writes: Mutex<Vec<String>>,
}

impl MemoryClipboard {
    /// Creates an empty recording clipboard.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the most recent write, if any.
    #[must_use]
    pub fn last(&self) -> Option<String> {
        self.writes
            .lock()
            .ok()
            .and_then(|writes| writes.last().cloned())
    }

    /// Returns how many writes were recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.writes.lock().map(|writes| writes.len()).unwrap_or(0)
    }

    /// Returns true if nothing was written yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&self, text: &str) {
        if let Ok(mut writes) = self.writes.lock() {
            writes.push(text.to_string());
        }
    }
}

//! Captures lines instead of printing them. Clones share one buffer, so a test can hand a
//! clone to the logger and inspect the original.

use super::{Line, Sink};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<Line>>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A panic while holding the lock can't leave a `Vec` half-written, so poisoning is ignored.
    fn guard(&self) -> MutexGuard<'_, Vec<Line>> {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub fn lines(&self) -> Vec<Line> {
        self.guard().clone()
    }

    /// Just the compiled texts, in emission order.
    #[must_use]
    pub fn texts(&self) -> Vec<String> {
        self.guard().iter().map(|l| l.text.clone()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.guard().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.guard().is_empty()
    }

    pub fn clear(&self) {
        self.guard().clear();
    }
}

impl Sink for MemorySink {
    fn write(&self, line: &Line) -> Result<(), crate::Error> {
        self.guard().push(line.clone());
        Ok(())
    }
}

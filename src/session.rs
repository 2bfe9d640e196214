//! Last-used shift, owned by the transport layer.
//!
//! Starts empty, is overwritten after every successful page request and
//! is never cleared. The cipher core never touches it; handlers read it
//! once when rendering and write it once when a request completes.

use std::sync::RwLock;

use crate::shift::ShiftAmount;

/// Holder for the most recently used valid shift.
#[derive(Debug, Default)]
pub struct LastShift {
    value: RwLock<Option<ShiftAmount>>,
}

impl LastShift {
    /// Creates an empty holder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded shift, if any request has succeeded yet.
    pub fn get(&self) -> Option<ShiftAmount> {
        // A poisoned lock still holds a valid Copy value.
        match self.value.read() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }

    /// Returns the recorded shift or `fallback` when none is recorded.
    pub fn get_or(&self, fallback: ShiftAmount) -> ShiftAmount {
        self.get().unwrap_or(fallback)
    }

    /// Records `shift` as the most recent one.
    pub fn record(&self, shift: ShiftAmount) {
        let mut guard = match self.value.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = Some(shift);
    }
}

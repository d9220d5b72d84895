//=========================================================================
// One-Shot Notice
//=========================================================================
//
// Edge-triggered notification cell consumed exactly once.
//
// Pattern: post → peek (N observers) → take (one consumer) → empty
//
// A newer post replaces an unconsumed value, so delivery is at most
// once per emission: consumers that fall behind observe only the
// latest value, never a stale backlog.
//
//=========================================================================

/// One-shot notification cell.
///
/// Holds at most one pending value. Posting while a value is pending
/// replaces it; taking consumes it, leaving the cell empty until the
/// next post. Observers that only need to look use [`Notice::peek`].
#[derive(Debug)]
pub struct Notice<T> {
    pending: Option<T>,
}

impl<T> Notice<T> {
    /// Creates an empty notice.
    pub fn new() -> Self {
        Self { pending: None }
    }

    //--- Posting ----------------------------------------------------------

    /// Posts a value, replacing any unconsumed one.
    ///
    /// Returns `true` if an unconsumed value was replaced.
    pub fn post(&mut self, value: T) -> bool {
        self.pending.replace(value).is_some()
    }

    //--- Consumption ------------------------------------------------------

    /// Consumes the pending value, leaving the notice empty.
    ///
    /// Returns `None` when nothing is pending; calling again after a
    /// successful take is a no-op.
    pub fn take(&mut self) -> Option<T> {
        self.pending.take()
    }

    /// Returns a reference to the pending value without consuming it.
    pub fn peek(&self) -> Option<&T> {
        self.pending.as_ref()
    }

    /// Returns `true` if a value is pending.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl<T> Default for Notice<T> {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Tests
//=========================================================================

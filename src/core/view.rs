//=========================================================================
// Session View
//=========================================================================
//
// Owned, renderable view of a round for presentation layers.
//
// Snapshots decouple the presentation surface from session internals:
// the surface receives plain data after every state change and never
// holds a reference into the session.
//
//=========================================================================

//=== SessionSnapshot =====================================================

/// Point-in-time view of a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    /// Word currently being guessed.
    pub word: String,

    /// Running score (may be negative).
    pub score: i32,

    /// Whole seconds left on the countdown.
    pub remaining_secs: u64,

    /// Whether the round-finished notice is pending.
    pub finished: bool,
}

impl SessionSnapshot {
    /// Remaining time formatted for display.
    pub fn remaining_display(&self) -> String {
        format_remaining(self.remaining_secs)
    }
}

//=== Formatting ==========================================================

/// Formats a whole-second duration as `MM:SS`.
pub fn format_remaining(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

//=========================================================================
// Tests
//=========================================================================

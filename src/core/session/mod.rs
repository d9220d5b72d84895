//=========================================================================
// Session System
//=========================================================================
//
// The round/session state machine and its parts.
//
// Architecture:
//   RoundSession
//     ├─ WordDeck   (shuffled draw pile, transparent refill)
//     ├─ Countdown  (Running → Finished | Stopped)
//     └─ Notice×2   (finished, buzz — consumed exactly once)
//
// Flow:
//   commands / ticks → RoundSession → notices → acknowledged by owner
//
//=========================================================================

//=== Module Declarations =================================================

mod countdown;
mod round;
mod word_deck;

//=== Public API ==========================================================

pub use countdown::{Countdown, CountdownPhase, TickOutcome};
pub use round::RoundSession;
pub use word_deck::WordDeck;

//=== Internal Dependencies ===============================================

use std::time::Duration;

use crate::words::default_words;

//=== Timing Constants ====================================================

/// Total round length in seconds.
pub const COUNTDOWN_SECS: u64 = 10;

/// Cadence of the countdown.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Final stretch of the countdown that buzzes on every tick.
pub const PANIC_WINDOW_SECS: u64 = 3;

//=== SessionConfig =======================================================

/// Configuration for one round.
///
/// The defaults reproduce the standard game: a 10-second round over
/// the built-in word set with a 3-second panic window.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Total seconds on the countdown. Must be positive.
    pub countdown_secs: u64,

    /// Ticks with `0 < remaining <= window` buzz. Zero disables.
    pub panic_window_secs: u64,

    /// Word set for the deck. Must be non-empty.
    pub words: Vec<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            countdown_secs: COUNTDOWN_SECS,
            panic_window_secs: PANIC_WINDOW_SECS,
            words: default_words(),
        }
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_standard_game() {
        let config = SessionConfig::default();
        assert_eq!(config.countdown_secs, 10);
        assert_eq!(config.panic_window_secs, 3);
        assert_eq!(config.words.len(), crate::words::WORDS.len());
    }
}

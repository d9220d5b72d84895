//=========================================================================
// Word Set
//
// The canonical word set for a round. The deck draws from a shuffled
// copy of this list and reshuffles a fresh copy whenever it runs dry,
// so a round never ends for lack of words.
//
//=========================================================================

/// Default word set used when no custom list is configured.
pub const WORDS: &[&str] = &[
    "queen",
    "hospital",
    "basketball",
    "cat",
    "change",
    "snail",
    "soup",
    "calendar",
    "sad",
    "desk",
    "guitar",
    "home",
    "railway",
    "zebra",
    "jelly",
    "car",
    "crow",
    "trade",
    "bag",
    "roll",
    "bubble",
];

/// Returns the default word set as owned strings.
pub fn default_words() -> Vec<String> {
    WORDS.iter().map(|w| (*w).to_string()).collect()
}

//=========================================================================
// Tests
//=========================================================================

//=========================================================================
// Word Deck
//
// Shuffled draw pile over a canonical word set.
//
// Responsibilities:
// - Shuffle a copy of the word set into a draw pile
// - Pop the front word on every draw
// - Reshuffle a fresh copy before emptiness is ever observed
//
// Notes:
// There is no "out of words" state. A round can only end through the
// countdown, so the deck refills transparently, and every draw yields
// a word.
//
//=========================================================================

//=== Standard Library Imports ============================================
use std::collections::VecDeque;

//=== External Crates =====================================================
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

//=== WordDeck ============================================================
//
// Owns the canonical word set and the current draw pile. The rng is
// supplied per call so the session controls seeding.
//
pub struct WordDeck {
    source: Vec<String>,
    pile: VecDeque<String>,
}

impl WordDeck {
    //--- Construction -----------------------------------------------------
    //
    // Builds a deck from a non-empty word set and shuffles the first
    // pile.
    //
    // # Panics
    //
    // Panics if `words` is empty.
    //
    pub fn new(words: Vec<String>, rng: &mut impl Rng) -> Self {
        assert!(!words.is_empty(), "word set must not be empty");

        let mut deck = Self {
            source: words,
            pile: VecDeque::new(),
        };
        deck.refill(rng);
        deck
    }

    //--- draw() -----------------------------------------------------------
    //
    // Removes and returns the front word, reshuffling a fresh copy of
    // the word set first if the pile ran dry.
    //
    pub fn draw(&mut self, rng: &mut impl Rng) -> String {
        if self.pile.is_empty() {
            debug!("Word deck exhausted, reshuffling {} words", self.source.len());
            self.refill(rng);
        }

        self.pile
            .pop_front()
            .expect("refill left the word deck empty")
    }

    //--- refill() ---------------------------------------------------------
    //
    // Replaces the pile with a freshly shuffled copy of the word set.
    //
    fn refill(&mut self, rng: &mut impl Rng) {
        let mut fresh = self.source.clone();
        fresh.shuffle(rng);
        self.pile = fresh.into();
    }

    /// Number of words left in the current pile.
    pub fn remaining(&self) -> usize {
        self.pile.len()
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn new_deck_holds_full_pile() {
        let mut rng = StdRng::seed_from_u64(1);
        let deck = WordDeck::new(words(&["a", "b", "c"]), &mut rng);
        assert_eq!(deck.remaining(), 3);
    }

    #[test]
    #[should_panic(expected = "word set must not be empty")]
    fn empty_word_set_is_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        WordDeck::new(Vec::new(), &mut rng);
    }

    #[test]
    fn full_pass_draws_each_word_once() {
        let mut rng = StdRng::seed_from_u64(7);
        let set = words(&["queen", "hospital", "zebra", "snail"]);
        let mut deck = WordDeck::new(set.clone(), &mut rng);

        let drawn: HashSet<String> = (0..set.len()).map(|_| deck.draw(&mut rng)).collect();
        assert_eq!(drawn, set.into_iter().collect());
        assert_eq!(deck.remaining(), 0);
    }

    #[test]
    fn exhausted_deck_refills_transparently() {
        let mut rng = StdRng::seed_from_u64(3);
        let set = words(&["cat", "car", "crow"]);
        let mut deck = WordDeck::new(set.clone(), &mut rng);

        for _ in 0..set.len() {
            deck.draw(&mut rng);
        }
        assert_eq!(deck.remaining(), 0);

        // Next draw reshuffles a fresh copy instead of failing
        let word = deck.draw(&mut rng);
        assert!(set.contains(&word));
        assert_eq!(deck.remaining(), set.len() - 1);
    }

    #[test]
    fn every_draw_yields_a_word() {
        let mut rng = StdRng::seed_from_u64(11);
        let set = words(&["soup", "desk"]);
        let mut deck = WordDeck::new(set.clone(), &mut rng);

        for _ in 0..100 {
            let word = deck.draw(&mut rng);
            assert!(set.contains(&word));
        }
    }

    #[test]
    fn single_word_deck_always_yields_that_word() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut deck = WordDeck::new(words(&["bubble"]), &mut rng);

        for _ in 0..10 {
            assert_eq!(deck.draw(&mut rng), "bubble");
        }
    }
}

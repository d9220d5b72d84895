//=========================================================================
// Round Session
//=========================================================================
//
// Owns all mutable state of one round: the current word, the score,
// the word deck, the countdown, and the two one-shot notices the
// presentation layer consumes (round finished, pending buzz).
//
// The session is purely synchronous; whoever owns it is responsible
// for serializing commands and ticks (the driver does this by owning
// the session on a single thread).
//
//=========================================================================

//=== External Crates =====================================================

use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

//=== Internal Dependencies ===============================================

use crate::core::buzz::BuzzKind;
use crate::core::signal::Notice;
use crate::core::view::SessionSnapshot;
use super::countdown::{Countdown, TickOutcome};
use super::word_deck::WordDeck;
use super::SessionConfig;

//=== RoundSession ========================================================

/// State machine for a single round of the guessing game.
///
/// Created with the clock already running: the first word is drawn and
/// the countdown starts at the configured total. Commands and ticks
/// mutate state; the finished and buzz notices surface the two
/// edge-triggered events for exactly-once consumption.
pub struct RoundSession {
    word: String,
    score: i32,
    deck: WordDeck,
    countdown: Countdown,
    panic_window_secs: u64,
    finished: Notice<i32>,
    buzz: Notice<BuzzKind>,
    rng: StdRng,
}

impl RoundSession {
    //--- Construction -----------------------------------------------------

    /// Starts a round from the given configuration.
    pub fn new(config: SessionConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Starts a round with a caller-supplied rng.
    ///
    /// Seeding the rng makes the deck order deterministic, which the
    /// tests rely on.
    pub fn with_rng(config: SessionConfig, mut rng: StdRng) -> Self {
        let mut deck = WordDeck::new(config.words, &mut rng);
        let word = deck.draw(&mut rng);

        info!(
            "Round session created ({}s countdown, {} words)",
            config.countdown_secs,
            deck.remaining() + 1
        );

        Self {
            word,
            score: 0,
            deck,
            countdown: Countdown::new(config.countdown_secs),
            panic_window_secs: config.panic_window_secs,
            finished: Notice::new(),
            buzz: Notice::new(),
            rng,
        }
    }

    //--- Commands ---------------------------------------------------------

    /// Player got the word: score up, buzz, next word.
    pub fn mark_correct(&mut self) {
        if self.countdown.is_terminal() {
            warn!("mark_correct ignored: round is over");
            return;
        }

        self.score += 1;
        self.buzz.post(BuzzKind::Correct);
        self.advance_word();
    }

    /// Player passed on the word: score down, next word. No buzz.
    pub fn mark_skip(&mut self) {
        if self.countdown.is_terminal() {
            warn!("mark_skip ignored: round is over");
            return;
        }

        self.score -= 1;
        self.advance_word();
    }

    //--- advance_word() ---------------------------------------------------
    //
    // Draws the next current word. The deck reshuffles itself when
    // exhausted, so there is always a word to show.
    //
    fn advance_word(&mut self) {
        self.word = self.deck.draw(&mut self.rng);
    }

    //--- Ticking ----------------------------------------------------------

    /// Advances the countdown by one second.
    ///
    /// Inside the panic window each tick buzzes; the expiring tick
    /// posts the finished notice and the game-over buzz. Ticks after a
    /// terminal countdown are inert.
    pub fn tick(&mut self) -> TickOutcome {
        let outcome = self.countdown.tick();

        match outcome {
            TickOutcome::Running { remaining } if remaining <= self.panic_window_secs => {
                self.buzz.post(BuzzKind::CountdownPanic);
            }
            TickOutcome::Expired => {
                info!("Round finished with score {}", self.score);
                self.finished.post(self.score);
                self.buzz.post(BuzzKind::GameOver);
            }
            _ => {}
        }

        outcome
    }

    //--- Acknowledgements -------------------------------------------------

    /// Consumes the round-finished notice, returning the final score.
    ///
    /// `None` when no finish is pending; repeated calls are no-ops, so
    /// the finish transition is observed exactly once.
    pub fn acknowledge_finished(&mut self) -> Option<i32> {
        self.finished.take()
    }

    /// Consumes the pending buzz, if any.
    pub fn acknowledge_buzz(&mut self) -> Option<BuzzKind> {
        self.buzz.take()
    }

    //--- Teardown ---------------------------------------------------------

    /// Cancels the countdown. Idempotent, safe after natural finish.
    pub fn teardown(&mut self) {
        self.countdown.cancel();
    }

    //--- Observers --------------------------------------------------------

    /// Word currently being guessed.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Running score.
    pub fn score(&self) -> i32 {
        self.score
    }

    /// Seconds left on the countdown.
    pub fn remaining_secs(&self) -> u64 {
        self.countdown.remaining_secs()
    }

    /// Whether an unconsumed round-finished notice is pending.
    pub fn is_finished(&self) -> bool {
        self.finished.is_pending()
    }

    /// Pending buzz, without consuming it.
    pub fn buzz(&self) -> Option<BuzzKind> {
        self.buzz.peek().copied()
    }

    /// Owned view of the round for presentation layers.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            word: self.word.clone(),
            score: self.score,
            remaining_secs: self.remaining_secs(),
            finished: self.is_finished(),
        }
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::session::countdown::CountdownPhase;

    //--- Test Helpers -----------------------------------------------------

    fn config(countdown_secs: u64) -> SessionConfig {
        SessionConfig {
            countdown_secs,
            ..SessionConfig::default()
        }
    }

    fn session(countdown_secs: u64) -> RoundSession {
        RoundSession::with_rng(config(countdown_secs), StdRng::seed_from_u64(42))
    }

    //--- Construction -----------------------------------------------------

    #[test]
    fn new_session_starts_clean() {
        let session = session(10);

        assert!(!session.word().is_empty());
        assert_eq!(session.score(), 0);
        assert_eq!(session.remaining_secs(), 10);
        assert!(!session.is_finished());
        assert_eq!(session.buzz(), None);
    }

    #[test]
    fn seeded_sessions_deal_the_same_words() {
        let a = RoundSession::with_rng(config(10), StdRng::seed_from_u64(9));
        let b = RoundSession::with_rng(config(10), StdRng::seed_from_u64(9));
        assert_eq!(a.word(), b.word());
    }

    //--- Score ------------------------------------------------------------

    #[test]
    fn score_is_corrects_minus_skips() {
        let mut session = session(10);

        session.mark_correct();
        session.mark_correct();
        session.mark_correct();
        session.mark_skip();

        assert_eq!(session.score(), 2);
    }

    #[test]
    fn score_may_go_negative() {
        let mut session = session(10);

        session.mark_skip();
        session.mark_skip();

        assert_eq!(session.score(), -2);
    }

    //--- Words ------------------------------------------------------------

    #[test]
    fn every_decision_advances_the_word() {
        let mut session = session(10);

        // A word is always set, even after draining the whole deck
        for i in 0..50 {
            assert!(!session.word().is_empty());
            if i % 2 == 0 {
                session.mark_correct();
            } else {
                session.mark_skip();
            }
        }
        assert!(!session.word().is_empty());
    }

    //--- Buzz -------------------------------------------------------------

    #[test]
    fn correct_buzzes_until_acknowledged() {
        let mut session = session(10);

        session.mark_correct();
        session.mark_correct();
        session.mark_correct();
        session.mark_skip();

        assert_eq!(session.score(), 2);
        assert_eq!(session.buzz(), Some(BuzzKind::Correct));

        assert_eq!(session.acknowledge_buzz(), Some(BuzzKind::Correct));
        assert_eq!(session.buzz(), None);
        assert_eq!(session.acknowledge_buzz(), None);
    }

    #[test]
    fn skip_does_not_buzz() {
        let mut session = session(10);

        session.mark_skip();
        assert_eq!(session.buzz(), None);
    }

    #[test]
    fn panic_window_buzzes_each_tick() {
        let mut session = session(10);

        // Outside the default 3s window: no buzz
        for _ in 0..6 {
            session.tick();
            assert_eq!(session.buzz(), None);
        }

        // remaining 3, 2, 1: panic buzz on each tick
        for _ in 0..3 {
            session.tick();
            assert_eq!(session.acknowledge_buzz(), Some(BuzzKind::CountdownPanic));
        }
    }

    //--- Countdown and finish ---------------------------------------------

    #[test]
    fn ten_ticks_finish_the_round() {
        let mut session = session(10);

        for _ in 0..9 {
            session.tick();
            assert!(!session.is_finished());
        }

        assert_eq!(session.tick(), TickOutcome::Expired);
        assert_eq!(session.remaining_secs(), 0);
        assert!(session.is_finished());
        assert_eq!(session.buzz(), Some(BuzzKind::GameOver));

        // An eleventh tick alters nothing
        let score = session.score();
        assert_eq!(session.tick(), TickOutcome::Inert);
        assert_eq!(session.remaining_secs(), 0);
        assert_eq!(session.score(), score);
    }

    #[test]
    fn finish_is_observed_exactly_once() {
        let mut session = session(1);

        session.mark_correct();
        session.tick();

        assert!(session.is_finished());
        assert_eq!(session.acknowledge_finished(), Some(1));

        // Consumed: flag reads false, repeat acknowledge is a no-op
        assert!(!session.is_finished());
        assert_eq!(session.acknowledge_finished(), None);
    }

    #[test]
    fn acknowledge_finished_before_finish_is_a_noop() {
        let mut session = session(10);
        assert_eq!(session.acknowledge_finished(), None);
        assert!(!session.is_finished());
    }

    #[test]
    fn commands_after_finish_are_ignored() {
        let mut session = session(1);
        session.tick();

        session.mark_correct();
        session.mark_skip();

        assert_eq!(session.score(), 0);
    }

    //--- Teardown ---------------------------------------------------------

    #[test]
    fn teardown_twice_is_safe() {
        let mut session = session(10);

        session.teardown();
        session.teardown();

        assert_eq!(session.tick(), TickOutcome::Inert);
    }

    #[test]
    fn teardown_after_finish_is_safe() {
        let mut session = session(1);
        session.tick();

        session.teardown();
        assert!(session.is_finished());
    }

    #[test]
    fn teardown_leaves_countdown_stopped() {
        let mut session = session(10);
        session.teardown();
        assert_eq!(session.countdown.phase(), CountdownPhase::Stopped);
    }

    //--- Snapshot ---------------------------------------------------------

    #[test]
    fn snapshot_mirrors_session_state() {
        let mut session = session(10);
        session.mark_correct();
        session.tick();

        let snapshot = session.snapshot();
        assert_eq!(snapshot.word, session.word());
        assert_eq!(snapshot.score, 1);
        assert_eq!(snapshot.remaining_secs, 9);
        assert!(!snapshot.finished);
        assert_eq!(snapshot.remaining_display(), "00:09");
    }
}

//=========================================================================
// Game Facade
//
// Entry point and coordinator for a running round.
//
// Architecture:
// ```text
//     GameBuilder  ──start()──>  Game handle  ──commands──>  [Logic Thread]
//         │                        │                           owns session
//         ├─ with_countdown_secs() └─ teardown()/Drop           ticks, drains
//         └─ with_* collaborators     joins the thread          notices
// ```
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::thread::JoinHandle;
use std::time::Duration;

//=== External Crates =====================================================

use crossbeam_channel::{bounded, Sender};
use log::{error, info, warn};

//=== Internal Dependencies ===============================================

use crate::core::driver::{Collaborators, Command, SessionDriver};
use crate::core::hooks::{HapticSink, Navigator, Presenter};
use crate::core::session::{
    RoundSession, SessionConfig, COUNTDOWN_SECS, PANIC_WINDOW_SECS, TICK_INTERVAL,
};
use crate::words::default_words;

//=== Constants ===========================================================

// Command backlog bound; the driver drains the queue every iteration.
const COMMAND_CAPACITY: usize = 32;

//=== GameBuilder =========================================================

/// Builder for configuring and starting a [`Game`].
///
/// # Default Values
///
/// - **Countdown**: 10 seconds
/// - **Tick interval**: 1 second
/// - **Panic window**: 3 seconds
/// - **Words**: the built-in word set
///
/// # Examples
///
/// ```no_run
/// use wordrush::Game;
///
/// let mut game = Game::builder().start();
/// game.mark_correct();
/// game.mark_skip();
/// game.teardown();
/// ```
pub struct GameBuilder {
    countdown_secs: u64,
    panic_window_secs: u64,
    tick_interval: Duration,
    words: Vec<String>,
    collaborators: Collaborators,
}

impl GameBuilder {
    /// Creates a builder with the standard game settings.
    pub fn new() -> Self {
        Self {
            countdown_secs: COUNTDOWN_SECS,
            panic_window_secs: PANIC_WINDOW_SECS,
            tick_interval: TICK_INTERVAL,
            words: default_words(),
            collaborators: Collaborators::none(),
        }
    }

    //--- Configuration ----------------------------------------------------

    /// Sets the round length in seconds.
    ///
    /// # Panics
    ///
    /// Panics if `secs` is zero.
    pub fn with_countdown_secs(mut self, secs: u64) -> Self {
        assert!(secs > 0, "countdown must be positive, got {}", secs);
        self.countdown_secs = secs;
        self
    }

    /// Sets the stretch of final seconds that buzz on every tick.
    ///
    /// Zero disables the panic buzz.
    pub fn with_panic_window_secs(mut self, secs: u64) -> Self {
        self.panic_window_secs = secs;
        self
    }

    /// Sets the wall-clock interval between countdown ticks.
    ///
    /// One second for a real game; tests shorten it to drive a round
    /// to completion quickly.
    ///
    /// # Panics
    ///
    /// Panics if `interval` is zero.
    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        assert!(!interval.is_zero(), "tick interval must be positive");
        self.tick_interval = interval;
        self
    }

    /// Replaces the built-in word set.
    ///
    /// # Panics
    ///
    /// Panics if `words` is empty.
    pub fn with_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.words = words.into_iter().map(Into::into).collect();
        assert!(!self.words.is_empty(), "word set must not be empty");
        self
    }

    //--- Collaborators ----------------------------------------------------

    /// Registers the presentation surface.
    pub fn with_presenter<P: Presenter + 'static>(mut self, presenter: P) -> Self {
        self.collaborators.presenter = Some(Box::new(presenter));
        self
    }

    /// Registers the haptic sink that plays vibration patterns.
    pub fn with_haptics<H: HapticSink + 'static>(mut self, haptics: H) -> Self {
        self.collaborators.haptics = Some(Box::new(haptics));
        self
    }

    /// Registers the navigator notified when the round ends.
    pub fn with_navigator<N: Navigator + 'static>(mut self, navigator: N) -> Self {
        self.collaborators.navigator = Some(Box::new(navigator));
        self
    }

    //--- Startup ----------------------------------------------------------

    /// Starts the round: seeds the session, spawns the logic thread,
    /// and returns the command handle.
    pub fn start(self) -> Game {
        let config = SessionConfig {
            countdown_secs: self.countdown_secs,
            panic_window_secs: self.panic_window_secs,
            words: self.words,
        };
        let session = RoundSession::new(config);

        let (commands, receiver) = bounded(COMMAND_CAPACITY);
        let thread = SessionDriver::new(session, self.collaborators).spawn(receiver, self.tick_interval);

        info!("Game started ({}s round)", self.countdown_secs);

        Game {
            commands,
            thread: Some(thread),
        }
    }
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Game ================================================================

/// Handle to a running round.
///
/// Commands are forwarded to the logic thread that owns the session;
/// the handle never touches game state directly. Dropping the handle
/// tears the round down, so the countdown cadence is released on every
/// exit path.
pub struct Game {
    commands: Sender<Command>,
    thread: Option<JoinHandle<()>>,
}

impl Game {
    /// Returns a builder with the standard game settings.
    pub fn builder() -> GameBuilder {
        GameBuilder::new()
    }

    //--- Commands ---------------------------------------------------------

    /// Player got the word.
    pub fn mark_correct(&self) {
        self.send(Command::Correct);
    }

    /// Player passed on the word.
    pub fn mark_skip(&self) {
        self.send(Command::Skip);
    }

    fn send(&self, command: Command) {
        // A closed channel means the round already ended; the command
        // has nothing left to act on.
        if self.commands.send(command).is_err() {
            warn!("{:?} ignored: round is over", command);
        }
    }

    //--- Teardown ---------------------------------------------------------

    /// Stops the round and joins the logic thread.
    ///
    /// Idempotent: repeated calls, and calls after the round finished
    /// naturally, are safe no-ops.
    pub fn teardown(&mut self) {
        let Some(thread) = self.thread.take() else {
            return;
        };

        // Fails harmlessly when the thread already exited on its own
        let _ = self.commands.send(Command::Shutdown);

        if thread.join().is_err() {
            error!("Session logic thread panicked");
        } else {
            info!("Game torn down");
        }
    }
}

impl Drop for Game {
    fn drop(&mut self) {
        self.teardown();
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

//=========================================================================
// Session Driver
//
// Runs the round on a dedicated logic thread.
//
// Responsibilities:
// - Exclusively own the RoundSession (commands and ticks are thereby
//   serialized without locks)
// - Drive the countdown from a fixed-interval cadence
// - Drain session notices after every state change and dispatch them
//   to the registered collaborators
// - Exit cleanly on natural finish, shutdown command, or disconnect
//
// Notes:
// The cadence receiver lives inside the thread, so dropping the driver
// thread is all it takes to stop the countdown. Command-channel
// disconnect is treated as shutdown, mirroring the rule that a closed
// channel terminates the logic thread.
//
//=========================================================================

//=== Standard Library Imports ============================================
use std::thread;
use std::time::Duration;

//=== External Crates =====================================================
use crossbeam_channel::{select, tick, Receiver};
use log::info;

//=== Internal Modules ====================================================
use crate::core::hooks::{HapticSink, Navigator, Presenter};
use crate::core::session::{RoundSession, TickOutcome};

//=== Command =============================================================
//
// User-facing commands delivered to the logic thread. Parameterless;
// everything they act on lives in the session.
//
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Command {
    Correct,
    Skip,
    Shutdown,
}

//=== LoopControl =========================================================
//
// Control flow for the driver loop. Each handled event signals either
// to keep serving or to wind the round down.
//
enum LoopControl {
    Continue,
    Exit,
}

//=== Collaborators =======================================================
//
// Optional trait objects the driver dispatches session output to.
//
pub(crate) struct Collaborators {
    pub presenter: Option<Box<dyn Presenter>>,
    pub haptics: Option<Box<dyn HapticSink>>,
    pub navigator: Option<Box<dyn Navigator>>,
}

impl Collaborators {
    pub fn none() -> Self {
        Self {
            presenter: None,
            haptics: None,
            navigator: None,
        }
    }
}

//=== SessionDriver =======================================================
//
// Owns the session and the collaborators for the lifetime of the
// round. Consumed by spawn(), which moves it onto the logic thread.
//
pub(crate) struct SessionDriver {
    session: RoundSession,
    collaborators: Collaborators,
}

impl SessionDriver {
    pub fn new(session: RoundSession, collaborators: Collaborators) -> Self {
        Self {
            session,
            collaborators,
        }
    }

    //--- spawn() ----------------------------------------------------------
    //
    // Spawns the logic thread. Each iteration:
    //  1. Waits for a tick or a command (whichever is ready first)
    //  2. Applies it to the session
    //  3. Dispatches pending notices to the collaborators
    //  4. Exits after the finish was dispatched, or on shutdown
    //
    pub fn spawn(
        mut self,
        commands: Receiver<Command>,
        tick_interval: Duration,
    ) -> thread::JoinHandle<()> {
        thread::spawn(move || {
            let ticker = tick(tick_interval);

            loop {
                let control = select! {
                    recv(ticker) -> _ => self.on_tick(),
                    recv(commands) -> msg => match msg {
                        Ok(command) => self.on_command(command),
                        Err(_) => LoopControl::Exit,
                    },
                };

                self.dispatch();

                if let LoopControl::Exit = control {
                    break;
                }
            }

            self.session.teardown();
            info!("Session logic thread exiting");
        })
    }

    //--- on_tick() --------------------------------------------------------
    //
    // Advances the countdown. The expiring tick ends the loop once its
    // notices have been dispatched; the cadence dies with the thread.
    //
    fn on_tick(&mut self) -> LoopControl {
        match self.session.tick() {
            TickOutcome::Expired => LoopControl::Exit,
            _ => LoopControl::Continue,
        }
    }

    //--- on_command() -----------------------------------------------------

    fn on_command(&mut self, command: Command) -> LoopControl {
        match command {
            Command::Correct => {
                self.session.mark_correct();
                LoopControl::Continue
            }
            Command::Skip => {
                self.session.mark_skip();
                LoopControl::Continue
            }
            Command::Shutdown => LoopControl::Exit,
        }
    }

    //--- dispatch() -------------------------------------------------------
    //
    // Drains the session's one-shot notices in delivery order: buzz to
    // the haptic sink, a fresh snapshot to the presenter, and the
    // finish (with final score) to the navigator. Consuming a notice
    // acknowledges it, so each emission is delivered at most once.
    //
    fn dispatch(&mut self) {
        if let Some(kind) = self.session.acknowledge_buzz() {
            if let Some(haptics) = self.collaborators.haptics.as_deref_mut() {
                haptics.buzz(kind.pattern());
            }
        }

        if let Some(presenter) = self.collaborators.presenter.as_deref_mut() {
            presenter.render(&self.session.snapshot());
        }

        if let Some(score) = self.session.acknowledge_finished() {
            if let Some(navigator) = self.collaborators.navigator.as_deref_mut() {
                navigator.round_finished(score);
            }
        }
    }
}

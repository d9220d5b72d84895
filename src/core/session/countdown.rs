//=========================================================================
// Countdown
//=========================================================================
//
// Fixed-total countdown as an explicit state machine.
//
// States:
//   Running ──tick──▶ Running (remaining − 1)
//   Running ──tick (remaining hits 0)──▶ Finished   (terminal)
//   Running ──cancel──▶ Stopped                     (terminal)
//
// Both terminal states are inert: ticking them changes nothing, and
// cancel is idempotent from any state. The cadence that drives tick()
// lives outside this type; the countdown only accounts for time.
//
//=========================================================================

//=== External Crates =====================================================

use log::debug;

//=== CountdownPhase ======================================================

/// Lifecycle phase of a countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownPhase {
    /// Ticking down toward zero.
    Running,

    /// Reached zero naturally. Terminal.
    Finished,

    /// Cancelled before reaching zero. Terminal.
    Stopped,
}

//=== TickOutcome =========================================================

/// Result of a single tick, matched on by the caller instead of a
/// flag the caller could forget to reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Still running with this many seconds left.
    Running { remaining: u64 },

    /// This tick brought the countdown to zero.
    Expired,

    /// The countdown was already terminal; nothing changed.
    Inert,
}

//=== Countdown ===========================================================

/// Counts a fixed number of whole seconds down to zero, once.
#[derive(Debug)]
pub struct Countdown {
    remaining: u64,
    phase: CountdownPhase,
}

impl Countdown {
    /// Creates a running countdown with `total_secs` on the clock.
    ///
    /// # Panics
    ///
    /// Panics if `total_secs` is zero.
    pub fn new(total_secs: u64) -> Self {
        assert!(total_secs > 0, "countdown total must be positive");

        Self {
            remaining: total_secs,
            phase: CountdownPhase::Running,
        }
    }

    //--- Ticking ----------------------------------------------------------

    /// Advances the countdown by one second.
    ///
    /// Expires exactly once, on the tick that reaches zero; every tick
    /// after a terminal state is inert.
    pub fn tick(&mut self) -> TickOutcome {
        if self.phase != CountdownPhase::Running {
            return TickOutcome::Inert;
        }

        self.remaining -= 1;
        if self.remaining == 0 {
            self.phase = CountdownPhase::Finished;
            debug!("Countdown expired");
            TickOutcome::Expired
        } else {
            TickOutcome::Running {
                remaining: self.remaining,
            }
        }
    }

    //--- Cancellation -----------------------------------------------------

    /// Cancels a running countdown.
    ///
    /// Idempotent and safe in any state: a finished countdown stays
    /// finished, a stopped one stays stopped.
    pub fn cancel(&mut self) {
        if self.phase == CountdownPhase::Running {
            debug!("Countdown cancelled with {}s remaining", self.remaining);
            self.phase = CountdownPhase::Stopped;
        }
    }

    //--- Queries ----------------------------------------------------------

    /// Seconds left on the clock.
    pub fn remaining_secs(&self) -> u64 {
        self.remaining
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> CountdownPhase {
        self.phase
    }

    /// Returns `true` once the countdown can no longer tick.
    pub fn is_terminal(&self) -> bool {
        self.phase != CountdownPhase::Running
    }
}

//=========================================================================
// Tests
//=========================================================================

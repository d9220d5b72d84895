//=========================================================================
// Collaborator Interfaces
//=========================================================================
//
// Trait seams between the round core and the host environment.
//
// The core never talks to a screen, vibration hardware, or a
// navigation stack. Hosts register implementations of these traits
// with the game builder; the logic thread calls them back after each
// state change. Unregistered collaborators are simply skipped.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::view::SessionSnapshot;

//=== Presenter ===========================================================

/// Renders observable round state.
///
/// Called with a fresh snapshot after every command and every tick.
pub trait Presenter: Send {
    /// Renders the given view of the round.
    fn render(&mut self, snapshot: &SessionSnapshot);
}

//=== HapticSink ==========================================================

/// Receives vibration patterns for buzz events.
///
/// The pattern is an ordered sequence of millisecond durations
/// alternating still/vibrate, starting still. The sink owns the
/// platform's vibration capability.
pub trait HapticSink: Send {
    /// Plays the given vibration pattern.
    fn buzz(&mut self, pattern: &[u64]);
}

//=== Navigator ===========================================================

/// Reacts to the end of a round.
///
/// Called exactly once per round, when the countdown expires, carrying
/// the final score. Responsible for transitioning away from the round
/// screen.
pub trait Navigator: Send {
    /// The round is over; `final_score` is the result to carry forward.
    fn round_finished(&mut self, final_score: i32);
}

//=========================================================================
// Core Systems
//=========================================================================
//
// Everything the round is made of, independent of any host framework.
//
// Architecture:
//   session   — RoundSession state machine (words, score, countdown)
//   signal    — one-shot Notice cells (finished, buzz)
//   buzz      — haptic event kinds and vibration patterns
//   view      — owned snapshots for presentation layers
//   hooks     — collaborator trait seams (presenter, haptics, nav)
//   driver    — logic thread that serializes commands with ticks
//
// The driver is internal: hosts reach it only through the `Game`
// facade at the crate root.
//
//=========================================================================

//=== Public Modules ======================================================

pub mod buzz;
pub mod hooks;
pub mod session;
pub mod signal;
pub mod view;

//=== Internal Modules ====================================================

pub(crate) mod driver;

//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use wordrush::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Runtime facade
pub use crate::game::{Game, GameBuilder};

// Session core
pub use crate::core::session::{
    Countdown, CountdownPhase, RoundSession, SessionConfig, TickOutcome,
};

// Haptic events
pub use crate::core::buzz::BuzzKind;

// Presentation views
pub use crate::core::view::{format_remaining, SessionSnapshot};

// Collaborator seams
pub use crate::core::hooks::{HapticSink, Navigator, Presenter};

// One-shot notices
pub use crate::core::signal::Notice;

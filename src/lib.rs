//=========================================================================
// Wordrush — Library Root
//
// This crate defines the public API surface of the wordrush game core.
//
// Responsibilities:
// - Expose the round runtime (`Game`) and its builder
// - Expose the synchronous session core for hosts that drive their own
//   cadence (`core::session`)
// - Keep internal wiring (the logic-thread driver) hidden from users
//
// Typical usage:
// ```no_run
// use wordrush::Game;
//
// fn main() {
//     let mut game = Game::builder().start();
//     game.mark_correct();
//     game.teardown();
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` contains the session state machine and its parts (deck,
// countdown, notices, views, collaborator seams). It is exposed for
// hosts that embed the synchronous `RoundSession` directly instead of
// running the threaded facade.
//
// `words` is the canonical word set.
//
pub mod core;
pub mod words;

//--- Internal Modules ----------------------------------------------------
//
// `game` defines the builder and runtime handle; its types are
// re-exported below, so the module itself stays private.
//
mod game;
pub mod prelude;

//--- Public Exports ------------------------------------------------------
//
// Re-exports the runtime entry points so users can simply
// `use wordrush::Game;` without knowing the module structure.
//
pub use game::{Game, GameBuilder};

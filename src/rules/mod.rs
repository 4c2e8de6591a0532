//! Turn rules: requirement matching, resolution and outcomes.
//!
//! `GameSession::resolve_turn` is the single entry point the surrounding
//! UI calls. It runs a full resolution cycle and reports what changed in
//! a `TurnOutcome`.

pub mod matching;
pub mod outcome;
mod turn;

pub use matching::{requirement_met, unmet};
pub use outcome::{GameResult, SessionStatus, TurnOutcome};

//! Game Logic Module
//!
//! All match simulation code. 100% deterministic: integer positions,
//! integer oxygen accounting, fixed step order, fixed BFS enumeration
//! order, and a caller-supplied clock.
//!
//! ## Module Structure
//!
//! - `board`: wall topology, objectives, board loading
//! - `token`: movable pieces and movement legality
//! - `player`: axis-restricted control over the shared roster
//! - `pursuer`: the hunting enemy and its breadth-first pursuit
//! - `input`: per-tick player intents and intent scripts
//! - `state`: the match aggregate and its configuration
//! - `tick`: the ordered per-tick pipeline
//! - `events`: events generated by the tick
//! - `snapshot`: read-only views for rendering/telemetry
//! - `error`: contract-violation errors

pub mod board;
pub mod error;
pub mod events;
pub mod input;
pub mod player;
pub mod pursuer;
pub mod snapshot;
pub mod state;
pub mod tick;
pub mod token;

// Re-export key types
pub use board::{Board, Cell, Objective};
pub use error::EngineError;
pub use events::{GameEvent, GameEventData};
pub use input::{Command, Intent, IntentScript};
pub use player::{MoveAxis, Player};
pub use pursuer::{Pursuer, PursuitOutcome};
pub use snapshot::MatchSnapshot;
pub use state::{MatchConfig, MatchPhase, MatchState, OXYGEN_SCALE};
pub use tick::{run_script, tick, TickResult};
pub use token::{Token, TokenColor};

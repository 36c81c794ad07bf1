//! # Mine Escape Engine
//!
//! Deterministic game-state engine for a two-player cooperative grid-maze
//! escape game: axis-restricted players steer a shared roster of tokens
//! through a walled grid, must stand on every pressure plate at once to
//! unlock the exit, manage a depleting oxygen supply, and evade a pursuing
//! enemy that hunts the nearest token by breadth-first search.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     MINE ESCAPE ENGINE                       │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Deterministic grid primitives             │
//! │  ├── direction.rs- Cardinal directions and offsets           │
//! │  └── grid.rs     - Integer cell coordinates                  │
//! │                                                              │
//! │  game/           - Game logic (deterministic)                │
//! │  ├── board.rs    - Wall topology, objectives, board files    │
//! │  ├── token.rs    - Movement legality                         │
//! │  ├── player.rs   - Axis-restricted control, token rotation   │
//! │  ├── pursuer.rs  - Cooldown-gated BFS pursuit                │
//! │  ├── input.rs    - Per-tick intents and scripts              │
//! │  ├── state.rs    - Match aggregate and configuration         │
//! │  ├── tick.rs     - Ordered per-tick pipeline                 │
//! │  ├── events.rs   - Tick events                               │
//! │  └── snapshot.rs - Read-only render/telemetry views          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Determinism Guarantee
//!
//! Given the same board, setup, intent stream, and clock values, the engine
//! produces identical results on any platform:
//! - integer-only positions and oxygen accounting, no floating point in
//!   game logic
//! - fixed tick step order, applied as an atomic unit
//! - fixed BFS neighbor-enumeration order for pursuit tie-breaking
//! - the only clock is the caller-supplied millisecond timestamp feeding
//!   the pursuer's cooldown
//!
//! Rendering, audio, raw input polling, and the per-frame event loop are
//! external collaborators: they feed intents in and read snapshots out.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod core;
pub mod game;

// Re-export commonly used types
pub use crate::core::direction::Direction;
pub use crate::core::grid::GridPos;
pub use game::board::{Board, Cell, Objective};
pub use game::error::EngineError;
pub use game::events::{GameEvent, GameEventData};
pub use game::input::{Command, Intent, IntentScript};
pub use game::player::{MoveAxis, Player};
pub use game::pursuer::{Pursuer, PursuitOutcome};
pub use game::snapshot::MatchSnapshot;
pub use game::state::{MatchConfig, MatchPhase, MatchState, OXYGEN_SCALE};
pub use game::tick::{run_script, tick, TickResult};
pub use game::token::{Token, TokenColor};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Reference pursuit cooldown in milliseconds.
pub const DEFAULT_PURSUIT_COOLDOWN_MS: u64 = 100;

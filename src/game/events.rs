//! Game Events
//!
//! Events generated during the tick for the rendering layer, logs, and
//! tests. The core never calls outward; events are pulled from the tick
//! result by whoever drives the match.

use serde::{Serialize, Deserialize};

use crate::core::grid::GridPos;
use crate::game::state::MatchPhase;
use crate::game::token::TokenColor;

/// Event payloads, in the order the tick can produce them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameEventData {
    /// A token stepped onto an oxygen tank and consumed it.
    TankConsumed {
        /// Cell the tank occupied.
        position: GridPos,
        /// Oxygen level after the refill, in centi-units.
        oxygen_after: i32,
    },

    /// Every live token stood on a pressure plate at once.
    ExitUnlocked,

    /// The pursuer switched on for the first time.
    PursuerActivated {
        /// Spawn cell it will hunt from.
        position: GridPos,
    },

    /// The pursuer advanced one cell along its shortest path.
    PursuerMoved {
        /// Cell before the step.
        from: GridPos,
        /// Cell after the step.
        to: GridPos,
    },

    /// A token left the board through an unlocked exit.
    TokenEscaped {
        /// The exit cell it left from.
        position: GridPos,
        /// Display color of the escaped token.
        color: TokenColor,
        /// Tokens still on the board afterwards.
        remaining: usize,
    },

    /// The match reached a terminal state.
    MatchEnded {
        /// `Won` or `Lost`.
        phase: MatchPhase,
    },
}

/// A game event stamped with the tick that produced it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameEvent {
    /// Tick when the event occurred.
    pub tick: u64,
    /// Event payload.
    pub data: GameEventData,
}

impl GameEvent {
    /// Create an event.
    pub fn new(tick: u64, data: GameEventData) -> Self {
        Self { tick, data }
    }

    /// Tank-consumed event.
    pub fn tank_consumed(tick: u64, position: GridPos, oxygen_after: i32) -> Self {
        Self::new(tick, GameEventData::TankConsumed { position, oxygen_after })
    }

    /// Exit-unlocked event.
    pub fn exit_unlocked(tick: u64) -> Self {
        Self::new(tick, GameEventData::ExitUnlocked)
    }

    /// Pursuer-activated event.
    pub fn pursuer_activated(tick: u64, position: GridPos) -> Self {
        Self::new(tick, GameEventData::PursuerActivated { position })
    }

    /// Pursuer-moved event.
    pub fn pursuer_moved(tick: u64, from: GridPos, to: GridPos) -> Self {
        Self::new(tick, GameEventData::PursuerMoved { from, to })
    }

    /// Token-escaped event.
    pub fn token_escaped(tick: u64, position: GridPos, color: TokenColor, remaining: usize) -> Self {
        Self::new(
            tick,
            GameEventData::TokenEscaped { position, color, remaining },
        )
    }

    /// Match-ended event.
    pub fn match_ended(tick: u64, phase: MatchPhase) -> Self {
        Self::new(tick, GameEventData::MatchEnded { phase })
    }
}

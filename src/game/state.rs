//! Match State
//!
//! The aggregate owning one board, the shared token roster, the players,
//! the pursuer, and the objective/resource variables. Created once per game
//! session and driven to a terminal state by the tick; there is no
//! mid-match reset.
//!
//! ## Oxygen representation
//!
//! Oxygen is tracked in integer centi-units (100 centi-units = 1.0 point,
//! full tank = 10000) so depletion is exactly reproducible on any platform;
//! accumulated floating-point drift would otherwise shift the losing tick.
//! Snapshots expose the conventional 0..100 float view.

use serde::{Serialize, Deserialize};

use crate::core::grid::GridPos;
use crate::game::board::Board;
use crate::game::error::EngineError;
use crate::game::events::GameEvent;
use crate::game::player::Player;
use crate::game::pursuer::Pursuer;
use crate::game::token::Token;

/// Centi-units per oxygen point.
pub const OXYGEN_SCALE: i32 = 100;

// =============================================================================
// PHASE & CONFIG
// =============================================================================

/// Lifecycle phase of a match. `Won` and `Lost` are terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MatchPhase {
    /// The match is running.
    #[default]
    Active,
    /// Every token escaped through the exit.
    Won,
    /// Oxygen ran out or the pursuer caught a token.
    Lost,
}

/// Tunable match parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Oxygen cap in centi-units (10000 = 100.0 points).
    pub oxygen_max: i32,
    /// Oxygen lost per tick, in centi-units.
    pub oxygen_decay: i32,
    /// Oxygen restored by one tank, in centi-units.
    pub tank_refill: i32,
    /// Minimum milliseconds between pursuit steps.
    pub pursuer_cooldown_ms: u64,
    /// Activate the pursuer from the first tick instead of gating it on the
    /// exit unlock. Product variant, off by default.
    pub pursuer_from_start: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            oxygen_max: 100 * OXYGEN_SCALE,
            oxygen_decay: 10,        // 0.1 points per tick
            tank_refill: 25 * OXYGEN_SCALE,
            pursuer_cooldown_ms: 100,
            pursuer_from_start: false,
        }
    }
}

// =============================================================================
// MATCH STATE
// =============================================================================

/// Complete state of one match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchState {
    /// The walled grid being played on.
    pub board: Board,
    /// Shared ordered token roster; shrinks as tokens escape.
    pub tokens: Vec<Token>,
    /// Control authorities over the roster.
    pub players: Vec<Player>,
    /// The hunting enemy.
    pub pursuer: Pursuer,
    /// Remaining oxygen in centi-units, `0..=oxygen_max` while active.
    pub oxygen: i32,
    /// Monotonic: once true, stays true even if tokens leave the plates.
    pub exit_unlocked: bool,
    /// Current lifecycle phase.
    pub phase: MatchPhase,
    /// Ticks processed so far.
    pub tick: u64,
    /// Events generated this tick, drained by the tick result.
    #[serde(skip)]
    pub pending_events: Vec<GameEvent>,
}

impl MatchState {
    /// Assemble a match and validate the pieces against each other.
    pub fn new(
        board: Board,
        tokens: Vec<Token>,
        players: Vec<Player>,
        pursuer_spawn: GridPos,
        config: &MatchConfig,
    ) -> Result<Self, EngineError> {
        if tokens.is_empty() {
            return Err(EngineError::InvalidSetup {
                reason: "a match needs at least one token".into(),
            });
        }
        if players.is_empty() {
            return Err(EngineError::InvalidSetup {
                reason: "a match needs at least one player".into(),
            });
        }
        for token in &tokens {
            if !board.in_bounds(token.position) {
                return Err(EngineError::InvalidSetup {
                    reason: format!("token spawn {} is off the board", token.position),
                });
            }
        }
        for i in 0..tokens.len() {
            for j in (i + 1)..tokens.len() {
                if tokens[i].position == tokens[j].position {
                    return Err(EngineError::InvalidSetup {
                        reason: format!("two tokens spawn on {}", tokens[i].position),
                    });
                }
            }
        }
        for (i, player) in players.iter().enumerate() {
            if player.index != i {
                return Err(EngineError::InvalidSetup {
                    reason: format!("player at slot {i} carries index {}", player.index),
                });
            }
            if player.active_token >= tokens.len() {
                return Err(EngineError::InvalidSetup {
                    reason: format!(
                        "player {i} starts on roster index {} beyond {} tokens",
                        player.active_token,
                        tokens.len()
                    ),
                });
            }
        }
        if !board.in_bounds(pursuer_spawn) {
            return Err(EngineError::InvalidSetup {
                reason: format!("pursuer spawn {pursuer_spawn} is off the board"),
            });
        }

        Ok(Self {
            board,
            tokens,
            players,
            pursuer: Pursuer::new(pursuer_spawn),
            oxygen: config.oxygen_max,
            exit_unlocked: false,
            phase: MatchPhase::Active,
            tick: 0,
            pending_events: Vec::new(),
        })
    }

    /// Oxygen as the conventional 0..100 float reading.
    pub fn oxygen_level(&self) -> f32 {
        self.oxygen as f32 / OXYGEN_SCALE as f32
    }

    /// True iff the match reached a terminal phase.
    pub fn is_ended(&self) -> bool {
        self.phase != MatchPhase::Active
    }

    /// Tokens still on the board.
    pub fn live_token_count(&self) -> usize {
        self.tokens.len()
    }

    /// Queue an event for this tick's result.
    pub fn push_event(&mut self, event: GameEvent) {
        self.pending_events.push(event);
    }

    /// Drain the events queued this tick.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.pending_events)
    }
}

// =============================================================================
// TESTS
// =============================================================================

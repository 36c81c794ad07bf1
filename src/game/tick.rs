//! Match Tick
//!
//! The ordered per-tick pipeline that advances a match. One call applies
//! queued player intents, resolves objectives and resources, runs the
//! pursuer, and evaluates terminal conditions — in a fixed step order that
//! must be preserved as an atomic unit:
//!
//! 1. apply queued move/rotate intents
//! 2. consume oxygen tanks under tokens
//! 3. check simultaneous pressure-plate occupation; unlock the exit and
//!    engage the pursuer
//! 4. run the engaged pursuer and check for a catch
//! 5. let tokens leave through an unlocked exit
//! 6. decay oxygen; suffocation loses the match
//! 7. an empty roster wins the match
//!
//! Intents are validated before any mutation, so a failed tick leaves the
//! state untouched. The caller supplies the millisecond clock; it feeds
//! only the pursuer's cooldown, every other step is timestep-independent.

use tracing::{debug, trace};

use crate::game::board::Objective;
use crate::game::error::EngineError;
use crate::game::events::GameEvent;
use crate::game::input::{Command, Intent, IntentScript};
use crate::game::pursuer::PursuitOutcome;
use crate::game::state::{MatchConfig, MatchPhase, MatchState};

/// Result of one tick.
#[derive(Clone, Debug, Default)]
pub struct TickResult {
    /// Events generated this tick, in emission order.
    pub events: Vec<GameEvent>,
    /// Whether the match is in a terminal phase after this tick.
    pub match_ended: bool,
    /// Phase after this tick.
    pub phase: MatchPhase,
}

/// Run one simulation tick.
///
/// `now_ms` is the caller's monotonic millisecond clock. Intents referencing
/// unknown players fail the whole tick with `InvalidPlayer` before anything
/// mutates.
pub fn tick(
    state: &mut MatchState,
    intents: &[Intent],
    now_ms: u64,
    config: &MatchConfig,
) -> Result<TickResult, EngineError> {
    if state.phase != MatchPhase::Active {
        return Ok(TickResult {
            events: Vec::new(),
            match_ended: true,
            phase: state.phase,
        });
    }

    // Validate before mutating anything.
    for intent in intents {
        if intent.player >= state.players.len() {
            return Err(EngineError::InvalidPlayer { index: intent.player });
        }
    }

    state.tick += 1;
    let tick_no = state.tick;

    // 1. Apply queued player intents in arrival order.
    for intent in intents {
        match intent.command {
            Command::RotateActive => {
                let roster_len = state.tokens.len();
                state.players[intent.player].rotate_active(roster_len);
                trace!(player = intent.player, "rotated active token");
            }
            command => {
                if let Some(direction) = command.direction() {
                    let moved = state.players[intent.player].move_active(
                        direction,
                        &state.board,
                        &mut state.tokens,
                    );
                    trace!(player = intent.player, ?direction, moved, "move intent");
                }
            }
        }
    }

    // 2. Consume oxygen tanks under tokens.
    for i in 0..state.tokens.len() {
        let position = state.tokens[i].position;
        if state.board.objective_at(position) == Some(Objective::OxygenTank) {
            state.oxygen = (state.oxygen + config.tank_refill).min(config.oxygen_max);
            state.board.set_objective(position, Objective::Empty);
            debug!(%position, oxygen = state.oxygen, "oxygen tank consumed");
            state.push_event(GameEvent::tank_consumed(tick_no, position, state.oxygen));
        }
    }

    // 3. Simultaneous plate occupation unlocks the exit and engages the
    // pursuer. The unlock is monotonic; the interact call repeats on every
    // later all-on-plates tick exactly like the original behavior.
    let all_on_plates = !state.tokens.is_empty()
        && state.tokens.iter().all(|token| {
            state.board.objective_at(token.position) == Some(Objective::PressurePlate)
        });
    if all_on_plates {
        if !state.exit_unlocked {
            state.exit_unlocked = true;
            debug!(tick = tick_no, "exit unlocked");
            state.push_event(GameEvent::exit_unlocked(tick_no));
        }
        let outcome =
            state
                .pursuer
                .interact(&state.board, &state.tokens, now_ms, config.pursuer_cooldown_ms);
        record_pursuit(state, tick_no, outcome);
    }

    // 4. Once engaged, the pursuer acts every tick; a catch loses the match
    // immediately.
    if state.pursuer.enabled || config.pursuer_from_start {
        let outcome =
            state
                .pursuer
                .interact(&state.board, &state.tokens, now_ms, config.pursuer_cooldown_ms);
        record_pursuit(state, tick_no, outcome);

        let caught = state
            .tokens
            .iter()
            .any(|token| token.position == state.pursuer.position);
        if caught {
            debug!(position = %state.pursuer.position, "pursuer caught a token");
            return Ok(end_match(state, MatchPhase::Lost, tick_no));
        }
    }

    // 5. Tokens standing on an unlocked exit escape the board.
    if state.exit_unlocked {
        let mut index = 0;
        while index < state.tokens.len() {
            let position = state.tokens[index].position;
            if state.board.objective_at(position) == Some(Objective::Exit) {
                let token = state.tokens.remove(index);
                let new_len = state.tokens.len();
                for player in &mut state.players {
                    player.roster_shrunk(index, new_len);
                }
                debug!(%position, remaining = new_len, "token escaped");
                state.push_event(GameEvent::token_escaped(
                    tick_no, position, token.color, new_len,
                ));
            } else {
                index += 1;
            }
        }
    }

    // 6. Oxygen decay; suffocation ends the match.
    state.oxygen -= config.oxygen_decay;
    if state.oxygen < 0 {
        debug!(tick = tick_no, "oxygen depleted");
        return Ok(end_match(state, MatchPhase::Lost, tick_no));
    }

    // 7. Everyone out: the crew escaped.
    if state.tokens.is_empty() {
        return Ok(end_match(state, MatchPhase::Won, tick_no));
    }

    Ok(TickResult {
        events: state.take_events(),
        match_ended: false,
        phase: MatchPhase::Active,
    })
}

fn record_pursuit(state: &mut MatchState, tick_no: u64, outcome: PursuitOutcome) {
    match outcome {
        PursuitOutcome::Activated => {
            debug!(position = %state.pursuer.position, "pursuer activated");
            state.push_event(GameEvent::pursuer_activated(tick_no, state.pursuer.position));
        }
        PursuitOutcome::Moved { from, to } => {
            trace!(%from, %to, "pursuer moved");
            state.push_event(GameEvent::pursuer_moved(tick_no, from, to));
        }
        PursuitOutcome::Waiting | PursuitOutcome::Held => {}
    }
}

fn end_match(state: &mut MatchState, phase: MatchPhase, tick_no: u64) -> TickResult {
    state.phase = phase;
    state.push_event(GameEvent::match_ended(tick_no, phase));
    TickResult {
        events: state.take_events(),
        match_ended: true,
        phase,
    }
}

/// Drive a match from a pre-recorded intent script.
///
/// Ticks run at a fixed `tick_interval_ms` cadence until the match ends or
/// `max_ticks` elapse. Returns every event the run produced.
pub fn run_script(
    state: &mut MatchState,
    script: &IntentScript,
    config: &MatchConfig,
    tick_interval_ms: u64,
    max_ticks: u64,
) -> Result<Vec<GameEvent>, EngineError> {
    let mut all_events = Vec::new();
    for tick_no in 1..=max_ticks {
        let intents: Vec<Intent> = script.intents_at(tick_no).collect();
        let result = tick(state, &intents, tick_no * tick_interval_ms, config)?;
        all_events.extend(result.events);
        if result.match_ended {
            break;
        }
    }
    Ok(all_events)
}

// =============================================================================
// TESTS
// =============================================================================

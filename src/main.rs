//! Mine Escape Demo Driver
//!
//! External driver for the engine: loads a board from its JSON layout,
//! feeds a scripted intent stream through the tick at a fixed cadence, and
//! logs the events. This binary is the stand-in for the real render/event
//! loop; the engine itself never touches a window, a clock, or an input
//! device.

use anyhow::{Context, Result};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use mine_escape::{
    tick, Board, Command, GameEventData, GridPos, Intent, IntentScript, MatchConfig, MatchState,
    MoveAxis, Player, Token, TokenColor, VERSION,
};

/// Milliseconds of simulated time per tick.
const TICK_INTERVAL_MS: u64 = 100;

/// 5x5 demo layout: exit in the north-west corner, two pressure plates
/// flanking an oxygen tank on the middle row, the pursuer's spawner in the
/// south-east corner, and a few interior walls (packed wall codes, bit 0 =
/// North, 1 = East, 2 = South, 3 = West).
const DEMO_BOARD_JSON: &str = r#"{
    "width": 5,
    "height": 5,
    "cells": [
        { "walls": 0, "objective": "Exit" },
        { "walls": 0 },
        { "walls": 4 },
        { "walls": 4 },
        { "walls": 0 },
        { "walls": 0 },
        { "walls": 0 },
        { "walls": 1 },
        { "walls": 1 },
        { "walls": 0 },
        { "walls": 0 },
        { "walls": 0, "objective": "PressurePlate" },
        { "walls": 0, "objective": "OxygenTank" },
        { "walls": 0, "objective": "PressurePlate" },
        { "walls": 0 },
        { "walls": 2 },
        { "walls": 8 },
        { "walls": 0 },
        { "walls": 0 },
        { "walls": 0 },
        { "walls": 2 },
        { "walls": 8 },
        { "walls": 0 },
        { "walls": 0 },
        { "walls": 0, "objective": "EnemySpawner" }
    ]
}"#;

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    info!("Mine Escape Engine v{}", VERSION);
    demo_match()
}

/// Scripted two-player run: park both tokens on the plates, grab the tank,
/// and walk everyone out through the exit while the pursuer closes in.
fn demo_script() -> IntentScript {
    let mut script = IntentScript::new();
    script.push(1, Intent::new(0, Command::MoveSouth));
    script.push(2, Intent::new(0, Command::RotateActive));
    script.push(3, Intent::new(0, Command::MoveNorth));
    script.push(4, Intent::new(1, Command::MoveWest));
    script.push(5, Intent::new(0, Command::MoveNorth));
    script.push(6, Intent::new(1, Command::MoveWest));
    script.push(7, Intent::new(0, Command::MoveNorth));
    script.push(8, Intent::new(1, Command::MoveWest));
    script.push(9, Intent::new(0, Command::MoveNorth));
    script.push(10, Intent::new(0, Command::MoveNorth));
    script.push(11, Intent::new(1, Command::MoveWest));
    script
}

fn demo_match() -> Result<()> {
    info!("=== Starting Demo Match ===");

    let board = Board::from_json_str(DEMO_BOARD_JSON).context("demo board layout is invalid")?;
    let pursuer_spawn = board
        .enemy_spawn()
        .context("demo board carries no enemy spawner")?;

    let tokens = vec![
        Token::new(GridPos::new(1, 1), TokenColor::Blue),
        Token::new(GridPos::new(3, 3), TokenColor::Red),
    ];
    let players = vec![
        Player::new(0, MoveAxis::Vertical, 0),
        Player::new(1, MoveAxis::Horizontal, 1),
    ];

    // A slower pursuer than the reference 100 ms keeps the scripted escape
    // route winnable.
    let config = MatchConfig {
        pursuer_cooldown_ms: 300,
        ..MatchConfig::default()
    };
    let mut state = MatchState::new(board, tokens, players, pursuer_spawn, &config)?;
    let script = demo_script();

    info!(
        "Board {}x{}, {} tokens, pursuer at {}",
        state.board.width(),
        state.board.height(),
        state.tokens.len(),
        pursuer_spawn
    );

    for tick_no in 1..=256u64 {
        let intents: Vec<Intent> = script.intents_at(tick_no).collect();
        let result = tick(&mut state, &intents, tick_no * TICK_INTERVAL_MS, &config)?;

        for event in &result.events {
            match &event.data {
                GameEventData::TankConsumed { position, oxygen_after } => {
                    info!("Oxygen tank at {} consumed ({})", position, oxygen_after);
                }
                GameEventData::ExitUnlocked => info!("Exit unlocked at tick {}", event.tick),
                GameEventData::PursuerActivated { position } => {
                    info!("Pursuer activated at {}", position);
                }
                GameEventData::PursuerMoved { from, to } => {
                    info!("Pursuer moved {} -> {}", from, to);
                }
                GameEventData::TokenEscaped { position, color, remaining } => {
                    info!("{:?} token escaped via {} ({} remaining)", color, position, remaining);
                }
                GameEventData::MatchEnded { phase } => {
                    info!("Match ended at tick {}: {:?}", event.tick, phase);
                }
            }
        }

        if result.match_ended {
            break;
        }
    }

    let snapshot = state.snapshot();
    info!(
        "Final: phase {:?}, oxygen {:.1}, {} tokens left",
        snapshot.phase,
        snapshot.oxygen,
        snapshot.tokens.len()
    );
    let json = serde_json::to_string_pretty(&snapshot)?;
    info!("Snapshot:\n{json}");

    Ok(())
}

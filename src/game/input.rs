//! Player Intents
//!
//! The per-tick command surface of the engine. An external driver (event
//! loop, test script, replay) queues zero or more `(player, command)` pairs
//! per tick; the tick validates and applies them in order.

use serde::{Serialize, Deserialize};

use crate::core::direction::Direction;

/// A single player command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum Command {
    /// Move the active token north.
    MoveNorth = 0,
    /// Move the active token east.
    MoveEast = 1,
    /// Move the active token south.
    MoveSouth = 2,
    /// Move the active token west.
    MoveWest = 3,
    /// Advance the player's active-token cursor.
    RotateActive = 4,
}

impl Command {
    /// The movement direction this command requests, if it is a move.
    pub fn direction(self) -> Option<Direction> {
        match self {
            Command::MoveNorth => Some(Direction::North),
            Command::MoveEast => Some(Direction::East),
            Command::MoveSouth => Some(Direction::South),
            Command::MoveWest => Some(Direction::West),
            Command::RotateActive => None,
        }
    }
}

/// A command addressed to a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    /// Target player index; unknown indices fail the tick with
    /// `InvalidPlayer`.
    pub player: usize,
    /// The requested command.
    pub command: Command,
}

impl Intent {
    /// Create an intent.
    pub const fn new(player: usize, command: Command) -> Self {
        Self { player, command }
    }
}

/// A pre-recorded intent timeline for replays, demos, and tests.
///
/// Entries are kept sorted by tick; lookup is a binary search over the
/// recording, so scripts stay cheap even when long.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct IntentScript {
    entries: Vec<ScriptEntry>,
}

/// One scheduled intent in a script.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ScriptEntry {
    /// Tick on which to apply the intent.
    pub tick: u64,
    /// The intent itself.
    pub intent: Intent,
}

impl IntentScript {
    /// An empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an intent at `tick`. Scripts are authored in tick order.
    pub fn push(&mut self, tick: u64, intent: Intent) {
        if let Some(last) = self.entries.last() {
            assert!(last.tick <= tick, "script entries must be pushed in tick order");
        }
        self.entries.push(ScriptEntry { tick, intent });
    }

    /// All intents scheduled for `tick`, in authoring order.
    pub fn intents_at(&self, tick: u64) -> impl Iterator<Item = Intent> + '_ {
        let start = self.entries.partition_point(|entry| entry.tick < tick);
        self.entries[start..]
            .iter()
            .take_while(move |entry| entry.tick == tick)
            .map(|entry| entry.intent)
    }

    /// Number of scheduled intents.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True iff the script holds no intents.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Last scheduled tick, if any.
    pub fn end_tick(&self) -> Option<u64> {
        self.entries.last().map(|entry| entry.tick)
    }
}

//! Board Topology and Objectives
//!
//! The static walled grid the match is played on. Wall topology is immutable
//! after load; only cell objectives mutate (a consumed oxygen tank becomes an
//! empty cell). The board enforces no objective-transition rules itself —
//! that policy lives in the tick.
//!
//! ## Wall encoding
//!
//! Each cell carries four wall booleans indexed by [`Direction`]. For compact
//! authoring, boards may also supply a packed wall code per cell with the
//! canonical bit order `bit N = wall toward Direction N` (bit 0 = North,
//! bit 1 = East, bit 2 = South, bit 3 = West). The code round-trips exactly
//! through [`Cell::from_wall_code`] / [`Cell::wall_code`] for all 16 values.
//!
//! ## Symmetry invariant
//!
//! Wall booleans must agree with the neighboring cell's opposite-direction
//! wall (cell A has no East wall iff its East neighbor has no West wall).
//! Loading validates this and rejects asymmetric data; the engine never
//! auto-symmetrizes authored boards.

use std::path::Path;

use serde::{Serialize, Deserialize};

use crate::core::direction::Direction;
use crate::core::grid::GridPos;
use crate::game::error::EngineError;

// =============================================================================
// OBJECTIVES
// =============================================================================

/// Marker placed on a cell that the objective state machine reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Objective {
    /// Nothing here.
    #[default]
    Empty = 0,
    /// Escape hatch; passable exit once the match unlocks it.
    Exit = 1,
    /// Must be occupied by every live token at once to unlock the exit.
    PressurePlate = 2,
    /// One-shot oxygen refill; consumed on contact.
    OxygenTank = 3,
    /// Where the pursuer starts. Purely informational to the board.
    EnemySpawner = 4,
}

// =============================================================================
// CELLS
// =============================================================================

/// One grid square: four wall flags plus an optional objective marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Wall flags indexed by `Direction::index()`; `true` blocks movement
    /// out of the cell in that direction.
    pub walls: [bool; 4],
    /// Objective marker on this cell.
    pub objective: Objective,
}

impl Cell {
    /// A cell with no walls and no objective.
    pub const OPEN: Cell = Cell {
        walls: [false; 4],
        objective: Objective::Empty,
    };

    /// Build a cell from a packed wall code (canonical bit order, see module
    /// docs). Fails on codes outside `0..16`.
    pub fn from_wall_code(code: u8, objective: Objective) -> Result<Self, EngineError> {
        if code >= 16 {
            return Err(EngineError::BoardData {
                reason: format!("wall code {code} out of range (expected 0..16)"),
            });
        }
        let mut walls = [false; 4];
        for direction in Direction::ALL {
            walls[direction.index()] = code & (1 << direction.index()) != 0;
        }
        Ok(Self { walls, objective })
    }

    /// Pack the wall flags back into the canonical wall code.
    pub fn wall_code(&self) -> u8 {
        let mut code = 0u8;
        for direction in Direction::ALL {
            if self.walls[direction.index()] {
                code |= 1 << direction.index();
            }
        }
        code
    }

    /// True iff a wall blocks movement out of this cell in `direction`.
    #[inline]
    pub fn has_wall(&self, direction: Direction) -> bool {
        self.walls[direction.index()]
    }

    /// True iff movement out of this cell in `direction` is not walled off.
    /// No side effects.
    #[inline]
    pub fn can_exit(&self, direction: Direction) -> bool {
        !self.has_wall(direction)
    }
}

// =============================================================================
// BOARD FILE FORMAT
// =============================================================================

/// On-disk cell record: packed wall code plus objective tag.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
struct CellRecord {
    walls: u8,
    #[serde(default)]
    objective: Objective,
}

/// On-disk board layout, row-major by `id = y * width + x`.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct BoardFile {
    width: i32,
    height: i32,
    cells: Vec<CellRecord>,
}

// =============================================================================
// BOARD
// =============================================================================

/// Fixed-size walled grid, loaded once at match start and never resized.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    width: i32,
    height: i32,
    /// Row-major cell storage; index = `y * width + x`.
    cells: Vec<Cell>,
}

impl Board {
    /// Build a board from explicit cells. Validates dimensions, cell count,
    /// and the wall-symmetry invariant.
    pub fn new(width: i32, height: i32, cells: Vec<Cell>) -> Result<Self, EngineError> {
        if width <= 0 || height <= 0 {
            return Err(EngineError::BoardData {
                reason: format!("non-positive dimensions {width}x{height}"),
            });
        }
        let expected = (width as usize) * (height as usize);
        if cells.len() != expected {
            return Err(EngineError::BoardData {
                reason: format!(
                    "cell count {} does not match {width}x{height} = {expected}",
                    cells.len()
                ),
            });
        }
        let board = Self { width, height, cells };
        board.validate_symmetry()?;
        Ok(board)
    }

    /// An all-open board with no interior walls and no objectives.
    ///
    /// Mostly useful as a starting point for authored layouts and tests;
    /// walls are added afterwards with [`Board::place_wall`].
    pub fn open(width: i32, height: i32) -> Result<Self, EngineError> {
        if width <= 0 || height <= 0 {
            return Err(EngineError::BoardData {
                reason: format!("non-positive dimensions {width}x{height}"),
            });
        }
        let cells = vec![Cell::OPEN; (width as usize) * (height as usize)];
        Ok(Self { width, height, cells })
    }

    /// Parse a board from its JSON file representation.
    pub fn from_json_str(json: &str) -> Result<Self, EngineError> {
        let file: BoardFile = serde_json::from_str(json).map_err(|e| EngineError::BoardData {
            reason: format!("malformed board JSON: {e}"),
        })?;
        let cells = file
            .cells
            .iter()
            .map(|record| Cell::from_wall_code(record.walls, record.objective))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(file.width, file.height, cells)
    }

    /// Load a board from a JSON file on disk.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, EngineError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Board width in cells.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Board height in cells.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// True iff the position lies inside `[0,width) x [0,height)`.
    #[inline]
    pub fn in_bounds(&self, pos: GridPos) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    /// The cartesian-to-id bijection: `id = y * width + x`.
    ///
    /// Only valid for in-bounds positions.
    #[inline]
    pub fn cell_id(&self, pos: GridPos) -> i32 {
        pos.y * self.width + pos.x
    }

    /// The cell at `(x, y)`, or `OutOfBounds`.
    pub fn cell_at(&self, x: i32, y: i32) -> Result<&Cell, EngineError> {
        self.cell(GridPos::new(x, y))
    }

    /// The cell at `pos`, or `OutOfBounds`.
    pub fn cell(&self, pos: GridPos) -> Result<&Cell, EngineError> {
        if !self.in_bounds(pos) {
            return Err(EngineError::OutOfBounds {
                x: pos.x,
                y: pos.y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(&self.cells[self.cell_id(pos) as usize])
    }

    /// Objective on the cell at `pos`, or `None` when out of bounds.
    pub fn objective_at(&self, pos: GridPos) -> Option<Objective> {
        self.cell(pos).ok().map(|cell| cell.objective)
    }

    /// Overwrite the objective on an in-bounds cell.
    ///
    /// Only the tick mutates objectives; the board applies the assignment
    /// without enforcing any transition rules.
    pub(crate) fn set_objective(&mut self, pos: GridPos, objective: Objective) {
        debug_assert!(self.in_bounds(pos), "objective write off the board at {pos}");
        if self.in_bounds(pos) {
            let id = self.cell_id(pos) as usize;
            self.cells[id].objective = objective;
        }
    }

    /// True iff movement out of `pos` toward `direction` is not blocked by a
    /// wall on `pos` itself. Out-of-bounds positions cannot be exited.
    pub fn can_exit(&self, pos: GridPos, direction: Direction) -> bool {
        match self.cell(pos) {
            Ok(cell) => cell.can_exit(direction),
            Err(_) => false,
        }
    }

    /// True iff a pursuit edge exists between `pos` and its neighbor toward
    /// `direction`: both cells in bounds and no wall on either side of the
    /// shared boundary.
    ///
    /// Checking both sides keeps the search honest even though loaders
    /// reject asymmetric wall data.
    pub fn passage_open(&self, pos: GridPos, direction: Direction) -> bool {
        let neighbor = pos.step(direction);
        if !self.in_bounds(neighbor) {
            return false;
        }
        self.can_exit(pos, direction)
            && match self.cell(neighbor) {
                Ok(cell) => cell.can_exit(direction.opposite()),
                Err(_) => false,
            }
    }

    /// Author a wall on the boundary between `pos` and its neighbor toward
    /// `direction`, setting both sides so the symmetry invariant holds. On
    /// the board rim only the inner side exists and only it is set.
    pub fn place_wall(&mut self, pos: GridPos, direction: Direction) -> Result<(), EngineError> {
        if !self.in_bounds(pos) {
            return Err(EngineError::OutOfBounds {
                x: pos.x,
                y: pos.y,
                width: self.width,
                height: self.height,
            });
        }
        let id = self.cell_id(pos) as usize;
        self.cells[id].walls[direction.index()] = true;

        let neighbor = pos.step(direction);
        if self.in_bounds(neighbor) {
            let neighbor_id = self.cell_id(neighbor) as usize;
            self.cells[neighbor_id].walls[direction.opposite().index()] = true;
        }
        Ok(())
    }

    /// Position of the first `EnemySpawner` cell in id order, if any.
    pub fn enemy_spawn(&self) -> Option<GridPos> {
        self.positions()
            .find(|&pos| self.objective_at(pos) == Some(Objective::EnemySpawner))
    }

    /// Iterate all in-bounds positions in id order.
    pub fn positions(&self) -> impl Iterator<Item = GridPos> + '_ {
        let width = self.width;
        (0..self.cells.len() as i32).map(move |id| GridPos::new(id % width, id / width))
    }

    /// Check the wall-symmetry invariant over every interior boundary.
    fn validate_symmetry(&self) -> Result<(), EngineError> {
        for pos in self.positions() {
            // East/South cover every interior boundary exactly once.
            for direction in [Direction::East, Direction::South] {
                let neighbor = pos.step(direction);
                if !self.in_bounds(neighbor) {
                    continue;
                }
                let here = self.cells[self.cell_id(pos) as usize].has_wall(direction);
                let there =
                    self.cells[self.cell_id(neighbor) as usize].has_wall(direction.opposite());
                if here != there {
                    return Err(EngineError::BoardData {
                        reason: format!(
                            "asymmetric wall between {pos} and {neighbor} ({direction:?})"
                        ),
                    });
                }
            }
        }
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================

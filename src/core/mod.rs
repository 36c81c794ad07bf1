//! Deterministic Grid Primitives
//!
//! Shared building blocks for the game logic:
//! - `direction`: four-way movement directions and offsets
//! - `grid`: integer cell coordinates
//!
//! Everything here is integer-only and branch-deterministic; given the same
//! inputs the engine produces the same results on any platform.

pub mod direction;
pub mod grid;

pub use direction::Direction;
pub use grid::GridPos;

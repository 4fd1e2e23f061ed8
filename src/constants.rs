//! Constants for board dimensions and the player roster.
//!
//! # Board Size Configuration
//!
//! The board size is controlled by Cargo features:
//! - `board9x9` (default): 9x9 board
//! - `board13x13`: 13x13 board
//!
//! To compile for a specific board size:
//! ```sh
//! cargo build                           # 9x9 (default)
//! cargo build --no-default-features --features board13x13  # 13x13
//! ```

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size (NxN).
#[cfg(feature = "board9x9")]
pub const N: usize = 9;

#[cfg(feature = "board13x13")]
pub const N: usize = 13;

// Compile-time check: exactly one board size feature must be enabled
#[cfg(all(feature = "board9x9", feature = "board13x13"))]
compile_error!("Cannot enable both 'board9x9' and 'board13x13' features at the same time");

#[cfg(not(any(feature = "board9x9", feature = "board13x13")))]
compile_error!("Must enable exactly one board size feature: 'board9x9' or 'board13x13'");

/// Number of turns in one session on a board of the given size.
/// Every point can be played once before the game ends.
pub const fn max_turns(size: usize) -> usize {
    size * size
}

// =============================================================================
// Players
// =============================================================================

/// Stone tags for the three players, in roster order (before shuffling).
pub const PLAYER_TAGS: [char; 3] = ['X', 'O', 'Y'];

/// Glyph used to draw an empty point.
pub const EMPTY_CHAR: char = '.';

// =============================================================================
// Neighbor Offsets
// =============================================================================

/// Row/column offsets to the orthogonal neighbors.
/// Order: North, South, West, East
pub const DELTA: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

//! Trigo: a three-player capture game on a small Go board.
//!
//! Three players take turns placing stones. After every placement, any
//! group of another player's stones left with no liberties is removed and
//! the placing player scores one point per group.
//!
//! ## Modules
//!
//! - [`constants`] - Board dimensions and the player roster
//! - [`board`] - Grid storage with checked accessors
//! - [`capture`] - Group liberties and capture resolution
//! - [`session`] - Turn rotation, scoring and the console loop
//!
//! ## Example
//!
//! ```
//! use trigo::board::{Board, Player};
//! use trigo::capture::resolve;
//!
//! let (x, o) = (Player('X'), Player('O'));
//! let mut board = Board::new(9);
//! board.place(0, 0, o).unwrap();
//! board.place(0, 1, x).unwrap();
//! board.place(1, 0, x).unwrap();
//!
//! let outcome = resolve(&mut board, 1, 0, x);
//! assert!(outcome.captured);
//! assert!(board.is_empty(0, 0));
//! ```

pub mod board;
pub mod capture;
pub mod constants;
pub mod session;

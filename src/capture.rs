//! Group liberties and capture resolution.
//!
//! After a stone is placed, [`resolve`] scans the whole board for groups that
//! do not belong to the placing player and have no liberties left, and
//! removes them. The placing player's own groups are never checked, so a
//! move that fills its own last liberty stays on the board.
//!
//! Groups are explored with an explicit stack and a visited buffer sized to
//! the board, so group size is bounded only by the board.

use std::collections::BTreeMap;

use crate::board::{Board, Cell, Player, Point};

/// Result of resolving captures after one placement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaptureOutcome {
    /// True if at least one group was removed.
    pub captured: bool,
    /// Number of groups each player lost during this resolution.
    pub captured_groups_by_player: BTreeMap<Player, u32>,
    /// Total stones removed, across all groups.
    pub stones_removed: usize,
}

impl CaptureOutcome {
    /// Number of distinct groups removed.
    pub fn groups(&self) -> u32 {
        self.captured_groups_by_player.values().sum()
    }
}

/// Flat index into a visited buffer.
#[inline]
fn slot(board: &Board, (row, col): Point) -> usize {
    row * board.size() + col
}

/// Walk the group containing `start`, calling `on_empty` for every distinct
/// empty neighbor and returning the group's stones.
fn walk_group(board: &Board, start: Point, mut on_empty: impl FnMut(Point)) -> Vec<Point> {
    let Some(owner) = board.get(start.0, start.1).ok().and_then(Cell::player) else {
        return Vec::new();
    };
    let mut visited = vec![false; board.size() * board.size()];
    let mut stack = vec![start];
    let mut stones = Vec::new();
    visited[slot(board, start)] = true;

    while let Some(pt) = stack.pop() {
        stones.push(pt);
        for n in board.neighbors(pt.0, pt.1) {
            let i = slot(board, n);
            if visited[i] {
                continue;
            }
            match board.get(n.0, n.1) {
                Ok(Cell::Empty) => {
                    visited[i] = true;
                    on_empty(n);
                }
                Ok(Cell::Stone(p)) if p == owner => {
                    visited[i] = true;
                    stack.push(n);
                }
                _ => {}
            }
        }
    }
    stones
}

/// Distinct empty points adjacent to the group containing `start`,
/// in discovery order. Empty for an empty or out-of-range start.
pub fn liberties(board: &Board, start: Point) -> Vec<Point> {
    let mut libs = Vec::new();
    walk_group(board, start, |pt| libs.push(pt));
    libs
}

/// Number of liberties of the group containing `start`.
pub fn liberty_count(board: &Board, start: Point) -> usize {
    let mut libs = 0;
    walk_group(board, start, |_| libs += 1);
    libs
}

/// Collect all stones in the group containing `start`.
///
/// Appends the stones to `out` and returns how many were found.
pub fn collect_group(board: &Board, start: Point, out: &mut Vec<Point>) -> usize {
    let stones = walk_group(board, start, |_| {});
    let count = stones.len();
    out.extend(stones);
    count
}

/// Remove every opposing group left without liberties after `player` placed
/// a stone at `(row, col)`.
///
/// The whole board is scanned in row-major order, not only the neighbors of
/// the placed stone. Each group is counted once: after a group is removed its
/// cells are empty, so the scan cannot reach it again.
pub fn resolve(board: &mut Board, row: usize, col: usize, player: Player) -> CaptureOutcome {
    let mut outcome = CaptureOutcome::default();
    let mut group = Vec::new();

    for pt in board.points() {
        let owner = match board.get(pt.0, pt.1) {
            Ok(Cell::Stone(p)) if p != player => p,
            _ => continue,
        };
        if liberty_count(board, pt) > 0 {
            continue;
        }

        group.clear();
        let size = collect_group(board, pt, &mut group);
        for &stone in &group {
            board.clear_point(stone);
        }
        tracing::debug!(
            capturer = %player,
            owner = %owner,
            at = ?pt,
            stones = size,
            placed = ?(row, col),
            "group captured"
        );

        outcome.captured = true;
        outcome.stones_removed += size;
        *outcome.captured_groups_by_player.entry(owner).or_insert(0) += 1;
    }
    outcome
}

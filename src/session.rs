//! Game sessions: turn rotation, scoring and the console loop.
//!
//! A [`Session`] owns one board, the shuffled player order and the
//! scoreboard for a single game. It validates moves before they reach the
//! capture engine. [`run`] drives sessions over any line-based reader and
//! writer, asking after each game whether to start another.

use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::board::{Board, Player, Point};
use crate::capture::{self, CaptureOutcome};
use crate::constants::{PLAYER_TAGS, max_turns};

/// Reasons a turn is rejected. The player is asked again in every case.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TurnError {
    #[error("Invalid input. Please enter two integers separated by a space.")]
    InvalidInput,
    #[error("Invalid move, the spot is either occupied or out of bounds.")]
    Unavailable,
    #[error("the game is over")]
    GameOver,
}

/// Parse a line holding exactly two integers: row then column.
///
/// Negative values parse fine; they are rejected later as off-board.
pub fn parse_coordinates(line: &str) -> Result<(i64, i64), TurnError> {
    let mut tokens = line.split_whitespace();
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(r), Some(c), None) => {
            let row = r.parse().map_err(|_| TurnError::InvalidInput)?;
            let col = c.parse().map_err(|_| TurnError::InvalidInput)?;
            Ok((row, col))
        }
        _ => Err(TurnError::InvalidInput),
    }
}

/// Shuffle the turn order in place (Fisher-Yates: each slot swaps with a
/// random slot at or after it).
pub fn shuffle_players(players: &mut [Player], rng: &mut fastrand::Rng) {
    let len = players.len();
    for i in 0..len {
        let j = rng.usize(i..len);
        players.swap(i, j);
    }
}

/// Capture points per player.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scoreboard {
    points: BTreeMap<Player, u32>,
}

impl Scoreboard {
    /// Every player starts at zero.
    pub fn new(players: &[Player]) -> Self {
        Self {
            points: players.iter().map(|&p| (p, 0)).collect(),
        }
    }

    pub fn get(&self, player: Player) -> u32 {
        self.points.get(&player).copied().unwrap_or(0)
    }

    /// Credit `capturer` with one point per group removed.
    pub fn credit(&mut self, capturer: Player, outcome: &CaptureOutcome) {
        *self.points.entry(capturer).or_insert(0) += outcome.groups();
    }
}

/// What happened on an accepted turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    pub player: Player,
    pub point: Point,
    pub outcome: CaptureOutcome,
}

/// One game from an empty board to the turn limit.
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    players: Vec<Player>,
    current: usize,
    turns: usize,
    scores: Scoreboard,
}

impl Session {
    /// Start a game with the standard roster in a random order.
    pub fn new(size: usize, rng: &mut fastrand::Rng) -> Self {
        let mut players: Vec<Player> = PLAYER_TAGS.iter().map(|&t| Player(t)).collect();
        shuffle_players(&mut players, rng);
        Self::with_order(size, players)
    }

    /// Start a game with a fixed turn order.
    pub fn with_order(size: usize, players: Vec<Player>) -> Self {
        tracing::info!(size, order = ?players, "session started");
        Self {
            board: Board::new(size),
            scores: Scoreboard::new(&players),
            players,
            current: 0,
            turns: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn scores(&self) -> &Scoreboard {
        &self.scores
    }

    pub fn turns(&self) -> usize {
        self.turns
    }

    /// The player to move. `None` only for a session with no players.
    pub fn current_player(&self) -> Option<Player> {
        self.players.get(self.current).copied()
    }

    pub fn is_over(&self) -> bool {
        self.players.is_empty() || self.turns >= max_turns(self.board.size())
    }

    /// Play the current player's stone at `(row, col)`, resolve captures and
    /// pass the turn on.
    pub fn play(&mut self, row: usize, col: usize) -> Result<TurnReport, TurnError> {
        let player = match self.current_player() {
            Some(p) if !self.is_over() => p,
            _ => return Err(TurnError::GameOver),
        };
        if !self.board.is_empty(row, col) {
            return Err(TurnError::Unavailable);
        }
        self.board
            .place(row, col, player)
            .map_err(|_| TurnError::Unavailable)?;

        let outcome = capture::resolve(&mut self.board, row, col, player);
        self.scores.credit(player, &outcome);

        self.current = (self.current + 1) % self.players.len();
        self.turns += 1;
        if self.is_over() {
            let stones: Vec<(Player, usize)> = self
                .players
                .iter()
                .map(|&p| (p, self.board.stone_count(p)))
                .collect();
            tracing::info!(
                turns = self.turns,
                scores = ?self.scores,
                ?stones,
                empty = self.board.empty_count(),
                "session finished"
            );
        }
        Ok(TurnReport {
            player,
            point: (row, col),
            outcome,
        })
    }

    /// Like [`Session::play`], for coordinates as typed by a player.
    pub fn play_signed(&mut self, row: i64, col: i64) -> Result<TurnReport, TurnError> {
        match (usize::try_from(row), usize::try_from(col)) {
            (Ok(r), Ok(c)) => self.play(r, c),
            _ => Err(TurnError::Unavailable),
        }
    }

    /// Draw the board followed by the scores.
    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", self.board)?;
        writeln!(out)?;
        writeln!(out, "Scores:")?;
        for &p in &self.players {
            writeln!(out, "Player {p}: {} points", self.scores.get(p))?;
        }
        writeln!(out)
    }
}

/// Read one line. `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Play one session to the turn limit. Returns `false` if input ran out
/// before the game ended.
pub fn play_session<R: BufRead, W: Write>(
    session: &mut Session,
    input: &mut R,
    out: &mut W,
) -> io::Result<bool> {
    let last = session.board().size().saturating_sub(1);
    while let Some(player) = session.current_player().filter(|_| !session.is_over()) {
        session.render(out)?;
        writeln!(out, "Player {player}'s turn!")?;
        loop {
            write!(
                out,
                "Enter row (0-{last}) and column (0-{last}) separated by a space: "
            )?;
            out.flush()?;
            let Some(line) = read_line(input)? else {
                return Ok(false);
            };
            let result = parse_coordinates(&line).and_then(|(r, c)| session.play_signed(r, c));
            match result {
                Ok(report) => {
                    if report.outcome.captured {
                        writeln!(out, "A group was captured!")?;
                    }
                    break;
                }
                Err(e) => writeln!(out, "{e}")?,
            }
        }
    }
    session.render(out)?;
    writeln!(out, "Game Over!")?;
    Ok(true)
}

/// Run sessions until the players decline another game or input ends.
/// Returns the number of sessions that reached the turn limit.
pub fn run<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    rng: &mut fastrand::Rng,
    size: usize,
) -> io::Result<usize> {
    let mut finished = 0;
    loop {
        let mut session = Session::new(size, rng);
        if !play_session(&mut session, input, out)? {
            return Ok(finished);
        }
        finished += 1;

        writeln!(out, "Do you want to play another game? (y/n)")?;
        out.flush()?;
        match read_line(input)? {
            Some(answer) if answer.trim().eq_ignore_ascii_case("y") => continue,
            _ => return Ok(finished),
        }
    }
}

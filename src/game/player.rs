//! Player records
//!
//! A Player accumulates guess and puzzle counters across sessions. The
//! Roster keys players by username, creating a record on first login, and
//! derives the leaderboard ordering on demand.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Performance counters for one player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    username: String,
    guesses_correct: u32,
    guesses_total: u32,
    cryptograms_played: u32,
    cryptograms_solved: u32,
}

impl Player {
    /// Create a fresh record for a username
    #[must_use]
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            guesses_correct: 0,
            guesses_total: 0,
            cryptograms_played: 0,
            cryptograms_solved: 0,
        }
    }

    /// Record one guess attempt
    ///
    /// The total is monotonically non-decreasing; undoing a guess later does
    /// not subtract the attempt.
    pub fn record_guess(&mut self, correct: bool) {
        if correct {
            self.guesses_correct += 1;
        }
        self.guesses_total += 1;
    }

    /// Record that a cryptogram was generated for this player
    pub fn record_played(&mut self) {
        self.cryptograms_played += 1;
    }

    /// Record a solved cryptogram
    pub fn record_solved(&mut self) {
        self.cryptograms_solved += 1;
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub const fn guesses_correct(&self) -> u32 {
        self.guesses_correct
    }

    #[must_use]
    pub const fn guesses_total(&self) -> u32 {
        self.guesses_total
    }

    #[must_use]
    pub const fn cryptograms_played(&self) -> u32 {
        self.cryptograms_played
    }

    #[must_use]
    pub const fn cryptograms_solved(&self) -> u32 {
        self.cryptograms_solved
    }

    /// Correct guesses over total guess attempts, 0 when nothing was guessed
    #[must_use]
    pub fn guess_accuracy(&self) -> f64 {
        if self.guesses_total == 0 {
            0.0
        } else {
            f64::from(self.guesses_correct) / f64::from(self.guesses_total)
        }
    }

    /// Solved cryptograms over played cryptograms, 0 when none were played
    #[must_use]
    pub fn solve_rate(&self) -> f64 {
        if self.cryptograms_played == 0 {
            0.0
        } else {
            f64::from(self.cryptograms_solved) / f64::from(self.cryptograms_played)
        }
    }
}

/// All known players, keyed by username
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    players: FxHashMap<String, Player>,
}

impl Roster {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a player by username, creating the record on first login
    pub fn login(&mut self, username: &str) -> &mut Player {
        self.players
            .entry(username.to_string())
            .or_insert_with(|| Player::new(username))
    }

    /// Look up an existing player
    #[must_use]
    pub fn get(&self, username: &str) -> Option<&Player> {
        self.players.get(username)
    }

    /// Replace or insert a player record
    pub fn upsert(&mut self, player: Player) {
        self.players.insert(player.username().to_string(), player);
    }

    /// The top players by cryptograms solved, ties broken by username
    #[must_use]
    pub fn leaderboard(&self, limit: usize) -> Vec<&Player> {
        let mut ranked: Vec<&Player> = self.players.values().collect();
        ranked.sort_by(|a, b| {
            b.cryptograms_solved()
                .cmp(&a.cryptograms_solved())
                .then_with(|| a.username().cmp(b.username()))
        });
        ranked.truncate(limit);
        ranked
    }

    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

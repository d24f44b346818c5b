//! Static content for the rules and history views.

use serde::Serialize;

use crate::types::{Color, Stake};

pub const RULES: [&str; 5] = [
    "Select one of the three colors: Red, Blue, or Green.",
    "Choose a stake amount: 0.1 to 5 coins.",
    "Each round lasts 2 minutes. A winning color is randomly chosen.",
    "If your color wins, you earn 2x your stake!",
    "Keep track of your game and betting history.",
];

pub const RULES_TIP: &str = "Tip: Bet smart. This is a game of chance. Play responsibly!";

pub const HISTORY_NOTE: &str = "(This section can be expanded with tabs and actual history data.)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    Win,
    Loss,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win => write!(f, "Win"),
            Outcome::Loss => write!(f, "Loss"),
        }
    }
}

/// Placeholder row; nothing produces real history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    pub round: u64,
    pub winning_color: Color,
    pub stake: Stake,
    pub outcome: Outcome,
}

impl std::fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Round {} - Winning Color: {} - Your Stake: {} - {}",
            self.round, self.winning_color, self.stake, self.outcome
        )
    }
}

pub const PLACEHOLDER_HISTORY: [HistoryEntry; 2] = [
    HistoryEntry {
        round: 14,
        winning_color: Color::Blue,
        stake: Stake::Half,
        outcome: Outcome::Win,
    },
    HistoryEntry {
        round: 13,
        winning_color: Color::Red,
        stake: Stake::One,
        outcome: Outcome::Loss,
    },
];

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// One of the three fixed cards on the game board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Blue,
    Green,
}

impl Color {
    /// Board order, left to right.
    pub const ALL: [Color; 3] = [Color::Red, Color::Blue, Color::Green];

    pub fn css_class(self) -> &'static str {
        match self {
            Color::Red => "card-red",
            Color::Blue => "card-blue",
            Color::Green => "card-green",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Red => write!(f, "Red"),
            Color::Blue => write!(f, "Blue"),
            Color::Green => write!(f, "Green"),
        }
    }
}

impl FromStr for Color {
    type Err = GameError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let s = raw.trim();
        Color::ALL
            .into_iter()
            .find(|c| c.to_string().eq_ignore_ascii_case(s))
            .ok_or_else(|| GameError::UnknownColor(s.to_string()))
    }
}

/// Wager amount, restricted to the six values on the stake picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(into = "String")]
pub enum Stake {
    #[default]
    Tenth,
    Fifth,
    Half,
    One,
    Two,
    Five,
}

impl Stake {
    pub const ALL: [Stake; 6] = [
        Stake::Tenth,
        Stake::Fifth,
        Stake::Half,
        Stake::One,
        Stake::Two,
        Stake::Five,
    ];

    pub fn amount(self) -> Decimal {
        match self {
            Stake::Tenth => dec!(0.1),
            Stake::Fifth => dec!(0.2),
            Stake::Half => dec!(0.5),
            Stake::One => dec!(1),
            Stake::Two => dec!(2),
            Stake::Five => dec!(5),
        }
    }
}

impl std::fmt::Display for Stake {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.amount().normalize())
    }
}

impl From<Stake> for String {
    fn from(stake: Stake) -> Self {
        stake.to_string()
    }
}

impl FromStr for Stake {
    type Err = GameError;

    /// Accepts any decimal spelling of an allowed amount ("2", "2.0", "0.50").
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let s = raw.trim();
        let amount = Decimal::from_str(s).map_err(|_| GameError::UnknownStake(s.to_string()))?;
        Stake::ALL
            .into_iter()
            .find(|stake| stake.amount() == amount)
            .ok_or_else(|| GameError::UnknownStake(s.to_string()))
    }
}

/// The three mutually exclusive pages of the app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    Game,
    Rules,
    History,
}

impl View {
    /// Nav bar order.
    pub const ALL: [View; 3] = [View::Game, View::Rules, View::History];

    pub fn path(self) -> &'static str {
        match self {
            View::Game => "/",
            View::Rules => "/how-to-play",
            View::History => "/history",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            View::Game => "Game",
            View::Rules => "How to Play",
            View::History => "History",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        View::ALL.into_iter().find(|v| v.path() == path)
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            View::Game => write!(f, "game"),
            View::Rules => write!(f, "rules"),
            View::History => write!(f, "history"),
        }
    }
}

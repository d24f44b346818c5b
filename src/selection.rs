use crate::error::GameError;
use crate::types::{Color, Stake};

/// The player's in-progress choice. Nothing here is ever settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub color: Option<Color>,
    pub stake: Stake,
}

/// What a submit hands to the submit collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub color: Color,
    pub stake: Stake,
}

impl std::fmt::Display for Ticket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} on {}", self.stake, self.color)
    }
}

impl Selection {
    pub fn select_color(&mut self, color: Color) {
        self.color = Some(color);
    }

    pub fn select_stake(&mut self, stake: Stake) {
        self.stake = stake;
    }

    pub fn can_submit(&self) -> bool {
        self.color.is_some()
    }

    pub fn ticket(&self) -> Option<Ticket> {
        self.color.map(|color| Ticket {
            color,
            stake: self.stake,
        })
    }

    pub fn submit(&self) -> Result<Ticket, GameError> {
        self.ticket().ok_or(GameError::NoColorSelected)
    }

    pub fn submit_label(&self) -> String {
        match self.ticket() {
            Some(ticket) => format!("Submit ({ticket})"),
            None => "Select a color to play".to_string(),
        }
    }
}

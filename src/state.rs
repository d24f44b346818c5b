use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use serde::Serialize;

use crate::config::Config;
use crate::error::GameError;
use crate::navigator::Navigator;
use crate::selection::Ticket;
use crate::session::GameSession;
use crate::stats::{self, ColorStats, RandomSource, ThreadRandom};
use crate::submit::{LogSubmit, SubmitHandler};
use crate::types::{Color, Stake, View};

#[derive(Debug, Clone, Serialize)]
pub struct EventEntry {
    pub ts: String,
    pub kind: String,
    pub detail: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CardView {
    pub color: Color,
    pub selected: bool,
    pub win_percent: u32,
    pub coin_count: u32,
}

/// Everything the game page shows for one render.
#[derive(Debug, Clone, Serialize)]
pub struct GameSnapshot {
    pub round: u64,
    pub remaining: u32,
    pub countdown: String,
    pub online_users: u32,
    pub cards: Vec<CardView>,
    pub stake: Stake,
    pub stakes: Vec<Stake>,
    pub submit_enabled: bool,
    pub submit_label: String,
}

pub struct AppState {
    pub config: Config,
    pub navigator: Mutex<Navigator>,
    pub stats_source: Box<dyn RandomSource>,
    pub submit_handler: Box<dyn SubmitHandler>,
    pub events: Mutex<VecDeque<EventEntry>>,
}

const MAX_EVENTS: usize = 200;

impl AppState {
    pub fn new(config: Config) -> Arc<Self> {
        Self::with_collaborators(config, Box::new(ThreadRandom), Box::new(LogSubmit))
    }

    pub fn with_collaborators(
        config: Config,
        stats_source: Box<dyn RandomSource>,
        submit_handler: Box<dyn SubmitHandler>,
    ) -> Arc<Self> {
        let navigator = Navigator::new(config.tick_period());
        Arc::new(Self {
            config,
            navigator: Mutex::new(navigator),
            stats_source,
            submit_handler,
            events: Mutex::new(VecDeque::with_capacity(MAX_EVENTS)),
        })
    }

    pub fn push_event(&self, kind: &str, detail: &str) {
        let entry = EventEntry {
            ts: chrono::Utc::now().format("%H:%M:%S").to_string(),
            kind: kind.to_string(),
            detail: detail.to_string(),
        };
        let mut events = self.events.lock().unwrap();
        if events.len() >= MAX_EVENTS {
            events.pop_front();
        }
        events.push_back(entry);
    }

    pub fn navigate(&self, view: View) {
        self.navigator.lock().unwrap().navigate(view);
        self.push_event("nav", &format!("opened {}", view.path()));
    }

    /// Runs `f` against the mounted game session.
    pub fn with_game<R>(
        &self,
        f: impl FnOnce(&GameSession) -> Result<R, GameError>,
    ) -> Result<R, GameError> {
        let nav = self.navigator.lock().unwrap();
        let game = nav.game().ok_or(GameError::GameInactive)?;
        f(game)
    }

    /// Renders the current game state. Card stats are redrawn on every call.
    pub fn snapshot(&self) -> Result<GameSnapshot, GameError> {
        let (clock, selection) = self.with_game(|game| Ok((game.clock(), game.selection())))?;
        let cards = stats::generate(self.stats_source.as_ref())
            .into_iter()
            .map(|ColorStats { color, win_percent, coin_count }| CardView {
                color,
                selected: selection.color == Some(color),
                win_percent,
                coin_count,
            })
            .collect();

        Ok(GameSnapshot {
            round: clock.round(),
            remaining: clock.remaining(),
            countdown: clock.display(),
            online_users: self.config.online_users,
            cards,
            stake: selection.stake,
            stakes: Stake::ALL.to_vec(),
            submit_enabled: selection.can_submit(),
            submit_label: selection.submit_label(),
        })
    }

    pub fn select_color(&self, color: Color) -> Result<(), GameError> {
        self.with_game(|game| {
            game.update_selection(|s| s.select_color(color));
            Ok(())
        })?;
        self.push_event("select", &format!("color {color}"));
        Ok(())
    }

    pub fn select_stake(&self, stake: Stake) -> Result<(), GameError> {
        self.with_game(|game| {
            game.update_selection(|s| s.select_stake(stake));
            Ok(())
        })?;
        self.push_event("select", &format!("stake {stake}"));
        Ok(())
    }

    /// Hands the current selection to the submit handler.
    pub fn submit(&self) -> Result<(u64, Ticket), GameError> {
        let (round, ticket) = self.with_game(|game| {
            let ticket = game.selection().submit()?;
            Ok((game.clock().round(), ticket))
        })?;
        self.submit_handler.on_submit(round, ticket);
        self.push_event("submit", &format!("round {round}: {ticket}"));
        Ok((round, ticket))
    }
}

use std::time::Duration;

use crate::session::GameSession;
use crate::types::View;

/// Current-view selector. Owns the game session, which exists only while the
/// game view is current.
pub struct Navigator {
    current: Option<View>,
    game: Option<GameSession>,
    tick_period: Duration,
}

impl Navigator {
    /// Nothing is mounted until the first page is requested.
    pub fn new(tick_period: Duration) -> Self {
        Self {
            current: None,
            game: None,
            tick_period,
        }
    }

    pub fn current(&self) -> Option<View> {
        self.current
    }

    /// Switches views. Opening the game view always mounts a fresh session,
    /// so a reload of `/` starts again from round 1. Any previous session is
    /// released before the new one starts.
    pub fn navigate(&mut self, view: View) {
        let from = self.current.replace(view);

        if self.game.take().is_some() {
            tracing::debug!("game session released");
        }
        if view == View::Game {
            self.game = Some(GameSession::start(self.tick_period));
        }

        tracing::debug!(from = ?from, to = %view, "navigated");
    }

    pub fn game(&self) -> Option<&GameSession> {
        self.game.as_ref()
    }

    /// Leaves whatever view is current and hands back the game session, if
    /// one was mounted, so the caller can await its shutdown.
    pub fn unmount(&mut self) -> Option<GameSession> {
        self.current = None;
        self.game.take()
    }
}

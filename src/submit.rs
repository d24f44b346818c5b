use crate::selection::Ticket;

/// Receives submitted selections.
/// The stock handler only logs; a real game would settle wagers here.
pub trait SubmitHandler: Send + Sync {
    fn on_submit(&self, round: u64, ticket: Ticket);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LogSubmit;

impl SubmitHandler for LogSubmit {
    fn on_submit(&self, round: u64, ticket: Ticket) {
        tracing::info!(
            round,
            color = %ticket.color,
            stake = %ticket.stake,
            "selection submitted (no wager placed)"
        );
    }
}

/// Seconds in one round. The countdown resets to this value on rollover.
pub const ROUND_SECONDS: u32 = 120;

/// Outcome of a single one-second tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Counted { remaining: u32 },
    RolledOver { round: u64 },
}

/// Round counter plus countdown.
///
/// `remaining` is always in [1, ROUND_SECONDS]: the tick that would reach zero
/// lands on a fresh round instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundClock {
    round: u64,
    remaining: u32,
}

impl Default for RoundClock {
    fn default() -> Self {
        Self::new()
    }
}

impl RoundClock {
    pub fn new() -> Self {
        Self {
            round: 1,
            remaining: ROUND_SECONDS,
        }
    }

    pub fn round(&self) -> u64 {
        self.round
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn tick(&mut self) -> Tick {
        if self.remaining <= 1 {
            self.round += 1;
            self.remaining = ROUND_SECONDS;
            Tick::RolledOver { round: self.round }
        } else {
            self.remaining -= 1;
            Tick::Counted {
                remaining: self.remaining,
            }
        }
    }

    /// Countdown as `m:ss`.
    pub fn display(&self) -> String {
        format_countdown(self.remaining)
    }
}

pub fn format_countdown(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

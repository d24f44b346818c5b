mod navigator_tests;
mod stats_tests;

use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::selection::Ticket;
use crate::stats::RandomSource;
use crate::submit::SubmitHandler;

/// Replays a fixed list of draws, wrapping around at the end.
pub struct ScriptedRandom {
    values: Vec<u32>,
    next: AtomicUsize,
}

impl ScriptedRandom {
    pub fn new(values: Vec<u32>) -> Self {
        Self { values, next: AtomicUsize::new(0) }
    }
}

impl RandomSource for ScriptedRandom {
    fn below(&self, bound: u32) -> u32 {
        let i = self.next.fetch_add(1, Ordering::Relaxed);
        self.values[i % self.values.len()] % bound
    }
}

/// Always answers the largest legal value.
pub struct MaxRandom;

impl RandomSource for MaxRandom {
    fn below(&self, bound: u32) -> u32 {
        bound - 1
    }
}

/// Collects every submit for later assertions.
#[derive(Clone, Default)]
pub struct RecordingSubmit {
    pub calls: Arc<Mutex<Vec<(u64, Ticket)>>>,
}

impl SubmitHandler for RecordingSubmit {
    fn on_submit(&self, round: u64, ticket: Ticket) {
        self.calls.lock().unwrap().push((round, ticket));
    }
}

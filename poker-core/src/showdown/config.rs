use super::ShowdownError;
use crate::card::DECK_LEN;
use std::time::Duration;

/// Threads per producer. The rest of the pool compares.
pub const PRODUCER_RATIO: f64 = 2.5;
pub const QUEUE_CAPACITY: usize = 10_000;
/// Tuples a comparer handles between merges into the shared results.
pub const FLUSH_INTERVAL: u64 = 500_000;
pub const REPORT_INTERVAL: Duration = Duration::from_secs(10);

/// Everything one enumeration run needs to know. Built once and shared read-only by every
/// worker.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumerationConfig {
    threads: usize,
    deck: Vec<u8>,
    queue_capacity: usize,
    flush_interval: u64,
    report_interval: Duration,
}

impl EnumerationConfig {
    /// Defaults over the full 52 card deck.
    pub fn new(threads: usize) -> Self {
        Self {
            threads,
            deck: (0..DECK_LEN as u8).collect(),
            queue_capacity: QUEUE_CAPACITY,
            flush_interval: FLUSH_INTERVAL,
            report_interval: REPORT_INTERVAL,
        }
    }

    /// Restrict the enumeration to the cards with these universe indices.
    pub fn with_deck(mut self, mut deck: Vec<u8>) -> Self {
        deck.sort_unstable();
        self.deck = deck;
        self
    }

    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = capacity;
        self
    }

    pub fn with_flush_interval(mut self, interval: u64) -> Self {
        self.flush_interval = interval;
        self
    }

    pub fn with_report_interval(mut self, interval: Duration) -> Self {
        self.report_interval = interval;
        self
    }

    pub fn threads(&self) -> usize {
        self.threads
    }

    /// Card indices in ascending order.
    pub fn deck(&self) -> &[u8] {
        &self.deck
    }

    pub fn queue_capacity(&self) -> usize {
        self.queue_capacity
    }

    pub fn flush_interval(&self) -> u64 {
        self.flush_interval
    }

    pub fn report_interval(&self) -> Duration {
        self.report_interval
    }

    pub fn producers(&self) -> usize {
        ((self.threads as f64 / PRODUCER_RATIO) as usize).max(1)
    }

    pub fn comparers(&self) -> usize {
        self.threads.saturating_sub(self.producers()).max(1)
    }

    pub fn validate(&self) -> Result<(), ShowdownError> {
        if self.threads < 2 {
            return Err(ShowdownError::Config(format!(
                "at least 2 threads are required, got {}",
                self.threads
            )));
        }
        if self.queue_capacity == 0 {
            return Err(ShowdownError::Config("queue capacity must be positive".into()));
        }
        if self.flush_interval == 0 {
            return Err(ShowdownError::Config("flush interval must be positive".into()));
        }
        if self.deck.len() < 9 {
            return Err(ShowdownError::Config(format!(
                "a showdown needs 9 cards, the deck has {}",
                self.deck.len()
            )));
        }
        if let Some(c) = self.deck.iter().find(|c| **c as usize >= DECK_LEN) {
            return Err(ShowdownError::Config(format!("no card with index {}", c)));
        }
        if self.deck.windows(2).any(|w| w[0] == w[1]) {
            return Err(ShowdownError::Config("deck has duplicate cards".into()));
        }
        Ok(())
    }

    /// How many showdowns the run will decide:
    /// C(n, 2) hero hands × C(n - 2, 5) boards × C(n - 7, 2) opponent hands.
    pub fn space_size(&self) -> u64 {
        let n = self.deck.len() as u64;
        if n < 9 {
            return 0;
        }
        choose(n, 2) * choose(n - 2, 5) * choose(n - 7, 2)
    }
}

fn choose(n: u64, k: u64) -> u64 {
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}

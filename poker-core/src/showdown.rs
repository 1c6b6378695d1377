//! Exhaustive preflop showdown enumeration.
//!
//! Producers walk every (hero, board, opponent) deal and push the card indices onto a bounded
//! queue. Comparers pop them, decide the showdown, and tally the outcome under the hero's
//! [`HoleCards`](crate::hole::HoleCards) class. A reporter thread logs progress while the run
//! goes.
pub mod comparer;
pub mod config;
pub mod producer;
pub mod queue;
pub mod results;
pub mod runner;

use crate::hand::HandError;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub use config::EnumerationConfig;
pub use producer::Tuple;
pub use queue::{BoundedQueue, QueueError};
pub use results::{ShowdownResults, ShowdownTally};
pub use runner::{Enumeration, EnumerationSummary};

#[derive(Debug, derive_more::Display)]
pub enum ShowdownError {
    #[display(fmt = "no hole cards class for card indices {} and {}", _0, _1)]
    UnknownHoleCards(u8, u8),
    #[display(fmt = "no card with index {}", _0)]
    UnknownCard(u8),
    #[display(fmt = "invalid configuration: {}", _0)]
    Config(String),
    #[display(fmt = "worker thread {} panicked", _0)]
    WorkerPanicked(String),
    #[display(fmt = "could not start worker thread: {}", _0)]
    Spawn(std::io::Error),
    Hand(HandError),
}

impl std::error::Error for ShowdownError {}

impl From<HandError> for ShowdownError {
    fn from(e: HandError) -> Self {
        ShowdownError::Hand(e)
    }
}

impl From<std::io::Error> for ShowdownError {
    fn from(e: std::io::Error) -> Self {
        ShowdownError::Spawn(e)
    }
}

/// A cancellation flag shared by everything taking part in one run. Clones share the flag.
#[derive(Debug, Clone, Default)]
pub struct Shutdown(Arc<AtomicBool>);

impl Shutdown {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

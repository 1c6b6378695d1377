use super::config::EnumerationConfig;
use super::producer::Tuple;
use super::queue::BoundedQueue;
use super::results::{ShowdownResults, ShowdownTally};
use super::ShowdownError;
use crate::best::NCardHand;
use crate::card::Card;
use crate::hand::WinState;
use crate::hole::HoleCards;
use log::{debug, error};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

fn card(index: u8) -> Result<Card, ShowdownError> {
    Card::from_index(index).ok_or(ShowdownError::UnknownCard(index))
}

/// Decide one showdown: the hero's class and whether the hero won, lost or tied.
pub fn showdown(t: &Tuple) -> Result<(HoleCards, WinState), ShowdownError> {
    let hero = HoleCards::lookup(t[0], t[1]).ok_or_else(|| {
        error!("no hole cards class for card indices {} and {}", t[0], t[1]);
        ShowdownError::UnknownHoleCards(t[0], t[1])
    })?;
    let mut mine = [card(t[0])?; 7];
    let mut theirs = [card(t[7])?; 7];
    mine[1] = card(t[1])?;
    theirs[1] = card(t[8])?;
    for i in 2..7 {
        let c = card(t[i])?;
        mine[i] = c;
        theirs[i] = c;
    }
    let mine = NCardHand::new(&mine)?;
    let theirs = NCardHand::new(&theirs)?;
    Ok((hero, mine.showdown(&theirs)))
}

/// Pops tuples until the queue ends, tallying locally and merging into the shared results every
/// `flush_interval` tuples and once more on the way out.
pub struct Comparer<'a> {
    index: usize,
    config: &'a EnumerationConfig,
    queue: &'a BoundedQueue<Tuple>,
    results: &'a ShowdownResults,
    processed: &'a AtomicU64,
}

impl<'a> Comparer<'a> {
    pub fn new(
        index: usize,
        config: &'a EnumerationConfig,
        queue: &'a BoundedQueue<Tuple>,
        results: &'a ShowdownResults,
        processed: &'a AtomicU64,
    ) -> Self {
        Self {
            index,
            config,
            queue,
            results,
            processed,
        }
    }

    /// Returns how many tuples this comparer decided. A failed showdown cancels the whole run.
    pub fn run(&self) -> Result<u64, ShowdownError> {
        debug!("comparer {} starting", self.index);
        let mut local: HashMap<HoleCards, ShowdownTally> = HashMap::new();
        let mut since_flush = 0;
        let mut done = 0;
        while let Some(tuple) = self.queue.pop() {
            let (hero, outcome) = match showdown(&tuple) {
                Ok(res) => res,
                Err(e) => {
                    self.queue.cancel();
                    self.results.merge(local.drain());
                    return Err(e);
                }
            };
            local.entry(hero).or_default().record(outcome);
            self.processed.fetch_add(1, Ordering::Relaxed);
            done += 1;
            since_flush += 1;
            if since_flush >= self.config.flush_interval() {
                self.results.merge(local.drain());
                since_flush = 0;
            }
        }
        self.results.merge(local.drain());
        debug!("comparer {} done, {} showdowns", self.index, done);
        Ok(done)
    }
}

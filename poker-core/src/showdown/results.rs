use crate::hand::WinState;
use crate::hole::HoleCards;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::ops::{Add, AddAssign};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Entries need more than this many showdowns to show up in a limited rendering.
pub const RENDER_MIN_OBSERVATIONS: u64 = 100;

/// Showdown outcomes for one hole cards class, from the hero's side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowdownTally {
    pub wins: u64,
    pub losses: u64,
    pub ties: u64,
}

impl ShowdownTally {
    pub fn record(&mut self, outcome: WinState) {
        match outcome {
            WinState::Win => self.wins += 1,
            WinState::Lose => self.losses += 1,
            WinState::Tie => self.ties += 1,
        }
    }

    pub fn total(&self) -> u64 {
        self.wins + self.losses + self.ties
    }

    /// Wins over all showdowns. Zero when nothing was recorded.
    pub fn win_rate(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            n => self.wins as f64 / n as f64,
        }
    }
}

impl AddAssign for ShowdownTally {
    fn add_assign(&mut self, rhs: Self) {
        self.wins += rhs.wins;
        self.losses += rhs.losses;
        self.ties += rhs.ties;
    }
}

impl Add for ShowdownTally {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

/// The shared result table. Merges and snapshots exclude each other.
#[derive(Debug, Default)]
pub struct ShowdownResults {
    table: Mutex<HashMap<HoleCards, ShowdownTally>>,
}

impl ShowdownResults {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<HoleCards, ShowdownTally>> {
        self.table.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Count a single showdown.
    pub fn record(&self, hero: HoleCards, outcome: WinState) {
        self.lock().entry(hero).or_default().record(outcome);
    }

    /// Add a batch of tallies, creating entries as needed.
    pub fn merge<I>(&self, local: I)
    where
        I: IntoIterator<Item = (HoleCards, ShowdownTally)>,
    {
        let mut table = self.lock();
        for (hero, tally) in local {
            *table.entry(hero).or_default() += tally;
        }
    }

    /// Entries with more than `min_observations` showdowns, best win rate first, at most
    /// `limit` of them.
    pub fn snapshot(
        &self,
        min_observations: u64,
        limit: Option<usize>,
    ) -> Vec<(HoleCards, ShowdownTally)> {
        let mut entries: Vec<_> = self
            .lock()
            .iter()
            .filter(|(_, t)| t.total() > min_observations)
            .map(|(h, t)| (*h, *t))
            .collect();
        entries.sort_by(|a, b| {
            b.1.win_rate()
                .total_cmp(&a.1.win_rate())
                .then_with(|| a.0.to_string().cmp(&b.0.to_string()))
        });
        if let Some(limit) = limit {
            entries.truncate(limit);
        }
        entries
    }

    pub fn get(&self, hero: &HoleCards) -> Option<ShowdownTally> {
        self.lock().get(hero).copied()
    }

    /// Every entry summed.
    pub fn totals(&self) -> ShowdownTally {
        self.lock()
            .values()
            .fold(ShowdownTally::default(), |acc, t| acc + *t)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// At most `limit` entries, skipping any with too few showdowns to mean much.
    pub fn render_limited(&self, limit: usize) -> String {
        render(&self.snapshot(RENDER_MIN_OBSERVATIONS, Some(limit)))
    }
}

fn render(entries: &[(HoleCards, ShowdownTally)]) -> String {
    if entries.is_empty() {
        return "No results".to_string();
    }
    entries
        .iter()
        .map(|(hero, t)| {
            format!(
                "{:<3}\n\tWIN%\t{:.2}\n\tWIN#\t{}\n\tLOSS#\t{}\n\tTIE#\t{}",
                hero.to_string(),
                t.win_rate() * 100.0,
                t.wins,
                t.losses,
                t.ties
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

impl fmt::Display for ShowdownResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", render(&self.snapshot(0, None)))
    }
}

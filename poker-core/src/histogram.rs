//! Monte-Carlo category histogram: classify random five card hands and count how often each
//! class comes up.
use crate::cards::card::Card;
use crate::cards::deck::{Deck, DeckError, DeckSeed};
use crate::cards::hand::{FiveCardHand, HandClass, ALL_HAND_CLASSES};
use enum_map::{enum_map, EnumMap};
use log::debug;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;
use std::time::{Duration, Instant};

/// Per-class counters shared by every sampling thread.
#[derive(Debug, Default)]
pub struct CategoryHistogram {
    counts: EnumMap<HandClass, AtomicU64>,
}

impl CategoryHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a thread's local counts.
    pub fn merge(&self, local: &EnumMap<HandClass, u64>) {
        for (class, n) in local {
            self.counts[class].fetch_add(*n, Ordering::Relaxed);
        }
    }

    pub fn get(&self, class: HandClass) -> u64 {
        self.counts[class].load(Ordering::Relaxed)
    }

    pub fn total(&self) -> u64 {
        self.counts.values().map(|c| c.load(Ordering::Relaxed)).sum()
    }

    pub fn snapshot(&self) -> EnumMap<HandClass, u64> {
        enum_map! { class => self.get(class) }
    }
}

#[derive(Debug, Clone)]
pub struct HistogramReport {
    pub counts: EnumMap<HandClass, u64>,
    pub threads: usize,
    pub elapsed: Duration,
}

impl HistogramReport {
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }
}

fn plural_label(class: HandClass) -> &'static str {
    match class {
        HandClass::RoyalFlush => "Royal Flushes",
        HandClass::StraightFlush => "Straight Flushes",
        HandClass::FourOfAKind => "Four of a Kind",
        HandClass::FullHouse => "Full Houses",
        HandClass::Flush => "Flushes",
        HandClass::Straight => "Straights",
        HandClass::ThreeOfAKind => "Three of a Kind",
        HandClass::TwoPair => "Two Pair",
        HandClass::Pair => "Pairs",
        HandClass::HighCard => "High Card",
    }
}

impl fmt::Display for HistogramReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "----------------------------------------------------")?;
        writeln!(f, "\tTime: {}ms", self.elapsed.as_millis())?;
        writeln!(f, "\tThreads: {}", self.threads)?;
        writeln!(f)?;
        for class in ALL_HAND_CLASSES {
            writeln!(f, "\t{}: {}", plural_label(class), self.counts[class])?;
        }
        Ok(())
    }
}

/// Sample `iterations` random hands split over `threads` threads. Thread `i` deals from stream
/// `i` of `seed`, so a given seed and thread count always produce the same counts.
pub fn run_histogram(
    threads: usize,
    iterations: u64,
    seed: &DeckSeed,
) -> Result<HistogramReport, DeckError> {
    let threads = threads.max(1);
    let histogram = CategoryHistogram::new();
    let begin = Instant::now();
    let per_thread = iterations / threads as u64;
    let remainder = iterations % threads as u64;
    thread::scope(|s| {
        let handles: Vec<_> = (0..threads)
            .map(|i| {
                let n = per_thread + u64::from((i as u64) < remainder);
                let histogram = &histogram;
                s.spawn(move || sample(histogram, i as u64, n, seed))
            })
            .collect();
        handles
            .into_iter()
            .try_for_each(|h| match h.join() {
                Ok(res) => res,
                Err(panic) => std::panic::resume_unwind(panic),
            })
    })?;
    Ok(HistogramReport {
        counts: histogram.snapshot(),
        threads,
        elapsed: begin.elapsed(),
    })
}

fn sample(
    histogram: &CategoryHistogram,
    stream: u64,
    iterations: u64,
    seed: &DeckSeed,
) -> Result<(), DeckError> {
    debug!("sampler {} starting, {} hands", stream, iterations);
    let mut deck = Deck::with_stream(seed, stream);
    let mut local: EnumMap<HandClass, u64> = EnumMap::default();
    for _ in 0..iterations {
        deck.shuffle();
        let cards: [Card; 5] = deck.deal()?;
        local[FiveCardHand::new_unchecked(&cards).class()] += 1;
    }
    histogram.merge(&local);
    debug!("sampler {} done", stream);
    Ok(())
}

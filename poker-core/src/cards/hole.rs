use super::card::{Card, Rank, ALL_RANKS, DECK_LEN, UNIVERSE};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// The preflop identity of two hole cards: their ranks and whether they share a suit. There are
/// 169 of these: 13 pairs, 78 suited and 78 offsuit combinations.
#[derive(Hash, PartialEq, Eq, Clone, Copy, Debug, Serialize, Deserialize)]
pub struct HoleCards {
    high: Rank,
    low: Rank,
    suited: bool,
}

type LookupTable = [[Option<HoleCards>; DECK_LEN]; DECK_LEN];

static TABLE: OnceLock<Box<LookupTable>> = OnceLock::new();

fn table() -> &'static LookupTable {
    TABLE.get_or_init(|| {
        let mut t = Box::new([[None; DECK_LEN]; DECK_LEN]);
        for (i, a) in UNIVERSE.iter().enumerate() {
            for (j, b) in UNIVERSE.iter().enumerate() {
                if i != j {
                    t[i][j] = Some(HoleCards::of(*a, *b));
                }
            }
        }
        t
    })
}

impl HoleCards {
    /// The class of two distinct cards. The order of the arguments doesn't matter.
    pub fn of(a: Card, b: Card) -> Self {
        let (high, low) = if a.rank() >= b.rank() {
            (a.rank(), b.rank())
        } else {
            (b.rank(), a.rank())
        };
        Self {
            high,
            low,
            suited: a.suit() == b.suit(),
        }
    }

    /// Look up the class of the cards at two universe indices. None when the indices are equal or
    /// out of range.
    pub fn lookup(a: u8, b: u8) -> Option<Self> {
        table()
            .get(a as usize)
            .and_then(|row| row.get(b as usize))
            .copied()
            .flatten()
    }

    pub fn high(&self) -> Rank {
        self.high
    }

    pub fn low(&self) -> Rank {
        self.low
    }

    pub fn is_suited(&self) -> bool {
        self.suited
    }

    pub fn is_pair(&self) -> bool {
        self.high == self.low
    }

    /// Every class, pairs and suited hands first within each high rank.
    pub fn all() -> Vec<Self> {
        let mut out = Vec::with_capacity(169);
        for (hi, high) in ALL_RANKS.iter().enumerate().rev() {
            for low in ALL_RANKS[..=hi].iter().rev() {
                if high == low {
                    out.push(Self {
                        high: *high,
                        low: *low,
                        suited: false,
                    });
                } else {
                    for suited in [true, false] {
                        out.push(Self {
                            high: *high,
                            low: *low,
                            suited,
                        });
                    }
                }
            }
        }
        out
    }
}

impl fmt::Display for HoleCards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_pair() {
            write!(f, "{}{}", self.high, self.low)
        } else {
            let s = if self.suited { 's' } else { 'o' };
            write!(f, "{}{}{}", self.high, self.low, s)
        }
    }
}

use super::card::{Card, DECK_LEN, UNIVERSE};
use base64ct::{self, Base64, Encoding};
use rand::prelude::*;
use rand_chacha::ChaChaRng;
use std::error::Error;
use std::fmt;
use std::str::FromStr;

const SEED_LEN: usize = 32;
const ENCODED_SEED_LEN: usize = 4 * ((SEED_LEN + 3 - 1) / 3); // 4 * ceil(SEED_LEN / 3)

#[derive(PartialEq, Debug)]
pub enum DeckError {
    OutOfCards,
    DeckSeedDecodeError(base64ct::Error),
}

impl Error for DeckError {}

impl fmt::Display for DeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeckError::OutOfCards => write!(f, "No more cards in deck"),
            DeckError::DeckSeedDecodeError(e) => write!(f, "{}", e),
        }
    }
}

impl From<base64ct::Error> for DeckError {
    fn from(e: base64ct::Error) -> Self {
        Self::DeckSeedDecodeError(e)
    }
}

/// A single deck with its own random stream. Reshuffling always starts from the full
/// universe, so a deck can be reused for any number of deals.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    rng: ChaChaRng,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new(&DeckSeed::default())
    }
}

impl Deck {
    /// Generate a new single deck of cards, shuffled
    pub fn new(seed: &DeckSeed) -> Self {
        Self::with_stream(seed, 0)
    }

    /// A deck seeded from `seed` but drawing from an independent ChaCha stream. Workers that
    /// share one seed each take their own stream so their deals don't overlap.
    pub fn with_stream(seed: &DeckSeed, stream: u64) -> Self {
        let mut rng = ChaChaRng::from_seed(seed.0);
        rng.set_stream(stream);
        let mut d = Deck {
            cards: Vec::with_capacity(DECK_LEN),
            rng,
        };
        d.shuffle();
        d
    }

    /// Put every card back and shuffle.
    pub fn shuffle(&mut self) {
        self.cards.clear();
        // Same seed, same deal: the cards must start from a known order.
        self.cards.extend_from_slice(&UNIVERSE);
        self.cards.shuffle(&mut self.rng);
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Draw the topmost card and return it, or return and error if, e.g., there are no more cards.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::OutOfCards)
    }

    /// Draw `N` cards at once.
    pub fn deal<const N: usize>(&mut self) -> Result<[Card; N], DeckError> {
        if self.cards.len() < N {
            return Err(DeckError::OutOfCards);
        }
        let mut out = [UNIVERSE[0]; N];
        for c in out.iter_mut() {
            *c = self.draw()?;
        }
        Ok(out)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeckSeed([u8; SEED_LEN]);

impl DeckSeed {
    pub const fn new(b: [u8; SEED_LEN]) -> Self {
        Self(b)
    }
}

impl Default for DeckSeed {
    fn default() -> Self {
        let mut b = [0u8; SEED_LEN];
        thread_rng().fill_bytes(&mut b);
        Self(b)
    }
}

impl std::fmt::Display for DeckSeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut b = [0u8; ENCODED_SEED_LEN];
        let s = Base64::encode(&self.0, &mut b).map_err(|_| fmt::Error)?;
        write!(f, "{}", s)
    }
}

impl FromStr for DeckSeed {
    type Err = DeckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut b: [u8; SEED_LEN] = [0; SEED_LEN];
        Base64::decode(s, &mut b)?;
        Ok(DeckSeed(b))
    }
}

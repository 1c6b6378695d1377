use super::card::Card;
use super::hand::{FiveCardHand, HandError, WinState};
use itertools::Itertools;
use std::cell::OnceCell;

/// Five or more cards, typically two hole cards plus a five card board. The best five card hand
/// is found by trying every five card subset, and is computed at most once.
#[derive(Debug, Clone)]
pub struct NCardHand {
    cards: Vec<Card>,
    best: OnceCell<FiveCardHand>,
}

impl NCardHand {
    pub fn new(cards: &[Card]) -> Result<Self, HandError> {
        if cards.len() < 5 {
            return Err(HandError::InsufficientCards(cards.len()));
        }
        Ok(Self {
            cards: cards.to_vec(),
            best: OnceCell::new(),
        })
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The strongest five card hand available. Ties between subsets of equal strength resolve to
    /// whichever comes first; they are interchangeable for any comparison.
    pub fn best(&self) -> &FiveCardHand {
        self.best.get_or_init(|| best_of_five_or_more(&self.cards))
    }

    /// Compare best hands.
    pub fn showdown(&self, other: &Self) -> WinState {
        self.best().beats(other.best())
    }
}

/// The best five card hand that can be made from `cards`.
pub fn best_of_cards(cards: &[Card]) -> Result<FiveCardHand, HandError> {
    if cards.len() < 5 {
        return Err(HandError::InsufficientCards(cards.len()));
    }
    Ok(best_of_five_or_more(cards))
}

/// `cards` must hold at least five. The first subset walked is the first five cards, so it
/// seeds the search.
fn best_of_five_or_more(cards: &[Card]) -> FiveCardHand {
    cards
        .iter()
        .copied()
        .combinations(5)
        .skip(1)
        .map(|combo| FiveCardHand::new_unchecked(&combo))
        .fold(FiveCardHand::new_unchecked(&cards[..5]), |best, h| {
            if h > best {
                h
            } else {
                best
            }
        })
}

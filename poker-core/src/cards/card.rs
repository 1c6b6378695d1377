use enum_map::Enum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const ALL_RANKS: [Rank; 13] = [
    Rank::R2,
    Rank::R3,
    Rank::R4,
    Rank::R5,
    Rank::R6,
    Rank::R7,
    Rank::R8,
    Rank::R9,
    Rank::RT,
    Rank::RJ,
    Rank::RQ,
    Rank::RK,
    Rank::RA,
];
/// Suits in universe order. Card indices are laid out suit by suit in this order.
pub const ALL_SUITS: [Suit; 4] = [Suit::Heart, Suit::Diamond, Suit::Club, Suit::Spade];
pub const DECK_LEN: usize = ALL_RANKS.len() * ALL_SUITS.len();
pub const SPADE: char = 'S';
pub const HEART: char = 'H';
pub const DIAMOND: char = 'D';
pub const CLUB: char = 'C';

/// Every card exactly once, indexed 0..51. Within a suit the Ace comes first and the Two last,
/// so index 0 is the Ace of Hearts and index 51 is the Two of Spades.
pub const UNIVERSE: [Card; DECK_LEN] = build_universe();

const fn build_universe() -> [Card; DECK_LEN] {
    let mut cards = [Card::new(Rank::RA, Suit::Heart); DECK_LEN];
    let mut i = 0;
    while i < DECK_LEN {
        cards[i] = Card::from_index_unchecked(i as u8);
        i += 1;
    }
    cards
}

#[derive(Debug, PartialEq, Eq, Clone, derive_more::Display)]
pub enum CardError {
    #[display(fmt = "invalid card identifier {:?}", _0)]
    InvalidCardIdentifier(String),
}

impl std::error::Error for CardError {}

#[derive(Hash, PartialEq, Eq, Clone, Copy, Debug, Serialize, Deserialize)]
pub enum Suit {
    Heart,
    Diamond,
    Club,
    Spade,
}

impl Suit {
    pub fn name(self) -> &'static str {
        match self {
            Self::Heart => "Hearts",
            Self::Diamond => "Diamonds",
            Self::Club => "Clubs",
            Self::Spade => "Spades",
        }
    }

    /// Position of this suit in the universe layout.
    const fn position(self) -> u8 {
        match self {
            Self::Heart => 0,
            Self::Diamond => 1,
            Self::Club => 2,
            Self::Spade => 3,
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            HEART => Some(Self::Heart),
            DIAMOND => Some(Self::Diamond),
            CLUB => Some(Self::Club),
            SPADE => Some(Self::Spade),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Club => write!(f, "{}", CLUB),
            Self::Diamond => write!(f, "{}", DIAMOND),
            Self::Heart => write!(f, "{}", HEART),
            Self::Spade => write!(f, "{}", SPADE),
        }
    }
}

#[derive(
    Hash, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Enum, Serialize, Deserialize,
)]
pub enum Rank {
    R2,
    R3,
    R4,
    R5,
    R6,
    R7,
    R8,
    R9,
    RT,
    RJ,
    RQ,
    RK,
    RA,
}

impl Rank {
    /// Numeric value, 2 through 14. The Ace is 14.
    pub const fn value(self) -> u8 {
        self as u8 + 2
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::R2 => "Two",
            Self::R3 => "Three",
            Self::R4 => "Four",
            Self::R5 => "Five",
            Self::R6 => "Six",
            Self::R7 => "Seven",
            Self::R8 => "Eight",
            Self::R9 => "Nine",
            Self::RT => "Ten",
            Self::RJ => "Jack",
            Self::RQ => "Queen",
            Self::RK => "King",
            Self::RA => "Ace",
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        let r = match c.to_ascii_uppercase() {
            '2' => Rank::R2,
            '3' => Rank::R3,
            '4' => Rank::R4,
            '5' => Rank::R5,
            '6' => Rank::R6,
            '7' => Rank::R7,
            '8' => Rank::R8,
            '9' => Rank::R9,
            'T' => Rank::RT,
            'J' => Rank::RJ,
            'Q' => Rank::RQ,
            'K' => Rank::RK,
            'A' => Rank::RA,
            _ => return None,
        };
        Some(r)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::R2 => write!(f, "2"),
            Self::R3 => write!(f, "3"),
            Self::R4 => write!(f, "4"),
            Self::R5 => write!(f, "5"),
            Self::R6 => write!(f, "6"),
            Self::R7 => write!(f, "7"),
            Self::R8 => write!(f, "8"),
            Self::R9 => write!(f, "9"),
            Self::RT => write!(f, "T"),
            Self::RJ => write!(f, "J"),
            Self::RQ => write!(f, "Q"),
            Self::RK => write!(f, "K"),
            Self::RA => write!(f, "A"),
        }
    }
}

/// A playing card. Cards only compare for equality; anything that needs ordering sorts by
/// [`Card::rank`] explicitly.
#[derive(Hash, PartialEq, Eq, Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = CardError;

    /// Parse a short name such as "AS" or "Td".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || CardError::InvalidCardIdentifier(s.to_string());
        let mut chars = s.chars();
        let (r, su) = match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(su), None) => (r, su),
            _ => return Err(err()),
        };
        let rank = Rank::from_char(r).ok_or_else(err)?;
        let suit = Suit::from_char(su).ok_or_else(err)?;
        Ok(Card::new(rank, suit))
    }
}

/// Parse a run of short names, e.g. "AhKh" or "AH KH QH". Whitespace between cards is ignored.
pub fn cards_from_str(s: &str) -> Result<Vec<Card>, CardError> {
    let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
    if chars.len() % 2 != 0 {
        return Err(CardError::InvalidCardIdentifier(s.to_string()));
    }
    chars
        .chunks(2)
        .map(|pair| pair.iter().collect::<String>().parse())
        .collect()
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub fn suit(self) -> Suit {
        self.suit
    }

    pub fn rank(self) -> Rank {
        self.rank
    }

    /// Stable index of this card in [`UNIVERSE`].
    pub const fn index(self) -> u8 {
        self.suit.position() * 13 + (12 - self.rank as u8)
    }

    /// The card at `index` in [`UNIVERSE`], or None when out of range.
    pub fn from_index(index: u8) -> Option<Self> {
        UNIVERSE.get(index as usize).copied()
    }

    const fn from_index_unchecked(index: u8) -> Self {
        let suit = ALL_SUITS[(index / 13) as usize];
        let rank = ALL_RANKS[(12 - index % 13) as usize];
        Self { rank, suit }
    }

    /// Short name, e.g. "AS".
    pub fn short_name(self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn sort_order() {
        for (i, r) in ALL_RANKS.into_iter().sorted_unstable().rev().enumerate() {
            assert_eq!(r.value(), 14u8 - (i as u8));
        }
    }

    #[test]
    fn universe_layout() {
        assert_eq!(UNIVERSE[0], Card::new(Rank::RA, Suit::Heart));
        assert_eq!(UNIVERSE[12], Card::new(Rank::R2, Suit::Heart));
        assert_eq!(UNIVERSE[13], Card::new(Rank::RA, Suit::Diamond));
        assert_eq!(UNIVERSE[51], Card::new(Rank::R2, Suit::Spade));
        assert_eq!(UNIVERSE.iter().unique().count(), DECK_LEN);
        for (i, c) in UNIVERSE.iter().enumerate() {
            assert_eq!(c.index() as usize, i);
            assert_eq!(Card::from_index(i as u8), Some(*c));
        }
        assert_eq!(Card::from_index(52), None);
    }

    #[test]
    fn short_name_round_trip() {
        for c in UNIVERSE {
            let parsed: Card = c.short_name().parse().unwrap();
            assert_eq!(parsed, c);
        }
    }

    #[test]
    fn string_single() {
        let c: Card = "Ah".parse().unwrap();
        assert_eq!(c.rank(), Rank::RA);
        assert_eq!(c.suit(), Suit::Heart);
        assert_eq!(c.to_string(), "AH");
    }

    #[test]
    fn string_multi() {
        let res = cards_from_str("Ah2c6h").unwrap();
        assert_eq!(res.len(), 3);
        let res = cards_from_str("AS KS QS").unwrap();
        assert_eq!(res[2], Card::new(Rank::RQ, Suit::Spade));
        assert!(cards_from_str("").unwrap().is_empty());
    }

    #[test]
    fn invalid_identifiers() {
        for s in ["", "A", "AHS", "1H", "AX", "ZZ", "10H"] {
            assert_eq!(
                s.parse::<Card>(),
                Err(CardError::InvalidCardIdentifier(s.to_string()))
            );
        }
        assert!(cards_from_str("AhK").is_err());
        assert!(cards_from_str("AhKx").is_err());
    }
}

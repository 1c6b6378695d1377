use super::card::{Card, Rank};
use enum_map::{Enum, EnumMap};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum WinState {
    Win,
    Tie,
    Lose,
}

impl From<Ordering> for WinState {
    fn from(o: Ordering) -> Self {
        match o {
            Ordering::Less => WinState::Lose,
            Ordering::Greater => WinState::Win,
            Ordering::Equal => WinState::Tie,
        }
    }
}

#[derive(
    Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Enum, Serialize, Deserialize,
)]
pub enum HandClass {
    HighCard,
    Pair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
    RoyalFlush,
}

/// Classes in the order they must be tested: best first. The predicate for a class only checks
/// that the hand *can* be read as that class, and most weaker predicates also hold for stronger
/// hands (quads contain a pair), so the first match is the answer.
pub const ALL_HAND_CLASSES: [HandClass; 10] = [
    HandClass::RoyalFlush,
    HandClass::StraightFlush,
    HandClass::FourOfAKind,
    HandClass::FullHouse,
    HandClass::Flush,
    HandClass::Straight,
    HandClass::ThreeOfAKind,
    HandClass::TwoPair,
    HandClass::Pair,
    HandClass::HighCard,
];

const WHEEL: [Rank; 5] = [Rank::R2, Rank::R3, Rank::R4, Rank::R5, Rank::RA];

impl HandClass {
    /// Whether the ascending-sorted `cards` satisfy this class's membership test.
    fn matches(self, cards: &[Card; 5]) -> bool {
        match self {
            Self::RoyalFlush => {
                Self::StraightFlush.matches(cards) && cards[0].rank() == Rank::RT
            }
            Self::StraightFlush => is_straight(cards) && is_flush(cards),
            Self::FourOfAKind => longest_run(cards) >= 4,
            Self::FullHouse => run_lengths(cards) == [3, 2],
            Self::Flush => is_flush(cards),
            Self::Straight => is_straight(cards),
            Self::ThreeOfAKind => longest_run(cards) >= 3,
            Self::TwoPair => run_lengths(cards).iter().map(|n| n / 2).sum::<usize>() >= 2,
            Self::Pair => longest_run(cards) >= 2,
            Self::HighCard => true,
        }
    }

    /// Reorder ascending-sorted `cards` into this class's tie-break order: most significant
    /// card first.
    fn canonical(self, cards: &[Card; 5]) -> [Card; 5] {
        let mut out = *cards;
        match self {
            Self::Straight | Self::StraightFlush if is_wheel(cards) => {
                // 5-4-3-2-A: the Ace plays low, so it goes last
                out[..4].reverse();
            }
            _ => {
                // Bigger groups first, then higher ranks. Covers every other class: pairs
                // before kickers, trips before the pair, plain descending when nothing repeats.
                let mut counts: EnumMap<Rank, u8> = EnumMap::default();
                for c in cards {
                    counts[c.rank()] += 1;
                }
                out.sort_by(|a, b| {
                    counts[b.rank()]
                        .cmp(&counts[a.rank()])
                        .then(b.rank().cmp(&a.rank()))
                });
            }
        }
        out
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::HighCard => "High Card",
            Self::Pair => "Pair",
            Self::TwoPair => "Two Pair",
            Self::ThreeOfAKind => "Three of a Kind",
            Self::Straight => "Straight",
            Self::Flush => "Flush",
            Self::FullHouse => "Full House",
            Self::FourOfAKind => "Four of a Kind",
            Self::StraightFlush => "Straight Flush",
            Self::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for HandClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

fn is_flush(cards: &[Card; 5]) -> bool {
    cards.iter().map(|c| c.suit()).all_equal()
}

fn is_wheel(cards: &[Card; 5]) -> bool {
    cards.iter().map(|c| c.rank()).eq(WHEEL)
}

fn is_straight(cards: &[Card; 5]) -> bool {
    // This function requires the given cards are sorted
    if is_wheel(cards) {
        return true;
    }
    cards
        .iter()
        .tuple_windows()
        .all(|(lo, hi)| lo.rank().value() + 1 == hi.rank().value())
}

/// Lengths of the runs of equal adjacent ranks, longest first.
fn run_lengths(cards: &[Card; 5]) -> Vec<usize> {
    cards
        .iter()
        .map(|c| c.rank())
        .dedup_with_count()
        .map(|(n, _)| n)
        .sorted_unstable_by(|a, b| b.cmp(a))
        .collect()
}

fn longest_run(cards: &[Card; 5]) -> usize {
    run_lengths(cards)[0]
}

/// Classify five cards sorted ascending by rank (Ace last).
///
/// Returns the best class the hand satisfies together with the cards reordered for that class's
/// tie-break: the cards that make the class first, kickers after, each part high to low. The
/// reordering only serves comparisons between hands of the same class.
pub fn classify(cards: &[Card; 5]) -> (HandClass, [Card; 5]) {
    let class = ALL_HAND_CLASSES
        .into_iter()
        .find(|class| class.matches(cards))
        .unwrap_or(HandClass::HighCard);
    (class, class.canonical(cards))
}

#[derive(PartialEq, Eq, Debug, Clone, derive_more::Display)]
pub enum HandError {
    #[display(fmt = "Five cards are required, but {} were given", _0)]
    WrongHandSize(usize),
    #[display(fmt = "At least five cards are required, but {} were given", _0)]
    InsufficientCards(usize),
}

impl std::error::Error for HandError {}

/// Exactly five cards, classified.
///
/// Ordering compares the class first, then the canonical ranks position by position. Suits never
/// matter to the ordering, so two hands can compare `Equal` (they split the pot) while still
/// being different sets of cards. Equality (`==`) is set equality of the five cards, rank and
/// suit both, and is therefore stricter than `cmp(..) == Equal`. Code that wants "same
/// strength" must use `cmp`.
#[derive(Debug, Clone, Copy)]
pub struct FiveCardHand {
    cards: [Card; 5],
    class: HandClass,
    key: [u8; 5],
}

impl FiveCardHand {
    pub fn new(cards: &[Card]) -> Result<Self, HandError> {
        match cards.len() {
            5 => Ok(Self::new_unchecked(cards)),
            n => Err(HandError::WrongHandSize(n)),
        }
    }

    /// Like `new` but the caller promises `c` has exactly five cards.
    pub(crate) fn new_unchecked(c: &[Card]) -> Self {
        let mut sorted: [Card; 5] = [c[0], c[1], c[2], c[3], c[4]];
        sorted.sort_unstable_by_key(|c| c.rank());
        let (class, cards) = classify(&sorted);
        let mut key = cards.map(|c| c.rank().value());
        if matches!(class, HandClass::Straight | HandClass::StraightFlush) && is_wheel(&sorted) {
            key[4] = 1;
        }
        Self { cards, class, key }
    }

    pub fn class(&self) -> HandClass {
        self.class
    }

    /// The cards in tie-break order.
    pub fn cards(&self) -> &[Card; 5] {
        &self.cards
    }

    pub fn beats(&self, other: &Self) -> WinState {
        self.cmp(other).into()
    }

    /// A human readable account of the hand, e.g. "Full House, Aces over Kings".
    pub fn describe(&self) -> String {
        let r = |i: usize| self.cards[i].rank().name();
        let p = |i: usize| match self.cards[i].rank() {
            Rank::R6 => "Sixes".to_string(),
            rank => format!("{}s", rank.name()),
        };
        match self.class {
            HandClass::RoyalFlush => "Royal Flush".to_string(),
            HandClass::StraightFlush => format!("Straight Flush, {} high", r(0)),
            HandClass::FourOfAKind => format!("Four of a Kind, {}, {} kicker", p(0), r(4)),
            HandClass::FullHouse => format!("Full House, {} over {}", p(0), p(3)),
            HandClass::Flush => format!("Flush, {} high", r(0)),
            HandClass::Straight => format!("Straight, {} high", r(0)),
            HandClass::ThreeOfAKind => format!("Three of a Kind, {}, {} kicker", p(0), r(3)),
            HandClass::TwoPair => {
                format!("Two Pair, {} and {}, {} kicker", p(0), p(2), r(4))
            }
            HandClass::Pair => format!("Pair of {}, {} kicker", p(0), r(2)),
            HandClass::HighCard => format!("High Card, {} high", r(0)),
        }
    }
}

impl PartialEq for FiveCardHand {
    fn eq(&self, other: &Self) -> bool {
        self.cards.iter().all(|c| other.cards.contains(c))
            && other.cards.iter().all(|c| self.cards.contains(c))
    }
}

impl Eq for FiveCardHand {}

impl PartialOrd for FiveCardHand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FiveCardHand {
    fn cmp(&self, other: &Self) -> Ordering {
        // Easy case first
        match self.class.cmp(&other.class) {
            Ordering::Equal => self.key.cmp(&other.key),
            o => o,
        }
    }
}

impl fmt::Display for FiveCardHand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.cards.iter().join(" "))
    }
}


#[cfg(test)]
mod test_hand_class {
    use super::*;
    use crate::cards::card::{cards_from_str, Suit, ALL_RANKS, ALL_SUITS};

    fn which(cards: &[Card]) -> HandClass {
        FiveCardHand::new(cards).unwrap().class()
    }

    fn hand(s: &'static str) -> FiveCardHand {
        FiveCardHand::new(&cards_from_str(s).unwrap()).unwrap()
    }

    fn ranks_of(h: &FiveCardHand) -> Vec<Rank> {
        h.cards().iter().map(|c| c.rank()).collect()
    }

    #[test]
    fn royal_flushes() {
        for suit in ALL_SUITS {
            let cards =
                [Rank::RT, Rank::RJ, Rank::RQ, Rank::RK, Rank::RA].map(|r| Card::new(r, suit));
            assert_eq!(which(&cards), HandClass::RoyalFlush);
        }
        // mixed suit on the Ace is only a straight
        assert_eq!(hand("THJHQHKHAD").class(), HandClass::Straight);
        assert_eq!(hand("THJHQHKHAH").class(), HandClass::RoyalFlush);
    }

    // All the straight flushes are correctly identified as such.
    #[test]
    fn straight_flushes() {
        for ranks in [
            [Rank::RK, Rank::RQ, Rank::RJ, Rank::RT, Rank::R9],
            [Rank::RQ, Rank::RJ, Rank::RT, Rank::R9, Rank::R8],
            [Rank::RJ, Rank::RT, Rank::R9, Rank::R8, Rank::R7],
            [Rank::RT, Rank::R9, Rank::R8, Rank::R7, Rank::R6],
            [Rank::R9, Rank::R8, Rank::R7, Rank::R6, Rank::R5],
            [Rank::R8, Rank::R7, Rank::R6, Rank::R5, Rank::R4],
            [Rank::R7, Rank::R6, Rank::R5, Rank::R4, Rank::R3],
            [Rank::R6, Rank::R5, Rank::R4, Rank::R3, Rank::R2],
            [Rank::R5, Rank::R4, Rank::R3, Rank::R2, Rank::RA],
        ] {
            for suit in ALL_SUITS {
                let cards = ranks.map(|r| Card::new(r, suit));
                assert_eq!(which(&cards), HandClass::StraightFlush);
            }
        }
    }

    // Test all quads (but not with all kickers)
    #[test]
    fn quads() {
        for rank in ALL_RANKS {
            let extra = Card::new(
                match rank {
                    Rank::R2 => Rank::R3,
                    _ => Rank::R2,
                },
                Suit::Club,
            );
            let cards = [
                Card::new(rank, Suit::Club),
                Card::new(rank, Suit::Diamond),
                Card::new(rank, Suit::Heart),
                Card::new(rank, Suit::Spade),
                extra,
            ];
            assert_eq!(which(&cards), HandClass::FourOfAKind);
        }
    }

    // All combinations of 2 ranks in a full house, but not with all combos of suit too
    #[test]
    fn boat() {
        for rank3 in ALL_RANKS {
            for rank2 in ALL_RANKS {
                if rank2 == rank3 {
                    continue;
                }
                let cards = [
                    Card::new(rank3, Suit::Club),
                    Card::new(rank3, Suit::Diamond),
                    Card::new(rank3, Suit::Heart),
                    Card::new(rank2, Suit::Club),
                    Card::new(rank2, Suit::Diamond),
                ];
                assert_eq!(which(&cards), HandClass::FullHouse);
            }
        }
    }

    // A couple arbitrarily chosen 5 card hands, but all suits
    #[test]
    fn flush() {
        for ranks in [
            [Rank::RA, Rank::RK, Rank::RQ, Rank::RJ, Rank::R2],
            [Rank::RT, Rank::R8, Rank::R6, Rank::R4, Rank::R2],
            [Rank::R2, Rank::R4, Rank::R5, Rank::R6, Rank::R7],
        ] {
            for suit in ALL_SUITS {
                let cards = ranks.map(|r| Card::new(r, suit));
                assert_eq!(which(&cards), HandClass::Flush);
            }
        }
    }

    #[test]
    fn straight() {
        for ranks in [
            [Rank::RA, Rank::RK, Rank::RQ, Rank::RJ, Rank::RT],
            [Rank::RK, Rank::RQ, Rank::RJ, Rank::RT, Rank::R9],
            [Rank::RT, Rank::R9, Rank::R8, Rank::R7, Rank::R6],
            [Rank::R6, Rank::R5, Rank::R4, Rank::R3, Rank::R2],
            [Rank::R5, Rank::R4, Rank::R3, Rank::R2, Rank::RA],
        ] {
            let cards = [
                Card::new(ranks[0], Suit::Club),
                Card::new(ranks[1], Suit::Club),
                Card::new(ranks[2], Suit::Club),
                Card::new(ranks[3], Suit::Club),
                Card::new(ranks[4], Suit::Spade),
            ];
            assert_eq!(which(&cards), HandClass::Straight);
        }
        // no wrapping around the Ace
        assert_eq!(hand("QcKcAd2s3h").class(), HandClass::HighCard);
    }

    #[test]
    fn set() {
        for rank in ALL_RANKS {
            let r2 = match rank {
                Rank::R2 => Rank::R3,
                _ => Rank::R2,
            };
            let r3 = match rank {
                Rank::RA => Rank::RK,
                _ => Rank::RA,
            };
            let cards = [
                Card::new(rank, Suit::Club),
                Card::new(rank, Suit::Diamond),
                Card::new(rank, Suit::Heart),
                Card::new(r2, Suit::Club),
                Card::new(r3, Suit::Club),
            ];
            assert_eq!(which(&cards), HandClass::ThreeOfAKind);
        }
    }

    #[test]
    fn two_pair() {
        for r1 in ALL_RANKS {
            for r2 in ALL_RANKS {
                if r1 == r2 {
                    continue;
                }
                let r3 = if r1 != Rank::RA && r2 != Rank::RA {
                    Rank::RA
                } else if r1 != Rank::RK && r2 != Rank::RK {
                    Rank::RK
                } else {
                    Rank::RQ
                };
                let cards = [
                    Card::new(r1, Suit::Club),
                    Card::new(r1, Suit::Diamond),
                    Card::new(r2, Suit::Club),
                    Card::new(r2, Suit::Diamond),
                    Card::new(r3, Suit::Spade),
                ];
                assert_eq!(which(&cards), HandClass::TwoPair);
            }
        }
    }

    #[test]
    fn pair() {
        for rank in ALL_RANKS {
            let r1 = match rank {
                Rank::R2 => Rank::R3,
                _ => Rank::R2,
            };
            let r2 = match rank {
                Rank::R4 => Rank::R5,
                _ => Rank::R4,
            };
            let r3 = match rank {
                Rank::R6 => Rank::R7,
                _ => Rank::R6,
            };
            let cards = [
                Card::new(r1, Suit::Club),
                Card::new(r2, Suit::Club),
                Card::new(r3, Suit::Club),
                Card::new(rank, Suit::Club),
                Card::new(rank, Suit::Diamond),
            ];
            assert_eq!(which(&cards), HandClass::Pair);
        }
    }

    #[test]
    fn high_card() {
        for ranks in [
            [Rank::RA, Rank::RK, Rank::RQ, Rank::RJ, Rank::R2],
            [Rank::RT, Rank::R8, Rank::R6, Rank::R4, Rank::R2],
            [Rank::R2, Rank::R4, Rank::R5, Rank::R6, Rank::R7],
        ] {
            let cards = [
                Card::new(ranks[0], Suit::Club),
                Card::new(ranks[1], Suit::Club),
                Card::new(ranks[2], Suit::Club),
                Card::new(ranks[3], Suit::Club),
                Card::new(ranks[4], Suit::Diamond),
            ];
            assert_eq!(which(&cards), HandClass::HighCard);
        }
    }

    /// Every hand drawn from nine ranks in all four suits reports the best class whose predicate
    /// holds, and every weaker predicate that should hold does.
    #[test]
    fn reported_class_is_highest_matching() {
        use itertools::Itertools;
        let ranks = [
            Rank::RA,
            Rank::R2,
            Rank::R3,
            Rank::R4,
            Rank::R5,
            Rank::RT,
            Rank::RJ,
            Rank::RQ,
            Rank::RK,
        ];
        let cards: Vec<Card> = ranks
            .iter()
            .cartesian_product(ALL_SUITS.iter())
            .map(|(r, s)| Card::new(*r, *s))
            .collect();
        for combo in cards.into_iter().combinations(5) {
            let mut sorted: [Card; 5] = [combo[0], combo[1], combo[2], combo[3], combo[4]];
            sorted.sort_unstable_by_key(|c| c.rank());
            let (class, _) = classify(&sorted);
            let best = ALL_HAND_CLASSES
                .into_iter()
                .filter(|c| c.matches(&sorted))
                .max()
                .unwrap();
            assert_eq!(class, best, "{:?}", sorted);
            if class == HandClass::FourOfAKind {
                assert!(HandClass::Pair.matches(&sorted));
                assert!(HandClass::ThreeOfAKind.matches(&sorted));
            }
            if class == HandClass::FullHouse {
                assert!(HandClass::TwoPair.matches(&sorted));
            }
        }
    }

    #[test]
    fn canonical_orders() {
        let r = |s| ranks_of(&hand(s));
        use Rank::*;
        assert_eq!(r("3c9dAh3s7d"), [R3, R3, RA, R9, R7]);
        assert_eq!(r("3c9dAh3s9h"), [R9, R9, R3, R3, RA]);
        assert_eq!(r("AcKdKhKs2d"), [RK, RK, RK, RA, R2]);
        assert_eq!(r("2c2dKhKsKd"), [RK, RK, RK, R2, R2]);
        assert_eq!(r("2c2d2h2sKd"), [R2, R2, R2, R2, RK]);
        assert_eq!(r("5c3dAh4s2d"), [R5, R4, R3, R2, RA]);
        assert_eq!(r("5c3d6h4s2d"), [R6, R5, R4, R3, R2]);
        assert_eq!(r("5c3dJc4c2c"), [RJ, R5, R4, R3, R2]);
    }

    #[test]
    fn wheel_ranks_below_six_high() {
        let wheel = hand("AH2H3H4H5H");
        let six = hand("2H3H4H5H6H");
        assert_eq!(wheel.class(), HandClass::StraightFlush);
        assert_eq!(six.class(), HandClass::StraightFlush);
        assert!(wheel < six);
        assert!(hand("As2d3c4h5s") < hand("2s3d4c5h6s"));
        // a wheel still beats trips
        assert!(hand("As2d3c4h5s") > hand("AsAdAc4h5s"));
    }

    #[test]
    fn beats_straight_flush() {
        assert_eq!(hand("AcKcQcJcTc").beats(&hand("AdKdQdJdTd")), WinState::Tie);
        assert_eq!(hand("KcQcJcTc9c").beats(&hand("KdQdJdTd9d")), WinState::Tie);
        assert_eq!(hand("5c4c3c2cAc").beats(&hand("5d4d3d2dAd")), WinState::Tie);
        assert_eq!(hand("KcQcJcTc9c").beats(&hand("QdJdTd9d8d")), WinState::Win);
        assert_eq!(hand("6c5c4c3c2c").beats(&hand("5d4d3d2dAd")), WinState::Win);
        assert_eq!(hand("5d4d3d2dAd").beats(&hand("KcQcJcTc9c")), WinState::Lose);
        assert_eq!(hand("AcKcQcJcTc").beats(&hand("KdQdJdTd9d")), WinState::Win);
    }

    #[test]
    fn beats_quads() {
        // impossible from one deck, but the logic doesn't care
        assert_eq!(hand("2c2d2h2s3c").beats(&hand("2c2d2h2s3d")), WinState::Tie);
        assert_eq!(hand("4c4d4h4s3c").beats(&hand("3c3d3h3s2d")), WinState::Win);
        assert_eq!(hand("4c4d4h4s5c").beats(&hand("4c4d4h4s3c")), WinState::Win);
        assert_eq!(hand("3c3d3h3sAd").beats(&hand("4c4d4h4s2c")), WinState::Lose);
    }

    #[test]
    fn beats_full_house() {
        assert_eq!(hand("AcAdAhKcKd").beats(&hand("AdAhAsKhKs")), WinState::Tie);
        assert_eq!(hand("4c4d4h3s3c").beats(&hand("3c3d3hAsAd")), WinState::Win);
        assert_eq!(hand("4c4d4h5s5c").beats(&hand("4c4d4h3s3c")), WinState::Win);
        assert_eq!(hand("2c2d2hAsAc").beats(&hand("3c3d3h2s2c")), WinState::Lose);
    }

    #[test]
    fn beats_flush() {
        assert_eq!(hand("AsKsQsJs2s").beats(&hand("AdKdQdJd2d")), WinState::Tie);
        assert_eq!(hand("AsKsQsJs3s").beats(&hand("AdKdQdJd2d")), WinState::Win);
        assert_eq!(hand("As6s5s4s3s").beats(&hand("Kd7d6d5d4d")), WinState::Win);
        assert_eq!(hand("Kd7d6d5d4d").beats(&hand("As6s5s4s3s")), WinState::Lose);
    }

    #[test]
    fn beats_straight() {
        assert_eq!(hand("AsKsQsJsTd").beats(&hand("AcKcQcJcTs")), WinState::Tie);
        assert_eq!(hand("AsKsQsJsTd").beats(&hand("KcQcJcTc9s")), WinState::Win);
        assert_eq!(hand("AsKsQsJsTd").beats(&hand("Ac2c3c4c5s")), WinState::Win);
        assert_eq!(hand("Ac2c3c4c5s").beats(&hand("6s5s4s3s2d")), WinState::Lose);
    }

    #[test]
    fn beats_set() {
        assert_eq!(hand("AcAdAh4s3d").beats(&hand("AsAcAd4c3s")), WinState::Tie);
        assert_eq!(hand("AcAdAh4s3d").beats(&hand("AsAcAd3c2s")), WinState::Win);
        assert_eq!(hand("9c9d9hTsJd").beats(&hand("9s9c9d2c3s")), WinState::Win);
        assert_eq!(hand("9c9d9h6s3d").beats(&hand("9s9c9d6c4s")), WinState::Lose);
        assert_eq!(hand("2c2d2hAsKd").beats(&hand("3s3c3d4c5s")), WinState::Lose);
    }

    #[test]
    fn beats_two_pair() {
        assert_eq!(hand("AsAdKsKdTd").beats(&hand("AcAdKcKdTs")), WinState::Tie);
        assert_eq!(hand("AsAdKsKdJd").beats(&hand("AcAdKcKdTs")), WinState::Win);
        assert_eq!(hand("AsAdKsKdJd").beats(&hand("AcAdQcQdKs")), WinState::Win);
        assert_eq!(hand("KsKd2s2dAd").beats(&hand("KcKd3c3d2s")), WinState::Lose);
    }

    #[test]
    fn beats_pair() {
        assert_eq!(hand("AcAd5h4s3d").beats(&hand("AcAd5s4c3h")), WinState::Tie);
        assert_eq!(hand("AcAdKh4s3d").beats(&hand("AcAd5h4s3d")), WinState::Win);
        assert_eq!(hand("AcAd5h4s3d").beats(&hand("AcAd5h4s2d")), WinState::Win);
        assert_eq!(hand("2c2d6h4s3d").beats(&hand("2c2d5h4s3d")), WinState::Win);
        assert_eq!(hand("2c2dAhKsQd").beats(&hand("3c3d4h5s7d")), WinState::Lose);
    }

    #[test]
    fn beats_high_card() {
        assert_eq!(hand("KcQdJhTs5c").beats(&hand("KdQhJsTc5d")), WinState::Tie);
        assert_eq!(hand("Ac7d6h5s4d").beats(&hand("Ac6d5h4s3d")), WinState::Win);
        assert_eq!(hand("AcKdQhJs7d").beats(&hand("AcKdQhJs3d")), WinState::Win);
        assert_eq!(hand("7c6d5h3s2d").beats(&hand("8c7d6h4s3d")), WinState::Lose);
    }

    #[test]
    fn classes_are_ordered() {
        for w in ALL_HAND_CLASSES.windows(2) {
            assert!(w[0] > w[1]);
        }
        assert!(hand("2c3d4h5s7d") < hand("2c2d4h5s7d"));
        assert!(hand("AcAdAhAsKd") < hand("2c3c4c5c6c"));
        assert!(hand("9c9d9hKsKd") > hand("AcKcQcJc9c"));
    }
}

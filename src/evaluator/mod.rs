pub mod best_hand;
pub mod combinations;
pub mod comparator;
pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub(crate) mod rank_groups;
pub(crate) mod straight_info;
pub(crate) mod suit_info;

pub use best_hand::{best_hand, evaluate_seven, made_hand};
pub use comparator::compare;

use crate::cards::{Card, Rank};
use crate::hand::HandError;
use core::cmp::Ordering;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Poker hand category from weakest to strongest. The discriminant is the
/// first comparison key: a lower category never beats a higher one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::HighCard,
        Category::Pair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
        Category::RoyalFlush,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::Pair => "Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }

    /// Straight, straight flush or royal flush: categories where the Ace may play low.
    pub const fn is_straight_like(self) -> bool {
        matches!(self, Category::Straight | Category::StraightFlush | Category::RoyalFlush)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The result of evaluating five cards.
///
/// `cards` holds the five cards with the category-defining cards first
/// (`key_cards`) and the tie-breaking remainder after them (`kickers`), so the
/// two always add up to five. Key cards are ordered by group size then rank
/// (trips before the pair in a full house); straights run from the top card
/// down, with the wheel ordered `5 4 3 2 A`.
#[derive(Debug, Clone, Copy)]
pub struct EvaluatedHand {
    category: Category,
    cards: [Card; 5],
    key_len: u8,
}

impl EvaluatedHand {
    pub(crate) fn new(category: Category, cards: [Card; 5], key_len: usize) -> Self {
        debug_assert!((1..=5).contains(&key_len));
        Self { category, cards, key_len: key_len as u8 }
    }

    pub const fn category(&self) -> Category {
        self.category
    }

    /// All five cards, key cards first.
    pub const fn cards(&self) -> &[Card; 5] {
        &self.cards
    }

    pub fn key_cards(&self) -> &[Card] {
        &self.cards[..self.key_len as usize]
    }

    pub fn kickers(&self) -> &[Card] {
        &self.cards[self.key_len as usize..]
    }

    /// A-2-3-4-5 straight (or straight flush), where the Ace plays low.
    pub fn is_wheel(&self) -> bool {
        self.category.is_straight_like()
            && self.cards[0].rank() == Rank::Five
            && self.cards[4].rank() == Rank::Ace
    }

    /// Highest card that counts for this hand (Five for the wheel).
    pub fn top_rank(&self) -> Rank {
        self.cards[0].rank()
    }
}

impl Ord for EvaluatedHand {
    fn cmp(&self, other: &Self) -> Ordering {
        comparator::compare(self, other)
    }
}

impl PartialOrd for EvaluatedHand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for EvaluatedHand {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for EvaluatedHand {}

impl fmt::Display for EvaluatedHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = self.key_cards();
        let top = self.top_rank();
        match self.category {
            Category::RoyalFlush => write!(f, "Royal Flush"),
            Category::StraightFlush => write!(f, "Straight Flush, {} high", top.name()),
            Category::FourOfAKind => write!(f, "Four of a Kind, {}", top.plural()),
            Category::FullHouse => {
                write!(f, "Full House, {} over {}", top.plural(), key[3].rank().plural())
            }
            Category::Flush => write!(f, "Flush, {} high", top.name()),
            Category::Straight => write!(f, "Straight, {} high", top.name()),
            Category::ThreeOfAKind => write!(f, "Three of a Kind, {}", top.plural()),
            Category::TwoPair => {
                write!(f, "Two Pair, {} and {}", top.plural(), key[2].rank().plural())
            }
            Category::Pair => write!(f, "Pair of {}", top.plural()),
            Category::HighCard => write!(f, "High Card, {}", top.name()),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    #[error("hand evaluation needs exactly 5 cards, got {0}")]
    InvalidInputSize(usize),
    #[error("need at least 5 cards to make a hand, got {0}")]
    InsufficientCards(usize),
    #[error("at most 7 cards can make a hand, got {0}")]
    TooManyCards(usize),
    #[error("card {0} appears more than once")]
    DuplicateCard(Card),
    #[error("invalid hand: {0}")]
    InvalidHand(#[from] HandError),
}

/// Evaluate exactly five distinct cards.
///
/// ```
/// use holdem_advisor::cards::parse_cards;
/// use holdem_advisor::evaluator::{evaluate, Category, EvalError};
///
/// let hand = evaluate(&parse_cards("Ah 2h 3d 4c 5s").unwrap()).unwrap();
/// assert_eq!(hand.category(), Category::Straight);
/// assert!(hand.is_wheel());
///
/// let four = parse_cards("Ah 2h 3d 4c").unwrap();
/// assert_eq!(evaluate(&four).unwrap_err(), EvalError::InvalidInputSize(4));
/// ```
pub fn evaluate(cards: &[Card]) -> Result<EvaluatedHand, EvalError> {
    let five: [Card; 5] =
        cards.try_into().map_err(|_| EvalError::InvalidInputSize(cards.len()))?;
    if let Some(dup) = first_duplicate(&five) {
        return Err(EvalError::DuplicateCard(dup));
    }
    Ok(evaluate_five(&five))
}

/// Evaluate five cards known to be distinct; detects the category and orders
/// key cards and kickers.
pub fn evaluate_five(cards: &[Card; 5]) -> EvaluatedHand {
    use detector::DETECTORS;
    use hand_analysis::HandAnalysis;

    let analysis = HandAnalysis::new(cards);

    for detector in DETECTORS.iter() {
        if detector.detect(&analysis) {
            return detector.build_evaluation(&analysis);
        }
    }

    unreachable!("HighCard detector should always match")
}

pub(crate) fn first_duplicate(cards: &[Card]) -> Option<Card> {
    let mut seen = HashSet::with_capacity(cards.len());
    cards.iter().copied().find(|c| !seen.insert(*c))
}

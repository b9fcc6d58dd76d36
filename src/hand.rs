use crate::cards::{parse_cards, Card};
use crate::deck::Deck;
use crate::evaluator::first_duplicate;
use std::fmt;
use std::str::FromStr;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("duplicate cards in hole cards")]
    DuplicateHoleCards,
    #[error("card {0} is already in play")]
    DuplicateCard(Card),
    #[error("too many hole cards: {0}")]
    TooManyHoleCards(usize),
    #[error("too many board cards: {0}")]
    TooManyBoardCards(usize),
    #[error("expected exactly two hole cards, got {0}")]
    HoleCount(usize),
    #[error("card parse error: {0}")]
    CardParse(String),
}

/// A player's two private hole cards.
///
/// ```
/// use holdem_advisor::cards::{Card, Rank, Suit};
/// use holdem_advisor::hand::HoleCards;
///
/// let hole = HoleCards::try_new(
///     Card::new(Rank::Ace, Suit::Spades),
///     Card::new(Rank::King, Suit::Spades),
/// ).unwrap();
/// assert!(hole.is_suited());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoleCards(Card, Card);

impl HoleCards {
    pub fn try_new(a: Card, b: Card) -> Result<Self, HandError> {
        if a == b {
            return Err(HandError::DuplicateHoleCards);
        }
        Ok(Self(a, b))
    }

    pub fn from_slice(slice: &[Card]) -> Result<Self, HandError> {
        if slice.len() != 2 {
            return Err(HandError::HoleCount(slice.len()));
        }
        Self::try_new(slice[0], slice[1])
    }

    pub fn as_array(&self) -> [Card; 2] {
        [self.0, self.1]
    }

    /// Both cards, higher rank first.
    pub fn ordered(&self) -> (Card, Card) {
        if self.1.rank() > self.0.rank() {
            (self.1, self.0)
        } else {
            (self.0, self.1)
        }
    }

    pub fn is_pair(&self) -> bool {
        self.0.rank() == self.1.rank()
    }

    pub fn is_suited(&self) -> bool {
        self.0.suit() == self.1.suit()
    }
}

impl FromStr for HoleCards {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Self::from_slice(&cards)
    }
}

/// Community cards on the board (flop, turn, river).
///
/// ```
/// use holdem_advisor::hand::Board;
///
/// let board: Board = "2c 3c 4c".parse().unwrap();
/// assert_eq!(board.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    cards: Vec<Card>,
}

impl Board {
    pub const MAX: usize = 5;

    pub fn try_new(cards: Vec<Card>) -> Result<Self, HandError> {
        if cards.len() > Self::MAX {
            return Err(HandError::TooManyBoardCards(cards.len()));
        }
        if let Some(dup) = first_duplicate(&cards) {
            return Err(HandError::DuplicateCard(dup));
        }
        Ok(Self { cards })
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    pub fn street(&self) -> Street {
        Street::from_board_len(self.cards.len())
    }
}

impl FromStr for Board {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Board::try_new(cards)
    }
}

/// Betting round implied by the number of community cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
pub enum Street {
    PreFlop,
    /// One or two community cards: the flop is being entered.
    PartialBoard,
    Flop,
    Turn,
    River,
}

impl Street {
    pub const fn from_board_len(n: usize) -> Self {
        match n {
            0 => Street::PreFlop,
            1 | 2 => Street::PartialBoard,
            3 => Street::Flop,
            4 => Street::Turn,
            _ => Street::River,
        }
    }

    /// Community cards still to be dealt on this street.
    pub const fn cards_to_come(self) -> usize {
        match self {
            Street::PreFlop => 5,
            Street::PartialBoard => 3,
            Street::Flop => 2,
            Street::Turn => 1,
            Street::River => 0,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Street::PreFlop => "Pre-flop",
            Street::PartialBoard => "Flop (incomplete)",
            Street::Flop => "Flop",
            Street::Turn => "Turn",
            Street::River => "River",
        }
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything the advisor needs to know about a decision point: up to two hole
/// cards, up to five community cards, the pot and the bet to face.
///
/// All cards are distinct; constructors and editors reject duplicates.
///
/// ```
/// use holdem_advisor::hand::{Situation, Street};
///
/// let s = Situation::parse("As Ah", "Kd 7c 2h", 100, 50).unwrap();
/// assert_eq!(s.street(), Street::Flop);
/// assert_eq!(s.remaining_deck().len(), 47);
/// assert!(Situation::parse("As Ah", "As 7c 2h", 0, 0).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Situation {
    hole: Vec<Card>,
    board: Board,
    pot: u64,
    bet: u64,
}

impl Situation {
    pub fn try_new(hole: Vec<Card>, board: Board, pot: u64, bet: u64) -> Result<Self, HandError> {
        if hole.len() > 2 {
            return Err(HandError::TooManyHoleCards(hole.len()));
        }
        let s = Self { hole, board, pot, bet };
        if let Some(dup) = first_duplicate(&s.seen_cards()) {
            return Err(HandError::DuplicateCard(dup));
        }
        Ok(s)
    }

    /// Build from text, e.g. `parse("As Kd", "2c 3c 4c", 100, 20)`.
    pub fn parse(hole: &str, board: &str, pot: u64, bet: u64) -> Result<Self, HandError> {
        let hole = parse_cards(hole).map_err(|e| HandError::CardParse(e.to_string()))?;
        let board: Board = board.parse()?;
        Self::try_new(hole, board, pot, bet)
    }

    pub fn hole(&self) -> &[Card] {
        &self.hole
    }

    /// The hole cards once both are known.
    pub fn hole_cards(&self) -> Option<HoleCards> {
        HoleCards::from_slice(&self.hole).ok()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn pot(&self) -> u64 {
        self.pot
    }

    pub fn bet(&self) -> u64 {
        self.bet
    }

    pub fn street(&self) -> Street {
        self.board.street()
    }

    /// Hole cards followed by the board.
    pub fn seen_cards(&self) -> Vec<Card> {
        let mut cards = Vec::with_capacity(self.hole.len() + self.board.len());
        cards.extend_from_slice(&self.hole);
        cards.extend_from_slice(self.board.as_slice());
        cards
    }

    pub fn remaining_deck(&self) -> Deck {
        Deck::remaining(&self.seen_cards())
    }

    /// Add a card: hole cards fill first, then the board.
    pub fn with_card(&self, card: Card) -> Result<Self, HandError> {
        if self.seen_cards().contains(&card) {
            return Err(HandError::DuplicateCard(card));
        }
        let mut next = self.clone();
        if next.hole.len() < 2 {
            next.hole.push(card);
        } else if next.board.len() < Board::MAX {
            next.board.cards.push(card);
        } else {
            return Err(HandError::TooManyBoardCards(Board::MAX + 1));
        }
        Ok(next)
    }

    /// Remove the most recently added card (board first, then hole).
    pub fn without_last_card(&self) -> Self {
        let mut next = self.clone();
        if next.board.cards.pop().is_none() {
            next.hole.pop();
        }
        next
    }

    pub fn with_pot(&self, pot: u64) -> Self {
        Self { pot, ..self.clone() }
    }

    pub fn with_bet(&self, bet: u64) -> Self {
        Self { bet, ..self.clone() }
    }
}

//! Incomplete-hand detection: flush, straight, set and quads draws.
//!
//! A draw is only reported while the made hand is still below the draw's
//! target category, and only when at least one out remains in the deck.

use crate::cards::{Card, Rank, Suit};
use crate::deck::Deck;
use crate::evaluator::suit_info::SuitInfo;
use crate::evaluator::{Category, EvaluatedHand};
use crate::hand::Street;
use std::fmt;

/// Hit probabilities for a number of outs, as percentages in `[0, 100]`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DrawOdds {
    /// Chance the next card is an out.
    pub next: f64,
    /// Chance of hitting by the river.
    pub total: f64,
}

impl DrawOdds {
    /// ```
    /// use holdem_advisor::draws::DrawOdds;
    ///
    /// let odds = DrawOdds::compute(9, 47, 2);
    /// assert!((odds.next - 19.15).abs() < 0.01);
    /// assert!((odds.total - 34.97).abs() < 0.01);
    /// assert_eq!(DrawOdds::compute(0, 47, 2), DrawOdds::default());
    /// ```
    pub fn compute(outs: usize, remaining: usize, to_come: usize) -> Self {
        if remaining == 0 || outs == 0 {
            return Self::default();
        }
        let (o, r) = (outs as f64, remaining as f64);
        let next = o / r * 100.0;
        let total = match to_come {
            2 if remaining < 2 || remaining.saturating_sub(outs) < 1 => (4.0 * o).min(100.0),
            2 => (1.0 - ((r - o) / r) * ((r - o - 1.0) / (r - 1.0))) * 100.0,
            _ => next,
        };
        Self { next, total }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StraightDrawKind {
    None,
    Gutshot,
    OpenEnded,
    Both,
}

impl StraightDrawKind {
    fn from_flags(open_ended: bool, gutshot: bool) -> Self {
        match (open_ended, gutshot) {
            (true, true) => StraightDrawKind::Both,
            (true, false) => StraightDrawKind::OpenEnded,
            (false, true) => StraightDrawKind::Gutshot,
            (false, false) => StraightDrawKind::None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            StraightDrawKind::None => "None",
            StraightDrawKind::Gutshot => "Gutshot",
            StraightDrawKind::OpenEnded => "Open-ended",
            StraightDrawKind::Both => "Open-ended + Gutshot",
        }
    }
}

impl fmt::Display for StraightDrawKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FlushDraw {
    pub suit: Suit,
    pub outs: usize,
    pub odds: DrawOdds,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StraightDraw {
    pub kind: StraightDrawKind,
    /// Ranks that complete a straight, highest first.
    pub ranks: Vec<Rank>,
    pub outs: usize,
    pub odds: DrawOdds,
}

/// A set or quads draw: the ranks that would improve and the cards left of them.
#[derive(Debug, Clone, PartialEq)]
pub struct RankDraw {
    pub ranks: Vec<Rank>,
    pub outs: usize,
    pub odds: DrawOdds,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Draws {
    pub flush: Option<FlushDraw>,
    pub straight: Option<StraightDraw>,
    pub set: Option<RankDraw>,
    pub quads: Option<RankDraw>,
}

impl Draws {
    pub fn is_empty(&self) -> bool {
        self.flush.is_none() && self.straight.is_none() && self.set.is_none() && self.quads.is_none()
    }
}

/// Find every open draw for `hole` + `board`, given the current made hand.
///
/// ```
/// use holdem_advisor::cards::parse_cards;
/// use holdem_advisor::draws::{find_draws, StraightDrawKind};
/// use holdem_advisor::evaluator::made_hand;
///
/// let hole = parse_cards("8s 9s").unwrap();
/// let board = parse_cards("Th Jd 2c").unwrap();
/// let all: Vec<_> = hole.iter().chain(&board).copied().collect();
/// let draws = find_draws(&hole, &board, made_hand(&all).as_ref());
/// let straight = draws.straight.unwrap();
/// assert_eq!(straight.kind, StraightDrawKind::OpenEnded);
/// assert_eq!(straight.outs, 8);
/// ```
pub fn find_draws(hole: &[Card], board: &[Card], made: Option<&EvaluatedHand>) -> Draws {
    let seen: Vec<Card> = hole.iter().chain(board).copied().collect();
    let deck = Deck::remaining(&seen);
    let to_come = Street::from_board_len(board.len()).cards_to_come();
    let made = made.map_or(Category::HighCard, EvaluatedHand::category);
    let odds = |outs| DrawOdds::compute(outs, deck.len(), to_come);

    let flush = (made < Category::Flush)
        .then(|| flush_draw_suit(&seen))
        .flatten()
        .map(|suit| (suit, deck.count_suit(suit)))
        .filter(|&(_, outs)| outs > 0)
        .map(|(suit, outs)| FlushDraw { suit, outs, odds: odds(outs) });

    let straight = (made < Category::Straight)
        .then(|| straight_draw(&seen, &deck))
        .filter(|(_, _, outs)| *outs > 0)
        .map(|(kind, ranks, outs)| StraightDraw { kind, ranks, outs, odds: odds(outs) });

    let (set_ranks, quad_ranks) = paired_ranks(hole, board);
    let rank_draw = |ranks: Vec<Rank>| {
        let outs: usize = ranks.iter().map(|&r| deck.count_rank(r)).sum();
        (outs > 0).then(|| RankDraw { ranks, outs, odds: odds(outs) })
    };
    let set = (made < Category::ThreeOfAKind).then(|| rank_draw(set_ranks)).flatten();
    let quads = (made < Category::FourOfAKind).then(|| rank_draw(quad_ranks)).flatten();

    Draws { flush, straight, set, quads }
}

/// Suit held by exactly four of the visible cards.
pub fn flush_draw_suit(cards: &[Card]) -> Option<Suit> {
    SuitInfo::from_cards(cards).suits_with_count(4).next()
}

/// Scan every five-value window from A-5 up to T-A. A window with exactly one
/// missing value is an open-ended draw when the gap sits at either end and a
/// gutshot otherwise. Returns the kind, the completing ranks and the number of
/// deck cards of those ranks.
pub fn straight_draw(cards: &[Card], deck: &Deck) -> (StraightDrawKind, Vec<Rank>, usize) {
    let present = cards.iter().fold(0u16, |mask, c| {
        let mask = mask | (1 << c.value());
        if c.rank() == Rank::Ace {
            mask | (1 << 1)
        } else {
            mask
        }
    });

    let mut open_ended = false;
    let mut gutshot = false;
    let mut missing = Vec::new();

    for start in 1u8..=10 {
        let gaps: Vec<u8> = (start..start + 5).filter(|&v| (present & (1 << v)) == 0).collect();
        let &[gap] = gaps.as_slice() else { continue };
        if gap == start || gap == start + 4 {
            open_ended = true;
        } else {
            gutshot = true;
        }
        if let Some(rank) = Rank::from_value(gap) {
            if !missing.contains(&rank) {
                missing.push(rank);
            }
        }
    }

    missing.sort_by(|a, b| b.cmp(a));
    let outs = missing.iter().map(|&r| deck.count_rank(r)).sum();
    (StraightDrawKind::from_flags(open_ended, gutshot), missing, outs)
}

/// Ranks one card away from a set, and ranks one card away from quads.
///
/// A pocket pair with no board match draws to a set; with one board match it
/// draws to quads. Otherwise each hole card matched once on the board draws to
/// a set, and matched twice draws to quads.
fn paired_ranks(hole: &[Card], board: &[Card]) -> (Vec<Rank>, Vec<Rank>) {
    let on_board = |r: Rank| board.iter().filter(|c| c.rank() == r).count();
    let mut set = Vec::new();
    let mut quads = Vec::new();

    match hole {
        [a, b] if a.rank() == b.rank() => match on_board(a.rank()) {
            0 => set.push(a.rank()),
            1 => quads.push(a.rank()),
            _ => {}
        },
        _ => {
            for r in hole.iter().map(|c| c.rank()) {
                match on_board(r) {
                    1 if !set.contains(&r) => set.push(r),
                    2 if !quads.contains(&r) => quads.push(r),
                    _ => {}
                }
            }
        }
    }
    (set, quads)
}

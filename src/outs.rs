use crate::cards::{Card, Rank};
use crate::deck::Deck;
use crate::draws::DrawOdds;
use crate::evaluator::{best_hand, EvaluatedHand};
use crate::hand::Street;

/// Unseen cards that improve the current best hand, with hit probabilities.
#[derive(Debug, Clone, PartialEq)]
pub struct OutsReport {
    /// The improving cards, in deck order.
    pub cards: Vec<Card>,
    /// Out count per rank, highest rank first.
    pub by_rank: Vec<(Rank, usize)>,
    pub remaining: usize,
    pub cards_to_come: usize,
    /// Chance the next card is an out, in percent.
    pub prob_next: f64,
    /// Rule of 4 on the flop, rule of 2 on the turn, capped at 100.
    pub rule_of_thumb: f64,
    /// Exact chance of at least one out by the river.
    pub prob_to_come: f64,
}

impl OutsReport {
    pub fn count(&self) -> usize {
        self.cards.len()
    }
}

/// Count outs on the flop or turn. Returns `None` without exactly two hole
/// cards or with a board other than three or four cards.
///
/// A card is an out when adding it makes a strictly better best hand.
///
/// ```
/// use holdem_advisor::cards::parse_cards;
/// use holdem_advisor::outs::count_outs;
///
/// let hole = parse_cards("8s 9s").unwrap();
/// let board = parse_cards("Th Jd 2c").unwrap();
/// let report = count_outs(&hole, &board).unwrap();
/// assert!(report.count() >= 8);
/// assert!(count_outs(&hole, &board[..2]).is_none());
/// ```
pub fn count_outs(hole: &[Card], board: &[Card]) -> Option<OutsReport> {
    if hole.len() != 2 || !(3..=4).contains(&board.len()) {
        return None;
    }
    let mut seen: Vec<Card> = hole.iter().chain(board).copied().collect();
    let current = best_hand(&seen).ok()?;
    let deck = Deck::remaining(&seen);

    let cards: Vec<Card> = deck
        .as_slice()
        .iter()
        .copied()
        .filter(|&c| improves(&mut seen, c, &current))
        .collect();

    let by_rank: Vec<(Rank, usize)> = Rank::ALL
        .iter()
        .rev()
        .map(|&r| (r, cards.iter().filter(|c| c.rank() == r).count()))
        .filter(|&(_, n)| n > 0)
        .collect();

    let remaining = deck.len();
    let cards_to_come = Street::from_board_len(board.len()).cards_to_come();
    let outs = cards.len();
    let multiplier = if cards_to_come == 2 { 4.0 } else { 2.0 };
    let odds = DrawOdds::compute(outs, remaining, cards_to_come);

    Some(OutsReport {
        cards,
        by_rank,
        remaining,
        cards_to_come,
        prob_next: odds.next,
        rule_of_thumb: (outs as f64 * multiplier).min(100.0),
        prob_to_come: odds.total,
    })
}

fn improves(seen: &mut Vec<Card>, card: Card, current: &EvaluatedHand) -> bool {
    seen.push(card);
    let better = best_hand(seen).map_or(false, |next| next > *current);
    seen.pop();
    better
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn outs(hole: &str, board: &str) -> OutsReport {
        count_outs(&parse_cards(hole).unwrap(), &parse_cards(board).unwrap()).unwrap()
    }

    #[test]
    fn needs_two_hole_cards_and_flop_or_turn() {
        let hole = parse_cards("As Ah").unwrap();
        assert!(count_outs(&hole[..1], &parse_cards("2c 3c 4d").unwrap()).is_none());
        assert!(count_outs(&hole, &parse_cards("2c 3c").unwrap()).is_none());
        assert!(count_outs(&hole, &parse_cards("2c 3c 4d 5h Kd").unwrap()).is_none());
    }

    #[test]
    fn quads_improve_only_through_the_kicker() {
        let r = outs("Qc Qd", "Qh Qs 7c 7d");
        assert_eq!(r.count(), 24);
        assert_eq!(r.by_rank.first(), Some(&(Rank::Ace, 4)));
        assert_eq!(r.by_rank.last(), Some(&(Rank::Eight, 4)));
        assert!(r.by_rank.iter().all(|&(rank, _)| rank != Rank::Queen));
        assert_eq!(r.remaining, 46);
        assert_eq!(r.cards_to_come, 1);
        assert_eq!(r.rule_of_thumb, 48.0);
        assert_eq!(r.prob_next, r.prob_to_come);
    }

    #[test]
    fn flop_rule_of_four_and_exact_odds() {
        // Aces and kings fill up; queen down to eight upgrades the seven kicker.
        let r = outs("Ah Kh", "Ad Kd 7c");
        assert_eq!(r.count(), 24);
        assert_eq!(r.by_rank.first(), Some(&(Rank::Ace, 2)));
        assert_eq!(r.by_rank.last(), Some(&(Rank::Eight, 4)));
        assert_eq!(r.cards_to_come, 2);
        assert_eq!(r.remaining, 47);
        assert_eq!(r.rule_of_thumb, 96.0);
        assert!((r.prob_next - 24.0 / 47.0 * 100.0).abs() < 1e-9);
        assert!(r.prob_to_come > r.prob_next);
        assert!(r.prob_to_come < 100.0);
    }

    #[test]
    fn every_card_improves_high_card_hits_the_fallback() {
        let r = outs("Ah Kh", "7h 2h 9c");
        assert_eq!(r.count(), 47);
        assert_eq!(r.remaining, 47);
        assert_eq!(r.cards_to_come, 2);
        assert_eq!(r.prob_next, 100.0);
        assert_eq!(r.prob_to_come, 100.0);
        assert_eq!(r.rule_of_thumb, 100.0);
    }

    #[test]
    fn by_rank_sums_to_count() {
        let r = outs("8s 9s", "Th Jd 2c");
        let total: usize = r.by_rank.iter().map(|(_, n)| n).sum();
        assert_eq!(total, r.count());
        assert!(r.by_rank.windows(2).all(|w| w[0].0 > w[1].0));
    }

    #[test]
    fn rule_of_thumb_is_capped() {
        let r = outs("2c 7d", "9h Js 4c");
        assert!(r.rule_of_thumb <= 100.0);
    }
}

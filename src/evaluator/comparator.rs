use super::EvaluatedHand;
use crate::cards::{Card, Rank};
use core::cmp::Ordering;

/// Total order over evaluated hands: category, then key cards pairwise, then
/// kickers pairwise. In a wheel the Ace counts as 1.
///
/// ```
/// use holdem_advisor::cards::parse_cards;
/// use holdem_advisor::evaluator::{compare, evaluate};
/// use std::cmp::Ordering;
///
/// let wheel = evaluate(&parse_cards("Ah 2d 3c 4s 5h").unwrap()).unwrap();
/// let six_high = evaluate(&parse_cards("2h 3d 4c 5s 6h").unwrap()).unwrap();
/// assert_eq!(compare(&wheel, &six_high), Ordering::Less);
/// ```
pub fn compare(a: &EvaluatedHand, b: &EvaluatedHand) -> Ordering {
    a.category()
        .cmp(&b.category())
        .then_with(|| compare_cards(a, a.key_cards(), b, b.key_cards()))
        .then_with(|| compare_cards(a, a.kickers(), b, b.kickers()))
}

fn compare_cards(a: &EvaluatedHand, xs: &[Card], b: &EvaluatedHand, ys: &[Card]) -> Ordering {
    xs.iter()
        .zip(ys)
        .map(|(x, y)| rank_value(a, x.rank()).cmp(&rank_value(b, y.rank())))
        .find(|o| o.is_ne())
        .unwrap_or(Ordering::Equal)
}

fn rank_value(hand: &EvaluatedHand, rank: Rank) -> u8 {
    if hand.is_wheel() {
        rank.low_value()
    } else {
        rank.value()
    }
}

use super::combinations::Combinations;
use super::{evaluate_five, first_duplicate, EvalError, EvaluatedHand};
use crate::cards::Card;

/// Best 5-card hand out of 5 to 7 distinct cards.
///
/// Every 5-card subset is evaluated and the maximum under [`super::compare`]
/// is kept.
///
/// ```
/// use holdem_advisor::cards::parse_cards;
/// use holdem_advisor::evaluator::{best_hand, Category, EvalError};
///
/// let cards = parse_cards("As Ah Qc Jd 9h 3s 2c").unwrap();
/// assert_eq!(best_hand(&cards).unwrap().category(), Category::Pair);
///
/// let short = parse_cards("As Ah Qc").unwrap();
/// assert_eq!(best_hand(&short).unwrap_err(), EvalError::InsufficientCards(3));
/// ```
pub fn best_hand(cards: &[Card]) -> Result<EvaluatedHand, EvalError> {
    match cards.len() {
        n if n < 5 => return Err(EvalError::InsufficientCards(n)),
        n if n > 7 => return Err(EvalError::TooManyCards(n)),
        _ => {}
    }
    if let Some(dup) = first_duplicate(cards) {
        return Err(EvalError::DuplicateCard(dup));
    }
    Ok(best_of(cards))
}

/// Sentinel form of [`best_hand`]: `None` until there is a hand to make.
pub fn made_hand(cards: &[Card]) -> Option<EvaluatedHand> {
    best_hand(cards).ok()
}

/// Best hand of seven cards known to be distinct. Used on the simulator's hot path.
pub fn evaluate_seven(cards: &[Card; 7]) -> EvaluatedHand {
    best_of(cards)
}

fn best_of(cards: &[Card]) -> EvaluatedHand {
    let mut best: Option<EvaluatedHand> = None;

    for idx in Combinations::<5>::new(cards.len()) {
        let eval = evaluate_five(&idx.map(|i| cards[i]));
        if best.as_ref().map_or(true, |b| eval > *b) {
            best = Some(eval);
        }
    }

    best.unwrap_or_else(|| evaluate_five(&[cards[0], cards[1], cards[2], cards[3], cards[4]]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{parse_cards, Rank};
    use crate::evaluator::Category;

    fn cards(s: &str) -> Vec<Card> {
        parse_cards(s).unwrap()
    }

    #[test]
    fn rejects_bad_sizes_and_duplicates() {
        assert_eq!(best_hand(&cards("As Ks")).unwrap_err(), EvalError::InsufficientCards(2));
        assert_eq!(
            best_hand(&cards("As Ks Qs Js Ts 9s 8s 7s")).unwrap_err(),
            EvalError::TooManyCards(8)
        );
        assert!(matches!(
            best_hand(&cards("As Ks Qs Js As")),
            Err(EvalError::DuplicateCard(_))
        ));
    }

    #[test]
    fn made_hand_is_none_before_five_cards() {
        assert!(made_hand(&cards("As Ah Kd")).is_none());
        assert!(made_hand(&cards("As Ah Kd 7c 2h")).is_some());
    }

    #[test]
    fn finds_flush_hidden_among_seven() {
        let h = best_hand(&cards("2h 9h Kc Kd Jh 4h 6h")).unwrap();
        assert_eq!(h.category(), Category::Flush);
        assert_eq!(h.top_rank(), Rank::Jack);
    }

    #[test]
    fn straight_flush_needs_straight_inside_flush_suit() {
        // 5-9 straight across suits plus five hearts that are not consecutive
        let h = best_hand(&cards("5h 6h 7c 8h 9h 2h Kd")).unwrap();
        assert_eq!(h.category(), Category::Flush);
    }

    #[test]
    fn six_card_straight_takes_the_top_run() {
        let h = best_hand(&cards("Ah 2d 3c 4s 5h 6c")).unwrap();
        assert_eq!(h.category(), Category::Straight);
        assert_eq!(h.top_rank(), Rank::Six);
    }

    #[test]
    fn two_trips_make_full_house() {
        let h = best_hand(&cards("Kc Kd Kh 7s 7c 7d 2h")).unwrap();
        assert_eq!(h.category(), Category::FullHouse);
        assert_eq!(h.to_string(), "Full House, Kings over Sevens");
    }

    #[test]
    fn best_hand_is_idempotent() {
        let cs = cards("Qs Qh 9c 9d 4s 4h Ac");
        let a = best_hand(&cs).unwrap();
        let b = best_hand(&cs).unwrap();
        assert_eq!(a.cards(), b.cards());
        assert_eq!(a.category(), Category::TwoPair);
        assert_eq!(a.kickers()[0].rank(), Rank::Ace);
    }

    #[test]
    fn evaluate_seven_matches_best_hand() {
        let cs = cards("As Ks Qs Js Ts 2c 3d");
        let arr: [Card; 7] = cs.clone().try_into().unwrap();
        assert_eq!(evaluate_seven(&arr).category(), Category::RoyalFlush);
        assert_eq!(evaluate_seven(&arr), best_hand(&cs).unwrap());
    }
}

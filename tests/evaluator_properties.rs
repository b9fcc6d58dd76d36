use holdem_advisor::cards::{Card, Rank, Suit};
use holdem_advisor::deck::UNIVERSE;
use holdem_advisor::draws::find_draws;
use holdem_advisor::evaluator::combinations::Combinations;
use holdem_advisor::evaluator::{best_hand, compare, evaluate_five, evaluate_seven, Category};
use proptest::prelude::*;
use std::cmp::Ordering;

fn distinct_cards(n: usize) -> impl Strategy<Value = Vec<Card>> {
    prop::sample::subsequence(UNIVERSE.to_vec(), n).prop_shuffle()
}

fn five_of(cards: &[Card]) -> [Card; 5] {
    [cards[0], cards[1], cards[2], cards[3], cards[4]]
}

fn rank(v: u8) -> Rank {
    Rank::from_value(v).unwrap()
}

fn straight_cards(top: u8) -> [Card; 5] {
    let suits = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades, Suit::Clubs];
    let mut out = [Card::new(Rank::Two, Suit::Clubs); 5];
    for (i, slot) in out.iter_mut().enumerate() {
        // top - 4 .. top; a top of 5 starts from the Ace (value 1)
        *slot = Card::new(rank(top - 4 + i as u8), suits[i]);
    }
    out
}

fn flush_rank_set() -> impl Strategy<Value = Vec<Rank>> {
    prop::collection::btree_set(2u8..=14u8, 5)
        .prop_filter("non-straight ranks", |set| {
            let vals: Vec<u8> = set.iter().copied().collect();
            let is_wheel = vals == [2, 3, 4, 5, 14];
            let is_straight = vals.windows(2).all(|w| w[1] == w[0] + 1);
            !(is_straight || is_wheel)
        })
        .prop_map(|set| set.into_iter().rev().map(rank).collect())
}

proptest! {
    #[test]
    fn comparison_is_a_total_order(a in distinct_cards(5), b in distinct_cards(5), c in distinct_cards(5)) {
        let ea = evaluate_five(&five_of(&a));
        let eb = evaluate_five(&five_of(&b));
        let ec = evaluate_five(&five_of(&c));

        prop_assert_eq!(compare(&ea, &eb), compare(&eb, &ea).reverse());
        prop_assert_eq!(compare(&ea, &ea), Ordering::Equal);
        if ea >= eb && eb >= ec { prop_assert!(ea >= ec); }
        if ea.category() != eb.category() {
            prop_assert_eq!(compare(&ea, &eb), ea.category().cmp(&eb.category()));
        }
    }

    #[test]
    fn evaluation_ignores_card_order(cards in distinct_cards(5)) {
        let forward = evaluate_five(&five_of(&cards));
        let mut reversed = five_of(&cards);
        reversed.reverse();
        let backward = evaluate_five(&reversed);
        prop_assert_eq!(forward.category(), backward.category());
        prop_assert_eq!(compare(&forward, &backward), Ordering::Equal);
    }

    #[test]
    fn best_of_seven_beats_every_five_card_subset(cards in distinct_cards(7)) {
        let seven: [Card; 7] = cards.clone().try_into().unwrap();
        let best = evaluate_seven(&seven);
        for idx in Combinations::<5>::new(7) {
            let five = idx.map(|i| cards[i]);
            prop_assert!(best >= evaluate_five(&five));
        }
        prop_assert_eq!(best_hand(&cards).unwrap(), best);
        for card in best.cards() {
            prop_assert!(cards.contains(card));
        }
    }

    #[test]
    fn straight_ordering_respects_top_card(top_hi in 6u8..=14u8, top_lo in 5u8..=13u8) {
        prop_assume!(top_hi > top_lo);
        let e_hi = evaluate_five(&straight_cards(top_hi));
        let e_lo = evaluate_five(&straight_cards(top_lo));
        prop_assert_eq!(e_hi.category(), Category::Straight);
        prop_assert_eq!(e_lo.category(), Category::Straight);
        prop_assert!(e_hi > e_lo);
    }

    #[test]
    fn wheel_is_lowest_straight(top in 6u8..=14u8) {
        let wheel = evaluate_five(&straight_cards(5));
        let higher = evaluate_five(&straight_cards(top));
        prop_assert!(wheel.is_wheel());
        prop_assert!(higher > wheel);
    }

    #[test]
    fn flush_kicker_ordering(a in flush_rank_set(), b in flush_rank_set()) {
        let hand = |ranks: &[Rank]| {
            let cards: Vec<Card> = ranks.iter().map(|&r| Card::new(r, Suit::Hearts)).collect();
            evaluate_five(&five_of(&cards))
        };
        let (e_a, e_b) = (hand(&a), hand(&b));
        prop_assert_eq!(e_a.category(), Category::Flush);
        prop_assert_eq!(e_b.category(), Category::Flush);
        // ranks are already highest first
        match a.cmp(&b) {
            Ordering::Greater => prop_assert!(e_a > e_b),
            Ordering::Less => prop_assert!(e_a < e_b),
            Ordering::Equal => prop_assert_eq!(e_a, e_b),
        }
    }

    #[test]
    fn draw_outs_never_exceed_the_unseen_cards(cards in distinct_cards(6), board_len in 3usize..=4) {
        let (hole, rest) = cards.split_at(2);
        let board = &rest[..board_len];
        let made = best_hand(&cards[..2 + board_len]).ok();
        let draws = find_draws(hole, board, made.as_ref());
        let unseen = 52 - 2 - board_len;
        for outs in [
            draws.flush.as_ref().map(|d| d.outs),
            draws.straight.as_ref().map(|d| d.outs),
            draws.set.as_ref().map(|d| d.outs),
            draws.quads.as_ref().map(|d| d.outs),
        ].into_iter().flatten() {
            prop_assert!(outs <= unseen);
        }
        if let Some(f) = &draws.flush {
            prop_assert!(f.outs <= 9);
        }
    }
}

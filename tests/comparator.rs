use holdem_advisor::cards::parse_cards;
use holdem_advisor::evaluator::{compare, evaluate, EvaluatedHand};
use std::cmp::Ordering;

fn hand(s: &str) -> EvaluatedHand {
    evaluate(&parse_cards(s).unwrap()).unwrap()
}

#[test]
fn higher_category_wins() {
    assert_eq!(compare(&hand("2c 3d 4h 5s 7c"), &hand("2d 2h 3c 4s 5d")), Ordering::Less);
    assert_eq!(compare(&hand("2h 4h 6h 8h Th"), &hand("Ac Kd Qh Js Tc")), Ordering::Greater);
}

#[test]
fn pair_kicker_decides() {
    assert_eq!(compare(&hand("Ah Ad Kc 7s 2d"), &hand("As Ac Qd 7h 2c")), Ordering::Greater);
    assert_eq!(compare(&hand("Ah Ad Kc 7s 3d"), &hand("As Ac Kd 7h 2c")), Ordering::Greater);
}

#[test]
fn two_pair_compares_top_pair_first() {
    assert_eq!(compare(&hand("Kh Kd 3c 3s 2d"), &hand("Qs Qc Jd Jh Ac")), Ordering::Greater);
    assert_eq!(compare(&hand("Kh Kd 4c 4s 2d"), &hand("Ks Kc 3d 3h Ac")), Ordering::Greater);
}

#[test]
fn full_house_compares_trips_before_pair() {
    assert_eq!(compare(&hand("3h 3d 3c As Ad"), &hand("4s 4c 4d 2h 2c")), Ordering::Less);
}

#[test]
fn flush_decided_by_last_card() {
    assert_eq!(compare(&hand("Ah Jh 9h 6h 3h"), &hand("As Js 9s 6s 2s")), Ordering::Greater);
}

#[test]
fn wheel_is_the_lowest_straight() {
    assert_eq!(compare(&hand("Ac 2d 3h 4s 5c"), &hand("2c 3d 4h 5s 6c")), Ordering::Less);
    assert_eq!(compare(&hand("Ah 2h 3h 4h 5h"), &hand("2s 3s 4s 5s 6s")), Ordering::Less);
}

#[test]
fn suits_never_break_ties() {
    let a = hand("Ah Kh 7s 5c 2d");
    let b = hand("Ad Kd 7c 5s 2h");
    assert_eq!(compare(&a, &b), Ordering::Equal);
    assert_eq!(a, b);
}

#[test]
fn ord_sorts_hands_by_strength() {
    let mut hands = vec![
        hand("Ah Ad Kc 7s 2d"),
        hand("As Ks Qs Js Ts"),
        hand("2c 3d 4h 5s 7c"),
        hand("9c 9d 9h 4s 4c"),
    ];
    hands.sort();
    let labels: Vec<String> = hands.iter().map(ToString::to_string).collect();
    assert_eq!(labels[0], "High Card, Seven");
    assert_eq!(labels[3], "Royal Flush");
}

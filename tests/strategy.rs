use holdem_advisor::config::AdvisorConfig;
use holdem_advisor::engine::{analyze, EquityState};
use holdem_advisor::evaluator::Category;
use holdem_advisor::hand::Situation;
use holdem_advisor::strategy::Action;

fn advise(hole: &str, board: &str, pot: u64, bet: u64) -> Option<Action> {
    advise_with(AdvisorConfig::default(), hole, board, pot, bet)
}

fn advise_with(config: AdvisorConfig, hole: &str, board: &str, pot: u64, bet: u64) -> Option<Action> {
    let situation = Situation::parse(hole, board, pot, bet).unwrap();
    let config = config.with_trials(2000).with_seed(17);
    analyze(&situation, &config).unwrap().action
}

#[test]
fn nothing_to_advise_without_hole_cards() {
    assert_eq!(advise("", "", 100, 50), Some(Action::NotApplicable));
    assert_eq!(advise("As", "", 100, 50), Some(Action::NotApplicable));
}

#[test]
fn check_when_there_is_no_bet() {
    assert_eq!(advise("7c 2d", "", 10, 0), Some(Action::Check));
    assert_eq!(advise("7c 2d", "Kh 9s 4d", 10, 0), Some(Action::Check));
    assert_eq!(advise("7c 2d", "Kh 9s 4d 3c 3s", 10, 0), Some(Action::Check));
}

#[test]
fn preflop_follows_the_tier_table() {
    assert_eq!(advise("As Ah", "", 15, 10), Some(Action::Raise));
    assert_eq!(advise("Jh Th", "", 15, 10), Some(Action::Call));
    assert_eq!(advise("7c 2d", "", 15, 10), Some(Action::Fold));
}

#[test]
fn value_raise_with_a_set() {
    let situation = Situation::parse("7c 7d", "7h Kd 2s", 100, 50).unwrap();
    let report = analyze(&situation, &AdvisorConfig::default().with_trials(2000).with_seed(17)).unwrap();
    assert_eq!(report.analysis.made.map(|h| h.category()), Some(Category::ThreeOfAKind));
    assert!(report.equity.estimate().unwrap().equity() > 70.0);
    assert_eq!(report.action, Some(Action::Raise));
}

#[test]
fn flop_draw_raise_with_the_nut_flush_draw() {
    assert_eq!(advise("Ah Kh", "7h 2h 9c", 100, 50), Some(Action::Raise));
}

#[test]
fn fold_when_the_price_is_too_high() {
    assert_eq!(advise("3c 2d", "Kh 9s 4d 8c", 10, 1000), Some(Action::Fold));
}

#[test]
fn river_has_no_equity_and_folds_by_default() {
    let situation = Situation::parse("Ah Kh", "Qh 7h 2h 3c 9d", 100, 50).unwrap();
    let report = analyze(&situation, &AdvisorConfig::default()).unwrap();
    assert_eq!(report.equity, EquityState::NotApplicable);
    assert_eq!(report.action, Some(Action::Fold));
}

#[test]
fn river_call_category_is_configurable() {
    let config = AdvisorConfig { river_call_category: Some(Category::Flush), ..AdvisorConfig::default() };
    assert_eq!(advise_with(config, "Ah Kh", "Qh 7h 2h 3c 9d", 100, 50), Some(Action::Call));
}

#[test]
fn pot_odds_are_reported_only_with_a_bet() {
    let config = AdvisorConfig::default().with_trials(100).with_seed(1);
    let with_bet = analyze(&Situation::parse("As Ah", "Kd 7c 2h", 100, 50).unwrap(), &config).unwrap();
    assert!((with_bet.analysis.pot_odds.unwrap() - 33.333).abs() < 0.01);
    let no_bet = analyze(&Situation::parse("As Ah", "Kd 7c 2h", 100, 0).unwrap(), &config).unwrap();
    assert!(no_bet.analysis.pot_odds.is_none());
}

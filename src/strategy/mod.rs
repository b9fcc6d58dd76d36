//! Action advice: pre-flop tiers, post-flop equity against pot odds.

pub mod preflop;

use crate::config::AdvisorConfig;
use crate::evaluator::Category;
use crate::hand::HoleCards;
use preflop::{PreflopTable, Tier};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Check,
    Call,
    Fold,
    Raise,
    NotApplicable,
}

impl Action {
    pub const fn label(self) -> &'static str {
        match self {
            Action::Check => "Check",
            Action::Call => "Call",
            Action::Fold => "Fold",
            Action::Raise => "Raise",
            Action::NotApplicable => "N/A",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The signals a decision is made from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spot {
    pub hole: Option<HoleCards>,
    pub board_len: usize,
    pub bet: u64,
    /// `None` without a bet.
    pub pot_odds: Option<f64>,
    /// Equity percentage; 0 where it is not computed (the river).
    pub equity: f64,
    /// Made-hand category once five cards are known.
    pub made: Option<Category>,
}

/// Decision procedure with its thresholds and pre-flop table.
#[derive(Debug, Clone, PartialEq)]
pub struct Advisor {
    pub value_raise_equity: f64,
    pub value_raise_category: Category,
    pub draw_raise_equity: f64,
    pub river_call_category: Option<Category>,
    pub preflop: PreflopTable,
}

impl Advisor {
    pub fn from_config(config: &AdvisorConfig) -> Self {
        Self {
            value_raise_equity: config.value_raise_equity,
            value_raise_category: config.value_raise_category,
            draw_raise_equity: config.draw_raise_equity,
            river_call_category: config.river_call_category,
            preflop: config.preflop.clone(),
        }
    }

    pub fn preflop_tier(&self, hole: &HoleCards) -> Tier {
        self.preflop.classify(hole)
    }

    /// Recommend an action for `spot`.
    ///
    /// ```
    /// use holdem_advisor::evaluator::Category;
    /// use holdem_advisor::strategy::{Action, Advisor, Spot};
    ///
    /// let advisor = Advisor::default();
    /// let spot = Spot {
    ///     hole: Some("As Ah".parse().unwrap()),
    ///     board_len: 3,
    ///     bet: 50,
    ///     pot_odds: Some(33.3),
    ///     equity: 40.0,
    ///     made: Some(Category::Pair),
    /// };
    /// assert_eq!(advisor.recommend(&spot), Action::Call);
    /// assert_eq!(advisor.recommend(&Spot { bet: 0, pot_odds: None, ..spot }), Action::Check);
    /// ```
    pub fn recommend(&self, spot: &Spot) -> Action {
        let Some(hole) = spot.hole else {
            return Action::NotApplicable;
        };
        if spot.bet == 0 {
            return Action::Check;
        }
        if spot.board_len == 0 {
            return match self.preflop_tier(&hole) {
                Tier::VeryStrong | Tier::Strong => Action::Raise,
                Tier::Medium => Action::Call,
                Tier::Weak | Tier::VeryWeak => Action::Fold,
            };
        }

        if let Some(made) = spot.made {
            if made >= self.value_raise_category && spot.equity >= self.value_raise_equity {
                return Action::Raise;
            }
            if spot.board_len == 3
                && made < self.value_raise_category
                && spot.equity >= self.draw_raise_equity
            {
                return Action::Raise;
            }
            if spot.board_len == 5 && self.river_call_category.is_some_and(|c| made >= c) {
                return Action::Call;
            }
        }

        if spot.equity >= spot.pot_odds.unwrap_or(0.0) {
            Action::Call
        } else {
            Action::Fold
        }
    }
}

impl Default for Advisor {
    fn default() -> Self {
        Self::from_config(&AdvisorConfig::default())
    }
}

//! Pre-flop starting-hand tiers.
//!
//! The tiers come from an ordered rule table (first match wins) rather than
//! from an equity calculation, so the table is plain data that can be loaded
//! from configuration.

use crate::cards::Rank;
use crate::evaluator::combinations::binomial;
use crate::hand::HoleCards;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Starting-hand strength, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    VeryWeak,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl Tier {
    pub const fn label(self) -> &'static str {
        match self {
            Tier::VeryWeak => "Very weak",
            Tier::Weak => "Weak",
            Tier::Medium => "Medium",
            Tier::Strong => "Strong",
            Tier::VeryStrong => "Very strong",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    Pair,
    Suited,
    /// Two ranks, two suits.
    Offsuit,
    Any,
}

impl Shape {
    pub fn of(hole: &HoleCards) -> Shape {
        if hole.is_pair() {
            Shape::Pair
        } else if hole.is_suited() {
            Shape::Suited
        } else {
            Shape::Offsuit
        }
    }

    fn admits(self, actual: Shape) -> bool {
        self == Shape::Any || self == actual
    }
}

/// Inclusive rank bounds for the higher and lower hole card, a shape and an
/// optional exact rank gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandPattern {
    pub high: (Rank, Rank),
    pub low: (Rank, Rank),
    pub shape: Shape,
    #[serde(default)]
    pub gap: Option<u8>,
}

impl HandPattern {
    pub const fn exact(high: Rank, low: Rank, shape: Shape) -> Self {
        Self { high: (high, high), low: (low, low), shape, gap: None }
    }

    pub const fn range(high: (Rank, Rank), low: (Rank, Rank), shape: Shape) -> Self {
        Self { high, low, shape, gap: None }
    }

    pub const fn with_gap(mut self, gap: u8) -> Self {
        self.gap = Some(gap);
        self
    }

    pub fn matches(&self, hole: &HoleCards) -> bool {
        let (hi, lo) = hole.ordered();
        let (hi, lo) = (hi.rank(), lo.rank());
        let within = |r: Rank, (min, max): (Rank, Rank)| min <= r && r <= max;
        self.shape.admits(Shape::of(hole))
            && within(hi, self.high)
            && within(lo, self.low)
            && self.gap.map_or(true, |g| hi.value() - lo.value() == g)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreflopRule {
    pub tier: Tier,
    pub pattern: HandPattern,
}

/// Ordered tier rules; the first matching rule decides, otherwise `fallback`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreflopTable {
    pub rules: Vec<PreflopRule>,
    pub fallback: Tier,
}

impl PreflopTable {
    /// ```
    /// use holdem_advisor::hand::HoleCards;
    /// use holdem_advisor::strategy::preflop::{PreflopTable, Tier};
    ///
    /// let table = PreflopTable::default();
    /// let tier = |s: &str| table.classify(&s.parse::<HoleCards>().unwrap());
    /// assert_eq!(tier("Ah Ad"), Tier::VeryStrong);
    /// assert_eq!(tier("7c 2d"), Tier::VeryWeak);
    /// assert_eq!(tier("9h 8h"), Tier::Medium);
    /// ```
    pub fn classify(&self, hole: &HoleCards) -> Tier {
        self.rules
            .iter()
            .find(|rule| rule.pattern.matches(hole))
            .map_or(self.fallback, |rule| rule.tier)
    }
}

impl Default for PreflopTable {
    fn default() -> Self {
        use Rank::*;
        use Shape::*;

        let rule = |tier, pattern| PreflopRule { tier, pattern };
        let very_weak = |hi, lo| rule(Tier::VeryWeak, HandPattern::exact(hi, lo, Offsuit));

        let mut rules = vec![
            very_weak(Seven, Two),
            very_weak(Eight, Two),
            very_weak(Eight, Three),
            very_weak(Seven, Three),
            very_weak(Ten, Two),
            very_weak(Nine, Five),
            // face card with a low card, offsuit
            rule(Tier::VeryWeak, HandPattern::range((Ace, Ace), (Two, Five), Offsuit)),
            rule(Tier::VeryWeak, HandPattern::range((King, King), (Two, Four), Offsuit)),
            rule(Tier::VeryWeak, HandPattern::range((Queen, Queen), (Two, Three), Offsuit)),
            very_weak(Jack, Two),
        ];

        rules.extend([
            rule(Tier::VeryStrong, HandPattern::range((King, Ace), (King, Ace), Pair)),
            rule(Tier::Strong, HandPattern::range((Ten, Queen), (Ten, Queen), Pair)),
            rule(Tier::Strong, HandPattern::range((Ace, Ace), (Queen, King), Suited)),
            rule(Tier::Strong, HandPattern::exact(Ace, King, Offsuit)),
            rule(Tier::Strong, HandPattern::exact(King, Queen, Suited)),
            rule(Tier::Medium, HandPattern::range((Seven, Nine), (Seven, Nine), Pair)),
            // suited connectors 65s through JTs
            rule(Tier::Medium, HandPattern::range((Six, Jack), (Five, Ten), Suited).with_gap(1)),
            rule(Tier::Medium, HandPattern::range((Ace, Ace), (Eight, King), Suited)),
            rule(Tier::Medium, HandPattern::range((Jack, Ace), (Nine, Ace), Suited)),
            rule(Tier::Medium, HandPattern::exact(Ace, Queen, Offsuit)),
            rule(Tier::Medium, HandPattern::range((King, Ace), (Ten, Ace), Offsuit)),
            rule(Tier::Medium, HandPattern::range((Queen, Ace), (Jack, Ace), Offsuit)),
        ]);

        Self { rules, fallback: Tier::Weak }
    }
}

/// How a starting hand sits among the 1326 possible two-card deals.
#[derive(Debug, Clone, PartialEq)]
pub struct StartingHand {
    /// `"AKs"`, `"72o"`, `"QQ"`.
    pub notation: String,
    pub shape: Shape,
    /// Deals that produce this exact notation.
    pub combos: u64,
    /// `combos` as a percentage of all deals.
    pub probability: f64,
    /// Chance of being dealt any hand of the same shape.
    pub shape_probability: f64,
    pub tier: Tier,
}

impl StartingHand {
    pub fn new(hole: &HoleCards, table: &PreflopTable) -> Self {
        let (hi, lo) = hole.ordered();
        let shape = Shape::of(hole);
        let total = binomial(52, 2) as f64;

        let (suffix, combos, shape_combos) = match shape {
            Shape::Pair => ("", binomial(4, 2), 13 * binomial(4, 2)),
            Shape::Suited => ("s", 4, 4 * binomial(13, 2)),
            _ => ("o", 12, 12 * binomial(13, 2)),
        };

        Self {
            notation: format!("{}{}{}", hi.rank(), lo.rank(), suffix),
            shape,
            combos,
            probability: combos as f64 / total * 100.0,
            shape_probability: shape_combos as f64 / total * 100.0,
            tier: table.classify(hole),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tier(s: &str) -> Tier {
        PreflopTable::default().classify(&s.parse().unwrap())
    }

    #[test]
    fn named_trash_hands_are_very_weak() {
        for hand in ["7c 2d", "2h 8s", "3c 8d", "Td 2c", "9s 5h", "Ac 4d", "Kd 3s", "Qh 2c", "Js 2d"] {
            assert_eq!(tier(hand), Tier::VeryWeak, "{hand}");
        }
    }

    #[test]
    fn same_ranks_suited_are_not_very_weak() {
        assert_eq!(tier("7c 2c"), Tier::Weak);
        assert_eq!(tier("Ac 4c"), Tier::Weak);
    }

    #[test]
    fn premium_and_strong_hands() {
        assert_eq!(tier("Ah As"), Tier::VeryStrong);
        assert_eq!(tier("Kh Ks"), Tier::VeryStrong);
        assert_eq!(tier("Qh Qs"), Tier::Strong);
        assert_eq!(tier("Th Ts"), Tier::Strong);
        assert_eq!(tier("As Ks"), Tier::Strong);
        assert_eq!(tier("As Qs"), Tier::Strong);
        assert_eq!(tier("As Kd"), Tier::Strong);
        assert_eq!(tier("Kd Qd"), Tier::Strong);
    }

    #[test]
    fn medium_hands() {
        for hand in ["9h 9s", "7c 7d", "Jh Th", "6s 5s", "As 8s", "Kh Jh", "Jd 9d", "As Qd", "Kc Td", "Qc Jd"] {
            assert_eq!(tier(hand), Tier::Medium, "{hand}");
        }
    }

    #[test]
    fn everything_else_is_weak() {
        for hand in ["6h 6s", "2c 2d", "Qs 9d", "8s 6s", "Kd 9c", "5s 4s", "Ah 7s"] {
            assert_eq!(tier(hand), Tier::Weak, "{hand}");
        }
    }

    #[test]
    fn starting_hand_profile() {
        let table = PreflopTable::default();
        let aa = StartingHand::new(&"Ah Ad".parse().unwrap(), &table);
        assert_eq!(aa.notation, "AA");
        assert_eq!(aa.combos, 6);
        assert!((aa.probability - 0.45).abs() < 0.01);
        assert!((aa.shape_probability - 5.88).abs() < 0.01);

        let aks = StartingHand::new(&"Ks As".parse().unwrap(), &table);
        assert_eq!(aks.notation, "AKs");
        assert!((aks.shape_probability - 23.53).abs() < 0.01);

        let seven_deuce = StartingHand::new(&"2d 7c".parse().unwrap(), &table);
        assert_eq!(seven_deuce.notation, "72o");
        assert_eq!(seven_deuce.combos, 12);
        assert_eq!(seven_deuce.tier, Tier::VeryWeak);
    }

    #[test]
    fn table_round_trips_through_json() {
        let table = PreflopTable::default();
        let json = serde_json::to_string(&table).unwrap();
        let back: PreflopTable = serde_json::from_str(&json).unwrap();
        assert_eq!(back, table);
    }
}

use super::hand_analysis::HandAnalysis;
use crate::cards::Rank;
use crate::evaluator::{Category, EvaluatedHand};

/// Strategy pattern: each category detector knows how to detect and build its evaluation.
pub trait CategoryDetector: Sync {
    fn detect(&self, analysis: &HandAnalysis) -> bool;
    fn build_evaluation(&self, analysis: &HandAnalysis) -> EvaluatedHand;
}

// ============================================================================
// Detector Implementations (in priority order: highest to lowest)
// ============================================================================

/// Royal Flush: Ten to Ace, all one suit
pub struct RoyalFlushDetector;

impl CategoryDetector for RoyalFlushDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        StraightFlushDetector.detect(analysis) && analysis.straight_info.top_rank == Some(Rank::Ace)
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> EvaluatedHand {
        analysis.build_evaluation(Category::RoyalFlush, analysis.straight_cards(), 5)
    }
}

/// Straight Flush: the straight must hold within the flush suit
pub struct StraightFlushDetector;

impl CategoryDetector for StraightFlushDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.suit_info.is_flush() && analysis.straight_info.is_straight
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> EvaluatedHand {
        analysis.build_evaluation(Category::StraightFlush, analysis.straight_cards(), 5)
    }
}

/// Four of a Kind: quad is key, one kicker
pub struct FourOfAKindDetector;

impl CategoryDetector for FourOfAKindDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.quad().is_some()
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> EvaluatedHand {
        analysis.build_evaluation(Category::FourOfAKind, analysis.grouped_cards(), 4)
    }
}

/// Full House: trips then pair, all five are key cards
pub struct FullHouseDetector;

impl CategoryDetector for FullHouseDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.has_full_house()
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> EvaluatedHand {
        analysis.build_evaluation(Category::FullHouse, analysis.grouped_cards(), 5)
    }
}

pub struct FlushDetector;

impl CategoryDetector for FlushDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.suit_info.is_flush()
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> EvaluatedHand {
        analysis.build_evaluation(Category::Flush, analysis.sorted_cards, 5)
    }
}

pub struct StraightDetector;

impl CategoryDetector for StraightDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.straight_info.is_straight
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> EvaluatedHand {
        analysis.build_evaluation(Category::Straight, analysis.straight_cards(), 5)
    }
}

pub struct ThreeOfAKindDetector;

impl CategoryDetector for ThreeOfAKindDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.trips().is_some() && !analysis.rank_groups.has_full_house()
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> EvaluatedHand {
        analysis.build_evaluation(Category::ThreeOfAKind, analysis.grouped_cards(), 3)
    }
}

pub struct TwoPairDetector;

impl CategoryDetector for TwoPairDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.pairs().len() == 2
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> EvaluatedHand {
        analysis.build_evaluation(Category::TwoPair, analysis.grouped_cards(), 4)
    }
}

pub struct OnePairDetector;

impl CategoryDetector for OnePairDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.pairs().len() == 1
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> EvaluatedHand {
        analysis.build_evaluation(Category::Pair, analysis.grouped_cards(), 2)
    }
}

/// High Card: fallback, the top card is key
pub struct HighCardDetector;

impl CategoryDetector for HighCardDetector {
    fn detect(&self, _analysis: &HandAnalysis) -> bool {
        true
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> EvaluatedHand {
        analysis.build_evaluation(Category::HighCard, analysis.sorted_cards, 1)
    }
}

// ============================================================================
// Static detector list (in priority order)
// ============================================================================

pub const DETECTORS: [&dyn CategoryDetector; 10] = [
    &RoyalFlushDetector,
    &StraightFlushDetector,
    &FourOfAKindDetector,
    &FullHouseDetector,
    &FlushDetector,
    &StraightDetector,
    &ThreeOfAKindDetector,
    &TwoPairDetector,
    &OnePairDetector,
    &HighCardDetector,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{parse_cards, Card};

    fn analyze(s: &str) -> HandAnalysis {
        let cards: [Card; 5] = parse_cards(s).unwrap().try_into().unwrap();
        HandAnalysis::new(&cards)
    }

    fn first_match(analysis: &HandAnalysis) -> Category {
        DETECTORS
            .iter()
            .find(|d| d.detect(analysis))
            .map(|d| d.build_evaluation(analysis).category())
            .unwrap()
    }

    #[test]
    fn royal_requires_ace_high_straight_flush() {
        assert!(RoyalFlushDetector.detect(&analyze("As Ks Qs Js Ts")));
        assert!(!RoyalFlushDetector.detect(&analyze("Ks Qs Js Ts 9s")));
        assert!(!RoyalFlushDetector.detect(&analyze("As 2s 3s 4s 5s")));
        assert!(!RoyalFlushDetector.detect(&analyze("Ah Ks Qs Js Ts")));
    }

    #[test]
    fn straight_flush_over_flush_and_straight() {
        let a = analyze("9h 8h 7h 6h 5h");
        assert!(FlushDetector.detect(&a));
        assert!(StraightDetector.detect(&a));
        assert_eq!(first_match(&a), Category::StraightFlush);
    }

    #[test]
    fn wheel_straight_flush_is_not_royal() {
        assert_eq!(first_match(&analyze("As 2s 3s 4s 5s")), Category::StraightFlush);
    }

    #[test]
    fn three_of_a_kind_excludes_full_house() {
        let fh = analyze("Ks Kh Kd Qc Qs");
        assert!(!ThreeOfAKindDetector.detect(&fh));
        assert_eq!(first_match(&fh), Category::FullHouse);
    }

    #[test]
    fn quads_build_key_of_four() {
        let eval = FourOfAKindDetector.build_evaluation(&analyze("As Ah Ad Ac Ks"));
        assert_eq!(eval.category(), Category::FourOfAKind);
        assert_eq!(eval.key_cards().len(), 4);
        assert_eq!(eval.kickers()[0].rank(), Rank::King);
    }

    #[test]
    fn high_card_always_matches() {
        let a = analyze("As Kh Jd 9c 7s");
        assert!(HighCardDetector.detect(&a));
        assert_eq!(first_match(&a), Category::HighCard);
    }
}

use super::rank_groups::RankGroups;
use super::straight_info::StraightInfo;
use super::suit_info::SuitInfo;
use crate::cards::{Card, Rank};
use crate::evaluator::{Category, EvaluatedHand};

/// Pre-computed analysis of a 5-card hand.
/// Built once and shared by all category detectors.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    /// Rank descending, then suit descending.
    pub sorted_cards: [Card; 5],
    pub rank_groups: RankGroups,
    pub suit_info: SuitInfo,
    pub straight_info: StraightInfo,
}

impl HandAnalysis {
    pub fn new(cards: &[Card; 5]) -> Self {
        let mut sorted_cards = *cards;
        sorted_cards.sort_by(|a, b| b.rank().cmp(&a.rank()).then(b.suit().cmp(&a.suit())));

        let ranks: [Rank; 5] = sorted_cards.map(|c| c.rank());

        Self {
            sorted_cards,
            rank_groups: RankGroups::from_cards(&sorted_cards),
            suit_info: SuitInfo::from_cards(&sorted_cards),
            straight_info: StraightInfo::detect(&ranks),
        }
    }

    /// Cards laid out group by group (size desc, rank desc).
    pub fn grouped_cards(&self) -> [Card; 5] {
        let mut out = self.sorted_cards;
        for (slot, card) in out.iter_mut().zip(self.rank_groups.ordered_cards()) {
            *slot = card;
        }
        out
    }

    /// Cards in straight order: top card first, the wheel's Ace last.
    pub fn straight_cards(&self) -> [Card; 5] {
        let mut out = self.sorted_cards;
        if self.straight_info.is_wheel {
            out.rotate_left(1);
        }
        out
    }

    pub fn build_evaluation(&self, category: Category, cards: [Card; 5], key_len: usize) -> EvaluatedHand {
        EvaluatedHand::new(category, cards, key_len)
    }
}

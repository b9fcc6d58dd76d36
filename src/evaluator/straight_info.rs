use crate::cards::Rank;

/// Whether five ranks form a straight, and its top rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub is_straight: bool,
    pub top_rank: Option<Rank>,
    /// A-2-3-4-5, with the Ace playing low.
    pub is_wheel: bool,
}

impl StraightInfo {
    const NONE: StraightInfo = StraightInfo { is_straight: false, top_rank: None, is_wheel: false };

    /// Detect a straight from five ranks in any order.
    pub fn detect(ranks: &[Rank; 5]) -> Self {
        let mut sorted = *ranks;
        sorted.sort_by(|a, b| b.cmp(a));

        let consecutive = |xs: &[Rank]| xs.windows(2).all(|w| w[0].value() == w[1].value() + 1);

        if consecutive(&sorted) {
            return StraightInfo { is_straight: true, top_rank: Some(sorted[0]), is_wheel: false };
        }

        // Ace-low: A then 5-4-3-2
        if sorted[0] == Rank::Ace && sorted[1] == Rank::Five && consecutive(&sorted[1..]) {
            return StraightInfo { is_straight: true, top_rank: Some(Rank::Five), is_wheel: true };
        }

        Self::NONE
    }
}

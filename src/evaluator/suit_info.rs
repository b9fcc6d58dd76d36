use crate::cards::{Card, Suit};

/// Per-suit card counts for a set of cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuitInfo {
    counts: [u8; 4],
}

impl SuitInfo {
    pub fn from_cards(cards: &[Card]) -> Self {
        let counts = cards.iter().fold([0u8; 4], |mut acc, c| {
            acc[c.suit().index()] += 1;
            acc
        });
        Self { counts }
    }

    pub fn count(&self, suit: Suit) -> usize {
        self.counts[suit.index()] as usize
    }

    /// Suit held by at least five of the cards.
    pub fn flush_suit(&self) -> Option<Suit> {
        Suit::ALL.into_iter().find(|&s| self.count(s) >= 5)
    }

    pub fn is_flush(&self) -> bool {
        self.flush_suit().is_some()
    }

    /// Suits held by exactly `n` of the cards.
    pub fn suits_with_count(&self, n: usize) -> impl Iterator<Item = Suit> + '_ {
        Suit::ALL.into_iter().filter(move |&s| self.count(s) == n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn info(s: &str) -> SuitInfo {
        SuitInfo::from_cards(&parse_cards(s).unwrap())
    }

    #[test]
    fn flush() {
        let i = info("As Ks Qs Js 9s");
        assert!(i.is_flush());
        assert_eq!(i.flush_suit(), Some(Suit::Spades));
    }

    #[test]
    fn not_flush() {
        let i = info("As Kh Qs Js 9s");
        assert!(!i.is_flush());
        assert_eq!(i.flush_suit(), None);
        assert_eq!(i.count(Suit::Spades), 4);
    }

    #[test]
    fn four_to_a_suit_among_seven() {
        let i = info("Ah Kh 7h 2h 9c 3d 4s");
        assert_eq!(i.suits_with_count(4).collect::<Vec<_>>(), vec![Suit::Hearts]);
        assert!(!i.is_flush());
    }
}

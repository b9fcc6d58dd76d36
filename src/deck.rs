use crate::cards::{Card, Rank, Suit};
use rand::seq::SliceRandom;
use rand::Rng;

/// The 52-card universe, suit-major, each suit from Two to Ace.
pub const UNIVERSE: [Card; 52] = build_universe();

const fn build_universe() -> [Card; 52] {
    let mut cards = [Card::new(Rank::Two, Suit::Clubs); 52];
    let mut s = 0;
    while s < 4 {
        let mut r = 0;
        while r < 13 {
            cards[s * 13 + r] = Card::new(Rank::ALL[r], Suit::ALL[s]);
            r += 1;
        }
        s += 1;
    }
    cards
}

/// A working set of cards drawn from the universe: the full deck, or what is left
/// of it once hole and board cards are assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// ```
    /// use holdem_advisor::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        Self { cards: UNIVERSE.to_vec() }
    }

    /// Every universe card not in `seen`.
    ///
    /// ```
    /// use holdem_advisor::cards::parse_cards;
    /// use holdem_advisor::deck::Deck;
    ///
    /// let seen = parse_cards("As Ah Kd").unwrap();
    /// let rest = Deck::remaining(&seen);
    /// assert_eq!(rest.len(), 49);
    /// assert!(!rest.contains(seen[0]));
    /// ```
    pub fn remaining(seen: &[Card]) -> Self {
        let cards = UNIVERSE.iter().copied().filter(|c| !seen.contains(c)).collect();
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Number of cards of `rank` still in the deck.
    pub fn count_rank(&self, rank: Rank) -> usize {
        self.cards.iter().filter(|c| c.rank() == rank).count()
    }

    /// Number of cards of `suit` still in the deck.
    pub fn count_suit(&self, suit: Suit) -> usize {
        self.cards.iter().filter(|c| c.suit() == suit).count()
    }

    /// Shuffle using the provided RNG.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Draw exactly `n` cards, or nothing if fewer than `n` remain.
    pub fn draw_n(&mut self, n: usize) -> Option<Vec<Card>> {
        if self.cards.len() < n {
            return None;
        }
        let at = self.cards.len() - n;
        Some(self.cards.split_off(at))
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    #[test]
    fn universe_has_52_distinct_cards() {
        let set: HashSet<Card> = UNIVERSE.iter().copied().collect();
        assert_eq!(set.len(), 52);
        assert_eq!(UNIVERSE[0], Card::new(Rank::Two, Suit::Clubs));
        assert_eq!(UNIVERSE[51], Card::new(Rank::Ace, Suit::Spades));
    }

    #[test]
    fn remaining_is_set_difference() {
        let seen = [Card::new(Rank::Ace, Suit::Spades), Card::new(Rank::Ace, Suit::Hearts)];
        let d = Deck::remaining(&seen);
        assert_eq!(d.len(), 50);
        assert_eq!(d.count_rank(Rank::Ace), 2);
        assert_eq!(d.count_suit(Suit::Spades), 12);
        assert_eq!(d.count_suit(Suit::Clubs), 13);
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let mut d1 = Deck::standard();
        let mut d2 = Deck::standard();
        d1.shuffle_with(&mut ChaCha8Rng::seed_from_u64(42));
        d2.shuffle_with(&mut ChaCha8Rng::seed_from_u64(42));
        assert_eq!(d1, d2);
        assert_ne!(d1, Deck::standard());
    }

    #[test]
    fn draw_n_is_all_or_nothing() {
        let mut d = Deck::standard();
        d.shuffle_with(&mut ChaCha8Rng::seed_from_u64(7));
        let two = d.draw_n(2).unwrap();
        assert_ne!(two[0], two[1]);
        assert_eq!(d.len(), 50);
        assert_eq!(d.draw_n(5).map(|h| h.len()), Some(5));
        assert_eq!(d.len(), 45);
        assert!(d.draw_n(46).is_none());
        assert_eq!(d.len(), 45);
    }
}

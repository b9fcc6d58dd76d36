use crate::cards::{Card, Rank};

/// Cards sharing one rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroup {
    pub rank: Rank,
    pub cards: Vec<Card>,
}

impl RankGroup {
    pub fn size(&self) -> usize {
        self.cards.len()
    }
}

/// Cards grouped by rank, ordered by (group size desc, rank desc).
///
/// Example: `A A A K Q` groups as `[(A, 3), (K, 1), (Q, 1)]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    groups: Vec<RankGroup>,
}

impl RankGroups {
    /// Group cards by folding over them in descending rank order.
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut sorted = cards.to_vec();
        sorted.sort_by(|a, b| b.rank().cmp(&a.rank()).then(b.suit().cmp(&a.suit())));

        let mut groups = sorted.into_iter().fold(Vec::<RankGroup>::new(), |mut acc, card| {
            match acc.last_mut() {
                Some(g) if g.rank == card.rank() => g.cards.push(card),
                _ => acc.push(RankGroup { rank: card.rank(), cards: vec![card] }),
            }
            acc
        });

        groups.sort_by(|a, b| b.size().cmp(&a.size()).then(b.rank.cmp(&a.rank)));
        Self { groups }
    }

    pub fn iter(&self) -> impl Iterator<Item = &RankGroup> {
        self.groups.iter()
    }

    /// Rank of a four-of-a-kind, if present.
    pub fn quad(&self) -> Option<Rank> {
        self.of_size(4).next()
    }

    /// Rank of the highest three-of-a-kind, if present.
    pub fn trips(&self) -> Option<Rank> {
        self.of_size(3).next()
    }

    /// Pair ranks in descending order.
    pub fn pairs(&self) -> Vec<Rank> {
        self.of_size(2).collect()
    }

    /// Singleton ranks in descending order.
    pub fn kickers(&self) -> Vec<Rank> {
        self.of_size(1).collect()
    }

    pub fn has_full_house(&self) -> bool {
        self.trips().is_some() && self.of_size(2).next().is_some()
    }

    /// All cards flattened in group order: the key-then-kicker layout of every
    /// rank-grouped category.
    pub fn ordered_cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.groups.iter().flat_map(|g| g.cards.iter().copied())
    }

    fn of_size(&self, n: usize) -> impl Iterator<Item = Rank> + '_ {
        self.groups.iter().filter(move |g| g.size() == n).map(|g| g.rank)
    }
}

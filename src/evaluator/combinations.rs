/// Iterator over all `K`-element index combinations of `0..n`, in lexicographic order.
///
/// This replaces nested loops with a single backtracking step: find the
/// rightmost index that can still advance, bump it, and reset everything to
/// its right to consecutive values.
///
/// ```
/// use holdem_advisor::evaluator::combinations::Combinations;
///
/// let all: Vec<[usize; 2]> = Combinations::<2>::new(3).collect();
/// assert_eq!(all, vec![[0, 1], [0, 2], [1, 2]]);
/// assert_eq!(Combinations::<5>::new(7).count(), 21);
/// assert_eq!(Combinations::<5>::new(4).count(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct Combinations<const K: usize> {
    n: usize,
    indices: [usize; K],
    done: bool,
}

impl<const K: usize> Combinations<K> {
    pub fn new(n: usize) -> Self {
        let mut indices = [0; K];
        for (i, slot) in indices.iter_mut().enumerate() {
            *slot = i;
        }
        Self { n, indices, done: n < K }
    }
}

impl<const K: usize> Iterator for Combinations<K> {
    type Item = [usize; K];

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let result = self.indices;

        let mut i = K;
        loop {
            if i == 0 {
                self.done = true;
                break;
            }
            i -= 1;
            if self.indices[i] < self.n - (K - i) {
                self.indices[i] += 1;
                for j in (i + 1)..K {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
                break;
            }
        }

        Some(result)
    }
}

/// Binomial coefficient C(n, k).
///
/// ```
/// use holdem_advisor::evaluator::combinations::binomial;
///
/// assert_eq!(binomial(52, 2), 1326);
/// assert_eq!(binomial(7, 5), 21);
/// assert_eq!(binomial(3, 5), 0);
/// ```
pub const fn binomial(n: u64, k: u64) -> u64 {
    if k > n {
        return 0;
    }
    let k = if k > n - k { n - k } else { k };
    let mut acc = 1u64;
    let mut i = 0;
    while i < k {
        acc = acc * (n - i) / (i + 1);
        i += 1;
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seven_choose_five_count() {
        assert_eq!(Combinations::<5>::new(7).count(), 21);
    }

    #[test]
    fn seven_choose_five_first_and_last() {
        let combos: Vec<_> = Combinations::<5>::new(7).collect();
        assert_eq!(combos[0], [0, 1, 2, 3, 4]);
        assert_eq!(combos[20], [2, 3, 4, 5, 6]);
    }

    #[test]
    fn five_choose_five_is_single() {
        let combos: Vec<_> = Combinations::<5>::new(5).collect();
        assert_eq!(combos, vec![[0, 1, 2, 3, 4]]);
    }

    #[test]
    fn combinations_are_unique_and_increasing() {
        let combos: Vec<_> = Combinations::<5>::new(7).collect();
        let unique: HashSet<_> = combos.iter().collect();
        assert_eq!(unique.len(), combos.len());
        for c in &combos {
            assert!(c.windows(2).all(|w| w[0] < w[1]));
            assert!(c.iter().all(|&i| i < 7));
        }
    }

    #[test]
    fn lexicographic_order() {
        let combos: Vec<_> = Combinations::<3>::new(5).collect();
        let mut sorted = combos.clone();
        sorted.sort();
        assert_eq!(combos, sorted);
        assert_eq!(combos.len(), 10);
    }

    #[test]
    fn too_few_items_yields_nothing() {
        assert_eq!(Combinations::<5>::new(4).next(), None);
        assert_eq!(Combinations::<2>::new(0).next(), None);
    }

    #[test]
    fn counts_match_binomial() {
        for n in 0..=8usize {
            assert_eq!(Combinations::<5>::new(n).count() as u64, binomial(n as u64, 5));
            assert_eq!(Combinations::<2>::new(n).count() as u64, binomial(n as u64, 2));
        }
    }
}

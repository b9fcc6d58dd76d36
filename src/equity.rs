//! Monte Carlo equity against one random opponent hand.
//!
//! Each trial shuffles the unseen cards, deals the opponent two of them and
//! completes the board, then compares both best hands. Randomness is always
//! injected: either a caller-supplied RNG or a `ChaCha8Rng` built from a seed.

use crate::cards::Card;
use crate::config::AdvisorConfig;
use crate::deck::Deck;
use crate::evaluator::{evaluate_seven, first_duplicate};
use crate::hand::{HandError, HoleCards};
use log::{debug, info};
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use std::cmp::Ordering;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};
use std::sync::Arc;

/// Trials between cancellation checks.
const CANCEL_CHECK_EVERY: usize = 64;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EquityError {
    #[error("equity needs 1 to 4 community cards, got {0}")]
    BoardSize(usize),
    #[error("invalid hand: {0}")]
    InvalidHand(#[from] HandError),
    #[error("simulation cancelled")]
    Cancelled,
}

/// Shared flag telling a running simulation to stop.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, AtomicOrdering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(AtomicOrdering::Relaxed)
    }
}

/// Win/tie/loss tally over the trials that could be dealt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EquityEstimate {
    pub wins: u64,
    pub ties: u64,
    pub losses: u64,
    pub valid_trials: u64,
}

impl EquityEstimate {
    /// `(wins + ties / 2) / valid_trials` as a percentage; 0 when no trial was valid.
    ///
    /// ```
    /// use holdem_advisor::equity::EquityEstimate;
    ///
    /// let e = EquityEstimate { wins: 6, ties: 2, losses: 2, valid_trials: 10 };
    /// assert_eq!(e.equity(), 70.0);
    /// assert_eq!(EquityEstimate::default().equity(), 0.0);
    /// ```
    pub fn equity(&self) -> f64 {
        if self.valid_trials == 0 {
            return 0.0;
        }
        (self.wins as f64 + self.ties as f64 / 2.0) / self.valid_trials as f64 * 100.0
    }

    pub fn merge(self, other: Self) -> Self {
        Self {
            wins: self.wins + other.wins,
            ties: self.ties + other.ties,
            losses: self.losses + other.losses,
            valid_trials: self.valid_trials + other.valid_trials,
        }
    }

    fn record(&mut self, outcome: Ordering) {
        self.valid_trials += 1;
        match outcome {
            Ordering::Greater => self.wins += 1,
            Ordering::Equal => self.ties += 1,
            Ordering::Less => self.losses += 1,
        }
    }
}

/// Run `trials` sequential trials with the given RNG.
///
/// ```
/// use holdem_advisor::cards::parse_cards;
/// use holdem_advisor::equity::simulate;
/// use holdem_advisor::hand::HoleCards;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let hole: HoleCards = "As Ah".parse().unwrap();
/// let board = parse_cards("Kd 7c 2h").unwrap();
/// let mut rng = ChaCha8Rng::seed_from_u64(1);
/// let est = simulate(&hole, &board, 500, &mut rng, None).unwrap();
/// assert_eq!(est.valid_trials, 500);
/// assert!(est.equity() > 60.0);
/// ```
pub fn simulate<R: Rng + ?Sized>(
    hole: &HoleCards,
    board: &[Card],
    trials: usize,
    rng: &mut R,
    cancel: Option<&CancelToken>,
) -> Result<EquityEstimate, EquityError> {
    let remaining = prepare(hole, board)?;
    let needed = 5 - board.len();
    let mut estimate = EquityEstimate::default();

    for i in 0..trials {
        if i % CANCEL_CHECK_EVERY == 0 && cancel.is_some_and(CancelToken::is_cancelled) {
            return Err(EquityError::Cancelled);
        }

        let mut deck = remaining.clone();
        deck.shuffle_with(&mut *rng);
        let Some(opponent) = deck.draw_n(2) else { continue };
        let Some(runout) = deck.draw_n(needed) else { continue };

        let hero = evaluate_seven(&seven(&hole.as_array(), board, &runout));
        let villain = evaluate_seven(&seven(&opponent, board, &runout));
        estimate.record(hero.cmp(&villain));
    }

    Ok(estimate)
}

/// Split `trials` over `batches` rayon tasks. Batch `b` draws from stream `b`
/// of a `ChaCha8Rng` seeded with `seed`, so results depend only on the seed
/// and the batch count.
pub fn simulate_parallel(
    hole: &HoleCards,
    board: &[Card],
    trials: usize,
    batches: usize,
    seed: u64,
    cancel: Option<&CancelToken>,
) -> Result<EquityEstimate, EquityError> {
    prepare(hole, board)?;
    let batches = batches.max(1);
    let (per, extra) = (trials / batches, trials % batches);

    let results = (0..batches)
        .into_par_iter()
        .map(|b| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            rng.set_stream(b as u64);
            let n = per + usize::from(b < extra);
            simulate(hole, board, n, &mut rng, cancel)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(results.into_iter().fold(EquityEstimate::default(), EquityEstimate::merge))
}

/// Equity runner configured from [`AdvisorConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquitySimulator {
    pub trials: usize,
    pub seed: Option<u64>,
    pub parallel: bool,
    pub batches: usize,
}

impl EquitySimulator {
    pub fn from_config(config: &AdvisorConfig) -> Self {
        Self {
            trials: config.trials,
            seed: config.seed,
            parallel: config.parallel,
            batches: config.batches,
        }
    }

    pub fn run(
        &self,
        hole: &HoleCards,
        board: &[Card],
        cancel: Option<&CancelToken>,
    ) -> Result<EquityEstimate, EquityError> {
        let seed = self.seed.unwrap_or_else(|| rand::rng().next_u64());
        info!(
            "simulating equity: {} trials, board {}, {}",
            self.trials,
            board.len(),
            if self.parallel { "parallel" } else { "sequential" }
        );

        let estimate = if self.parallel {
            simulate_parallel(hole, board, self.trials, self.batches, seed, cancel)?
        } else {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            simulate(hole, board, self.trials, &mut rng, cancel)?
        };

        info!(
            "equity {:.2}% over {} valid trials (w {} / t {} / l {})",
            estimate.equity(),
            estimate.valid_trials,
            estimate.wins,
            estimate.ties,
            estimate.losses
        );
        Ok(estimate)
    }
}

impl Default for EquitySimulator {
    fn default() -> Self {
        Self::from_config(&AdvisorConfig::default())
    }
}

fn prepare(hole: &HoleCards, board: &[Card]) -> Result<Deck, EquityError> {
    if board.is_empty() || board.len() >= 5 {
        return Err(EquityError::BoardSize(board.len()));
    }
    let mut seen = hole.as_array().to_vec();
    seen.extend_from_slice(board);
    if let Some(dup) = first_duplicate(&seen) {
        return Err(HandError::DuplicateCard(dup).into());
    }
    let deck = Deck::remaining(&seen);
    debug!("equity deck: {} unseen cards", deck.len());
    Ok(deck)
}

fn seven(two: &[Card], board: &[Card], runout: &[Card]) -> [Card; 7] {
    let mut out = [two[0]; 7];
    out[..2].copy_from_slice(&two[..2]);
    out[2..2 + board.len()].copy_from_slice(board);
    out[2 + board.len()..].copy_from_slice(runout);
    out
}

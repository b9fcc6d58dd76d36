//! Control flow from a [`Situation`] to advice.
//!
//! [`Analysis`] holds the synchronous signals (best hand, outs, draws, pot
//! odds, starting-hand profile). [`Session`] adds the equity estimate as a
//! background job that is debounced, cancelled when superseded, and only
//! applied when it belongs to the current input.

use crate::cards::Card;
use crate::config::AdvisorConfig;
use crate::draws::{find_draws, Draws};
use crate::equity::{CancelToken, EquityError, EquityEstimate, EquitySimulator};
use crate::evaluator::{made_hand, EvaluatedHand};
use crate::hand::{HoleCards, Situation, Street};
use crate::odds::pot_odds;
use crate::outs::{count_outs, OutsReport};
use crate::strategy::preflop::StartingHand;
use crate::strategy::{Action, Advisor, Spot};
use log::{debug, warn};
use std::fmt;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

/// Everything that can be computed without simulation.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub situation: Situation,
    pub made: Option<EvaluatedHand>,
    /// Flop and turn only.
    pub outs: Option<OutsReport>,
    /// Flop and turn only.
    pub draws: Option<Draws>,
    pub pot_odds: Option<f64>,
    /// Pre-flop only.
    pub starting_hand: Option<StartingHand>,
}

impl Analysis {
    pub fn new(situation: &Situation, advisor: &Advisor) -> Self {
        let seen = situation.seen_cards();
        let board = situation.board().as_slice();
        let made = made_hand(&seen);
        let has_hole = situation.hole_cards().is_some();
        let drawing = has_hole && matches!(situation.street(), Street::Flop | Street::Turn);

        let analysis = Self {
            situation: situation.clone(),
            made,
            outs: drawing.then(|| count_outs(situation.hole(), board)).flatten(),
            draws: drawing.then(|| find_draws(situation.hole(), board, made.as_ref())),
            pot_odds: if has_hole { pot_odds(situation.pot(), situation.bet()) } else { None },
            starting_hand: situation
                .hole_cards()
                .filter(|_| situation.street() == Street::PreFlop)
                .map(|h| StartingHand::new(&h, &advisor.preflop)),
        };

        debug!(
            "analysis: {} | made {} | outs {} | pot odds {:?}",
            situation.street(),
            analysis.made.map_or_else(|| "-".to_string(), |h| h.to_string()),
            analysis.outs.as_ref().map_or(0, OutsReport::count),
            analysis.pot_odds
        );
        analysis
    }

    pub fn street(&self) -> Street {
        self.situation.street()
    }

    /// Equity is simulated with both hole cards and one to four board cards.
    pub fn needs_equity(&self) -> bool {
        self.situation.hole_cards().is_some() && (1..=4).contains(&self.situation.board().len())
    }

    pub fn spot(&self, equity: f64) -> Spot {
        Spot {
            hole: self.situation.hole_cards(),
            board_len: self.situation.board().len(),
            bet: self.situation.bet(),
            pot_odds: self.pot_odds,
            equity,
            made: self.made.map(|h| h.category()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EquityState {
    /// Pre-flop, river, or missing hole cards.
    NotApplicable,
    Pending,
    Ready(EquityEstimate),
}

impl EquityState {
    pub fn estimate(&self) -> Option<EquityEstimate> {
        match self {
            EquityState::Ready(e) => Some(*e),
            _ => None,
        }
    }
}

/// Snapshot of one decision point, ready for display.
#[derive(Debug, Clone)]
pub struct Report {
    pub analysis: Analysis,
    pub equity: EquityState,
    /// `None` while equity is still being computed.
    pub action: Option<Action>,
}

/// One-shot analysis with equity computed inline.
///
/// ```
/// use holdem_advisor::config::AdvisorConfig;
/// use holdem_advisor::engine::analyze;
/// use holdem_advisor::hand::Situation;
/// use holdem_advisor::strategy::Action;
///
/// let situation = Situation::parse("As Ah", "", 10, 5).unwrap();
/// let report = analyze(&situation, &AdvisorConfig::default()).unwrap();
/// assert_eq!(report.action, Some(Action::Raise));
/// assert!(report.equity.estimate().is_none());
/// ```
pub fn analyze(situation: &Situation, config: &AdvisorConfig) -> Result<Report, EquityError> {
    let advisor = Advisor::from_config(config);
    let analysis = Analysis::new(situation, &advisor);
    let equity = match situation.hole_cards() {
        Some(hole) if analysis.needs_equity() => {
            let board = situation.board().as_slice();
            EquityState::Ready(EquitySimulator::from_config(config).run(&hole, board, None)?)
        }
        _ => EquityState::NotApplicable,
    };
    Ok(build_report(analysis, equity, &advisor))
}

fn build_report(analysis: Analysis, equity: EquityState, advisor: &Advisor) -> Report {
    let action = match equity {
        EquityState::Pending => None,
        EquityState::Ready(e) => Some(advisor.recommend(&analysis.spot(e.equity()))),
        EquityState::NotApplicable => Some(advisor.recommend(&analysis.spot(0.0))),
    };
    Report { analysis, equity, action }
}

type JobResult = (u64, Result<EquityEstimate, EquityError>);

struct Job {
    generation: u64,
    cancel: CancelToken,
    rx: Receiver<JobResult>,
}

/// Interactive state: the current situation, its analysis, and at most one
/// live equity job.
pub struct Session {
    config: AdvisorConfig,
    advisor: Advisor,
    simulator: EquitySimulator,
    analysis: Analysis,
    equity: EquityState,
    generation: u64,
    job: Option<Job>,
}

impl Session {
    pub fn new(config: AdvisorConfig) -> Self {
        let advisor = Advisor::from_config(&config);
        let simulator = EquitySimulator::from_config(&config);
        let analysis = Analysis::new(&Situation::default(), &advisor);
        Self {
            config,
            advisor,
            simulator,
            analysis,
            equity: EquityState::NotApplicable,
            generation: 0,
            job: None,
        }
    }

    pub fn config(&self) -> &AdvisorConfig {
        &self.config
    }

    pub fn situation(&self) -> &Situation {
        &self.analysis.situation
    }

    pub fn analysis(&self) -> &Analysis {
        &self.analysis
    }

    pub fn equity(&self) -> EquityState {
        self.equity
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_busy(&self) -> bool {
        self.equity == EquityState::Pending
    }

    /// Replace the situation. Any running job is cancelled and its result will
    /// never be applied; a new job starts after the debounce delay when equity
    /// applies.
    pub fn update(&mut self, situation: Situation) {
        if let Some(old) = self.job.take() {
            debug!("superseding equity job {}", old.generation);
            old.cancel.cancel();
        }
        self.generation += 1;
        self.analysis = Analysis::new(&situation, &self.advisor);

        match situation.hole_cards() {
            Some(hole) if self.analysis.needs_equity() => {
                self.equity = EquityState::Pending;
                self.job = Some(self.spawn(hole, situation.board().as_slice().to_vec()));
            }
            _ => self.equity = EquityState::NotApplicable,
        }
    }

    fn spawn(&self, hole: HoleCards, board: Vec<Card>) -> Job {
        let (tx, rx) = mpsc::channel();
        let cancel = CancelToken::new();
        let generation = self.generation;
        let debounce = self.config.debounce();
        let simulator = self.simulator.clone();
        let token = cancel.clone();

        thread::spawn(move || {
            thread::sleep(debounce);
            if token.is_cancelled() {
                debug!("equity job {generation} superseded before start");
                return;
            }
            let result = simulator.run(&hole, &board, Some(&token));
            // receiver is gone once the job is superseded
            let _ = tx.send((generation, result));
        });

        Job { generation, cancel, rx }
    }

    /// Apply a finished result if one is ready. Returns `true` when state changed.
    pub fn poll(&mut self) -> bool {
        let Some(job) = &self.job else { return false };
        match job.rx.try_recv() {
            Ok(msg) => self.finish(msg),
            Err(TryRecvError::Empty) => false,
            Err(TryRecvError::Disconnected) => self.abandon(),
        }
    }

    /// Block until the current job finishes and apply its result.
    pub fn wait(&mut self) -> bool {
        let Some(job) = &self.job else { return false };
        match job.rx.recv() {
            Ok(msg) => self.finish(msg),
            Err(_) => self.abandon(),
        }
    }

    fn finish(&mut self, (generation, result): JobResult) -> bool {
        self.job = None;
        if generation != self.generation {
            debug!("discarding equity result from stale job {generation}");
            return false;
        }
        match result {
            Ok(estimate) => self.equity = EquityState::Ready(estimate),
            Err(e) => {
                warn!("equity job {generation} failed: {e}");
                self.equity = EquityState::NotApplicable;
            }
        }
        true
    }

    fn abandon(&mut self) -> bool {
        warn!("equity job {} ended without a result", self.generation);
        self.job = None;
        self.equity = EquityState::NotApplicable;
        true
    }

    /// Advice for the current state; `None` while equity is pending.
    pub fn action(&self) -> Option<Action> {
        self.report().action
    }

    pub fn report(&self) -> Report {
        build_report(self.analysis.clone(), self.equity, &self.advisor)
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if let Some(job) = self.job.take() {
            job.cancel.cancel();
        }
    }
}

fn join_symbols(cards: &[Card]) -> String {
    cards.iter().map(|c| c.symbol()).collect::<Vec<_>>().join(" ")
}

fn percent(v: Option<f64>) -> String {
    v.map_or_else(|| "N/A".to_string(), |p| format!("{p:.2}%"))
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let a = &self.analysis;
        let s = &a.situation;
        writeln!(f, "Hole:       {}", join_symbols(s.hole()))?;
        writeln!(f, "Board:      {} ({})", join_symbols(s.board().as_slice()), s.street())?;
        writeln!(f, "Pot / bet:  {} / {}", s.pot(), s.bet())?;

        match &a.made {
            Some(h) => writeln!(
                f,
                "Best hand:  {} [{} | {}]",
                h,
                join_symbols(h.key_cards()),
                join_symbols(h.kickers())
            )?,
            None => writeln!(f, "Best hand:  -")?,
        }

        if let Some(sh) = &a.starting_hand {
            writeln!(
                f,
                "Start hand: {} ({}), {} of 1326 deals ({:.2}%)",
                sh.notation, sh.tier, sh.combos, sh.probability
            )?;
        }

        if let Some(o) = &a.outs {
            writeln!(
                f,
                "Outs:       {} (next {:.2}%, rule of {} {:.2}%, by river {:.2}%)",
                o.count(),
                o.prob_next,
                if o.cards_to_come == 2 { 4 } else { 2 },
                o.rule_of_thumb,
                o.prob_to_come
            )?;
            if !o.by_rank.is_empty() {
                let ranks: Vec<String> = o.by_rank.iter().map(|(r, n)| format!("{r}:{n}")).collect();
                writeln!(f, "            {}", ranks.join(" "))?;
            }
        }

        if let Some(d) = &a.draws {
            if let Some(fl) = &d.flush {
                writeln!(f, "Draw:       flush ({}) {} outs, {:.2}%", fl.suit.name(), fl.outs, fl.odds.total)?;
            }
            if let Some(st) = &d.straight {
                writeln!(f, "Draw:       straight ({}) {} outs, {:.2}%", st.kind, st.outs, st.odds.total)?;
            }
            if let Some(set) = &d.set {
                writeln!(f, "Draw:       set {} outs, {:.2}%", set.outs, set.odds.total)?;
            }
            if let Some(q) = &d.quads {
                writeln!(f, "Draw:       quads {} outs, {:.2}%", q.outs, q.odds.total)?;
            }
        }

        writeln!(f, "Pot odds:   {}", percent(a.pot_odds))?;
        match self.equity {
            EquityState::Ready(e) => {
                writeln!(f, "Equity:     {:.2}% ({} trials)", e.equity(), e.valid_trials)?
            }
            EquityState::Pending => writeln!(f, "Equity:     calculating...")?,
            EquityState::NotApplicable => writeln!(f, "Equity:     N/A")?,
        }
        match self.action {
            Some(action) => write!(f, "Advice:     {action}"),
            None => write!(f, "Advice:     ..."),
        }
    }
}

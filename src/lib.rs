//! holdem-advisor: Texas Hold'em decision support
//!
//! Goals:
//! - Exact hand evaluation and best-of-seven selection
//! - Outs, draws, pot odds and Monte Carlo equity for the hero's hand
//! - A Raise / Call / Check / Fold recommendation from those signals
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: evaluate a Hold'em hand
//! ```
//! use holdem_advisor::cards::parse_cards;
//! use holdem_advisor::evaluator::{best_hand, Category};
//!
//! let cards = parse_cards("As Ah Kc Qd Jh 3s 2c").unwrap();
//! let hand = best_hand(&cards).unwrap();
//! assert_eq!(hand.category(), Category::Pair);
//! assert_eq!(hand.to_string(), "Pair of Aces");
//! ```
//!
//! ## Advice for a spot
//! ```
//! use holdem_advisor::config::AdvisorConfig;
//! use holdem_advisor::engine::analyze;
//! use holdem_advisor::hand::Situation;
//!
//! let situation = Situation::parse("Ah Kh", "Qh 7h 2c", 100, 25).unwrap();
//! let config = AdvisorConfig::default().with_trials(500).with_seed(1);
//! let report = analyze(&situation, &config).unwrap();
//! assert_eq!(report.analysis.outs.as_ref().map(|o| o.count() > 0), Some(true));
//! assert!(report.action.is_some());
//! ```
//!
//! ## TUI
//! Run the interactive advisor with:
//! ```sh
//! cargo run --bin holdem-advisor
//! ```

pub mod cards;
pub mod config;
pub mod deck;
pub mod draws;
pub mod engine;
pub mod equity;
pub mod evaluator;
pub mod hand;
pub mod odds;
pub mod outs;
pub mod strategy;
pub mod tui;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

use crate::evaluator::Category;
use crate::strategy::preflop::PreflopTable;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("reading config: {0}")]
    Io(#[from] std::io::Error),
    #[error("parsing config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Tunables for equity simulation and action advice.
///
/// Every field has a default, so a config file only lists what it overrides:
///
/// ```
/// use holdem_advisor::config::AdvisorConfig;
///
/// let cfg = AdvisorConfig::from_json_str(r#"{ "trials": 2000, "seed": 7 }"#).unwrap();
/// assert_eq!(cfg.trials, 2000);
/// assert_eq!(cfg.seed, Some(7));
/// assert_eq!(cfg.debounce_ms, 50);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisorConfig {
    pub trials: usize,
    pub seed: Option<u64>,
    pub parallel: bool,
    pub batches: usize,
    pub debounce_ms: u64,
    pub value_raise_equity: f64,
    pub value_raise_category: Category,
    pub draw_raise_equity: f64,
    pub river_call_category: Option<Category>,
    pub preflop: PreflopTable,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            trials: 5000,
            seed: None,
            parallel: false,
            batches: 8,
            debounce_ms: 50,
            value_raise_equity: 70.0,
            value_raise_category: Category::ThreeOfAKind,
            draw_raise_equity: 45.0,
            river_call_category: None,
            preflop: PreflopTable::default(),
        }
    }
}

impl AdvisorConfig {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    /// Fix the equity RNG seed for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_parallel(mut self, batches: usize) -> Self {
        self.parallel = true;
        self.batches = batches.max(1);
        self
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce_ms = debounce.as_millis() as u64;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = AdvisorConfig::default();
        assert_eq!(c.trials, 5000);
        assert_eq!(c.seed, None);
        assert!(!c.parallel);
        assert_eq!(c.value_raise_category, Category::ThreeOfAKind);
        assert_eq!(c.debounce(), Duration::from_millis(50));
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(AdvisorConfig::from_json_str("{}").unwrap(), AdvisorConfig::default());
    }

    #[test]
    fn categories_and_tables_deserialize() {
        let c = AdvisorConfig::from_json_str(
            r#"{
                "river_call_category": "Straight",
                "value_raise_category": "FullHouse",
                "preflop": { "rules": [], "fallback": "medium" }
            }"#,
        )
        .unwrap();
        assert_eq!(c.river_call_category, Some(Category::Straight));
        assert_eq!(c.value_raise_category, Category::FullHouse);
        assert!(c.preflop.rules.is_empty());
    }

    #[test]
    fn bad_json_is_a_parse_error() {
        assert!(matches!(AdvisorConfig::from_json_str("{ trials: }"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        assert!(matches!(
            AdvisorConfig::from_path("/definitely/not/here.json"),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn builders() {
        let c = AdvisorConfig::default()
            .with_trials(100)
            .with_seed(3)
            .with_parallel(0)
            .with_debounce(Duration::from_millis(5));
        assert_eq!((c.trials, c.seed, c.parallel, c.batches, c.debounce_ms), (100, Some(3), true, 1, 5));
    }
}

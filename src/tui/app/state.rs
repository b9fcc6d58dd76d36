use crate::cards::Card;
use crate::config::AdvisorConfig;
use crate::engine::{Report, Session};
use crate::hand::Situation;
use std::time::{Duration, Instant};

/// Which entry box receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Field {
    Cards,
    Pot,
    Bet,
}

impl Field {
    fn next(self) -> Field {
        match self {
            Field::Cards => Field::Pot,
            Field::Pot => Field::Bet,
            Field::Bet => Field::Cards,
        }
    }

    fn prev(self) -> Field {
        match self {
            Field::Cards => Field::Bet,
            Field::Pot => Field::Cards,
            Field::Bet => Field::Pot,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Cards => "Card",
            Field::Pot => "Pot",
            Field::Bet => "Bet",
        }
    }
}

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    Char(char),
    Backspace,
    Submit,
    NextField,
    PrevField,
    Reset,
    ToggleHelp,
}

pub struct AppState {
    pub started: Instant,
    pub session: Session,
    pub field: Field,
    card_entry: String,
    pot_entry: String,
    bet_entry: String,
    help_open: bool,
    error: Option<String>,
    error_at: Option<Instant>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AdvisorConfig::default())
    }
}

impl AppState {
    const ERROR_TTL: Duration = Duration::from_secs(3);
    const MAX_AMOUNT_DIGITS: usize = 12;

    pub fn new(config: AdvisorConfig) -> Self {
        Self {
            started: Instant::now(),
            session: Session::new(config),
            field: Field::Cards,
            card_entry: String::new(),
            pot_entry: String::new(),
            bet_entry: String::new(),
            help_open: false,
            error: None,
            error_at: None,
        }
    }

    pub fn situation(&self) -> &Situation {
        self.session.situation()
    }

    pub fn report(&self) -> Report {
        self.session.report()
    }

    pub fn entry_text(&self, field: Field) -> &str {
        match field {
            Field::Cards => &self.card_entry,
            Field::Pot => &self.pot_entry,
            Field::Bet => &self.bet_entry,
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    fn set_error(&mut self, msg: impl Into<String>) {
        self.error = Some(msg.into());
        self.error_at = Some(Instant::now());
    }

    fn clear_error(&mut self) {
        self.error = None;
        self.error_at = None;
    }

    /// Called on every controller tick: picks up finished equity and expires errors.
    pub fn on_tick(&mut self) -> bool {
        if let Some(at) = self.error_at {
            if at.elapsed() >= Self::ERROR_TTL {
                self.clear_error();
            }
        }
        self.session.poll()
    }

    fn submit_card(&mut self) -> bool {
        let text = self.card_entry.trim();
        if text.is_empty() {
            return false;
        }
        let card = match text.parse::<Card>() {
            Ok(c) => c,
            Err(e) => {
                self.set_error(e.to_string());
                return false;
            }
        };
        match self.situation().with_card(card) {
            Ok(next) => {
                self.card_entry.clear();
                self.clear_error();
                self.session.update(next);
                true
            }
            Err(e) => {
                self.set_error(e.to_string());
                false
            }
        }
    }

    fn amount(entry: &str) -> u64 {
        entry.parse().unwrap_or(0)
    }

    fn apply_amounts(&mut self) {
        let next = self
            .situation()
            .with_pot(Self::amount(&self.pot_entry))
            .with_bet(Self::amount(&self.bet_entry));
        if &next != self.situation() {
            self.session.update(next);
        }
    }

    fn push_char(&mut self, c: char) -> bool {
        match self.field {
            Field::Cards => {
                if c.is_ascii_alphanumeric() && self.card_entry.len() < 3 {
                    self.card_entry.push(c);
                }
                false
            }
            Field::Pot | Field::Bet => {
                let field = self.field;
                let buf = match field {
                    Field::Pot => &mut self.pot_entry,
                    _ => &mut self.bet_entry,
                };
                if !c.is_ascii_digit() || buf.len() >= Self::MAX_AMOUNT_DIGITS {
                    return false;
                }
                buf.push(c);
                self.apply_amounts();
                true
            }
        }
    }

    fn backspace(&mut self) -> bool {
        match self.field {
            Field::Cards if self.card_entry.is_empty() => {
                let next = self.situation().without_last_card();
                if &next == self.situation() {
                    return false;
                }
                self.session.update(next);
                true
            }
            Field::Cards => {
                self.card_entry.pop();
                false
            }
            Field::Pot => {
                self.pot_entry.pop();
                self.apply_amounts();
                true
            }
            Field::Bet => {
                self.bet_entry.pop();
                self.apply_amounts();
                true
            }
        }
    }

    fn reset(&mut self) {
        self.card_entry.clear();
        self.pot_entry.clear();
        self.bet_entry.clear();
        self.field = Field::Cards;
        self.clear_error();
        self.session.update(Situation::default());
    }

    /// Returns `true` when the situation changed.
    pub fn handle_input(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::ToggleHelp => {
                self.help_open = !self.help_open;
                false
            }
            InputAction::NextField => {
                self.field = self.field.next();
                false
            }
            InputAction::PrevField => {
                self.field = self.field.prev();
                false
            }
            InputAction::Char(c) => self.push_char(c),
            InputAction::Backspace => self.backspace(),
            InputAction::Submit => match self.field {
                Field::Cards => self.submit_card(),
                _ => {
                    self.field = self.field.next();
                    false
                }
            },
            InputAction::Reset => {
                self.reset();
                true
            }
        }
    }
}

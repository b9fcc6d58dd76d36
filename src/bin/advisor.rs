use clap::{Args, Parser, Subcommand};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use holdem_advisor::config::AdvisorConfig;
use holdem_advisor::engine::analyze;
use holdem_advisor::hand::Situation;
use holdem_advisor::tui::{app::AppState, controller};
use ratatui::prelude::*;
use std::error::Error;
use std::io::{self, IsTerminal, Stdout};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    #[command(about = "Print a one-shot report for a hand", alias = "a")]
    Analyze {
        #[arg(long, required = true)]
        hole: String,
        #[arg(long, default_value = "")]
        board: String,
        #[arg(long, default_value_t = 0)]
        pot: u64,
        #[arg(long, default_value_t = 0)]
        bet: u64,
        #[command(flatten)]
        tuning: Tuning,
    },
    #[command(about = "Start the interactive advisor (default)")]
    Tui {
        #[command(flatten)]
        tuning: Tuning,
    },
}

#[derive(Args, Default)]
struct Tuning {
    /// JSON file with config overrides
    #[arg(long)]
    config: Option<PathBuf>,
    /// Monte Carlo trials per equity estimate
    #[arg(long)]
    trials: Option<usize>,
    /// Fixed seed for reproducible equity
    #[arg(long)]
    seed: Option<u64>,
    /// Run trials on all cores
    #[arg(long)]
    parallel: bool,
}

impl Tuning {
    fn resolve(&self) -> Result<AdvisorConfig, Box<dyn Error>> {
        let mut config = match &self.config {
            Some(path) => AdvisorConfig::from_path(path)?,
            None => AdvisorConfig::default(),
        };
        if let Some(trials) = self.trials {
            config = config.with_trials(trials);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if self.parallel {
            let batches = config.batches;
            config = config.with_parallel(batches);
        }
        Ok(config)
    }
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), crossterm::terminal::LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn run_tui(config: AdvisorConfig) -> io::Result<()> {
    if !io::stdout().is_terminal() {
        println!(
            "holdem-advisor TUI requires a real terminal (TTY).\nUse `holdem-advisor analyze` for plain output. Version: {}",
            holdem_advisor::VERSION
        );
        return Ok(());
    }
    let mut terminal = setup_terminal()?;
    let mut app = AppState::new(config);

    let res = controller::run(&mut terminal, &mut app, Duration::from_millis(100));

    // Always attempt to restore terminal
    restore_terminal(terminal)?;
    res
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    match cli.command.unwrap_or(Command::Tui { tuning: Tuning::default() }) {
        Command::Analyze { hole, board, pot, bet, tuning } => {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
            let config = tuning.resolve()?;
            let situation = Situation::parse(&hole, &board, pot, bet)?;
            println!("{}", analyze(&situation, &config)?);
        }
        Command::Tui { tuning } => run_tui(tuning.resolve()?)?,
    }
    Ok(())
}

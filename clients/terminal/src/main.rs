use std::path::PathBuf;

use casino_blackjack::money::parse_amount;
use casino_blackjack::{run_session, AdvisorPlayer, SessionSummary, Table, TableError};
use clap::{Parser, Subcommand};

mod console;
mod render;
mod transcript;

use console::TerminalPlayer;
use render::ConsoleRenderer;
use transcript::TranscriptSink;

#[derive(Parser)]
#[command(name = "blackjack", about = "Casino blackjack at the terminal, with a basic strategy advisor")]
struct Cli {
    /// Starting bankroll in dollars
    #[arg(long, env = "BLACKJACK_BANKROLL", default_value = "100.00", value_parser = parse_dollars)]
    bankroll: u128,

    /// Seed for a reproducible shoe
    #[arg(long, env = "BLACKJACK_SEED")]
    seed: Option<u64>,

    /// Append every round event to this JSON-lines file
    #[arg(long, env = "BLACKJACK_TRANSCRIPT")]
    transcript: Option<PathBuf>,

    /// Show the basic strategy suggestion before each decision
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    advice: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Play interactively (default)
    Play,
    /// Let the strategy advisor play a fixed number of flat-bet rounds
    Autoplay {
        #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
        rounds: u64,

        /// Flat bet in dollars
        #[arg(long, default_value = "5.00", value_parser = parse_dollars)]
        bet: u128,
    },
}

fn parse_dollars(input: &str) -> Result<u128, String> {
    parse_amount(input).map_err(|e| e.to_string())
}

fn main() {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        log::error!("Session failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), TableError> {
    let mut table = Table::shuffled(cli.bankroll, cli.seed);
    if let Some(seed) = cli.seed {
        log::info!("Shoe seeded with {seed}");
    }

    let transcript = cli
        .transcript
        .as_deref()
        .map(TranscriptSink::create)
        .transpose()?;

    let mut renderer = ConsoleRenderer::stdout(cli.advice);
    renderer.welcome();
    let mut sink = (renderer, transcript);

    let summary: SessionSummary = match cli.command.unwrap_or(Command::Play) {
        Command::Play => {
            let mut player = TerminalPlayer::stdio();
            run_session(&mut table, &mut player, &mut sink)?
        }
        Command::Autoplay { rounds, bet } => {
            let mut player = AdvisorPlayer::new(bet, rounds)?;
            run_session(&mut table, &mut player, &mut sink)?
        }
    };

    sink.0.farewell(&summary);
    Ok(())
}

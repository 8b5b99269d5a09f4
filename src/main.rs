//! Wordle Timer - CLI
//!
//! Timed Wordle with a TUI and a plain line-based mode.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use wordle_timer::{
    commands::{check_guess, run_simple},
    core::Word,
    game::{GameSession, MonotonicClock},
    interactive::{App, run_tui},
    logging,
    output::print_check_result,
    wordlists::{
        RandomWordProvider, ScriptedWordProvider, WORDS, WordProvider,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_timer",
    about = "Guess the hidden word in six tries before the clock runs out",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'builtin' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,

    /// Seed for reproducible hidden word selection
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Play a fixed hidden word instead of a random one
    #[arg(long, global = true)]
    word: Option<String>,

    /// Append logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one guess per line, no TUI)
    Simple,

    /// Show the feedback a guess would get against a target word
    Check {
        /// The guessed word
        guess: String,

        /// The hidden word to compare against
        target: String,
    },
}

fn load_words(wordlist: &str) -> Result<Vec<Word>> {
    match wordlist {
        "builtin" => Ok(words_from_slice(WORDS)),
        path => load_from_file(path).with_context(|| format!("failed to read word list {path}")),
    }
}

fn build_provider(cli: &Cli) -> Result<Box<dyn WordProvider>> {
    if let Some(word) = &cli.word {
        return Ok(Box::new(ScriptedWordProvider::new([word.clone()])));
    }

    let words = load_words(&cli.wordlist)?;
    info!(count = words.len(), source = %cli.wordlist, "word list loaded");

    let provider = match cli.seed {
        Some(seed) => RandomWordProvider::seeded(words, seed),
        None => RandomWordProvider::from_entropy(words),
    }
    .with_context(|| format!("no usable words in word list '{}'", cli.wordlist))?;

    Ok(Box::new(provider))
}

fn start_session(cli: &Cli) -> Result<GameSession<Box<dyn WordProvider>, MonotonicClock>> {
    let provider = build_provider(cli)?;
    GameSession::new(provider, MonotonicClock::new()).context("could not pick a hidden word")
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.as_ref().unwrap_or(&Commands::Play);

    let console_logging = !matches!(command, Commands::Play);
    let _log_guard = logging::init(cli.log_file.as_deref(), console_logging)?;

    match command {
        Commands::Play => {
            let session = start_session(&cli)?;
            run_tui(App::new(session))
        }
        Commands::Simple => {
            let mut session = start_session(&cli)?;
            run_simple(&mut session)
        }
        Commands::Check { guess, target } => {
            let result = check_guess(guess, target).context("invalid word")?;
            print_check_result(&result);
            Ok(())
        }
    }
}

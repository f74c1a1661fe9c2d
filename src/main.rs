//! Cryptogram - CLI
//!
//! Substitution-cryptogram puzzle game with letter and number ciphers.

use anyhow::Result;
use clap::{Parser, Subcommand};
use cryptogram::{
    commands::run_play,
    core::AlphabetKind,
    frequency,
    output::print_leaderboard,
    phrases::PhraseSource,
    storage,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "cryptogram",
    about = "Substitution cryptogram puzzles: guess the phrase behind a random cipher",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Alphabet: letter (default) or number
    #[arg(short, long, global = true, default_value = "letter")]
    mode: String,

    /// Phrase corpus file, one phrase per line (built-in pool if omitted)
    #[arg(short, long, global = true)]
    phrases: Option<PathBuf>,

    /// Player roster file
    #[arg(long, global = true, default_value = "players.json")]
    players: PathBuf,

    /// Saved game file
    #[arg(long, global = true, default_value = "game.json")]
    save: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive play mode (default)
    Play,

    /// Show the leaderboard from the roster file
    Leaderboard {
        /// Number of players to show
        #[arg(short = 'n', long, default_value = "10")]
        limit: usize,
    },

    /// Print the English letter-frequency reference table
    English,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let kind = AlphabetKind::from_name(&cli.mode)
        .ok_or_else(|| anyhow::anyhow!("unknown mode {:?} (use letter or number)", cli.mode))?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let source = PhraseSource::load_or_fallback(cli.phrases.as_deref());
            run_play(&source, kind, &cli.players, &cli.save).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Leaderboard { limit } => {
            let roster = storage::load_roster(&cli.players)?;
            print_leaderboard(&roster, limit);
            Ok(())
        }
        Commands::English => {
            for (letter, pct) in frequency::english_frequencies() {
                println!("{letter}  {pct:>5.2}%");
            }
            Ok(())
        }
    }
}

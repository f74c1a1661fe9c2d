//! Interactive play mode
//!
//! Text-based menu loop: log in, generate cryptograms, and guess symbol by
//! symbol until the puzzle is solved. The roster is saved on exit.

use crate::core::{AlphabetKind, Symbol};
use crate::game::GameSession;
use crate::output;
use crate::phrases::PhraseSource;
use crate::storage;
use colored::Colorize;
use std::io::{self, Write};
use std::path::Path;

/// Run the interactive play loop
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if the
/// roster file exists but cannot be read.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_play(
    source: &PhraseSource,
    kind: AlphabetKind,
    players_path: &Path,
    save_path: &Path,
) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Cryptogram - {:<6} mode                   ║", kind.name());
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    let mut roster = storage::load_roster(players_path).map_err(|e| e.to_string())?;

    let username = loop {
        let name = get_user_input("Username")?;
        if name.is_empty() {
            println!("Please enter a username.");
        } else {
            break name;
        }
    };
    let mut player = roster.login(&username).clone();
    println!(
        "\nWelcome, {}! Type 'help' for the command list.\n",
        username.bright_cyan()
    );

    let mut session = GameSession::new(&mut player);
    // Set false after showing the solution, back to true on the next puzzle
    let mut allow_guesses = true;
    // check_correct() credits a solve each time it returns true, so ask once
    let mut credited = false;

    loop {
        let command = get_user_input("Command")?.to_lowercase();
        match command.as_str() {
            "new" | "n" => {
                session.generate(source, kind, &mut rand::rng());
                allow_guesses = true;
                credited = false;
                println!("\n🔄 New cryptogram generated!");
                show_state(&session);
            }
            "enter" | "e" => {
                if !guessing_available(&session, allow_guesses) {
                    continue;
                }
                let Some(symbol) = prompt_symbol(&session, "Cipher symbol")? else {
                    continue;
                };
                let guess = get_user_input("Plaintext letter")?;
                let Some(guess) = guess.chars().next() else {
                    println!("Enter a letter to guess.");
                    continue;
                };
                match session.enter(symbol, guess) {
                    Ok(()) => show_state(&session),
                    Err(e) => println!("{}", e.to_string().red()),
                }
            }
            "undo" | "u" => {
                if !guessing_available(&session, allow_guesses) {
                    continue;
                }
                let Some(symbol) = prompt_symbol(&session, "Cipher symbol to undo")? else {
                    continue;
                };
                match session.undo(symbol) {
                    Ok(removed) => {
                        println!("✓ Removed {removed} from {symbol}");
                        show_state(&session);
                    }
                    Err(e) => println!("{}", e.to_string().red()),
                }
            }
            "hint" | "h" => {
                if !guessing_available(&session, allow_guesses) {
                    continue;
                }
                let Some(symbol) = prompt_symbol(&session, "Cipher symbol to reveal")? else {
                    continue;
                };
                match session.hint(symbol) {
                    Ok(hint) => {
                        match hint.replaced {
                            Some(old) => {
                                println!("✓ Changed {symbol} from {old} to {}", hint.answer);
                            }
                            None => println!("✓ {symbol} is {}", hint.answer),
                        }
                        show_state(&session);
                    }
                    Err(e) => println!("{}", e.to_string().red()),
                }
            }
            "freq" | "f" => match session.cryptogram() {
                Some(puzzle) => output::print_frequency_comparison(puzzle),
                None => println!("Generate a cryptogram first ('new')."),
            },
            "solution" => match session.cryptogram() {
                Some(puzzle) => {
                    println!("Cryptogram solution: {}", puzzle.phrase().to_string().bright_green());
                    allow_guesses = false;
                }
                None => println!("Generate a cryptogram first ('new')."),
            },
            "save" | "w" => match session.snapshot() {
                Some(snapshot) => match storage::save_session(&snapshot, save_path) {
                    Ok(()) => println!("✓ Game saved to {}", save_path.display()),
                    Err(e) => println!("{}", format!("Could not save: {e}").red()),
                },
                None => println!("Nothing to save yet."),
            },
            "load" | "l" => match load_saved_game(&mut session, save_path, &username) {
                Ok(()) => {
                    allow_guesses = true;
                    credited = false;
                    show_state(&session);
                }
                Err(e) => println!("{}", e.red()),
            },
            "stats" | "t" => output::print_player_stats(session.player()),
            "top" | "b" => {
                // Include this session's progress in the view
                let mut view = roster.clone();
                view.upsert(session.player().clone());
                output::print_leaderboard(&view, 10);
            }
            "help" | "?" => print_menu(),
            "quit" | "q" | "exit" => break,
            "" => {}
            _ => println!("Unknown command {command:?}; type 'help' for the list."),
        }

        // A finished board is checked once, win or lose
        if allow_guesses && !credited && session.cryptogram().is_some() && session.is_complete() {
            credited = true;
            if session.check_correct() {
                println!(
                    "\n{}",
                    "🎉 Correct! Cryptogram solved! 🎉".bright_green().bold()
                );
                output::print_player_stats(session.player());
                println!("\nType 'new' for another puzzle.");
            } else {
                println!(
                    "\n{}",
                    "All symbols are guessed, but something is off. Try 'undo'.".yellow()
                );
                // Re-check once the player changes the board
                credited = false;
            }
        }
    }

    drop(session);
    roster.upsert(player);
    storage::save_roster(&roster, players_path).map_err(|e| e.to_string())?;
    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

fn print_menu() {
    println!("\nCommands:");
    println!("  new       generate a new cryptogram");
    println!("  enter     guess a letter for a cipher symbol");
    println!("  undo      remove a guess");
    println!("  hint      reveal the letter for a cipher symbol");
    println!("  freq      show symbol and English letter frequencies");
    println!("  solution  show the solution (locks guessing)");
    println!("  save      save the current game");
    println!("  load      resume a saved game");
    println!("  stats     show your statistics");
    println!("  top       show the leaderboard");
    println!("  quit      save players and exit");
}

fn show_state(session: &GameSession<'_>) {
    if let Some(puzzle) = session.cryptogram() {
        output::print_game_state(puzzle, session.guesses());
    }
}

/// Whether guess commands may run right now, explaining why not otherwise
fn guessing_available(session: &GameSession<'_>, allow_guesses: bool) -> bool {
    if session.cryptogram().is_none() {
        println!("Generate a cryptogram first ('new').");
        return false;
    }
    if !allow_guesses {
        println!("The solution was shown; type 'new' for a fresh puzzle.");
        return false;
    }
    true
}

/// Prompt for a cipher symbol of the active puzzle's alphabet
fn prompt_symbol(session: &GameSession<'_>, prompt: &str) -> Result<Option<Symbol>, String> {
    let Some(puzzle) = session.cryptogram() else {
        println!("Generate a cryptogram first ('new').");
        return Ok(None);
    };

    let text = get_user_input(prompt)?;
    match puzzle.kind().parse(&text) {
        Some(symbol) => Ok(Some(symbol)),
        None => {
            println!(
                "{}",
                format!("{text:?} is not a {} symbol", puzzle.kind()).red()
            );
            Ok(None)
        }
    }
}

/// Load, validate, and resume a saved game
fn load_saved_game(
    session: &mut GameSession<'_>,
    save_path: &Path,
    username: &str,
) -> Result<(), String> {
    let snapshot = storage::load_session(save_path)
        .map_err(|e| format!("Could not load {}: {e}", save_path.display()))?;
    let (cryptogram, board) = snapshot.restore().map_err(|e| e.to_string())?;

    if snapshot.player != username {
        println!("Note: this game was saved by {}", snapshot.player);
    }
    session.resume(cryptogram, board);
    println!("✓ Game loaded from {}", save_path.display());
    Ok(())
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}

//! Terminal output formatting
//!
//! Rendering for the play loop: the cipher line with the player's partial
//! solution aligned under it, the frequency comparison table, and player
//! statistics.

use crate::cipher::Cryptogram;
use crate::core::Symbol;
use crate::frequency;
use crate::game::{GuessBoard, Player, Roster};
use colored::Colorize;
use std::collections::BTreeSet;

/// Render the cipher line and the player line beneath it
///
/// Both lines are token-aligned: each guess (or `_` placeholder) is padded to
/// its symbol's width, so number symbols like "17" stay in column.
#[must_use]
pub fn render_board(puzzle: &Cryptogram, board: &GuessBoard) -> (String, String) {
    let mut cipher_parts = Vec::new();
    let mut player_parts = Vec::new();

    for token in puzzle.cipher_text().tokens() {
        match token.symbol() {
            None => {
                cipher_parts.push(" ".to_string());
                player_parts.push(" ".to_string());
            }
            Some(symbol) => {
                let width = symbol.width();
                cipher_parts.push(symbol.to_string());
                player_parts.push(match board.guess_for(symbol) {
                    Some(guess) => format!("{guess:<width$}"),
                    None => "_".repeat(width),
                });
            }
        }
    }

    (cipher_parts.join(" "), player_parts.join(" "))
}

/// Print the current puzzle and the player's progress
pub fn print_game_state(puzzle: &Cryptogram, board: &GuessBoard) {
    let (cipher_line, player_line) = render_board(puzzle, board);
    println!("\nCiphertext: {}", cipher_line.bright_yellow());
    println!("Playertext: {}", player_line.bright_white());
}

/// Print cipher-symbol frequencies next to the English reference table
pub fn print_frequency_comparison(puzzle: &Cryptogram) {
    let freq = frequency::cipher_frequencies(puzzle.cipher_text());
    let used: BTreeSet<Symbol> = puzzle.cipher_text().symbols().collect();

    println!("\n{}", "Cipher symbol frequencies:".bright_cyan());
    for symbol in used {
        let pct = freq.get(&symbol.to_string()).copied().unwrap_or(0.0);
        println!("  {:>2}  {pct:>6.2}%", symbol.to_string());
    }

    println!("\n{}", "English letter frequencies:".bright_cyan());
    for (letter, pct) in frequency::english_frequencies() {
        println!("  {letter:>2}  {pct:>6.2}%");
    }
}

/// Print one player's statistics
pub fn print_player_stats(player: &Player) {
    println!("\n{}", format!("Stats for {}", player.username()).bold());
    println!(
        "  Guesses:     {} correct of {} ({:.0}%)",
        player.guesses_correct(),
        player.guesses_total(),
        player.guess_accuracy() * 100.0
    );
    println!(
        "  Cryptograms: {} solved of {} played ({:.0}%)",
        player.cryptograms_solved(),
        player.cryptograms_played(),
        player.solve_rate() * 100.0
    );
}

/// Print the top players by cryptograms solved
pub fn print_leaderboard(roster: &Roster, limit: usize) {
    if roster.is_empty() {
        println!("No players yet.");
        return;
    }

    println!("\n{}", "Leaderboard".bold());
    for (rank, player) in roster.leaderboard(limit).iter().enumerate() {
        println!(
            "  {:>2}. {:<16} {:>3} solved / {:>3} played",
            rank + 1,
            player.username(),
            player.cryptograms_solved(),
            player.cryptograms_played()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AlphabetKind, Phrase};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn puzzle(kind: AlphabetKind) -> Cryptogram {
        let mut rng = StdRng::seed_from_u64(64);
        Cryptogram::generate(Phrase::new("AB BA").unwrap(), kind, &mut rng)
    }

    #[test]
    fn board_lines_align_token_for_token() {
        let puzzle = puzzle(AlphabetKind::Number);
        let board = GuessBoard::new();

        let (cipher_line, player_line) = render_board(&puzzle, &board);
        assert_eq!(cipher_line.len(), player_line.len());
        // Four symbols, no guesses: four underscore groups
        assert_eq!(player_line.matches('_').count(), {
            let widths: usize = puzzle.cipher_text().symbols().map(Symbol::width).sum();
            widths
        });
    }

    #[test]
    fn guessed_symbols_show_their_guess() {
        let puzzle = puzzle(AlphabetKind::Letter);
        let mut board = GuessBoard::new();

        let a = puzzle
            .answer_key()
            .iter()
            .find_map(|(s, c)| (*c == 'A').then_some(*s))
            .unwrap();
        board.enter(&puzzle, a, 'A').unwrap();

        let (_, player_line) = render_board(&puzzle, &board);
        assert_eq!(player_line.matches('A').count(), 2);
        assert_eq!(player_line.matches('_').count(), 2);
    }

    #[test]
    fn word_gap_is_preserved() {
        let puzzle = puzzle(AlphabetKind::Letter);
        let (cipher_line, _) = render_board(&puzzle, &GuessBoard::new());
        // Two words of two symbols: "x x   y y"
        assert!(cipher_line.contains("   "));
    }
}

//! Player guess state
//!
//! A GuessBoard tracks one guess per cipher symbol. Each symbol occurring in
//! the cipher text is either unguessed or guessed; enter, undo, and hint move
//! symbols between those two states. Every rejected call leaves the board
//! untouched.

use crate::cipher::Cryptogram;
use crate::core::Symbol;
use rustc_hash::FxHashMap;
use std::fmt;

/// Error type for rejected guess operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessError {
    /// No cryptogram has been generated yet
    NoCryptogram,
    /// The symbol is not part of the current puzzle
    InvalidSymbol(Symbol),
    /// The symbol already has a guess; undo it first
    AlreadyGuessed(Symbol),
    /// The symbol has no guess to undo
    NotGuessed(Symbol),
    /// Hints are only available while the puzzle is incomplete
    PuzzleComplete,
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCryptogram => write!(f, "No cryptogram is active"),
            Self::InvalidSymbol(s) => write!(f, "{s} is not part of this puzzle"),
            Self::AlreadyGuessed(s) => {
                write!(f, "{s} already has a guess; undo it before re-entering")
            }
            Self::NotGuessed(s) => write!(f, "{s} has no guess to undo"),
            Self::PuzzleComplete => write!(f, "The puzzle is already complete"),
        }
    }
}

impl std::error::Error for GuessError {}

/// What a hint did to the requested symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HintResult {
    /// The correct plaintext character that is now on the board
    pub answer: char,
    /// The previous guess, if the hint replaced one
    pub replaced: Option<char>,
}

/// Per-symbol guess map over the symbols of one cryptogram
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessBoard {
    guesses: FxHashMap<Symbol, char>,
}

impl GuessBoard {
    /// Create an empty board
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a board from already-validated entries (snapshot restore)
    pub(crate) fn from_entries(guesses: FxHashMap<Symbol, char>) -> Self {
        Self { guesses }
    }

    /// Enter a guess for an unguessed symbol
    ///
    /// The guess is uppercased before it is stored. Returns whether the guess
    /// matches the answer key, so the caller can track accuracy.
    ///
    /// # Errors
    /// - `InvalidSymbol` if the symbol does not occur in the cipher text
    /// - `AlreadyGuessed` if the symbol already has a guess
    ///
    /// # Panics
    /// Panics if the answer key lacks an entry for a symbol that occurs in
    /// the cipher text. That state is unreachable through generation or
    /// snapshot validation and indicates a defect in the cipher engine.
    pub fn enter(
        &mut self,
        puzzle: &Cryptogram,
        symbol: Symbol,
        guess: char,
    ) -> Result<bool, GuessError> {
        if !puzzle.cipher_text().contains(symbol) {
            return Err(GuessError::InvalidSymbol(symbol));
        }
        if self.guesses.contains_key(&symbol) {
            return Err(GuessError::AlreadyGuessed(symbol));
        }

        let answer = puzzle
            .answer_for(symbol)
            .expect("answer key covers every symbol occurring in the cipher text");

        let guess = guess.to_ascii_uppercase();
        self.guesses.insert(symbol, guess);
        Ok(guess == answer)
    }

    /// Remove the guess for a symbol, returning it to the unguessed state
    ///
    /// # Errors
    /// - `InvalidSymbol` if the symbol does not occur in the cipher text
    /// - `NotGuessed` if the symbol has no guess
    pub fn undo(&mut self, puzzle: &Cryptogram, symbol: Symbol) -> Result<char, GuessError> {
        if !puzzle.cipher_text().contains(symbol) {
            return Err(GuessError::InvalidSymbol(symbol));
        }
        self.guesses
            .remove(&symbol)
            .ok_or(GuessError::NotGuessed(symbol))
    }

    /// Reveal the correct character for a symbol, replacing any prior guess
    ///
    /// # Errors
    /// - `PuzzleComplete` if every symbol already has a guess
    /// - `InvalidSymbol` if the symbol does not occur in the cipher text
    pub fn hint(&mut self, puzzle: &Cryptogram, symbol: Symbol) -> Result<HintResult, GuessError> {
        if self.is_complete(puzzle) {
            return Err(GuessError::PuzzleComplete);
        }
        if !puzzle.cipher_text().contains(symbol) {
            return Err(GuessError::InvalidSymbol(symbol));
        }

        let answer = puzzle
            .answer_for(symbol)
            .expect("answer key covers every symbol occurring in the cipher text");

        let replaced = self.guesses.insert(symbol, answer);
        Ok(HintResult { answer, replaced })
    }

    /// Whether every symbol occurring in the cipher text has a guess
    #[must_use]
    pub fn is_complete(&self, puzzle: &Cryptogram) -> bool {
        puzzle
            .cipher_text()
            .symbols()
            .all(|s| self.guesses.contains_key(&s))
    }

    /// Whether the guesses reproduce the phrase at every non-space position
    ///
    /// A missing guess for any required symbol makes this false, so callers
    /// usually check [`is_complete`](Self::is_complete) first to distinguish
    /// "wrong" from "not finished".
    #[must_use]
    pub fn is_correct(&self, puzzle: &Cryptogram) -> bool {
        for (i, token) in puzzle.cipher_text().tokens().iter().enumerate() {
            let Some(symbol) = token.symbol() else {
                continue;
            };
            if self.guesses.get(&symbol) != Some(&puzzle.phrase().char_at(i)) {
                return false;
            }
        }
        true
    }

    /// The current guess for a symbol, if any
    #[must_use]
    pub fn guess_for(&self, symbol: Symbol) -> Option<char> {
        self.guesses.get(&symbol).copied()
    }

    /// Iterate over all (symbol, guess) entries
    pub fn entries(&self) -> impl Iterator<Item = (Symbol, char)> + '_ {
        self.guesses.iter().map(|(s, c)| (*s, *c))
    }

    /// Number of guessed symbols
    #[must_use]
    pub fn len(&self) -> usize {
        self.guesses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.guesses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AlphabetKind, Phrase};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn puzzle(text: &str, kind: AlphabetKind) -> Cryptogram {
        let mut rng = StdRng::seed_from_u64(99);
        Cryptogram::generate(Phrase::new(text).unwrap(), kind, &mut rng)
    }

    /// The cipher symbol that stands for a plaintext letter
    fn symbol_for(puzzle: &Cryptogram, plain: char) -> Symbol {
        puzzle
            .answer_key()
            .iter()
            .find_map(|(s, c)| (*c == plain).then_some(*s))
            .unwrap()
    }

    #[test]
    fn enter_records_uppercased_guess() {
        let puzzle = puzzle("TEST", AlphabetKind::Letter);
        let mut board = GuessBoard::new();

        let t = symbol_for(&puzzle, 'T');
        let correct = board.enter(&puzzle, t, 't').unwrap();
        assert!(correct);
        assert_eq!(board.guess_for(t), Some('T'));
    }

    #[test]
    fn enter_reports_wrong_guess_but_still_commits() {
        let puzzle = puzzle("TEST", AlphabetKind::Letter);
        let mut board = GuessBoard::new();

        let t = symbol_for(&puzzle, 'T');
        let correct = board.enter(&puzzle, t, 'X').unwrap();
        assert!(!correct);
        assert_eq!(board.guess_for(t), Some('X'));
    }

    #[test]
    fn enter_twice_without_undo_is_rejected_and_mutates_nothing() {
        let puzzle = puzzle("TEST", AlphabetKind::Letter);
        let mut board = GuessBoard::new();

        let t = symbol_for(&puzzle, 'T');
        board.enter(&puzzle, t, 'A').unwrap();
        let before = board.clone();

        assert_eq!(
            board.enter(&puzzle, t, 'B'),
            Err(GuessError::AlreadyGuessed(t))
        );
        assert_eq!(board, before);
    }

    #[test]
    fn enter_rejects_symbol_outside_puzzle() {
        let puzzle = puzzle("TEST", AlphabetKind::Letter);
        let mut board = GuessBoard::new();

        // TEST uses 3 symbols; some alphabet symbol is unused
        let unused = AlphabetKind::Letter
            .symbols()
            .find(|s| !puzzle.contains_symbol(*s))
            .unwrap();
        assert_eq!(
            board.enter(&puzzle, unused, 'T'),
            Err(GuessError::InvalidSymbol(unused))
        );
        assert!(board.is_empty());

        // A symbol from the other alphabet is never valid either
        let foreign = AlphabetKind::Number.symbol(0);
        assert!(matches!(
            board.enter(&puzzle, foreign, 'T'),
            Err(GuessError::InvalidSymbol(_))
        ));
    }

    #[test]
    fn undo_restores_pre_enter_state_exactly() {
        let puzzle = puzzle("TEST", AlphabetKind::Number);
        let mut board = GuessBoard::new();
        let before = board.clone();

        let e = symbol_for(&puzzle, 'E');
        board.enter(&puzzle, e, 'E').unwrap();
        let removed = board.undo(&puzzle, e).unwrap();

        assert_eq!(removed, 'E');
        assert_eq!(board, before);
        assert_eq!(board.guess_for(e), None);
    }

    #[test]
    fn undo_without_guess_is_rejected() {
        let puzzle = puzzle("TEST", AlphabetKind::Letter);
        let mut board = GuessBoard::new();

        let s = symbol_for(&puzzle, 'S');
        assert_eq!(board.undo(&puzzle, s), Err(GuessError::NotGuessed(s)));
    }

    #[test]
    fn hint_fills_an_empty_symbol() {
        let puzzle = puzzle("TEST", AlphabetKind::Letter);
        let mut board = GuessBoard::new();

        let e = symbol_for(&puzzle, 'E');
        let hint = board.hint(&puzzle, e).unwrap();
        assert_eq!(hint.answer, 'E');
        assert_eq!(hint.replaced, None);
        assert_eq!(board.guess_for(e), Some('E'));
    }

    #[test]
    fn hint_replaces_an_existing_guess() {
        let puzzle = puzzle("TEST", AlphabetKind::Letter);
        let mut board = GuessBoard::new();

        let e = symbol_for(&puzzle, 'E');
        board.enter(&puzzle, e, 'Q').unwrap();

        let hint = board.hint(&puzzle, e).unwrap();
        assert_eq!(hint.answer, 'E');
        assert_eq!(hint.replaced, Some('Q'));
        assert_eq!(board.guess_for(e), Some('E'));
    }

    #[test]
    fn hint_acts_on_the_requested_symbol_only() {
        let puzzle = puzzle("TEST", AlphabetKind::Letter);
        let mut board = GuessBoard::new();

        let s = symbol_for(&puzzle, 'S');
        board.hint(&puzzle, s).unwrap();

        assert_eq!(board.len(), 1);
        assert_eq!(board.guess_for(s), Some('S'));
        assert_eq!(board.guess_for(symbol_for(&puzzle, 'T')), None);
        assert_eq!(board.guess_for(symbol_for(&puzzle, 'E')), None);
    }

    #[test]
    fn hint_is_rejected_once_complete() {
        let puzzle = puzzle("TEST", AlphabetKind::Letter);
        let mut board = GuessBoard::new();

        for plain in ['T', 'E', 'S'] {
            let symbol = symbol_for(&puzzle, plain);
            board.enter(&puzzle, symbol, plain).unwrap();
        }
        assert!(board.is_complete(&puzzle));
        assert_eq!(
            board.hint(&puzzle, symbol_for(&puzzle, 'T')),
            Err(GuessError::PuzzleComplete)
        );
    }

    #[test]
    fn scenario_test_phrase_completes_and_solves() {
        // Phrase TEST: guessing T, E, S covers all four positions because the
        // fourth character reuses T's symbol.
        let puzzle = puzzle("TEST", AlphabetKind::Letter);
        let mut board = GuessBoard::new();

        for plain in ['T', 'E', 'S'] {
            let symbol = symbol_for(&puzzle, plain);
            assert!(board.enter(&puzzle, symbol, plain).unwrap());
        }

        assert!(board.is_complete(&puzzle));
        assert!(board.is_correct(&puzzle));
    }

    #[test]
    fn is_complete_false_while_any_symbol_is_open() {
        let puzzle = puzzle("TEST", AlphabetKind::Number);
        let mut board = GuessBoard::new();

        board.enter(&puzzle, symbol_for(&puzzle, 'T'), 'T').unwrap();
        board.enter(&puzzle, symbol_for(&puzzle, 'E'), 'E').unwrap();
        assert!(!board.is_complete(&puzzle));
    }

    #[test]
    fn is_correct_false_on_wrong_or_missing_guess() {
        let puzzle = puzzle("TEST", AlphabetKind::Letter);
        let mut board = GuessBoard::new();

        // Missing guesses
        assert!(!board.is_correct(&puzzle));

        board.enter(&puzzle, symbol_for(&puzzle, 'T'), 'T').unwrap();
        board.enter(&puzzle, symbol_for(&puzzle, 'E'), 'E').unwrap();
        board.enter(&puzzle, symbol_for(&puzzle, 'S'), 'Z').unwrap();
        assert!(board.is_complete(&puzzle));
        assert!(!board.is_correct(&puzzle));

        // Fix the wrong guess
        board.undo(&puzzle, symbol_for(&puzzle, 'S')).unwrap();
        board.enter(&puzzle, symbol_for(&puzzle, 'S'), 'S').unwrap();
        assert!(board.is_correct(&puzzle));
    }

    #[test]
    fn is_correct_matches_answer_key_pointwise() {
        let puzzle = puzzle("NO PAIN NO GAIN", AlphabetKind::Number);
        let mut board = GuessBoard::new();

        let symbols: Vec<Symbol> = puzzle.answer_key().keys().copied().collect();
        for symbol in &symbols {
            let answer = puzzle.answer_for(*symbol).unwrap();
            board.enter(&puzzle, *symbol, answer).unwrap();
        }
        assert!(board.is_correct(&puzzle));

        // Perturb one entry and it must fail
        let first = symbols[0];
        board.undo(&puzzle, first).unwrap();
        board.enter(&puzzle, first, '?').unwrap();
        assert!(!board.is_correct(&puzzle));
    }
}

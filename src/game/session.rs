//! Game sessions
//!
//! A GameSession ties one player's statistics to the active cryptogram and
//! guess board, and enforces the coupling rules: generating a puzzle counts
//! as played immediately, each committed guess feeds the accuracy ratio, and
//! a confirmed solve bumps the solved counter.

use crate::cipher::{CipherText, Cryptogram};
use crate::core::{AlphabetKind, Symbol};
use crate::game::guesses::{GuessBoard, GuessError, HintResult};
use crate::game::player::Player;
use crate::phrases::PhraseSource;
use crate::snapshot::SessionSnapshot;
use rand::Rng;

/// One player's turn-based game state
pub struct GameSession<'p> {
    player: &'p mut Player,
    cryptogram: Option<Cryptogram>,
    board: GuessBoard,
}

impl<'p> GameSession<'p> {
    /// Start a session for a logged-in player
    pub fn new(player: &'p mut Player) -> Self {
        Self {
            player,
            cryptogram: None,
            board: GuessBoard::new(),
        }
    }

    /// Generate a new cryptogram, discarding any current puzzle and guesses
    ///
    /// The phrase never repeats the immediately preceding one (when the
    /// corpus has an alternative), and the permutation is freshly randomized
    /// on every call. Counts toward the player's played total even if the
    /// puzzle is later abandoned.
    pub fn generate<R: Rng + ?Sized>(
        &mut self,
        source: &PhraseSource,
        kind: AlphabetKind,
        rng: &mut R,
    ) -> &Cryptogram {
        let previous = self.cryptogram.as_ref().map(Cryptogram::phrase);
        let phrase = source.draw_avoiding(rng, previous);

        self.player.record_played();
        self.board = GuessBoard::new();
        self.cryptogram.insert(Cryptogram::generate(phrase, kind, rng))
    }

    /// Enter a guess for a symbol and update the player's accuracy counters
    ///
    /// # Errors
    /// Fails without touching the board or the counters when no cryptogram is
    /// active, the symbol is not in the puzzle, or it is already guessed.
    pub fn enter(&mut self, symbol: Symbol, guess: char) -> Result<(), GuessError> {
        let puzzle = self.cryptogram.as_ref().ok_or(GuessError::NoCryptogram)?;
        let correct = self.board.enter(puzzle, symbol, guess)?;
        self.player.record_guess(correct);
        Ok(())
    }

    /// Remove the guess for a symbol
    ///
    /// Accuracy counters record attempts, not current state, so undo leaves
    /// them untouched.
    ///
    /// # Errors
    /// Fails when no cryptogram is active or the symbol has no guess.
    pub fn undo(&mut self, symbol: Symbol) -> Result<char, GuessError> {
        let puzzle = self.cryptogram.as_ref().ok_or(GuessError::NoCryptogram)?;
        self.board.undo(puzzle, symbol)
    }

    /// Reveal the correct character for a symbol
    ///
    /// Hints bypass the accuracy counters entirely.
    ///
    /// # Errors
    /// Fails when no cryptogram is active, the puzzle is complete, or the
    /// symbol is not in the puzzle.
    pub fn hint(&mut self, symbol: Symbol) -> Result<HintResult, GuessError> {
        let puzzle = self.cryptogram.as_ref().ok_or(GuessError::NoCryptogram)?;
        self.board.hint(puzzle, symbol)
    }

    /// Whether every symbol in the cipher text has a guess
    ///
    /// Vacuously true when no cryptogram is active.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cryptogram
            .as_ref()
            .is_none_or(|puzzle| self.board.is_complete(puzzle))
    }

    /// Whether the guesses solve the puzzle, crediting the player if so
    ///
    /// A true result increments the solved counter, so callers ask once per
    /// puzzle — typically right after [`is_complete`](Self::is_complete)
    /// turns true. False when no cryptogram is active.
    pub fn check_correct(&mut self) -> bool {
        let Some(puzzle) = self.cryptogram.as_ref() else {
            return false;
        };
        let correct = self.board.is_correct(puzzle);
        if correct {
            self.player.record_solved();
        }
        correct
    }

    /// The active cryptogram, if one was generated
    #[must_use]
    pub fn cryptogram(&self) -> Option<&Cryptogram> {
        self.cryptogram.as_ref()
    }

    /// The active cipher text, if one was generated
    #[must_use]
    pub fn cipher_text(&self) -> Option<&CipherText> {
        self.cryptogram.as_ref().map(Cryptogram::cipher_text)
    }

    /// The player's current guesses
    #[must_use]
    pub const fn guesses(&self) -> &GuessBoard {
        &self.board
    }

    /// The player this session belongs to
    #[must_use]
    pub fn player(&self) -> &Player {
        self.player
    }

    /// Capture the session as a plain snapshot, if a cryptogram is active
    #[must_use]
    pub fn snapshot(&self) -> Option<SessionSnapshot> {
        self.cryptogram
            .as_ref()
            .map(|puzzle| SessionSnapshot::capture(puzzle, &self.board, self.player.username()))
    }

    /// Adopt a restored cryptogram and guess board
    ///
    /// Used after snapshot validation; does not touch the played counter,
    /// since the restored puzzle was counted when first generated.
    pub fn resume(&mut self, cryptogram: Cryptogram, board: GuessBoard) {
        self.cryptogram = Some(cryptogram);
        self.board = board;
    }
}

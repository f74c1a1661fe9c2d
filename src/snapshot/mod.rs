//! Session snapshots
//!
//! A snapshot is the complete, plain-data state of a session: phrase, cipher
//! text, answer key, guesses, and the owning player's username. Every field
//! is reconstructible text — no derived or cached state — so any store can
//! hold it. Restoring re-derives the typed puzzle and validates every
//! invariant; a snapshot that fails validation is rejected as corrupt, never
//! repaired.

use crate::cipher::{CipherText, Cryptogram};
use crate::core::{AlphabetKind, Phrase, PhraseError, Symbol, Token};
use crate::game::GuessBoard;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Schema version written into every snapshot
pub const SNAPSHOT_VERSION: u32 = 1;

/// The space token's string form inside `cipher_text`
const SPACE_TOKEN: &str = " ";

/// Error type for snapshots that cannot be resumed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    UnsupportedVersion(u32),
    UnknownAlphabet(String),
    InvalidPhrase(PhraseError),
    LengthMismatch { phrase: usize, cipher: usize },
    SpaceMisaligned(usize),
    UnknownSymbol(String),
    CipherNotBijective(String),
    AnswerKeyMismatch(String),
    ForeignGuess(String),
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot resume: ")?;
        match self {
            Self::UnsupportedVersion(v) => write!(f, "unsupported snapshot version {v}"),
            Self::UnknownAlphabet(name) => write!(f, "unknown alphabet {name:?}"),
            Self::InvalidPhrase(e) => write!(f, "invalid phrase ({e})"),
            Self::LengthMismatch { phrase, cipher } => write!(
                f,
                "cipher text has {cipher} tokens for a {phrase}-character phrase"
            ),
            Self::SpaceMisaligned(i) => {
                write!(f, "space misalignment between phrase and cipher text at {i}")
            }
            Self::UnknownSymbol(token) => write!(f, "unparseable symbol {token:?}"),
            Self::CipherNotBijective(token) => {
                write!(f, "symbol {token} breaks the one-to-one mapping")
            }
            Self::AnswerKeyMismatch(token) => {
                write!(f, "answer key disagrees with the cipher text at {token}")
            }
            Self::ForeignGuess(token) => {
                write!(f, "guess for symbol {token} absent from the cipher text")
            }
        }
    }
}

impl std::error::Error for SnapshotError {}

/// Plain serializable session state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub version: u32,
    pub alphabet: String,
    pub phrase: String,
    pub cipher_text: Vec<String>,
    pub answer_key: BTreeMap<String, char>,
    pub guesses: BTreeMap<String, char>,
    /// Identity reference only; statistics live in the roster
    pub player: String,
}

impl SessionSnapshot {
    /// Capture the state of an active puzzle
    #[must_use]
    pub fn capture(puzzle: &Cryptogram, board: &GuessBoard, player: &str) -> Self {
        let cipher_text = puzzle
            .cipher_text()
            .tokens()
            .iter()
            .map(ToString::to_string)
            .collect();

        let answer_key = puzzle
            .answer_key()
            .iter()
            .map(|(s, c)| (s.to_string(), *c))
            .collect();

        let guesses = board.entries().map(|(s, c)| (s.to_string(), c)).collect();

        Self {
            version: SNAPSHOT_VERSION,
            alphabet: puzzle.kind().name().to_string(),
            phrase: puzzle.phrase().text().to_string(),
            cipher_text,
            answer_key,
            guesses,
            player: player.to_string(),
        }
    }

    /// Rebuild the typed puzzle and guess board, validating every invariant
    ///
    /// # Errors
    /// Returns `SnapshotError` when any invariant fails: unknown version or
    /// alphabet, malformed phrase, phrase/cipher length or space
    /// misalignment, unparseable symbols, a cipher text that is not a
    /// bijective image of the phrase, an answer key that disagrees with it,
    /// or a guess for a symbol the cipher text never uses.
    pub fn restore(&self) -> Result<(Cryptogram, GuessBoard), SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion(self.version));
        }

        let kind = AlphabetKind::from_name(&self.alphabet)
            .ok_or_else(|| SnapshotError::UnknownAlphabet(self.alphabet.clone()))?;

        let phrase = Phrase::new(&self.phrase).map_err(SnapshotError::InvalidPhrase)?;

        if self.cipher_text.len() != phrase.len() {
            return Err(SnapshotError::LengthMismatch {
                phrase: phrase.len(),
                cipher: self.cipher_text.len(),
            });
        }

        // Walk the two sequences together: spaces must line up, everything
        // else must parse, and the symbol-to-plaintext mapping must be a
        // bijection.
        let mut tokens = Vec::with_capacity(self.cipher_text.len());
        let mut derived_key: FxHashMap<Symbol, char> = FxHashMap::default();
        for (i, raw) in self.cipher_text.iter().enumerate() {
            let plain = phrase.char_at(i);
            if plain == ' ' || raw == SPACE_TOKEN {
                if plain != ' ' || raw != SPACE_TOKEN {
                    return Err(SnapshotError::SpaceMisaligned(i));
                }
                tokens.push(Token::Space);
                continue;
            }

            let symbol = kind
                .parse(raw)
                .ok_or_else(|| SnapshotError::UnknownSymbol(raw.clone()))?;
            if *derived_key.entry(symbol).or_insert(plain) != plain {
                return Err(SnapshotError::CipherNotBijective(raw.clone()));
            }
            tokens.push(Token::Symbol(symbol));
        }

        let mut seen_plain: FxHashMap<char, Symbol> = FxHashMap::default();
        for (&symbol, &plain) in &derived_key {
            if *seen_plain.entry(plain).or_insert(symbol) != symbol {
                return Err(SnapshotError::CipherNotBijective(symbol.to_string()));
            }
        }

        // The stored answer key must agree with the derived one exactly
        if self.answer_key.len() != derived_key.len() {
            return Err(SnapshotError::AnswerKeyMismatch(format!(
                "{} entries, expected {}",
                self.answer_key.len(),
                derived_key.len()
            )));
        }
        for (raw, &plain) in &self.answer_key {
            let symbol = kind
                .parse(raw)
                .ok_or_else(|| SnapshotError::UnknownSymbol(raw.clone()))?;
            if derived_key.get(&symbol) != Some(&plain) {
                return Err(SnapshotError::AnswerKeyMismatch(raw.clone()));
            }
        }

        // Guesses may only reference symbols the cipher text uses
        let mut guess_map: FxHashMap<Symbol, char> = FxHashMap::default();
        for (raw, &guess) in &self.guesses {
            let symbol = kind
                .parse(raw)
                .ok_or_else(|| SnapshotError::UnknownSymbol(raw.clone()))?;
            if !derived_key.contains_key(&symbol) {
                return Err(SnapshotError::ForeignGuess(raw.clone()));
            }
            guess_map.insert(symbol, guess.to_ascii_uppercase());
        }

        let cryptogram = Cryptogram::from_parts(
            kind,
            phrase,
            CipherText::from_tokens(tokens),
            derived_key,
        );
        Ok((cryptogram, GuessBoard::from_entries(guess_map)))
    }
}

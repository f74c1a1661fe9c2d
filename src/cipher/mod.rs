//! Cryptogram generation
//!
//! A cryptogram draws one uniformly random permutation of the 26-symbol
//! alphabet and substitutes every plaintext letter with the permutation entry
//! at its letter index. The permutation is a bijection, so each plaintext
//! letter maps to exactly one symbol and the answer key is consistent across
//! every occurrence of a symbol.

use crate::core::{ALPHABET_LEN, AlphabetKind, Phrase, Symbol, Token};
use rand::Rng;
use rand::seq::SliceRandom;
use rustc_hash::FxHashMap;
use std::fmt;

/// The encrypted form of a phrase: one token per plaintext character
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CipherText {
    tokens: Vec<Token>,
}

impl CipherText {
    pub(crate) fn from_tokens(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// Number of tokens (equals the phrase length)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// All tokens in phrase order, spaces included
    #[inline]
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Iterate over the non-space symbols in phrase order, with repeats
    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.tokens.iter().filter_map(|t| t.symbol())
    }

    /// Whether a symbol occurs anywhere in this cipher text
    #[must_use]
    pub fn contains(&self, symbol: Symbol) -> bool {
        self.symbols().any(|s| s == symbol)
    }

    /// Render as a single line, tokens separated by spaces
    ///
    /// The whitespace token renders as a bare space, so word boundaries show
    /// up as a wider gap: `Q W C   Z I I`.
    #[must_use]
    pub fn to_line(&self) -> String {
        let parts: Vec<String> = self.tokens.iter().map(ToString::to_string).collect();
        parts.join(" ")
    }
}

impl fmt::Display for CipherText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_line())
    }
}

/// A generated puzzle: phrase, cipher text, and answer key, fixed at creation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cryptogram {
    kind: AlphabetKind,
    phrase: Phrase,
    cipher_text: CipherText,
    answer_key: FxHashMap<Symbol, char>,
}

impl Cryptogram {
    /// Encrypt a phrase under a fresh uniformly random permutation
    ///
    /// Every call draws an independent permutation, so re-encrypting the same
    /// phrase almost always yields a different cipher text. The answer key
    /// records each symbol the first time it is produced; the permutation is
    /// injective, so that recording is consistent for every later occurrence
    /// and is never overwritten.
    ///
    /// # Examples
    /// ```
    /// use cryptogram::cipher::Cryptogram;
    /// use cryptogram::core::{AlphabetKind, Phrase};
    ///
    /// let phrase = Phrase::new("TEST").unwrap();
    /// let puzzle = Cryptogram::generate(phrase, AlphabetKind::Number, &mut rand::rng());
    /// assert_eq!(puzzle.cipher_text().len(), 4);
    /// ```
    pub fn generate<R: Rng + ?Sized>(phrase: Phrase, kind: AlphabetKind, rng: &mut R) -> Self {
        let mut allocations: Vec<u8> = (0..ALPHABET_LEN).collect();
        allocations.shuffle(rng);

        let mut tokens = Vec::with_capacity(phrase.len());
        let mut answer_key = FxHashMap::default();

        for c in phrase.chars() {
            if c == ' ' {
                tokens.push(Token::Space);
                continue;
            }
            let letter_index = (c as u8 - b'A') as usize;
            let symbol = kind.symbol(allocations[letter_index]);
            tokens.push(Token::Symbol(symbol));
            answer_key.entry(symbol).or_insert(c);
        }

        Self {
            kind,
            phrase,
            cipher_text: CipherText::from_tokens(tokens),
            answer_key,
        }
    }

    /// Reassemble a cryptogram from already-validated parts (snapshot restore)
    pub(crate) fn from_parts(
        kind: AlphabetKind,
        phrase: Phrase,
        cipher_text: CipherText,
        answer_key: FxHashMap<Symbol, char>,
    ) -> Self {
        Self {
            kind,
            phrase,
            cipher_text,
            answer_key,
        }
    }

    /// The alphabet kind this puzzle was generated with
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> AlphabetKind {
        self.kind
    }

    /// The hidden solution
    #[inline]
    #[must_use]
    pub const fn phrase(&self) -> &Phrase {
        &self.phrase
    }

    /// The encrypted phrase
    #[inline]
    #[must_use]
    pub const fn cipher_text(&self) -> &CipherText {
        &self.cipher_text
    }

    /// The correct symbol-to-plaintext mapping, covering exactly the symbols
    /// that occur in the cipher text
    #[inline]
    #[must_use]
    pub const fn answer_key(&self) -> &FxHashMap<Symbol, char> {
        &self.answer_key
    }

    /// The correct plaintext character for a symbol occurring in this puzzle
    #[must_use]
    pub fn answer_for(&self, symbol: Symbol) -> Option<char> {
        self.answer_key.get(&symbol).copied()
    }

    /// Whether a symbol occurs in this puzzle's cipher text
    #[must_use]
    pub fn contains_symbol(&self, symbol: Symbol) -> bool {
        self.answer_key.contains_key(&symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn generate(text: &str, kind: AlphabetKind, seed: u64) -> Cryptogram {
        let mut rng = StdRng::seed_from_u64(seed);
        Cryptogram::generate(Phrase::new(text).unwrap(), kind, &mut rng)
    }

    #[test]
    fn cipher_text_length_equals_phrase_length() {
        for kind in [AlphabetKind::Letter, AlphabetKind::Number] {
            let puzzle = generate("THE UNEXAMINED LIFE", kind, 7);
            assert_eq!(puzzle.cipher_text().len(), puzzle.phrase().len());
        }
    }

    #[test]
    fn spaces_pass_through_unchanged() {
        let puzzle = generate("AB CD", AlphabetKind::Number, 3);
        let tokens = puzzle.cipher_text().tokens();
        assert!(tokens[2].is_space());
        assert!(!tokens[0].is_space());
        assert_eq!(tokens.iter().filter(|t| t.is_space()).count(), 1);
    }

    #[test]
    fn every_symbol_belongs_to_the_chosen_alphabet() {
        let puzzle = generate("PACK MY BOX WITH JUGS", AlphabetKind::Number, 11);
        for symbol in puzzle.cipher_text().symbols() {
            assert_eq!(symbol.kind(), AlphabetKind::Number);
            assert!(symbol.index() < 26);
        }
    }

    #[test]
    fn answer_key_round_trips_the_phrase() {
        let puzzle = generate("WE LIVE IN THE BEST OF ALL POSSIBLE WORLDS", AlphabetKind::Letter, 42);
        for (i, token) in puzzle.cipher_text().tokens().iter().enumerate() {
            match token.symbol() {
                Some(symbol) => {
                    assert_eq!(puzzle.answer_for(symbol), Some(puzzle.phrase().char_at(i)));
                }
                None => assert_eq!(puzzle.phrase().char_at(i), ' '),
            }
        }
    }

    #[test]
    fn mapping_is_injective() {
        // Distinct plaintext letters must never share a symbol
        let puzzle = generate("THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG", AlphabetKind::Letter, 5);
        let mut seen: FxHashMap<Symbol, char> = FxHashMap::default();
        for (i, token) in puzzle.cipher_text().tokens().iter().enumerate() {
            if let Some(symbol) = token.symbol() {
                let plain = puzzle.phrase().char_at(i);
                if let Some(&previous) = seen.get(&symbol) {
                    assert_eq!(previous, plain);
                } else {
                    seen.insert(symbol, plain);
                }
            }
        }
        // Injective: as many symbols as distinct plaintext letters
        let distinct_plain: HashSet<char> =
            puzzle.phrase().chars().filter(|c| *c != ' ').collect();
        assert_eq!(seen.len(), distinct_plain.len());
    }

    #[test]
    fn answer_key_covers_exactly_the_used_symbols() {
        let puzzle = generate("TEST", AlphabetKind::Number, 9);
        let used: HashSet<Symbol> = puzzle.cipher_text().symbols().collect();
        let keyed: HashSet<Symbol> = puzzle.answer_key().keys().copied().collect();
        assert_eq!(used, keyed);
        // T, E, S: three distinct letters
        assert_eq!(keyed.len(), 3);
    }

    #[test]
    fn same_seed_same_puzzle() {
        let a = generate("DETERMINISM", AlphabetKind::Letter, 1234);
        let b = generate("DETERMINISM", AlphabetKind::Letter, 1234);
        assert_eq!(a.cipher_text(), b.cipher_text());
    }

    #[test]
    fn repeated_letters_reuse_one_symbol() {
        let puzzle = generate("SEVEN EELS", AlphabetKind::Letter, 21);
        let e = puzzle
            .answer_key()
            .iter()
            .find_map(|(s, c)| (*c == 'E').then_some(*s))
            .unwrap();
        let occurrences = puzzle.cipher_text().symbols().filter(|s| *s == e).count();
        assert_eq!(occurrences, 4);
    }

    #[test]
    fn to_line_separates_tokens() {
        let mut rng = StdRng::seed_from_u64(2);
        let puzzle = Cryptogram::generate(Phrase::new("AB C").unwrap(), AlphabetKind::Number, &mut rng);
        let line = puzzle.cipher_text().to_line();
        // Three symbols plus the bare space token: "n n   n"
        assert_eq!(line.split(' ').filter(|p| !p.is_empty()).count(), 3);
    }
}

//! Symbol-frequency analysis
//!
//! Pure helpers for the frequency view: how often each symbol occurs in a
//! cipher text, next to the published English unigram percentages. Letter
//! cipher text tokenizes per character; number cipher text tokenizes on its
//! comma delimiter. The two must not be conflated — "12" is one number
//! symbol but two letter symbols.

use crate::cipher::CipherText;
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;

/// Published English unigram percentages for 'a'..='z'
const ENGLISH_PERCENTAGES: [f64; 26] = [
    8.12, 1.49, 2.71, 4.32, 12.02, 2.30, 2.03, 5.92, 7.31, 0.10, 0.69, 3.98, 2.61, 6.95, 7.68,
    1.82, 0.11, 6.02, 6.28, 9.10, 2.88, 1.11, 2.09, 0.17, 2.11, 0.07,
];

/// Round a percentage to two decimal places
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Percentage of occurrences for each distinct token
///
/// Returns `occurrences / total * 100`, rounded to two decimal places, for
/// every distinct token in the input. Empty input yields an empty map.
///
/// # Examples
/// ```
/// use cryptogram::frequency::{letter_tokens, occurrence_frequency};
///
/// let freq = occurrence_frequency(letter_tokens("aabbccd"));
/// assert_eq!(freq["a"], 28.57);
/// assert_eq!(freq["d"], 14.29);
/// ```
pub fn occurrence_frequency<I, T>(tokens: I) -> FxHashMap<String, f64>
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    let mut occurrences: FxHashMap<String, u32> = FxHashMap::default();
    let mut total = 0u32;
    for token in tokens {
        *occurrences.entry(token.as_ref().to_string()).or_insert(0) += 1;
        total += 1;
    }

    occurrences
        .into_iter()
        .map(|(token, count)| {
            let pct = round2(f64::from(count) / f64::from(total) * 100.0);
            (token, pct)
        })
        .collect()
}

/// Tokenize letter-mode cipher text: one token per non-whitespace character
#[must_use]
pub fn letter_tokens(text: &str) -> Vec<String> {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .map(String::from)
        .collect()
}

/// Tokenize number-mode cipher text: one token per comma-separated symbol
#[must_use]
pub fn number_tokens(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

/// Occurrence percentages for the symbols of a cipher text
///
/// Works directly on the typed tokens, so letter and number symbols are
/// counted under the correct tokenization by construction.
#[must_use]
pub fn cipher_frequencies(cipher_text: &CipherText) -> FxHashMap<String, f64> {
    occurrence_frequency(cipher_text.symbols().map(|s| s.to_string()))
}

/// The fixed English reference table: lowercase letter to percentage
#[must_use]
pub fn english_frequencies() -> BTreeMap<char, f64> {
    ('a'..='z')
        .zip(ENGLISH_PERCENTAGES)
        .collect()
}

/// The English unigram percentage for a single letter
#[must_use]
pub fn english_frequency(letter: char) -> Option<f64> {
    let lower = letter.to_ascii_lowercase();
    lower
        .is_ascii_lowercase()
        .then(|| ENGLISH_PERCENTAGES[(lower as u8 - b'a') as usize])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cipher::Cryptogram;
    use crate::core::{AlphabetKind, Phrase};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn scenario_letter_mode_percentages() {
        let freq = occurrence_frequency(letter_tokens("aabbccd"));
        assert_eq!(freq.len(), 4);
        assert_eq!(freq["a"], 28.57);
        assert_eq!(freq["b"], 28.57);
        assert_eq!(freq["c"], 28.57);
        assert_eq!(freq["d"], 14.29);
    }

    #[test]
    fn english_reference_values() {
        assert_eq!(english_frequency('a'), Some(8.12));
        assert_eq!(english_frequency('b'), Some(1.49));
        assert_eq!(english_frequency('c'), Some(2.71));
        assert_eq!(english_frequency('E'), Some(12.02));
        assert_eq!(english_frequency('?'), None);

        let table = english_frequencies();
        assert_eq!(table.len(), 26);
        assert_eq!(table[&'z'], 0.07);
    }

    #[test]
    fn letter_tokens_split_per_character() {
        assert_eq!(letter_tokens("AB C"), ["A", "B", "C"]);
    }

    #[test]
    fn number_tokens_split_on_commas_only() {
        // "12" stays one symbol under the number tokenization
        assert_eq!(number_tokens("12,3, 4"), ["12", "3", "4"]);
        assert_eq!(number_tokens(""), Vec::<String>::new());
    }

    #[test]
    fn tokenizations_are_not_conflated() {
        let letters = occurrence_frequency(letter_tokens("12"));
        let numbers = occurrence_frequency(number_tokens("12"));

        assert_eq!(letters.len(), 2);
        assert_eq!(letters["1"], 50.0);
        assert_eq!(numbers.len(), 1);
        assert_eq!(numbers["12"], 100.0);
    }

    #[test]
    fn percentages_sum_to_one_hundred_within_tolerance() {
        let puzzle = Cryptogram::generate(
            Phrase::new("THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG").unwrap(),
            AlphabetKind::Number,
            &mut StdRng::seed_from_u64(77),
        );
        let freq = cipher_frequencies(puzzle.cipher_text());

        let sum: f64 = freq.values().sum();
        let tolerance = 0.1 * freq.len() as f64;
        assert!((sum - 100.0).abs() <= tolerance, "sum was {sum}");
    }

    #[test]
    fn occurrence_frequency_empty_input() {
        let freq = occurrence_frequency(Vec::<String>::new());
        assert!(freq.is_empty());
    }

    #[test]
    fn occurrence_frequency_is_deterministic() {
        let a = occurrence_frequency(letter_tokens("QWCZII"));
        let b = occurrence_frequency(letter_tokens("QWCZII"));
        assert_eq!(a, b);
    }

    #[test]
    fn cipher_frequencies_match_manual_tokenization() {
        let puzzle = Cryptogram::generate(
            Phrase::new("SEE SAW").unwrap(),
            AlphabetKind::Letter,
            &mut StdRng::seed_from_u64(50),
        );
        let typed = cipher_frequencies(puzzle.cipher_text());
        let via_string = occurrence_frequency(letter_tokens(&puzzle.cipher_text().to_line()));
        assert_eq!(typed, via_string);
    }
}

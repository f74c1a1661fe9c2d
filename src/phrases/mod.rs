//! Phrase corpus
//!
//! Supplies random plaintext phrases for new cryptograms. A corpus is loaded
//! from a file of one phrase per line; when the file is missing, unreadable,
//! or yields no usable phrase, the built-in fallback pool takes its place —
//! that substitution is not an error for the caller.

mod embedded;

pub use embedded::FALLBACK_PHRASES;

use crate::core::Phrase;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fs;
use std::io;
use std::path::Path;

/// A read-only pool of phrases to draw puzzles from
#[derive(Debug, Clone)]
pub struct PhraseSource {
    phrases: Vec<Phrase>,
}

impl PhraseSource {
    /// Load a corpus from a file, skipping blank and malformed lines
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read or opened. A readable
    /// file with no usable line yields an empty source; see
    /// [`load_or_fallback`](Self::load_or_fallback).
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;

        let phrases = content
            .lines()
            .filter_map(|line| Phrase::new(line).ok())
            .collect();

        Ok(Self { phrases })
    }

    /// The built-in sample pool
    #[must_use]
    pub fn fallback() -> Self {
        let phrases = FALLBACK_PHRASES
            .iter()
            .filter_map(|&text| Phrase::new(text).ok())
            .collect();
        Self { phrases }
    }

    /// Load a corpus, substituting the fallback pool on any failure
    ///
    /// Passing `None` selects the fallback pool directly. A warning goes to
    /// stderr when a requested file cannot be used.
    #[must_use]
    pub fn load_or_fallback(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::fallback();
        };

        match Self::from_file(path) {
            Ok(source) if !source.is_empty() => source,
            Ok(_) => {
                eprintln!(
                    "No usable phrases in {}; using the built-in pool instead",
                    path.display()
                );
                Self::fallback()
            }
            Err(e) => {
                eprintln!(
                    "Could not read {}: {e}; using the built-in pool instead",
                    path.display()
                );
                Self::fallback()
            }
        }
    }

    /// Draw a uniformly random phrase
    ///
    /// # Panics
    /// Panics if the source is empty; `load_or_fallback` never produces an
    /// empty source.
    #[must_use]
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Phrase {
        self.phrases
            .choose(rng)
            .expect("phrase source must not be empty")
            .clone()
    }

    /// Draw a random phrase different from `avoid`, when the pool allows it
    ///
    /// The avoided phrase is excluded from the candidate pool, so one draw
    /// suffices. A pool whose every phrase equals `avoid` repeats it — the
    /// only alternative would be to never terminate.
    #[must_use]
    pub fn draw_avoiding<R: Rng + ?Sized>(&self, rng: &mut R, avoid: Option<&Phrase>) -> Phrase {
        let Some(avoid) = avoid else {
            return self.draw(rng);
        };

        let candidates: Vec<&Phrase> = self.phrases.iter().filter(|p| *p != avoid).collect();
        match candidates.choose(rng) {
            Some(phrase) => (*phrase).clone(),
            None => self.draw(rng),
        }
    }

    /// Number of phrases in the pool
    #[must_use]
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}

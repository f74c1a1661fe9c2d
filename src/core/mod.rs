//! Core domain types for cryptograms
//!
//! This module contains the fundamental domain types with zero external
//! dependencies. All types here are pure, testable, and have clear
//! mathematical properties.

mod alphabet;
mod phrase;

pub use alphabet::{ALPHABET_LEN, AlphabetKind, Symbol, Token};
pub use phrase::{Phrase, PhraseError};

//! Cryptogram
//!
//! A substitution-cryptogram puzzle game: a random bijective mapping hides a
//! phrase behind letter or number symbols, and the player reconstructs it one
//! symbol at a time with undo, hints, and letter-frequency analysis.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use cryptogram::cipher::Cryptogram;
//! use cryptogram::core::{AlphabetKind, Phrase};
//!
//! let phrase = Phrase::new("I THINK THEREFORE I AM").unwrap();
//! let puzzle = Cryptogram::generate(phrase, AlphabetKind::Letter, &mut rand::rng());
//! println!("{}", puzzle.cipher_text().to_line());
//! ```

// Core domain types
pub mod core;

// Cipher generation
pub mod cipher;

// Guess state machine, sessions, and player records
pub mod game;

// Symbol-frequency analysis
pub mod frequency;

// Phrase corpus
pub mod phrases;

// Versioned session snapshots
pub mod snapshot;

// Snapshot and roster files
pub mod storage;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

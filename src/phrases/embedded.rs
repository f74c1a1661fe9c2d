//! Embedded fallback phrases
//!
//! Used whenever no phrase corpus can be read. Pre-uppercased so a draw
//! needs no normalization.

/// Built-in sample pool
pub const FALLBACK_PHRASES: &[&str] = &[
    "THE UNEXAMINED LIFE IS NOT WORTH LIVING",
    "ENTITIES SHOULD NOT BE MULTIPLIED UNNECESSARILY",
    "I THINK THEREFORE I AM",
    "WE LIVE IN THE BEST OF ALL POSSIBLE WORLDS",
];

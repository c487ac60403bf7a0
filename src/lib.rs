//! Sentence Engine: English sentence generation for grammar drills.
//!
//! Builds an English sentence and its Japanese gloss from a small set of
//! grammatical choices (subject, tense, sentence type, verb, pattern,
//! number form) against a RON-defined lexicon, and runs the drill quests
//! that use those sentences as targets.

pub mod core;
pub mod schema;

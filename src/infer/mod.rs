// src/infer/mod.rs

//! Heuristic field inference over free text.
//!
//! Everything here is pure and deterministic for a given input text and
//! reference date: classification is a first-match fold over ordered
//! vocabularies, date extraction walks a ladder of progressively weaker
//! patterns. Unmatched fields degrade to empty values, never to errors.

pub mod classify;
pub mod dates;
pub mod location;

//! Slice-based Markov travesty generator.
//!
//! This crate builds a successor table over a text's characters or tokens
//! and random-walks it to produce new text with the same local statistics:
//! - Character- or token-level slice tables
//! - Frequency-weighted sampling, with restarts on sentence boundaries
//! - Reassembly of tokens into words (contractions, possessives, punctuation)
//! - Randomized paragraph breaking and fixed-width formatting
//!
//! The end-to-end entry point is [`travesty`]; the building blocks are
//! public for callers that need a custom pipeline.

/// Successor table, restart policy and generation loop.
pub mod model;

/// Scrubbing, tokenizing, reassembly, paragraphs and wrapping.
pub mod text;

/// Run parameters.
pub mod settings;

/// Error taxonomy with the pipeline phase of each failure.
pub mod error;

/// File helpers (source loading, output path, writing).
pub mod io;

mod pipeline;

pub use error::{Phase, TravestyError};
pub use pipeline::{Travesty, travesty};
pub use settings::{Granularity, Settings};

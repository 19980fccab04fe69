//! Text on both sides of the model: preparing the source and turning
//! generated units back into readable output.

/// Fixed typographic clean-up applied once to the raw source.
pub mod scrub;

/// Word/punctuation tokenizer for token granularity.
pub mod tokenizer;

/// Token fusion and punctuation placement.
pub mod reassembly;

/// Randomized paragraph breaking at sentence boundaries.
pub mod paragraph;

/// Fixed-width output formatting.
pub mod wrap;

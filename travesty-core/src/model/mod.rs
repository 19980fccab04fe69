//! Slice-based Markov model and the random walk over it.
//!
//! - Atomic units, characters or tokens (`Unit`)
//! - The successor table built once from the source (`SliceTable`)
//! - Sentence-start selection used to prime and restart a walk (`StartPoints`)
//! - The generation loop itself (`Generator`)

/// Granularity-dependent behavior of the atomic units.
pub mod unit;

/// Observed continuations of a single key.
///
/// Stores every observation so that uniform sampling is frequency-weighted.
pub mod successors;

/// Successor table (key of `window - 1` units to its continuations).
///
/// Handles training, lookup and random selection.
pub mod slice_table;

/// Restart policy: keys that begin a sentence.
pub mod start_point;

/// Random walk with miss recovery, length target and interrupt support.
pub mod generator;

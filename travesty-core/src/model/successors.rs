use rand::Rng;
use rand::seq::IndexedRandom;

use super::unit::Unit;

/// Units observed right after one key of the slice table.
///
/// Conceptually, this is a node in a Markov chain. Outgoing edges are not
/// counted explicitly: every observation is stored, in source order, so a
/// unit seen three times is three times as likely to be drawn.
///
/// ## Invariants
/// - Never empty once stored in a table
/// - Insertion order is the order of appearance in the source
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Successors<U: Unit> {
	units: Vec<U>,
}

impl<U: Unit> Successors<U> {
	/// Creates a collection holding a single observation.
	pub fn new(first: U) -> Self {
		Self { units: vec![first] }
	}

	/// Records one more occurrence of `next` after this key.
	pub fn push(&mut self, next: U) {
		self.units.push(next);
	}

	/// Picks a continuation by uniform draw over the stored observations,
	/// which reproduces the source frequencies.
	///
	/// Returns `None` only for an empty collection.
	pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&U> {
		self.units.choose(rng)
	}

	/// Number of observations, duplicates included.
	pub fn len(&self) -> usize {
		self.units.len()
	}

	pub fn is_empty(&self) -> bool {
		self.units.is_empty()
	}

	/// Observations in source order.
	pub fn as_slice(&self) -> &[U] {
		&self.units
	}

	/// How many times `unit` was observed.
	pub fn count(&self, unit: &U) -> usize {
		self.units.iter().filter(|u| *u == unit).count()
	}
}

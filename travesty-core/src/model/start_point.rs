use rand::Rng;
use rand::seq::IndexedRandom;

use super::slice_table::SliceTable;
use super::unit::Unit;
use crate::error::TravestyError;

/// The keys of a table that look like the beginning of a sentence.
///
/// Used both to prime a generation and to restart it after a lookup miss,
/// so that output always resumes on a capitalized sentence start.
///
/// The subset is derived from the table once per generation and borrows
/// its keys; it is never stored alongside the table.
///
/// ## Invariants
/// - Never empty
/// - Every key is present in the table it was collected from
/// - Keys are sorted, so a seeded RNG reproduces the same picks
#[derive(Debug)]
pub struct StartPoints<'a, U: Unit> {
	keys: Vec<&'a [U]>,
}

impl<'a, U: Unit> StartPoints<'a, U> {
	/// Collects every sentence-start key of `table`.
	///
	/// # Errors
	/// `NoValidStart` when the source has no recognizable sentence start.
	pub fn collect(table: &'a SliceTable<U>) -> Result<Self, TravestyError> {
		let mut keys: Vec<&'a [U]> = table.keys().filter(|key| U::is_sentence_start(key)).collect();
		if keys.is_empty() {
			return Err(TravestyError::NoValidStart);
		}
		keys.sort_unstable();
		Ok(Self { keys })
	}

	/// Picks one starting key uniformly.
	pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &'a [U] {
		// `collect` guarantees at least one key
		self.keys.choose(rng).copied().unwrap_or(self.keys[0])
	}

	/// Number of candidate starting keys.
	pub fn len(&self) -> usize {
		self.keys.len()
	}

	pub fn is_empty(&self) -> bool {
		self.keys.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	fn chars(s: &str) -> Vec<char> {
		s.chars().collect()
	}

	#[test]
	fn finds_sentence_starts_only() {
		let table = SliceTable::train(&chars("One cat. Two cats! Three cats? four."), 5).unwrap();
		let starts = StartPoints::collect(&table).unwrap();
		let mut found: Vec<String> = starts.keys.iter().map(|k| k.iter().collect()).collect();
		found.sort();
		assert_eq!(found, vec!["! Th", ". Tw"]);
	}

	#[test]
	fn no_start_is_an_error_not_a_panic() {
		let table = SliceTable::train(&chars("no capitals here. none at all."), 4).unwrap();
		let err = StartPoints::collect(&table).unwrap_err();
		assert!(matches!(err, TravestyError::NoValidStart));
	}

	#[test]
	fn seeded_picks_are_reproducible() {
		let table = SliceTable::train(&chars("A b. C d. E f. G h. I j."), 4).unwrap();
		let starts = StartPoints::collect(&table).unwrap();
		let first: Vec<&[char]> = {
			let mut rng = StdRng::seed_from_u64(42);
			(0..10).map(|_| starts.pick(&mut rng)).collect()
		};
		let second: Vec<&[char]> = {
			let mut rng = StdRng::seed_from_u64(42);
			(0..10).map(|_| starts.pick(&mut rng)).collect()
		};
		assert_eq!(first, second);
	}

	proptest! {
		#[test]
		fn picked_keys_are_in_the_table(source in "[AaBb .!]{4,80}", seed in any::<u64>()) {
			let units = chars(&source);
			let table = SliceTable::train(&units, 4).unwrap();
			if let Ok(starts) = StartPoints::collect(&table) {
				let mut rng = StdRng::seed_from_u64(seed);
				for _ in 0..20 {
					let key = starts.pick(&mut rng);
					prop_assert!(table.contains_key(key));
					prop_assert!(char::is_sentence_start(key));
				}
			}
		}
	}
}

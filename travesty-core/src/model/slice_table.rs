use std::collections::HashMap;

use log::debug;
use rand::Rng;

use super::successors::Successors;
use super::unit::Unit;
use crate::error::TravestyError;

/// Successor table ("slice dictionary") over a sequence of units.
///
/// Every window of `window` consecutive units is split into a key (the first
/// `window - 1` units) and a terminal (the last one); the terminal is appended
/// to the key's successors. The table is built once and only read afterwards.
///
/// # Invariants
/// - `window` is always >= 2
/// - Every key has exactly `window - 1` units
/// - Every key maps to a non-empty `Successors`
/// - The number of observations under a key equals the number of times its
///   window prefix occurs in the source (followed by something)
#[derive(Clone, Debug)]
pub struct SliceTable<U: Unit> {
	/// Number of units in a full window (key + terminal)
	window: usize,

	/// Mapping from a key to every unit observed right after it
	slices: HashMap<Vec<U>, Successors<U>>,
}

impl<U: Unit> SliceTable<U> {
	/// Slices `units` into windows of `window` units and records them all.
	///
	/// # Errors
	/// - `InvalidWindow` if `window < 2`.
	/// - `TooShort` if there are fewer units than one window, including the
	///   empty input: an empty table would only fail later, during generation.
	pub fn train(units: &[U], window: usize) -> Result<Self, TravestyError> {
		if window < 2 {
			return Err(TravestyError::InvalidWindow(window));
		}
		if units.len() < window {
			return Err(TravestyError::TooShort { units: units.len(), window });
		}

		let mut slices: HashMap<Vec<U>, Successors<U>> = HashMap::new();
		for slice in units.windows(window) {
			let (key, terminal) = slice.split_at(window - 1);
			let terminal = terminal[0].clone();
			match slices.get_mut(key) {
				Some(successors) => successors.push(terminal),
				None => {
					slices.insert(key.to_vec(), Successors::new(terminal));
				}
			}
		}

		debug!("{} units sliced into {} keys (window {})", units.len(), slices.len(), window);
		Ok(Self { window, slices })
	}

	/// Picks a continuation for `key`.
	///
	/// Returns `None` when the key was never seen: the caller is expected to
	/// restart from a fresh starting point, not to retry.
	pub fn select<R: Rng + ?Sized>(&self, key: &[U], rng: &mut R) -> Option<&U> {
		self.slices.get(key)?.choose(rng)
	}

	/// Every unit observed after `key`, or `None` for an unknown key.
	pub fn successors(&self, key: &[U]) -> Option<&Successors<U>> {
		self.slices.get(key)
	}

	pub fn contains_key(&self, key: &[U]) -> bool {
		self.slices.contains_key(key)
	}

	/// Iterates over all keys, in no particular order.
	pub fn keys(&self) -> impl Iterator<Item = &[U]> {
		self.slices.keys().map(Vec::as_slice)
	}

	/// Number of distinct keys.
	pub fn len(&self) -> usize {
		self.slices.len()
	}

	pub fn is_empty(&self) -> bool {
		self.slices.is_empty()
	}

	/// Key length (`window - 1`), the number of trailing units looked up.
	pub fn depth(&self) -> usize {
		self.window - 1
	}

	pub fn window(&self) -> usize {
		self.window
	}
}

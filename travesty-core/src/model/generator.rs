use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, info};
use rand::Rng;

use super::slice_table::SliceTable;
use super::start_point::StartPoints;
use super::unit::Unit;
use crate::error::TravestyError;

/// Result of one random walk over a slice table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation<U: Unit> {
	/// Generated units, priming prefix removed, always ending on a terminator.
	pub units: Vec<U>,

	/// True when the stop flag ended the walk before the target length.
	pub interrupted: bool,

	/// Number of times the walk restarted from a fresh sentence start.
	pub restarts: usize,
}

/// Random walker over a trained `SliceTable`.
///
/// # Responsibilities
/// - Prime the output with a sentence-start key
/// - Extend it one unit at a time from the last `depth` units
/// - Recover from lookup misses by restarting on a new sentence
/// - Stop on the target length or when asked to
///
/// The table is only borrowed: several generators may share one table.
#[derive(Debug)]
pub struct Generator<'a, U: Unit> {
	table: &'a SliceTable<U>,
	starts: StartPoints<'a, U>,
}

impl<'a, U: Unit> Generator<'a, U> {
	/// Prepares a walker over `table`.
	///
	/// # Errors
	/// `NoValidStart` if the table has no sentence-start key to prime from.
	pub fn new(table: &'a SliceTable<U>) -> Result<Self, TravestyError> {
		let starts = StartPoints::collect(table)?;
		debug!("{} sentence starts available", starts.len());
		Ok(Self { table, starts })
	}

	/// Walks the table until `target_len` units have been generated.
	///
	/// `stop` is polled once per step, before anything is appended; when it
	/// is set the walk ends early and the partial result is returned with
	/// `interrupted` set. The returned units never contain the priming
	/// prefix and always end with a terminator, never with blanks after it.
	pub fn generate<R: Rng + ?Sized>(&self, target_len: usize, rng: &mut R, stop: &AtomicBool) -> Generation<U> {
		let depth = self.table.depth();
		let prefix = U::priming_len();

		// Priming: the first key comes for free and is stripped at the end
		let mut units: Vec<U> = self.starts.pick(rng).to_vec();
		let mut restarts = 0;
		let mut interrupted = false;

		loop {
			while units.len() - prefix < target_len {
				if stop.load(Ordering::Relaxed) {
					info!("Stopping on interrupt after {} units", units.len() - prefix);
					interrupted = true;
					break;
				}

				let tail = &units[units.len() - depth..];
				match self.table.select(tail, rng) {
					Some(next) => {
						let next = next.clone();
						units.push(next);
					}
					None => {
						self.restart(&mut units, rng);
						restarts += 1;
					}
				}
			}

			// Blanks after the last mark are dropped; if that leaves the walk
			// short it goes on with a new sentence
			trim_after_terminator(&mut units);
			if interrupted || units.len() - prefix >= target_len {
				break;
			}
			self.restart(&mut units, rng);
			restarts += 1;
		}

		units.drain(..prefix);
		if !trim_after_terminator(&mut units) {
			units.push(U::terminator());
		}

		debug!("Walk done: {} units, {} restarts", units.len(), restarts);
		Generation { units, interrupted, restarts }
	}

	/// Closes the current sentence and appends the body of a fresh start key.
	fn restart<R: Rng + ?Sized>(&self, units: &mut Vec<U>, rng: &mut R) {
		U::close_sentence(units);
		let key = self.starts.pick(rng);
		units.extend_from_slice(&key[U::priming_len()..]);
	}
}

/// Drops blanks that follow a final terminator.
///
/// Returns whether `units` now ends on a terminator.
fn trim_after_terminator<U: Unit>(units: &mut Vec<U>) -> bool {
	match units.iter().rposition(|u| !u.is_blank()) {
		Some(end) if units[end].is_terminator() => {
			units.truncate(end + 1);
			true
		}
		_ => false,
	}
}

/// Output length for a source of `source_len` units at `size_percent`.
///
/// `round(source_len * size_percent / 100)`
pub fn target_len(source_len: usize, size_percent: u32) -> usize {
	(source_len as f64 * f64::from(size_percent) / 100.0).round() as usize
}

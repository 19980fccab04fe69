use std::sync::atomic::AtomicBool;
use std::time::Instant;

use log::info;
use rand::Rng;

use crate::error::TravestyError;
use crate::model::generator::{Generator, target_len};
use crate::model::slice_table::SliceTable;
use crate::model::unit::Unit;
use crate::settings::{Granularity, Settings};
use crate::text::paragraph::paragraph_break;
use crate::text::scrub::scrub;
use crate::text::tokenizer::tokenize;
use crate::text::wrap::{WRAP_WIDTH, wrap_text};

/// Outcome of a full run, ready to be written out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Travesty {
	/// Final text: reassembled, paragraph-broken and wrapped as configured.
	pub text: String,

	/// True when the walk was cut short by the stop flag.
	pub interrupted: bool,

	/// Length of the source in units.
	pub source_units: usize,

	/// Length of the generated sequence in units.
	pub generated_units: usize,

	/// Number of distinct keys in the successor table.
	pub slices: usize,

	/// Number of restarts on a missing continuation.
	pub restarts: usize,
}

/// Builds a travesty of `source`: scrub, split into units, train, walk,
/// reassemble, break into paragraphs, wrap.
///
/// The table lives for the duration of this call only.
///
/// # Errors
/// Any configuration, input or model-too-sparse error, tagged with its
/// phase. Lookup misses and interrupts are not errors.
pub fn travesty<R: Rng + ?Sized>(
	source: &str,
	settings: &Settings,
	rng: &mut R,
	stop: &AtomicBool,
) -> Result<Travesty, TravestyError> {
	settings.validate()?;
	let then = Instant::now();

	let text = if settings.scrub { scrub(source) } else { source.to_owned() };
	if text.trim().is_empty() {
		return Err(TravestyError::EmptyInput);
	}

	let result = match settings.granularity {
		Granularity::Character => {
			let units: Vec<char> = text.chars().collect();
			walk(&units, settings, rng, stop)?
		}
		Granularity::Token => {
			// Never empty: the text has a non-blank char and every one of
			// them is matched by a word or punctuation rule
			let units = tokenize(&text);
			walk(&units, settings, rng, stop)?
		}
	};

	info!("{:.3} seconds.", then.elapsed().as_secs_f64());
	Ok(result)
}

fn walk<U: Unit, R: Rng + ?Sized>(
	units: &[U],
	settings: &Settings,
	rng: &mut R,
	stop: &AtomicBool,
) -> Result<Travesty, TravestyError> {
	let table = SliceTable::train(units, settings.window())?;
	info!("Document sliced into {} slices.", table.len());

	let generator = Generator::new(&table)?;
	let target = target_len(units.len(), settings.size_percent);
	info!("Generating {} {} units.", target, settings.granularity);
	let generation = generator.generate(target, rng, stop);

	let mut text = U::reassemble(&generation.units);
	text = paragraph_break(&text, settings.paragraph_period, settings.paragraph_policy, rng)?;
	if settings.format {
		text = wrap_text(&text, WRAP_WIDTH);
	}

	Ok(Travesty {
		text,
		interrupted: generation.interrupted,
		source_units: units.len(),
		generated_units: generation.units.len(),
		slices: table.len(),
		restarts: generation.restarts,
	})
}

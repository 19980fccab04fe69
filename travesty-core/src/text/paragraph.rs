use std::sync::LazyLock;

use log::debug;
use rand::Rng;
use rand_distr::{Distribution, Normal};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::TravestyError;

/// One or more terminators followed by blanks (not line breaks).
static SENTENCE_END: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.?!]+[ \t]+").unwrap());

/// How the number of sentences between two paragraph breaks is chosen.
///
/// `period` is always read as a magnitude: `-3` and `3` behave the same.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ParagraphPolicy {
	/// Gap drawn from a normal distribution centered on the period, with a
	/// standard deviation of `spread * period`. Rounded, never below 1.
	Gaussian { spread: f64 },

	/// A break after exactly every `period` sentences.
	Exact,
}

impl Default for ParagraphPolicy {
	fn default() -> Self {
		ParagraphPolicy::Gaussian { spread: 0.25 }
	}
}

/// Sentence count sampler built from a policy.
enum Gaps {
	Exact(usize),
	Gaussian(Normal<f64>),
}

impl Gaps {
	fn new(period: u64, policy: ParagraphPolicy) -> Result<Self, TravestyError> {
		match policy {
			ParagraphPolicy::Exact => Ok(Gaps::Exact(period as usize)),
			ParagraphPolicy::Gaussian { spread } => {
				let mean = period as f64;
				Normal::new(mean, mean * spread)
					.map(Gaps::Gaussian)
					.map_err(|e| TravestyError::InvalidParagraph(format!("{e} (spread {spread})")))
			}
		}
	}

	fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
		match self {
			Gaps::Exact(n) => *n,
			Gaps::Gaussian(normal) => normal.sample(rng).round().max(1.0) as usize,
		}
	}
}

/// Splits `text` into paragraphs of roughly `period` sentences.
///
/// The blanks after the chosen terminator are replaced by a line break. When
/// the text runs out of terminators the remainder is left as is. A `period`
/// of 0 returns the text unchanged.
///
/// # Errors
/// `InvalidParagraph` if the policy cannot produce a distribution
/// (ex. a negative or NaN spread).
pub fn paragraph_break<R: Rng + ?Sized>(
	text: &str,
	period: i64,
	policy: ParagraphPolicy,
	rng: &mut R,
) -> Result<String, TravestyError> {
	if period == 0 {
		return Ok(text.to_owned());
	}

	let gaps = Gaps::new(period.unsigned_abs(), policy)?;
	let mut result = String::with_capacity(text.len());
	let mut copied = 0;
	let mut remaining = gaps.draw(rng);
	let mut breaks = 0;

	for end in SENTENCE_END.find_iter(text) {
		remaining = remaining.saturating_sub(1);
		if remaining > 0 {
			continue;
		}
		let marks_end = end.start() + end.as_str().trim_end_matches([' ', '\t']).len();
		result.push_str(&text[copied..marks_end]);
		result.push('\n');
		copied = end.end();
		breaks += 1;
		remaining = gaps.draw(rng);
	}
	result.push_str(&text[copied..]);

	debug!("{breaks} paragraph breaks inserted (period {period})");
	Ok(result)
}

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TravestyError;
use crate::text::paragraph::ParagraphPolicy;

/// Largest accepted output size, in percent of the source.
pub const MAX_SIZE_PERCENT: u32 = 10_000;

/// What the model treats as one atomic unit.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
	/// Single characters, whitespace included.
	#[default]
	Character,
	/// Words and punctuation marks from the tokenizer.
	Token,
}

impl FromStr for Granularity {
	type Err = TravestyError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_lowercase().as_str() {
			"character" | "char" | "c" => Ok(Granularity::Character),
			"token" | "word" | "t" => Ok(Granularity::Token),
			other => Err(TravestyError::InvalidConfig(format!(
				"granularity must be 'character' or 'token', got '{other}'"
			))),
		}
	}
}

impl fmt::Display for Granularity {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Granularity::Character => f.write_str("character"),
			Granularity::Token => f.write_str("token"),
		}
	}
}

/// Parameters of one travesty run.
///
/// # Responsibilities
/// - Track the model shape (`granularity`, `depth`)
/// - Track the output shape (`size_percent`, `format`, paragraph breaking)
/// - Reject out-of-range values before any work starts
///
/// Fields are public; `validate` is the single gate every front end goes
/// through before a run.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Settings {
	/// Character or token model.
	pub granularity: Granularity,

	/// Key length in units (window width minus one).
	pub depth: usize,

	/// Output length as a percentage of the source length, `1..=MAX_SIZE_PERCENT`.
	pub size_percent: u32,

	/// Wrap output to `text::wrap::WRAP_WIDTH` columns.
	pub format: bool,

	/// Sentences per paragraph, 0 for no breaking. Sign is ignored.
	pub paragraph_period: i64,

	/// How the paragraph period is turned into actual gaps.
	pub paragraph_policy: ParagraphPolicy,

	/// Apply the typographic clean-up to the source first.
	pub scrub: bool,

	/// Seed for reproducible runs; `None` draws from the OS.
	pub seed: Option<u64>,
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			granularity: Granularity::Character,
			depth: 10,
			size_percent: 100,
			format: false,
			paragraph_period: 0,
			paragraph_policy: ParagraphPolicy::default(),
			scrub: true,
			seed: None,
		}
	}
}

impl Settings {
	/// Number of units in a training window: the key plus its terminal.
	///
	/// Saturates instead of wrapping; `validate` rejects such a depth anyway.
	pub fn window(&self) -> usize {
		self.depth.saturating_add(1)
	}

	/// Checks every field, including those set directly or deserialized.
	///
	/// # Errors
	/// `InvalidConfig` naming the first field out of range.
	pub fn validate(&self) -> Result<(), TravestyError> {
		if self.depth == 0 || self.depth.checked_add(1).is_none() {
			return Err(TravestyError::InvalidConfig(format!(
				"depth must be between 1 and {}, got {}",
				usize::MAX - 1,
				self.depth
			)));
		}
		if !(1..=MAX_SIZE_PERCENT).contains(&self.size_percent) {
			return Err(TravestyError::InvalidConfig(format!(
				"size must be between 1 and {MAX_SIZE_PERCENT} percent, got {}",
				self.size_percent
			)));
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_match_the_command_line_defaults() {
		let settings = Settings::default();
		assert_eq!(settings.depth, 10);
		assert_eq!(settings.window(), 11);
		assert_eq!(settings.size_percent, 100);
		assert_eq!(settings.paragraph_period, 0);
		assert!(!settings.format);
		assert!(settings.validate().is_ok());
	}

	#[test]
	fn size_must_stay_in_range() {
		let mut settings = Settings { size_percent: 0, ..Settings::default() };
		assert!(matches!(settings.validate(), Err(TravestyError::InvalidConfig(_))));
		settings.size_percent = MAX_SIZE_PERCENT + 1;
		assert!(matches!(settings.validate(), Err(TravestyError::InvalidConfig(_))));
		settings.size_percent = 250;
		assert!(settings.validate().is_ok());
		settings.size_percent = MAX_SIZE_PERCENT;
		assert!(settings.validate().is_ok());
	}

	#[test]
	fn huge_depth_is_rejected_without_overflow() {
		let settings = Settings { depth: usize::MAX, ..Settings::default() };
		assert_eq!(settings.window(), usize::MAX);
		assert!(matches!(settings.validate(), Err(TravestyError::InvalidConfig(_))));
		let settings = Settings { depth: usize::MAX - 1, ..Settings::default() };
		assert!(settings.validate().is_ok());
	}

	#[test]
	fn zero_depth_is_rejected() {
		let settings = Settings { depth: 0, ..Settings::default() };
		assert!(matches!(settings.validate(), Err(TravestyError::InvalidConfig(_))));
	}

	#[test]
	fn granularity_parses() {
		assert_eq!("token".parse::<Granularity>().unwrap(), Granularity::Token);
		assert_eq!("Character".parse::<Granularity>().unwrap(), Granularity::Character);
		assert!("byte".parse::<Granularity>().is_err());
		assert_eq!(Granularity::Token.to_string(), "token");
	}
}

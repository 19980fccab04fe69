use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Pipeline stage an error was raised in.
///
/// Front ends use it to tell the user *where* a run failed,
/// ex. `train failed: input too short`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
	Configure,
	Scrub,
	Train,
	Generate,
	Reassemble,
	Write,
}

impl fmt::Display for Phase {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Phase::Configure => "configure",
			Phase::Scrub => "scrub",
			Phase::Train => "train",
			Phase::Generate => "generate",
			Phase::Reassemble => "reassemble",
			Phase::Write => "write",
		};
		f.write_str(name)
	}
}

/// Unrecoverable failures of a travesty run.
///
/// Lookup misses and user interrupts are handled inside the generation
/// loop and never show up here.
#[derive(Debug, Error)]
pub enum TravestyError {
	/// The source file could not be read.
	#[error("cannot read {path}: {source}")]
	Read {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	/// The source has no content left after scrubbing.
	#[error("source text is empty")]
	EmptyInput,

	/// The window width must cover at least a key of one unit plus its terminal.
	#[error("window width must be >= 2, got {0}")]
	InvalidWindow(usize),

	/// Fewer units than one full window: nothing to learn.
	#[error("input too short: {units} units for a window of {window}")]
	TooShort { units: usize, window: usize },

	/// No key in the table looks like the beginning of a sentence.
	#[error("no valid sentence start found in the source")]
	NoValidStart,

	/// A setting is out of its accepted range.
	#[error("invalid setting: {0}")]
	InvalidConfig(String),

	/// The paragraph period could not be turned into a distribution.
	#[error("invalid paragraph period: {0}")]
	InvalidParagraph(String),

	/// The output could not be written.
	#[error("cannot write {path}: {source}")]
	Write {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
}

impl TravestyError {
	/// Stage of the pipeline this error belongs to.
	pub fn phase(&self) -> Phase {
		match self {
			TravestyError::Read { .. } | TravestyError::EmptyInput => Phase::Scrub,
			TravestyError::InvalidWindow(_) | TravestyError::TooShort { .. } => Phase::Train,
			TravestyError::NoValidStart => Phase::Generate,
			TravestyError::InvalidConfig(_) => Phase::Configure,
			TravestyError::InvalidParagraph(_) => Phase::Reassemble,
			TravestyError::Write { .. } => Phase::Write,
		}
	}

	/// True when the source was readable but too poor to build a usable model.
	pub fn is_model_too_sparse(&self) -> bool {
		matches!(self, TravestyError::TooShort { .. } | TravestyError::NoValidStart)
	}
}

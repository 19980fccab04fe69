use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::TravestyError;

/// Suffix appended to the input file name to build the default output path.
pub const OUTPUT_SUFFIX: &str = "new";

/// Where the generated text goes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputTarget {
	Stdout,
	File(PathBuf),
}

impl OutputTarget {
	/// `-` means standard output, anything else is a file path.
	pub fn parse(value: &str) -> Self {
		if value == "-" {
			OutputTarget::Stdout
		} else {
			OutputTarget::File(PathBuf::from(value))
		}
	}
}

/// Reads the whole source file.
///
/// # Errors
/// - `Read` if the file cannot be opened or is not valid UTF-8
/// - `EmptyInput` if it holds nothing but whitespace
pub fn read_source<P: AsRef<Path>>(path: P) -> Result<String, TravestyError> {
	let path = path.as_ref();
	let contents = fs::read_to_string(path).map_err(|source| TravestyError::Read {
		path: path.to_path_buf(),
		source,
	})?;
	if contents.trim().is_empty() {
		return Err(TravestyError::EmptyInput);
	}
	Ok(contents)
}

/// Builds the default output path by appending a suffix to the input name.
///
/// Example:
/// `data/input.txt` → `data/input.txt.new`
pub fn default_output_path<P: AsRef<Path>>(input_path: P) -> PathBuf {
	let mut name = input_path.as_ref().as_os_str().to_owned();
	name.push(".");
	name.push(OUTPUT_SUFFIX);
	PathBuf::from(name)
}

/// Writes the finished text in a single call.
///
/// Nothing is created before this point, so a run that fails earlier leaves
/// no partial file behind.
pub fn write_output(target: &OutputTarget, text: &str) -> Result<(), TravestyError> {
	match target {
		OutputTarget::Stdout => {
			let mut stdout = io::stdout().lock();
			stdout
				.write_all(text.as_bytes())
				.and_then(|_| stdout.flush())
				.map_err(|source| TravestyError::Write { path: PathBuf::from("<stdout>"), source })
		}
		OutputTarget::File(path) => fs::write(path, text).map_err(|source| TravestyError::Write {
			path: path.clone(),
			source,
		}),
	}
}

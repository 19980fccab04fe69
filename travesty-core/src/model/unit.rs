use std::fmt::Debug;
use std::hash::Hash;

use crate::text::reassembly::{reassemble_chars, reassemble_tokens};

/// Marks that end a sentence.
pub const TERMINATORS: [char; 3] = ['.', '?', '!'];

/// An atomic piece of text the model is built over.
///
/// Implemented for `char` (character granularity) and `String` (token
/// granularity). Everything that depends on the granularity, sentence start
/// detection, restart padding and reassembly, lives here so that the table,
/// the restart policy and the generation loop stay generic.
///
/// ## Invariants
/// - `priming_len() < key.len()` for every key accepted by `is_sentence_start`
/// - `terminator().is_terminator()` is true
pub trait Unit: Clone + Eq + Hash + Ord + Debug {
	/// True for a sentence terminator (`.`, `?`, `!`).
	fn is_terminator(&self) -> bool;

	/// True for whitespace.
	fn is_blank(&self) -> bool;

	/// True when the first character is an uppercase letter.
	fn starts_uppercase(&self) -> bool;

	/// The synthetic terminator appended when a sentence has to be closed.
	fn terminator() -> Self;

	/// Whether `key` sits right after a sentence terminator and before a
	/// capitalized unit.
	fn is_sentence_start(key: &[Self]) -> bool;

	/// Number of leading units of a sentence-start key that belong to the
	/// previous sentence (the terminator and, for characters, its space).
	fn priming_len() -> usize;

	/// Closes the sentence `units` ends in, so that the body of a fresh start
	/// key can follow it after a lookup miss.
	fn close_sentence(units: &mut Vec<Self>);

	/// Turns a generated sequence back into text.
	fn reassemble(units: &[Self]) -> String;
}

impl Unit for char {
	fn is_terminator(&self) -> bool {
		TERMINATORS.contains(self)
	}

	fn is_blank(&self) -> bool {
		self.is_whitespace()
	}

	fn starts_uppercase(&self) -> bool {
		self.is_uppercase()
	}

	fn terminator() -> Self {
		'.'
	}

	/// Mirrors `^[.?!] [A-Z]`.
	fn is_sentence_start(key: &[Self]) -> bool {
		matches!(key, [mark, ' ', first, ..] if mark.is_terminator() && first.is_uppercase())
	}

	fn priming_len() -> usize {
		2
	}

	/// `"cat."` gets a space, `"cat.\n"` is left alone, `"cat"` and `"cat\n"`
	/// both become `"cat. "`.
	fn close_sentence(units: &mut Vec<Self>) {
		match units.iter().rposition(|c| !c.is_whitespace()) {
			Some(end) if units[end].is_terminator() => {
				if end + 1 == units.len() {
					units.push(' ');
				}
			}
			end => {
				units.truncate(end.map_or(0, |end| end + 1));
				units.extend(['.', ' ']);
			}
		}
	}

	fn reassemble(units: &[Self]) -> String {
		reassemble_chars(units)
	}
}

impl Unit for String {
	fn is_terminator(&self) -> bool {
		!self.is_empty() && self.chars().all(|c| TERMINATORS.contains(&c))
	}

	fn is_blank(&self) -> bool {
		self.chars().all(char::is_whitespace)
	}

	fn starts_uppercase(&self) -> bool {
		self.chars().next().is_some_and(char::is_uppercase)
	}

	fn terminator() -> Self {
		".".to_owned()
	}

	fn is_sentence_start(key: &[Self]) -> bool {
		matches!(key, [mark, first, ..] if mark.is_terminator() && first.starts_uppercase())
	}

	fn priming_len() -> usize {
		1
	}

	fn close_sentence(units: &mut Vec<Self>) {
		if !units.last().is_some_and(Unit::is_terminator) {
			units.push(Self::terminator());
		}
	}

	fn reassemble(units: &[Self]) -> String {
		reassemble_tokens(units)
	}
}

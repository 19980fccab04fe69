use std::sync::LazyLock;

use regex::Regex;

use crate::model::unit::TERMINATORS;

/// Contractions whose pieces the tokenizer splits apart, ex. `don` + `'t`.
///
/// Closed list, matched against the lowercased concatenation of two tokens.
pub const CONTRACTIONS: &[&str] = &[
	"ain't", "aren't", "can't", "couldn't", "didn't", "doesn't", "don't", "hadn't",
	"hasn't", "haven't", "isn't", "mightn't", "mustn't", "needn't", "shan't", "shouldn't",
	"wasn't", "weren't", "won't", "wouldn't",
	"i'm", "i've", "i'll", "i'd",
	"you're", "you've", "you'll", "you'd",
	"he'll", "he'd", "she'll", "she'd", "it'll", "it'd",
	"we're", "we've", "we'll", "we'd",
	"they're", "they've", "they'll", "they'd",
	"that'll", "that'd", "there'll", "there'd",
	"who'll", "who'd", "who've", "what'll", "what're", "what've",
];

/// Marker that always attaches to the word before it.
pub const POSSESSIVE: &str = "'s";

/// Symbols that attach to the word after them.
pub const CURRENCY_SYMBOLS: &[&str] = &["$", "£", "€", "¥"];

/// A space before any of `; : , . ? !`
static SPACE_BEFORE_PUNCTUATION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" +([;:,.?!])").unwrap());

/// Whether `next` belongs to the same surface word as `word`.
fn fuses(word: &str, next: &str) -> bool {
	if next.eq_ignore_ascii_case(POSSESSIVE) || CURRENCY_SYMBOLS.contains(&word) {
		return true;
	}
	if next == "'" {
		return word.ends_with(['s', 'S']);
	}
	next.starts_with('\'') && CONTRACTIONS.contains(&format!("{word}{next}").to_lowercase().as_str())
}

/// Merges tokens that form a single surface word: contractions, possessives
/// (`'s`, and a bare `'` after a plural) and currency-prefixed amounts.
///
/// Walks a peekable cursor and only consumes a token once it is known to
/// exist, so a match on the last pair cannot run past the end. Each token is
/// tested against the word built so far, which makes the pass idempotent.
pub fn fuse_tokens<S: AsRef<str>>(tokens: &[S]) -> Vec<String> {
	let mut fused = Vec::with_capacity(tokens.len());
	let mut cursor = tokens.iter().map(AsRef::<str>::as_ref).peekable();

	while let Some(first) = cursor.next() {
		let mut word = first.to_owned();
		while let Some(next) = cursor.next_if(|next| fuses(&word, next)) {
			word.push_str(next);
		}
		fused.push(word);
	}

	fused
}

/// Attaches punctuation to the word on its left: `"Hello , world !"` becomes
/// `"Hello, world!"`.
pub fn shift_punctuation(joined: &str) -> String {
	SPACE_BEFORE_PUNCTUATION.replace_all(joined, "$1").into_owned()
}

/// Token sequence back to text: fusion, single-space join, punctuation shift.
pub fn reassemble_tokens<S: AsRef<str>>(tokens: &[S]) -> String {
	shift_punctuation(&fuse_tokens(tokens).join(" "))
}

/// Character sequence back to text.
///
/// Characters are already text; the only fix-up is the closing terminator,
/// which is glued to the last word when the walk ended on whitespace.
pub fn reassemble_chars(units: &[char]) -> String {
	let mut text: String = units.iter().collect();
	if let Some(mark) = text.pop() {
		if TERMINATORS.contains(&mark) {
			let kept = text.trim_end().len();
			text.truncate(kept);
		}
		text.push(mark);
	}
	text
}

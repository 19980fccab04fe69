use std::sync::LazyLock;

use regex::Regex;

/// Clitics split off their word (`'s`, `'t`, `'ll`, ...), currency symbols,
/// words, then any other single non-blank character.
static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"(?i)'(?:s|t|ll|re|ve|d|m)\b|[$£€¥]|\w+|[^\w\s]").unwrap()
});

/// Splits text into word and punctuation tokens.
///
/// The split is the one `reassembly::fuse_tokens` knows how to undo:
/// `don't` gives `don` + `'t`, `James'` gives `James` + `'`, `$5` gives
/// `$` + `5`. Whitespace, line breaks included, is not kept.
pub fn tokenize(text: &str) -> Vec<String> {
	TOKEN.find_iter(text).map(|m| m.as_str().to_owned()).collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::text::reassembly::reassemble_tokens;
	use proptest::prelude::*;

	#[test]
	fn words_and_punctuation() {
		assert_eq!(tokenize("Hello, world!"), vec!["Hello", ",", "world", "!"]);
	}

	#[test]
	fn clitics_are_split_off() {
		assert_eq!(tokenize("don't go"), vec!["don", "'t", "go"]);
		assert_eq!(tokenize("They'll see James' hat"), vec!["They", "'ll", "see", "James", "'", "hat"]);
		assert_eq!(tokenize("the cat's toy"), vec!["the", "cat", "'s", "toy"]);
	}

	#[test]
	fn apostrophe_words_are_not_clitics() {
		assert_eq!(tokenize("'start"), vec!["'", "start"]);
	}

	#[test]
	fn currency_is_its_own_token() {
		assert_eq!(tokenize("costs $5."), vec!["costs", "$", "5", "."]);
	}

	#[test]
	fn reassembly_inverts_common_cases() {
		for sentence in [
			"I don't know, James' dog barked.",
			"They're sure it's $5!",
			"Wait; what: really?",
			"The cats' toys weren't there.",
		] {
			assert_eq!(reassemble_tokens(&tokenize(sentence)), sentence);
		}
	}

	#[test]
	fn empty_text_has_no_tokens() {
		assert!(tokenize("  \n ").is_empty());
	}

	proptest! {
		#[test]
		fn non_blank_text_always_has_tokens(text in "\\PC*") {
			prop_assume!(!text.trim().is_empty());
			prop_assert!(!tokenize(&text).is_empty());
		}
	}
}

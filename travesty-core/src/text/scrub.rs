use log::info;

/// Typographic clean-up rules, applied in order, once, to the raw source.
///
/// Order matters: curly apostrophes become `'` before doubled `''` are
/// collapsed.
pub const SCRUB_RULES: &[(&str, &str)] = &[
	("\u{2014}", "---"),
	("\u{2013}", "--"),
	("\u{2012}", "-"),
	("\u{2010}", "-"),
	("\u{2011}", "-"),
	("\u{201c}", ""),
	("\u{201d}", ""),
	("\"", ""),
	("\u{2019}", "'"),
	("''", "'"),
	("\u{2026}", ""),
	("\r\n", "\n"),
	(" & ", " and "),
];

/// Normalizes dashes, quotes, apostrophes, ellipses and line endings.
///
/// An empty input is returned as is.
pub fn scrub(text: &str) -> String {
	if text.is_empty() {
		return String::new();
	}

	info!("document is originally {} chars.", text.chars().count());
	let scrubbed = SCRUB_RULES
		.iter()
		.fold(text.to_owned(), |acc, &(from, to)| acc.replace(from, to));
	info!("document is now {} chars after scrubbing.", scrubbed.chars().count());

	scrubbed
}

/// Column width of formatted output.
pub const WRAP_WIDTH: usize = 70;

/// Tab stops used when expanding tabs before wrapping.
pub const TAB_SIZE: usize = 4;

/// Wraps every line of `text` to `width` columns.
///
/// - Tabs are expanded to the next multiple of `TAB_SIZE`
/// - Blanks at wrap points are dropped, blanks inside a line are kept
/// - Words longer than a line are cut
/// - Each input line (paragraph) is followed by an empty line
pub fn wrap_text(text: &str, width: usize) -> String {
	let width = width.max(1);
	let mut wrapped = String::with_capacity(text.len() + text.len() / width + 2);

	for paragraph in text.split('\n') {
		for line in wrap_line(&expand_tabs(paragraph, TAB_SIZE), width) {
			wrapped.push_str(&line);
			wrapped.push('\n');
		}
		wrapped.push('\n');
	}

	wrapped
}

/// Replaces tabs by spaces up to the next tab stop.
fn expand_tabs(line: &str, tab_size: usize) -> String {
	let mut expanded = String::with_capacity(line.len());
	let mut column = 0;
	for c in line.chars() {
		if c == '\t' {
			let pad = tab_size - column % tab_size;
			expanded.extend(std::iter::repeat_n(' ', pad));
			column += pad;
		} else {
			expanded.push(c);
			column += 1;
		}
	}
	expanded
}

/// Splits a line into alternating runs of blanks and non-blanks.
fn chunks(line: &str) -> Vec<&str> {
	let mut chunks = Vec::new();
	let mut start = 0;
	let mut blank: Option<bool> = None;
	for (i, c) in line.char_indices() {
		let is_blank = c.is_whitespace();
		if blank.is_some_and(|b| b != is_blank) {
			chunks.push(&line[start..i]);
			start = i;
		}
		blank = Some(is_blank);
	}
	if start < line.len() {
		chunks.push(&line[start..]);
	}
	chunks
}

/// Greedy wrap of a single line.
fn wrap_line(line: &str, width: usize) -> Vec<String> {
	let mut lines = Vec::new();
	let mut current = String::new();
	let mut current_len = 0;
	let mut pending_blank = "";

	for chunk in chunks(line) {
		if chunk.starts_with(char::is_whitespace) {
			if current_len > 0 {
				pending_blank = chunk;
			}
			continue;
		}

		let blank_len = pending_blank.chars().count();
		let chunk_len = chunk.chars().count();
		if current_len > 0 && current_len + blank_len + chunk_len > width {
			lines.push(std::mem::take(&mut current));
			current_len = 0;
		} else if current_len > 0 {
			current.push_str(pending_blank);
			current_len += blank_len;
		}
		pending_blank = "";

		let mut rest = chunk;
		while current_len + rest.chars().count() > width {
			// only reached on an empty line: the word alone is too long
			let cut = rest.char_indices().nth(width).map_or(rest.len(), |(i, _)| i);
			lines.push(rest[..cut].to_owned());
			rest = &rest[cut..];
		}
		current.push_str(rest);
		current_len += rest.chars().count();
	}

	if current_len > 0 {
		lines.push(current);
	}
	lines
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn short_lines_are_untouched() {
		assert_eq!(wrap_text("Hello world.", 70), "Hello world.\n\n");
	}

	#[test]
	fn long_lines_wrap_at_word_boundaries() {
		let text = "lorem ipsum ".repeat(30);
		let wrapped = wrap_text(text.trim_end(), WRAP_WIDTH);
		for line in wrapped.lines() {
			assert!(line.chars().count() <= WRAP_WIDTH, "line too long: {line:?}");
			assert!(!line.starts_with(' ') && !line.ends_with(' '));
		}
		assert_eq!(
			wrapped.split_whitespace().collect::<Vec<_>>(),
			text.split_whitespace().collect::<Vec<_>>()
		);
	}

	#[test]
	fn paragraphs_are_separated_by_an_empty_line() {
		assert_eq!(wrap_text("One.\nTwo.", 70), "One.\n\nTwo.\n\n");
	}

	#[test]
	fn tabs_expand_to_tab_stops() {
		assert_eq!(expand_tabs("a\tb", 4), "a   b");
		assert_eq!(expand_tabs("\tb", 4), "    b");
		assert_eq!(wrap_text("a\tb", 70), "a   b\n\n");
	}

	#[test]
	fn overlong_words_are_cut() {
		assert_eq!(wrap_text("abcdefghij", 4), "abcd\nefgh\nij\n\n");
	}

	#[test]
	fn exact_fit_stays_on_one_line() {
		assert_eq!(wrap_text("ab cd", 5), "ab cd\n\n");
		assert_eq!(wrap_text("ab cde", 5), "ab\ncde\n\n");
	}
}

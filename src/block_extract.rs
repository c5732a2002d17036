//! Extraction of SEARCH/REPLACE blocks from a validated diff instruction.

use once_cell::sync::Lazy;
use regex::Regex;

/// One SEARCH/REPLACE unit within a diff instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffBlock {
	/// 1-based line where the search content is expected to start; 0 when unspecified.
	pub start_line: usize,
	/// 1-based inclusive end line; 0 when unspecified (open to end of file).
	pub end_line: usize,
	pub search_content: String,
	pub replace_content: String,
}

static RE_DIFF_BLOCK: Lazy<Regex> = Lazy::new(|| {
	Regex::new(concat!(
		r"(?sm)(?:^|\n)<<<<<<< SEARCH\s*\n",            // Start marker
		r"(?::start_line:\s*(?P<start_line>\d+)\s*\n)?", // Optional start_line
		r"(?::end_line:\s*(?P<end_line>\d+)\s*\n)?",     // Optional end_line
		r"(?:-------\s*\n)?",                            // Optional metadata separator
		r"(?:(?P<search>[\s\S]*?)\n)?=======\s*\n",      // Search content + separator
		r"(?:(?P<replace>[\s\S]*?)\n)?>>>>>>> REPLACE(?:\n|$)", // Replace content + end marker
	))
	.expect("diff block regex is valid")
});

static RE_LINE_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*\d+\s*\|\s").expect("line number regex is valid"));

static RE_ESCAPED_MARKER: Lazy<Regex> = Lazy::new(|| {
	Regex::new(r"(?m)^\\(<<<<<<<|=======|>>>>>>>|-------|:start_line:|:end_line:)").expect("escape regex is valid")
});

/// Extracts all SEARCH/REPLACE blocks from a diff instruction, in document order.
///
/// `search_content`/`replace_content` are returned verbatim (still escaped,
/// still possibly carrying `N | ` display line numbers); the diff engine
/// normalizes them per block.
pub fn extract_diff_blocks(diff_content: &str) -> Vec<DiffBlock> {
	RE_DIFF_BLOCK
		.captures_iter(diff_content)
		.map(|caps| {
			let start_line = caps
				.name("start_line")
				.and_then(|m| m.as_str().parse().ok())
				.unwrap_or(0);
			let end_line = caps.name("end_line").and_then(|m| m.as_str().parse().ok()).unwrap_or(0);
			let search_content = caps.name("search").map(|m| m.as_str().to_string()).unwrap_or_default();
			let replace_content = caps.name("replace").map(|m| m.as_str().to_string()).unwrap_or_default();

			DiffBlock {
				start_line,
				end_line,
				search_content,
				replace_content,
			}
		})
		.collect()
}

/// Removes the leading backslash from escaped marker lines.
pub fn unescape_markers(content: &str) -> String {
	RE_ESCAPED_MARKER.replace_all(content, "$1").to_string()
}

/// True when every non-blank line starts with a `N | ` display line number.
pub fn every_line_has_line_numbers(content: &str) -> bool {
	if content.trim().is_empty() {
		return false;
	}

	content
		.split('\n')
		.filter(|line| !line.trim().is_empty())
		.all(|line| RE_LINE_NUMBER.is_match(line))
}

/// Strips `N | ` display line numbers; blank lines are kept as-is.
pub fn strip_line_numbers(content: &str) -> String {
	if content.is_empty() {
		return String::new();
	}

	content
		.split('\n')
		.map(|line| {
			if line.trim().is_empty() {
				line.to_string()
			} else {
				RE_LINE_NUMBER.replace(line, "").to_string()
			}
		})
		.collect::<Vec<_>>()
		.join("\n")
}

// region:    --- Tests


// endregion: --- Tests

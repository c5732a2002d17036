//! Pre-screen of a diff instruction for out-of-sequence or unescaped markers.
//!
//! Runs before block extraction. A marker line appearing outside its expected
//! position means either the diff template is malformed, or the user is trying
//! to remove literal conflict-marker text from a file and forgot to escape it;
//! the two cases get materially different guidance.

pub const SEARCH_MARKER: &str = "<<<<<<< SEARCH";
pub const SEPARATOR_MARKER: &str = "=======";
pub const REPLACE_MARKER: &str = ">>>>>>> REPLACE";

const SEARCH_PREFIX: &str = "<<<<<<";
const REPLACE_PREFIX: &str = ">>>>>>>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SeqState {
	Start,
	AfterSearch,
	AfterSeparator,
}

/// Validates marker sequencing of a whole diff instruction.
///
/// Returns the model-facing guidance text on failure.
pub fn validate_marker_sequencing(diff_content: &str) -> Result<(), String> {
	let lines: Vec<&str> = diff_content.split('\n').collect();

	// When search/replace/separator counts do not balance, a stray marker is
	// more likely a broken template than unescaped file content.
	let search_count = lines.iter().filter(|l| l.trim() == SEARCH_MARKER).count();
	let sep_count = lines.iter().filter(|l| l.trim() == SEPARATOR_MARKER).count();
	let replace_count = lines.iter().filter(|l| l.trim() == REPLACE_MARKER).count();
	let likely_bad_structure = search_count != replace_count || sep_count < search_count;

	let mut state = SeqState::Start;

	for (idx, line_content) in lines.iter().enumerate() {
		let line = idx + 1;
		let marker = line_content.trim();

		match state {
			SeqState::Start => {
				if marker == SEPARATOR_MARKER {
					if likely_bad_structure {
						return Err(invalid_diff_error(SEPARATOR_MARKER, line, SEARCH_MARKER));
					}
					return Err(merge_conflict_error(SEPARATOR_MARKER, line));
				}
				if marker == REPLACE_MARKER {
					return Err(invalid_diff_error(REPLACE_MARKER, line, SEARCH_MARKER));
				}
				if marker.starts_with(REPLACE_PREFIX) {
					return Err(merge_conflict_error(marker, line));
				}
				if marker == SEARCH_MARKER {
					state = SeqState::AfterSearch;
				} else if marker.starts_with(SEARCH_PREFIX) {
					return Err(merge_conflict_error(marker, line));
				}
			}

			SeqState::AfterSearch => {
				if marker == SEARCH_MARKER {
					return Err(invalid_diff_error(SEARCH_MARKER, line, SEPARATOR_MARKER));
				}
				if marker.starts_with(SEARCH_PREFIX) {
					return Err(merge_conflict_error(marker, line));
				}
				if marker == REPLACE_MARKER {
					return Err(invalid_diff_error(REPLACE_MARKER, line, SEPARATOR_MARKER));
				}
				if marker.starts_with(REPLACE_PREFIX) {
					return Err(merge_conflict_error(marker, line));
				}
				if marker == SEPARATOR_MARKER {
					state = SeqState::AfterSeparator;
				}
			}

			SeqState::AfterSeparator => {
				if marker == SEARCH_MARKER {
					return Err(invalid_diff_error(SEARCH_MARKER, line, REPLACE_MARKER));
				}
				if marker.starts_with(SEARCH_PREFIX) {
					return Err(merge_conflict_error(marker, line));
				}
				if marker == SEPARATOR_MARKER {
					if likely_bad_structure {
						return Err(invalid_diff_error(SEPARATOR_MARKER, line, REPLACE_MARKER));
					}
					return Err(merge_conflict_error(SEPARATOR_MARKER, line));
				}
				if marker == REPLACE_MARKER {
					state = SeqState::Start;
				} else if marker.starts_with(REPLACE_PREFIX) {
					return Err(merge_conflict_error(marker, line));
				}
			}
		}
	}

	if state == SeqState::Start {
		return Ok(());
	}

	let expected = if state == SeqState::AfterSeparator {
		REPLACE_MARKER
	} else {
		SEPARATOR_MARKER
	};
	Err(format!("ERROR: Unexpected end of sequence: Expected '{expected}' was not found."))
}

// region:    --- Support

fn merge_conflict_error(found: &str, line: usize) -> String {
	format!(
		r"ERROR: Special marker '{found}' found in your diff content at line {line}:

When removing merge conflict markers like '{found}' from files, you MUST escape them
in your SEARCH section by prepending a backslash (\) at the beginning of the line:

CORRECT FORMAT:

{SEARCH_MARKER}
content before
\{found}    <-- Note the backslash here in this example
content after
{SEPARATOR_MARKER}
replacement content
{REPLACE_MARKER}

Without escaping, the system confuses your content with diff syntax markers.
You may use multiple diff blocks in a single diff request, but ANY of ONLY the following separators that occur within SEARCH or REPLACE content must be escaped, as follows:
\{SEARCH_MARKER}
\{SEPARATOR_MARKER}
\{REPLACE_MARKER}"
	)
}

fn invalid_diff_error(found: &str, line: usize, expected: &str) -> String {
	format!(
		r"ERROR: Diff block is malformed: marker '{found}' found in your diff content at line {line}. Expected: {expected}

CORRECT FORMAT:

{SEARCH_MARKER}
:start_line: (required) The line number of original content where the search block starts.
:end_line: (required) The line number of original content where the search block ends.
-------
[exact content to find including whitespace]
{SEPARATOR_MARKER}
[new content to replace with]
{REPLACE_MARKER}"
	)
}

// endregion: --- Support

// region:    --- Tests


// endregion: --- Tests

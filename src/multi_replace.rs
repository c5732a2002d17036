//! Fuzzy multi SEARCH/REPLACE diff engine.
//!
//! Orchestrates marker validation, block extraction, per-block windowed fuzzy
//! search against the target content, indentation-preserving rewriting, and
//! aggregation of per-block outcomes into one [`DiffResult`]. Pure function of
//! its inputs; storage read/write belongs to the caller.

use crate::block_extract::{every_line_has_line_numbers, extract_diff_blocks, strip_line_numbers, unescape_markers};
use crate::marker_validator::validate_marker_sequencing;
use crate::similarity::get_similarity;
use tracing::debug;

const DEFAULT_FUZZY_THRESHOLD: f64 = 1.0;
const DEFAULT_BUFFER_LINES: usize = 40;

/// Sentinel for an unspecified end line, resolved against the actual file
/// length once known.
const OPEN_END: isize = isize::MAX;

// region:    --- Types

/// Outcome of applying one diff instruction (possibly many blocks) to one file.
///
/// A multi-block instruction can partially succeed: `success: true` with
/// rewritten `content` and a non-empty `fail_parts` is distinct from a total
/// failure where no block applied.
#[derive(Debug, Clone, Default)]
pub struct DiffResult {
	pub success: bool,
	pub content: Option<String>,
	pub error: Option<String>,
	pub fail_parts: Vec<DiffResult>,
	pub details: Option<MatchDetails>,
}

impl DiffResult {
	fn failure(error: impl Into<String>) -> Self {
		Self {
			success: false,
			error: Some(error.into()),
			..Default::default()
		}
	}
}

/// Diagnostics for a block that failed to locate a match.
#[derive(Debug, Clone)]
pub struct MatchDetails {
	pub similarity: f64,
	pub threshold: f64,
	pub search_content: String,
	pub best_match: String,
}

// endregion: --- Types

/// Multi SEARCH/REPLACE strategy with fuzzy, line-hint-guided matching.
#[derive(Debug, Clone)]
pub struct MultiSearchReplaceStrategy {
	fuzzy_threshold: f64,
	buffer_lines: usize,
}

impl Default for MultiSearchReplaceStrategy {
	fn default() -> Self {
		Self::new(None, None)
	}
}

impl MultiSearchReplaceStrategy {
	/// `fuzzy_threshold` defaults to 1.0 (exact after whitespace
	/// normalization); `buffer_lines` is the search margin around a line hint
	/// and defaults to 40.
	pub fn new(fuzzy_threshold: Option<f64>, buffer_lines: Option<usize>) -> Self {
		Self {
			fuzzy_threshold: fuzzy_threshold.unwrap_or(DEFAULT_FUZZY_THRESHOLD),
			buffer_lines: buffer_lines.unwrap_or(DEFAULT_BUFFER_LINES),
		}
	}

	pub fn name(&self) -> &'static str {
		"MultiSearchReplace"
	}

	/// Applies a diff instruction to `original_content` and returns the
	/// rewritten content or the per-block failure diagnostics.
	///
	/// `_param_start_line`/`_param_end_line` are the tool-level line hints;
	/// block-level `:start_line:`/`:end_line:` annotations take precedence and
	/// are the only hints currently honored.
	pub fn apply_diff(
		&self,
		original_content: &str,
		diff_content: &str,
		_param_start_line: usize,
		_param_end_line: usize,
	) -> DiffResult {
		// -- Validate marker sequencing
		if let Err(error) = validate_marker_sequencing(diff_content) {
			return DiffResult::failure(error);
		}

		// -- Extract blocks
		let mut blocks = extract_diff_blocks(diff_content);
		if blocks.is_empty() {
			return DiffResult::failure("Invalid diff format - no valid SEARCH/REPLACE blocks found");
		}

		// Line ending detected once from the original and reused for the join.
		let line_ending = if original_content.contains("\r\n") { "\r\n" } else { "\n" };
		let mut result_lines: Vec<String> = original_content.split(line_ending).map(String::from).collect();

		// Apply in ascending start-line order (stable on ties) so earlier
		// edits cannot invalidate the line hints of later blocks.
		blocks.sort_by_key(|block| block.start_line);

		let mut delta: isize = 0; // net line-count change so far
		let mut applied_count = 0;
		let mut fail_parts: Vec<DiffResult> = Vec::new();

		for block in blocks {
			// -- Adjust line hints by the shift of previously applied blocks
			let mut current_start = block.start_line as isize;
			if current_start != 0 {
				current_start += delta;
			}
			let mut current_end = if block.end_line == 0 { OPEN_END } else { block.end_line as isize };
			if current_end == OPEN_END {
				current_end = result_lines.len() as isize;
			} else {
				current_end += delta;
			}

			// -- Normalize block content
			let mut search_content = unescape_markers(&block.search_content);
			let mut replace_content = unescape_markers(&block.replace_content);

			if (every_line_has_line_numbers(&search_content) && every_line_has_line_numbers(&replace_content))
				|| (every_line_has_line_numbers(&search_content) && replace_content.trim().is_empty())
			{
				search_content = strip_line_numbers(&search_content);
				replace_content = strip_line_numbers(&replace_content);
			}

			// -- Empty search is only valid as a pure insertion point
			if search_content.is_empty() && current_start == 0 {
				fail_parts.push(DiffResult::failure("Empty search content requires start_line to be specified"));
				continue;
			}
			if search_content.is_empty() && current_start != 0 && current_end != 0 && current_start != current_end {
				fail_parts.push(DiffResult::failure(format!(
					"Empty search content requires start_line and end_line to be the same (got {current_start}-{current_end})"
				)));
				continue;
			}

			let search_lines: Vec<&str> = if search_content.is_empty() {
				Vec::new()
			} else {
				search_content.split('\n').collect()
			};
			let replace_lines: Vec<&str> = if replace_content.is_empty() {
				Vec::new()
			} else {
				replace_content.split('\n').collect()
			};

			// -- Locate the block
			let mut match_index: isize = -1;
			let mut best_match_score = 0.0_f64;
			let mut best_match_content = String::new();

			let mut search_start_index: usize = 0;
			let mut search_end_index: usize = result_lines.len();

			let has_line_hint = current_start > 0;

			if has_line_hint {
				let hint_start = (current_start - 1).max(0) as usize;
				let mut hint_end = current_end - 1;
				if hint_end >= result_lines.len() as isize {
					hint_end = result_lines.len() as isize - 1;
				}

				if hint_start as isize > hint_end && !search_lines.is_empty() {
					fail_parts.push(DiffResult::failure(format!(
						"Invalid line range {current_start}-{current_end} (file has {} lines)",
						result_lines.len()
					)));
					continue;
				}

				if !search_lines.is_empty() && hint_start as isize <= hint_end {
					// Exact-length window first: accept immediately when the
					// hinted range spans exactly the search length and meets
					// the threshold.
					let window_len = (hint_end - hint_start as isize + 1) as usize;
					if window_len == search_lines.len() {
						let original_chunk = result_lines[hint_start..hint_start + window_len].join("\n");
						let similarity = get_similarity(&original_chunk, &search_content);
						if similarity >= self.fuzzy_threshold {
							match_index = hint_start as isize;
							best_match_score = similarity;
							best_match_content = original_chunk;
						}
					}
				} else if search_lines.is_empty() {
					// Pure insertion: the hinted location is the match.
					if hint_start <= result_lines.len() {
						match_index = hint_start as isize;
						best_match_score = 1.0;
					} else {
						fail_parts.push(DiffResult::failure(format!(
							"Invalid insertion line {current_start} (file has {} lines)",
							result_lines.len()
						)));
						continue;
					}
				}

				if match_index == -1 {
					search_start_index = hint_start.saturating_sub(self.buffer_lines);
					search_end_index = ((hint_end + 1) as usize + self.buffer_lines).min(result_lines.len());
				}
			}

			// -- Buffered-window scan: best score wins, ties favor the lowest
			//    offset, early exit on a perfect score.
			if match_index == -1 && !search_lines.is_empty() && search_end_index >= search_lines.len() {
				for i in search_start_index..=(search_end_index - search_lines.len()) {
					let original_chunk = result_lines[i..i + search_lines.len()].join("\n");
					let similarity = get_similarity(&original_chunk, &search_content);

					if similarity > best_match_score {
						best_match_score = similarity;
						match_index = i as isize;
						best_match_content = original_chunk;
					}
					if best_match_score == 1.0 {
						break;
					}
				}
			}

			// -- Threshold check
			if match_index == -1 || (!search_lines.is_empty() && best_match_score < self.fuzzy_threshold) {
				let line_range = if has_line_hint {
					format!(" near lines {current_start}-{current_end}")
				} else {
					String::new()
				};
				let error = format!(
					"No sufficiently similar match found{line_range} ({:.0}% similar, needs {:.0}%)",
					best_match_score * 100.0,
					self.fuzzy_threshold * 100.0
				);
				debug!(
					similarity = best_match_score,
					threshold = self.fuzzy_threshold,
					"diff block match rejected"
				);
				fail_parts.push(DiffResult {
					success: false,
					error: Some(error),
					details: Some(MatchDetails {
						similarity: best_match_score,
						threshold: self.fuzzy_threshold,
						search_content: search_content.clone(),
						best_match: best_match_content,
					}),
					..Default::default()
				});
				continue;
			}

			// -- Rewrite: re-indent the replacement to the matched location
			let match_index = match_index as usize;
			let matched_len = search_lines.len();

			let base_indent = if matched_len > 0 {
				leading_indent(&result_lines[match_index]).to_string()
			} else if match_index > 0 && match_index <= result_lines.len() {
				// For insertions, anchor on the line above the insertion point.
				leading_indent(&result_lines[match_index - 1]).to_string()
			} else {
				String::new()
			};

			let indented_replace: Vec<String> = replace_lines
				.iter()
				.map(|line| format!("{base_indent}{}", line.trim_start_matches([' ', '\t'])))
				.collect();

			let inserted_len = indented_replace.len();
			result_lines.splice(match_index..match_index + matched_len, indented_replace);
			delta += inserted_len as isize - matched_len as isize;
			applied_count += 1;
			debug!(
				start = match_index + 1,
				removed = matched_len,
				inserted = inserted_len,
				"diff block applied"
			);
		}

		// -- Aggregate
		if applied_count == 0 && !fail_parts.is_empty() {
			return DiffResult {
				success: false,
				error: Some("No diff blocks could be applied.".to_string()),
				fail_parts,
				..Default::default()
			};
		}

		DiffResult {
			success: true,
			content: Some(result_lines.join(line_ending)),
			fail_parts,
			..Default::default()
		}
	}
}

// region:    --- Support

/// Leading space/tab run of a line.
fn leading_indent(line: &str) -> &str {
	let end = line.find(|c: char| c != ' ' && c != '\t').unwrap_or(line.len());
	&line[..end]
}

// endregion: --- Support

// region:    --- Tests


// endregion: --- Tests

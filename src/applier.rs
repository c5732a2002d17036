//! Read-apply-write glue between the diff engine and on-disk files.

use crate::{DiffResult, MultiSearchReplaceStrategy, Result, fs_guard, responses};
use simple_fs::{SPath, read_to_string};
use std::fs;
use tracing::debug;

/// Outcome of one read-apply-write cycle for a single file.
#[derive(Debug)]
pub struct DiffOutcome {
	pub file_path: String,
	pub success: bool,
	/// Model-facing result text (already `<tool_result>`/`<tool_error>` wrapped).
	pub message: String,
	pub result: DiffResult,
}

/// Applies a SEARCH/REPLACE diff instruction to `rel_path` under `base_dir`.
///
/// Reads the current content, runs the strategy, and writes the rewritten
/// content back when at least one block applied. The engine itself holds no
/// state; callers that patch the same file concurrently must serialize this
/// read-modify-write cycle per file.
pub fn apply_diff_to_file(
	base_dir: &SPath,
	rel_path: &str,
	diff_content: &str,
	start_line: usize,
	end_line: usize,
	strategy: &MultiSearchReplaceStrategy,
) -> Result<DiffOutcome> {
	let full_path = base_dir.join(rel_path);
	fs_guard::check_for_read(&full_path, base_dir)?;
	fs_guard::check_for_write(&full_path, base_dir)?;

	if !full_path.exists() {
		return Err(crate::Error::file_not_found(rel_path));
	}

	let original_content = read_to_string(&full_path).map_err(crate::Error::simple_fs)?;
	let result = strategy.apply_diff(&original_content, diff_content, start_line, end_line);

	if !result.success {
		debug!(file_path = rel_path, "diff rejected, nothing written");
		let message = responses::format_tool_error(&responses::format_diff_failure(rel_path, &result));
		return Ok(DiffOutcome {
			file_path: rel_path.to_string(),
			success: false,
			message,
			result,
		});
	}

	let new_content = result.content.as_deref().unwrap_or_default();
	fs::write(&full_path, new_content).map_err(|err| crate::Error::io_write_file(full_path.to_string(), err))?;
	debug!(file_path = rel_path, failed_parts = result.fail_parts.len(), "patched file written");

	let message = responses::format_tool_result(&responses::format_diff_success(rel_path, &result));
	Ok(DiffOutcome {
		file_path: rel_path.to_string(),
		success: true,
		message,
		result,
	})
}

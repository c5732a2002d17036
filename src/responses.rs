//! Plain-text result surface sent back toward the model.

use crate::DiffResult;

const TOOL_USE_INSTRUCTIONS_REMINDER: &str = r#"# Reminder: Instructions for Tool Use

Tool uses are formatted using XML-style tags. The tool name is enclosed in opening and closing tags, and each parameter is similarly enclosed within its own set of tags. Here's the structure:

<tool_name>
<parameter1_name>value1</parameter1_name>
<parameter2_name>value2</parameter2_name>
...
</tool_name>

For example:

<attempt_completion>
<result>
I have completed the task...
</result>
</attempt_completion>

Always adhere to this format for all tool uses to ensure proper parsing and execution."#;

/// Wraps a successful tool execution result.
pub fn format_tool_result(result_text: &str) -> String {
	format!("<tool_result>\n{result_text}\n</tool_result>")
}

/// Wraps a tool error.
pub fn format_tool_error(error_message: &str) -> String {
	format!("<tool_error>\n{error_message}\n</tool_error>")
}

/// Error for a missing required tool parameter.
pub fn format_missing_param_error(tool_name: &str, param_name: &str) -> String {
	format!(
		"Missing value for required parameter '{param_name}' in tool '{tool_name}'. Please retry with complete response.\n\n{TOOL_USE_INSTRUCTIONS_REMINDER}"
	)
}

/// Success message for an applied diff, with a warning list when some blocks
/// could not be matched (partial success).
pub fn format_diff_success(file_path: &str, result: &DiffResult) -> String {
	let mut message = format!("Changes successfully applied to {file_path}.");

	let failed: Vec<&DiffResult> = result.fail_parts.iter().filter(|part| !part.success).collect();
	if !failed.is_empty() {
		message.push_str("\nWarning: Some diff parts failed to apply:");
		for part in &failed {
			message.push_str(&format!("\n - {}", part.error.as_deref().unwrap_or("unknown error")));
		}
		message.push_str("\nPlease review the file.");
	}

	message
}

/// Failure message for a diff that could not be applied at all, with
/// per-block diagnostics (similarity vs threshold, nearest matching excerpt)
/// so the model can retry with corrected search text.
pub fn format_diff_failure(file_path: &str, result: &DiffResult) -> String {
	let mut message = format!("Unable to apply diff to file: {file_path}.");

	if let Some(error) = &result.error {
		message.push_str(&format!("\nError: {error}"));
	}

	if !result.fail_parts.is_empty() {
		message.push_str("\nFailed Parts Details:");
		for (idx, part) in result.fail_parts.iter().enumerate() {
			if part.success {
				continue;
			}
			message.push_str(&format!(
				"\n [{}] {}",
				idx + 1,
				part.error.as_deref().unwrap_or("unknown error")
			));
			if let Some(details) = &part.details
				&& !details.best_match.is_empty()
			{
				message.push_str(&format!("\n     Best match found:\n{}", indent_lines(&details.best_match, "     | ")));
			}
		}
	}

	message
}

// region:    --- Support

fn indent_lines(text: &str, prefix: &str) -> String {
	text.split('\n').map(|line| format!("{prefix}{line}")).collect::<Vec<_>>().join("\n")
}

// endregion: --- Support

// region:    --- Tests


// endregion: --- Tests

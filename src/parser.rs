//! Incremental parser for raw assistant output.
//!
//! The model streams plain prose interleaved with tag-delimited tool
//! invocations and `<thinking>` asides. The caller re-invokes
//! [`parse_assistant_message`] on the whole accumulated buffer after every
//! chunk; the function is a pure total function of that buffer, so any prefix
//! of a stream parses to a valid in-progress rendering of the final result.

use crate::{ContentBlock, ParamName, ToolName, ToolUse};

const THINKING_OPEN: &str = "<thinking>";
const THINKING_CLOSE: &str = "</thinking>";

/// Parses an assistant message into an ordered list of content blocks.
///
/// Never fails: malformed or truncated input degrades to partial `Text`
/// blocks. Blocks whose closing delimiter was not observed before
/// end-of-input are emitted with `partial: true`.
pub fn parse_assistant_message(message: &str) -> Vec<ContentBlock> {
	let mut blocks: Vec<ContentBlock> = Vec::new();

	// The accumulator is reset after every completed thinking or tool-use
	// block, so suffix checks and start indices are relative to the tail of
	// the stream still being scanned.
	let mut accumulator = String::new();

	// An open text run always starts at accumulator index 0.
	let mut text_open = false;
	let mut current_tool: Option<ToolUse> = None;
	let mut tool_start_idx: usize = 0;
	let mut current_param: Option<ParamName> = None;
	let mut param_value_start_idx: usize = 0;
	let mut in_thinking = false;
	let mut thinking_start_idx: usize = 0;

	for c in message.chars() {
		accumulator.push(c);

		// -- Thinking open (only when no thinking or tool-use run is open)
		if current_tool.is_none() && !in_thinking && accumulator.ends_with(THINKING_OPEN) {
			if text_open {
				let prefix_len = accumulator.len() - THINKING_OPEN.len();
				if prefix_len > 0 {
					blocks.push(ContentBlock::Text {
						content: accumulator[..prefix_len].trim().to_string(),
						partial: false,
					});
				}
				text_open = false;
			}
			in_thinking = true;
			thinking_start_idx = accumulator.len();
			continue;
		}

		// -- Thinking close
		if in_thinking && accumulator.ends_with(THINKING_CLOSE) {
			let content = accumulator[thinking_start_idx..accumulator.len() - THINKING_CLOSE.len()].to_string();
			blocks.push(ContentBlock::Thinking { content, partial: false });
			in_thinking = false;
			accumulator.clear();
			continue;
		}

		if in_thinking {
			continue;
		}

		// -- Open parameter run: watch for this parameter's close delimiter
		if let Some(tool_use) = current_tool.as_mut()
			&& let Some(param_name) = current_param
		{
			let param_value = &accumulator[param_value_start_idx..];
			let param_closing_tag = format!("</{param_name}>");
			if param_value.ends_with(&param_closing_tag) {
				let value = param_value[..param_value.len() - param_closing_tag.len()].trim().to_string();
				tool_use.params.set(param_name, value);
				current_param = None;
			}
			// Otherwise the partial param value keeps accumulating.
			continue;
		}

		// -- Open tool-use run, no parameter run active
		if let Some(tool_name) = current_tool.as_ref().map(|tool_use| tool_use.name) {
			let tool_closing_tag = format!("</{tool_name}>");
			if accumulator[tool_start_idx..].ends_with(&tool_closing_tag) {
				if let Some(mut tool_use) = current_tool.take() {
					tool_use.partial = false;
					blocks.push(ContentBlock::ToolUse(tool_use));
				}
				accumulator.clear();
				text_open = false;
				continue;
			}

			let mut found_param = false;
			for &param_name in ParamName::ALL {
				let param_opening_tag = format!("<{param_name}>");
				if accumulator.ends_with(&param_opening_tag) {
					current_param = Some(param_name);
					param_value_start_idx = accumulator.len();
					found_param = true;
					break;
				}
			}
			if found_param {
				continue;
			}

			// Special case for write_to_file: the file content may itself
			// contain `</content>`, so the true boundary is the last
			// occurrence of the closing tag within the tool body.
			let content_closing_tag = format!("</{}>", ParamName::Content);
			if tool_name == ToolName::WriteToFile && accumulator.ends_with(&content_closing_tag) {
				let tool_content = &accumulator[tool_start_idx..];
				let content_opening_tag = format!("<{}>", ParamName::Content);
				if let Some(open_idx) = tool_content.find(&content_opening_tag) {
					let content_start = open_idx + content_opening_tag.len();
					if let Some(content_end) = tool_content.rfind(&content_closing_tag)
						&& content_end > content_start
						&& let Some(tool_use) = current_tool.as_mut()
					{
						tool_use
							.params
							.set(ParamName::Content, tool_content[content_start..content_end].trim().to_string());
					}
				}
			}

			// Partial tool body keeps accumulating.
			continue;
		}

		// -- Nothing open: check every known tool-use open delimiter
		let mut did_start_tool_use = false;
		for &tool_name in ToolName::ALL {
			let tool_opening_tag = format!("<{tool_name}>");
			if accumulator.ends_with(&tool_opening_tag) {
				if text_open {
					let prefix_len = accumulator.len() - tool_opening_tag.len();
					if prefix_len > 0 {
						blocks.push(ContentBlock::Text {
							content: accumulator[..prefix_len].trim().to_string(),
							partial: false,
						});
					}
					text_open = false;
				}
				current_tool = Some(ToolUse::new(tool_name));
				tool_start_idx = accumulator.len();
				did_start_tool_use = true;
				break;
			}
		}

		if !did_start_tool_use {
			text_open = true;
		}
	}

	// -- End of input: flush whatever run is still open as partial
	if in_thinking {
		blocks.push(ContentBlock::Thinking {
			content: accumulator[thinking_start_idx..].to_string(),
			partial: true,
		});
	} else if let Some(mut tool_use) = current_tool {
		if let Some(param_name) = current_param {
			let value = accumulator[param_value_start_idx..].trim().to_string();
			tool_use.params.set(param_name, value);
		}
		blocks.push(ContentBlock::ToolUse(tool_use));
	} else if text_open {
		blocks.push(ContentBlock::Text {
			content: accumulator,
			partial: true,
		});
	}

	blocks
}

/// Drops narrative blocks (text and thinking), keeping only tool uses.
pub fn strip_narrative(blocks: Vec<ContentBlock>) -> Vec<ContentBlock> {
	blocks
		.into_iter()
		.filter(|block| match block {
			ContentBlock::Text { .. } => false,
			ContentBlock::Thinking { .. } => false,
			ContentBlock::ToolUse(_) => true,
		})
		.collect()
}

/// Returns true when the trimmed input starts with one of the fenced-code
/// openers a continuation response tends to prepend. Case insensitive.
pub fn looks_like_code_fence_start(input: &str) -> bool {
	const CODE_FENCES: &[&str] = &["```css", "```xml", "```html", "```svg", "```javascript"];

	let trimmed = input.trim_start().to_lowercase();
	CODE_FENCES.iter().any(|fence| trimmed.starts_with(fence))
}

// region:    --- Tests


// endregion: --- Tests

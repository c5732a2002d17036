//! Markdown rendering of parsed content blocks, for message history display.

use crate::{ContentBlock, ParamName, ToolName, ToolUse};

/// Renders parsed content blocks into markdown.
///
/// Partial blocks render with their closing fences/wrappers held back so the
/// output stays well-formed while the stream is still arriving.
pub fn to_markdown(blocks: &[ContentBlock]) -> String {
	let mut out = String::new();

	for block in blocks {
		match block {
			ContentBlock::Text { content, .. } => {
				out.push_str(content);
				out.push_str("\n\n");
			}
			ContentBlock::Thinking { content, partial } => {
				out.push_str("<div class=\"thinking-block\">\n");
				out.push_str("<div class=\"thinking-header\">Thinking</div>\n");
				out.push_str("<div class=\"thinking-content\">\n\n");
				out.push_str(content);
				if !partial {
					out.push_str("\n\n</div>\n</div>\n\n");
				}
			}
			ContentBlock::ToolUse(tool_use) => render_tool_use(&mut out, tool_use),
		}
	}

	out.trim().to_string()
}

// region:    --- Support

fn render_tool_use(out: &mut String, tool_use: &ToolUse) {
	let params = &tool_use.params;

	match tool_use.name {
		ToolName::WriteToFile => {
			if let Some(content) = params.get(ParamName::Content) {
				let path = params.get(ParamName::Path).unwrap_or_default();
				let lang = detect_language(path);
				out.push_str(&format!("**Write file**: `{path}`\n\n"));
				out.push_str("```");
				out.push_str(lang);
				out.push('\n');
				out.push_str(content);
				if !tool_use.partial {
					out.push_str("\n```\n\n");
				}
			}
		}
		ToolName::ExecuteCommand => {
			if let Some(command) = params.get(ParamName::Command) {
				out.push_str("**Run command**:\n\n");
				out.push_str("```shell\n");
				out.push_str(command);
				if !tool_use.partial {
					out.push_str("\n```\n\n");
				}
			}
		}
		ToolName::ReadFile => {
			if let Some(path) = params.get(ParamName::Path) {
				out.push_str(&format!("**Read file**: `{path}`\n\n"));
			}
		}
		ToolName::SearchFiles => {
			if let Some(pattern) = params.get(ParamName::FilePattern) {
				out.push_str(&format!("**Search files**: `{pattern}`"));
				if let Some(regex) = params.get(ParamName::Regex)
					&& !regex.is_empty()
				{
					out.push_str(&format!(" (regex: `{regex}`)"));
				}
				out.push_str("\n\n");
			}
		}
		ToolName::ListFiles => {
			if let Some(path) = params.get(ParamName::Path) {
				let recursive = if params.get(ParamName::Recursive) == Some("true") {
					"yes"
				} else {
					"no"
				};
				out.push_str(&format!("**List files**: `{path}` (recursive: {recursive})\n\n"));
			}
		}
		ToolName::ApplyDiff => {
			if let Some(path) = params.get(ParamName::Path) {
				out.push_str(&format!("**Apply diff**: `{path}`\n\n"));
				if let Some(diff) = params.get(ParamName::Diff) {
					out.push_str("```diff\n");
					out.push_str(diff);
					if !tool_use.partial {
						out.push_str("\n```\n\n");
					}
				}
			}
		}
		ToolName::InsertContent => {
			if let Some(path) = params.get(ParamName::Path) {
				out.push_str(&format!("**Insert content**: `{path}`\n\n"));
				if let Some(content) = params.get(ParamName::Content) {
					let lang = detect_language(path);
					out.push_str("```");
					out.push_str(lang);
					out.push('\n');
					out.push_str(content);
					if !tool_use.partial {
						out.push_str("\n```\n\n");
					}
				}
			}
		}
		ToolName::SearchAndReplace => {
			if let Some(path) = params.get(ParamName::Path) {
				out.push_str(&format!("**Search and replace**: `{path}`\n\n"));
			}
		}
		ToolName::AttemptCompletion => {
			if let Some(result) = params.get(ParamName::Result) {
				out.push_str(&format!("**Completed**: {result}\n\n"));
				if let Some(command) = params.get(ParamName::Command) {
					out.push_str(&format!("Suggested command: `{command}`\n\n"));
				}
			}
		}
		// Remaining tools render generically from their parameter map.
		ToolName::ListCodeDefinitionNames
		| ToolName::BrowserAction
		| ToolName::UseMcpTool
		| ToolName::AccessMcpResource
		| ToolName::AskFollowupQuestion
		| ToolName::SwitchMode
		| ToolName::NewTask
		| ToolName::FetchInstructions => {
			out.push_str(&format!("**Tool**: {}\n\n", tool_use.name));
			for (param, value) in params.iter() {
				out.push_str(&format!("- **{param}**: {value}\n"));
			}
			out.push('\n');
		}
	}
}

/// Best-effort language tag for a fenced code block, from the file extension.
fn detect_language(filename: &str) -> &'static str {
	let ext = filename.rsplit_once('.').map(|(_, ext)| ext.to_lowercase()).unwrap_or_default();

	match ext.as_str() {
		"html" | "htm" => "html",
		"js" => "javascript",
		"py" => "python",
		"go" => "go",
		"java" => "java",
		"c" | "cpp" | "cc" => "cpp",
		"cs" => "csharp",
		"php" => "php",
		"rb" => "ruby",
		"rs" => "rust",
		"ts" => "typescript",
		"sh" => "shell",
		"json" => "json",
		"md" => "markdown",
		"sql" => "sql",
		"xml" => "xml",
		"yaml" | "yml" => "yaml",
		"css" => "css",
		_ => "",
	}
}

// endregion: --- Support

// region:    --- Tests


// endregion: --- Tests

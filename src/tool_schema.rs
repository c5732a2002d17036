//! Closed catalog of the tool and parameter names the assistant may emit.
//!
//! The parser only recognizes tags whose names appear here; anything else is
//! carried through as plain text.

// region:    --- ToolName

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolName {
	ExecuteCommand,
	ReadFile,
	WriteToFile,
	ApplyDiff,
	InsertContent,
	SearchAndReplace,
	SearchFiles,
	ListFiles,
	ListCodeDefinitionNames,
	BrowserAction,
	UseMcpTool,
	AccessMcpResource,
	AskFollowupQuestion,
	AttemptCompletion,
	SwitchMode,
	NewTask,
	FetchInstructions,
}

impl ToolName {
	pub const ALL: &'static [ToolName] = &[
		ToolName::ExecuteCommand,
		ToolName::ReadFile,
		ToolName::WriteToFile,
		ToolName::ApplyDiff,
		ToolName::InsertContent,
		ToolName::SearchAndReplace,
		ToolName::SearchFiles,
		ToolName::ListFiles,
		ToolName::ListCodeDefinitionNames,
		ToolName::BrowserAction,
		ToolName::UseMcpTool,
		ToolName::AccessMcpResource,
		ToolName::AskFollowupQuestion,
		ToolName::AttemptCompletion,
		ToolName::SwitchMode,
		ToolName::NewTask,
		ToolName::FetchInstructions,
	];

	pub fn as_str(&self) -> &'static str {
		match self {
			ToolName::ExecuteCommand => "execute_command",
			ToolName::ReadFile => "read_file",
			ToolName::WriteToFile => "write_to_file",
			ToolName::ApplyDiff => "apply_diff",
			ToolName::InsertContent => "insert_content",
			ToolName::SearchAndReplace => "search_and_replace",
			ToolName::SearchFiles => "search_files",
			ToolName::ListFiles => "list_files",
			ToolName::ListCodeDefinitionNames => "list_code_definition_names",
			ToolName::BrowserAction => "browser_action",
			ToolName::UseMcpTool => "use_mcp_tool",
			ToolName::AccessMcpResource => "access_mcp_resource",
			ToolName::AskFollowupQuestion => "ask_followup_question",
			ToolName::AttemptCompletion => "attempt_completion",
			ToolName::SwitchMode => "switch_mode",
			ToolName::NewTask => "new_task",
			ToolName::FetchInstructions => "fetch_instructions",
		}
	}
}

impl std::fmt::Display for ToolName {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

// endregion: --- ToolName

// region:    --- ParamName

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamName {
	Command,
	Path,
	Content,
	LineCount,
	Regex,
	FilePattern,
	Recursive,
	Action,
	Url,
	Coordinate,
	Text,
	ServerName,
	ToolName,
	Arguments,
	Uri,
	Question,
	Result,
	Diff,
	StartLine,
	EndLine,
	ModeSlug,
	Reason,
	Operations,
	Mode,
	Message,
	Cwd,
	FollowUp,
	Task,
	Size,
}

impl ParamName {
	pub const ALL: &'static [ParamName] = &[
		ParamName::Command,
		ParamName::Path,
		ParamName::Content,
		ParamName::LineCount,
		ParamName::Regex,
		ParamName::FilePattern,
		ParamName::Recursive,
		ParamName::Action,
		ParamName::Url,
		ParamName::Coordinate,
		ParamName::Text,
		ParamName::ServerName,
		ParamName::ToolName,
		ParamName::Arguments,
		ParamName::Uri,
		ParamName::Question,
		ParamName::Result,
		ParamName::Diff,
		ParamName::StartLine,
		ParamName::EndLine,
		ParamName::ModeSlug,
		ParamName::Reason,
		ParamName::Operations,
		ParamName::Mode,
		ParamName::Message,
		ParamName::Cwd,
		ParamName::FollowUp,
		ParamName::Task,
		ParamName::Size,
	];

	pub fn as_str(&self) -> &'static str {
		match self {
			ParamName::Command => "command",
			ParamName::Path => "path",
			ParamName::Content => "content",
			ParamName::LineCount => "line_count",
			ParamName::Regex => "regex",
			ParamName::FilePattern => "file_pattern",
			ParamName::Recursive => "recursive",
			ParamName::Action => "action",
			ParamName::Url => "url",
			ParamName::Coordinate => "coordinate",
			ParamName::Text => "text",
			ParamName::ServerName => "server_name",
			ParamName::ToolName => "tool_name",
			ParamName::Arguments => "arguments",
			ParamName::Uri => "uri",
			ParamName::Question => "question",
			ParamName::Result => "result",
			ParamName::Diff => "diff",
			ParamName::StartLine => "start_line",
			ParamName::EndLine => "end_line",
			ParamName::ModeSlug => "mode_slug",
			ParamName::Reason => "reason",
			ParamName::Operations => "operations",
			ParamName::Mode => "mode",
			ParamName::Message => "message",
			ParamName::Cwd => "cwd",
			ParamName::FollowUp => "follow_up",
			ParamName::Task => "task",
			ParamName::Size => "size",
		}
	}
}

impl std::fmt::Display for ParamName {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

// endregion: --- ParamName

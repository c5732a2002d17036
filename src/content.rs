use crate::{ParamName, ToolName};

/// One unit of parsed assistant output.
///
/// A block is `partial` while its closing delimiter has not been observed yet;
/// re-parsing a longer prefix of the same stream may complete it or grow it,
/// but never changes the completed blocks before it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentBlock {
	Text { content: String, partial: bool },
	Thinking { content: String, partial: bool },
	ToolUse(ToolUse),
}

impl ContentBlock {
	pub fn is_partial(&self) -> bool {
		match self {
			ContentBlock::Text { partial, .. } => *partial,
			ContentBlock::Thinking { partial, .. } => *partial,
			ContentBlock::ToolUse(tool_use) => tool_use.partial,
		}
	}
}

/// A structured command embedded in assistant output, identified by name and
/// a set of named parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolUse {
	pub name: ToolName,
	pub params: Params,
	pub partial: bool,
}

impl ToolUse {
	pub fn new(name: ToolName) -> Self {
		Self {
			name,
			params: Params::default(),
			partial: true,
		}
	}
}

// region:    --- Params

/// Tool parameters in the order they were parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
	entries: Vec<(ParamName, String)>,
}

impl Params {
	pub fn get(&self, name: ParamName) -> Option<&str> {
		self.entries
			.iter()
			.find(|(param_name, _)| *param_name == name)
			.map(|(_, value)| value.as_str())
	}

	/// Sets the value for `name`, replacing a previously parsed value
	/// (the `write_to_file` content boundary correction relies on this).
	pub fn set(&mut self, name: ParamName, value: String) {
		if let Some(entry) = self.entries.iter_mut().find(|(param_name, _)| *param_name == name) {
			entry.1 = value;
		} else {
			self.entries.push((name, value));
		}
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn iter(&self) -> impl Iterator<Item = (ParamName, &str)> {
		self.entries.iter().map(|(name, value)| (*name, value.as_str()))
	}
}

impl FromIterator<(ParamName, String)> for Params {
	fn from_iter<I: IntoIterator<Item = (ParamName, String)>>(iter: I) -> Self {
		let mut params = Params::default();
		for (name, value) in iter {
			params.set(name, value);
		}
		params
	}
}

// endregion: --- Params

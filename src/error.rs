use derive_more::{Display, From};

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Display, From)]
pub enum Error {
	#[from(String, &String, &str)]
	Custom(String),

	// -- Externals
	#[from]
	Io(std::io::Error),

	#[from]
	SimpleFs(simple_fs::Error),
}

// region:    --- Constructors

impl Error {
	pub fn custom(val: impl std::fmt::Display) -> Self {
		Self::Custom(val.to_string())
	}

	pub fn simple_fs(err: simple_fs::Error) -> Self {
		Self::SimpleFs(err)
	}

	pub fn file_not_found(path: impl std::fmt::Display) -> Self {
		Self::Custom(format!("File does not exist at path: {path}"))
	}

	pub fn io_read_file(path: impl std::fmt::Display, err: std::io::Error) -> Self {
		Self::Custom(format!("Failed to read file '{path}'. Cause: {err}"))
	}

	pub fn io_write_file(path: impl std::fmt::Display, err: std::io::Error) -> Self {
		Self::Custom(format!("Failed to write file '{path}'. Cause: {err}"))
	}

	pub fn security_violation(target: impl std::fmt::Display, base_dir: impl std::fmt::Display) -> Self {
		Self::Custom(format!(
			"Path '{target}' is outside of the allowed base directory '{base_dir}'"
		))
	}
}

// endregion: --- Constructors

// region:    --- Error Boilerplate

impl std::error::Error for Error {}

// endregion: --- Error Boilerplate

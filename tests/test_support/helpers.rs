use super::TestResult;
use simple_fs::SPath;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

pub fn new_out_dir_path(prefix: &str) -> TestResult<SPath> {
	let now_ms = SystemTime::now().duration_since(UNIX_EPOCH)?.as_millis();
	let dir = PathBuf::from("tests/.out").join(format!("{prefix}_{now_ms}"));
	std::fs::create_dir_all(&dir)?;
	let dir = SPath::try_from(dir)?;

	Ok(dir)
}

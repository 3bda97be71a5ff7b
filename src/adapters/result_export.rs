//! Markdown download of the final result.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// File name used when the user does not pick one.
pub const RESULT_FILE_NAME: &str = "resultado_prompt_master.md";

/// Write `result` as a markdown file.
///
/// `target` may be a directory (the fixed file name is appended) or a file
/// path. Returns the path written.
pub fn write_markdown(target: &Path, result: &str) -> Result<PathBuf, AppError> {
    let path = if target.is_dir() { target.join(RESULT_FILE_NAME) } else { target.to_path_buf() };
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, result)?;
    Ok(path)
}

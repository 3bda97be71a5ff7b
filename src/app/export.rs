//! One-shot exports of the final result.

use std::path::{Path, PathBuf};

use crate::adapters::result_export;
use crate::domain::AppError;
use crate::ports::ClipboardWriter;

/// Copy `result` to the clipboard.
pub fn copy_result(clipboard: &mut impl ClipboardWriter, result: &str) -> Result<(), AppError> {
    ensure_not_empty(result)?;
    clipboard.write_text(result)
}

/// Save `result` as markdown under `target` (directory or file path).
pub fn download_result(target: &Path, result: &str) -> Result<PathBuf, AppError> {
    ensure_not_empty(result)?;
    result_export::write_markdown(target, result)
}

fn ensure_not_empty(result: &str) -> Result<(), AppError> {
    if result.is_empty() {
        return Err(AppError::Validation("There is no result to export".into()));
    }
    Ok(())
}

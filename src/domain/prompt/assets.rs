use include_dir::{Dir, include_dir};

use crate::domain::AppError;

static PROMPTS_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/prompts");

pub(super) const SYSTEM_INSTRUCTION: &str = "system_instruction.j2";
pub(super) const REQUEST: &str = "request.j2";

/// Read an embedded prompt template by file name.
pub(super) fn template(name: &str) -> Result<&'static str, AppError> {
    PROMPTS_DIR
        .get_file(name)
        .and_then(|file| file.contents_utf8())
        .ok_or_else(|| AppError::PromptAssembly(format!("Embedded template '{}' not found", name)))
}

use crate::domain::AppError;

/// Port for copying the final result to the system clipboard.
pub trait ClipboardWriter {
    fn write_text(&mut self, text: &str) -> Result<(), AppError>;
}

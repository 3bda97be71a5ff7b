use arboard::Clipboard;

use crate::domain::AppError;
use crate::ports::ClipboardWriter;

/// System clipboard; opening it fails on headless sessions.
pub struct ArboardClipboard(Clipboard);

impl ArboardClipboard {
    pub fn new() -> Result<Self, AppError> {
        Clipboard::new().map(Self).map_err(clipboard_error)
    }
}

impl ClipboardWriter for ArboardClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), AppError> {
        self.0.set_text(text.to_owned()).map_err(clipboard_error)
    }
}

fn clipboard_error(err: arboard::Error) -> AppError {
    AppError::Clipboard(err.to_string())
}

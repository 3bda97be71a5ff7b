use crate::domain::AppError;
use crate::ports::ClipboardWriter;

/// Records every write; optionally refuses them like a headless session.
#[derive(Default)]
pub struct MockClipboard {
    writes: Vec<String>,
    unavailable: bool,
}

impl MockClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self { unavailable: true, ..Self::default() }
    }

    /// Most recent text placed on the clipboard.
    pub fn contents(&self) -> Option<&str> {
        self.writes.last().map(String::as_str)
    }

    pub fn write_count(&self) -> usize {
        self.writes.len()
    }
}

impl ClipboardWriter for MockClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), AppError> {
        if self.unavailable {
            return Err(AppError::Clipboard("no display available".into()));
        }
        self.writes.push(text.to_owned());
        Ok(())
    }
}

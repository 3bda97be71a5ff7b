//! Wizard stages and per-session generation state.

use std::fmt;

/// The three screens of the wizard, in their linear order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stage {
    #[default]
    Input,
    Review,
    Result,
}

impl Stage {
    pub const ALL: [Stage; 3] = [Stage::Input, Stage::Review, Stage::Result];

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Input => "INPUT",
            Stage::Review => "REVIEW",
            Stage::Result => "RESULT",
        }
    }

    /// One-based position shown in progress indicators.
    pub fn step(&self) -> usize {
        match self {
            Stage::Input => 1,
            Stage::Review => 2,
            Stage::Result => 3,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Loading flag, last error, and the texts produced by the two remote calls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationState {
    pub is_loading: bool,
    pub error: Option<String>,
    pub generated_prompt: String,
    pub final_result: String,
}

impl GenerationState {
    /// Mark one call as outstanding and drop the previous error.
    pub(crate) fn begin(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    pub(crate) fn fail(&mut self, message: impl Into<String>) {
        self.is_loading = false;
        self.error = Some(message.into());
    }

    pub(crate) fn finish_prompt(&mut self, prompt: String) {
        self.is_loading = false;
        self.error = None;
        self.generated_prompt = prompt;
    }

    pub(crate) fn finish_result(&mut self, result: String) {
        self.is_loading = false;
        self.error = None;
        self.final_result = result;
    }

    pub fn has_prompt(&self) -> bool {
        !self.generated_prompt.is_empty()
    }

    pub fn has_result(&self) -> bool {
        !self.final_result.is_empty()
    }
}

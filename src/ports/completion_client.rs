//! Text-generation service port.

use crate::domain::{AppError, Selections};

/// The two remote operations of the wizard.
///
/// Implementations hold no per-session state, so either call can be repeated
/// by the caller after a failure.
pub trait CompletionClient {
    /// Turn selections into a refined prompt (higher randomness).
    fn refine(&self, selections: &Selections) -> Result<String, AppError>;

    /// Run `prompt` verbatim and return the final document (lower randomness).
    fn execute(&self, prompt: &str) -> Result<String, AppError>;
}

impl<T: CompletionClient + ?Sized> CompletionClient for &T {
    fn refine(&self, selections: &Selections) -> Result<String, AppError> {
        (**self).refine(selections)
    }

    fn execute(&self, prompt: &str) -> Result<String, AppError> {
        (**self).execute(prompt)
    }
}

impl<T: CompletionClient + ?Sized> CompletionClient for Box<T> {
    fn refine(&self, selections: &Selections) -> Result<String, AppError> {
        (**self).refine(selections)
    }

    fn execute(&self, prompt: &str) -> Result<String, AppError> {
        (**self).execute(prompt)
    }
}

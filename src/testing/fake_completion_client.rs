use std::sync::{Arc, Mutex};

use crate::domain::{AppError, Selections};
use crate::ports::CompletionClient;

#[derive(Debug, Default)]
struct State {
    prompt: String,
    result: String,
    refine_failure: Option<String>,
    execute_failure: Option<String>,
    refine_calls: Vec<Selections>,
    execute_calls: Vec<String>,
}

/// Completion client returning canned text or a forced failure.
///
/// Clones share recorded calls and configured responses.
#[derive(Debug, Clone)]
pub struct FakeCompletionClient {
    state: Arc<Mutex<State>>,
}

impl FakeCompletionClient {
    pub fn new() -> Self {
        let state = State {
            prompt: "refined prompt".to_string(),
            result: "final result".to_string(),
            ..Default::default()
        };
        Self { state: Arc::new(Mutex::new(state)) }
    }

    pub fn with_prompt(self, prompt: &str) -> Self {
        self.state.lock().unwrap().prompt = prompt.to_string();
        self
    }

    pub fn with_result(self, result: &str) -> Self {
        self.state.lock().unwrap().result = result.to_string();
        self
    }

    pub fn failing_refine(self, message: &str) -> Self {
        self.set_refine_failure(Some(message));
        self
    }

    pub fn failing_execute(self, message: &str) -> Self {
        self.state.lock().unwrap().execute_failure = Some(message.to_string());
        self
    }

    pub fn set_refine_failure(&self, message: Option<&str>) {
        self.state.lock().unwrap().refine_failure = message.map(str::to_string);
    }

    pub fn refine_calls(&self) -> Vec<Selections> {
        self.state.lock().unwrap().refine_calls.clone()
    }

    pub fn execute_calls(&self) -> Vec<String> {
        self.state.lock().unwrap().execute_calls.clone()
    }
}

impl CompletionClient for FakeCompletionClient {
    fn refine(&self, selections: &Selections) -> Result<String, AppError> {
        let mut state = self.state.lock().unwrap();
        state.refine_calls.push(selections.clone());
        match &state.refine_failure {
            Some(message) => Err(AppError::CompletionApi { message: message.clone(), status: None }),
            None => Ok(state.prompt.clone()),
        }
    }

    fn execute(&self, prompt: &str) -> Result<String, AppError> {
        let mut state = self.state.lock().unwrap();
        state.execute_calls.push(prompt.to_string());
        match &state.execute_failure {
            Some(message) => Err(AppError::CompletionApi { message: message.clone(), status: None }),
            None => Ok(state.result.clone()),
        }
    }
}

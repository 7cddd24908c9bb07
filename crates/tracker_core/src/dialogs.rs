//! Modal dialog capability used by the controller.

use std::collections::VecDeque;

use shared::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogText {
    pub title: &'static str,
    pub message: &'static str,
}

pub const CLEAR_CONFIRMATION: DialogText = DialogText {
    title: "Confirmation",
    message: "Do you want to remove all monsters?",
};

pub const CLONE_NAME_PROMPT: DialogText = DialogText {
    title: "Clone monster",
    message: "Enter new name for the cloned monster:",
};

/// A modal an action is about to open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogRequest {
    Confirm(DialogText),
    Prompt(DialogText),
}

/// Blocking dialogs. Every call returns only once the user has answered.
pub trait Dialogs {
    fn show_validation_error(&mut self, error: &ValidationError);

    /// Yes/no question; `true` means yes.
    fn confirm(&mut self, text: &DialogText) -> bool;

    /// Free-text question; `None` means the user cancelled.
    fn prompt_text(&mut self, text: &DialogText) -> Option<String>;
}

/// Answers dialogs from pre-recorded responses. Once a queue runs dry,
/// confirmations answer no and prompts are cancelled.
#[derive(Debug, Default, Clone)]
pub struct ScriptedDialogs {
    confirm_answers: VecDeque<bool>,
    prompt_answers: VecDeque<Option<String>>,
    shown_errors: Vec<ValidationError>,
    confirm_requests: usize,
    prompt_requests: usize,
}

impl ScriptedDialogs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer_confirm(mut self, yes: bool) -> Self {
        self.confirm_answers.push_back(yes);
        self
    }

    pub fn answer_prompt(mut self, answer: Option<impl Into<String>>) -> Self {
        self.prompt_answers.push_back(answer.map(Into::into));
        self
    }

    pub fn shown_errors(&self) -> &[ValidationError] {
        &self.shown_errors
    }

    pub fn take_shown_errors(&mut self) -> Vec<ValidationError> {
        std::mem::take(&mut self.shown_errors)
    }

    pub fn confirm_requests(&self) -> usize {
        self.confirm_requests
    }

    pub fn prompt_requests(&self) -> usize {
        self.prompt_requests
    }
}

impl Dialogs for ScriptedDialogs {
    fn show_validation_error(&mut self, error: &ValidationError) {
        self.shown_errors.push(error.clone());
    }

    fn confirm(&mut self, _text: &DialogText) -> bool {
        self.confirm_requests += 1;
        self.confirm_answers.pop_front().unwrap_or(false)
    }

    fn prompt_text(&mut self, _text: &DialogText) -> Option<String> {
        self.prompt_requests += 1;
        self.prompt_answers.pop_front().flatten()
    }
}

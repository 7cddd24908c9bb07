//! UI events and notice modeling for the desktop GUI controller.

use shared::error::ValidationError;
use tracker_core::Action;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    SelectRow(usize),
    ClearSelection,
    Trigger(Action),
    ConfirmAnswered(bool),
    PromptAnswered(Option<String>),
    NoticeDismissed,
}

impl UiEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SelectRow(_) => "select_row",
            Self::ClearSelection => "clear_selection",
            Self::Trigger(_) => "trigger",
            Self::ConfirmAnswered(_) => "confirm_answered",
            Self::PromptAnswered(_) => "prompt_answered",
            Self::NoticeDismissed => "notice_dismissed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiNoticeCategory {
    MissingInput,
    InvalidNumber,
    InvalidName,
}

/// A blocking notice waiting for acknowledgement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiNotice {
    category: UiNoticeCategory,
    message: String,
}

impl UiNotice {
    pub fn from_validation(error: &ValidationError) -> Self {
        let category = match error {
            ValidationError::MissingNameOrLife => UiNoticeCategory::MissingInput,
            ValidationError::InvalidLife { .. } | ValidationError::InvalidAmount { .. } => {
                UiNoticeCategory::InvalidNumber
            }
            ValidationError::BlankCloneName => UiNoticeCategory::InvalidName,
        };
        Self {
            category,
            message: error.to_string(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self.category {
            UiNoticeCategory::MissingInput => "Missing input",
            UiNoticeCategory::InvalidNumber => "Invalid number",
            UiNoticeCategory::InvalidName => "Invalid name",
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

//! Routes UI events into the tracker. Modal answers are collected by the UI
//! first and then replayed to the tracker through scripted dialogs.

use std::collections::VecDeque;

use tracker_core::{Action, ActionOutcome, DialogRequest, DialogText, ScriptedDialogs, Tracker};

use crate::controller::events::{UiEvent, UiNotice};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingDialog {
    Confirm {
        action: Action,
        text: DialogText,
    },
    Prompt {
        action: Action,
        text: DialogText,
        input: String,
    },
}

#[derive(Debug, Default)]
pub struct GuiSession {
    tracker: Tracker,
    pending: Option<PendingDialog>,
    notices: VecDeque<UiNotice>,
}

impl GuiSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tracker(&self) -> &Tracker {
        &self.tracker
    }

    pub fn tracker_mut(&mut self) -> &mut Tracker {
        &mut self.tracker
    }

    pub fn pending(&self) -> Option<&PendingDialog> {
        self.pending.as_ref()
    }

    /// Edit buffer of an open clone-name prompt.
    pub fn prompt_input_mut(&mut self) -> Option<&mut String> {
        match self.pending.as_mut() {
            Some(PendingDialog::Prompt { input, .. }) => Some(input),
            _ => None,
        }
    }

    pub fn current_notice(&self) -> Option<&UiNotice> {
        self.notices.front()
    }

    /// True while any modal is on screen; the main form is inert meanwhile.
    pub fn is_blocked(&self) -> bool {
        self.pending.is_some() || !self.notices.is_empty()
    }

    pub fn handle_event(&mut self, event: UiEvent) {
        if let Some(notice) = self.notices.front() {
            if event == UiEvent::NoticeDismissed {
                tracing::debug!(title = notice.title(), "notice dismissed");
                self.notices.pop_front();
            } else {
                tracing::debug!(event = event.name(), "ignoring event behind notice");
            }
            return;
        }

        match (self.pending.take(), event) {
            (Some(PendingDialog::Confirm { action, .. }), UiEvent::ConfirmAnswered(yes)) => {
                self.run(action, ScriptedDialogs::new().answer_confirm(yes));
            }
            (Some(PendingDialog::Prompt { action, .. }), UiEvent::PromptAnswered(answer)) => {
                self.run(action, ScriptedDialogs::new().answer_prompt(answer));
            }
            (Some(pending), event) => {
                tracing::debug!(event = event.name(), "ignoring event behind modal");
                self.pending = Some(pending);
            }
            (None, UiEvent::SelectRow(index)) => {
                self.tracker.select(index);
            }
            (None, UiEvent::ClearSelection) => self.tracker.clear_selection(),
            (None, UiEvent::Trigger(action)) => self.trigger(action),
            (None, event) => {
                tracing::debug!(event = event.name(), "no modal open for answer");
            }
        }
    }

    fn trigger(&mut self, action: Action) {
        if !self.tracker.is_enabled(action) {
            tracing::debug!(action = action.name(), "action disabled");
            return;
        }

        self.pending = match self.tracker.dialog_needed(action) {
            Some(DialogRequest::Confirm(text)) => Some(PendingDialog::Confirm { action, text }),
            Some(DialogRequest::Prompt(text)) => Some(PendingDialog::Prompt {
                action,
                text,
                input: String::new(),
            }),
            None => {
                self.run(action, ScriptedDialogs::new());
                None
            }
        };
    }

    fn run(&mut self, action: Action, mut dialogs: ScriptedDialogs) {
        if let ActionOutcome::Rejected(err) = self.tracker.dispatch(action, &mut dialogs) {
            tracing::debug!(action = action.name(), %err, "queueing validation notice");
        }
        self.notices.extend(
            dialogs
                .take_shown_errors()
                .iter()
                .map(UiNotice::from_validation),
        );
    }
}

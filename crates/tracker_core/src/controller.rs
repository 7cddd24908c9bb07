//! Selection-driven controller: validates the form, mutates the store and keeps
//! the status line.

use shared::error::{StoreError, ValidationError};

use crate::{
    dialogs::{DialogRequest, Dialogs, CLEAR_CONFIRMATION, CLONE_NAME_PROMPT},
    store::MonsterStore,
};

const NO_MONSTERS_STATUS: &str = "There are no monsters created.";
const CLEARED_STATUS: &str = "All monsters have been removed.";
const CLEAR_CANCELED_STATUS: &str = "Clear list canceled.";
const CLONE_CANCELED_STATUS: &str = "Clone canceled or invalid name.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Create,
    Apply,
    Remove,
    ClearList,
    Clone,
}

impl Action {
    pub fn name(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Apply => "apply",
            Self::Remove => "remove",
            Self::ClearList => "clear_list",
            Self::Clone => "clone",
        }
    }

    fn needs_selection(self) -> bool {
        matches!(self, Self::Apply | Self::Remove | Self::Clone)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    NoSelection,
    HasSelection,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Completed,
    Rejected(ValidationError),
    Cancelled,
    NothingToDo,
}

/// Raw text of the form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub name: String,
    pub life: String,
    pub amount: String,
}

#[derive(Debug, Default)]
pub struct Tracker {
    store: MonsterStore,
    selected: Option<usize>,
    form: FormInput,
    status: String,
}

impl Tracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> &MonsterStore {
        &self.store
    }

    pub fn form(&self) -> &FormInput {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormInput {
        &mut self.form
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selection_state(&self) -> SelectionState {
        if self.selected.is_some() {
            SelectionState::HasSelection
        } else {
            SelectionState::NoSelection
        }
    }

    /// Selects row `index`. Out-of-range rows are refused and leave the
    /// current selection alone.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.store.len() {
            tracing::debug!(index, len = self.store.len(), "ignoring out-of-range selection");
            return false;
        }
        self.selected = Some(index);
        true
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn is_enabled(&self, action: Action) -> bool {
        !action.needs_selection() || self.selection_state() == SelectionState::HasSelection
    }

    /// The modal `action` would open right now, if any.
    pub fn dialog_needed(&self, action: Action) -> Option<DialogRequest> {
        match action {
            Action::ClearList if !self.store.is_empty() => {
                Some(DialogRequest::Confirm(CLEAR_CONFIRMATION))
            }
            Action::Clone if self.selected.is_some() => {
                Some(DialogRequest::Prompt(CLONE_NAME_PROMPT))
            }
            _ => None,
        }
    }

    pub fn dispatch(&mut self, action: Action, dialogs: &mut dyn Dialogs) -> ActionOutcome {
        let outcome = match action {
            Action::Create => self.create(dialogs),
            Action::Apply => self.apply(dialogs),
            Action::Remove => self.remove(),
            Action::ClearList => self.clear_list(dialogs),
            Action::Clone => self.clone_selected(dialogs),
        };
        tracing::debug!(action = action.name(), ?outcome, "handled action");
        outcome
    }

    pub fn create(&mut self, dialogs: &mut dyn Dialogs) -> ActionOutcome {
        let created = match self.store.create(&self.form.name, &self.form.life) {
            Ok(monster) => monster.clone(),
            Err(err) => return self.reject(err, dialogs),
        };

        tracing::info!(name = %created.name, life = created.life, "monster created");
        self.form.name.clear();
        self.form.life.clear();
        self.selected = None;
        self.status = format!("Monster created: {}", created.name);
        ActionOutcome::Completed
    }

    pub fn apply(&mut self, dialogs: &mut dyn Dialogs) -> ActionOutcome {
        let Some(index) = self.selected else {
            return ActionOutcome::NothingToDo;
        };

        let before = self.store.get(index).map(|monster| monster.life);
        let updated = match self.store.adjust_life(index, &self.form.amount) {
            Ok(monster) => monster.clone(),
            Err(err) => return self.store_failure(err, dialogs),
        };
        let delta = before.map_or(0, |life| updated.life.saturating_sub(life));

        tracing::info!(name = %updated.name, delta, life = updated.life, "life adjusted");
        self.form.amount.clear();
        self.selected = None;
        self.status = format!(
            "{} life changed by {delta:+} (now {})",
            updated.name, updated.life
        );
        ActionOutcome::Completed
    }

    pub fn remove(&mut self) -> ActionOutcome {
        let Some(index) = self.selected.take() else {
            return ActionOutcome::NothingToDo;
        };

        match self.store.remove(index) {
            Ok(removed) => {
                tracing::info!(name = %removed.name, index, "monster removed");
                self.status = format!("Monster removed: {}", removed.name);
                ActionOutcome::Completed
            }
            Err(err) => {
                tracing::warn!(index, "selection pointed past the list: {err}");
                ActionOutcome::NothingToDo
            }
        }
    }

    pub fn clear_list(&mut self, dialogs: &mut dyn Dialogs) -> ActionOutcome {
        if self.store.is_empty() {
            self.status = NO_MONSTERS_STATUS.to_string();
            return ActionOutcome::NothingToDo;
        }

        if !dialogs.confirm(&CLEAR_CONFIRMATION) {
            self.status = CLEAR_CANCELED_STATUS.to_string();
            return ActionOutcome::Cancelled;
        }

        tracing::info!(count = self.store.len(), "clearing monster list");
        self.store.clear();
        self.selected = None;
        self.status = CLEARED_STATUS.to_string();
        ActionOutcome::Completed
    }

    pub fn clone_selected(&mut self, dialogs: &mut dyn Dialogs) -> ActionOutcome {
        let Some(index) = self.selected else {
            return ActionOutcome::NothingToDo;
        };
        let Some(original_name) = self.store.get(index).map(|monster| monster.name.clone())
        else {
            return self.stale_selection(index);
        };

        let Some(new_name) = dialogs.prompt_text(&CLONE_NAME_PROMPT) else {
            self.status = CLONE_CANCELED_STATUS.to_string();
            return ActionOutcome::Cancelled;
        };

        match self.store.clone_monster(index, &new_name) {
            Ok(copy) => {
                tracing::info!(from = %original_name, to = %copy.name, "monster cloned");
                self.status = format!("{original_name} cloned to {}", copy.name);
                self.selected = None;
                ActionOutcome::Completed
            }
            Err(StoreError::Validation(_)) => {
                self.status = CLONE_CANCELED_STATUS.to_string();
                ActionOutcome::Cancelled
            }
            Err(StoreError::NoSuchMonster { index }) => self.stale_selection(index),
        }
    }

    fn reject(&mut self, err: ValidationError, dialogs: &mut dyn Dialogs) -> ActionOutcome {
        tracing::debug!(%err, "rejected form input");
        dialogs.show_validation_error(&err);
        self.status = err.to_string();
        ActionOutcome::Rejected(err)
    }

    fn store_failure(&mut self, err: StoreError, dialogs: &mut dyn Dialogs) -> ActionOutcome {
        match err {
            StoreError::Validation(err) => self.reject(err, dialogs),
            StoreError::NoSuchMonster { index } => self.stale_selection(index),
        }
    }

    fn stale_selection(&mut self, index: usize) -> ActionOutcome {
        tracing::warn!(index, len = self.store.len(), "dropping stale selection");
        self.selected = None;
        ActionOutcome::NothingToDo
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;

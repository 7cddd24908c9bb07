//! Monster roster state: the record store, the selection-driven controller and
//! the dialog capability it calls into.

pub mod controller;
pub mod dialogs;
pub mod store;

pub use controller::{Action, ActionOutcome, FormInput, SelectionState, Tracker};
pub use dialogs::{DialogRequest, DialogText, Dialogs, ScriptedDialogs};
pub use store::MonsterStore;

use super::*;
use crate::dialogs::ScriptedDialogs;
use shared::domain::Monster;

fn fill(tracker: &mut Tracker, name: &str, life: &str) {
    let form = tracker.form_mut();
    form.name = name.to_string();
    form.life = life.to_string();
}

fn tracker_with(monsters: &[(&str, &str)]) -> Tracker {
    let mut tracker = Tracker::new();
    let mut dialogs = ScriptedDialogs::new();
    for (name, life) in monsters {
        fill(&mut tracker, name, life);
        assert_eq!(tracker.create(&mut dialogs), ActionOutcome::Completed);
    }
    tracker
}

fn monsters(tracker: &Tracker) -> Vec<Monster> {
    tracker.store().iter().cloned().collect()
}

#[test]
fn create_appends_and_clears_fields() {
    let mut tracker = Tracker::new();
    let mut dialogs = ScriptedDialogs::new();
    fill(&mut tracker, "Goblin", "10");

    assert_eq!(tracker.create(&mut dialogs), ActionOutcome::Completed);
    assert_eq!(monsters(&tracker), vec![Monster::new("Goblin", 10)]);
    assert_eq!(tracker.form().name, "");
    assert_eq!(tracker.form().life, "");
    assert_eq!(tracker.status(), "Monster created: Goblin");
    assert!(dialogs.shown_errors().is_empty());
}

#[test]
fn create_with_invalid_input_shows_dialog_and_keeps_store() {
    let cases = [
        ("", "10", ValidationError::MissingNameOrLife),
        ("Goblin", "", ValidationError::MissingNameOrLife),
        (
            "Goblin",
            "abc",
            ValidationError::InvalidLife {
                input: "abc".to_string(),
            },
        ),
        (
            "Goblin",
            "0",
            ValidationError::InvalidLife {
                input: "0".to_string(),
            },
        ),
        (
            "Goblin",
            "-2",
            ValidationError::InvalidLife {
                input: "-2".to_string(),
            },
        ),
    ];

    for (name, life, expected) in cases {
        let mut tracker = tracker_with(&[("Orc", "20")]);
        let mut dialogs = ScriptedDialogs::new();
        fill(&mut tracker, name, life);

        assert_eq!(
            tracker.create(&mut dialogs),
            ActionOutcome::Rejected(expected.clone())
        );
        assert_eq!(dialogs.shown_errors(), &[expected.clone()]);
        assert_eq!(monsters(&tracker), vec![Monster::new("Orc", 20)]);
        assert_eq!(tracker.form().name, name, "fields survive a rejection");
        assert_eq!(tracker.status(), expected.to_string());
    }
}

#[test]
fn create_clears_selection() {
    let mut tracker = tracker_with(&[("Orc", "20")]);
    assert!(tracker.select(0));
    fill(&mut tracker, "Goblin", "10");

    tracker.create(&mut ScriptedDialogs::new());

    assert_eq!(tracker.selection_state(), SelectionState::NoSelection);
}

#[test]
fn selection_drives_enabled_actions() {
    let mut tracker = tracker_with(&[("Goblin", "10")]);

    for action in [Action::Apply, Action::Remove, Action::Clone] {
        assert!(!tracker.is_enabled(action));
    }
    assert!(tracker.is_enabled(Action::Create));
    assert!(tracker.is_enabled(Action::ClearList));

    assert!(tracker.select(0));
    assert_eq!(tracker.selection_state(), SelectionState::HasSelection);
    for action in [Action::Apply, Action::Remove, Action::Clone] {
        assert!(tracker.is_enabled(action));
    }

    tracker.clear_selection();
    assert_eq!(tracker.selection_state(), SelectionState::NoSelection);
}

#[test]
fn selecting_past_the_end_is_refused() {
    let mut tracker = tracker_with(&[("Goblin", "10")]);
    assert!(tracker.select(0));

    assert!(!tracker.select(1));
    assert_eq!(tracker.selected(), Some(0));
}

#[test]
fn apply_damage_then_heal() {
    let mut tracker = tracker_with(&[("Goblin", "10")]);
    let mut dialogs = ScriptedDialogs::new();

    tracker.select(0);
    tracker.form_mut().amount = "-3".to_string();
    assert_eq!(tracker.apply(&mut dialogs), ActionOutcome::Completed);
    assert_eq!(tracker.store().get(0).map(|m| m.life), Some(7));
    assert_eq!(tracker.form().amount, "");
    assert_eq!(tracker.selected(), None);
    assert_eq!(tracker.status(), "Goblin life changed by -3 (now 7)");

    tracker.select(0);
    tracker.form_mut().amount = "5".to_string();
    assert_eq!(tracker.apply(&mut dialogs), ActionOutcome::Completed);
    assert_eq!(tracker.store().get(0).map(|m| m.life), Some(12));
    assert_eq!(tracker.status(), "Goblin life changed by +5 (now 12)");
}

#[test]
fn apply_can_drive_life_below_zero() {
    let mut tracker = tracker_with(&[("Goblin", "10")]);
    tracker.select(0);
    tracker.form_mut().amount = "-25".to_string();

    tracker.apply(&mut ScriptedDialogs::new());

    assert_eq!(tracker.store().get(0).map(|m| m.life), Some(-15));
}

#[test]
fn apply_with_non_integer_amount_is_rejected() {
    let mut tracker = tracker_with(&[("Goblin", "10")]);
    let mut dialogs = ScriptedDialogs::new();
    tracker.select(0);
    tracker.form_mut().amount = "lots".to_string();

    let outcome = tracker.apply(&mut dialogs);

    assert!(matches!(
        outcome,
        ActionOutcome::Rejected(ValidationError::InvalidAmount { .. })
    ));
    assert_eq!(dialogs.shown_errors().len(), 1);
    assert_eq!(tracker.store().get(0).map(|m| m.life), Some(10));
    assert_eq!(tracker.form().amount, "lots");
    assert_eq!(tracker.selected(), Some(0));
}

#[test]
fn actions_needing_selection_do_nothing_without_one() {
    let mut tracker = tracker_with(&[("Goblin", "10")]);
    let mut dialogs = ScriptedDialogs::new().answer_prompt(Some("Copy"));
    tracker.form_mut().amount = "4".to_string();

    assert_eq!(tracker.apply(&mut dialogs), ActionOutcome::NothingToDo);
    assert_eq!(tracker.remove(), ActionOutcome::NothingToDo);
    assert_eq!(
        tracker.clone_selected(&mut dialogs),
        ActionOutcome::NothingToDo
    );

    assert_eq!(dialogs.prompt_requests(), 0);
    assert_eq!(monsters(&tracker), vec![Monster::new("Goblin", 10)]);
}

#[test]
fn removing_the_only_record_empties_store_and_selection() {
    let mut tracker = tracker_with(&[("Goblin", "10")]);
    tracker.select(0);

    assert_eq!(tracker.remove(), ActionOutcome::Completed);
    assert!(tracker.store().is_empty());
    assert_eq!(tracker.selection_state(), SelectionState::NoSelection);
    assert_eq!(tracker.status(), "Monster removed: Goblin");
}

#[test]
fn clear_on_empty_store_never_asks() {
    let mut tracker = Tracker::new();
    let mut dialogs = ScriptedDialogs::new().answer_confirm(true);

    assert_eq!(tracker.clear_list(&mut dialogs), ActionOutcome::NothingToDo);
    assert_eq!(dialogs.confirm_requests(), 0);
    assert_eq!(tracker.status(), "There are no monsters created.");
    assert_eq!(tracker.dialog_needed(Action::ClearList), None);
}

#[test]
fn declined_clear_keeps_store() {
    let mut tracker = tracker_with(&[("Goblin", "10"), ("Orc", "20")]);
    tracker.select(1);
    let mut dialogs = ScriptedDialogs::new().answer_confirm(false);

    assert_eq!(tracker.clear_list(&mut dialogs), ActionOutcome::Cancelled);
    assert_eq!(dialogs.confirm_requests(), 1);
    assert_eq!(tracker.store().len(), 2);
    assert_eq!(tracker.selected(), Some(1));
    assert_eq!(tracker.status(), "Clear list canceled.");
}

#[test]
fn confirmed_clear_empties_store_and_selection() {
    let mut tracker = tracker_with(&[("Goblin", "10"), ("Orc", "20")]);
    tracker.select(1);
    let mut dialogs = ScriptedDialogs::new().answer_confirm(true);

    assert_eq!(tracker.clear_list(&mut dialogs), ActionOutcome::Completed);
    assert!(tracker.store().is_empty());
    assert_eq!(tracker.selected(), None);
    assert_eq!(tracker.status(), "All monsters have been removed.");
}

#[test]
fn clone_appends_independent_copy() {
    let mut tracker = tracker_with(&[("Orc", "20")]);
    tracker.select(0);
    let mut dialogs = ScriptedDialogs::new().answer_prompt(Some("Orc2"));

    assert_eq!(tracker.clone_selected(&mut dialogs), ActionOutcome::Completed);
    assert_eq!(
        monsters(&tracker),
        vec![Monster::new("Orc", 20), Monster::new("Orc2", 20)]
    );
    assert_eq!(tracker.status(), "Orc cloned to Orc2");
    assert_eq!(tracker.selected(), None);

    tracker.select(1);
    tracker.form_mut().amount = "-5".to_string();
    tracker.apply(&mut dialogs);
    assert_eq!(tracker.store().get(0), Some(&Monster::new("Orc", 20)));
}

#[test]
fn clone_with_blank_or_cancelled_name_is_silent() {
    for answer in [Some("   "), None] {
        let mut tracker = tracker_with(&[("Orc", "20")]);
        tracker.select(0);
        let mut dialogs = ScriptedDialogs::new().answer_prompt(answer);

        assert_eq!(tracker.clone_selected(&mut dialogs), ActionOutcome::Cancelled);
        assert_eq!(tracker.store().len(), 1);
        assert!(dialogs.shown_errors().is_empty());
        assert_eq!(tracker.status(), "Clone canceled or invalid name.");
    }
}

#[test]
fn dialog_needed_follows_state() {
    let mut tracker = tracker_with(&[("Orc", "20")]);

    assert_eq!(tracker.dialog_needed(Action::Clone), None);
    assert_eq!(
        tracker.dialog_needed(Action::ClearList),
        Some(DialogRequest::Confirm(CLEAR_CONFIRMATION))
    );

    tracker.select(0);
    assert_eq!(
        tracker.dialog_needed(Action::Clone),
        Some(DialogRequest::Prompt(CLONE_NAME_PROMPT))
    );
    for action in [Action::Create, Action::Apply, Action::Remove] {
        assert_eq!(tracker.dialog_needed(action), None);
    }
}

#[test]
fn dispatch_routes_to_handlers() {
    let mut tracker = Tracker::new();
    let mut dialogs = ScriptedDialogs::new().answer_confirm(true);
    fill(&mut tracker, "Bat", "3");

    assert_eq!(
        tracker.dispatch(Action::Create, &mut dialogs),
        ActionOutcome::Completed
    );
    assert_eq!(
        tracker.dispatch(Action::ClearList, &mut dialogs),
        ActionOutcome::Completed
    );
    assert!(tracker.store().is_empty());
}

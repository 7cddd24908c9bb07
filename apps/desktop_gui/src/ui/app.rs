use eframe::egui;
use tracker_core::Action;

use crate::controller::{
    events::UiEvent,
    orchestration::{GuiSession, PendingDialog},
};
use crate::ui::theme::{ThemePreset, ThemeSettings, SETTINGS_STORAGE_KEY};

const LIST_HEIGHT: f32 = 180.0;
const NAME_FIELD_WIDTH: f32 = 120.0;
const NUMBER_FIELD_WIDTH: f32 = 56.0;
const CLEAR_LIST_LABEL: &str = "🗑";

const ROW_ACTIONS: [(Action, &str, &str); 4] = [
    (Action::Apply, "Apply", "Add the value to the selected monster's life"),
    (Action::Remove, "Remove", "Remove the selected monster"),
    (Action::Clone, "Clone", "Copy the selected monster under a new name"),
    (Action::ClearList, CLEAR_LIST_LABEL, "Remove every monster"),
];

pub struct MonsterTrackerApp {
    session: GuiSession,
    theme: ThemeSettings,
    applied_theme: Option<ThemeSettings>,
}

impl MonsterTrackerApp {
    pub fn new(theme: ThemeSettings) -> Self {
        Self {
            session: GuiSession::new(),
            theme,
            applied_theme: None,
        }
    }

    fn apply_theme_if_needed(&mut self, ctx: &egui::Context) {
        if self.applied_theme == Some(self.theme) {
            return;
        }
        self.theme.apply(ctx);
        self.applied_theme = Some(self.theme);
    }

    fn show_menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.menu_button("View", |ui| {
                    ui.label(egui::RichText::new("Theme").strong());
                    for preset in ThemePreset::ALL {
                        ui.radio_value(&mut self.theme.preset, preset, preset.label());
                    }
                    ui.separator();
                    ui.add(
                        egui::Slider::new(
                            &mut self.theme.text_scale,
                            ThemeSettings::text_scale_range(),
                        )
                        .text("Text scale"),
                    );
                });
            });
        });
    }

    fn show_main_panel(&mut self, ctx: &egui::Context, events: &mut Vec<UiEvent>) {
        let blocked = self.session.is_blocked();
        if !blocked && ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            events.push(UiEvent::ClearSelection);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(!blocked, |ui| {
                let tracker = self.session.tracker_mut();

                // Create row
                ui.horizontal(|ui| {
                    ui.label("Name:");
                    let name = ui.add(
                        egui::TextEdit::singleline(&mut tracker.form_mut().name)
                            .id_salt("name_field")
                            .desired_width(NAME_FIELD_WIDTH),
                    );
                    ui.label("Life:");
                    let life = ui.add(
                        egui::TextEdit::singleline(&mut tracker.form_mut().life)
                            .id_salt("life_field")
                            .desired_width(NUMBER_FIELD_WIDTH),
                    );
                    let enter_pressed = ui.input(|i| i.key_pressed(egui::Key::Enter));
                    let submitted = enter_pressed && (name.lost_focus() || life.lost_focus());
                    if ui.button("Create monster").clicked() || submitted {
                        events.push(UiEvent::Trigger(Action::Create));
                    }
                });

                ui.add_space(10.0);

                let rows = tracker.store().rows();
                let selected = tracker.selected();
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    egui::ScrollArea::vertical()
                        .id_salt("monster_list")
                        .auto_shrink([false, false])
                        .max_height(LIST_HEIGHT)
                        .show(ui, |ui| {
                            if rows.is_empty() {
                                ui.weak("No monsters yet.");
                            }
                            for (index, row) in rows.iter().enumerate() {
                                let row = ui.selectable_label(selected == Some(index), row.as_str());
                                if row.clicked() {
                                    events.push(UiEvent::SelectRow(index));
                                }
                            }
                        });
                });

                ui.add_space(10.0);

                // Control row: damage/heal and list actions
                ui.horizontal(|ui| {
                    ui.label("Value:");
                    let amount = ui.add(
                        egui::TextEdit::singleline(&mut tracker.form_mut().amount)
                            .id_salt("amount_field")
                            .desired_width(NUMBER_FIELD_WIDTH),
                    );
                    if amount.lost_focus()
                        && ui.input(|i| i.key_pressed(egui::Key::Enter))
                        && tracker.is_enabled(Action::Apply)
                    {
                        events.push(UiEvent::Trigger(Action::Apply));
                    }

                    for (action, label, hint) in ROW_ACTIONS {
                        let response = ui
                            .add_enabled(tracker.is_enabled(action), egui::Button::new(label))
                            .on_hover_text(hint);
                        if response.clicked() {
                            events.push(UiEvent::Trigger(action));
                        }
                    }
                });

                ui.add_space(10.0);
                show_status_line(ui, tracker.status());
            });
        });
    }

    fn show_notice(&self, ctx: &egui::Context, events: &mut Vec<UiEvent>) {
        let Some(notice) = self.session.current_notice() else {
            return;
        };

        modal_window(notice.title()).show(ctx, |ui| {
            ui.label(notice.message());
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                if ui.button("OK").clicked() {
                    events.push(UiEvent::NoticeDismissed);
                }
            });
        });
    }

    fn show_pending_dialog(&mut self, ctx: &egui::Context, events: &mut Vec<UiEvent>) {
        let Some(pending) = self.session.pending().cloned() else {
            return;
        };

        match pending {
            PendingDialog::Confirm { text, .. } => {
                modal_window(text.title).show(ctx, |ui| {
                    ui.label(text.message);
                    ui.add_space(8.0);
                    ui.horizontal(|ui| {
                        if ui.button("Yes").clicked() {
                            events.push(UiEvent::ConfirmAnswered(true));
                        }
                        if ui.button("No").clicked() {
                            events.push(UiEvent::ConfirmAnswered(false));
                        }
                    });
                });
            }
            PendingDialog::Prompt { text, .. } => {
                let tracker = self.session.tracker();
                let source = tracker
                    .selected()
                    .and_then(|index| tracker.store().get(index))
                    .map(ToString::to_string);
                let Some(input) = self.session.prompt_input_mut() else {
                    return;
                };
                modal_window(text.title).show(ctx, |ui| {
                    if let Some(source) = &source {
                        ui.weak(source.as_str());
                    }
                    ui.label(text.message);
                    let response = ui.add(
                        egui::TextEdit::singleline(&mut *input)
                            .id_salt("clone_name_field")
                            .desired_width(220.0),
                    );
                    if !response.has_focus() && input.is_empty() {
                        response.request_focus();
                    }
                    let submitted =
                        response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

                    ui.add_space(8.0);
                    ui.horizontal(|ui| {
                        if ui.button("OK").clicked() || submitted {
                            events.push(UiEvent::PromptAnswered(Some(input.clone())));
                        }
                        if ui.button("Cancel").clicked() {
                            events.push(UiEvent::PromptAnswered(None));
                        }
                    });
                });
            }
        }
    }
}

fn modal_window(title: &'static str) -> egui::Window<'static> {
    egui::Window::new(title)
        .id(egui::Id::new(("modal", title)))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
}

fn show_status_line(ui: &mut egui::Ui, status: &str) {
    egui::Frame::NONE
        .stroke(egui::Stroke::new(1.0, egui::Color32::GRAY))
        .inner_margin(egui::Margin::symmetric(8, 6))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                // Keep the line height stable while the status is still empty.
                let text = if status.is_empty() { " " } else { status };
                ui.add(egui::Label::new(text).truncate());
            });
        });
}

impl eframe::App for MonsterTrackerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_theme_if_needed(ctx);

        let mut events = Vec::new();
        self.show_menu_bar(ctx);
        self.show_main_panel(ctx, &mut events);
        self.show_notice(ctx, &mut events);
        self.show_pending_dialog(ctx, &mut events);

        for event in events {
            tracing::debug!(event = event.name(), "ui event");
            self.session.handle_event(event);
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        if let Some(serialized) = self.theme.to_storage_text() {
            storage.set_string(SETTINGS_STORAGE_KEY, serialized);
        }
    }
}

use std::collections::BTreeMap;

use eframe::egui;
use serde::{Deserialize, Serialize};

pub const SETTINGS_STORAGE_KEY: &str = "monster_tracker.settings";

const MIN_TEXT_SCALE: f32 = 0.8;
const MAX_TEXT_SCALE: f32 = 1.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThemePreset {
    Dark,
    Light,
}

impl ThemePreset {
    pub const ALL: [ThemePreset; 2] = [ThemePreset::Dark, ThemePreset::Light];

    pub fn label(self) -> &'static str {
        match self {
            ThemePreset::Dark => "Dark",
            ThemePreset::Light => "Light",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSettings {
    pub preset: ThemePreset,
    pub text_scale: f32,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            preset: ThemePreset::Dark,
            text_scale: 1.0,
        }
    }
}

impl ThemeSettings {
    pub fn text_scale_range() -> std::ops::RangeInclusive<f32> {
        MIN_TEXT_SCALE..=MAX_TEXT_SCALE
    }

    /// Restores settings saved by a previous run. Anything unreadable falls
    /// back to the defaults.
    pub fn from_storage_text(text: &str) -> Self {
        match serde_json::from_str::<ThemeSettings>(text) {
            Ok(settings) => settings.sanitized(),
            Err(err) => {
                tracing::warn!("discarding stored theme settings: {err}");
                Self::default()
            }
        }
    }

    pub fn to_storage_text(self) -> Option<String> {
        serde_json::to_string(&self).ok()
    }

    fn sanitized(mut self) -> Self {
        if !self.text_scale.is_finite() {
            self.text_scale = 1.0;
        }
        self.text_scale = self.text_scale.clamp(MIN_TEXT_SCALE, MAX_TEXT_SCALE);
        self
    }

    pub fn apply(self, ctx: &egui::Context) {
        let mut style = (*ctx.style()).clone();
        style.visuals = match self.preset {
            ThemePreset::Dark => egui::Visuals::dark(),
            ThemePreset::Light => egui::Visuals::light(),
        };
        style.text_styles = scaled_text_styles(self.text_scale);
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(10.0, 4.0);
        ctx.set_style(style);
    }
}

fn scaled_text_styles(text_scale: f32) -> BTreeMap<egui::TextStyle, egui::FontId> {
    let mut styles = egui::Style::default().text_styles;
    for font in styles.values_mut() {
        font.size *= text_scale;
    }
    styles
}

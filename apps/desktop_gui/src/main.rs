use std::path::PathBuf;

mod config;
mod controller;
mod ui;

use anyhow::Context;
use clap::Parser;
use eframe::egui;

use crate::config::Settings;
use crate::ui::{
    theme::{ThemeSettings, SETTINGS_STORAGE_KEY},
    MonsterTrackerApp,
};

const APP_ID: &str = "monster_tracker";

#[derive(Parser, Debug)]
#[command(name = "monster-tracker", about = "Track monster life points")]
struct Args {
    /// TOML settings file (defaults to ./monster_tracker.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Window title override
    #[arg(long)]
    title: Option<String>,
    /// tracing filter directive, e.g. `debug` or `tracker_core=debug`
    #[arg(long)]
    log_filter: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let mut settings = config::load_settings(args.config.as_deref())?;
    config::apply_cli_overrides(&mut settings, args.title, args.log_filter);

    tracing_subscriber::fmt()
        .with_env_filter(settings.log_filter.as_str())
        .init();
    tracing::info!(
        title = %settings.window_title,
        width = settings.window_width,
        height = settings.window_height,
        "starting monster tracker"
    );

    run_gui(&settings)
        .map_err(|e| anyhow::anyhow!("{e}"))
        .context("desktop gui exited with an error")
}

fn run_gui(settings: &Settings) -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(settings.window_title.clone())
            .with_inner_size([settings.window_width, settings.window_height])
            .with_resizable(settings.resizable),
        ..Default::default()
    };
    eframe::run_native(
        APP_ID,
        options,
        Box::new(|cc| {
            let theme = cc
                .storage
                .and_then(|storage| storage.get_string(SETTINGS_STORAGE_KEY))
                .map(|text| ThemeSettings::from_storage_text(&text))
                .unwrap_or_default();
            Ok(Box::new(MonsterTrackerApp::new(theme)))
        }),
    )
}

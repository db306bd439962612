//! NoteBoard Desktop Application
//!
//! A single window for jotting down, searching and deleting short notes.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod components;
mod state;
mod theme;
mod views;

use dioxus::desktop::{Config, WindowBuilder};

const DEFAULT_LOG_DIRECTIVE: &str = "noteboard=debug";

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    init_tracing();
    tracing::info!("Starting NoteBoard...");

    let window = WindowBuilder::new()
        .with_title("NoteBoard")
        .with_resizable(true);
    let config = Config::new().with_window(window);

    dioxus::LaunchBuilder::new()
        .with_cfg(config)
        .launch(app::App);
}

fn init_tracing() {
    let mut filter = tracing_subscriber::EnvFilter::from_default_env();
    match DEFAULT_LOG_DIRECTIVE.parse() {
        Ok(directive) => filter = filter.add_directive(directive),
        Err(e) => eprintln!("Invalid default log directive: {e}"),
    }

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

//! Main application component

use dioxus::prelude::*;

use noteboard_core::config::load_settings;
use noteboard_core::NoteBoard;

use crate::state::AppState;
use crate::theme::{resolve_theme, ResolvedTheme};
use crate::views::Home;

/// Root application component
#[component]
pub fn App() -> Element {
    // State signals
    let board = use_signal(NoteBoard::new);
    let settings = use_signal(load_settings);
    let theme = use_signal(|| resolve_theme(settings.peek().theme));

    use_hook(|| {
        tracing::info!(
            "Board mounted (theme: {:?}, preview: {} chars)",
            *theme.peek(),
            settings.peek().preview_chars
        );
    });

    use_context_provider(|| AppState {
        board,
        settings,
        theme,
    });

    let current_theme = theme();
    let colors = current_theme.palette();
    let current_settings = settings();
    let theme_attr = match current_theme {
        ResolvedTheme::Light => "light",
        ResolvedTheme::Dark => "dark",
    };

    rsx! {
        div {
            class: "app-container",
            "data-theme": "{theme_attr}",
            style: "
                min-height: 100vh;
                font-family: {current_settings.font_family}, system-ui, -apple-system, sans-serif;
                font-size: {current_settings.font_size}px;
                background: {colors.bg_primary};
                color: {colors.text_primary};
            ",
            Home {}
        }
    }
}

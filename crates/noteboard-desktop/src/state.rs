//! Application state management
//!
//! The board lives in a single signal shared through a Dioxus context
//! provider. Components never mutate it directly: they dispatch messages.

use dioxus::prelude::*;

use noteboard_core::models::{Note, Settings};
use noteboard_core::{Message, NoteBoard};

use crate::theme::ResolvedTheme;

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// Notes, draft, search query and selection
    pub board: Signal<NoteBoard>,
    /// Settings loaded at startup
    pub settings: Signal<Settings>,
    /// Resolved theme (light/dark based on settings and system preference)
    pub theme: Signal<ResolvedTheme>,
}

impl AppState {
    /// Route a UI event through the board reducer
    pub fn dispatch(&mut self, message: Message) {
        self.board.write().apply(message);
    }

    /// Notes that pass the current search query
    #[must_use]
    pub fn visible_notes(&self) -> Vec<Note> {
        self.board.read().visible_notes().cloned().collect()
    }

    /// Note open in the detail view
    #[must_use]
    pub fn selected_note(&self) -> Option<Note> {
        self.board.read().selected().cloned()
    }

    #[must_use]
    pub fn is_composing(&self) -> bool {
        self.board.read().is_composing()
    }
}

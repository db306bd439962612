//! Note detail component

use dioxus::prelude::*;

use noteboard_core::Message;

use crate::state::AppState;

/// Full view of the opened note with a delete action
#[component]
pub fn NoteDetail() -> Element {
    let mut state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let Some(note) = state.selected_note() else {
        return rsx! {};
    };
    let note_id = note.id;

    rsx! {
        div {
            class: "note-detail",
            style: "
                padding: 12px 16px;
                border: 1px solid {colors.border_light};
                border-radius: 8px;
                background: {colors.bg_secondary};
            ",

            if note.has_title() {
                h2 {
                    style: "font-size: 18px; font-weight: bold; margin: 0 0 4px 0;",
                    "{note.title}"
                }
            }

            p {
                style: "margin: 0 0 16px 0; white-space: pre-wrap;",
                "{note.content}"
            }

            button {
                class: "delete-note",
                onclick: move |_| {
                    tracing::debug!("Delete requested for note {}", note_id);
                    state.dispatch(Message::DeleteNote(note_id));
                },
                style: "
                    padding: 8px 16px;
                    border: none;
                    border-radius: 6px;
                    font-weight: bold;
                    cursor: pointer;
                    background: {colors.error};
                    color: #ffffff;
                ",
                "Delete"
            }
        }
    }
}

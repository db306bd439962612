//! Note card component

use dioxus::prelude::*;

use crate::state::AppState;

/// A single note row rendered in the note list.
#[component]
pub fn NoteCard(
    title: Option<String>,
    preview: String,
    is_selected: bool,
    onclick: EventHandler<MouseEvent>,
) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    let bg = if is_selected {
        colors.bg_tertiary
    } else {
        colors.bg_secondary
    };

    rsx! {
        li {
            class: if is_selected { "note-item selected" } else { "note-item" },
            style: "margin-bottom: 8px;",

            button {
                onclick: move |evt| onclick.call(evt),
                style: "
                    width: 100%;
                    text-align: left;
                    padding: 8px 12px;
                    border: 1px solid {colors.border_light};
                    border-radius: 8px;
                    cursor: pointer;
                    background: {bg};
                    color: {colors.text_primary};
                    transition: background 0.15s;
                ",

                if let Some(title) = title {
                    h2 {
                        class: "note-title",
                        style: "font-size: 18px; font-weight: bold; margin: 0 0 4px 0;",
                        "{title}"
                    }
                }

                div {
                    class: "note-preview",
                    style: "
                        font-size: 13px;
                        color: {colors.text_secondary};
                        overflow-wrap: anywhere;
                    ",
                    "{preview}"
                }
            }
        }
    }
}

//! Note editor component

use dioxus::prelude::*;

use noteboard_core::Message;

use crate::state::AppState;

/// Editor for the draft note, shown while composing
#[component]
pub fn NoteEditor() -> Element {
    let mut state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let draft = state.board.read().draft().clone();

    let field_style = format!(
        "
            width: 100%;
            padding: 8px;
            border: 1px solid {};
            border-radius: 8px;
            font-family: inherit;
            font-size: 14px;
            background: {};
            color: {};
            outline: none;
            box-sizing: border-box;
        ",
        colors.border, colors.bg_primary, colors.text_primary
    );

    rsx! {
        div {
            class: "note-editor",
            style: "display: flex; flex-direction: column; gap: 8px;",

            input {
                r#type: "text",
                placeholder: "Note title (optional)",
                value: "{draft.title}",
                oninput: move |evt| {
                    state.dispatch(Message::SetDraftTitle(evt.value()));
                },
                style: "{field_style}",
            }

            textarea {
                class: "editor-textarea",
                placeholder: "Type your note here",
                value: "{draft.content}",
                oninput: move |evt| {
                    state.dispatch(Message::SetDraftContent(evt.value()));
                },
                style: "{field_style} min-height: 120px; resize: vertical; line-height: 1.6;",
            }

            div {
                style: "display: flex; justify-content: space-between;",

                button {
                    class: "save-note",
                    onclick: move |_| state.dispatch(Message::SaveDraft),
                    style: "
                        padding: 8px 16px;
                        border: none;
                        border-radius: 6px;
                        font-weight: bold;
                        cursor: pointer;
                        background: {colors.accent};
                        color: {colors.accent_text};
                    ",
                    "Save"
                }

                button {
                    class: "discard-note",
                    onclick: move |_| state.dispatch(Message::DiscardDraft),
                    style: "
                        padding: 8px 16px;
                        border: none;
                        border-radius: 6px;
                        font-weight: bold;
                        cursor: pointer;
                        background: {colors.error};
                        color: #ffffff;
                    ",
                    "Discard"
                }
            }
        }
    }
}

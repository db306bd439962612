//! Toolbar component: search field and create button

use dioxus::prelude::*;

use noteboard_core::Message;

use crate::state::AppState;

/// Toolbar with the live search input and the create action
#[component]
pub fn Toolbar() -> Element {
    let mut state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let query = state.board.read().search_query().to_string();

    let begin_compose = move |_| {
        tracing::debug!("Create button pressed");
        state.dispatch(Message::BeginCompose);
    };

    rsx! {
        div {
            class: "toolbar",
            style: "display: flex; gap: 8px; align-items: center;",

            input {
                r#type: "search",
                placeholder: "Search notes",
                value: "{query}",
                oninput: move |evt| {
                    state.dispatch(Message::SetSearchQuery(evt.value()));
                },
                style: "
                    flex: 1;
                    padding: 8px 12px;
                    border: 1px solid {colors.border};
                    border-radius: 8px;
                    font-size: 14px;
                    background: {colors.bg_primary};
                    color: {colors.text_primary};
                    outline: none;
                ",
            }

            button {
                class: "create-note",
                title: "New note",
                onclick: begin_compose,
                style: "
                    padding: 8px 16px;
                    border: none;
                    border-radius: 8px;
                    font-weight: bold;
                    font-size: 18px;
                    cursor: pointer;
                    background: {colors.accent};
                    color: {colors.accent_text};
                ",
                "+"
            }
        }
    }
}

//! Home view - the board screen

use dioxus::prelude::*;

use crate::components::{NoteDetail, NoteEditor, NoteList, Toolbar};
use crate::state::AppState;

/// Home view component
///
/// Editor and detail view are independent: both can be open at once.
#[component]
pub fn Home() -> Element {
    let state = use_context::<AppState>();
    let is_composing = state.is_composing();
    let has_selection = state.selected_note().is_some();

    rsx! {
        div {
            class: "home-container",
            style: "
                max-width: 768px;
                margin: 0 auto;
                padding: 16px;
                display: flex;
                flex-direction: column;
                gap: 16px;
            ",

            Toolbar {}

            if is_composing {
                NoteEditor {}
            }

            if has_selection {
                NoteDetail {}
            }

            NoteList {}
        }
    }
}

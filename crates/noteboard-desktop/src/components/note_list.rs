//! Note list component

use dioxus::prelude::*;

use noteboard_core::models::Note;
use noteboard_core::Message;

use super::NoteCard;
use crate::state::AppState;

/// Notes that match the search query, in insertion order
#[component]
pub fn NoteList() -> Element {
    let mut state = use_context::<AppState>();
    let visible_notes = state.visible_notes();
    let total_notes = state.board.read().notes().len();
    let selected = state.selected_note();
    let preview_chars = (state.settings)().preview_chars;
    let colors = (state.theme)().palette();
    let empty_message = empty_list_message(total_notes);

    rsx! {
        ul {
            class: "note-list",
            style: "list-style: none; margin: 0; padding: 0;",

            if visible_notes.is_empty() {
                li {
                    style: "
                        padding: 20px;
                        text-align: center;
                        color: {colors.text_muted};
                    ",
                    "{empty_message}"
                }
            } else {
                for (position, note) in visible_notes.into_iter().enumerate() {
                    {
                        // Ids can repeat after deletions, so the key also carries the position.
                        let key = format!("{position}-{}", note.id);
                        let is_selected = is_open_note(selected.as_ref(), &note);
                        let preview = note.preview(preview_chars);
                        let title = note.has_title().then(|| note.title.clone());

                        rsx! {
                            NoteCard {
                                key: "{key}",
                                title,
                                preview,
                                is_selected,
                                onclick: move |_| {
                                    state.dispatch(Message::OpenNote(note.clone()));
                                },
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Placeholder for an empty list: either the board is empty or the search
/// filtered everything out.
const fn empty_list_message(total_notes: usize) -> &'static str {
    if total_notes == 0 {
        "No notes yet"
    } else {
        "No matching notes"
    }
}

/// Highlight only the exact note that is open; ids alone can repeat.
fn is_open_note(selected: Option<&Note>, note: &Note) -> bool {
    selected == Some(note)
}

#[cfg(test)]
mod tests {
    use super::*;
    use noteboard_core::NoteBoard;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_message_depends_on_board_contents() {
        assert_eq!(empty_list_message(0), "No notes yet");
        assert_eq!(empty_list_message(3), "No matching notes");
    }

    #[test]
    fn search_without_matches_reports_no_matching_notes() {
        let mut board = NoteBoard::new();
        board.update_draft_content("milk");
        board.save_draft();
        board.update_search_query("bread");

        assert_eq!(board.visible_notes().count(), 0);
        assert_eq!(empty_list_message(board.notes().len()), "No matching notes");
    }

    #[test]
    fn only_the_open_note_is_highlighted_when_ids_repeat() {
        let mut board = NoteBoard::new();
        board.update_draft_content("first");
        board.save_draft();
        board.update_draft_content("second");
        board.save_draft();
        board.delete_note(board.notes()[0].id);
        board.update_draft_content("third");
        board.save_draft();

        let notes = board.notes().to_vec();
        assert_eq!(notes[0].id, notes[1].id);

        board.open_note(notes[1].clone());
        let highlighted: Vec<bool> = notes
            .iter()
            .map(|note| is_open_note(board.selected(), note))
            .collect();
        assert_eq!(highlighted, vec![false, true]);
    }
}
